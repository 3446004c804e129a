//! Test helpers for building share-data fixtures and output directories.

use super::*;
use tempfile::TempDir;
use xctransfer_core::test_support::{Dataset, write_sqlite_database};

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace path");
        std::fs::create_dir(root.join("out")).expect("create output dir");
        Self { _dir: dir, root }
    }

    pub(super) fn with_dataset(dataset: &Dataset) -> Self {
        let workspace = Self::new();
        workspace.write_dataset(dataset);
        workspace
    }

    pub(super) fn write_dataset(&self, dataset: &Dataset) {
        write_sqlite_database(self.database().as_std_path(), dataset).expect("persist database");
    }

    pub(super) fn database(&self) -> Utf8PathBuf {
        self.root.join("ShareData")
    }

    pub(super) fn output_dir(&self) -> Utf8PathBuf {
        self.root.join("out")
    }

    pub(super) fn cli(&self) -> Cli {
        Cli {
            input: Some(self.database()),
            output: Some(self.output_dir()),
        }
    }

    pub(super) fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir().as_std_path())
            .expect("list output dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .into_string()
                    .expect("utf-8 name")
            })
            .collect();
        names.sort();
        names
    }
}
