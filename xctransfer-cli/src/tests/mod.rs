//! Shared test harness modules for the xctransfer CLI.

use super::*;

mod helpers;
