//! Indented KML serialisation backed by `quick-xml`.

use std::borrow::Cow;
use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

use super::{Document, Geometry, Placemark, Style};

/// Namespace of the `<kml>` root element.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

const INDENT_WIDTH: usize = 2;

/// Error raised while serialising a document.
#[derive(Debug, Error)]
pub enum KmlWriteError {
    /// The XML writer rejected an event or its sink failed.
    #[error("failed to write KML markup: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Flushing the sink failed.
    #[error("failed to flush KML output: {0}")]
    Io(#[from] io::Error),
}

/// Serialise `document` into `sink` as two-space indented KML.
///
/// The sink is flushed before returning.
///
/// # Examples
///
/// ```
/// use xctransfer_core::{Document, write_kml};
///
/// let mut buffer = Vec::new();
/// write_kml(&Document::new(), &mut buffer).unwrap();
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(text.contains("<Style id=\"wayPoint\">"));
/// ```
pub fn write_kml<W: Write>(document: &Document, sink: &mut W) -> Result<(), KmlWriteError> {
    let mut writer = KmlWriter {
        xml: Writer::new_with_indent(&mut *sink, b' ', INDENT_WIDTH),
    };
    writer.document(document)?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

struct KmlWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> KmlWriter<W> {
    fn document(&mut self, document: &Document) -> Result<(), quick_xml::Error> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.xml.write_event(Event::Start(
            BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)]),
        ))?;
        self.start("Document")?;
        for style in document.styles() {
            self.style(style)?;
        }
        for placemark in document.placemarks() {
            self.placemark(placemark)?;
        }
        self.end("Document")?;
        self.end("kml")
    }

    fn style(&mut self, style: &Style) -> Result<(), quick_xml::Error> {
        self.xml.write_event(Event::Start(
            BytesStart::new("Style").with_attributes([("id", style.id.as_str())]),
        ))?;
        if let Some(line) = style.line {
            self.start("LineStyle")?;
            self.text_element("color", &line.color.to_string())?;
            self.text_element("width", &line.width.to_string())?;
            self.end("LineStyle")?;
        }
        if let Some(poly) = style.poly {
            self.start("PolyStyle")?;
            self.text_element("color", &poly.color.to_string())?;
            self.end("PolyStyle")?;
        }
        if let Some(icon) = style.icon {
            self.start("IconStyle")?;
            self.text_element("color", &icon.color.to_string())?;
            self.end("IconStyle")?;
        }
        self.end("Style")
    }

    fn placemark(&mut self, placemark: &Placemark) -> Result<(), quick_xml::Error> {
        self.start("Placemark")?;
        self.text_element("name", &placemark.name)?;
        self.text_element("styleUrl", &placemark.style.url())?;
        let tag = match placemark.geometry {
            Geometry::LineString(_) => "LineString",
            Geometry::Point(_) => "Point",
        };
        self.start(tag)?;
        self.text_element("coordinates", &coordinates(&placemark.geometry))?;
        self.end(tag)?;
        self.end("Placemark")
    }

    fn start(&mut self, name: &str) -> Result<(), quick_xml::Error> {
        self.xml.write_event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), quick_xml::Error> {
        self.xml.write_event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), quick_xml::Error> {
        self.start(name)?;
        self.xml
            .write_event(Event::Text(BytesText::new(&xml_chars(text))))?;
        self.end(name)
    }
}

/// Replace characters XML 1.0 does not allow with U+FFFD.
fn xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

/// `lon,lat` tuples separated by spaces, each value in shortest round-trip
/// form.
fn coordinates(geometry: &Geometry) -> String {
    geometry
        .coords()
        .iter()
        .map(|coord| format!("{},{}", coord.x, coord.y))
        .collect::<Vec<_>>()
        .join(" ")
}
