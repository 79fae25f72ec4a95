//! XML generation for the OPF 2.0 package document
//!
//! Uses quick-xml to write a namespaced, indented `content.opf`.

use crate::error::PackageError;
use crate::types::{ManifestEntry, PackageDocument, SpineEntry};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

// XML Namespaces
pub const NS_OPF: &str = "http://www.idpf.org/2007/opf";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";

/// Package format version written on the root element
pub const OPF_VERSION: &str = "2.0";

/// Render a package document to pretty-printed XML
pub fn render_package(doc: &PackageDocument) -> Result<String, PackageError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_package(&mut writer, doc)?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_package<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &PackageDocument,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let identifier = doc.identifier.to_string();
    let mut package = BytesStart::new("package");
    package.push_attribute(("xmlns", NS_OPF));
    package.push_attribute(("xmlns:dc", NS_DC));
    package.push_attribute(("version", OPF_VERSION));
    package.push_attribute(("unique-identifier", identifier.as_str()));
    writer.write_event(Event::Start(package))?;

    write_metadata(writer, doc)?;
    write_manifest(writer, &doc.manifest)?;
    write_spine(writer, &doc.spine)?;

    writer.write_event(Event::End(BytesEnd::new("package")))?;
    Ok(())
}

/// Write the `<metadata>` block; empty fields still produce their element
///
/// The publication date is written as `dc:date`, the Dublin Core element for
/// it. Earlier generators of this layout wrote a non-standard `dc:published`.
fn write_metadata<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &PackageDocument,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("metadata")))?;

    let mut cover = BytesStart::new("meta");
    cover.push_attribute(("content", "cover-image"));
    cover.push_attribute(("name", "cover"));
    writer.write_event(Event::Empty(cover))?;

    let mut identifier = BytesStart::new("dc:identifier");
    identifier.push_attribute(("id", "bookid"));
    writer.write_event(Event::Start(identifier))?;
    writer.write_event(Event::Text(BytesText::new(&doc.identifier_urn())))?;
    writer.write_event(Event::End(BytesEnd::new("dc:identifier")))?;

    let metadata = &doc.metadata;
    write_text_element(writer, "dc:title", &metadata.title)?;
    for creator in &metadata.creators {
        write_text_element(writer, "dc:creator", creator)?;
    }
    write_text_element(writer, "dc:date", &metadata.date)?;
    write_text_element(writer, "dc:publisher", &metadata.publisher)?;

    writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    Ok(())
}

fn write_manifest<W: std::io::Write>(
    writer: &mut Writer<W>,
    manifest: &[ManifestEntry],
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("manifest")))?;
    for entry in manifest {
        let mut item = BytesStart::new("item");
        item.push_attribute(("id", entry.id.as_str()));
        item.push_attribute(("media-type", entry.media_type.as_str()));
        item.push_attribute(("href", entry.href.as_str()));
        writer.write_event(Event::Empty(item))?;
    }
    writer.write_event(Event::End(BytesEnd::new("manifest")))?;
    Ok(())
}

fn write_spine<W: std::io::Write>(
    writer: &mut Writer<W>,
    spine: &[SpineEntry],
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("spine")))?;
    for entry in spine {
        let mut itemref = BytesStart::new("itemref");
        itemref.push_attribute(("idref", entry.idref.as_str()));
        if !entry.linear {
            itemref.push_attribute(("linear", "no"));
        }
        writer.write_event(Event::Empty(itemref))?;
    }
    writer.write_event(Event::End(BytesEnd::new("spine")))?;
    Ok(())
}

/// Write a simple text element
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
