#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

/// Every entry of a `.pptx`, by name.
pub fn read_package(bytes: &[u8]) -> BTreeMap<String, Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entries = BTreeMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        entries.insert(file.name().to_string(), data);
    }
    entries
}

pub fn read_package_file(path: &Path) -> BTreeMap<String, Vec<u8>> {
    read_package(&std::fs::read(path).unwrap())
}

/// Shapes and run texts of one XML part.
#[derive(Debug, Default)]
pub struct PartSummary {
    pub text_shapes: usize,
    pub pictures: usize,
    pub texts: Vec<String>,
    pub sizes: Vec<u32>,
}

impl PartSummary {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }
}

/// Parse a part, failing the test if it is not well-formed XML.
pub fn summarize(xml: &[u8]) -> PartSummary {
    let text = std::str::from_utf8(xml).unwrap();
    let mut reader = Reader::from_str(text);
    let mut summary = PartSummary::default();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"p:sp" => summary.text_shapes += 1,
                b"p:pic" => summary.pictures += 1,
                b"a:t" => {
                    in_text = true;
                    summary.texts.push(String::new());
                },
                b"a:rPr" => push_size(&e, &mut summary),
                _ => {},
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"a:rPr" {
                    push_size(&e, &mut summary);
                }
            },
            Ok(Event::Text(t)) if in_text => {
                push_text(&mut summary, &String::from_utf8_lossy(&t));
            },
            Ok(Event::GeneralRef(r)) if in_text => {
                let name = String::from_utf8_lossy(&r).into_owned();
                let resolved = resolve_predefined_entity(&name)
                    .unwrap_or_else(|| panic!("unexpected entity &{};", name));
                push_text(&mut summary, resolved);
            },
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"a:t" {
                    in_text = false;
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
        }
    }
    summary
}

fn push_text(summary: &mut PartSummary, text: &str) {
    if let Some(last) = summary.texts.last_mut() {
        last.push_str(text);
    }
}

fn push_size(e: &quick_xml::events::BytesStart<'_>, summary: &mut PartSummary) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"sz" {
            let value = String::from_utf8_lossy(&attr.value).into_owned();
            summary.sizes.push(value.parse().unwrap());
        }
    }
}

/// A PNG of the given pixel size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image::RgbImage::new(width, height)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
