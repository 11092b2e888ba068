//! Streaming reader for WordPress XML exports
//!
//! Walks the RSS document with quick-xml and yields one [`SourceRecord`] per
//! `<item>`, in document order, without loading the whole export.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::record::{normalize_slug, parse_post_date, CategoryLabel, SourceRecord};
use crate::error::{Error, Result};

const ITEM: &[u8] = b"item";
const CATEGORY: &[u8] = b"category";

/// Item children the extractor cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PostName,
    Title,
    PostDate,
    Creator,
    Content,
    Category,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"wp:post_name" => Some(Field::PostName),
            b"title" => Some(Field::Title),
            b"wp:post_date" => Some(Field::PostDate),
            b"dc:creator" => Some(Field::Creator),
            b"content:encoded" => Some(Field::Content),
            CATEGORY => Some(Field::Category),
            _ => None,
        }
    }
}

/// Raw field values collected while inside an `<item>`
#[derive(Debug, Default)]
struct ItemBuilder {
    post_name: Option<String>,
    title: Option<String>,
    post_date: Option<String>,
    creator: Option<String>,
    content: Option<String>,
    categories: Vec<CategoryLabel>,
    /// Element depth below `<item>`
    depth: usize,
    /// Field being captured and the depth it started at
    capture: Option<(Field, usize)>,
    text: String,
}

impl ItemBuilder {
    fn start(&mut self, element: &BytesStart) {
        self.depth += 1;
        if self.capture.is_some() || self.depth != 1 {
            return;
        }
        if let Some(field) = Field::from_name(element.name().as_ref()) {
            if field == Field::Category {
                self.categories.push(category_label(element));
            } else {
                self.capture = Some((field, self.depth));
                self.text.clear();
            }
        }
    }

    /// Self-closing element, e.g. `<wp:post_name/>`
    fn empty(&mut self, element: &BytesStart) {
        if self.capture.is_some() || self.depth != 0 {
            return;
        }
        match Field::from_name(element.name().as_ref()) {
            Some(Field::Category) => self.categories.push(category_label(element)),
            Some(field) => self.assign(field, String::new()),
            None => {}
        }
    }

    fn end(&mut self) {
        if let Some((field, depth)) = self.capture {
            if depth == self.depth {
                let text = std::mem::take(&mut self.text);
                self.assign(field, text);
                self.capture = None;
            }
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn text(&mut self, text: &str) {
        if self.capture.is_some() {
            self.text.push_str(text);
        }
    }

    /// First occurrence wins
    fn assign(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::PostName => &mut self.post_name,
            Field::Title => &mut self.title,
            Field::PostDate => &mut self.post_date,
            Field::Creator => &mut self.creator,
            Field::Content => &mut self.content,
            Field::Category => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn build(self) -> SourceRecord {
        let publish_timestamp = self.post_date.as_deref().and_then(|raw| {
            let parsed = parse_post_date(raw);
            if parsed.is_none() {
                debug!("Unparseable post date {:?}", raw);
            }
            parsed
        });

        SourceRecord {
            slug: self.post_name.as_deref().map(normalize_slug),
            display_title: self.title,
            publish_timestamp,
            author_name: self.creator,
            categories: self.categories,
            body_markup: self.content,
        }
    }
}

fn category_label(element: &BytesStart) -> CategoryLabel {
    let mut domain = String::new();
    let mut nicename = String::new();

    for attr in element.attributes().filter_map(|a| a.ok()) {
        let value = attr
            .unescape_value()
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        match attr.key.as_ref() {
            b"domain" => domain = value,
            b"nicename" => nicename = value,
            _ => {}
        }
    }

    CategoryLabel::new(domain, nicename)
}

/// Lazy, single-pass iterator over the posts of an export
pub struct ExportReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    finished: bool,
}

impl ExportReader<BufReader<File>> {
    /// Open an export file. A missing file is reported as [`Error::InputNotFound`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::InputNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ExportReader<R> {
    pub fn from_reader(source: R) -> Self {
        ExportReader {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Advance to the next `<item>` and collect it
    fn next_record(&mut self) -> Result<Option<SourceRecord>> {
        let mut item: Option<ItemBuilder> = None;

        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|e| xml_error(&self.reader, e.to_string()))?;

            let Some(builder) = item.as_mut() else {
                match event {
                    Event::Start(e) if e.name().as_ref() == ITEM => {
                        item = Some(ItemBuilder::default());
                    }
                    Event::Empty(e) if e.name().as_ref() == ITEM => {
                        return Ok(Some(ItemBuilder::default().build()));
                    }
                    Event::Eof => return Ok(None),
                    _ => {}
                }
                continue;
            };

            let item_closed = match event {
                Event::Start(e) => {
                    builder.start(&e);
                    false
                }
                Event::Empty(e) => {
                    builder.empty(&e);
                    false
                }
                Event::End(_) if builder.depth == 0 => true,
                Event::End(_) => {
                    builder.end();
                    false
                }
                Event::Text(e) => {
                    match e.unescape() {
                        Ok(text) => builder.text(&text),
                        // Stray HTML entities such as &nbsp; are kept as written
                        Err(_) => builder.text(&String::from_utf8_lossy(&e)),
                    }
                    false
                }
                Event::CData(e) => {
                    builder.text(&String::from_utf8_lossy(&e));
                    false
                }
                Event::Eof => {
                    return Err(xml_error(
                        &self.reader,
                        "unexpected end of document inside <item>",
                    ));
                }
                _ => false,
            };

            if item_closed {
                return Ok(item.take().map(ItemBuilder::build));
            }
        }
    }
}

fn xml_error<R>(reader: &Reader<R>, message: impl Into<String>) -> Error {
    Error::Xml {
        position: reader.buffer_position() as u64,
        message: message.into(),
    }
}

impl<R: BufRead> Iterator for ExportReader<R> {
    type Item = Result<SourceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
