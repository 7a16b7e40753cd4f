use std::{fs, mem, path::Path};

use anyhow::{Context as _, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::{Context, Document, Location, Message, TranslationState};

/// Which text-bearing element is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
}

pub fn parse_ts_file(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_ts(&content).with_context(|| format!("Failed to parse catalog file: {:?}", path))
}

/// Parse a TS catalog from its raw text.
///
/// Strict about structure: unknown elements, plural (`numerus`) messages,
/// messages without `<source>`, and contexts without `<name>` are errors.
/// A message without a `<translation>` element is treated as empty and
/// unfinished. Entity references in text are decoded, so embedded markup
/// arrives as literal `<a href='…'>` strings.
pub fn parse_ts(content: &str) -> Result<Document> {
    let mut reader = Reader::from_str(content);
    // Byte offsets of line starts, for line numbers in messages and errors.
    let line_index = build_line_index(content);

    let mut doc = Document::default();
    let mut in_ts = false;
    let mut current_context: Option<Context> = None;
    let mut current_message: Option<Message> = None;
    let mut saw_source = false;
    let mut saw_translation = false;
    let mut leaf: Option<Leaf> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event()?;
        let line = offset_to_line(&line_index, reader.buffer_position() as usize);
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"TS" => {
                    if in_ts {
                        bail!("nested <TS> element at line {}", line);
                    }
                    in_ts = true;
                    read_ts_attributes(&e, &mut doc)?;
                }
                b"context" => {
                    if !in_ts {
                        bail!("<context> outside <TS> at line {}", line);
                    }
                    if current_context.is_some() {
                        bail!("nested <context> element at line {}", line);
                    }
                    current_context = Some(Context::default());
                }
                b"name" => {
                    if current_context.is_none() || current_message.is_some() {
                        bail!("unexpected <name> at line {}", line);
                    }
                    leaf = Some(Leaf::ContextName);
                }
                b"message" => {
                    if current_context.is_none() {
                        bail!("<message> outside <context> at line {}", line);
                    }
                    if current_message.is_some() {
                        bail!("nested <message> element at line {}", line);
                    }
                    if e.try_get_attribute("numerus")?.is_some() {
                        bail!("plural (numerus) messages are not supported (line {})", line);
                    }
                    current_message = Some(Message {
                        line,
                        ..Message::default()
                    });
                    saw_source = false;
                    saw_translation = false;
                }
                b"location" => {
                    let message = current_message
                        .as_mut()
                        .with_context(|| format!("<location> outside <message> at line {}", line))?;
                    message.locations.push(read_location(&e)?);
                }
                b"source" | b"comment" | b"extracomment" | b"translatorcomment"
                | b"translation" => {
                    let message = current_message.as_mut().with_context(|| {
                        format!(
                            "<{}> outside <message> at line {}",
                            String::from_utf8_lossy(e.name().as_ref()),
                            line
                        )
                    })?;
                    let which = match e.name().as_ref() {
                        b"source" => Leaf::Source,
                        b"comment" => Leaf::Comment,
                        b"extracomment" => Leaf::ExtraComment,
                        b"translatorcomment" => Leaf::TranslatorComment,
                        _ => Leaf::Translation,
                    };
                    if which == Leaf::Translation {
                        saw_translation = true;
                        read_translation_state(&e, message, line)?;
                    }
                    leaf = Some(which);
                }
                other => bail!(
                    "unsupported element <{}> at line {}",
                    String::from_utf8_lossy(other),
                    line
                ),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"TS" => {
                    if in_ts {
                        bail!("nested <TS> element at line {}", line);
                    }
                    in_ts = true;
                    read_ts_attributes(&e, &mut doc)?;
                }
                b"location" => {
                    let message = current_message
                        .as_mut()
                        .with_context(|| format!("<location> outside <message> at line {}", line))?;
                    message.locations.push(read_location(&e)?);
                }
                b"translation" => {
                    let message = current_message.as_mut().with_context(|| {
                        format!("<translation> outside <message> at line {}", line)
                    })?;
                    saw_translation = true;
                    read_translation_state(&e, message, line)?;
                }
                b"source" => {
                    let _ = current_message
                        .as_mut()
                        .with_context(|| format!("<source> outside <message> at line {}", line))?;
                    saw_source = true;
                }
                b"comment" | b"extracomment" | b"translatorcomment" => {
                    let message = current_message.as_mut().with_context(|| {
                        format!("comment element outside <message> at line {}", line)
                    })?;
                    assign_comment(message, e.name().as_ref(), String::new());
                }
                b"message" => bail!("message without <source> at line {}", line),
                b"context" => bail!("context without a <name> at line {}", line),
                other => bail!(
                    "unsupported element <{}> at line {}",
                    String::from_utf8_lossy(other),
                    line
                ),
            },
            Event::Text(e) => {
                let value = e.unescape()?;
                if leaf.is_some() {
                    text.push_str(&value);
                } else if !value.trim().is_empty() {
                    bail!("unexpected text content at line {}", line);
                }
            }
            Event::CData(e) => {
                if leaf.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"TS" | b"location" => {}
                b"context" => {
                    let context = current_context
                        .take()
                        .with_context(|| format!("unexpected </context> at line {}", line))?;
                    if context.name.is_empty() {
                        bail!("context without a <name> ending at line {}", line);
                    }
                    doc.contexts.push(context);
                }
                b"message" => {
                    let mut message = current_message
                        .take()
                        .with_context(|| format!("unexpected </message> at line {}", line))?;
                    if !saw_source {
                        bail!("message without <source> ending at line {}", line);
                    }
                    // lupdate always writes <translation>; a hand-edited file
                    // that omits it gets an empty, unfinished translation.
                    if !saw_translation {
                        message.translation.state = TranslationState::Unfinished;
                    }
                    current_context
                        .as_mut()
                        .expect("message end inside context")
                        .messages
                        .push(message);
                }
                _ => {
                    let value = mem::take(&mut text);
                    match leaf.take() {
                        Some(Leaf::ContextName) => {
                            current_context
                                .as_mut()
                                .expect("name end inside context")
                                .name = value;
                        }
                        Some(other) => {
                            let message = current_message
                                .as_mut()
                                .expect("text element end inside message");
                            match other {
                                Leaf::Source => {
                                    message.source = value;
                                    saw_source = true;
                                }
                                Leaf::Comment => message.comment = Some(value),
                                Leaf::ExtraComment => message.extra_comment = Some(value),
                                Leaf::TranslatorComment => {
                                    message.translator_comment = Some(value)
                                }
                                Leaf::Translation => message.translation.text = value,
                                Leaf::ContextName => unreachable!(),
                            }
                        }
                        None => bail!(
                            "unexpected </{}> at line {}",
                            String::from_utf8_lossy(e.name().as_ref()),
                            line
                        ),
                    }
                }
            },
            Event::Eof => break,
            // XML declaration, <!DOCTYPE TS>, comments, processing instructions
            _ => {}
        }
    }

    if !in_ts {
        bail!("missing <TS> root element");
    }
    if current_context.is_some() || current_message.is_some() || leaf.is_some() {
        bail!("unexpected end of file inside catalog");
    }

    Ok(doc)
}

fn read_ts_attributes(e: &BytesStart, doc: &mut Document) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"version" => doc.version = Some(value),
            b"language" => doc.language = Some(value),
            b"sourcelanguage" => doc.source_language = Some(value),
            _ => {}
        }
    }
    Ok(())
}

fn read_translation_state(e: &BytesStart, message: &mut Message, line: usize) -> Result<()> {
    if let Some(attr) = e.try_get_attribute("type")? {
        let value = attr.unescape_value()?;
        message.translation.state = TranslationState::from_attr(&value)
            .with_context(|| format!("unknown translation type \"{}\" at line {}", value, line))?;
    }
    Ok(())
}

fn read_location(e: &BytesStart) -> Result<Location> {
    let mut filename = None;
    let mut line = None;
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"filename" => filename = Some(value.into_owned()),
            b"line" => {
                line = Some(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("invalid location line \"{}\"", value))?,
                )
            }
            _ => {}
        }
    }
    let filename = filename.context("<location> without a filename attribute")?;
    Ok(Location { filename, line })
}

fn assign_comment(message: &mut Message, name: &[u8], value: String) {
    match name {
        b"comment" => message.comment = Some(value),
        b"extracomment" => message.extra_comment = Some(value),
        b"translatorcomment" => message.translator_comment = Some(value),
        _ => unreachable!(),
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub(crate) fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
pub(crate) fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}
