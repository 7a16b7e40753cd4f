use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::document::{Document, Message};

/// Serialize a catalog to the canonical TS layout.
///
/// The output matches what Qt's lupdate emits for these files byte for byte:
/// XML declaration, `<!DOCTYPE TS>`, contexts at column 0, `<name>` and
/// `<message>` indented four spaces, message children eight, and a `type`
/// attribute on `<translation>` only for non-finished states. Parsing the
/// result yields the input document back.
pub fn write_ts(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    if let Some(version) = &doc.version {
        push_attr(&mut out, "version", version);
    }
    if let Some(language) = &doc.language {
        push_attr(&mut out, "language", language);
    }
    if let Some(source_language) = &doc.source_language {
        push_attr(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &doc.contexts {
        out.push_str("<context>\n");
        out.push_str("    <name>");
        out.push_str(&escape_text(&context.name));
        out.push_str("</name>\n");
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

pub fn write_ts_file(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, write_ts(doc))
        .with_context(|| format!("Failed to write catalog file: {:?}", path))
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message>\n");
    for location in &message.locations {
        out.push_str("        <location");
        push_attr(out, "filename", &location.filename);
        if let Some(line) = location.line {
            push_attr(out, "line", &line.to_string());
        }
        out.push_str("/>\n");
    }

    out.push_str("        <source>");
    out.push_str(&escape_text(&message.source));
    out.push_str("</source>\n");

    if let Some(comment) = &message.comment {
        out.push_str("        <comment>");
        out.push_str(&escape_text(comment));
        out.push_str("</comment>\n");
    }
    if let Some(extra_comment) = &message.extra_comment {
        out.push_str("        <extracomment>");
        out.push_str(&escape_text(extra_comment));
        out.push_str("</extracomment>\n");
    }
    if let Some(translator_comment) = &message.translator_comment {
        out.push_str("        <translatorcomment>");
        out.push_str(&escape_text(translator_comment));
        out.push_str("</translatorcomment>\n");
    }

    out.push_str("        <translation");
    if let Some(state) = message.translation.state.as_attr() {
        push_attr(out, "type", state);
    }
    out.push('>');
    out.push_str(&escape_text(&message.translation.text));
    out.push_str("</translation>\n");
    out.push_str("    </message>\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_text(value));
    out.push('"');
}

/// Escape text the way lupdate does: the five XML specials plus U+00A0,
/// which Qt writes numerically so non-breaking spaces stay visible in
/// diffs.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\u{a0}' => escaped.push_str("&#xa0;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
