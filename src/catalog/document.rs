//! In-memory model of a Qt Linguist TS catalog.
//!
//! One [`Document`] per locale file, holding named [`Context`]s, each with an
//! ordered list of [`Message`]s. Order is preserved through parse and
//! serialize so a rewritten catalog diffs cleanly.

/// Lifecycle state of a translation, from the `type` attribute on
/// `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationState {
    /// No `type` attribute: the translation is done.
    #[default]
    Finished,
    /// Not yet translated (or translated but unreviewed).
    Unfinished,
    /// The source string disappeared from the host application.
    Vanished,
    /// Older spelling of vanished, still emitted by some tool versions.
    Obsolete,
}

impl TranslationState {
    /// Attribute value as written in the file, `None` for the default state.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationState::Finished => None,
            TranslationState::Unfinished => Some("unfinished"),
            TranslationState::Vanished => Some("vanished"),
            TranslationState::Obsolete => Some("obsolete"),
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationState::Unfinished),
            "vanished" => Some(TranslationState::Vanished),
            "obsolete" => Some(TranslationState::Obsolete),
            _ => None,
        }
    }

    /// Vanished and obsolete entries are leftovers from removed source
    /// strings; they are ignored by lookup and removed by `clean`.
    pub fn is_stale(&self) -> bool {
        matches!(self, TranslationState::Vanished | TranslationState::Obsolete)
    }
}

/// Advisory origin reference into the host application's display code.
///
/// Maintenance metadata only; the host never reads these at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: Option<u32>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// Localized text plus its lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub text: String,
    pub state: TranslationState,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: TranslationState::Finished,
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: TranslationState::Unfinished,
        }
    }
}

/// One translation entry: a source string paired with its localized
/// rendering for this catalog's locale.
///
/// `source` and `translation.text` may embed positional placeholders
/// (`%1`, `%2`, ...) and inline markup; both are plain text here, resolved
/// by the host's text widget at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub locations: Vec<Location>,
    pub source: String,
    /// Disambiguation comment from the developer (part of the lookup key in
    /// Qt proper; carried verbatim here).
    pub comment: Option<String>,
    /// `//:` extra comment from the source code.
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    /// 1-based line of the `<message>` element in the catalog file.
    /// Set by the reader; 0 for messages built in memory.
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn is_stale(&self) -> bool {
        self.translation.state.is_stale()
    }
}

/// A named grouping of related UI strings, typically one screen or
/// component of the host application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A whole locale catalog: the parsed form of one `.ts` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// TS format version, e.g. `2.1`.
    pub version: Option<String>,
    /// Locale identifier from the `language` attribute, e.g. `fr_FR`.
    pub language: Option<String>,
    /// Optional `sourcelanguage` attribute.
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Document {
    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Iterate `(context_name, message)` pairs in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }
}
