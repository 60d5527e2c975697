//! Order-preserving model of the game's `settings.ini`.
//!
//! The file is a flat list of `[section]` headers followed by `key=value`
//! lines. Everything the tokenizer does not understand (blank lines, comments,
//! stray text, repeated keys) is kept verbatim so that an untouched document
//! serializes back to the exact text it was parsed from. Line endings are the
//! only thing that is not preserved: the editable form always uses CRLF and the
//! on-disk form always uses LF.

use std::fmt;

pub const EDITABLE_LINE_ENDING: &str = "\r\n";

/// Convert `\r\n` and lone `\r` to `\n`, leaving every other character alone.
pub fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

/// A single line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An addressable `key=value` pair.
    Entry(Entry),
    /// Anything else, kept as-is.
    Verbatim(String),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Entry(entry) => write!(f, "{entry}"),
            Line::Verbatim(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Text before the first `=`, exactly as written.
    raw_key: String,
    /// Text after the first `=`, exactly as written.
    value: String,
}

impl Entry {
    pub fn new(key: &str, value: &str) -> Self {
        Entry {
            raw_key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        self.raw_key.trim()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.raw_key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// `None` for the lines that precede the first header.
    name: Option<String>,
    header: Option<String>,
    lines: Vec<Line>,
}

impl Section {
    fn leading() -> Self {
        Section {
            name: None,
            header: None,
            lines: Vec::new(),
        }
    }

    fn named(name: &str) -> Self {
        Section {
            name: Some(name.to_string()),
            header: Some(format!("[{name}]")),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry(entry) => Some(entry),
            Line::Verbatim(_) => None,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|entry| entry.key() == key)
            .map(Entry::value)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.lines.iter_mut().find_map(|line| match line {
            Line::Entry(entry) if entry.key() == key => Some(entry),
            _ => None,
        })
    }

    fn has_key(&self, key: &str) -> bool {
        self.entries().any(|entry| entry.key() == key)
    }

    /// Insert after the last entry, or at the top when there is none, so that
    /// trailing blank lines and comments stay below the new key.
    fn insert_entry(&mut self, entry: Entry) {
        let position = self
            .lines
            .iter()
            .rposition(|line| matches!(line, Line::Entry(_)))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.lines.insert(position, Line::Entry(entry));
    }

    fn is_empty(&self) -> bool {
        self.header.is_none() && self.lines.is_empty()
    }
}

/// Ordered sections of ordered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
    trailing_newline: bool,
}

impl ConfigDocument {
    /// Tokenize `text`. Never fails: unrecognized lines are carried verbatim.
    pub fn parse(text: &str) -> Self {
        let normalized = normalize_newlines(text);
        let mut document = ConfigDocument::default();
        if normalized.is_empty() {
            return document;
        }

        let body = match normalized.strip_suffix('\n') {
            Some(body) => {
                document.trailing_newline = true;
                body
            }
            None => normalized.as_str(),
        };

        let mut current = Section::leading();
        for raw in body.split('\n') {
            if let Some(name) = section_name(raw) {
                let next = Section {
                    name: Some(name.to_string()),
                    header: Some(raw.to_string()),
                    lines: Vec::new(),
                };
                document.sections.push(std::mem::replace(&mut current, next));
                continue;
            }

            let line = match raw.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() && !current.has_key(key.trim()) => {
                    Line::Entry(Entry::new(key, value))
                }
                _ => Line::Verbatim(raw.to_string()),
            };
            current.lines.push(line);
        }
        document.sections.push(current);

        document
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.name() == Some(name))
    }

    /// Value of `key` in section `name`, untrimmed.
    pub fn get(&self, name: &str, key: &str) -> Option<&str> {
        self.section(name).and_then(|section| section.get(key))
    }

    /// First occurrence of `key` in document order, regardless of section.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.sections.iter().find_map(|section| section.get(key))
    }

    /// Rewrite `key` in section `name`, reintroducing it when absent.
    ///
    /// A missing key is placed after the last entry of its section; a missing
    /// section is appended to the end of the document.
    pub fn set(&mut self, name: &str, key: &str, value: &str) {
        if let Some(entry) = self
            .sections
            .iter_mut()
            .filter(|section| section.name() == Some(name))
            .find_map(|section| section.entry_mut(key))
        {
            entry.set_value(value);
            return;
        }

        if self.is_empty() {
            self.trailing_newline = true;
        }

        match self
            .sections
            .iter_mut()
            .find(|section| section.name() == Some(name))
        {
            Some(section) => section.insert_entry(Entry::new(key, value)),
            None => {
                let mut section = Section::named(name);
                section.insert_entry(Entry::new(key, value));
                self.sections.push(section);
            }
        }
    }

    /// Rewrite the first occurrence of `key` anywhere in the document.
    /// Returns `false` when no section holds the key.
    pub fn set_existing(&mut self, key: &str, value: &str) -> bool {
        match self
            .sections
            .iter_mut()
            .find_map(|section| section.entry_mut(key))
        {
            Some(entry) => {
                entry.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Text joined with `line_ending`.
    pub fn render(&self, line_ending: &str) -> String {
        let mut out = String::new();
        let mut first = true;
        for section in &self.sections {
            let lines = section.lines.iter().map(ToString::to_string);
            for line in section.header.iter().cloned().chain(lines) {
                if !first {
                    out.push_str(line_ending);
                }
                out.push_str(&line);
                first = false;
            }
        }
        if self.trailing_newline && !first {
            out.push_str(line_ending);
        }
        out
    }

    /// CRLF text for the editor.
    pub fn to_editable(&self) -> String {
        self.render(EDITABLE_LINE_ENDING)
    }

    /// LF text, as the settings file stores it.
    #[cfg(test)]
    pub fn to_disk(&self) -> String {
        normalize_newlines(&self.to_editable())
    }
}

fn section_name(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}
