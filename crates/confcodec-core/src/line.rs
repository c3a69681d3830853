//! Physical line classification.

/// One classified physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Indentation width: spaces count 1, tabs count `tab_width`.
    pub indent: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// `- payload`, with the payload trimmed. A bare `-` has an empty payload.
    SequenceItem(&'a str),
    /// `key: value`, split at the first colon, both sides trimmed.
    KeyValue { key: &'a str, value: &'a str },
    /// Anything else. Lenient decoding skips these.
    Malformed,
}

impl Line<'_> {
    /// Lines that take part in decoding (and in lookahead).
    pub fn is_significant(&self) -> bool {
        matches!(
            self.kind,
            LineKind::SequenceItem(_) | LineKind::KeyValue { .. }
        )
    }

    pub fn is_sequence_item(&self) -> bool {
        matches!(self.kind, LineKind::SequenceItem(_))
    }
}

/// Classify `raw` (a line without its terminator).
pub fn classify(raw: &str, tab_width: usize) -> Line<'_> {
    let indent = indent_width(raw, tab_width);
    let trimmed = raw.trim();

    let kind = if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment
    } else if let Some(payload) = trimmed.strip_prefix("- ") {
        LineKind::SequenceItem(payload.trim())
    } else if trimmed == "-" {
        LineKind::SequenceItem("")
    } else {
        match trimmed.find(':') {
            Some(pos) if pos > 0 => LineKind::KeyValue {
                key: trimmed[..pos].trim(),
                value: trimmed[pos + 1..].trim(),
            },
            _ => LineKind::Malformed,
        }
    };

    Line { indent, kind }
}

/// Width of the leading run of spaces and tabs.
pub fn indent_width(raw: &str, tab_width: usize) -> usize {
    raw.chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(tab_width),
            _ => None,
        })
        .sum()
}
