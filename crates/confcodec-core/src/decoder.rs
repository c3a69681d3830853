//! Decoder: indentation-structured text into a [`Value`] tree.
//!
//! Lines are classified up front (so lookahead can skip blank and comment
//! lines), then fed through a stack of open container frames. Each frame is
//! tagged as a mapping or a sequence and remembers the indentation that opened
//! it and the slot it fills in its parent.
//!
//! # Ownership of lines
//!
//! - A mapping frame opened at indent `i` owns every line deeper than `i`.
//! - A sequence frame whose items sit at column `c` owns item lines at `>= c`
//!   and key-value lines deeper than `c`.
//! - The root frame owns everything.
//!
//! Before a line is applied, frames that do not own it are closed, and each
//! closed frame's container is written into its parent's slot.
//!
//! # Sequences
//!
//! `key:` followed (after blanks and comments) by a `- ` line records `key` as
//! the mapping frame's pending sequence key. The first item line converts the
//! placeholder into a sequence frame. A bare `-` item opens a nested container
//! in the sequence: a sequence if the next line is a deeper item, otherwise a
//! mapping.

use crate::error::{CodecError, Result};
use crate::line::{classify, Line, LineKind};
use crate::options::DecodeOptions;
use crate::scalar::coerce;
use crate::value::{Mapping, Value};

/// Decode a document leniently. Malformed lines are skipped; the result is
/// always a [`Value::Mapping`].
pub fn decode(text: &str) -> Value {
    Value::Mapping(Decoder::new(text, DecodeOptions::lenient()).run().unwrap_or_default())
}

/// Decode with explicit options. Only strict mode can fail.
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<Value> {
    Decoder::new(text, *options).run().map(Value::Mapping)
}

/// Where a closed frame's container goes.
#[derive(Debug)]
enum Slot {
    Root,
    Key(String),
    Item,
}

#[derive(Debug)]
enum Container {
    Mapping {
        entries: Mapping,
        pending_sequence_key: Option<String>,
    },
    Sequence {
        items: Vec<Value>,
    },
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::Mapping { entries, .. } => Value::Mapping(entries),
            Container::Sequence { items } => Value::Sequence(items),
        }
    }
}

#[derive(Debug)]
struct Frame {
    /// `None` for the root frame, which sits below every real line.
    indent: Option<usize>,
    slot: Slot,
    container: Container,
}

impl Frame {
    fn root() -> Self {
        Self {
            indent: None,
            slot: Slot::Root,
            container: Container::Mapping {
                entries: Mapping::new(),
                pending_sequence_key: None,
            },
        }
    }

    fn mapping(indent: usize, slot: Slot) -> Self {
        Self {
            indent: Some(indent),
            slot,
            container: Container::Mapping {
                entries: Mapping::new(),
                pending_sequence_key: None,
            },
        }
    }

    fn sequence(column: usize, slot: Slot) -> Self {
        Self {
            indent: Some(column),
            slot,
            container: Container::Sequence { items: Vec::new() },
        }
    }

    fn owns(&self, width: usize, is_item: bool) -> bool {
        let Some(indent) = self.indent else {
            return true;
        };
        match self.container {
            Container::Mapping { .. } => width > indent,
            Container::Sequence { .. } if is_item => width >= indent,
            Container::Sequence { .. } => width > indent,
        }
    }
}

/// How a sequence item line finds its sequence.
enum ItemTarget {
    /// The top frame is already a sequence.
    Open,
    /// The top mapping frame has a pending key to convert.
    Pending(String),
    /// Nothing to append to.
    Missing,
}

struct Decoder<'a> {
    raw: Vec<&'a str>,
    lines: Vec<Line<'a>>,
    options: DecodeOptions,
    root: Frame,
    open: Vec<Frame>,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str, options: DecodeOptions) -> Self {
        let raw: Vec<&str> = text.lines().collect();
        let lines = raw
            .iter()
            .map(|line| classify(line, options.tab_width))
            .collect();
        Self {
            raw,
            lines,
            options,
            root: Frame::root(),
            open: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Mapping> {
        for idx in 0..self.lines.len() {
            let line = self.lines[idx];
            match line.kind {
                LineKind::Blank | LineKind::Comment => {}
                LineKind::Malformed => self.skip(idx, "unrecognized line")?,
                LineKind::SequenceItem(payload) => {
                    self.sequence_item(idx, line.indent, payload)?
                }
                LineKind::KeyValue { key, value } => {
                    self.key_value(idx, line.indent, key, value)?
                }
            }
        }

        while !self.open.is_empty() {
            self.close_top();
        }
        match self.root.container {
            Container::Mapping { entries, .. } => Ok(entries),
            Container::Sequence { .. } => Ok(Mapping::new()),
        }
    }

    fn sequence_item(&mut self, idx: usize, width: usize, payload: &str) -> Result<()> {
        self.unwind(width, true);

        let target = match &mut self.top().container {
            Container::Sequence { .. } => ItemTarget::Open,
            Container::Mapping {
                pending_sequence_key,
                ..
            } => match pending_sequence_key.take() {
                Some(key) => ItemTarget::Pending(key),
                None => ItemTarget::Missing,
            },
        };
        match target {
            ItemTarget::Open => {}
            ItemTarget::Pending(key) => self.push(Frame::sequence(width, Slot::Key(key))),
            ItemTarget::Missing => return self.skip(idx, "sequence item outside a sequence"),
        }

        if payload.is_empty() {
            let nested = match self.next_significant(idx) {
                Some(next) if next.indent > width && next.is_sequence_item() => {
                    Frame::sequence(next.indent, Slot::Item)
                }
                _ => Frame::mapping(width, Slot::Item),
            };
            self.push(nested);
        } else if let Container::Sequence { items } = &mut self.top().container {
            items.push(coerce(payload));
        }
        Ok(())
    }

    fn key_value(&mut self, idx: usize, width: usize, key: &str, value: &str) -> Result<()> {
        self.unwind(width, false);

        // `key:` followed by items at or beyond its own indent opens a sequence.
        let opens_sequence = value.is_empty()
            && self
                .next_significant(idx)
                .is_some_and(|next| next.is_sequence_item() && next.indent >= width);

        let Container::Mapping {
            entries,
            pending_sequence_key,
        } = &mut self.top().container
        else {
            return self.skip(idx, "key-value line inside a sequence");
        };

        *pending_sequence_key = None;
        if !value.is_empty() {
            entries.insert(key, coerce(value));
            return Ok(());
        }
        if opens_sequence {
            entries.insert(key, Value::Sequence(Vec::new()));
            *pending_sequence_key = Some(key.to_string());
            return Ok(());
        }
        // Placeholder fixes the key's position; the frame's mapping replaces it on close.
        entries.insert(key, Value::Mapping(Mapping::new()));
        self.push(Frame::mapping(width, Slot::Key(key.to_string())));
        Ok(())
    }

    fn next_significant(&self, idx: usize) -> Option<&Line<'a>> {
        self.lines[idx + 1..].iter().find(|line| line.is_significant())
    }

    fn top(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn push(&mut self, frame: Frame) {
        tracing::trace!(depth = self.open.len() + 1, indent = ?frame.indent, slot = ?frame.slot, "open frame");
        self.open.push(frame);
    }

    fn unwind(&mut self, width: usize, is_item: bool) {
        while self
            .open
            .last()
            .is_some_and(|frame| !frame.owns(width, is_item))
        {
            self.close_top();
        }
    }

    /// Pop the innermost open frame and store its container in the parent.
    fn close_top(&mut self) {
        let Some(frame) = self.open.pop() else {
            return;
        };
        tracing::trace!(depth = self.open.len() + 1, indent = ?frame.indent, slot = ?frame.slot, "close frame");
        let value = frame.container.into_value();
        match (frame.slot, &mut self.top().container) {
            (Slot::Key(key), Container::Mapping { entries, .. }) => {
                entries.insert(key, value);
            }
            (Slot::Item, Container::Sequence { items }) => items.push(value),
            // Frames are only pushed onto a parent of the matching kind.
            (slot, _) => {
                tracing::warn!(?slot, kind = value.kind(), "dropping container with no parent slot");
            }
        }
    }

    fn skip(&self, idx: usize, reason: &str) -> Result<()> {
        let content = self.raw[idx];
        if self.options.strict {
            return Err(CodecError::MalformedDocument {
                line: idx + 1,
                content: content.to_string(),
            });
        }
        tracing::debug!(line = idx + 1, content, reason, "skipping line");
        Ok(())
    }
}
