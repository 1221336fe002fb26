//! Style-mutation records.
//!
//! Every style change made through a [`Font`](crate::Font) or
//! [`FontWeight`](crate::FontWeight) is appended to that entity's log. When the
//! entity is merged into a [`Text`](crate::Text) the records move into the
//! text's log, preserving insertion order. Consumers resolve the final style by
//! letting later records of a kind supersede earlier ones.

use crate::font::FontFormat;

/// A single recorded style mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// The font file path changed.
    FontFile(String),
    /// The font format tag changed.
    Format(FontFormat),
    /// The font weight changed.
    Weight(u16),
}

/// An ordered log of [`Operation`]s.
///
/// Each entity allocates its own log; logs are copied or drained, never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    ops: Vec<Operation>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /// Move every record of `other` to the end of this log, leaving `other` empty.
    pub fn append(&mut self, other: &mut OperationLog) {
        self.ops.append(&mut other.ops);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }

    /// The most recent font path record, if any.
    pub fn latest_font_file(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            Operation::FontFile(path) => Some(path.as_str()),
            _ => None,
        })
    }

    /// The most recent format record, if any.
    pub fn latest_format(&self) -> Option<FontFormat> {
        self.ops.iter().rev().find_map(|op| match op {
            Operation::Format(format) => Some(*format),
            _ => None,
        })
    }

    /// The most recent weight record, if any.
    pub fn latest_weight(&self) -> Option<u16> {
        self.ops.iter().rev().find_map(|op| match op {
            Operation::Weight(weight) => Some(*weight),
            _ => None,
        })
    }
}

impl Extend<Operation> for OperationLog {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl<'a> Extend<&'a Operation> for OperationLog {
    fn extend<I: IntoIterator<Item = &'a Operation>>(&mut self, iter: I) {
        self.ops.extend(iter.into_iter().cloned());
    }
}

impl FromIterator<Operation> for OperationLog {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Operation>> for OperationLog {
    fn from(ops: Vec<Operation>) -> Self {
        Self { ops }
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
