use std::fmt;

use crate::font::FontId;
use crate::operation::{Operation, OperationLog};

/// Numeric font weight with named presets.
///
/// Every mutator changes this instance in place, records an
/// [`Operation::Weight`] and returns `&mut Self` for chaining.
#[derive(Debug, PartialEq, Eq)]
pub struct FontWeight {
    weight: u16,
    operations: OperationLog,
    font: Option<FontId>,
}

impl FontWeight {
    pub const DEFAULT: u16 = 400;
    pub const THIN: u16 = 200;
    pub const REGULAR: u16 = 300;
    pub const BOLD: u16 = 600;
    pub const ULTRA_BOLD: u16 = 900;

    /// Create a detached weight with an empty log.
    pub fn new() -> Self {
        Self {
            weight: Self::DEFAULT,
            operations: OperationLog::new(),
            font: None,
        }
    }

    /// Create a detached weight whose log is seeded with `operations`.
    pub fn with_operations(operations: OperationLog) -> Self {
        Self {
            operations,
            ..Self::new()
        }
    }

    pub fn thin(&mut self) -> &mut Self {
        self.custom(Self::THIN)
    }

    pub fn regular(&mut self) -> &mut Self {
        self.custom(Self::REGULAR)
    }

    pub fn bold(&mut self) -> &mut Self {
        self.custom(Self::BOLD)
    }

    pub fn ultra_bold(&mut self) -> &mut Self {
        self.custom(Self::ULTRA_BOLD)
    }

    pub fn custom(&mut self, weight: u16) -> &mut Self {
        self.weight = weight;
        self.operations.push(Operation::Weight(weight));
        self
    }

    pub fn get(&self) -> u16 {
        self.weight
    }

    /// Records not yet merged into a [`Text`](crate::Text).
    pub fn operations(&self) -> &OperationLog {
        &self.operations
    }

    /// The font currently hosting this weight.
    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    pub(crate) fn operations_mut(&mut self) -> &mut OperationLog {
        &mut self.operations
    }

    pub(crate) fn attach(&mut self, font: FontId) {
        self.font = Some(font);
    }

    pub(crate) fn detach(&mut self) {
        self.font = None;
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight)
    }
}
