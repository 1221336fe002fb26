/// Font size in pixels.
///
/// Size changes are not recorded in any operation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize {
    size: u32,
}

impl FontSize {
    pub const DEFAULT: u32 = 18;

    pub fn new(size: Option<u32>) -> Self {
        Self {
            size: size.unwrap_or(Self::DEFAULT),
        }
    }

    pub fn custom(&mut self, size: u32) -> &mut Self {
        self.size = size;
        self
    }

    pub fn get(&self) -> u32 {
        self.size
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::new(None)
    }
}
