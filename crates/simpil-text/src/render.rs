//! The seam between the style model and a rasterizer.
//!
//! The model never computes pixels. A [`Rasterizer`] receives a
//! [`ResolvedText`] snapshot and is responsible for loading the font file and
//! resolving [`Coord::Center`](crate::Coord::Center) against its canvas.

use crate::color::HexColor;
use crate::text::Position;

/// Fully resolved style of a [`Text`](crate::Text).
///
/// Uses owned data so snapshots can be queued or sent to another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    /// Literal content
    pub text: String,
    /// Path of the font file to load
    pub font_path: String,
    pub weight: u16,
    /// Font size in pixels
    pub size: u32,
    /// Color of the text-level color slot
    pub color: HexColor,
    pub position: Position,
}

impl ResolvedText {
    /// Whether any coordinate still needs the canvas size to resolve.
    pub fn needs_canvas(&self) -> bool {
        self.position.x.is_center() || self.position.y.is_center()
    }
}

/// Trait for consumers that turn a resolved style into pixels.
pub trait Rasterizer {
    type Output;
    type Error;

    fn rasterize(&mut self, text: &ResolvedText) -> Result<Self::Output, Self::Error>;
}

impl<F, O, E> Rasterizer for F
where
    F: FnMut(&ResolvedText) -> Result<O, E>,
{
    type Output = O;
    type Error = E;

    fn rasterize(&mut self, text: &ResolvedText) -> Result<O, E> {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[test]
    fn test_closure_rasterizer_receives_snapshot() {
        let mut text = Text::new("abc");
        text.center();

        let mut seen = Vec::new();
        let mut rasterizer = |resolved: &ResolvedText| -> Result<usize, ()> {
            seen.push(resolved.clone());
            Ok(resolved.text.len())
        };

        assert_eq!(text.render_with(&mut rasterizer), Ok(3));
        assert_eq!(seen.len(), 1);
        assert!(seen[0].needs_canvas());
    }

    #[test]
    fn test_rasterizer_error_is_forwarded() {
        let text = Text::new("abc");
        let mut failing = |_: &ResolvedText| -> Result<(), &'static str> { Err("no canvas") };
        assert_eq!(text.render_with(&mut failing), Err("no canvas"));
        assert!(!text.resolve().needs_canvas());
    }
}
