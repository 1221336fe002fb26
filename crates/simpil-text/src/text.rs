use std::any::{Any, type_name};
use std::fmt;

use simpil_core::Config;

use crate::color::Color;
use crate::error::{TextError, TextResult};
use crate::font::Font;
use crate::operation::{Operation, OperationLog};
use crate::render::{Rasterizer, ResolvedText};
use crate::weight::FontWeight;

simpil_core::entity_id!(
    /// Identity of a [`Text`], used by font back-references.
    TextId
);

static_assertions::assert_impl_all!(Text: Send, Sync);

const TEXT_SOURCES: &str = "a String, a &'static str or a simpil_text::Text";
const MERGE_ITEMS: &str = "a simpil_text::Font or a simpil_text::FontWeight";

/// One coordinate of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coord {
    Value(i32),
    /// Resolved by the rasterizer against the canvas size.
    Center,
}

impl Coord {
    pub const CENTER_TOKEN: &'static str = "center";

    /// Parse `"center"` or an integer.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token == Self::CENTER_TOKEN {
            Some(Coord::Center)
        } else {
            token.parse().ok().map(Coord::Value)
        }
    }

    pub fn is_center(self) -> bool {
        self == Coord::Center
    }
}

impl From<i32> for Coord {
    fn from(value: i32) -> Self {
        Coord::Value(value)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Value(value) => write!(f, "{}", value),
            Coord::Center => f.write_str(Self::CENTER_TOKEN),
        }
    }
}

/// Placement of a text on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const ORIGIN: Position = Position {
        x: Coord::Value(0),
        y: Coord::Value(0),
    };

    pub const CENTER: Position = Position {
        x: Coord::Center,
        y: Coord::Center,
    };

    pub fn new(x: impl Into<Coord>, y: impl Into<Coord>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl<X: Into<Coord>, Y: Into<Coord>> From<(X, Y)> for Position {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

/// A value that [`Text::merge`] can reattach.
#[derive(Debug)]
pub enum MergeItem {
    Font(Font),
    Weight(FontWeight),
}

impl From<Font> for MergeItem {
    fn from(font: Font) -> Self {
        MergeItem::Font(font)
    }
}

impl From<FontWeight> for MergeItem {
    fn from(weight: FontWeight) -> Self {
        MergeItem::Weight(weight)
    }
}

/// A piece of text with its font, color and placement.
///
/// Style changes on the hosted [`Font`] and its [`FontWeight`] are recorded in
/// their own logs. [`Text::operations`] reports this text's committed records
/// followed by those pending records. Merging commits the pending records
/// first, so a merge always appends to what `operations` reported before.
///
/// ```
/// use simpil_text::{Position, Text};
///
/// let mut text = Text::named("Hello", None, 200, (0, 0)).unwrap();
/// text.font_mut().weight_mut().bold();
/// text.center();
///
/// assert_eq!(text.font().unwrap().weight().get(), 600);
/// assert_eq!(text.position(), Position::CENTER);
/// ```
#[derive(Debug)]
pub struct Text {
    id: TextId,
    text: String,
    position: Position,
    font: Option<Font>,
    color: Color,
    operations: OperationLog,
    config: Config,
}

impl Text {
    /// Create a text with a default font and an empty log.
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), OperationLog::new(), Config::default())
    }

    /// Create a text whose committed log is seeded with `operations`.
    pub fn with_operations(text: impl Into<String>, operations: impl Into<OperationLog>) -> Self {
        Self::build(text.into(), operations.into(), Config::default())
    }

    /// Create a text whose bundled font paths resolve against `config`.
    pub fn with_config(text: impl Into<String>, config: &Config) -> Self {
        Self::build(text.into(), OperationLog::new(), config.clone())
    }

    /// Copy-construct from `source`.
    ///
    /// The content and the full operation log are copied. Font, color and
    /// position start from their defaults.
    pub fn from_text(source: &Text) -> Self {
        let operations = source.operations().cloned().collect();
        Self::build(source.text.clone(), operations, source.config.clone())
    }

    /// Construct from a type-erased source.
    ///
    /// Accepts `String`, `&'static str` or [`Text`]; anything else fails with
    /// [`TextError::InvalidInputType`].
    pub fn try_new<T: Any>(source: T) -> TextResult<Self> {
        let source: Box<dyn Any> = Box::new(source);
        let source = match source.downcast::<String>() {
            Ok(text) => return Ok(Self::new(*text)),
            Err(source) => source,
        };
        let source = match source.downcast::<&'static str>() {
            Ok(text) => return Ok(Self::new(*text)),
            Err(source) => source,
        };
        match source.downcast::<Text>() {
            Ok(text) => Ok(Self::from_text(&text)),
            Err(_) => Err(TextError::InvalidInputType {
                found: type_name::<T>(),
                expected: TEXT_SOURCES,
            }),
        }
    }

    /// Build a fully configured text.
    ///
    /// `font_path` defaults to the bundled Poppins regular file; a custom path
    /// is validated as in [`Font::custom`].
    pub fn named(
        text: impl Into<String>,
        font_path: Option<&str>,
        font_weight: u16,
        position: impl Into<Position>,
    ) -> TextResult<Self> {
        let mut text = Self::new(text);
        let font = text.font_mut();
        match font_path {
            Some(path) => {
                font.set_custom(path)?;
            }
            None => {
                font.poppins();
            }
        }
        font.weight_mut().custom(font_weight);
        text.position = position.into();
        Ok(text)
    }

    fn build(text: String, operations: OperationLog, config: Config) -> Self {
        let id = TextId::next();
        let mut font = Font::with_config(&config);
        font.attach(id);

        Self {
            id,
            text,
            position: Position::ORIGIN,
            font: Some(font),
            color: Color::new(),
            operations,
            config,
        }
    }

    /// Reattach a detached [`Font`] or [`FontWeight`].
    ///
    /// The item's records are appended to this text's log. A font replaces
    /// the hosted font, which is discarded. A weight replaces the hosted
    /// font's weight, hosting a default font first when none is set.
    pub fn merge(&mut self, item: impl Into<MergeItem>) -> &mut Self {
        self.commit_operations();

        match item.into() {
            MergeItem::Font(mut font) => {
                font.drain_operations_into(&mut self.operations);
                font.attach(self.id);
                tracing::debug!(text = %self.id, font = %font.id(), "Merged font");
                if let Some(mut previous) = self.font.replace(font) {
                    previous.detach();
                }
            }
            MergeItem::Weight(mut weight) => {
                self.operations.append(weight.operations_mut());
                let text = self.id;
                let font = self.font_mut();
                tracing::debug!(%text, font = %font.id(), weight = weight.get(), "Merged font weight");
                font.replace_weight(weight);
            }
        }

        self
    }

    /// Type-erased [`Text::merge`].
    ///
    /// Fails with [`TextError::InvalidInputType`] for anything other than a
    /// [`Font`], a [`FontWeight`] or a [`MergeItem`], leaving the text untouched.
    pub fn try_merge<T: Any>(&mut self, item: T) -> TextResult<&mut Self> {
        let item: Box<dyn Any> = Box::new(item);
        let item = match item.downcast::<MergeItem>() {
            Ok(item) => *item,
            Err(item) => match item.downcast::<Font>() {
                Ok(font) => MergeItem::Font(*font),
                Err(item) => match item.downcast::<FontWeight>() {
                    Ok(weight) => MergeItem::Weight(*weight),
                    Err(_) => {
                        return Err(TextError::InvalidInputType {
                            found: type_name::<T>(),
                            expected: MERGE_ITEMS,
                        });
                    }
                },
            },
        };
        Ok(self.merge(item))
    }

    /// Move the hosted font's pending records into the committed log.
    fn commit_operations(&mut self) {
        if let Some(font) = self.font.as_mut() {
            font.drain_operations_into(&mut self.operations);
        }
    }

    /// Remove the hosted font, clearing its back-reference.
    ///
    /// Records still pending on the font travel with it and come back on the
    /// next [`Text::merge`].
    pub fn detach_font(&mut self) -> Option<Font> {
        let mut font = self.font.take()?;
        font.detach();
        tracing::debug!(text = %self.id, font = %font.id(), "Detached font");
        Some(font)
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The hosted font, creating a default one if none is set.
    pub fn font_mut(&mut self) -> &mut Font {
        let id = self.id;
        let config = &self.config;
        self.font.get_or_insert_with(|| {
            let mut font = Font::with_config(config);
            font.attach(id);
            font
        })
    }

    /// Every record relevant to this text, oldest first.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        let pending = self.font.iter().flat_map(|font| {
            font.operations()
                .iter()
                .chain(font.weight().operations().iter())
        });
        self.operations.iter().chain(pending)
    }

    pub fn id(&self) -> TextId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn color_mut(&mut self) -> &mut Color {
        &mut self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: impl Into<Position>) -> &mut Self {
        self.position = position.into();
        self
    }

    pub fn center(&mut self) -> &mut Self {
        self.position = Position::CENTER;
        self
    }

    pub fn x_pos(&self) -> Coord {
        self.position.x
    }

    pub fn y_pos(&self) -> Coord {
        self.position.y
    }

    pub fn set_x_pos(&mut self, pos: impl Into<Coord>) -> &mut Self {
        self.position.x = pos.into();
        self
    }

    pub fn set_y_pos(&mut self, pos: impl Into<Coord>) -> &mut Self {
        self.position.y = pos.into();
        self
    }

    pub fn horizontal_align(&mut self) -> &mut Self {
        self.set_x_pos(Coord::Center)
    }

    pub fn halign(&mut self) -> &mut Self {
        self.horizontal_align()
    }

    pub fn vertical_align(&mut self) -> &mut Self {
        self.set_y_pos(Coord::Center)
    }

    pub fn valign(&mut self) -> &mut Self {
        self.vertical_align()
    }

    /// Snapshot the fully resolved style.
    ///
    /// A text without a font resolves to the default font's attributes.
    pub fn resolve(&self) -> ResolvedText {
        let fallback;
        let font = match &self.font {
            Some(font) => font,
            None => {
                fallback = Font::with_config(&self.config);
                &fallback
            }
        };

        ResolvedText {
            text: self.text.clone(),
            font_path: font.path().to_string(),
            weight: font.weight().get(),
            size: font.size().get(),
            color: self.color.hex().clone(),
            position: self.position,
        }
    }

    /// Resolve and hand the snapshot to `rasterizer`.
    pub fn render_with<R: Rasterizer>(&self, rasterizer: &mut R) -> Result<R::Output, R::Error> {
        rasterizer.rasterize(&self.resolve())
    }
}

impl From<&Text> for Text {
    fn from(source: &Text) -> Self {
        Self::from_text(source)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
