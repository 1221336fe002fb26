use std::fmt;
use std::path::Path;

use simpil_core::Config;

use crate::color::Color;
use crate::error::{TextError, TextResult};
use crate::operation::{Operation, OperationLog};
use crate::size::FontSize;
use crate::text::TextId;
use crate::weight::FontWeight;

simpil_core::entity_id!(
    /// Identity of a [`Font`], used by weight back-references.
    FontId
);

/// File extensions accepted by [`Font::custom`].
pub const FONT_EXTENSIONS: [&str; 4] = ["woff", "ttf", "woff2", "otf"];

/// Bundled font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Poppins,
    Arial,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Poppins => "poppins",
            FontFamily::Arial => "arial",
        }
    }
}

/// Format tag selecting a file within a bundled family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFormat {
    #[default]
    Regular,
    Italic,
    Light,
    Bold,
    BoldItalic,
}

impl FontFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFormat::Regular => "regular",
            FontFormat::Italic => "italic",
            FontFormat::Light => "light",
            FontFormat::Bold => "bold",
            FontFormat::BoldItalic => "bold_italic",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A font file reference together with its weight, size and color.
///
/// A `Font` is owned by at most one [`Text`](crate::Text) at a time. The
/// owner is recorded as a non-owning [`TextId`] back-reference which is
/// cleared when the font is detached.
#[derive(Debug)]
pub struct Font {
    id: FontId,
    font: String,
    format: FontFormat,
    family: Option<FontFamily>,
    weight: FontWeight,
    size: FontSize,
    color: Color,
    operations: OperationLog,
    text: Option<TextId>,
    config: Config,
}

impl Font {
    /// Create a detached font pointing at the bundled Poppins regular file.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Like [`Font::new`], resolving bundled paths against `config`.
    pub fn with_config(config: &Config) -> Self {
        let id = FontId::next();
        let format = FontFormat::default();
        let family = FontFamily::Poppins;
        let mut weight = FontWeight::new();
        weight.attach(id);

        Self {
            id,
            font: config.bundled_font_path(family.as_str(), format.as_str()),
            format,
            family: Some(family),
            weight,
            size: FontSize::default(),
            color: Color::new(),
            operations: OperationLog::new(),
            text: None,
            config: config.clone(),
        }
    }

    /// Create a detached font pointing at `path`.
    ///
    /// The path must carry one of the [`FONT_EXTENSIONS`]; the file itself is
    /// not opened.
    pub fn custom(path: &str) -> TextResult<Self> {
        let mut font = Self::new();
        font.set_custom(path)?;
        Ok(font)
    }

    /// Point this font at `path`, validated as in [`Font::custom`].
    pub fn set_custom(&mut self, path: &str) -> TextResult<&mut Self> {
        if !is_font_file(path) {
            return Err(TextError::InvalidFontFile {
                path: path.to_string(),
            });
        }
        tracing::trace!(font = %self.id, path, "Custom font file");
        self.family = None;
        self.set_path(path.to_string());
        Ok(self)
    }

    pub fn poppins(&mut self) -> &mut Self {
        self.select_family(FontFamily::Poppins)
    }

    pub fn arial(&mut self) -> &mut Self {
        self.select_family(FontFamily::Arial)
    }

    /// Point this font at a bundled family using the current format.
    pub fn select_family(&mut self, family: FontFamily) -> &mut Self {
        tracing::trace!(font = %self.id, family = family.as_str(), "Font family selected");
        self.family = Some(family);
        self.set_path(self.bundled_path(family));
        self
    }

    /// Change the format tag. When a bundled family is selected the path
    /// follows the new format.
    pub fn set_format(&mut self, format: FontFormat) -> &mut Self {
        self.format = format;
        self.operations.push(Operation::Format(format));
        if let Some(family) = self.family {
            self.set_path(self.bundled_path(family));
        }
        self
    }

    fn bundled_path(&self, family: FontFamily) -> String {
        self.config
            .bundled_font_path(family.as_str(), self.format.as_str())
    }

    fn set_path(&mut self, path: String) {
        self.operations.push(Operation::FontFile(path.clone()));
        self.font = path;
    }

    pub fn id(&self) -> FontId {
        self.id
    }

    /// Path of the font file.
    pub fn path(&self) -> &str {
        &self.font
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// The bundled family, or `None` after a custom path was set.
    pub fn family(&self) -> Option<FontFamily> {
        self.family
    }

    pub fn weight(&self) -> &FontWeight {
        &self.weight
    }

    pub fn weight_mut(&mut self) -> &mut FontWeight {
        &mut self.weight
    }

    /// Host `weight`, returning the previous weight detached from this font.
    ///
    /// Records still pending on the previous weight stay with this font, so a
    /// hosting [`Text`](crate::Text) keeps reporting them.
    pub fn replace_weight(&mut self, mut weight: FontWeight) -> FontWeight {
        weight.attach(self.id);
        let mut previous = std::mem::replace(&mut self.weight, weight);
        self.operations.append(previous.operations_mut());
        previous.detach();
        previous
    }

    pub fn size(&self) -> &FontSize {
        &self.size
    }

    pub fn size_mut(&mut self) -> &mut FontSize {
        &mut self.size
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn color_mut(&mut self) -> &mut Color {
        &mut self.color
    }

    /// Records of this font not yet merged into a [`Text`](crate::Text).
    ///
    /// The hosted weight keeps its own log; see [`FontWeight::operations`].
    pub fn operations(&self) -> &OperationLog {
        &self.operations
    }

    /// The text currently owning this font.
    pub fn text(&self) -> Option<TextId> {
        self.text
    }

    /// Move this font's pending records, then its weight's, onto `log`.
    pub(crate) fn drain_operations_into(&mut self, log: &mut OperationLog) {
        log.append(&mut self.operations);
        log.append(self.weight.operations_mut());
    }

    pub(crate) fn attach(&mut self, text: TextId) {
        self.text = Some(text);
    }

    pub(crate) fn detach(&mut self) {
        self.text = None;
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.font)
    }
}

fn is_font_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = Font::new();
        assert_eq!(font.path(), "simpil/fonts/poppins/poppins_regular.ttf");
        assert_eq!(font.format(), FontFormat::Regular);
        assert_eq!(font.family(), Some(FontFamily::Poppins));
        assert_eq!(font.weight().get(), 400);
        assert_eq!(font.size().get(), 18);
        assert_eq!(font.color().hex().as_str(), "#000000");
        assert!(font.text().is_none());
        assert!(font.operations().is_empty());
    }

    #[test]
    fn test_weight_back_reference() {
        let font = Font::new();
        assert_eq!(font.weight().font(), Some(font.id()));
    }

    #[test]
    fn test_family_selectors_chain() {
        let mut font = Font::new();
        font.arial().weight_mut().bold();
        assert_eq!(font.path(), "simpil/fonts/arial/arial_regular.ttf");
        assert_eq!(font.weight().get(), 600);
        assert_eq!(
            font.operations().latest_font_file(),
            Some("simpil/fonts/arial/arial_regular.ttf")
        );
    }

    #[test]
    fn test_format_rederives_path() {
        let mut font = Font::new();
        font.set_format(FontFormat::Bold);
        assert_eq!(font.path(), "simpil/fonts/poppins/poppins_bold.ttf");

        font.arial();
        assert_eq!(font.path(), "simpil/fonts/arial/arial_bold.ttf");
        assert_eq!(font.operations().latest_format(), Some(FontFormat::Bold));
    }

    #[test]
    fn test_config_asset_root() {
        let mut font = Font::with_config(&Config::with_asset_root("assets"));
        assert_eq!(font.path(), "assets/fonts/poppins/poppins_regular.ttf");
        font.set_format(FontFormat::Italic).arial();
        assert_eq!(font.path(), "assets/fonts/arial/arial_italic.ttf");
    }

    #[test]
    fn test_custom_accepts_font_files() {
        for path in ["a.ttf", "b.otf", "c.woff", "d.woff2", "dir/E.TTF"] {
            let font = Font::custom(path).unwrap();
            assert_eq!(font.path(), path);
            assert_eq!(font.family(), None);
            assert_eq!(font.operations().latest_font_file(), Some(path));
        }
    }

    #[test]
    fn test_custom_rejects_other_files() {
        for path in ["notes.txt", "font", "ttf", "archive.ttf.zip"] {
            assert_eq!(
                Font::custom(path).unwrap_err(),
                TextError::InvalidFontFile {
                    path: path.to_string()
                }
            );
        }
    }

    #[test]
    fn test_failed_custom_leaves_font_untouched() {
        let mut font = Font::new();
        assert!(font.set_custom("image.png").is_err());
        assert_eq!(font.path(), "simpil/fonts/poppins/poppins_regular.ttf");
        assert!(font.operations().is_empty());
    }

    #[test]
    fn test_custom_path_ignores_format_changes() {
        let mut font = Font::custom("my/font.otf").unwrap();
        font.set_format(FontFormat::Light);
        assert_eq!(font.path(), "my/font.otf");
        assert_eq!(font.format(), FontFormat::Light);
    }

    #[test]
    fn test_replace_weight_detaches_previous() {
        let mut font = Font::new();
        font.weight_mut().thin();

        let mut weight = FontWeight::new();
        weight.ultra_bold();
        let previous = font.replace_weight(weight);

        assert_eq!(previous.get(), 200);
        assert!(previous.font().is_none());
        assert_eq!(font.weight().get(), 900);
        assert_eq!(font.weight().font(), Some(font.id()));
        assert!(previous.operations().is_empty());
        assert_eq!(font.operations().as_slice(), &[Operation::Weight(200)]);
    }

    #[test]
    fn test_drain_orders_font_then_weight() {
        let mut font = Font::new();
        font.weight_mut().bold();
        font.arial();

        let mut log = OperationLog::new();
        font.drain_operations_into(&mut log);
        assert_eq!(
            log.as_slice(),
            &[
                Operation::FontFile("simpil/fonts/arial/arial_regular.ttf".into()),
                Operation::Weight(600),
            ]
        );
        assert!(font.operations().is_empty());
        assert!(font.weight().operations().is_empty());
    }
}
