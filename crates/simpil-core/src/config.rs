/// Configuration for the simpil style model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that bundled assets are resolved against.
    pub asset_root: String,
    /// Sub-directory of `asset_root` holding the bundled font families.
    pub fonts_dir: String,
    /// `tracing-subscriber` env filter used by [`crate::logging::init_with`].
    pub log_filter: String,
}

impl Config {
    /// Create a configuration rooted at `asset_root`.
    pub fn with_asset_root(asset_root: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
            ..Self::default()
        }
    }

    /// Path of a bundled font file: `<asset_root>/<fonts_dir>/<family>/<family>_<format>.ttf`.
    pub fn bundled_font_path(&self, family: &str, format: &str) -> String {
        format!(
            "{}/{}/{family}/{family}_{format}.ttf",
            self.asset_root, self.fonts_dir
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            asset_root: String::from("simpil"),
            fonts_dir: String::from("fonts"),
            log_filter: String::from("info,simpil_text=debug"),
        }
    }
}
