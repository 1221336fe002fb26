//! End-to-end scenarios for building, merging and resolving text styles.

use simpil_text::{
    Coord, Font, FontFormat, FontWeight, Operation, Position, Rasterizer, ResolvedText, Text,
    TextError,
};

fn ops(text: &Text) -> Vec<Operation> {
    text.operations().cloned().collect()
}

/// Rasterizer double that records every snapshot it is given.
#[derive(Default)]
struct RecordingRasterizer {
    frames: Vec<ResolvedText>,
}

impl Rasterizer for RecordingRasterizer {
    type Output = usize;
    type Error = TextError;

    fn rasterize(&mut self, text: &ResolvedText) -> Result<usize, TextError> {
        self.frames.push(text.clone());
        Ok(self.frames.len())
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_named_constructor_defaults() {
    let text = Text::named("Hello", None, 200, (0, 0)).unwrap();
    let font = text.font().unwrap();

    assert_eq!(text.text(), "Hello");
    assert_eq!(font.weight().get(), 200);
    assert!(font.path().ends_with("poppins_regular.ttf"));
    assert_eq!(text.position(), Position::new(0, 0));
}

#[test]
fn test_bold_and_center() {
    let mut text = Text::named("Hello", None, 200, (0, 0)).unwrap();
    text.font_mut().weight_mut().bold();
    text.center();

    assert_eq!(text.font().unwrap().weight().get(), 600);
    assert_eq!(text.position(), Position::new(Coord::Center, Coord::Center));
}

#[test]
fn test_plain_string_has_empty_log() {
    for s in ["", "a", "Hello, World!", "ünïcødé"] {
        let text = Text::new(s);
        assert_eq!(text.text(), s);
        assert!(ops(&text).is_empty());
    }
}

#[test]
fn test_copy_construction_law() {
    let mut source = Text::with_operations("copy me", vec![Operation::Weight(200)]);
    source.font_mut().set_format(FontFormat::Italic).arial();

    let copy = Text::from_text(&source);
    assert_eq!(copy.text(), source.text());
    assert_eq!(ops(&copy), ops(&source));
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_merge_font_appends_log_and_takes_ownership() {
    let mut text = Text::with_operations("merge", vec![Operation::Weight(300)]);
    let prior = ops(&text);

    let mut font = Font::custom("brand/Display.otf").unwrap();
    font.weight_mut().ultra_bold();
    let font_id = font.id();

    text.merge(font);

    let expected: Vec<Operation> = prior
        .into_iter()
        .chain([
            Operation::FontFile("brand/Display.otf".into()),
            Operation::Weight(900),
        ])
        .collect();
    assert_eq!(ops(&text), expected);

    let hosted = text.font().unwrap();
    assert_eq!(hosted.id(), font_id);
    assert_eq!(hosted.text(), Some(text.id()));
}

#[test]
fn test_merge_weight_hosts_default_font() {
    let mut text = Text::new("merge");
    text.detach_font();

    let mut weight = FontWeight::new();
    weight.regular();
    text.merge(weight);

    let font = text.font().unwrap();
    assert_eq!(font.weight().get(), 300);
    assert_eq!(font.weight().font(), Some(font.id()));
    assert_eq!(font.text(), Some(text.id()));
}

#[test]
fn test_merge_invalid_type_leaves_text_unchanged() {
    let mut text = Text::new("merge");
    text.set_x_pos(4);
    let before_ops = ops(&text);
    let before_font = text.font().unwrap().id();

    let err = text.try_merge(3.5f32).unwrap_err();
    assert!(matches!(err, TextError::InvalidInputType { found: "f32", .. }));

    assert_eq!(ops(&text), before_ops);
    assert_eq!(text.font().unwrap().id(), before_font);
    assert_eq!(text.x_pos(), Coord::Value(4));
}

#[test]
fn test_font_moves_between_texts() {
    let mut first = Text::new("first");
    let mut second = Text::new("second");

    let mut font = first.detach_font().unwrap();
    font.arial();
    second.merge(font);

    assert!(first.font().is_none());
    let font = second.font().unwrap();
    assert_eq!(font.text(), Some(second.id()));
    assert!(font.path().ends_with("arial_regular.ttf"));
    assert!(ops(&first).is_empty());
    assert_eq!(ops(&second).len(), 1);
}

// ============================================================================
// Resolve
// ============================================================================

#[test]
fn test_resolved_snapshot_reaches_rasterizer() {
    let mut text = Text::named("Title", None, 200, (12, Coord::Center)).unwrap();
    text.font_mut().size_mut().custom(32);
    text.color_mut().set_blue("#1020ff").unwrap();

    let mut rasterizer = RecordingRasterizer::default();
    assert_eq!(text.render_with(&mut rasterizer).unwrap(), 1);

    let frame = &rasterizer.frames[0];
    assert_eq!(frame.text, "Title");
    assert_eq!(frame.font_path, "simpil/fonts/poppins/poppins_regular.ttf");
    assert_eq!(frame.weight, 200);
    assert_eq!(frame.size, 32);
    assert_eq!(frame.color.as_str(), "#1020ff");
    assert_eq!(frame.position, Position::new(12, Coord::Center));
    assert!(frame.needs_canvas());
}
