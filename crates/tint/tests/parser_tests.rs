//! Tests for message segmentation and style resolution.

use tint::{Attributes, Color, Segment, Style, StyledMessage};

// ============================================================================
// Basic Resolution
// ============================================================================

#[test]
fn resolve_plain_text() {
    let msg = StyledMessage::resolve("Hello World", &Style::new());
    assert_eq!(msg.segments(), &[Segment::new("Hello World", Style::new())]);
    assert_eq!(msg.plain_text(), "Hello World");
}

#[test]
fn resolve_empty_string() {
    let msg = StyledMessage::resolve("", &Style::new());
    assert!(msg.is_empty());
}

#[test]
fn resolve_without_tags_never_triggers_tag_logic() {
    let default = Style::fg(Color::Blue).bold();
    let text = "colons: and :: more, but no spans";
    let msg = StyledMessage::resolve(text, &default);
    assert_eq!(msg.segments(), &[Segment::new(text, default)]);
}

// ============================================================================
// Tag Resolution
// ============================================================================

#[test]
fn resolve_single_tag() {
    let msg = StyledMessage::resolve("<cyan:Hello!>", &Style::new());
    let segments = msg.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].text, "Hello!");
    assert_eq!(segments[1].style.fg, Some(Color::Cyan));
}

#[test]
fn resolve_full_spec() {
    let msg = StyledMessage::resolve("<bold_ul_red_on_grey:John>", &Style::new());
    let styled = msg.segments()[1];
    assert_eq!(styled.text, "John");
    assert_eq!(styled.style.fg, Some(Color::Red));
    assert_eq!(styled.style.bg, Some(Color::Grey));
    assert_eq!(styled.style.attrs, Attributes::BOLD | Attributes::UNDERLINE);
}

#[test]
fn background_inherits_from_call_default() {
    // A fg-only tag renders on the call's background, not on "no background".
    let default = Style::fg(Color::Grey).on(Color::Yellow);
    let msg = StyledMessage::resolve("<bold_green:birthday>", &default);
    assert_eq!(msg.segments()[1].style.bg, Some(Color::Yellow));
}

#[test]
fn tag_adds_attributes_but_never_removes() {
    let default = Style::new().bold();
    let msg = StyledMessage::resolve("<ul_cyan:x>", &default);
    assert_eq!(
        msg.segments()[1].style.attrs,
        Attributes::BOLD | Attributes::UNDERLINE,
    );
}

#[test]
fn multiline_payload() {
    let msg = StyledMessage::resolve("<cyan:one\ntwo> three", &Style::new());
    assert_eq!(msg.segments()[1].text, "one\ntwo");
    assert_eq!(msg.plain_text(), "one\ntwo three");
}

#[test]
fn zero_width_segments_between_adjacent_tags() {
    let msg = StyledMessage::resolve("<red:a><blue:b>", &Style::new());
    let segments = msg.segments();
    assert_eq!(segments.len(), 5);
    assert!(segments[0].is_zero_width());
    assert!(segments[2].is_zero_width());
    assert!(segments[4].is_zero_width());
    assert_eq!(msg.plain_text(), "ab");
}

// ============================================================================
// Fallback Policy
// ============================================================================

#[test]
fn same_color_pair_is_not_a_tag() {
    let default = Style::new();
    let msg = StyledMessage::resolve("<red_on_red:x>", &default);
    // The whole interior renders with the call's default style, not
    // red-on-red.
    assert_eq!(msg.segments()[1], Segment::new("red_on_red:x", default));
}

#[test]
fn unknown_color_falls_back_to_literal() {
    let default = Style::fg(Color::Grey);
    let msg = StyledMessage::resolve("<pink:x>", &default);
    assert_eq!(msg.segments()[1], Segment::new("pink:x", default));
}

#[test]
fn span_without_colon_falls_back_to_literal() {
    let default = Style::fg(Color::Grey);
    let msg = StyledMessage::resolve("<cyan>", &default);
    assert_eq!(msg.segments()[1], Segment::new("cyan", default));
}

#[test]
fn fallback_keeps_interior_colons() {
    let default = Style::new();
    let msg = StyledMessage::resolve("<12:30:45>", &default);
    assert_eq!(msg.segments()[1], Segment::new("12:30:45", default));
}

#[test]
fn unclosed_bracket_is_literal_text() {
    let msg = StyledMessage::resolve("a < b and c > d < e", &Style::new());
    // `< b and c >` forms a span; the trailing `< e` cannot close.
    assert_eq!(msg.plain_text(), "a  b and c  d < e");
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn round_trip_strips_only_wrapper_syntax() {
    let cases = [
        ("no tags at all", "no tags at all"),
        ("<cyan:Hello!> world", "Hello! world"),
        ("a<red:b>c<blue:d>e", "abcde"),
        ("<bold_green:x><ul_red:y>", "xy"),
        ("<broken> and <also:broken>", "broken and also:broken"),
    ];
    for (input, expected) in cases {
        let msg = StyledMessage::resolve(input, &Style::new());
        assert_eq!(msg.plain_text(), expected, "input: {input:?}");
    }
}

// ============================================================================
// The Worked Example
// ============================================================================

#[test]
fn worked_example_yields_exact_segments() {
    let msg = StyledMessage::resolve(
        "<cyan:Hello!> plain <bold_ul_red_on_grey:John>.",
        &Style::new(),
    );

    let expected = [
        Segment::new("", Style::new()),
        Segment::new("Hello!", Style::fg(Color::Cyan)),
        Segment::new(" plain ", Style::new()),
        Segment::new(
            "John",
            Style::fg(Color::Red).on(Color::Grey).bold().underline(),
        ),
        Segment::new(".", Style::new()),
    ];
    assert_eq!(msg.segments(), &expected);
}
