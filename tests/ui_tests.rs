// Host-side tests for the pure presentation helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/ui.rs"]
mod ui;

use knot_core::TooltipUpdate;
use ui::*;

#[test]
fn shown_tooltip_carries_label_and_offset_position() {
    let style = tooltip_style(&TooltipUpdate::Show {
        text: "Postgres".into(),
        x: 412.0,
        y: 96.5,
    });
    assert_eq!(style.text, "Postgres");
    assert_eq!(style.transform, "translate(412px, 96.5px)");
}

#[test]
fn cleared_tooltip_is_empty_and_parked_off_screen() {
    let style = tooltip_style(&TooltipUpdate::Clear);
    assert_eq!(style.text, "");
    assert_eq!(style.transform, "translate(-9999px, -9999px)");
}

#[test]
fn nav_toggle_flips_expanded_state() {
    assert!(nav_next_open(Some("false")));
    assert!(nav_next_open(None));
    assert!(!nav_next_open(Some("true")));
    // anything unexpected counts as closed
    assert!(nav_next_open(Some("")));
    assert_eq!(bool_attr(true), "true");
    assert_eq!(bool_attr(false), "false");
}

#[test]
fn only_escape_and_anchor_clicks_close_the_nav() {
    assert!(closes_nav("Escape"));
    assert!(!closes_nav("Enter"));
    assert!(!closes_nav("escape"));
    assert!(is_link_tag("A"));
    assert!(is_link_tag("a"));
    assert!(!is_link_tag("LI"));
    assert!(!is_link_tag("BUTTON"));
}

#[test]
fn year_is_plain_digits() {
    assert_eq!(year_text(2026), "2026");
}

#[test]
fn probe_tries_webgl2_first() {
    assert_eq!(constants::WEBGL_CONTEXT_KINDS[0], "webgl2");
    assert_eq!(constants::REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
}

#[test]
fn cached_pages_keep_their_background() {
    assert!(tears_down_on_pagehide(false));
    assert!(!tears_down_on_pagehide(true));
}

#[test]
fn antialiasing_falls_back_to_what_the_format_allows() {
    assert_eq!(sample_count(constants::MSAA_SAMPLES, |_| true), 4);
    // webgl formats often top out at 4; some only take 1 or 2
    assert_eq!(sample_count(8, |n| n <= 4), 4);
    assert_eq!(sample_count(4, |n| n == 2), 2);
    assert_eq!(sample_count(4, |_| false), 1);
    assert_eq!(sample_count(0, |_| true), 1);
    assert_eq!(sample_count(6, |_| true), 4);
}
