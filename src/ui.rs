//! Pure helpers shared by the DOM and GPU glue.
//!
//! Nothing here touches `web_sys`, so host tests can pull the file in directly.

use crate::constants::{ESCAPE_KEY, TOOLTIP_HIDDEN_PX};
use knot_core::TooltipUpdate;

/// What the tooltip element should carry after a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipStyle {
    pub text: String,
    pub transform: String,
}

#[inline]
pub fn css_translate(x: f32, y: f32) -> String {
    format!("translate({}px, {}px)", x, y)
}

pub fn tooltip_style(update: &TooltipUpdate) -> TooltipStyle {
    match update {
        TooltipUpdate::Show { text, x, y } => TooltipStyle {
            text: text.clone(),
            transform: css_translate(*x, *y),
        },
        TooltipUpdate::Clear => TooltipStyle {
            text: String::new(),
            transform: css_translate(TOOLTIP_HIDDEN_PX, TOOLTIP_HIDDEN_PX),
        },
    }
}

/// State the nav should switch to when its toggle is clicked.
#[inline]
pub fn nav_next_open(aria_expanded: Option<&str>) -> bool {
    aria_expanded != Some("true")
}

#[inline]
pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[inline]
pub fn closes_nav(key: &str) -> bool {
    key == ESCAPE_KEY
}

/// Clicking an anchor inside the link list closes the menu.
#[inline]
pub fn is_link_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a")
}

#[inline]
pub fn year_text(year: u32) -> String {
    year.to_string()
}

/// A page kept in the back/forward cache comes back without reloading,
/// so its background has to survive the `pagehide`.
#[inline]
pub fn tears_down_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// Largest power-of-two sample count up to `wanted` that `supported` accepts.
pub fn sample_count(wanted: u32, supported: impl Fn(u32) -> bool) -> u32 {
    let mut n = wanted.max(1).next_power_of_two();
    if n > wanted {
        n /= 2;
    }
    while n > 1 && !supported(n) {
        n /= 2;
    }
    n.max(1)
}
