//! Gradient direction handling.
//!
//! Directions travel through the editor as free-form CSS strings (`"to
//! right"`, `"135deg"`) so that loaded gradients survive round trips
//! verbatim. This module provides the eight compass presets, the mapping
//! between direction strings and slider angles, and the utility-class token
//! each preset corresponds to.

/// One of the eight compass directions CSS spells as `to <side-or-corner>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Preset {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Preset {
    /// Every preset, in clockwise order starting from `Top`.
    pub const ALL: [Preset; 8] = [
        Preset::Top,
        Preset::TopRight,
        Preset::Right,
        Preset::BottomRight,
        Preset::Bottom,
        Preset::BottomLeft,
        Preset::Left,
        Preset::TopLeft,
    ];

    /// The CSS `to <side-or-corner>` spelling.
    #[inline]
    pub const fn css(self) -> &'static str {
        match self {
            Preset::Top => "to top",
            Preset::TopRight => "to top right",
            Preset::Right => "to right",
            Preset::BottomRight => "to bottom right",
            Preset::Bottom => "to bottom",
            Preset::BottomLeft => "to bottom left",
            Preset::Left => "to left",
            Preset::TopLeft => "to top left",
        }
    }

    /// The equivalent gradient angle in degrees.
    ///
    /// `to top` is 0 and angles grow clockwise, matching the CSS gradient
    /// angle convention.
    #[inline]
    pub const fn angle(self) -> i32 {
        match self {
            Preset::Top => 0,
            Preset::TopRight => 45,
            Preset::Right => 90,
            Preset::BottomRight => 135,
            Preset::Bottom => 180,
            Preset::BottomLeft => 225,
            Preset::Left => 270,
            Preset::TopLeft => 315,
        }
    }

    /// The utility-class direction token for this preset.
    #[inline]
    pub const fn utility_class(self) -> &'static str {
        match self {
            Preset::Top => "bg-gradient-to-t",
            Preset::TopRight => "bg-gradient-to-tr",
            Preset::Right => "bg-gradient-to-r",
            Preset::BottomRight => "bg-gradient-to-br",
            Preset::Bottom => "bg-gradient-to-b",
            Preset::BottomLeft => "bg-gradient-to-bl",
            Preset::Left => "bg-gradient-to-l",
            Preset::TopLeft => "bg-gradient-to-tl",
        }
    }

    /// Looks up the preset whose CSS spelling matches `direction` exactly.
    pub fn from_css(direction: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.css() == direction)
    }
}

/// Resolves a direction string to a slider angle in degrees.
///
/// Semantics:
/// - A direction containing an embedded `<digits>deg` yields those digits,
///   wherever they sit in the string (`"135deg"` and `"around 45deg ish"`
///   both resolve).
/// - Otherwise a preset spelling yields its table angle.
/// - Anything else falls back to 90 (`to right`), the editor default.
pub fn angle_from_direction(direction: &str) -> i32 {
    if let Some(angle) = embedded_degrees(direction) {
        return angle;
    }
    Preset::from_css(direction).map(Preset::angle).unwrap_or(90)
}

/// Renders a slider angle as a direction string.
///
/// Always produces the `<angle>deg` form, even for angles that have a
/// preset spelling: the slider hands out numeric directions and the preset
/// buttons hand out `to <side>` spellings, and each surface keeps its own.
#[inline]
pub fn direction_from_angle(angle: i32) -> String {
    format!("{angle}deg")
}

/// Picks the utility-class direction token for a direction string.
///
/// Non-preset directions (numeric angles included) fall back to
/// `bg-gradient-to-r`; the utility framework has no arbitrary-angle token.
pub fn utility_class_for(direction: &str) -> &'static str {
    Preset::from_css(direction).map(Preset::utility_class).unwrap_or("bg-gradient-to-r")
}

/// Finds the first run of ascii digits immediately followed by `deg` and
/// parses it. Returns `None` when no such run exists or the digits overflow
/// an `i32`.
fn embedded_degrees(direction: &str) -> Option<i32> {
    let bytes = direction.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if direction[i..].starts_with("deg") {
                return direction[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}
