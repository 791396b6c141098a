use std::fmt;
use std::str::FromStr;

/// Straight-alpha sRGB color.
///
/// Semantics:
/// - `r`, `g`, `b` are sRGB bytes (`0`–`255`), straight (non-premultiplied).
/// - `a` is an opacity fraction in `[0, 1]`.
///
/// The editor stores author input as strings; `Color` only materializes when
/// a derivation needs channel access (CSS tokens, preview sampling). CSS
/// serialization requires straight channels, so there is no premultiplied
/// form here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from sRGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from sRGB bytes and an alpha fraction.
    ///
    /// Alpha is clamped to `[0, 1]`.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// Returns the same color with its alpha channel replaced.
    ///
    /// Replaces rather than multiplies: a stop's opacity overrides whatever
    /// alpha the author baked into an `#rrggbbaa` literal.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Linear interpolation between two colors in straight-alpha space.
    ///
    /// `t` is clamped to `[0, 1]`. Channel math happens in `f64` and rounds
    /// back to bytes.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composites this color over an opaque background.
    ///
    /// Used by preview surfaces; the result is always opaque.
    pub fn over(self, background: Self) -> Self {
        let a = self.a.clamp(0.0, 1.0);
        let channel = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
        Self {
            r: channel(self.r, background.r),
            g: channel(self.g, background.g),
            b: channel(self.b, background.b),
            a: 1.0,
        }
    }

    /// Formats as a CSS `rgba(r,g,b,a)` token.
    ///
    /// Alpha prints minimally, rounded to thousandths: `1`, `0.5`, `0.502`.
    pub fn to_rgba_string(self) -> String {
        let alpha = (self.a * 1e3).round() / 1e3;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    /// Formats as a `#rrggbb` hex literal, dropping alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a CSS color string: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// or a named CSS color (case-insensitive, surrounding whitespace
    /// tolerated).
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        let trimmed = input.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| ParseColorError::new(trimmed));
        }
        named(&trimmed.to_ascii_lowercase()).ok_or_else(|| ParseColorError::new(trimmed))
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned when a string is neither valid hex nor a CSS color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl ParseColorError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a recognized CSS color: {:?}", self.input)
    }
}

impl std::error::Error for ParseColorError {}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // All characters were validated as ascii_hexdigit above, so the radix
    // conversions below never fail.
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).expect("validated hex digits");
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).expect("validated hex digits");
    match digits.len() {
        // Shorthand forms duplicate each nibble: #f80 == #ff8800.
        3 => Some(Color::rgb(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)),
        4 => Some(Color::rgba(
            nibble(0) * 17,
            nibble(1) * 17,
            nibble(2) * 17,
            (nibble(3) * 17) as f64 / 255.0,
        )),
        6 => Some(Color::rgb(byte(0), byte(2), byte(4))),
        8 => Some(Color::rgba(byte(0), byte(2), byte(4), byte(6) as f64 / 255.0)),
        _ => None,
    }
}

/// CSS named-color keyword table, plus `transparent`.
///
/// Expects an already-lowercased name.
fn named(name: &str) -> Option<Color> {
    let c = Color::rgb;
    Some(match name {
        "transparent" => Color::rgba(0, 0, 0, 0.0),
        "aliceblue" => c(0xf0, 0xf8, 0xff),
        "antiquewhite" => c(0xfa, 0xeb, 0xd7),
        "aqua" | "cyan" => c(0x00, 0xff, 0xff),
        "aquamarine" => c(0x7f, 0xff, 0xd4),
        "azure" => c(0xf0, 0xff, 0xff),
        "beige" => c(0xf5, 0xf5, 0xdc),
        "bisque" => c(0xff, 0xe4, 0xc4),
        "black" => c(0x00, 0x00, 0x00),
        "blanchedalmond" => c(0xff, 0xeb, 0xcd),
        "blue" => c(0x00, 0x00, 0xff),
        "blueviolet" => c(0x8a, 0x2b, 0xe2),
        "brown" => c(0xa5, 0x2a, 0x2a),
        "burlywood" => c(0xde, 0xb8, 0x87),
        "cadetblue" => c(0x5f, 0x9e, 0xa0),
        "chartreuse" => c(0x7f, 0xff, 0x00),
        "chocolate" => c(0xd2, 0x69, 0x1e),
        "coral" => c(0xff, 0x7f, 0x50),
        "cornflowerblue" => c(0x64, 0x95, 0xed),
        "cornsilk" => c(0xff, 0xf8, 0xdc),
        "crimson" => c(0xdc, 0x14, 0x3c),
        "darkblue" => c(0x00, 0x00, 0x8b),
        "darkcyan" => c(0x00, 0x8b, 0x8b),
        "darkgoldenrod" => c(0xb8, 0x86, 0x0b),
        "darkgray" | "darkgrey" => c(0xa9, 0xa9, 0xa9),
        "darkgreen" => c(0x00, 0x64, 0x00),
        "darkkhaki" => c(0xbd, 0xb7, 0x6b),
        "darkmagenta" => c(0x8b, 0x00, 0x8b),
        "darkolivegreen" => c(0x55, 0x6b, 0x2f),
        "darkorange" => c(0xff, 0x8c, 0x00),
        "darkorchid" => c(0x99, 0x32, 0xcc),
        "darkred" => c(0x8b, 0x00, 0x00),
        "darksalmon" => c(0xe9, 0x96, 0x7a),
        "darkseagreen" => c(0x8f, 0xbc, 0x8f),
        "darkslateblue" => c(0x48, 0x3d, 0x8b),
        "darkslategray" | "darkslategrey" => c(0x2f, 0x4f, 0x4f),
        "darkturquoise" => c(0x00, 0xce, 0xd1),
        "darkviolet" => c(0x94, 0x00, 0xd3),
        "deeppink" => c(0xff, 0x14, 0x93),
        "deepskyblue" => c(0x00, 0xbf, 0xff),
        "dimgray" | "dimgrey" => c(0x69, 0x69, 0x69),
        "dodgerblue" => c(0x1e, 0x90, 0xff),
        "firebrick" => c(0xb2, 0x22, 0x22),
        "floralwhite" => c(0xff, 0xfa, 0xf0),
        "forestgreen" => c(0x22, 0x8b, 0x22),
        "fuchsia" | "magenta" => c(0xff, 0x00, 0xff),
        "gainsboro" => c(0xdc, 0xdc, 0xdc),
        "ghostwhite" => c(0xf8, 0xf8, 0xff),
        "gold" => c(0xff, 0xd7, 0x00),
        "goldenrod" => c(0xda, 0xa5, 0x20),
        "gray" | "grey" => c(0x80, 0x80, 0x80),
        "green" => c(0x00, 0x80, 0x00),
        "greenyellow" => c(0xad, 0xff, 0x2f),
        "honeydew" => c(0xf0, 0xff, 0xf0),
        "hotpink" => c(0xff, 0x69, 0xb4),
        "indianred" => c(0xcd, 0x5c, 0x5c),
        "indigo" => c(0x4b, 0x00, 0x82),
        "ivory" => c(0xff, 0xff, 0xf0),
        "khaki" => c(0xf0, 0xe6, 0x8c),
        "lavender" => c(0xe6, 0xe6, 0xfa),
        "lavenderblush" => c(0xff, 0xf0, 0xf5),
        "lawngreen" => c(0x7c, 0xfc, 0x00),
        "lemonchiffon" => c(0xff, 0xfa, 0xcd),
        "lightblue" => c(0xad, 0xd8, 0xe6),
        "lightcoral" => c(0xf0, 0x80, 0x80),
        "lightcyan" => c(0xe0, 0xff, 0xff),
        "lightgoldenrodyellow" => c(0xfa, 0xfa, 0xd2),
        "lightgray" | "lightgrey" => c(0xd3, 0xd3, 0xd3),
        "lightgreen" => c(0x90, 0xee, 0x90),
        "lightpink" => c(0xff, 0xb6, 0xc1),
        "lightsalmon" => c(0xff, 0xa0, 0x7a),
        "lightseagreen" => c(0x20, 0xb2, 0xaa),
        "lightskyblue" => c(0x87, 0xce, 0xfa),
        "lightslategray" | "lightslategrey" => c(0x77, 0x88, 0x99),
        "lightsteelblue" => c(0xb0, 0xc4, 0xde),
        "lightyellow" => c(0xff, 0xff, 0xe0),
        "lime" => c(0x00, 0xff, 0x00),
        "limegreen" => c(0x32, 0xcd, 0x32),
        "linen" => c(0xfa, 0xf0, 0xe6),
        "maroon" => c(0x80, 0x00, 0x00),
        "mediumaquamarine" => c(0x66, 0xcd, 0xaa),
        "mediumblue" => c(0x00, 0x00, 0xcd),
        "mediumorchid" => c(0xba, 0x55, 0xd3),
        "mediumpurple" => c(0x93, 0x70, 0xdb),
        "mediumseagreen" => c(0x3c, 0xb3, 0x71),
        "mediumslateblue" => c(0x7b, 0x68, 0xee),
        "mediumspringgreen" => c(0x00, 0xfa, 0x9a),
        "mediumturquoise" => c(0x48, 0xd1, 0xcc),
        "mediumvioletred" => c(0xc7, 0x15, 0x85),
        "midnightblue" => c(0x19, 0x19, 0x70),
        "mintcream" => c(0xf5, 0xff, 0xfa),
        "mistyrose" => c(0xff, 0xe4, 0xe1),
        "moccasin" => c(0xff, 0xe4, 0xb5),
        "navajowhite" => c(0xff, 0xde, 0xad),
        "navy" => c(0x00, 0x00, 0x80),
        "oldlace" => c(0xfd, 0xf5, 0xe6),
        "olive" => c(0x80, 0x80, 0x00),
        "olivedrab" => c(0x6b, 0x8e, 0x23),
        "orange" => c(0xff, 0xa5, 0x00),
        "orangered" => c(0xff, 0x45, 0x00),
        "orchid" => c(0xda, 0x70, 0xd6),
        "palegoldenrod" => c(0xee, 0xe8, 0xaa),
        "palegreen" => c(0x98, 0xfb, 0x98),
        "paleturquoise" => c(0xaf, 0xee, 0xee),
        "palevioletred" => c(0xdb, 0x70, 0x93),
        "papayawhip" => c(0xff, 0xef, 0xd5),
        "peachpuff" => c(0xff, 0xda, 0xb9),
        "peru" => c(0xcd, 0x85, 0x3f),
        "pink" => c(0xff, 0xc0, 0xcb),
        "plum" => c(0xdd, 0xa0, 0xdd),
        "powderblue" => c(0xb0, 0xe0, 0xe6),
        "purple" => c(0x80, 0x00, 0x80),
        "rebeccapurple" => c(0x66, 0x33, 0x99),
        "red" => c(0xff, 0x00, 0x00),
        "rosybrown" => c(0xbc, 0x8f, 0x8f),
        "royalblue" => c(0x41, 0x69, 0xe1),
        "saddlebrown" => c(0x8b, 0x45, 0x13),
        "salmon" => c(0xfa, 0x80, 0x72),
        "sandybrown" => c(0xf4, 0xa4, 0x60),
        "seagreen" => c(0x2e, 0x8b, 0x57),
        "seashell" => c(0xff, 0xf5, 0xee),
        "sienna" => c(0xa0, 0x52, 0x2d),
        "silver" => c(0xc0, 0xc0, 0xc0),
        "skyblue" => c(0x87, 0xce, 0xeb),
        "slateblue" => c(0x6a, 0x5a, 0xcd),
        "slategray" | "slategrey" => c(0x70, 0x80, 0x90),
        "snow" => c(0xff, 0xfa, 0xfa),
        "springgreen" => c(0x00, 0xff, 0x7f),
        "steelblue" => c(0x46, 0x82, 0xb4),
        "tan" => c(0xd2, 0xb4, 0x8c),
        "teal" => c(0x00, 0x80, 0x80),
        "thistle" => c(0xd8, 0xbf, 0xd8),
        "tomato" => c(0xff, 0x63, 0x47),
        "turquoise" => c(0x40, 0xe0, 0xd0),
        "violet" => c(0xee, 0x82, 0xee),
        "wheat" => c(0xf5, 0xde, 0xb3),
        "white" => c(0xff, 0xff, 0xff),
        "whitesmoke" => c(0xf5, 0xf5, 0xf5),
        "yellow" => c(0xff, 0xff, 0x00),
        "yellowgreen" => c(0x9a, 0xcd, 0x32),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Color::parse("#ff6b6b").unwrap(), Color::rgb(255, 107, 107));
    }

    #[test]
    fn parse_three_digit_hex_expands_nibbles() {
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn parse_eight_digit_hex_carries_alpha() {
        let color = Color::parse("#00000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (0, 0, 0));
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parse_named_color() {
        assert_eq!(Color::parse("rebeccapurple").unwrap(), Color::rgb(0x66, 0x33, 0x99));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Color::parse("  CoRaL ").unwrap(), Color::rgb(0xff, 0x7f, 0x50));
        assert_eq!(Color::parse(" #FF6B6B").unwrap(), Color::rgb(255, 107, 107));
    }

    #[test]
    fn parse_transparent() {
        assert_eq!(Color::parse("transparent").unwrap().a, 0.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#xyz").is_err());
        assert!(Color::parse("#12345").is_err()); // five digits is no hex form
        assert!(Color::parse("not-a-color").is_err());
        assert!(Color::parse("rgb(1,2,3) extra").is_err());
    }

    #[test]
    fn parse_error_reports_input() {
        let err = Color::parse("  blurple ").unwrap_err();
        assert_eq!(err.input, "blurple");
        assert!(err.to_string().contains("blurple"));
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn rgba_string_prints_alpha_minimally() {
        assert_eq!(Color::rgb(255, 107, 107).to_rgba_string(), "rgba(255,107,107,1)");
        assert_eq!(Color::rgba(0, 0, 0, 0.5).to_rgba_string(), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn rgba_string_rounds_alpha_to_thousandths() {
        let color = Color::parse("#00000080").unwrap();
        assert_eq!(color.to_rgba_string(), "rgba(0,0,0,0.502)");
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Color::rgb(0x4e, 0xcd, 0xc4).to_hex(), "#4ecdc4");
    }

    // ── channel math ──────────────────────────────────────────────────────

    #[test]
    fn with_alpha_replaces_existing_alpha() {
        let color = Color::parse("#ff000080").unwrap().with_alpha(1.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(4.0).a, 1.0);
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::rgb(0, 0, 0).lerp(Color::rgb(255, 255, 255), 0.5);
        assert_eq!(mid, Color::rgba(128, 128, 128, 1.0));
    }

    #[test]
    fn lerp_clamps_t() {
        let start = Color::rgb(10, 20, 30);
        let end = Color::rgb(200, 100, 50);
        assert_eq!(start.lerp(end, -1.0), start);
        assert_eq!(start.lerp(end, 2.0), end);
    }

    #[test]
    fn over_opaque_background() {
        let half_red = Color::rgba(255, 0, 0, 0.5);
        let on_black = half_red.over(Color::rgb(0, 0, 0));
        assert_eq!((on_black.r, on_black.g, on_black.b), (128, 0, 0));
        assert_eq!(on_black.a, 1.0);
    }
}
