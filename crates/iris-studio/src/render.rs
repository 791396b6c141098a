//! Panel rendering.
//!
//! Everything here returns plain `String`s; the editor loop decides when to
//! print them. Truecolor output uses 24-bit SGR escapes and degrades to a
//! block-character luminance ramp when colors are off.

use iris_core::{Color, Gradient, angle_from_direction};

use crate::theme::Theme;

/// Character width of the preview bar.
pub const BAR_WIDTH: usize = 56;
/// Character width of section rules.
const RULE_WIDTH: usize = 62;

const RAMP: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// The full workbench panel: preview bar, stop table, derived outputs.
pub fn panel(gradient: &Gradient, theme: &Theme, color: bool) -> String {
    let direction = gradient.direction();
    let angle = angle_from_direction(direction);
    let surface = surface_color(theme);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&section_rule(&format!("Preview · {direction} · {angle}°")));
    out.push_str("  ");
    out.push_str(&preview_bar(gradient, BAR_WIDTH, surface, color));
    out.push('\n');
    out.push('\n');
    out.push_str(&section_rule("Stops"));
    out.push_str(&stop_table(gradient, color));
    out.push('\n');
    out.push_str(&section_rule("CSS"));
    out.push_str("  ");
    out.push_str(&gradient.to_css());
    out.push('\n');
    out.push('\n');
    out.push_str(&section_rule("Tailwind"));
    out.push_str("  ");
    out.push_str(&gradient.to_tailwind());
    out.push('\n');
    out
}

/// One-line gradient bar, sampled per column and composited over `surface`.
///
/// Columns that cannot be sampled (no stop parses) render as `·`.
pub fn preview_bar(gradient: &Gradient, width: usize, surface: Color, color: bool) -> String {
    let mut bar = String::new();
    let mut colored = false;
    for col in 0..width {
        let position = if width > 1 { col as f64 / (width - 1) as f64 * 100.0 } else { 0.0 };
        match gradient.evaluate(position) {
            Some(sample) => {
                let c = sample.over(surface);
                if color {
                    bar.push_str(&format!("\x1b[48;2;{};{};{}m ", c.r, c.g, c.b));
                    colored = true;
                } else {
                    bar.push(ramp_char(c));
                }
            }
            None => bar.push('·'),
        }
    }
    if colored {
        bar.push_str("\x1b[0m");
    }
    bar
}

/// The stop table in stored order, one row per stop.
pub fn stop_table(gradient: &Gradient, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:>2}  {:<15}  {:<25}  {:>6}  {:>7}\n",
        "#", "id", "color", "pos", "alpha"
    ));
    for (index, stop) in gradient.stops().iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}  {:<15}  {}{:<22}  {:>5}%  {:>7}\n",
            index + 1,
            stop.id,
            swatch(&stop.color, color),
            stop.color,
            stop.position,
            round3(stop.opacity),
        ));
    }
    out
}

/// Detail card for one theme: role colors and its decorative gradients.
pub fn theme_card(theme: &Theme, color: bool) -> String {
    let c = theme.colors;
    let g = theme.gradients;
    let mut out = String::new();
    out.push('\n');
    out.push_str(&section_rule(&format!("Theme · {}", theme.name)));
    let roles = [
        ("primary", c.primary),
        ("secondary", c.secondary),
        ("accent", c.accent),
        ("background", c.background),
        ("surface", c.surface),
        ("text", c.text),
        ("muted", c.muted),
    ];
    for (role, value) in roles {
        out.push_str(&format!("  {role:<11} {}{value}\n", swatch(value, color)));
    }
    out.push('\n');
    for (slot, value) in [("hero", g.hero), ("card", g.card), ("button", g.button)] {
        out.push_str(&format!("  {slot:<7} {value}\n"));
    }
    out
}

/// A two-block color swatch, `??` when the color does not parse, blank
/// padding when colors are off.
fn swatch(value: &str, color: bool) -> String {
    match Color::parse(value) {
        Ok(c) if color => format!("\x1b[38;2;{};{};{}m██\x1b[0m ", c.r, c.g, c.b),
        Ok(_) => "   ".to_string(),
        Err(_) => "?? ".to_string(),
    }
}

/// A `── Title ───…` rule padded to the panel width.
pub fn section_rule(title: &str) -> String {
    let header = format!("  ── {title} ");
    let used = header.chars().count();
    let fill = RULE_WIDTH.saturating_sub(used);
    format!("{header}{}\n", "─".repeat(fill))
}

/// The theme surface translucent samples composite against.
pub fn surface_color(theme: &Theme) -> Color {
    // Theme tables carry parseable hex roles; fall back to black if one
    // ever does not.
    Color::parse(theme.colors.surface).unwrap_or(Color::rgb(0, 0, 0))
}

fn ramp_char(c: Color) -> char {
    let luminance = 0.2126 * c.r as f64 + 0.7152 * c.g as f64 + 0.0722 * c.b as f64;
    let index = (luminance / 255.0 * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[index.min(RAMP.len() - 1)]
}

fn round3(x: f64) -> f64 {
    (x * 1e3).round() / 1e3
}
