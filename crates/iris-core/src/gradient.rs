//! Gradient state model: stop bookkeeping and output derivation.
//!
//! [`Gradient`] is the single mutable document an editing session operates
//! on. Mutations are total: unknown stop ids degrade to no-ops, and author
//! input is stored unvalidated so that any state a saved gradient can hold
//! can also be loaded back. Derivations sort their own copy of the stops
//! and never disturb stored order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::direction;
use crate::ident;

/// A gradient never drops below this many stops through the editing ops.
const MIN_STOPS: usize = 2;

/// One color stop of a linear gradient.
///
/// `color` is kept as the author wrote it (hex literal or CSS name);
/// parsing happens at derivation time. `position` is a percentage along the
/// gradient line, `opacity` a fraction in `[0, 1]` applied as the alpha
/// channel when the stop is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: String,
    pub color: String,
    pub position: f64,
    pub opacity: f64,
}

impl ColorStop {
    #[inline]
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        position: f64,
        opacity: f64,
    ) -> Self {
        Self { id: id.into(), color: color.into(), position, opacity }
    }
}

/// Partial replacement for a single stop; `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopUpdate {
    pub color: Option<String>,
    pub position: Option<f64>,
    pub opacity: Option<f64>,
}

impl StopUpdate {
    /// Update that replaces only the color.
    #[inline]
    pub fn color(value: impl Into<String>) -> Self {
        Self { color: Some(value.into()), ..Self::default() }
    }

    /// Update that replaces only the position.
    #[inline]
    pub fn position(value: f64) -> Self {
        Self { position: Some(value), ..Self::default() }
    }

    /// Update that replaces only the opacity.
    #[inline]
    pub fn opacity(value: f64) -> Self {
        Self { opacity: Some(value), ..Self::default() }
    }
}

/// The live gradient document.
///
/// Invariant: editing operations keep at least two stops;
/// [`Gradient::load`] is exempt and accepts whatever was persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    direction: String,
    stops: Vec<ColorStop>,
}

impl Default for Gradient {
    /// The editor's starting document: coral to teal, left to right.
    fn default() -> Self {
        Self {
            direction: "to right".to_string(),
            stops: vec![
                ColorStop::new("1", "#ff6b6b", 0.0, 1.0),
                ColorStop::new("2", "#4ecdc4", 100.0, 1.0),
            ],
        }
    }
}

impl Gradient {
    /// The current direction string, verbatim as set or loaded.
    #[inline]
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// The stops in stored (insertion) order.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Appends a new stop and returns its id.
    ///
    /// The stop lands 20% past the current rightmost stop (capped at 100),
    /// or at 50% when the list is empty, with a random `#rrggbb` color and
    /// full opacity.
    pub fn add_stop(&mut self) -> String {
        let position = if self.stops.is_empty() {
            50.0
        } else {
            let max = self.stops.iter().map(|s| s.position).fold(f64::MIN, f64::max);
            (max + 20.0).min(100.0)
        };
        let id = ident::next_id();
        self.stops.push(ColorStop::new(id.clone(), random_hex_color(), position, 1.0));
        id
    }

    /// Removes the stop with `id` if at least two stops would remain.
    ///
    /// Returns whether a stop was removed; at the two-stop floor or with an
    /// unknown id this is a no-op.
    pub fn remove_stop(&mut self, id: &str) -> bool {
        if self.stops.len() <= MIN_STOPS {
            log::debug!("ignoring remove of stop {id:?}: already at the {MIN_STOPS}-stop floor");
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|s| s.id != id);
        self.stops.len() != before
    }

    /// Merges `update` into the stop with `id`.
    ///
    /// Returns whether a stop matched; an unknown id leaves the document
    /// untouched.
    pub fn update_stop(&mut self, id: &str, update: StopUpdate) -> bool {
        let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) else {
            log::debug!("ignoring update for unknown stop {id:?}");
            return false;
        };
        if let Some(color) = update.color {
            stop.color = color;
        }
        if let Some(position) = update.position {
            stop.position = position;
        }
        if let Some(opacity) = update.opacity {
            stop.opacity = opacity;
        }
        true
    }

    /// Replaces the direction string verbatim, without validation.
    #[inline]
    pub fn set_direction(&mut self, direction: impl Into<String>) {
        self.direction = direction.into();
    }

    /// Restores the default document.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces the whole document with a saved state.
    ///
    /// No validation: fewer than two stops, unparseable colors, and
    /// out-of-range positions are accepted as stored.
    pub fn load(&mut self, direction: impl Into<String>, stops: Vec<ColorStop>) {
        self.direction = direction.into();
        self.stops = stops;
    }

    /// Renders the document as a CSS `linear-gradient()` value.
    ///
    /// Stops are emitted in ascending position order (a sorted copy; stored
    /// order is untouched). Parseable colors render as `rgba()` tokens with
    /// the stop opacity as alpha; a color the parser rejects passes through
    /// verbatim and the rendering surface gets to reflect it back.
    pub fn to_css(&self) -> String {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        let stops = sorted
            .iter()
            .map(|s| format!("{} {}%", css_color_token(&s.color, s.opacity), s.position))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}, {})", self.direction, stops)
    }

    /// Renders the document as a Tailwind utility-class string.
    ///
    /// Semantics: direction token from the fixed compass table (anything
    /// else, custom angles included, falls back to `bg-gradient-to-r`);
    /// endpoints are the first and last stop colors in stored order with
    /// whitespace stripped, or `#000000`/`#ffffff` when absent. Middle
    /// stops and opacity do not participate; Tailwind's two-endpoint form
    /// cannot express them.
    pub fn to_tailwind(&self) -> String {
        let class = direction::utility_class_for(&self.direction);
        let from = self
            .stops
            .first()
            .map(|s| strip_whitespace(&s.color))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "#000000".to_string());
        let to = self
            .stops
            .last()
            .map(|s| strip_whitespace(&s.color))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "#ffffff".to_string());
        format!("{class} from-[{from}] to-[{to}]")
    }

    /// Samples the gradient at `position` (same percentage units as stop
    /// positions).
    ///
    /// Stops whose colors do not parse are skipped. Positions outside the
    /// stop range clamp to the nearest end. Returns `None` when no stop
    /// parses at all.
    pub fn evaluate(&self, position: f64) -> Option<Color> {
        let mut anchors: Vec<(f64, Color)> = self
            .stops
            .iter()
            .filter_map(|s| {
                Color::parse(&s.color).ok().map(|c| (s.position, c.with_alpha(s.opacity)))
            })
            .collect();
        anchors.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (first_pos, first_color) = *anchors.first()?;
        let (last_pos, last_color) = *anchors.last()?;
        if position <= first_pos {
            return Some(first_color);
        }
        if position >= last_pos {
            return Some(last_color);
        }
        for pair in anchors.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if position <= p1 {
                let span = p1 - p0;
                // Coincident anchors would divide by zero; snap to the left one.
                let local = if span <= f64::EPSILON { 0.0 } else { (position - p0) / span };
                return Some(c0.lerp(c1, local));
            }
        }
        Some(last_color)
    }
}

/// Formats one stop's color token for CSS output.
fn css_color_token(color: &str, opacity: f64) -> String {
    match Color::parse(color) {
        Ok(parsed) => parsed.with_alpha(opacity).to_rgba_string(),
        Err(_) => color.to_string(),
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn random_hex_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FF_FF);
    format!("#{value:06x}")
}
