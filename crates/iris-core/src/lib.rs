//! Gradient state model and output derivation for the Iris workbench.
//!
//! This crate owns everything that happens between "the author edits a
//! stop" and "a CSS string comes out": the mutable [`Gradient`] document,
//! color parsing and formatting, and the direction resolver shared by the
//! preset buttons and the angle slider.
//!
//! | Module      | Role                                                    |
//! |-------------|---------------------------------------------------------|
//! | [`gradient`] | Stop bookkeeping, CSS and utility-class derivation, sampling |
//! | [`color`]    | Straight-alpha sRGB color, hex and named-color parsing  |
//! | [`direction`] | Compass presets, angle resolution, utility-class tokens |
//! | [`ident`]    | Millisecond-clock unique ids for stops and saved gradients |
//!
//! # Quick start
//!
//! ```
//! use iris_core::{Gradient, StopUpdate};
//!
//! let mut gradient = Gradient::default();
//! assert_eq!(
//!     gradient.to_css(),
//!     "linear-gradient(to right, rgba(255,107,107,1) 0%, rgba(78,205,196,1) 100%)"
//! );
//!
//! gradient.set_direction("to bottom");
//! gradient.update_stop("1", StopUpdate::opacity(0.5));
//! assert_eq!(
//!     gradient.to_css(),
//!     "linear-gradient(to bottom, rgba(255,107,107,0.5) 0%, rgba(78,205,196,1) 100%)"
//! );
//! ```

pub mod color;
pub mod direction;
pub mod gradient;
pub mod ident;

pub use color::{Color, ParseColorError};
pub use direction::{Preset, angle_from_direction, direction_from_angle, utility_class_for};
pub use gradient::{ColorStop, Gradient, StopUpdate};
