//! Photographic composition guide geometry for live camera previews.
//!
//! Pure geometry: no pixel operations, no I/O, no hidden state. Guides are
//! authored in a normalized unit square and mapped onto whatever rectangle
//! the camera preview occupies on screen.
//!
//! # Modules
//!
//! - [`frame`] — Aspect-fill / aspect-fit framing of a source inside a container
//! - [`orientation`] — Device orientation and the portrait-relative quarter turn
//! - [`mapping`] — Normalized → screen coordinate mapping and element projection
//! - [`element`] — Overlay primitives (lines, curves, highlight points) and their identity
//! - [`guides`] — Line-based composition grids (thirds, golden ratio, dynamic symmetry, …)
//! - [`spiral`] — Golden spiral built from recursively carved Fibonacci squares
//! - [`composition`] — Composition modes and the mode → element-list selector
//! - `svg` — SVG preview of a projected overlay (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenguides::{CompositionMode, ScreenMapper, Size, SpiralConfig, ViewOrientation};
//!
//! let elements = zenguides::generate_overlay(
//!     CompositionMode::RuleOfThirds,
//!     &SpiralConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(elements.len(), 8); // 4 lines + 4 highlight points
//!
//! let mapper = ScreenMapper::fit(Size::new(390.0, 844.0), 3.0 / 4.0, ViewOrientation::Portrait)
//!     .unwrap();
//! let on_screen: Vec<_> = elements.iter().map(|e| mapper.project(e)).collect();
//! assert_eq!(on_screen.len(), elements.len());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod composition;
pub mod element;
pub mod error;
pub mod frame;
pub mod guides;
pub mod mapping;
pub mod orientation;
pub mod spiral;
#[cfg(feature = "svg")]
pub mod svg;

pub use composition::{Composition, CompositionMode, generate_overlay, lines_for};
pub use element::{ElementId, OverlayCurve, OverlayElement, OverlayLine, mirror_elements};
pub use error::OverlayError;
pub use frame::{Point, Rect, Size, aspect_fill_frame, aspect_fit_frame};
pub use mapping::{
    PreviewGravity, ScreenElement, ScreenMapper, map_normalized_to_screen,
    map_normalized_to_screen_no_rotation,
};
pub use orientation::{DeviceOrientation, ViewOrientation};
pub use spiral::{
    GoldenSpiralBuilder, SpiralConfig, SpiralDirection, Winding, fibonacci_squares,
    golden_spiral_curve,
};
