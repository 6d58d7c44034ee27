//! Overlay primitives and their content-derived identity.
//!
//! All coordinates here are normalized. Identity is derived from geometry,
//! rounded to 6 decimal places, so the same nominal guide recomputed on the
//! next frame keeps the same [`ElementId`] even when floating-point jitter
//! moves it by a few ULPs. Renderers use this to keep animations (dash
//! phase, trim progress) attached to the right guide across updates.

use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::frame::Point;

/// Decimal places kept by identity quantization.
pub const ID_DECIMALS: u32 = 6;
const ID_SCALE: f64 = 1_000_000.0;

/// A straight guide segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayLine {
    pub start: Point,
    pub end: Point,
}

impl OverlayLine {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment from `(x1, y1)` to `(x2, y2)`.
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Full-height vertical line at `x`.
    pub const fn vertical(x: f64) -> Self {
        Self::from_coords(x, 0.0, x, 1.0)
    }

    /// Full-width horizontal line at `y`.
    pub const fn horizontal(y: f64) -> Self {
        Self::from_coords(0.0, y, 1.0, y)
    }

    /// Content-derived identity of this segment. Direction matters: a
    /// reversed segment is a different guide for animation purposes.
    pub fn id(&self) -> ElementId {
        ElementId::Line {
            start: quantize_point(self.start),
            end: quantize_point(self.end),
        }
    }

    pub fn mirrored_x(&self) -> Self {
        Self::new(self.start.mirrored_x(), self.end.mirrored_x())
    }
}

/// An open polyline, drawn in point order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayCurve {
    pub points: Vec<Point>,
}

impl OverlayCurve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn mirrored_x(&self) -> Self {
        Self::new(self.points.iter().map(|p| p.mirrored_x()).collect())
    }
}

/// Anything an overlay can draw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayElement {
    Line(OverlayLine),
    Curve(OverlayCurve),
    /// A focal point, typically drawn as a small circle.
    HighlightPoint(Point),
}

impl OverlayElement {
    /// Stable identity for list diffing.
    pub fn id(&self) -> ElementId {
        match self {
            Self::Line(line) => line.id(),
            Self::Curve(curve) => ElementId::Curve {
                first: curve.points.first().copied().map(quantize_point),
                count: curve.points.len(),
            },
            Self::HighlightPoint(p) => ElementId::Point(quantize_point(*p)),
        }
    }

    /// Reflect across the vertical center line (`x → 1 − x`).
    pub fn mirrored_x(&self) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.mirrored_x()),
            Self::Curve(curve) => Self::Curve(curve.mirrored_x()),
            Self::HighlightPoint(p) => Self::HighlightPoint(p.mirrored_x()),
        }
    }

    fn mirror_in_place(&mut self) {
        match self {
            Self::Line(line) => *line = line.mirrored_x(),
            Self::Curve(curve) => {
                for p in &mut curve.points {
                    *p = p.mirrored_x();
                }
            }
            Self::HighlightPoint(p) => *p = p.mirrored_x(),
        }
    }

    pub fn as_line(&self) -> Option<&OverlayLine> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_curve(&self) -> Option<&OverlayCurve> {
        match self {
            Self::Curve(curve) => Some(curve),
            _ => None,
        }
    }

    pub fn as_highlight_point(&self) -> Option<Point> {
        match self {
            Self::HighlightPoint(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<OverlayLine> for OverlayElement {
    fn from(line: OverlayLine) -> Self {
        Self::Line(line)
    }
}

impl From<OverlayCurve> for OverlayElement {
    fn from(curve: OverlayCurve) -> Self {
        Self::Curve(curve)
    }
}

/// Reflect every coordinate of every element across the vertical center
/// line. Applying it twice restores the input up to rounding.
pub fn mirror_elements(elements: &mut [OverlayElement]) {
    for e in elements {
        e.mirror_in_place();
    }
}

/// A point quantized to millionths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizedPoint {
    pub x: i64,
    pub y: i64,
}

/// Deterministic identity of an [`OverlayElement`].
///
/// Displays as `line:x1:y1:x2:y2`, `curve:x:y:count` (`curve:empty` for a
/// curve with no points) or `point:x:y`, coordinates printed with 6
/// decimals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    Line {
        start: QuantizedPoint,
        end: QuantizedPoint,
    },
    Curve {
        first: Option<QuantizedPoint>,
        count: usize,
    },
    Point(QuantizedPoint),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { start, end } => {
                f.write_str("line")?;
                write_point(f, start)?;
                write_point(f, end)
            }
            Self::Curve { first: None, .. } => f.write_str("curve:empty"),
            Self::Curve {
                first: Some(first),
                count,
            } => {
                f.write_str("curve")?;
                write_point(f, first)?;
                write!(f, ":{count}")
            }
            Self::Point(p) => {
                f.write_str("point")?;
                write_point(f, p)
            }
        }
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, p: &QuantizedPoint) -> fmt::Result {
    f.write_str(":")?;
    write_fixed(f, p.x)?;
    f.write_str(":")?;
    write_fixed(f, p.y)
}

fn write_fixed(f: &mut fmt::Formatter<'_>, q: i64) -> fmt::Result {
    let sign = if q < 0 { "-" } else { "" };
    let a = q.unsigned_abs();
    let scale = 10u64.pow(ID_DECIMALS);
    write!(f, "{sign}{}.{:06}", a / scale, a % scale)
}

fn quantize(v: f64) -> i64 {
    // `as` saturates; -0.0 rounds to 0.
    (v * ID_SCALE).round() as i64
}

fn quantize_point(p: Point) -> QuantizedPoint {
    QuantizedPoint {
        x: quantize(p.x),
        y: quantize(p.y),
    }
}
