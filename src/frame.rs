//! Framing of a source stream inside a container.
//!
//! Computes where content of a given aspect ratio lands when it is scaled to
//! cover a container and cropped ("aspect-fill"), or scaled to fit entirely
//! inside it with letterbox margins ("aspect-fit"). Both placements are
//! centered.
//!
//! # Example
//!
//! ```
//! use zenguides::{Size, aspect_fill_frame, aspect_fit_frame};
//!
//! // 4:3 sensor feed on a 1000×500 landscape view.
//! let fill = aspect_fill_frame(Size::new(1000.0, 500.0), 4.0 / 3.0).unwrap();
//! assert_eq!(fill.width, 1000.0);
//! assert!((fill.height - 750.0).abs() < 1e-9);
//! assert!((fill.y + 125.0).abs() < 1e-9);
//!
//! let fit = aspect_fit_frame(Size::new(1000.0, 500.0), 4.0 / 3.0).unwrap();
//! assert_eq!(fit.height, 500.0);
//! assert!((fit.width - 666.666_666_666_666_6).abs() < 1e-9);
//! ```

use crate::error::{OverlayError, check_aspect};

/// A 2D point, either in normalized space (both axes in `0.0..=1.0`) or in
/// screen units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect across the vertical center line of the unit square.
    pub fn mirrored_x(self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: self.y,
        }
    }
}

/// Width × height in screen units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Only meaningful for a validated size.
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    /// Reject sizes that cannot act as a container.
    pub fn validate(self) -> Result<Self, OverlayError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(OverlayError::EmptyContainer)
        }
    }
}

/// Axis-aligned rectangle. `x`/`y` are the minimum corner; with screen
/// conventions that is the top-left.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The unit square, the reference frame of normalized space.
    pub const UNIT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Whether this rect is wider than it is tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Whether `other` lies entirely within this rect, allowing `eps` slack
    /// on every edge.
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.min_x() >= self.min_x() - eps
            && other.min_y() >= self.min_y() - eps
            && other.max_x() <= self.max_x() + eps
            && other.max_y() <= self.max_y() + eps
    }

    /// Largest rect of the given aspect ratio centered inside this one.
    ///
    /// The caller guarantees `aspect > 0` and a non-empty rect.
    pub fn fit_aspect(&self, aspect: f64) -> Rect {
        let own = self.aspect();
        if own == aspect {
            return *self;
        }
        if own > aspect {
            // Self is wider: height pins, center horizontally.
            let width = self.height * aspect;
            Rect::new(
                self.x + (self.width - width) / 2.0,
                self.y,
                width,
                self.height,
            )
        } else {
            let height = self.width / aspect;
            Rect::new(
                self.x,
                self.y + (self.height - height) / 2.0,
                self.width,
                height,
            )
        }
    }

    /// Smallest rect of the given aspect ratio centered over this one,
    /// covering it completely.
    ///
    /// The caller guarantees `aspect > 0` and a non-empty rect.
    pub fn fill_aspect(&self, aspect: f64) -> Rect {
        let own = self.aspect();
        if own == aspect {
            return *self;
        }
        if aspect > own {
            // Content is wider: height pins, overflow left and right.
            let width = self.height * aspect;
            Rect::new(
                self.x + (self.width - width) / 2.0,
                self.y,
                width,
                self.height,
            )
        } else {
            let height = self.width / aspect;
            Rect::new(
                self.x,
                self.y + (self.height - height) / 2.0,
                self.width,
                height,
            )
        }
    }

    /// All four fields are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Map a normalized point into this rect.
    pub fn project(&self, p: Point) -> Point {
        Point::new(self.x + p.x * self.width, self.y + p.y * self.height)
    }

    /// Reflect across the vertical center line of the unit square.
    pub fn mirrored_x(&self) -> Rect {
        Rect::new(1.0 - self.max_x(), self.y, self.width, self.height)
    }
}

/// Rect covered by content of `content_aspect` scaled to fill `container`
/// and cropped. May extend past the container; always centered over it.
pub fn aspect_fill_frame(container: Size, content_aspect: f64) -> Result<Rect, OverlayError> {
    let container = container.validate()?;
    let aspect = check_aspect(content_aspect)?;
    finite(Rect::from_size(container).fill_aspect(aspect))
}

/// Largest rect of `content_aspect` centered inside `container`.
pub fn aspect_fit_frame(container: Size, content_aspect: f64) -> Result<Rect, OverlayError> {
    let container = container.validate()?;
    let aspect = check_aspect(content_aspect)?;
    finite(Rect::from_size(container).fit_aspect(aspect))
}

/// Extreme aspects can push a frame past `f64::MAX`; projecting through
/// such a frame would yield NaN.
fn finite(frame: Rect) -> Result<Rect, OverlayError> {
    if frame.is_finite() {
        Ok(frame)
    } else {
        Err(OverlayError::NonFiniteFrame)
    }
}
