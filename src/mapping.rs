//! Normalized → screen coordinate mapping.
//!
//! Two mappers exist because a camera preview can be presented two ways,
//! and the overlay must be projected into the same rectangle the preview
//! is drawn in:
//!
//! | Preview presentation | Mapper | Frame | Quarter turn |
//! |---|---|---|---|
//! | Letterboxed ([`PreviewGravity::Fit`]) | [`map_normalized_to_screen`] | [`aspect_fit_frame`] | when landscape |
//! | Cropped to fill ([`PreviewGravity::Fill`]) | [`map_normalized_to_screen_no_rotation`] | [`aspect_fill_frame`] | never |
//!
//! Using the fit mapper over a fill preview (or the reverse) makes guides
//! drift away from the content they annotate.

use alloc::vec::Vec;

use crate::element::{OverlayElement, OverlayLine};
use crate::error::{OverlayError, check_aspect};
use crate::frame::{Point, Rect, Size, aspect_fill_frame, aspect_fit_frame};
use crate::orientation::ViewOrientation;

/// How the host presents the camera preview inside its view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreviewGravity {
    /// Scaled to cover the view, overflow cropped.
    #[default]
    Fill,
    /// Scaled to fit inside the view, with letterbox margins.
    Fit,
}

/// Map a portrait-relative normalized point onto a letterboxed preview.
///
/// The sensor occupies the aspect-fit rectangle of `container`; when
/// `is_landscape` is set the point is turned a quarter turn
/// (`(x, y) → (y, 1 − x)`) before projection.
pub fn map_normalized_to_screen(
    p: Point,
    container: Size,
    sensor_aspect: f64,
    is_landscape: bool,
) -> Result<Point, OverlayError> {
    let orientation = ViewOrientation::from_landscape(is_landscape);
    Ok(ScreenMapper::fit(container, sensor_aspect, orientation)?.map(p))
}

/// Map a normalized point onto a cropped (aspect-fill) preview, without
/// any orientation turn.
pub fn map_normalized_to_screen_no_rotation(
    p: Point,
    container: Size,
    sensor_aspect: f64,
) -> Result<Point, OverlayError> {
    Ok(ScreenMapper::fill(container, sensor_aspect)?.map(p))
}

/// A validated normalized → screen mapping.
///
/// Construction checks the container and aspect once; [`map`](Self::map)
/// is then infallible, so a renderer can map every point of every element
/// each frame without handling errors per point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenMapper {
    frame: Rect,
    orientation: ViewOrientation,
}

impl ScreenMapper {
    /// Mapper for a letterboxed preview: aspect-fit frame, quarter turn
    /// when `orientation` is landscape.
    pub fn fit(
        container: Size,
        sensor_aspect: f64,
        orientation: ViewOrientation,
    ) -> Result<Self, OverlayError> {
        let frame = aspect_fit_frame(container, sensor_aspect)?;
        log::debug!("fit mapper: {container:?} @ {sensor_aspect} {orientation:?} → {frame:?}");
        Ok(Self { frame, orientation })
    }

    /// Mapper for a cropped preview: aspect-fill frame, never turned.
    pub fn fill(container: Size, sensor_aspect: f64) -> Result<Self, OverlayError> {
        let frame = aspect_fill_frame(container, sensor_aspect)?;
        log::debug!("fill mapper: {container:?} @ {sensor_aspect} → {frame:?}");
        Ok(Self {
            frame,
            orientation: ViewOrientation::Portrait,
        })
    }

    /// Mapper matching how the preview is presented. `orientation` only
    /// applies to [`PreviewGravity::Fit`].
    pub fn for_preview(
        gravity: PreviewGravity,
        container: Size,
        sensor_aspect: f64,
        orientation: ViewOrientation,
    ) -> Result<Self, OverlayError> {
        match gravity {
            PreviewGravity::Fill => Self::fill(container, sensor_aspect),
            PreviewGravity::Fit => Self::fit(container, sensor_aspect, orientation),
        }
    }

    /// Mapper into an arbitrary screen rectangle, bypassing framing.
    pub fn into_rect(frame: Rect, orientation: ViewOrientation) -> Result<Self, OverlayError> {
        Size::new(frame.width, frame.height).validate()?;
        check_aspect(frame.aspect())?;
        if !frame.is_finite() {
            return Err(OverlayError::NonFiniteFrame);
        }
        Ok(Self { frame, orientation })
    }

    /// Screen rectangle the unit square maps onto.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn orientation(&self) -> ViewOrientation {
        self.orientation
    }

    /// Map one normalized point to screen coordinates.
    pub fn map(&self, p: Point) -> Point {
        self.frame.project(self.orientation.apply(p))
    }

    /// Map a screen point back to portrait-relative normalized coordinates.
    pub fn unmap(&self, s: Point) -> Point {
        let n = Point::new(
            (s.x - self.frame.x) / self.frame.width,
            (s.y - self.frame.y) / self.frame.height,
        );
        self.orientation.invert(n)
    }

    pub fn map_line(&self, line: &OverlayLine) -> (Point, Point) {
        (self.map(line.start), self.map(line.end))
    }

    /// Project an element into screen space, one point at a time.
    pub fn project(&self, element: &OverlayElement) -> ScreenElement {
        match element {
            OverlayElement::Line(line) => {
                let (start, end) = self.map_line(line);
                ScreenElement::Line { start, end }
            }
            OverlayElement::Curve(curve) => {
                ScreenElement::Polyline(curve.points.iter().map(|&p| self.map(p)).collect())
            }
            OverlayElement::HighlightPoint(p) => ScreenElement::Point(self.map(*p)),
        }
    }

    pub fn project_all(&self, elements: &[OverlayElement]) -> Vec<ScreenElement> {
        elements.iter().map(|e| self.project(e)).collect()
    }
}

/// An overlay element in screen coordinates, ready to stroke or fill.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenElement {
    Line { start: Point, end: Point },
    Polyline(Vec<Point>),
    Point(Point),
}
