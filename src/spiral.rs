//! Golden spiral from recursively carved Fibonacci squares.
//!
//! A golden rectangle is centered inside the sensor rectangle, then
//! repeatedly split into a square and a smaller golden remainder. Each
//! square carries one quarter-circle arc; chained together the arcs
//! approximate a logarithmic spiral.
//!
//! ```text
//!     Clockwise, portrait start        direction → corner of the carved square
//!     ┌───────────────┐                Up    → top-right     (remainder below)
//!     │               │                Right → bottom-right  (remainder left)
//!     │      1 Up     │                Down  → bottom-left   (remainder above)
//!     │               │                Left  → top-left      (remainder right)
//!     ├─────┬───┬─────┤
//!     │ 4 L │ 5 │     │                After each square the direction turns
//!     ├─────┴───┤  2  │                once in the winding sense:
//!     │  3 Down │Right│                clockwise  Right → Down → Left → Up → Right
//!     └─────────┴─────┘                counter    Right → Up → Left → Down → Right
//! ```
//!
//! The construction is a small state machine: the current remainder
//! rectangle plus a [`SpiralDirection`]. Mirroring is a post-pass over the
//! finished element list and never feeds back into the winding logic.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::element::{OverlayCurve, OverlayElement, OverlayLine, mirror_elements};
use crate::error::{OverlayError, check_aspect};
use crate::frame::{Point, Rect, Size};
use crate::guides::{PHI, PHI_INV};

/// Direction state driving square placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiralDirection {
    Right,
    Down,
    Left,
    Up,
}

impl SpiralDirection {
    /// All four states in clockwise order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Right → Down → Left → Up → Right.
    pub const fn rotate_clockwise(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    /// Right → Up → Left → Down → Right.
    pub const fn rotate_counter_clockwise(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// One step in the given winding sense.
    pub const fn rotate(self, winding: Winding) -> Self {
        match winding {
            Winding::Clockwise => self.rotate_clockwise(),
            Winding::CounterClockwise => self.rotate_counter_clockwise(),
        }
    }

    /// Split `rect` into the square this direction carves and the remainder.
    fn carve(self, rect: Rect) -> (Rect, Rect) {
        let side = rect.width.min(rect.height);
        match self {
            Self::Up => (
                Rect::new(rect.max_x() - side, rect.min_y(), side, side),
                Rect::new(rect.x, rect.y + side, rect.width, rect.height - side),
            ),
            Self::Right => (
                Rect::new(rect.max_x() - side, rect.max_y() - side, side, side),
                Rect::new(rect.x, rect.y, rect.width - side, rect.height),
            ),
            Self::Down => (
                Rect::new(rect.min_x(), rect.max_y() - side, side, side),
                Rect::new(rect.x, rect.y, rect.width, rect.height - side),
            ),
            Self::Left => (
                Rect::new(rect.min_x(), rect.min_y(), side, side),
                Rect::new(rect.x + side, rect.y, rect.width - side, rect.height),
            ),
        }
    }

    /// Quarter arc for a square carved in this direction: center and the
    /// start/end angles (y axis pointing down), swept from the outer end to
    /// the end shared with the next square.
    fn arc(self, square: Rect, winding: Winding) -> Arc {
        let (l, t, r, b) = (square.min_x(), square.min_y(), square.max_x(), square.max_y());
        let (center, start, end) = match (winding, self) {
            (Winding::Clockwise, Self::Up) => (Point::new(l, b), 3.0 * FRAC_PI_2, 2.0 * PI),
            (Winding::Clockwise, Self::Right) => (Point::new(l, t), 0.0, FRAC_PI_2),
            (Winding::Clockwise, Self::Down) => (Point::new(r, t), FRAC_PI_2, PI),
            (Winding::Clockwise, Self::Left) => (Point::new(r, b), PI, 3.0 * FRAC_PI_2),
            (Winding::CounterClockwise, Self::Up) => (Point::new(r, b), 3.0 * FRAC_PI_2, PI),
            (Winding::CounterClockwise, Self::Left) => (Point::new(r, t), PI, FRAC_PI_2),
            (Winding::CounterClockwise, Self::Down) => (Point::new(l, t), FRAC_PI_2, 0.0),
            (Winding::CounterClockwise, Self::Right) => {
                (Point::new(l, b), 2.0 * PI, 3.0 * FRAC_PI_2)
            }
        };
        Arc {
            center,
            radius: square.width,
            start,
            end,
        }
    }
}

/// Rotational sense of the construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Direction of the first carve for a portrait (or square) golden rectangle.
///
/// A landscape golden rectangle starts one step further along the winding
/// cycle, so the first square is always cut across the long side.
pub const INITIAL_DIRECTION: SpiralDirection = SpiralDirection::Up;

/// Caller-owned spiral settings. Passed by value; never mutated by the builder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralConfig {
    /// Number of squares (and arcs) to emit.
    pub steps: usize,
    /// Angle subdivisions per arc; each arc has `samples_per_arc + 1` points.
    pub samples_per_arc: usize,
    /// Also emit the outline of every carved square.
    pub show_rectangles: bool,
    /// Reflect the finished spiral across the vertical center line.
    pub mirror: bool,
    /// Sensor width / height.
    pub aspect_ratio: f64,
    /// Carve squares clockwise (Right → Down → Left → Up) when set.
    pub clockwise: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            steps: 8,
            samples_per_arc: 32,
            show_rectangles: false,
            mirror: false,
            aspect_ratio: 1.0,
            clockwise: true,
        }
    }
}

impl SpiralConfig {
    /// Minimum change before [`with_aspect_from_view`](Self::with_aspect_from_view)
    /// adopts a new ratio.
    pub const ASPECT_SYNC_TOLERANCE: f64 = 0.001;

    /// Largest accepted `steps`. Squares past this are far below a pixel on
    /// any display and would eventually underflow to zero.
    pub const MAX_STEPS: usize = 64;

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn samples_per_arc(mut self, samples: usize) -> Self {
        self.samples_per_arc = samples;
        self
    }

    pub fn show_rectangles(mut self, show: bool) -> Self {
        self.show_rectangles = show;
        self
    }

    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn aspect_ratio(mut self, aspect: f64) -> Self {
        self.aspect_ratio = aspect;
        self
    }

    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn winding(&self) -> Winding {
        if self.clockwise {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Track the aspect ratio of the view presenting the preview.
    ///
    /// Height is floored at 1 so a collapsing view cannot divide by zero.
    /// Changes within [`ASPECT_SYNC_TOLERANCE`](Self::ASPECT_SYNC_TOLERANCE)
    /// are ignored so layout jitter does not regenerate the overlay.
    pub fn with_aspect_from_view(mut self, view: Size) -> Self {
        let ratio = view.width / view.height.max(1.0);
        if (self.aspect_ratio - ratio).abs() > Self::ASPECT_SYNC_TOLERANCE {
            self.aspect_ratio = ratio;
        }
        self
    }

    /// Reject configurations that would produce NaN or divide by zero.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.samples_per_arc == 0 {
            return Err(OverlayError::ZeroSamplesPerArc);
        }
        if self.steps > Self::MAX_STEPS {
            return Err(OverlayError::TooManySteps);
        }
        check_aspect(self.aspect_ratio)?;
        Ok(())
    }
}

/// One carved square and the direction that placed it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpiralStep {
    pub square: Rect,
    pub direction: SpiralDirection,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Arc {
    center: Point,
    radius: f64,
    start: f64,
    end: f64,
}

impl Arc {
    /// `samples + 1` points, both ends included.
    fn sample(&self, samples: usize, out: &mut Vec<Point>) {
        out.reserve(samples + 1);
        for i in 0..=samples {
            let t = i as f64 / samples as f64;
            let angle = self.start + t * (self.end - self.start);
            out.push(Point::new(
                self.center.x + angle.cos() * self.radius,
                self.center.y + angle.sin() * self.radius,
            ));
        }
    }
}

/// The recursion state: current remainder and direction.
struct Carver {
    rect: Rect,
    direction: SpiralDirection,
    winding: Winding,
    remaining: usize,
}

impl Iterator for Carver {
    type Item = SpiralStep;

    fn next(&mut self) -> Option<SpiralStep> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (square, mut rest) = self.direction.carve(self.rect);
        // The remainder of a golden rectangle is golden. Deriving its short
        // side from the square keeps the error flat; subtracting compounds it.
        let short = square.width * PHI_INV;
        if rest.width < rest.height {
            rest.width = short;
        } else {
            rest.height = short;
        }
        let step = SpiralStep {
            square,
            direction: self.direction,
        };
        self.rect = rest;
        self.direction = self.direction.rotate(self.winding);
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Carver {}

/// Builds golden spiral overlays from a validated [`SpiralConfig`].
///
/// # Example
///
/// ```
/// use zenguides::{GoldenSpiralBuilder, OverlayElement, SpiralConfig};
///
/// let config = SpiralConfig::default().steps(5).show_rectangles(true);
/// let elements = GoldenSpiralBuilder::new(config).unwrap().build();
///
/// let curves = elements.iter().filter(|e| matches!(e, OverlayElement::Curve(_))).count();
/// assert_eq!(curves, 5);
/// assert_eq!(elements.len(), 5 + 4 * 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GoldenSpiralBuilder {
    config: SpiralConfig,
    sensor: Rect,
    golden: Rect,
    start: SpiralDirection,
}

impl GoldenSpiralBuilder {
    pub fn new(config: SpiralConfig) -> Result<Self, OverlayError> {
        if let Err(e) = config.validate() {
            log::warn!("rejecting spiral config {config:?}: {e}");
            return Err(e);
        }
        let sensor = Rect::UNIT.fit_aspect(config.aspect_ratio);
        let golden_aspect = if sensor.is_landscape() { PHI } else { PHI_INV };
        let golden = sensor.fit_aspect(golden_aspect);
        let start = if golden.is_landscape() {
            INITIAL_DIRECTION.rotate(config.winding())
        } else {
            INITIAL_DIRECTION
        };
        log::debug!(
            "golden spiral: sensor {sensor:?}, golden {golden:?}, start {start:?}, {:?}",
            config.winding()
        );
        Ok(Self {
            config,
            sensor,
            golden,
            start,
        })
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Sensor rectangle centered in the unit square.
    pub fn sensor_rect(&self) -> Rect {
        self.sensor
    }

    /// Golden rectangle centered in the sensor rectangle; the first remainder.
    pub fn golden_rect(&self) -> Rect {
        self.golden
    }

    /// Direction of the first carve.
    pub fn start_direction(&self) -> SpiralDirection {
        self.start
    }

    /// The carved squares in construction order, unmirrored.
    pub fn steps(&self) -> impl ExactSizeIterator<Item = SpiralStep> + use<> {
        Carver {
            rect: self.golden,
            direction: self.start,
            winding: self.config.winding(),
            remaining: self.config.steps,
        }
    }

    /// One curve per square, each followed by the square's four edges when
    /// `show_rectangles` is set. Mirrored as a final pass when `mirror` is set.
    pub fn build(&self) -> Vec<OverlayElement> {
        let per_step = if self.config.show_rectangles { 5 } else { 1 };
        let mut elements = Vec::with_capacity(self.config.steps.saturating_mul(per_step));
        let winding = self.config.winding();
        for (i, step) in self.steps().enumerate() {
            log::trace!("spiral step {i}: {:?} {:?}", step.direction, step.square);
            let mut points = Vec::new();
            step.direction
                .arc(step.square, winding)
                .sample(self.config.samples_per_arc, &mut points);
            elements.push(OverlayElement::Curve(OverlayCurve::new(points)));
            if self.config.show_rectangles {
                elements.extend(square_outline(step.square).map(OverlayElement::Line));
            }
        }
        if self.config.mirror {
            mirror_elements(&mut elements);
        }
        elements
    }

    /// Every carved square, mirrored when `mirror` is set.
    pub fn squares(&self) -> Vec<Rect> {
        self.steps()
            .map(|s| {
                if self.config.mirror {
                    s.square.mirrored_x()
                } else {
                    s.square
                }
            })
            .collect()
    }

    /// All arcs joined into a single open curve. Junction points shared by
    /// consecutive arcs appear once.
    pub fn curve(&self) -> OverlayCurve {
        let winding = self.config.winding();
        let mut points = Vec::new();
        let mut arc_points = Vec::new();
        for step in self.steps() {
            arc_points.clear();
            step.direction
                .arc(step.square, winding)
                .sample(self.config.samples_per_arc, &mut arc_points);
            let skip = usize::from(!points.is_empty());
            points.extend_from_slice(&arc_points[skip..]);
        }
        let curve = OverlayCurve::new(points);
        if self.config.mirror {
            curve.mirrored_x()
        } else {
            curve
        }
    }
}

/// Top, right, bottom, left edges, each drawn clockwise.
fn square_outline(r: Rect) -> [OverlayLine; 4] {
    let (l, t, rt, b) = (r.min_x(), r.min_y(), r.max_x(), r.max_y());
    [
        OverlayLine::from_coords(l, t, rt, t),
        OverlayLine::from_coords(rt, t, rt, b),
        OverlayLine::from_coords(rt, b, l, b),
        OverlayLine::from_coords(l, b, l, t),
    ]
}

/// The squares carved by the spiral construction, one per step.
pub fn fibonacci_squares(config: &SpiralConfig) -> Result<Vec<Rect>, OverlayError> {
    Ok(GoldenSpiralBuilder::new(*config)?.squares())
}

/// The whole spiral as one continuous curve.
pub fn golden_spiral_curve(config: &SpiralConfig) -> Result<OverlayCurve, OverlayError> {
    Ok(GoldenSpiralBuilder::new(*config)?.curve())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn near(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn curves(elements: &[OverlayElement]) -> Vec<&OverlayCurve> {
        elements.iter().filter_map(OverlayElement::as_curve).collect()
    }

    // ── direction state machine ─────────────────────────────────────────

    #[test]
    fn rotations_are_four_cycles() {
        for &d in &SpiralDirection::ALL {
            let mut cw = d;
            let mut ccw = d;
            for _ in 0..4 {
                cw = cw.rotate_clockwise();
                ccw = ccw.rotate_counter_clockwise();
            }
            assert_eq!(cw, d);
            assert_eq!(ccw, d);
            assert_eq!(d.rotate_clockwise().rotate_counter_clockwise(), d);
            assert_eq!(d.rotate_counter_clockwise().rotate_clockwise(), d);
            assert_ne!(d.rotate_clockwise(), d);
        }
    }

    #[test]
    fn clockwise_order() {
        assert_eq!(SpiralDirection::Right.rotate_clockwise(), SpiralDirection::Down);
        assert_eq!(SpiralDirection::Up.rotate_clockwise(), SpiralDirection::Right);
        assert_eq!(
            SpiralDirection::Right.rotate(Winding::CounterClockwise),
            SpiralDirection::Up
        );
    }

    #[test]
    fn carve_corners() {
        let r = Rect::new(0.0, 0.0, 2.0, 5.0);
        let (sq, rest) = SpiralDirection::Up.carve(r);
        assert_eq!(sq, Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(rest, Rect::new(0.0, 2.0, 2.0, 3.0));

        let (sq, rest) = SpiralDirection::Down.carve(r);
        assert_eq!(sq, Rect::new(0.0, 3.0, 2.0, 2.0));
        assert_eq!(rest, Rect::new(0.0, 0.0, 2.0, 3.0));

        let wide = Rect::new(1.0, 1.0, 5.0, 2.0);
        let (sq, rest) = SpiralDirection::Right.carve(wide);
        assert_eq!(sq, Rect::new(4.0, 1.0, 2.0, 2.0));
        assert_eq!(rest, Rect::new(1.0, 1.0, 3.0, 2.0));

        let (sq, rest) = SpiralDirection::Left.carve(wide);
        assert_eq!(sq, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(rest, Rect::new(3.0, 1.0, 3.0, 2.0));
    }

    // ── setup ───────────────────────────────────────────────────────────

    #[test]
    fn golden_rect_matches_sensor_orientation() {
        let portrait = GoldenSpiralBuilder::new(SpiralConfig::default().aspect_ratio(0.75)).unwrap();
        assert_eq!(portrait.sensor_rect(), Rect::new(0.125, 0.0, 0.75, 1.0));
        let g = portrait.golden_rect();
        assert!((g.aspect() - PHI_INV).abs() < 1e-12);
        assert!(portrait.sensor_rect().contains_rect(&g, EPS));
        assert_eq!(portrait.start_direction(), SpiralDirection::Up);

        let landscape = GoldenSpiralBuilder::new(SpiralConfig::default().aspect_ratio(16.0 / 9.0))
            .unwrap();
        let g = landscape.golden_rect();
        assert!((g.aspect() - PHI).abs() < 1e-12);
        assert!(landscape.sensor_rect().contains_rect(&g, EPS));
        assert_eq!(landscape.start_direction(), SpiralDirection::Right);

        let ccw = GoldenSpiralBuilder::new(
            SpiralConfig::default().aspect_ratio(2.0).clockwise(false),
        )
        .unwrap();
        assert_eq!(ccw.start_direction(), SpiralDirection::Left);
    }

    #[test]
    fn wide_sensor_pins_golden_height() {
        // Sensor 2:1 is wider than φ: golden height equals sensor height.
        let b = GoldenSpiralBuilder::new(SpiralConfig::default().aspect_ratio(2.0)).unwrap();
        let (s, g) = (b.sensor_rect(), b.golden_rect());
        assert!((g.height - s.height).abs() < EPS);
        assert!((g.x - (1.0 - g.width) / 2.0).abs() < EPS);
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn single_step_example() {
        let config = SpiralConfig::default()
            .steps(1)
            .samples_per_arc(4)
            .aspect_ratio(1.0)
            .clockwise(true)
            .mirror(false);
        let elements = GoldenSpiralBuilder::new(config).unwrap().build();
        assert_eq!(elements.len(), 1);
        let c = elements[0].as_curve().unwrap();
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn zero_steps_is_empty() {
        let b = GoldenSpiralBuilder::new(SpiralConfig::default().steps(0)).unwrap();
        assert!(b.build().is_empty());
        assert!(b.curve().is_empty());
        assert!(b.squares().is_empty());
    }

    #[test]
    fn rejects_zero_samples_and_bad_aspect() {
        assert_eq!(
            GoldenSpiralBuilder::new(SpiralConfig::default().samples_per_arc(0)),
            Err(OverlayError::ZeroSamplesPerArc)
        );
        assert_eq!(
            GoldenSpiralBuilder::new(SpiralConfig::default().aspect_ratio(-1.0)),
            Err(OverlayError::InvalidAspectRatio)
        );
        assert_eq!(
            fibonacci_squares(&SpiralConfig::default().aspect_ratio(f64::NAN)),
            Err(OverlayError::InvalidAspectRatio)
        );
    }

    #[test]
    fn rejects_step_counts_past_the_limit() {
        let at_limit = SpiralConfig::default().steps(SpiralConfig::MAX_STEPS);
        assert!(GoldenSpiralBuilder::new(at_limit).is_ok());
        assert_eq!(
            GoldenSpiralBuilder::new(at_limit.steps(SpiralConfig::MAX_STEPS + 1)),
            Err(OverlayError::TooManySteps)
        );
        assert_eq!(
            fibonacci_squares(&SpiralConfig::default().steps(usize::MAX)),
            Err(OverlayError::TooManySteps)
        );
    }

    #[test]
    fn deep_spirals_keep_shrinking_by_phi() {
        for aspect in [0.75, 1.0, 16.0 / 9.0] {
            let config = SpiralConfig::default()
                .steps(SpiralConfig::MAX_STEPS)
                .aspect_ratio(aspect);
            let squares = fibonacci_squares(&config).unwrap();
            assert_eq!(squares.len(), SpiralConfig::MAX_STEPS);
            for (i, pair) in squares.windows(2).enumerate() {
                let ratio = pair[1].width / pair[0].width;
                assert!(
                    pair[1].width < pair[0].width && (ratio - PHI_INV).abs() < 1e-12,
                    "aspect {aspect}: square {} side {} after {}",
                    i + 1,
                    pair[1].width,
                    pair[0].width
                );
            }
        }
    }

    #[test]
    fn arcs_are_continuous_for_both_windings() {
        for clockwise in [true, false] {
            for aspect in [0.5, 0.75, 1.0, 4.0 / 3.0, 16.0 / 9.0] {
                let config = SpiralConfig::default()
                    .steps(9)
                    .samples_per_arc(8)
                    .aspect_ratio(aspect)
                    .clockwise(clockwise);
                let elements = GoldenSpiralBuilder::new(config).unwrap().build();
                let cs = curves(&elements);
                for pair in cs.windows(2) {
                    let end = *pair[0].points.last().unwrap();
                    let start = pair[1].points[0];
                    assert!(
                        near(end, start),
                        "gap {end:?} → {start:?} (cw={clockwise}, aspect={aspect})"
                    );
                }
            }
        }
    }

    #[test]
    fn arc_points_stay_in_their_square() {
        let config = SpiralConfig::default().steps(6).samples_per_arc(16);
        let b = GoldenSpiralBuilder::new(config).unwrap();
        let elements = b.build();
        for (step, curve) in b.steps().zip(curves(&elements)) {
            let sq = step.square;
            for p in &curve.points {
                assert!(
                    p.x >= sq.min_x() - EPS
                        && p.x <= sq.max_x() + EPS
                        && p.y >= sq.min_y() - EPS
                        && p.y <= sq.max_y() + EPS,
                    "{p:?} outside {sq:?}"
                );
            }
        }
    }

    #[test]
    fn outlines_follow_each_curve() {
        let config = SpiralConfig::default().steps(3).show_rectangles(true);
        let b = GoldenSpiralBuilder::new(config).unwrap();
        let elements = b.build();
        assert_eq!(elements.len(), 15);
        for (i, step) in b.steps().enumerate() {
            assert!(elements[i * 5].as_curve().is_some());
            let edges: Vec<OverlayLine> = elements[i * 5 + 1..i * 5 + 5]
                .iter()
                .map(|e| *e.as_line().unwrap())
                .collect();
            assert_eq!(edges.as_slice(), square_outline(step.square).as_slice());
            for pair in edges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert_eq!(edges[3].end, edges[0].start);
        }
    }

    #[test]
    fn mirror_reflects_unmirrored_output() {
        let base = SpiralConfig::default().steps(4).show_rectangles(true);
        let plain = GoldenSpiralBuilder::new(base).unwrap().build();
        let mirrored = GoldenSpiralBuilder::new(base.mirror(true)).unwrap().build();
        assert_eq!(plain.len(), mirrored.len());
        for (p, m) in plain.iter().zip(&mirrored) {
            assert_eq!(p.mirrored_x(), *m);
        }
        let squares = fibonacci_squares(&base.mirror(true)).unwrap();
        let plain_squares = fibonacci_squares(&base).unwrap();
        assert_eq!(squares[0], plain_squares[0].mirrored_x());
    }

    #[test]
    fn single_curve_joins_arcs() {
        let config = SpiralConfig::default().steps(4).samples_per_arc(10);
        let curve = golden_spiral_curve(&config).unwrap();
        assert_eq!(curve.len(), 4 * 10 + 1);
        let elements = GoldenSpiralBuilder::new(config).unwrap().build();
        let first = curves(&elements)[0];
        assert_eq!(curve.points[..11], first.points[..]);
    }

    #[test]
    fn config_defaults_and_aspect_sync() {
        let c = SpiralConfig::default();
        assert_eq!((c.steps, c.samples_per_arc), (8, 32));
        assert!(c.clockwise && !c.mirror && !c.show_rectangles);

        let synced = c.with_aspect_from_view(Size::new(390.0, 844.0));
        assert!((synced.aspect_ratio - 390.0 / 844.0).abs() < 1e-12);

        let jitter = synced.with_aspect_from_view(Size::new(390.2, 844.0));
        assert_eq!(jitter.aspect_ratio, synced.aspect_ratio);

        let collapsed = c.with_aspect_from_view(Size::new(50.0, 0.0));
        assert_eq!(collapsed.aspect_ratio, 50.0);
    }
}
