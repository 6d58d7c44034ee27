//! Line-based composition grids.
//!
//! Every generator is a pure function returning segments in the normalized
//! unit square. Coordinates are exact constructions, never clamped.
//!
//! | Guide | Lines |
//! |---|---|
//! | [`rule_of_thirds`] | x, y ∈ {1/3, 2/3} |
//! | [`golden_ratio`] | x, y ∈ {1/φ, 1 − 1/φ} |
//! | [`golden_triangle`], [`square_diagonals`], [`fibonacci_diagonals`] | both main diagonals |
//! | [`fibonacci_matrix`] | x, y ∈ {1/2, 2/3, 3/5, 5/8} |
//! | [`harmonic_armature`] | main diagonals + 4 half-diagonals through the edge midpoints |
//! | [`dynamic_symmetry_grid`] | root-rectangle band edges + its reciprocal diagonals |

use alloc::vec;
use alloc::vec::Vec;

use crate::element::OverlayLine;
use crate::error::{OverlayError, check_aspect};
use crate::frame::Point;

/// The golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;
/// 1 / φ = φ − 1.
pub const PHI_INV: f64 = 0.618_033_988_749_894_9;
pub const SQRT_2: f64 = core::f64::consts::SQRT_2;
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const SQRT_5: f64 = 2.236_067_977_499_79;

const THIRDS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];
const FIBONACCI_RATIOS: [f64; 4] = [1.0 / 2.0, 2.0 / 3.0, 3.0 / 5.0, 5.0 / 8.0];

fn diagonal(a: Point, b: Point) -> OverlayLine {
    OverlayLine::new(a, b)
}

/// A vertical and a horizontal line at each position.
fn cross_grid(positions: &[f64]) -> Vec<OverlayLine> {
    positions
        .iter()
        .flat_map(|&t| [OverlayLine::vertical(t), OverlayLine::horizontal(t)])
        .collect()
}

/// The four intersections of the thirds grid.
pub fn thirds_intersections() -> [Point; 4] {
    let [a, b] = THIRDS;
    [
        Point::new(a, a),
        Point::new(a, b),
        Point::new(b, a),
        Point::new(b, b),
    ]
}

/// Verticals and horizontals at 1/3 and 2/3.
pub fn rule_of_thirds() -> Vec<OverlayLine> {
    cross_grid(&THIRDS)
}

/// Verticals and horizontals at 1/φ ≈ 0.618 and 1 − 1/φ ≈ 0.382.
pub fn golden_ratio() -> Vec<OverlayLine> {
    let inv = 1.0 - PHI_INV;
    vec![
        OverlayLine::vertical(PHI_INV),
        OverlayLine::vertical(inv),
        OverlayLine::horizontal(PHI_INV),
        OverlayLine::horizontal(inv),
    ]
}

/// The two main diagonals, descending one first.
pub fn golden_triangle() -> Vec<OverlayLine> {
    vec![
        diagonal(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        diagonal(Point::new(1.0, 0.0), Point::new(0.0, 1.0)),
    ]
}

/// Same geometry as [`golden_triangle`]; a separate guide for selection.
pub fn square_diagonals() -> Vec<OverlayLine> {
    golden_triangle()
}

/// Verticals and horizontals at successive Fibonacci ratios.
pub fn fibonacci_matrix() -> Vec<OverlayLine> {
    cross_grid(&FIBONACCI_RATIOS)
}

/// The two main diagonals, the second drawn bottom-left to top-right.
pub fn fibonacci_diagonals() -> Vec<OverlayLine> {
    vec![
        diagonal(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        diagonal(Point::new(0.0, 1.0), Point::new(1.0, 0.0)),
    ]
}

/// Main diagonals plus the diamond joining the four edge midpoints.
pub fn harmonic_armature() -> Vec<OverlayLine> {
    let m = 0.5;
    let mut lines = fibonacci_diagonals();
    lines.extend([
        diagonal(Point::new(0.0, m), Point::new(m, 0.0)),
        diagonal(Point::new(m, 0.0), Point::new(1.0, m)),
        diagonal(Point::new(1.0, m), Point::new(m, 1.0)),
        diagonal(Point::new(m, 1.0), Point::new(0.0, m)),
    ]);
    lines
}

/// Root-rectangle grid for `ratio`.
///
/// The root rectangle spans the full width, height `1 / ratio`, vertically
/// centered. Emits its top and bottom edges, then the two diagonals across
/// it. A ratio below 1 describes the same rectangle turned on its side and
/// is replaced by its reciprocal.
pub fn dynamic_symmetry_grid(ratio: f64) -> Result<Vec<OverlayLine>, OverlayError> {
    let ratio = check_aspect(ratio)?;
    let ratio = if ratio < 1.0 { 1.0 / ratio } else { ratio };
    Ok(root_rectangle_grid(ratio))
}

fn root_rectangle_grid(ratio: f64) -> Vec<OverlayLine> {
    let h = 1.0 / ratio;
    let y = (1.0 - h) / 2.0;
    vec![
        OverlayLine::horizontal(y),
        OverlayLine::horizontal(1.0 - y),
        diagonal(Point::new(0.0, y), Point::new(1.0, 1.0 - y)),
        diagonal(Point::new(0.0, 1.0 - y), Point::new(1.0, y)),
    ]
}

/// √2 root rectangle: band at y ≈ 0.1464 … 0.8536.
pub fn dynamic_symmetry_root2() -> Vec<OverlayLine> {
    root_rectangle_grid(SQRT_2)
}

pub fn dynamic_symmetry_root3() -> Vec<OverlayLine> {
    root_rectangle_grid(SQRT_3)
}

pub fn dynamic_symmetry_root5() -> Vec<OverlayLine> {
    root_rectangle_grid(SQRT_5)
}

/// Golden root rectangle (ratio φ).
pub fn dynamic_symmetry_root_phi() -> Vec<OverlayLine> {
    root_rectangle_grid(PHI)
}
