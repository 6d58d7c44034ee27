//! Composition modes and the mode → overlay selector.
//!
//! # Example
//!
//! ```
//! use zenguides::{Composition, CompositionMode, OverlayElement};
//!
//! let composition = Composition::new("goldenSpiral".parse().unwrap());
//! let elements = composition.elements().unwrap();
//! assert!(elements.iter().all(|e| matches!(e, OverlayElement::Curve(_))));
//!
//! assert_eq!(CompositionMode::DynamicSymmetryRoot3.to_string(), "dynamicSymmetryRoot3");
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::element::{OverlayElement, OverlayLine};
use crate::error::OverlayError;
use crate::guides;
use crate::spiral::{GoldenSpiralBuilder, SpiralConfig};

/// A composition guide. Each mode maps to exactly one generator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CompositionMode {
    #[default]
    RuleOfThirds,
    GoldenRatio,
    GoldenSpiral,
    GoldenTriangle,
    FibonacciMatrix,
    FibonacciDiagonals,
    HarmonicArmature,
    DynamicSymmetryRoot2,
    DynamicSymmetryRoot3,
    DynamicSymmetryRoot5,
    SquareDiagonals,
}

impl CompositionMode {
    /// Every mode, in picker order.
    pub const ALL: [Self; 11] = [
        Self::RuleOfThirds,
        Self::GoldenRatio,
        Self::GoldenSpiral,
        Self::GoldenTriangle,
        Self::FibonacciMatrix,
        Self::FibonacciDiagonals,
        Self::HarmonicArmature,
        Self::DynamicSymmetryRoot2,
        Self::DynamicSymmetryRoot3,
        Self::DynamicSymmetryRoot5,
        Self::SquareDiagonals,
    ];

    /// Stable camelCase identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RuleOfThirds => "ruleOfThirds",
            Self::GoldenRatio => "goldenRatio",
            Self::GoldenSpiral => "goldenSpiral",
            Self::GoldenTriangle => "goldenTriangle",
            Self::FibonacciMatrix => "fibonacciMatrix",
            Self::FibonacciDiagonals => "fibonacciDiagonals",
            Self::HarmonicArmature => "harmonicArmature",
            Self::DynamicSymmetryRoot2 => "dynamicSymmetryRoot2",
            Self::DynamicSymmetryRoot3 => "dynamicSymmetryRoot3",
            Self::DynamicSymmetryRoot5 => "dynamicSymmetryRoot5",
            Self::SquareDiagonals => "squareDiagonals",
        }
    }

    /// Human-readable name for pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RuleOfThirds => "Rule of Thirds",
            Self::GoldenRatio => "Golden Ratio",
            Self::GoldenSpiral => "Golden Spiral",
            Self::GoldenTriangle => "Golden Triangle",
            Self::FibonacciMatrix => "Fibonacci Matrix",
            Self::FibonacciDiagonals => "Fibonacci Diagonals",
            Self::HarmonicArmature => "Harmonic Armature",
            Self::DynamicSymmetryRoot2 => "Dynamic Symmetry √2",
            Self::DynamicSymmetryRoot3 => "Dynamic Symmetry √3",
            Self::DynamicSymmetryRoot5 => "Dynamic Symmetry √5",
            Self::SquareDiagonals => "Square Diagonals",
        }
    }

    /// Whether this mode draws curves rather than straight lines.
    pub const fn is_curve_based(self) -> bool {
        matches!(self, Self::GoldenSpiral)
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositionMode {
    type Err = OverlayError;

    /// Parse a camelCase identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(OverlayError::UnknownMode)
    }
}

/// Raw line layer for `mode`. Empty for curve-based modes.
pub fn lines_for(mode: CompositionMode) -> Vec<OverlayLine> {
    use CompositionMode::*;
    match mode {
        RuleOfThirds => guides::rule_of_thirds(),
        GoldenRatio => guides::golden_ratio(),
        GoldenSpiral => Vec::new(),
        GoldenTriangle => guides::golden_triangle(),
        FibonacciMatrix => guides::fibonacci_matrix(),
        FibonacciDiagonals => guides::fibonacci_diagonals(),
        HarmonicArmature => guides::harmonic_armature(),
        DynamicSymmetryRoot2 => guides::dynamic_symmetry_root2(),
        DynamicSymmetryRoot3 => guides::dynamic_symmetry_root3(),
        DynamicSymmetryRoot5 => guides::dynamic_symmetry_root5(),
        SquareDiagonals => guides::square_diagonals(),
    }
}

/// Full element list for `mode`.
///
/// The spiral mode returns the spiral builder's output as is. Every other
/// mode wraps its lines as [`OverlayElement::Line`]; the rule of thirds
/// additionally gets a highlight point on each of its four intersections.
/// `spiral` is only consulted (and only validated) for the spiral mode.
pub fn generate_overlay(
    mode: CompositionMode,
    spiral: &SpiralConfig,
) -> Result<Vec<OverlayElement>, OverlayError> {
    log::trace!("generating overlay for {mode}");
    if mode == CompositionMode::GoldenSpiral {
        return Ok(GoldenSpiralBuilder::new(*spiral)?.build());
    }
    let mut elements: Vec<OverlayElement> =
        lines_for(mode).into_iter().map(OverlayElement::Line).collect();
    if mode == CompositionMode::RuleOfThirds {
        elements.extend(
            guides::thirds_intersections()
                .into_iter()
                .map(OverlayElement::HighlightPoint),
        );
    }
    Ok(elements)
}

/// Caller-owned composition settings: which guide, and how to build the
/// spiral when that guide is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Composition {
    pub mode: CompositionMode,
    pub spiral: SpiralConfig,
}

impl Composition {
    pub fn new(mode: CompositionMode) -> Self {
        Self {
            mode,
            spiral: SpiralConfig::default(),
        }
    }

    pub fn spiral(mut self, spiral: SpiralConfig) -> Self {
        self.spiral = spiral;
        self
    }

    /// The element list for the current settings.
    pub fn elements(&self) -> Result<Vec<OverlayElement>, OverlayError> {
        generate_overlay(self.mode, &self.spiral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Point;
    use alloc::string::ToString;

    #[test]
    fn names_round_trip() {
        for mode in CompositionMode::ALL {
            assert_eq!(mode.name().parse::<CompositionMode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(
            "DYNAMICSYMMETRYROOT5".parse::<CompositionMode>(),
            Ok(CompositionMode::DynamicSymmetryRoot5)
        );
        assert_eq!(
            " goldenRatio ".parse::<CompositionMode>(),
            Ok(CompositionMode::GoldenRatio)
        );
        assert_eq!(
            "goldenCircle".parse::<CompositionMode>(),
            Err(OverlayError::UnknownMode)
        );
    }

    #[test]
    fn all_modes_are_distinct() {
        for (i, a) in CompositionMode::ALL.iter().enumerate() {
            for b in &CompositionMode::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn thirds_gets_highlight_points() {
        let elements = generate_overlay(CompositionMode::RuleOfThirds, &SpiralConfig::default())
            .unwrap();
        assert_eq!(elements.len(), 8);
        assert_eq!(elements.iter().filter(|e| e.as_line().is_some()).count(), 4);
        let points: Vec<Point> = elements
            .iter()
            .filter_map(OverlayElement::as_highlight_point)
            .collect();
        let (a, b) = (1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(
            points,
            [
                Point::new(a, a),
                Point::new(a, b),
                Point::new(b, a),
                Point::new(b, b)
            ]
        );
    }

    #[test]
    fn line_modes_wrap_their_generator() {
        for mode in CompositionMode::ALL {
            if mode.is_curve_based() || mode == CompositionMode::RuleOfThirds {
                continue;
            }
            let elements = generate_overlay(mode, &SpiralConfig::default()).unwrap();
            let lines = lines_for(mode);
            assert!(!lines.is_empty(), "{mode}");
            assert_eq!(elements.len(), lines.len(), "{mode}");
            for (e, l) in elements.iter().zip(&lines) {
                assert_eq!(e.as_line(), Some(l), "{mode}");
            }
        }
    }

    #[test]
    fn spiral_mode_delegates_to_builder() {
        let config = SpiralConfig::default().steps(3).show_rectangles(true);
        let elements = generate_overlay(CompositionMode::GoldenSpiral, &config).unwrap();
        assert_eq!(elements, GoldenSpiralBuilder::new(config).unwrap().build());
        assert!(lines_for(CompositionMode::GoldenSpiral).is_empty());
    }

    #[test]
    fn spiral_config_only_validated_for_spiral() {
        let bad = SpiralConfig::default().samples_per_arc(0);
        assert!(generate_overlay(CompositionMode::GoldenRatio, &bad).is_ok());
        assert_eq!(
            generate_overlay(CompositionMode::GoldenSpiral, &bad),
            Err(OverlayError::ZeroSamplesPerArc)
        );
    }

    #[test]
    fn output_is_a_pure_function_of_inputs() {
        let config = SpiralConfig::default().mirror(true);
        for mode in CompositionMode::ALL {
            let a = Composition::new(mode).spiral(config).elements().unwrap();
            let b = Composition::new(mode).spiral(config).elements().unwrap();
            assert_eq!(a, b, "{mode}");
        }
    }

    #[test]
    fn default_composition() {
        let c = Composition::default();
        assert_eq!(c.mode, CompositionMode::RuleOfThirds);
        assert_eq!(c.spiral, SpiralConfig::default());
    }
}
