//! SVG preview of an overlay as a renderer would draw it.
//!
//! Draws the host view, the rectangle the preview occupies, and every guide
//! projected through a [`ScreenMapper`]. Guides are clipped to the part of
//! the preview that is actually visible in the view. Useful for eyeballing
//! alignment without a camera.
//!
//! # Example
//!
//! ```
//! use zenguides::{CompositionMode, ScreenMapper, Size, SpiralConfig, ViewOrientation};
//! use zenguides::svg::{SvgStyle, render_overlay_svg};
//!
//! let view = Size::new(390.0, 844.0);
//! let config = SpiralConfig::default().aspect_ratio(3.0 / 4.0);
//! let elements = zenguides::generate_overlay(CompositionMode::GoldenSpiral, &config).unwrap();
//! let mapper = ScreenMapper::fit(view, 3.0 / 4.0, ViewOrientation::Portrait).unwrap();
//!
//! let svg = render_overlay_svg(&elements, &mapper, view, &SvgStyle::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("<polyline"));
//! ```

use core::fmt::Write as _;

use crate::element::OverlayElement;
use crate::frame::{Point, Rect, Size};
use crate::mapping::{ScreenElement, ScreenMapper};

/// Extra stroke width for curves, which read thinner than straight lines.
const CURVE_WIDTH_BOOST: f64 = 0.4;

/// Stroke styling for the preview. Rendering style is a host concern; the
/// defaults match a typical camera app overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Any CSS color.
    pub color: String,
    pub opacity: f64,
    pub line_width: f64,
    /// Radius of the circle drawn around highlight points.
    pub point_radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            color: String::from("white"),
            opacity: 0.9,
            line_width: 1.4,
            point_radius: 12.0,
        }
    }
}

/// Render a complete SVG document of `elements` over a `view`-sized canvas.
pub fn render_overlay_svg(
    elements: &[OverlayElement],
    mapper: &ScreenMapper,
    view: Size,
    style: &SvgStyle,
) -> String {
    let frame = mapper.frame();
    let clip = intersect(Rect::from_size(view), frame);

    let mut svg = String::with_capacity(1024 + elements.len() * 128);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = view.width,
        h = view.height,
    );

    let color = escape_xml(&style.color);
    let _ = write!(
        svg,
        r##"<style>
  .view {{ fill: #1e1e1e; }}
  .preview {{ fill: #3a4a5a; stroke: #6b8aa8; stroke-width: 1; }}
  .guide {{ fill: none; stroke: {color}; stroke-opacity: {opacity}; stroke-width: {lw}; stroke-linecap: round; stroke-linejoin: round; }}
  .curve {{ stroke-width: {cw}; }}
  @media (prefers-color-scheme: light) {{
    .view {{ fill: #f0f0f0; }}
    .preview {{ fill: #c8d6e4; stroke: #7b9ab8; }}
  }}
</style>
"##,
        opacity = style.opacity,
        lw = style.line_width,
        cw = style.line_width + CURVE_WIDTH_BOOST,
    );

    let _ = writeln!(
        svg,
        r#"<defs><clipPath id="visible"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath></defs>"#,
        clip.x, clip.y, clip.width, clip.height
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" class="view"/>"#,
        view.width, view.height
    );
    let _ = writeln!(
        svg,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" class="preview" clip-path="url(#visible)"/>"#,
        frame.x, frame.y, frame.width, frame.height
    );

    svg.push_str("<g clip-path=\"url(#visible)\">\n");
    for element in elements {
        let id = escape_xml(&element.id().to_string());
        match mapper.project(element) {
            ScreenElement::Line { start, end } => {
                let _ = writeln!(
                    svg,
                    r#"<line id="{id}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" class="guide"/>"#,
                    start.x, start.y, end.x, end.y
                );
            }
            ScreenElement::Polyline(points) => {
                if points.is_empty() {
                    continue;
                }
                let _ = writeln!(
                    svg,
                    r#"<polyline id="{id}" points="{}" class="guide curve"/>"#,
                    points_attr(&points)
                );
            }
            ScreenElement::Point(p) => {
                let _ = writeln!(
                    svg,
                    r#"<circle id="{id}" cx="{:.2}" cy="{:.2}" r="{}" class="guide"/>"#,
                    p.x, p.y, style.point_radius
                );
            }
        }
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

/// Overlap of two rects; empty (zero-sized) when they are disjoint.
fn intersect(a: Rect, b: Rect) -> Rect {
    let x = a.min_x().max(b.min_x());
    let y = a.min_y().max(b.min_y());
    let w = (a.max_x().min(b.max_x()) - x).max(0.0);
    let h = (a.max_y().min(b.max_y()) - y).max(0.0);
    Rect::new(x, y, w, h)
}

/// Escape special characters for XML attribute and text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
