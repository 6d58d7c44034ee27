//! Device orientation and the portrait-relative quarter turn.
//!
//! Guides are authored against a portrait-relative unit square, while the
//! physical sensor feed does not rotate with the device. When the device is
//! held in landscape, every normalized point is turned a quarter turn before
//! it is projected:
//!
//! ```text
//!     Portrait (identity)        Landscape: (x, y) → (y, 1 − x)
//!     (0,0) ┌───────┐            (0,0) ┌───────┐
//!           │ A   B │                  │ C   A │
//!           │       │                  │       │
//!           │ C   D │                  │ D   B │
//!           └───────┘ (1,1)            └───────┘ (1,1)
//! ```
//!
//! The turn must be applied exactly once, to every primitive alike, or
//! overlays drift apart from each other and from the preview.

use crate::frame::Point;

/// Raw orientation reading from a device motion sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

impl DeviceOrientation {
    /// Whether this reading is landscape. `None` for flat or unknown
    /// readings, which say nothing about how the screen is held.
    pub fn is_landscape(self) -> Option<bool> {
        match self {
            Self::LandscapeLeft | Self::LandscapeRight => Some(true),
            Self::Portrait | Self::PortraitUpsideDown => Some(false),
            Self::FaceUp | Self::FaceDown | Self::Unknown => None,
        }
    }

    /// Resolve the landscape flag, keeping `previous` when this reading is
    /// flat or unknown.
    pub fn resolve_landscape(self, previous: bool) -> bool {
        self.is_landscape().unwrap_or(previous)
    }

    /// Resolve to a [`ViewOrientation`], keeping `previous` when this reading
    /// is flat or unknown.
    pub fn resolve(self, previous: ViewOrientation) -> ViewOrientation {
        ViewOrientation::from_landscape(self.resolve_landscape(previous.is_landscape()))
    }
}

/// How the view presenting the overlay is held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl ViewOrientation {
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }

    /// Turn a portrait-relative normalized point into sensor-relative
    /// normalized coordinates.
    pub fn apply(self, p: Point) -> Point {
        match self {
            Self::Portrait => p,
            Self::Landscape => quarter_turn(p),
        }
    }

    /// Exact inverse of [`apply`](Self::apply).
    pub fn invert(self, p: Point) -> Point {
        match self {
            Self::Portrait => p,
            Self::Landscape => Point::new(1.0 - p.y, p.x),
        }
    }
}

/// `(x, y) → (y, 1 − x)`: a quarter turn of the unit square about its center.
pub fn quarter_turn(p: Point) -> Point {
    Point::new(p.y, 1.0 - p.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DEVICE: [DeviceOrientation; 7] = [
        DeviceOrientation::Portrait,
        DeviceOrientation::PortraitUpsideDown,
        DeviceOrientation::LandscapeLeft,
        DeviceOrientation::LandscapeRight,
        DeviceOrientation::FaceUp,
        DeviceOrientation::FaceDown,
        DeviceOrientation::Unknown,
    ];

    #[test]
    fn device_readings() {
        assert_eq!(DeviceOrientation::LandscapeLeft.is_landscape(), Some(true));
        assert_eq!(DeviceOrientation::LandscapeRight.is_landscape(), Some(true));
        assert_eq!(DeviceOrientation::Portrait.is_landscape(), Some(false));
        assert_eq!(
            DeviceOrientation::PortraitUpsideDown.is_landscape(),
            Some(false)
        );
        assert_eq!(DeviceOrientation::FaceUp.is_landscape(), None);
        assert_eq!(DeviceOrientation::FaceDown.is_landscape(), None);
        assert_eq!(DeviceOrientation::Unknown.is_landscape(), None);
    }

    #[test]
    fn flat_readings_keep_previous_state() {
        for previous in [false, true] {
            for &d in &ALL_DEVICE {
                let got = d.resolve_landscape(previous);
                match d.is_landscape() {
                    Some(v) => assert_eq!(got, v, "{d:?} from {previous}"),
                    None => assert_eq!(got, previous, "{d:?} from {previous}"),
                }
            }
        }
        assert_eq!(
            DeviceOrientation::FaceUp.resolve(ViewOrientation::Landscape),
            ViewOrientation::Landscape
        );
        assert_eq!(
            DeviceOrientation::Portrait.resolve(ViewOrientation::Landscape),
            ViewOrientation::Portrait
        );
    }

    #[test]
    fn quarter_turn_has_order_four() {
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(0.25, 0.75),
            Point::new(1.0, 0.5),
            Point::new(0.125, 0.375),
        ];
        for &p in &samples {
            let once = quarter_turn(p);
            assert_ne!(once, p, "{p:?} is not the center, must move");
            let four = quarter_turn(quarter_turn(quarter_turn(once)));
            assert_eq!(four, p);
        }
        assert_eq!(quarter_turn(Point::new(0.5, 0.5)), Point::new(0.5, 0.5));
    }

    #[test]
    fn landscape_corners() {
        let o = ViewOrientation::Landscape;
        assert_eq!(o.apply(Point::new(0.0, 0.0)), Point::new(0.0, 1.0));
        assert_eq!(o.apply(Point::new(1.0, 0.0)), Point::new(0.0, 0.0));
        assert_eq!(o.apply(Point::new(0.0, 1.0)), Point::new(1.0, 1.0));
        assert_eq!(o.apply(Point::new(1.0, 1.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn invert_undoes_apply() {
        for o in [ViewOrientation::Portrait, ViewOrientation::Landscape] {
            for i in 0..=8 {
                for j in 0..=8 {
                    let p = Point::new(i as f64 / 8.0, j as f64 / 8.0);
                    assert_eq!(o.invert(o.apply(p)), p, "{o:?} {p:?}");
                    assert_eq!(o.apply(o.invert(p)), p, "{o:?} {p:?}");
                }
            }
        }
    }
}
