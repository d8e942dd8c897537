#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Domain ranges are in caller units (a filter threshold, a time index, ...).
//! Track geometry and travel ranges are in CSS pixels. Pointer positions are
//! in screen space as reported by the host.

/// Axis along which a slider track runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Track runs top to bottom; drags read the Y coordinate.
    #[default]
    Vertical,
    /// Track runs left to right; drags read the X coordinate.
    Horizontal,
}

impl Axis {
    /// Lowercase name, as used for CSS class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Logical value interval a thumb moves through.
///
/// Invariant `min <= max` is checked by [`DomainRange::validate`]; the
/// constructors do not enforce it so that mapping stays a plain function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Default for DomainRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl DomainRange {
    /// Create a new domain range.
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain (`max - min`).
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the domain collapses to a single point (or is inverted).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.span() > 0.0)
    }

    /// Check if a value lies inside the domain (bounds inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into `[min, max]`.
    ///
    /// Unlike [`f64::clamp`] this never panics on an inverted range; the
    /// lower bound wins. `NaN` input is returned unchanged.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Check the `min <= max` invariant and that both bounds are finite.
    pub fn validate(&self) -> Result<(), DomainRangeError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(DomainRangeError::NonFinite {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(DomainRangeError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Reason a [`DomainRange`] failed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainRangeError {
    /// One of the bounds is `NaN` or infinite.
    NonFinite { min: f64, max: f64 },
    /// `min > max`.
    Inverted { min: f64, max: f64 },
}

impl core::fmt::Display for DomainRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonFinite { min, max } => {
                write!(f, "domain bounds must be finite (min={min}, max={max})")
            }
            Self::Inverted { min, max } => {
                write!(f, "domain min {min} exceeds max {max}")
            }
        }
    }
}

impl std::error::Error for DomainRangeError {}

/// Pixel interval over which a thumb's reference point may move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelRange {
    pub min: f64,
    pub max: f64,
}

impl TravelRange {
    /// Create a new travel range.
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the travel range in pixels.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when there is no room to move (span zero, negative or `NaN`).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.span() > 0.0)
    }

    /// Clamp a pixel position into the travel range.
    #[inline]
    #[must_use]
    pub fn clamp(&self, position: f64) -> f64 {
        position.min(self.max).max(self.min)
    }
}

/// Track and thumb sizes along the slider axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackGeometry {
    /// Full track length.
    pub length: f64,
    /// Length of the low thumb.
    pub low_thumb_length: f64,
    /// Length of the high thumb.
    pub high_thumb_length: f64,
}

/// Default track length in pixels.
pub const DEFAULT_TRACK_LENGTH: f64 = 500.0;

/// Default thumb length as a fraction of the track length.
pub const DEFAULT_THUMB_FRACTION: f64 = 0.1;

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::with_track_length(DEFAULT_TRACK_LENGTH)
    }
}

impl TrackGeometry {
    /// Geometry with both thumbs the same length.
    #[inline]
    #[must_use]
    pub const fn new(length: f64, thumb_length: f64) -> Self {
        Self {
            length,
            low_thumb_length: thumb_length,
            high_thumb_length: thumb_length,
        }
    }

    /// Geometry with independent thumb lengths.
    #[inline]
    #[must_use]
    pub const fn with_thumbs(length: f64, low_thumb_length: f64, high_thumb_length: f64) -> Self {
        Self {
            length,
            low_thumb_length,
            high_thumb_length,
        }
    }

    /// Geometry whose thumbs default to a tenth of the track length.
    #[must_use]
    pub fn with_track_length(length: f64) -> Self {
        Self::new(length, length * DEFAULT_THUMB_FRACTION)
    }

    /// True when the track is long enough to hold both thumbs with room to move.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.length >= self.low_thumb_length + self.high_thumb_length
    }

    /// Derived travel range `[0, length - low - high]`.
    ///
    /// Invalid geometry collapses to `[0, 0]` rather than going negative.
    #[must_use]
    pub fn travel(&self) -> TravelRange {
        let max = self.length - self.low_thumb_length - self.high_thumb_length;
        // `max(0.0)` also maps NaN to 0.
        TravelRange::new(0.0, max.max(0.0))
    }
}

/// Pointer position in host screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Create a new pointer position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[inline]
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    /// Both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Signed movement from `previous` to `self` along `axis`.
    ///
    /// `reversed` negates the result, for tracks measured from the far edge.
    #[inline]
    #[must_use]
    pub fn delta_along(&self, previous: PointerPosition, axis: Axis, reversed: bool) -> f64 {
        let delta = self.along(axis) - previous.along(axis);
        if reversed { -delta } else { delta }
    }
}

impl From<(f64, f64)> for PointerPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, DomainRange, DomainRangeError, PointerPosition, TrackGeometry};

    #[test]
    fn default_geometry_matches_component_defaults() {
        let geometry = TrackGeometry::default();
        assert_eq!(geometry.length, 500.0);
        assert_eq!(geometry.low_thumb_length, 50.0);
        assert_eq!(geometry.high_thumb_length, 50.0);
        assert_eq!(geometry.travel().max, 400.0);
    }

    #[test]
    fn travel_clamps_to_zero_when_thumbs_overflow_track() {
        let geometry = TrackGeometry::new(30.0, 20.0);
        assert!(!geometry.is_valid());
        let travel = geometry.travel();
        assert_eq!(travel.min, 0.0);
        assert_eq!(travel.max, 0.0);
        assert!(travel.is_degenerate());
    }

    #[test]
    fn travel_of_nan_geometry_is_a_point() {
        let travel = TrackGeometry::new(f64::NAN, 10.0).travel();
        assert_eq!(travel.max, 0.0);
    }

    #[test]
    fn independent_thumb_lengths_reduce_travel() {
        let geometry = TrackGeometry::with_thumbs(200.0, 10.0, 30.0);
        assert_eq!(geometry.travel().max, 160.0);
    }

    #[test]
    fn domain_clamp_keeps_bounds() {
        let domain = DomainRange::new(-1.0, 1.0);
        assert_eq!(domain.clamp(-3.0), -1.0);
        assert_eq!(domain.clamp(0.25), 0.25);
        assert_eq!(domain.clamp(9.0), 1.0);
        assert!(domain.contains(1.0));
        assert!(!domain.contains(1.5));
    }

    #[test]
    fn inverted_domain_clamp_does_not_panic() {
        let domain = DomainRange::new(2.0, 1.0);
        assert_eq!(domain.clamp(1.5), 2.0);
        assert!(domain.is_degenerate());
    }

    #[test]
    fn domain_validation() {
        assert!(DomainRange::new(0.0, 0.0).validate().is_ok());
        assert_eq!(
            DomainRange::new(3.0, 1.0).validate(),
            Err(DomainRangeError::Inverted { min: 3.0, max: 1.0 })
        );
        assert!(matches!(
            DomainRange::new(0.0, f64::INFINITY).validate(),
            Err(DomainRangeError::NonFinite { .. })
        ));
    }

    #[test]
    fn pointer_finiteness_checks_both_axes() {
        assert!(PointerPosition::new(1.0, -2.0).is_finite());
        assert!(!PointerPosition::new(f64::NAN, 0.0).is_finite());
        assert!(!PointerPosition::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn pointer_delta_uses_axis_and_reverse() {
        let from = PointerPosition::new(10.0, 100.0);
        let to = PointerPosition::new(14.0, 90.0);
        assert_eq!(to.delta_along(from, Axis::Vertical, false), -10.0);
        assert_eq!(to.delta_along(from, Axis::Vertical, true), 10.0);
        assert_eq!(to.delta_along(from, Axis::Horizontal, false), 4.0);
        assert_eq!(to.delta_along(from, Axis::Horizontal, true), -4.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn axis_serializes_lowercase() {
        let json = serde_json::to_string(&Axis::Horizontal).expect("serialize axis");
        assert_eq!(json, "\"horizontal\"");
    }
}
