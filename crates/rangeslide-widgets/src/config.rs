#![forbid(unsafe_code)]

//! Slider configuration.
//!
//! A [`SliderConfig`] carries everything a [`RangeSlider`](crate::RangeSlider)
//! needs at mount time. Defaults match the stock component: a vertical
//! 500px track, thumbs a tenth of the track long, domain `[0, 1]` and thumbs
//! at `0.33` / `0.66`.

use rangeslide_core::{Axis, DomainRange, DomainRangeError, TrackGeometry};

use crate::thumb::ThumbId;

/// Default low thumb value.
pub const DEFAULT_LOW_VALUE: f64 = 0.33;

/// Default high thumb value.
pub const DEFAULT_HIGH_VALUE: f64 = 0.66;

/// Whether the low thumb may pass the high thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CrossingPolicy {
    /// Keep `low <= high`: each thumb is clamped against the other.
    #[default]
    Prevent,
    /// Each thumb traverses the full domain independently.
    Allow,
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid domain: {0}")]
    Domain(#[from] DomainRangeError),
    #[error("{name} must be a finite, non-negative pixel length (got {value})")]
    Length { name: &'static str, value: f64 },
    #[error("{thumb} thumb value must be finite (got {value})")]
    Value { thumb: ThumbId, value: f64 },
}

/// Mount-time slider configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Track axis.
    pub axis: Axis,
    /// Measure offsets from the far edge and negate drag deltas.
    pub reverse: bool,
    /// Track and thumb lengths.
    pub geometry: TrackGeometry,
    /// Domain both thumbs move through.
    pub domain: DomainRange,
    /// Initial low thumb value.
    pub low_value: f64,
    /// Initial high thumb value.
    pub high_value: f64,
    /// Crossing policy between the two thumbs.
    pub crossing: CrossingPolicy,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            reverse: false,
            geometry: TrackGeometry::default(),
            domain: DomainRange::default(),
            low_value: DEFAULT_LOW_VALUE,
            high_value: DEFAULT_HIGH_VALUE,
            crossing: CrossingPolicy::default(),
        }
    }
}

impl SliderConfig {
    /// Set the track axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the reverse flag.
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set track and thumb lengths.
    #[must_use]
    pub fn geometry(mut self, geometry: TrackGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the domain.
    #[must_use]
    pub fn domain(mut self, domain: DomainRange) -> Self {
        self.domain = domain;
        self
    }

    /// Set both initial thumb values.
    #[must_use]
    pub fn values(mut self, low: f64, high: f64) -> Self {
        self.low_value = low;
        self.high_value = high;
        self
    }

    /// Set the crossing policy.
    #[must_use]
    pub fn crossing(mut self, crossing: CrossingPolicy) -> Self {
        self.crossing = crossing;
        self
    }

    /// Initial value for one thumb.
    #[must_use]
    pub const fn value(&self, thumb: ThumbId) -> f64 {
        match thumb {
            ThumbId::Low => self.low_value,
            ThumbId::High => self.high_value,
        }
    }

    /// Check that the configuration can be mounted.
    ///
    /// Out-of-domain thumb values are not an error; the slider clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.domain.validate()?;
        check_length("track length", self.geometry.length)?;
        check_length("low thumb length", self.geometry.low_thumb_length)?;
        check_length("high thumb length", self.geometry.high_thumb_length)?;
        for thumb in ThumbId::ALL {
            let value = self.value(thumb);
            if !value.is_finite() {
                return Err(ConfigError::Value { thumb, value });
            }
        }
        Ok(())
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Length { name, value })
    }
}
