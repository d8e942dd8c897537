#![forbid(unsafe_code)]

//! Component parameters passed by the JS host.
//!
//! Hosts hand the slider a flat JSON object; every key is optional:
//!
//! ```json
//! {
//!   "axis": "horizontal",
//!   "reverse": true,
//!   "length": 300,
//!   "thumb_length": 20,
//!   "domain_min": 0,
//!   "domain_max": 10,
//!   "low_value": 2.5,
//!   "high_value": 7.5,
//!   "crossing": "allow"
//! }
//! ```
//!
//! A missing `thumb_length` defaults to a tenth of `length`.

use rangeslide_core::{Axis, DomainRange, TrackGeometry, geometry::DEFAULT_THUMB_FRACTION};
use rangeslide_widgets::{ConfigError, CrossingPolicy, SliderConfig};
use serde::{Deserialize, Serialize};

/// Failure turning host parameters into a slider configuration.
#[derive(Debug, thiserror::Error)]
pub enum HostParamsError {
    #[error("malformed slider parameters: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Raw component parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderParams {
    pub axis: Option<Axis>,
    pub reverse: Option<bool>,
    pub length: Option<f64>,
    pub thumb_length: Option<f64>,
    pub domain_min: Option<f64>,
    pub domain_max: Option<f64>,
    pub low_value: Option<f64>,
    pub high_value: Option<f64>,
    pub crossing: Option<CrossingPolicy>,
}

impl SliderParams {
    /// Parse parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, HostParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fill in defaults and validate.
    pub fn into_config(self) -> Result<SliderConfig, HostParamsError> {
        let defaults = SliderConfig::default();
        let length = self.length.unwrap_or(defaults.geometry.length);
        let thumb_length = self
            .thumb_length
            .unwrap_or(length * DEFAULT_THUMB_FRACTION);
        let config = SliderConfig {
            axis: self.axis.unwrap_or(defaults.axis),
            reverse: self.reverse.unwrap_or(defaults.reverse),
            geometry: TrackGeometry::new(length, thumb_length),
            domain: DomainRange::new(
                self.domain_min.unwrap_or(defaults.domain.min),
                self.domain_max.unwrap_or(defaults.domain.max),
            ),
            low_value: self.low_value.unwrap_or(defaults.low_value),
            high_value: self.high_value.unwrap_or(defaults.high_value),
            crossing: self.crossing.unwrap_or(defaults.crossing),
        };
        config.validate()?;
        Ok(config)
    }
}
