#![forbid(unsafe_code)]

//! rangeslide public facade crate.
//!
//! Re-exports the common types of the internal crates and offers a small
//! prelude for day-to-day use.

// --- Core re-exports -------------------------------------------------------

pub use rangeslide_core::{
    Axis, DomainRange, PointerPosition, TrackGeometry, TravelRange, domain_to_range,
    range_to_domain,
};

// --- Widget re-exports -----------------------------------------------------

pub use rangeslide_widgets::{
    ConfigError, CrossingPolicy, DragOutcome, DragSession, RangeSlider, SliderConfig,
    SliderEvent, SliderLayout, ThumbId, ThumbState, ValueChange,
};

// --- Web re-exports --------------------------------------------------------

pub use rangeslide_web::{
    HostParamsError, ListenerCommand, PointerButton, SliderParams, SliderPointerAdapter,
    SliderPointerConfig, SliderPointerDispatch,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for rangeslide hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slider configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Host parameters could not be parsed or validated.
    #[error(transparent)]
    HostParams(#[from] HostParamsError),
}

/// Standard result type for rangeslide APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Mount a slider from a configuration.
pub fn mount(config: SliderConfig) -> Result<RangeSlider> {
    Ok(RangeSlider::new(config)?)
}

/// Mount a slider behind a pointer adapter from JSON host parameters.
pub fn mount_from_json(json: &str) -> Result<SliderPointerAdapter> {
    Ok(SliderPointerAdapter::from_host_params(
        json,
        SliderPointerConfig::default(),
    )?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, CrossingPolicy, DomainRange, Error, PointerPosition, RangeSlider, Result,
        SliderConfig, ThumbId, TrackGeometry,
    };
    pub use crate::{PointerButton, SliderPointerAdapter};

    pub use crate::{core, web, widgets};
}

pub use rangeslide_core as core;
pub use rangeslide_web as web;
pub use rangeslide_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn mount_default_slider() {
        let slider = super::mount(SliderConfig::default()).expect("defaults are valid");
        assert_eq!(slider.values(), (0.33, 0.66));
    }

    #[test]
    fn mount_rejects_inverted_domain() {
        let err = super::mount(SliderConfig::default().domain(DomainRange::new(2.0, 1.0)))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn mount_from_json_drives_a_drag() {
        let mut adapter = super::mount_from_json(
            r#"{"axis": "horizontal", "length": 120, "thumb_length": 10}"#,
        )
        .expect("valid params");
        adapter.pointer_down(
            ThumbId::High,
            1,
            PointerButton::Primary,
            PointerPosition::new(0.0, 0.0),
        );
        let dispatch = adapter.pointer_move(1, PointerPosition::new(10.0, 50.0));
        let change = dispatch.change.expect("value should move");
        assert!((change.new - 0.76).abs() < 1e-9);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            super::mount_from_json("{"),
            Err(Error::HostParams(_))
        ));
    }
}
