#![forbid(unsafe_code)]

//! Slider widgets for rangeslide.
//!
//! The main type is [`RangeSlider`], a two-thumb slider model that maps
//! values onto a pixel track and follows pointer drags. It does not touch the
//! DOM: hosts feed it pointer positions and apply the [`SliderLayout`] it
//! computes.

pub mod config;
pub mod range_slider;
pub mod session;
pub mod style;
pub mod thumb;

pub use config::{ConfigError, CrossingPolicy, DEFAULT_HIGH_VALUE, DEFAULT_LOW_VALUE, SliderConfig};
pub use range_slider::{
    DragIgnoredReason, DragOutcome, RangeSlider, SliderEvent, SubscriptionId, ValueChange,
};
pub use session::{DragSession, ListenerKind, SessionId};
pub use style::{Edge, Extent, SliderLayout, ThumbStyle, TrackStyle};
pub use thumb::{ThumbId, ThumbState};
