#![forbid(unsafe_code)]

//! `rangeslide-web` connects a [`RangeSlider`](rangeslide_widgets::RangeSlider)
//! to a browser host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes pointer
//!   events and receives listener commands back.
//! - **Deterministic**: every dispatch returns a structured log entry with a
//!   monotonically increasing sequence number.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`; it provides the building
//! blocks a JS wrapper calls into.

pub mod host_params;
pub mod pointer_capture;

pub use host_params::{HostParamsError, SliderParams};
pub use pointer_capture::{
    ListenerCommand, PointerButton, SliderPointerAdapter, SliderPointerConfig,
    SliderPointerDispatch, SliderPointerIgnoredReason, SliderPointerLogEntry,
    SliderPointerLogOutcome, SliderPointerPhase,
};
