#![forbid(unsafe_code)]

//! Core: geometry primitives and the range mapper.
//!
//! # Role in rangeslide
//! `rangeslide-core` is the pure layer. It owns the domain/travel/track
//! geometry types and the linear mapping between domain values and pixel
//! positions. It has no state and no I/O.
//!
//! # How it fits in the system
//! The slider model (`rangeslide-widgets`) stores thumb values and drives the
//! mapper on every drag step. The web adapter (`rangeslide-web`) feeds
//! host pointer positions into that model.

pub mod geometry;
pub mod mapping;

pub use geometry::{
    Axis, DomainRange, DomainRangeError, PointerPosition, TrackGeometry, TravelRange,
};
pub use mapping::{domain_to_range, drag_value, range_to_domain};
