#![forbid(unsafe_code)]

//! Linear mapping between domain values and travel-range pixel positions.
//!
//! Both directions are pure functions. They do not validate their inputs: a
//! degenerate domain (`min == max`) in [`domain_to_range`], or a degenerate
//! travel range in [`range_to_domain`], divides by zero and yields `NaN` or an
//! infinity. Callers that need a well-defined result must check
//! [`DomainRange::is_degenerate`] / [`TravelRange::is_degenerate`] first.

use crate::geometry::{DomainRange, TravelRange};

/// Map a domain value to a pixel offset inside `travel`.
///
/// `(value - domain.min) / (domain.max - domain.min) * (travel.max - travel.min) + travel.min`
#[inline]
#[must_use]
pub fn domain_to_range(value: f64, domain: DomainRange, travel: TravelRange) -> f64 {
    (value - domain.min) / domain.span() * travel.span() + travel.min
}

/// Map a pixel offset inside `travel` back to a domain value.
///
/// Inverse of [`domain_to_range`]; positions outside the travel range map to
/// values outside the domain, so clamp afterwards if needed.
#[inline]
#[must_use]
pub fn range_to_domain(position: f64, domain: DomainRange, travel: TravelRange) -> f64 {
    (position - travel.min) / travel.span() * domain.span() + domain.min
}

/// Apply a pixel drag delta to a domain value.
///
/// The value is first projected onto the travel range, shifted by `delta`,
/// projected back and clamped into the domain. Returns `None` when either
/// range is degenerate or the arithmetic leaves the finite numbers, in which
/// case the caller keeps its previous value.
#[must_use]
pub fn drag_value(value: f64, delta: f64, domain: DomainRange, travel: TravelRange) -> Option<f64> {
    if domain.is_degenerate() || travel.is_degenerate() {
        return None;
    }
    let position = domain_to_range(value, domain, travel);
    let next = range_to_domain(position + delta, domain, travel);
    next.is_finite().then(|| domain.clamp(next))
}
