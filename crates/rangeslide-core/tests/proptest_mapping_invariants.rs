//! Property-based invariant tests for the range mapper.
//!
//! 1. range_to_domain(domain_to_range(v)) == v for v in the domain.
//! 2. Domain bounds map to travel bounds.
//! 3. domain_to_range stays inside the travel range for in-domain values.
//! 4. drag_value always lands inside the domain.
//! 5. Reversing the pointer delta mirrors the value change.
//! 6. Zero delta is a no-op.

use proptest::prelude::*;
use rangeslide_core::{
    Axis, DomainRange, PointerPosition, TravelRange, domain_to_range, drag_value, range_to_domain,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn domain() -> impl Strategy<Value = DomainRange> {
    (-1_000.0f64..1_000.0, 0.001f64..1_000.0).prop_map(|(min, span)| DomainRange::new(min, min + span))
}

fn travel() -> impl Strategy<Value = TravelRange> {
    (0.0f64..50.0, 1.0f64..2_000.0).prop_map(|(min, span)| TravelRange::new(min, min + span))
}

fn value_in(domain: DomainRange) -> impl Strategy<Value = f64> {
    (0.0f64..=1.0).prop_map(move |t| domain.min + t * domain.span())
}

fn tolerance(domain: DomainRange) -> f64 {
    1e-9 * (domain.min.abs() + domain.max.abs()).max(1.0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_trip_recovers_value(
        (domain, value) in domain().prop_flat_map(|d| (Just(d), value_in(d))),
        travel in travel(),
    ) {
        let position = domain_to_range(value, domain, travel);
        let back = range_to_domain(position, domain, travel);
        prop_assert!(
            (back - value).abs() <= tolerance(domain),
            "value {} mapped to {} and back to {}", value, position, back
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Boundary behavior
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_map_to_travel_bounds(domain in domain(), travel in travel()) {
        let low = domain_to_range(domain.min, domain, travel);
        let high = domain_to_range(domain.max, domain, travel);
        prop_assert!((low - travel.min).abs() < 1e-9);
        prop_assert!((high - travel.max).abs() < 1e-6 * travel.max.max(1.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Mapping stays on the track
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn in_domain_values_stay_on_track(
        (domain, value) in domain().prop_flat_map(|d| (Just(d), value_in(d))),
        travel in travel(),
    ) {
        let position = domain_to_range(value, domain, travel);
        let slack = 1e-6 * travel.max.max(1.0);
        prop_assert!(position >= travel.min - slack && position <= travel.max + slack);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Drag results are clamped
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_result_is_inside_domain(
        (domain, value) in domain().prop_flat_map(|d| (Just(d), value_in(d))),
        travel in travel(),
        delta in -5_000.0f64..5_000.0,
    ) {
        let next = drag_value(value, delta, domain, travel);
        prop_assert!(next.is_some());
        let next = next.unwrap();
        prop_assert!(domain.contains(next), "{} escaped {:?}", next, domain);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reverse mirrors the delta
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reversed_drag_mirrors_change(
        dy in -50.0f64..50.0,
        start_y in 0.0f64..1_000.0,
    ) {
        let domain = DomainRange::new(0.0, 1.0);
        let travel = TravelRange::new(0.0, 400.0);
        let from = PointerPosition::new(0.0, start_y);
        let to = PointerPosition::new(0.0, start_y + dy);

        let forward = to.delta_along(from, Axis::Vertical, false);
        let backward = to.delta_along(from, Axis::Vertical, true);
        prop_assert_eq!(forward, -backward);

        let up = drag_value(0.5, forward, domain, travel).unwrap() - 0.5;
        let down = drag_value(0.5, backward, domain, travel).unwrap() - 0.5;
        prop_assert!((up + down).abs() < 1e-9, "{} vs {}", up, down);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Zero delta
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_delta_keeps_value(
        (domain, value) in domain().prop_flat_map(|d| (Just(d), value_in(d))),
        travel in travel(),
    ) {
        let next = drag_value(value, 0.0, domain, travel).unwrap();
        prop_assert!((next - value).abs() <= tolerance(domain));
    }
}
