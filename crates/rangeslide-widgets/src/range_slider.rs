#![forbid(unsafe_code)]

//! Dual-thumb range slider model.
//!
//! [`RangeSlider`] owns the domain, the track geometry and the two thumb
//! values. It maps values to pixel offsets for rendering and turns pointer
//! drags back into values.
//!
//! # Drag lifecycle
//!
//! ```text
//! begin_drag(thumb, p0) -> DragSession   (listeners attached)
//! continue_drag(&session, p1..pn)        (value follows the pointer)
//! end_drag(session)                      (listeners detached)
//! ```
//!
//! The session handle is the only way to move a thumb by dragging, and
//! `end_drag` consumes it, so a move after the matching pointer-up cannot be
//! expressed. Dropping the handle without `end_drag` also detaches the
//! listeners; the thumb is marked idle on the next mutation of the slider.
//!
//! # Invariants
//!
//! 1. Each thumb value lies in `[domain.min, domain.max]`.
//! 2. Under [`CrossingPolicy::Prevent`], `low <= high`.
//! 3. A thumb that is not dragging has zero registered drag listeners.
//! 4. Each thumb's offset derives from its own value only.
//!
//! # Failure Modes
//!
//! - Degenerate travel (`length <= low + high thumb lengths`) collapses to
//!   `[0, 0]`; drags then leave values unchanged.
//! - A degenerate domain (`min == max`) makes [`RangeSlider::range_position`]
//!   return `NaN`; [`RangeSlider::layout`] pins thumbs to the travel start.
//! - Foreign or stale sessions are ignored and logged at `warn`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rangeslide_core::{
    Axis, DomainRange, PointerPosition, TrackGeometry, TravelRange, domain_to_range, drag_value,
};

use crate::config::{ConfigError, CrossingPolicy, SliderConfig};
use crate::session::{DragSession, ListenerKind, ListenerSet, SessionId, SharedListeners};
use crate::style::{Edge, Extent, SliderLayout, ThumbStyle, TrackStyle, css_class};
use crate::thumb::{ActiveDrag, ThumbId, ThumbSlot, ThumbState};

/// A thumb value moved from `old` to `new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    pub thumb: ThumbId,
    pub old: f64,
    pub new: f64,
}

/// Notification delivered to slider observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    DragStarted { thumb: ThumbId, session: SessionId },
    ValueChanged(ValueChange),
    DragEnded { thumb: ThumbId, session: SessionId },
}

/// Why a drag step was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    /// The session was issued by a different slider.
    ForeignSession,
    /// The session no longer holds its thumb.
    StaleSession,
}

/// Result of one [`RangeSlider::continue_drag`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The thumb value changed.
    Moved(ValueChange),
    /// The step was applied but the value did not change (clamped, zero
    /// delta along the axis, or degenerate geometry).
    Unchanged,
    /// The step was rejected without touching any state.
    Ignored(DragIgnoredReason),
}

impl DragOutcome {
    /// The value change, if any.
    #[must_use]
    pub const fn change(&self) -> Option<ValueChange> {
        match self {
            Self::Moved(change) => Some(*change),
            _ => None,
        }
    }
}

/// Handle returned by [`RangeSlider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&SliderEvent)>;

/// Stateful dual-thumb slider.
pub struct RangeSlider {
    axis: Axis,
    reverse: bool,
    geometry: TrackGeometry,
    domain: DomainRange,
    crossing: CrossingPolicy,
    thumbs: [ThumbSlot; 2],
    listeners: SharedListeners,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("axis", &self.axis)
            .field("reverse", &self.reverse)
            .field("domain", &self.domain)
            .field("low", &self.thumbs[0].value)
            .field("high", &self.thumbs[1].value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl RangeSlider {
    /// Mount a slider from a validated configuration.
    ///
    /// Initial values are clamped into the domain. Under
    /// [`CrossingPolicy::Prevent`] a high value below the low value is raised
    /// to meet it.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let low = config.domain.clamp(config.low_value);
        let mut high = config.domain.clamp(config.high_value);
        if config.crossing == CrossingPolicy::Prevent && high < low {
            high = low;
        }
        tracing::debug!(
            message = "slider.mount",
            axis = config.axis.as_str(),
            reverse = config.reverse,
            low,
            high,
            travel = config.geometry.travel().max
        );
        Ok(Self {
            axis: config.axis,
            reverse: config.reverse,
            geometry: config.geometry,
            domain: config.domain,
            crossing: config.crossing,
            thumbs: [ThumbSlot::new(low), ThumbSlot::new(high)],
            listeners: Rc::new(RefCell::new(ListenerSet::default())),
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Current configuration, with the current thumb values.
    #[must_use]
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            axis: self.axis,
            reverse: self.reverse,
            geometry: self.geometry,
            domain: self.domain,
            low_value: self.value(ThumbId::Low),
            high_value: self.value(ThumbId::High),
            crossing: self.crossing,
        }
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub const fn domain(&self) -> DomainRange {
        self.domain
    }

    #[must_use]
    pub const fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    #[must_use]
    pub const fn crossing(&self) -> CrossingPolicy {
        self.crossing
    }

    /// Travel range derived from the current geometry.
    #[must_use]
    pub fn travel(&self) -> TravelRange {
        self.geometry.travel()
    }

    /// Current value of one thumb.
    #[must_use]
    pub const fn value(&self, thumb: ThumbId) -> f64 {
        self.thumbs[thumb.index()].value
    }

    /// Current `(low, high)` values.
    #[must_use]
    pub const fn values(&self) -> (f64, f64) {
        (self.thumbs[0].value, self.thumbs[1].value)
    }

    /// Whether `thumb` has a live drag session.
    #[must_use]
    pub fn is_dragging(&self, thumb: ThumbId) -> bool {
        self.live_drag(thumb).is_some()
    }

    /// Snapshot of one thumb's observable state.
    #[must_use]
    pub fn thumb(&self, thumb: ThumbId) -> ThumbState {
        let drag = self.live_drag(thumb);
        ThumbState {
            value: self.value(thumb),
            dragging: drag.is_some(),
            last_pointer: drag.map(|drag| drag.last_pointer),
        }
    }

    /// Offset of `thumb` inside the travel range, from its own value.
    ///
    /// Returns `NaN` when the domain is degenerate.
    #[must_use]
    pub fn range_position(&self, thumb: ThumbId) -> f64 {
        domain_to_range(self.value(thumb), self.domain, self.travel())
    }

    /// Number of drag listeners currently registered for `thumb`.
    #[must_use]
    pub fn listener_count(&self, thumb: ThumbId) -> usize {
        self.listeners.borrow().count_for(thumb)
    }

    /// Kinds of drag listeners currently registered for `thumb`.
    #[must_use]
    pub fn listener_kinds(&self, thumb: ThumbId) -> Vec<ListenerKind> {
        self.listeners.borrow().kinds_for(thumb)
    }

    /// Register an observer; it sees every event emitted after this call.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SliderEvent) + 'static,
    {
        self.next_subscription = self.next_subscription.saturating_add(1);
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        before != self.observers.len()
    }

    /// Start dragging `thumb` from `pointer`.
    ///
    /// Returns `None` if the thumb is already being dragged or `pointer` has
    /// a non-finite coordinate.
    pub fn begin_drag(&mut self, thumb: ThumbId, pointer: PointerPosition) -> Option<DragSession> {
        self.reap_dropped_sessions();
        if !pointer.is_finite() {
            tracing::warn!(
                message = "slider.drag.begin_rejected",
                thumb = thumb.as_str(),
                x = pointer.x,
                y = pointer.y
            );
            return None;
        }
        if let Some(active) = self.thumbs[thumb.index()].drag {
            tracing::warn!(
                message = "slider.drag.begin_ignored",
                thumb = thumb.as_str(),
                active_session = active.session.get()
            );
            return None;
        }

        let session = self.listeners.borrow_mut().attach(thumb);
        self.thumbs[thumb.index()].drag = Some(ActiveDrag {
            session,
            last_pointer: pointer,
        });
        tracing::debug!(
            message = "slider.drag.begin",
            thumb = thumb.as_str(),
            session = session.get(),
            x = pointer.x,
            y = pointer.y
        );
        self.emit(SliderEvent::DragStarted { thumb, session });
        Some(DragSession::new(session, thumb, &self.listeners))
    }

    /// Move the session's thumb to follow `pointer`.
    ///
    /// The pointer delta along the axis (negated when reversed) is added to
    /// the thumb's current offset and mapped back into the domain. A pointer
    /// with a non-finite coordinate is dropped without touching the last
    /// pointer.
    pub fn continue_drag(&mut self, session: &DragSession, pointer: PointerPosition) -> DragOutcome {
        if let Some(reason) = self.check_session(session) {
            return DragOutcome::Ignored(reason);
        }
        let thumb = session.thumb();
        if !pointer.is_finite() {
            tracing::trace!(
                message = "slider.drag.pointer_dropped",
                thumb = thumb.as_str(),
                x = pointer.x,
                y = pointer.y
            );
            return DragOutcome::Unchanged;
        }
        let slot = &mut self.thumbs[thumb.index()];
        let Some(drag) = slot.drag.as_mut() else {
            return DragOutcome::Ignored(DragIgnoredReason::StaleSession);
        };

        let delta = pointer.delta_along(drag.last_pointer, self.axis, self.reverse);
        drag.last_pointer = pointer;
        let old = slot.value;

        let bounds = self.bounds(thumb);
        let Some(next) = drag_value(old, delta, self.domain, self.geometry.travel()) else {
            tracing::trace!(
                message = "slider.drag.degenerate",
                thumb = thumb.as_str(),
                delta
            );
            return DragOutcome::Unchanged;
        };
        let new = bounds.clamp(next);
        tracing::trace!(
            message = "slider.drag.step",
            thumb = thumb.as_str(),
            delta,
            old,
            new
        );
        match self.store(thumb, new) {
            Some(change) => DragOutcome::Moved(change),
            None => DragOutcome::Unchanged,
        }
    }

    /// Finish a drag session and detach its listeners.
    ///
    /// Returns `true` if the session was live on this slider.
    pub fn end_drag(&mut self, session: DragSession) -> bool {
        if let Some(reason) = self.check_session(&session) {
            tracing::warn!(
                message = "slider.drag.end_ignored",
                thumb = session.thumb().as_str(),
                session = session.id().get(),
                ?reason
            );
            return false;
        }
        let thumb = session.thumb();
        let removed = session.release();
        self.thumbs[thumb.index()].drag = None;
        tracing::debug!(
            message = "slider.drag.end",
            thumb = thumb.as_str(),
            session = session.id().get(),
            removed,
            value = self.value(thumb)
        );
        self.emit(SliderEvent::DragEnded {
            thumb,
            session: session.id(),
        });
        true
    }

    /// Push a value from outside (e.g. a bound model field).
    ///
    /// The value is clamped into the domain and, under
    /// [`CrossingPolicy::Prevent`], against the other thumb. Non-finite
    /// values are ignored.
    pub fn set_value(&mut self, thumb: ThumbId, value: f64) -> Option<ValueChange> {
        self.reap_dropped_sessions();
        if !value.is_finite() {
            tracing::warn!(
                message = "slider.value.rejected",
                thumb = thumb.as_str(),
                value
            );
            return None;
        }
        let clamped = self.bounds(thumb).clamp(value);
        tracing::debug!(
            message = "slider.value.push",
            thumb = thumb.as_str(),
            requested = value,
            clamped
        );
        self.store(thumb, clamped)
    }

    /// Replace the domain and re-clamp both thumbs.
    ///
    /// An invalid domain leaves the slider untouched.
    pub fn set_domain(&mut self, domain: DomainRange) -> Result<Vec<ValueChange>, ConfigError> {
        domain.validate()?;
        self.reap_dropped_sessions();
        self.domain = domain;
        tracing::debug!(
            message = "slider.domain.push",
            min = domain.min,
            max = domain.max
        );
        let mut changes = Vec::new();
        let low = domain.clamp(self.value(ThumbId::Low));
        changes.extend(self.store(ThumbId::Low, low));
        let high = self.bounds(ThumbId::High).clamp(self.value(ThumbId::High));
        changes.extend(self.store(ThumbId::High, high));
        Ok(changes)
    }

    /// Replace track and thumb lengths.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) -> Result<(), ConfigError> {
        SliderConfig {
            geometry,
            ..self.config()
        }
        .validate()?;
        self.reap_dropped_sessions();
        self.geometry = geometry;
        tracing::debug!(
            message = "slider.geometry.push",
            length = geometry.length,
            travel = geometry.travel().max
        );
        Ok(())
    }

    /// Compute track and thumb presentation for the current state.
    #[must_use]
    pub fn layout(&self) -> SliderLayout {
        let travel = self.travel();
        let extent = Extent::for_axis(self.axis);
        let edge = Edge::for_axis(self.axis, self.reverse);
        let offset = |thumb: ThumbId| {
            if self.domain.is_degenerate() {
                travel.min
            } else {
                travel.clamp(self.range_position(thumb))
            }
        };
        SliderLayout {
            travel,
            track: TrackStyle {
                extent,
                length: self.geometry.length,
            },
            low: ThumbStyle {
                extent,
                length: self.geometry.low_thumb_length,
                edge,
                offset: offset(ThumbId::Low),
            },
            // The high thumb sits past the low thumb's body so the two never
            // overlap at equal values.
            high: ThumbStyle {
                extent,
                length: self.geometry.high_thumb_length,
                edge,
                offset: offset(ThumbId::High) + self.geometry.low_thumb_length,
            },
            css_class: css_class(
                self.axis,
                ThumbId::ALL.iter().any(|&thumb| self.is_dragging(thumb)),
            ),
        }
    }

    fn live_drag(&self, thumb: ThumbId) -> Option<ActiveDrag> {
        self.thumbs[thumb.index()]
            .drag
            .filter(|drag| self.listeners.borrow().is_attached(drag.session))
    }

    /// Domain interval `thumb` may occupy under the crossing policy.
    fn bounds(&self, thumb: ThumbId) -> DomainRange {
        match (self.crossing, thumb) {
            (CrossingPolicy::Allow, _) => self.domain,
            (CrossingPolicy::Prevent, ThumbId::Low) => {
                DomainRange::new(self.domain.min, self.value(ThumbId::High))
            }
            (CrossingPolicy::Prevent, ThumbId::High) => {
                DomainRange::new(self.value(ThumbId::Low), self.domain.max)
            }
        }
    }

    fn check_session(&self, session: &DragSession) -> Option<DragIgnoredReason> {
        let reason = if !session.belongs_to(&self.listeners) {
            DragIgnoredReason::ForeignSession
        } else if self.thumbs[session.thumb().index()]
            .drag
            .is_none_or(|drag| drag.session != session.id())
        {
            DragIgnoredReason::StaleSession
        } else {
            return None;
        };
        tracing::warn!(
            message = "slider.drag.session_rejected",
            thumb = session.thumb().as_str(),
            session = session.id().get(),
            ?reason
        );
        Some(reason)
    }

    fn store(&mut self, thumb: ThumbId, value: f64) -> Option<ValueChange> {
        let slot = &mut self.thumbs[thumb.index()];
        let old = slot.value;
        if old == value {
            return None;
        }
        slot.value = value;
        let change = ValueChange {
            thumb,
            old,
            new: value,
        };
        self.emit(SliderEvent::ValueChanged(change));
        Some(change)
    }

    /// Mark thumbs idle whose session handle was dropped without `end_drag`.
    fn reap_dropped_sessions(&mut self) {
        for thumb in ThumbId::ALL {
            let Some(drag) = self.thumbs[thumb.index()].drag else {
                continue;
            };
            if self.listeners.borrow().is_attached(drag.session) {
                continue;
            }
            self.thumbs[thumb.index()].drag = None;
            tracing::debug!(
                message = "slider.drag.reaped",
                thumb = thumb.as_str(),
                session = drag.session.get()
            );
            self.emit(SliderEvent::DragEnded {
                thumb,
                session: drag.session,
            });
        }
    }

    fn emit(&mut self, event: SliderEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
