#![forbid(unsafe_code)]

//! Deterministic web pointer adapter for range slider thumbs.
//!
//! This module bridges browser pointer lifecycle signals into
//! [`RangeSlider`] drag sessions while enforcing:
//! - one pointer per thumb, and one thumb per pointer,
//! - explicit listener attach/detach commands for JS hosts, paired one to one,
//! - termination on interruption paths (cancel/blur/visibility/lost-capture).
//!
//! The two thumbs are independent: two pointers (multi-touch) may hold them
//! at the same time.

use rangeslide_core::PointerPosition;
use rangeslide_widgets::{
    ConfigError, DragOutcome, DragSession, RangeSlider, SliderConfig, ThumbId, ValueChange,
};

use crate::host_params::{HostParamsError, SliderParams};

/// Pointer button, numbered as DOM `PointerEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Decode a DOM `button` value.
    #[must_use]
    pub const fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderPointerConfig {
    /// Button required to grab a thumb.
    pub activation_button: PointerButton,
}

impl Default for SliderPointerConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
        }
    }
}

#[derive(Debug)]
struct ActivePointer {
    pointer_id: u32,
    button: PointerButton,
    session: DragSession,
}

/// Host command: add or remove the window-level move/up listeners for one
/// drag. Every `Attach` is followed by exactly one `Detach`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Attach { thumb: ThumbId, pointer_id: u32 },
    Detach { thumb: ThumbId, pointer_id: u32 },
}

/// Lifecycle phase recorded for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerPhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    Blur,
    VisibilityHidden,
    LostPointerCapture,
    Unmount,
}

/// Deterministic reason why an incoming lifecycle signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    ThumbAlreadyHeld,
    PointerAlreadyActive,
    NoActivePointer,
    SliderRejected,
}

/// Outcome category for one lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerLogOutcome {
    DragStarted,
    ValueMoved,
    ValueUnchanged,
    DragEnded,
    Ignored(SliderPointerIgnoredReason),
}

/// Structured lifecycle log record for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPointerLogEntry {
    pub phase: SliderPointerPhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub thumb: Option<ThumbId>,
    pub position: Option<PointerPosition>,
    pub listener_command: Option<ListenerCommand>,
    pub outcome: SliderPointerLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPointerDispatch {
    pub change: Option<ValueChange>,
    pub listener_command: Option<ListenerCommand>,
    pub log: SliderPointerLogEntry,
}

impl SliderPointerDispatch {
    fn ignored(
        phase: SliderPointerPhase,
        reason: SliderPointerIgnoredReason,
        pointer_id: Option<u32>,
        thumb: Option<ThumbId>,
        position: Option<PointerPosition>,
    ) -> Self {
        tracing::debug!(
            message = "slider.pointer.ignored",
            ?phase,
            ?reason,
            pointer_id,
            thumb = thumb.map(ThumbId::as_str)
        );
        Self {
            change: None,
            listener_command: None,
            log: SliderPointerLogEntry {
                phase,
                sequence: None,
                pointer_id,
                thumb,
                position,
                listener_command: None,
                outcome: SliderPointerLogOutcome::Ignored(reason),
            },
        }
    }

    /// True if the signal was ignored.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.log.outcome, SliderPointerLogOutcome::Ignored(_))
    }
}

/// Deterministic pointer adapter for slider web hosts.
///
/// The adapter owns the [`RangeSlider`] and the drag session handles, so a
/// drag can only be continued through a pointer that started it. Listener
/// commands can be wired to `window.addEventListener` /
/// `removeEventListener` (or `setPointerCapture` / `releasePointerCapture`).
#[derive(Debug)]
pub struct SliderPointerAdapter {
    slider: RangeSlider,
    config: SliderPointerConfig,
    active: [Option<ActivePointer>; 2],
    next_sequence: u64,
}

impl SliderPointerAdapter {
    /// Mount a slider and wrap it.
    pub fn new(
        slider_config: SliderConfig,
        config: SliderPointerConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_slider(RangeSlider::new(slider_config)?, config))
    }

    /// Wrap an existing slider.
    #[must_use]
    pub fn with_slider(slider: RangeSlider, config: SliderPointerConfig) -> Self {
        Self {
            slider,
            config,
            active: [None, None],
            next_sequence: 1,
        }
    }

    /// Mount a slider from JSON component parameters.
    pub fn from_host_params(
        json: &str,
        config: SliderPointerConfig,
    ) -> Result<Self, HostParamsError> {
        let slider_config = SliderParams::from_json(json)?.into_config()?;
        Ok(Self::with_slider(RangeSlider::new(slider_config)?, config))
    }

    /// Adapter configuration.
    #[must_use]
    pub const fn config(&self) -> SliderPointerConfig {
        self.config
    }

    /// The wrapped slider.
    #[must_use]
    pub const fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    /// Mutable access for external value pushes and observers.
    pub fn slider_mut(&mut self) -> &mut RangeSlider {
        &mut self.slider
    }

    /// Pointer currently holding `thumb`, if any.
    #[must_use]
    pub fn active_pointer_id(&self, thumb: ThumbId) -> Option<u32> {
        self.active[thumb.index()].as_ref().map(|active| active.pointer_id)
    }

    /// Handle pointer-down on a thumb element.
    pub fn pointer_down(
        &mut self,
        thumb: ThumbId,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerPhase::PointerDown;
        let ignore = |reason| {
            SliderPointerDispatch::ignored(phase, reason, Some(pointer_id), Some(thumb), Some(position))
        };
        if pointer_id == 0 {
            return ignore(SliderPointerIgnoredReason::InvalidPointerId);
        }
        if button != self.config.activation_button {
            return ignore(SliderPointerIgnoredReason::ButtonNotAllowed);
        }
        if self.active[thumb.index()].is_some() {
            return ignore(SliderPointerIgnoredReason::ThumbAlreadyHeld);
        }
        if self.thumb_for_pointer(pointer_id).is_some() {
            return ignore(SliderPointerIgnoredReason::PointerAlreadyActive);
        }
        let Some(session) = self.slider.begin_drag(thumb, position) else {
            return ignore(SliderPointerIgnoredReason::SliderRejected);
        };

        self.active[thumb.index()] = Some(ActivePointer {
            pointer_id,
            button,
            session,
        });
        let command = ListenerCommand::Attach { thumb, pointer_id };
        self.forwarded(
            phase,
            pointer_id,
            thumb,
            Some(position),
            None,
            Some(command),
            SliderPointerLogOutcome::DragStarted,
        )
    }

    /// Handle pointer-move from the window-level listener.
    pub fn pointer_move(
        &mut self,
        pointer_id: u32,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerPhase::PointerMove;
        let held = ThumbId::ALL.into_iter().find_map(|thumb| {
            self.active[thumb.index()]
                .as_ref()
                .filter(|active| active.pointer_id == pointer_id)
                .map(|active| (thumb, active))
        });
        let Some((thumb, active)) = held else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                Some(position),
            );
        };

        let (change, outcome) = match self.slider.continue_drag(&active.session, position) {
            DragOutcome::Moved(change) => (Some(change), SliderPointerLogOutcome::ValueMoved),
            DragOutcome::Unchanged => (None, SliderPointerLogOutcome::ValueUnchanged),
            DragOutcome::Ignored(_) => {
                return SliderPointerDispatch::ignored(
                    phase,
                    SliderPointerIgnoredReason::SliderRejected,
                    Some(pointer_id),
                    Some(thumb),
                    Some(position),
                );
            }
        };
        self.forwarded(phase, pointer_id, thumb, Some(position), change, None, outcome)
    }

    /// Handle pointer-up anywhere in the window; ends the drag.
    ///
    /// `position` is recorded in the log entry but not applied to the value.
    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerPhase::PointerUp;
        let Some(thumb) = self.thumb_for_pointer(pointer_id) else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                Some(position),
            );
        };
        if self.active[thumb.index()]
            .as_ref()
            .is_some_and(|active| active.button != button)
        {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                Some(thumb),
                Some(position),
            );
        }
        self.end_active(phase, thumb, Some(position))
    }

    /// Handle browser pointer-cancel. `None` cancels every active drag.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> Vec<SliderPointerDispatch> {
        let phase = SliderPointerPhase::PointerCancel;
        match pointer_id {
            Some(id) => match self.thumb_for_pointer(id) {
                Some(thumb) => vec![self.end_active(phase, thumb, None)],
                None => vec![SliderPointerDispatch::ignored(
                    phase,
                    SliderPointerIgnoredReason::NoActivePointer,
                    Some(id),
                    None,
                    None,
                )],
            },
            None => self.end_all(phase),
        }
    }

    /// Handle window blur; ends every active drag.
    pub fn blur(&mut self) -> Vec<SliderPointerDispatch> {
        self.end_all(SliderPointerPhase::Blur)
    }

    /// Handle visibility-hidden interruptions; ends every active drag.
    pub fn visibility_hidden(&mut self) -> Vec<SliderPointerDispatch> {
        self.end_all(SliderPointerPhase::VisibilityHidden)
    }

    /// Handle `lostpointercapture`; ends the drag held by that pointer.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> SliderPointerDispatch {
        let phase = SliderPointerPhase::LostPointerCapture;
        match self.thumb_for_pointer(pointer_id) {
            Some(thumb) => self.end_active(phase, thumb, None),
            None => SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                None,
            ),
        }
    }

    /// Tear down: end every active drag and hand back the slider.
    ///
    /// The returned dispatches carry the `Detach` commands the host must run.
    pub fn unmount(mut self) -> (RangeSlider, Vec<SliderPointerDispatch>) {
        let dispatches = self.end_all(SliderPointerPhase::Unmount);
        (self.slider, dispatches)
    }

    fn end_all(&mut self, phase: SliderPointerPhase) -> Vec<SliderPointerDispatch> {
        let held: Vec<ThumbId> = ThumbId::ALL
            .into_iter()
            .filter(|&thumb| self.active[thumb.index()].is_some())
            .collect();
        if held.is_empty() {
            return vec![SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                None,
                None,
                None,
            )];
        }
        held.into_iter()
            .map(|thumb| self.end_active(phase, thumb, None))
            .collect()
    }

    fn end_active(
        &mut self,
        phase: SliderPointerPhase,
        thumb: ThumbId,
        position: Option<PointerPosition>,
    ) -> SliderPointerDispatch {
        let Some(active) = self.active[thumb.index()].take() else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                None,
                Some(thumb),
                position,
            );
        };
        let pointer_id = active.pointer_id;
        self.slider.end_drag(active.session);
        let command = ListenerCommand::Detach { thumb, pointer_id };
        self.forwarded(
            phase,
            pointer_id,
            thumb,
            position,
            None,
            Some(command),
            SliderPointerLogOutcome::DragEnded,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn forwarded(
        &mut self,
        phase: SliderPointerPhase,
        pointer_id: u32,
        thumb: ThumbId,
        position: Option<PointerPosition>,
        change: Option<ValueChange>,
        listener_command: Option<ListenerCommand>,
        outcome: SliderPointerLogOutcome,
    ) -> SliderPointerDispatch {
        let sequence = self.next_sequence();
        if listener_command.is_some() {
            tracing::debug!(
                message = "slider.pointer.listeners",
                sequence,
                ?phase,
                pointer_id,
                thumb = thumb.as_str(),
                command = ?listener_command
            );
        }
        SliderPointerDispatch {
            change,
            listener_command,
            log: SliderPointerLogEntry {
                phase,
                sequence: Some(sequence),
                pointer_id: Some(pointer_id),
                thumb: Some(thumb),
                position,
                listener_command,
                outcome,
            },
        }
    }

    fn thumb_for_pointer(&self, pointer_id: u32) -> Option<ThumbId> {
        ThumbId::ALL.into_iter().find(|&thumb| {
            self.active[thumb.index()]
                .as_ref()
                .is_some_and(|active| active.pointer_id == pointer_id)
        })
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
