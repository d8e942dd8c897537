#![forbid(unsafe_code)]

//! Thumb identity and per-thumb state.

use std::fmt;

use rangeslide_core::PointerPosition;

use crate::session::SessionId;

/// One of the two thumbs sharing a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThumbId {
    Low,
    High,
}

impl ThumbId {
    /// Both thumbs, low first.
    pub const ALL: [ThumbId; 2] = [ThumbId::Low, ThumbId::High];

    /// The other thumb on the same track.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Stable array index: `0` for low, `1` for high.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ThumbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable state of one thumb.
///
/// `dragging` is true only between a pointer-down and its matching
/// pointer-up, and `last_pointer` is `Some` only while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbState {
    pub value: f64,
    pub dragging: bool,
    pub last_pointer: Option<PointerPosition>,
}

/// Internal storage for a thumb. The session id is kept alongside the value
/// so a dropped [`DragSession`](crate::DragSession) can be detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThumbSlot {
    pub(crate) value: f64,
    pub(crate) drag: Option<ActiveDrag>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ActiveDrag {
    pub(crate) session: SessionId,
    pub(crate) last_pointer: PointerPosition,
}

impl ThumbSlot {
    pub(crate) const fn new(value: f64) -> Self {
        Self { value, drag: None }
    }
}
