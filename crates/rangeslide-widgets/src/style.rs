#![forbid(unsafe_code)]

//! Computed presentation for the track and thumbs.
//!
//! These are plain values for a rendering layer to apply. `Display` renders
//! them as inline CSS declarations.

use std::fmt;

use rangeslide_core::{Axis, TravelRange};

/// CSS size property along the slider axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Height,
    Width,
}

impl Extent {
    /// Size property used for `axis`.
    #[must_use]
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Self::Height,
            Axis::Horizontal => Self::Width,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
        }
    }
}

/// CSS edge a thumb offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Offset edge for `axis`; `reverse` measures from the far side.
    #[must_use]
    pub const fn for_axis(axis: Axis, reverse: bool) -> Self {
        match (axis, reverse) {
            (Axis::Vertical, false) => Self::Top,
            (Axis::Vertical, true) => Self::Bottom,
            (Axis::Horizontal, false) => Self::Left,
            (Axis::Horizontal, true) => Self::Right,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Track size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub extent: Extent,
    pub length: f64,
}

impl fmt::Display for TrackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}px", self.extent.as_str(), self.length)
    }
}

/// Thumb size and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStyle {
    pub extent: Extent,
    pub length: f64,
    pub edge: Edge,
    pub offset: f64,
}

impl fmt::Display for ThumbStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}px; {}: {}px",
            self.extent.as_str(),
            self.length,
            self.edge.as_str(),
            self.offset
        )
    }
}

/// Snapshot of everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    pub travel: TravelRange,
    pub track: TrackStyle,
    pub low: ThumbStyle,
    pub high: ThumbStyle,
    /// Class list: the axis name, plus `dragging` while a thumb is held.
    pub css_class: String,
}

/// Class list for the track element.
#[must_use]
pub fn css_class(axis: Axis, dragging: bool) -> String {
    if dragging {
        format!("{} dragging", axis.as_str())
    } else {
        axis.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Extent, ThumbStyle, TrackStyle, css_class};
    use rangeslide_core::Axis;

    #[test]
    fn edges_follow_axis_and_reverse() {
        assert_eq!(Edge::for_axis(Axis::Vertical, false), Edge::Top);
        assert_eq!(Edge::for_axis(Axis::Vertical, true), Edge::Bottom);
        assert_eq!(Edge::for_axis(Axis::Horizontal, false), Edge::Left);
        assert_eq!(Edge::for_axis(Axis::Horizontal, true), Edge::Right);
    }

    #[test]
    fn styles_render_as_css() {
        let track = TrackStyle {
            extent: Extent::for_axis(Axis::Horizontal),
            length: 500.0,
        };
        assert_eq!(track.to_string(), "width: 500px");

        let thumb = ThumbStyle {
            extent: Extent::Height,
            length: 50.0,
            edge: Edge::Bottom,
            offset: 132.5,
        };
        assert_eq!(thumb.to_string(), "height: 50px; bottom: 132.5px");
    }

    #[test]
    fn class_marks_dragging() {
        assert_eq!(css_class(Axis::Vertical, false), "vertical");
        assert_eq!(css_class(Axis::Horizontal, true), "horizontal dragging");
    }
}
