//! Box layout configuration.

use nbox_core::Axis;
use serde::{Deserialize, Serialize};

/// Placement of children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrossAlignment {
    /// Align to start (top for horizontal, left for vertical)
    Start,
    /// Align to end (bottom for horizontal, right for vertical)
    End,
    /// Center on the cross axis
    Center,
    /// Text baseline alignment. Not implemented: places children like `Start`.
    Baseline,
    /// Every child takes the container's full cross extent
    #[default]
    Stretch,
}

/// Layout descriptor for one box container.
///
/// Created once per container and never mutated afterwards. The host runs
/// [`BoxLayout::layout`] on every size change; nothing is retained between
/// passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxLayout {
    expanded: bool,
    axis: Axis,
    cross_alignment: CrossAlignment,
}

impl BoxLayout {
    const fn new(expanded: bool, axis: Axis, cross_alignment: CrossAlignment) -> Self {
        Self {
            expanded,
            axis,
            cross_alignment,
        }
    }

    /// Stack children left to right, stretched to the full height.
    pub const fn horizontal() -> Self {
        Self::new(false, Axis::Horizontal, CrossAlignment::Stretch)
    }

    /// Stack children left to right with the given vertical alignment.
    pub const fn horizontal_aligned(cross_alignment: CrossAlignment) -> Self {
        Self::new(false, Axis::Horizontal, cross_alignment)
    }

    /// Stack children top to bottom, stretched to the full width.
    pub const fn vertical() -> Self {
        Self::new(false, Axis::Vertical, CrossAlignment::Stretch)
    }

    /// Stack children top to bottom with the given horizontal alignment.
    pub const fn vertical_aligned(cross_alignment: CrossAlignment) -> Self {
        Self::new(false, Axis::Vertical, cross_alignment)
    }

    /// Horizontal box where every child shares the width equally.
    pub const fn horizontal_expanded() -> Self {
        Self::new(true, Axis::Horizontal, CrossAlignment::Stretch)
    }

    /// Expanded horizontal box with the given vertical alignment.
    pub const fn horizontal_expanded_aligned(cross_alignment: CrossAlignment) -> Self {
        Self::new(true, Axis::Horizontal, cross_alignment)
    }

    /// Vertical box where every child shares the height equally.
    pub const fn vertical_expanded() -> Self {
        Self::new(true, Axis::Vertical, CrossAlignment::Stretch)
    }

    /// Expanded vertical box with the given horizontal alignment.
    pub const fn vertical_expanded_aligned(cross_alignment: CrossAlignment) -> Self {
        Self::new(true, Axis::Vertical, cross_alignment)
    }

    /// Stacking axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Whether children are stacked left to right.
    pub fn is_horizontal(&self) -> bool {
        self.axis == Axis::Horizontal
    }

    /// Whether every child is flexible along the main axis.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Placement on the cross axis.
    pub fn cross_alignment(&self) -> CrossAlignment {
        self.cross_alignment
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::vertical()
    }
}

/// Marker child that soaks up leftover main-axis space.
///
/// A spacer has no intrinsic size. It only counts as a spacer in a box
/// whose axis it expands along; `Spacer::horizontal()` inside a vertical
/// box is laid out as an ordinary zero-size child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Spacer {
    pub fix_horizontal: bool,
    pub fix_vertical: bool,
}

impl Spacer {
    /// A spacer that expands along both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spacer that only expands horizontally.
    pub fn horizontal() -> Self {
        Self {
            fix_horizontal: false,
            fix_vertical: true,
        }
    }

    /// A spacer that only expands vertically.
    pub fn vertical() -> Self {
        Self {
            fix_horizontal: true,
            fix_vertical: false,
        }
    }

    pub fn expands_along(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => !self.fix_horizontal,
            Axis::Vertical => !self.fix_vertical,
        }
    }
}
