//! The capability a box layout needs from each child.

use nbox_core::{Position, Size};

use crate::config::{BoxLayout, Spacer};

/// What a child is, as far as box layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    /// Any canvas object, including containers with a non-box layout.
    #[default]
    Object,
    /// Spacer marker.
    Spacer(Spacer),
    /// Container governed by another box layout.
    Container(BoxLayout),
}

/// A child object placed by a box layout.
///
/// The layout only borrows children for the length of a pass. Sizes are
/// queried fresh on every call.
pub trait LayoutItem {
    /// Intrinsic minimum size.
    fn min_size(&self) -> Size;

    /// Size most recently assigned by `resize`.
    fn size(&self) -> Size;

    fn is_visible(&self) -> bool;

    fn resize(&mut self, size: Size);

    fn move_to(&mut self, position: Position);

    fn kind(&self) -> ItemKind {
        ItemKind::Object
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &mut T {
    fn min_size(&self) -> Size {
        (**self).min_size()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn move_to(&mut self, position: Position) {
        (**self).move_to(position)
    }

    fn kind(&self) -> ItemKind {
        (**self).kind()
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn min_size(&self) -> Size {
        (**self).min_size()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn move_to(&mut self, position: Position) {
        (**self).move_to(position)
    }

    fn kind(&self) -> ItemKind {
        (**self).kind()
    }
}

/// How a child takes part in main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flex {
    /// Sized to its own minimum.
    Fixed,
    /// Shares leftover main-axis space with the other flexible children.
    MainExpand,
    /// Fixed main extent, stretched to the siblings' maximum cross extent.
    CrossFull,
}

impl BoxLayout {
    /// Visible spacer that expands along this layout's axis.
    pub fn is_spacer(&self, item: &impl LayoutItem) -> bool {
        if !item.is_visible() {
            return false;
        }
        match item.kind() {
            ItemKind::Spacer(spacer) => spacer.expands_along(self.axis()),
            _ => false,
        }
    }

    /// Flex requirement of a child, ignoring whether this box is expanded.
    ///
    /// Only an expanded nested box asks for anything: along our axis it
    /// needs main-axis space, across it it needs our full cross extent.
    pub fn child_flex(&self, item: &impl LayoutItem) -> Flex {
        match item.kind() {
            ItemKind::Container(nested) if nested.is_expanded() => {
                if nested.axis() == self.axis() {
                    Flex::MainExpand
                } else {
                    Flex::CrossFull
                }
            }
            _ => Flex::Fixed,
        }
    }

    /// Final classification: an expanded box makes every child flexible.
    pub fn classify(&self, item: &impl LayoutItem) -> Flex {
        if self.is_expanded() {
            return Flex::MainExpand;
        }
        self.child_flex(item)
    }
}
