//! Box layout for nested containers.
//!
//! A box stacks its visible children along one axis (horizontal or
//! vertical). Each child gets its minimum main extent; flexible children
//! and spacers share whatever space is left over. On the cross axis every
//! child is placed by a [`CrossAlignment`].
//!
//! # Architecture
//!
//! 1. **Configuration**: [`BoxLayout`] is an immutable descriptor, one per container
//! 2. **Sizing pass**: [`BoxLayout::min_size`] reports the container's minimum
//! 3. **Layout pass**: [`BoxLayout::layout`] resizes and moves every child
//! 4. **Host tree**: [`LayoutTree`] owns objects and drives nested passes
//!
//! # Example
//!
//! ```
//! use nbox_layout::{BoxLayout, CrossAlignment, LayoutTree, LayoutOptions};
//! use nbox_core::Size;
//!
//! let mut tree = LayoutTree::new(LayoutOptions::default());
//! let root = tree.add_container(Some(BoxLayout::horizontal_aligned(CrossAlignment::Center)));
//! let label = tree.add_object(Size::new(100.0, 20.0));
//! let spacer = tree.add_spacer(nbox_layout::Spacer::new());
//! let button = tree.add_object(Size::new(50.0, 30.0));
//! for child in [label, spacer, button] {
//!     tree.add_child(root, child).unwrap();
//! }
//!
//! tree.resize(root, Size::new(300.0, 50.0)).unwrap();
//! assert_eq!(tree.bounds(button).unwrap().position.x, 250.0);
//! ```

mod config;
mod engine;
mod item;
mod observer;
mod options;
mod tree;

pub use config::{BoxLayout, CrossAlignment, Spacer};
pub use item::{Flex, ItemKind, LayoutItem};
pub use observer::{LayoutObserver, LayoutPass, TracingObserver};
pub use options::LayoutOptions;
pub use tree::{LayoutNode, LayoutTree, NodeId, NodeKind};
