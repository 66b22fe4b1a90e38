//! Container tree that drives box layout passes.
//!
//! The tree plays the part of a UI toolkit: it owns canvas objects,
//! answers minimum-size queries recursively and, whenever a container is
//! resized, lays out that container's children from scratch and then
//! resizes nested containers so they run their own pass.

use std::collections::HashMap;

use nbox_core::{Bounds, Position, Size, TreeError};

use crate::config::{BoxLayout, Spacer};
use crate::item::{ItemKind, LayoutItem};
use crate::options::LayoutOptions;

/// Unique identifier for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// What a node is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Leaf object with an intrinsic minimum size.
    Object { min_size: Size },
    /// Spacer marker.
    Spacer(Spacer),
    /// Container of other nodes. Without a box layout, every visible child
    /// is stacked on top of the others at the container's full size.
    Container { layout: Option<BoxLayout> },
}

/// A node in the tree.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Bounds relative to the parent
    pub bounds: Bounds,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visible: bool,
}

impl LayoutNode {
    fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            bounds: Bounds::default(),
            parent: None,
            children: Vec::new(),
            visible: true,
        }
    }

    fn item_kind(&self) -> ItemKind {
        match self.kind {
            NodeKind::Object { .. } => ItemKind::Object,
            NodeKind::Spacer(spacer) => ItemKind::Spacer(spacer),
            NodeKind::Container { layout: Some(layout) } => ItemKind::Container(layout),
            NodeKind::Container { layout: None } => ItemKind::Object,
        }
    }
}

/// Snapshot of a child handed to the engine for one pass.
struct Slot {
    kind: ItemKind,
    min: Size,
    size: Size,
    position: Position,
    visible: bool,
}

impl LayoutItem for Slot {
    fn min_size(&self) -> Size {
        self.min
    }

    fn size(&self) -> Size {
        self.size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }
}

/// Arena of objects, spacers and containers.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, LayoutNode>,
    /// Nodes without a parent, in insertion order
    roots: Vec<NodeId>,
    next_id: u64,
    options: LayoutOptions,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new(LayoutOptions::default())
    }
}

impl LayoutTree {
    /// Create an empty tree.
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_id: 0,
            options,
        }
    }

    /// Options used by every pass.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next `resize`.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, LayoutNode::new(id, kind));
        self.roots.push(id);
        id
    }

    /// Add a detached leaf object.
    pub fn add_object(&mut self, min_size: Size) -> NodeId {
        self.insert(NodeKind::Object { min_size })
    }

    /// Add a detached spacer.
    pub fn add_spacer(&mut self, spacer: Spacer) -> NodeId {
        self.insert(NodeKind::Spacer(spacer))
    }

    /// Add a detached container.
    pub fn add_container(&mut self, layout: Option<BoxLayout>) -> NodeId {
        self.insert(NodeKind::Container { layout })
    }

    /// Append `child` to the children of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let node = self.node(child)?;
        if node.parent.is_some() {
            return Err(TreeError::AlreadyParented(child.0));
        }
        if !matches!(self.node(parent)?.kind, NodeKind::Container { .. }) {
            return Err(TreeError::NotAContainer(parent.0));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(TreeError::Cycle {
                parent: parent.0,
                child: child.0,
            });
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        self.roots.retain(|&id| id != child);
        Ok(())
    }

    /// Detach a node from its parent and make it a root.
    ///
    /// The node keeps its own subtree. Roots stay where they are.
    pub fn add_root(&mut self, id: NodeId) -> Result<(), TreeError> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|&child| child != id);
        self.node_mut(id)?.parent = None;
        self.roots.push(id);
        Ok(())
    }

    fn is_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        while let Some(parent) = self.nodes.get(&id).and_then(|n| n.parent) {
            if parent == ancestor {
                return true;
            }
            id = parent;
        }
        false
    }

    /// Show or hide a node. Hidden nodes take no part in their parent's layout.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// Change the intrinsic minimum of a leaf object.
    pub fn set_min_size(&mut self, id: NodeId, min_size: Size) -> Result<(), TreeError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Object { min_size: current } => {
                *current = min_size;
                Ok(())
            }
            _ => Err(TreeError::NotAnObject(id.0)),
        }
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(&id)
    }

    fn node(&self, id: NodeId) -> Result<&LayoutNode, TreeError> {
        self.nodes.get(&id).ok_or(TreeError::UnknownNode(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, TreeError> {
        self.nodes.get_mut(&id).ok_or(TreeError::UnknownNode(id.0))
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node, in layout order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &LayoutNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Bounds relative to the parent.
    pub fn bounds(&self, id: NodeId) -> Result<Bounds, TreeError> {
        Ok(self.node(id)?.bounds)
    }

    /// Minimum size of a node, computed fresh from its subtree.
    pub fn min_size(&self, id: NodeId) -> Result<Size, TreeError> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Object { min_size } => Ok(min_size),
            NodeKind::Spacer(_) => Ok(Size::ZERO),
            NodeKind::Container { layout: Some(layout) } => {
                let slots = self.slots(node)?;
                Ok(layout.min_size(&slots, self.options.padding))
            }
            NodeKind::Container { layout: None } => {
                let mut min = Size::ZERO;
                for child in self.children(id).filter(|c| c.visible) {
                    min = min.max(self.min_size(child.id)?);
                }
                Ok(min)
            }
        }
    }

    fn slots(&self, node: &LayoutNode) -> Result<Vec<Slot>, TreeError> {
        node.children
            .iter()
            .map(|&child_id| {
                let child = self.node(child_id)?;
                Ok(Slot {
                    kind: child.item_kind(),
                    min: self.min_size(child_id)?,
                    size: child.bounds.size,
                    position: child.bounds.position,
                    visible: child.visible,
                })
            })
            .collect()
    }

    /// Move a node within its parent.
    pub fn move_to(&mut self, id: NodeId, position: Position) -> Result<(), TreeError> {
        self.node_mut(id)?.bounds.position = position;
        Ok(())
    }

    /// Resize a node. Containers lay out their children, then every
    /// nested container is resized in turn.
    pub fn resize(&mut self, id: NodeId, size: Size) -> Result<(), TreeError> {
        self.node_mut(id)?.bounds.size = size;
        if matches!(self.node(id)?.kind, NodeKind::Container { .. }) {
            self.layout_children(id)?;
        }
        Ok(())
    }

    fn layout_children(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.node(id)?;
        let size = node.bounds.size;
        let mut slots = self.slots(node)?;

        match node.kind {
            NodeKind::Container { layout: Some(layout) } => {
                tracing::trace!(node = id.0, ?size, children = slots.len(), "box layout");
                layout.layout(&mut slots, size, self.options.padding);
            }
            _ => {
                tracing::trace!(node = id.0, ?size, children = slots.len(), "stacked layout");
                for slot in slots.iter_mut().filter(|s| s.visible) {
                    slot.resize(size);
                    slot.move_to(Position::ORIGIN);
                }
            }
        }

        let children = node.children.clone();
        for (child_id, slot) in children.into_iter().zip(slots) {
            if !slot.visible {
                continue;
            }
            self.move_to(child_id, slot.position)?;
            self.resize(child_id, slot.size)?;
        }
        Ok(())
    }
}
