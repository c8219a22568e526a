// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, classes, layout queries, and window state.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Size, Vec2};

use crate::selector::{Selector, SelectorError};
use crate::types::{Element, Extent, NodeFlags, NodeId};

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
    // Scroll offset when this element is a scroll container.
    scroll_top: f64,
}

impl Node {
    fn new(element: Element) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            element,
            scroll_top: 0.0,
        }
    }
}

/// An in-memory document with a window.
///
/// A fresh document holds an `html` root with a single `body` child, both sized to the viewport.
/// Nodes inserted with a `None` parent are detached: they are not found by id or selector
/// queries and have no offset parent.
#[derive(Clone)]
pub struct Dom {
    nodes: Vec<Option<Node>>,      // slots
    generations: Vec<u32>,         // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeId,
    body: NodeId,
    viewport: Size,
    scroll_y: f64,
}

impl core::fmt::Debug for Dom {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Dom")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("viewport", &self.viewport)
            .field("scroll_y", &self.scroll_y)
            .finish_non_exhaustive()
    }
}

/// Iterator over the ancestors of a node, nearest first.
///
/// Returned by [`Dom::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.dom.parent(cur);
        Some(cur)
    }
}

impl Dom {
    /// Create a document with an `html` root and a `body`, sized to `viewport`.
    pub fn new(viewport: Size) -> Self {
        let page = Rect::from_origin_size((0.0, 0.0), viewport);
        let mut dom = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
            body: NodeId::new(0, 0),
            viewport,
            scroll_y: 0.0,
        };
        dom.root = dom.insert(None, Element::new("html").with_bounds(page));
        dom.body = dom.insert(Some(dom.root), Element::new("body").with_bounds(page));
        dom
    }

    /// The `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Insert a new node as the last child of `parent` (or detached if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.generations[idx] = self.generations[idx].saturating_add(1);
            self.nodes[idx] = Some(Node::new(element));
            idx
        } else {
            self.nodes.push(Some(Node::new(element)));
            self.generations.push(1);
            self.nodes.len() - 1
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId stores 32-bit slot indices."
        )]
        let id = NodeId::new(idx as u32, self.generations[idx]);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            if let Some(node) = self.nodes[n.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(n.idx());
            }
        }
    }

    /// Move `id` under `new_parent` (or detach it with `None`).
    ///
    /// Moves that would create a cycle are ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || p == id || self.ancestors(p).any(|a| a == id))
        {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes.get(id.idx()).is_some_and(Option::is_some)
            && self.generations.get(id.idx()) == Some(&id.1)
    }

    /// Element data for a live node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Mutable element data for a live node.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.node_opt_mut(id).map(|n| &mut n.element)
    }

    /// Update local bounds.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(el) = self.element_mut(id) {
            el.bounds = bounds;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(el) = self.element_mut(id) {
            el.flags = flags;
        }
    }

    /// Parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Children of a node in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            dom: self,
            next: self.parent(id),
        }
    }

    /// The nearest inclusive ancestor with the given tag.
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        if self.element(id)?.tag == tag {
            return Some(id);
        }
        self.ancestors(id)
            .find(|&a| self.element(a).is_some_and(|el| el.tag == tag))
    }

    /// All attached nodes in document (pre-)order, starting at the root.
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![self.root];
        while let Some(n) = stack.pop() {
            let Some(node) = self.node_opt(n) else {
                continue;
            };
            out.push(n);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// The first attached element (in document order) whose id equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&n| self.element(n).and_then(|el| el.id.as_deref()) == Some(id))
    }

    /// All attached elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&n| selector.matches(self, n))
            .collect()
    }

    /// Parse `selector` and run [`Dom::query_all`].
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        Ok(self.query_all(&Selector::parse(selector)?))
    }

    /// Add a class, returning true if the class list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        if el.has_class(class) {
            return false;
        }
        el.classes.push(String::from(class));
        true
    }

    /// Remove a class, returning true if the class list changed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        let before = el.classes.len();
        el.classes.retain(|c| c != class);
        el.classes.len() != before
    }

    /// Returns true if the element has `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Set a `data-*` attribute (`key` without the prefix).
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        let Some(el) = self.element_mut(id) else {
            return;
        };
        match el.data.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = String::from(value),
            None => el.data.push((String::from(key), String::from(value))),
        }
    }

    /// Read a `data-*` attribute.
    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.element(id)?
            .data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `id` is the root or descends from it.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_alive(id) && (id == self.root || self.ancestors(id).any(|a| a == self.root))
    }

    /// Returns true if `id` is attached and neither it nor any ancestor is hidden.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        self.is_attached(id)
            && self.displayed(id)
            && self.ancestors(id).all(|a| self.displayed(a))
    }

    /// Border box in document coordinates, ignoring any scrolling.
    pub fn layout_rect(&self, id: NodeId) -> Rect {
        let Some(el) = self.element(id) else {
            return Rect::ZERO;
        };
        let origin = self
            .ancestors(id)
            .filter_map(|a| self.element(a))
            .fold(Vec2::ZERO, |acc, el| acc + el.bounds.origin().to_vec2());
        el.bounds + origin
    }

    /// Border box relative to the viewport, after window and container scrolling.
    pub fn client_rect(&self, id: NodeId) -> Rect {
        let scrolled: f64 = self
            .ancestors(id)
            .filter_map(|a| self.node_opt(a))
            .map(|n| n.scroll_top)
            .sum();
        self.layout_rect(id) - Vec2::new(0.0, scrolled + self.scroll_y)
    }

    /// The element that offsets of `id` are measured against.
    ///
    /// The nearest positioned ancestor, else the body. `None` for the root, the body,
    /// hidden nodes, and detached nodes.
    pub fn offset_parent(&self, id: NodeId) -> Option<NodeId> {
        if id == self.root || id == self.body || !self.is_rendered(id) {
            return None;
        }
        self.ancestors(id)
            .find(|&a| {
                a == self.body
                    || self
                        .element(a)
                        .is_some_and(|el| el.flags.contains(NodeFlags::POSITIONED))
            })
            .or(Some(self.body))
    }

    /// Top offset of `id` relative to its offset parent, or `0` when it has none.
    pub fn offset_top(&self, id: NodeId) -> f64 {
        match self.offset_parent(id) {
            None => 0.0,
            Some(p) if p == self.body => self.layout_rect(id).y0,
            Some(p) => self.layout_rect(id).y0 - self.layout_rect(p).y0,
        }
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport. The window scroll offset is re-clamped.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }

    /// Window vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Largest reachable window scroll offset.
    pub fn max_scroll_y(&self) -> f64 {
        (self.root_extent().scroll_height - self.viewport.height).max(0.0)
    }

    /// Scroll the window, clamping to the scrollable range. Returns the applied offset.
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        self.scroll_y = y.clamp(0.0, self.max_scroll_y());
        self.scroll_y
    }

    /// Height metrics of the `html` element.
    pub fn root_extent(&self) -> Extent {
        let content = self.content_bottom();
        let root_height = self.element(self.root).map_or(0.0, |el| el.bounds.height());
        Extent {
            scroll_height: content.max(self.viewport.height),
            offset_height: root_height.max(self.layout_rect(self.body).y1),
            client_height: self.viewport.height,
        }
    }

    /// Height metrics of the `body` element.
    pub fn body_extent(&self) -> Extent {
        let rect = self.layout_rect(self.body);
        Extent {
            scroll_height: rect.height().max(self.content_bottom() - rect.y0),
            offset_height: rect.height(),
            client_height: rect.height(),
        }
    }

    /// Scroll offset of an element acting as a scroll container.
    pub fn element_scroll_top(&self, id: NodeId) -> f64 {
        self.node_opt(id).map_or(0.0, |n| n.scroll_top)
    }

    /// Visible height of an element acting as a scroll container.
    pub fn element_client_height(&self, id: NodeId) -> f64 {
        self.element(id).map_or(0.0, |el| el.bounds.height())
    }

    /// Content height of an element acting as a scroll container.
    pub fn element_scroll_height(&self, id: NodeId) -> f64 {
        let top = self.layout_rect(id).y0;
        let mut bottom = self.element_client_height(id);
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        while let Some(n) = stack.pop() {
            if !self.displayed(n) {
                continue;
            }
            bottom = bottom.max(self.layout_rect(n).y1 - top);
            stack.extend_from_slice(self.children(n));
        }
        bottom
    }

    /// Scroll an element, clamping to its scrollable range. Returns the applied offset.
    pub fn set_element_scroll_top(&mut self, id: NodeId, y: f64) -> f64 {
        let max = (self.element_scroll_height(id) - self.element_client_height(id)).max(0.0);
        let y = y.clamp(0.0, max);
        if let Some(n) = self.node_opt_mut(id) {
            n.scroll_top = y;
        }
        y
    }

    // --- internals ---

    fn displayed(&self, id: NodeId) -> bool {
        self.element(id)
            .is_some_and(|el| el.flags.contains(NodeFlags::DISPLAYED))
    }

    /// Lowest rendered edge in document coordinates.
    fn content_bottom(&self) -> f64 {
        let mut bottom: f64 = 0.0;
        let mut stack = alloc::vec![self.root];
        while let Some(n) = stack.pop() {
            if !self.displayed(n) {
                continue;
            }
            bottom = bottom.max(self.layout_rect(n).y1);
            stack.extend_from_slice(self.children(n));
        }
        bottom
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_ref()
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_mut()
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = None;
        }
    }
}
