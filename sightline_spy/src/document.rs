// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document contract consumed by the spy.
//!
//! ## Overview
//!
//! The spy never owns elements. It holds copyable node handles and asks a [`Document`] for
//! everything else: selector queries, id lookup, link fragments, the parent and offset-parent
//! chains, viewport-relative boxes, class mutation, and window metrics.
//!
//! Implement [`Document`] for your toolkit's element tree, or enable the `dom_adapter` feature to
//! use `sightline_dom::Dom`.

use alloc::vec::Vec;
use kurbo::Rect;

/// Height metrics reported by the root or body element.
///
/// Consumed by [`is_at_bottom`](crate::bottom::is_at_bottom).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Extent {
    /// Content height including overflow.
    pub scroll_height: f64,
    /// Layout height of the border box.
    pub offset_height: f64,
    /// Inner height.
    pub client_height: f64,
}

impl Extent {
    /// The largest of the three heights.
    pub fn max_height(&self) -> f64 {
        self.scroll_height
            .max(self.offset_height)
            .max(self.client_height)
    }
}

/// Window state sampled once per detection pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WindowMetrics {
    /// Viewport height.
    pub inner_height: f64,
    /// Vertical scroll offset of the window.
    pub scroll_y: f64,
    /// Metrics of the root (`html`) element.
    pub root: Extent,
    /// Metrics of the `body` element.
    pub body: Extent,
}

/// A document the spy can observe and mark.
///
/// Implementations are expected to be cheap to query; the spy calls into them on every
/// detection pass.
pub trait Document {
    /// Node handle. Handles are compared for identity and copied freely.
    type Node: Copy + Eq + core::fmt::Debug;

    /// All elements matching `selector`, in document order.
    ///
    /// A selector the implementation cannot parse yields no elements.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// The element whose identifier equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The raw (still percent-encoded) fragment of a link's target, without the leading `#`.
    fn link_hash(&self, link: Self::Node) -> Option<&str>;

    /// Parent of `node`, or `None` at the root or for detached nodes.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The layout-containing ancestor that [`Document::offset_top`] is measured against.
    fn offset_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Top offset of `node` relative to its offset parent.
    fn offset_top(&self, node: Self::Node) -> f64;

    /// Border box relative to the viewport.
    fn client_rect(&self, node: Self::Node) -> Rect;

    /// Returns true if `node` is a list item (the grouping element that receives state classes).
    fn is_list_item(&self, node: Self::Node) -> bool;

    /// Add `class` to `node`. Adding a present class is a no-op.
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Remove `class` from `node`. Removing an absent class is a no-op.
    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Current window metrics.
    fn window(&self) -> WindowMetrics;
}

/// The nearest inclusive ancestor of `node` that is a list item.
pub fn enclosing_list_item<D: Document>(doc: &D, node: D::Node) -> Option<D::Node> {
    let mut cur = Some(node);
    while let Some(n) = cur {
        if doc.is_list_item(n) {
            return Some(n);
        }
        cur = doc.parent(n);
    }
    None
}

/// Iterator over the list items enclosing a list item, nearest first.
///
/// Returned by [`list_item_ancestors`].
#[derive(Debug)]
pub struct ListItemAncestors<'a, D: Document> {
    doc: &'a D,
    next: Option<D::Node>,
}

impl<D: Document> Iterator for ListItemAncestors<'_, D> {
    type Item = D::Node;

    fn next(&mut self) -> Option<D::Node> {
        let cur = self.next?;
        self.next = self
            .doc
            .parent(cur)
            .and_then(|p| enclosing_list_item(self.doc, p));
        Some(cur)
    }
}

/// List items strictly enclosing `item`, walking upward until none remain.
///
/// `item` itself is not yielded.
pub fn list_item_ancestors<D: Document>(doc: &D, item: D::Node) -> ListItemAncestors<'_, D> {
    ListItemAncestors {
        doc,
        next: doc.parent(item).and_then(|p| enclosing_list_item(doc, p)),
    }
}
