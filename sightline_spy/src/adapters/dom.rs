// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Document`] implementation for Sightline DOM.
//!
//! ## Feature
//!
//! Enable with `dom_adapter`.
//!
//! ## Notes
//!
//! Selectors are parsed on every [`Document::query_all`] call. A selector that fails to parse is
//! logged at `warn` and matches nothing, so a spy built with it simply has no pairs.
//! List items are elements tagged `li`.

use alloc::vec::Vec;

use kurbo::Rect;
use sightline_dom::{Dom, NodeId, Selector};

use crate::document::{Document, Extent, WindowMetrics};

fn extent(e: sightline_dom::Extent) -> Extent {
    Extent {
        scroll_height: e.scroll_height,
        offset_height: e.offset_height,
        client_height: e.client_height,
    }
}

impl Document for Dom {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(sel) => Self::query_all(self, &sel),
            Err(err) => {
                tracing::warn!(selector, %err, "invalid navigation selector");
                Vec::new()
            }
        }
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        Self::element_by_id(self, id)
    }

    fn link_hash(&self, link: NodeId) -> Option<&str> {
        self.element(link)?.hash()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Self::parent(self, node)
    }

    fn offset_parent(&self, node: NodeId) -> Option<NodeId> {
        Self::offset_parent(self, node)
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        Self::offset_top(self, node)
    }

    fn client_rect(&self, node: NodeId) -> Rect {
        Self::client_rect(self, node)
    }

    fn is_list_item(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.tag == "li")
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let _ = Self::add_class(self, node, class);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        let _ = Self::remove_class(self, node, class);
    }

    fn window(&self) -> WindowMetrics {
        WindowMetrics {
            inner_height: self.viewport().height,
            scroll_y: self.scroll_y(),
            root: extent(self.root_extent()),
            body: extent(self.body_extent()),
        }
    }
}
