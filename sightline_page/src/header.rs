// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky header state.

use sightline_dom::{Dom, NodeId};

/// Class set on the header while it sits at the viewport top.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Tracks whether the page header is pinned to the top of the viewport.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeaderState {
    header: Option<NodeId>,
    scrolled: bool,
}

impl HeaderState {
    /// Track `header`, or nothing.
    pub fn new(header: Option<NodeId>) -> Self {
        Self {
            header,
            scrolled: false,
        }
    }

    /// The tracked header.
    pub fn header(&self) -> Option<NodeId> {
        self.header
    }

    /// Result of the last [`update`](Self::update).
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Toggle [`SCROLLED_CLASS`] depending on whether the header's top edge, rounded down, is at
    /// the viewport top.
    pub fn update(&mut self, dom: &mut Dom) -> bool {
        let Some(header) = self.header else {
            return false;
        };
        self.scrolled = dom.client_rect(header).y0.floor() == 0.0;
        if self.scrolled {
            dom.add_class(header, SCROLLED_CLASS);
        } else {
            dom.remove_class(header, SCROLLED_CLASS);
        }
        self.scrolled
    }
}
