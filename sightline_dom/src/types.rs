// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: node identifiers, flags, elements, and window metrics.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

/// Identifier for a node in the document.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Dom::is_alive`](crate::Dom::is_alive) to check whether a `NodeId` still refers to a live
/// node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling rendering and offset-parent participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is rendered. Hidden nodes (and their subtrees) have no offset parent.
        const DISPLAYED  = 0b0000_0001;
        /// Node establishes a containing block and serves as an offset parent for descendants.
        const POSITIONED = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::DISPLAYED
    }
}

/// Element data for a node.
///
/// `bounds` is the element's border box relative to its parent's origin, so moving a parent moves
/// its whole subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Lowercase tag name, e.g. `"li"`.
    pub tag: String,
    /// Element identifier, the target of URL fragments.
    pub id: Option<String>,
    /// Link target for anchors, e.g. `"#install"` or `"guide.html#install"`.
    pub href: Option<String>,
    /// Class list, without duplicates.
    pub classes: Vec<String>,
    /// `data-*` attributes as `(key, value)` pairs, keys without the `data-` prefix.
    pub data: Vec<(String, String)>,
    /// Border box relative to the parent's origin.
    pub bounds: Rect,
    /// Rendering and positioning flags.
    pub flags: NodeFlags,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: String::from("div"),
            id: None,
            href: None,
            classes: Vec::new(),
            data: Vec::new(),
            bounds: Rect::ZERO,
            flags: NodeFlags::default(),
        }
    }
}

impl Element {
    /// Create an element with the given tag and otherwise default data.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Set the element identifier.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(String::from(id));
        self
    }

    /// Set the link target.
    #[must_use]
    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(String::from(href));
        self
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(String::from(class));
        }
        self
    }

    /// Set the local bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns true if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The fragment part of `href` (after `#`), still percent-encoded.
    ///
    /// Returns `None` when there is no `href` or it carries no fragment.
    pub fn hash(&self) -> Option<&str> {
        let href = self.href.as_deref()?;
        let (_, fragment) = href.split_once('#')?;
        Some(fragment)
    }
}

/// Height metrics reported by the root (`html`) or `body` element.
///
/// Browsers disagree about which element reports the true document height, so consumers
/// usually take the maximum across both.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Extent {
    /// Height of the element's content including overflow.
    pub scroll_height: f64,
    /// Layout height of the element's border box.
    pub offset_height: f64,
    /// Inner height of the element (the viewport height for the root).
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
