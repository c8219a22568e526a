// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline DOM: a small in-memory document model.
//!
//! Sightline DOM gives headless hosts, tests, and benchmarks something that behaves like a browser
//! document for the purposes of scroll tracking.
//!
//! - Represents an element tree with tags, ids, link targets, class lists, and `data-*` attributes.
//! - Lays elements out with plain rectangles relative to their parent, and answers the
//!   offset-parent questions a browser would (`offsetParent`, `offsetTop`,
//!   `getBoundingClientRect`).
//! - Tracks a window (viewport size and scroll offset) plus per-element scroll containers.
//! - Matches a minimal CSS selector subset via [`Selector`].
//!
//! ## Not a layout engine
//!
//! This crate does not perform layout (measurement or arrangement) or apply layout policies such
//! as flow, flex, or grid. Upstream code positions elements explicitly with [`Dom::set_bounds`].
//! Think of this as a geometry snapshot of a page, not a renderer.
//!
//! ## Offset parents
//!
//! An element's offset parent is its nearest ancestor flagged [`NodeFlags::POSITIONED`], or the
//! body when there is none. The root, the body, hidden subtrees (no [`NodeFlags::DISPLAYED`]),
//! and detached nodes have no offset parent, and their [`Dom::offset_top`] is `0`.
//!
//! ## API overview
//!
//! - [`Dom`]: the document and its window.
//! - [`Element`]: per-node data.
//! - [`NodeId`]: generational handle of a node.
//! - [`Selector`]: parsed selector list used by [`Dom::query_all`].
//! - [`Extent`]: height metrics of the root and body elements.
//!
//! ### Minimal usage
//!
//! ```
//! use sightline_dom::{Dom, Element};
//! use kurbo::{Rect, Size};
//!
//! let mut dom = Dom::new(Size::new(800.0, 600.0));
//! let body = dom.body();
//!
//! let intro = dom.insert(
//!     Some(body),
//!     Element::new("section")
//!         .with_id("intro")
//!         .with_bounds(Rect::new(0.0, 0.0, 800.0, 900.0)),
//! );
//! let usage = dom.insert(
//!     Some(body),
//!     Element::new("section")
//!         .with_id("usage")
//!         .with_bounds(Rect::new(0.0, 900.0, 800.0, 1400.0)),
//! );
//!
//! assert_eq!(dom.element_by_id("usage"), Some(usage));
//! assert_eq!(dom.offset_top(usage), 900.0);
//!
//! // Scrolling moves viewport-relative boxes, not offsets.
//! dom.scroll_to(400.0);
//! assert_eq!(dom.client_rect(usage).y0, 500.0);
//! assert_eq!(dom.offset_top(intro), 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dom;
mod selector;
mod types;

pub use dom::{Ancestors, Dom};
pub use selector::{Selector, SelectorError};
pub use types::{Element, Extent, NodeFlags, NodeId};
