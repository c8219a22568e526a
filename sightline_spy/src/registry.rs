// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link/section pairs, ordered by document offset.
//!
//! ## Overview
//!
//! [`Registry::build`] queries the navigation links and pairs each with the element its URL
//! fragment names. [`Registry::sort`] orders the pairs by the
//! [document offset](crate::geometry::document_offset) of their content.
//!
//! ## Ties
//!
//! Sorting is stable: sections that resolve to the same offset keep the document order of their
//! links.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::document::Document;
use crate::geometry::document_offset;

/// A navigation link and the content section it targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair<N> {
    /// The navigation link.
    pub nav: N,
    /// The section the link points to.
    pub content: N,
}

/// Ordered collection of [`Pair`]s.
#[derive(Clone, Debug)]
pub struct Registry<N> {
    pairs: Vec<Pair<N>>,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl<N: Copy + Eq + core::fmt::Debug> Registry<N> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with one pair per resolvable link matching `selector`.
    ///
    /// Links without a fragment, with a fragment that does not percent-decode to UTF-8, or
    /// whose fragment names no element are skipped. The resulting order is the link order;
    /// call [`Registry::sort`] afterwards.
    pub fn build<D: Document<Node = N>>(&mut self, doc: &D, selector: &str) {
        self.pairs.clear();
        for nav in doc.query_all(selector) {
            let Some(id) = doc.link_hash(nav).and_then(decode_fragment) else {
                continue;
            };
            if let Some(content) = doc.element_by_id(&id) {
                self.pairs.push(Pair { nav, content });
            }
        }
        tracing::trace!(pairs = self.pairs.len(), selector, "registry built");
    }

    /// Order pairs ascending by the document offset of their content.
    pub fn sort<D: Document<Node = N>>(&mut self, doc: &D) {
        let mut keyed: Vec<(f64, Pair<N>)> = self
            .pairs
            .iter()
            .map(|p| (document_offset(doc, p.content), *p))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.pairs.clear();
        self.pairs.extend(keyed.into_iter().map(|(_, p)| p));
    }

    /// Pairs in their current order.
    pub fn pairs(&self) -> &[Pair<N>] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Drop all pairs.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

/// Percent-decode a URL fragment into an element identifier.
///
/// Returns `None` for an empty fragment or one that does not decode to UTF-8.
///
/// ```
/// use sightline_spy::registry::decode_fragment;
///
/// assert_eq!(decode_fragment("getting-started").as_deref(), Some("getting-started"));
/// assert_eq!(decode_fragment("caf%C3%A9").as_deref(), Some("café"));
/// assert_eq!(decode_fragment(""), None);
/// assert_eq!(decode_fragment("%FF"), None);
/// ```
pub fn decode_fragment(raw: &str) -> Option<Cow<'_, str>> {
    if raw.is_empty() {
        return None;
    }
    percent_encoding::percent_decode_str(raw).decode_utf8().ok()
}
