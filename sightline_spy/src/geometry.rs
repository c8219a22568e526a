// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-relative offsets.

use crate::document::Document;

/// Cumulative top offset of `node` from the document top.
///
/// Walks the offset-parent chain, summing each level's [`Document::offset_top`]. A node without
/// an offset parent (detached, hidden, or the body) resolves to `0`, and negative sums clamp to
/// `0`. The chain must be acyclic.
pub fn document_offset<D: Document>(doc: &D, node: D::Node) -> f64 {
    if doc.offset_parent(node).is_none() {
        return 0.0;
    }
    let mut total = 0.0;
    let mut cur = Some(node);
    while let Some(n) = cur {
        total += doc.offset_top(n);
        cur = doc.offset_parent(n);
    }
    // Also maps NaN to zero.
    if total >= 0.0 { total } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BODY, TestPage};

    #[test]
    fn offset_of_attached_section() {
        let mut page = TestPage::new(800.0);
        let s = page.section("s", 1250.0, 100.0);
        assert_eq!(document_offset(&page, s), 1250.0);
    }

    #[test]
    fn detached_and_body_resolve_to_zero() {
        let mut page = TestPage::new(800.0);
        let s = page.section("s", 400.0, 100.0);
        page.detach(s);
        assert_eq!(document_offset(&page, s), 0.0);
        assert_eq!(document_offset(&page, BODY), 0.0);
    }

    #[test]
    fn negative_offsets_clamp() {
        let mut page = TestPage::new(800.0);
        let s = page.section("s", -30.0, 100.0);
        assert_eq!(document_offset(&page, s), 0.0);
    }
}
