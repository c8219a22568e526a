// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the table of contents in step with the page.
//!
//! The TOC lives in its own scroll container. [`TocFollower::follow`] pins that container to its
//! top while the page is at its top, to its bottom while the page is at its bottom, and otherwise
//! scrolls just enough to keep the highlighted entry visible.

use sightline_dom::{Dom, NodeId};

/// What [`TocFollower::follow`] did to the container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TocScroll {
    /// No container, or the highlighted entry was already visible.
    Unchanged,
    /// Scrolled to the top.
    Top,
    /// Scrolled to the bottom.
    Bottom,
    /// Scrolled to bring this entry into view.
    Reveal(NodeId),
}

/// Scrolls the TOC container to follow the page.
#[derive(Clone, Debug)]
pub struct TocFollower {
    container: Option<NodeId>,
    current_class: String,
}

impl TocFollower {
    /// Follow the entry carrying `current_class` inside `container`.
    pub fn new(container: Option<NodeId>, current_class: impl Into<String>) -> Self {
        Self {
            container,
            current_class: current_class.into(),
        }
    }

    /// The scroll container, if the page has one.
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Adjust the container for a page scrolled to `scroll_y`.
    pub fn follow(&self, dom: &mut Dom, scroll_y: f64) -> TocScroll {
        let Some(container) = self.container else {
            return TocScroll::Unchanged;
        };
        if scroll_y == 0.0 {
            dom.set_element_scroll_top(container, 0.0);
            return TocScroll::Top;
        }
        let page_end = (dom.root_extent().scroll_height - dom.viewport().height).floor();
        if scroll_y.ceil() >= page_end {
            let end = dom.element_scroll_height(container);
            dom.set_element_scroll_top(container, end);
            return TocScroll::Bottom;
        }
        let Some(entry) = self.current(dom, container) else {
            return TocScroll::Unchanged;
        };

        let scroll_top = dom.element_scroll_top(container);
        let visible = dom.element_client_height(container);
        let rect = dom.layout_rect(entry);
        let top = rect.y0 - dom.layout_rect(container).y0 - scroll_top;
        let bottom = top + rect.height();
        let target = if top < 0.0 {
            scroll_top + top
        } else if bottom > visible {
            scroll_top + (bottom - visible).min(top)
        } else {
            return TocScroll::Unchanged;
        };
        dom.set_element_scroll_top(container, target);
        tracing::trace!(?entry, target, "toc entry revealed");
        TocScroll::Reveal(entry)
    }

    fn current(&self, dom: &Dom, container: NodeId) -> Option<NodeId> {
        dom.document_order().into_iter().find(|&n| {
            dom.has_class(n, &self.current_class) && dom.ancestors(n).any(|a| a == container)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Size};
    use sightline_dom::Element;

    const CURRENT: &str = "scroll-current";

    /// A 3000px page with a 300px TOC container holding twenty 40px entries.
    fn page() -> (Dom, NodeId, Vec<NodeId>) {
        let mut dom = Dom::new(Size::new(800.0, 600.0));
        let body = dom.body();
        dom.insert(
            Some(body),
            Element::new("article").with_bounds(Rect::new(200.0, 0.0, 800.0, 3000.0)),
        );
        let container = dom.insert(
            Some(body),
            Element::new("div")
                .with_class("toc-scroll")
                .with_bounds(Rect::new(0.0, 0.0, 200.0, 300.0)),
        );
        let ul = dom.insert(Some(container), Element::new("ul"));
        let items = (0..20)
            .map(|i| {
                let y = f64::from(i) * 40.0;
                dom.insert(
                    Some(ul),
                    Element::new("li").with_bounds(Rect::new(0.0, y, 200.0, y + 40.0)),
                )
            })
            .collect();
        (dom, container, items)
    }

    #[test]
    fn page_edges_pin_the_container() {
        let (mut dom, container, _) = page();
        let toc = TocFollower::new(Some(container), CURRENT);
        assert_eq!(toc.follow(&mut dom, 0.0), TocScroll::Top);
        assert_eq!(dom.element_scroll_top(container), 0.0);

        let y = dom.scroll_to(2400.0);
        assert_eq!(toc.follow(&mut dom, y), TocScroll::Bottom);
        assert_eq!(dom.element_scroll_top(container), 500.0);

        // Within a pixel of the end still counts.
        assert_eq!(toc.follow(&mut dom, 2399.2), TocScroll::Bottom);
    }

    #[test]
    fn highlighted_entry_is_revealed() {
        let (mut dom, container, items) = page();
        let toc = TocFollower::new(Some(container), CURRENT);
        dom.set_element_scroll_top(container, 500.0);
        dom.add_class(items[10], CURRENT);
        assert_eq!(toc.follow(&mut dom, 1000.0), TocScroll::Reveal(items[10]));
        assert_eq!(dom.element_scroll_top(container), 400.0);
        assert_eq!(toc.follow(&mut dom, 1000.0), TocScroll::Unchanged);

        dom.remove_class(items[10], CURRENT);
        dom.add_class(items[19], CURRENT);
        assert_eq!(toc.follow(&mut dom, 1200.0), TocScroll::Reveal(items[19]));
        assert_eq!(dom.element_scroll_top(container), 500.0);
    }

    #[test]
    fn visible_or_missing_entry_leaves_container_alone() {
        let (mut dom, container, items) = page();
        let toc = TocFollower::new(Some(container), CURRENT);
        assert_eq!(toc.follow(&mut dom, 700.0), TocScroll::Unchanged);
        dom.add_class(items[2], CURRENT);
        assert_eq!(toc.follow(&mut dom, 700.0), TocScroll::Unchanged);
        assert_eq!(dom.element_scroll_top(container), 0.0);

        let none = TocFollower::new(None, CURRENT);
        assert_eq!(none.follow(&mut dom, 0.0), TocScroll::Unchanged);
    }
}
