// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny page model for unit tests.
//!
//! Sections hang directly off the body, so offsets equal document positions. Selectors are
//! matched by their last tag name only.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::document::{Document, Extent, WindowMetrics};

#[derive(Clone, Debug)]
struct TestNode {
    parent: Option<usize>,
    tag: &'static str,
    id: Option<String>,
    href: Option<String>,
    classes: Vec<String>,
    top: f64,
    height: f64,
}

#[derive(Clone, Debug)]
pub(crate) struct TestPage {
    nodes: Vec<TestNode>,
    pub(crate) inner_height: f64,
    pub(crate) scroll_y: f64,
    /// Extra height below the last section.
    pub(crate) footer: f64,
    /// Number of class-list changes applied so far.
    pub(crate) mutations: usize,
}

pub(crate) const BODY: usize = 0;

impl TestPage {
    pub(crate) fn new(inner_height: f64) -> Self {
        Self {
            nodes: alloc::vec![TestNode {
                parent: None,
                tag: "body",
                id: None,
                href: None,
                classes: Vec::new(),
                top: 0.0,
                height: 0.0,
            }],
            inner_height,
            scroll_y: 0.0,
            footer: 0.0,
            mutations: 0,
        }
    }

    pub(crate) fn add(&mut self, parent: Option<usize>, tag: &'static str) -> usize {
        self.nodes.push(TestNode {
            parent,
            tag,
            id: None,
            href: None,
            classes: Vec::new(),
            top: 0.0,
            height: 0.0,
        });
        self.nodes.len() - 1
    }

    pub(crate) fn section(&mut self, id: &str, top: f64, height: f64) -> usize {
        let n = self.add(Some(BODY), "section");
        self.nodes[n].id = Some(String::from(id));
        self.nodes[n].top = top;
        self.nodes[n].height = height;
        n
    }

    /// Add `<li><a href=href>` under `list`, returning `(li, a)`.
    pub(crate) fn item(&mut self, list: usize, href: &str) -> (usize, usize) {
        let li = self.add(Some(list), "li");
        let a = self.add(Some(li), "a");
        self.nodes[a].href = Some(String::from(href));
        (li, a)
    }

    /// A flat navigation list with one link per section id.
    pub(crate) fn nav(&mut self, ids: &[&str]) -> Vec<(usize, usize)> {
        let ul = self.add(Some(BODY), "ul");
        ids.iter()
            .map(|id| self.item(ul, &alloc::format!("#{id}")))
            .collect()
    }

    pub(crate) fn set_top(&mut self, node: usize, top: f64) {
        self.nodes[node].top = top;
    }

    pub(crate) fn detach(&mut self, node: usize) {
        self.nodes[node].parent = None;
    }

    pub(crate) fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes[node].classes.iter().any(|c| c == class)
    }

    pub(crate) fn doc_height(&self) -> f64 {
        let bottom = self
            .nodes
            .iter()
            .map(|n| n.top + n.height)
            .fold(0.0, f64::max);
        (bottom + self.footer).max(self.inner_height)
    }

    /// Scroll the window to its maximum extent.
    pub(crate) fn scroll_to_bottom(&mut self) {
        self.scroll_y = self.doc_height() - self.inner_height;
    }

    fn attached(&self, node: usize) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == BODY {
                return true;
            }
            cur = self.nodes[n].parent;
        }
        false
    }
}

impl Document for TestPage {
    type Node = usize;

    fn query_all(&self, selector: &str) -> Vec<usize> {
        let Some(tag) = selector.split_whitespace().last() else {
            return Vec::new();
        };
        (0..self.nodes.len())
            .filter(|&n| self.nodes[n].tag == tag && self.attached(n))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        (0..self.nodes.len())
            .find(|&n| self.nodes[n].id.as_deref() == Some(id) && self.attached(n))
    }

    fn link_hash(&self, link: usize) -> Option<&str> {
        let href = self.nodes[link].href.as_deref()?;
        href.split_once('#').map(|(_, h)| h)
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn offset_parent(&self, node: usize) -> Option<usize> {
        (node != BODY && self.attached(node)).then_some(BODY)
    }

    fn offset_top(&self, node: usize) -> f64 {
        if self.offset_parent(node).is_some() {
            self.nodes[node].top
        } else {
            0.0
        }
    }

    fn client_rect(&self, node: usize) -> Rect {
        let n = &self.nodes[node];
        let top = n.top - self.scroll_y;
        Rect::new(0.0, top, 100.0, top + n.height)
    }

    fn is_list_item(&self, node: usize) -> bool {
        self.nodes[node].tag == "li"
    }

    fn add_class(&mut self, node: usize, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node].classes.push(String::from(class));
            self.mutations += 1;
        }
    }

    fn remove_class(&mut self, node: usize, class: &str) {
        let classes = &mut self.nodes[node].classes;
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() != before {
            self.mutations += 1;
        }
    }

    fn window(&self) -> WindowMetrics {
        let height = self.doc_height();
        let extent = Extent {
            scroll_height: height,
            offset_height: height,
            client_height: self.inner_height,
        };
        WindowMetrics {
            inner_height: self.inner_height,
            scroll_y: self.scroll_y,
            root: extent,
            body: extent,
        }
    }
}
