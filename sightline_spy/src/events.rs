// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation notifications: observers, bubbling, and cancelation.
//!
//! ## Overview
//!
//! Listeners subscribe either to a node or to the whole document. An event is dispatched on the
//! list item that contains the affected link and propagates:
//!
//! 1. Target: listeners on the list item itself.
//! 2. Bubble: listeners on each ancestor, nearest first.
//! 3. Document: listeners subscribed with no node.
//!
//! Listeners on the same node run in subscription order.
//!
//! ## Outcomes
//!
//! Each handler returns an [`Outcome`]:
//! - [`Outcome::Continue`] keeps propagating.
//! - [`Outcome::Stop`] lets the remaining listeners on the current node run, then stops.
//! - [`Outcome::StopAndConsume`] stops immediately and cancels the event; callers can see this in
//!   [`Dispatched::canceled`] and skip any follow-on behavior.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::document::Document;
use crate::settings::Settings;

/// Kind of notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// A pair became active.
    Activate,
    /// A pair stopped being active.
    Deactivate,
}

impl EventKind {
    /// Stable event name, for hosts that forward notifications to a string-keyed event system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Activate => "sightline:activate",
            Self::Deactivate => "sightline:deactivate",
        }
    }
}

/// Handler outcome controlling propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue propagation.
    Continue,
    /// Stop propagation after the current node's listeners.
    Stop,
    /// Stop immediately and cancel the event.
    StopAndConsume,
}

/// Payload delivered to listeners.
#[derive(Debug)]
pub struct SpyEvent<'a, N> {
    /// Kind of notification.
    pub kind: EventKind,
    /// The list item the event is dispatched on.
    pub target: N,
    /// Node whose listeners are running, or `None` for document-level listeners.
    pub current: Option<N>,
    /// The navigation link of the affected pair.
    pub link: N,
    /// The content section of the affected pair.
    pub content: N,
    /// The spy's settings.
    pub settings: &'a Settings,
}

/// Result of dispatching one event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Dispatched {
    /// Number of handlers invoked.
    pub delivered: usize,
    /// True if a handler returned [`Outcome::StopAndConsume`].
    pub canceled: bool,
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u32);

type Handler<N> = Box<dyn FnMut(&SpyEvent<'_, N>) -> Outcome>;

struct Entry<N> {
    id: ListenerId,
    scope: Option<N>,
    handler: Handler<N>,
}

/// Registered event listeners.
pub struct Listeners<N> {
    entries: Vec<Entry<N>>,
    next_id: u32,
}

impl<N> Default for Listeners<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<N: core::fmt::Debug> core::fmt::Debug for Listeners<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<N: Copy + Eq> Listeners<N> {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` on `scope` (a node) or on the whole document (`None`).
    pub fn subscribe(
        &mut self,
        scope: Option<N>,
        handler: impl FnMut(&SpyEvent<'_, N>) -> Outcome + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            scope,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to `target`, its ancestors, and then document-level listeners.
    pub fn dispatch<D: Document<Node = N>>(
        &mut self,
        doc: &D,
        kind: EventKind,
        target: N,
        link: N,
        content: N,
        settings: &Settings,
    ) -> Dispatched {
        let mut out = Dispatched::default();
        if self.entries.is_empty() {
            return out;
        }
        let mut path: Vec<Option<N>> = Vec::new();
        let mut cur = Some(target);
        // Collect to root; the document guarantees acyclic ancestry.
        while let Some(n) = cur {
            path.push(Some(n));
            cur = doc.parent(n);
        }
        path.push(None);

        for current in path {
            let event = SpyEvent {
                kind,
                target,
                current,
                link,
                content,
                settings,
            };
            let mut stop = false;
            for entry in self.entries.iter_mut().filter(|e| e.scope == current) {
                out.delivered += 1;
                match (entry.handler)(&event) {
                    Outcome::Continue => {}
                    Outcome::Stop => stop = true,
                    Outcome::StopAndConsume => {
                        out.canceled = true;
                        return out;
                    }
                }
            }
            if stop {
                break;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BODY, TestPage};
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<(&'static str, Option<usize>)>>>;

    fn recorder(
        log: &Log,
        tag: &'static str,
        outcome: Outcome,
    ) -> impl FnMut(&SpyEvent<'_, usize>) -> Outcome + 'static {
        let log = Rc::clone(log);
        move |ev| {
            log.borrow_mut().push((tag, ev.current));
            outcome
        }
    }

    /// `body > ul > li(outer) > ul > li(inner) > a`
    fn nested() -> (TestPage, usize, usize, usize, usize) {
        let mut page = TestPage::new(800.0);
        let ul = page.add(Some(BODY), "ul");
        let (outer, _) = page.item(ul, "#a");
        let inner_ul = page.add(Some(outer), "ul");
        let (inner, link) = page.item(inner_ul, "#b");
        let content = page.section("b", 0.0, 10.0);
        (page, outer, inner, link, content)
    }

    #[test]
    fn bubbles_target_then_ancestors_then_document() {
        let (page, outer, inner, link, content) = nested();
        let log: Log = Rc::default();
        let mut listeners = Listeners::new();
        listeners.subscribe(None, recorder(&log, "doc", Outcome::Continue));
        listeners.subscribe(Some(outer), recorder(&log, "outer", Outcome::Continue));
        listeners.subscribe(Some(inner), recorder(&log, "inner", Outcome::Continue));
        let settings = Settings::default();
        let d = listeners.dispatch(&page, EventKind::Activate, inner, link, content, &settings);
        assert_eq!(d, Dispatched { delivered: 3, canceled: false });
        assert_eq!(
            *log.borrow(),
            vec![("inner", Some(inner)), ("outer", Some(outer)), ("doc", None)]
        );
    }

    #[test]
    fn stop_finishes_current_node_only() {
        let (page, outer, inner, link, content) = nested();
        let log: Log = Rc::default();
        let mut listeners = Listeners::new();
        listeners.subscribe(Some(inner), recorder(&log, "first", Outcome::Stop));
        listeners.subscribe(Some(inner), recorder(&log, "second", Outcome::Continue));
        listeners.subscribe(Some(outer), recorder(&log, "outer", Outcome::Continue));
        let d = listeners.dispatch(
            &page,
            EventKind::Deactivate,
            inner,
            link,
            content,
            &Settings::default(),
        );
        assert_eq!(d.delivered, 2);
        assert!(!d.canceled);
        let tags: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["first", "second"]);
    }

    #[test]
    fn consume_cancels_and_stops_immediately() {
        let (page, _, inner, link, content) = nested();
        let log: Log = Rc::default();
        let mut listeners = Listeners::new();
        listeners.subscribe(Some(inner), recorder(&log, "first", Outcome::StopAndConsume));
        listeners.subscribe(Some(inner), recorder(&log, "second", Outcome::Continue));
        let d = listeners.dispatch(
            &page,
            EventKind::Activate,
            inner,
            link,
            content,
            &Settings::default(),
        );
        assert_eq!(d, Dispatched { delivered: 1, canceled: true });
    }

    #[test]
    fn payload_carries_pair_and_settings() {
        let (page, _, inner, link, content) = nested();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut listeners = Listeners::new();
        listeners.subscribe(None, move |ev: &SpyEvent<'_, usize>| {
            *sink.borrow_mut() = Some((
                ev.kind,
                ev.target,
                ev.link,
                ev.content,
                ev.settings.nav_class.clone(),
            ));
            Outcome::Continue
        });
        let settings = Settings {
            nav_class: "here".into(),
            ..Settings::default()
        };
        let _ = listeners.dispatch(&page, EventKind::Activate, inner, link, content, &settings);
        assert_eq!(
            *seen.borrow(),
            Some((EventKind::Activate, inner, link, content, "here".into()))
        );
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let (page, _, inner, link, content) = nested();
        let mut listeners = Listeners::new();
        let id = listeners.subscribe(None, |_: &SpyEvent<'_, usize>| Outcome::Continue);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        let d = listeners.dispatch(
            &page,
            EventKind::Activate,
            inner,
            link,
            content,
            &Settings::default(),
        );
        assert_eq!(d.delivered, 0);
        assert_eq!(EventKind::Deactivate.name(), "sightline:deactivate");
    }
}
