// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll spy controller.
//!
//! ## Lifecycle
//!
//! A [`ScrollSpy`] starts [`SpyState::Idle`]. [`ScrollSpy::start`] builds and sorts the pairs,
//! runs the first detection pass, and starts listening to scroll (and, with `reflow`, resize)
//! signals. [`ScrollSpy::destroy`] deactivates the active pair, cancels the pending frame, and
//! drops pairs and listeners. A destroyed spy ignores every later call.
//!
//! ## Driving it
//!
//! The spy does not own the document or the frame source. The host passes them in:
//!
//! ```
//! # #[cfg(feature = "dom_adapter")]
//! # {
//! use kurbo::{Rect, Size};
//! use sightline_dom::{Dom, Element};
//! use sightline_spy::scheduler::{FrameClock, FrameQueue};
//! use sightline_spy::settings::Settings;
//! use sightline_spy::spy::ScrollSpy;
//!
//! let mut dom = Dom::new(Size::new(1024.0, 600.0));
//! let body = dom.body();
//! let list = dom.insert(Some(body), Element::new("ul").with_class("toc"));
//! for (i, name) in ["intro", "usage"].into_iter().enumerate() {
//!     let y = i as f64 * 1000.0;
//!     dom.insert(
//!         Some(body),
//!         Element::new("section")
//!             .with_id(name)
//!             .with_bounds(Rect::new(0.0, y, 1024.0, y + 1000.0)),
//!     );
//!     let li = dom.insert(Some(list), Element::new("li"));
//!     dom.insert(Some(li), Element::new("a").with_href(&format!("#{name}")));
//! }
//!
//! let mut clock = FrameQueue::new();
//! let mut spy = ScrollSpy::create(&mut dom, ".toc a", Settings::default());
//! assert_eq!(spy.active().map(|p| p.content), dom.element_by_id("intro"));
//!
//! let y = dom.scroll_to(1100.0);
//! spy.on_scroll(&mut clock, y);
//! let frame = clock.take().unwrap();
//! spy.run_frame(&mut dom, frame);
//! assert_eq!(spy.active().map(|p| p.content), dom.element_by_id("usage"));
//!
//! spy.destroy(&mut dom, &mut clock);
//! # }
//! ```

use alloc::string::String;

use crate::activation::{self, Transition};
use crate::bottom::is_at_bottom;
use crate::document::Document;
use crate::events::{ListenerId, Listeners, Outcome, SpyEvent};
use crate::registry::{Pair, Registry};
use crate::resolve::resolve_active;
use crate::scheduler::{FrameClock, FrameId, Pass, Scheduler, Signals};
use crate::settings::Settings;

/// Lifecycle state of a [`ScrollSpy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpyState {
    /// Created, not yet started.
    Idle,
    /// Listening to signals.
    Running,
    /// Torn down. Terminal.
    Destroyed,
}

/// Tracks which section is in view and marks its navigation link.
#[derive(Debug)]
pub struct ScrollSpy<N> {
    selector: String,
    settings: Settings,
    registry: Registry<N>,
    active: Option<Pair<N>>,
    scheduler: Scheduler,
    listeners: Listeners<N>,
    state: SpyState,
}

impl<N: Copy + Eq + core::fmt::Debug> ScrollSpy<N> {
    /// Create an idle spy for the links matching `selector`.
    pub fn new(selector: impl Into<String>, settings: Settings) -> Self {
        Self {
            selector: selector.into(),
            settings,
            registry: Registry::new(),
            active: None,
            scheduler: Scheduler::new(),
            listeners: Listeners::new(),
            state: SpyState::Idle,
        }
    }

    /// Create a spy and [start](Self::start) it.
    pub fn create<D: Document<Node = N>>(
        doc: &mut D,
        selector: impl Into<String>,
        settings: Settings,
    ) -> Self {
        let mut spy = Self::new(selector, settings);
        let _ = spy.start(doc);
        spy
    }

    /// Build the pairs, run the first detection pass, and start listening.
    ///
    /// Only acts on an idle spy.
    pub fn start<D: Document<Node = N>>(&mut self, doc: &mut D) -> Option<Transition<N>> {
        if self.state != SpyState::Idle {
            return None;
        }
        self.setup(doc);
        self.state = SpyState::Running;
        let transition = self.detect(doc);
        let mut signals = Signals::SCROLL;
        if self.settings.reflow {
            signals |= Signals::RESIZE;
        }
        self.scheduler.attach(signals);
        tracing::debug!(
            selector = %self.selector,
            pairs = self.registry.len(),
            ?signals,
            "scroll spy started"
        );
        transition
    }

    /// Rebuild the pairs from the document and sort them.
    pub fn setup<D: Document<Node = N>>(&mut self, doc: &D) {
        if self.state == SpyState::Destroyed {
            return;
        }
        self.registry.build(doc, &self.selector);
        self.registry.sort(doc);
    }

    /// Resolve the active pair from the current layout and apply the change, if any.
    pub fn detect<D: Document<Node = N>>(&mut self, doc: &mut D) -> Option<Transition<N>> {
        if self.state == SpyState::Destroyed {
            return None;
        }
        let at_bottom = is_at_bottom(&doc.window());
        let next = resolve_active(&*doc, self.registry.pairs(), &self.settings, at_bottom).copied();
        activation::apply(
            doc,
            &mut self.active,
            next,
            &self.settings,
            &mut self.listeners,
        )
    }

    /// Forward a window scroll signal. Returns true if a frame was requested.
    pub fn on_scroll(&mut self, clock: &mut impl FrameClock, scroll_y: f64) -> bool {
        self.scheduler.on_scroll(clock, scroll_y)
    }

    /// Forward a window resize signal. Ignored unless `reflow` is set.
    pub fn on_resize(&mut self, clock: &mut impl FrameClock) -> bool {
        self.scheduler.on_resize(clock)
    }

    /// Returns true if `frame` was requested by this spy and has not run yet.
    pub fn owns_frame(&self, frame: FrameId) -> bool {
        self.scheduler.owns_frame(frame)
    }

    /// Run the work for a fired frame.
    ///
    /// Frames this spy does not own are ignored.
    pub fn run_frame<D: Document<Node = N>>(
        &mut self,
        doc: &mut D,
        frame: FrameId,
    ) -> Option<Transition<N>> {
        match self.scheduler.take_frame(frame)? {
            Pass::Detect => {}
            Pass::Reflow => self.setup(doc),
        }
        self.detect(doc)
    }

    /// Deactivate the active pair, stop listening, and release pairs and listeners.
    pub fn destroy<D: Document<Node = N>>(&mut self, doc: &mut D, clock: &mut impl FrameClock) {
        if self.state == SpyState::Destroyed {
            return;
        }
        if let Some(pair) = self.active.take() {
            let _ = activation::deactivate(doc, pair, &self.settings, &mut self.listeners);
        }
        self.scheduler.detach(clock);
        self.registry.clear();
        self.listeners.clear();
        self.state = SpyState::Destroyed;
        tracing::debug!(selector = %self.selector, "scroll spy destroyed");
    }

    /// Register an activation listener on `scope`, or on the whole document with `None`.
    pub fn subscribe(
        &mut self,
        scope: Option<N>,
        handler: impl FnMut(&SpyEvent<'_, N>) -> Outcome + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(scope, handler)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// The active pair.
    pub fn active(&self) -> Option<Pair<N>> {
        self.active
    }

    /// Pairs in offset order.
    pub fn pairs(&self) -> &[Pair<N>] {
        self.registry.pairs()
    }

    /// The navigation link selector.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The settings the spy was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lifecycle state.
    pub fn state(&self) -> SpyState {
        self.state
    }

    /// Signals the spy is listening to.
    pub fn listening(&self) -> Signals {
        self.scheduler.listening()
    }

    /// The pass the pending frame will run.
    pub fn pending(&self) -> Option<Pass> {
        self.scheduler.pending()
    }

    /// Scroll offset recorded by the latest scroll signal.
    pub fn last_scroll_y(&self) -> f64 {
        self.scheduler.last_scroll_y()
    }
}
