// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller: one instance per page, owning the spy and its collaborators.

use serde::Deserialize;
use sightline_dom::{Dom, NodeId};
use sightline_spy::scheduler::{FrameClock, FrameId, Scheduler, Signals};
use sightline_spy::settings::Settings;
use sightline_spy::spy::ScrollSpy;

use crate::header::HeaderState;
use crate::storage::{StorageError, ThemeStorage};
use crate::theme::{ThemeMode, ThemePreference};
use crate::toc::{TocFollower, TocScroll};

/// Class removed from the root element once the controller is set up.
pub const NO_JS_CLASS: &str = "no-js";

/// Page configuration.
///
/// Deserializes as a shallow merge over [`PageSettings::default`], like the spy's
/// [`Settings`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSettings {
    /// Selector for the TOC links the spy follows.
    pub toc_links: String,
    /// Selector for the TOC scroll container. Without one, no spy is created.
    pub toc_container: String,
    /// Selector for the sticky header.
    pub header: String,
    /// Storage key of the theme preference.
    pub theme_key: String,
    /// Settings for the spy.
    pub spy: Settings,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            toc_links: String::from(".toc-tree a"),
            toc_container: String::from(".toc-scroll"),
            header: String::from("header"),
            theme_key: String::from("theme"),
            spy: Settings {
                nav_class: String::from("scroll-current"),
                reflow: true,
                ..Settings::default()
            },
        }
    }
}

/// Which consumer a fired frame belonged to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOwner {
    /// The controller's header and TOC pass.
    Page,
    /// The scroll spy.
    Spy,
    /// Neither; the frame was stale or foreign.
    Unknown,
}

/// Owns the scroll spy, the header state, the TOC follower, and the theme preference of a page.
#[derive(Debug)]
pub struct PageController<S> {
    settings: PageSettings,
    spy: Option<ScrollSpy<NodeId>>,
    header: HeaderState,
    toc: TocFollower,
    theme: ThemePreference<S>,
    scheduler: Scheduler,
    last_toc: TocScroll,
}

fn first_match(dom: &Dom, selector: &str) -> Option<NodeId> {
    match dom.query_selector_all(selector) {
        Ok(found) => found.into_iter().next(),
        Err(err) => {
            tracing::warn!(selector, %err, "invalid page selector");
            None
        }
    }
}

impl<S: ThemeStorage> PageController<S> {
    /// Create a controller. The stored theme is read immediately.
    pub fn new(settings: PageSettings, storage: S) -> Self {
        let theme = ThemePreference::load(storage, settings.theme_key.clone());
        let toc = TocFollower::new(None, settings.spy.nav_class.clone());
        Self {
            settings,
            spy: None,
            header: HeaderState::default(),
            toc,
            theme,
            scheduler: Scheduler::new(),
            last_toc: TocScroll::Unchanged,
        }
    }

    /// Wire the controller to `dom`.
    ///
    /// Applies and persists the theme, locates the header and TOC container, starts a spy on the
    /// TOC links when a TOC container exists, and runs one header and TOC pass. Does nothing while
    /// the controller is already set up.
    pub fn setup(&mut self, dom: &mut Dom) -> Result<(), StorageError> {
        if !self.scheduler.listening().is_empty() {
            tracing::debug!("page controller already set up");
            return Ok(());
        }
        let root = dom.root();
        dom.remove_class(root, NO_JS_CLASS);
        let mode = self.theme.mode();
        let persisted = self.theme.set(dom, mode);

        self.header = HeaderState::new(first_match(dom, &self.settings.header));
        let container = first_match(dom, &self.settings.toc_container);
        self.toc = TocFollower::new(container, self.settings.spy.nav_class.clone());
        self.scheduler.attach(Signals::SCROLL);
        if container.is_some() {
            self.spy = Some(ScrollSpy::create(
                dom,
                self.settings.toc_links.clone(),
                self.settings.spy.clone(),
            ));
        }
        let scroll_y = dom.scroll_y();
        self.refresh(dom, scroll_y);
        tracing::debug!(
            header = self.header.header().is_some(),
            toc = container.is_some(),
            "page controller set up"
        );
        persisted
    }

    /// Forward a window scroll signal.
    ///
    /// The spy's frame is requested first so the TOC pass sees the fresh highlight.
    pub fn on_scroll(&mut self, clock: &mut impl FrameClock, scroll_y: f64) {
        if let Some(spy) = &mut self.spy {
            let _ = spy.on_scroll(clock, scroll_y);
        }
        let _ = self.scheduler.on_scroll(clock, scroll_y);
    }

    /// Forward a window resize signal.
    pub fn on_resize(&mut self, clock: &mut impl FrameClock) {
        if let Some(spy) = &mut self.spy {
            let _ = spy.on_resize(clock);
        }
    }

    /// Run the work for a fired frame.
    pub fn run_frame(&mut self, dom: &mut Dom, frame: FrameId) -> FrameOwner {
        if self.scheduler.take_frame(frame).is_some() {
            let scroll_y = self.scheduler.last_scroll_y();
            self.refresh(dom, scroll_y);
            return FrameOwner::Page;
        }
        match &mut self.spy {
            Some(spy) if spy.owns_frame(frame) => {
                let _ = spy.run_frame(dom, frame);
                FrameOwner::Spy
            }
            _ => FrameOwner::Unknown,
        }
    }

    fn refresh(&mut self, dom: &mut Dom, scroll_y: f64) {
        let _ = self.header.update(dom);
        self.last_toc = self.toc.follow(dom, scroll_y);
    }

    /// Switch to the next theme in the toggle order.
    pub fn cycle_theme(
        &mut self,
        dom: &mut Dom,
        prefers_dark: bool,
    ) -> Result<ThemeMode, StorageError> {
        self.theme.cycle(dom, prefers_dark)
    }

    /// Apply and persist `mode`.
    pub fn set_theme(&mut self, dom: &mut Dom, mode: ThemeMode) -> Result<(), StorageError> {
        self.theme.set(dom, mode)
    }

    /// Tear down the spy and stop listening.
    pub fn destroy(&mut self, dom: &mut Dom, clock: &mut impl FrameClock) {
        if let Some(spy) = &mut self.spy {
            spy.destroy(dom, clock);
        }
        self.scheduler.detach(clock);
    }

    /// The spy, if the page has a TOC.
    pub fn spy(&self) -> Option<&ScrollSpy<NodeId>> {
        self.spy.as_ref()
    }

    /// Mutable access to the spy, for subscribing to activation events.
    pub fn spy_mut(&mut self) -> Option<&mut ScrollSpy<NodeId>> {
        self.spy.as_mut()
    }

    /// Header state.
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// What the last TOC pass did.
    pub fn last_toc_scroll(&self) -> TocScroll {
        self.last_toc
    }

    /// The theme preference.
    pub fn theme(&self) -> &ThemePreference<S> {
        &self.theme
    }

    /// The settings the controller was created with.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }
}
