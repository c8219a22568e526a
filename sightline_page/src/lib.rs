// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Page: the glue a documentation page needs around the scroll spy.
//!
//! ## Overview
//!
//! A [`PageController`](crate::page::PageController) is created once per page and owns:
//!
//! - a [`ScrollSpy`](sightline_spy::spy::ScrollSpy) over the table-of-contents links, created only
//!   when the page has a TOC container;
//! - a [`HeaderState`](crate::header::HeaderState) that marks the sticky header `scrolled` while it
//!   sits at the viewport top;
//! - a [`TocFollower`](crate::toc::TocFollower) that keeps the TOC container scrolled so the
//!   highlighted entry stays visible;
//! - a [`ThemePreference`](crate::theme::ThemePreference) persisted through a
//!   [`ThemeStorage`](crate::storage::ThemeStorage).
//!
//! The header and TOC pass shares the spy's frame discipline: scroll bursts collapse into one pass
//! per animation frame, using the latest offset.
//!
//! ## Usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use sightline_dom::{Dom, Element};
//! use sightline_page::page::{PageController, PageSettings};
//! use sightline_page::storage::MemoryStorage;
//! use sightline_spy::scheduler::FrameQueue;
//!
//! let mut dom = Dom::new(Size::new(1024.0, 768.0));
//! let body = dom.body();
//! dom.insert(
//!     Some(body),
//!     Element::new("header").with_bounds(Rect::new(0.0, 0.0, 1024.0, 56.0)),
//! );
//!
//! let mut clock = FrameQueue::new();
//! let mut page = PageController::new(PageSettings::default(), MemoryStorage::new());
//! page.setup(&mut dom).unwrap();
//! assert!(page.header().is_scrolled());
//!
//! page.on_scroll(&mut clock, 0.0);
//! while let Some(frame) = clock.take() {
//!     page.run_frame(&mut dom, frame);
//! }
//! page.destroy(&mut dom, &mut clock);
//! ```

pub mod header;
pub mod page;
pub mod storage;
pub mod theme;
pub mod toc;
