// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Spy: a deterministic, `no_std` scroll spy.
//!
//! ## Overview
//!
//! Given navigation links that point at sections of a page, the spy works out which section is
//! currently in view and marks its link (and, optionally, the enclosing list items) as active.
//! It works against any element tree that implements [`Document`](crate::document::Document);
//! enable `dom_adapter` to use the in-memory `sightline_dom::Dom`.
//!
//! ## Pipeline
//!
//! 1) Pairs: [`Registry`](crate::registry::Registry) pairs each link with the element its URL
//!    fragment names and sorts the pairs by [document offset](crate::geometry::document_offset).
//! 2) Resolve: [`resolve_active`](crate::resolve::resolve_active) picks at most one pair from the
//!    current layout. At the [bottom of the page](crate::bottom::is_at_bottom) the last section
//!    wins if it is fully above the viewport's bottom edge; otherwise the last section whose top
//!    has crossed the offset threshold wins.
//! 3) Apply: [`activation::apply`](crate::activation::apply) swaps state classes and notifies
//!    [listeners](crate::events::Listeners). Notifications bubble from the link's list item
//!    through its ancestors, then to document-level listeners.
//! 4) Schedule: [`Scheduler`](crate::scheduler::Scheduler) coalesces scroll and resize signals
//!    into at most one pass per animation frame. A resize with `reflow` re-sorts first.
//!
//! [`ScrollSpy`](crate::spy::ScrollSpy) composes all four and owns the lifecycle.
//!
//! ## Threshold
//!
//! A section counts as reached once its top edge is at or above `offset` pixels from the viewport
//! top. Use [`Offset::dynamic`](crate::settings::Offset::dynamic) when a sticky header changes
//! height at runtime.
//!
//! ## Features
//!
//! - `std` (default): use `std` float rounding.
//! - `libm`: `no_std` float rounding.
//! - `serde`: deserialize [`Settings`](crate::settings::Settings) as a shallow merge over defaults.
//! - `dom_adapter`: [`Document`](crate::document::Document) for `sightline_dom::Dom`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod activation;
pub mod adapters;
pub mod bottom;
pub mod document;
pub mod events;
pub mod geometry;
pub mod registry;
pub mod resolve;
pub mod scheduler;
pub mod settings;
pub mod spy;

mod math;

#[cfg(test)]
mod testing;
