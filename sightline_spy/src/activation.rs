// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying and removing state classes.
//!
//! ## Overview
//!
//! [`apply`] moves the active pair from the previous result to the new one:
//!
//! - Same content as before: nothing happens.
//! - Otherwise the previous pair is deactivated, then the new one activated.
//!
//! Activating a pair adds `nav_class` to the list item that contains the link and
//! `content_class` to the section. With `nested`, every list item enclosing that one receives
//! `nested_class`. Deactivation mirrors this.
//!
//! A link outside any list item gets no classes and no notifications, but its pair still becomes
//! the active pair.

use alloc::vec::Vec;

use crate::document::{Document, enclosing_list_item, list_item_ancestors};
use crate::events::{EventKind, Listeners};
use crate::registry::Pair;
use crate::settings::Settings;

/// Summary of one change of the active pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<N> {
    /// The pair that lost the active state.
    pub deactivated: Option<Pair<N>>,
    /// The pair that gained it.
    pub activated: Option<Pair<N>>,
    /// A listener canceled the deactivate notification.
    pub deactivate_canceled: bool,
    /// A listener canceled the activate notification.
    pub activate_canceled: bool,
}

/// Move the active pair to `next`.
///
/// Returns `None` when nothing changed.
pub fn apply<D: Document>(
    doc: &mut D,
    current: &mut Option<Pair<D::Node>>,
    next: Option<Pair<D::Node>>,
    settings: &Settings,
    listeners: &mut Listeners<D::Node>,
) -> Option<Transition<D::Node>> {
    if current.map(|p| p.content) == next.map(|p| p.content) {
        return None;
    }
    let previous = current.take();
    let deactivate_canceled = previous
        .map(|p| mark(doc, p, EventKind::Deactivate, settings, listeners))
        .unwrap_or(false);
    let activate_canceled = next
        .map(|p| mark(doc, p, EventKind::Activate, settings, listeners))
        .unwrap_or(false);
    *current = next;
    tracing::debug!(from = ?previous, to = ?next, "active pair changed");
    Some(Transition {
        deactivated: previous,
        activated: next,
        deactivate_canceled,
        activate_canceled,
    })
}

/// Remove the state classes of `pair` and notify listeners.
///
/// Returns true if a listener canceled the notification.
pub fn deactivate<D: Document>(
    doc: &mut D,
    pair: Pair<D::Node>,
    settings: &Settings,
    listeners: &mut Listeners<D::Node>,
) -> bool {
    mark(doc, pair, EventKind::Deactivate, settings, listeners)
}

/// Add the state classes of `pair` and notify listeners.
///
/// Returns true if a listener canceled the notification.
pub fn activate<D: Document>(
    doc: &mut D,
    pair: Pair<D::Node>,
    settings: &Settings,
    listeners: &mut Listeners<D::Node>,
) -> bool {
    mark(doc, pair, EventKind::Activate, settings, listeners)
}

fn mark<D: Document>(
    doc: &mut D,
    pair: Pair<D::Node>,
    kind: EventKind,
    settings: &Settings,
    listeners: &mut Listeners<D::Node>,
) -> bool {
    let Some(item) = enclosing_list_item(doc, pair.nav) else {
        return false;
    };
    // Collected up front; the walk borrows the document immutably.
    let enclosing: Vec<D::Node> = if settings.nested {
        list_item_ancestors(doc, item).collect()
    } else {
        Vec::new()
    };
    match kind {
        EventKind::Activate => {
            doc.add_class(item, &settings.nav_class);
            doc.add_class(pair.content, &settings.content_class);
            for li in enclosing {
                doc.add_class(li, &settings.nested_class);
            }
        }
        EventKind::Deactivate => {
            doc.remove_class(item, &settings.nav_class);
            doc.remove_class(pair.content, &settings.content_class);
            for li in enclosing {
                doc.remove_class(li, &settings.nested_class);
            }
        }
    }
    if !settings.events {
        return false;
    }
    listeners
        .dispatch(doc, kind, item, pair.nav, pair.content, settings)
        .canceled
}
