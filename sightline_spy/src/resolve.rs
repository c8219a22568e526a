// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-target resolution.
//!
//! ## Policy
//!
//! Sections are treated as contiguous zones whose boundary is the next section's top. Scanning
//! backward, the first pair whose content top has crossed the offset threshold wins, even if an
//! earlier section is still partly visible.
//!
//! When the window is at the bottom of the page, the last pair wins as long as its content ends
//! above the viewport's bottom edge. Short final sections would otherwise never reach the
//! threshold.

use crate::document::Document;
use crate::math::trunc;
use crate::registry::Pair;
use crate::settings::Settings;

/// Which edge of a section the visibility test looks at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Edge {
    /// Content top at or above the offset threshold.
    Top,
    /// Content bottom above the viewport's bottom edge.
    Bottom,
}

/// Visibility test for a single content element.
///
/// Box edges are truncated toward zero before comparing.
pub fn is_in_view<D: Document>(
    doc: &D,
    content: D::Node,
    edge: Edge,
    offset: f64,
    viewport_height: f64,
) -> bool {
    let rect = doc.client_rect(content);
    match edge {
        Edge::Top => trunc(rect.y0) <= offset,
        Edge::Bottom => trunc(rect.y1) < viewport_height,
    }
}

/// Select the pair that should be active, if any.
///
/// `pairs` must be sorted by document offset. The settings' offset is evaluated once.
pub fn resolve_active<'a, D: Document>(
    doc: &D,
    pairs: &'a [Pair<D::Node>],
    settings: &Settings,
    at_bottom: bool,
) -> Option<&'a Pair<D::Node>> {
    let last = pairs.last()?;
    let offset = settings.offset.resolve();
    let viewport_height = doc.window().inner_height;
    if at_bottom && is_in_view(doc, last.content, Edge::Bottom, offset, viewport_height) {
        return Some(last);
    }
    pairs
        .iter()
        .rev()
        .find(|p| is_in_view(doc, p.content, Edge::Top, offset, viewport_height))
}
