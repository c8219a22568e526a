// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom-of-page detection.

use crate::document::WindowMetrics;
use crate::math::ceil;

/// Returns true when the viewport is scrolled to the document's maximum extent.
///
/// The viewport bottom (`inner_height + scroll_y`) is rounded up and compared against the largest
/// height reported by either the root or the body. The rounding can report the bottom up to one
/// pixel early.
///
/// ```
/// use sightline_spy::bottom::is_at_bottom;
/// use sightline_spy::document::{Extent, WindowMetrics};
///
/// let page = Extent { scroll_height: 2000.0, offset_height: 2000.0, client_height: 800.0 };
/// let mut w = WindowMetrics { inner_height: 800.0, scroll_y: 0.0, root: page, body: page };
/// assert!(!is_at_bottom(&w));
/// w.scroll_y = 1199.5;
/// assert!(is_at_bottom(&w));
/// ```
pub fn is_at_bottom(window: &WindowMetrics) -> bool {
    let viewport_bottom = ceil(window.inner_height + window.scroll_y);
    viewport_bottom >= window.root.max_height().max(window.body.max_height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Extent;

    fn window(scroll_y: f64, root: f64, body: f64) -> WindowMetrics {
        WindowMetrics {
            inner_height: 600.0,
            scroll_y,
            root: Extent {
                scroll_height: root,
                offset_height: 0.0,
                client_height: 600.0,
            },
            body: Extent {
                scroll_height: 0.0,
                offset_height: body,
                client_height: 0.0,
            },
        }
    }

    #[test]
    fn exact_alignment_is_bottom() {
        assert!(is_at_bottom(&window(400.0, 1000.0, 900.0)));
        assert!(!is_at_bottom(&window(399.0, 1000.0, 900.0)));
    }

    #[test]
    fn tallest_element_wins() {
        // The body reports the true height here.
        assert!(!is_at_bottom(&window(400.0, 1000.0, 1300.0)));
        assert!(is_at_bottom(&window(700.0, 1000.0, 1300.0)));
    }

    #[test]
    fn short_page_is_always_bottom() {
        assert!(is_at_bottom(&window(0.0, 600.0, 300.0)));
    }
}
