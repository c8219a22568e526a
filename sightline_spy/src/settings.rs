// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spy configuration.
//!
//! [`Settings`] is fixed for the lifetime of a spy. Build it with struct-update syntax over
//! [`Settings::default`], or (with the `serde` feature) deserialize it from a map where unknown
//! keys are ignored and missing keys keep their defaults:
//!
//! ```
//! use sightline_spy::settings::{Offset, Settings};
//!
//! let settings = Settings {
//!     nav_class: "scroll-current".into(),
//!     reflow: true,
//!     ..Settings::default()
//! };
//! assert_eq!(settings.content_class, "active");
//! assert_eq!(settings.offset.resolve(), 0.0);
//!
//! // A sticky header whose height changes at runtime.
//! let dynamic = Offset::dynamic(|| 64.0);
//! assert_eq!(dynamic.resolve(), 64.0);
//! ```

use alloc::rc::Rc;
use alloc::string::String;

/// Threshold subtracted from the viewport top when testing whether a section is in view.
#[derive(Clone)]
pub enum Offset {
    /// A fixed number of pixels.
    Fixed(f64),
    /// Evaluated once per detection pass.
    Dynamic(Rc<dyn Fn() -> f64>),
}

impl Offset {
    /// Wrap an accessor.
    pub fn dynamic(f: impl Fn() -> f64 + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// The current threshold in pixels.
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Fixed(v) => *v,
            Self::Dynamic(f) => f(),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Offset {
    fn from(v: f64) -> Self {
        Self::Fixed(v)
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Offset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <f64 as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::Fixed)
    }
}

/// Options merged over defaults when a spy is created.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Settings {
    /// Class applied to the active link's containing list item.
    pub nav_class: String,
    /// Class applied to the active content element.
    pub content_class: String,
    /// Propagate activation to enclosing list items.
    pub nested: bool,
    /// Class applied to enclosing list items when `nested` is set.
    pub nested_class: String,
    /// Threshold for the top-edge visibility test.
    pub offset: Offset,
    /// Rebuild and re-sort the pairs on resize.
    pub reflow: bool,
    /// Dispatch activate/deactivate notifications.
    pub events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nav_class: String::from("active"),
            content_class: String::from("active"),
            nested: false,
            nested_class: String::from("active"),
            offset: Offset::default(),
            reflow: false,
            events: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.nav_class, "active");
        assert_eq!(s.nested_class, "active");
        assert!(!s.nested && !s.reflow && s.events);
        assert_eq!(s.offset.resolve(), 0.0);
    }

    #[test]
    fn dynamic_offset_is_reevaluated() {
        let height = Rc::new(Cell::new(10.0));
        let h = Rc::clone(&height);
        let offset = Offset::dynamic(move || h.get());
        assert_eq!(offset.resolve(), 10.0);
        height.set(42.0);
        assert_eq!(offset.resolve(), 42.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn shallow_merge_from_json() {
        let s: Settings = serde_json::from_str(
            r#"{ "navClass": "scroll-current", "reflow": true, "offset": 72, "recursive": true }"#,
        )
        .unwrap();
        assert_eq!(s.nav_class, "scroll-current");
        assert!(s.reflow);
        assert_eq!(s.offset.resolve(), 72.0);
        // Untouched keys keep their defaults; unknown keys are ignored.
        assert_eq!(s.content_class, "active");
        assert!(s.events);
    }
}
