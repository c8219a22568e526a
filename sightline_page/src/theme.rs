// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color theme preference.
//!
//! The chosen [`ThemeMode`] is written to the body's `data-theme` attribute and persisted through a
//! [`ThemeStorage`]. A stored value that is not a known mode falls back to [`ThemeMode::Auto`].

use std::fmt;
use std::str::FromStr;

use sightline_dom::Dom;
use thiserror::Error;

use crate::storage::{StorageError, ThemeStorage};

/// `data-*` attribute on the body that carries the mode.
pub const THEME_ATTRIBUTE: &str = "theme";

/// Color theme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the system preference.
    #[default]
    Auto,
}

/// A theme name that is not `light`, `dark`, or `auto`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid theme mode `{0}`")]
pub struct ThemeParseError(pub String);

impl ThemeMode {
    /// The lowercase name used in storage and markup.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// The mode a theme toggle switches to.
    ///
    /// From `Auto` the first step goes to the opposite of the system preference.
    pub const fn next(self, prefers_dark: bool) -> Self {
        match (self, prefers_dark) {
            (Self::Auto, true) => Self::Light,
            (Self::Light, true) => Self::Dark,
            (Self::Dark, true) => Self::Auto,
            (Self::Auto, false) => Self::Dark,
            (Self::Dark, false) => Self::Light,
            (Self::Light, false) => Self::Auto,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// The user's theme choice, mirrored to the document and to storage.
#[derive(Debug)]
pub struct ThemePreference<S> {
    storage: S,
    key: String,
    mode: ThemeMode,
}

impl<S: ThemeStorage> ThemePreference<S> {
    /// Read the stored mode under `key`.
    ///
    /// Missing, unreadable, or invalid values yield [`ThemeMode::Auto`].
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = match storage.get(&key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: ThemeParseError| {
                tracing::error!(%err, "stored theme rejected, resetting to auto");
                ThemeMode::Auto
            }),
            Ok(None) => ThemeMode::Auto,
            Err(err) => {
                tracing::warn!(%err, "theme storage unreadable, using auto");
                ThemeMode::Auto
            }
        };
        Self { storage, key, mode }
    }

    /// The current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply `mode` to the document and persist it.
    ///
    /// The document is updated even if persisting fails.
    pub fn set(&mut self, dom: &mut Dom, mode: ThemeMode) -> Result<(), StorageError> {
        let body = dom.body();
        dom.set_data(body, THEME_ATTRIBUTE, mode.as_str());
        self.mode = mode;
        self.storage.set(&self.key, mode.as_str())?;
        tracing::info!("changed to {mode} mode");
        Ok(())
    }

    /// Apply a mode given by name. Unknown names are logged and replaced by `auto`.
    pub fn set_named(&mut self, dom: &mut Dom, name: &str) -> Result<ThemeMode, StorageError> {
        let mode = name.parse().unwrap_or_else(|err: ThemeParseError| {
            tracing::error!(%err, "resetting to auto");
            ThemeMode::Auto
        });
        self.set(dom, mode)?;
        Ok(mode)
    }

    /// Advance to the next mode in the toggle order.
    pub fn cycle(&mut self, dom: &mut Dom, prefers_dark: bool) -> Result<ThemeMode, StorageError> {
        let next = self.mode.next(prefers_dark);
        self.set(dom, next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use kurbo::Size;

    fn dom() -> Dom {
        Dom::new(Size::new(800.0, 600.0))
    }

    fn stored(value: &str) -> MemoryStorage {
        let mut s = MemoryStorage::new();
        s.set("theme", value).unwrap();
        s
    }

    #[test]
    fn parse_and_display() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeParseError("sepia".into()))
        );
        assert_eq!(ThemeMode::default(), ThemeMode::Auto);
    }

    #[test]
    fn cycle_orders() {
        let mut m = ThemeMode::Auto;
        let mut seen = Vec::new();
        for _ in 0..3 {
            m = m.next(true);
            seen.push(m);
        }
        assert_eq!(seen, [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto]);
        seen.clear();
        for _ in 0..3 {
            m = m.next(false);
            seen.push(m);
        }
        assert_eq!(seen, [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Auto]);
    }

    #[test]
    fn load_reads_storage_and_rejects_garbage() {
        assert_eq!(
            ThemePreference::load(stored("dark"), "theme").mode(),
            ThemeMode::Dark
        );
        assert_eq!(
            ThemePreference::load(stored("neon"), "theme").mode(),
            ThemeMode::Auto
        );
        assert_eq!(
            ThemePreference::load(MemoryStorage::new(), "theme").mode(),
            ThemeMode::Auto
        );
    }

    #[test]
    fn set_writes_document_and_storage() {
        let mut dom = dom();
        let mut pref = ThemePreference::load(MemoryStorage::new(), "theme");
        pref.set(&mut dom, ThemeMode::Light).unwrap();
        assert_eq!(dom.data(dom.body(), THEME_ATTRIBUTE), Some("light"));
        assert_eq!(pref.storage().get("theme").unwrap().as_deref(), Some("light"));

        let mode = pref.set_named(&mut dom, "midnight").unwrap();
        assert_eq!(mode, ThemeMode::Auto);
        assert_eq!(dom.data(dom.body(), THEME_ATTRIBUTE), Some("auto"));
    }

    #[test]
    fn cycle_persists_each_step() {
        let mut dom = dom();
        let mut pref = ThemePreference::load(stored("light"), "theme");
        assert_eq!(pref.cycle(&mut dom, false).unwrap(), ThemeMode::Auto);
        assert_eq!(pref.cycle(&mut dom, false).unwrap(), ThemeMode::Dark);
        assert_eq!(pref.storage().get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_storage_survives_reload() {
        let path = crate::storage::tests::scratch("theme.json");
        let mut dom = dom();
        let mut pref = ThemePreference::load(crate::storage::JsonFileStorage::new(&path), "theme");
        pref.set(&mut dom, ThemeMode::Dark).unwrap();
        let reloaded = ThemePreference::load(crate::storage::JsonFileStorage::new(&path), "theme");
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }
}
