// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal CSS selector engine.
//!
//! ## Grammar
//!
//! - Compound selectors: an optional tag name or `*`, followed by any number of `.class` and
//!   `#id` parts.
//! - Combinators: whitespace (descendant) and `>` (child).
//! - Selector lists: alternatives separated by `,`.
//!
//! Attribute selectors, pseudo-classes, and sibling combinators are not supported and are reported
//! as [`SelectorError::UnexpectedChar`].
//!
//! ```
//! use sightline_dom::Selector;
//!
//! let sel: Selector = ".toc-tree a".parse().unwrap();
//! assert_eq!(sel.alternatives(), 1);
//! assert!("ul > li.active, nav a".parse::<Selector>().is_ok());
//! assert!("a[href]".parse::<Selector>().is_err());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Dom, NodeId};

/// Errors produced while parsing a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector (or one alternative of a list) is empty.
    #[error("empty selector")]
    Empty,
    /// A character that is not part of the supported grammar.
    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset in the input.
        pos: usize,
    },
    /// A `.` or `#` not followed by a name.
    #[error("expected a name after {prefix:?} at byte {pos}")]
    MissingName {
        /// Either `.` or `#`.
        prefix: char,
        /// Byte offset of the prefix.
        pos: usize,
    },
    /// A `>` with nothing after it.
    #[error("combinator at byte {pos} is not followed by a selector")]
    DanglingCombinator {
        /// Byte offset of the combinator.
        pos: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        let Some(el) = dom.element(node) else {
            return false;
        };
        if let Some(tag) = &self.tag
            && *tag != el.tag
        {
            return false;
        }
        if !self.ids.iter().all(|id| el.id.as_deref() == Some(id.as_str())) {
            return false;
        }
        self.classes.iter().all(|c| el.has_class(c))
    }
}

/// One alternative of a selector list, stored left to right.
///
/// The combinator on entry `i` joins entry `i - 1` to entry `i`; the first is unused.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Complex {
    parts: Vec<(Combinator, Compound)>,
}

impl Complex {
    fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        self.matches_at(dom, node, self.parts.len() - 1)
    }

    // Recursion depth is bounded by the selector length; ancestor walks are loops.
    fn matches_at(&self, dom: &Dom, node: NodeId, i: usize) -> bool {
        let (combinator, compound) = &self.parts[i];
        if !compound.matches(dom, node) {
            return false;
        }
        if i == 0 {
            return true;
        }
        match combinator {
            Combinator::Child => dom
                .parent(node)
                .is_some_and(|p| self.matches_at(dom, p, i - 1)),
            Combinator::Descendant => dom.ancestors(node).any(|a| self.matches_at(dom, a, i - 1)),
        }
    }
}

/// A parsed selector list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

impl Selector {
    /// Parse a selector list.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser::new(input).parse_list()
    }

    /// Number of comma-separated alternatives.
    pub fn alternatives(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if `node` matches any alternative.
    pub fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        self.alternatives.iter().any(|c| c.matches(dom, node))
    }
}

impl core::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace, returning true if any was consumed.
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos != start
    }

    fn name(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        &self.input[start..self.pos]
    }

    fn parse_list(&mut self) -> Result<Selector, SelectorError> {
        let mut alternatives = Vec::new();
        loop {
            alternatives.push(self.parse_complex()?);
            match self.peek() {
                None => break,
                // parse_complex only stops early at a comma.
                Some(_) => self.bump(),
            }
        }
        Ok(Selector { alternatives })
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut parts: Vec<(Combinator, Compound)> = Vec::new();
        let mut pending = Combinator::Descendant;
        let mut explicit: Option<usize> = None;
        loop {
            let saw_ws = self.skip_ws();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    if parts.is_empty() || explicit.is_some() {
                        return Err(SelectorError::UnexpectedChar {
                            ch: '>',
                            pos: self.pos,
                        });
                    }
                    explicit = Some(self.pos);
                    pending = Combinator::Child;
                    self.bump();
                }
                Some(ch) => {
                    if !parts.is_empty() && !saw_ws && explicit.is_none() {
                        return Err(SelectorError::UnexpectedChar { ch, pos: self.pos });
                    }
                    let compound = self.parse_compound()?;
                    parts.push((pending, compound));
                    pending = Combinator::Descendant;
                    explicit = None;
                }
            }
        }
        if let Some(pos) = explicit {
            return Err(SelectorError::DanglingCombinator { pos });
        }
        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Complex { parts })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();
        if self.peek() == Some('*') {
            self.bump();
        } else {
            let tag = self.name();
            if !tag.is_empty() {
                compound.tag = Some(tag.to_ascii_lowercase());
            }
        }
        while let Some(prefix @ ('.' | '#')) = self.peek() {
            let at = self.pos;
            self.bump();
            let name = self.name();
            if name.is_empty() {
                return Err(SelectorError::MissingName { prefix, pos: at });
            }
            if prefix == '.' {
                compound.classes.push(String::from(name));
            } else {
                compound.ids.push(String::from(name));
            }
        }
        if self.pos == start {
            let ch = self.peek().unwrap_or(' ');
            return Err(SelectorError::UnexpectedChar { ch, pos: start });
        }
        Ok(compound)
    }
}
