//! Markup probing helpers shared by the provider adapters.
//!
//! Providers change their result markup between generations, so adapters
//! describe each thing they look for (a result block, a title anchor, a
//! snippet) as a [`SelectorChain`]: an ordered list of CSS selectors tried
//! in priority order.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use crate::error::SearchError;

/// An ordered list of alternative CSS selectors for one structural role.
#[derive(Debug)]
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Compile every selector in `sources`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] naming the first selector that fails
    /// to compile.
    pub fn parse(sources: &[&str]) -> Result<Self, SearchError> {
        let selectors = sources
            .iter()
            .map(|source| {
                Selector::parse(source)
                    .map_err(|e| SearchError::Parse(format!("invalid selector {source:?}: {e:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { selectors })
    }

    /// First element inside `scope` matched by the highest-priority selector
    /// that matches anything.
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }

    /// Every element in `document` matched by any selector, selector by
    /// selector in priority order. An element matched by several selectors
    /// is kept only at its first position.
    pub fn union<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let mut seen = HashSet::new();
        self.selectors
            .iter()
            .flat_map(|selector| document.select(selector))
            .filter(|element| seen.insert(element.id()))
            .collect()
    }
}

/// Visible text of an element with runs of whitespace collapsed to one space.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
