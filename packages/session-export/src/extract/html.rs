//! Small helpers over `scraper` shared by the page extractors.

use scraper::{ElementRef, Selector};

use crate::error::{ExtractionError, Result};

/// A compiled selector that remembers its source text for error messages.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    selector: Selector,
}

impl Matcher {
    pub fn parse(source: &str) -> Result<Self> {
        let selector = Selector::parse(source).map_err(|e| ExtractionError::InvalidSelector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// All matches below `scope`, in document order.
    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }

    /// Concatenated text of every match below `scope`, untrimmed.
    ///
    /// Empty when nothing matches.
    pub fn text(&self, scope: ElementRef<'_>) -> String {
        scope.select(&self.selector).map(element_text).collect()
    }

    /// First match below `scope`, or `MissingElement`.
    pub fn required<'a>(
        &self,
        scope: ElementRef<'a>,
        page: &'static str,
        index: usize,
    ) -> Result<ElementRef<'a>> {
        scope
            .select(&self.selector)
            .next()
            .ok_or_else(|| ExtractionError::MissingElement {
                page,
                index,
                selector: self.source.clone(),
            })
    }

    /// Attribute of the first match below `scope`.
    ///
    /// Fails with `MissingElement` when nothing matches and
    /// `MissingAttribute` when the match lacks `attribute`.
    pub fn required_attr(
        &self,
        scope: ElementRef<'_>,
        attribute: &'static str,
        page: &'static str,
        index: usize,
    ) -> Result<String> {
        let element = self.required(scope, page, index)?;
        element
            .value()
            .attr(attribute)
            .map(|value| value.to_string())
            .ok_or_else(|| ExtractionError::MissingAttribute {
                page,
                index,
                selector: self.source.clone(),
                attribute,
            })
    }
}

/// All descendant text of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Trim each paragraph and join them with a single space, skipping blanks.
pub fn join_paragraphs<'a>(paragraphs: impl IntoIterator<Item = ElementRef<'a>>) -> String {
    paragraphs
        .into_iter()
        .map(element_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every occurrence of `prefix` from a presenter heading, then trim.
pub fn strip_presenter(heading: &str, prefix: &str) -> String {
    heading.replace(prefix, "").trim().to_string()
}
