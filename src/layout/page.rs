//! Page descriptors: the engine's output

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::document::{Estimate, LineItem};
use crate::layout::footer::SectionKind;

/// A footer section assigned to a page. `suppress_leading_gap` marks the
/// first thing on a continuation page: the named gap before it is not
/// rendered and was not budgeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPlacement {
    pub kind: SectionKind,
    pub suppress_leading_gap: bool,
}

/// One physical page: a contiguous slice of the item list plus the footer
/// sections that fit after it. Descriptors are ephemeral; the whole plan
/// is rebuilt on every document change.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Indices into the document's item list
    pub item_range: Range<usize>,
    pub sections: SmallVec<[SectionPlacement; 5]>,
    pub is_first: bool,
    /// 1-based position in the plan
    pub number: usize,
}

impl Page {
    /// Resolve this page's item slice against the document it was
    /// computed from
    pub fn items<'a>(&self, doc: &'a Estimate) -> &'a [LineItem] {
        &doc.items[self.item_range.clone()]
    }

    /// Whether the page renders an item table
    pub fn has_items(&self) -> bool {
        !self.item_range.is_empty()
    }

    /// Look up a section placement by kind
    pub fn section(&self, kind: SectionKind) -> Option<&SectionPlacement> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// The full ordered page plan. Total page count is only known here, after
/// the walk has finished — pages render "n / total" from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagePlan {
    pages: Vec<Page>,
}

impl PagePlan {
    pub(crate) fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// All section placements across the plan, in page order
    pub fn sections(&self) -> impl Iterator<Item = &SectionPlacement> {
        self.pages.iter().flat_map(|p| p.sections.iter())
    }
}
