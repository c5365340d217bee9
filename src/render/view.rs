//! Render-ready page views for the presentation templates
//!
//! A [`PageView`] lists, in order, the regions a template draws on one
//! page, with every named gap already resolved and leading-gap
//! suppression applied. Region heights come from the same measurement
//! model the page-break engine budgets with, so a template that draws
//! exactly what its view says can never overflow the sheet. Templates
//! must not re-paginate; a visual overflow is an engine bug.

use serde::{Deserialize, Serialize};

use crate::document::{Estimate, GapKey};
use crate::layout::measure::{self, PageMetrics};
use crate::layout::{footer_queue, Page, PagePlan, SectionKind};

/// A drawable region on one page, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Region {
    /// First-page masthead: title, parties, meta (internal composition is
    /// the template's own; the height is what the engine budgeted)
    Header { height: f32 },
    /// The fixed strip continuation pages render instead of the masthead
    ContinuationHeader { height: f32 },
    /// The item table, including its header row
    #[serde(rename_all = "camelCase")]
    ItemsTable {
        start: usize,
        end: usize,
        header_row: f32,
    },
    /// A named gap before a footer section; omitted entirely when the
    /// section opens a continuation page
    Gap { key: GapKey, height: f32 },
    /// One footer section body
    Section { kind: SectionKind, height: f32 },
    /// The "n / total" strip inside the bottom margin
    PageNumber { label: String },
}

/// Everything a template needs to draw one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub number: usize,
    pub total: usize,
    pub is_first: bool,
    pub regions: Vec<Region>,
}

impl PageView {
    /// Build the view for one page descriptor
    pub fn build(doc: &Estimate, page: &Page, total: usize) -> Self {
        let metrics = PageMetrics::from_style(&doc.style);
        let queue = footer_queue(doc, &metrics);
        let mut regions = Vec::new();

        if page.is_first {
            regions.push(Region::Header {
                height: measure::first_page_header_px(doc),
            });
        } else {
            regions.push(Region::ContinuationHeader {
                height: measure::CONTINUATION_HEADER_PX,
            });
        }

        if page.has_items() {
            regions.push(Region::ItemsTable {
                start: page.item_range.start,
                end: page.item_range.end,
                header_row: measure::TABLE_HEADER_ROW_PX,
            });
        }

        for placement in &page.sections {
            let planned = queue
                .iter()
                .find(|s| s.kind == placement.kind)
                .copied()
                .unwrap_or_else(|| unreachable_section(placement.kind));

            if !placement.suppress_leading_gap {
                regions.push(Region::Gap {
                    key: placement.kind.gap_key(),
                    height: planned.gap_before,
                });
            }
            regions.push(Region::Section {
                kind: placement.kind,
                height: planned.height,
            });
        }

        if doc.style.footer.show_page_numbers {
            regions.push(Region::PageNumber {
                label: format!("{} / {}", page.number, total),
            });
        }

        Self {
            number: page.number,
            total,
            is_first: page.is_first,
            regions,
        }
    }

    /// Build views for every page of a plan
    pub fn build_all(doc: &Estimate, plan: &PagePlan) -> Vec<PageView> {
        plan.iter()
            .map(|page| Self::build(doc, page, plan.total_pages()))
            .collect()
    }
}

// A placed section always comes from the planner's queue; reaching this
// means the plan and the document have drifted apart.
fn unreachable_section(kind: SectionKind) -> crate::layout::PlannedSection {
    log::error!("section {kind:?} placed but not in the footer queue");
    crate::layout::PlannedSection {
        kind,
        height: 0.0,
        gap_before: 0.0,
    }
}
