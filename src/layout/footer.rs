//! Footer section planner: the canonical queue of trailing sections

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::document::{Estimate, GapKey, LayoutKind};
use crate::layout::measure::{self, PageMetrics};

/// The trailing blocks of a document, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Totals,
    Payment,
    Notes,
    Terms,
    Signature,
}

impl SectionKind {
    /// The named gap rendered before this section
    pub fn gap_key(&self) -> GapKey {
        match self {
            SectionKind::Totals => GapKey::TableToTotal,
            SectionKind::Payment => GapKey::TotalToPayment,
            SectionKind::Notes => GapKey::PaymentToNotes,
            SectionKind::Terms => GapKey::NotesToTerms,
            SectionKind::Signature => GapKey::TermsToSignature,
        }
    }
}

/// A section queued for placement: its estimated height and the spacing
/// that precedes it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedSection {
    pub kind: SectionKind,
    pub height: f32,
    pub gap_before: f32,
}

/// Build the ordered footer queue for the document's current state.
///
/// Totals and signature are unconditional; payment follows its visibility
/// toggle; notes/terms require both their toggle and non-empty text.
pub fn footer_queue(doc: &Estimate, metrics: &PageMetrics) -> SmallVec<[PlannedSection; 5]> {
    let mut queue = SmallVec::new();

    let gap = |kind: SectionKind| doc.style.gap(doc.layout, kind.gap_key());

    let totals_height = if doc.layout == LayoutKind::Classic {
        measure::TOTALS_CLASSIC_PX
    } else {
        measure::TOTALS_PX
    };
    queue.push(PlannedSection {
        kind: SectionKind::Totals,
        height: totals_height,
        gap_before: gap(SectionKind::Totals),
    });

    if doc.style.payment.show {
        queue.push(PlannedSection {
            kind: SectionKind::Payment,
            height: measure::PAYMENT_PX,
            gap_before: gap(SectionKind::Payment),
        });
    }

    if doc.notes_visible() {
        queue.push(PlannedSection {
            kind: SectionKind::Notes,
            height: measure::footer_text_px(&doc.notes, &doc.style, metrics),
            gap_before: gap(SectionKind::Notes),
        });
    }

    if doc.terms_visible() {
        queue.push(PlannedSection {
            kind: SectionKind::Terms,
            height: measure::footer_text_px(&doc.terms, &doc.style, metrics),
            gap_before: gap(SectionKind::Terms),
        });
    }

    queue.push(PlannedSection {
        kind: SectionKind::Signature,
        height: measure::SIGNATURE_PX,
        gap_before: gap(SectionKind::Signature),
    });

    queue
}
