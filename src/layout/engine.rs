//! Page-break engine: cuts the item list and footer queue into pages
//!
//! A single synchronous walk over one running height accumulator. The
//! plan is a pure function of the document value: no caching, no
//! incremental patching, identical inputs give identical plans.

use smallvec::SmallVec;

use crate::document::Estimate;
use crate::layout::footer::footer_queue;
use crate::layout::measure::{self, PageMetrics};
use crate::layout::page::{Page, PagePlan, SectionPlacement};

/// Compute the full page plan for a document.
///
/// Pass 1 walks the items in order against the height budget; pass 2
/// walks the footer queue. Continuation pages start from the fixed
/// sub-page header height instead of the full first-page header. Always
/// produces at least one page: the footer queue is never empty.
pub fn plan(doc: &Estimate) -> PagePlan {
    let metrics = PageMetrics::from_style(&doc.style);
    let budget = metrics.content_height;

    let mut pages: Vec<Page> = Vec::new();
    let mut range_start = 0usize;
    let mut current = measure::first_page_header_px(doc) + measure::TABLE_HEADER_ROW_PX;

    // Pass 1: items. A row that would overflow closes the page and opens
    // the next one with itself as the first row. Rows are never split.
    for (idx, item) in doc.items.iter().enumerate() {
        let row = measure::item_row_px(item, &doc.style, &doc.table_style, &metrics);

        if current + row > budget {
            pages.push(Page {
                item_range: range_start..idx,
                sections: SmallVec::new(),
                is_first: pages.is_empty(),
                number: pages.len() + 1,
            });
            range_start = idx;
            current = measure::CONTINUATION_HEADER_PX + row;
        } else {
            current += row;
        }
    }

    // Pass 2: footer sections, canonical order. A section that does not
    // fit moves wholly to a fresh page; its leading gap is suppressed
    // there and excluded from the new page's running height.
    let item_end = doc.items.len();
    let mut sections: SmallVec<[SectionPlacement; 5]> = SmallVec::new();

    for planned in footer_queue(doc, &metrics) {
        let need = planned.height + planned.gap_before;

        if current + need <= budget {
            sections.push(SectionPlacement {
                kind: planned.kind,
                suppress_leading_gap: false,
            });
            current += need;
        } else {
            pages.push(Page {
                item_range: range_start..item_end,
                sections: std::mem::take(&mut sections),
                is_first: pages.is_empty(),
                number: pages.len() + 1,
            });
            range_start = item_end;
            sections.push(SectionPlacement {
                kind: planned.kind,
                suppress_leading_gap: true,
            });
            current = measure::CONTINUATION_HEADER_PX + planned.height;
        }
    }

    pages.push(Page {
        item_range: range_start..item_end,
        sections,
        is_first: pages.is_empty(),
        number: pages.len() + 1,
    });

    PagePlan::new(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Discount, LayoutKind};
    use crate::layout::SectionKind;

    fn doc_with_items(count: usize, desc_len: usize) -> Estimate {
        let mut doc = Estimate::new();
        for i in 0..count {
            doc.push_item(format!("Item {i}"));
            doc.items.last_mut().unwrap().description = "a".repeat(desc_len);
        }
        doc
    }

    fn item_partition(plan: &PagePlan) -> Vec<usize> {
        plan.iter()
            .flat_map(|p| p.item_range.clone())
            .collect()
    }

    #[test]
    fn test_empty_document_yields_one_page() {
        let doc = Estimate::new();
        let plan = plan(&doc);
        assert_eq!(plan.total_pages(), 1);
        let first = plan.get(0).unwrap();
        assert!(first.is_first);
        assert_eq!(first.number, 1);
        assert!(!first.has_items());
    }

    #[test]
    fn test_everything_disabled_still_has_totals_and_signature() {
        let mut doc = Estimate::new();
        doc.style.payment.show = false;
        doc.show_notes = false;
        doc.show_terms = false;
        let plan = plan(&doc);
        assert_eq!(plan.total_pages(), 1);
        let kinds: Vec<SectionKind> = plan.sections().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Totals, SectionKind::Signature]);
    }

    #[test]
    fn test_items_partition_is_lossless_and_ordered() {
        let doc = doc_with_items(40, 200);
        let plan = plan(&doc);
        assert_eq!(item_partition(&plan), (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_long_document_spans_pages_within_budget() {
        // 40 items with 200-char descriptions, 15mm margins, page numbers
        // on: must spill over several pages and never exceed the budget
        let doc = doc_with_items(40, 200);
        let metrics = PageMetrics::from_style(&doc.style);
        let result = plan(&doc);
        assert!(result.total_pages() >= 2);

        let queue = footer_queue(&doc, &metrics);
        for page in result.iter() {
            // mirror the engine's own accounting: the table header row is
            // budgeted on the first page only
            let mut height = if page.is_first {
                measure::first_page_header_px(&doc) + measure::TABLE_HEADER_ROW_PX
            } else {
                measure::CONTINUATION_HEADER_PX
            };
            for item in page.items(&doc) {
                height += measure::item_row_px(item, &doc.style, &doc.table_style, &metrics);
            }
            for placement in &page.sections {
                let planned = queue.iter().find(|s| s.kind == placement.kind).unwrap();
                height += planned.height;
                if !placement.suppress_leading_gap {
                    height += planned.gap_before;
                }
            }
            assert!(
                height <= metrics.content_height + 1e-3,
                "page {} height {} exceeds budget {}",
                page.number,
                height,
                metrics.content_height
            );
        }
    }

    #[test]
    fn test_page_numbers_are_contiguous() {
        let result = plan(&doc_with_items(60, 150));
        for (idx, page) in result.iter().enumerate() {
            assert_eq!(page.number, idx + 1);
            assert_eq!(page.is_first, idx == 0);
        }
    }

    #[test]
    fn test_sections_keep_canonical_order_across_pages() {
        let mut doc = doc_with_items(35, 220);
        doc.notes = "n".repeat(300);
        doc.terms = "t".repeat(300);
        let result = plan(&doc);

        let kinds: Vec<SectionKind> = result.sections().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Totals,
                SectionKind::Payment,
                SectionKind::Notes,
                SectionKind::Terms,
                SectionKind::Signature,
            ]
        );

        // each section appears on exactly one page
        for kind in kinds {
            let owners = result
                .iter()
                .filter(|p| p.section(kind).is_some())
                .count();
            assert_eq!(owners, 1, "{kind:?} placed on {owners} pages");
        }
    }

    #[test]
    fn test_suppressed_gap_iff_first_on_continuation_page() {
        let mut doc = doc_with_items(38, 200);
        doc.notes = "n".repeat(400);
        doc.terms = "t".repeat(400);
        let result = plan(&doc);
        assert!(result.total_pages() >= 2);

        for page in result.iter() {
            for (pos, placement) in page.sections.iter().enumerate() {
                let first_content_on_sub_page =
                    !page.is_first && pos == 0 && !page.has_items();
                assert_eq!(
                    placement.suppress_leading_gap, first_content_on_sub_page,
                    "page {} section {:?}",
                    page.number, placement.kind
                );
            }
        }
    }

    #[test]
    fn test_plan_is_idempotent() {
        let mut doc = doc_with_items(25, 180);
        doc.discount = Discount::Rate(10.0);
        assert_eq!(plan(&doc), plan(&doc));
    }

    #[test]
    fn test_layout_switch_moves_breaks_not_items() {
        // 100-char descriptions: 4 wrapped lines, 144px rows — sized so
        // the 24px header difference between default and modern moves
        // the first page break
        let doc = doc_with_items(40, 100);
        let mut modern = doc.clone();
        modern.layout = LayoutKind::Modern;

        let a = plan(&doc);
        let b = plan(&modern);

        // same items, same sections, different first-page capacity
        assert_eq!(item_partition(&a), item_partition(&b));
        let kinds_a: Vec<SectionKind> = a.sections().map(|s| s.kind).collect();
        let kinds_b: Vec<SectionKind> = b.sections().map(|s| s.kind).collect();
        assert_eq!(kinds_a, kinds_b);
        assert_ne!(
            a.get(0).unwrap().item_range,
            b.get(0).unwrap().item_range,
            "modern header height should shift the first break"
        );
    }

    #[test]
    fn test_oversized_item_gets_its_own_page() {
        let mut doc = doc_with_items(2, 10);
        // a description so long its row alone exceeds any page budget
        doc.items[0].description = "x".repeat(10_000);
        let result = plan(&doc);

        // the giant row is still placed, unsplit, and later items follow
        assert_eq!(item_partition(&result), vec![0, 1]);
        let owner = result
            .iter()
            .find(|p| p.item_range.contains(&0))
            .unwrap();
        assert_eq!(owner.item_range, 0..1);
    }

    #[test]
    fn test_degenerate_style_rows_stay_legal() {
        let mut doc = Estimate::new();
        doc.style.table_item.font_size = 0.0; // cleared field falls back to 14px
        doc.table_style.row_padding = 0.0;
        doc.style.payment.show = false;
        for _ in 0..5 {
            doc.push_item("");
        }
        let result = plan(&doc);
        assert_eq!(result.total_pages(), 1);
        assert_eq!(item_partition(&result), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_more_items_never_fewer_pages() {
        let small = plan(&doc_with_items(10, 200));
        let large = plan(&doc_with_items(80, 200));
        assert!(large.total_pages() > small.total_pages());
    }
}
