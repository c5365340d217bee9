//! Flat buffer snapshot of the page plan for cheap JS-side reads
//!
//! The JS preview re-reads the plan on every render; a flat u32 buffer
//! avoids re-serializing JSON for reads that only need page boundaries.
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x51535054 = "QSPT" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count
//!
//! Per-page:
//!   number (1-based)
//!   flags (bit0 = is_first)
//!   item_start
//!   item_end
//!   section_count
//!   per-section: [kind_opcode, suppress_leading_gap (0 or 1)]
//! ```

use crate::layout::{PagePlan, SectionKind};

/// Magic number for format validation: "QSPT" (QuoteSheet PlaTe)
pub const MAGIC: u32 = 0x5153_5054;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 3;

/// Fixed u32 values per page before its section list
pub const U32_PER_PAGE: usize = 5;

/// u32 values per section entry
pub const U32_PER_SECTION: usize = 2;

/// Flags bitmask
pub const FLAG_IS_FIRST: u32 = 0b0001;

/// Opcodes for section kinds
pub const SECTION_TOTALS: u32 = 0;
pub const SECTION_PAYMENT: u32 = 1;
pub const SECTION_NOTES: u32 = 2;
pub const SECTION_TERMS: u32 = 3;
pub const SECTION_SIGNATURE: u32 = 4;

/// Convert a section kind to its wire opcode
pub fn section_opcode(kind: SectionKind) -> u32 {
    match kind {
        SectionKind::Totals => SECTION_TOTALS,
        SectionKind::Payment => SECTION_PAYMENT,
        SectionKind::Notes => SECTION_NOTES,
        SectionKind::Terms => SECTION_TERMS,
        SectionKind::Signature => SECTION_SIGNATURE,
    }
}

/// Encoded plan ready for transfer
#[derive(Debug, Default)]
pub struct PlanBuffer {
    u32_data: Vec<u32>,
}

impl PlanBuffer {
    /// Encode a full plan
    pub fn encode(plan: &PagePlan) -> Self {
        let total: usize = HEADER_SIZE
            + plan
                .iter()
                .map(|p| U32_PER_PAGE + p.sections.len() * U32_PER_SECTION)
                .sum::<usize>();
        let mut u32_data = Vec::with_capacity(total);

        u32_data.push(MAGIC);
        u32_data.push(SCHEMA_VERSION);
        u32_data.push(plan.total_pages() as u32);

        for page in plan.iter() {
            u32_data.push(page.number as u32);
            u32_data.push(if page.is_first { FLAG_IS_FIRST } else { 0 });
            u32_data.push(page.item_range.start as u32);
            u32_data.push(page.item_range.end as u32);
            u32_data.push(page.sections.len() as u32);
            for placement in &page.sections {
                u32_data.push(section_opcode(placement.kind));
                u32_data.push(u32::from(placement.suppress_leading_gap));
            }
        }

        Self { u32_data }
    }

    pub fn data(&self) -> &[u32] {
        &self.u32_data
    }

    pub fn len(&self) -> usize {
        self.u32_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u32_data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Estimate;
    use crate::layout::plan;

    #[test]
    fn test_encode_default_document() {
        let buf = PlanBuffer::encode(&plan(&Estimate::new()));
        let data = buf.data();
        assert_eq!(data[0], MAGIC);
        assert_eq!(data[1], SCHEMA_VERSION);
        assert_eq!(data[2], 1); // page_count

        // page record: number 1, first, empty item range
        assert_eq!(data[HEADER_SIZE], 1);
        assert_eq!(data[HEADER_SIZE + 1], FLAG_IS_FIRST);
        assert_eq!(data[HEADER_SIZE + 2], 0);
        assert_eq!(data[HEADER_SIZE + 3], 0);

        // default doc places totals, payment, signature on page 1
        let section_count = data[HEADER_SIZE + 4] as usize;
        assert_eq!(section_count, 3);
        assert_eq!(data[HEADER_SIZE + U32_PER_PAGE], SECTION_TOTALS);
        assert_eq!(
            data[HEADER_SIZE + U32_PER_PAGE + 2 * U32_PER_SECTION],
            SECTION_SIGNATURE
        );
        assert_eq!(buf.len(), HEADER_SIZE + U32_PER_PAGE + 3 * U32_PER_SECTION);
    }

    #[test]
    fn test_encode_multi_page_plan() {
        let mut doc = Estimate::new();
        for i in 0..40 {
            doc.push_item(format!("Item {i}"));
            doc.items.last_mut().unwrap().description = "d".repeat(200);
        }
        let result = plan(&doc);
        let buf = PlanBuffer::encode(&result);
        let data = buf.data();
        assert_eq!(data[2] as usize, result.total_pages());

        // walk the records and rebuild the item partition
        let mut idx = HEADER_SIZE;
        let mut items = Vec::new();
        for _ in 0..data[2] {
            let start = data[idx + 2] as usize;
            let end = data[idx + 3] as usize;
            items.extend(start..end);
            idx += U32_PER_PAGE + data[idx + 4] as usize * U32_PER_SECTION;
        }
        assert_eq!(items, (0..40).collect::<Vec<_>>());
        assert_eq!(idx, buf.len());
    }
}
