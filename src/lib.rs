//! QuoteSheet: the pagination core of an estimate/invoice authoring tool
//!
//! This crate turns an [`Estimate`] document into an ordered list of A4
//! page descriptors:
//! - Heights are predicted from character counts and style numbers — no
//!   text shaping, so the preview, the print path and the PDF exporter
//!   all agree to the pixel
//! - The plan is a pure function of the document, recomputed wholesale
//!   on every change
//! - Templates consume the plan verbatim and never re-paginate
//!
//! The same code runs natively and as WASM behind the JS preview.

pub mod document;
pub mod export;
pub mod layout;
pub mod render;
pub mod store;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPreview;

// Re-export primary types
pub use document::{
    ClientInfo, Discount, Estimate, GapKey, ItemId, LayoutKind, LineItem, Margins, PaymentInfo,
    SectionStyle, SpacingConfig, StyleConfig, SupplierInfo, TableStyle, Totals,
};
pub use export::{
    ExportError, ExportJob, PageImage, PageRasterizer, PageSize, PdfAssembler, UploadError,
    UploadTarget,
};
pub use layout::{plan, Page, PageMetrics, PagePlan, SectionKind, SectionPlacement};
pub use render::{PageView, Region};

/// The live preview state: the document plus its memoized page plan.
///
/// The plan is invalidated on any mutable access and rebuilt wholesale on
/// the next read — never patched incrementally, so it can't go stale.
pub struct Preview {
    document: Estimate,
    plan: Option<PagePlan>,
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

impl Preview {
    /// Create a preview over the default document
    pub fn new() -> Self {
        Self::with_document(Estimate::default())
    }

    /// Create a preview over an existing document
    pub fn with_document(document: Estimate) -> Self {
        Self {
            document,
            plan: None,
        }
    }

    /// Read the document
    pub fn document(&self) -> &Estimate {
        &self.document
    }

    /// Mutate the document; the cached plan is dropped
    pub fn document_mut(&mut self) -> &mut Estimate {
        self.plan = None;
        &mut self.document
    }

    /// Replace the document wholesale
    pub fn replace(&mut self, document: Estimate) {
        self.document = document;
        self.plan = None;
    }

    /// The current page plan, recomputed if the document changed
    pub fn pages(&mut self) -> &PagePlan {
        if self.plan.is_none() {
            self.plan = Some(layout::plan(&self.document));
        }
        self.plan.as_ref().expect("plan just computed")
    }

    /// Total page count
    pub fn page_count(&mut self) -> usize {
        self.pages().total_pages()
    }

    /// Render-ready views for every page
    pub fn views(&mut self) -> Vec<PageView> {
        self.pages();
        let plan = self.plan.as_ref().expect("plan just computed");
        PageView::build_all(&self.document, plan)
    }

    /// Snapshot the current plan for an export run; later edits do not
    /// affect the job
    pub fn export_job(&mut self, file_name: impl Into<String>) -> ExportJob {
        let plan = self.pages().clone();
        ExportJob::new(plan, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_over_default_document() {
        let mut preview = Preview::new();
        assert_eq!(preview.page_count(), 1);
    }

    #[test]
    fn test_mutation_invalidates_plan() {
        let mut preview = Preview::new();
        assert_eq!(preview.page_count(), 1);

        for i in 0..40 {
            let doc = preview.document_mut();
            doc.push_item(format!("Item {i}"));
            doc.items.last_mut().unwrap().description = "d".repeat(200);
        }
        assert!(preview.page_count() >= 2);
    }

    #[test]
    fn test_repeated_reads_reuse_the_plan() {
        let mut preview = Preview::new();
        let first = preview.pages().clone();
        let second = preview.pages().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_job_snapshots() {
        let mut preview = Preview::new();
        for _ in 0..40 {
            let doc = preview.document_mut();
            doc.push_item("x");
            doc.items.last_mut().unwrap().description = "d".repeat(200);
        }
        let job = preview.export_job("estimate.pdf");
        let pages_at_export = job.page_count();

        preview.document_mut().items.clear();
        assert_eq!(preview.page_count(), 1);
        assert_eq!(job.page_count(), pages_at_export);
    }
}
