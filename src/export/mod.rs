//! Export boundary: sequential page capture and ordered PDF assembly
//!
//! Rasterization itself lives with the host (the browser captures each
//! rendered sheet); this module fixes the contract: pages are captured
//! strictly in plan order, one at a time, each appended to the output
//! before the next capture starts. Assembly is order-dependent and
//! holding more than one captured page at a time is not allowed. An
//! export runs against the snapshot it was created with, so edits made
//! mid-export never mix two documents' pages in one file.

use thiserror::Error;

use crate::layout::measure::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::layout::PagePlan;

/// Failures of one export attempt
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was invoked before the preview rendered; fatal to this
    /// attempt and surfaced to the user
    #[error("render target `{0}` does not exist")]
    MissingRenderTarget(String),
    /// The plan was empty; the engine guarantees at least one page, so
    /// this is an internal fault
    #[error("pagination produced no pages")]
    NoPages,
    #[error("capturing page {index} failed: {reason}")]
    Capture { index: usize, reason: String },
    #[error("assembling the document failed: {0}")]
    Assemble(String),
}

/// Upload failures are user-visible and retryable; neither corrupts
/// local state
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("not authorized to upload: {0}")]
    Auth(String),
    #[error("upload failed: {0}")]
    Transport(String),
}

/// One captured page: a full-bleed A4 image (margins are baked into the
/// rendered sheet, the assembler adds none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 0-based position in the plan
    pub index: usize,
    pub bytes: Vec<u8>,
}

/// Fixed physical size of every exported page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    /// A4 portrait
    pub fn a4() -> Self {
        Self {
            width_mm: PAGE_WIDTH_MM,
            height_mm: PAGE_HEIGHT_MM,
        }
    }
}

/// Captures one rendered sheet. Implemented by the host against the
/// preview DOM; capture must not start until the sheet has fully
/// rendered.
pub trait PageRasterizer {
    fn capture(&mut self, index: usize, size: PageSize) -> Result<PageImage, ExportError>;
}

/// Receives captured pages in order and produces the final document
pub trait PdfAssembler {
    fn append(&mut self, image: PageImage) -> Result<(), ExportError>;
    fn finish(&mut self) -> Result<Vec<u8>, ExportError>;
}

/// Receives the finished bytes. Folder is optional; the target decides
/// its fallback.
pub trait UploadTarget {
    fn upload(
        &mut self,
        pdf: &[u8],
        file_name: &str,
        access_token: &str,
        folder: Option<&str>,
    ) -> Result<(), UploadError>;
}

/// One export attempt, pinned to the plan it was created with
#[derive(Debug, Clone)]
pub struct ExportJob {
    plan: PagePlan,
    file_name: String,
}

impl ExportJob {
    /// Snapshot a plan for export. The caller keeps editing freely; this
    /// job will not see it.
    pub fn new(plan: PagePlan, file_name: impl Into<String>) -> Self {
        Self {
            plan,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn page_count(&self) -> usize {
        self.plan.total_pages()
    }

    /// Capture every page in order and assemble the document.
    ///
    /// Strictly sequential: capture N completes before capture N+1
    /// starts, and each image is handed to the assembler before the next
    /// capture.
    pub fn run(
        &self,
        rasterizer: &mut dyn PageRasterizer,
        assembler: &mut dyn PdfAssembler,
    ) -> Result<Vec<u8>, ExportError> {
        if self.plan.is_empty() {
            log::error!("export of `{}` found an empty page plan", self.file_name);
            return Err(ExportError::NoPages);
        }

        for page in self.plan.iter() {
            let image = rasterizer.capture(page.number - 1, PageSize::a4())?;
            assembler.append(image)?;
        }
        assembler.finish()
    }
}

/// Hand finished bytes to an upload target
pub fn upload(
    pdf: &[u8],
    file_name: &str,
    access_token: &str,
    folder: Option<&str>,
    target: &mut dyn UploadTarget,
) -> Result<(), UploadError> {
    target.upload(pdf, file_name, access_token, folder)
}
