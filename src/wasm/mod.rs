//! WASM bindings for the preview engine

pub mod plan_buffer;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::document::{LineItem, Totals};
use crate::layout::measure::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::layout::{PagePlan, SectionKind};
use crate::{store, Preview};

pub use plan_buffer::PlanBuffer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed preview wrapper
#[wasm_bindgen]
pub struct WasmPreview {
    preview: Preview,
}

#[wasm_bindgen]
impl WasmPreview {
    /// Create a preview over the default document
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            preview: Preview::new(),
        }
    }

    /// Replace the document from a JSON snapshot. Tolerant like the
    /// store: missing fields fill from defaults, garbage resets to the
    /// default document.
    #[wasm_bindgen(js_name = setDocument)]
    pub fn set_document(&mut self, json: &str) {
        self.preview.replace(store::from_json(json));
    }

    /// Serialize the current document (the persistence snapshot shape)
    #[wasm_bindgen(js_name = getDocument)]
    pub fn get_document(&self) -> String {
        serde_json::to_string(self.preview.document()).unwrap_or_else(|_| "{}".into())
    }

    /// The storage key snapshots live under
    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        store::STORAGE_KEY.to_string()
    }

    /// Move an item between positions (drag-reorder)
    #[wasm_bindgen(js_name = moveItem)]
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        self.preview.document_mut().move_item(from, to)
    }

    /// Get total page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&mut self) -> usize {
        self.preview.page_count()
    }

    /// Get the page plan with resolved items (returns JSON)
    #[wasm_bindgen(js_name = getPagePlan)]
    pub fn get_page_plan(&mut self) -> JsValue {
        let plan_data = {
            let plan = self.preview.pages().clone();
            PlanData::from_plan(&plan, self.preview.document())
        };
        serde_wasm_bindgen::to_value(&plan_data).unwrap_or(JsValue::NULL)
    }

    /// Get render-ready page views for the active template (returns JSON)
    #[wasm_bindgen(js_name = getPageViews)]
    pub fn get_page_views(&mut self) -> JsValue {
        let views = self.preview.views();
        serde_wasm_bindgen::to_value(&views).unwrap_or(JsValue::NULL)
    }

    /// Get the totals section amounts (returns JSON)
    #[wasm_bindgen(js_name = getTotals)]
    pub fn get_totals(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.preview.document().totals()).unwrap_or(JsValue::NULL)
    }

    /// Ordered fixed-size page list for the PDF collaborator (returns JSON)
    #[wasm_bindgen(js_name = getExportPages)]
    pub fn get_export_pages(&mut self) -> JsValue {
        let pages: Vec<ExportPageData> = (0..self.preview.page_count())
            .map(|index| ExportPageData {
                index,
                width_mm: PAGE_WIDTH_MM,
                height_mm: PAGE_HEIGHT_MM,
            })
            .collect();
        serde_wasm_bindgen::to_value(&pages).unwrap_or(JsValue::NULL)
    }

    /// Flat u32 encoding of the plan for per-frame reads
    #[wasm_bindgen(js_name = getPlanBuffer)]
    pub fn get_plan_buffer(&mut self) -> js_sys::Uint32Array {
        let buffer = PlanBuffer::encode(self.preview.pages());
        js_sys::Uint32Array::from(buffer.data())
    }
}

impl Default for WasmPreview {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable plan data for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    pub total_pages: usize,
    pub pages: Vec<PageData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub number: usize,
    pub is_first: bool,
    pub items: Vec<ItemData>,
    pub sections: Vec<SectionData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub price: i64,
    pub total: i64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionData {
    pub kind: SectionKind,
    pub suppress_leading_gap: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPageData {
    pub index: usize,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PlanData {
    fn from_plan(plan: &PagePlan, doc: &crate::document::Estimate) -> Self {
        let pages = plan
            .iter()
            .map(|page| PageData {
                number: page.number,
                is_first: page.is_first,
                items: page.items(doc).iter().map(ItemData::from_item).collect(),
                sections: page
                    .sections
                    .iter()
                    .map(|s| SectionData {
                        kind: s.kind,
                        suppress_leading_gap: s.suppress_leading_gap,
                    })
                    .collect(),
            })
            .collect();

        Self {
            total_pages: plan.total_pages(),
            pages,
        }
    }
}

impl ItemData {
    fn from_item(item: &LineItem) -> Self {
        Self {
            id: item.id.0,
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            price: item.price,
            total: item.total(),
        }
    }
}

/// Serializable totals for JS (re-exported shape)
pub type TotalsData = Totals;
