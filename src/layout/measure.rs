//! Measurement model: deterministic size estimates from style numbers and
//! character counts. No real text shaping happens anywhere in the engine;
//! every height below is arithmetic, so the preview, the exporter and the
//! tests all agree to the pixel.

use unicode_segmentation::UnicodeSegmentation;

use crate::document::{Estimate, GapKey, LayoutKind, LineItem, StyleConfig, TableStyle};

/// Pixels per millimetre at the 96 DPI approximation
pub const MM_TO_PX: f32 = 3.78;

/// A4 portrait, millimetres
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Subtracted from the usable content height to absorb rounding drift
pub const SAFE_BUFFER_PX: f32 = 45.0;

/// Height of the item table's header row
pub const TABLE_HEADER_ROW_PX: f32 = 55.0;

/// Header strip on continuation pages (no title/party block after page 1)
pub const CONTINUATION_HEADER_PX: f32 = 80.0;

/// Line height as a multiple of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.6;

/// Base padding around notes/terms text blocks
pub const FOOTER_TEXT_BASE_PX: f32 = 50.0;

/// Fixed footer section heights
pub const TOTALS_PX: f32 = 160.0;
pub const TOTALS_CLASSIC_PX: f32 = 70.0;
pub const PAYMENT_PX: f32 = 110.0;
pub const SIGNATURE_PX: f32 = 140.0;

/// Header shrink for layouts that reserve a logo box when no logo is set
const NO_LOGO_REDUCTION_PX: f32 = 60.0;

/// Fallbacks for cleared font-size fields
const ITEM_FONT_FALLBACK: f32 = 14.0;
const FOOTER_FONT_FALLBACK: f32 = 13.0;

/// Average glyph width as a fraction of font size
const ITEM_CHAR_WIDTH_FACTOR: f32 = 0.75;
const FOOTER_CHAR_WIDTH_FACTOR: f32 = 0.8;

/// Item descriptions wrap in half the content width
const DESC_COLUMN_FRACTION: f32 = 0.5;

/// Resolved page geometry for one style configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    /// Usable width between the left and right margins, px
    pub content_width: f32,
    /// Height budget per page: A4 minus margins minus the safety buffer, px
    pub content_height: f32,
}

impl PageMetrics {
    /// Compute the geometry from a style configuration. When page numbers
    /// are shown the bottom margin is clamped to at least 15 mm so the
    /// number never collides with content.
    pub fn from_style(style: &StyleConfig) -> Self {
        let margins = style.effective_margins();
        let effective_bottom = if style.footer.show_page_numbers {
            margins.bottom.max(15.0)
        } else {
            margins.bottom
        };

        Self {
            content_width: (PAGE_WIDTH_MM - margins.left - margins.right) * MM_TO_PX,
            content_height: PAGE_HEIGHT_MM * MM_TO_PX
                - margins.top * MM_TO_PX
                - effective_bottom * MM_TO_PX
                - SAFE_BUFFER_PX,
        }
    }
}

fn font_or(size: f32, fallback: f32) -> f32 {
    if size > 0.0 {
        size
    } else {
        fallback
    }
}

/// Estimate how many visual lines a text block occupies in a column.
///
/// Grapheme count divided by the per-line capacity, rounded up, plus one
/// extra line per literal newline. The newline both counts as a character
/// and adds a line; the double-accounting is deliberate (a paragraph break
/// forces a new visual line on top of the wrap estimate) and the templates
/// were tuned against it.
pub fn wrapped_lines(text: &str, column_width_px: f32, avg_char_width_px: f32) -> usize {
    if text.is_empty() {
        return 0;
    }
    let chars_per_line = ((column_width_px / avg_char_width_px).floor() as usize).max(1);
    let char_count = text.graphemes(true).count();
    let newlines = text.matches('\n').count();
    char_count.div_ceil(chars_per_line) + newlines
}

/// Height of one item row: the name's own line, each wrapped description
/// line at full line height, plus padding above and below. Counting every
/// description line at full height overestimates slightly; the waste buys
/// a guarantee against clipping.
pub fn item_row_px(
    item: &LineItem,
    style: &StyleConfig,
    table: &TableStyle,
    metrics: &PageMetrics,
) -> f32 {
    let font = font_or(style.table_item.font_size, ITEM_FONT_FALLBACK);
    let line_height = font * LINE_HEIGHT_FACTOR;
    let desc_lines = wrapped_lines(
        &item.description,
        metrics.content_width * DESC_COLUMN_FRACTION,
        font * ITEM_CHAR_WIDTH_FACTOR,
    );
    line_height + desc_lines as f32 * line_height + 2.0 * table.row_padding
}

/// Height of a notes/terms block: wrapped lines at footer line height plus
/// the fixed base padding
pub fn footer_text_px(text: &str, style: &StyleConfig, metrics: &PageMetrics) -> f32 {
    let font = font_or(style.footer.font_size, FOOTER_FONT_FALLBACK);
    let lines = wrapped_lines(text, metrics.content_width, font * FOOTER_CHAR_WIDTH_FACTOR);
    FOOTER_TEXT_BASE_PX + lines as f32 * font * LINE_HEIGHT_FACTOR
}

fn base_header_px(layout: LayoutKind) -> f32 {
    match layout {
        LayoutKind::Default => 320.0,
        LayoutKind::Modern => 260.0,
        LayoutKind::Classic => 240.0,
        LayoutKind::Minimal => 280.0,
    }
}

/// Named gaps that sit inside the first-page header block, per layout
pub fn header_gap_keys(layout: LayoutKind) -> &'static [GapKey] {
    match layout {
        LayoutKind::Default => &[
            GapKey::LogoToTitle,
            GapKey::TitleToClient,
            GapKey::ClientToTable,
        ],
        LayoutKind::Modern => &[GapKey::HeaderToInfo, GapKey::InfoToTable],
        LayoutKind::Classic => &[GapKey::TitleToInfo, GapKey::InfoToTable],
        LayoutKind::Minimal => &[
            GapKey::TitleToMeta,
            GapKey::MetaToInfo,
            GapKey::InfoToTable,
        ],
    }
}

/// First-page header height: the layout's base block (shrunk when the
/// logo box is empty on layouts that reserve one) plus its header gaps
pub fn first_page_header_px(doc: &Estimate) -> f32 {
    let mut height = base_header_px(doc.layout);

    if doc.logo.is_none()
        && matches!(doc.layout, LayoutKind::Default | LayoutKind::Minimal)
    {
        height -= NO_LOGO_REDUCTION_PX;
    }

    for &key in header_gap_keys(doc.layout) {
        height += doc.style.gap(doc.layout, key);
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ItemId;

    #[test]
    fn test_page_metrics_default_margins() {
        // 15mm margins, page numbers on: bottom stays 15
        let metrics = PageMetrics::from_style(&StyleConfig::default());
        assert_eq!(metrics.content_width, (210.0 - 30.0) * MM_TO_PX);
        assert_eq!(
            metrics.content_height,
            297.0 * MM_TO_PX - 15.0 * MM_TO_PX - 15.0 * MM_TO_PX - SAFE_BUFFER_PX
        );
    }

    #[test]
    fn test_page_numbers_clamp_bottom_margin() {
        let mut style = StyleConfig::default();
        style.margins.bottom = 5.0;

        let clamped = PageMetrics::from_style(&style);
        style.footer.show_page_numbers = false;
        let raw = PageMetrics::from_style(&style);

        // 10mm difference between the clamped and raw bottom margin
        assert!((raw.content_height - clamped.content_height - 10.0 * MM_TO_PX).abs() < 1e-3);
    }

    #[test]
    fn test_wrapped_lines_empty() {
        assert_eq!(wrapped_lines("", 500.0, 10.0), 0);
    }

    #[test]
    fn test_wrapped_lines_short_text_is_one_line() {
        assert_eq!(wrapped_lines("hi", 500.0, 10.0), 1);
    }

    #[test]
    fn test_wrapped_lines_rounds_up() {
        // 50 chars per line: 120 chars -> 3 lines
        let text = "x".repeat(120);
        assert_eq!(wrapped_lines(&text, 500.0, 10.0), 3);
    }

    #[test]
    fn test_wrapped_lines_newlines_add_extra_lines() {
        // 10 chars + 2 newlines at 50 chars/line: ceil(12/50) + 2 = 3
        assert_eq!(wrapped_lines("hello\nwor\nld", 500.0, 10.0), 3);
    }

    #[test]
    fn test_wrapped_lines_degenerate_column() {
        // column narrower than a glyph: one char per line, no div-by-zero
        assert_eq!(wrapped_lines("abc", 5.0, 10.0), 3);
    }

    #[test]
    fn test_item_row_height() {
        let metrics = PageMetrics::from_style(&StyleConfig::default());
        let style = StyleConfig::default();
        let table = TableStyle::default();

        let mut item = LineItem::new(ItemId(0), "name");
        // no description: one name line + padding
        let bare = item_row_px(&item, &style, &table, &metrics);
        assert_eq!(bare, 14.0 * 1.6 + 32.0);

        // desc column = 680.4/2 = 340.2px, 14*0.75 = 10.5px/char -> 32 chars/line
        item.description = "d".repeat(40);
        let with_desc = item_row_px(&item, &style, &table, &metrics);
        assert!((with_desc - (bare + 2.0 * 14.0 * 1.6)).abs() < 1e-3);
    }

    #[test]
    fn test_footer_text_height() {
        let style = StyleConfig::default();
        let metrics = PageMetrics::from_style(&style);
        // 13*0.8 = 10.4px/char over 680.4px -> 65 chars/line
        let one_line = footer_text_px("short", &style, &metrics);
        assert_eq!(one_line, 50.0 + 13.0 * 1.6);

        let two_lines = footer_text_px(&"x".repeat(70), &style, &metrics);
        assert_eq!(two_lines, 50.0 + 2.0 * 13.0 * 1.6);
    }

    #[test]
    fn test_header_height_per_layout() {
        let mut doc = Estimate::new();
        // default layout, no logo: 320 - 60 + (24 + 32 + 32)
        assert_eq!(first_page_header_px(&doc), 320.0 - 60.0 + 88.0);

        doc.logo = Some("data:image/png;base64,xyz".into());
        assert_eq!(first_page_header_px(&doc), 320.0 + 88.0);

        // modern ignores the logo and has two header gaps
        doc.layout = LayoutKind::Modern;
        doc.logo = None;
        assert_eq!(first_page_header_px(&doc), 260.0 + 64.0);

        doc.layout = LayoutKind::Classic;
        assert_eq!(first_page_header_px(&doc), 240.0 + 64.0);

        doc.layout = LayoutKind::Minimal;
        assert_eq!(first_page_header_px(&doc), 280.0 - 60.0 + 96.0);
    }
}
