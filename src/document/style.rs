//! Style configuration: fonts, margins, table borders and the per-layout
//! spacing schemas

use serde::{Deserialize, Serialize};

/// Millimetres of page margin forced by the "use defaults" toggle
pub const DEFAULT_MARGIN_MM: f32 = 15.0;

/// Fallback for named gaps a layout's schema does not define
pub const DEFAULT_GAP_PX: f32 = 24.0;

/// The four presentation templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Default,
    Modern,
    Classic,
    Minimal,
}

impl LayoutKind {
    /// All variants, in declaration order
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Default,
        LayoutKind::Modern,
        LayoutKind::Classic,
        LayoutKind::Minimal,
    ];
}

/// Font size and color for one document section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    pub font_size: f32,
    pub color: String,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            color: "#64748b".into(),
        }
    }
}

impl SectionStyle {
    fn new(font_size: f32, color: &str) -> Self {
        Self {
            font_size,
            color: color.into(),
        }
    }
}

/// Footer text style (notes/terms, shared) plus the page-number toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterStyle {
    pub font_size: f32,
    pub color: String,
    pub show_page_numbers: bool,
}

impl Default for FooterStyle {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            color: "#475569".into(),
            show_page_numbers: true,
        }
    }
}

/// Payment section style plus its visibility toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentStyle {
    pub font_size: f32,
    pub color: String,
    pub show: bool,
}

impl Default for PaymentStyle {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            color: "#475569".into(),
            show: true,
        }
    }
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

impl Margins {
    /// Equal margins on all four sides
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            bottom: mm,
            left: mm,
            right: mm,
        }
    }
}

/// Table borders and row padding. Row padding feeds the row-height
/// estimate, so the estimator and every template must read the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    pub border_color: String,
    pub header_border_bottom_width: f32,
    pub item_border_bottom_width: f32,
    /// Vertical padding above and below each item row, px
    pub row_padding: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border_color: "#e5e7eb".into(),
            header_border_bottom_width: 1.0,
            item_border_bottom_width: 1.0,
            row_padding: 16.0,
        }
    }
}

/// Named gap between two adjacent structural regions.
///
/// The union of all four layout schemas; each layout resolves only its own
/// subset and falls back to [`DEFAULT_GAP_PX`] for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GapKey {
    LogoToTitle,
    TitleToClient,
    ClientToTable,
    HeaderToInfo,
    TitleToInfo,
    TitleToMeta,
    MetaToInfo,
    InfoToTable,
    TableToTotal,
    TotalToPayment,
    PaymentToNotes,
    NotesToTerms,
    TermsToSignature,
}

/// Gap schema for the `default` layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultSpacing {
    pub logo_to_title: f32,
    pub title_to_client: f32,
    pub client_to_table: f32,
    pub table_to_total: f32,
    pub total_to_payment: f32,
    pub payment_to_notes: f32,
    pub notes_to_terms: f32,
    pub terms_to_signature: f32,
}

impl Default for DefaultSpacing {
    fn default() -> Self {
        Self {
            logo_to_title: 24.0,
            title_to_client: 32.0,
            client_to_table: 32.0,
            table_to_total: 24.0,
            total_to_payment: 24.0,
            payment_to_notes: 24.0,
            notes_to_terms: 24.0,
            terms_to_signature: 40.0,
        }
    }
}

impl DefaultSpacing {
    fn gap(&self, key: GapKey) -> f32 {
        match key {
            GapKey::LogoToTitle => self.logo_to_title,
            GapKey::TitleToClient => self.title_to_client,
            GapKey::ClientToTable => self.client_to_table,
            GapKey::TableToTotal => self.table_to_total,
            GapKey::TotalToPayment => self.total_to_payment,
            GapKey::PaymentToNotes => self.payment_to_notes,
            GapKey::NotesToTerms => self.notes_to_terms,
            GapKey::TermsToSignature => self.terms_to_signature,
            _ => DEFAULT_GAP_PX,
        }
    }
}

/// Gap schema for the `modern` layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModernSpacing {
    pub header_to_info: f32,
    pub info_to_table: f32,
    pub table_to_total: f32,
    pub total_to_payment: f32,
    pub payment_to_notes: f32,
    pub notes_to_terms: f32,
    pub terms_to_signature: f32,
}

impl Default for ModernSpacing {
    fn default() -> Self {
        Self {
            header_to_info: 32.0,
            info_to_table: 32.0,
            table_to_total: 24.0,
            total_to_payment: 24.0,
            payment_to_notes: 24.0,
            notes_to_terms: 24.0,
            terms_to_signature: 40.0,
        }
    }
}

impl ModernSpacing {
    fn gap(&self, key: GapKey) -> f32 {
        match key {
            GapKey::HeaderToInfo => self.header_to_info,
            GapKey::InfoToTable => self.info_to_table,
            GapKey::TableToTotal => self.table_to_total,
            GapKey::TotalToPayment => self.total_to_payment,
            GapKey::PaymentToNotes => self.payment_to_notes,
            GapKey::NotesToTerms => self.notes_to_terms,
            GapKey::TermsToSignature => self.terms_to_signature,
            _ => DEFAULT_GAP_PX,
        }
    }
}

/// Gap schema for the `classic` layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicSpacing {
    pub title_to_info: f32,
    pub info_to_table: f32,
    pub table_to_total: f32,
    pub total_to_payment: f32,
    pub payment_to_notes: f32,
    pub notes_to_terms: f32,
    pub terms_to_signature: f32,
}

impl Default for ClassicSpacing {
    fn default() -> Self {
        Self {
            title_to_info: 32.0,
            info_to_table: 32.0,
            table_to_total: 24.0,
            total_to_payment: 24.0,
            payment_to_notes: 24.0,
            notes_to_terms: 24.0,
            terms_to_signature: 40.0,
        }
    }
}

impl ClassicSpacing {
    fn gap(&self, key: GapKey) -> f32 {
        match key {
            GapKey::TitleToInfo => self.title_to_info,
            GapKey::InfoToTable => self.info_to_table,
            GapKey::TableToTotal => self.table_to_total,
            GapKey::TotalToPayment => self.total_to_payment,
            GapKey::PaymentToNotes => self.payment_to_notes,
            GapKey::NotesToTerms => self.notes_to_terms,
            GapKey::TermsToSignature => self.terms_to_signature,
            _ => DEFAULT_GAP_PX,
        }
    }
}

/// Gap schema for the `minimal` layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinimalSpacing {
    pub title_to_meta: f32,
    pub meta_to_info: f32,
    pub info_to_table: f32,
    pub table_to_total: f32,
    pub total_to_payment: f32,
    pub payment_to_notes: f32,
    pub notes_to_terms: f32,
    pub terms_to_signature: f32,
}

impl Default for MinimalSpacing {
    fn default() -> Self {
        Self {
            title_to_meta: 32.0,
            meta_to_info: 32.0,
            info_to_table: 32.0,
            table_to_total: 24.0,
            total_to_payment: 24.0,
            payment_to_notes: 24.0,
            notes_to_terms: 24.0,
            terms_to_signature: 40.0,
        }
    }
}

impl MinimalSpacing {
    fn gap(&self, key: GapKey) -> f32 {
        match key {
            GapKey::TitleToMeta => self.title_to_meta,
            GapKey::MetaToInfo => self.meta_to_info,
            GapKey::InfoToTable => self.info_to_table,
            GapKey::TableToTotal => self.table_to_total,
            GapKey::TotalToPayment => self.total_to_payment,
            GapKey::PaymentToNotes => self.payment_to_notes,
            GapKey::NotesToTerms => self.notes_to_terms,
            GapKey::TermsToSignature => self.terms_to_signature,
            _ => DEFAULT_GAP_PX,
        }
    }
}

/// One concrete gap record per layout variant (closed schemas, not a map)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    pub r#default: DefaultSpacing,
    pub modern: ModernSpacing,
    pub classic: ClassicSpacing,
    pub minimal: MinimalSpacing,
}

impl SpacingConfig {
    /// Resolve a named gap for the given layout; keys outside the layout's
    /// schema resolve to [`DEFAULT_GAP_PX`].
    pub fn gap(&self, layout: LayoutKind, key: GapKey) -> f32 {
        match layout {
            LayoutKind::Default => self.r#default.gap(key),
            LayoutKind::Modern => self.modern.gap(key),
            LayoutKind::Classic => self.classic.gap(key),
            LayoutKind::Minimal => self.minimal.gap(key),
        }
    }
}

/// Full style configuration for the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Title block
    pub header: SectionStyle,
    pub supplier: SectionStyle,
    pub client: SectionStyle,
    pub table_header: SectionStyle,
    pub table_item: SectionStyle,
    pub total: SectionStyle,
    pub footer: FooterStyle,
    pub payment: PaymentStyle,
    pub margins: Margins,
    pub use_default_margins: bool,
    pub show_margin_guides: bool,
    pub show_spacing_guides: bool,
    pub spacing: SpacingConfig,
    /// Modern layout header background override
    pub modern_header_color: Option<String>,
    /// Modern layout header text override
    pub modern_header_text_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            header: SectionStyle::new(36.0, "#0f172a"),
            supplier: SectionStyle::new(13.0, "#64748b"),
            client: SectionStyle::new(13.0, "#64748b"),
            table_header: SectionStyle::new(12.0, "#9ca3af"),
            table_item: SectionStyle::new(14.0, "#0f172a"),
            total: SectionStyle::new(16.0, "#0f172a"),
            footer: FooterStyle::default(),
            payment: PaymentStyle::default(),
            margins: Margins::default(),
            use_default_margins: false,
            show_margin_guides: false,
            show_spacing_guides: false,
            spacing: SpacingConfig::default(),
            modern_header_color: Some("#0f172a".into()),
            modern_header_text_color: Some("#ffffff".into()),
        }
    }
}

impl StyleConfig {
    /// Margins with the "use defaults" override applied
    pub fn effective_margins(&self) -> Margins {
        if self.use_default_margins {
            Margins::uniform(DEFAULT_MARGIN_MM)
        } else {
            self.margins
        }
    }

    /// Named gap for the given layout (see [`SpacingConfig::gap`])
    pub fn gap(&self, layout: LayoutKind, key: GapKey) -> f32 {
        self.spacing.gap(layout, key)
    }
}
