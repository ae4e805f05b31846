use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chart configuration as produced by a charting pipeline: the palette and
/// background, the rendered markup, and the declared element counts,
/// interaction capabilities and responsive properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub palette: Vec<String>,
    pub background: Option<String>,
    #[serde(default)]
    pub chart_html: String,
    #[serde(default)]
    pub chart_elements: ChartElements,
    #[serde(default)]
    pub interactions: Interactions,
    #[serde(default)]
    pub chart_props: ChartProps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartElements {
    #[serde(default)]
    pub series: u32,
    #[serde(default)]
    pub gridlines: u32,
    #[serde(default)]
    pub legend_entries: u32,
    #[serde(default)]
    pub encodings: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interactions {
    #[serde(default)]
    pub keyboard: bool,
    #[serde(default)]
    pub touch_targets: Vec<u32>,
    #[serde(default)]
    pub focus_indicators: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartProps {
    #[serde(default)]
    pub zoom_200: bool,
    #[serde(default)]
    pub mobile_adaptive: bool,
    #[serde(default)]
    pub svg_scalable: bool,
}

/// Pass thresholds for the scored checkpoints. Defaults follow WCAG AA
/// contrast levels and the usual touch-target minimum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub text_contrast: f64,
    pub graphic_contrast: f64,
    pub max_legend_entries: u32,
    pub max_encodings: u32,
    pub min_touch_target: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            text_contrast: 4.5,
            graphic_contrast: 3.0,
            max_legend_entries: 6,
            max_encodings: 4,
            min_touch_target: 44,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteSafety {
    pub safe: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub color: String,
    pub ratio: f64,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairContrast {
    pub pair: (String, String),
    pub ratio: f64,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrayscaleCheck {
    pub unique: bool,
    pub luminances: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorReport {
    pub palette_safety: PaletteSafety,
    pub background_contrast: Vec<ContrastCheck>,
    pub adjacent_contrast: Vec<PairContrast>,
    pub grayscale_test: GrayscaleCheck,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AltText {
    pub has_img_alt: bool,
    pub has_desc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AriaRoles {
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticTable {
    pub has_table: bool,
    pub has_th: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReaderReport {
    pub alt_text: AltText,
    pub aria_roles: AriaRoles,
    pub semantic_table: SemanticTable,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementCount {
    pub series: u32,
    pub gridlines: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendEntries {
    pub legend_entries: u32,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutComplexity {
    pub encodings: u32,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveReport {
    pub element_count: ElementCount,
    pub legend_entries: LegendEntries,
    pub layout_complexity: LayoutComplexity,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSupport {
    pub keyboard: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchTargets {
    pub touch_sizes: Vec<u32>,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusIndicators {
    pub focus_indicators: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorReport {
    pub keyboard_support: KeyboardSupport,
    pub touch_targets: TouchTargets,
    pub focus_indicators: FocusIndicators,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomBehavior {
    pub zoom_200: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileLayout {
    pub mobile_adaptive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgScalable {
    pub svg_scalable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsiveReport {
    pub zoom_behavior: ZoomBehavior,
    pub mobile_layout: MobileLayout,
    pub svg_scalable: SvgScalable,
    pub score: u8,
}

/// The full audit: one sub-report per accessibility pillar, each scored 0-3,
/// plus the 0-15 total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub color_accessibility: ColorReport,
    pub screen_reader_accessibility: ScreenReaderReport,
    pub cognitive_accessibility: CognitiveReport,
    pub motor_accessibility: MotorReport,
    pub responsive_accessibility: ResponsiveReport,
    pub total_score: u8,
    pub generated_at: DateTime<Utc>,
}

/// One checkpoint line in the CSV/TSV summaries and in failing.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub pillar: String,
    pub checkpoint: String,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct AuditOutput {
    pub report: AuditReport,
    pub csv_summary: String,
    pub tsv_summary: String,
    pub failing: Vec<SummaryRow>,
}
