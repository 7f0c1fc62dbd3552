//! Page geometry and document-wide text style.

use serde::{Deserialize, Serialize};

/// Twentieths of a point per millimetre.
const TWIPS_PER_MM: f32 = 1440.0 / 25.4;

/// Convert millimetres to twips (1/1440 inch), the unit OOXML uses for
/// page size and margins.
pub fn mm_to_twips(mm: f32) -> u32 {
    (mm * TWIPS_PER_MM).round().max(0.0) as u32
}

/// Page size and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width_mm: f32,

    /// Page height
    pub height_mm: f32,

    /// Top margin
    pub margin_top_mm: f32,

    /// Bottom margin
    pub margin_bottom_mm: f32,

    /// Left margin
    pub margin_left_mm: f32,

    /// Right margin
    pub margin_right_mm: f32,
}

impl PageGeometry {
    /// A4 portrait with the lesson-plan margins
    /// (top/bottom 20 mm, left 30 mm, right 15 mm).
    pub const fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 20.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 30.0,
            margin_right_mm: 15.0,
        }
    }

    /// Width available for content between the left and right margins.
    pub fn text_width_mm(&self) -> f32 {
        (self.width_mm - self.margin_left_mm - self.margin_right_mm).max(0.0)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width_mm > self.height_mm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Document-wide default text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStyle {
    /// Font family used by every run
    pub font_family: String,

    /// Font size in points
    pub font_size_pt: f32,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: f32,
}

impl DocumentStyle {
    /// Times New Roman 14pt, line spacing 1.3.
    pub fn lesson_plan() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size_pt: 14.0,
            line_spacing: 1.3,
        }
    }

    /// Font size in half-points (`w:sz`).
    pub fn half_points(&self) -> u32 {
        (self.font_size_pt * 2.0).round().max(1.0) as u32
    }

    /// Line spacing in 240ths of a line (`w:spacing w:line` with `auto` rule).
    pub fn line_240ths(&self) -> u32 {
        (self.line_spacing * 240.0).round().max(1.0) as u32
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::lesson_plan()
    }
}
