use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Half-open `[start_index, end_index)` span inside a document segment.
///
/// `segment_id` picks a header, footer or footnote; leaving it out targets the
/// document body. Optional ids are omitted from the wire form, never sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: i64,
    pub end_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
}

impl Range {
    pub fn new(start_index: i64, end_index: i64) -> Self {
        Self {
            start_index,
            end_index,
            segment_id: None,
            tab_id: None,
        }
    }

    pub fn in_segment(mut self, segment_id: Option<String>, tab_id: Option<String>) -> Self {
        self.segment_id = segment_id;
        self.tab_id = tab_id;
        self
    }
}

/// Insertion point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
}

impl Location {
    pub fn new(index: i64) -> Self {
        Self {
            index,
            segment_id: None,
            tab_id: None,
        }
    }

    pub fn in_segment(mut self, segment_id: Option<String>, tab_id: Option<String>) -> Self {
        self.segment_id = segment_id;
        self.tab_id = tab_id;
        self
    }
}

/// The end of the body, or of the header/footer/footnote named by `segment_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfSegmentLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
}

/// Where a footnote reference gets inserted. Exactly one mode is ever sent.
#[derive(Debug, Clone, PartialEq)]
pub enum FootnotePlacement {
    At(Location),
    EndOfSegment(EndOfSegmentLocation),
}

/// Flat RGB input. Components are in `[0.0, 1.0]`; a missing key reads as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}

/// Character styling a caller asked for.
///
/// `None` means "not supplied" and never reaches the request. `Some(false)` on
/// a flag is dropped by the partial update (it is the default) and written out
/// by the full replace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleOptions {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// Points.
    pub font_size: Option<f64>,
    pub link_url: Option<String>,
    pub foreground_color: Option<RgbColor>,
    pub background_color: Option<RgbColor>,
}

/// A populated `textStyle` object plus the `fields` mask that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyleUpdate {
    pub text_style: Map<String, Value>,
    pub fields: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

impl HeaderFooterKind {
    pub fn create_request_name(self) -> &'static str {
        match self {
            HeaderFooterKind::Header => "createHeader",
            HeaderFooterKind::Footer => "createFooter",
        }
    }

    pub fn delete_request_name(self) -> &'static str {
        match self {
            HeaderFooterKind::Header => "deleteHeader",
            HeaderFooterKind::Footer => "deleteFooter",
        }
    }

    pub fn id_field(self) -> &'static str {
        match self {
            HeaderFooterKind::Header => "headerId",
            HeaderFooterKind::Footer => "footerId",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderFooterType {
    #[default]
    #[serde(rename = "DEFAULT")]
    Default,
    #[serde(rename = "HEADER_FOOTER_TYPE_UNSPECIFIED")]
    Unspecified,
}

/// Glyph presets accepted by `createParagraphBullets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletPreset {
    BulletGlyphPresetUnspecified,
    BulletDiscCircleSquare,
    #[serde(rename = "BULLET_DIAMONDX_ARROW3D_SQUARE")]
    BulletDiamondxArrow3dSquare,
    BulletCheckbox,
    BulletArrowDiamondDisc,
    BulletStarCircleSquare,
    #[serde(rename = "BULLET_ARROW3D_CIRCLE_SQUARE")]
    BulletArrow3dCircleSquare,
    BulletLefttriangleDiamondDisc,
    BulletDiamondxHollowdiamondSquare,
    BulletDiamondCircleSquare,
    NumberedDecimalAlphaRoman,
    NumberedDecimalAlphaRomanParens,
    NumberedDecimalNested,
    NumberedUpperalphaAlphaRoman,
    NumberedUpperromanUpperalphaDecimal,
    NumberedZerodecimalAlphaRoman,
}

impl BulletPreset {
    pub const ALL: [BulletPreset; 16] = [
        BulletPreset::BulletGlyphPresetUnspecified,
        BulletPreset::BulletDiscCircleSquare,
        BulletPreset::BulletDiamondxArrow3dSquare,
        BulletPreset::BulletCheckbox,
        BulletPreset::BulletArrowDiamondDisc,
        BulletPreset::BulletStarCircleSquare,
        BulletPreset::BulletArrow3dCircleSquare,
        BulletPreset::BulletLefttriangleDiamondDisc,
        BulletPreset::BulletDiamondxHollowdiamondSquare,
        BulletPreset::BulletDiamondCircleSquare,
        BulletPreset::NumberedDecimalAlphaRoman,
        BulletPreset::NumberedDecimalAlphaRomanParens,
        BulletPreset::NumberedDecimalNested,
        BulletPreset::NumberedUpperalphaAlphaRoman,
        BulletPreset::NumberedUpperromanUpperalphaDecimal,
        BulletPreset::NumberedZerodecimalAlphaRoman,
    ];

    /// Wire name, e.g. `BULLET_CHECKBOX`.
    pub fn as_str(self) -> &'static str {
        match self {
            BulletPreset::BulletGlyphPresetUnspecified => "BULLET_GLYPH_PRESET_UNSPECIFIED",
            BulletPreset::BulletDiscCircleSquare => "BULLET_DISC_CIRCLE_SQUARE",
            BulletPreset::BulletDiamondxArrow3dSquare => "BULLET_DIAMONDX_ARROW3D_SQUARE",
            BulletPreset::BulletCheckbox => "BULLET_CHECKBOX",
            BulletPreset::BulletArrowDiamondDisc => "BULLET_ARROW_DIAMOND_DISC",
            BulletPreset::BulletStarCircleSquare => "BULLET_STAR_CIRCLE_SQUARE",
            BulletPreset::BulletArrow3dCircleSquare => "BULLET_ARROW3D_CIRCLE_SQUARE",
            BulletPreset::BulletLefttriangleDiamondDisc => "BULLET_LEFTTRIANGLE_DIAMOND_DISC",
            BulletPreset::BulletDiamondxHollowdiamondSquare => {
                "BULLET_DIAMONDX_HOLLOWDIAMOND_SQUARE"
            }
            BulletPreset::BulletDiamondCircleSquare => "BULLET_DIAMOND_CIRCLE_SQUARE",
            BulletPreset::NumberedDecimalAlphaRoman => "NUMBERED_DECIMAL_ALPHA_ROMAN",
            BulletPreset::NumberedDecimalAlphaRomanParens => "NUMBERED_DECIMAL_ALPHA_ROMAN_PARENS",
            BulletPreset::NumberedDecimalNested => "NUMBERED_DECIMAL_NESTED",
            BulletPreset::NumberedUpperalphaAlphaRoman => "NUMBERED_UPPERALPHA_ALPHA_ROMAN",
            BulletPreset::NumberedUpperromanUpperalphaDecimal => {
                "NUMBERED_UPPERROMAN_UPPERALPHA_DECIMAL"
            }
            BulletPreset::NumberedZerodecimalAlphaRoman => "NUMBERED_ZERODECIMAL_ALPHA_ROMAN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_omits_absent_segment_and_tab() {
        let json = serde_json::to_value(Range::new(1, 5)).unwrap();
        assert_eq!(json, serde_json::json!({"startIndex": 1, "endIndex": 5}));
    }

    #[test]
    fn test_location_keeps_supplied_ids() {
        let location = Location::new(3).in_segment(Some("kix.hdr".to_string()), None);
        let json = serde_json::to_value(location).unwrap();
        assert_eq!(json, serde_json::json!({"index": 3, "segmentId": "kix.hdr"}));
    }

    #[test]
    fn test_rgb_color_missing_component_defaults_to_zero() {
        let color: RgbColor = serde_json::from_str(r#"{"red": 0.5}"#).unwrap();
        assert_eq!(
            color,
            RgbColor {
                red: 0.5,
                green: 0.0,
                blue: 0.0
            }
        );
    }

    #[test]
    fn test_bullet_preset_wire_names_match_serde() {
        for preset in BulletPreset::ALL {
            let json = serde_json::to_value(preset).unwrap();
            assert_eq!(json, serde_json::Value::String(preset.as_str().to_string()));
        }
    }

    #[test]
    fn test_header_footer_type_wire_names() {
        assert_eq!(
            serde_json::to_value(HeaderFooterType::Default).unwrap(),
            "DEFAULT"
        );
        let parsed: HeaderFooterType =
            serde_json::from_str("\"HEADER_FOOTER_TYPE_UNSPECIFIED\"").unwrap();
        assert_eq!(parsed, HeaderFooterType::Unspecified);
    }
}
