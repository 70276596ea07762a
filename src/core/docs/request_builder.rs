// =============================================================================
// REQUEST BUILDER
// =============================================================================
//
// Pure functions that turn typed arguments into the request objects the
// Docs `batchUpdate` endpoint expects. Nothing in here does I/O, so every
// shape can be checked with plain input/output tests.
//
// Field names follow the upstream JSON schema exactly (`startIndex`,
// `fontSize`, `rgbColor`, ...). Optional values are left out of the object
// rather than sent as `null`.

use serde_json::{json, Map, Value};

use super::docs_models::{
    BulletPreset, FootnotePlacement, HeaderFooterKind, HeaderFooterType, Location, Range,
    RgbColor, TextStyleOptions, TextStyleUpdate,
};

/// Field mask that tells the API to replace every text style attribute.
pub const WILDCARD_FIELD_MASK: &str = "*";

/// Body for `POST /documents`.
pub fn build_create_document(title: &str) -> Value {
    json!({ "title": title })
}

/// Body for `POST /documents/{id}:batchUpdate`.
pub fn build_batch_update(requests: Vec<Value>) -> Value {
    json!({ "requests": requests })
}

pub fn build_insert_text(location: &Location, text: &str) -> Value {
    json!({
        "insertText": {
            "location": location,
            "text": text,
        }
    })
}

pub fn build_delete_range(range: &Range) -> Value {
    json!({
        "deleteContentRange": {
            "range": range,
        }
    })
}

pub fn build_insert_table(location: &Location, rows: u32, columns: u32) -> Value {
    json!({
        "insertTable": {
            "location": location,
            "rows": rows,
            "columns": columns,
        }
    })
}

/// Wraps a flat colour in the `{color: {rgbColor: {...}}}` envelope used by
/// both `foregroundColor` and `backgroundColor`.
pub fn build_color_envelope(color: &RgbColor) -> Value {
    json!({
        "color": {
            "rgbColor": {
                "red": color.red,
                "green": color.green,
                "blue": color.blue,
            }
        }
    })
}

/// How a boolean attribute set to `false` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FalseFlags {
    /// `false` is the default, so it contributes nothing.
    Skip,
    /// `false` is written into the style object.
    Keep,
}

/// Supplied attributes in evaluation order. Absent options produce no entry.
fn collect_text_style(
    options: &TextStyleOptions,
    false_flags: FalseFlags,
) -> Vec<(&'static str, Value)> {
    let mut attributes = Vec::new();

    let flags = [
        ("bold", options.bold),
        ("italic", options.italic),
        ("underline", options.underline),
    ];
    for (name, flag) in flags {
        match flag {
            Some(true) => attributes.push((name, Value::Bool(true))),
            Some(false) if false_flags == FalseFlags::Keep => {
                attributes.push((name, Value::Bool(false)))
            }
            _ => {}
        }
    }
    if let Some(size) = options.font_size {
        attributes.push(("fontSize", json!({ "magnitude": size, "unit": "PT" })));
    }
    if let Some(url) = &options.link_url {
        attributes.push(("link", json!({ "url": url })));
    }
    if let Some(color) = &options.foreground_color {
        attributes.push(("foregroundColor", build_color_envelope(color)));
    }
    if let Some(color) = &options.background_color {
        attributes.push(("backgroundColor", build_color_envelope(color)));
    }

    attributes
}

fn into_style_map(attributes: Vec<(&'static str, Value)>) -> Map<String, Value> {
    attributes
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Partial update: `fields` names exactly the supplied attributes, so
/// everything else on the range keeps its current style. Boolean flags only
/// count when they are `true`.
///
/// Returns `None` when nothing was supplied; callers treat that as a no-op
/// and skip the network call.
pub fn build_text_style_explicit(options: &TextStyleOptions) -> Option<TextStyleUpdate> {
    let attributes = collect_text_style(options, FalseFlags::Skip);
    if attributes.is_empty() {
        return None;
    }

    let fields = attributes
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",");

    Some(TextStyleUpdate {
        text_style: into_style_map(attributes),
        fields,
    })
}

/// Full replace: `fields` is always `*`, so every attribute missing from the
/// style object falls back to the API default. With nothing supplied this
/// clears all character formatting on the range.
pub fn build_text_style_wildcard(options: &TextStyleOptions) -> TextStyleUpdate {
    TextStyleUpdate {
        text_style: into_style_map(collect_text_style(options, FalseFlags::Keep)),
        fields: WILDCARD_FIELD_MASK.to_string(),
    }
}

pub fn build_update_text_style(range: &Range, update: &TextStyleUpdate) -> Value {
    json!({
        "updateTextStyle": {
            "range": range,
            "textStyle": update.text_style,
            "fields": update.fields,
        }
    })
}

pub fn build_paragraph_bullets(range: &Range, preset: BulletPreset) -> Value {
    json!({
        "createParagraphBullets": {
            "range": range,
            "bulletPreset": preset.as_str(),
        }
    })
}

pub fn build_delete_paragraph_bullets(range: &Range) -> Value {
    json!({
        "deleteParagraphBullets": {
            "range": range,
        }
    })
}

pub fn build_create_header_or_footer(
    kind: HeaderFooterKind,
    kind_type: HeaderFooterType,
    section_break_location: Option<&Location>,
) -> Value {
    let mut request = Map::new();
    request.insert("type".to_string(), json!(kind_type));
    if let Some(location) = section_break_location {
        request.insert("sectionBreakLocation".to_string(), json!(location));
    }

    json!({ kind.create_request_name(): request })
}

pub fn build_delete_header_or_footer(
    kind: HeaderFooterKind,
    id: &str,
    tab_id: Option<&str>,
) -> Value {
    let mut request = Map::new();
    request.insert(kind.id_field().to_string(), json!(id));
    if let Some(tab_id) = tab_id {
        request.insert("tabId".to_string(), json!(tab_id));
    }

    json!({ kind.delete_request_name(): request })
}

pub fn build_create_footnote(placement: &FootnotePlacement) -> Value {
    let request = match placement {
        FootnotePlacement::At(location) => json!({ "location": location }),
        FootnotePlacement::EndOfSegment(end) => json!({ "endOfSegmentLocation": end }),
    };

    json!({ "createFootnote": request })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::docs::docs_models::EndOfSegmentLocation;

    fn red() -> RgbColor {
        RgbColor {
            red: 1.0,
            green: 0.0,
            blue: 0.0,
        }
    }

    #[test]
    fn test_insert_text_shape() {
        let request = build_insert_text(&Location::new(5), "hi");
        assert_eq!(
            request,
            json!({"insertText": {"location": {"index": 5}, "text": "hi"}})
        );
    }

    #[test]
    fn test_delete_range_with_segment_and_tab() {
        let range = Range::new(2, 9).in_segment(Some("kix.ftr".to_string()), Some("t.0".to_string()));
        let request = build_delete_range(&range);
        assert_eq!(
            request,
            json!({"deleteContentRange": {"range": {
                "startIndex": 2,
                "endIndex": 9,
                "segmentId": "kix.ftr",
                "tabId": "t.0"
            }}})
        );
    }

    #[test]
    fn test_delete_range_body_has_no_optional_keys() {
        let request = build_delete_range(&Range::new(1, 4));
        let range = &request["deleteContentRange"]["range"];
        assert!(range.get("segmentId").is_none());
        assert!(range.get("tabId").is_none());
    }

    #[test]
    fn test_insert_table_shape() {
        let request = build_insert_table(&Location::new(1).in_segment(None, Some("t.1".to_string())), 3, 4);
        assert_eq!(
            request,
            json!({"insertTable": {
                "location": {"index": 1, "tabId": "t.1"},
                "rows": 3,
                "columns": 4
            }})
        );
    }

    #[test]
    fn test_color_envelope() {
        assert_eq!(
            build_color_envelope(&red()),
            json!({"color": {"rgbColor": {"red": 1.0, "green": 0.0, "blue": 0.0}}})
        );
    }

    #[test]
    fn test_explicit_policy_lists_supplied_fields_in_order() {
        let options = TextStyleOptions {
            font_size: Some(14.0),
            bold: Some(true),
            background_color: Some(red()),
            link_url: Some("https://example.com".to_string()),
            ..Default::default()
        };

        let update = build_text_style_explicit(&options).unwrap();

        assert_eq!(update.fields, "bold,fontSize,link,backgroundColor");
        assert_eq!(
            Value::Object(update.text_style),
            json!({
                "bold": true,
                "fontSize": {"magnitude": 14.0, "unit": "PT"},
                "link": {"url": "https://example.com"},
                "backgroundColor": {"color": {"rgbColor": {"red": 1.0, "green": 0.0, "blue": 0.0}}}
            })
        );
    }

    #[test]
    fn test_explicit_policy_ignores_false_flags() {
        let options = TextStyleOptions {
            bold: Some(false),
            italic: Some(false),
            underline: Some(false),
            ..Default::default()
        };

        assert!(build_text_style_explicit(&options).is_none());
    }

    #[test]
    fn test_explicit_policy_false_flag_next_to_real_attribute() {
        let options = TextStyleOptions {
            italic: Some(false),
            font_size: Some(10.0),
            ..Default::default()
        };

        let update = build_text_style_explicit(&options).unwrap();

        assert_eq!(update.fields, "fontSize");
        assert!(update.text_style.get("italic").is_none());
    }

    #[test]
    fn test_every_attribute_in_evaluation_order() {
        let options = TextStyleOptions {
            bold: Some(true),
            italic: Some(true),
            underline: Some(true),
            font_size: Some(11.0),
            link_url: Some("https://example.com".to_string()),
            foreground_color: Some(red()),
            background_color: Some(RgbColor::default()),
        };

        let update = build_text_style_explicit(&options).unwrap();

        assert_eq!(
            update.fields,
            "bold,italic,underline,fontSize,link,foregroundColor,backgroundColor"
        );
        assert_eq!(update.text_style.len(), 7);
    }

    #[test]
    fn test_explicit_policy_empty_is_noop() {
        assert!(build_text_style_explicit(&TextStyleOptions::default()).is_none());
    }

    #[test]
    fn test_wildcard_policy_mask_is_always_star() {
        let options = TextStyleOptions {
            underline: Some(true),
            foreground_color: Some(red()),
            ..Default::default()
        };

        let update = build_text_style_wildcard(&options);

        assert_eq!(update.fields, "*");
        assert_eq!(update.text_style.len(), 2);
        assert!(update.text_style.contains_key("underline"));
        assert!(update.text_style.contains_key("foregroundColor"));
    }

    #[test]
    fn test_wildcard_policy_empty_clears_everything() {
        let update = build_text_style_wildcard(&TextStyleOptions::default());

        assert_eq!(update.fields, "*");
        assert!(update.text_style.is_empty());
    }

    #[test]
    fn test_wildcard_policy_keeps_false_flags() {
        let options = TextStyleOptions {
            bold: Some(false),
            ..Default::default()
        };

        let update = build_text_style_wildcard(&options);

        assert_eq!(update.text_style.get("bold"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_update_text_style_request() {
        let options = TextStyleOptions {
            bold: Some(true),
            ..Default::default()
        };
        let update = build_text_style_explicit(&options).unwrap();

        let request = build_update_text_style(&Range::new(1, 6), &update);

        assert_eq!(
            request,
            json!({"updateTextStyle": {
                "range": {"startIndex": 1, "endIndex": 6},
                "textStyle": {"bold": true},
                "fields": "bold"
            }})
        );
    }

    #[test]
    fn test_paragraph_bullets() {
        let request = build_paragraph_bullets(&Range::new(1, 20), BulletPreset::BulletCheckbox);
        assert_eq!(
            request,
            json!({"createParagraphBullets": {
                "range": {"startIndex": 1, "endIndex": 20},
                "bulletPreset": "BULLET_CHECKBOX"
            }})
        );

        let request = build_delete_paragraph_bullets(&Range::new(1, 20));
        assert_eq!(
            request,
            json!({"deleteParagraphBullets": {"range": {"startIndex": 1, "endIndex": 20}}})
        );
    }

    #[test]
    fn test_create_header_without_section_break() {
        let request = build_create_header_or_footer(
            HeaderFooterKind::Header,
            HeaderFooterType::Default,
            None,
        );
        assert_eq!(request, json!({"createHeader": {"type": "DEFAULT"}}));
    }

    #[test]
    fn test_create_footer_with_section_break() {
        let location = Location::new(42).in_segment(None, Some("t.2".to_string()));
        let request = build_create_header_or_footer(
            HeaderFooterKind::Footer,
            HeaderFooterType::Unspecified,
            Some(&location),
        );
        assert_eq!(
            request,
            json!({"createFooter": {
                "type": "HEADER_FOOTER_TYPE_UNSPECIFIED",
                "sectionBreakLocation": {"index": 42, "tabId": "t.2"}
            }})
        );
    }

    #[test]
    fn test_delete_header_and_footer() {
        assert_eq!(
            build_delete_header_or_footer(HeaderFooterKind::Header, "kix.h1", None),
            json!({"deleteHeader": {"headerId": "kix.h1"}})
        );
        assert_eq!(
            build_delete_header_or_footer(HeaderFooterKind::Footer, "kix.f1", Some("t.0")),
            json!({"deleteFooter": {"footerId": "kix.f1", "tabId": "t.0"}})
        );
    }

    #[test]
    fn test_footnote_modes_are_exclusive() {
        let at = build_create_footnote(&FootnotePlacement::At(Location::new(7)));
        assert_eq!(at, json!({"createFootnote": {"location": {"index": 7}}}));
        assert!(at["createFootnote"].get("endOfSegmentLocation").is_none());

        let end = build_create_footnote(&FootnotePlacement::EndOfSegment(
            EndOfSegmentLocation {
                segment_id: None,
                tab_id: Some("t.3".to_string()),
            },
        ));
        assert_eq!(
            end,
            json!({"createFootnote": {"endOfSegmentLocation": {"tabId": "t.3"}}})
        );
        assert!(end["createFootnote"].get("location").is_none());
    }

    #[test]
    fn test_batch_update_wraps_requests() {
        let body = build_batch_update(vec![build_insert_text(&Location::new(1), "x")]);
        assert_eq!(body["requests"].as_array().map(|r| r.len()), Some(1));
        assert_eq!(build_create_document("Notes"), json!({"title": "Notes"}));
    }
}
