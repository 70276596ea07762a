// =============================================================================
// TOOL CATALOG
// =============================================================================
//
// JSON Schema declarations for every document tool. Property names match the
// keys `docs_tools` deserializes, so a schema change here needs the matching
// field change there.

use std::collections::HashMap;

use crate::core::docs::BulletPreset;
use crate::core::tools::{PropertyDef, ToolDefinition, ToolParameters};

pub const CREATE_DOCUMENT: &str = "create_document";
pub const GET_DOCUMENT: &str = "get_document";
pub const ADD_CONTENT: &str = "add_content";
pub const STYLE_TEXT: &str = "style_text";
pub const REPLACE_TEXT_STYLE: &str = "replace_text_style";
pub const DELETE_CONTENT: &str = "delete_content";
pub const INSERT_TABLE: &str = "insert_table";
pub const CREATE_HEADER: &str = "create_header";
pub const CREATE_FOOTER: &str = "create_footer";
pub const DELETE_HEADER: &str = "delete_header";
pub const DELETE_FOOTER: &str = "delete_footer";
pub const CREATE_FOOTNOTE: &str = "create_footnote";
pub const CREATE_PARAGRAPH_BULLETS: &str = "create_paragraph_bullets";
pub const DELETE_PARAGRAPH_BULLETS: &str = "delete_paragraph_bullets";

const HEADER_FOOTER_TYPES: [&str; 2] = ["DEFAULT", "HEADER_FOOTER_TYPE_UNSPECIFIED"];

fn tool(
    name: &str,
    description: &str,
    properties: Vec<(&str, PropertyDef)>,
    required: &[&str],
) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        parameters: ToolParameters {
            param_type: "object".to_string(),
            properties: properties
                .into_iter()
                .map(|(key, prop)| (key.to_string(), prop))
                .collect(),
            required: required.iter().map(|r| r.to_string()).collect(),
        },
    }
}

fn document_id() -> (&'static str, PropertyDef) {
    (
        "document_id",
        PropertyDef::new("string", "The Google Doc document ID or full URL."),
    )
}

fn range_properties(verb: &str) -> Vec<(&'static str, PropertyDef)> {
    vec![
        document_id(),
        (
            "start_index",
            PropertyDef::new("integer", &format!("Zero-based start index of the range to {}.", verb)),
        ),
        (
            "end_index",
            PropertyDef::new(
                "integer",
                &format!("Zero-based end index of the range to {} (exclusive).", verb),
            ),
        ),
        (
            "segment_id",
            PropertyDef::new(
                "string",
                "Header, footer or footnote segment ID. Omit for the document body.",
            ),
        ),
        ("tab_id", PropertyDef::new("string", "Tab containing the range.")),
    ]
}

fn color(description: &str) -> PropertyDef {
    let mut components = HashMap::new();
    for name in ["red", "green", "blue"] {
        components.insert(
            name.to_string(),
            PropertyDef::new("number", "0.0 to 1.0; defaults to 0.0 when omitted."),
        );
    }
    PropertyDef::new("object", description).with_properties(components)
}

fn text_style_properties() -> Vec<(&'static str, PropertyDef)> {
    let mut properties = range_properties("style");
    properties.extend([
        ("bold", PropertyDef::new("boolean", "Bold on or off.")),
        ("italic", PropertyDef::new("boolean", "Italic on or off.")),
        ("underline", PropertyDef::new("boolean", "Underline on or off.")),
        (
            "font_size",
            PropertyDef::new("number", "Font size in points, e.g. 12.0."),
        ),
        ("link_url", PropertyDef::new("string", "URL to link the text to.")),
        ("foreground_color", color("Text colour as RGB.")),
        ("background_color", color("Highlight colour as RGB.")),
    ]);
    properties
}

fn section_break_properties(kind: &str) -> Vec<(&'static str, PropertyDef)> {
    vec![
        (
            "section_break_location_index",
            PropertyDef::new(
                "integer",
                &format!(
                    "Index of the SectionBreak that starts the section the {} belongs to. Omit for the document's default.",
                    kind
                ),
            ),
        ),
        (
            "section_break_segment_id",
            PropertyDef::new("string", "Segment ID of the SectionBreak location."),
        ),
        (
            "section_break_tab_id",
            PropertyDef::new("string", "Tab ID of the SectionBreak location."),
        ),
    ]
}

/// Declarations for every document tool, in the order they are listed to the host.
pub fn docs_tool_definitions() -> Vec<ToolDefinition> {
    let bullet_presets: Vec<&str> = BulletPreset::ALL.iter().map(|p| p.as_str()).collect();

    let mut header = vec![
        document_id(),
        (
            "header_type",
            PropertyDef::new("string", "Kind of header to create (default DEFAULT).")
                .with_enum(&HEADER_FOOTER_TYPES),
        ),
    ];
    header.extend(section_break_properties("header"));

    let mut footer = vec![
        document_id(),
        (
            "footer_type",
            PropertyDef::new("string", "Kind of footer to create (default DEFAULT).")
                .with_enum(&HEADER_FOOTER_TYPES),
        ),
    ];
    footer.extend(section_break_properties("footer"));

    let mut bullets = range_properties("apply bullets to");
    bullets.push((
        "bullet_preset",
        PropertyDef::new("string", "The kind of bullet glyphs to use.").with_enum(&bullet_presets),
    ));

    vec![
        tool(
            CREATE_DOCUMENT,
            "Creates a new blank Google Doc with the given title.",
            vec![("title", PropertyDef::new("string", "Title of the new document."))],
            &["title"],
        ),
        tool(
            GET_DOCUMENT,
            "Retrieves the latest version of a Google Doc.",
            vec![document_id()],
            &["document_id"],
        ),
        tool(
            ADD_CONTENT,
            "Inserts text at a position in an existing Google Doc.",
            vec![
                document_id(),
                ("content", PropertyDef::new("string", "Text to insert.")),
                (
                    "index",
                    PropertyDef::new("integer", "Zero-based insertion index (default 1)."),
                ),
            ],
            &["document_id", "content"],
        ),
        tool(
            STYLE_TEXT,
            "Applies text styling to a range. Only the attributes you set change; \
             everything else keeps its current style. Flags set to false are ignored \
             (use replace_text_style to turn them off). Setting nothing is a no-op.",
            text_style_properties(),
            &["document_id", "start_index", "end_index"],
        ),
        tool(
            REPLACE_TEXT_STYLE,
            "Replaces the whole text style of a range. Attributes you don't pass are \
             reset to the document defaults; passing none clears all formatting.",
            text_style_properties(),
            &["document_id", "start_index", "end_index"],
        ),
        tool(
            DELETE_CONTENT,
            "Deletes the content in a range of a Google Doc.",
            range_properties("delete"),
            &["document_id", "start_index", "end_index"],
        ),
        tool(
            INSERT_TABLE,
            "Inserts a table at the given location.",
            vec![
                document_id(),
                (
                    "location_index",
                    PropertyDef::new("integer", "Zero-based index to insert the table at."),
                ),
                ("rows", PropertyDef::new("integer", "Number of rows.")),
                ("columns", PropertyDef::new("integer", "Number of columns.")),
                (
                    "segment_id",
                    PropertyDef::new("string", "Header, footer or footnote segment ID."),
                ),
                ("tab_id", PropertyDef::new("string", "Tab containing the location.")),
            ],
            &["document_id", "location_index", "rows", "columns"],
        ),
        tool(
            CREATE_HEADER,
            "Creates a header in a Google Doc.",
            header,
            &["document_id"],
        ),
        tool(
            CREATE_FOOTER,
            "Creates a footer in a Google Doc.",
            footer,
            &["document_id"],
        ),
        tool(
            DELETE_HEADER,
            "Deletes a header from a Google Doc.",
            vec![
                document_id(),
                ("header_id", PropertyDef::new("string", "ID of the header to delete.")),
                ("tab_id", PropertyDef::new("string", "Tab containing the header.")),
            ],
            &["document_id", "header_id"],
        ),
        tool(
            DELETE_FOOTER,
            "Deletes a footer from a Google Doc.",
            vec![
                document_id(),
                ("footer_id", PropertyDef::new("string", "ID of the footer to delete.")),
                ("tab_id", PropertyDef::new("string", "Tab containing the footer.")),
            ],
            &["document_id", "footer_id"],
        ),
        tool(
            CREATE_FOOTNOTE,
            "Creates a footnote and inserts its reference either at an index or at the \
             end of a segment (set end_of_segment_location).",
            vec![
                document_id(),
                (
                    "location_index",
                    PropertyDef::new(
                        "integer",
                        "Index to insert the footnote reference at. Required unless end_of_segment_location is true.",
                    ),
                ),
                (
                    "location_segment_id",
                    PropertyDef::new("string", "Segment ID for the location (empty for the body)."),
                ),
                ("location_tab_id", PropertyDef::new("string", "Tab ID for the location.")),
                (
                    "end_of_segment_location",
                    PropertyDef::new("boolean", "Insert at the end of the segment instead of at an index."),
                ),
                (
                    "end_of_segment_segment_id",
                    PropertyDef::new("string", "Segment ID for the end-of-segment location."),
                ),
                (
                    "end_of_segment_tab_id",
                    PropertyDef::new("string", "Tab ID for the end-of-segment location."),
                ),
            ],
            &["document_id"],
        ),
        tool(
            CREATE_PARAGRAPH_BULLETS,
            "Adds bullets to every paragraph overlapping the range.",
            bullets,
            &["document_id", "start_index", "end_index", "bullet_preset"],
        ),
        tool(
            DELETE_PARAGRAPH_BULLETS,
            "Removes bullets from every paragraph overlapping the range.",
            range_properties("remove bullets from"),
            &["document_id", "start_index", "end_index"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_declared_once() {
        let tools = docs_tool_definitions();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), 14);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_required_fields_are_declared_properties() {
        for tool in docs_tool_definitions() {
            for required in &tool.parameters.required {
                assert!(
                    tool.parameters.properties.contains_key(required),
                    "{} requires undeclared {}",
                    tool.name,
                    required
                );
            }
        }
    }

    #[test]
    fn test_bullet_preset_enum_lists_all_presets() {
        let tools = docs_tool_definitions();
        let bullets = tools
            .iter()
            .find(|t| t.name == CREATE_PARAGRAPH_BULLETS)
            .unwrap();
        let presets = bullets.parameters.properties["bullet_preset"]
            .enum_values
            .as_ref()
            .unwrap();
        assert_eq!(presets.len(), 16);
        assert!(presets.contains(&"NUMBERED_DECIMAL_NESTED".to_string()));
    }
}
