// =============================================================================
// DOCS TOOL HANDLER
// =============================================================================
//
// Turns a tool call from the agent host (`name` + JSON arguments) into a
// `DocsService` call. Each tool has its own argument struct, so "not passed"
// and "passed as false/0" stay distinct all the way to the request builder.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::core::docs::{
    BulletPreset, DocsApi, DocsService, EndOfSegmentLocation, FootnotePlacement, HeaderFooterType,
    Location, Range, RgbColor, TextStyleOptions,
};
use crate::core::tools::{ToolDefinition, ToolHandler};

use super::tool_catalog::{self, docs_tool_definitions};

/// Where `add_content` inserts when no index is given: right after the
/// body's opening section break.
const DEFAULT_INSERT_INDEX: i64 = 1;

fn default_insert_index() -> i64 {
    DEFAULT_INSERT_INDEX
}

#[derive(Debug, Deserialize)]
struct CreateDocumentArgs {
    title: String,
}

#[derive(Debug, Deserialize)]
struct DocumentArgs {
    document_id: String,
}

#[derive(Debug, Deserialize)]
struct AddContentArgs {
    document_id: String,
    content: String,
    #[serde(default = "default_insert_index")]
    index: i64,
}

#[derive(Debug, Deserialize)]
struct RangeArgs {
    document_id: String,
    start_index: i64,
    end_index: i64,
    #[serde(default)]
    segment_id: Option<String>,
    #[serde(default)]
    tab_id: Option<String>,
}

impl RangeArgs {
    fn range(&self) -> Range {
        Range::new(self.start_index, self.end_index)
            .in_segment(self.segment_id.clone(), self.tab_id.clone())
    }
}

#[derive(Debug, Deserialize)]
struct TextStyleArgs {
    #[serde(flatten)]
    target: RangeArgs,
    #[serde(default)]
    bold: Option<bool>,
    #[serde(default)]
    italic: Option<bool>,
    #[serde(default)]
    underline: Option<bool>,
    #[serde(default)]
    font_size: Option<f64>,
    #[serde(default)]
    link_url: Option<String>,
    #[serde(default)]
    foreground_color: Option<RgbColor>,
    #[serde(default)]
    background_color: Option<RgbColor>,
}

impl TextStyleArgs {
    fn options(&self) -> TextStyleOptions {
        TextStyleOptions {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            font_size: self.font_size,
            link_url: self.link_url.clone(),
            foreground_color: self.foreground_color,
            background_color: self.background_color,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InsertTableArgs {
    document_id: String,
    location_index: i64,
    rows: u32,
    columns: u32,
    #[serde(default)]
    segment_id: Option<String>,
    #[serde(default)]
    tab_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SectionBreakArgs {
    #[serde(default)]
    section_break_location_index: Option<i64>,
    #[serde(default)]
    section_break_segment_id: Option<String>,
    #[serde(default)]
    section_break_tab_id: Option<String>,
}

impl SectionBreakArgs {
    /// Only built when an index was given; the segment/tab ids alone mean nothing.
    fn location(&self) -> Option<Location> {
        self.section_break_location_index.map(|index| {
            Location::new(index).in_segment(
                self.section_break_segment_id.clone(),
                self.section_break_tab_id.clone(),
            )
        })
    }
}

#[derive(Debug, Deserialize)]
struct CreateHeaderArgs {
    document_id: String,
    #[serde(default)]
    header_type: HeaderFooterType,
    #[serde(flatten)]
    section_break: SectionBreakArgs,
}

#[derive(Debug, Deserialize)]
struct CreateFooterArgs {
    document_id: String,
    #[serde(default)]
    footer_type: HeaderFooterType,
    #[serde(flatten)]
    section_break: SectionBreakArgs,
}

#[derive(Debug, Deserialize)]
struct DeleteHeaderArgs {
    document_id: String,
    header_id: String,
    #[serde(default)]
    tab_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteFooterArgs {
    document_id: String,
    footer_id: String,
    #[serde(default)]
    tab_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateFootnoteArgs {
    document_id: String,
    #[serde(default)]
    location_index: Option<i64>,
    #[serde(default)]
    location_segment_id: Option<String>,
    #[serde(default)]
    location_tab_id: Option<String>,
    #[serde(default)]
    end_of_segment_location: bool,
    #[serde(default)]
    end_of_segment_segment_id: Option<String>,
    #[serde(default)]
    end_of_segment_tab_id: Option<String>,
}

impl CreateFootnoteArgs {
    /// The flag picks the mode; the other mode's arguments are ignored.
    fn placement(&self) -> Result<FootnotePlacement, String> {
        if self.end_of_segment_location {
            return Ok(FootnotePlacement::EndOfSegment(EndOfSegmentLocation {
                segment_id: self.end_of_segment_segment_id.clone(),
                tab_id: self.end_of_segment_tab_id.clone(),
            }));
        }

        let index = self.location_index.ok_or_else(|| {
            "location_index is required unless end_of_segment_location is true".to_string()
        })?;
        Ok(FootnotePlacement::At(Location::new(index).in_segment(
            self.location_segment_id.clone(),
            self.location_tab_id.clone(),
        )))
    }
}

#[derive(Debug, Deserialize)]
struct ParagraphBulletsArgs {
    #[serde(flatten)]
    target: RangeArgs,
    bullet_preset: BulletPreset,
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: &Value) -> Result<T, String> {
    serde_json::from_value(args.clone())
        .map_err(|e| format!("Invalid arguments for '{}': {}", tool, e))
}

/// Exposes `DocsService` as host-callable tools.
pub struct DocsToolHandler<A: DocsApi> {
    service: DocsService<A>,
}

impl<A: DocsApi> DocsToolHandler<A> {
    pub fn new(service: DocsService<A>) -> Self {
        Self { service }
    }

    async fn dispatch(&self, name: &str, args: &Value) -> Result<Value, String> {
        let service = &self.service;
        let result = match name {
            tool_catalog::CREATE_DOCUMENT => {
                let args: CreateDocumentArgs = parse_args(name, args)?;
                service.create_document(&args.title).await
            }
            tool_catalog::GET_DOCUMENT => {
                let args: DocumentArgs = parse_args(name, args)?;
                service.get_document(&args.document_id).await
            }
            tool_catalog::ADD_CONTENT => {
                let args: AddContentArgs = parse_args(name, args)?;
                service
                    .add_content(&args.document_id, &args.content, args.index)
                    .await
            }
            tool_catalog::STYLE_TEXT => {
                let args: TextStyleArgs = parse_args(name, args)?;
                service
                    .style_text(&args.target.document_id, &args.target.range(), &args.options())
                    .await
            }
            tool_catalog::REPLACE_TEXT_STYLE => {
                let args: TextStyleArgs = parse_args(name, args)?;
                service
                    .replace_text_style(
                        &args.target.document_id,
                        &args.target.range(),
                        &args.options(),
                    )
                    .await
            }
            tool_catalog::DELETE_CONTENT => {
                let args: RangeArgs = parse_args(name, args)?;
                service.delete_content(&args.document_id, &args.range()).await
            }
            tool_catalog::INSERT_TABLE => {
                let args: InsertTableArgs = parse_args(name, args)?;
                let location = Location::new(args.location_index)
                    .in_segment(args.segment_id.clone(), args.tab_id.clone());
                service
                    .insert_table(&args.document_id, &location, args.rows, args.columns)
                    .await
            }
            tool_catalog::CREATE_HEADER => {
                let args: CreateHeaderArgs = parse_args(name, args)?;
                service
                    .create_header(
                        &args.document_id,
                        args.header_type,
                        args.section_break.location().as_ref(),
                    )
                    .await
            }
            tool_catalog::CREATE_FOOTER => {
                let args: CreateFooterArgs = parse_args(name, args)?;
                service
                    .create_footer(
                        &args.document_id,
                        args.footer_type,
                        args.section_break.location().as_ref(),
                    )
                    .await
            }
            tool_catalog::DELETE_HEADER => {
                let args: DeleteHeaderArgs = parse_args(name, args)?;
                service
                    .delete_header(&args.document_id, &args.header_id, args.tab_id.as_deref())
                    .await
            }
            tool_catalog::DELETE_FOOTER => {
                let args: DeleteFooterArgs = parse_args(name, args)?;
                service
                    .delete_footer(&args.document_id, &args.footer_id, args.tab_id.as_deref())
                    .await
            }
            tool_catalog::CREATE_FOOTNOTE => {
                let args: CreateFootnoteArgs = parse_args(name, args)?;
                let placement = args.placement()?;
                service.create_footnote(&args.document_id, &placement).await
            }
            tool_catalog::CREATE_PARAGRAPH_BULLETS => {
                let args: ParagraphBulletsArgs = parse_args(name, args)?;
                service
                    .create_paragraph_bullets(
                        &args.target.document_id,
                        &args.target.range(),
                        args.bullet_preset,
                    )
                    .await
            }
            tool_catalog::DELETE_PARAGRAPH_BULLETS => {
                let args: RangeArgs = parse_args(name, args)?;
                service
                    .delete_paragraph_bullets(&args.document_id, &args.range())
                    .await
            }
            _ => return Err(format!("Unknown tool: {}", name)),
        };

        result.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl<A: DocsApi> ToolHandler for DocsToolHandler<A> {
    async fn handle_tool_call(&self, name: &str, args: &Value) -> Result<Value, String> {
        tracing::info!(tool = name, "Handling tool call");
        let result = self.dispatch(name, args).await;
        if let Err(e) = &result {
            tracing::warn!(tool = name, "Tool call failed: {}", e);
        }
        result
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        docs_tool_definitions()
    }
}
