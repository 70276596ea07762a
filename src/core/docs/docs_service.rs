use serde_json::{json, Value};

use super::docs_api::{DocsApi, DocsError};
use super::docs_models::{
    BulletPreset, FootnotePlacement, HeaderFooterKind, HeaderFooterType, Location, Range,
    TextStyleOptions,
};
use super::request_builder;

/// Result body returned instead of a network call when no styling was requested.
pub const NO_STYLING_MESSAGE: &str = "No styling applied";

/// One method per exposed document operation.
///
/// Every edit becomes a single `batchUpdate` carrying exactly one request.
pub struct DocsService<A: DocsApi> {
    api: A,
}

impl<A: DocsApi> DocsService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn create_document(&self, title: &str) -> Result<Value, DocsError> {
        tracing::debug!("Creating Google Doc titled '{}'", title);
        self.api
            .create_document(request_builder::build_create_document(title))
            .await
    }

    pub async fn get_document(&self, document_id: &str) -> Result<Value, DocsError> {
        self.api.get_document(document_id).await
    }

    /// Inserts `text` at `index` in the document body.
    pub async fn add_content(
        &self,
        document_id: &str,
        text: &str,
        index: i64,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_insert_text(&Location::new(index), text);
        self.send_one(document_id, request).await
    }

    /// Partial style update: only the supplied attributes change.
    pub async fn style_text(
        &self,
        document_id: &str,
        range: &Range,
        options: &TextStyleOptions,
    ) -> Result<Value, DocsError> {
        let Some(update) = request_builder::build_text_style_explicit(options) else {
            tracing::debug!("No text style attributes supplied for {}, skipping", document_id);
            return Ok(json!({ "message": NO_STYLING_MESSAGE }));
        };

        let request = request_builder::build_update_text_style(range, &update);
        self.send_one(document_id, request).await
    }

    /// Full style replace: attributes that were not supplied reset to the API
    /// defaults. Always sent, so empty options clear the range's formatting.
    pub async fn replace_text_style(
        &self,
        document_id: &str,
        range: &Range,
        options: &TextStyleOptions,
    ) -> Result<Value, DocsError> {
        let update = request_builder::build_text_style_wildcard(options);
        let request = request_builder::build_update_text_style(range, &update);
        self.send_one(document_id, request).await
    }

    pub async fn delete_content(&self, document_id: &str, range: &Range) -> Result<Value, DocsError> {
        self.send_one(document_id, request_builder::build_delete_range(range))
            .await
    }

    pub async fn insert_table(
        &self,
        document_id: &str,
        location: &Location,
        rows: u32,
        columns: u32,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_insert_table(location, rows, columns);
        self.send_one(document_id, request).await
    }

    pub async fn create_header(
        &self,
        document_id: &str,
        header_type: HeaderFooterType,
        section_break_location: Option<&Location>,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_create_header_or_footer(
            HeaderFooterKind::Header,
            header_type,
            section_break_location,
        );
        self.send_one(document_id, request).await
    }

    pub async fn create_footer(
        &self,
        document_id: &str,
        footer_type: HeaderFooterType,
        section_break_location: Option<&Location>,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_create_header_or_footer(
            HeaderFooterKind::Footer,
            footer_type,
            section_break_location,
        );
        self.send_one(document_id, request).await
    }

    pub async fn delete_header(
        &self,
        document_id: &str,
        header_id: &str,
        tab_id: Option<&str>,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_delete_header_or_footer(
            HeaderFooterKind::Header,
            header_id,
            tab_id,
        );
        self.send_one(document_id, request).await
    }

    pub async fn delete_footer(
        &self,
        document_id: &str,
        footer_id: &str,
        tab_id: Option<&str>,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_delete_header_or_footer(
            HeaderFooterKind::Footer,
            footer_id,
            tab_id,
        );
        self.send_one(document_id, request).await
    }

    pub async fn create_footnote(
        &self,
        document_id: &str,
        placement: &FootnotePlacement,
    ) -> Result<Value, DocsError> {
        self.send_one(document_id, request_builder::build_create_footnote(placement))
            .await
    }

    pub async fn create_paragraph_bullets(
        &self,
        document_id: &str,
        range: &Range,
        preset: BulletPreset,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_paragraph_bullets(range, preset);
        self.send_one(document_id, request).await
    }

    pub async fn delete_paragraph_bullets(
        &self,
        document_id: &str,
        range: &Range,
    ) -> Result<Value, DocsError> {
        let request = request_builder::build_delete_paragraph_bullets(range);
        self.send_one(document_id, request).await
    }

    async fn send_one(&self, document_id: &str, request: Value) -> Result<Value, DocsError> {
        let body = request_builder::build_batch_update(vec![request]);
        self.api.batch_update(document_id, body).await
    }
}
