pub mod docs_api;
pub mod docs_models;
pub mod docs_service;
pub mod request_builder;

pub use docs_api::{DocsApi, DocsError};
pub use docs_models::{
    BulletPreset, EndOfSegmentLocation, FootnotePlacement, HeaderFooterType, Location, Range,
    RgbColor, TextStyleOptions,
};
pub use docs_service::DocsService;
