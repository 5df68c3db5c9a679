//! lingograde-extractors — Text extraction backends and configuration.
//!
//! Implements the `TextExtractor` trait for a simulated OCR service, a
//! fixed-text source, and a remote HTTP extraction service, and loads the
//! `lingograde.toml` configuration that selects between them.

pub mod config;
pub mod http;
pub mod simulated;
pub mod static_text;

pub use config::{create_extractor, load_config, load_config_from, ExtractorConfig, LingogradeConfig};
pub use http::HttpExtractor;
pub use lingograde_core::error::ExtractionError;
pub use simulated::SimulatedExtractor;
pub use static_text::StaticExtractor;
