//! # Export Module
//!
//! This module provides functionality for exporting a meeting transcript and
//! its summary as a downloadable plain-text report, along with the word-count
//! statistics shown alongside it.
//!
//! The module validates its inputs up front and renders the report to a byte
//! buffer so callers can stream or write it without touching the filesystem.

mod export;

pub use export::text::{export_to_txt, format_content};
pub use export::{compression_ratio, validate_export_inputs, word_count, ExportError};
