//! High-level operations.
//!
//! This module contains the implementation of pomless commands.

pub mod locate;
pub mod scan;
pub mod show;

pub use locate::{locate, Located};
pub use scan::{format_report, scan, ScanEntry, ScanOptions, ScanReport};
pub use show::{render_model, show, synthesizer_for, OutputFormat, ShowOptions};
