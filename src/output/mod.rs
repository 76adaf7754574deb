//! Output module for reporting harvest results
//!
//! This module handles:
//! - Per-version entity statistics
//! - Library and version listings
//! - Crawl outcome summaries

pub mod stats;

pub use stats::{
    format_crawl_result, format_library_summaries, format_version_statistics,
    load_library_summaries, load_version_statistics, print_crawl_result,
    print_library_summaries, print_version_statistics, LibrarySummary,
};
