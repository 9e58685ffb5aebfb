//! Scan a web page for interactive elements and generate Playwright tests.
//!
//! The pipeline has two phases joined by a JSON snapshot:
//! `analyzer` turns a live page into an [`analyzer::analysis_model::ElementMap`]
//! and `snapshot` persists it; `generator` turns that map into abstract
//! test cases and then into `.spec.ts` source text.

pub mod analyzer;
pub mod browser;
pub mod cli;
pub mod config;
pub mod generator;
pub mod report;
pub mod snapshot;
pub mod util;
