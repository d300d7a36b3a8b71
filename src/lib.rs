//! Manual vs. AI-generated test case comparison
//!
//! The matching core lives in `testcase_ai_common`; this crate adds the
//! spreadsheet reader, AI CLI generator, config and report export.

pub mod ai_provider;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod reader;

pub use testcase_ai_common as common;
