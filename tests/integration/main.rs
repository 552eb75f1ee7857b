//! Integration tests for Plan-Scout
//!
//! These tests serve listing and detail pages from a wiremock server and run
//! the full scrape pipeline against it.

mod output_tests;
mod pipeline_tests;
