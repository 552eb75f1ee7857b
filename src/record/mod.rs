//! Scraped data types
//!
//! This module contains the plan record written to every output format and the
//! per-page outcome produced by the worker pool.

mod outcome;
mod plan_record;

pub use outcome::PageOutcome;
pub use plan_record::{PlanRecord, FIELD_NAMES};
