//! # readiness-analysis
//!
//! Folds per-compartment scan results into the final [`Report`]:
//! flattened load balancer records, summary counters, health histograms,
//! and the deterministically ordered issue list.
//!
//! [`Report`]: readiness_core::models::Report

pub mod aggregator;
pub mod ordering;

pub use aggregator::{ReadinessAggregator, ReportContext};
pub use ordering::issue_order;
