//! Dashboard metrics for Atelier.
//!
//! Read-only aggregation over a snapshot of the task collection: status
//! counts, completion and on-time rates, and per-member workload rollups.
//! Nothing in this module mutates task state.

mod metrics;

pub use metrics::{DashboardMetrics, MemberPerformance, compute_metrics};

#[cfg(test)]
mod tests;
