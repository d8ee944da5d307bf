//! Task lifecycle management for Atelier.
//!
//! Implements the task board core: creating tasks, moving them through
//! the work/review lifecycle with explicit role gates, accumulating work
//! duration across revision cycles, and projecting filtered subsets for
//! the dashboard. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
