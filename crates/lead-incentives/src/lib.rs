//! Incentive, target-progress and working-calendar rules for the lead
//! management dashboard.
//!
//! Callers fetch a snapshot of lead records and an employee's monthly target,
//! then hand both to [`workflows::incentives::EmployeeDashboard`] (or to the
//! individual building blocks) to obtain incentive amounts and motivation
//! copy. Nothing in this crate performs I/O apart from the lead importers.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
