//! Timesheet generation and day-classification engine.
//!
//! This crate builds per-project timesheet grids for a date range, pre-classifying
//! every day as present, holiday, leave, half leave or week-off from a calendar of
//! overrides and a week-off policy, and submits edited grids to an external store.

#![warn(missing_docs)]

pub mod api;
pub mod boundary;
pub mod config;
pub mod error;
pub mod models;
pub mod timesheet;
