//! Compensation engine for a personal work-hours tracker.
//!
//! This crate takes raw logged time intervals (possibly spanning midnight,
//! possibly flagged as rest days or statutory holidays) plus a payroll policy
//! and deterministically classifies every minute worked into four pay buckets
//! (regular, workday overtime, rest-day overtime, holiday overtime), then
//! converts bucketed hours into currency amounts via a rate table.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
