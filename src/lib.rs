//! Configurable net pay engine.
//!
//! This crate calculates an employee's net salary from a user-editable rule
//! configuration: named income items with defaults, deductions that are a
//! percentage of an income item, a fixed amount or the output of a
//! progressive tax bracket table. It also keeps a roster of employees, runs
//! batch calculations over it, and persists configurations as JSON or YAML.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod roster;
