//! Insurance Policy Cost Engine
//!
//! This crate fetches an insurance policy definition (workers, dental-care
//! flag, company-paid percentage) from a remote endpoint and computes, per
//! worker, the split of policy cost between employer and employee in UF,
//! then aggregates totals into a response payload.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
