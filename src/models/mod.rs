//! Core data models for the Policy Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost;
mod policy;
mod worker;

pub use cost::{CostSplit, PolicyTotal};
pub use policy::PolicyDocument;
pub use worker::{PricedWorker, Worker};
