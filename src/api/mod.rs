//! HTTP API module for the Policy Cost Engine.
//!
//! This module provides the REST endpoint that fetches the policy
//! document, prices it, and shapes the response payload.

mod handlers;
mod response;
mod state;

pub use handlers::{create_router, handle_policy_request};
pub use response::{PolicyReply, SUCCESS_MESSAGE};
pub use state::AppState;
