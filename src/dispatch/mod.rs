//! Email dispatch collaborator.
//!
//! The composer only knows the [`EmailDispatcher`] trait. Production wiring
//! uses [`HttpEmailDispatcher`], tests substitute their own implementation.

mod http;
mod types;

pub use http::HttpEmailDispatcher;
pub use types::{DispatchError, DispatchOutcome, DispatchResult, EmailDispatcher};
