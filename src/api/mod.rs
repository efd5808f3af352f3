//! API Layer for the platform advisor
//!
//! Turns raw request bodies into fully defaulted course records and shapes
//! recommender output into responses. Shared by the HTTP server and the CLI.
//!
//! # Design Principles
//!
//! - Reject malformed input before a record is built
//! - Every accepted field takes its documented default when absent or null
//! - Response strings are passed through unchanged from the recommender

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::{handle_explain, handle_suggest};
pub use request::CourseRequest;
pub use response::{RuleEntry, SuggestionResponse, WelcomeResponse, WELCOME_MESSAGE};
