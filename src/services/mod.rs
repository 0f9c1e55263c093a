//! Business logic services

pub mod contest_service;
pub mod user_service;

pub use contest_service::ContestService;
pub use user_service::{SaveUserOutcome, UserService};
