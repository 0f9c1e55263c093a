//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod user_repo;

pub use contest_repo::ContestRepository;
pub use user_repo::UserRepository;
