pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod roster;
pub mod seeder;

pub use api::ApiClient;
pub use config::SeedConfig;
pub use error::SeedError;
pub use roster::{GeneratedUser, UserRoster};
pub use seeder::{write_user_ids, SeedSummary, Seeder};
