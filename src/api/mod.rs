mod client;
pub mod models;

pub use client::{ApiClient, SeedApi, TASKS_PATH, USERS_PATH};
pub use models::{Assignment, Envelope, NewTask, NewUser, ResourceId};
