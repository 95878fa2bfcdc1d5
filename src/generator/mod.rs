//! Random content for generated users and tasks

pub mod deadline;
pub mod names;
pub mod random;
mod task;
pub mod task_names;

pub use deadline::generate_deadline;
pub use names::generate_user;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use task::{TaskGenerator, ASSIGNMENT_THRESHOLD, TASK_DESCRIPTION};
pub use task_names::TaskNamePool;
