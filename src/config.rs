use std::path::PathBuf;

pub const DEFAULT_USER_COUNT: i64 = 20;
pub const DEFAULT_TASK_COUNT: i64 = 100;
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

/// Settings for one seeding run. Built from the command line, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// API host, without scheme or port
    pub host: String,
    pub user_count: usize,
    pub task_count: usize,
    pub tasks_file: PathBuf,
    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl SeedConfig {
    pub fn new(host: impl Into<String>, user_count: i64, task_count: i64) -> Self {
        Self {
            host: host.into(),
            user_count: clamp_count(user_count),
            task_count: clamp_count(task_count),
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            seed: None,
        }
    }

    pub fn with_tasks_file(mut self, tasks_file: impl Into<PathBuf>) -> Self {
        self.tasks_file = tasks_file.into();
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Where the run's records end up, for the final summary.
    pub fn target(&self) -> String {
        format!("https://{}", self.host)
    }
}

impl std::fmt::Display for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} users and {} tasks at {}",
            self.user_count,
            self.task_count,
            self.target()
        )
    }
}

/// Negative counts mean "create nothing".
fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}
