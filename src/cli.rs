use std::path::PathBuf;

use clap::Parser;

use crate::config::{SeedConfig, DEFAULT_TASKS_FILE, DEFAULT_TASK_COUNT, DEFAULT_USER_COUNT};

#[derive(Parser, Debug, Clone)]
#[command(name = "seed", version)]
#[command(about = "Populate a task-tracker API with random users and tasks")]
#[command(after_help = "Example: seed -u \"myapp.onrender.com\" -n 20 -t 100")]
pub struct Args {
    /// API host, without scheme or port (e.g. myapp.onrender.com)
    #[arg(short = 'u', long = "url", value_name = "HOST", value_parser = parse_host)]
    pub url: String,

    /// Number of users to create
    #[arg(short = 'n', long = "users", default_value_t = DEFAULT_USER_COUNT, allow_negative_numbers = true)]
    pub users: i64,

    /// Number of tasks to create
    #[arg(short = 't', long = "tasks", default_value_t = DEFAULT_TASK_COUNT, allow_negative_numbers = true)]
    pub tasks: i64,

    /// Newline-separated list of task names
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TASKS_FILE)]
    pub tasks_file: PathBuf,

    /// Seed the random generator to make the generated records reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the ids of existing users and exit without seeding
    #[arg(long)]
    pub list_users: bool,

    /// Also write logs to seed.log in the data directory
    #[arg(long)]
    pub log_file: bool,
}

impl Args {
    pub fn to_config(&self) -> SeedConfig {
        SeedConfig::new(self.url.clone(), self.users, self.tasks)
            .with_tasks_file(self.tasks_file.clone())
            .with_seed(self.seed)
    }
}

fn parse_host(value: &str) -> Result<String, String> {
    let host = value.trim();
    if host.is_empty() {
        return Err("base url is required".to_string());
    }
    Ok(host.to_string())
}
