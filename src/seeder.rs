use std::io::Write;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::api::SeedApi;
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::generator::{generate_user, RandomSource, TaskGenerator, TaskNamePool};
use crate::roster::{GeneratedUser, UserRoster};

/// Task names longer than this are cut short in progress output.
const PROGRESS_NAME_WIDTH: usize = 50;

/// Upper bound on the roster's up-front reservation; it grows past this one
/// created user at a time.
const ROSTER_RESERVE_LIMIT: usize = 1024;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_created: usize,
    pub tasks_created: usize,
    pub tasks_assigned: usize,
}

/// Drives the users phase and then the tasks phase against a [`SeedApi`].
pub struct Seeder<'a, R> {
    task_names: &'a TaskNamePool,
    rng: R,
    today: NaiveDate,
}

impl<'a, R: RandomSource> Seeder<'a, R> {
    pub fn new(task_names: &'a TaskNamePool, rng: R) -> Self {
        Self {
            task_names,
            rng,
            today: Utc::now().date_naive(),
        }
    }

    /// Date deadlines are counted from. Defaults to the current UTC date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Create `config.user_count` users, then `config.task_count` tasks.
    ///
    /// Stops at the first failed request; records already created stay on
    /// the server.
    pub async fn run<A: SeedApi>(
        &mut self,
        api: &A,
        config: &SeedConfig,
    ) -> Result<SeedSummary, SeedError> {
        let roster = self.seed_users(api, config.user_count).await?;
        let tasks_assigned = self.seed_tasks(api, &roster, config.task_count).await?;

        Ok(SeedSummary {
            users_created: roster.len(),
            tasks_created: config.task_count,
            tasks_assigned,
        })
    }

    pub async fn seed_users<A: SeedApi>(
        &mut self,
        api: &A,
        count: usize,
    ) -> Result<UserRoster, SeedError> {
        info!("Creating {} users...", count);

        let mut users = Vec::with_capacity(count.min(ROSTER_RESERVE_LIMIT));
        for i in 0..count {
            let user = generate_user(&mut self.rng);
            let id = api.create_user(&user).await?;
            info!("  Created user {}/{}: {}", i + 1, count, user.name);

            users.push(GeneratedUser {
                id,
                display_name: user.name,
                email: user.email,
            });
        }

        Ok(UserRoster::new(users))
    }

    /// Create `count` tasks, assigning some to users from `roster`.
    ///
    /// Returns how many of the created tasks were assigned.
    pub async fn seed_tasks<A: SeedApi>(
        &mut self,
        api: &A,
        roster: &UserRoster,
        count: usize,
    ) -> Result<usize, SeedError> {
        info!("Creating {} tasks...", count);

        let generator = TaskGenerator::new(self.task_names, roster, self.today);
        let mut assigned = 0;
        for i in 0..count {
            let task = generator.generate(&mut self.rng);
            api.create_task(&task).await?;

            if task.assignment.is_some() {
                assigned += 1;
            }
            info!(
                "  Created task {}/{}: {}...",
                i + 1,
                count,
                truncate(&task.name, PROGRESS_NAME_WIDTH)
            );
        }

        Ok(assigned)
    }
}

/// Write the id of every stored user to `out`, one per line.
///
/// Returns how many ids were written.
pub async fn write_user_ids<A: SeedApi>(
    api: &A,
    out: &mut impl Write,
) -> Result<usize, SeedError> {
    let ids = api.list_user_ids().await?;
    for id in &ids {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(ids.len())
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
