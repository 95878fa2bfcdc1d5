use chrono::NaiveDate;

use crate::api::{Assignment, NewTask};
use crate::generator::deadline::generate_deadline;
use crate::generator::random::RandomSource;
use crate::generator::task_names::TaskNamePool;
use crate::roster::UserRoster;

pub const TASK_DESCRIPTION: &str = "It is a long established fact that a reader will be distracted by the readable content of a page when looking at its layout. The point of using Lorem Ipsum is that it has a more-or-less normal distribution of letters, as opposed to using 'Content here, content here', making it look like readable English.";

/// A task is assigned when a draw in `0..=99` falls below this.
pub const ASSIGNMENT_THRESHOLD: u32 = 60;

/// Produces task payloads for the tasks phase.
pub struct TaskGenerator<'a> {
    names: &'a TaskNamePool,
    roster: &'a UserRoster,
    today: NaiveDate,
}

impl<'a> TaskGenerator<'a> {
    pub fn new(names: &'a TaskNamePool, roster: &'a UserRoster, today: NaiveDate) -> Self {
        Self {
            names,
            roster,
            today,
        }
    }

    /// Draw one task.
    ///
    /// Draw order: name, deadline (days, hour, minute, second), completed,
    /// assignment roll, and the user index only when the task gets assigned.
    pub fn generate(&self, rng: &mut impl RandomSource) -> NewTask {
        let name = self.names.pick(rng).to_string();
        let deadline = generate_deadline(rng, self.today);
        let completed = rng.next_bool();
        let assignment = self.assignment(rng);

        NewTask {
            name,
            description: TASK_DESCRIPTION.to_string(),
            deadline,
            completed,
            assignment,
        }
    }

    fn assignment(&self, rng: &mut impl RandomSource) -> Option<Assignment> {
        let roll = rng.next_in_range(0, 99);
        if roll >= ASSIGNMENT_THRESHOLD || self.roster.is_empty() {
            return None;
        }

        let user = self.roster.get(rng.pick_index(self.roster.len()))?;
        Some(Assignment {
            user_id: user.id.clone(),
            user_name: user.display_name.clone(),
        })
    }
}
