use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::SeedError;
use crate::generator::random::RandomSource;

/// Candidate task names, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNamePool {
    names: Vec<String>,
}

impl TaskNamePool {
    /// Read a newline-separated list of names from `path`.
    ///
    /// Lines are trimmed and blank lines skipped. A missing file or one with
    /// no names is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SeedError::TaskNames {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::from_lines(&content)
            .ok_or_else(|| SeedError::EmptyTaskNames(path.to_path_buf()))?;

        info!("Loaded {} task names from {}", pool.names.len(), path.display());
        Ok(pool)
    }

    /// Build a pool from newline-separated names. `None` if no line holds a
    /// name.
    pub fn from_lines(content: &str) -> Option<Self> {
        let names: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return None;
        }
        Some(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Uniformly chosen name. Pools are never empty.
    pub fn pick(&self, rng: &mut impl RandomSource) -> &str {
        &self.names[rng.pick_index(self.names.len())]
    }
}
