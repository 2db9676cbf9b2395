//! Filter term and its cooperative recomputation task.
//!
//! Recomputation is a placeholder: the task waits out its delay and then
//! completes without hiding any record. Which records a filter should hide,
//! and how it should treat records that arrive later, is still undecided.

use super::search::LiteralMatcher;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default delay before a filter task completes.
pub const DEFAULT_FILTER_DELAY: Duration = Duration::from_millis(300);

/// A pending recomputation for one filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTask {
    term: String,
    deadline: Instant,
}

impl FilterTask {
    /// Term the task was started for.
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Result of polling the filter task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterProgress {
    /// No task scheduled.
    Idle,
    /// Task still waiting for its deadline.
    Pending,
    /// Task finished this poll.
    Completed {
        /// Term the finished task was started for.
        term: String,
    },
}

/// Active filter term and at most one pending task.
#[derive(Debug, Clone)]
pub struct FilterState {
    matcher: Option<LiteralMatcher>,
    task: Option<FilterTask>,
    delay: Duration,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_DELAY)
    }
}

impl FilterState {
    /// Create with the given task delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            matcher: None,
            task: None,
            delay,
        }
    }

    /// Set a new filter and schedule its task, replacing any pending one.
    pub fn start(&mut self, matcher: LiteralMatcher, now: Instant) {
        if let Some(previous) = self.task.take() {
            debug!(term = previous.term(), "superseded pending filter task");
        }
        info!(term = matcher.term(), delay_ms = self.delay.as_millis() as u64, "filter scheduled");
        self.task = Some(FilterTask {
            term: matcher.term().to_string(),
            deadline: now + self.delay,
        });
        self.matcher = Some(matcher);
    }

    /// Advance the pending task.
    pub fn poll(&mut self, now: Instant) -> FilterProgress {
        match &self.task {
            None => FilterProgress::Idle,
            Some(task) if now < task.deadline => FilterProgress::Pending,
            Some(_) => {
                let term = self.task.take().map(|t| t.term).unwrap_or_default();
                info!(term = %term, "filter finished; hiding records is not implemented");
                FilterProgress::Completed { term }
            }
        }
    }

    /// Active filter term, if any.
    pub fn term(&self) -> Option<&str> {
        self.matcher.as_ref().map(LiteralMatcher::term)
    }

    /// The pending task, if any.
    pub fn pending(&self) -> Option<&FilterTask> {
        self.task.as_ref()
    }
}
