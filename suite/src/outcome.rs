use std::fmt;

/// A point in a scenario where a status is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GetAll,
    Create,
    Fetch,
    Update,
    Delete,
    Verify,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::GetAll => "get all",
            Step::Create => "create",
            Step::Fetch => "fetch",
            Step::Update => "update",
            Step::Delete => "delete",
            Step::Verify => "verify",
        };
        f.write_str(name)
    }
}

/// How a scenario ended when no assertion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The service answered `status` at `step`; the remaining steps were
    /// skipped.
    ShortCircuited { step: Step, status: u16 },
}

impl Outcome {
    pub(crate) fn skip(step: Step, status: u16) -> Self {
        tracing::info!(%step, status, "unexpected status, skipping remaining steps");
        Outcome::ShortCircuited { step, status }
    }
}
