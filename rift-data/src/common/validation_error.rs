use std::fmt::Display;

use thiserror::Error;

/// An error resulting from some validation process.
///
/// Collects every problem found instead of stopping at the first one, so callers can report the
/// full list back to whoever produced the data.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// Creates an empty validation error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new problem.
    pub fn add<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into());
    }

    /// Records all problems from another validation error, prefixed with the given context.
    pub fn extend_with_context<C>(&mut self, context: C, other: ValidationError)
    where
        C: Display,
    {
        self.problems.extend(
            other
                .problems
                .into_iter()
                .map(|problem| format!("{context}: {problem}")),
        );
    }

    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Converts the error into a result, which is only an error if at least one problem was
    /// recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}
