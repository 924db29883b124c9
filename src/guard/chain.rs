//! Short-circuit guard chain
//!
//! Steps are closures so that a later guard is never evaluated once an
//! earlier one has denied.

use crate::guard::outcome::{ValidationOutcome, ValidationRequest};

type Step<'a> = Box<dyn FnOnce() -> ValidationOutcome + 'a>;

/// Ordered list of guard steps, evaluated until the first denial.
#[derive(Default)]
pub struct GuardChain<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> GuardChain<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends an arbitrary guard step.
    pub fn then(mut self, step: impl FnOnce() -> ValidationOutcome + 'a) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Appends the guard for a tagged request.
    pub fn request(self, request: ValidationRequest<'a>) -> Self {
        self.then(move || request.check())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the steps in order and returns the first denial, or `Allowed`.
    pub fn evaluate(self) -> ValidationOutcome {
        for step in self.steps {
            let outcome = step();
            if outcome.is_denied() {
                return outcome;
            }
        }
        ValidationOutcome::Allowed
    }
}
