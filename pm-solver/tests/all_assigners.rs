#![allow(unused_macros, dead_code)]
use pm_core::{models::Config, ports::Assigner};
use pm_solver::{SolveError, exact::ExactAssigner, local::LocalSearch};
use rstest_reuse::template;

// Assigners are built per test from the test's config, so the template
// injects a constructor rather than an instance.
pub trait Factory {
    type Output: Assigner<Error = SolveError>;

    fn build(&self, config: Config) -> Self::Output;
}

impl<A: Assigner<Error = SolveError>, F: Fn(Config) -> A> Factory for F {
    type Output = A;

    fn build(&self, config: Config) -> A {
        self(config)
    }
}

pub fn local(config: Config) -> LocalSearch {
    LocalSearch::seeded(config, 42)
}

pub fn exact(config: Config) -> ExactAssigner {
    ExactAssigner::with_config(config)
}

// This creates a testing "template" to allow for the injection of each
// assigner implementation

#[template]
#[rstest]
#[case::local(all_assigners::local)]
#[case::exact(all_assigners::exact)]
pub fn all_assigners(#[case] assigner: impl all_assigners::Factory) {}
