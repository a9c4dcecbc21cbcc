//! # Marten Test Runner
//!
//! Orchestration and reporting core for the Marten JavaScript test
//! harness. Given an ordered set of named scripts and a name filter, it
//! loads the scripts into one shared engine context, discovers registered
//! suites by convention, runs each test in isolation, and renders a
//! streaming human-readable log plus a JUnit-style XML report.
//!
//! The engine itself is pluggable: anything implementing
//! [`marten_engine::ScriptEngine`] can back a run.

#![warn(clippy::all)]

pub mod case;
pub mod error;
pub mod report;
pub mod run;
pub mod suite;

#[cfg(test)]
pub(crate) mod testutil;

pub use case::{CaseResult, run_test_case};
pub use error::RunnerError;
pub use report::build_xml;
pub use run::{GET_TEST_FUNCTIONS_PATH, RunReport, TEST_SUITES_PATH, run_tests};
pub use suite::{RunAggregate, process_suite};
