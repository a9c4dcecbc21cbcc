//! Run orchestration: load, discover, execute, finalize

use std::time::Instant;

use marten_engine::{ScriptEngine, SourceUnit};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::RunnerError;
use crate::report::build_xml;
use crate::suite::{RunAggregate, process_suite};

/// Conventional global path of the registered suite list.
pub const TEST_SUITES_PATH: &str = "marten.internal.testSuites";

/// Conventional global path of the entry point that maps a suite handle
/// to its name-to-function map.
pub const GET_TEST_FUNCTIONS_PATH: &str = "marten.internal.getTestFunctions";

/// Fixed output when loading and discovery succeeded but nothing executed.
const NO_TESTS_FOUND: &str = "No tests found.\n";

/// Final outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// True iff loading and every executed test succeeded and at least
    /// one test actually ran.
    pub success: bool,
    /// Human-readable streaming log.
    pub output: String,
    /// JUnit-style XML document. Absent when the run aborted on a load
    /// failure or executed no tests.
    pub xml: Option<String>,
}

impl RunReport {
    /// Serialize the report for machine consumption.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Load `scripts` into one shared context, run every registered test whose
/// name fully matches `filter` (empty means match everything), and render
/// both outputs.
///
/// A load failure terminates the run immediately: its description becomes
/// the report's entire output and no XML is produced. Discovery failures
/// come back as [`RunnerError::Discovery`]; they indicate a harness or
/// registration bug and must not be folded into test results.
pub fn run_tests<E: ScriptEngine>(
    engine: &mut E,
    scripts: &[SourceUnit],
    filter: &str,
) -> Result<RunReport, RunnerError> {
    let pattern = if filter.is_empty() { ".*" } else { filter };
    let filter =
        Regex::new(&format!("^(?:{pattern})$")).map_err(|source| RunnerError::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        })?;

    // Load every script, in caller order, into the shared context.
    for unit in scripts {
        debug!(script = %unit.name, "loading script");
        if let Err(err) = engine.execute(&unit.source, &unit.name) {
            return Ok(RunReport {
                success: false,
                output: format!("{err}\n"),
                xml: None,
            });
        }
    }

    let get_test_functions = engine.resolve(GET_TEST_FUNCTIONS_PATH)?;
    if !engine.is_callable(&get_test_functions) {
        return Err(RunnerError::Discovery(format!(
            "'{GET_TEST_FUNCTIONS_PATH}' is not a function"
        )));
    }

    let suites_value = engine.resolve(TEST_SUITES_PATH)?;
    let suites = engine.elements(&suites_value)?;
    debug!(count = suites.len(), "discovered registered suites");

    // Console output produced while loading scripts or resolving the
    // entry points belongs to no test; discard it so the first test's
    // output starts clean.
    engine.drain_console();

    let mut aggregate = RunAggregate::new();
    let mut output = String::new();
    let started = Instant::now();

    for suite in &suites {
        process_suite(
            engine,
            &filter,
            &get_test_functions,
            suite,
            &mut aggregate,
            &mut output,
        )?;
    }

    let total_ms = started.elapsed().as_millis() as u64;

    output.push_str(if aggregate.success {
        "[  PASSED  ]\n"
    } else {
        "[  FAILED  ]\n"
    });

    // Catches suite mis-registration: a run that executed nothing is a
    // failure, and whatever partial log accumulated is replaced wholesale.
    if aggregate.durations.is_empty() {
        return Ok(RunReport {
            success: false,
            output: NO_TESTS_FOUND.to_string(),
            xml: None,
        });
    }

    let xml = build_xml(
        total_ms,
        &aggregate.tests_run,
        &aggregate.durations,
        &aggregate.failures,
    );

    Ok(RunReport {
        success: aggregate.success,
        output,
        xml: Some(xml),
    })
}
