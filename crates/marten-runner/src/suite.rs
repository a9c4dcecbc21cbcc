//! Suite processing: enumeration, filtering, per-test bookkeeping

use std::collections::HashMap;
use std::fmt::Write;

use marten_engine::ScriptEngine;
use regex::Regex;
use tracing::debug;

use crate::case::run_test_case;
use crate::error::RunnerError;

/// Marker emitted before and after every suite, matched or not.
const SUITE_DELIMITER: &str = "[----------]\n";

/// Results accumulated across a whole run.
#[derive(Debug, Clone)]
pub struct RunAggregate {
    /// Test names in execution order; may repeat across suites.
    pub tests_run: Vec<String>,
    /// Duration in seconds per executed test. A name is present here iff
    /// the test actually ran (filtered-out tests never appear).
    pub durations: HashMap<String, f64>,
    /// Trimmed failure text per failed test. Keys are a subset of
    /// `durations` keys.
    pub failures: HashMap<String, String>,
    /// True until any test fails; never flips back within a run.
    pub success: bool,
}

impl RunAggregate {
    pub fn new() -> Self {
        Self {
            tests_run: Vec::new(),
            durations: HashMap::new(),
            failures: HashMap::new(),
            success: true,
        }
    }
}

impl Default for RunAggregate {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every test in `suite` whose full name matches `filter`.
///
/// `get_test_functions` is the discovery entry point; it is invoked with
/// the suite handle to obtain the suite's name-to-function map. Keys are
/// visited in the engine's enumeration order. Log lines are appended to
/// `output` as each test runs.
pub fn process_suite<E: ScriptEngine>(
    engine: &mut E,
    filter: &Regex,
    get_test_functions: &E::Value,
    suite: &E::Value,
    aggregate: &mut RunAggregate,
    output: &mut String,
) -> Result<(), RunnerError> {
    output.push_str(SUITE_DELIMITER);

    // An exception out of the discovery entry point is a harness bug, not
    // a test failure.
    let functions = engine
        .invoke(get_test_functions, std::slice::from_ref(suite), None)
        .map_err(|thrown| {
            RunnerError::Discovery(format!("retrieving test functions threw: {thrown}"))
        })?;

    for key in engine.property_names(&functions)? {
        let name = engine.display_string(&key);
        if !filter.is_match(&name) {
            continue;
        }

        let function = engine.get_property(&functions, &key)?;
        if !engine.is_callable(&function) {
            return Err(RunnerError::Discovery(format!(
                "registered test '{name}' is not a function"
            )));
        }

        debug!(test = %name, "running test");
        aggregate.tests_run.push(name.clone());
        let _ = writeln!(output, "[ RUN      ] {name}");

        let result = run_test_case(engine, &function);

        let status = if result.succeeded {
            "[       OK ]"
        } else {
            "[  FAILED  ]"
        };
        let _ = writeln!(
            output,
            "{}{} {} ({} ms)",
            result.output, status, name, result.duration_ms
        );

        aggregate
            .durations
            .insert(name.clone(), result.duration_ms as f64 / 1000.0);
        if let Some(message) = result.failure_message {
            aggregate.success = false;
            aggregate.failures.insert(name, message);
        }
    }

    output.push_str(SUITE_DELIMITER);
    output.push('\n');

    Ok(())
}
