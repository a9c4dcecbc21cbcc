//! Single test case execution

use std::time::Instant;

use marten_engine::ScriptEngine;
use serde::Serialize;

/// Result of running one test function
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    /// Whether the test completed without throwing
    pub succeeded: bool,
    /// Console-style output the test produced, passed through verbatim
    pub output: String,
    /// Captured exception text if the test threw, whitespace-trimmed
    pub failure_message: Option<String>,
    /// Wall-clock time across the invocation only
    pub duration_ms: u64,
}

/// Run one test function with no arguments.
///
/// A throwing test is fully absorbed here: the captured exception becomes
/// `failure_message` and never reaches the caller. This is the isolation
/// boundary between tests.
pub fn run_test_case<E: ScriptEngine>(engine: &mut E, function: &E::Value) -> CaseResult {
    let start = Instant::now();
    let invoked = engine.invoke(function, &[], None);
    let duration_ms = start.elapsed().as_millis() as u64;

    let output = engine.drain_console();

    match invoked {
        Ok(_) => CaseResult {
            succeeded: true,
            output,
            failure_message: None,
            duration_ms,
        },
        Err(thrown) => CaseResult {
            succeeded: false,
            output,
            failure_message: Some(thrown.message.trim().to_string()),
            duration_ms,
        },
    }
}
