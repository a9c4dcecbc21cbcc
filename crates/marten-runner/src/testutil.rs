//! Scripted in-memory engine for exercising the runner without a real
//! JavaScript engine.

use marten_engine::{EngineError, LoadError, ScriptEngine, ThrownError};

/// What a fake test does when invoked.
#[derive(Debug, Clone)]
pub enum Behavior {
    Pass,
    Throw(&'static str),
    /// Registered under a test name but not actually a function.
    NotCallable,
}

#[derive(Debug, Clone)]
pub struct FakeTest {
    pub name: &'static str,
    pub behavior: Behavior,
    pub console: &'static str,
}

impl FakeTest {
    pub fn passing(name: &'static str) -> Self {
        Self {
            name,
            behavior: Behavior::Pass,
            console: "",
        }
    }

    pub fn throwing(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            behavior: Behavior::Throw(message),
            console: "",
        }
    }

    pub fn not_callable(name: &'static str) -> Self {
        Self {
            name,
            behavior: Behavior::NotCallable,
            console: "",
        }
    }

    pub fn with_console(mut self, console: &'static str) -> Self {
        self.console = console;
        self
    }
}

/// Opaque handle type handed back to the runner.
#[derive(Debug, Clone)]
pub enum FakeValue {
    Undefined,
    GetTestFunctions,
    SuiteList,
    Suite(usize),
    FunctionMap(usize),
    Key(usize, usize),
    Function(usize, usize),
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    suites: Vec<Vec<FakeTest>>,
    fail_load: Option<&'static str>,
    drop_entry_points: bool,
    load_console: &'static str,
    console: String,
    /// Labels passed to `execute`, in order.
    pub loaded: Vec<String>,
    /// Number of `resolve` calls observed.
    pub resolve_calls: usize,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suite(mut self, tests: Vec<FakeTest>) -> Self {
        self.suites.push(tests);
        self
    }

    /// Make `execute` fail for the script with this label.
    pub fn failing_load(mut self, label: &'static str) -> Self {
        self.fail_load = Some(label);
        self
    }

    /// Simulate a harness that never registered its entry points.
    pub fn without_entry_points(mut self) -> Self {
        self.drop_entry_points = true;
        self
    }

    /// Emit console output from every script's top-level evaluation.
    pub fn with_load_console(mut self, console: &'static str) -> Self {
        self.load_console = console;
        self
    }

    fn test(&self, suite: usize, index: usize) -> &FakeTest {
        &self.suites[suite][index]
    }
}

impl ScriptEngine for FakeEngine {
    type Value = FakeValue;

    fn execute(&mut self, _source: &str, label: &str) -> Result<FakeValue, LoadError> {
        self.loaded.push(label.to_string());
        self.console.push_str(self.load_console);
        if self.fail_load == Some(label) {
            return Err(LoadError::new(label, "SyntaxError: unexpected token"));
        }
        Ok(FakeValue::Undefined)
    }

    fn resolve(&mut self, path: &str) -> Result<FakeValue, EngineError> {
        self.resolve_calls += 1;
        if self.drop_entry_points {
            return Err(EngineError::unresolved(path));
        }
        match path {
            crate::run::GET_TEST_FUNCTIONS_PATH => Ok(FakeValue::GetTestFunctions),
            crate::run::TEST_SUITES_PATH => Ok(FakeValue::SuiteList),
            _ => Err(EngineError::unresolved(path)),
        }
    }

    fn invoke(
        &mut self,
        function: &FakeValue,
        args: &[FakeValue],
        _receiver: Option<&FakeValue>,
    ) -> Result<FakeValue, ThrownError> {
        match function {
            FakeValue::GetTestFunctions => match args {
                [FakeValue::Suite(index)] => Ok(FakeValue::FunctionMap(*index)),
                _ => Err(ThrownError::new("TypeError: not a test suite")),
            },
            FakeValue::Function(suite, index) => {
                let test = self.test(*suite, *index).clone();
                self.console.push_str(test.console);
                match test.behavior {
                    Behavior::Pass | Behavior::NotCallable => Ok(FakeValue::Undefined),
                    Behavior::Throw(message) => Err(ThrownError::new(message)),
                }
            }
            _ => Err(ThrownError::new("TypeError: not a function")),
        }
    }

    fn property_names(&mut self, object: &FakeValue) -> Result<Vec<FakeValue>, EngineError> {
        match object {
            FakeValue::FunctionMap(suite) => Ok((0..self.suites[*suite].len())
                .map(|index| FakeValue::Key(*suite, index))
                .collect()),
            _ => Err(EngineError::unexpected_shape("not an object")),
        }
    }

    fn get_property(
        &mut self,
        object: &FakeValue,
        key: &FakeValue,
    ) -> Result<FakeValue, EngineError> {
        match (object, key) {
            (FakeValue::FunctionMap(suite), FakeValue::Key(key_suite, index))
                if suite == key_suite =>
            {
                Ok(FakeValue::Function(*suite, *index))
            }
            _ => Err(EngineError::unexpected_shape("no such property")),
        }
    }

    fn elements(&mut self, array: &FakeValue) -> Result<Vec<FakeValue>, EngineError> {
        match array {
            FakeValue::SuiteList => Ok((0..self.suites.len()).map(FakeValue::Suite).collect()),
            _ => Err(EngineError::unexpected_shape("not an array")),
        }
    }

    fn is_callable(&self, value: &FakeValue) -> bool {
        match value {
            FakeValue::GetTestFunctions => true,
            FakeValue::Function(suite, index) => {
                !matches!(self.test(*suite, *index).behavior, Behavior::NotCallable)
            }
            _ => false,
        }
    }

    fn display_string(&mut self, value: &FakeValue) -> String {
        match value {
            FakeValue::Key(suite, index) => self.test(*suite, *index).name.to_string(),
            FakeValue::Undefined => "undefined".to_string(),
            other => format!("{other:?}"),
        }
    }

    fn drain_console(&mut self) -> String {
        std::mem::take(&mut self.console)
    }
}
