//! Suite registration: the ordered sets of fixtures and test cases a run
//! driver executes.
//!
//! Registration order is execution order, both for fixtures (setup walks the
//! list forward, teardown walks it backward) and for cases.

use std::fmt;

use crate::errors::CaseFailure;
use crate::fixture::GlobalFixture;

/// Outcome of a test-case body: `Ok(())` passes, `Err` fails.
pub type CaseResult = Result<(), CaseFailure>;

/// A named test case with a boxed body.
///
/// Bodies are `FnMut` so a suite can be run more than once; an empty body
/// that returns `Ok(())` immediately reports as passed.
pub struct TestCase {
    name: String,
    body: Box<dyn FnMut() -> CaseResult>,
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&mut self) -> CaseResult {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// A named, ordered collection of global fixtures and test cases.
pub struct Suite {
    name: String,
    fixtures: Vec<Box<dyn GlobalFixture>>,
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixtures: Vec::new(),
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a global fixture. Fixtures set up in registration order.
    pub fn register_fixture(&mut self, fixture: impl GlobalFixture + 'static) {
        self.fixtures.push(Box::new(fixture));
    }

    /// Registers a test case. Cases execute in registration order.
    pub fn register_case(
        &mut self,
        name: impl Into<String>,
        body: impl FnMut() -> CaseResult + 'static,
    ) {
        self.cases.push(TestCase {
            name: name.into(),
            body: Box::new(body),
        });
    }

    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Case names in registration (and therefore execution) order.
    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.name())
    }

    pub(crate) fn fixtures_mut(&mut self) -> &mut [Box<dyn GlobalFixture>] {
        &mut self.fixtures
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("fixtures", &self.fixtures.len())
            .field("cases", &self.cases.len())
            .finish()
    }
}
