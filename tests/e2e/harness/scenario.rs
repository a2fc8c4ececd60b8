use super::assertions::Assertion;
use super::runner::ScenarioRunner;
use super::service::{ServiceTarget, StubBehavior};
use super::steps::{BearRef, ScenarioStep};
use alaska_core::{BearType, ReportEntry};

/// Fluent DSL for building test scenarios
pub struct Scenario {
    name: String,
    steps: Vec<ScenarioStep>,
    stub: Option<StubBehavior>,
}

impl Scenario {
    /// Create a new scenario with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
            stub: None,
        }
    }

    /// Run against a stub with the given behavior, even if `ALASKA_BASE_URL` is set
    pub fn against_stub(mut self, behavior: StubBehavior) -> Self {
        self.stub = Some(behavior);
        self
    }

    // ===== User actions =====

    /// User reads the service description
    pub fn user_gets_info(mut self) -> Self {
        self.steps.push(ScenarioStep::UserGetsInfo);
        self
    }

    /// User creates a bear
    pub fn user_creates_bear(mut self, bear_type: BearType, name: &str, age: f64) -> Self {
        self.steps.push(ScenarioStep::UserCreatesBear {
            bear_type,
            name: name.to_string(),
            age,
        });
        self
    }

    /// User replaces a bear's type, name and age
    pub fn user_updates_bear(
        mut self,
        target: BearRef,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Self {
        self.steps.push(ScenarioStep::UserUpdatesBear {
            target,
            bear_type,
            name: name.to_string(),
            age,
        });
        self
    }

    /// User reads one bear
    pub fn user_gets_bear(mut self, target: BearRef) -> Self {
        self.steps.push(ScenarioStep::UserGetsBear { target });
        self
    }

    /// User deletes one bear
    pub fn user_deletes_bear(mut self, target: BearRef) -> Self {
        self.steps.push(ScenarioStep::UserDeletesBear { target });
        self
    }

    /// User deletes every listed bear one at a time
    pub fn user_deletes_each_bear(mut self) -> Self {
        self.steps.push(ScenarioStep::UserDeletesEachBear);
        self
    }

    /// User deletes the whole collection
    pub fn user_cleans_all_bears(mut self) -> Self {
        self.steps.push(ScenarioStep::UserCleansAllBears);
        self
    }

    /// User lists the collection
    pub fn user_views_all_bears(mut self) -> Self {
        self.steps.push(ScenarioStep::UserViewsAllBears);
        self
    }

    // ===== Compound user actions =====

    /// User creates N identical bears
    pub fn user_creates_bears(
        mut self,
        count: usize,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Self {
        for _ in 0..count {
            self = self.user_creates_bear(bear_type, name, age);
        }
        self
    }

    /// User creates one bear of every type
    pub fn user_creates_one_of_each(mut self, name: &str, age: f64) -> Self {
        for bear_type in BearType::ALL {
            self = self.user_creates_bear(bear_type, name, age);
        }
        self
    }

    // ===== Expected failures =====

    /// Step must fail with a status violation carrying `status`
    pub fn expect_status(mut self, step: ScenarioStep, status: u16) -> Self {
        self.steps.push(ScenarioStep::ExpectStatus {
            step: Box::new(step),
            status,
        });
        self
    }

    /// Reading a bear that does not exist must be rejected with 404
    pub fn user_fails_to_get_missing_bear(self) -> Self {
        self.expect_status(
            ScenarioStep::UserGetsBear {
                target: BearRef::Missing,
            },
            404,
        )
    }

    // ===== Assertions =====

    /// Add a general assertion
    pub fn assert(mut self, assertion: Assertion) -> Self {
        self.steps.push(ScenarioStep::Assert { assertion });
        self
    }

    /// Assert the collection holds exactly N bears
    pub fn assert_bear_count(self, count: usize) -> Self {
        self.assert(Assertion::BearCount(count))
    }

    /// Assert the collection is empty
    pub fn assert_no_bears(self) -> Self {
        self.assert(Assertion::NoBears)
    }

    /// Assert the collection holds exactly one bear with these values
    pub fn assert_single_bear(self, bear_type: BearType, name: &str, age: f64) -> Self {
        self.assert(Assertion::SingleBear {
            bear_type,
            name: name.to_string(),
            age,
        })
    }

    /// Assert every listed bear has these values
    pub fn assert_all_bears(self, bear_type: BearType, name: &str, age: f64) -> Self {
        self.assert(Assertion::AllBearsMatch {
            bear_type,
            name: name.to_string(),
            age,
        })
    }

    /// Assert the last bear read with `user_gets_bear` has these values
    pub fn assert_fetched_bear(self, bear_type: BearType, name: &str, age: f64) -> Self {
        self.assert(Assertion::FetchedBear {
            bear_type,
            name: name.to_string(),
            age,
        })
    }

    /// Assert no two listed bears share an id
    pub fn assert_distinct_ids(self) -> Self {
        self.assert(Assertion::DistinctIds)
    }

    /// Assert newly listed bears got ids never observed before
    pub fn assert_fresh_ids(self) -> Self {
        self.assert(Assertion::FreshIds)
    }

    /// Assert the info text contains a fragment
    pub fn assert_info_contains(self, text: &str) -> Self {
        self.assert(Assertion::InfoContains(text.to_string()))
    }

    /// Assert a step with this name was narrated
    pub fn assert_step_narrated(self, name: &str) -> Self {
        self.assert(Assertion::StepNarrated(name.to_string()))
    }

    // ===== Execution =====

    /// Execute the scenario and return results
    pub fn run(self) -> ScenarioResult {
        let runner = match self.stub {
            Some(behavior) => ServiceTarget::stub(behavior).and_then(ScenarioRunner::with_target),
            None => ScenarioRunner::new(),
        };
        let mut runner = match runner {
            Ok(r) => r,
            Err(e) => {
                return ScenarioResult {
                    name: self.name.clone(),
                    success: false,
                    steps_executed: 0,
                    failure_step: Some(0),
                    error: Some(format!("Failed to create runner: {:?}", e)),
                    cleanup_error: None,
                    narration: Vec::new(),
                }
            }
        };

        let outcome = runner.execute(&self.steps);
        let cleanup_error = runner.finish().err().map(|e| format!("{:?}", e));
        let narration = runner.reporter().entries();

        // A cleanup failure after clean steps is reported at index `steps.len()`.
        let (steps_executed, failure_step, error) = match outcome {
            Ok(()) => {
                let n = self.steps.len();
                match &cleanup_error {
                    Some(cleanup) => (n, Some(n), Some(format!("Cleanup failed: {}", cleanup))),
                    None => (n, None, None),
                }
            }
            Err(e) => {
                let step = runner.current_step();
                let error = match &cleanup_error {
                    Some(cleanup) => format!("{:?}\n\nCleanup also failed: {}", e, cleanup),
                    None => format!("{:?}", e),
                };
                (step, Some(step), Some(error))
            }
        };

        ScenarioResult {
            name: self.name,
            success: failure_step.is_none(),
            steps_executed,
            failure_step,
            error,
            cleanup_error,
            narration,
        }
    }
}

/// Result of running a scenario
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub steps_executed: usize,
    pub failure_step: Option<usize>,
    pub error: Option<String>,
    /// Final cleanup error, kept even when a step failed first
    pub cleanup_error: Option<String>,
    pub narration: Vec<ReportEntry>,
}

impl ScenarioResult {
    /// Unwrap the result, panicking if it failed
    pub fn unwrap(self) {
        if !self.success {
            panic!(
                "Scenario '{}' failed at step {}: {}",
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    /// Expect the result to be successful
    pub fn expect(self, msg: &str) {
        if !self.success {
            panic!(
                "{}: Scenario '{}' failed at step {}: {}",
                msg,
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    /// Expect the scenario to fail, returning the error text
    pub fn expect_failure(self) -> String {
        if self.success {
            panic!("Scenario '{}' passed but was expected to fail", self.name);
        }
        self.error.unwrap_or_default()
    }
}
