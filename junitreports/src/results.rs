// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Results of a finished test run, as collected by the test engine.
//!
//! These types are consumed read-only. They can be built in memory or deserialized from JSON.

use crate::throwable::Throwable;
use serde::{Deserialize, Serialize};

/// The results of one executed suite.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SuiteResult {
    /// The name of the suite.
    pub name: String,

    /// The test contexts executed as part of this suite.
    #[serde(default)]
    pub contexts: Vec<TestContext>,
}

impl SuiteResult {
    /// Creates a new suite with no contexts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contexts: vec![],
        }
    }

    /// Adds a test context to this suite.
    pub fn add_context(&mut self, context: TestContext) -> &mut Self {
        self.contexts.push(context);
        self
    }
}

/// The results of one test context within a suite.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestContext {
    /// The name of the context.
    pub name: String,

    /// Test methods that passed.
    #[serde(default)]
    pub passed_tests: Vec<TestResult>,

    /// Test methods that failed.
    #[serde(default)]
    pub failed_tests: Vec<TestResult>,

    /// Test methods that were skipped.
    #[serde(default)]
    pub skipped_tests: Vec<TestResult>,

    /// Setup and teardown methods that failed.
    #[serde(default)]
    pub failed_configurations: Vec<TestResult>,
}

impl TestContext {
    /// Creates a new, empty context.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a test result to the set matching its status.
    pub fn add_test_result(&mut self, result: TestResult) -> &mut Self {
        match result.status {
            TestStatus::Success => self.passed_tests.push(result),
            TestStatus::Failure => self.failed_tests.push(result),
            TestStatus::Skip => self.skipped_tests.push(result),
        }
        self
    }

    /// Adds a failed setup or teardown method.
    pub fn add_failed_configuration(&mut self, result: TestResult) -> &mut Self {
        self.failed_configurations.push(result);
        self
    }

    /// Iterates over all test results: passed, then failed, then skipped.
    pub fn test_results(&self) -> impl Iterator<Item = &TestResult> {
        self.passed_tests
            .iter()
            .chain(&self.failed_tests)
            .chain(&self.skipped_tests)
    }
}

/// A test or configuration method.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestMethod {
    /// The fully qualified name of the class that declares this method.
    pub class_name: String,

    /// The name of the method.
    pub method_name: String,
}

impl TestMethod {
    /// Creates a new `TestMethod`.
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }
}

/// The outcome of executing a method.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    /// The method passed.
    Success,

    /// The method failed.
    Failure,

    /// The method was not run.
    Skip,
}

/// The result of executing a single test or configuration method.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestResult {
    /// The method that was executed.
    pub method: TestMethod,

    /// The outcome.
    pub status: TestStatus,

    /// The start time, in milliseconds since the epoch.
    #[serde(default)]
    pub start_millis: u64,

    /// The end time, in milliseconds since the epoch.
    #[serde(default)]
    pub end_millis: u64,

    /// The throwable captured while executing the method, if any.
    #[serde(default)]
    pub throwable: Option<Throwable>,
}

impl TestResult {
    /// Creates a new result with zero timestamps and no throwable.
    pub fn new(method: TestMethod, status: TestStatus) -> Self {
        Self {
            method,
            status,
            start_millis: 0,
            end_millis: 0,
            throwable: None,
        }
    }

    /// Sets the start and end timestamps, in milliseconds.
    pub fn set_times(&mut self, start_millis: u64, end_millis: u64) -> &mut Self {
        self.start_millis = start_millis;
        self.end_millis = end_millis;
        self
    }

    /// Sets the captured throwable.
    pub fn set_throwable(&mut self, throwable: Throwable) -> &mut Self {
        self.throwable = Some(throwable);
        self
    }

    /// Returns the name of the class that declares the method.
    pub fn class_name(&self) -> &str {
        &self.method.class_name
    }

    /// Returns true if the method passed.
    pub fn is_success(&self) -> bool {
        self.status == TestStatus::Success
    }

    /// Returns the elapsed time in milliseconds.
    ///
    /// An end timestamp before the start timestamp is reported as zero.
    pub fn elapsed_millis(&self) -> u64 {
        self.end_millis.saturating_sub(self.start_millis)
    }
}
