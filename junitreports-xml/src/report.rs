// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, serialize::serialize_class_report};
use chrono::{DateTime, Utc};
use std::io;

/// The identifier written into the `Generated by` comment when none is set.
pub const DEFAULT_GENERATOR: &str = "junitreports";

/// The JUnit report for a single test class.
///
/// This is the root `testsuite` element of a `TEST-<class name>.xml` document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassReport {
    /// The fully qualified name of the class.
    pub name: String,

    /// The identifier written into the leading `Generated by` comment.
    pub generator: String,

    /// The time at which the report was generated.
    ///
    /// This is serialized in the legacy GMT string form, e.g. `18 Oct 2026 09:05:03 GMT`.
    pub timestamp: DateTime<Utc>,

    /// The host the report was generated on, if it could be determined.
    pub hostname: Option<String>,

    /// The total number of test cases in this class.
    pub tests: usize,

    /// The number of test cases reported under the `failure` tag.
    pub failures: usize,

    /// The number of test cases reported under the `error` tag.
    pub errors: usize,

    /// The sum of the elapsed times of all test cases, in milliseconds.
    pub time_millis: u64,

    /// The test cases, in the order they are serialized.
    pub test_cases: Vec<TestCaseRecord>,
}

impl ClassReport {
    /// Creates a new, empty `ClassReport` for the given class.
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            generator: DEFAULT_GENERATOR.to_owned(),
            timestamp,
            hostname: None,
            tests: 0,
            failures: 0,
            errors: 0,
            time_millis: 0,
            test_cases: vec![],
        }
    }

    /// Sets the identifier written into the `Generated by` comment.
    pub fn set_generator(&mut self, generator: impl Into<String>) -> &mut Self {
        self.generator = generator.into();
        self
    }

    /// Sets the hostname attribute.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Adds a test case and updates the counts and the total time.
    ///
    /// When generating a new report, use of this method is recommended over adding to
    /// `self.test_cases` directly.
    pub fn add_test_case(&mut self, test_case: TestCaseRecord) -> &mut Self {
        self.tests += 1;
        match &test_case.status {
            TestCaseStatus::Success => {}
            TestCaseStatus::NonSuccess { kind, .. } => match kind {
                NonSuccessKind::Failure => self.failures += 1,
                NonSuccessKind::Error => self.errors += 1,
            },
        }
        self.time_millis = self.time_millis.saturating_add(test_case.time_millis);
        self.test_cases.push(test_case);
        self
    }

    /// Adds several test cases and updates the counts and the total time.
    pub fn add_test_cases(
        &mut self,
        test_cases: impl IntoIterator<Item = TestCaseRecord>,
    ) -> &mut Self {
        for test_case in test_cases {
            self.add_test_case(test_case);
        }
        self
    }

    /// Returns the number of test cases that succeeded.
    pub fn successes(&self) -> usize {
        self.tests - self.failures - self.errors
    }

    /// Returns the name of the file this report is written to: `TEST-<class name>.xml`.
    pub fn file_name(&self) -> String {
        format!("TEST-{}.xml", self.name)
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_class_report(self, writer)?;
        Ok(())
    }

    /// Serialize this report to a string.
    pub fn to_xml_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// A single `testcase` element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestCaseRecord {
    /// The class that declares the test method.
    pub classname: String,

    /// The name of the test method.
    pub name: String,

    /// The time it took to execute this test case, in milliseconds.
    pub time_millis: u64,

    /// Whether this test case succeeded, and if not, how it is reported.
    pub status: TestCaseStatus,
}

impl TestCaseRecord {
    /// Creates a new test case with a zero elapsed time.
    pub fn new(
        classname: impl Into<String>,
        name: impl Into<String>,
        status: TestCaseStatus,
    ) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            time_millis: 0,
            status,
        }
    }

    /// Sets the time taken for the test case, in milliseconds.
    pub fn set_time_millis(&mut self, time_millis: u64) -> &mut Self {
        self.time_millis = time_millis;
        self
    }
}

/// Represents the success or failure of a test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestCaseStatus {
    /// The test case passed. Serialized as an empty `testcase` element.
    Success,

    /// The test case did not pass.
    NonSuccess {
        /// The tag the test case is reported under.
        kind: NonSuccessKind,

        /// The details of the throwable that explains the result.
        ///
        /// `None` if no cause could be found. The test case is still counted under `kind`,
        /// but it is serialized as an empty `testcase` element.
        detail: Option<FailureDetail>,
    },
}

impl TestCaseStatus {
    /// Creates a new `TestCaseStatus` for an unsuccessful test with the given details.
    pub fn non_success(kind: NonSuccessKind, detail: Option<FailureDetail>) -> Self {
        TestCaseStatus::NonSuccess { kind, detail }
    }

    /// Returns true if this represents a successful test.
    pub fn is_success(&self) -> bool {
        matches!(self, TestCaseStatus::Success)
    }

    /// Returns the failure details, if any.
    pub fn detail(&self) -> Option<&FailureDetail> {
        match self {
            TestCaseStatus::Success => None,
            TestCaseStatus::NonSuccess { detail, .. } => detail.as_ref(),
        }
    }
}

/// The tag an unsuccessful test case is reported under.
///
/// Note that the meaning of the two tags is the reverse of the common JUnit convention:
/// consumers of these reports expect assertion failures under `error`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NonSuccessKind {
    /// Any throwable that is not an assertion failure, or no throwable at all. Serialized as
    /// `failure`.
    Failure,

    /// An assertion or verification failure. Serialized as `error`.
    Error,
}

impl NonSuccessKind {
    /// Returns the name of the XML element this kind is serialized as.
    pub fn tag_name(self) -> &'static str {
        match self {
            NonSuccessKind::Failure => "failure",
            NonSuccessKind::Error => "error",
        }
    }
}

/// The throwable details attached to an unsuccessful test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailureDetail {
    /// The fully qualified type name of the throwable.
    pub ty: String,

    /// The throwable's message, if any.
    pub message: Option<String>,

    /// The rendered stack trace. Serialized as CDATA.
    pub stack_trace: String,
}

impl FailureDetail {
    /// Creates a new `FailureDetail`, removing characters that cannot appear in XML from the
    /// stack trace.
    pub fn new(ty: impl Into<String>, stack_trace: impl AsRef<str>) -> Self {
        Self {
            ty: ty.into(),
            message: None,
            stack_trace: strip_invalid_chars(stack_trace.as_ref()),
        }
    }

    /// Sets the message.
    pub fn set_message(&mut self, message: impl AsRef<str>) -> &mut Self {
        self.message = Some(strip_invalid_chars(message.as_ref()));
        self
    }
}

fn strip_invalid_chars(text: &str) -> String {
    text.replace(
        |c| matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f'),
        "",
    )
}
