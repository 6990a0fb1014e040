// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Building the report for a single class.

use crate::{
    resolver::ThrowableResolver,
    results::TestResult,
    throwable::{Throwable, ThrowableKind},
};
use chrono::{DateTime, Utc};
use junitreports_xml::{
    ClassReport, DEFAULT_GENERATOR, FailureDetail, NonSuccessKind, TestCaseRecord, TestCaseStatus,
};
use std::cmp::Ordering;

/// Builds [`ClassReport`]s from grouped test results.
///
/// The same builder is used for every class of a run, so that all reports share a timestamp and
/// a hostname.
#[derive(Clone, Debug)]
pub struct ClassReportBuilder<'r, 'a> {
    resolver: &'r ThrowableResolver<'a>,
    generator: &'r str,
    timestamp: DateTime<Utc>,
    hostname: Option<&'r str>,
}

impl<'r, 'a> ClassReportBuilder<'r, 'a> {
    /// Creates a new builder.
    pub fn new(resolver: &'r ThrowableResolver<'a>, timestamp: DateTime<Utc>) -> Self {
        Self {
            resolver,
            generator: DEFAULT_GENERATOR,
            timestamp,
            hostname: None,
        }
    }

    /// Sets the identifier written into each report's `Generated by` comment.
    pub fn set_generator(&mut self, generator: &'r str) -> &mut Self {
        self.generator = generator;
        self
    }

    /// Sets the hostname attribute. `None` omits it.
    pub fn set_hostname(&mut self, hostname: Option<&'r str>) -> &mut Self {
        self.hostname = hostname;
        self
    }

    /// Builds the report for one class out of the results it declares.
    ///
    /// Test cases are ordered by method name, then by start time, then by input order.
    pub fn build(
        &self,
        class_name: &str,
        results: impl IntoIterator<Item = &'a TestResult>,
    ) -> ClassReport {
        let mut results: Vec<_> = results.into_iter().collect();
        // sort_by is stable, so ties keep their input order.
        results.sort_by(|a, b| test_case_order(a, b));

        let mut report = ClassReport::new(class_name, self.timestamp);
        report.set_generator(self.generator);
        if let Some(hostname) = self.hostname {
            report.set_hostname(hostname);
        }
        report.add_test_cases(
            results
                .into_iter()
                .map(|result| self.test_case_record(class_name, result)),
        );
        report
    }

    fn test_case_record(&self, class_name: &str, result: &'a TestResult) -> TestCaseRecord {
        let status = if result.is_success() {
            TestCaseStatus::Success
        } else {
            let throwable = self.resolver.resolve(result);
            TestCaseStatus::non_success(classify(throwable), throwable.map(failure_detail))
        };

        let mut record = TestCaseRecord::new(class_name, &result.method.method_name, status);
        record.set_time_millis(result.elapsed_millis());
        record
    }
}

/// Returns the tag an unsuccessful result is reported under, given its resolved throwable.
///
/// Assertion failures are reported as `error`. Everything else, including a result with no
/// throwable at all, is reported as `failure`.
pub fn classify(throwable: Option<&Throwable>) -> NonSuccessKind {
    match throwable.map(|throwable| throwable.kind) {
        Some(ThrowableKind::Assertion) => NonSuccessKind::Error,
        Some(ThrowableKind::Other) | None => NonSuccessKind::Failure,
    }
}

fn failure_detail(throwable: &Throwable) -> FailureDetail {
    let mut detail = FailureDetail::new(&throwable.type_name, throwable.render_stack_trace());
    if let Some(message) = &throwable.message {
        detail.set_message(message);
    }
    detail
}

fn test_case_order(a: &TestResult, b: &TestResult) -> Ordering {
    a.method
        .method_name
        .cmp(&b.method.method_name)
        .then(a.start_millis.cmp(&b.start_millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggregator::{AggregatedResults, ClassGrouping},
        results::{SuiteResult, TestStatus},
        test_helpers::{arb_suites, test_result, timed_result, with_throwable},
    };
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use test_strategy::proptest;

    static CLASS: &str = "com.example.CalculatorTest";

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).unwrap()
    }

    #[test]
    fn success_and_failure() {
        let results = [
            timed_result(CLASS, "addsNumbers", TestStatus::Success, 0, 50),
            with_throwable(
                timed_result(CLASS, "dividesByZero", TestStatus::Failure, 100, 175),
                {
                    let mut throwable = Throwable::other("java.lang.ArithmeticException");
                    throwable
                        .set_message("/ by zero")
                        .add_frames(["com.example.Calculator.divide(Calculator.java:12)"]);
                    throwable
                },
            ),
        ];
        let configurations = ClassGrouping::new();
        let resolver = ThrowableResolver::new(&configurations);
        let report = ClassReportBuilder::new(&resolver, timestamp()).build(CLASS, &results);

        assert_eq!(report.tests, 2);
        assert_eq!(report.failures, 1);
        assert_eq!(report.errors, 0);
        assert_eq!(report.time_millis, 125);
        assert_eq!(report.hostname, None);

        let passed = &report.test_cases[0];
        assert_eq!(passed.name, "addsNumbers");
        assert_eq!(passed.classname, CLASS);
        assert_eq!(passed.time_millis, 50);
        assert_eq!(passed.status, TestCaseStatus::Success);

        let failed = &report.test_cases[1];
        assert_eq!(failed.time_millis, 75);
        let mut expected_detail = FailureDetail::new(
            "java.lang.ArithmeticException",
            "java.lang.ArithmeticException: / by zero\n\
             \tat com.example.Calculator.divide(Calculator.java:12)\n",
        );
        expected_detail.set_message("/ by zero");
        assert_eq!(
            failed.status,
            TestCaseStatus::non_success(NonSuccessKind::Failure, Some(expected_detail))
        );
    }

    #[test]
    fn assertion_failures_are_errors() {
        let results = [with_throwable(
            test_result(CLASS, "checksSign", TestStatus::Failure),
            Throwable::assertion("java.lang.AssertionError"),
        )];
        let configurations = ClassGrouping::new();
        let resolver = ThrowableResolver::new(&configurations);
        let report = ClassReportBuilder::new(&resolver, timestamp()).build(CLASS, &results);

        assert_eq!((report.failures, report.errors), (0, 1));
        let TestCaseStatus::NonSuccess { kind, detail } = &report.test_cases[0].status else {
            panic!("expected a non-success status");
        };
        assert_eq!(*kind, NonSuccessKind::Error);
        let detail = detail.as_ref().expect("detail is present");
        assert_eq!(detail.ty, "java.lang.AssertionError");
        assert_eq!(detail.message, None);
        assert_eq!(detail.stack_trace, "java.lang.AssertionError\n");
    }

    #[test]
    fn skip_uses_configuration_failure() {
        let configurations = [with_throwable(
            test_result("com.example.Base", "setUp", TestStatus::Failure),
            Throwable::assertion("java.lang.AssertionError"),
        )];
        let mut grouping = ClassGrouping::new();
        grouping.add_results(&configurations);
        let resolver = ThrowableResolver::new(&grouping);

        let results = [test_result(CLASS, "skipped", TestStatus::Skip)];
        let report = ClassReportBuilder::new(&resolver, timestamp()).build(CLASS, &results);

        assert_eq!((report.failures, report.errors), (0, 1));
        let detail = report.test_cases[0]
            .status
            .detail()
            .expect("skip cause is reported");
        assert_eq!(detail.ty, "java.lang.AssertionError");
    }

    #[test]
    fn missing_throwable_counts_as_failure_without_detail() {
        let results = [
            test_result(CLASS, "failedWithoutCause", TestStatus::Failure),
            test_result(CLASS, "skippedWithoutCause", TestStatus::Skip),
        ];
        let configurations = ClassGrouping::new();
        let resolver = ThrowableResolver::new(&configurations);
        let report = ClassReportBuilder::new(&resolver, timestamp()).build(CLASS, &results);

        assert_eq!((report.tests, report.failures, report.errors), (2, 2, 0));
        for test_case in &report.test_cases {
            assert_eq!(
                test_case.status,
                TestCaseStatus::non_success(NonSuccessKind::Failure, None)
            );
        }
    }

    #[test]
    fn orders_by_method_name_then_start_time() {
        let results = [
            timed_result(CLASS, "zeta", TestStatus::Success, 0, 1),
            timed_result(CLASS, "alpha", TestStatus::Success, 500, 501),
            timed_result(CLASS, "alpha", TestStatus::Success, 100, 101),
            timed_result(CLASS, "beta", TestStatus::Success, 0, 1),
        ];
        let configurations = ClassGrouping::new();
        let resolver = ThrowableResolver::new(&configurations);
        let report = ClassReportBuilder::new(&resolver, timestamp()).build(CLASS, &results);

        let order: Vec<_> = report
            .test_cases
            .iter()
            .map(|test_case| test_case.name.as_str())
            .collect();
        assert_eq!(order, ["alpha", "alpha", "beta", "zeta"]);
        assert_eq!(report.test_cases[0].time_millis, 1);
    }

    #[test]
    fn generator_and_hostname() {
        let configurations = ClassGrouping::new();
        let resolver = ThrowableResolver::new(&configurations);
        let results = [test_result(CLASS, "passes", TestStatus::Success)];

        let mut builder = ClassReportBuilder::new(&resolver, timestamp());
        builder.set_generator("custom").set_hostname(Some("ci-host"));
        let report = builder.build(CLASS, &results);

        assert_eq!(report.generator, "custom");
        assert_eq!(report.hostname.as_deref(), Some("ci-host"));
        assert_eq!(report.timestamp, timestamp());
    }

    #[test]
    fn classify_throwables() {
        assert_eq!(
            classify(Some(&Throwable::assertion("java.lang.AssertionError"))),
            NonSuccessKind::Error
        );
        assert_eq!(
            classify(Some(&Throwable::other("java.lang.NullPointerException"))),
            NonSuccessKind::Failure
        );
        assert_eq!(classify(None), NonSuccessKind::Failure);
    }

    #[proptest(cases = 64)]
    fn counts_reconcile(#[strategy(arb_suites())] suites: Vec<SuiteResult>) {
        let aggregated = AggregatedResults::from_suites(&suites);
        let resolver = ThrowableResolver::new(&aggregated.failed_configurations);
        let builder = ClassReportBuilder::new(&resolver, timestamp());

        for (class_name, results) in aggregated.tests.iter() {
            let report = builder.build(class_name, results.iter().copied());

            let successes = results.iter().filter(|result| result.is_success()).count();
            let elapsed: u64 = results.iter().map(|result| result.elapsed_millis()).sum();
            assert_eq!(report.tests, results.len());
            assert!(report.failures + report.errors <= report.tests);
            assert_eq!(report.failures + report.errors + successes, report.tests);
            assert_eq!(report.successes(), successes);
            assert_eq!(report.time_millis, elapsed);
            assert_eq!(
                report.time_millis,
                report
                    .test_cases
                    .iter()
                    .map(|test_case| test_case.time_millis)
                    .sum::<u64>()
            );

            for test_case in &report.test_cases {
                assert_eq!(test_case.classname, class_name);
                if test_case.status.is_success() {
                    assert!(test_case.status.detail().is_none());
                }
            }
        }
    }
}
