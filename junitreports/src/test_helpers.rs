// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    results::{SuiteResult, TestContext, TestMethod, TestResult, TestStatus},
    throwable::{Throwable, ThrowableKind},
};
use proptest::{collection::vec, option, prelude::*};

pub(crate) fn test_result(class_name: &str, method_name: &str, status: TestStatus) -> TestResult {
    TestResult::new(TestMethod::new(class_name, method_name), status)
}

pub(crate) fn timed_result(
    class_name: &str,
    method_name: &str,
    status: TestStatus,
    start_millis: u64,
    end_millis: u64,
) -> TestResult {
    let mut result = test_result(class_name, method_name, status);
    result.set_times(start_millis, end_millis);
    result
}

pub(crate) fn with_throwable(mut result: TestResult, throwable: Throwable) -> TestResult {
    result.set_throwable(throwable);
    result
}

fn arb_status() -> impl Strategy<Value = TestStatus> {
    prop_oneof![
        Just(TestStatus::Success),
        Just(TestStatus::Failure),
        Just(TestStatus::Skip),
    ]
}

fn arb_throwable() -> impl Strategy<Value = Throwable> {
    (
        prop_oneof![Just(ThrowableKind::Assertion), Just(ThrowableKind::Other)],
        "[a-z]{1,4}\\.[A-Z][a-z]{0,4}Error",
        option::of("[a-z ]{0,8}"),
    )
        .prop_map(|(kind, type_name, message)| {
            let mut throwable = Throwable::new(kind, type_name);
            if let Some(message) = message {
                throwable.set_message(message);
            }
            throwable
        })
}

pub(crate) fn arb_test_result() -> impl Strategy<Value = TestResult> {
    (
        "com\\.example\\.[A-D]Test",
        "[a-e]{1,2}",
        arb_status(),
        0u64..10_000,
        0u64..10_000,
        option::of(arb_throwable()),
    )
        .prop_map(|(class_name, method_name, status, start, elapsed, throwable)| {
            let mut result = timed_result(&class_name, &method_name, status, start, start + elapsed);
            if let Some(throwable) = throwable {
                result.set_throwable(throwable);
            }
            result
        })
}

fn arb_context() -> impl Strategy<Value = TestContext> {
    (
        vec(arb_test_result(), 0..8),
        vec(arb_test_result(), 0..3),
    )
        .prop_map(|(results, failed_configurations)| {
            let mut context = TestContext::new("context");
            for result in results {
                context.add_test_result(result);
            }
            for mut result in failed_configurations {
                result.status = TestStatus::Failure;
                context.add_failed_configuration(result);
            }
            context
        })
}

pub(crate) fn arb_suites() -> impl Strategy<Value = Vec<SuiteResult>> {
    vec(vec(arb_context(), 0..3), 0..3).prop_map(|suites| {
        suites
            .into_iter()
            .enumerate()
            .map(|(index, contexts)| SuiteResult {
                name: format!("suite-{index}"),
                contexts,
            })
            .collect()
    })
}
