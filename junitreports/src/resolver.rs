// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Finding the throwable that explains a test result.

use crate::{
    aggregator::ClassGrouping,
    results::{TestResult, TestStatus},
    throwable::Throwable,
};

/// Resolves the throwable to report for a test result.
///
/// A result's own throwable always wins. A skipped result without one is attributed to the first
/// failed configuration method that captured a throwable, scanning classes in name order. This
/// match is naive: it does not check that the configuration failure is the one that caused the
/// skip.
#[derive(Clone, Debug)]
pub struct ThrowableResolver<'a> {
    skip_cause: Option<&'a Throwable>,
}

impl<'a> ThrowableResolver<'a> {
    /// Creates a new resolver over the failed configuration methods of a run.
    pub fn new(failed_configurations: &ClassGrouping<'a>) -> Self {
        let skip_cause = failed_configurations
            .results()
            .find_map(|result| result.throwable.as_ref());
        Self { skip_cause }
    }

    /// Returns the throwable attributed to skipped results that carry none of their own.
    pub fn skip_cause(&self) -> Option<&'a Throwable> {
        self.skip_cause
    }

    /// Returns the throwable to report for this result, if any.
    pub fn resolve(&self, result: &'a TestResult) -> Option<&'a Throwable> {
        match (&result.throwable, result.status) {
            (Some(throwable), _) => Some(throwable),
            (None, TestStatus::Skip) => self.skip_cause,
            (None, TestStatus::Success | TestStatus::Failure) => None,
        }
    }
}
