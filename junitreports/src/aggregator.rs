// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grouping of test results by declaring class.

use crate::results::{SuiteResult, TestContext, TestResult};
use indexmap::IndexMap;
use std::{collections::BTreeMap, iter};

/// Results grouped by the class that declares them.
///
/// Classes are iterated in name order. Within a class, results keep the order in which they were
/// added. Every added result is kept, including repeated invocations that compare equal.
#[derive(Clone, Debug, Default)]
pub struct ClassGrouping<'a> {
    classes: BTreeMap<&'a str, Vec<&'a TestResult>>,
}

impl<'a> ClassGrouping<'a> {
    /// Creates a new, empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds results to the groups of their declaring classes.
    pub fn add_results(&mut self, results: impl IntoIterator<Item = &'a TestResult>) -> &mut Self {
        for result in results {
            self.classes
                .entry(result.class_name())
                .or_default()
                .push(result);
        }
        self
    }

    /// Returns the results declared by the given class, if any.
    pub fn get(&self, class_name: &str) -> Option<&[&'a TestResult]> {
        self.classes.get(class_name).map(Vec::as_slice)
    }

    /// Iterates over classes and their results, in class name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a TestResult])> {
        self.classes
            .iter()
            .map(|(class_name, results)| (*class_name, results.as_slice()))
    }

    /// Iterates over all results, class by class.
    pub fn results(&self) -> impl Iterator<Item = &'a TestResult> + '_ {
        self.classes.values().flat_map(|results| results.iter().copied())
    }

    /// Returns the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the total number of results across all classes.
    pub fn result_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    /// Returns true if there are no results.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The results of a whole run, grouped by declaring class.
#[derive(Clone, Debug, Default)]
pub struct AggregatedResults<'a> {
    /// Passed, failed and skipped test methods.
    pub tests: ClassGrouping<'a>,

    /// Failed setup and teardown methods.
    pub failed_configurations: ClassGrouping<'a>,
}

impl<'a> AggregatedResults<'a> {
    /// Groups the results of all contexts of all suites.
    ///
    /// Within a context, a result listed under more than one of passed, failed and skipped is
    /// counted once.
    pub fn from_suites(suites: impl IntoIterator<Item = &'a SuiteResult>) -> Self {
        let mut aggregated = Self::default();
        for context in suites.into_iter().flat_map(|suite| &suite.contexts) {
            aggregated.tests.add_results(merge_categories(context));
            aggregated
                .failed_configurations
                .add_results(&context.failed_configurations);
        }
        aggregated
    }
}

/// Merges the passed, failed and skipped lists of a context.
///
/// Equal results are kept as many times as they occur in the list that has the most of them, so
/// repeats within one list survive while the same result listed in two categories does not.
fn merge_categories(context: &TestContext) -> impl Iterator<Item = &TestResult> {
    let mut merged: IndexMap<&TestResult, usize> = IndexMap::new();
    for list in [
        &context.passed_tests,
        &context.failed_tests,
        &context.skipped_tests,
    ] {
        let mut counts: IndexMap<&TestResult, usize> = IndexMap::new();
        for result in list {
            *counts.entry(result).or_default() += 1;
        }
        for (result, count) in counts {
            let merged_count = merged.entry(result).or_default();
            *merged_count = (*merged_count).max(count);
        }
    }
    merged
        .into_iter()
        .flat_map(|(result, count)| iter::repeat_n(result, count))
}
