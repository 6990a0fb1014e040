// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Per-class JUnit XML reports for a finished test run.
//!
//! Given the results collected by a test engine, [`JunitReporter`](reporter::JunitReporter)
//! groups them by declaring class, classifies every unsuccessful test, and writes one
//! `TEST-<class name>.xml` file per class into the `junitreports` directory beneath the run's
//! output directory.
//!
//! The flow is:
//!
//! 1. [`aggregator`] groups test results and failed configuration methods by class.
//! 2. [`resolver`] finds the throwable that explains each unsuccessful result.
//! 3. [`builder`] turns each class's results into a
//!    [`ClassReport`](junitreports_xml::ClassReport).
//! 4. [`reporter`] serializes each report and writes it out.

pub mod aggregator;
pub mod builder;
pub mod config;
pub mod errors;
pub mod reporter;
pub mod resolver;
pub mod results;
#[cfg(test)]
mod test_helpers;
pub mod throwable;
mod writer;

pub use junitreports_xml as xml;
