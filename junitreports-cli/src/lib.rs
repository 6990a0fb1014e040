// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writes per-class JUnit XML reports from a JSON snapshot of a finished test run.

#![warn(missing_docs)]

mod dispatch;
mod output;

#[doc(hidden)]
pub use dispatch::*;
