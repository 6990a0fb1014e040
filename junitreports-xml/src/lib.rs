// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Data model and serializer for per-class JUnit XML reports.
//!
//! Each [`ClassReport`] becomes one `TEST-<class name>.xml` document with a single
//! `testsuite` root element.

mod errors;
mod report;
mod serialize;
pub mod time;

pub use errors::SerializeError;
pub use report::*;
