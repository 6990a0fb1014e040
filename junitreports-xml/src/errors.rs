// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::string::FromUtf8Error;
use thiserror::Error;

/// An error that occurs while serializing a [`ClassReport`](crate::ClassReport).
///
/// Returned by [`ClassReport::serialize`](crate::ClassReport::serialize) and
/// [`ClassReport::to_xml_string`](crate::ClassReport::to_xml_string).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// The XML writer failed.
    #[error("error serializing JUnit report")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("serialized JUnit report is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
