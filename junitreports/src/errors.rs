// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by junitreports.

use camino::{Utf8Path, Utf8PathBuf};
use junitreports_xml::SerializeError;
use thiserror::Error;

/// An error that occurred while reading the config.
#[derive(Debug, Error)]
#[error("failed to parse junitreports config at `{config_file}`")]
#[non_exhaustive]
pub struct ConfigParseError {
    config_file: Utf8PathBuf,
    #[source]
    kind: ConfigParseErrorKind,
}

impl ConfigParseError {
    pub(crate) fn new(config_file: impl Into<Utf8PathBuf>, kind: ConfigParseErrorKind) -> Self {
        Self {
            config_file: config_file.into(),
            kind,
        }
    }

    /// Returns the config file that failed to parse.
    pub fn config_file(&self) -> &Utf8Path {
        &self.config_file
    }

    /// Returns the kind of error that occurred.
    pub fn kind(&self) -> &ConfigParseErrorKind {
        &self.kind
    }
}

/// The kind of error that occurred while reading the config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigParseErrorKind {
    /// The config file could not be read.
    #[error("error reading config file")]
    Read(#[source] std::io::Error),

    /// The config file is not valid.
    #[error("error deserializing config")]
    Toml(#[source] toml::de::Error),
}

/// An error that occurs while writing JUnit reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// The report directory could not be created.
    #[error("error creating report directory {dir}")]
    CreateDir {
        /// The directory being created.
        dir: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// A class name does not make a valid report file name.
    #[error("JUnit report file name `{file_name}` for class {class_name} is not a plain file name")]
    InvalidFileName {
        /// The class the report is for.
        class_name: String,

        /// The rejected file name.
        file_name: String,
    },

    /// A report file could not be written.
    #[error("error writing JUnit report to {file}")]
    Write {
        /// The output file.
        file: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// A report could not be serialized.
    #[error("error serializing JUnit report for class {class_name}")]
    Serialize {
        /// The class whose report failed to serialize.
        class_name: String,

        /// The underlying error.
        #[source]
        error: SerializeError,
    },
}
