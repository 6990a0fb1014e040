// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for JUnit report generation.
//!
//! Configuration is read from the `[junit]` table of a TOML file:
//!
//! ```toml
//! [junit]
//! report-dir = "junitreports"
//! generator = "junitreports"
//! hostname = "system"
//! ```
//!
//! Every key is optional.

use crate::errors::{ConfigParseError, ConfigParseErrorKind};
use camino::{Utf8Path, Utf8PathBuf};
use junitreports_xml::DEFAULT_GENERATOR;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// The subdirectory of the output directory that reports are written to by default.
pub const DEFAULT_REPORT_DIR: &str = "junitreports";

/// Configuration for JUnit report generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JunitReportConfig {
    // Relative to the output directory.
    report_dir: Utf8PathBuf,
    generator: String,
    hostname: HostnameSource,
}

impl Default for JunitReportConfig {
    fn default() -> Self {
        Self {
            report_dir: DEFAULT_REPORT_DIR.into(),
            generator: DEFAULT_GENERATOR.to_owned(),
            hostname: HostnameSource::System,
        }
    }
}

impl JunitReportConfig {
    /// Reads configuration from a TOML file.
    pub fn from_file(config_file: impl Into<Utf8PathBuf>) -> Result<Self, ConfigParseError> {
        let config_file = config_file.into();
        let contents = std::fs::read_to_string(&config_file).map_err(|error| {
            ConfigParseError::new(config_file.clone(), ConfigParseErrorKind::Read(error))
        })?;
        Self::from_toml_str(&contents, config_file)
    }

    /// Parses configuration from TOML contents. `config_file` is only used in errors.
    pub fn from_toml_str(
        contents: &str,
        config_file: impl Into<Utf8PathBuf>,
    ) -> Result<Self, ConfigParseError> {
        let config_file = config_file.into();
        let data: ConfigFileImpl = toml::from_str(contents).map_err(|error| {
            ConfigParseError::new(config_file.clone(), ConfigParseErrorKind::Toml(error))
        })?;
        debug!("read JUnit report config from {config_file}");
        Ok(Self::from_impl(data.junit))
    }

    fn from_impl(data: JunitImpl) -> Self {
        let default = Self::default();
        Self {
            report_dir: data.report_dir.unwrap_or(default.report_dir),
            generator: data.generator.unwrap_or(default.generator),
            hostname: data.hostname.unwrap_or(default.hostname),
        }
    }

    /// Returns the directory reports are written to, given the output directory of the run.
    pub fn report_dir(&self, output_dir: &Utf8Path) -> Utf8PathBuf {
        output_dir.join(&self.report_dir)
    }

    /// Returns the identifier written into each report's `Generated by` comment.
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Returns how the hostname attribute is determined.
    pub fn hostname(&self) -> &HostnameSource {
        &self.hostname
    }

    /// Sets the report directory, relative to the output directory.
    pub fn set_report_dir(&mut self, report_dir: impl Into<Utf8PathBuf>) -> &mut Self {
        self.report_dir = report_dir.into();
        self
    }

    /// Sets the identifier written into each report's `Generated by` comment.
    pub fn set_generator(&mut self, generator: impl Into<String>) -> &mut Self {
        self.generator = generator.into();
        self
    }

    /// Sets how the hostname attribute is determined.
    pub fn set_hostname(&mut self, hostname: HostnameSource) -> &mut Self {
        self.hostname = hostname;
        self
    }
}

/// How the `hostname` attribute of each report is determined.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostnameSource {
    /// Look up the name of the current host. If the lookup fails, the attribute is omitted.
    #[default]
    System,

    /// Never write the attribute.
    #[serde(rename = "none")]
    Disabled,

    /// Always use this hostname.
    Fixed(String),
}

impl HostnameSource {
    /// Returns the hostname to write, if any.
    pub fn resolve(&self) -> Option<String> {
        match self {
            HostnameSource::System => looked_up_hostname(whoami::hostname()),
            HostnameSource::Disabled => None,
            HostnameSource::Fixed(hostname) => Some(hostname.clone()),
        }
    }
}

// A failed or empty lookup omits the attribute.
fn looked_up_hostname<E: fmt::Display>(lookup: Result<String, E>) -> Option<String> {
    match lookup {
        Ok(hostname) if !hostname.is_empty() => Some(hostname),
        Ok(_) => {
            debug!("hostname lookup returned an empty name, omitting hostname");
            None
        }
        Err(error) => {
            debug!("failed to look up hostname, omitting it: {error}");
            None
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFileImpl {
    #[serde(default)]
    junit: JunitImpl,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct JunitImpl {
    #[serde(default)]
    report_dir: Option<Utf8PathBuf>,
    #[serde(default)]
    generator: Option<String>,
    #[serde(default)]
    hostname: Option<HostnameSource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino_tempfile::tempdir;
    use indoc::indoc;
    use test_case::test_case;

    #[test_case(
        "",
        JunitReportConfig::default()
        ; "empty file"
    )]
    #[test_case(
        indoc! {r#"
            [junit]
            report-dir = "reports/junit"
        "#},
        {
            let mut config = JunitReportConfig::default();
            config.set_report_dir("reports/junit");
            config
        }
        ; "custom report dir"
    )]
    #[test_case(
        indoc! {r#"
            [junit]
            generator = "com.example.ci.ReportGenerator"
            hostname = "none"
        "#},
        {
            let mut config = JunitReportConfig::default();
            config
                .set_generator("com.example.ci.ReportGenerator")
                .set_hostname(HostnameSource::Disabled);
            config
        }
        ; "generator and no hostname"
    )]
    #[test_case(
        indoc! {r#"
            [junit]
            hostname = { fixed = "ci-host" }
        "#},
        {
            let mut config = JunitReportConfig::default();
            config.set_hostname(HostnameSource::Fixed("ci-host".to_owned()));
            config
        }
        ; "fixed hostname"
    )]
    fn parse_config(contents: &str, expected: JunitReportConfig) {
        let config = JunitReportConfig::from_toml_str(contents, "junitreports.toml")
            .expect("config is valid");
        assert_eq!(config, expected);
    }

    #[test_case(
        indoc! {r#"
            [junit]
            report-directory = "reports"
        "#}
        ; "unknown key"
    )]
    #[test_case(
        indoc! {r#"
            [junit]
            hostname = "somewhere"
        "#}
        ; "unknown hostname source"
    )]
    fn parse_config_invalid(contents: &str) {
        let error = JunitReportConfig::from_toml_str(contents, "junitreports.toml")
            .expect_err("config is invalid");
        assert_eq!(
            error.to_string(),
            "failed to parse junitreports config at `junitreports.toml`"
        );
    }

    #[test]
    fn read_config_file() {
        let dir = tempdir().expect("created temp dir");
        let config_file = dir.path().join("junitreports.toml");
        std::fs::write(&config_file, "[junit]\nreport-dir = \"out\"\n").expect("wrote config");

        let config = JunitReportConfig::from_file(&config_file).expect("config is valid");
        assert_eq!(
            config.report_dir(Utf8Path::new("target")),
            Utf8Path::new("target").join("out")
        );

        let missing = dir.path().join("missing.toml");
        let error = JunitReportConfig::from_file(&missing).expect_err("missing file is an error");
        assert!(matches!(error.kind(), ConfigParseErrorKind::Read(_)));
    }

    #[test]
    fn default_report_dir() {
        let config = JunitReportConfig::default();
        assert_eq!(
            config.report_dir(Utf8Path::new("test-output")),
            Utf8Path::new("test-output").join("junitreports")
        );
    }

    #[test]
    fn hostname_sources() {
        assert_eq!(HostnameSource::Disabled.resolve(), None);
        assert_eq!(
            HostnameSource::Fixed("ci-host".to_owned()).resolve().as_deref(),
            Some("ci-host")
        );
    }

    #[test_case(Ok("ci-host".to_owned()), Some("ci-host"); "found")]
    #[test_case(Ok(String::new()), None; "empty name")]
    #[test_case(
        Err(std::io::Error::other("lookup failed")),
        None
        ; "lookup error"
    )]
    fn system_hostname_lookup(lookup: std::io::Result<String>, expected: Option<&str>) {
        assert_eq!(looked_up_hostname(lookup).as_deref(), expected);
    }
}
