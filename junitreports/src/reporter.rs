// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generating per-class JUnit reports for a whole run.

use crate::{
    aggregator::AggregatedResults,
    builder::ClassReportBuilder,
    config::JunitReportConfig,
    errors::WriteReportError,
    resolver::ThrowableResolver,
    results::SuiteResult,
    writer::{create_report_dir, report_file_name, write_report_file},
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use junitreports_xml::ClassReport;
use tracing::debug;

/// A serialized report for one class.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedReport {
    class_name: String,
    file_name: String,
    contents: String,
}

impl RenderedReport {
    /// Returns the class this report is for.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the name of the file this report is written to.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the XML document.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Writes one JUnit XML report per test class.
#[derive(Clone, Debug, Default)]
pub struct JunitReporter {
    config: JunitReportConfig,
    timestamp: Option<DateTime<Utc>>,
}

impl JunitReporter {
    /// Creates a new reporter.
    pub fn new(config: JunitReportConfig) -> Self {
        Self {
            config,
            timestamp: None,
        }
    }

    /// Returns the configuration for this reporter.
    pub fn config(&self) -> &JunitReportConfig {
        &self.config
    }

    /// Uses this timestamp for every report instead of the current time.
    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Serializes the report of every class into memory, in class name order.
    pub fn render_reports(
        &self,
        suites: &[SuiteResult],
    ) -> Result<Vec<RenderedReport>, WriteReportError> {
        let mut rendered = vec![];
        self.for_each_report(suites, |report| {
            rendered.push(RenderedReport {
                class_name: report.name.clone(),
                file_name: report.file_name(),
                contents: to_xml_string(report)?,
            });
            Ok(())
        })?;
        Ok(rendered)
    }

    /// Writes the report of every class into the report directory beneath `output_dir`.
    ///
    /// Existing reports for the same classes are replaced. Returns the paths that were written,
    /// in class name order.
    pub fn generate_report(
        &self,
        suites: &[SuiteResult],
        output_dir: &Utf8Path,
    ) -> Result<Vec<Utf8PathBuf>, WriteReportError> {
        let report_dir = self.config.report_dir(output_dir);
        let mut written = vec![];
        self.for_each_report(suites, |report| {
            let file_name = report_file_name(report)?;
            let contents = to_xml_string(report)?;
            if written.is_empty() {
                create_report_dir(&report_dir)?;
            }
            let path = write_report_file(&report_dir, &file_name, contents.as_bytes())?;
            debug!("wrote JUnit report for {} to {path}", report.name);
            written.push(path);
            Ok(())
        })?;
        Ok(written)
    }

    fn for_each_report(
        &self,
        suites: &[SuiteResult],
        mut callback: impl FnMut(&ClassReport) -> Result<(), WriteReportError>,
    ) -> Result<(), WriteReportError> {
        let aggregated = AggregatedResults::from_suites(suites);
        debug!(
            "aggregated {} test results across {} classes, {} failed configurations",
            aggregated.tests.result_count(),
            aggregated.tests.class_count(),
            aggregated.failed_configurations.result_count(),
        );

        let resolver = ThrowableResolver::new(&aggregated.failed_configurations);
        let hostname = self.config.hostname().resolve();
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);

        let mut builder = ClassReportBuilder::new(&resolver, timestamp);
        builder
            .set_generator(self.config.generator())
            .set_hostname(hostname.as_deref());

        for (class_name, results) in aggregated.tests.iter() {
            let report = builder.build(class_name, results.iter().copied());
            callback(&report)?;
        }
        Ok(())
    }
}

fn to_xml_string(report: &ClassReport) -> Result<String, WriteReportError> {
    report
        .to_xml_string()
        .map_err(|error| WriteReportError::Serialize {
            class_name: report.name.clone(),
            error,
        })
}
