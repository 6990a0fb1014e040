// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::OutputOpts;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser};
use color_eyre::eyre::{Result, WrapErr};
use junitreports::{config::JunitReportConfig, reporter::JunitReporter, results::SuiteResult};
use std::{fs::File, io::BufReader};
use tracing::{debug, info};

/// Writes one JUnit XML report per test class.
///
/// Reads the results of a finished test run from a JSON file, and writes
/// `TEST-<class name>.xml` files into the report directory beneath the output directory.
#[derive(Debug, Parser)]
#[command(version, name = "junitreports")]
pub struct JunitReportsApp {
    /// JSON file with the suite results
    #[arg(long, value_name = "PATH")]
    results: Utf8PathBuf,

    /// Base output directory for the run
    #[arg(long, value_name = "DIR")]
    output_dir: Utf8PathBuf,

    #[command(flatten)]
    config_opts: ConfigOpts,

    #[command(flatten)]
    output: OutputOpts,
}

impl JunitReportsApp {
    /// Executes the app.
    pub fn exec(self) -> Result<()> {
        self.output.init();

        let config = self.config_opts.make_config()?;
        let suites = read_results(&self.results)?;

        let reporter = JunitReporter::new(config);
        let written = reporter
            .generate_report(&suites, &self.output_dir)
            .wrap_err("failed to write JUnit reports")?;

        for path in &written {
            info!("wrote {path}");
        }
        info!(
            "{} JUnit {} written",
            written.len(),
            if written.len() == 1 { "report" } else { "reports" },
        );
        Ok(())
    }
}

#[derive(Debug, Args)]
struct ConfigOpts {
    /// Config file [default: built-in defaults]
    #[arg(long, value_name = "PATH", env = "JUNITREPORTS_CONFIG")]
    config: Option<Utf8PathBuf>,
}

impl ConfigOpts {
    fn make_config(&self) -> Result<JunitReportConfig> {
        match &self.config {
            Some(config_file) => {
                debug!("reading config from {config_file}");
                Ok(JunitReportConfig::from_file(config_file)?)
            }
            None => Ok(JunitReportConfig::default()),
        }
    }
}

fn read_results(path: &Utf8Path) -> Result<Vec<SuiteResult>> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open results at {path}"))?;
    let suites: Vec<SuiteResult> = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("failed to parse results at {path}"))?;
    debug!("read {} suites from {path}", suites.len());
    Ok(suites)
}
