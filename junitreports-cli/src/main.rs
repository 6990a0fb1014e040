// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use junitreports_cli::JunitReportsApp;

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = JunitReportsApp::parse();
    opts.exec()
}
