// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::WriteReportError;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use junitreports_xml::ClassReport;
use std::io::Write;

/// Returns the name of the file a report is written to.
///
/// Class names come from the test engine, so the file name is checked to be a single path
/// component. Otherwise it could name a file outside the report directory.
pub(crate) fn report_file_name(report: &ClassReport) -> Result<String, WriteReportError> {
    let file_name = report.file_name();
    let mut components = Utf8Path::new(&file_name).components();
    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(_)), None)
    ) && !file_name.contains(['/', '\\']);

    if is_plain {
        Ok(file_name)
    } else {
        Err(WriteReportError::InvalidFileName {
            class_name: report.name.clone(),
            file_name,
        })
    }
}

pub(crate) fn create_report_dir(dir: &Utf8Path) -> Result<(), WriteReportError> {
    std::fs::create_dir_all(dir).map_err(|error| WriteReportError::CreateDir {
        dir: dir.to_path_buf(),
        error,
    })
}

/// Writes a whole report file at once, replacing any existing file.
///
/// The contents go to a temporary file that is renamed into place, so a failed write never
/// leaves a partial report behind.
pub(crate) fn write_report_file(
    dir: &Utf8Path,
    file_name: &str,
    contents: &[u8],
) -> Result<Utf8PathBuf, WriteReportError> {
    let file = dir.join(file_name);
    AtomicFile::new(&file, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(contents))
        .map_err(|error| {
            let error = match error {
                atomicwrites::Error::Internal(error) | atomicwrites::Error::User(error) => error,
            };
            WriteReportError::Write {
                file: file.clone(),
                error,
            }
        })?;
    Ok(file)
}
