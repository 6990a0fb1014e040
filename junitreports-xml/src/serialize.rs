// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `ClassReport`.

use crate::{
    ClassReport, FailureDetail, NonSuccessKind, TestCaseRecord, TestCaseStatus,
    time::{format_gmt_timestamp, format_millis},
};
use quick_xml::{
    Writer,
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{io, iter};

static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static CDATA_END: &str = "]]>";

pub(crate) fn serialize_class_report(
    report: &ClassReport,
    writer: impl io::Write,
) -> quick_xml::Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    // "--" is not allowed inside a comment.
    let comment = format!("Generated by {}", report.generator.replace("--", "- -"));
    writer.write_event(Event::Comment(BytesText::from_escaped(comment)))?;

    serialize_testsuite(report, &mut writer)?;

    // Add a trailing newline.
    writer.write_indent()?;
    Ok(())
}

fn serialize_testsuite(
    report: &ClassReport,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let ClassReport {
        name,
        generator: _,
        timestamp,
        hostname,
        tests,
        failures,
        errors,
        time_millis,
        test_cases,
    } = report;

    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("name", name.as_str()),
        ("time", format_millis(*time_millis).as_str()),
        ("tests", tests.to_string().as_str()),
        ("errors", errors.to_string().as_str()),
        ("failures", failures.to_string().as_str()),
        ("timestamp", format_gmt_timestamp(timestamp).as_str()),
    ]);
    if let Some(hostname) = hostname {
        testsuite_tag.push_attribute(("hostname", hostname.as_str()));
    }
    writer.write_event(Event::Start(testsuite_tag))?;

    for test_case in test_cases {
        serialize_test_case(test_case, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)
}

fn serialize_test_case(
    test_case: &TestCaseRecord,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let TestCaseRecord {
        classname,
        name,
        time_millis,
        status,
    } = test_case;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.extend_attributes([
        ("classname", classname.as_str()),
        ("name", name.as_str()),
        ("time", format_millis(*time_millis).as_str()),
    ]);

    match status {
        TestCaseStatus::NonSuccess {
            kind,
            detail: Some(detail),
        } => {
            writer.write_event(Event::Start(testcase_tag))?;
            serialize_failure_detail(*kind, detail, writer)?;
            serialize_end_tag(TESTCASE_TAG, writer)
        }
        TestCaseStatus::Success | TestCaseStatus::NonSuccess { detail: None, .. } => {
            writer.write_event(Event::Empty(testcase_tag))?;
            Ok(())
        }
    }
}

fn serialize_failure_detail(
    kind: NonSuccessKind,
    detail: &FailureDetail,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let tag_name = kind.tag_name();
    let mut tag = BytesStart::new(tag_name);
    tag.push_attribute(("type", detail.ty.as_str()));
    if let Some(message) = &detail.message {
        tag.push_attribute(("message", message.as_str()));
    }
    writer.write_event(Event::Start(tag))?;

    for section in cdata_sections(&detail.stack_trace) {
        writer.write_event(Event::CData(BytesCData::new(section)))?;
    }

    serialize_end_tag(tag_name, writer)
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}

/// Splits text into pieces that can each be wrapped in a CDATA section.
///
/// A CDATA section cannot contain `]]>`, so the text is split between the `]]` and the `>`.
fn cdata_sections(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    iter::from_fn(move || {
        let current = rest?;
        match current.find(CDATA_END) {
            Some(index) => {
                let (section, remaining) = current.split_at(index + 2);
                rest = Some(remaining);
                Some(section)
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
