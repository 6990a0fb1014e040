// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Throwables captured by the test engine, and their stack trace rendering.

use serde::{Deserialize, Serialize};
use swrite::{SWrite, swriteln};

/// Whether a throwable signals a failed verification or something unexpected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrowableKind {
    /// An assertion or verification failure.
    Assertion,

    /// Any other throwable.
    #[default]
    Other,
}

/// A throwable captured while executing a method.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Throwable {
    /// Whether this is an assertion failure.
    #[serde(default)]
    pub kind: ThrowableKind,

    /// The fully qualified type name.
    pub type_name: String,

    /// The message, if any.
    #[serde(default)]
    pub message: Option<String>,

    /// Call frames, innermost first.
    #[serde(default)]
    pub frames: Vec<String>,

    /// The throwable that caused this one.
    #[serde(default)]
    pub cause: Option<Box<Throwable>>,

    /// A stack trace already rendered by the engine.
    ///
    /// If present, this is reported verbatim instead of being rendered from `frames` and
    /// `cause`.
    #[serde(default)]
    pub stack_trace: Option<String>,
}

impl Throwable {
    /// Creates a new throwable of the given kind and type.
    pub fn new(kind: ThrowableKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            message: None,
            frames: vec![],
            cause: None,
            stack_trace: None,
        }
    }

    /// Creates a new assertion failure.
    pub fn assertion(type_name: impl Into<String>) -> Self {
        Self::new(ThrowableKind::Assertion, type_name)
    }

    /// Creates a new throwable that is not an assertion failure.
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::new(ThrowableKind::Other, type_name)
    }

    /// Sets the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Appends call frames.
    pub fn add_frames(&mut self, frames: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.frames.extend(frames.into_iter().map(Into::into));
        self
    }

    /// Sets the cause.
    pub fn set_cause(&mut self, cause: Throwable) -> &mut Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Sets a pre-rendered stack trace.
    pub fn set_stack_trace(&mut self, stack_trace: impl Into<String>) -> &mut Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Returns true if this is an assertion failure.
    pub fn is_assertion(&self) -> bool {
        self.kind == ThrowableKind::Assertion
    }

    /// Returns the first line of the stack trace: the type name, followed by the message if
    /// there is one.
    pub fn header(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.type_name, message),
            None => self.type_name.clone(),
        }
    }

    /// Renders the full stack trace.
    ///
    /// Each frame is printed on its own line as `\tat <frame>`. Causes follow as
    /// `Caused by: <header>`; frames a cause shares with the trace it is nested in are elided as
    /// `\t... <n> more`.
    pub fn render_stack_trace(&self) -> String {
        if let Some(stack_trace) = &self.stack_trace {
            return stack_trace.clone();
        }

        let mut out = String::new();
        self.write_trace(&mut out, "", &[]);
        out
    }

    fn write_trace(&self, out: &mut String, prefix: &str, enclosing_frames: &[String]) {
        let in_common = self
            .frames
            .iter()
            .rev()
            .zip(enclosing_frames.iter().rev())
            .take_while(|(frame, enclosing)| frame == enclosing)
            .count();

        swriteln!(out, "{prefix}{}", self.header());
        for frame in &self.frames[..self.frames.len() - in_common] {
            swriteln!(out, "\tat {frame}");
        }
        if in_common > 0 {
            swriteln!(out, "\t... {in_common} more");
        }

        if let Some(cause) = &self.cause {
            cause.write_trace(out, "Caused by: ", &self.frames);
        }
    }
}
