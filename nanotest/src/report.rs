// SPDX-License-Identifier: Apache-2.0

//! Line-oriented diagnostic reporting.
//!
//! One physical line per event, written verbatim to the diagnostic sink.
//! The formats are part of the external interface and must stay stable.

use std::fmt;
use std::io::{self, Write};

use crate::context::{FunctionStats, TestStats};

/// Writes report lines to a diagnostic sink.
///
/// A failed write never fails the run; it is surfaced once per line through
/// `log::error!` and the check outcome stands.
pub(crate) struct Reporter {
    out: Box<dyn Write>,
}

impl Reporter {
    pub(crate) fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    pub(crate) fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    fn write_line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(b"\n"))
        {
            error!("failed to write diagnostic line: {err}");
        }
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub(crate) fn check_passed(&mut self, description: &str, file: &str, line: u32) {
        self.write_line(format_args!("+ \t\"{description}\" {file}:{line} Ok."));
    }

    pub(crate) fn check_failed(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        detail: &str,
        required: bool,
    ) {
        self.write_line(format_args!(
            "- \t\"{description}\" {file}:{line} Error: {detail}"
        ));
        if required {
            self.write_line(format_args!(
                "This test is required and must pass to continue."
            ));
        }
    }

    pub(crate) fn group_started(&mut self, name: &str) {
        self.write_line(format_args!("Executing test group \"{name}\"..."));
    }

    pub(crate) fn test_started(&mut self, name: &str) {
        self.write_line(format_args!("RUNNING THE {name} ..."));
    }

    pub(crate) fn test_finished(&mut self, name: &str) {
        self.write_line(format_args!("EXITING THE {name} ..."));
    }

    pub(crate) fn test_ignored(&mut self, name: &str, reason: &str) {
        self.write_line(format_args!("{name} TEST IGNORED REASON: {reason}"));
    }

    pub(crate) fn function_summary(&mut self, stats: FunctionStats) {
        self.write_line(format_args!(
            "TESTS: ({}) | SUCCESSFUL: ({}) | FAILED: ({})",
            stats.total, stats.passed, stats.failed
        ));
    }

    pub(crate) fn final_summary(&mut self, stats: TestStats) {
        self.write_line(format_args!(
            "TOTAL TESTS: ({}) | TOTAL SUCCESSFUL TESTS: ({}) | TOTAL FAILED TESTS: ({}) | TOTAL IGNORED TESTS: ({})",
            stats.total, stats.passed, stats.failed, stats.ignored
        ));
    }
}
