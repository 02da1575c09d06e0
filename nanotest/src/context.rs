// SPDX-License-Identifier: Apache-2.0

//! Counter state shared by assertions, test wrappers and the runner.
//!
//! The original design kept process-wide mutable counters; here they live in
//! an owned [`TestContext`] threaded through every call, with two nested
//! counting windows: the whole run and the currently executing test function.

use std::io::{self, Write};

use crate::report::Reporter;

/// Whole-run totals, as reported in the final summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub ignored: u32,
}

impl TestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no recorded check failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Per-test-function totals, read back for the per-function summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

/// Counter state for one test run plus the diagnostic sink the report lines
/// are written to.
///
/// Invariant: `total == passed + failed` holds in both counting windows after
/// every recorded check; ignored tests are not checks and only bump
/// `ignored`.
pub struct TestContext {
    global: TestStats,
    function: FunctionStats,
    reporter: Reporter,
}

impl TestContext {
    /// Context reporting to the process's diagnostic stream (stderr).
    pub fn new() -> Self {
        Self::with_reporter(Reporter::stderr())
    }

    /// Context reporting to an arbitrary sink. Used to capture output.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self::with_reporter(Reporter::new(out))
    }

    fn with_reporter(reporter: Reporter) -> Self {
        Self {
            global: TestStats::new(),
            function: FunctionStats::default(),
            reporter,
        }
    }

    /// Record one passed check in both counting windows.
    pub fn record_pass(&mut self) {
        self.global.total += 1;
        self.global.passed += 1;
        self.function.total += 1;
        self.function.passed += 1;
    }

    /// Record one failed check in both counting windows.
    pub fn record_fail(&mut self) {
        self.global.total += 1;
        self.global.failed += 1;
        self.function.total += 1;
        self.function.failed += 1;
    }

    /// Record one ignored test. Does not count as a check.
    pub fn record_ignored(&mut self) {
        self.global.ignored += 1;
    }

    /// Zero the per-function window. Called when a wrapped test starts.
    pub fn begin_function_scope(&mut self) {
        self.function = FunctionStats::default();
    }

    /// Read back the per-function window for the summary line.
    pub fn end_function_scope(&self) -> FunctionStats {
        self.function
    }

    /// Snapshot of the whole-run totals.
    pub fn snapshot_global(&self) -> TestStats {
        self.global
    }

    pub(crate) fn reporter(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Flush the diagnostic sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.reporter.flush()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
