// SPDX-License-Identifier: Apache-2.0

//! Test execution: single tests, ordered groups and ignored tests.
//!
//! The runner owns the [`TestContext`] for one run. Tests execute strictly
//! in the order the caller supplies them, on the calling thread, with no
//! isolation between them. A required-check failure halts the runner after
//! its diagnostics are flushed; nothing later in the run executes.

use crate::context::{TestContext, TestStats};

/// Outcome of one wrapped test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    /// Every check in the function passed.
    Ok,
    /// At least one check failed; the run continues.
    Failed,
    /// A required check failed; the run must stop.
    Fatal,
}

/// Signature of a wrapped test function.
pub type TestFn = fn(&mut TestContext) -> TestResult;

/// A named, zero-setup unit of work registered with the runner.
///
/// `#[def_test]` emits one of these per test function; they can also be
/// built manually for old-style registration tables.
#[derive(Debug, Clone, Copy)]
pub struct TestDescriptor {
    name: &'static str,
    module: &'static str,
    func: TestFn,
    ignore: bool,
}

impl TestDescriptor {
    pub const fn new(name: &'static str, module: &'static str, func: TestFn, ignore: bool) -> Self {
        Self {
            name,
            module,
            func,
            ignore,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn module(&self) -> &'static str {
        self.module
    }
}

/// Sequential test runner with whole-run counters.
pub struct TestRunner {
    cx: TestContext,
    halted: bool,
}

impl TestRunner {
    /// Runner reporting to stderr.
    pub fn new() -> Self {
        Self::with_context(TestContext::new())
    }

    /// Runner over a caller-supplied context (e.g. with a capture sink).
    pub fn with_context(cx: TestContext) -> Self {
        Self { cx, halted: false }
    }

    /// True once a required check failed; all later calls are no-ops.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Snapshot of the whole-run totals.
    pub fn stats(&self) -> TestStats {
        self.cx.snapshot_global()
    }

    /// Run one test: reset the per-function window, print the start marker,
    /// execute the body, then print the per-function summary and end marker.
    pub fn run_test(&mut self, test: &TestDescriptor) -> TestResult {
        if self.halted {
            warn!("run halted; skipping test {}", test.name);
            return TestResult::Fatal;
        }
        if test.ignore {
            self.ignore_test("ignored at definition", test);
            return TestResult::Ok;
        }

        debug!("running test {} ({})", test.name, test.module);
        self.cx.begin_function_scope();
        self.cx.reporter().test_started(test.name);

        let mut result = (test.func)(&mut self.cx);

        let stats = self.cx.end_function_scope();
        if result == TestResult::Ok && stats.failed > 0 {
            result = TestResult::Failed;
        }
        self.cx.reporter().function_summary(stats);
        self.cx.reporter().test_finished(test.name);

        if result == TestResult::Fatal {
            error!("required check failed in {}; halting the run", test.name);
            self.halted = true;
        }
        result
    }

    /// Run a named group of tests, strictly in the supplied order.
    ///
    /// Returns `Ok` when every member passed, `Failed` when any member
    /// failed, `Fatal` when a required check stopped the group early.
    pub fn run_group(&mut self, name: &str, tests: &[TestDescriptor]) -> TestResult {
        if self.halted {
            warn!("run halted; skipping group {name}");
            return TestResult::Fatal;
        }
        if tests.is_empty() {
            warn!("no tests in group {name}");
        }

        self.cx.reporter().group_started(name);

        let mut group_result = TestResult::Ok;
        for test in tests {
            match self.run_test(test) {
                TestResult::Ok => {}
                TestResult::Failed => group_result = TestResult::Failed,
                TestResult::Fatal => return TestResult::Fatal,
            }
        }
        group_result
    }

    /// Record a test as ignored without executing it.
    pub fn ignore_test(&mut self, reason: &str, test: &TestDescriptor) {
        if self.halted {
            warn!("run halted; not recording ignore for {}", test.name);
            return;
        }
        debug!("ignoring test {}: {reason}", test.name);
        self.cx.record_ignored();
        self.cx.reporter().test_ignored(test.name, reason);
    }

    /// Print the final whole-run summary line and hand back the totals.
    ///
    /// The process exit status is the caller's business; assertion failures
    /// never fail the run here.
    pub fn finish(mut self) -> TestStats {
        let stats = self.cx.snapshot_global();
        self.cx.reporter().final_summary(stats);
        if let Err(err) = self.cx.flush() {
            error!("failed to flush diagnostic sink: {err}");
        }
        stats
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point: run one group over a fresh stderr-reporting
/// runner and print the final summary.
pub fn run(name: &str, tests: &[TestDescriptor]) -> TestStats {
    let mut runner = TestRunner::new();
    runner.run_group(name, tests);
    runner.finish()
}

/// Like [`run`], but reduced to whether every check passed.
pub fn run_ok(name: &str, tests: &[TestDescriptor]) -> bool {
    run(name, tests).all_passed()
}
