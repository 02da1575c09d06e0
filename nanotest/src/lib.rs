// SPDX-License-Identifier: Apache-2.0

//! Minimal grouped unit-testing library with counted assertions.
//!
//! Tests are plain functions over a [`TestContext`], defined with
//! `#[def_test]` and registered explicitly with a [`TestRunner`] as single
//! tests, ordered groups or ignored entries. Every `check_*!` call updates
//! the run-wide and per-function counters and emits one diagnostic line;
//! a `required` check failure halts the rest of the run.
//!
//! ```no_run
//! use nanotest::{TestContext, TestRunner, check_eq, def_test};
//!
//! #[def_test]
//! fn addition(cx: &mut TestContext) {
//!     check_eq!(cx, "3 + 4 must be equal to 7", 7, 3 + 4);
//! }
//!
//! fn main() {
//!     let mut runner = TestRunner::new();
//!     runner.run_group("arithmetic", &[ADDITION]);
//!     runner.finish();
//! }
//! ```

#[macro_use]
extern crate log;

pub mod check;
pub mod context;
mod report;
pub mod runner;

// Re-export the def_test macro from the nanotest-macros crate
pub use nanotest_macros::def_test;
// Re-export commonly used types
pub use check::{Check, CheckValue, OrderedValue};
pub use context::{FunctionStats, TestContext, TestStats};
pub use runner::{TestDescriptor, TestFn, TestResult, TestRunner};
// Re-export the group entry points
pub use runner::{run, run_ok};
