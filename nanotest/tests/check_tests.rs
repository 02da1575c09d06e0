// SPDX-License-Identifier: Apache-2.0

//! Unit tests for the assertion engine and counter discipline

#![cfg(test)]

mod test_helpers;

use nanotest::{Check, check_eq, check_ge, check_gt, check_le, check_lt, check_ne, check_size_eq};
use test_helpers::*;

// ========== Counter Discipline Tests ==========

#[test]
fn every_check_bumps_totals_exactly_once() {
    let (mut cx, _sink) = capture_context();

    for i in 0..5_i32 {
        check_eq!(cx, "value matches itself", i, i);
        let stats = cx.snapshot_global();
        assert_eq!(stats.passed + stats.failed, stats.total);
    }
    check_eq!(cx, "seven is not eight", 7, 8);

    let stats = cx.snapshot_global();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.passed, 5);
    assert_eq!(stats.failed, 1);
}

#[test]
fn both_counting_windows_move_together() {
    let (mut cx, _sink) = capture_context();
    cx.begin_function_scope();

    check_eq!(cx, "pass", 1, 1);
    check_ne!(cx, "fail", 2, 2);

    let function = cx.end_function_scope();
    assert_eq!(function.total, 2);
    assert_eq!(function.passed, 1);
    assert_eq!(function.failed, 1);

    let global = cx.snapshot_global();
    assert_eq!(global.total, 2);
    assert_eq!(global.passed, 1);
    assert_eq!(global.failed, 1);
}

// ========== Equality Tests ==========

#[test]
fn eq_passes_on_equal_ints() {
    let (mut cx, sink) = capture_context();

    let check = cx.check_eq("seven is seven", "calc.rs", 12, 7, 7, false);

    assert_eq!(check, Check::Passed);
    assert_eq!(sink.contents(), "+ \t\"seven is seven\" calc.rs:12 Ok.\n");
}

#[test]
fn eq_failure_reports_both_values() {
    let (mut cx, sink) = capture_context();

    let check = cx.check_eq("seven is eight", "calc.rs", 34, 7, 8, false);

    assert_eq!(check, Check::Failed);
    assert_eq!(
        sink.contents(),
        "- \t\"seven is eight\" calc.rs:34 Error: expected: 7, got: 8.\n"
    );
}

#[test]
fn ne_failure_message_names_both_operands() {
    let (mut cx, sink) = capture_context();

    cx.check_ne("five differs from five", "calc.rs", 9, 5, 5, false);

    assert!(
        sink.contents()
            .contains("Error: 5 not expected to be equal to 5.")
    );
}

#[test]
fn char_values_render_quoted() {
    let (mut cx, sink) = capture_context();

    cx.check_eq("b follows a", "chars.rs", 3, 'b', 'c', false);

    assert!(sink.contents().contains("expected: 'b', got: 'c'."));
}

#[test]
fn float_equality_is_exact() {
    let (mut cx, _sink) = capture_context();

    check_eq!(cx, "halves add up", 1.0_f64, 0.5 + 0.5);
    check_ne!(cx, "tenths do not", 0.3_f64, 0.1 + 0.2);

    assert_eq!(cx.snapshot_global().failed, 0);
}

// ========== Ordering Semantics Tests ==========
// Inclusive and literal in argument order: ge passes iff expected >= actual.

#[test]
fn ge_treats_equality_as_passing() {
    let (mut cx, _sink) = capture_context();

    check_ge!(cx, "ten is at least ten", 10, 10);
    check_ge!(cx, "ten is at least nine", 10, 9);
    check_ge!(cx, "nine is not at least ten", 9, 10);

    let stats = cx.snapshot_global();
    assert_eq!(stats.passed, 2);
    assert_eq!(stats.failed, 1);
}

#[test]
fn le_treats_equality_as_passing() {
    let (mut cx, _sink) = capture_context();

    check_le!(cx, "ten is at most ten", 10, 10);
    check_le!(cx, "nine is at most ten", 9, 10);
    check_le!(cx, "ten is not at most nine", 10, 9);

    let stats = cx.snapshot_global();
    assert_eq!(stats.passed, 2);
    assert_eq!(stats.failed, 1);
}

#[test]
fn strict_orderings_fail_on_equality() {
    let (mut cx, _sink) = capture_context();

    check_gt!(cx, "ten is not above ten", 10, 10);
    check_lt!(cx, "ten is not below ten", 10, 10);

    assert_eq!(cx.snapshot_global().failed, 2);
}

#[test]
fn ordering_failure_message_wording() {
    let (mut cx, sink) = capture_context();

    cx.check_gt("three above four", "ord.rs", 7, 3, 4, false);

    assert!(
        sink.contents()
            .contains("Error: expected 3 to be greater than 4.")
    );
}

// ========== Boolean Tests ==========

#[test]
fn true_and_false_checks() {
    let (mut cx, sink) = capture_context();

    cx.check_true("holds", "flags.rs", 1, true, false);
    cx.check_false("does not hold", "flags.rs", 2, false, false);
    cx.check_true("broken", "flags.rs", 3, false, false);

    let stats = cx.snapshot_global();
    assert_eq!(stats.passed, 2);
    assert_eq!(stats.failed, 1);
    assert!(
        sink.contents()
            .contains("Error: expected actual value to be true, but got false.")
    );
}

// ========== Pointer Tests ==========

#[test]
fn pointer_checks_compare_addresses() {
    let (mut cx, _sink) = capture_context();

    let first = 1;
    let second = 1;

    cx.check_ptr_eq("same place", "ptr.rs", 5, &first, &first, false);
    cx.check_ptr_ne("different places", "ptr.rs", 6, &first, &second, false);

    assert_eq!(cx.snapshot_global().failed, 0);
}

#[test]
fn pointer_failure_renders_addresses() {
    let (mut cx, sink) = capture_context();

    let first = 1;
    let second = 1;
    cx.check_ptr_eq("must alias", "ptr.rs", 8, &first, &second, false);

    let out = sink.contents();
    assert!(out.contains("Error: expected: 0x"));
    assert!(out.contains(", got: 0x"));
}

// ========== Size Tests ==========

#[test]
fn size_checks_compare_types_not_values() {
    let (mut cx, _sink) = capture_context();

    // Same type, different values: still equal in size.
    let x: i32 = 10;
    let y: i32 = -3;
    check_size_eq!(cx, "two ints share a size", x, y);

    assert_eq!(cx.snapshot_global().passed, 1);
}

#[test]
fn size_checks_across_types() {
    let (mut cx, sink) = capture_context();

    let small: u8 = 0;
    let large: u64 = 0;

    cx.check_size_ne("u8 differs from u64", "size.rs", 4, &small, &large, false);
    cx.check_size_lt("u8 is smaller than u64", "size.rs", 5, &small, &large, false);
    cx.check_size_gt("u64 is larger than u8", "size.rs", 6, &large, &small, false);
    cx.check_size_eq("u8 is not u64-sized", "size.rs", 7, &small, &large, false);

    let stats = cx.snapshot_global();
    assert_eq!(stats.passed, 3);
    assert_eq!(stats.failed, 1);
    assert!(
        sink.contents()
            .contains("Error: expected size: 1, got size: 8.")
    );
}

// ========== Required Checks ==========

#[test]
fn required_failure_is_fatal_and_announced() {
    let (mut cx, sink) = capture_context();

    let check = cx.check_eq("must hold", "calc.rs", 90, 1, 2, true);

    assert_eq!(check, Check::FatalFailure);
    let out = sink.contents();
    assert!(out.contains("- \t\"must hold\" calc.rs:90 Error: expected: 1, got: 2.\n"));
    assert!(out.contains("This test is required and must pass to continue.\n"));
}

#[test]
fn required_pass_is_not_fatal() {
    let (mut cx, sink) = capture_context();

    let check = cx.check_eq("holds", "calc.rs", 91, 2, 2, true);

    assert_eq!(check, Check::Passed);
    assert!(!sink.contents().contains("required"));
}
