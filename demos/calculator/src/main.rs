// SPDX-License-Identifier: Apache-2.0

//! Demo suite exercising every runner mode against a toy calculator.
//!
//! Run with `RUST_LOG=debug` to see the runner's trace output alongside the
//! report lines.

use log::info;
use nanotest::{
    TestContext, TestRunner, check_eq, check_false, check_ge, check_le, check_ne, check_ptr_eq,
    check_ptr_ne, check_size_eq, check_true, def_test,
};

fn sum_int(x: i32, y: i32) -> i32 {
    x + y
}

fn sum_float(x: f32, y: f32) -> f32 {
    x + y
}

fn is_odd(num: i32) -> bool {
    num % 2 != 0
}

fn is_n(c: char) -> bool {
    c == 'n'
}

fn next_char(c: char) -> char {
    char::from_u32(c as u32 + 1).unwrap_or(c)
}

#[def_test]
fn test_sum_int(cx: &mut TestContext) {
    let result = sum_int(3, 4);
    check_eq!(cx, "3 + 4 must be equal to 7", 7, result);

    let result = sum_int(100, 200);
    check_ne!(cx, "100 + 200 must not be 301", 301, result);

    let result = sum_int(8, 1);
    check_ge!(cx, "10 must be greater than or equal 8 + 1", 10, result);

    let result = sum_int(9, 3);
    check_le!(cx, "10 must be less than or equal 9 + 3", 10, result);
}

#[def_test]
fn test_sum_float(cx: &mut TestContext) {
    let result = sum_float(3.1, 4.4);
    check_eq!(cx, "3.1 + 4.4 must be equal to 7.5", 7.5f32, result);

    let result = sum_float(7.3, 4.2);
    check_ne!(cx, "7.3 + 4.2 must not be equal to 5.2", 5.2f32, result);
}

#[def_test]
fn test_is_odd(cx: &mut TestContext) {
    check_false!(cx, "2 is an even number, we expect result to be false", is_odd(2));
    check_true!(cx, "3 is an odd number, we expect result to be true", is_odd(3));
}

#[def_test]
fn test_is_n(cx: &mut TestContext) {
    check_true!(cx, "n is equal to n", is_n('n'));
    check_false!(cx, "m is not equal to n", is_n('m'));
}

#[def_test]
fn test_next_char(cx: &mut TestContext) {
    check_eq!(cx, "b is next char of a in ASCII table", 'b', next_char('a'));
    check_ne!(cx, "c is not next char of a in ASCII table", 'c', next_char('a'));
}

#[def_test]
fn test_ptr_cmp(cx: &mut TestContext) {
    let num = 1;
    let x = &num;
    check_ptr_eq!(cx, "expected and actual value are same pointers", x, x);

    let other = 2;
    let y = &other;
    check_ptr_ne!(cx, "y points elsewhere, not equal to x", x, y);
}

#[def_test]
fn test_size(cx: &mut TestContext) {
    let x = 10;
    check_size_eq!(cx, "size of same value must be equal", x, x);
}

#[def_test]
fn test_ignored(cx: &mut TestContext) {
    let _ = cx;
}

fn main() {
    env_logger::init();

    let mut runner = TestRunner::new();

    // single test
    runner.run_test(&TEST_IS_N);

    // group test
    runner.run_group(
        "Group functions test",
        &[
            TEST_IS_ODD,
            TEST_SUM_INT,
            TEST_SUM_FLOAT,
            TEST_NEXT_CHAR,
            TEST_PTR_CMP,
            TEST_SIZE,
        ],
    );

    // ignored test
    runner.ignore_test("Empty test must be ignored", &TEST_IGNORED);

    let stats = runner.finish();
    info!(
        "run complete: {} checks, {} passed, {} failed, {} ignored",
        stats.total, stats.passed, stats.failed, stats.ignored
    );
}
