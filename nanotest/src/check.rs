// SPDX-License-Identifier: Apache-2.0

//! Typed assertion engine and the `check_*!` macro surface.
//!
//! Every check records its outcome in both counting windows of the
//! [`TestContext`] and emits one report line. Scalar checks are constrained
//! to a closed set of comparable families so that mixing families (or
//! ordering booleans) is rejected at build time; pointer and size checks are
//! deliberately unconstrained.
//!
//! Ordering checks are inclusive and literal in argument order:
//! `check_ge!(cx, desc, expected, actual)` passes iff `expected >= actual`.

use std::fmt;

use crate::context::TestContext;

mod sealed {
    pub trait Sealed {}
}

/// A value the scalar checks accept: primitive integers, floats, `char` and
/// `bool`. Sealed; the set is closed by design.
pub trait CheckValue: sealed::Sealed + Copy + PartialEq + fmt::Display {
    /// How the value appears in a failure message.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// A [`CheckValue`] with a total order usable in ordering checks.
///
/// `bool` is excluded: ordering two booleans is a build-time error.
pub trait OrderedValue: CheckValue + PartialOrd {}

macro_rules! impl_ordered_value {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}
        impl CheckValue for $ty {}
        impl OrderedValue for $ty {}
    )*};
}

impl_ordered_value!(i8, i16, i32, i64, i128, isize);
impl_ordered_value!(u8, u16, u32, u64, u128, usize);
impl_ordered_value!(f32, f64);

impl sealed::Sealed for char {}
impl CheckValue for char {
    fn render(&self) -> String {
        format!("'{self}'")
    }
}
impl OrderedValue for char {}

impl sealed::Sealed for bool {}
impl CheckValue for bool {}

/// Verdict of one check.
///
/// `FatalFailure` is only produced by required checks and asks the caller to
/// stop: the `check_*!` macros translate it into an early return and the
/// runner halts the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Passed,
    Failed,
    FatalFailure,
}

impl Check {
    pub fn passed(self) -> bool {
        self == Check::Passed
    }

    pub fn is_fatal(self) -> bool {
        self == Check::FatalFailure
    }
}

impl TestContext {
    /// Record one evaluated predicate: counters first, then the report line.
    fn record_check(
        &mut self,
        passed: bool,
        description: &str,
        file: &str,
        line: u32,
        detail: impl FnOnce() -> String,
        required: bool,
    ) -> Check {
        if passed {
            self.record_pass();
            self.reporter().check_passed(description, file, line);
            Check::Passed
        } else {
            self.record_fail();
            let detail = detail();
            self.reporter()
                .check_failed(description, file, line, &detail, required);
            if required { Check::FatalFailure } else { Check::Failed }
        }
    }

    /// Passes iff `expected == actual`.
    pub fn check_eq<T: CheckValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected == actual,
            description,
            file,
            line,
            || format!("expected: {}, got: {}.", expected.render(), actual.render()),
            required,
        )
    }

    /// Passes iff `expected != actual`.
    pub fn check_ne<T: CheckValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected != actual,
            description,
            file,
            line,
            || {
                format!(
                    "{} not expected to be equal to {}.",
                    expected.render(),
                    actual.render()
                )
            },
            required,
        )
    }

    /// Passes iff `expected > actual`.
    pub fn check_gt<T: OrderedValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected > actual,
            description,
            file,
            line,
            || {
                format!(
                    "expected {} to be greater than {}.",
                    expected.render(),
                    actual.render()
                )
            },
            required,
        )
    }

    /// Passes iff `expected >= actual`.
    pub fn check_ge<T: OrderedValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected >= actual,
            description,
            file,
            line,
            || {
                format!(
                    "expected {} to be greater than or equal {}.",
                    expected.render(),
                    actual.render()
                )
            },
            required,
        )
    }

    /// Passes iff `expected < actual`.
    pub fn check_lt<T: OrderedValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected < actual,
            description,
            file,
            line,
            || {
                format!(
                    "expected {} to be less than {}.",
                    expected.render(),
                    actual.render()
                )
            },
            required,
        )
    }

    /// Passes iff `expected <= actual`.
    pub fn check_le<T: OrderedValue>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: T,
        actual: T,
        required: bool,
    ) -> Check {
        self.record_check(
            expected <= actual,
            description,
            file,
            line,
            || {
                format!(
                    "expected {} to be less than or equal {}.",
                    expected.render(),
                    actual.render()
                )
            },
            required,
        )
    }

    /// Passes iff `actual` is `true`.
    pub fn check_true(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        actual: bool,
        required: bool,
    ) -> Check {
        self.record_check(
            actual,
            description,
            file,
            line,
            || "expected actual value to be true, but got false.".to_owned(),
            required,
        )
    }

    /// Passes iff `actual` is `false`.
    pub fn check_false(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        actual: bool,
        required: bool,
    ) -> Check {
        self.record_check(
            !actual,
            description,
            file,
            line,
            || "expected actual value to be false, but got true.".to_owned(),
            required,
        )
    }

    /// Passes iff both pointers carry the same address. The pointee types
    /// are unconstrained, as in the scalar-only TypeGuard of the original.
    pub fn check_ptr_eq<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: *const E,
        actual: *const A,
        required: bool,
    ) -> Check {
        self.record_check(
            expected as usize == actual as usize,
            description,
            file,
            line,
            || format!("expected: {expected:p}, got: {actual:p}."),
            required,
        )
    }

    /// Passes iff the pointers carry different addresses.
    pub fn check_ptr_ne<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        expected: *const E,
        actual: *const A,
        required: bool,
    ) -> Check {
        self.record_check(
            expected as usize != actual as usize,
            description,
            file,
            line,
            || format!("{expected:p} not expected to be equal to {actual:p}."),
            required,
        )
    }

    /// Passes iff the operands' types have the same byte size. The runtime
    /// values never participate.
    pub fn check_size_eq<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        _expected: &E,
        _actual: &A,
        required: bool,
    ) -> Check {
        let (e, a) = (size_of::<E>(), size_of::<A>());
        self.record_check(
            e == a,
            description,
            file,
            line,
            || format!("expected size: {e}, got size: {a}."),
            required,
        )
    }

    /// Passes iff the operands' types differ in byte size.
    pub fn check_size_ne<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        _expected: &E,
        _actual: &A,
        required: bool,
    ) -> Check {
        let (e, a) = (size_of::<E>(), size_of::<A>());
        self.record_check(
            e != a,
            description,
            file,
            line,
            || format!("expected size: {e}, got size: {a}."),
            required,
        )
    }

    /// Passes iff the expected operand's type is strictly larger.
    pub fn check_size_gt<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        _expected: &E,
        _actual: &A,
        required: bool,
    ) -> Check {
        let (e, a) = (size_of::<E>(), size_of::<A>());
        self.record_check(
            e > a,
            description,
            file,
            line,
            || format!("expected size: {e}, got size: {a}."),
            required,
        )
    }

    /// Passes iff the expected operand's type is strictly smaller.
    pub fn check_size_lt<E, A>(
        &mut self,
        description: &str,
        file: &str,
        line: u32,
        _expected: &E,
        _actual: &A,
        required: bool,
    ) -> Check {
        let (e, a) = (size_of::<E>(), size_of::<A>());
        self.record_check(
            e < a,
            description,
            file,
            line,
            || format!("expected size: {e}, got size: {a}."),
            required,
        )
    }
}

/// Checks that two values of the same scalar family are equal.
///
/// With a trailing `required` token a failure halts the run; this form must
/// be used inside a `#[def_test]` function.
#[macro_export]
macro_rules! check_eq {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_eq($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_eq($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that two values of the same scalar family are not equal.
#[macro_export]
macro_rules! check_ne {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_ne($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_ne($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that `expected > actual`.
#[macro_export]
macro_rules! check_gt {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_gt($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_gt($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that `expected >= actual`.
#[macro_export]
macro_rules! check_ge {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_ge($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_ge($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that `expected < actual`.
#[macro_export]
macro_rules! check_lt {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_lt($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_lt($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that `expected <= actual`.
#[macro_export]
macro_rules! check_le {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_le($desc, file!(), line!(), $expected, $actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_le($desc, file!(), line!(), $expected, $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that a boolean is true.
#[macro_export]
macro_rules! check_true {
    ($cx:expr, $desc:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_true($desc, file!(), line!(), $actual, false);
    };
    ($cx:expr, $desc:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_true($desc, file!(), line!(), $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that a boolean is false.
#[macro_export]
macro_rules! check_false {
    ($cx:expr, $desc:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_false($desc, file!(), line!(), $actual, false);
    };
    ($cx:expr, $desc:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_false($desc, file!(), line!(), $actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that two pointers carry the same address.
#[macro_export]
macro_rules! check_ptr_eq {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_ptr_eq(
            $desc,
            file!(),
            line!(),
            $expected as *const _,
            $actual as *const _,
            false,
        );
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_ptr_eq(
                $desc,
                file!(),
                line!(),
                $expected as *const _,
                $actual as *const _,
                true,
            )
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that two pointers carry different addresses.
#[macro_export]
macro_rules! check_ptr_ne {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_ptr_ne(
            $desc,
            file!(),
            line!(),
            $expected as *const _,
            $actual as *const _,
            false,
        );
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_ptr_ne(
                $desc,
                file!(),
                line!(),
                $expected as *const _,
                $actual as *const _,
                true,
            )
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that the operands' types have equal byte sizes.
#[macro_export]
macro_rules! check_size_eq {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_size_eq($desc, file!(), line!(), &$expected, &$actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_size_eq($desc, file!(), line!(), &$expected, &$actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that the operands' types differ in byte size.
#[macro_export]
macro_rules! check_size_ne {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_size_ne($desc, file!(), line!(), &$expected, &$actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_size_ne($desc, file!(), line!(), &$expected, &$actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that the expected operand's type is strictly larger.
#[macro_export]
macro_rules! check_size_gt {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_size_gt($desc, file!(), line!(), &$expected, &$actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_size_gt($desc, file!(), line!(), &$expected, &$actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}

/// Checks that the expected operand's type is strictly smaller.
#[macro_export]
macro_rules! check_size_lt {
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr $(,)?) => {
        let _ = $cx.check_size_lt($desc, file!(), line!(), &$expected, &$actual, false);
    };
    ($cx:expr, $desc:expr, $expected:expr, $actual:expr, required $(,)?) => {
        if $cx
            .check_size_lt($desc, file!(), line!(), &$expected, &$actual, true)
            .is_fatal()
        {
            return $crate::TestResult::Fatal;
        }
    };
}
