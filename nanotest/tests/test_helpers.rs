// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use nanotest::{TestContext, TestRunner};

/// Cloneable sink capturing everything the reporter writes.
#[derive(Clone, Default)]
pub struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("captured output is not UTF-8")
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A context writing into a capture sink instead of stderr.
pub fn capture_context() -> (TestContext, CaptureSink) {
    init_logging();
    let sink = CaptureSink::new();
    let cx = TestContext::with_output(Box::new(sink.clone()));
    (cx, sink)
}

/// A runner over a capturing context.
pub fn capture_runner() -> (TestRunner, CaptureSink) {
    let (cx, sink) = capture_context();
    (TestRunner::with_context(cx), sink)
}
