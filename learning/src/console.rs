//! Console output with in-process redirection.
//!
//! Everything the program prints goes through [`write_line`]. By default
//! that is the process's standard output; [`redirect`] swaps in another
//! writer for the current thread until the returned guard is dropped.
//! Redirects stack: dropping a guard restores whatever was active before
//! it was created, discarding any redirects made after it.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::LINE_ENDING;

type Sink = Box<dyn Write>;

thread_local! {
    static SINKS: RefCell<Vec<Sink>> = RefCell::new(Vec::new());
}

/// Writes `text` followed by the platform line terminator, then flushes.
pub fn write_line(text: &str) -> io::Result<()> {
    SINKS.with(|sinks| match sinks.borrow_mut().last_mut() {
        Some(out) => emit(out, text),
        None => emit(&mut io::stdout().lock(), text),
    })
}

fn emit<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.write_all(LINE_ENDING.as_bytes())?;
    out.flush()
}

/// Sends this thread's console output to `sink` until the guard drops.
pub fn redirect(sink: Sink) -> Redirect {
    let depth = SINKS.with(|sinks| {
        let mut sinks = sinks.borrow_mut();
        sinks.push(sink);
        sinks.len() - 1
    });
    Redirect { depth }
}

/// Returns true while a [`Redirect`] is active on this thread.
pub fn is_redirected() -> bool {
    SINKS.with(|sinks| !sinks.borrow().is_empty())
}

/// Restores the previously active sink when dropped, including on unwind.
#[must_use = "output is restored as soon as the guard is dropped"]
pub struct Redirect {
    depth: usize,
}

impl Drop for Redirect {
    fn drop(&mut self) {
        // No-op if an outer guard already dropped this level.
        let removed = SINKS.with(|sinks| {
            let mut sinks = sinks.borrow_mut();
            let keep = self.depth.min(sinks.len());
            sinks.split_off(keep)
        });
        drop(removed);
    }
}

/// In-memory writer whose clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Captured output, with any invalid UTF-8 replaced.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with console output captured into a fresh buffer.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::new();
    let result = {
        let _guard = redirect(Box::new(buffer.clone()));
        f()
    };
    (result, buffer.contents())
}
