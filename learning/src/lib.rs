//! Hello world
//!
//! The greeting lives in the library so it can be called in-process;
//! the `hello-world` binary is a thin wrapper around [`run`].

pub mod console;
pub mod error;

pub use error::{HelloError, HelloResult};

/// The line the program prints.
pub const GREETING: &str = "Hello world!";

/// Line terminator of the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Returns the greeting without a line terminator.
pub fn greet() -> &'static str {
    GREETING
}

/// Prints the greeting. Arguments of any kind are accepted and ignored.
pub fn run<I: IntoIterator>(args: I) -> HelloResult<()> {
    let ignored = args.into_iter().count();
    log::debug!("ignoring {} argument(s)", ignored);

    console::write_line(greet())?;
    Ok(())
}
