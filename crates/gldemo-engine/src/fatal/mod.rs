//! Process-wide fatal error reporting.
//!
//! Every unrecoverable failure ends here. The reporter formats the message,
//! writes it to stderr (and on Windows shows it in a message box), then
//! aborts, so a debugger or core dump still sees the process state at the
//! point of failure. It never returns.
//!
//! Lower layers return `Result`s; [`OrFatal`] is the adapter used at the top
//! of the program to turn any of them into a fatal error.

mod dialog;
mod message;

use std::fmt;
use std::io::Write as _;

use message::{FatalMessage, STACK_BUFFER_LEN};

pub use dialog::DIALOG_ENV;

/// Reports `args` as a fatal error and aborts the process.
///
/// Prefer the [`fatal!`](crate::fatal!) macro, which builds the arguments.
#[cold]
pub fn fatal_error(args: fmt::Arguments<'_>) -> ! {
    let message = FatalMessage::format(args);

    log::logger().flush();

    // Nothing useful can be done if stderr is gone; abort regardless.
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "Fatal error: {}", message.as_str());
    if message.is_truncated() {
        let _ = writeln!(stderr, "(message truncated to {STACK_BUFFER_LEN} bytes)");
    }
    let _ = stderr.flush();
    drop(stderr);

    if dialog::dialog_enabled(std::env::var(DIALOG_ENV).ok().as_deref()) {
        dialog::show(message.as_str());
    }

    // The formatted message is intentionally leaked: abort skips destructors.
    std::process::abort()
}

/// Formats a message like `format!` and terminates through [`fatal_error`].
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::fatal::fatal_error(::core::format_args!($($arg)*))
    };
}

/// Turns a failed `Result` into a fatal error.
pub trait OrFatal<T> {
    /// Returns the `Ok` value, or reports `"{what}: {err:#}"` and aborts.
    fn or_fatal(self, what: &str) -> T;
}

impl<T, E> OrFatal<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn or_fatal(self, what: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal_error(format_args!("{what}: {err:#}")),
        }
    }
}
