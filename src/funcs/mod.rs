//! Safe wrappers over the lazily bound procedures in [`crate::dll::tables`].
//!
//! A wrapper fails with the resolution error when the export is unavailable,
//! or with the OS error the call itself reports.

pub mod dwm;
pub mod gdi;
pub mod kernel;
pub mod shell;
pub mod user;

use crate::co;

/// `GetLastError`, or `fallback` when the OS did not set one.
pub(crate) fn last_error_or(fallback: co::ERROR) -> co::ERROR {
    let err = kernel::get_last_error();
    if err.is_success() { fallback } else { err }
}
