#![allow(non_snake_case)]

use crate::co;
use crate::dll::tables::kernel32;
use crate::error::SysResult;
use crate::types::{LPWSTR, c_void};

type FnGetCurrentThreadId = unsafe extern "system" fn() -> u32;
type FnGetCurrentProcessId = unsafe extern "system" fn() -> u32;
type FnGetTickCount64 = unsafe extern "system" fn() -> u64;
type FnFormatMessageW = unsafe extern "system" fn(
    dwFlags: u32,
    lpSource: *const c_void,
    dwMessageId: u32,
    dwLanguageId: u32,
    lpBuffer: LPWSTR,
    nSize: u32,
    Arguments: *const c_void,
) -> u32;

/// Calling thread's last error code.
///
/// Linked directly rather than resolved lazily, so a first-time resolution
/// cannot overwrite the value being read.
pub fn get_last_error() -> co::ERROR {
    #[cfg(windows)]
    {
        co::ERROR::from_raw(unsafe { windows_sys::Win32::Foundation::GetLastError() })
    }
    #[cfg(not(windows))]
    {
        co::ERROR::SUCCESS
    }
}

pub fn current_thread_id() -> SysResult<u32> {
    let f: FnGetCurrentThreadId = unsafe { kernel32::GetCurrentThreadId.as_fn()? };
    Ok(unsafe { f() })
}

pub fn current_process_id() -> SysResult<u32> {
    let f: FnGetCurrentProcessId = unsafe { kernel32::GetCurrentProcessId.as_fn()? };
    Ok(unsafe { f() })
}

/// Milliseconds since boot.
pub fn tick_count() -> SysResult<u64> {
    let f: FnGetTickCount64 = unsafe { kernel32::GetTickCount64.as_fn()? };
    Ok(unsafe { f() })
}

/// System message text for `code`, without the trailing line break.
pub fn format_message(code: co::ERROR) -> SysResult<String> {
    let f: FnFormatMessageW = unsafe { kernel32::FormatMessageW.as_fn()? };
    let flags = co::FORMAT_MESSAGE::FROM_SYSTEM | co::FORMAT_MESSAGE::IGNORE_INSERTS;
    let mut buf = vec![0u16; 1024];
    let len = unsafe {
        f(
            flags.raw(),
            std::ptr::null(),
            code.raw(),
            0,
            buf.as_mut_ptr(),
            buf.len() as u32,
            std::ptr::null(),
        )
    };
    if len == 0 {
        return Err(super::last_error_or(co::ERROR::INVALID_PARAMETER));
    }
    buf.truncate(len as usize);
    Ok(String::from_utf16_lossy(&buf).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_unavailable_off_windows() {
        assert_eq!(get_last_error(), co::ERROR::SUCCESS);
        assert_eq!(tick_count(), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
        assert_eq!(format_message(co::ERROR::ACCESS_DENIED), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
    }

    #[cfg(windows)]
    #[test]
    fn test_system_calls() {
        assert!(current_thread_id().unwrap() != 0);
        assert!(tick_count().unwrap() > 0);
        let text = format_message(co::ERROR::FILE_NOT_FOUND).unwrap();
        assert!(!text.is_empty());
        assert!(!text.ends_with('\n'));
    }
}
