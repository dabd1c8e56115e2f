use std::time::Duration;

use crate::co;
use crate::dll::tables::user32;
use crate::error::SysResult;
use crate::types::{BOOL, COLORREF, HWND, LPARAM, LPCWSTR, LRESULT, WPARAM};
use crate::utils::to_wstring;

type FnMessageBoxW = unsafe extern "system" fn(HWND, LPCWSTR, LPCWSTR, u32) -> i32;
type FnGetSystemMetrics = unsafe extern "system" fn(i32) -> i32;
type FnGetSysColor = unsafe extern "system" fn(i32) -> u32;
type FnGetDoubleClickTime = unsafe extern "system" fn() -> u32;
type FnPostMessageW = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> BOOL;
type FnSendMessageW = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT;

/// Modal message box; returns the button the user picked.
pub fn message_box(hwnd: HWND, text: &str, caption: &str, flags: co::MB) -> SysResult<co::DLGID> {
    let f: FnMessageBoxW = unsafe { user32::MessageBoxW.as_fn()? };
    let text = to_wstring(text);
    let caption = to_wstring(caption);
    match unsafe { f(hwnd, text.as_ptr(), caption.as_ptr(), flags.raw()) } {
        0 => Err(super::last_error_or(co::ERROR::INVALID_PARAMETER)),
        id => Ok(co::DLGID::from_raw(id)),
    }
}

/// A zero result is a valid answer for most indexes and is not an error.
pub fn get_system_metrics(index: co::SM) -> SysResult<i32> {
    let f: FnGetSystemMetrics = unsafe { user32::GetSystemMetrics.as_fn()? };
    Ok(unsafe { f(index.raw()) })
}

pub fn get_sys_color(index: co::COLOR) -> SysResult<COLORREF> {
    let f: FnGetSysColor = unsafe { user32::GetSysColor.as_fn()? };
    Ok(unsafe { f(index.raw()) })
}

pub fn double_click_time() -> SysResult<Duration> {
    let f: FnGetDoubleClickTime = unsafe { user32::GetDoubleClickTime.as_fn()? };
    Ok(Duration::from_millis(unsafe { f() } as u64))
}

pub fn post_message(hwnd: HWND, msg: co::WM, wparam: WPARAM, lparam: LPARAM) -> SysResult<()> {
    let f: FnPostMessageW = unsafe { user32::PostMessageW.as_fn()? };
    if unsafe { f(hwnd, msg.raw(), wparam, lparam) } == 0 {
        return Err(super::last_error_or(co::ERROR::INVALID_WINDOW_HANDLE));
    }
    Ok(())
}

/// # Safety
/// `wparam` and `lparam` must be valid for `msg`; many messages carry
/// pointers the receiver dereferences.
pub unsafe fn send_message(hwnd: HWND, msg: co::WM, wparam: WPARAM, lparam: LPARAM) -> SysResult<LRESULT> {
    let f: FnSendMessageW = unsafe { user32::SendMessageW.as_fn()? };
    Ok(unsafe { f(hwnd, msg.raw(), wparam, lparam) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_unavailable_off_windows() {
        let none = std::ptr::null_mut();
        assert_eq!(
            message_box(none, "text", "caption", co::MB::OK),
            Err(co::ERROR::CALL_NOT_IMPLEMENTED)
        );
        assert_eq!(get_system_metrics(co::SM::CXSCREEN), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
        assert_eq!(post_message(none, co::WM::NULL, 0, 0), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
    }

    #[cfg(windows)]
    #[test]
    fn test_system_queries() {
        assert!(get_system_metrics(co::SM::CXSCREEN).is_ok());
        assert!(double_click_time().unwrap() > Duration::ZERO);
        assert!(post_message(std::ptr::null_mut(), co::WM::NULL, 0, 0).is_ok());
    }
}
