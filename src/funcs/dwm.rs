//! Window frame attributes and visual styles.

use crate::co;
use crate::com::resolve;
use crate::dll::tables::{dwmapi, uxtheme};
use crate::error::HrResult;
use crate::types::{HWND, LPCWSTR, c_void};
use crate::utils::to_wstring;

type FnDwmSetWindowAttribute = unsafe extern "system" fn(HWND, u32, *const c_void, u32) -> i32;
type FnSetWindowTheme = unsafe extern "system" fn(HWND, LPCWSTR, LPCWSTR) -> i32;

/// `DwmSetWindowAttribute` with a plain-data value such as a `BOOL` or a
/// `COLORREF`.
pub fn set_window_attribute<T: Copy>(hwnd: HWND, attr: co::DWMWA, value: &T) -> HrResult<()> {
    let f: FnDwmSetWindowAttribute = resolve(&dwmapi::DwmSetWindowAttribute)?;
    let hr = unsafe {
        f(hwnd, attr.raw(), (value as *const T).cast(), size_of::<T>() as u32)
    };
    co::HRESULT::from_i32(hr).ok()
}

/// Dark title bar on Windows 10 20H1 and later.
pub fn set_dark_mode(hwnd: HWND, enabled: bool) -> HrResult<()> {
    let value: i32 = enabled.into();
    set_window_attribute(hwnd, co::DWMWA::USE_IMMERSIVE_DARK_MODE, &value)
}

/// `SetWindowTheme`. `None` for `app_name` restores the default theme, and
/// `Some("")` turns visual styles off for the window.
pub fn set_window_theme(hwnd: HWND, app_name: Option<&str>, id_list: Option<&str>) -> HrResult<()> {
    let f: FnSetWindowTheme = resolve(&uxtheme::SetWindowTheme)?;
    let app_name = app_name.map(to_wstring);
    let id_list = id_list.map(to_wstring);
    let hr = unsafe {
        f(
            hwnd,
            app_name.as_ref().map_or(std::ptr::null(), |v| v.as_ptr()),
            id_list.as_ref().map_or(std::ptr::null(), |v| v.as_ptr()),
        )
    };
    co::HRESULT::from_i32(hr).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_unavailable_off_windows() {
        let err = co::ERROR::CALL_NOT_IMPLEMENTED.to_hresult();
        assert_eq!(set_dark_mode(std::ptr::null_mut(), true), Err(err));
        assert_eq!(set_window_theme(std::ptr::null_mut(), Some("Explorer"), None), Err(err));
    }

    #[cfg(windows)]
    #[test]
    fn test_invalid_window_fails() {
        assert!(set_dark_mode(std::ptr::null_mut(), true).is_err());
    }
}
