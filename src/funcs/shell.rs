use crate::co;
use crate::dll::tables::{shell32, shlwapi};
use crate::error::SysResult;
use crate::types::{HINSTANCE, HWND, LPCWSTR, LPWSTR};
use crate::utils::{from_wide, to_wstring};

type FnShellExecuteW = unsafe extern "system" fn(HWND, LPCWSTR, LPCWSTR, LPCWSTR, LPCWSTR, i32) -> HINSTANCE;
type FnStrFormatByteSizeW = unsafe extern "system" fn(i64, LPWSTR, u32) -> LPWSTR;

/// `ShellExecuteW`. `operation` is a verb such as `"open"` or `"runas"`.
pub fn shell_execute(
    hwnd: HWND,
    operation: &str,
    file: &str,
    parameters: Option<&str>,
    directory: Option<&str>,
    show: co::SW,
) -> SysResult<()> {
    let f: FnShellExecuteW = unsafe { shell32::ShellExecuteW.as_fn()? };
    let operation = to_wstring(operation);
    let file = to_wstring(file);
    let parameters = parameters.map(to_wstring);
    let directory = directory.map(to_wstring);
    let opt_ptr = |s: &Option<Vec<u16>>| s.as_ref().map_or(std::ptr::null(), |v| v.as_ptr());

    let ret = unsafe {
        f(
            hwnd,
            operation.as_ptr(),
            file.as_ptr(),
            opt_ptr(&parameters),
            opt_ptr(&directory),
            show.raw(),
        )
    } as usize;
    // Values up to 32 are SE_ERR_* codes, not instance handles.
    if ret <= 32 {
        return Err(se_err_to_error(ret).unwrap_or_else(|| super::last_error_or(co::ERROR::GEN_FAILURE)));
    }
    Ok(())
}

/// Win32 error equivalent of a `ShellExecuteW` `SE_ERR_*` return value.
fn se_err_to_error(code: usize) -> Option<co::ERROR> {
    Some(match code {
        0 => co::ERROR::OUTOFMEMORY,
        2 => co::ERROR::FILE_NOT_FOUND,
        3 => co::ERROR::PATH_NOT_FOUND,
        5 => co::ERROR::ACCESS_DENIED,
        8 => co::ERROR::NOT_ENOUGH_MEMORY,
        11 => co::ERROR::BAD_FORMAT,
        26 => co::ERROR::SHARING_VIOLATION,
        27 | 31 => co::ERROR::NO_ASSOCIATION,
        28 => co::ERROR::TIMEOUT,
        29 | 30 => co::ERROR::DDE_FAIL,
        32 => co::ERROR::DLL_NOT_FOUND,
        _ => return None,
    })
}

/// Size in bytes as Explorer shows it, e.g. `"1.50 KB"`.
pub fn format_byte_size(bytes: u64) -> SysResult<String> {
    let f: FnStrFormatByteSizeW = unsafe { shlwapi::StrFormatByteSizeW.as_fn()? };
    let mut buf = [0u16; 32];
    let size = i64::try_from(bytes).unwrap_or(i64::MAX);
    let ptr = unsafe { f(size, buf.as_mut_ptr(), buf.len() as u32) };
    if ptr.is_null() {
        return Err(co::ERROR::INSUFFICIENT_BUFFER);
    }
    Ok(from_wide(&buf))
}
