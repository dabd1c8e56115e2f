//! Procedure tables for the system libraries the crate calls into.

use super::{ProcTable, proc_table};

proc_table!(kernel32, "kernel32.dll" {
    GetLastError,
    SetLastError,
    GetCurrentThreadId,
    GetCurrentProcessId,
    GetTickCount64,
    FormatMessageW,
    LocalFree,
    GetModuleHandleW,
    Sleep,
});

proc_table!(user32, "user32.dll" {
    MessageBoxW,
    GetSystemMetrics,
    GetSysColor,
    GetDoubleClickTime,
    PostMessageW,
    SendMessageW,
    DestroyWindow,
    GetForegroundWindow,
    SetForegroundWindow,
    GetWindowThreadProcessId,
    FlashWindowEx,
    LoadCursorW,
    LoadIconW,
});

proc_table!(gdi32, "gdi32.dll" {
    GetStockObject,
    DeleteObject,
    CreateSolidBrush,
    CreateFontIndirectW,
    SetBkMode,
    SetTextColor,
});

proc_table!(shell32, "shell32.dll" {
    ShellExecuteW,
    DragQueryFileW,
    DragFinish,
});

proc_table!(shlwapi, "shlwapi.dll" {
    StrFormatByteSizeW,
});

proc_table!(ole32, "ole32.dll" {
    CoInitializeEx,
    CoUninitialize,
    CoCreateInstance,
    CoTaskMemFree,
});

proc_table!(advapi32, "advapi32.dll" {
    RegOpenKeyExW,
    RegCreateKeyExW,
    RegQueryValueExW,
    RegSetValueExW,
    RegDeleteValueW,
    RegDeleteTreeW,
    RegCloseKey,
});

proc_table!(comctl32, "comctl32.dll" {
    InitCommonControlsEx,
});

proc_table!(uxtheme, "uxtheme.dll" {
    SetWindowTheme,
});

proc_table!(dwmapi, "dwmapi.dll" {
    DwmSetWindowAttribute,
});

pub static ALL: &[&ProcTable] = &[
    &kernel32::TABLE,
    &user32::TABLE,
    &gdi32::TABLE,
    &shell32::TABLE,
    &shlwapi::TABLE,
    &ole32::TABLE,
    &advapi32::TABLE,
    &comctl32::TABLE,
    &uxtheme::TABLE,
    &dwmapi::TABLE,
];

/// Finds a table by library name, with or without the `.dll` suffix.
pub fn by_name(name: &str) -> Option<&'static ProcTable> {
    let wanted = name.trim();
    ALL.iter().copied().find(|t| {
        let full = t.name();
        full.eq_ignore_ascii_case(wanted)
            || full
                .strip_suffix(".dll")
                .is_some_and(|stem| stem.eq_ignore_ascii_case(wanted))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("user32").map(|t| t.name()), Some("user32.dll"));
        assert_eq!(by_name("USER32.DLL").map(|t| t.name()), Some("user32.dll"));
        assert_eq!(by_name(" advapi32 ").map(|t| t.name()), Some("advapi32.dll"));
        assert!(by_name("user").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn test_tables_are_well_formed() {
        assert_eq!(ALL.len(), 10);
        let mut names = HashSet::new();
        for table in ALL {
            assert!(names.insert(table.name()), "duplicate table {}", table.name());
            assert!(!table.procs.is_empty());
            for proc in table.procs {
                assert!(std::ptr::eq(proc.dll(), table.dll));
                assert!(!proc.name().is_empty());
                assert!(!proc.name().contains('\0'));
            }
        }
        assert_eq!(kernel32::FormatMessageW.name(), "FormatMessageW");
    }
}
