//! Status codes: Win32 errors, HRESULTs and their fields.

use crate::error::{HrResult, SysResult};

const_ordinary! {
    /// Win32 error code, the `GetLastError` domain.
    ERROR: u32, "ERROR_";
    SUCCESS = 0,
    INVALID_FUNCTION = 1,
    FILE_NOT_FOUND = 2,
    PATH_NOT_FOUND = 3,
    TOO_MANY_OPEN_FILES = 4,
    ACCESS_DENIED = 5,
    INVALID_HANDLE = 6,
    NOT_ENOUGH_MEMORY = 8,
    BAD_FORMAT = 11,
    INVALID_DATA = 13,
    OUTOFMEMORY = 14,
    INVALID_DRIVE = 15,
    NO_MORE_FILES = 18,
    WRITE_PROTECT = 19,
    NOT_READY = 21,
    BAD_LENGTH = 24,
    GEN_FAILURE = 31,
    SHARING_VIOLATION = 32,
    LOCK_VIOLATION = 33,
    HANDLE_EOF = 38,
    NOT_SUPPORTED = 50,
    FILE_EXISTS = 80,
    INVALID_PARAMETER = 87,
    BROKEN_PIPE = 109,
    OPEN_FAILED = 110,
    BUFFER_OVERFLOW = 111,
    DISK_FULL = 112,
    CALL_NOT_IMPLEMENTED = 120,
    SEM_TIMEOUT = 121,
    INSUFFICIENT_BUFFER = 122,
    INVALID_NAME = 123,
    MOD_NOT_FOUND = 126,
    PROC_NOT_FOUND = 127,
    DIR_NOT_EMPTY = 145,
    BAD_PATHNAME = 161,
    BUSY = 170,
    ALREADY_EXISTS = 183,
    BAD_EXE_FORMAT = 193,
    ENVVAR_NOT_FOUND = 203,
    FILENAME_EXCED_RANGE = 206,
    MORE_DATA = 234,
    WAIT_TIMEOUT = 258,
    NO_MORE_ITEMS = 259,
    DIRECTORY = 267,
    ELEVATION_REQUIRED = 740,
    OPERATION_ABORTED = 995,
    IO_INCOMPLETE = 996,
    IO_PENDING = 997,
    NOACCESS = 998,
    INVALID_FLAGS = 1004,
    BADKEY = 1010,
    CANTOPEN = 1011,
    CANTREAD = 1012,
    CANTWRITE = 1013,
    KEY_DELETED = 1018,
    SERVICE_ALREADY_RUNNING = 1056,
    SERVICE_DOES_NOT_EXIST = 1060,
    DLL_INIT_FAILED = 1114,
    NO_ASSOCIATION = 1155,
    DDE_FAIL = 1156,
    DLL_NOT_FOUND = 1157,
    NOT_FOUND = 1168,
    CANCELLED = 1223,
    NOT_ALL_ASSIGNED = 1300,
    PRIVILEGE_NOT_HELD = 1314,
    INVALID_WINDOW_HANDLE = 1400,
    INVALID_MENU_HANDLE = 1401,
    INVALID_CURSOR_HANDLE = 1402,
    CANNOT_FIND_WND_CLASS = 1407,
    WINDOW_OF_OTHER_THREAD = 1408,
    CLASS_ALREADY_EXISTS = 1410,
    CLASS_DOES_NOT_EXIST = 1411,
    INVALID_INDEX = 1413,
    TIMEOUT = 1460,
    RESOURCE_DATA_NOT_FOUND = 1812,
    RESOURCE_TYPE_NOT_FOUND = 1813,
    RESOURCE_NAME_NOT_FOUND = 1814,
    INVALID_STATE = 5023,
}

const_ordinary! {
    /// HRESULT facility field.
    FACILITY: u32, "FACILITY_";
    NULL = 0,
    RPC = 1,
    DISPATCH = 2,
    STORAGE = 3,
    ITF = 4,
    WIN32 = 7,
    WINDOWS = 8,
    SECURITY = 9,
    CONTROL = 10,
    CERT = 11,
    INTERNET = 12,
    MEDIASERVER = 13,
    MSMQ = 14,
    SETUPAPI = 15,
    SCARD = 16,
    COMPLUS = 17,
    AAF = 18,
    URT = 19,
    ACS = 20,
    DPLAY = 21,
    UMI = 22,
    SXS = 23,
    WINDOWS_CE = 24,
    HTTP = 25,
    USERMODE_COMMONLOG = 26,
    USERMODE_FILTER_MANAGER = 31,
    BACKGROUNDCOPY = 32,
    CONFIGURATION = 33,
    STATE_MANAGEMENT = 34,
    METADIRECTORY = 35,
    WINDOWSUPDATE = 36,
    DIRECTORYSERVICE = 37,
    GRAPHICS = 38,
    SHELL = 39,
    WINDOWS_DEFENDER = 80,
    DXGI = 0x087A,
    WINCODEC = 0x0898,
    D2D = 0x0899,
}

const_ordinary! {
    /// HRESULT severity bit.
    SEVERITY: u8, "SEVERITY_";
    SUCCESS = 0,
    ERROR = 1,
}

const_ordinary! {
    /// COM status code, stored as its unsigned bit pattern.
    HRESULT: u32, "";
    S_OK = 0x0000_0000,
    S_FALSE = 0x0000_0001,
    E_NOTIMPL = 0x8000_4001,
    E_NOINTERFACE = 0x8000_4002,
    E_POINTER = 0x8000_4003,
    E_ABORT = 0x8000_4004,
    E_FAIL = 0x8000_4005,
    E_PENDING = 0x8000_000A,
    E_BOUNDS = 0x8000_000B,
    E_CHANGED_STATE = 0x8000_000C,
    E_ILLEGAL_STATE_CHANGE = 0x8000_000D,
    E_ILLEGAL_METHOD_CALL = 0x8000_000E,
    E_UNEXPECTED = 0x8000_FFFF,
    E_ACCESSDENIED = 0x8007_0005,
    E_HANDLE = 0x8007_0006,
    E_OUTOFMEMORY = 0x8007_000E,
    E_INVALIDARG = 0x8007_0057,
    E_NOT_SUFFICIENT_BUFFER = 0x8007_007A,
    E_NOT_SET = 0x8007_0490,
    E_NOT_VALID_STATE = 0x8007_139F,
    RPC_E_CHANGED_MODE = 0x8001_0106,
    DISP_E_MEMBERNOTFOUND = 0x8002_0003,
    DISP_E_TYPEMISMATCH = 0x8002_0005,
    DISP_E_UNKNOWNNAME = 0x8002_0006,
    DISP_E_EXCEPTION = 0x8002_0009,
    STG_E_FILENOTFOUND = 0x8003_0002,
    STG_E_ACCESSDENIED = 0x8003_0005,
    REGDB_E_CLASSNOTREG = 0x8004_0154,
    CLASS_E_NOAGGREGATION = 0x8004_0110,
    CLASS_E_CLASSNOTAVAILABLE = 0x8004_0111,
    CO_E_NOTINITIALIZED = 0x8004_01F0,
    CO_E_ALREADYINITIALIZED = 0x8004_01F1,
}

impl ERROR {
    /// `HRESULT_FROM_WIN32`. Values that are already zero or negative as an
    /// `HRESULT` pass through unchanged.
    #[must_use]
    pub const fn to_hresult(self) -> HRESULT {
        if (self.0 as i32) <= 0 {
            HRESULT(self.0)
        } else {
            HRESULT((self.0 & 0x0000_FFFF) | (FACILITY::WIN32.0 << 16) | 0x8000_0000)
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// `Ok(())` for `ERROR_SUCCESS`, `Err(self)` otherwise.
    pub fn ok(self) -> SysResult<()> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }

    /// System message for this code.
    ///
    /// Falls back to the SDK name when the OS has no text for it, or when the
    /// OS cannot be asked at all.
    pub fn description(self) -> String {
        match crate::funcs::kernel::format_message(self) {
            Ok(text) if !text.is_empty() => text,
            _ => match self.name() {
                Some(n) => format!("ERROR_{n}"),
                None => format!("error {}", self.0),
            },
        }
    }
}

impl std::error::Error for ERROR {}

impl HRESULT {
    #[must_use]
    pub const fn from_i32(raw: i32) -> Self {
        Self(raw as u32)
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// `MAKE_HRESULT`.
    #[must_use]
    pub const fn make(severity: SEVERITY, facility: FACILITY, code: u16) -> Self {
        Self(((severity.0 as u32 & 1) << 31) | ((facility.0 & 0x1FFF) << 16) | code as u32)
    }

    #[must_use]
    pub const fn severity(self) -> SEVERITY {
        SEVERITY((self.0 >> 31) as u8)
    }

    #[must_use]
    pub const fn facility(self) -> FACILITY {
        FACILITY((self.0 >> 16) & 0x1FFF)
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    #[must_use]
    pub const fn succeeded(self) -> bool {
        (self.0 as i32) >= 0
    }

    #[must_use]
    pub const fn failed(self) -> bool {
        !self.succeeded()
    }

    /// `Ok(())` on any success code, `Err(self)` on failure.
    pub fn ok(self) -> HrResult<()> {
        if self.succeeded() { Ok(()) } else { Err(self) }
    }

    /// The Win32 error carried by a `FACILITY_WIN32` failure.
    pub fn to_win32(self) -> Option<ERROR> {
        if self.0 == Self::S_OK.0 {
            Some(ERROR::SUCCESS)
        } else if self.failed() && self.facility() == FACILITY::WIN32 {
            Some(ERROR(self.code() as u32))
        } else {
            None
        }
    }
}

impl From<ERROR> for HRESULT {
    fn from(err: ERROR) -> Self {
        err.to_hresult()
    }
}

impl std::error::Error for HRESULT {}

#[cfg(test)]
mod tests {
    use super::*;
    use windows_sys::Win32::Foundation as fnd;

    #[test]
    fn test_values_match_sdk() {
        assert_eq!(ERROR::ACCESS_DENIED.raw(), fnd::ERROR_ACCESS_DENIED as u32);
        assert_eq!(ERROR::MORE_DATA.raw(), fnd::ERROR_MORE_DATA as u32);
        assert_eq!(ERROR::MOD_NOT_FOUND.raw(), fnd::ERROR_MOD_NOT_FOUND as u32);
        assert_eq!(ERROR::CANCELLED.raw(), fnd::ERROR_CANCELLED as u32);
        assert_eq!(ERROR::INVALID_STATE.raw(), fnd::ERROR_INVALID_STATE as u32);
        assert_eq!(ERROR::BAD_FORMAT.raw(), fnd::ERROR_BAD_FORMAT as u32);
        assert_eq!(ERROR::NO_ASSOCIATION.raw(), fnd::ERROR_NO_ASSOCIATION as u32);
        assert_eq!(ERROR::DDE_FAIL.raw(), fnd::ERROR_DDE_FAIL as u32);
        assert_eq!(ERROR::DLL_NOT_FOUND.raw(), fnd::ERROR_DLL_NOT_FOUND as u32);
        assert_eq!(HRESULT::E_FAIL.as_i32(), fnd::E_FAIL as i32);
        assert_eq!(HRESULT::E_NOINTERFACE.as_i32(), fnd::E_NOINTERFACE as i32);
        assert_eq!(HRESULT::E_INVALIDARG.as_i32(), fnd::E_INVALIDARG as i32);
        assert_eq!(HRESULT::E_UNEXPECTED.as_i32(), fnd::E_UNEXPECTED as i32);
        assert_eq!(HRESULT::CO_E_NOTINITIALIZED.as_i32(), fnd::CO_E_NOTINITIALIZED as i32);
        assert_eq!(HRESULT::REGDB_E_CLASSNOTREG.as_i32(), fnd::REGDB_E_CLASSNOTREG as i32);
    }

    #[test]
    fn test_hresult_from_win32() {
        assert_eq!(ERROR::SUCCESS.to_hresult(), HRESULT::S_OK);
        assert_eq!(ERROR::ACCESS_DENIED.to_hresult(), HRESULT::E_ACCESSDENIED);
        assert_eq!(ERROR::INVALID_PARAMETER.to_hresult(), HRESULT::E_INVALIDARG);
        assert_eq!(ERROR::NOT_FOUND.to_hresult(), HRESULT::E_NOT_SET);
        assert_eq!(ERROR::INVALID_STATE.to_hresult(), HRESULT::E_NOT_VALID_STATE);
        assert_eq!(HRESULT::from(ERROR::INSUFFICIENT_BUFFER), HRESULT::E_NOT_SUFFICIENT_BUFFER);
    }

    #[test]
    fn test_hresult_from_win32_keeps_failure_codes() {
        assert_eq!(ERROR::from_raw(0x8000_4005).to_hresult(), HRESULT::E_FAIL);
        assert_eq!(ERROR::from_raw(0x8007_0005).to_hresult(), HRESULT::E_ACCESSDENIED);
        assert_eq!(ERROR::from_raw(0x7FFF_FFFF).to_hresult().raw(), 0x8007_FFFF);
    }

    #[test]
    fn test_hresult_fields() {
        let hr = HRESULT::E_ACCESSDENIED;
        assert_eq!(hr.severity(), SEVERITY::ERROR);
        assert_eq!(hr.facility(), FACILITY::WIN32);
        assert_eq!(hr.code(), 5);
        assert!(hr.failed());
        assert_eq!(hr.to_win32(), Some(ERROR::ACCESS_DENIED));

        assert_eq!(HRESULT::E_FAIL.facility(), FACILITY::NULL);
        assert_eq!(HRESULT::E_FAIL.to_win32(), None);
        assert_eq!(HRESULT::from_raw(0x887A_0001).facility(), FACILITY::DXGI);

        assert!(HRESULT::S_FALSE.succeeded());
        assert_eq!(HRESULT::S_FALSE.to_win32(), None);
        assert_eq!(HRESULT::S_OK.to_win32(), Some(ERROR::SUCCESS));
    }

    #[test]
    fn test_make_hresult() {
        let hr = HRESULT::make(SEVERITY::ERROR, FACILITY::WIN32, 5);
        assert_eq!(hr, HRESULT::E_ACCESSDENIED);
        assert_eq!(HRESULT::make(SEVERITY::SUCCESS, FACILITY::NULL, 1), HRESULT::S_FALSE);
        assert_eq!(HRESULT::from_i32(-2147467259), HRESULT::E_FAIL);
    }

    #[test]
    fn test_ok_conversions() {
        assert!(HRESULT::S_FALSE.ok().is_ok());
        assert_eq!(HRESULT::E_POINTER.ok(), Err(HRESULT::E_POINTER));
        assert!(ERROR::SUCCESS.ok().is_ok());
        assert_eq!(ERROR::BUSY.ok(), Err(ERROR::BUSY));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ERROR::FILE_NOT_FOUND.to_string(), "ERROR_FILE_NOT_FOUND");
        assert_eq!(HRESULT::E_NOINTERFACE.to_string(), "E_NOINTERFACE");
        assert_eq!(HRESULT::from_raw(0x8123_4567).to_string(), "0x81234567");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_description_falls_back_to_name() {
        assert_eq!(ERROR::ACCESS_DENIED.description(), "ERROR_ACCESS_DENIED");
        assert_eq!(ERROR::from_raw(99_999).description(), "error 99999");
    }
}
