//! Registry keys and the value codec.
//!
//! Calls go through the lazily bound `advapi32` table; every `Reg*` function
//! returns its error code directly instead of through `GetLastError`.

#![allow(non_snake_case)]

use log::{debug, warn};

use crate::co;
use crate::dll::tables::advapi32;
use crate::error::SysResult;
use crate::types::{HKEY, LPCWSTR, LPWSTR, c_void};
use crate::utils::{from_wide, parse_multi_sz, to_multi_sz, to_wstring};

type FnRegOpenKeyExW = unsafe extern "system" fn(HKEY, LPCWSTR, u32, u32, *mut HKEY) -> i32;
type FnRegCreateKeyExW = unsafe extern "system" fn(
    hKey: HKEY,
    lpSubKey: LPCWSTR,
    Reserved: u32,
    lpClass: LPWSTR,
    dwOptions: u32,
    samDesired: u32,
    lpSecurityAttributes: *const c_void,
    phkResult: *mut HKEY,
    lpdwDisposition: *mut u32,
) -> i32;
type FnRegQueryValueExW = unsafe extern "system" fn(HKEY, LPCWSTR, *mut u32, *mut u32, *mut u8, *mut u32) -> i32;
type FnRegSetValueExW = unsafe extern "system" fn(HKEY, LPCWSTR, u32, u32, *const u8, u32) -> i32;
type FnRegDeleteValueW = unsafe extern "system" fn(HKEY, LPCWSTR) -> i32;
type FnRegDeleteTreeW = unsafe extern "system" fn(HKEY, LPCWSTR) -> i32;
type FnRegCloseKey = unsafe extern "system" fn(HKEY) -> i32;

fn status(code: i32) -> SysResult<()> {
    co::ERROR::from_raw(code as u32).ok()
}

/// Optional value or subkey name; `None` is the key's default value.
struct OptName(Option<Vec<u16>>);

impl OptName {
    fn new(name: Option<&str>) -> Self {
        Self(name.map(to_wstring))
    }

    fn as_ptr(&self) -> LPCWSTR {
        self.0.as_ref().map_or(std::ptr::null(), |v| v.as_ptr())
    }
}

/// A registry value with its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegValue {
    None,
    Sz(String),
    ExpandSz(String),
    Binary(Vec<u8>),
    Dword(u32),
    DwordBigEndian(u32),
    MultiSz(Vec<String>),
    Qword(u64),
    /// Any other type, bytes untouched.
    Other(co::REG, Vec<u8>),
}

impl RegValue {
    pub fn reg_type(&self) -> co::REG {
        match self {
            Self::None => co::REG::NONE,
            Self::Sz(_) => co::REG::SZ,
            Self::ExpandSz(_) => co::REG::EXPAND_SZ,
            Self::Binary(_) => co::REG::BINARY,
            Self::Dword(_) => co::REG::DWORD,
            Self::DwordBigEndian(_) => co::REG::DWORD_BIG_ENDIAN,
            Self::MultiSz(_) => co::REG::MULTI_SZ,
            Self::Qword(_) => co::REG::QWORD,
            Self::Other(ty, _) => *ty,
        }
    }

    /// Decodes `data` as returned by `RegQueryValueExW`.
    ///
    /// Strings may lack their NUL and may end in an odd byte; both are
    /// tolerated. Integers must have their exact size.
    pub fn from_raw(ty: co::REG, data: &[u8]) -> SysResult<Self> {
        let wide = || -> Vec<u16> {
            data.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect()
        };
        Ok(match ty {
            co::REG::NONE if data.is_empty() => Self::None,
            co::REG::SZ => Self::Sz(from_wide(&wide())),
            co::REG::EXPAND_SZ => Self::ExpandSz(from_wide(&wide())),
            co::REG::BINARY => Self::Binary(data.to_vec()),
            co::REG::DWORD => Self::Dword(u32::from_le_bytes(fixed(data)?)),
            co::REG::DWORD_BIG_ENDIAN => Self::DwordBigEndian(u32::from_be_bytes(fixed(data)?)),
            co::REG::MULTI_SZ => Self::MultiSz(parse_multi_sz(&wide())),
            co::REG::QWORD => Self::Qword(u64::from_le_bytes(fixed(data)?)),
            other => Self::Other(other, data.to_vec()),
        })
    }

    /// Bytes to hand to `RegSetValueExW`, strings NUL-terminated.
    pub fn to_raw(&self) -> Vec<u8> {
        let bytes = |w: Vec<u16>| -> Vec<u8> { w.into_iter().flat_map(u16::to_le_bytes).collect() };
        match self {
            Self::None => Vec::new(),
            Self::Sz(s) | Self::ExpandSz(s) => bytes(to_wstring(s)),
            Self::Binary(b) | Self::Other(_, b) => b.clone(),
            Self::Dword(v) => v.to_le_bytes().to_vec(),
            Self::DwordBigEndian(v) => v.to_be_bytes().to_vec(),
            Self::MultiSz(items) => bytes(to_multi_sz(items.as_slice())),
            Self::Qword(v) => v.to_le_bytes().to_vec(),
        }
    }
}

fn fixed<const N: usize>(data: &[u8]) -> SysResult<[u8; N]> {
    data.try_into().map_err(|_| co::ERROR::INVALID_DATA)
}

/// Open registry key. Keys this crate opened are closed on drop; the
/// predefined roots never are.
pub struct Hkey {
    raw: HKEY,
    owned: bool,
}

impl Hkey {
    pub const CLASSES_ROOT: Hkey = Hkey::predefined(0x8000_0000);
    pub const CURRENT_USER: Hkey = Hkey::predefined(0x8000_0001);
    pub const LOCAL_MACHINE: Hkey = Hkey::predefined(0x8000_0002);
    pub const USERS: Hkey = Hkey::predefined(0x8000_0003);
    pub const CURRENT_CONFIG: Hkey = Hkey::predefined(0x8000_0005);

    // Predefined handles are sign-extended 32-bit values.
    const fn predefined(v: u32) -> Self {
        Self { raw: v as i32 as isize as HKEY, owned: false }
    }

    /// Wraps a handle without taking ownership of it.
    pub fn from_raw(raw: HKEY) -> Self {
        Self { raw, owned: false }
    }

    pub fn raw(&self) -> HKEY {
        self.raw
    }

    pub fn open_key(&self, subkey: &str, access: co::KEY) -> SysResult<Hkey> {
        let f: FnRegOpenKeyExW = unsafe { advapi32::RegOpenKeyExW.as_fn()? };
        let subkey_w = to_wstring(subkey);
        let mut out = std::ptr::null_mut();
        status(unsafe { f(self.raw, subkey_w.as_ptr(), 0, access.raw(), &mut out) })?;
        Ok(Hkey { raw: out, owned: true })
    }

    /// Opens `subkey`, creating it and any missing parents.
    pub fn create_key(&self, subkey: &str, access: co::KEY) -> SysResult<Hkey> {
        let f: FnRegCreateKeyExW = unsafe { advapi32::RegCreateKeyExW.as_fn()? };
        let subkey_w = to_wstring(subkey);
        let mut out = std::ptr::null_mut();
        let mut disposition = 0u32;
        status(unsafe {
            f(
                self.raw,
                subkey_w.as_ptr(),
                0,
                std::ptr::null_mut(),
                co::REG_OPTION::NON_VOLATILE.raw(),
                access.raw(),
                std::ptr::null(),
                &mut out,
                &mut disposition,
            )
        })?;
        debug!("Registry key {subkey} opened (disposition {disposition})");
        Ok(Hkey { raw: out, owned: true })
    }

    /// Reads a value, growing the buffer while the OS reports more data.
    pub fn query_value(&self, name: Option<&str>) -> SysResult<RegValue> {
        let f: FnRegQueryValueExW = unsafe { advapi32::RegQueryValueExW.as_fn()? };
        let name_w = OptName::new(name);
        let mut buf = vec![0u8; 256];
        loop {
            let mut ty = 0u32;
            let mut len = buf.len() as u32;
            let code = unsafe {
                f(self.raw, name_w.as_ptr(), std::ptr::null_mut(), &mut ty, buf.as_mut_ptr(), &mut len)
            };
            match status(code) {
                Ok(()) => {
                    buf.truncate(len as usize);
                    return RegValue::from_raw(co::REG::from_raw(ty), &buf);
                }
                // The value can grow between calls; `len` is only a hint.
                Err(co::ERROR::MORE_DATA) => buf.resize((len as usize).max(buf.len() * 2), 0),
                Err(e) => return Err(e),
            }
        }
    }

    pub fn set_value(&self, name: Option<&str>, value: &RegValue) -> SysResult<()> {
        let f: FnRegSetValueExW = unsafe { advapi32::RegSetValueExW.as_fn()? };
        let name_w = OptName::new(name);
        let data = value.to_raw();
        let len = u32::try_from(data.len()).map_err(|_| co::ERROR::INVALID_PARAMETER)?;
        status(unsafe { f(self.raw, name_w.as_ptr(), 0, value.reg_type().raw(), data.as_ptr(), len) })
    }

    pub fn delete_value(&self, name: Option<&str>) -> SysResult<()> {
        let f: FnRegDeleteValueW = unsafe { advapi32::RegDeleteValueW.as_fn()? };
        let name_w = OptName::new(name);
        status(unsafe { f(self.raw, name_w.as_ptr()) })
    }

    /// Deletes `subkey` and everything below it; `None` empties this key.
    pub fn delete_tree(&self, subkey: Option<&str>) -> SysResult<()> {
        let f: FnRegDeleteTreeW = unsafe { advapi32::RegDeleteTreeW.as_fn()? };
        let subkey_w = OptName::new(subkey);
        status(unsafe { f(self.raw, subkey_w.as_ptr()) })
    }
}

impl Drop for Hkey {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        let res = unsafe { advapi32::RegCloseKey.as_fn::<FnRegCloseKey>() }
            .and_then(|f| status(unsafe { f(self.raw) }));
        if let Err(e) = res {
            warn!("RegCloseKey failed: {e}");
        }
    }
}

impl std::fmt::Debug for Hkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hkey({:p})", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strings() {
        let raw: Vec<u8> = "hi\0".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(RegValue::from_raw(co::REG::SZ, &raw), Ok(RegValue::Sz("hi".into())));

        // Missing NUL and an odd trailing byte
        assert_eq!(
            RegValue::from_raw(co::REG::EXPAND_SZ, &[b'%', 0, b'A', 0, b'%', 0, 7]),
            Ok(RegValue::ExpandSz("%A%".into()))
        );
        assert_eq!(RegValue::from_raw(co::REG::SZ, &[]), Ok(RegValue::Sz(String::new())));
    }

    #[test]
    fn test_decode_integers() {
        assert_eq!(RegValue::from_raw(co::REG::DWORD, &[1, 2, 0, 0]), Ok(RegValue::Dword(0x0201)));
        assert_eq!(
            RegValue::from_raw(co::REG::DWORD_BIG_ENDIAN, &[0, 0, 2, 1]),
            Ok(RegValue::DwordBigEndian(0x0201))
        );
        assert_eq!(
            RegValue::from_raw(co::REG::QWORD, &[1, 0, 0, 0, 0, 0, 0, 0x80]),
            Ok(RegValue::Qword(0x8000_0000_0000_0001))
        );
        assert_eq!(RegValue::from_raw(co::REG::DWORD, &[1, 2, 3]), Err(co::ERROR::INVALID_DATA));
        assert_eq!(RegValue::from_raw(co::REG::QWORD, &[0; 4]), Err(co::ERROR::INVALID_DATA));
    }

    #[test]
    fn test_multi_sz_and_other_types() {
        let value = RegValue::MultiSz(vec!["a".into(), "bc".into()]);
        let raw = value.to_raw();
        assert_eq!(raw, vec![b'a', 0, 0, 0, b'b', 0, b'c', 0, 0, 0, 0, 0]);
        assert_eq!(RegValue::from_raw(co::REG::MULTI_SZ, &raw), Ok(value));

        assert_eq!(RegValue::from_raw(co::REG::NONE, &[]), Ok(RegValue::None));
        assert_eq!(
            RegValue::from_raw(co::REG::NONE, &[9]),
            Ok(RegValue::Other(co::REG::NONE, vec![9]))
        );
        let link = RegValue::from_raw(co::REG::LINK, &[1, 2]).unwrap();
        assert_eq!(link.reg_type(), co::REG::LINK);
        assert_eq!(link.to_raw(), vec![1, 2]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(RegValue::Sz("A".into()).to_raw(), vec![b'A', 0, 0, 0]);
        assert_eq!(RegValue::Dword(1).to_raw(), vec![1, 0, 0, 0]);
        assert_eq!(RegValue::DwordBigEndian(1).to_raw(), vec![0, 0, 0, 1]);
        assert_eq!(RegValue::Dword(7).reg_type(), co::REG::DWORD);
        assert!(RegValue::None.to_raw().is_empty());
    }

    #[test]
    fn test_predefined_roots_match_sdk() {
        use windows_sys::Win32::System::Registry as reg;
        assert_eq!(Hkey::CLASSES_ROOT.raw() as isize, reg::HKEY_CLASSES_ROOT as isize);
        assert_eq!(Hkey::CURRENT_USER.raw() as isize, reg::HKEY_CURRENT_USER as isize);
        assert_eq!(Hkey::LOCAL_MACHINE.raw() as isize, reg::HKEY_LOCAL_MACHINE as isize);
        assert_eq!(Hkey::USERS.raw() as isize, reg::HKEY_USERS as isize);
        assert_eq!(Hkey::CURRENT_CONFIG.raw() as isize, reg::HKEY_CURRENT_CONFIG as isize);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unavailable_off_windows() {
        assert_eq!(
            Hkey::CURRENT_USER.open_key("Software", co::KEY::READ).unwrap_err(),
            co::ERROR::CALL_NOT_IMPLEMENTED
        );
        assert_eq!(Hkey::CURRENT_USER.query_value(Some("x")), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
    }

    #[cfg(windows)]
    #[test]
    fn test_round_trip_under_current_user() {
        let path = format!(r"Software\winbind-test-{}", std::process::id());
        let key = Hkey::CURRENT_USER.create_key(&path, co::KEY::ALL_ACCESS).unwrap();
        let long = "x".repeat(1000);
        key.set_value(Some("long"), &RegValue::Sz(long.clone())).unwrap();
        key.set_value(None, &RegValue::Dword(42)).unwrap();
        assert_eq!(key.query_value(Some("long")).unwrap(), RegValue::Sz(long));
        assert_eq!(key.query_value(None).unwrap(), RegValue::Dword(42));
        key.delete_value(Some("long")).unwrap();
        assert_eq!(key.query_value(Some("long")), Err(co::ERROR::FILE_NOT_FOUND));
        drop(key);
        Hkey::CURRENT_USER.delete_tree(Some(&path)).unwrap();
    }
}
