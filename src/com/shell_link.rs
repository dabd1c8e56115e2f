#![allow(non_snake_case)]

use log::debug;

use super::{
    CLSID_ShellLink, ComInterface, GUID, IID_IPersistFile, IID_IShellLinkW, IUnknownVtbl,
    co_create_instance,
};
use crate::co;
use crate::error::HrResult;
use crate::types::{LPCWSTR, LPWSTR, c_void};
use crate::utils::{from_wide, to_wstring};

// --- VTable Definitions ---

#[repr(C)]
pub struct IShellLinkWVtbl {
    pub base: IUnknownVtbl,
    pub GetPath: unsafe extern "system" fn(*mut c_void, LPWSTR, i32, *mut c_void, u32) -> i32,
    pub GetIDList: unsafe extern "system" fn(*mut c_void, *mut *mut c_void) -> i32,
    pub SetIDList: unsafe extern "system" fn(*mut c_void, *const c_void) -> i32,
    pub GetDescription: unsafe extern "system" fn(*mut c_void, LPWSTR, i32) -> i32,
    pub SetDescription: unsafe extern "system" fn(*mut c_void, LPCWSTR) -> i32,
    pub GetWorkingDirectory: unsafe extern "system" fn(*mut c_void, LPWSTR, i32) -> i32,
    pub SetWorkingDirectory: unsafe extern "system" fn(*mut c_void, LPCWSTR) -> i32,
    pub GetArguments: unsafe extern "system" fn(*mut c_void, LPWSTR, i32) -> i32,
}

#[repr(C)]
pub struct IPersistFileVtbl {
    pub base: IUnknownVtbl,
    pub GetClassID: unsafe extern "system" fn(*mut c_void, *mut GUID) -> i32, // IPersist
    pub IsDirty: unsafe extern "system" fn(*mut c_void) -> i32,
    pub Load: unsafe extern "system" fn(*mut c_void, LPCWSTR, u32) -> i32,
}

pub struct IShellLinkW;

unsafe impl ComInterface for IShellLinkW {
    const IID: GUID = IID_IShellLinkW;
    type Vtbl = IShellLinkWVtbl;
}

pub struct IPersistFile;

unsafe impl ComInterface for IPersistFile {
    const IID: GUID = IID_IPersistFile;
    type Vtbl = IPersistFileVtbl;
}

/// Longest path `IShellLinkW::GetPath` can hand back.
const MAX_TARGET: usize = 32768;

/// Target path of a `.lnk` file.
///
/// `Ok(None)` when `path` is not a shortcut or the shortcut has no file
/// target (e.g. it points into a shell namespace). COM must be initialized on
/// the calling thread.
pub fn resolve_shortcut(path: &str) -> HrResult<Option<String>> {
    if !path.to_lowercase().ends_with(".lnk") {
        return Ok(None);
    }

    let link = co_create_instance::<IShellLinkW>(&CLSID_ShellLink, co::CLSCTX::INPROC_SERVER)?;
    let file = link.cast::<IPersistFile>()?;

    let path_w = to_wstring(path);
    co::HRESULT::from_i32(unsafe {
        (file.vtbl().Load)(file.as_raw(), path_w.as_ptr(), co::STGM::READ.raw())
    })
    .ok()?;

    let mut target = vec![0u16; MAX_TARGET];
    let hr = co::HRESULT::from_i32(unsafe {
        (link.vtbl().GetPath)(
            link.as_raw(),
            target.as_mut_ptr(),
            target.len() as i32,
            std::ptr::null_mut(),
            0,
        )
    });
    hr.ok()?;

    // S_FALSE: no file system target.
    let target = from_wide(&target);
    debug!("Shortcut {path} -> {target:?} ({hr})");
    Ok(Some(target).filter(|t| !t.is_empty()))
}
