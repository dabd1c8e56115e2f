//! COM plumbing: identifiers, owned interface pointers and apartment setup.

#![allow(non_snake_case, non_upper_case_globals)]

use std::marker::PhantomData;
use std::ptr::NonNull;

use log::{debug, warn};

use crate::co;
use crate::dll::LazyProc;
use crate::dll::tables::ole32;
use crate::error::HrResult;
use crate::types::c_void;

pub mod guid;
pub mod shell_link;
pub mod taskbar;

pub use guid::GUID;
pub use shell_link::{IPersistFile, IShellLinkW, resolve_shortcut};
pub use taskbar::{ITaskbarList3, TaskbarProgress};

pub const IID_IUnknown: GUID = GUID::from_u128(0x00000000_0000_0000_C000_000000000046);
pub const IID_IShellLinkW: GUID = GUID::from_u128(0x000214F9_0000_0000_C000_000000000046);
pub const IID_IPersistFile: GUID = GUID::from_u128(0x0000010B_0000_0000_C000_000000000046);
pub const IID_ITaskbarList3: GUID = GUID::from_u128(0xEA1AFB91_9E28_4B86_90E9_9E9F8A5EEFAF);
pub const CLSID_ShellLink: GUID = GUID::from_u128(0x00021401_0000_0000_C000_000000000046);
pub const CLSID_TaskbarList: GUID = GUID::from_u128(0x56FDF344_FD6D_11D0_958A_006097C9A090);

#[repr(C)]
pub struct IUnknownVtbl {
    pub QueryInterface: unsafe extern "system" fn(*mut c_void, *const GUID, *mut *mut c_void) -> i32,
    pub AddRef: unsafe extern "system" fn(*mut c_void) -> u32,
    pub Release: unsafe extern "system" fn(*mut c_void) -> u32,
}

/// An interface ComPtr can hold.
///
/// # Safety
/// `Vtbl` must be `#[repr(C)]` and start with [`IUnknownVtbl`], and `IID`
/// must identify an interface whose vtable has that layout.
pub unsafe trait ComInterface {
    const IID: GUID;
    type Vtbl;
}

pub struct IUnknown;

unsafe impl ComInterface for IUnknown {
    const IID: GUID = IID_IUnknown;
    type Vtbl = IUnknownVtbl;
}

/// Owned reference to a COM object. `Clone` adds a reference and `Drop`
/// releases one.
pub struct ComPtr<T: ComInterface> {
    ptr: NonNull<c_void>,
    _marker: PhantomData<T>,
}

impl<T: ComInterface> ComPtr<T> {
    /// Takes ownership of one reference. `None` for a null pointer.
    ///
    /// # Safety
    /// `ptr` must be null or a live interface pointer of type `T`.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, _marker: PhantomData })
    }

    pub fn as_raw(&self) -> *mut c_void {
        self.ptr.as_ptr()
    }

    /// Gives up ownership without releasing.
    pub fn into_raw(self) -> *mut c_void {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }

    pub fn vtbl(&self) -> &T::Vtbl {
        // SAFETY: a COM object starts with a pointer to its vtable, which
        // outlives every reference to the object.
        unsafe { &**(self.ptr.as_ptr() as *const *const T::Vtbl) }
    }

    fn unknown(&self) -> &IUnknownVtbl {
        // SAFETY: every `ComInterface::Vtbl` starts with `IUnknownVtbl`.
        unsafe { &**(self.ptr.as_ptr() as *const *const IUnknownVtbl) }
    }

    /// `IUnknown::QueryInterface` for an arbitrary interface id.
    pub fn query_interface(&self, iid: &GUID) -> HrResult<ComPtr<IUnknown>> {
        let mut out = std::ptr::null_mut();
        let hr = unsafe { (self.unknown().QueryInterface)(self.as_raw(), iid, &mut out) };
        co::HRESULT::from_i32(hr).ok()?;
        unsafe { ComPtr::from_raw(out) }.ok_or(co::HRESULT::E_POINTER)
    }

    pub fn cast<U: ComInterface>(&self) -> HrResult<ComPtr<U>> {
        self.query_interface(&U::IID).map(|p| ComPtr { ptr: p.into_raw_nonnull(), _marker: PhantomData })
    }

    fn into_raw_nonnull(self) -> NonNull<c_void> {
        let ptr = self.ptr;
        std::mem::forget(self);
        ptr
    }
}

impl<T: ComInterface> Clone for ComPtr<T> {
    fn clone(&self) -> Self {
        unsafe { (self.unknown().AddRef)(self.as_raw()) };
        Self { ptr: self.ptr, _marker: PhantomData }
    }
}

impl<T: ComInterface> Drop for ComPtr<T> {
    fn drop(&mut self) {
        unsafe { (self.unknown().Release)(self.as_raw()) };
    }
}

impl<T: ComInterface> std::fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComPtr({:?} @ {:p})", T::IID, self.ptr)
    }
}

type FnCoInitializeEx = unsafe extern "system" fn(*mut c_void, u32) -> i32;
type FnCoUninitialize = unsafe extern "system" fn();
type FnCoCreateInstance =
    unsafe extern "system" fn(*const GUID, *mut c_void, u32, *const GUID, *mut *mut c_void) -> i32;

/// Unresolvable exports surface as the equivalent `HRESULT`.
pub(crate) fn resolve<F: Copy>(proc: &LazyProc) -> HrResult<F> {
    unsafe { proc.as_fn::<F>() }.map_err(co::ERROR::to_hresult)
}

/// Keeps the calling thread's COM apartment alive; uninitializes on drop.
#[must_use]
#[derive(Debug)]
pub struct CoInitGuard {
    _not_send: PhantomData<*mut ()>,
}

impl Drop for CoInitGuard {
    fn drop(&mut self) {
        match resolve::<FnCoUninitialize>(&ole32::CoUninitialize) {
            Ok(f) => unsafe { f() },
            Err(hr) => warn!("CoUninitialize unavailable: {hr}"),
        }
    }
}

/// `CoInitializeEx`. `S_FALSE` (already initialized on this thread) still
/// yields a guard, since every successful call must be balanced.
pub fn co_initialize_ex(coinit: co::COINIT) -> HrResult<CoInitGuard> {
    let f: FnCoInitializeEx = resolve(&ole32::CoInitializeEx)?;
    let hr = co::HRESULT::from_i32(unsafe { f(std::ptr::null_mut(), coinit.raw()) });
    hr.ok()?;
    debug!("COM initialized ({coinit}): {hr}");
    Ok(CoInitGuard { _not_send: PhantomData })
}

pub fn co_create_instance<T: ComInterface>(clsid: &GUID, context: co::CLSCTX) -> HrResult<ComPtr<T>> {
    let f: FnCoCreateInstance = resolve(&ole32::CoCreateInstance)?;
    let mut out = std::ptr::null_mut();
    let hr = co::HRESULT::from_i32(unsafe {
        f(clsid, std::ptr::null_mut(), context.raw(), &T::IID, &mut out)
    });
    if let Err(e) = hr.ok() {
        warn!("CoCreateInstance({clsid}) failed: {e}");
        return Err(e);
    }
    unsafe { ComPtr::from_raw(out) }.ok_or(co::HRESULT::E_POINTER)
}
