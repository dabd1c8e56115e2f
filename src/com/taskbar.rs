#![allow(non_snake_case)]

use super::{CLSID_TaskbarList, ComInterface, ComPtr, GUID, IID_ITaskbarList3, IUnknownVtbl, co_create_instance};
use crate::co;
use crate::error::HrResult;
use crate::types::{BOOL, HWND, c_void};

#[repr(C)]
pub struct ITaskbarList3Vtbl {
    pub base: IUnknownVtbl,
    // ITaskbarList
    pub HrInit: unsafe extern "system" fn(*mut c_void) -> i32,
    pub AddTab: unsafe extern "system" fn(*mut c_void, HWND) -> i32,
    pub DeleteTab: unsafe extern "system" fn(*mut c_void, HWND) -> i32,
    pub ActivateTab: unsafe extern "system" fn(*mut c_void, HWND) -> i32,
    pub SetActiveAlt: unsafe extern "system" fn(*mut c_void, HWND) -> i32,
    // ITaskbarList2
    pub MarkFullscreenWindow: unsafe extern "system" fn(*mut c_void, HWND, BOOL) -> i32,
    // ITaskbarList3
    pub SetProgressValue: unsafe extern "system" fn(*mut c_void, HWND, u64, u64) -> i32,
    pub SetProgressState: unsafe extern "system" fn(*mut c_void, HWND, u32) -> i32,
}

pub struct ITaskbarList3;

unsafe impl ComInterface for ITaskbarList3 {
    const IID: GUID = IID_ITaskbarList3;
    type Vtbl = ITaskbarList3Vtbl;
}

/// Progress shown on a window's taskbar button.
pub struct TaskbarProgress {
    hwnd: HWND,
    list: ComPtr<ITaskbarList3>,
}

impl TaskbarProgress {
    /// Needs COM initialized on the calling thread.
    pub fn new(hwnd: HWND) -> HrResult<Self> {
        let list = co_create_instance::<ITaskbarList3>(&CLSID_TaskbarList, co::CLSCTX::ALL)?;
        co::HRESULT::from_i32(unsafe { (list.vtbl().HrInit)(list.as_raw()) }).ok()?;
        Ok(Self::from_interface(hwnd, list))
    }

    pub fn from_interface(hwnd: HWND, list: ComPtr<ITaskbarList3>) -> Self {
        Self { hwnd, list }
    }

    pub fn set_state(&self, state: co::TBPF) -> HrResult<()> {
        let hr = unsafe { (self.list.vtbl().SetProgressState)(self.list.as_raw(), self.hwnd, state.raw()) };
        co::HRESULT::from_i32(hr).ok()
    }

    /// `completed` above `total` is clamped.
    pub fn set_value(&self, completed: u64, total: u64) -> HrResult<()> {
        let hr = unsafe {
            (self.list.vtbl().SetProgressValue)(self.list.as_raw(), self.hwnd, completed.min(total), total)
        };
        co::HRESULT::from_i32(hr).ok()
    }

    pub fn clear(&self) -> HrResult<()> {
        self.set_state(co::TBPF::NOPROGRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::tests::{fake_add_ref, fake_query_interface, fake_release};
    use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

    // Same prefix as `com::tests::FakeObject`, so its IUnknown methods apply.
    #[repr(C)]
    struct FakeTaskbar {
        #[allow(dead_code)]
        vtbl: *const ITaskbarList3Vtbl,
        refs: AtomicU32,
        state: AtomicU32,
        completed: AtomicU64,
        total: AtomicU64,
    }

    fn this<'a>(p: *mut c_void) -> &'a FakeTaskbar {
        unsafe { &*(p as *const FakeTaskbar) }
    }

    unsafe extern "system" fn ok(_: *mut c_void) -> i32 {
        0
    }
    unsafe extern "system" fn ok_hwnd(_: *mut c_void, _: HWND) -> i32 {
        0
    }
    unsafe extern "system" fn ok_fullscreen(_: *mut c_void, _: HWND, _: BOOL) -> i32 {
        0
    }
    unsafe extern "system" fn set_value(p: *mut c_void, _: HWND, completed: u64, total: u64) -> i32 {
        this(p).completed.store(completed, Ordering::SeqCst);
        this(p).total.store(total, Ordering::SeqCst);
        0
    }
    unsafe extern "system" fn set_state(p: *mut c_void, _: HWND, state: u32) -> i32 {
        this(p).state.store(state, Ordering::SeqCst);
        0
    }

    static VTBL: ITaskbarList3Vtbl = ITaskbarList3Vtbl {
        base: IUnknownVtbl {
            QueryInterface: fake_query_interface,
            AddRef: fake_add_ref,
            Release: fake_release,
        },
        HrInit: ok,
        AddTab: ok_hwnd,
        DeleteTab: ok_hwnd,
        ActivateTab: ok_hwnd,
        SetActiveAlt: ok_hwnd,
        MarkFullscreenWindow: ok_fullscreen,
        SetProgressValue: set_value,
        SetProgressState: set_state,
    };

    #[test]
    fn test_progress_calls_reach_the_interface() {
        let fake = Box::new(FakeTaskbar {
            vtbl: &VTBL,
            refs: AtomicU32::new(1),
            state: AtomicU32::new(u32::MAX),
            completed: AtomicU64::new(0),
            total: AtomicU64::new(0),
        });
        let raw = &*fake as *const FakeTaskbar as *mut c_void;
        let list = unsafe { ComPtr::<ITaskbarList3>::from_raw(raw) }.unwrap();
        let progress = TaskbarProgress::from_interface(std::ptr::null_mut(), list);

        progress.set_state(co::TBPF::NORMAL).unwrap();
        assert_eq!(fake.state.load(Ordering::SeqCst), co::TBPF::NORMAL.raw());

        progress.set_value(150, 100).unwrap();
        assert_eq!(fake.completed.load(Ordering::SeqCst), 100);
        assert_eq!(fake.total.load(Ordering::SeqCst), 100);

        progress.clear().unwrap();
        assert_eq!(fake.state.load(Ordering::SeqCst), 0);

        drop(progress);
        assert_eq!(fake.refs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_vtable_offsets() {
        let ptr = size_of::<usize>();
        assert_eq!(std::mem::offset_of!(ITaskbarList3Vtbl, SetProgressValue), 9 * ptr);
        assert_eq!(std::mem::offset_of!(ITaskbarList3Vtbl, SetProgressState), 10 * ptr);
    }
}
