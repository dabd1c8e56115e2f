use crate::co;
use crate::dll::tables::gdi32;
use crate::error::SysResult;
use crate::types::{BOOL, COLORREF, HBRUSH, HDC, HGDIOBJ};

type FnGetStockObject = unsafe extern "system" fn(i32) -> HGDIOBJ;
type FnDeleteObject = unsafe extern "system" fn(HGDIOBJ) -> BOOL;
type FnCreateSolidBrush = unsafe extern "system" fn(COLORREF) -> HBRUSH;
type FnSetBkMode = unsafe extern "system" fn(HDC, i32) -> i32;

/// Stock objects are owned by the system and must not be deleted.
pub fn get_stock_object(which: co::STOCK) -> SysResult<HGDIOBJ> {
    let f: FnGetStockObject = unsafe { gdi32::GetStockObject.as_fn()? };
    let obj = unsafe { f(which.raw()) };
    if obj.is_null() { Err(co::ERROR::INVALID_PARAMETER) } else { Ok(obj) }
}

pub fn create_solid_brush(color: COLORREF) -> SysResult<HBRUSH> {
    let f: FnCreateSolidBrush = unsafe { gdi32::CreateSolidBrush.as_fn()? };
    let brush = unsafe { f(color) };
    if brush.is_null() { Err(co::ERROR::NOT_ENOUGH_MEMORY) } else { Ok(brush) }
}

/// # Safety
/// `obj` must be a GDI object this process created and no longer selects
/// into any device context.
pub unsafe fn delete_object(obj: HGDIOBJ) -> SysResult<()> {
    let f: FnDeleteObject = unsafe { gdi32::DeleteObject.as_fn()? };
    if unsafe { f(obj) } == 0 {
        return Err(co::ERROR::INVALID_HANDLE);
    }
    Ok(())
}

/// Returns the previous mode.
pub fn set_bk_mode(hdc: HDC, mode: co::BKMODE) -> SysResult<co::BKMODE> {
    let f: FnSetBkMode = unsafe { gdi32::SetBkMode.as_fn()? };
    match unsafe { f(hdc, mode.raw()) } {
        0 => Err(co::ERROR::INVALID_HANDLE),
        prev => Ok(co::BKMODE::from_raw(prev)),
    }
}
