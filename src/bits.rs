//! Bit packing helpers matching the `windef.h` / `winuser.h` macros.
//!
//! Every helper truncates to the width of its C counterpart and never panics.

use crate::types::{COLORREF, LPARAM, LPCWSTR, WPARAM};

/// `MAKEWORD`.
#[must_use]
pub const fn make_word(lo: u8, hi: u8) -> u16 {
    (lo as u16) | ((hi as u16) << 8)
}

/// `LOBYTE`.
#[must_use]
pub const fn lo_byte(w: u16) -> u8 {
    (w & 0xFF) as u8
}

/// `HIBYTE`.
#[must_use]
pub const fn hi_byte(w: u16) -> u8 {
    (w >> 8) as u8
}

/// `MAKELONG`.
#[must_use]
pub const fn make_dword(lo: u16, hi: u16) -> u32 {
    (lo as u32) | ((hi as u32) << 16)
}

/// `LOWORD`.
#[must_use]
pub const fn lo_word(dw: u32) -> u16 {
    (dw & 0xFFFF) as u16
}

/// `HIWORD`.
#[must_use]
pub const fn hi_word(dw: u32) -> u16 {
    (dw >> 16) as u16
}

#[must_use]
pub const fn make_qword(lo: u32, hi: u32) -> u64 {
    (lo as u64) | ((hi as u64) << 32)
}

#[must_use]
pub const fn lo_dword(qw: u64) -> u32 {
    (qw & 0xFFFF_FFFF) as u32
}

#[must_use]
pub const fn hi_dword(qw: u64) -> u32 {
    (qw >> 32) as u32
}

/// `MAKELPARAM`. The packed 32-bit value is zero-extended, as in C.
#[must_use]
pub const fn make_lparam(lo: u16, hi: u16) -> LPARAM {
    make_dword(lo, hi) as LPARAM
}

/// `MAKEWPARAM`.
#[must_use]
pub const fn make_wparam(lo: u16, hi: u16) -> WPARAM {
    make_dword(lo, hi) as WPARAM
}

/// `GET_X_LPARAM`: the low word as a signed coordinate.
///
/// Coordinates on secondary monitors may be negative, so `LOWORD` would be
/// wrong here.
#[must_use]
pub const fn get_x_lparam(lp: LPARAM) -> i32 {
    lo_word(lp as u32) as i16 as i32
}

/// `GET_Y_LPARAM`: the high word as a signed coordinate.
#[must_use]
pub const fn get_y_lparam(lp: LPARAM) -> i32 {
    hi_word(lp as u32) as i16 as i32
}

/// `RGB`.
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> COLORREF {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// `GetRValue`.
#[must_use]
pub const fn get_r_value(c: COLORREF) -> u8 {
    (c & 0xFF) as u8
}

/// `GetGValue`.
#[must_use]
pub const fn get_g_value(c: COLORREF) -> u8 {
    ((c >> 8) & 0xFF) as u8
}

/// `GetBValue`.
#[must_use]
pub const fn get_b_value(c: COLORREF) -> u8 {
    ((c >> 16) & 0xFF) as u8
}

/// `MAKEINTRESOURCEW`: an integer resource id smuggled in a string pointer.
#[must_use]
pub const fn make_int_resource(id: u16) -> LPCWSTR {
    id as usize as LPCWSTR
}

/// `IS_INTRESOURCE`.
#[must_use]
pub fn is_int_resource(p: LPCWSTR) -> bool {
    (p as usize) >> 16 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_packing() {
        assert_eq!(make_word(0x34, 0x12), 0x1234);
        assert_eq!(lo_byte(0x1234), 0x34);
        assert_eq!(hi_byte(0x1234), 0x12);

        let dw = make_dword(0xBEEF, 0xDEAD);
        assert_eq!(dw, 0xDEAD_BEEF);
        assert_eq!(lo_word(dw), 0xBEEF);
        assert_eq!(hi_word(dw), 0xDEAD);

        let qw = make_qword(0x8000_0001, 0x7FFF_FFFF);
        assert_eq!(qw, 0x7FFF_FFFF_8000_0001);
        assert_eq!(lo_dword(qw), 0x8000_0001);
        assert_eq!(hi_dword(qw), 0x7FFF_FFFF);
    }

    #[test]
    fn test_lparam_coordinates_are_signed() {
        // x = -10, y = 300 as sent by WM_MOUSEMOVE on a monitor left of primary
        let lp = make_lparam((-10i16) as u16, 300);
        assert_eq!(get_x_lparam(lp), -10);
        assert_eq!(get_y_lparam(lp), 300);
        assert_eq!(lo_word(lp as u32), 0xFFF6);

        let lp = make_lparam(5, (-1i16) as u16);
        assert_eq!(get_y_lparam(lp), -1);
    }

    #[test]
    fn test_wparam_command_split() {
        // WM_COMMAND: LOWORD = control id, HIWORD = notification code
        let wp = make_wparam(1001, 0x0300);
        assert_eq!(lo_word(wp as u32), 1001);
        assert_eq!(hi_word(wp as u32), 0x0300);
    }

    #[test]
    fn test_colorref() {
        let c = rgb(0x11, 0x22, 0x33);
        assert_eq!(c, 0x0033_2211);
        assert_eq!(get_r_value(c), 0x11);
        assert_eq!(get_g_value(c), 0x22);
        assert_eq!(get_b_value(c), 0x33);
        assert_eq!(get_b_value(0xFF00_0000 | c), 0x33);
    }

    #[test]
    fn test_int_resource() {
        let p = make_int_resource(32512);
        assert_eq!(p as usize, 32512);
        assert!(is_int_resource(p));

        assert!(!is_int_resource(0x0001_0000 as LPCWSTR));
    }
}
