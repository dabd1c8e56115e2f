//! GDI and DWM constants.

const_bitflag! {
    /// `DrawText` format.
    DT: u32, "DT_";
    TOP = 0x0000_0000,
    LEFT = 0x0000_0000,
    CENTER = 0x0000_0001,
    RIGHT = 0x0000_0002,
    VCENTER = 0x0000_0004,
    BOTTOM = 0x0000_0008,
    WORDBREAK = 0x0000_0010,
    SINGLELINE = 0x0000_0020,
    EXPANDTABS = 0x0000_0040,
    TABSTOP = 0x0000_0080,
    NOCLIP = 0x0000_0100,
    EXTERNALLEADING = 0x0000_0200,
    CALCRECT = 0x0000_0400,
    NOPREFIX = 0x0000_0800,
    INTERNAL = 0x0000_1000,
    EDITCONTROL = 0x0000_2000,
    PATH_ELLIPSIS = 0x0000_4000,
    END_ELLIPSIS = 0x0000_8000,
    MODIFYSTRING = 0x0001_0000,
    RTLREADING = 0x0002_0000,
    WORD_ELLIPSIS = 0x0004_0000,
    HIDEPREFIX = 0x0010_0000,
    PREFIXONLY = 0x0020_0000,
}

const_ordinary! {
    /// `SetBkMode` mode.
    BKMODE: i32, "";
    TRANSPARENT = 1,
    OPAQUE = 2,
}

const_ordinary! {
    /// `GetStockObject` index.
    STOCK: i32, "";
    WHITE_BRUSH = 0,
    LTGRAY_BRUSH = 1,
    GRAY_BRUSH = 2,
    DKGRAY_BRUSH = 3,
    BLACK_BRUSH = 4,
    NULL_BRUSH = 5,
    WHITE_PEN = 6,
    BLACK_PEN = 7,
    NULL_PEN = 8,
    OEM_FIXED_FONT = 10,
    ANSI_FIXED_FONT = 11,
    ANSI_VAR_FONT = 12,
    SYSTEM_FONT = 13,
    DEVICE_DEFAULT_FONT = 14,
    DEFAULT_PALETTE = 15,
    SYSTEM_FIXED_FONT = 16,
    DEFAULT_GUI_FONT = 17,
    DC_BRUSH = 18,
    DC_PEN = 19,
}

const_ordinary! {
    /// Pen style.
    PS: i32, "PS_";
    SOLID = 0,
    DASH = 1,
    DOT = 2,
    DASHDOT = 3,
    DASHDOTDOT = 4,
    NULL = 5,
    INSIDEFRAME = 6,
}

const_ordinary! {
    /// Font weight.
    FW: i32, "FW_";
    DONTCARE = 0,
    THIN = 100,
    EXTRALIGHT = 200,
    LIGHT = 300,
    NORMAL = 400,
    MEDIUM = 500,
    SEMIBOLD = 600,
    BOLD = 700,
    EXTRABOLD = 800,
    HEAVY = 900,
}

const_ordinary! {
    /// `DwmSetWindowAttribute` attribute.
    DWMWA: u32, "DWMWA_";
    NCRENDERING_ENABLED = 1,
    NCRENDERING_POLICY = 2,
    TRANSITIONS_FORCEDISABLED = 3,
    ALLOW_NCPAINT = 4,
    CAPTION_BUTTON_BOUNDS = 5,
    NONCLIENT_RTL_LAYOUT = 6,
    FORCE_ICONIC_REPRESENTATION = 7,
    FLIP3D_POLICY = 8,
    EXTENDED_FRAME_BOUNDS = 9,
    HAS_ICONIC_BITMAP = 10,
    DISALLOW_PEEK = 11,
    EXCLUDED_FROM_PEEK = 12,
    CLOAK = 13,
    CLOAKED = 14,
    FREEZE_REPRESENTATION = 15,
    USE_IMMERSIVE_DARK_MODE = 20,
    WINDOW_CORNER_PREFERENCE = 33,
    BORDER_COLOR = 34,
    CAPTION_COLOR = 35,
    TEXT_COLOR = 36,
    VISIBLE_FRAME_BORDER_THICKNESS = 37,
    SYSTEMBACKDROP_TYPE = 38,
}
