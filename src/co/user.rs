//! Windowing constants from `winuser.h`.

const_ordinary! {
    /// Window message identifier.
    WM: u32, "WM_";
    NULL = 0x0000,
    CREATE = 0x0001,
    DESTROY = 0x0002,
    MOVE = 0x0003,
    SIZE = 0x0005,
    ACTIVATE = 0x0006,
    SETFOCUS = 0x0007,
    KILLFOCUS = 0x0008,
    ENABLE = 0x000A,
    SETREDRAW = 0x000B,
    SETTEXT = 0x000C,
    GETTEXT = 0x000D,
    GETTEXTLENGTH = 0x000E,
    PAINT = 0x000F,
    CLOSE = 0x0010,
    QUERYENDSESSION = 0x0011,
    QUIT = 0x0012,
    ERASEBKGND = 0x0014,
    SYSCOLORCHANGE = 0x0015,
    ENDSESSION = 0x0016,
    SHOWWINDOW = 0x0018,
    SETTINGCHANGE = 0x001A,
    ACTIVATEAPP = 0x001C,
    SETCURSOR = 0x0020,
    MOUSEACTIVATE = 0x0021,
    GETMINMAXINFO = 0x0024,
    DRAWITEM = 0x002B,
    MEASUREITEM = 0x002C,
    SETFONT = 0x0030,
    GETFONT = 0x0031,
    WINDOWPOSCHANGING = 0x0046,
    WINDOWPOSCHANGED = 0x0047,
    NOTIFY = 0x004E,
    CONTEXTMENU = 0x007B,
    STYLECHANGING = 0x007C,
    STYLECHANGED = 0x007D,
    DISPLAYCHANGE = 0x007E,
    GETICON = 0x007F,
    SETICON = 0x0080,
    NCCREATE = 0x0081,
    NCDESTROY = 0x0082,
    NCCALCSIZE = 0x0083,
    NCHITTEST = 0x0084,
    NCPAINT = 0x0085,
    NCACTIVATE = 0x0086,
    GETDLGCODE = 0x0087,
    KEYDOWN = 0x0100,
    KEYUP = 0x0101,
    CHAR = 0x0102,
    DEADCHAR = 0x0103,
    SYSKEYDOWN = 0x0104,
    SYSKEYUP = 0x0105,
    SYSCHAR = 0x0106,
    INITDIALOG = 0x0110,
    COMMAND = 0x0111,
    SYSCOMMAND = 0x0112,
    TIMER = 0x0113,
    HSCROLL = 0x0114,
    VSCROLL = 0x0115,
    INITMENU = 0x0116,
    INITMENUPOPUP = 0x0117,
    MENUSELECT = 0x011F,
    CTLCOLORMSGBOX = 0x0132,
    CTLCOLOREDIT = 0x0133,
    CTLCOLORLISTBOX = 0x0134,
    CTLCOLORBTN = 0x0135,
    CTLCOLORDLG = 0x0136,
    CTLCOLORSCROLLBAR = 0x0137,
    CTLCOLORSTATIC = 0x0138,
    MOUSEMOVE = 0x0200,
    LBUTTONDOWN = 0x0201,
    LBUTTONUP = 0x0202,
    LBUTTONDBLCLK = 0x0203,
    RBUTTONDOWN = 0x0204,
    RBUTTONUP = 0x0205,
    RBUTTONDBLCLK = 0x0206,
    MBUTTONDOWN = 0x0207,
    MBUTTONUP = 0x0208,
    MBUTTONDBLCLK = 0x0209,
    MOUSEWHEEL = 0x020A,
    MOUSEHWHEEL = 0x020E,
    PARENTNOTIFY = 0x0210,
    ENTERMENULOOP = 0x0211,
    EXITMENULOOP = 0x0212,
    SIZING = 0x0214,
    CAPTURECHANGED = 0x0215,
    MOVING = 0x0216,
    ENTERSIZEMOVE = 0x0231,
    EXITSIZEMOVE = 0x0232,
    DROPFILES = 0x0233,
    MOUSEHOVER = 0x02A1,
    MOUSELEAVE = 0x02A3,
    DPICHANGED = 0x02E0,
    CUT = 0x0300,
    COPY = 0x0301,
    PASTE = 0x0302,
    CLEAR = 0x0303,
    UNDO = 0x0304,
    HOTKEY = 0x0312,
    PRINTCLIENT = 0x0318,
    THEMECHANGED = 0x031A,
    /// First message id free for private window classes.
    USER = 0x0400,
    /// First message id free for application-wide use.
    APP = 0x8000,
}

impl WM {
    /// Private message `WM_USER + offset`.
    #[must_use]
    pub const fn user(offset: u32) -> Self {
        Self(Self::USER.0 + offset)
    }

    /// Private message `WM_APP + offset`.
    #[must_use]
    pub const fn app(offset: u32) -> Self {
        Self(Self::APP.0 + offset)
    }
}

const_bitflag! {
    /// Window style.
    WS: u32, "WS_";
    OVERLAPPED = 0x0000_0000,
    POPUP = 0x8000_0000,
    CHILD = 0x4000_0000,
    MINIMIZE = 0x2000_0000,
    VISIBLE = 0x1000_0000,
    DISABLED = 0x0800_0000,
    CLIPSIBLINGS = 0x0400_0000,
    CLIPCHILDREN = 0x0200_0000,
    MAXIMIZE = 0x0100_0000,
    CAPTION = 0x00C0_0000,
    BORDER = 0x0080_0000,
    DLGFRAME = 0x0040_0000,
    VSCROLL = 0x0020_0000,
    HSCROLL = 0x0010_0000,
    SYSMENU = 0x0008_0000,
    THICKFRAME = 0x0004_0000,
    GROUP = 0x0002_0000,
    TABSTOP = 0x0001_0000,
    MINIMIZEBOX = 0x0002_0000,
    MAXIMIZEBOX = 0x0001_0000,
    SIZEBOX = 0x0004_0000,
    OVERLAPPEDWINDOW = Self::CAPTION.bits()
        | Self::SYSMENU.bits()
        | Self::THICKFRAME.bits()
        | Self::MINIMIZEBOX.bits()
        | Self::MAXIMIZEBOX.bits(),
    POPUPWINDOW = Self::POPUP.bits() | Self::BORDER.bits() | Self::SYSMENU.bits(),
}

const_bitflag! {
    /// Extended window style.
    WS_EX: u32, "WS_EX_";
    LEFT = 0x0000_0000,
    DLGMODALFRAME = 0x0000_0001,
    NOPARENTNOTIFY = 0x0000_0004,
    TOPMOST = 0x0000_0008,
    ACCEPTFILES = 0x0000_0010,
    TRANSPARENT = 0x0000_0020,
    MDICHILD = 0x0000_0040,
    TOOLWINDOW = 0x0000_0080,
    WINDOWEDGE = 0x0000_0100,
    CLIENTEDGE = 0x0000_0200,
    CONTEXTHELP = 0x0000_0400,
    RIGHT = 0x0000_1000,
    RTLREADING = 0x0000_2000,
    LEFTSCROLLBAR = 0x0000_4000,
    CONTROLPARENT = 0x0001_0000,
    STATICEDGE = 0x0002_0000,
    APPWINDOW = 0x0004_0000,
    LAYERED = 0x0008_0000,
    NOINHERITLAYOUT = 0x0010_0000,
    NOREDIRECTIONBITMAP = 0x0020_0000,
    LAYOUTRTL = 0x0040_0000,
    COMPOSITED = 0x0200_0000,
    NOACTIVATE = 0x0800_0000,
    OVERLAPPEDWINDOW = Self::WINDOWEDGE.bits() | Self::CLIENTEDGE.bits(),
    PALETTEWINDOW = Self::WINDOWEDGE.bits() | Self::TOOLWINDOW.bits() | Self::TOPMOST.bits(),
}

const_bitflag! {
    /// Window class style.
    CS: u32, "CS_";
    VREDRAW = 0x0001,
    HREDRAW = 0x0002,
    DBLCLKS = 0x0008,
    OWNDC = 0x0020,
    CLASSDC = 0x0040,
    PARENTDC = 0x0080,
    NOCLOSE = 0x0200,
    SAVEBITS = 0x0800,
    BYTEALIGNCLIENT = 0x1000,
    BYTEALIGNWINDOW = 0x2000,
    GLOBALCLASS = 0x4000,
    DROPSHADOW = 0x0002_0000,
}

const_ordinary! {
    /// `ShowWindow` command.
    SW: i32, "SW_";
    HIDE = 0,
    SHOWNORMAL = 1,
    SHOWMINIMIZED = 2,
    SHOWMAXIMIZED = 3,
    SHOWNOACTIVATE = 4,
    SHOW = 5,
    MINIMIZE = 6,
    SHOWMINNOACTIVE = 7,
    SHOWNA = 8,
    RESTORE = 9,
    SHOWDEFAULT = 10,
    FORCEMINIMIZE = 11,
}

const_ordinary! {
    /// Virtual-key code.
    ///
    /// Digit and letter keys carry a `CHAR_` prefix here since Rust
    /// identifiers cannot start with a digit.
    VK: u16, "VK_";
    LBUTTON = 0x01,
    RBUTTON = 0x02,
    CANCEL = 0x03,
    MBUTTON = 0x04,
    XBUTTON1 = 0x05,
    XBUTTON2 = 0x06,
    BACK = 0x08,
    TAB = 0x09,
    CLEAR = 0x0C,
    RETURN = 0x0D,
    SHIFT = 0x10,
    CONTROL = 0x11,
    MENU = 0x12,
    PAUSE = 0x13,
    CAPITAL = 0x14,
    ESCAPE = 0x1B,
    SPACE = 0x20,
    PRIOR = 0x21,
    NEXT = 0x22,
    END = 0x23,
    HOME = 0x24,
    LEFT = 0x25,
    UP = 0x26,
    RIGHT = 0x27,
    DOWN = 0x28,
    SELECT = 0x29,
    PRINT = 0x2A,
    EXECUTE = 0x2B,
    SNAPSHOT = 0x2C,
    INSERT = 0x2D,
    DELETE = 0x2E,
    HELP = 0x2F,
    CHAR_0 = 0x30,
    CHAR_1 = 0x31,
    CHAR_2 = 0x32,
    CHAR_3 = 0x33,
    CHAR_4 = 0x34,
    CHAR_5 = 0x35,
    CHAR_6 = 0x36,
    CHAR_7 = 0x37,
    CHAR_8 = 0x38,
    CHAR_9 = 0x39,
    CHAR_A = 0x41,
    CHAR_B = 0x42,
    CHAR_C = 0x43,
    CHAR_D = 0x44,
    CHAR_E = 0x45,
    CHAR_F = 0x46,
    CHAR_G = 0x47,
    CHAR_H = 0x48,
    CHAR_I = 0x49,
    CHAR_J = 0x4A,
    CHAR_K = 0x4B,
    CHAR_L = 0x4C,
    CHAR_M = 0x4D,
    CHAR_N = 0x4E,
    CHAR_O = 0x4F,
    CHAR_P = 0x50,
    CHAR_Q = 0x51,
    CHAR_R = 0x52,
    CHAR_S = 0x53,
    CHAR_T = 0x54,
    CHAR_U = 0x55,
    CHAR_V = 0x56,
    CHAR_W = 0x57,
    CHAR_X = 0x58,
    CHAR_Y = 0x59,
    CHAR_Z = 0x5A,
    LWIN = 0x5B,
    RWIN = 0x5C,
    APPS = 0x5D,
    SLEEP = 0x5F,
    NUMPAD0 = 0x60,
    NUMPAD1 = 0x61,
    NUMPAD2 = 0x62,
    NUMPAD3 = 0x63,
    NUMPAD4 = 0x64,
    NUMPAD5 = 0x65,
    NUMPAD6 = 0x66,
    NUMPAD7 = 0x67,
    NUMPAD8 = 0x68,
    NUMPAD9 = 0x69,
    MULTIPLY = 0x6A,
    ADD = 0x6B,
    SEPARATOR = 0x6C,
    SUBTRACT = 0x6D,
    DECIMAL = 0x6E,
    DIVIDE = 0x6F,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    NUMLOCK = 0x90,
    SCROLL = 0x91,
    LSHIFT = 0xA0,
    RSHIFT = 0xA1,
    LCONTROL = 0xA2,
    RCONTROL = 0xA3,
    LMENU = 0xA4,
    RMENU = 0xA5,
    VOLUME_MUTE = 0xAD,
    VOLUME_DOWN = 0xAE,
    VOLUME_UP = 0xAF,
    MEDIA_NEXT_TRACK = 0xB0,
    MEDIA_PREV_TRACK = 0xB1,
    MEDIA_STOP = 0xB2,
    MEDIA_PLAY_PAUSE = 0xB3,
    OEM_1 = 0xBA,
    OEM_PLUS = 0xBB,
    OEM_COMMA = 0xBC,
    OEM_MINUS = 0xBD,
    OEM_PERIOD = 0xBE,
    OEM_2 = 0xBF,
    OEM_3 = 0xC0,
    OEM_4 = 0xDB,
    OEM_5 = 0xDC,
    OEM_6 = 0xDD,
    OEM_7 = 0xDE,
}

impl VK {
    /// Key for an ASCII digit or letter, as typed.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | 'A'..='Z' => Some(Self(c as u16)),
            'a'..='z' => Some(Self(c.to_ascii_uppercase() as u16)),
            _ => None,
        }
    }
}

const_bitflag! {
    /// `MessageBox` style.
    MB: u32, "MB_";
    OK = 0x0000_0000,
    OKCANCEL = 0x0000_0001,
    ABORTRETRYIGNORE = 0x0000_0002,
    YESNOCANCEL = 0x0000_0003,
    YESNO = 0x0000_0004,
    RETRYCANCEL = 0x0000_0005,
    CANCELTRYCONTINUE = 0x0000_0006,
    ICONHAND = 0x0000_0010,
    ICONERROR = 0x0000_0010,
    ICONSTOP = 0x0000_0010,
    ICONQUESTION = 0x0000_0020,
    ICONEXCLAMATION = 0x0000_0030,
    ICONWARNING = 0x0000_0030,
    ICONASTERISK = 0x0000_0040,
    ICONINFORMATION = 0x0000_0040,
    DEFBUTTON2 = 0x0000_0100,
    DEFBUTTON3 = 0x0000_0200,
    DEFBUTTON4 = 0x0000_0300,
    SYSTEMMODAL = 0x0000_1000,
    TASKMODAL = 0x0000_2000,
    HELP = 0x0000_4000,
    SETFOREGROUND = 0x0001_0000,
    DEFAULT_DESKTOP_ONLY = 0x0002_0000,
    TOPMOST = 0x0004_0000,
    RIGHT = 0x0008_0000,
    RTLREADING = 0x0010_0000,
    SERVICE_NOTIFICATION = 0x0020_0000,
}

const_ordinary! {
    /// Dialog box command id, as returned by `MessageBox`.
    DLGID: i32, "ID";
    OK = 1,
    CANCEL = 2,
    ABORT = 3,
    RETRY = 4,
    IGNORE = 5,
    YES = 6,
    NO = 7,
    CLOSE = 8,
    HELP = 9,
    TRYAGAIN = 10,
    CONTINUE = 11,
}

const_ordinary! {
    /// `GetWindowLongPtr` index.
    GWLP: i32, "GWLP_";
    WNDPROC = -4,
    HINSTANCE = -6,
    HWNDPARENT = -8,
    ID = -12,
    STYLE = -16,
    EXSTYLE = -20,
    USERDATA = -21,
}

const_bitflag! {
    /// `SetWindowPos` flags.
    SWP: u32, "SWP_";
    NOSIZE = 0x0001,
    NOMOVE = 0x0002,
    NOZORDER = 0x0004,
    NOREDRAW = 0x0008,
    NOACTIVATE = 0x0010,
    FRAMECHANGED = 0x0020,
    SHOWWINDOW = 0x0040,
    HIDEWINDOW = 0x0080,
    NOCOPYBITS = 0x0100,
    NOOWNERZORDER = 0x0200,
    NOSENDCHANGING = 0x0400,
    DEFERERASE = 0x2000,
    ASYNCWINDOWPOS = 0x4000,
}

const_ordinary! {
    /// `GetSystemMetrics` index.
    SM: i32, "SM_";
    CXSCREEN = 0,
    CYSCREEN = 1,
    CXVSCROLL = 2,
    CYHSCROLL = 3,
    CYCAPTION = 4,
    CXBORDER = 5,
    CYBORDER = 6,
    CXICON = 11,
    CYICON = 12,
    CXCURSOR = 13,
    CYCURSOR = 14,
    CYMENU = 15,
    CXMIN = 28,
    CYMIN = 29,
    CXSMICON = 49,
    CYSMICON = 50,
    CMONITORS = 80,
    REMOTESESSION = 0x1000,
}

const_ordinary! {
    /// `GetSysColor` index.
    COLOR: i32, "COLOR_";
    SCROLLBAR = 0,
    BACKGROUND = 1,
    ACTIVECAPTION = 2,
    INACTIVECAPTION = 3,
    MENU = 4,
    WINDOW = 5,
    WINDOWFRAME = 6,
    MENUTEXT = 7,
    WINDOWTEXT = 8,
    CAPTIONTEXT = 9,
    ACTIVEBORDER = 10,
    INACTIVEBORDER = 11,
    APPWORKSPACE = 12,
    HIGHLIGHT = 13,
    HIGHLIGHTTEXT = 14,
    BTNFACE = 15,
    BTNSHADOW = 16,
    GRAYTEXT = 17,
    BTNTEXT = 18,
    INACTIVECAPTIONTEXT = 19,
    BTNHIGHLIGHT = 20,
    INFOTEXT = 23,
    INFOBK = 24,
    HOTLIGHT = 26,
    GRADIENTACTIVECAPTION = 27,
    GRADIENTINACTIVECAPTION = 28,
    MENUHILIGHT = 29,
    MENUBAR = 30,
}

const_ordinary! {
    /// System cursor resource id, passed through `MAKEINTRESOURCE`.
    IDC: u16, "IDC_";
    ARROW = 32512,
    IBEAM = 32513,
    WAIT = 32514,
    CROSS = 32515,
    UPARROW = 32516,
    SIZENWSE = 32642,
    SIZENESW = 32643,
    SIZEWE = 32644,
    SIZENS = 32645,
    SIZEALL = 32646,
    NO = 32648,
    HAND = 32649,
    APPSTARTING = 32650,
    HELP = 32651,
}

const_ordinary! {
    /// System icon resource id, passed through `MAKEINTRESOURCE`.
    IDI: u16, "IDI_";
    APPLICATION = 32512,
    HAND = 32513,
    ERROR = 32513,
    QUESTION = 32514,
    EXCLAMATION = 32515,
    WARNING = 32515,
    ASTERISK = 32516,
    INFORMATION = 32516,
    WINLOGO = 32517,
    SHIELD = 32518,
}

impl IDC {
    /// Resource pointer for `LoadCursorW`.
    #[must_use]
    pub const fn as_resource(self) -> *const u16 {
        crate::bits::make_int_resource(self.0)
    }
}

impl IDI {
    /// Resource pointer for `LoadIconW`.
    #[must_use]
    pub const fn as_resource(self) -> *const u16 {
        crate::bits::make_int_resource(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows_sys::Win32::UI::Input::KeyboardAndMouse as km;
    use windows_sys::Win32::UI::WindowsAndMessaging as wm;

    #[test]
    fn test_values_match_sdk() {
        assert_eq!(WM::CLOSE.raw(), wm::WM_CLOSE as u32);
        assert_eq!(WM::NCCREATE.raw(), wm::WM_NCCREATE as u32);
        assert_eq!(WM::DPICHANGED.raw(), wm::WM_DPICHANGED as u32);
        assert_eq!(WM::THEMECHANGED.raw(), wm::WM_THEMECHANGED as u32);
        assert_eq!(WS::OVERLAPPEDWINDOW.raw(), wm::WS_OVERLAPPEDWINDOW as u32);
        assert_eq!(WS::POPUPWINDOW.raw(), wm::WS_POPUPWINDOW as u32);
        assert_eq!(WS_EX::PALETTEWINDOW.raw(), wm::WS_EX_PALETTEWINDOW as u32);
        assert_eq!(WS_EX::NOREDIRECTIONBITMAP.raw(), wm::WS_EX_NOREDIRECTIONBITMAP as u32);
        assert_eq!(CS::DROPSHADOW.raw(), wm::CS_DROPSHADOW as u32);
        assert_eq!(SW::SHOWDEFAULT.raw(), wm::SW_SHOWDEFAULT as i32);
        assert_eq!(MB::ICONINFORMATION.raw(), wm::MB_ICONINFORMATION as u32);
        assert_eq!(MB::SERVICE_NOTIFICATION.raw(), wm::MB_SERVICE_NOTIFICATION as u32);
        assert_eq!(GWLP::USERDATA.raw(), wm::GWLP_USERDATA as i32);
        assert_eq!(SWP::ASYNCWINDOWPOS.raw(), wm::SWP_ASYNCWINDOWPOS as u32);
        assert_eq!(SM::CMONITORS.raw(), wm::SM_CMONITORS as i32);
        assert_eq!(DLGID::TRYAGAIN.raw(), wm::IDTRYAGAIN as i32);
        assert_eq!(VK::RETURN.raw(), km::VK_RETURN as u16);
        assert_eq!(VK::OEM_7.raw(), km::VK_OEM_7 as u16);
        assert_eq!(VK::MEDIA_PLAY_PAUSE.raw(), km::VK_MEDIA_PLAY_PAUSE as u16);
    }

    #[test]
    fn test_private_message_ranges() {
        assert_eq!(WM::user(1).raw(), 0x0401);
        assert_eq!(WM::app(0), WM::APP);
        assert_eq!(WM::user(1).name(), None);
    }

    #[test]
    fn test_vk_from_char() {
        assert_eq!(VK::from_char('a'), Some(VK::CHAR_A));
        assert_eq!(VK::from_char('7'), Some(VK::CHAR_7));
        assert_eq!(VK::from_char('-'), None);
    }

    #[test]
    fn test_aliases_report_first_name() {
        assert_eq!(MB::ICONSTOP, MB::ICONHAND);
        assert_eq!(IDI::ERROR.name(), Some("HAND"));
        assert_eq!(IDC::ARROW.as_resource() as usize, 32512);
    }
}
