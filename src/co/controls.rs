//! Styles, messages and notification codes of the common controls.

const_bitflag! {
    /// Button control style.
    ///
    /// The low nibble is an enumeration of button kinds, not a set of flags.
    BS: u32, "BS_";
    PUSHBUTTON = 0x0000,
    DEFPUSHBUTTON = 0x0001,
    CHECKBOX = 0x0002,
    AUTOCHECKBOX = 0x0003,
    RADIOBUTTON = 0x0004,
    THREESTATE = 0x0005,
    AUTOTHREESTATE = 0x0006,
    GROUPBOX = 0x0007,
    USERBUTTON = 0x0008,
    AUTORADIOBUTTON = 0x0009,
    OWNERDRAW = 0x000B,
    LEFTTEXT = 0x0020,
    ICON = 0x0040,
    BITMAP = 0x0080,
    LEFT = 0x0100,
    RIGHT = 0x0200,
    CENTER = 0x0300,
    TOP = 0x0400,
    BOTTOM = 0x0800,
    VCENTER = 0x0C00,
    PUSHLIKE = 0x1000,
    MULTILINE = 0x2000,
    NOTIFY = 0x4000,
    FLAT = 0x8000,
}

impl BS {
    /// Mask of the button kind nibble.
    pub const TYPEMASK: u32 = 0x000F;

    /// The kind of button, with every other style bit stripped.
    #[must_use]
    pub const fn kind(self) -> Self {
        Self::from_bits_retain(self.bits() & Self::TYPEMASK)
    }
}

const_ordinary! {
    /// Check state of a button, `BM_GETCHECK` / `BM_SETCHECK`.
    BST: u32, "BST_";
    UNCHECKED = 0x0000,
    CHECKED = 0x0001,
    INDETERMINATE = 0x0002,
}

const_ordinary! {
    /// Button control message.
    BM: u32, "BM_";
    GETCHECK = 0x00F0,
    SETCHECK = 0x00F1,
    GETSTATE = 0x00F2,
    SETSTATE = 0x00F3,
    SETSTYLE = 0x00F4,
    CLICK = 0x00F5,
    GETIMAGE = 0x00F6,
    SETIMAGE = 0x00F7,
}

const_bitflag! {
    /// Edit control style.
    ES: u32, "ES_";
    LEFT = 0x0000,
    CENTER = 0x0001,
    RIGHT = 0x0002,
    MULTILINE = 0x0004,
    UPPERCASE = 0x0008,
    LOWERCASE = 0x0010,
    PASSWORD = 0x0020,
    AUTOVSCROLL = 0x0040,
    AUTOHSCROLL = 0x0080,
    NOHIDESEL = 0x0100,
    OEMCONVERT = 0x0400,
    READONLY = 0x0800,
    WANTRETURN = 0x1000,
    NUMBER = 0x2000,
}

const_ordinary! {
    /// Edit control message.
    EM: u32, "EM_";
    GETSEL = 0x00B0,
    SETSEL = 0x00B1,
    GETRECT = 0x00B2,
    SCROLLCARET = 0x00B7,
    GETMODIFY = 0x00B8,
    SETMODIFY = 0x00B9,
    GETLINECOUNT = 0x00BA,
    LINEINDEX = 0x00BB,
    LINELENGTH = 0x00C1,
    REPLACESEL = 0x00C2,
    GETLINE = 0x00C4,
    LIMITTEXT = 0x00C5,
    CANUNDO = 0x00C6,
    UNDO = 0x00C7,
    SETREADONLY = 0x00CF,
}

const_ordinary! {
    /// Edit control notification code, carried in the high word of
    /// `WM_COMMAND`'s `wParam`.
    EN: u16, "EN_";
    SETFOCUS = 0x0100,
    KILLFOCUS = 0x0200,
    CHANGE = 0x0300,
    UPDATE = 0x0400,
    ERRSPACE = 0x0500,
    MAXTEXT = 0x0501,
    HSCROLL = 0x0601,
    VSCROLL = 0x0602,
}

const_bitflag! {
    /// Static control style.
    SS: u32, "SS_";
    LEFT = 0x0000,
    CENTER = 0x0001,
    RIGHT = 0x0002,
    ICON = 0x0003,
    BITMAP = 0x000E,
    ETCHEDHORZ = 0x0010,
    ETCHEDVERT = 0x0011,
    NOPREFIX = 0x0080,
    NOTIFY = 0x0100,
    CENTERIMAGE = 0x0200,
    SUNKEN = 0x1000,
    ENDELLIPSIS = 0x4000,
    PATHELLIPSIS = 0x8000,
    WORDELLIPSIS = 0xC000,
}

const_ordinary! {
    /// Combo box message.
    CB: u32, "CB_";
    GETEDITSEL = 0x0140,
    LIMITTEXT = 0x0141,
    SETEDITSEL = 0x0142,
    ADDSTRING = 0x0143,
    DELETESTRING = 0x0144,
    GETCOUNT = 0x0146,
    GETCURSEL = 0x0147,
    GETLBTEXT = 0x0148,
    GETLBTEXTLEN = 0x0149,
    INSERTSTRING = 0x014A,
    RESETCONTENT = 0x014B,
    FINDSTRING = 0x014C,
    SELECTSTRING = 0x014D,
    SETCURSEL = 0x014E,
    SHOWDROPDOWN = 0x014F,
    GETITEMDATA = 0x0150,
    SETITEMDATA = 0x0151,
}

const_bitflag! {
    /// List view style.
    LVS: u32, "LVS_";
    ICON = 0x0000,
    REPORT = 0x0001,
    SMALLICON = 0x0002,
    LIST = 0x0003,
    SINGLESEL = 0x0004,
    SHOWSELALWAYS = 0x0008,
    SORTASCENDING = 0x0010,
    SORTDESCENDING = 0x0020,
    SHAREIMAGELISTS = 0x0040,
    NOLABELWRAP = 0x0080,
    AUTOARRANGE = 0x0100,
    EDITLABELS = 0x0200,
    OWNERDATA = 0x1000,
    NOSCROLL = 0x2000,
    NOCOLUMNHEADER = 0x4000,
    NOSORTHEADER = 0x8000,
}

const_bitflag! {
    /// List view extended style, `LVM_SETEXTENDEDLISTVIEWSTYLE`.
    LVS_EX: u32, "LVS_EX_";
    GRIDLINES = 0x0000_0001,
    SUBITEMIMAGES = 0x0000_0002,
    CHECKBOXES = 0x0000_0004,
    TRACKSELECT = 0x0000_0008,
    HEADERDRAGDROP = 0x0000_0010,
    FULLROWSELECT = 0x0000_0020,
    ONECLICKACTIVATE = 0x0000_0040,
    TWOCLICKACTIVATE = 0x0000_0080,
    INFOTIP = 0x0000_0400,
    LABELTIP = 0x0000_4000,
    DOUBLEBUFFER = 0x0001_0000,
}

const_ordinary! {
    /// List view message.
    LVM: u32, "LVM_";
    FIRST = 0x1000,
    GETITEMCOUNT = 0x1004,
    DELETEITEM = 0x1008,
    DELETEALLITEMS = 0x1009,
    ENSUREVISIBLE = 0x1013,
    DELETECOLUMN = 0x101C,
    SETITEMSTATE = 0x102B,
    GETITEMSTATE = 0x102C,
    GETSELECTEDCOUNT = 0x1032,
    SETEXTENDEDLISTVIEWSTYLE = 0x1036,
    GETEXTENDEDLISTVIEWSTYLE = 0x1037,
    GETSELECTIONMARK = 0x1042,
    GETITEMW = 0x104B,
    SETITEMW = 0x104C,
    INSERTITEMW = 0x104D,
    GETCOLUMNW = 0x105F,
    SETCOLUMNW = 0x1060,
    INSERTCOLUMNW = 0x1061,
    GETITEMTEXTW = 0x1073,
    SETITEMTEXTW = 0x1074,
}

const_ordinary! {
    /// Progress bar message.
    PBM: u32, "PBM_";
    SETRANGE = 0x0401,
    SETPOS = 0x0402,
    DELTAPOS = 0x0403,
    SETSTEP = 0x0404,
    STEPIT = 0x0405,
    SETRANGE32 = 0x0406,
    GETRANGE = 0x0407,
    GETPOS = 0x0408,
    SETBARCOLOR = 0x0409,
    SETMARQUEE = 0x040A,
    SETSTATE = 0x0410,
    SETBKCOLOR = 0x2001,
}

const_ordinary! {
    /// Trackbar message.
    TBM: u32, "TBM_";
    GETPOS = 0x0400,
    GETRANGEMIN = 0x0401,
    GETRANGEMAX = 0x0402,
    SETPOS = 0x0405,
    SETRANGE = 0x0406,
    SETRANGEMIN = 0x0407,
    SETRANGEMAX = 0x0408,
}

const_bitflag! {
    /// Custom draw stage, `NMCUSTOMDRAW::dwDrawStage`.
    CDDS: u32, "CDDS_";
    PREPAINT = 0x0000_0001,
    POSTPAINT = 0x0000_0002,
    PREERASE = 0x0000_0003,
    POSTERASE = 0x0000_0004,
    ITEM = 0x0001_0000,
    ITEMPREPAINT = Self::ITEM.bits() | Self::PREPAINT.bits(),
    ITEMPOSTPAINT = Self::ITEM.bits() | Self::POSTPAINT.bits(),
    SUBITEM = 0x0002_0000,
}

const_bitflag! {
    /// Custom draw return value.
    CDRF: u32, "CDRF_";
    DODEFAULT = 0x0000_0000,
    NEWFONT = 0x0000_0002,
    SKIPDEFAULT = 0x0000_0004,
    DOERASE = 0x0000_0008,
    NOTIFYPOSTPAINT = 0x0000_0010,
    NOTIFYITEMDRAW = 0x0000_0020,
    NOTIFYSUBITEMDRAW = 0x0000_0020,
    NOTIFYPOSTERASE = 0x0000_0040,
    SKIPPOSTPAINT = 0x0000_0100,
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows_sys::Win32::UI::Controls as ctl;
    use windows_sys::Win32::UI::WindowsAndMessaging as wm;

    #[test]
    fn test_values_match_sdk() {
        assert_eq!(BM::SETCHECK.raw(), wm::BM_SETCHECK as u32);
        assert_eq!(EM::REPLACESEL.raw(), ctl::EM_REPLACESEL as u32);
        assert_eq!(CB::SETCURSEL.raw(), wm::CB_SETCURSEL as u32);
        assert_eq!(EN::CHANGE.raw() as u32, wm::EN_CHANGE as u32);
        assert_eq!(LVM::INSERTCOLUMNW.raw(), ctl::LVM_INSERTCOLUMNW as u32);
        assert_eq!(LVM::SETITEMTEXTW.raw(), ctl::LVM_SETITEMTEXTW as u32);
        assert_eq!(LVS_EX::DOUBLEBUFFER.raw(), ctl::LVS_EX_DOUBLEBUFFER as u32);
        assert_eq!(PBM::SETMARQUEE.raw(), ctl::PBM_SETMARQUEE as u32);
        assert_eq!(TBM::SETRANGEMAX.raw(), ctl::TBM_SETRANGEMAX as u32);
        assert_eq!(CDDS::ITEMPREPAINT.raw(), ctl::CDDS_ITEMPREPAINT as u32);
        assert_eq!(CDRF::NOTIFYITEMDRAW.raw(), ctl::CDRF_NOTIFYITEMDRAW as u32);
    }

    #[test]
    fn test_button_kind() {
        let style = BS::AUTOCHECKBOX | BS::PUSHLIKE | BS::NOTIFY;
        assert_eq!(style.kind(), BS::AUTOCHECKBOX);
        assert_eq!(BS::GROUPBOX.kind().to_string(), "BS_GROUPBOX");
    }

    #[test]
    fn test_same_value_different_family() {
        // Progress bar and trackbar messages overlap numerically.
        assert_eq!(PBM::SETRANGE32.raw(), TBM::SETRANGE.raw());
        assert_eq!(PBM::SETRANGE32.to_string(), "PBM_SETRANGE32");
        assert_eq!(TBM::SETRANGE.to_string(), "TBM_SETRANGE");
    }
}
