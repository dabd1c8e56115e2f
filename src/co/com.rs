const_bitflag! {
    /// Execution context for `CoCreateInstance`.
    CLSCTX: u32, "CLSCTX_";
    INPROC_SERVER = 0x0001,
    INPROC_HANDLER = 0x0002,
    LOCAL_SERVER = 0x0004,
    REMOTE_SERVER = 0x0010,
    ALL = Self::INPROC_SERVER.bits()
        | Self::INPROC_HANDLER.bits()
        | Self::LOCAL_SERVER.bits()
        | Self::REMOTE_SERVER.bits(),
}

const_bitflag! {
    /// `CoInitializeEx` concurrency model and options.
    COINIT: u32, "COINIT_";
    MULTITHREADED = 0x0,
    APARTMENTTHREADED = 0x2,
    DISABLE_OLE1DDE = 0x4,
    SPEED_OVER_MEMORY = 0x8,
}

const_bitflag! {
    /// Storage access mode.
    STGM: u32, "STGM_";
    READ = 0x0000_0000,
    WRITE = 0x0000_0001,
    READWRITE = 0x0000_0002,
    SHARE_EXCLUSIVE = 0x0000_0010,
    SHARE_DENY_WRITE = 0x0000_0020,
    SHARE_DENY_READ = 0x0000_0030,
    SHARE_DENY_NONE = 0x0000_0040,
    CREATE = 0x0000_1000,
    TRANSACTED = 0x0001_0000,
}

const_bitflag! {
    /// Taskbar button progress state, `ITaskbarList3::SetProgressState`.
    TBPF: u32, "TBPF_";
    NOPROGRESS = 0x0,
    INDETERMINATE = 0x1,
    NORMAL = 0x2,
    ERROR = 0x4,
    PAUSED = 0x8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows_sys::Win32::System::Com as com;

    #[test]
    fn test_values_match_sdk() {
        assert_eq!(CLSCTX::ALL.raw(), com::CLSCTX_ALL as u32);
        assert_eq!(CLSCTX::REMOTE_SERVER.raw(), com::CLSCTX_REMOTE_SERVER as u32);
        assert_eq!(COINIT::APARTMENTTHREADED.raw(), com::COINIT_APARTMENTTHREADED as u32);
        assert_eq!(STGM::SHARE_DENY_NONE.raw(), com::STGM_SHARE_DENY_NONE as u32);
        assert_eq!(STGM::TRANSACTED.raw(), com::STGM_TRANSACTED as u32);
    }
}
