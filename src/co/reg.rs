const_ordinary! {
    /// Registry value type.
    REG: u32, "REG_";
    NONE = 0,
    SZ = 1,
    EXPAND_SZ = 2,
    BINARY = 3,
    DWORD = 4,
    DWORD_BIG_ENDIAN = 5,
    LINK = 6,
    MULTI_SZ = 7,
    RESOURCE_LIST = 8,
    FULL_RESOURCE_DESCRIPTOR = 9,
    RESOURCE_REQUIREMENTS_LIST = 10,
    QWORD = 11,
}

const_bitflag! {
    /// Registry key access rights.
    KEY: u32, "KEY_";
    QUERY_VALUE = 0x0001,
    SET_VALUE = 0x0002,
    CREATE_SUB_KEY = 0x0004,
    ENUMERATE_SUB_KEYS = 0x0008,
    NOTIFY = 0x0010,
    CREATE_LINK = 0x0020,
    WOW64_64KEY = 0x0100,
    WOW64_32KEY = 0x0200,
    READ = 0x0002_0019,
    WRITE = 0x0002_0006,
    EXECUTE = 0x0002_0019,
    ALL_ACCESS = 0x000F_003F,
}

const_bitflag! {
    /// `RegCreateKeyExW` options.
    REG_OPTION: u32, "REG_OPTION_";
    NON_VOLATILE = 0x0000,
    VOLATILE = 0x0001,
    CREATE_LINK = 0x0002,
    BACKUP_RESTORE = 0x0004,
    OPEN_LINK = 0x0008,
}
