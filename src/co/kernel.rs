const_bitflag! {
    /// `FormatMessageW` flags.
    FORMAT_MESSAGE: u32, "FORMAT_MESSAGE_";
    MAX_WIDTH_MASK = 0x0000_00FF,
    ALLOCATE_BUFFER = 0x0000_0100,
    IGNORE_INSERTS = 0x0000_0200,
    FROM_STRING = 0x0000_0400,
    FROM_HMODULE = 0x0000_0800,
    FROM_SYSTEM = 0x0000_1000,
    ARGUMENT_ARRAY = 0x0000_2000,
}

const_bitflag! {
    /// `LoadLibraryExW` flags.
    LOAD_LIBRARY: u32, "LOAD_LIBRARY_";
    AS_DATAFILE = 0x0000_0002,
    WITH_ALTERED_SEARCH_PATH = 0x0000_0008,
    IGNORE_CODE_AUTHZ_LEVEL = 0x0000_0010,
    AS_IMAGE_RESOURCE = 0x0000_0020,
    AS_DATAFILE_EXCLUSIVE = 0x0000_0040,
    REQUIRE_SIGNED_TARGET = 0x0000_0080,
    SEARCH_DLL_LOAD_DIR = 0x0000_0100,
    SEARCH_APPLICATION_DIR = 0x0000_0200,
    SEARCH_USER_DIRS = 0x0000_0400,
    SEARCH_SYSTEM32 = 0x0000_0800,
    SEARCH_DEFAULT_DIRS = 0x0000_1000,
}
