//! Lazily bound system procedures.
//!
//! Nothing here is linked against an import library. Each export is looked up
//! by name the first time it is needed and the outcome, success or failure, is
//! cached for the life of the process. Callers turn the address into a typed
//! function pointer with [`LazyProc::as_fn`].

use std::ffi::CStr;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::co;
use crate::error::{Error, Result, SysResult};

pub mod tables;

/// Opaque module handle as returned by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModuleHandle(pub usize);

/// Maps library and export names to addresses.
///
/// [`SystemLoader`] asks the OS; tests install their own.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, name: &str) -> SysResult<ModuleHandle>;
    fn proc_address(&self, module: ModuleHandle, name: &CStr) -> SysResult<NonZeroUsize>;
}

/// `LoadLibraryExW` + `GetProcAddress`.
#[derive(Clone, Copy, Debug)]
pub struct SystemLoader {
    pub flags: co::LOAD_LIBRARY,
}

impl Default for SystemLoader {
    fn default() -> Self {
        Self { flags: co::LOAD_LIBRARY::SEARCH_SYSTEM32 }
    }
}

impl SystemLoader {
    pub fn new(flags: co::LOAD_LIBRARY) -> Self {
        Self { flags }
    }
}

#[cfg(windows)]
impl ModuleLoader for SystemLoader {
    fn load(&self, name: &str) -> SysResult<ModuleHandle> {
        use windows_sys::Win32::Foundation::GetLastError;
        use windows_sys::Win32::System::LibraryLoader::LoadLibraryExW;

        let wide = crate::utils::to_wstring(name);
        let module = unsafe { LoadLibraryExW(wide.as_ptr(), std::ptr::null_mut(), self.flags.raw()) };
        if module.is_null() {
            let err = co::ERROR::from_raw(unsafe { GetLastError() });
            return Err(if err.is_success() { co::ERROR::MOD_NOT_FOUND } else { err });
        }
        Ok(ModuleHandle(module as usize))
    }

    fn proc_address(&self, module: ModuleHandle, name: &CStr) -> SysResult<NonZeroUsize> {
        use windows_sys::Win32::System::LibraryLoader::GetProcAddress;

        let proc = unsafe { GetProcAddress(module.0 as _, name.as_ptr().cast()) };
        proc.and_then(|f| NonZeroUsize::new(f as usize))
            .ok_or(co::ERROR::PROC_NOT_FOUND)
    }
}

#[cfg(not(windows))]
impl ModuleLoader for SystemLoader {
    fn load(&self, _name: &str) -> SysResult<ModuleHandle> {
        Err(co::ERROR::CALL_NOT_IMPLEMENTED)
    }

    fn proc_address(&self, _module: ModuleHandle, _name: &CStr) -> SysResult<NonZeroUsize> {
        Err(co::ERROR::CALL_NOT_IMPLEMENTED)
    }
}

static LOADER: OnceLock<Box<dyn ModuleLoader>> = OnceLock::new();

/// Sets the process-wide loader. Only the first call wins, and only if no
/// procedure has been resolved through the default loader yet.
pub fn install_loader(loader: Box<dyn ModuleLoader>) -> Result<()> {
    LOADER.set(loader).map_err(|_| Error::LoaderAlreadyInstalled)
}

pub fn loader() -> &'static dyn ModuleLoader {
    LOADER.get_or_init(|| Box::new(SystemLoader::default())).as_ref()
}

/// A system library, loaded on first use.
pub struct Dll {
    name: &'static str,
    handle: OnceLock<SysResult<ModuleHandle>>,
}

impl Dll {
    pub const fn new(name: &'static str) -> Self {
        Self { name, handle: OnceLock::new() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handle(&self) -> SysResult<ModuleHandle> {
        self.handle_with(loader())
    }

    pub fn handle_with(&self, loader: &dyn ModuleLoader) -> SysResult<ModuleHandle> {
        *self.handle.get_or_init(|| {
            let res = loader.load(self.name).map_err(|e| {
                if e.is_success() { co::ERROR::MOD_NOT_FOUND } else { e }
            });
            match res {
                Ok(h) => debug!("Loaded {} at {:#x}", self.name, h.0),
                Err(e) => warn!("Failed to load {}: {}", self.name, e),
            }
            res
        })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.handle.get(), Some(Ok(_)))
    }
}

/// One export of a [`Dll`], resolved on first use.
pub struct LazyProc {
    dll: &'static Dll,
    name: &'static CStr,
    addr: OnceLock<SysResult<NonZeroUsize>>,
}

impl LazyProc {
    /// `name` must carry exactly one trailing NUL; anything else fails to
    /// compile when used in a `static`.
    pub const fn new(dll: &'static Dll, name: &'static str) -> Self {
        let name = match CStr::from_bytes_with_nul(name.as_bytes()) {
            Ok(c) => c,
            Err(_) => panic!("export name must end with a single NUL"),
        };
        Self { dll, name, addr: OnceLock::new() }
    }

    pub fn name(&self) -> &'static str {
        self.name.to_str().unwrap_or("<non-utf8>")
    }

    pub fn dll(&self) -> &'static Dll {
        self.dll
    }

    pub fn address(&self) -> SysResult<NonZeroUsize> {
        self.get_with(loader())
    }

    pub fn get_with(&self, loader: &dyn ModuleLoader) -> SysResult<NonZeroUsize> {
        *self.addr.get_or_init(|| {
            let module = self.dll.handle_with(loader)?;
            let res = loader.proc_address(module, self.name);
            match res {
                Ok(_) => debug!("Resolved {}!{}", self.dll.name, self.name()),
                Err(e) => warn!("Failed to resolve {}!{}: {}", self.dll.name, self.name(), e),
            }
            res
        })
    }

    /// Whether a lookup already succeeded. Never triggers one.
    pub fn is_resolved(&self) -> bool {
        matches!(self.addr.get(), Some(Ok(_)))
    }

    /// Resolves the export and reinterprets it as a function pointer.
    ///
    /// # Safety
    /// `F` must be the `unsafe extern "system" fn` type matching the export's
    /// real signature.
    pub unsafe fn as_fn<F: Copy>(&self) -> SysResult<F> {
        const { assert!(size_of::<F>() == size_of::<usize>()) };
        let addr = self.address()?.get();
        Ok(unsafe { std::mem::transmute_copy::<usize, F>(&addr) })
    }
}

/// Every [`LazyProc`] declared for one library.
pub struct ProcTable {
    pub dll: &'static Dll,
    pub procs: &'static [&'static LazyProc],
}

impl ProcTable {
    pub fn name(&self) -> &'static str {
        self.dll.name()
    }

    /// Resolves every entry, returning the names that failed.
    pub fn preload(&self) -> Vec<&'static str> {
        self.preload_with(loader())
    }

    pub fn preload_with(&self, loader: &dyn ModuleLoader) -> Vec<&'static str> {
        let missing: Vec<_> = self
            .procs
            .iter()
            .filter(|p| p.get_with(loader).is_err())
            .map(|p| p.name())
            .collect();
        if missing.is_empty() {
            debug!("Preloaded {} ({} procedures)", self.name(), self.procs.len());
        } else {
            warn!("{}: {} of {} procedures missing", self.name(), missing.len(), self.procs.len());
        }
        missing
    }
}

/// Declares one module per library: a `DLL` static, a [`LazyProc`] static
/// for each export and a `TABLE` listing them.
macro_rules! proc_table {
    (
        $(#[$doc:meta])*
        $module:ident, $dll:literal {
            $($proc:ident),* $(,)?
        }
    ) => {
        $(#[$doc])*
        #[allow(non_upper_case_globals)]
        pub mod $module {
            use $crate::dll::{Dll, LazyProc, ProcTable};

            pub static DLL: Dll = Dll::new($dll);

            $(
                pub static $proc: LazyProc = LazyProc::new(&DLL, concat!(stringify!($proc), "\0"));
            )*

            pub static TABLE: ProcTable = ProcTable {
                dll: &DLL,
                procs: &[$(&$proc),*],
            };
        }
    };
}
pub(crate) use proc_table;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loader knowing one library and a fixed set of exports.
    #[derive(Default)]
    pub(crate) struct MockLoader {
        pub loads: AtomicUsize,
        pub lookups: AtomicUsize,
    }

    impl ModuleLoader for MockLoader {
        fn load(&self, name: &str) -> SysResult<ModuleHandle> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if name.eq_ignore_ascii_case("mock.dll") {
                Ok(ModuleHandle(0x1000))
            } else {
                Err(co::ERROR::SUCCESS)
            }
        }

        fn proc_address(&self, module: ModuleHandle, name: &CStr) -> SysResult<NonZeroUsize> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            match name.to_bytes() {
                b"Alpha" => NonZeroUsize::new(module.0 + 0x10).ok_or(co::ERROR::PROC_NOT_FOUND),
                b"Beta" => NonZeroUsize::new(module.0 + 0x20).ok_or(co::ERROR::PROC_NOT_FOUND),
                _ => Err(co::ERROR::PROC_NOT_FOUND),
            }
        }
    }

    // Each test gets its own tables; the caches are process-wide.
    proc_table!(cached, "mock.dll" { Alpha });
    proc_table!(mock, "mock.dll" { Alpha, Beta, Gamma });
    proc_table!(absent, "absent.dll" { Delta });

    #[test]
    fn test_resolves_once_and_caches() {
        let loader = MockLoader::default();
        assert!(!cached::Alpha.is_resolved());

        assert_eq!(cached::Alpha.get_with(&loader).unwrap().get(), 0x1010);
        assert_eq!(cached::Alpha.get_with(&loader).unwrap().get(), 0x1010);
        assert!(cached::Alpha.is_resolved());
        assert!(cached::DLL.is_loaded());
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(loader.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failures_are_cached() {
        static DLL: Dll = Dll::new("mock.dll");
        static MISSING: LazyProc = LazyProc::new(&DLL, "Missing\0");

        let loader = MockLoader::default();
        assert_eq!(MISSING.get_with(&loader), Err(co::ERROR::PROC_NOT_FOUND));
        assert_eq!(MISSING.get_with(&loader), Err(co::ERROR::PROC_NOT_FOUND));
        assert!(!MISSING.is_resolved());
        assert_eq!(loader.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_library_maps_to_mod_not_found() {
        let loader = MockLoader::default();
        assert_eq!(absent::Delta.get_with(&loader), Err(co::ERROR::MOD_NOT_FOUND));
        assert!(!absent::DLL.is_loaded());
        assert_eq!(loader.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_table_preload_reports_missing() {
        let loader = MockLoader::default();
        assert_eq!(mock::TABLE.name(), "mock.dll");
        assert_eq!(mock::TABLE.procs.len(), 3);
        assert_eq!(mock::TABLE.preload_with(&loader), vec!["Gamma"]);
        assert!(mock::Beta.is_resolved());
        assert_eq!(mock::Gamma.name(), "Gamma");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_system_loader_unavailable_off_windows() {
        let loader = SystemLoader::default();
        assert_eq!(loader.flags, co::LOAD_LIBRARY::SEARCH_SYSTEM32);
        assert_eq!(loader.load("user32.dll"), Err(co::ERROR::CALL_NOT_IMPLEMENTED));
    }
}
