//! Process-wide loader installation. Runs in its own process so the loader
//! slot starts empty.

use std::ffi::CStr;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

use winbind::co;
use winbind::dll::{self, Dll, LazyProc, ModuleHandle, ModuleLoader};
use winbind::{Error, SysResult, SystemLoader};

extern "system" fn answer() -> u32 {
    42
}

static LOOKUPS: AtomicUsize = AtomicUsize::new(0);

struct FixedLoader;

impl ModuleLoader for FixedLoader {
    fn load(&self, name: &str) -> SysResult<ModuleHandle> {
        if name == "fixed.dll" { Ok(ModuleHandle(1)) } else { Err(co::ERROR::MOD_NOT_FOUND) }
    }

    fn proc_address(&self, _module: ModuleHandle, name: &CStr) -> SysResult<NonZeroUsize> {
        LOOKUPS.fetch_add(1, Ordering::SeqCst);
        match name.to_bytes() {
            b"Answer" => NonZeroUsize::new(answer as usize).ok_or(co::ERROR::PROC_NOT_FOUND),
            _ => Err(co::ERROR::PROC_NOT_FOUND),
        }
    }
}

static FIXED: Dll = Dll::new("fixed.dll");
static ANSWER: LazyProc = LazyProc::new(&FIXED, "Answer\0");
static MISSING: LazyProc = LazyProc::new(&FIXED, "Missing\0");
static OTHER: Dll = Dll::new("other.dll");
static ELSEWHERE: LazyProc = LazyProc::new(&OTHER, "Answer\0");

#[test]
fn test_installed_loader_backs_every_lookup() {
    dll::install_loader(Box::new(FixedLoader)).unwrap();

    let f = unsafe { ANSWER.as_fn::<unsafe extern "system" fn() -> u32>() }.unwrap();
    assert_eq!(unsafe { f() }, 42);
    assert_eq!(ANSWER.address().unwrap().get(), answer as usize);
    assert!(ANSWER.is_resolved());
    assert!(FIXED.is_loaded());

    assert_eq!(MISSING.address(), Err(co::ERROR::PROC_NOT_FOUND));
    assert_eq!(MISSING.address(), Err(co::ERROR::PROC_NOT_FOUND));
    assert_eq!(ELSEWHERE.address(), Err(co::ERROR::MOD_NOT_FOUND));
    // Answer and Missing once each; failures are cached too.
    assert_eq!(LOOKUPS.load(Ordering::SeqCst), 2);

    assert!(matches!(
        dll::install_loader(Box::new(SystemLoader::default())),
        Err(Error::LoaderAlreadyInstalled)
    ));
    // The first loader stays in charge.
    assert_eq!(ANSWER.address().unwrap().get(), answer as usize);
}
