//! Typed Win32 constants, lazily bound system procedures and the small ABI
//! helpers that go with them.
//!
//! Nothing is linked against an import library: every system call goes
//! through a [`dll::LazyProc`] resolved on first use, so the crate builds and
//! degrades gracefully (`ERROR_CALL_NOT_IMPLEMENTED`) off Windows.

pub mod bits;
pub mod cli;
pub mod co;
pub mod com;
pub mod config;
pub mod dll;
pub mod error;
pub mod funcs;
pub mod logger;
pub mod registry;
pub mod time;
pub mod types;
pub mod utils;

pub use com::{ComPtr, GUID};
pub use config::Config;
pub use dll::{Dll, LazyProc, ModuleLoader, ProcTable, SystemLoader};
pub use error::{Error, HrResult, Result, SysResult};
pub use registry::{Hkey, RegValue};
pub use utils::{from_wide, remove_accel_ampersands, to_wstring};

/// Installs the logger, then does what [`init_loader`] does.
pub fn init(config: &Config) -> Result<()> {
    logger::init(config.log_level_mask)?;
    init_loader(config)
}

/// Installs the system module loader, then resolves the tables listed in
/// `config.preload`. Unknown table names are skipped with a warning.
pub fn init_loader(config: &Config) -> Result<()> {
    dll::install_loader(Box::new(SystemLoader::new(config.load_flags())))?;

    for name in &config.preload {
        match dll::tables::by_name(name) {
            Some(table) => {
                let missing = table.preload();
                if !missing.is_empty() {
                    log::warn!("{}: unresolved {}", table.name(), missing.join(", "));
                }
            }
            None => log::warn!("Unknown procedure table {name:?} in preload list"),
        }
    }
    log::debug!("winbind initialized ({:?})", config);
    Ok(())
}
