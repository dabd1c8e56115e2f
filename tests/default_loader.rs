//! Installing a loader after the default one has been used.

use winbind::dll::{self, tables};
use winbind::{Error, SystemLoader, co};

#[test]
fn test_install_after_default_loader_fails() {
    // First use installs the default system loader.
    let res = tables::user32::GetSystemMetrics.address();
    if cfg!(not(windows)) {
        assert_eq!(res, Err(co::ERROR::CALL_NOT_IMPLEMENTED));
    }

    assert!(matches!(
        dll::install_loader(Box::new(SystemLoader::default())),
        Err(Error::LoaderAlreadyInstalled)
    ));
}
