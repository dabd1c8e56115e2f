use crate::co;

/// Result of a call whose failure is a Win32 error code.
pub type SysResult<T> = std::result::Result<T, co::ERROR>;

/// Result of a COM call.
pub type HrResult<T> = std::result::Result<T, co::HRESULT>;

/// Every error the crate's higher-level entry points can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Win32 call failed.
    #[error("{0} ({})", .0.raw())]
    Win32(#[from] co::ERROR),

    /// A COM call failed.
    #[error("{0} ({:#010x})", .0.raw())]
    Com(#[from] co::HRESULT),

    #[error("no procedure table for library {0:?}")]
    UnknownDll(String),

    #[error("no constant named {0:?}")]
    UnknownConstant(String),

    #[error("no constant type named {0:?}")]
    UnknownType(String),

    #[error("malformed GUID {0:?}")]
    InvalidGuid(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("a module loader is already installed")]
    LoaderAlreadyInstalled,

    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_messages() {
        let err: Error = co::ERROR::ACCESS_DENIED.into();
        assert_eq!(err.to_string(), "ERROR_ACCESS_DENIED (5)");

        let err: Error = co::HRESULT::E_NOINTERFACE.into();
        assert_eq!(err.to_string(), "E_NOINTERFACE (0x80004002)");
    }

    #[test]
    fn test_question_mark_lifts_status_codes() {
        fn fails() -> Result<()> {
            co::ERROR::BUSY.ok()?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Win32(co::ERROR::BUSY))));
    }
}
