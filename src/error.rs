use crate::HRESULT;
use std::fmt::Display;

/// `E_POINTER`, returned when a required pointer is null
pub(crate) const E_POINTER: HRESULT = HRESULT(0x80004003);

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// Window is not found, or it has no virtual desktop
    WindowNotFound,

    /// Class is not registered, this is raised for example when the shell
    /// does not provide the virtual desktop manager.
    ComClassNotRegistered,

    /// COM apartment is not initialized on this thread, create a
    /// `ComApartment` before activating the manager.
    ComNotInitialized,

    /// COM was already initialized on this thread with a different apartment
    /// model.
    ComChangedMode,

    /// When RPC server is not available, this is an indication that explorer
    /// needs to be restarted
    ComRpcUnavailable,

    /// Some COM result error
    ComError(HRESULT),

    /// A required pointer was null
    NullPtr,
}

impl Error {
    /// Status code this error was created from
    pub fn hresult(&self) -> HRESULT {
        match self {
            Error::WindowNotFound => HRESULT(0x8002802B),
            Error::ComClassNotRegistered => HRESULT(0x80040154),
            Error::ComNotInitialized => HRESULT(0x800401F0),
            Error::ComChangedMode => HRESULT(0x80010106),
            Error::ComRpcUnavailable => HRESULT(0x800706BA),
            Error::ComError(hr) => *hr,
            Error::NullPtr => E_POINTER,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::WindowNotFound => write!(f, "window not found"),
            Error::ComClassNotRegistered => write!(f, "virtual desktop manager class not registered"),
            Error::ComNotInitialized => write!(f, "COM is not initialized on this thread"),
            Error::ComChangedMode => write!(f, "COM is initialized with another apartment model"),
            Error::ComRpcUnavailable => write!(f, "RPC server unavailable"),
            Error::ComError(hr) => write!(f, "COM call failed with {}", hr),
            Error::NullPtr => write!(f, "null pointer"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HRESULT> for Error {
    fn from(hr: HRESULT) -> Self {
        match hr {
            HRESULT(0x8002802B) => Error::WindowNotFound,
            HRESULT(0x80040154) => Error::ComClassNotRegistered,
            HRESULT(0x800401F0) => Error::ComNotInitialized,
            HRESULT(0x80010106) => Error::ComChangedMode,
            HRESULT(0x800706BA) => Error::ComRpcUnavailable,
            HRESULT(0x80004003) => Error::NullPtr,
            _ => Error::ComError(hr),
        }
    }
}

impl From<windows::core::Error> for Error {
    fn from(er: windows::core::Error) -> Self {
        HRESULT::from(er.code()).into()
    }
}

impl From<HRESULT> for Result<(), Error> {
    fn from(item: HRESULT) -> Self {
        if !item.failed() {
            Ok(())
        } else {
            Err(item.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Error::from(HRESULT(0x80040154)), Error::ComClassNotRegistered);
        assert_eq!(Error::from(HRESULT(0x800401F0)), Error::ComNotInitialized);
        assert_eq!(Error::from(HRESULT(0x800706BA)), Error::ComRpcUnavailable);
        assert_eq!(Error::from(HRESULT(0x8002802B)), Error::WindowNotFound);
        assert_eq!(Error::from(HRESULT(0x80010106)), Error::ComChangedMode);
        assert_eq!(Error::from(HRESULT(0x80004003)), Error::NullPtr);
    }

    #[test]
    fn test_unknown_code_is_kept() {
        assert_eq!(
            Error::from(HRESULT(0x80004005)),
            Error::ComError(HRESULT(0x80004005))
        );
    }

    #[test]
    fn test_hresult_restores_status() {
        for code in [
            0x80040154, 0x800401F0, 0x800706BA, 0x8002802B, 0x80010106, 0x80004003, 0x80004005,
            0x80070057,
        ] {
            assert_eq!(Error::from(HRESULT(code)).hresult(), HRESULT(code));
        }
    }

    #[test]
    fn test_status_to_result() {
        assert_eq!(Result::<(), Error>::from(HRESULT(0)), Ok(()));
        assert_eq!(Result::<(), Error>::from(HRESULT(1)), Ok(()));
        assert_eq!(
            Result::<(), Error>::from(HRESULT(0x80004005)),
            Err(Error::ComError(HRESULT(0x80004005)))
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_from_windows_error() {
        let er = windows::core::Error::from(windows::core::HRESULT(0x800706BAu32 as i32));
        assert_eq!(Error::from(er), Error::ComRpcUnavailable);
    }
}
