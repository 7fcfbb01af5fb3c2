use core::fmt::Debug;

pub trait Error: Debug {
    fn kind(&self) -> ErrorKind;
}

/// Storage interface error kind that can be used across board implementations
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No device answered on the requested interface instance
    NoDevice,
    /// The controller is present but the device did not come up
    NotReady,
    /// Transfer to or from the device failed
    Io,
    /// The function is unimplemented
    Unimplemented,
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoDevice => write!(f, "No device present"),
            Self::NotReady => write!(f, "Device not ready"),
            Self::Io => write!(f, "Device I/O error"),
            Self::Unimplemented => write!(f, "The function is unimplemented"),
        }
    }
}

pub trait ErrorType {
    /// Error type
    type Error: Error;
}
