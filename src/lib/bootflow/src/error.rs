use core::fmt;

use bootstate::InvalidTransition;
use global_data::EnvError;
use util::cb_err::CbErr;

/// Reason a single boot procedure returned instead of handing off
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcedureError {
    /// No boot device was resolved and the procedure needs one
    NoBootDevice,
    /// The procedure found no image it understands
    ImageNotFound,
    /// An image was found but failed verification
    InvalidImage,
    /// The image could not be loaded or started
    LoadFailed,
    /// The procedure is not available on this platform
    Unimplemented,
}

impl fmt::Display for ProcedureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBootDevice => write!(f, "no boot device"),
            Self::ImageNotFound => write!(f, "no bootable image found"),
            Self::InvalidImage => write!(f, "image failed verification"),
            Self::LoadFailed => write!(f, "image load failed"),
            Self::Unimplemented => write!(f, "not implemented"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootError {
    /// No candidate storage device was accepted
    DeviceNotResolved,
    /// Every boot procedure returned without handing off
    AllProceduresExhausted { attempted: usize },
    Env(EnvError),
    State(InvalidTransition),
}

impl BootError {
    pub fn code(&self) -> CbErr {
        match self {
            Self::DeviceNotResolved => CbErr::BootDevNotResolved,
            Self::AllProceduresExhausted { .. } => CbErr::BootMethodsExhausted,
            Self::Env(EnvError::AlreadySet) => CbErr::EnvAlreadySet,
            Self::State(_) => CbErr::BootFlowState,
        }
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotResolved => write!(f, "no boot device resolved"),
            Self::AllProceduresExhausted { attempted } => {
                write!(f, "unable to boot: {attempted} boot procedures failed")
            }
            Self::Env(e) => write!(f, "boot environment: {e}"),
            Self::State(e) => write!(f, "{e}"),
        }
    }
}

impl From<EnvError> for BootError {
    fn from(e: EnvError) -> Self {
        Self::Env(e)
    }
}

impl From<InvalidTransition> for BootError {
    fn from(e: InvalidTransition) -> Self {
        Self::State(e)
    }
}

impl From<BootError> for CbErr {
    fn from(e: BootError) -> Self {
        e.code()
    }
}
