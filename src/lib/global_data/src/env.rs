use core::fmt::{self, Write};

use device::InterfaceKind;
use heapless::String;
use spin::Once;

use crate::config::ENV_VALUE_MAX;

/// Environment name of the selected boot device class
pub const ENV_DEVTYPE: &str = "devtype";
/// Environment name of the selected boot device instance
pub const ENV_DEVNUM: &str = "devnum";

/// Rendered environment value
pub type EnvValue = String<ENV_VALUE_MAX>;

/// The storage device chosen as boot medium for this boot cycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedBootTarget {
    kind: InterfaceKind,
    index: u8,
}

impl ResolvedBootTarget {
    pub const fn new(kind: InterfaceKind, index: u8) -> Self {
        Self { kind, index }
    }

    pub fn kind(&self) -> InterfaceKind {
        self.kind
    }

    pub fn devtype(&self) -> &'static str {
        self.kind.devtype()
    }

    pub fn devnum(&self) -> u8 {
        self.index
    }
}

impl fmt::Display for ResolvedBootTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.devtype(), self.index, self.kind)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnvError {
    /// The boot target was already written this boot cycle
    AlreadySet,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySet => write!(f, "boot target already set"),
        }
    }
}

/// Boot environment shared by the boot device resolver and the boot methods.
///
/// The target slot is written at most once per boot cycle. Writers need
/// `&mut BootEnv`, readers only `&BootEnv`, so nothing can write it while a
/// boot method is looking at it. A new cycle starts with a new `BootEnv`.
pub struct BootEnv {
    target: Once<ResolvedBootTarget>,
}

impl BootEnv {
    pub const fn new() -> Self {
        Self { target: Once::new() }
    }

    /// Record the boot target. Fails if one was already recorded.
    pub fn set_target(
        &mut self,
        target: ResolvedBootTarget,
    ) -> Result<&ResolvedBootTarget, EnvError> {
        if self.target.is_completed() {
            return Err(EnvError::AlreadySet);
        }
        Ok(self.target.call_once(|| target))
    }

    pub fn target(&self) -> Option<&ResolvedBootTarget> {
        self.target.get()
    }

    /// Look up a named environment value.
    ///
    /// Only `devtype` and `devnum` live here. Both are `None` until a boot
    /// target has been recorded.
    pub fn get(&self, name: &str) -> Option<EnvValue> {
        let target = self.target()?;
        let mut value = EnvValue::new();
        match name {
            ENV_DEVTYPE => value.push_str(target.devtype()).ok()?,
            ENV_DEVNUM => write!(value, "{}", target.devnum()).ok()?,
            _ => return None,
        }
        Some(value)
    }
}

impl Default for BootEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BootEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootEnv")
            .field("target", &self.target())
            .finish()
    }
}
