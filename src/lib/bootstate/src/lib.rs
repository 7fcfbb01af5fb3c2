/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

use core::fmt;

/// The boot state machine tracks one boot cycle from storage probing to the
/// point where control leaves the bootloader. The flow is strictly forward;
/// the only way back to the start is a fresh cycle (reset or power-on).
///
/// Below is the flow from top to bottom:
///
/// ```text
///          start
///            |
///         PROBING  (boot device resolution)
///            |
///      ATTEMPTING(0) ------------+
///            |                   |
///      ATTEMPTING(1) ------------+
///            |                   |
///           ...                  |
///            |                   V
///        EXHAUSTED         TRANSFERRED(i)
///                                |
///                           image running
/// ```
///
/// Brief description of states:
///   PROBING - candidate storage interfaces are being probed
///   ATTEMPTING(i) - boot procedure `i` is being tried
///   TRANSFERRED(i) - boot procedure `i` handed control to an image
///   EXHAUSTED - every boot procedure returned without handing off
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootState {
    Probing,
    Attempting(usize),
    Transferred(usize),
    Exhausted,
}

impl BootState {
    /// No further transition is possible within this boot cycle.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Transferred(_) | Self::Exhausted)
    }

    /// Index of the boot procedure the state refers to, if any.
    pub const fn procedure(&self) -> Option<usize> {
        match self {
            Self::Attempting(i) | Self::Transferred(i) => Some(*i),
            Self::Probing | Self::Exhausted => None,
        }
    }
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probing => write!(f, "probing"),
            Self::Attempting(i) => write!(f, "attempting({i})"),
            Self::Transferred(i) => write!(f, "transferred({i})"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// A transition that the boot state machine does not allow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidTransition {
    pub from: BootState,
    pub to: BootState,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid boot state transition {} -> {}",
            self.from, self.to
        )
    }
}

/// Owner of the current [`BootState`] for one boot cycle.
#[derive(Debug)]
pub struct BootFlow {
    state: BootState,
}

impl BootFlow {
    pub const fn new() -> Self {
        Self {
            state: BootState::Probing,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    /// PROBING -> ATTEMPTING(0)
    pub fn begin_attempts(&mut self) -> Result<BootState, InvalidTransition> {
        let to = BootState::Attempting(0);
        match self.state {
            BootState::Probing => self.enter(to),
            from => Err(InvalidTransition { from, to }),
        }
    }

    /// ATTEMPTING(i) -> ATTEMPTING(i + 1)
    pub fn next_procedure(&mut self) -> Result<BootState, InvalidTransition> {
        match self.state {
            BootState::Attempting(i) => self.enter(BootState::Attempting(i + 1)),
            from => Err(InvalidTransition {
                from,
                to: BootState::Attempting(from.procedure().map_or(0, |i| i + 1)),
            }),
        }
    }

    /// ATTEMPTING(i) -> TRANSFERRED(i)
    pub fn transfer(&mut self) -> Result<BootState, InvalidTransition> {
        match self.state {
            BootState::Attempting(i) => self.enter(BootState::Transferred(i)),
            from => Err(InvalidTransition {
                from,
                to: BootState::Transferred(from.procedure().unwrap_or(0)),
            }),
        }
    }

    /// ATTEMPTING(_) -> EXHAUSTED
    pub fn exhaust(&mut self) -> Result<BootState, InvalidTransition> {
        let to = BootState::Exhausted;
        match self.state {
            BootState::Attempting(_) => self.enter(to),
            from => Err(InvalidTransition { from, to }),
        }
    }

    fn enter(&mut self, to: BootState) -> Result<BootState, InvalidTransition> {
        self.state = to;
        Ok(to)
    }
}

impl Default for BootFlow {
    fn default() -> Self {
        Self::new()
    }
}
