use bootstate::BootFlow;
use global_data::BootEnv;
use log::{debug, info, warn};

use crate::{BootError, ProcedureError};

/// Proof that a boot procedure started an image.
///
/// On hardware the procedure jumps to the image and never returns, so this
/// only shows up under simulation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handoff {
    entry: usize,
}

impl Handoff {
    pub const fn new(entry: usize) -> Self {
        Self { entry }
    }

    /// Entry address control was passed to
    pub fn entry(&self) -> usize {
        self.entry
    }
}

/// One entry of the boot command list
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BootProcedure<Id> {
    pub id: Id,
    pub name: &'static str,
    /// Stop after this procedure even if later entries remain
    pub terminal: bool,
}

impl<Id> BootProcedure<Id> {
    pub const fn new(id: Id, name: &'static str) -> Self {
        Self {
            id,
            name,
            terminal: false,
        }
    }

    pub const fn terminal(id: Id, name: &'static str) -> Self {
        Self {
            id,
            name,
            terminal: true,
        }
    }
}

/// Runs the platform action behind a [`BootProcedure`].
pub trait ProcedureRunner<Id> {
    /// Try to boot. Returns only if no image was started.
    fn run(
        &mut self,
        procedure: &BootProcedure<Id>,
        env: &BootEnv,
    ) -> Result<Handoff, ProcedureError>;
}

/// The procedure that handed off
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transferred<Id> {
    pub index: usize,
    pub procedure: BootProcedure<Id>,
    pub handoff: Handoff,
}

/// Try each boot procedure in order until one hands off.
///
/// `flow` must still be probing; every procedure is run at most once per
/// boot cycle.
pub fn run_boot_sequence<Id: Copy, R: ProcedureRunner<Id>>(
    procedures: &[BootProcedure<Id>],
    runner: &mut R,
    env: &BootEnv,
    flow: &mut BootFlow,
) -> Result<Transferred<Id>, BootError> {
    flow.begin_attempts()?;
    if env.target().is_none() {
        debug!("bootcmd: running without a boot device");
    }

    let mut attempted = 0;
    for (index, procedure) in procedures.iter().enumerate() {
        if index > 0 {
            flow.next_procedure()?;
        }
        debug!("bootcmd: {}", procedure.name);
        attempted += 1;
        match runner.run(procedure, env) {
            Ok(handoff) => {
                flow.transfer()?;
                info!(
                    "bootcmd: {} started image at {:#x}",
                    procedure.name,
                    handoff.entry()
                );
                return Ok(Transferred {
                    index,
                    procedure: *procedure,
                    handoff,
                });
            }
            Err(e) => warn!("bootcmd: {} failed: {}", procedure.name, e),
        }
        if procedure.terminal {
            break;
        }
    }

    flow.exhaust()?;
    warn!("bootcmd: all {} boot procedures failed", attempted);
    Err(BootError::AllProceduresExhausted { attempted })
}
