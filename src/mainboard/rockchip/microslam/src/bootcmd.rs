use bootflow::{BootProcedure, Handoff, ProcedureError, ProcedureRunner};
use global_data::BootEnv;

/// Boot commands available on this board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootCommand {
    /// Boot a FIT image
    BootFit,
    /// Boot a Rockchip packed image
    BootRkp,
    /// Generic distro boot scripts
    DistroBootcmd,
}

impl BootCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BootFit => "boot_fit",
            Self::BootRkp => "bootrkp",
            Self::DistroBootcmd => "distro_bootcmd",
        }
    }
}

/// Image boot methods provided by the platform.
///
/// Each method either starts an image and does not return, or returns the
/// reason it could not.
pub trait ImageBoot {
    fn boot_fit(&mut self, env: &BootEnv) -> Result<Handoff, ProcedureError>;

    fn bootrkp(&mut self, env: &BootEnv) -> Result<Handoff, ProcedureError>;

    fn distro_bootcmd(&mut self, env: &BootEnv) -> Result<Handoff, ProcedureError>;
}

pub(crate) struct Commands<'a, B>(pub(crate) &'a mut B);

impl<B: ImageBoot> ProcedureRunner<BootCommand> for Commands<'_, B> {
    fn run(
        &mut self,
        procedure: &BootProcedure<BootCommand>,
        env: &BootEnv,
    ) -> Result<Handoff, ProcedureError> {
        match procedure.id {
            BootCommand::BootFit => self.0.boot_fit(env),
            BootCommand::BootRkp => self.0.bootrkp(env),
            BootCommand::DistroBootcmd => self.0.distro_bootcmd(env),
        }
    }
}
