use bootflow::{BootProcedure, CandidateDevice};
use device::InterfaceKind;

use crate::BootCommand;

/// Boot device detection order. The first candidate that comes online (and
/// holds a valid boot image, where required) becomes the boot medium.
pub const RKIMG_DET_BOOTDEV: [CandidateDevice; 3] = [
    // SD card, for recovery and flashing
    CandidateDevice::validated(InterfaceKind::SdCard, 1),
    CandidateDevice::present(InterfaceKind::Emmc, 0),
    CandidateDevice::present(InterfaceKind::SpiNor, 1),
];

pub const RKIMG_BOOTCOMMAND: [BootProcedure<BootCommand>; 3] = [
    BootProcedure::new(BootCommand::BootFit, BootCommand::BootFit.name()),
    BootProcedure::new(BootCommand::BootRkp, BootCommand::BootRkp.name()),
    BootProcedure::terminal(
        BootCommand::DistroBootcmd,
        BootCommand::DistroBootcmd.name(),
    ),
];

pub const CONFIG_BOOTCOMMAND: &[BootProcedure<BootCommand>] = &RKIMG_BOOTCOMMAND;
