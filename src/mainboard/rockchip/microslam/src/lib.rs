#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

mod bootcmd;
pub mod configs;

use bootflow::{resolve_boot_device, run_boot_sequence, BootError, Transferred};
use bootstate::BootFlow;
use device::StorageInterface;
use global_data::{BootEnv, ResolvedBootTarget};
use log::{error, warn};
use util::cb_err::CbErr;

pub use bootcmd::{BootCommand, ImageBoot};

/// Probe the board's boot devices and record the boot medium in `env`.
pub fn rkimg_bootdev<S: StorageInterface>(
    storage: &mut S,
    env: &mut BootEnv,
) -> Result<ResolvedBootTarget, BootError> {
    resolve_boot_device(&configs::RKIMG_DET_BOOTDEV, storage, env)
}

/// Run the board's boot commands in order.
pub fn rkimg_bootcommand<B: ImageBoot>(
    images: &mut B,
    env: &BootEnv,
    flow: &mut BootFlow,
) -> Result<Transferred<BootCommand>, BootError> {
    run_boot_sequence(
        configs::CONFIG_BOOTCOMMAND,
        &mut bootcmd::Commands(images),
        env,
        flow,
    )
}

/// One full boot cycle: boot device detection, then the boot commands.
///
/// A missing boot device is not fatal here. The boot commands still run and
/// each one decides what to do without `devtype`/`devnum`.
pub fn boot<S: StorageInterface, B: ImageBoot>(
    storage: &mut S,
    images: &mut B,
) -> Result<Transferred<BootCommand>, BootError> {
    let mut env = BootEnv::new();
    let mut flow = BootFlow::new();

    match rkimg_bootdev(storage, &mut env) {
        Ok(_) => {}
        Err(BootError::DeviceNotResolved) => {
            warn!("no boot device resolved, running boot commands without one");
        }
        Err(e) => return Err(e),
    }

    rkimg_bootcommand(images, &env, &mut flow)
}

/// Board entry point, returns the boot status code.
pub fn main<S: StorageInterface, B: ImageBoot>(storage: &mut S, images: &mut B) -> CbErr {
    match boot(storage, images) {
        Ok(_) => CbErr::Success,
        Err(e) => {
            error!("{}", e);
            e.into()
        }
    }
}
