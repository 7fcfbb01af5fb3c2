use device::{Error as _, InterfaceKind, StorageInterface};
use global_data::{BootEnv, ResolvedBootTarget};
use log::{debug, info, warn};

use crate::BootError;

/// One storage interface to probe for a boot medium
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CandidateDevice {
    pub kind: InterfaceKind,
    pub index: u8,
    /// Content must pass the boot image check, presence is not enough
    pub validate: bool,
}

impl CandidateDevice {
    /// Accepted only if it comes online and holds a valid boot image
    pub const fn validated(kind: InterfaceKind, index: u8) -> Self {
        Self {
            kind,
            index,
            validate: true,
        }
    }

    /// Accepted as soon as it comes online
    pub const fn present(kind: InterfaceKind, index: u8) -> Self {
        Self {
            kind,
            index,
            validate: false,
        }
    }

    fn accept<S: StorageInterface>(&self, storage: &mut S) -> bool {
        if let Err(e) = storage.select(self.kind, self.index) {
            debug!(
                "bootdev: {} {} offline: {:?}",
                self.kind.bus().name(),
                self.index,
                e.kind()
            );
            return false;
        }
        if self.validate && !storage.check_image(self.kind, self.index) {
            debug!(
                "bootdev: {} {} has no valid boot image",
                self.kind.bus().name(),
                self.index
            );
            return false;
        }
        true
    }
}

/// Select the boot medium.
///
/// Probes `candidates` in order and records the first accepted one in `env`.
/// Later candidates are not touched once one is accepted.
pub fn resolve_boot_device<S: StorageInterface>(
    candidates: &[CandidateDevice],
    storage: &mut S,
    env: &mut BootEnv,
) -> Result<ResolvedBootTarget, BootError> {
    if let Some(target) = env.target() {
        warn!("bootdev: boot device already resolved to {}", target);
        return Err(global_data::EnvError::AlreadySet.into());
    }

    let Some(candidate) = candidates.iter().find(|c| c.accept(storage)) else {
        warn!("bootdev: no boot device found");
        return Err(BootError::DeviceNotResolved);
    };

    let target = ResolvedBootTarget::new(candidate.kind, candidate.index);
    let target = *env.set_target(target)?;
    if target.kind().is_removable() {
        info!("Boot from SDcard");
    }
    info!(
        "bootdev: devtype={} devnum={}",
        target.devtype(),
        target.devnum()
    );
    Ok(target)
}
