use core::fmt;

use crate::ErrorType;

/// Controller family used to bring an interface online
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bus {
    /// SD/MMC host controllers (`mmc dev N`)
    Mmc,
    /// Rockchip serial flash controller (`rksfc dev N`)
    Sfc,
}

impl Bus {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mmc => "mmc",
            Self::Sfc => "rksfc",
        }
    }
}

/// Kind of storage interface that can hold a boot medium
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InterfaceKind {
    /// Removable SD card on an MMC host
    SdCard,
    /// Soldered eMMC on an MMC host
    Emmc,
    /// SPI NOR flash behind the serial flash controller
    SpiNor,
}

impl InterfaceKind {
    /// Value published as `devtype` in the boot environment.
    ///
    /// SD and eMMC share the MMC block layer, so both render as `mmc` and
    /// are told apart by `devnum`.
    pub const fn devtype(&self) -> &'static str {
        match self {
            Self::SdCard | Self::Emmc => "mmc",
            Self::SpiNor => "spinor",
        }
    }

    pub const fn bus(&self) -> Bus {
        match self {
            Self::SdCard | Self::Emmc => Bus::Mmc,
            Self::SpiNor => Bus::Sfc,
        }
    }

    pub const fn is_removable(&self) -> bool {
        matches!(self, Self::SdCard)
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SdCard => write!(f, "SD card"),
            Self::Emmc => write!(f, "eMMC"),
            Self::SpiNor => write!(f, "SPI NOR"),
        }
    }
}

/// Storage driver operations needed to pick a boot medium.
///
/// Both calls block until the driver has a definite answer.
pub trait StorageInterface: ErrorType {
    /// Bring interface `index` of `kind` online and make it the current
    /// device of its bus.
    fn select(&mut self, kind: InterfaceKind, index: u8) -> Result<(), Self::Error>;

    /// Check that the selected interface holds a recognizable, non-corrupt
    /// Rockchip boot image.
    fn check_image(&mut self, kind: InterfaceKind, index: u8) -> bool;
}
