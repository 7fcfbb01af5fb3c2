/// Longest value the boot environment renders (`devtype`/`devnum`)
#[cfg(feature = "rk3588")]
pub const ENV_VALUE_MAX: usize = 8;

// Default environment value length
#[cfg(not(feature = "rk3588"))]
pub const ENV_VALUE_MAX: usize = 16;
