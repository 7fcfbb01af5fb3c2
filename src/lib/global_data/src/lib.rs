#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod env;

pub use env::{BootEnv, EnvError, EnvValue, ResolvedBootTarget, ENV_DEVNUM, ENV_DEVTYPE};
