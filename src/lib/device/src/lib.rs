#![cfg_attr(not(test), no_std)]

mod error;
mod interface;

pub use self::{
    error::{Error, ErrorKind, ErrorType},
    interface::{Bus, InterfaceKind, StorageInterface},
};
