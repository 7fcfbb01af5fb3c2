/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

//! Boot medium selection and boot method sequencing.
//!
//! A boot cycle runs [`resolve_boot_device`] once, which records the first
//! acceptable storage device in the [`BootEnv`](global_data::BootEnv), then
//! [`run_boot_sequence`], which tries each boot procedure in order until one
//! hands control to an image.

pub mod error;
pub mod resolver;
pub mod sequencer;

pub use self::{
    error::{BootError, ProcedureError},
    resolver::{resolve_boot_device, CandidateDevice},
    sequencer::{run_boot_sequence, BootProcedure, Handoff, ProcedureRunner, Transferred},
};
