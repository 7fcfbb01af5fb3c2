#![no_std]

pub mod cb_err;
