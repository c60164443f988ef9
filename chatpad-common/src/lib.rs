#![no_std]
pub mod keycodes;
