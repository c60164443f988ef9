#![no_std]
pub mod config;
pub mod controller;
pub mod dual_role;
pub mod keymap;
pub mod layout;
pub mod led;
pub mod protocol;
pub mod state;

#[macro_use]
mod macros;
