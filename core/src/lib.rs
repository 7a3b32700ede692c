#![no_std]

pub mod activities;
pub mod application;
pub mod assets;
pub mod catalog;
pub mod display;
pub mod framebuffer;
pub mod input;
pub mod selection;

extern crate alloc;
