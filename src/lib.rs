//! Library interface for keyshow modules

pub mod config;
pub mod display;
pub mod gui;
pub mod history;
pub mod input;
pub mod keys;
pub mod tracker;
pub mod utils;
