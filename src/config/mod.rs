// src/config/mod.rs
pub mod args;
pub mod consts;
pub mod options;
pub mod state;
