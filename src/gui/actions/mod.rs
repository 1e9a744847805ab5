// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,submit}.

mod copy;    // src/gui/actions/copy.rs
mod submit;  // src/gui/actions/submit.rs

pub use copy::copy;
pub use submit::submit;
