// src/core/mod.rs

pub mod collate;
pub mod debounce;
pub mod error;
pub mod net;

pub use collate::Locale;
pub use debounce::Debouncer;
pub use error::FetchError;
