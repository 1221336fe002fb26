//! Simpil Core
//!
//! Ambient services shared by the simpil crates: logging setup, configuration,
//! identity allocation and hashing state.

pub mod alloc;
pub mod config;
pub mod id;
pub mod logging;

pub use config::Config;
