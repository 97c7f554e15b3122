//! Core logic for materializing the Android debug keystore from the environment.
//! Kept free of CLI concerns so the binary stays a thin wrapper.

pub mod env;
pub mod error;
pub mod materialize;
pub mod target;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{IoAction, MaterializeError};
pub use materialize::{decode_keystore, materialize, write_keystore, Materialized};
pub use target::KeystoreTarget;

/// Environment variable holding the base64-encoded keystore.
pub const KEYSTORE_ENV: &str = "DEBUG_KEYSTORE";
/// Environment variable holding the invoking user's home directory.
pub const HOME_ENV: &str = "HOME";
