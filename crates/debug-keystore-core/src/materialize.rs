use std::{ffi::OsStr, fs, path::PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, info, instrument};

use crate::{
    env::EnvSource,
    error::{IoAction, MaterializeError},
    target::KeystoreTarget,
    KEYSTORE_ENV,
};

/// Outcome of a successful run. Carries no key bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub path: PathBuf,
    pub bytes_written: usize,
    /// Whether the `.android` directory had to be created.
    pub created_dir: bool,
}

/// Read DEBUG_KEYSTORE, decode it, and write it under HOME.
///
/// Steps run strictly in order; the filesystem is not touched until the
/// value has decoded and HOME has resolved.
pub fn materialize<E: EnvSource>(env: &E) -> Result<Materialized, MaterializeError> {
    let raw = env
        .var_os(KEYSTORE_ENV)
        .ok_or(MaterializeError::MissingInput { name: KEYSTORE_ENV })?;
    let bytes = decode_keystore(&raw)?;
    let target = KeystoreTarget::from_env(env)?;
    write_keystore(&target, &bytes)
}

/// Decode a standard, padded base64 value. ASCII whitespace is ignored so
/// line-wrapped encoder output decodes the same as a single line.
pub fn decode_keystore(value: &OsStr) -> Result<Vec<u8>, MaterializeError> {
    let text = value.to_str().ok_or_else(|| MaterializeError::Decode {
        name: KEYSTORE_ENV,
        reason: "value is not valid UTF-8".to_string(),
    })?;
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(&compact)
        .map_err(|e| MaterializeError::Decode {
            name: KEYSTORE_ENV,
            reason: e.to_string(),
        })?;
    debug!(len = bytes.len(), "decoded keystore");
    Ok(bytes)
}

/// Ensure the target directory exists, then write `bytes`, truncating any
/// previous file. Not atomic: a failed write may leave a partial file.
#[instrument(skip_all, fields(path = %target.file().display()))]
pub fn write_keystore(
    target: &KeystoreTarget,
    bytes: &[u8],
) -> Result<Materialized, MaterializeError> {
    let dir = target.dir();
    let created_dir = !dir.is_dir();
    fs::create_dir_all(&dir).map_err(|e| MaterializeError::io(IoAction::CreateDir, &dir, e))?;
    if created_dir {
        debug!(dir = %dir.display(), "created keystore directory");
    }

    let path = target.file();
    fs::write(&path, bytes).map_err(|e| MaterializeError::io(IoAction::WriteFile, &path, e))?;
    info!(bytes = bytes.len(), "wrote debug keystore");

    Ok(Materialized {
        path,
        bytes_written: bytes.len(),
        created_dir,
    })
}
