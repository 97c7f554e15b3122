use std::path::{Path, PathBuf};

use crate::{env::EnvSource, error::MaterializeError, HOME_ENV};

/// Directory under HOME holding Android tooling state.
pub const ANDROID_DIR: &str = ".android";
/// File name the Android Gradle plugin looks for when signing debug builds.
pub const KEYSTORE_FILE: &str = "debug.keystore";

/// Location of the debug keystore, rooted at a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreTarget {
    home: PathBuf,
}

impl KeystoreTarget {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolve the target from HOME, which must be set and non-empty.
    pub fn from_env<E: EnvSource>(env: &E) -> Result<Self, MaterializeError> {
        match env.var_os(HOME_ENV) {
            Some(home) if !home.is_empty() => Ok(Self::new(home)),
            _ => Err(MaterializeError::MissingInput { name: HOME_ENV }),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `<home>/.android`
    pub fn dir(&self) -> PathBuf {
        self.home.join(ANDROID_DIR)
    }

    /// `<home>/.android/debug.keystore`
    pub fn file(&self) -> PathBuf {
        self.dir().join(KEYSTORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn joins_fixed_relative_path_onto_home() {
        let target = KeystoreTarget::new("/tmp/h");
        assert_eq!(target.dir(), PathBuf::from("/tmp/h/.android"));
        assert_eq!(target.file(), PathBuf::from("/tmp/h/.android/debug.keystore"));
    }

    #[test]
    fn from_env_reads_home() {
        let env = MapEnv::new().with("HOME", "/home/ci");
        let target = KeystoreTarget::from_env(&env).expect("home set");
        assert_eq!(target.home(), Path::new("/home/ci"));
    }

    #[test]
    fn unset_or_empty_home_is_missing_input() {
        let err = KeystoreTarget::from_env(&MapEnv::new()).expect_err("unset");
        assert!(matches!(err, MaterializeError::MissingInput { name: "HOME" }));

        let env = MapEnv::new().with("HOME", "");
        let err = KeystoreTarget::from_env(&env).expect_err("empty");
        assert!(matches!(err, MaterializeError::MissingInput { name: "HOME" }));
    }
}
