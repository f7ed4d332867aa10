use crate::error::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "PAWMATCH_HOME";

/// Data directory name under the user's home.
pub const DATA_DIR_NAME: &str = ".pawmatch";

/// Well-known store keys (namespaced by the store itself).
pub mod keys {
    pub const SWIPES: &str = "swipes";
    pub const MATCHES: &str = "matches";
    pub const DOG_FILTERS: &str = "dog_filters";
    pub const MATCH_PREFERENCES: &str = "match_preferences";
    pub const AUTH_STATE: &str = "auth_state";
    pub const USERS: &str = "users";
    pub const USER_DOG_PROFILE: &str = "user_dog_profile";
}

/// Resolve the data directory without creating it.
///
/// `override_dir` wins, then `PAWMATCH_HOME`, then `~/.pawmatch`.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> StoreResult<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or(StoreError::NoHomeDirectory)
}

/// Make sure the data directory exists.
pub fn ensure_data_dir(dir: &Path) -> StoreResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|err| StoreError::io("create directory", dir, err))?;
    }
    Ok(())
}
