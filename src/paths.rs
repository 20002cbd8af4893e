//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Path to the panel's debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("voicelab.log")
}

#[must_use]
#[cfg(windows)]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(home) = var_os("USERPROFILE") {
        return Some(PathBuf::from(home));
    }

    let drive = var_os("HOMEDRIVE");
    let path = var_os("HOMEPATH");
    if let (Some(drive), Some(path)) = (drive, path) {
        let mut combined = PathBuf::from(drive);
        combined.push(path);
        return Some(combined);
    }

    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

/// Locate the user's home directory without pulling in external crates.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    home_dir_from(&mut var_os)
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA")
        .map(PathBuf::from)
        .or_else(|| home_dir_from(var_os))
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| home_dir_from(var_os).map(|home| home.join(".config")))
}

/// Locate the user's configuration directory (XDG on Unix, `APPDATA` on Windows).
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, OsString> {
        pairs
            .iter()
            .map(|&(key, value)| (key, OsString::from(value)))
            .collect()
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_path();
        assert!(path.ends_with("voicelab.log"));
        assert!(path.starts_with(std::env::temp_dir()));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_home_dir_from_home_var() {
        let env = env_from(&[("HOME", "/home/lab")]);
        let mut var_os = |key: &'static str| env.get(key).cloned();
        assert_eq!(home_dir_from(&mut var_os), Some(PathBuf::from("/home/lab")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_home_dir_missing() {
        let env = env_from(&[]);
        let mut var_os = |key: &'static str| env.get(key).cloned();
        assert_eq!(home_dir_from(&mut var_os), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_dir_prefers_xdg() {
        let env = env_from(&[("XDG_CONFIG_HOME", "/custom/config"), ("HOME", "/home/lab")]);
        let mut var_os = |key: &'static str| env.get(key).cloned();
        assert_eq!(
            config_dir_from(&mut var_os),
            Some(PathBuf::from("/custom/config"))
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_dir_falls_back_to_dot_config() {
        let env = env_from(&[("HOME", "/home/lab")]);
        let mut var_os = |key: &'static str| env.get(key).cloned();
        assert_eq!(
            config_dir_from(&mut var_os),
            Some(PathBuf::from("/home/lab/.config"))
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_config_dir_uses_appdata() {
        let env = env_from(&[("APPDATA", "C:\\Users\\lab\\AppData\\Roaming")]);
        let mut var_os = |key: &'static str| env.get(key).cloned();
        assert_eq!(
            config_dir_from(&mut var_os),
            Some(PathBuf::from("C:\\Users\\lab\\AppData\\Roaming"))
        );
    }
}
