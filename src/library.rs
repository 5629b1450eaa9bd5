//! Library Module for the libclang bridge
//!
//! Locates and loads libclang at run time, configures logging, and checks the
//! loaded release against the LLVM version the mirror tables were built for.
//!
//! `clang-sys` keeps the loaded library in thread-local storage, so every
//! thread that calls into libclang must go through [`ensure_loaded`] once.

#[cfg(feature = "napi")]
use napi_derive::napi;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Once;

use crate::error::{BridgeError, Result};
use crate::mirror::PINNED_CLANG_MAJOR;
use crate::strings::into_string;

pub const LIBCLANG_PATH_ENV: &str = "LIBCLANG_PATH";
pub const LOG_ENV: &str = "LIBCLANG_NATIVE_LOG";

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"clang version (\d+)\.(\d+)(?:\.(\d+))?").unwrap();
}

static LOGGER: Once = Once::new();

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Load-time settings. Unset fields fall back to the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct LibraryOptions {
    /// Directory containing libclang, or the full path of the shared object.
    pub libclang_path: Option<String>,
    /// `env_logger` filter, e.g. `"debug"` or `"libclang_native=trace"`.
    pub log_level: Option<String>,
}

impl LibraryOptions {
    pub fn from_env() -> Self {
        LibraryOptions {
            libclang_path: std::env::var(LIBCLANG_PATH_ENV).ok(),
            log_level: std::env::var(LOG_ENV).ok(),
        }
    }

    /// Fields set on `self` win over those on `fallback`.
    pub fn or(self, fallback: LibraryOptions) -> Self {
        LibraryOptions {
            libclang_path: self.libclang_path.or(fallback.libclang_path),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOGGING
// ═══════════════════════════════════════════════════════════════════════════════

/// Installs the `env_logger` backend once per process. Later calls are no-ops.
pub fn init_logging(level: Option<&str>) {
    LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(level.unwrap_or("warn"));
        // Another logger may already be installed by the embedding process.
        let _ = builder.try_init();
    });
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════════

/// Loads libclang on the current thread.
pub fn load(options: &LibraryOptions) -> Result<()> {
    init_logging(options.log_level.as_deref());

    if clang_sys::is_loaded() {
        log::debug!("[libclang-native] libclang already loaded on this thread");
        return Ok(());
    }

    if let Some(path) = &options.libclang_path {
        log::debug!("[libclang-native] searching for libclang in {}", path);
        std::env::set_var(LIBCLANG_PATH_ENV, path);
    }

    clang_sys::load().map_err(|e| {
        log::error!("[libclang-native] failed to load libclang: {}", e);
        BridgeError::LibraryNotLoaded(e)
    })?;

    if let Some(library) = clang_sys::get_library() {
        log::info!("[libclang-native] loaded {}", library.path().display());
    }

    let version = clang_version();
    match parse_version(&version) {
        Some((major, _, _)) if major != PINNED_CLANG_MAJOR => log::warn!(
            "[libclang-native] loaded {} but enum values mirror LLVM {}",
            version,
            PINNED_CLANG_MAJOR
        ),
        Some(_) => {}
        None => log::warn!("[libclang-native] unrecognised version string {:?}", version),
    }
    Ok(())
}

/// Loads with settings taken from the environment unless already loaded.
pub fn ensure_loaded() -> Result<()> {
    if clang_sys::is_loaded() {
        return Ok(());
    }
    load(&LibraryOptions::from_env())
}

pub fn clang_version() -> String {
    into_string(unsafe { clang_sys::clang_getClangVersion() })
}

/// Extracts `(major, minor, patch)` from a `clang_getClangVersion` string.
/// Vendor prefixes such as "Ubuntu clang version" are accepted.
pub fn parse_version(text: &str) -> Option<(u32, u32, u32)> {
    let caps = VERSION_RE.captures(text)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps
        .get(3)
        .map_or(Some(0), |m| m.as_str().parse().ok())?;
    Some((major, minor, patch))
}

// ═══════════════════════════════════════════════════════════════════════════════
// INFO
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct LibraryInfo {
    pub path: String,
    pub version: String,
    pub major: Option<u32>,
    pub pinned_major: u32,
    pub matches_pin: bool,
}

pub fn library_info() -> Result<LibraryInfo> {
    ensure_loaded()?;
    let path = clang_sys::get_library()
        .map(|l| l.path().display().to_string())
        .unwrap_or_default();
    let version = clang_version();
    let major = parse_version(&version).map(|(major, _, _)| major);
    Ok(LibraryInfo {
        path,
        version,
        major,
        pinned_major: PINNED_CLANG_MAJOR,
        matches_pin: major == Some(PINNED_CLANG_MAJOR),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("clang version 15.0.7 (https://github.com/llvm/llvm-project 8dfdcc7b)", Some((15, 0, 7)))]
    #[case("Ubuntu clang version 15.0.7", Some((15, 0, 7)))]
    #[case("Apple clang version 14.0.3 (clang-1403.0.22.14.1)", Some((14, 0, 3)))]
    #[case("clang version 18.1", Some((18, 1, 0)))]
    #[case("libclang", None)]
    #[case("", None)]
    fn test_parse_version(#[case] text: &str, #[case] expected: Option<(u32, u32, u32)>) {
        assert_eq!(parse_version(text), expected);
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: LibraryOptions =
            serde_json::from_str(r#"{"libclangPath":"/usr/lib/llvm-15/lib","logLevel":"debug"}"#)
                .unwrap();
        assert_eq!(options.libclang_path.as_deref(), Some("/usr/lib/llvm-15/lib"));
        assert_eq!(options.log_level.as_deref(), Some("debug"));

        let empty: LibraryOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LibraryOptions::default());
    }

    #[test]
    fn test_options_or_prefers_explicit_fields() {
        let explicit = LibraryOptions {
            libclang_path: Some("/opt/llvm".into()),
            log_level: None,
        };
        let fallback = LibraryOptions {
            libclang_path: Some("/usr/lib".into()),
            log_level: Some("info".into()),
        };
        let merged = explicit.or(fallback);
        assert_eq!(merged.libclang_path.as_deref(), Some("/opt/llvm"));
        assert_eq!(merged.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(Some("debug"));
        init_logging(Some("trace"));
    }

    #[test]
    fn test_library_info_reports_pin() {
        if ensure_loaded().is_err() {
            return;
        }
        let info = library_info().unwrap();
        assert_eq!(info.pinned_major, PINNED_CLANG_MAJOR);
        assert!(info.version.contains("clang version"));
        assert_eq!(info.matches_pin, info.major == Some(PINNED_CLANG_MAJOR));
    }
}
