//! Call Surface for the libclang bridge
//!
//! One `#[napi]` function per exported libclang function, registered under
//! the exact native name. Each function marshals its parameters through the
//! handle, string and array bridges, makes a single synchronous native call,
//! and marshals the result back. Native outcomes are returned as values;
//! only marshaling failures become host exceptions.

use napi::{Env, JsObject};
use napi_derive::{module_exports, napi};

use crate::library::{self, LibraryInfo, LibraryOptions};
use crate::mirror::{self, MirrorEnum};
use crate::strings::into_string;

pub mod cursor;
pub mod cxx;
pub mod diagnostic;
pub mod eval;
pub mod file;
pub mod index;
pub mod location;
pub mod module;
pub mod printing;
pub mod token;
pub mod translation_unit;
pub mod traverse;
pub mod types;
pub mod values;

pub use values::Pointer;

/// Loads libclang for the calling thread if no earlier attempt succeeded.
pub(crate) fn ready() -> napi::Result<()> {
    library::ensure_loaded().map_err(napi::Error::from)
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODULE INITIALISATION
// ═══════════════════════════════════════════════════════════════════════════════

fn enum_object(env: &Env, table: &MirrorEnum) -> napi::Result<JsObject> {
    let mut object = env.create_object()?;
    for (name, value) in table.entries {
        object.set_named_property(name, env.create_int64(*value)?)?;
    }
    Ok(object)
}

/// Runs once per Node environment (main thread and each worker).
#[module_exports]
fn init(mut exports: JsObject, env: Env) -> napi::Result<()> {
    for table in mirror::ENUMS {
        exports.set_named_property(table.name, enum_object(&env, table)?)?;
    }

    // A missing libclang is not fatal here; `initialize` can point at one.
    if let Err(e) = library::load(&LibraryOptions::from_env()) {
        log::warn!("[libclang-native] {}; call initialize() with libclangPath", e);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// BRIDGE HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Loads (or reloads from a different path) libclang for this thread.
#[napi]
pub fn initialize(options: Option<LibraryOptions>) -> napi::Result<LibraryInfo> {
    let options = options.unwrap_or_default().or(LibraryOptions::from_env());
    if options.libclang_path.is_some() && clang_sys::is_loaded() {
        log::debug!("[libclang-native] unloading libclang before reload");
        clang_sys::unload().map_err(napi::Error::from_reason)?;
    }
    library::load(&options)?;
    Ok(library::library_info()?)
}

#[napi(js_name = "libraryInfo")]
pub fn library_info() -> napi::Result<LibraryInfo> {
    Ok(library::library_info()?)
}

/// Every mirrored enumeration as `{ enumName: { memberName: value } }`.
#[napi(js_name = "enumManifest")]
pub fn enum_manifest() -> serde_json::Value {
    mirror::manifest()
}

#[napi(js_name = "isNullPointer")]
pub fn is_null_pointer(pointer: &Pointer) -> bool {
    pointer.is_null()
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROCESS-WIDE SETTINGS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getClangVersion")]
pub fn get_clang_version() -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_sys::clang_getClangVersion() }))
}

/// Affects every index in the process.
#[napi(js_name = "clang_toggleCrashRecovery")]
pub fn toggle_crash_recovery(is_enabled: u32) -> napi::Result<()> {
    ready()?;
    unsafe { clang_sys::clang_toggleCrashRecovery(is_enabled as _) };
    Ok(())
}

/// Affects the whole process.
#[napi(js_name = "clang_enableStackTraces")]
pub fn enable_stack_traces() -> napi::Result<()> {
    ready()?;
    unsafe { clang_sys::clang_enableStackTraces() };
    Ok(())
}
