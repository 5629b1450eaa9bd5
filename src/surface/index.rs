//! Index operations

use napi_derive::napi;

use clang_sys::{
    clang_CXIndex_getGlobalOptions, clang_CXIndex_setGlobalOptions,
    clang_CXIndex_setInvocationEmissionPathOption, clang_createIndex, clang_disposeIndex,
};

use super::{ready, Pointer};
use crate::strings::{optional_ptr, to_optional_c_string};

/// Settings for [`create_index_with_options`]. Global options and the
/// invocation emission path are index-scoped: they apply to every later
/// operation on the returned index.
#[derive(Debug, Clone, Default)]
#[napi(object)]
pub struct IndexOptions {
    pub exclude_declarations_from_pch: bool,
    pub display_diagnostics: bool,
    /// Bitwise or of `CXGlobalOptFlags`.
    pub global_options: Option<u32>,
    pub invocation_emission_path: Option<String>,
}

#[napi(js_name = "clang_createIndex")]
pub fn create_index(
    exclude_declarations_from_pch: i32,
    display_diagnostics: i32,
) -> napi::Result<Pointer> {
    ready()?;
    let index = unsafe { clang_createIndex(exclude_declarations_from_pch, display_diagnostics) };
    log::debug!("[libclang-native] created index");
    Ok(Pointer::new(index))
}

#[napi(js_name = "createIndexWithOptions")]
pub fn create_index_with_options(options: IndexOptions) -> napi::Result<Pointer> {
    ready()?;
    let path = to_optional_c_string(
        "invocation emission path",
        options.invocation_emission_path.as_deref(),
    )?;

    let index = unsafe {
        clang_createIndex(
            options.exclude_declarations_from_pch as _,
            options.display_diagnostics as _,
        )
    };
    if index.is_null() {
        return Ok(Pointer::null());
    }
    if let Some(flags) = options.global_options {
        unsafe { clang_CXIndex_setGlobalOptions(index, flags as _) };
    }
    if let Some(path) = &path {
        unsafe { clang_CXIndex_setInvocationEmissionPathOption(index, path.as_ptr()) };
    }
    log::debug!("[libclang-native] created index with {:?}", options);
    Ok(Pointer::new(index))
}

#[napi(js_name = "clang_disposeIndex")]
pub fn dispose_index(index: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_disposeIndex(index.raw()) };
    log::debug!("[libclang-native] disposed index");
    Ok(())
}

/// Index-scoped: affects every translation unit later created from `index`.
#[napi(js_name = "clang_CXIndex_setGlobalOptions")]
pub fn set_global_options(index: &Pointer, options: u32) -> napi::Result<()> {
    ready()?;
    unsafe { clang_CXIndex_setGlobalOptions(index.raw(), options as _) };
    Ok(())
}

#[napi(js_name = "clang_CXIndex_getGlobalOptions")]
pub fn get_global_options(index: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXIndex_getGlobalOptions(index.raw()) } as u32)
}

#[napi(js_name = "clang_CXIndex_setInvocationEmissionPathOption")]
pub fn set_invocation_emission_path_option(index: &Pointer, path: Option<String>) -> napi::Result<()> {
    ready()?;
    let path = to_optional_c_string("invocation emission path", path.as_deref())?;
    unsafe { clang_CXIndex_setInvocationEmissionPathOption(index.raw(), optional_ptr(&path)) };
    Ok(())
}
