//! Module queries
//!
//! Module handles are owned by their translation unit and are never disposed.

use napi_derive::napi;

use clang_sys::{
    clang_Cursor_getModule, clang_Module_getASTFile, clang_Module_getFullName,
    clang_Module_getName, clang_Module_getNumTopLevelHeaders, clang_Module_getParent,
    clang_Module_getTopLevelHeader, clang_Module_isSystem, clang_getModuleForFile,
};

use super::values::Cursor;
use super::{ready, Pointer};
use crate::strings::into_string;

#[napi(js_name = "clang_Cursor_getModule")]
pub fn cursor_get_module(cursor: &Cursor) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_Cursor_getModule(cursor.raw) }))
}

#[napi(js_name = "clang_getModuleForFile")]
pub fn get_module_for_file(tu: &Pointer, file: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe {
        clang_getModuleForFile(tu.raw(), file.raw())
    }))
}

#[napi(js_name = "clang_Module_getASTFile")]
pub fn module_get_ast_file(module: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_Module_getASTFile(module.raw()) }))
}

/// Null for a top-level module.
#[napi(js_name = "clang_Module_getParent")]
pub fn module_get_parent(module: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_Module_getParent(module.raw()) }))
}

#[napi(js_name = "clang_Module_getName")]
pub fn module_get_name(module: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Module_getName(module.raw()) }))
}

#[napi(js_name = "clang_Module_getFullName")]
pub fn module_get_full_name(module: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Module_getFullName(module.raw()) }))
}

#[napi(js_name = "clang_Module_isSystem")]
pub fn module_is_system(module: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Module_isSystem(module.raw()) } as i32)
}

#[napi(js_name = "clang_Module_getNumTopLevelHeaders")]
pub fn module_get_num_top_level_headers(tu: &Pointer, module: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Module_getNumTopLevelHeaders(tu.raw(), module.raw()) } as u32)
}

#[napi(js_name = "clang_Module_getTopLevelHeader")]
pub fn module_get_top_level_header(
    tu: &Pointer,
    module: &Pointer,
    index: u32,
) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe {
        clang_Module_getTopLevelHeader(tu.raw(), module.raw(), index as _)
    }))
}
