//! Translation unit operations
//!
//! Argument vectors and unsaved files are marshaled into containers owned by
//! each function's frame; they are dropped only after the native call has
//! returned.

use napi_derive::napi;

use clang_sys::{
    clang_TargetInfo_dispose, clang_TargetInfo_getPointerWidth, clang_TargetInfo_getTriple,
    clang_createTranslationUnit, clang_createTranslationUnit2,
    clang_createTranslationUnitFromSourceFile, clang_defaultEditingTranslationUnitOptions,
    clang_defaultReparseOptions, clang_defaultSaveOptions, clang_disposeCXTUResourceUsage,
    clang_disposeTranslationUnit, clang_getCXTUResourceUsage, clang_getTUResourceUsageName,
    clang_getTranslationUnitSpelling, clang_getTranslationUnitTargetInfo,
    clang_parseTranslationUnit, clang_parseTranslationUnit2, clang_parseTranslationUnit2FullArgv,
    clang_reparseTranslationUnit, clang_saveTranslationUnit, clang_suspendTranslationUnit,
    CXTranslationUnit,
};
use std::ptr;

use super::values::{ResourceUsageEntry, TranslationUnitResult};
use super::{ready, Pointer};
use crate::arrays::{CStringArray, UnsavedFile, UnsavedFileArray};
use crate::strings::{borrowed_str, into_string, optional_ptr, to_c_string, to_optional_c_string};

/// Marshaled inputs shared by the parse entry points.
struct ParseInputs {
    source_filename: Option<std::ffi::CString>,
    args: CStringArray,
    unsaved: UnsavedFileArray,
}

impl ParseInputs {
    fn new(
        source_filename: Option<String>,
        command_line_args: Option<Vec<String>>,
        unsaved_files: Option<Vec<UnsavedFile>>,
    ) -> napi::Result<Self> {
        Ok(ParseInputs {
            source_filename: to_optional_c_string("source filename", source_filename.as_deref())?,
            args: CStringArray::new("command-line argument", command_line_args.as_deref())?,
            unsaved: UnsavedFileArray::new(unsaved_files.as_deref())?,
        })
    }
}

#[napi(js_name = "clang_getTranslationUnitSpelling")]
pub fn get_translation_unit_spelling(tu: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getTranslationUnitSpelling(tu.raw()) }))
}

#[napi(js_name = "clang_createTranslationUnitFromSourceFile")]
pub fn create_translation_unit_from_source_file(
    index: &Pointer,
    source_filename: Option<String>,
    command_line_args: Option<Vec<String>>,
    unsaved_files: Option<Vec<UnsavedFile>>,
) -> napi::Result<Pointer> {
    ready()?;
    let mut inputs = ParseInputs::new(source_filename, command_line_args, unsaved_files)?;
    let tu = unsafe {
        clang_createTranslationUnitFromSourceFile(
            index.raw(),
            optional_ptr(&inputs.source_filename),
            inputs.args.len() as _,
            inputs.args.as_ptr(),
            inputs.unsaved.len() as _,
            inputs.unsaved.as_mut_ptr(),
        )
    };
    Ok(Pointer::new(tu))
}

/// Loads a translation unit from a serialized AST file.
#[napi(js_name = "clang_createTranslationUnit")]
pub fn create_translation_unit(index: &Pointer, ast_filename: String) -> napi::Result<Pointer> {
    ready()?;
    let ast_filename = to_c_string("AST filename", &ast_filename)?;
    let tu = unsafe { clang_createTranslationUnit(index.raw(), ast_filename.as_ptr()) };
    Ok(Pointer::new(tu))
}

#[napi(js_name = "clang_createTranslationUnit2")]
pub fn create_translation_unit2(
    index: &Pointer,
    ast_filename: String,
) -> napi::Result<TranslationUnitResult> {
    ready()?;
    let ast_filename = to_c_string("AST filename", &ast_filename)?;
    let mut tu: CXTranslationUnit = ptr::null_mut();
    let code = unsafe { clang_createTranslationUnit2(index.raw(), ast_filename.as_ptr(), &mut tu) };
    Ok(TranslationUnitResult::new(code as i32, Pointer::new(tu)))
}

#[napi(js_name = "clang_defaultEditingTranslationUnitOptions")]
pub fn default_editing_translation_unit_options() -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_defaultEditingTranslationUnitOptions() } as u32)
}

/// Parses a source file. A failed parse yields a null handle, not an error.
#[napi(js_name = "clang_parseTranslationUnit")]
pub fn parse_translation_unit(
    index: &Pointer,
    source_filename: Option<String>,
    command_line_args: Option<Vec<String>>,
    unsaved_files: Option<Vec<UnsavedFile>>,
    options: u32,
) -> napi::Result<Pointer> {
    ready()?;
    let mut inputs = ParseInputs::new(source_filename, command_line_args, unsaved_files)?;
    let tu = unsafe {
        clang_parseTranslationUnit(
            index.raw(),
            optional_ptr(&inputs.source_filename),
            inputs.args.as_ptr(),
            inputs.args.len() as _,
            inputs.unsaved.as_mut_ptr(),
            inputs.unsaved.len() as _,
            options as _,
        )
    };
    if tu.is_null() {
        log::debug!("[libclang-native] clang_parseTranslationUnit returned null");
    }
    Ok(Pointer::new(tu))
}

/// Like `clang_parseTranslationUnit` but reports a `CXErrorCode`.
#[napi(js_name = "clang_parseTranslationUnit2")]
pub fn parse_translation_unit2(
    index: &Pointer,
    source_filename: Option<String>,
    command_line_args: Option<Vec<String>>,
    unsaved_files: Option<Vec<UnsavedFile>>,
    options: u32,
) -> napi::Result<TranslationUnitResult> {
    ready()?;
    let mut inputs = ParseInputs::new(source_filename, command_line_args, unsaved_files)?;
    let mut tu: CXTranslationUnit = ptr::null_mut();
    let code = unsafe {
        clang_parseTranslationUnit2(
            index.raw(),
            optional_ptr(&inputs.source_filename),
            inputs.args.as_ptr(),
            inputs.args.len() as _,
            inputs.unsaved.as_mut_ptr(),
            inputs.unsaved.len() as _,
            options as _,
            &mut tu,
        )
    };
    Ok(TranslationUnitResult::new(code as i32, Pointer::new(tu)))
}

/// Like `clang_parseTranslationUnit2`, but `command_line_args` starts with
/// the compiler executable name.
#[napi(js_name = "clang_parseTranslationUnit2FullArgv")]
pub fn parse_translation_unit2_full_argv(
    index: &Pointer,
    source_filename: Option<String>,
    command_line_args: Option<Vec<String>>,
    unsaved_files: Option<Vec<UnsavedFile>>,
    options: u32,
) -> napi::Result<TranslationUnitResult> {
    ready()?;
    let mut inputs = ParseInputs::new(source_filename, command_line_args, unsaved_files)?;
    let mut tu: CXTranslationUnit = ptr::null_mut();
    let code = unsafe {
        clang_parseTranslationUnit2FullArgv(
            index.raw(),
            optional_ptr(&inputs.source_filename),
            inputs.args.as_ptr(),
            inputs.args.len() as _,
            inputs.unsaved.as_mut_ptr(),
            inputs.unsaved.len() as _,
            options as _,
            &mut tu,
        )
    };
    Ok(TranslationUnitResult::new(code as i32, Pointer::new(tu)))
}

#[napi(js_name = "clang_defaultSaveOptions")]
pub fn default_save_options(tu: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_defaultSaveOptions(tu.raw()) } as u32)
}

/// Returns a `CXSaveError` value.
#[napi(js_name = "clang_saveTranslationUnit")]
pub fn save_translation_unit(tu: &Pointer, file_name: String, options: u32) -> napi::Result<i32> {
    ready()?;
    let file_name = to_c_string("file name", &file_name)?;
    Ok(unsafe { clang_saveTranslationUnit(tu.raw(), file_name.as_ptr(), options as _) } as i32)
}

#[napi(js_name = "clang_suspendTranslationUnit")]
pub fn suspend_translation_unit(tu: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_suspendTranslationUnit(tu.raw()) } as u32)
}

#[napi(js_name = "clang_disposeTranslationUnit")]
pub fn dispose_translation_unit(tu: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_disposeTranslationUnit(tu.raw()) };
    log::debug!("[libclang-native] disposed translation unit");
    Ok(())
}

#[napi(js_name = "clang_defaultReparseOptions")]
pub fn default_reparse_options(tu: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_defaultReparseOptions(tu.raw()) } as u32)
}

/// Returns 0 on success, otherwise a `CXErrorCode`; on failure the
/// translation unit must be disposed.
#[napi(js_name = "clang_reparseTranslationUnit")]
pub fn reparse_translation_unit(
    tu: &Pointer,
    unsaved_files: Option<Vec<UnsavedFile>>,
    options: u32,
) -> napi::Result<i32> {
    ready()?;
    let mut unsaved = UnsavedFileArray::new(unsaved_files.as_deref())?;
    let code = unsafe {
        clang_reparseTranslationUnit(
            tu.raw(),
            unsaved.len() as _,
            unsaved.as_mut_ptr(),
            options as _,
        )
    };
    Ok(code as i32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESOURCE USAGE
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getTUResourceUsageName")]
pub fn get_tu_resource_usage_name(kind: i32) -> napi::Result<String> {
    ready()?;
    // Static storage inside libclang; never disposed.
    Ok(borrowed_str(unsafe { clang_getTUResourceUsageName(kind as _) }))
}

/// Memory usage per category, copied before the native report is disposed.
#[napi(js_name = "clang_getCXTUResourceUsage")]
pub fn get_cxtu_resource_usage(tu: &Pointer) -> napi::Result<Vec<ResourceUsageEntry>> {
    ready()?;
    let usage = unsafe { clang_getCXTUResourceUsage(tu.raw()) };
    let entries = if usage.entries.is_null() || usage.numEntries == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(usage.entries, usage.numEntries as usize) }
            .iter()
            .map(|entry| ResourceUsageEntry {
                kind: entry.kind as i32,
                name: borrowed_str(unsafe { clang_getTUResourceUsageName(entry.kind) }),
                amount: entry.amount as i64,
            })
            .collect()
    };
    unsafe { clang_disposeCXTUResourceUsage(usage) };
    Ok(entries)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TARGET INFO
// ═══════════════════════════════════════════════════════════════════════════════

/// Dispose with `clang_TargetInfo_dispose`.
#[napi(js_name = "clang_getTranslationUnitTargetInfo")]
pub fn get_translation_unit_target_info(tu: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_getTranslationUnitTargetInfo(tu.raw()) }))
}

#[napi(js_name = "clang_TargetInfo_dispose")]
pub fn target_info_dispose(info: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_TargetInfo_dispose(info.raw()) };
    Ok(())
}

#[napi(js_name = "clang_TargetInfo_getTriple")]
pub fn target_info_get_triple(info: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_TargetInfo_getTriple(info.raw()) }))
}

/// Pointer width in bits, or -1 on error.
#[napi(js_name = "clang_TargetInfo_getPointerWidth")]
pub fn target_info_get_pointer_width(info: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_TargetInfo_getPointerWidth(info.raw()) } as i32)
}
