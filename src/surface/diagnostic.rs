//! Diagnostics and diagnostic sets
//!
//! Diagnostics and sets are handles; the host disposes them explicitly with
//! `clang_disposeDiagnostic` / `clang_disposeDiagnosticSet`.

use napi_derive::napi;

use clang_sys::{
    clang_defaultDiagnosticDisplayOptions, clang_disposeDiagnostic, clang_disposeDiagnosticSet,
    clang_formatDiagnostic, clang_getChildDiagnostics, clang_getDiagnostic,
    clang_getDiagnosticCategory, clang_getDiagnosticCategoryName, clang_getDiagnosticCategoryText,
    clang_getDiagnosticFixIt, clang_getDiagnosticInSet, clang_getDiagnosticLocation,
    clang_getDiagnosticNumFixIts, clang_getDiagnosticNumRanges, clang_getDiagnosticOption,
    clang_getDiagnosticRange, clang_getDiagnosticSetFromTU, clang_getDiagnosticSeverity,
    clang_getDiagnosticSpelling, clang_getNumDiagnostics, clang_getNumDiagnosticsInSet,
    clang_loadDiagnostics, CXSourceRange, CXString,
};

use super::values::{DiagnosticOption, FixIt, LoadedDiagnostics, SourceLocation, SourceRange};
use super::{ready, Pointer};
use crate::strings::{into_string, to_c_string};

fn empty_cx_string() -> CXString {
    // A zeroed CXString has a null data pointer, which dispose tolerates.
    unsafe { std::mem::zeroed() }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SETS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getNumDiagnosticsInSet")]
pub fn get_num_diagnostics_in_set(diags: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getNumDiagnosticsInSet(diags.raw()) } as u32)
}

#[napi(js_name = "clang_getDiagnosticInSet")]
pub fn get_diagnostic_in_set(diags: &Pointer, index: u32) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe {
        clang_getDiagnosticInSet(diags.raw(), index as _)
    }))
}

/// Reads a serialized diagnostics file (`-serialize-diagnostics`).
#[napi(js_name = "clang_loadDiagnostics")]
pub fn load_diagnostics(file: String) -> napi::Result<LoadedDiagnostics> {
    ready()?;
    let file = to_c_string("diagnostics file", &file)?;
    let mut error = 0;
    let mut error_string = empty_cx_string();
    let set = unsafe { clang_loadDiagnostics(file.as_ptr(), &mut error, &mut error_string) };
    Ok(LoadedDiagnostics::new(
        Pointer::new(set),
        error as i32,
        into_string(error_string),
    ))
}

#[napi(js_name = "clang_disposeDiagnosticSet")]
pub fn dispose_diagnostic_set(diags: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_disposeDiagnosticSet(diags.raw()) };
    log::debug!("[libclang-native] disposed diagnostic set");
    Ok(())
}

#[napi(js_name = "clang_getChildDiagnostics")]
pub fn get_child_diagnostics(diagnostic: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe {
        clang_getChildDiagnostics(diagnostic.raw())
    }))
}

#[napi(js_name = "clang_getNumDiagnostics")]
pub fn get_num_diagnostics(tu: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getNumDiagnostics(tu.raw()) } as u32)
}

#[napi(js_name = "clang_getDiagnostic")]
pub fn get_diagnostic(tu: &Pointer, index: u32) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_getDiagnostic(tu.raw(), index as _) }))
}

#[napi(js_name = "clang_getDiagnosticSetFromTU")]
pub fn get_diagnostic_set_from_tu(tu: &Pointer) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_getDiagnosticSetFromTU(tu.raw()) }))
}

#[napi(js_name = "clang_disposeDiagnostic")]
pub fn dispose_diagnostic(diagnostic: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_disposeDiagnostic(diagnostic.raw()) };
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// SINGLE DIAGNOSTIC
// ═══════════════════════════════════════════════════════════════════════════════

/// `options` is a bitwise or of `CXDiagnosticDisplayOptions`.
#[napi(js_name = "clang_formatDiagnostic")]
pub fn format_diagnostic(diagnostic: &Pointer, options: u32) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_formatDiagnostic(diagnostic.raw(), options as _)
    }))
}

#[napi(js_name = "clang_defaultDiagnosticDisplayOptions")]
pub fn default_diagnostic_display_options() -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_defaultDiagnosticDisplayOptions() } as u32)
}

#[napi(js_name = "clang_getDiagnosticSeverity")]
pub fn get_diagnostic_severity(diagnostic: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getDiagnosticSeverity(diagnostic.raw()) } as i32)
}

#[napi(js_name = "clang_getDiagnosticLocation")]
pub fn get_diagnostic_location(diagnostic: &Pointer) -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::from(unsafe {
        clang_getDiagnosticLocation(diagnostic.raw())
    }))
}

#[napi(js_name = "clang_getDiagnosticSpelling")]
pub fn get_diagnostic_spelling(diagnostic: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_getDiagnosticSpelling(diagnostic.raw())
    }))
}

/// The enabling flag (`-Wunused-variable`) and the flag that disables it.
#[napi(js_name = "clang_getDiagnosticOption")]
pub fn get_diagnostic_option(diagnostic: &Pointer) -> napi::Result<DiagnosticOption> {
    ready()?;
    let mut disable = empty_cx_string();
    let option = unsafe { clang_getDiagnosticOption(diagnostic.raw(), &mut disable) };
    Ok(DiagnosticOption {
        option: into_string(option),
        disable: into_string(disable),
    })
}

#[napi(js_name = "clang_getDiagnosticCategory")]
pub fn get_diagnostic_category(diagnostic: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getDiagnosticCategory(diagnostic.raw()) } as u32)
}

#[napi(js_name = "clang_getDiagnosticCategoryText")]
pub fn get_diagnostic_category_text(diagnostic: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_getDiagnosticCategoryText(diagnostic.raw())
    }))
}

/// Category name by number. Superseded by `clang_getDiagnosticCategoryText`.
#[napi(js_name = "clang_getDiagnosticCategoryName")]
pub fn get_diagnostic_category_name(category: u32) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_getDiagnosticCategoryName(category as _)
    }))
}

#[napi(js_name = "clang_getDiagnosticNumRanges")]
pub fn get_diagnostic_num_ranges(diagnostic: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getDiagnosticNumRanges(diagnostic.raw()) } as u32)
}

#[napi(js_name = "clang_getDiagnosticRange")]
pub fn get_diagnostic_range(diagnostic: &Pointer, range: u32) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe {
        clang_getDiagnosticRange(diagnostic.raw(), range as _)
    }))
}

#[napi(js_name = "clang_getDiagnosticNumFixIts")]
pub fn get_diagnostic_num_fix_its(diagnostic: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getDiagnosticNumFixIts(diagnostic.raw()) } as u32)
}

#[napi(js_name = "clang_getDiagnosticFixIt")]
pub fn get_diagnostic_fix_it(diagnostic: &Pointer, fix_it: u32) -> napi::Result<FixIt> {
    ready()?;
    let mut range: CXSourceRange = unsafe { std::mem::zeroed() };
    let text = unsafe { clang_getDiagnosticFixIt(diagnostic.raw(), fix_it as _, &mut range) };
    Ok(FixIt::new(into_string(text), SourceRange::from(range)))
}
