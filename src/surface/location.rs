//! Source locations and ranges

use napi_derive::napi;

use clang_sys::{
    clang_equalLocations, clang_equalRanges, clang_getAllSkippedRanges, clang_getExpansionLocation,
    clang_getFileLocation, clang_getInstantiationLocation, clang_getLocation,
    clang_getLocationForOffset, clang_getPresumedLocation, clang_getRange, clang_getRangeEnd,
    clang_getRangeStart, clang_getSkippedRanges, clang_getSpellingLocation,
    clang_Location_isFromMainFile, clang_Location_isInSystemHeader, clang_Range_isNull, CXFile,
    CXSourceLocation, CXString,
};
use std::os::raw::c_uint;
use std::ptr;

use super::values::{FileLocation, PresumedLocation, SourceLocation, SourceRange};
use super::{ready, Pointer};
use crate::arrays::source_range_list_into_vec;
use crate::strings::into_string;

// ═══════════════════════════════════════════════════════════════════════════════
// LOCATIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getNullLocation")]
pub fn get_null_location() -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::null())
}

#[napi(js_name = "clang_equalLocations")]
pub fn equal_locations(loc1: &SourceLocation, loc2: &SourceLocation) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_equalLocations(loc1.raw, loc2.raw) } as u32)
}

#[napi(js_name = "clang_getLocation")]
pub fn get_location(
    tu: &Pointer,
    file: &Pointer,
    line: u32,
    column: u32,
) -> napi::Result<SourceLocation> {
    ready()?;
    let raw = unsafe { clang_getLocation(tu.raw(), file.raw(), line as _, column as _) };
    Ok(SourceLocation::from(raw))
}

#[napi(js_name = "clang_getLocationForOffset")]
pub fn get_location_for_offset(
    tu: &Pointer,
    file: &Pointer,
    offset: u32,
) -> napi::Result<SourceLocation> {
    ready()?;
    let raw = unsafe { clang_getLocationForOffset(tu.raw(), file.raw(), offset as _) };
    Ok(SourceLocation::from(raw))
}

#[napi(js_name = "clang_Location_isInSystemHeader")]
pub fn location_is_in_system_header(location: &SourceLocation) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Location_isInSystemHeader(location.raw) } as i32)
}

#[napi(js_name = "clang_Location_isFromMainFile")]
pub fn location_is_from_main_file(location: &SourceLocation) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Location_isFromMainFile(location.raw) } as i32)
}

fn decompose<F>(location: &SourceLocation, f: F) -> FileLocation
where
    F: FnOnce(CXSourceLocation, *mut CXFile, *mut c_uint, *mut c_uint, *mut c_uint),
{
    let mut file: CXFile = ptr::null_mut();
    let (mut line, mut column, mut offset): (c_uint, c_uint, c_uint) = (0, 0, 0);
    f(location.raw, &mut file, &mut line, &mut column, &mut offset);
    FileLocation::new(Pointer::new(file), line as u32, column as u32, offset as u32)
}

/// File, line, column and offset after macro expansion.
#[napi(js_name = "clang_getExpansionLocation")]
pub fn get_expansion_location(location: &SourceLocation) -> napi::Result<FileLocation> {
    ready()?;
    Ok(decompose(location, |l, f, line, col, off| unsafe {
        clang_getExpansionLocation(l, f, line, col, off)
    }))
}

/// Older name of `clang_getExpansionLocation`.
#[napi(js_name = "clang_getInstantiationLocation")]
pub fn get_instantiation_location(location: &SourceLocation) -> napi::Result<FileLocation> {
    ready()?;
    Ok(decompose(location, |l, f, line, col, off| unsafe {
        clang_getInstantiationLocation(l, f, line, col, off)
    }))
}

#[napi(js_name = "clang_getSpellingLocation")]
pub fn get_spelling_location(location: &SourceLocation) -> napi::Result<FileLocation> {
    ready()?;
    Ok(decompose(location, |l, f, line, col, off| unsafe {
        clang_getSpellingLocation(l, f, line, col, off)
    }))
}

#[napi(js_name = "clang_getFileLocation")]
pub fn get_file_location(location: &SourceLocation) -> napi::Result<FileLocation> {
    ready()?;
    Ok(decompose(location, |l, f, line, col, off| unsafe {
        clang_getFileLocation(l, f, line, col, off)
    }))
}

/// Location as adjusted by `#line` directives.
#[napi(js_name = "clang_getPresumedLocation")]
pub fn get_presumed_location(location: &SourceLocation) -> napi::Result<PresumedLocation> {
    ready()?;
    let mut filename: CXString = unsafe { std::mem::zeroed() };
    let (mut line, mut column): (c_uint, c_uint) = (0, 0);
    unsafe { clang_getPresumedLocation(location.raw, &mut filename, &mut line, &mut column) };
    Ok(PresumedLocation {
        filename: into_string(filename),
        line: line as u32,
        column: column as u32,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// RANGES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getNullRange")]
pub fn get_null_range() -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::null())
}

#[napi(js_name = "clang_getRange")]
pub fn get_range(begin: &SourceLocation, end: &SourceLocation) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe { clang_getRange(begin.raw, end.raw) }))
}

#[napi(js_name = "clang_equalRanges")]
pub fn equal_ranges(range1: &SourceRange, range2: &SourceRange) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_equalRanges(range1.raw, range2.raw) } as u32)
}

#[napi(js_name = "clang_Range_isNull")]
pub fn range_is_null(range: &SourceRange) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Range_isNull(range.raw) } as i32)
}

#[napi(js_name = "clang_getRangeStart")]
pub fn get_range_start(range: &SourceRange) -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::from(unsafe { clang_getRangeStart(range.raw) }))
}

#[napi(js_name = "clang_getRangeEnd")]
pub fn get_range_end(range: &SourceRange) -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::from(unsafe { clang_getRangeEnd(range.raw) }))
}

/// Preprocessor-skipped ranges of one file. Requires a translation unit
/// parsed with `DetailedPreprocessingRecord`.
#[napi(js_name = "clang_getSkippedRanges")]
pub fn get_skipped_ranges(tu: &Pointer, file: &Pointer) -> napi::Result<Vec<SourceRange>> {
    ready()?;
    let list = unsafe { clang_getSkippedRanges(tu.raw(), file.raw()) };
    Ok(source_range_list_into_vec(list)
        .into_iter()
        .map(SourceRange::from)
        .collect())
}

#[napi(js_name = "clang_getAllSkippedRanges")]
pub fn get_all_skipped_ranges(tu: &Pointer) -> napi::Result<Vec<SourceRange>> {
    ready()?;
    let list = unsafe { clang_getAllSkippedRanges(tu.raw()) };
    Ok(source_range_list_into_vec(list)
        .into_iter()
        .map(SourceRange::from)
        .collect())
}
