//! File operations

use napi::bindgen_prelude::BigInt;
use napi_derive::napi;

use clang_sys::{
    clang_File_isEqual, clang_File_tryGetRealPathName, clang_getFile, clang_getFileContents,
    clang_getFileName, clang_getFileTime, clang_getFileUniqueID,
    clang_isFileMultipleIncludeGuarded, CXFileUniqueID,
};

use super::{ready, Pointer};
use crate::strings::{borrowed_bytes, into_string, to_c_string};

#[napi(js_name = "clang_getFileName")]
pub fn get_file_name(file: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getFileName(file.raw()) }))
}

/// Last modification time, seconds since the epoch.
#[napi(js_name = "clang_getFileTime")]
pub fn get_file_time(file: &Pointer) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_getFileTime(file.raw()) } as i64)
}

#[napi(js_name = "clang_isFileMultipleIncludeGuarded")]
pub fn is_file_multiple_include_guarded(tu: &Pointer, file: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isFileMultipleIncludeGuarded(tu.raw(), file.raw()) } as u32)
}

/// Null when the translation unit never loaded `file_name`.
#[napi(js_name = "clang_getFile")]
pub fn get_file(tu: &Pointer, file_name: String) -> napi::Result<Pointer> {
    ready()?;
    let name = to_c_string("file name", &file_name)?;
    Ok(Pointer::new(unsafe { clang_getFile(tu.raw(), name.as_ptr()) }))
}

/// The buffer is owned by the translation unit; exactly `size` bytes are
/// copied.
#[napi(js_name = "clang_getFileContents")]
pub fn get_file_contents(tu: &Pointer, file: &Pointer) -> napi::Result<String> {
    ready()?;
    let mut size = 0;
    let contents = unsafe { clang_getFileContents(tu.raw(), file.raw(), &mut size) };
    Ok(borrowed_bytes(contents, size as usize))
}

/// The three words identifying the file on disk, or null when libclang
/// cannot tell.
#[napi(js_name = "clang_getFileUniqueID")]
pub fn get_file_unique_id(file: &Pointer) -> napi::Result<Option<Vec<BigInt>>> {
    ready()?;
    let mut id = CXFileUniqueID { data: [0; 3] };
    if unsafe { clang_getFileUniqueID(file.raw(), &mut id) } != 0 {
        return Ok(None);
    }
    Ok(Some(id.data.iter().map(|word| BigInt::from(*word as u64)).collect()))
}

#[napi(js_name = "clang_File_isEqual")]
pub fn file_is_equal(file1: &Pointer, file2: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_File_isEqual(file1.raw(), file2.raw()) } as i32)
}

#[napi(js_name = "clang_File_tryGetRealPathName")]
pub fn file_try_get_real_path_name(file: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_File_tryGetRealPathName(file.raw()) }))
}
