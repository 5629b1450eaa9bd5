//! Array Bridge for the libclang bridge
//!
//! Host sequences are copied into natively laid out arrays whose element
//! buffers are owned by the container itself. A container is built in the
//! calling frame and dropped only after the native call has returned, so the
//! pointer handed to libclang can never dangle.

#[cfg(feature = "napi")]
use napi_derive::napi;

use clang_sys::{clang_disposeSourceRangeList, CXSourceRange, CXSourceRangeList, CXUnsavedFile};
use serde::{Deserialize, Serialize};
use std::ffi::CString;
use std::os::raw::c_char;

use crate::error::{BridgeError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// COMMAND-LINE ARGUMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Owned `const char *const *` argument vector.
pub struct CStringArray {
    // Heap buffers do not move when the Vec itself moves.
    _owned: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl CStringArray {
    /// `None` and an empty slice both become a null pointer with zero count.
    pub fn new(what: &str, values: Option<&[String]>) -> Result<Self> {
        let owned = values
            .unwrap_or_default()
            .iter()
            .map(|v| CString::new(v.as_str()).map_err(|e| BridgeError::interior_nul(what, &e)))
            .collect::<Result<Vec<_>>>()?;
        let pointers = owned.iter().map(|s| s.as_ptr()).collect();
        Ok(CStringArray {
            _owned: owned,
            pointers,
        })
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        if self.pointers.is_empty() {
            std::ptr::null()
        } else {
            self.pointers.as_ptr()
        }
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// UNSAVED FILES
// ═══════════════════════════════════════════════════════════════════════════════

/// In-memory override of a file's contents for a single parse or reparse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct UnsavedFile {
    pub filename: String,
    pub contents: String,
}

impl UnsavedFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        UnsavedFile {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Owned `CXUnsavedFile` table plus the path and content buffers it points to.
pub struct UnsavedFileArray {
    _filenames: Vec<CString>,
    _contents: Vec<Box<[u8]>>,
    entries: Vec<CXUnsavedFile>,
}

impl UnsavedFileArray {
    pub fn new(files: Option<&[UnsavedFile]>) -> Result<Self> {
        let files = files.unwrap_or_default();
        let mut filenames = Vec::with_capacity(files.len());
        let mut contents = Vec::with_capacity(files.len());
        let mut entries = Vec::with_capacity(files.len());

        for file in files {
            let filename = CString::new(file.filename.as_str())
                .map_err(|e| BridgeError::interior_nul("unsaved file name", &e))?;

            // Length is passed explicitly; the trailing NUL only guards readers
            // that treat the buffer as a C string.
            let mut bytes = Vec::with_capacity(file.contents.len() + 1);
            bytes.extend_from_slice(file.contents.as_bytes());
            bytes.push(0);
            let bytes = bytes.into_boxed_slice();

            entries.push(CXUnsavedFile {
                Filename: filename.as_ptr(),
                Contents: bytes.as_ptr() as *const c_char,
                Length: file.contents.len() as _,
            });
            filenames.push(filename);
            contents.push(bytes);
        }

        Ok(UnsavedFileArray {
            _filenames: filenames,
            _contents: contents,
            entries,
        })
    }

    pub fn as_mut_ptr(&mut self) -> *mut CXUnsavedFile {
        if self.entries.is_empty() {
            std::ptr::null_mut()
        } else {
            self.entries.as_mut_ptr()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// INBOUND ARRAYS
// ═══════════════════════════════════════════════════════════════════════════════

/// Copies `len` elements out of a library-allocated array, then hands the
/// array back to `dispose`. `dispose` runs even for an empty array so the
/// native allocation is always released.
pub fn copy_and_dispose<T: Copy>(
    ptr: *mut T,
    len: usize,
    dispose: impl FnOnce(*mut T),
) -> Vec<T> {
    if ptr.is_null() {
        return Vec::new();
    }
    let copied = if len == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec()
    };
    dispose(ptr);
    copied
}

pub fn source_range_list_into_vec(list: *mut CXSourceRangeList) -> Vec<CXSourceRange> {
    if list.is_null() {
        return Vec::new();
    }
    let ranges = unsafe {
        let list_ref = &*list;
        if list_ref.ranges.is_null() || list_ref.count == 0 {
            Vec::new()
        } else {
            std::slice::from_raw_parts(list_ref.ranges, list_ref.count as usize).to_vec()
        }
    };
    unsafe { clang_disposeSourceRangeList(list) };
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_absent_arguments_are_null() {
        let args = CStringArray::new("command-line argument", None).unwrap();
        assert!(args.as_ptr().is_null());
        assert_eq!(args.len(), 0);

        let empty: Vec<String> = vec![];
        let args = CStringArray::new("command-line argument", Some(&empty)).unwrap();
        assert!(args.as_ptr().is_null());
        assert!(args.is_empty());
    }

    #[test]
    fn test_arguments_are_independent_copies() {
        let mut host = vec!["-std=c11".to_string(), "-DFOO=1".to_string()];
        let args = CStringArray::new("command-line argument", Some(&host)).unwrap();
        host.clear();
        drop(host);

        let read: Vec<&str> = (0..args.len())
            .map(|i| unsafe { CStr::from_ptr(*args.as_ptr().add(i)) }.to_str().unwrap())
            .collect();
        assert_eq!(read, vec!["-std=c11", "-DFOO=1"]);
    }

    #[test]
    fn test_argument_with_nul_is_rejected() {
        let host = vec!["-I\0inc".to_string()];
        let err = CStringArray::new("command-line argument", Some(&host)).err();
        assert!(matches!(err, Some(BridgeError::InteriorNul { offset: 2, .. })));
    }

    #[test]
    fn test_unsaved_files_survive_container_move() {
        let files = vec![
            UnsavedFile::new("/virtual/a.c", "int a;"),
            UnsavedFile::new("/virtual/b.h", ""),
        ];
        let array = UnsavedFileArray::new(Some(&files)).unwrap();
        drop(files);

        // Moving the container must not move the buffers the table points to.
        let mut moved = Box::new(array);
        let ptr = moved.as_mut_ptr();
        assert_eq!(moved.len(), 2);

        let entries = unsafe { std::slice::from_raw_parts(ptr, moved.len()) };
        let name = unsafe { CStr::from_ptr(entries[0].Filename) };
        assert_eq!(name.to_str().unwrap(), "/virtual/a.c");
        assert_eq!(entries[0].Length as usize, 6);
        let body = unsafe {
            std::slice::from_raw_parts(entries[0].Contents as *const u8, entries[0].Length as usize)
        };
        assert_eq!(body, b"int a;");
        assert_eq!(entries[1].Length as usize, 0);
        assert!(!entries[1].Contents.is_null());
    }

    #[test]
    fn test_contents_keep_embedded_nul() {
        let files = vec![UnsavedFile::new("/virtual/bin.c", "a\0b")];
        let mut array = UnsavedFileArray::new(Some(&files)).unwrap();
        let entry = unsafe { &*array.as_mut_ptr() };
        assert_eq!(entry.Length as usize, 3);
    }

    #[test]
    fn test_unsaved_file_name_with_nul_is_rejected() {
        let files = vec![UnsavedFile::new("bad\0name.c", "")];
        assert!(UnsavedFileArray::new(Some(&files)).is_err());
    }

    #[test]
    fn test_no_unsaved_files_is_null() {
        let mut array = UnsavedFileArray::new(None).unwrap();
        assert!(array.as_mut_ptr().is_null());
        assert!(array.is_empty());
    }

    #[test]
    fn test_copy_and_dispose_releases_once() {
        let native = Box::into_raw(vec![3u32, 5, 8].into_boxed_slice()) as *mut u32;
        let mut released = 0;
        let copied = copy_and_dispose(native, 3, |ptr| {
            released += 1;
            drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, 3)) });
        });
        assert_eq!(copied, vec![3, 5, 8]);
        assert_eq!(released, 1);
    }

    #[test]
    fn test_copy_and_dispose_null_skips_dispose() {
        let mut released = false;
        let copied = copy_and_dispose(std::ptr::null_mut::<u32>(), 4, |_| released = true);
        assert!(copied.is_empty());
        assert!(!released);
    }

    #[test]
    fn test_empty_range_list_pointer() {
        assert!(source_range_list_into_vec(std::ptr::null_mut()).is_empty());
    }

    #[test]
    fn test_unsaved_file_deserializes_from_host_record() {
        let file: UnsavedFile =
            serde_json::from_str(r#"{"filename":"/v/x.c","contents":"int x;"}"#).unwrap();
        assert_eq!(file, UnsavedFile::new("/v/x.c", "int x;"));

        let missing = serde_json::from_str::<UnsavedFile>(r#"{"filename":"/v/x.c"}"#);
        assert!(missing.is_err());
    }
}
