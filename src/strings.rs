//! String Bridge for the libclang bridge
//!
//! Every `CXString` that crosses into the host is copied into an owned
//! `String` and disposed right away, so no native string ever outlives the
//! call that produced it.

use clang_sys::{
    clang_disposeString, clang_disposeStringSet, clang_getCString, CXString, CXStringSet,
};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::{BridgeError, Result};

/// Owns one `CXString` and disposes it exactly once on drop.
pub struct OwnedString {
    raw: CXString,
}

impl OwnedString {
    pub fn new(raw: CXString) -> Self {
        OwnedString { raw }
    }

    /// Copies the text out. A null `clang_getCString` result reads as "".
    pub fn to_string_lossy(&self) -> String {
        let ptr = unsafe { clang_getCString(self.raw) };
        borrowed_str(ptr)
    }
}

impl Drop for OwnedString {
    fn drop(&mut self) {
        unsafe { clang_disposeString(self.raw) };
    }
}

/// Copy-then-dispose conversion used for every `CXString` return value.
pub fn into_string(raw: CXString) -> String {
    OwnedString::new(raw).to_string_lossy()
}

/// Copies a library-owned C string that must not be disposed.
pub fn borrowed_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Copies exactly `len` bytes of a library-owned buffer. Embedded NULs are
/// kept; a null pointer reads as "".
pub fn borrowed_bytes(ptr: *const c_char, len: usize) -> String {
    if ptr.is_null() || len == 0 {
        return String::new();
    }
    let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, len) };
    String::from_utf8_lossy(bytes).into_owned()
}

/// Copies every entry of a `CXStringSet` and disposes the set.
pub fn string_set_into_vec(set: *mut CXStringSet) -> Vec<String> {
    if set.is_null() {
        return Vec::new();
    }
    let strings = unsafe {
        let set_ref = &*set;
        let count = set_ref.Count as usize;
        if set_ref.Strings.is_null() || count == 0 {
            Vec::new()
        } else {
            std::slice::from_raw_parts(set_ref.Strings, count)
                .iter()
                .map(|s| borrowed_str(clang_getCString(*s)))
                .collect()
        }
    };
    unsafe { clang_disposeStringSet(set) };
    strings
}

/// Host text to a NUL-terminated native string.
///
/// `what` names the parameter for the error message.
pub fn to_c_string(what: &str, value: &str) -> Result<CString> {
    CString::new(value).map_err(|e| BridgeError::interior_nul(what, &e))
}

/// Like [`to_c_string`] but maps an absent value to `None` (native null).
pub fn to_optional_c_string(what: &str, value: Option<&str>) -> Result<Option<CString>> {
    value.map(|v| to_c_string(what, v)).transpose()
}

pub fn optional_ptr(value: &Option<CString>) -> *const c_char {
    value.as_ref().map_or(std::ptr::null(), |s| s.as_ptr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_null_is_empty() {
        assert_eq!(borrowed_str(std::ptr::null()), "");
    }

    #[test]
    fn test_borrowed_copies_bytes() {
        let source = CString::new("translation_unit").unwrap();
        let copied = borrowed_str(source.as_ptr());
        drop(source);
        assert_eq!(copied, "translation_unit");
    }

    #[test]
    fn test_borrowed_invalid_utf8_is_lossy() {
        let source = CString::new(vec![b'a', 0xff, b'b']).unwrap();
        assert_eq!(borrowed_str(source.as_ptr()), "a\u{fffd}b");
    }

    #[test]
    fn test_borrowed_bytes_uses_length_not_nul() {
        let buffer = b"int a;\0int b;";
        let copied = borrowed_bytes(buffer.as_ptr() as *const c_char, buffer.len());
        assert_eq!(copied, "int a;\0int b;");
        assert_eq!(borrowed_bytes(buffer.as_ptr() as *const c_char, 3), "int");
        assert_eq!(borrowed_bytes(std::ptr::null(), 10), "");
    }

    #[test]
    fn test_to_c_string_rejects_interior_nul() {
        let err = to_c_string("source filename", "a\0b.c").unwrap_err();
        assert!(matches!(err, BridgeError::InteriorNul { offset: 1, .. }));
    }

    #[test]
    fn test_optional_c_string_maps_absent_to_null() {
        let absent = to_optional_c_string("source filename", None).unwrap();
        assert!(optional_ptr(&absent).is_null());

        let present = to_optional_c_string("source filename", Some("main.c")).unwrap();
        assert!(!optional_ptr(&present).is_null());
        assert_eq!(present.unwrap().to_str().unwrap(), "main.c");
    }

    #[test]
    fn test_empty_string_set_pointer() {
        assert!(string_set_into_vec(std::ptr::null_mut()).is_empty());
    }
}
