//! Handle Module for the libclang bridge
//!
//! A `Handle` stands in for every opaque libclang pointer (index, translation
//! unit, file, diagnostic set, module, printing policy, ...). The category is
//! not tracked: it is implied by the operation that produced the handle.
//!
//! Handles are plain copies of an address. Nothing is reference counted and
//! nothing is disposed on drop; the host calls the matching `clang_dispose*`
//! operation explicitly, exactly like the native API.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Handle {
    address: usize,
}

impl Handle {
    pub const fn null() -> Self {
        Handle { address: 0 }
    }

    pub fn wrap<T>(ptr: *mut T) -> Self {
        Handle {
            address: ptr as usize,
        }
    }

    pub fn wrap_const<T>(ptr: *const T) -> Self {
        Handle {
            address: ptr as usize,
        }
    }

    /// Returns the wrapped address as a pointer of the requested category.
    ///
    /// No validation happens here. Feeding a handle of one category to an
    /// operation expecting another is undefined behaviour in libclang.
    pub fn unwrap<T>(&self) -> *mut T {
        self.address as *mut T
    }

    pub fn is_null(&self) -> bool {
        self.address == 0
    }
}

// Deliberately hides the address.
impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle(null)")
        } else {
            write!(f, "Handle(..)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;

    #[test]
    fn test_wrap_same_address_is_equal() {
        let mut value = 7u32;
        let a = Handle::wrap(&mut value as *mut u32);
        let b = Handle::wrap(&mut value as *mut u32);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a, a);
    }

    #[test]
    fn test_wrap_different_addresses_differ() {
        let mut first = [0u8; 2];
        let a = Handle::wrap(&mut first[0] as *mut u8);
        let b = Handle::wrap(&mut first[1] as *mut u8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_null_handle() {
        assert!(Handle::null().is_null());
        assert!(Handle::wrap(std::ptr::null_mut::<c_void>()).is_null());
        assert_eq!(Handle::default(), Handle::null());
    }

    #[test]
    fn test_unwrap_round_trips_address() {
        let mut value = 1i64;
        let ptr = &mut value as *mut i64;
        let handle = Handle::wrap(ptr);
        assert!(!handle.is_null());
        assert_eq!(handle.unwrap::<i64>(), ptr);
        // Category is not checked, only the address travels.
        assert_eq!(handle.unwrap::<c_void>() as usize, ptr as usize);
    }

    #[test]
    fn test_debug_never_prints_address() {
        let mut value = 0u8;
        let handle = Handle::wrap(&mut value as *mut u8);
        assert_eq!(format!("{:?}", handle), "Handle(..)");
        assert_eq!(format!("{:?}", Handle::null()), "Handle(null)");
    }
}
