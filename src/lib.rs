//! # libclang Native Bridge
//!
//! Exposes the libclang C API to a host runtime that has no pointers, no C
//! structs and no manual memory management.
//!
//! ## Boundary Rules
//!
//! 1. **Handles**: every opaque native pointer crosses as a [`handle::Handle`]
//!    (host class `Pointer`). The bridge never reference-counts; disposal is
//!    the caller's job, exactly as in the C API.
//!
//! 2. **Strings**: owned `CXString`s are copied and disposed immediately.
//!    Library-owned C strings are copied and never freed. Outbound strings
//!    live in the calling frame until the native call returns.
//!
//! 3. **Arrays**: outbound arrays (arguments, unsaved files) are owned by the
//!    calling frame. Inbound arrays are copied into value vectors and the
//!    native array is released before returning.
//!
//! 4. **Mirrors**: enumeration values and small structs match the LLVM 15
//!    ABI bit for bit.
//!
//! 5. **Visitors**: a traversal callback never unwinds through libclang. A
//!    failing visitor stops the walk with Break and its failure surfaces after
//!    the native call returns.
//!
//! The marshaling core compiles without Node. The call surface is built with
//! the `napi` feature.

pub mod arrays;
pub mod error;
pub mod handle;
pub mod library;
pub mod mirror;
pub mod strings;
pub mod visitor;

#[cfg(feature = "napi")]
pub mod surface;

#[cfg(test)]
mod bridge_tests;

pub use error::{BridgeError, Result};
pub use handle::Handle;
pub use library::{ensure_loaded, LibraryInfo, LibraryOptions};
pub use mirror::{MirrorEnum, PINNED_CLANG_MAJOR};
pub use visitor::{ChildVisit, FieldVisit};
