//! Host value classes
//!
//! `Pointer` is the host face of [`Handle`]. The remaining classes mirror the
//! small fixed-layout libclang structs: each carries the complete native
//! value so it can be handed back unchanged, and exposes only the numeric
//! sub-fields the C ABI defines.

use napi::bindgen_prelude::ToNapiValue;
use napi::{Env, JsObject, NapiValue};
use napi_derive::napi;

use clang_sys::{
    clang_getNullCursor, clang_getNullLocation, clang_getNullRange, CXCursor, CXSourceLocation,
    CXSourceRange, CXToken, CXType,
};

use crate::handle::Handle;

// ═══════════════════════════════════════════════════════════════════════════════
// HANDLES
// ═══════════════════════════════════════════════════════════════════════════════

/// Opaque native pointer. Never exposes the address.
#[napi]
#[derive(Clone, Copy)]
pub struct Pointer {
    handle: Handle,
}

#[napi]
impl Pointer {
    #[napi(js_name = "isNull")]
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    #[napi]
    pub fn equals(&self, other: &Pointer) -> bool {
        self.handle == other.handle
    }
}

impl Pointer {
    pub fn new<T>(ptr: *mut T) -> Self {
        Pointer {
            handle: Handle::wrap(ptr),
        }
    }

    pub fn null() -> Self {
        Pointer {
            handle: Handle::null(),
        }
    }

    /// Pointer of whatever category the receiving native function expects.
    pub fn raw<T>(&self) -> *mut T {
        self.handle.unwrap()
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// STRUCT MIRROR
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "CXCursor")]
#[derive(Clone, Copy)]
pub struct Cursor {
    pub(crate) raw: CXCursor,
}

#[napi]
impl Cursor {
    #[napi(getter)]
    pub fn kind(&self) -> i32 {
        self.raw.kind as i32
    }

    #[napi(getter)]
    pub fn xdata(&self) -> i32 {
        self.raw.xdata as i32
    }
}

impl From<CXCursor> for Cursor {
    fn from(raw: CXCursor) -> Self {
        Cursor { raw }
    }
}

impl Cursor {
    pub fn null() -> Self {
        Cursor::from(unsafe { clang_getNullCursor() })
    }
}

#[napi(js_name = "CXSourceLocation")]
#[derive(Clone, Copy)]
pub struct SourceLocation {
    pub(crate) raw: CXSourceLocation,
}

#[napi]
impl SourceLocation {
    #[napi(getter, js_name = "int_data")]
    pub fn int_data(&self) -> u32 {
        self.raw.int_data as u32
    }
}

impl From<CXSourceLocation> for SourceLocation {
    fn from(raw: CXSourceLocation) -> Self {
        SourceLocation { raw }
    }
}

impl SourceLocation {
    pub fn null() -> Self {
        SourceLocation::from(unsafe { clang_getNullLocation() })
    }
}

#[napi(js_name = "CXSourceRange")]
#[derive(Clone, Copy)]
pub struct SourceRange {
    pub(crate) raw: CXSourceRange,
}

#[napi]
impl SourceRange {
    #[napi(getter, js_name = "begin_int_data")]
    pub fn begin_int_data(&self) -> u32 {
        self.raw.begin_int_data as u32
    }

    #[napi(getter, js_name = "end_int_data")]
    pub fn end_int_data(&self) -> u32 {
        self.raw.end_int_data as u32
    }
}

impl From<CXSourceRange> for SourceRange {
    fn from(raw: CXSourceRange) -> Self {
        SourceRange { raw }
    }
}

impl SourceRange {
    pub fn null() -> Self {
        SourceRange::from(unsafe { clang_getNullRange() })
    }
}

#[napi(js_name = "CXType")]
#[derive(Clone, Copy)]
pub struct Type {
    pub(crate) raw: CXType,
}

#[napi]
impl Type {
    #[napi(getter)]
    pub fn kind(&self) -> i32 {
        self.raw.kind as i32
    }
}

impl From<CXType> for Type {
    fn from(raw: CXType) -> Self {
        Type { raw }
    }
}

#[napi(js_name = "CXToken")]
#[derive(Clone, Copy)]
pub struct Token {
    pub(crate) raw: CXToken,
}

#[napi]
impl Token {
    #[napi(getter, js_name = "int_data")]
    pub fn int_data(&self) -> Vec<u32> {
        self.raw.int_data.iter().map(|v| *v as u32).collect()
    }
}

impl From<CXToken> for Token {
    fn from(raw: CXToken) -> Self {
        Token { raw }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUT-PARAMETER RESULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// `clang_get{Expansion,Spelling,File}Location` decomposition.
#[napi]
pub struct FileLocation {
    file: Pointer,
    line: u32,
    column: u32,
    offset: u32,
}

#[napi]
impl FileLocation {
    #[napi(getter)]
    pub fn file(&self) -> Pointer {
        self.file
    }

    #[napi(getter)]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[napi(getter)]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[napi(getter)]
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl FileLocation {
    pub fn new(file: Pointer, line: u32, column: u32, offset: u32) -> Self {
        FileLocation {
            file,
            line,
            column,
            offset,
        }
    }
}

#[napi(object)]
pub struct PresumedLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

/// Error code plus the handle an `*2` entry point wrote through its out
/// parameter. The handle is null unless `errorCode` is `CXError_Success`.
#[napi]
pub struct TranslationUnitResult {
    error_code: i32,
    translation_unit: Pointer,
}

#[napi]
impl TranslationUnitResult {
    #[napi(getter, js_name = "errorCode")]
    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    #[napi(getter, js_name = "translationUnit")]
    pub fn translation_unit(&self) -> Pointer {
        self.translation_unit
    }
}

impl TranslationUnitResult {
    pub fn new(error_code: i32, translation_unit: Pointer) -> Self {
        TranslationUnitResult {
            error_code,
            translation_unit,
        }
    }
}

#[napi]
pub struct FixIt {
    text: String,
    range: SourceRange,
}

#[napi]
impl FixIt {
    #[napi(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Range to replace; equal begin and end means an insertion.
    #[napi(getter)]
    pub fn range(&self) -> SourceRange {
        self.range
    }
}

impl FixIt {
    pub fn new(text: String, range: SourceRange) -> Self {
        FixIt { text, range }
    }
}

#[napi]
pub struct LoadedDiagnostics {
    diagnostics: Pointer,
    error: i32,
    error_string: String,
}

#[napi]
impl LoadedDiagnostics {
    /// Diagnostic set, null on failure. Dispose with `clang_disposeDiagnosticSet`.
    #[napi(getter)]
    pub fn diagnostics(&self) -> Pointer {
        self.diagnostics
    }

    /// A `CXLoadDiag_Error` value.
    #[napi(getter)]
    pub fn error(&self) -> i32 {
        self.error
    }

    #[napi(getter, js_name = "errorString")]
    pub fn error_string(&self) -> String {
        self.error_string.clone()
    }
}

impl LoadedDiagnostics {
    pub fn new(diagnostics: Pointer, error: i32, error_string: String) -> Self {
        LoadedDiagnostics {
            diagnostics,
            error,
            error_string,
        }
    }
}

#[napi(object)]
pub struct DiagnosticOption {
    pub option: String,
    pub disable: String,
}

/// `clang_Cursor_isExternalSymbol` with its out parameters.
#[napi(object)]
pub struct ExternalSymbol {
    pub is_external: u32,
    pub language: String,
    pub defined_in: String,
    pub is_generated: u32,
}

#[napi(object)]
pub struct ResourceUsageEntry {
    pub kind: i32,
    pub name: String,
    pub amount: i64,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONVERSION FOR CALLBACK ARGUMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Materialises a class instance as a plain `JsObject` so it can be passed
/// to a host function.
pub fn to_js_object<T: ToNapiValue>(env: &Env, value: T) -> napi::Result<JsObject> {
    unsafe {
        let raw = T::to_napi_value(env.raw(), value)?;
        JsObject::from_raw(env.raw(), raw)
    }
}
