//! Cursor operations
//!
//! Cursors are plain values (`CXCursor` instances) with no disposal step.
//! Cursor sets and the overridden-cursor array are the only allocations here.

use napi_derive::napi;

use clang_sys::*;
use std::os::raw::c_uint;
use std::ptr;

use super::values::{Cursor, ExternalSymbol, SourceLocation, SourceRange};
use super::{ready, Pointer};
use crate::arrays::copy_and_dispose;
use crate::strings::{into_string, string_set_into_vec};

// ═══════════════════════════════════════════════════════════════════════════════
// IDENTITY
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getNullCursor")]
pub fn get_null_cursor() -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::null())
}

#[napi(js_name = "clang_getTranslationUnitCursor")]
pub fn get_translation_unit_cursor(tu: &Pointer) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getTranslationUnitCursor(tu.raw()) }))
}

#[napi(js_name = "clang_equalCursors")]
pub fn equal_cursors(a: &Cursor, b: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_equalCursors(a.raw, b.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isNull")]
pub fn cursor_is_null(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isNull(cursor.raw) } as i32)
}

#[napi(js_name = "clang_hashCursor")]
pub fn hash_cursor(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_hashCursor(cursor.raw) } as u32)
}

#[napi(js_name = "clang_getCursorKind")]
pub fn get_cursor_kind(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorKind(cursor.raw) } as i32)
}

/// Cursor under a source location; the null cursor when there is none.
#[napi(js_name = "clang_getCursor")]
pub fn get_cursor(tu: &Pointer, location: &SourceLocation) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCursor(tu.raw(), location.raw) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// KIND PREDICATES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_isDeclaration")]
pub fn is_declaration(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isDeclaration(kind as _) } as u32)
}

#[napi(js_name = "clang_isInvalidDeclaration")]
pub fn is_invalid_declaration(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isInvalidDeclaration(cursor.raw) } as u32)
}

#[napi(js_name = "clang_isReference")]
pub fn is_reference(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isReference(kind as _) } as u32)
}

#[napi(js_name = "clang_isExpression")]
pub fn is_expression(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isExpression(kind as _) } as u32)
}

#[napi(js_name = "clang_isStatement")]
pub fn is_statement(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isStatement(kind as _) } as u32)
}

#[napi(js_name = "clang_isAttribute")]
pub fn is_attribute(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isAttribute(kind as _) } as u32)
}

#[napi(js_name = "clang_Cursor_hasAttrs")]
pub fn cursor_has_attrs(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_hasAttrs(cursor.raw) } as u32)
}

#[napi(js_name = "clang_isInvalid")]
pub fn is_invalid(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isInvalid(kind as _) } as u32)
}

#[napi(js_name = "clang_isTranslationUnit")]
pub fn is_translation_unit(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isTranslationUnit(kind as _) } as u32)
}

#[napi(js_name = "clang_isPreprocessing")]
pub fn is_preprocessing(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isPreprocessing(kind as _) } as u32)
}

#[napi(js_name = "clang_isUnexposed")]
pub fn is_unexposed(kind: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isUnexposed(kind as _) } as u32)
}

#[napi(js_name = "clang_getCursorKindSpelling")]
pub fn get_cursor_kind_spelling(kind: i32) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getCursorKindSpelling(kind as _) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getCursorLinkage")]
pub fn get_cursor_linkage(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorLinkage(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getCursorVisibility")]
pub fn get_cursor_visibility(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorVisibility(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getCursorAvailability")]
pub fn get_cursor_availability(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorAvailability(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_getVarDeclInitializer")]
pub fn cursor_get_var_decl_initializer(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_Cursor_getVarDeclInitializer(cursor.raw) }))
}

/// 1 for global storage, 0 for local, -1 when `cursor` is not a variable.
#[napi(js_name = "clang_Cursor_hasVarDeclGlobalStorage")]
pub fn cursor_has_var_decl_global_storage(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_hasVarDeclGlobalStorage(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_hasVarDeclExternalStorage")]
pub fn cursor_has_var_decl_external_storage(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_hasVarDeclExternalStorage(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getCursorLanguage")]
pub fn get_cursor_language(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorLanguage(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getCursorTLSKind")]
pub fn get_cursor_tls_kind(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorTLSKind(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_getTranslationUnit")]
pub fn cursor_get_translation_unit(cursor: &Cursor) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_Cursor_getTranslationUnit(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorSemanticParent")]
pub fn get_cursor_semantic_parent(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCursorSemanticParent(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorLexicalParent")]
pub fn get_cursor_lexical_parent(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCursorLexicalParent(cursor.raw) }))
}

/// Methods overridden by `cursor`. The native array is copied and released.
#[napi(js_name = "clang_getOverriddenCursors")]
pub fn get_overridden_cursors(cursor: &Cursor) -> napi::Result<Vec<Cursor>> {
    ready()?;
    let mut overridden: *mut CXCursor = ptr::null_mut();
    let mut count: c_uint = 0;
    unsafe { clang_getOverriddenCursors(cursor.raw, &mut overridden, &mut count) };
    let copied = copy_and_dispose(overridden, count as usize, |ptr| unsafe {
        clang_disposeOverriddenCursors(ptr)
    });
    Ok(copied.into_iter().map(Cursor::from).collect())
}

#[napi(js_name = "clang_getIncludedFile")]
pub fn get_included_file(cursor: &Cursor) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_getIncludedFile(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorLocation")]
pub fn get_cursor_location(cursor: &Cursor) -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::from(unsafe { clang_getCursorLocation(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorExtent")]
pub fn get_cursor_extent(cursor: &Cursor) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe { clang_getCursorExtent(cursor.raw) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAMES AND REFERENCES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getCursorUSR")]
pub fn get_cursor_usr(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getCursorUSR(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorSpelling")]
pub fn get_cursor_spelling(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getCursorSpelling(cursor.raw) }))
}

#[napi(js_name = "clang_Cursor_getSpellingNameRange")]
pub fn cursor_get_spelling_name_range(
    cursor: &Cursor,
    piece_index: u32,
    options: u32,
) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe {
        clang_Cursor_getSpellingNameRange(cursor.raw, piece_index as _, options as _)
    }))
}

#[napi(js_name = "clang_getCursorDisplayName")]
pub fn get_cursor_display_name(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getCursorDisplayName(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorReferenced")]
pub fn get_cursor_referenced(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCursorReferenced(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorDefinition")]
pub fn get_cursor_definition(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCursorDefinition(cursor.raw) }))
}

#[napi(js_name = "clang_isCursorDefinition")]
pub fn is_cursor_definition(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isCursorDefinition(cursor.raw) } as u32)
}

#[napi(js_name = "clang_getCanonicalCursor")]
pub fn get_canonical_cursor(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getCanonicalCursor(cursor.raw) }))
}

/// `name_flags` is a bitwise or of `CXNameRefFlags`.
#[napi(js_name = "clang_getCursorReferenceNameRange")]
pub fn get_cursor_reference_name_range(
    cursor: &Cursor,
    name_flags: u32,
    piece_index: u32,
) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe {
        clang_getCursorReferenceNameRange(cursor.raw, name_flags as _, piece_index as _)
    }))
}

#[napi(js_name = "clang_Cursor_getMangling")]
pub fn cursor_get_mangling(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Cursor_getMangling(cursor.raw) }))
}

/// Every mangled name (constructors and destructors have several).
#[napi(js_name = "clang_Cursor_getCXXManglings")]
pub fn cursor_get_cxx_manglings(cursor: &Cursor) -> napi::Result<Vec<String>> {
    ready()?;
    Ok(string_set_into_vec(unsafe {
        clang_Cursor_getCXXManglings(cursor.raw)
    }))
}

#[napi(js_name = "clang_Cursor_getObjCManglings")]
pub fn cursor_get_objc_manglings(cursor: &Cursor) -> napi::Result<Vec<String>> {
    ready()?;
    Ok(string_set_into_vec(unsafe {
        clang_Cursor_getObjCManglings(cursor.raw)
    }))
}

#[napi(js_name = "clang_Cursor_isExternalSymbol")]
pub fn cursor_is_external_symbol(cursor: &Cursor) -> napi::Result<ExternalSymbol> {
    ready()?;
    let mut language: CXString = unsafe { std::mem::zeroed() };
    let mut defined_in: CXString = unsafe { std::mem::zeroed() };
    let mut is_generated: c_uint = 0;
    let is_external = unsafe {
        clang_Cursor_isExternalSymbol(
            cursor.raw,
            &mut language,
            &mut defined_in,
            &mut is_generated,
        )
    };
    Ok(ExternalSymbol {
        is_external: is_external as u32,
        language: into_string(language),
        defined_in: into_string(defined_in),
        is_generated: is_generated as u32,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// MACROS AND FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Cursor_isMacroFunctionLike")]
pub fn cursor_is_macro_function_like(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isMacroFunctionLike(cursor.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isMacroBuiltin")]
pub fn cursor_is_macro_builtin(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isMacroBuiltin(cursor.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isFunctionInlined")]
pub fn cursor_is_function_inlined(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isFunctionInlined(cursor.raw) } as u32)
}

/// -1 when `cursor` is not a function or method.
#[napi(js_name = "clang_Cursor_getNumArguments")]
pub fn cursor_get_num_arguments(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getNumArguments(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_getArgument")]
pub fn cursor_get_argument(cursor: &Cursor, index: u32) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe {
        clang_Cursor_getArgument(cursor.raw, index as _)
    }))
}

#[napi(js_name = "clang_Cursor_isVariadic")]
pub fn cursor_is_variadic(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isVariadic(cursor.raw) } as u32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMMENTS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Cursor_getCommentRange")]
pub fn cursor_get_comment_range(cursor: &Cursor) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe { clang_Cursor_getCommentRange(cursor.raw) }))
}

#[napi(js_name = "clang_Cursor_getRawCommentText")]
pub fn cursor_get_raw_comment_text(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Cursor_getRawCommentText(cursor.raw) }))
}

#[napi(js_name = "clang_Cursor_getBriefCommentText")]
pub fn cursor_get_brief_comment_text(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Cursor_getBriefCommentText(cursor.raw) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// OBJECTIVE-C
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Cursor_getObjCSelectorIndex")]
pub fn cursor_get_objc_selector_index(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getObjCSelectorIndex(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_isDynamicCall")]
pub fn cursor_is_dynamic_call(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isDynamicCall(cursor.raw) } as i32)
}

/// Bitwise or of `CXObjCPropertyAttrKind`.
#[napi(js_name = "clang_Cursor_getObjCPropertyAttributes")]
pub fn cursor_get_objc_property_attributes(cursor: &Cursor, reserved: u32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getObjCPropertyAttributes(cursor.raw, reserved as _) } as u32)
}

#[napi(js_name = "clang_Cursor_getObjCPropertyGetterName")]
pub fn cursor_get_objc_property_getter_name(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_Cursor_getObjCPropertyGetterName(cursor.raw)
    }))
}

#[napi(js_name = "clang_Cursor_getObjCPropertySetterName")]
pub fn cursor_get_objc_property_setter_name(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_Cursor_getObjCPropertySetterName(cursor.raw)
    }))
}

/// Bitwise or of `CXObjCDeclQualifierKind`.
#[napi(js_name = "clang_Cursor_getObjCDeclQualifiers")]
pub fn cursor_get_objc_decl_qualifiers(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getObjCDeclQualifiers(cursor.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isObjCOptional")]
pub fn cursor_is_objc_optional(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isObjCOptional(cursor.raw) } as u32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// CURSOR SETS
// ═══════════════════════════════════════════════════════════════════════════════

/// Dispose with `clang_disposeCXCursorSet`.
#[napi(js_name = "clang_createCXCursorSet")]
pub fn create_cx_cursor_set() -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_createCXCursorSet() }))
}

#[napi(js_name = "clang_disposeCXCursorSet")]
pub fn dispose_cx_cursor_set(set: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_disposeCXCursorSet(set.raw()) };
    Ok(())
}

#[napi(js_name = "clang_CXCursorSet_contains")]
pub fn cx_cursor_set_contains(set: &Pointer, cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXCursorSet_contains(set.raw(), cursor.raw) } as u32)
}

/// Non-zero when the cursor was not already present.
#[napi(js_name = "clang_CXCursorSet_insert")]
pub fn cx_cursor_set_insert(set: &Pointer, cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXCursorSet_insert(set.raw(), cursor.raw) } as u32)
}
