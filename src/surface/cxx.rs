//! C++ declaration queries

use napi::bindgen_prelude::BigInt;
use napi_derive::napi;

use clang_sys::*;

use super::ready;
use super::values::{Cursor, Type};

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTRUCTORS, FIELDS, METHODS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_CXXConstructor_isConvertingConstructor")]
pub fn cxx_constructor_is_converting_constructor(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXConstructor_isConvertingConstructor(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXConstructor_isCopyConstructor")]
pub fn cxx_constructor_is_copy_constructor(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXConstructor_isCopyConstructor(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXConstructor_isDefaultConstructor")]
pub fn cxx_constructor_is_default_constructor(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXConstructor_isDefaultConstructor(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXConstructor_isMoveConstructor")]
pub fn cxx_constructor_is_move_constructor(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXConstructor_isMoveConstructor(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXField_isMutable")]
pub fn cxx_field_is_mutable(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXField_isMutable(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXMethod_isDefaulted")]
pub fn cxx_method_is_defaulted(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXMethod_isDefaulted(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXMethod_isPureVirtual")]
pub fn cxx_method_is_pure_virtual(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXMethod_isPureVirtual(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXMethod_isStatic")]
pub fn cxx_method_is_static(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXMethod_isStatic(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXMethod_isVirtual")]
pub fn cxx_method_is_virtual(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXMethod_isVirtual(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXMethod_isConst")]
pub fn cxx_method_is_const(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXMethod_isConst(cursor.raw) } as u32)
}

#[napi(js_name = "clang_CXXRecord_isAbstract")]
pub fn cxx_record_is_abstract(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_CXXRecord_isAbstract(cursor.raw) } as u32)
}

#[napi(js_name = "clang_EnumDecl_isScoped")]
pub fn enum_decl_is_scoped(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_EnumDecl_isScoped(cursor.raw) } as u32)
}

#[napi(js_name = "clang_isVirtualBase")]
pub fn is_virtual_base(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isVirtualBase(cursor.raw) } as u32)
}

#[napi(js_name = "clang_getCXXAccessSpecifier")]
pub fn get_cxx_access_specifier(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCXXAccessSpecifier(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_getStorageClass")]
pub fn cursor_get_storage_class(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getStorageClass(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_isAnonymous")]
pub fn cursor_is_anonymous(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isAnonymous(cursor.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isAnonymousRecordDecl")]
pub fn cursor_is_anonymous_record_decl(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isAnonymousRecordDecl(cursor.raw) } as u32)
}

#[napi(js_name = "clang_Cursor_isInlineNamespace")]
pub fn cursor_is_inline_namespace(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isInlineNamespace(cursor.raw) } as u32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// OVERLOADS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getNumOverloadedDecls")]
pub fn get_num_overloaded_decls(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getNumOverloadedDecls(cursor.raw) } as u32)
}

#[napi(js_name = "clang_getOverloadedDecl")]
pub fn get_overloaded_decl(cursor: &Cursor, index: u32) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe {
        clang_getOverloadedDecl(cursor.raw, index as _)
    }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEMPLATES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getTemplateCursorKind")]
pub fn get_template_cursor_kind(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getTemplateCursorKind(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getSpecializedCursorTemplate")]
pub fn get_specialized_cursor_template(cursor: &Cursor) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe {
        clang_getSpecializedCursorTemplate(cursor.raw)
    }))
}

/// -1 unless `cursor` is a function or class template specialization.
#[napi(js_name = "clang_Cursor_getNumTemplateArguments")]
pub fn cursor_get_num_template_arguments(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getNumTemplateArguments(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_getTemplateArgumentKind")]
pub fn cursor_get_template_argument_kind(cursor: &Cursor, index: u32) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Cursor_getTemplateArgumentKind(cursor.raw, index as _) } as i32)
}

#[napi(js_name = "clang_Cursor_getTemplateArgumentType")]
pub fn cursor_get_template_argument_type(cursor: &Cursor, index: u32) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe {
        clang_Cursor_getTemplateArgumentType(cursor.raw, index as _)
    }))
}

#[napi(js_name = "clang_Cursor_getTemplateArgumentValue")]
pub fn cursor_get_template_argument_value(cursor: &Cursor, index: u32) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_Cursor_getTemplateArgumentValue(cursor.raw, index as _) } as i64)
}

#[napi(js_name = "clang_Cursor_getTemplateArgumentUnsignedValue")]
pub fn cursor_get_template_argument_unsigned_value(
    cursor: &Cursor,
    index: u32,
) -> napi::Result<BigInt> {
    ready()?;
    let value = unsafe { clang_Cursor_getTemplateArgumentUnsignedValue(cursor.raw, index as _) };
    Ok(BigInt::from(value as u64))
}
