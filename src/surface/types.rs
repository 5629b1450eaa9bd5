//! Type operations
//!
//! Layout queries (`clang_Type_getSizeOf`, `clang_Type_getAlignOf`, ...)
//! return a negative `CXTypeLayoutError` value on failure.

use napi::bindgen_prelude::BigInt;
use napi_derive::napi;

use clang_sys::*;

use super::ready;
use super::values::{Cursor, Type};
use crate::strings::{into_string, to_c_string};

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES OF CURSORS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getCursorType")]
pub fn get_cursor_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getCursorType(cursor.raw) }))
}

#[napi(js_name = "clang_getTypedefDeclUnderlyingType")]
pub fn get_typedef_decl_underlying_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getTypedefDeclUnderlyingType(cursor.raw) }))
}

#[napi(js_name = "clang_getEnumDeclIntegerType")]
pub fn get_enum_decl_integer_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getEnumDeclIntegerType(cursor.raw) }))
}

/// `LLONG_MIN` when `cursor` is not an enum constant.
#[napi(js_name = "clang_getEnumConstantDeclValue")]
pub fn get_enum_constant_decl_value(cursor: &Cursor) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_getEnumConstantDeclValue(cursor.raw) } as i64)
}

/// Returned as a BigInt; values above 2^53 do not fit a host number.
#[napi(js_name = "clang_getEnumConstantDeclUnsignedValue")]
pub fn get_enum_constant_decl_unsigned_value(cursor: &Cursor) -> napi::Result<BigInt> {
    ready()?;
    let value = unsafe { clang_getEnumConstantDeclUnsignedValue(cursor.raw) };
    Ok(BigInt::from(value as u64))
}

#[napi(js_name = "clang_getFieldDeclBitWidth")]
pub fn get_field_decl_bit_width(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getFieldDeclBitWidth(cursor.raw) } as i32)
}

#[napi(js_name = "clang_Cursor_isBitField")]
pub fn cursor_is_bit_field(cursor: &Cursor) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Cursor_isBitField(cursor.raw) } as u32)
}

#[napi(js_name = "clang_getCursorResultType")]
pub fn get_cursor_result_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getCursorResultType(cursor.raw) }))
}

#[napi(js_name = "clang_getCursorExceptionSpecificationType")]
pub fn get_cursor_exception_specification_type(cursor: &Cursor) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getCursorExceptionSpecificationType(cursor.raw) } as i32)
}

#[napi(js_name = "clang_getIBOutletCollectionType")]
pub fn get_ib_outlet_collection_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getIBOutletCollectionType(cursor.raw) }))
}

#[napi(js_name = "clang_Cursor_getReceiverType")]
pub fn cursor_get_receiver_type(cursor: &Cursor) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Cursor_getReceiverType(cursor.raw) }))
}

#[napi(js_name = "clang_getDeclObjCTypeEncoding")]
pub fn get_decl_objc_type_encoding(cursor: &Cursor) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getDeclObjCTypeEncoding(cursor.raw) }))
}

/// Offset in bits of a field declaration.
#[napi(js_name = "clang_Cursor_getOffsetOfField")]
pub fn cursor_get_offset_of_field(cursor: &Cursor) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_Cursor_getOffsetOfField(cursor.raw) } as i64)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TYPE QUERIES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getTypeSpelling")]
pub fn get_type_spelling(ty: &Type) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getTypeSpelling(ty.raw) }))
}

#[napi(js_name = "clang_getTypeKindSpelling")]
pub fn get_type_kind_spelling(kind: i32) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getTypeKindSpelling(kind as _) }))
}

#[napi(js_name = "clang_equalTypes")]
pub fn equal_types(a: &Type, b: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_equalTypes(a.raw, b.raw) } as u32)
}

#[napi(js_name = "clang_getCanonicalType")]
pub fn get_canonical_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getCanonicalType(ty.raw) }))
}

#[napi(js_name = "clang_isConstQualifiedType")]
pub fn is_const_qualified_type(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isConstQualifiedType(ty.raw) } as u32)
}

#[napi(js_name = "clang_isVolatileQualifiedType")]
pub fn is_volatile_qualified_type(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isVolatileQualifiedType(ty.raw) } as u32)
}

#[napi(js_name = "clang_isRestrictQualifiedType")]
pub fn is_restrict_qualified_type(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isRestrictQualifiedType(ty.raw) } as u32)
}

#[napi(js_name = "clang_getAddressSpace")]
pub fn get_address_space(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_getAddressSpace(ty.raw) } as u32)
}

#[napi(js_name = "clang_getTypedefName")]
pub fn get_typedef_name(ty: &Type) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_getTypedefName(ty.raw) }))
}

#[napi(js_name = "clang_getPointeeType")]
pub fn get_pointee_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getPointeeType(ty.raw) }))
}

#[napi(js_name = "clang_getTypeDeclaration")]
pub fn get_type_declaration(ty: &Type) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe { clang_getTypeDeclaration(ty.raw) }))
}

#[napi(js_name = "clang_Type_getObjCEncoding")]
pub fn type_get_objc_encoding(ty: &Type) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe { clang_Type_getObjCEncoding(ty.raw) }))
}

#[napi(js_name = "clang_isPODType")]
pub fn is_pod_type(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isPODType(ty.raw) } as u32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// FUNCTION TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getFunctionTypeCallingConv")]
pub fn get_function_type_calling_conv(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getFunctionTypeCallingConv(ty.raw) } as i32)
}

#[napi(js_name = "clang_getResultType")]
pub fn get_result_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getResultType(ty.raw) }))
}

#[napi(js_name = "clang_getExceptionSpecificationType")]
pub fn get_exception_specification_type(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getExceptionSpecificationType(ty.raw) } as i32)
}

/// -1 when `ty` is not a function type.
#[napi(js_name = "clang_getNumArgTypes")]
pub fn get_num_arg_types(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getNumArgTypes(ty.raw) } as i32)
}

#[napi(js_name = "clang_getArgType")]
pub fn get_arg_type(ty: &Type, index: u32) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getArgType(ty.raw, index as _) }))
}

#[napi(js_name = "clang_isFunctionTypeVariadic")]
pub fn is_function_type_variadic(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_isFunctionTypeVariadic(ty.raw) } as u32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// OBJECTIVE-C TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Type_getObjCObjectBaseType")]
pub fn type_get_objc_object_base_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getObjCObjectBaseType(ty.raw) }))
}

#[napi(js_name = "clang_Type_getNumObjCProtocolRefs")]
pub fn type_get_num_objc_protocol_refs(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Type_getNumObjCProtocolRefs(ty.raw) } as u32)
}

#[napi(js_name = "clang_Type_getObjCProtocolDecl")]
pub fn type_get_objc_protocol_decl(ty: &Type, index: u32) -> napi::Result<Cursor> {
    ready()?;
    Ok(Cursor::from(unsafe {
        clang_Type_getObjCProtocolDecl(ty.raw, index as _)
    }))
}

#[napi(js_name = "clang_Type_getNumObjCTypeArgs")]
pub fn type_get_num_objc_type_args(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Type_getNumObjCTypeArgs(ty.raw) } as u32)
}

#[napi(js_name = "clang_Type_getObjCTypeArg")]
pub fn type_get_objc_type_arg(ty: &Type, index: u32) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getObjCTypeArg(ty.raw, index as _) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// ARRAYS AND VECTORS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_getElementType")]
pub fn get_element_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getElementType(ty.raw) }))
}

#[napi(js_name = "clang_getNumElements")]
pub fn get_num_elements(ty: &Type) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_getNumElements(ty.raw) } as i64)
}

#[napi(js_name = "clang_getArrayElementType")]
pub fn get_array_element_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_getArrayElementType(ty.raw) }))
}

#[napi(js_name = "clang_getArraySize")]
pub fn get_array_size(ty: &Type) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_getArraySize(ty.raw) } as i64)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SUGAR, NULLABILITY, LAYOUT
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Type_getNamedType")]
pub fn type_get_named_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getNamedType(ty.raw) }))
}

#[napi(js_name = "clang_Type_isTransparentTagTypedef")]
pub fn type_is_transparent_tag_typedef(ty: &Type) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_Type_isTransparentTagTypedef(ty.raw) } as u32)
}

#[napi(js_name = "clang_Type_getNullability")]
pub fn type_get_nullability(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Type_getNullability(ty.raw) } as i32)
}

#[napi(js_name = "clang_Type_getAlignOf")]
pub fn type_get_align_of(ty: &Type) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_Type_getAlignOf(ty.raw) } as i64)
}

#[napi(js_name = "clang_Type_getClassType")]
pub fn type_get_class_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getClassType(ty.raw) }))
}

#[napi(js_name = "clang_Type_getSizeOf")]
pub fn type_get_size_of(ty: &Type) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_Type_getSizeOf(ty.raw) } as i64)
}

/// Offset in bits of field `field_name` within record type `ty`.
#[napi(js_name = "clang_Type_getOffsetOf")]
pub fn type_get_offset_of(ty: &Type, field_name: String) -> napi::Result<i64> {
    ready()?;
    let field_name = to_c_string("field name", &field_name)?;
    Ok(unsafe { clang_Type_getOffsetOf(ty.raw, field_name.as_ptr()) } as i64)
}

#[napi(js_name = "clang_Type_getModifiedType")]
pub fn type_get_modified_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getModifiedType(ty.raw) }))
}

#[napi(js_name = "clang_Type_getValueType")]
pub fn type_get_value_type(ty: &Type) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe { clang_Type_getValueType(ty.raw) }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEMPLATES AND REFERENCES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_Type_getNumTemplateArguments")]
pub fn type_get_num_template_arguments(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Type_getNumTemplateArguments(ty.raw) } as i32)
}

#[napi(js_name = "clang_Type_getTemplateArgumentAsType")]
pub fn type_get_template_argument_as_type(ty: &Type, index: u32) -> napi::Result<Type> {
    ready()?;
    Ok(Type::from(unsafe {
        clang_Type_getTemplateArgumentAsType(ty.raw, index as _)
    }))
}

#[napi(js_name = "clang_Type_getCXXRefQualifier")]
pub fn type_get_cxx_ref_qualifier(ty: &Type) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_Type_getCXXRefQualifier(ty.raw) } as i32)
}
