//! Printing policies, pretty printing and USR construction

use napi_derive::napi;

use clang_sys::{
    clang_PrintingPolicy_dispose, clang_PrintingPolicy_getProperty,
    clang_PrintingPolicy_setProperty, clang_constructUSR_ObjCCategory,
    clang_constructUSR_ObjCClass, clang_constructUSR_ObjCProtocol, clang_getCursorPrettyPrinted,
    clang_getCursorPrintingPolicy,
};

use super::values::Cursor;
use super::{ready, Pointer};
use crate::strings::{into_string, to_c_string};

// ═══════════════════════════════════════════════════════════════════════════════
// PRINTING POLICY
// ═══════════════════════════════════════════════════════════════════════════════

/// Default policy for `cursor`. Dispose with `clang_PrintingPolicy_dispose`.
#[napi(js_name = "clang_getCursorPrintingPolicy")]
pub fn get_cursor_printing_policy(cursor: &Cursor) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe {
        clang_getCursorPrintingPolicy(cursor.raw)
    }))
}

#[napi(js_name = "clang_PrintingPolicy_dispose")]
pub fn printing_policy_dispose(policy: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_PrintingPolicy_dispose(policy.raw()) };
    log::debug!("[libclang-native] disposed printing policy");
    Ok(())
}

/// `property` is a `CXPrintingPolicyProperty` value.
#[napi(js_name = "clang_PrintingPolicy_getProperty")]
pub fn printing_policy_get_property(policy: &Pointer, property: i32) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_PrintingPolicy_getProperty(policy.raw(), property as _) } as u32)
}

#[napi(js_name = "clang_PrintingPolicy_setProperty")]
pub fn printing_policy_set_property(
    policy: &Pointer,
    property: i32,
    value: u32,
) -> napi::Result<()> {
    ready()?;
    unsafe { clang_PrintingPolicy_setProperty(policy.raw(), property as _, value as _) };
    Ok(())
}

/// A null policy prints with the cursor's default policy.
#[napi(js_name = "clang_getCursorPrettyPrinted")]
pub fn get_cursor_pretty_printed(cursor: &Cursor, policy: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_getCursorPrettyPrinted(cursor.raw, policy.raw())
    }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// USR CONSTRUCTION
// ═══════════════════════════════════════════════════════════════════════════════

#[napi(js_name = "clang_constructUSR_ObjCClass")]
pub fn construct_usr_objc_class(class_name: String) -> napi::Result<String> {
    ready()?;
    let class_name = to_c_string("class name", &class_name)?;
    Ok(into_string(unsafe {
        clang_constructUSR_ObjCClass(class_name.as_ptr())
    }))
}

#[napi(js_name = "clang_constructUSR_ObjCCategory")]
pub fn construct_usr_objc_category(
    class_name: String,
    category_name: String,
) -> napi::Result<String> {
    ready()?;
    let class_name = to_c_string("class name", &class_name)?;
    let category_name = to_c_string("category name", &category_name)?;
    Ok(into_string(unsafe {
        clang_constructUSR_ObjCCategory(class_name.as_ptr(), category_name.as_ptr())
    }))
}

#[napi(js_name = "clang_constructUSR_ObjCProtocol")]
pub fn construct_usr_objc_protocol(protocol_name: String) -> napi::Result<String> {
    ready()?;
    let protocol_name = to_c_string("protocol name", &protocol_name)?;
    Ok(into_string(unsafe {
        clang_constructUSR_ObjCProtocol(protocol_name.as_ptr())
    }))
}
