//! Constant evaluation

use napi::bindgen_prelude::BigInt;
use napi_derive::napi;

use clang_sys::{
    clang_Cursor_Evaluate, clang_EvalResult_dispose, clang_EvalResult_getAsDouble,
    clang_EvalResult_getAsInt, clang_EvalResult_getAsLongLong, clang_EvalResult_getAsStr,
    clang_EvalResult_getAsUnsigned, clang_EvalResult_getKind, clang_EvalResult_isUnsignedInt,
};

use super::values::Cursor;
use super::{ready, Pointer};
use crate::strings::borrowed_str;

/// Null when `cursor` cannot be evaluated. Dispose with
/// `clang_EvalResult_dispose`.
#[napi(js_name = "clang_Cursor_Evaluate")]
pub fn cursor_evaluate(cursor: &Cursor) -> napi::Result<Pointer> {
    ready()?;
    Ok(Pointer::new(unsafe { clang_Cursor_Evaluate(cursor.raw) }))
}

/// A `CXEvalResultKind` value.
#[napi(js_name = "clang_EvalResult_getKind")]
pub fn eval_result_get_kind(result: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_EvalResult_getKind(result.raw()) } as i32)
}

#[napi(js_name = "clang_EvalResult_getAsInt")]
pub fn eval_result_get_as_int(result: &Pointer) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_EvalResult_getAsInt(result.raw()) } as i32)
}

#[napi(js_name = "clang_EvalResult_getAsLongLong")]
pub fn eval_result_get_as_long_long(result: &Pointer) -> napi::Result<i64> {
    ready()?;
    Ok(unsafe { clang_EvalResult_getAsLongLong(result.raw()) } as i64)
}

#[napi(js_name = "clang_EvalResult_isUnsignedInt")]
pub fn eval_result_is_unsigned_int(result: &Pointer) -> napi::Result<u32> {
    ready()?;
    Ok(unsafe { clang_EvalResult_isUnsignedInt(result.raw()) } as u32)
}

#[napi(js_name = "clang_EvalResult_getAsUnsigned")]
pub fn eval_result_get_as_unsigned(result: &Pointer) -> napi::Result<BigInt> {
    ready()?;
    let value = unsafe { clang_EvalResult_getAsUnsigned(result.raw()) };
    Ok(BigInt::from(value as u64))
}

#[napi(js_name = "clang_EvalResult_getAsDouble")]
pub fn eval_result_get_as_double(result: &Pointer) -> napi::Result<f64> {
    ready()?;
    Ok(unsafe { clang_EvalResult_getAsDouble(result.raw()) })
}

/// String results stay owned by the evaluation result; the text is copied
/// before returning.
#[napi(js_name = "clang_EvalResult_getAsStr")]
pub fn eval_result_get_as_str(result: &Pointer) -> napi::Result<String> {
    ready()?;
    Ok(borrowed_str(unsafe { clang_EvalResult_getAsStr(result.raw()) }))
}

#[napi(js_name = "clang_EvalResult_dispose")]
pub fn eval_result_dispose(result: &Pointer) -> napi::Result<()> {
    ready()?;
    unsafe { clang_EvalResult_dispose(result.raw()) };
    log::debug!("[libclang-native] disposed evaluation result");
    Ok(())
}
