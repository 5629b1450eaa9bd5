//! Lexical tokens
//!
//! Token arrays produced by libclang are copied into `CXToken` values and the
//! native array is released before returning, so the host never holds a
//! token-set handle.

use napi::bindgen_prelude::ClassInstance;
use napi_derive::napi;

use clang_sys::{
    clang_annotateTokens, clang_disposeTokens, clang_getNullCursor, clang_getToken,
    clang_getTokenExtent, clang_getTokenKind, clang_getTokenLocation, clang_getTokenSpelling,
    clang_tokenize, CXToken, CXTranslationUnit,
};
use std::os::raw::c_uint;
use std::ptr;

use super::values::{Cursor, SourceLocation, SourceRange, Token};
use super::{ready, Pointer};
use crate::arrays::copy_and_dispose;
use crate::strings::into_string;

fn release_tokens(tu: CXTranslationUnit, count: usize) -> impl FnOnce(*mut CXToken) {
    move |tokens| unsafe { clang_disposeTokens(tu, tokens, count as _) }
}

/// The token starting at `location`, or null when there is none.
#[napi(js_name = "clang_getToken")]
pub fn get_token(tu: &Pointer, location: &SourceLocation) -> napi::Result<Option<Token>> {
    ready()?;
    let tu: CXTranslationUnit = tu.raw();
    let token = unsafe { clang_getToken(tu, location.raw) };
    let copied = copy_and_dispose(token, 1, release_tokens(tu, 1));
    Ok(copied.into_iter().next().map(Token::from))
}

/// A `CXTokenKind` value.
#[napi(js_name = "clang_getTokenKind")]
pub fn get_token_kind(token: &Token) -> napi::Result<i32> {
    ready()?;
    Ok(unsafe { clang_getTokenKind(token.raw) } as i32)
}

#[napi(js_name = "clang_getTokenSpelling")]
pub fn get_token_spelling(tu: &Pointer, token: &Token) -> napi::Result<String> {
    ready()?;
    Ok(into_string(unsafe {
        clang_getTokenSpelling(tu.raw(), token.raw)
    }))
}

#[napi(js_name = "clang_getTokenLocation")]
pub fn get_token_location(tu: &Pointer, token: &Token) -> napi::Result<SourceLocation> {
    ready()?;
    Ok(SourceLocation::from(unsafe {
        clang_getTokenLocation(tu.raw(), token.raw)
    }))
}

#[napi(js_name = "clang_getTokenExtent")]
pub fn get_token_extent(tu: &Pointer, token: &Token) -> napi::Result<SourceRange> {
    ready()?;
    Ok(SourceRange::from(unsafe {
        clang_getTokenExtent(tu.raw(), token.raw)
    }))
}

/// Every token inside `range`, in source order.
#[napi(js_name = "clang_tokenize")]
pub fn tokenize(tu: &Pointer, range: &SourceRange) -> napi::Result<Vec<Token>> {
    ready()?;
    let tu: CXTranslationUnit = tu.raw();
    let mut tokens: *mut CXToken = ptr::null_mut();
    let mut count: c_uint = 0;
    unsafe { clang_tokenize(tu, range.raw, &mut tokens, &mut count) };
    let copied = copy_and_dispose(tokens, count as usize, release_tokens(tu, count as usize));
    Ok(copied.into_iter().map(Token::from).collect())
}

/// The cursor each token belongs to, index for index.
#[napi(js_name = "clang_annotateTokens")]
pub fn annotate_tokens(
    tu: &Pointer,
    tokens: Vec<ClassInstance<Token>>,
) -> napi::Result<Vec<Cursor>> {
    ready()?;
    let mut raw_tokens: Vec<CXToken> = tokens.iter().map(|token| token.raw).collect();
    if raw_tokens.is_empty() {
        return Ok(Vec::new());
    }
    let mut cursors = vec![unsafe { clang_getNullCursor() }; raw_tokens.len()];
    unsafe {
        clang_annotateTokens(
            tu.raw(),
            raw_tokens.as_mut_ptr(),
            raw_tokens.len() as _,
            cursors.as_mut_ptr(),
        )
    };
    Ok(cursors.into_iter().map(Cursor::from).collect())
}
