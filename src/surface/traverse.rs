//! Host visitors
//!
//! A host function is driven through the same trampolines as Rust closures.
//! The visitor must answer with a directive number. When it throws or answers
//! anything else, the traversal is stopped with Break and the first failure
//! is returned to the caller once libclang has unwound.
//!
//! Every callback runs in its own handle scope, so the values created for one
//! node are collectable as soon as the visitor returns.

use napi::{Env, JsFunction, JsNumber, JsUnknown, ValueType};
use napi_derive::napi;

use clang_sys::CXTranslationUnit;

use super::values::{to_js_object, Cursor, SourceLocation, Type};
use super::{ready, Pointer};
use crate::error::BridgeError;
use crate::visitor::{self, directive_number, ChildVisit, FieldVisit};

/// Reads a directive number from a visitor's return value.
fn directive_from(value: JsUnknown) -> napi::Result<i64> {
    let kind = value.get_type()?;
    if kind != ValueType::Number {
        let reason = format!("returned {:?}, expected a number", kind);
        return Err(BridgeError::VisitorFailed(reason).into());
    }
    let number = unsafe { value.cast::<JsNumber>() }.get_double()?;
    Ok(directive_number(number)?)
}

/// First failure seen during a traversal.
#[derive(Default)]
struct Failure(Option<napi::Error>);

impl Failure {
    fn record(&mut self, err: napi::Error) {
        if self.0.is_none() {
            log::warn!("[libclang-native] visitor aborted traversal: {}", err.reason);
            self.0 = Some(err);
        }
    }

    fn is_set(&self) -> bool {
        self.0.is_some()
    }

    fn into_result<T>(self, value: T) -> napi::Result<T> {
        match self.0 {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

/// Walks `parent`'s descendants, calling `visitor(cursor, parent)` for each.
/// How far the walk got is observable only through the visitor itself.
#[napi(js_name = "clang_visitChildren")]
pub fn visit_children(env: Env, parent: &Cursor, visitor: JsFunction) -> napi::Result<()> {
    ready()?;
    let mut failure = Failure::default();
    visitor::visit_children(parent.raw, |cursor, parent| {
        let call = || -> napi::Result<ChildVisit> {
            let args = [
                to_js_object(&env, Cursor::from(cursor))?,
                to_js_object(&env, Cursor::from(parent))?,
            ];
            let answer = directive_from(visitor.call(None, &args)?)?;
            Ok(ChildVisit::from_raw(answer)?)
        };
        match env.run_in_scope(call) {
            Ok(directive) => directive,
            Err(err) => {
                failure.record(err);
                ChildVisit::Break
            }
        }
    });
    failure.into_result(())
}

/// Calls `visitor(cursor)` for each field of a record type. Returns non-zero
/// when stopped by Break.
#[napi(js_name = "clang_Type_visitFields")]
pub fn type_visit_fields(env: Env, record: &Type, visitor: JsFunction) -> napi::Result<u32> {
    ready()?;
    let mut failure = Failure::default();
    let broke = visitor::visit_fields(record.raw, |field| {
        let call = || -> napi::Result<FieldVisit> {
            let args = [to_js_object(&env, Cursor::from(field))?];
            let answer = directive_from(visitor.call(None, &args)?)?;
            Ok(FieldVisit::from_raw(answer)?)
        };
        match env.run_in_scope(call) {
            Ok(directive) => directive,
            Err(err) => {
                failure.record(err);
                FieldVisit::Break
            }
        }
    });
    failure.into_result(broke as u32)
}

/// Calls `visitor(file, inclusionStack, depth)` once per included file. The
/// walk cannot be stopped early; after a failure the remaining files are
/// skipped without calling back into the host.
#[napi(js_name = "clang_getInclusions")]
pub fn get_inclusions(env: Env, tu: &Pointer, visitor: JsFunction) -> napi::Result<()> {
    ready()?;
    let tu: CXTranslationUnit = tu.raw();
    let mut failure = Failure::default();
    visitor::visit_inclusions(tu, |file, stack| {
        if failure.is_set() {
            return;
        }
        let call = || -> napi::Result<()> {
            let mut locations = env.create_array_with_length(stack.len())?;
            for (i, location) in stack.iter().enumerate() {
                let location = to_js_object(&env, SourceLocation::from(*location))?;
                locations.set_element(i as u32, location)?;
            }
            let args: [JsUnknown; 3] = [
                to_js_object(&env, Pointer::new(file))?.into_unknown(),
                locations.into_unknown(),
                env.create_uint32(stack.len() as u32)?.into_unknown(),
            ];
            visitor.call(None, &args)?;
            Ok(())
        };
        if let Err(err) = env.run_in_scope(call) {
            failure.record(err);
        }
    });
    failure.into_result(())
}
