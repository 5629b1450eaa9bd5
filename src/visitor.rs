//! Visitor Trampoline for the libclang bridge
//!
//! libclang traverses with a plain C function pointer plus an opaque
//! client-data word. A closure is carried through that word and invoked from
//! a monomorphised `extern "C"` trampoline, so each traversal gets its own
//! state and nested traversals from inside a visitor need no global table.
//!
//! A panic inside a visitor never unwinds through libclang: the trampoline
//! catches it, answers Break, and the panic is resumed once the native call
//! has returned.

use clang_sys::{
    clang_Type_visitFields, clang_getInclusions, clang_visitChildren, CXChildVisitResult,
    CXChildVisit_Break, CXChildVisit_Continue, CXChildVisit_Recurse, CXClientData, CXCursor,
    CXFile, CXSourceLocation, CXTranslationUnit, CXType, CXVisitorResult, CXVisit_Break,
    CXVisit_Continue,
};
use std::any::Any;
use std::os::raw::{c_uint, c_void};
use std::panic::{self, AssertUnwindSafe};

use crate::error::{BridgeError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// DIRECTIVES
// ═══════════════════════════════════════════════════════════════════════════════

/// What a child visitor tells libclang to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisit {
    /// Stop the whole traversal.
    Break,
    /// Move to the next sibling without descending.
    Continue,
    /// Descend into this cursor's children first.
    Recurse,
}

impl ChildVisit {
    pub fn to_raw(self) -> CXChildVisitResult {
        match self {
            ChildVisit::Break => CXChildVisit_Break,
            ChildVisit::Continue => CXChildVisit_Continue,
            ChildVisit::Recurse => CXChildVisit_Recurse,
        }
    }

    /// Maps a host-supplied number. Anything but 0, 1 or 2 is rejected.
    pub fn from_raw(value: i64) -> Result<Self> {
        match value {
            v if v == CXChildVisit_Break as i64 => Ok(ChildVisit::Break),
            v if v == CXChildVisit_Continue as i64 => Ok(ChildVisit::Continue),
            v if v == CXChildVisit_Recurse as i64 => Ok(ChildVisit::Recurse),
            other => Err(BridgeError::InvalidDirective(other.to_string())),
        }
    }
}

/// Integral value of a host number returned by a visitor. NaN, infinities,
/// fractions and values outside the `i64` range are not directives.
pub fn directive_number(number: f64) -> Result<i64> {
    if !number.is_finite() || number.fract() != 0.0 || number.abs() >= i64::MAX as f64 {
        return Err(BridgeError::InvalidDirective(number.to_string()));
    }
    Ok(number as i64)
}

/// Directive for field and inclusion-style visitors, which cannot recurse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisit {
    Break,
    Continue,
}

impl FieldVisit {
    pub fn to_raw(self) -> CXVisitorResult {
        match self {
            FieldVisit::Break => CXVisit_Break,
            FieldVisit::Continue => CXVisit_Continue,
        }
    }

    pub fn from_raw(value: i64) -> Result<Self> {
        match value {
            v if v == CXVisit_Break as i64 => Ok(FieldVisit::Break),
            v if v == CXVisit_Continue as i64 => Ok(FieldVisit::Continue),
            other => Err(BridgeError::InvalidDirective(other.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAMPOLINES
// ═══════════════════════════════════════════════════════════════════════════════

struct Traversal<F> {
    visitor: F,
    panic: Option<Box<dyn Any + Send>>,
}

impl<F> Traversal<F> {
    fn new(visitor: F) -> Self {
        Traversal {
            visitor,
            panic: None,
        }
    }

    fn as_client_data(&mut self) -> CXClientData {
        self as *mut Self as *mut c_void
    }

    fn finish(self) {
        if let Some(payload) = self.panic {
            panic::resume_unwind(payload);
        }
    }
}

extern "C" fn child_trampoline<F>(
    cursor: CXCursor,
    parent: CXCursor,
    data: CXClientData,
) -> CXChildVisitResult
where
    F: FnMut(CXCursor, CXCursor) -> ChildVisit,
{
    let state = unsafe { &mut *(data as *mut Traversal<F>) };
    if state.panic.is_some() {
        return CXChildVisit_Break;
    }
    match panic::catch_unwind(AssertUnwindSafe(|| (state.visitor)(cursor, parent))) {
        Ok(directive) => directive.to_raw(),
        Err(payload) => {
            state.panic = Some(payload);
            CXChildVisit_Break
        }
    }
}

extern "C" fn field_trampoline<F>(cursor: CXCursor, data: CXClientData) -> CXVisitorResult
where
    F: FnMut(CXCursor) -> FieldVisit,
{
    let state = unsafe { &mut *(data as *mut Traversal<F>) };
    if state.panic.is_some() {
        return CXVisit_Break;
    }
    match panic::catch_unwind(AssertUnwindSafe(|| (state.visitor)(cursor))) {
        Ok(directive) => directive.to_raw(),
        Err(payload) => {
            state.panic = Some(payload);
            CXVisit_Break
        }
    }
}

extern "C" fn inclusion_trampoline<F>(
    file: CXFile,
    stack: *mut CXSourceLocation,
    depth: c_uint,
    data: CXClientData,
) where
    F: FnMut(CXFile, &[CXSourceLocation]),
{
    let state = unsafe { &mut *(data as *mut Traversal<F>) };
    if state.panic.is_some() {
        return;
    }
    let stack = if stack.is_null() || depth == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(stack, depth as usize) }
    };
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (state.visitor)(file, stack))) {
        state.panic = Some(payload);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAVERSALS
// ═══════════════════════════════════════════════════════════════════════════════

/// Depth-first pre-order walk of `parent`'s descendants.
///
/// The visitor sees each child together with its own parent. Returns `true`
/// when the walk ended early because the visitor answered Break.
pub fn visit_children<F>(parent: CXCursor, visitor: F) -> bool
where
    F: FnMut(CXCursor, CXCursor) -> ChildVisit,
{
    let mut traversal = Traversal::new(visitor);
    let broke = unsafe {
        clang_visitChildren(
            parent,
            child_trampoline::<F>,
            traversal.as_client_data(),
        )
    } != 0;
    traversal.finish();
    broke
}

/// Direct children of `parent`, in source order.
pub fn children(parent: CXCursor) -> Vec<CXCursor> {
    let mut found = Vec::new();
    visit_children(parent, |cursor, _| {
        found.push(cursor);
        ChildVisit::Continue
    });
    found
}

/// Walks the fields of a record type. Returns `true` when stopped by Break.
pub fn visit_fields<F>(record: CXType, visitor: F) -> bool
where
    F: FnMut(CXCursor) -> FieldVisit,
{
    let mut traversal = Traversal::new(visitor);
    let broke = unsafe {
        clang_Type_visitFields(record, field_trampoline::<F>, traversal.as_client_data())
    } != 0;
    traversal.finish();
    broke
}

/// Calls `visitor` once per file included by the translation unit, with the
/// inclusion stack leading to it (innermost first).
pub fn visit_inclusions<F>(tu: CXTranslationUnit, visitor: F)
where
    F: FnMut(CXFile, &[CXSourceLocation]),
{
    let mut traversal = Traversal::new(visitor);
    unsafe { clang_getInclusions(tu, inclusion_trampoline::<F>, traversal.as_client_data()) };
    traversal.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn blank_cursor() -> CXCursor {
        unsafe { std::mem::zeroed() }
    }

    #[rstest]
    #[case(0, ChildVisit::Break)]
    #[case(1, ChildVisit::Continue)]
    #[case(2, ChildVisit::Recurse)]
    fn test_directive_from_number(#[case] raw: i64, #[case] expected: ChildVisit) {
        let directive = ChildVisit::from_raw(raw).unwrap();
        assert_eq!(directive, expected);
        assert_eq!(directive.to_raw() as i64, raw);
    }

    #[rstest]
    #[case(-1)]
    #[case(3)]
    #[case(i64::MAX)]
    fn test_directive_out_of_range(#[case] raw: i64) {
        assert!(matches!(
            ChildVisit::from_raw(raw),
            Err(BridgeError::InvalidDirective(_))
        ));
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 1)]
    #[case(2.0, 2)]
    #[case(-1.0, -1)]
    #[case(7.0, 7)]
    fn test_directive_number_accepts_integers(#[case] number: f64, #[case] expected: i64) {
        assert_eq!(directive_number(number).unwrap(), expected);
    }

    #[rstest]
    #[case(1.5)]
    #[case(-0.25)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(1e300)]
    fn test_directive_number_rejects_non_integers(#[case] number: f64) {
        assert!(matches!(
            directive_number(number),
            Err(BridgeError::InvalidDirective(_))
        ));
    }

    #[test]
    fn test_integral_number_still_needs_a_known_directive() {
        let value = directive_number(3.0).unwrap();
        assert!(ChildVisit::from_raw(value).is_err());
        assert!(FieldVisit::from_raw(value).is_err());
    }

    #[test]
    fn test_field_directive_values() {
        assert_eq!(FieldVisit::Break.to_raw() as i64, 0);
        assert_eq!(FieldVisit::Continue.to_raw() as i64, 1);
        assert_eq!(FieldVisit::from_raw(1).unwrap(), FieldVisit::Continue);
        // Fields cannot be recursed into.
        assert!(FieldVisit::from_raw(2).is_err());
    }

    #[test]
    fn test_trampoline_forwards_directive() {
        let mut calls = 0;
        let visitor = |_: CXCursor, _: CXCursor| {
            calls += 1;
            ChildVisit::Recurse
        };
        let mut traversal = Traversal::new(visitor);
        let data = traversal.as_client_data();
        let raw = child_trampoline_for(&traversal)(blank_cursor(), blank_cursor(), data);
        assert_eq!(raw, CXChildVisit_Recurse);
        drop(traversal);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_trampoline_turns_panic_into_break() {
        let visitor = |_: CXCursor, _: CXCursor| -> ChildVisit { panic!("visitor blew up") };
        let mut traversal = Traversal::new(visitor);
        let data = traversal.as_client_data();
        let tramp = child_trampoline_for(&traversal);

        assert_eq!(tramp(blank_cursor(), blank_cursor(), data), CXChildVisit_Break);
        assert!(traversal.panic.is_some());
        // Later callbacks short-circuit without re-entering the closure.
        assert_eq!(tramp(blank_cursor(), blank_cursor(), data), CXChildVisit_Break);

        let resumed = panic::catch_unwind(AssertUnwindSafe(|| traversal.finish()));
        assert!(resumed.is_err());
    }

    #[test]
    fn test_field_trampoline_turns_panic_into_break() {
        let visitor = |_: CXCursor| -> FieldVisit { panic!("field visitor blew up") };
        let mut traversal = Traversal::new(visitor);
        let data = traversal.as_client_data();
        let tramp = field_trampoline_for(&traversal);
        assert_eq!(tramp(blank_cursor(), data), CXVisit_Break);
        assert!(traversal.panic.is_some());
    }

    #[test]
    fn test_inclusion_trampoline_handles_empty_stack() {
        let mut depths = Vec::new();
        let visitor = |_: CXFile, stack: &[CXSourceLocation]| depths.push(stack.len());
        let mut traversal = Traversal::new(visitor);
        let data = traversal.as_client_data();
        inclusion_trampoline_for(&traversal)(std::ptr::null_mut(), std::ptr::null_mut(), 0, data);
        drop(traversal);
        assert_eq!(depths, vec![0]);
    }

    // Closures have unnameable types; infer the trampoline from the state.
    fn child_trampoline_for<F>(
        _: &Traversal<F>,
    ) -> extern "C" fn(CXCursor, CXCursor, CXClientData) -> CXChildVisitResult
    where
        F: FnMut(CXCursor, CXCursor) -> ChildVisit,
    {
        child_trampoline::<F>
    }

    fn field_trampoline_for<F>(
        _: &Traversal<F>,
    ) -> extern "C" fn(CXCursor, CXClientData) -> CXVisitorResult
    where
        F: FnMut(CXCursor) -> FieldVisit,
    {
        field_trampoline::<F>
    }

    fn inclusion_trampoline_for<F>(
        _: &Traversal<F>,
    ) -> extern "C" fn(CXFile, *mut CXSourceLocation, c_uint, CXClientData)
    where
        F: FnMut(CXFile, &[CXSourceLocation]),
    {
        inclusion_trampoline::<F>
    }
}
