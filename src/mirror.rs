//! Enum Mirror for the libclang bridge
//!
//! Each native enumeration is mirrored as a named table of `(name, value)`
//! pairs. Values are taken from the `clang-sys` constants for the pinned
//! LLVM release, never re-typed by hand, so a host-visible value is always
//! the value the library was built with. Aliases (range markers such as
//! `FirstDecl`) appear after the member they alias.

use clang_sys::*;
use lazy_static::lazy_static;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// LLVM major version whose ABI the tables below mirror.
pub const PINNED_CLANG_MAJOR: u32 = 15;

#[derive(Debug)]
pub struct MirrorEnum {
    pub name: &'static str,
    pub entries: &'static [(&'static str, i64)],
}

impl MirrorEnum {
    pub fn value_of(&self, member: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == member)
            .map(|(_, value)| *value)
    }

    /// First member carrying `value`. Primary names win over aliases.
    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    pub fn to_json(&self) -> Value {
        let members: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(*value)))
            .collect();
        Value::Object(members)
    }
}

macro_rules! mirror_enum {
    (
        $(#[$meta:meta])*
        $ident:ident = $name:literal {
            $($member:literal => $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        pub const $ident: MirrorEnum = MirrorEnum {
            name: $name,
            entries: &[$(($member, $value as i64),)*],
        };
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// TABLES
// ═══════════════════════════════════════════════════════════════════════════════

mirror_enum! {
    /// Thread-priority options for `clang_CXIndex_setGlobalOptions`.
    CX_GLOBAL_OPT_FLAGS = "CXGlobalOptFlags" {
        "None" => CXGlobalOpt_None,
        "ThreadBackgroundPriorityForIndexing" => CXGlobalOpt_ThreadBackgroundPriorityForIndexing,
        "ThreadBackgroundPriorityForEditing" => CXGlobalOpt_ThreadBackgroundPriorityForEditing,
        "ThreadBackgroundPriorityForAll" => CXGlobalOpt_ThreadBackgroundPriorityForAll,
    }
}

mirror_enum! {
    CX_DIAGNOSTIC_SEVERITY = "CXDiagnosticSeverity" {
        "Ignored" => CXDiagnostic_Ignored,
        "Note" => CXDiagnostic_Note,
        "Warning" => CXDiagnostic_Warning,
        "Error" => CXDiagnostic_Error,
        "Fatal" => CXDiagnostic_Fatal,
    }
}

mirror_enum! {
    CX_LOAD_DIAG_ERROR = "CXLoadDiag_Error" {
        "None" => CXLoadDiag_None,
        "Unknown" => CXLoadDiag_Unknown,
        "CannotLoad" => CXLoadDiag_CannotLoad,
        "InvalidFile" => CXLoadDiag_InvalidFile,
    }
}

mirror_enum! {
    /// Bit flags for parsing; combine with bitwise or.
    CX_TRANSLATION_UNIT_FLAGS = "CXTranslationUnit_Flags" {
        "None" => CXTranslationUnit_None,
        "DetailedPreprocessingRecord" => CXTranslationUnit_DetailedPreprocessingRecord,
        "Incomplete" => CXTranslationUnit_Incomplete,
        "PrecompiledPreamble" => CXTranslationUnit_PrecompiledPreamble,
        "CacheCompletionResults" => CXTranslationUnit_CacheCompletionResults,
        "ForSerialization" => CXTranslationUnit_ForSerialization,
        "CXXChainedPCH" => CXTranslationUnit_CXXChainedPCH,
        "SkipFunctionBodies" => CXTranslationUnit_SkipFunctionBodies,
        "IncludeBriefCommentsInCodeCompletion" => CXTranslationUnit_IncludeBriefCommentsInCodeCompletion,
        "CreatePreambleOnFirstParse" => CXTranslationUnit_CreatePreambleOnFirstParse,
        "KeepGoing" => CXTranslationUnit_KeepGoing,
        "SingleFileParse" => CXTranslationUnit_SingleFileParse,
        "LimitSkipFunctionBodiesToPreamble" => CXTranslationUnit_LimitSkipFunctionBodiesToPreamble,
        "IncludeAttributedTypes" => CXTranslationUnit_IncludeAttributedTypes,
        "VisitImplicitAttributes" => CXTranslationUnit_VisitImplicitAttributes,
        "IgnoreNonErrorsFromIncludedFiles" => CXTranslationUnit_IgnoreNonErrorsFromIncludedFiles,
        "RetainExcludedConditionalBlocks" => CXTranslationUnit_RetainExcludedConditionalBlocks,
    }
}

mirror_enum! {
    CX_SAVE_TRANSLATION_UNIT_FLAGS = "CXSaveTranslationUnit_Flags" {
        "None" => CXSaveTranslationUnit_None,
    }
}

mirror_enum! {
    CX_SAVE_ERROR = "CXSaveError" {
        "None" => CXSaveError_None,
        "Unknown" => CXSaveError_Unknown,
        "TranslationErrors" => CXSaveError_TranslationErrors,
        "InvalidTU" => CXSaveError_InvalidTU,
    }
}

mirror_enum! {
    CX_REPARSE_FLAGS = "CXReparse_Flags" {
        "None" => CXReparse_None,
    }
}

mirror_enum! {
    CX_TU_RESOURCE_USAGE_KIND = "CXTUResourceUsageKind" {
        "AST" => CXTUResourceUsage_AST,
        "Identifiers" => CXTUResourceUsage_Identifiers,
        "Selectors" => CXTUResourceUsage_Selectors,
        "GlobalCompletionResults" => CXTUResourceUsage_GlobalCompletionResults,
        "SourceManagerContentCache" => CXTUResourceUsage_SourceManagerContentCache,
        "AST_SideTables" => CXTUResourceUsage_AST_SideTables,
        "SourceManager_Membuffer_Malloc" => CXTUResourceUsage_SourceManager_Membuffer_Malloc,
        "SourceManager_Membuffer_MMap" => CXTUResourceUsage_SourceManager_Membuffer_MMap,
        "ExternalASTSource_Membuffer_Malloc" => CXTUResourceUsage_ExternalASTSource_Membuffer_Malloc,
        "ExternalASTSource_Membuffer_MMap" => CXTUResourceUsage_ExternalASTSource_Membuffer_MMap,
        "Preprocessor" => CXTUResourceUsage_Preprocessor,
        "PreprocessingRecord" => CXTUResourceUsage_PreprocessingRecord,
        "SourceManager_DataStructures" => CXTUResourceUsage_SourceManager_DataStructures,
        "Preprocessor_HeaderSearch" => CXTUResourceUsage_Preprocessor_HeaderSearch,
        "MEMORY_IN_BYTES_BEGIN" => CXTUResourceUsage_AST,
        "MEMORY_IN_BYTES_END" => CXTUResourceUsage_Preprocessor_HeaderSearch,
        "First" => CXTUResourceUsage_AST,
        "Last" => CXTUResourceUsage_Preprocessor_HeaderSearch,
    }
}

mirror_enum! {
    /// Every cursor kind libclang 15 can produce, plus the range markers.
    CX_CURSOR_KIND = "CXCursorKind" {
        "UnexposedDecl" => CXCursor_UnexposedDecl,
        "StructDecl" => CXCursor_StructDecl,
        "UnionDecl" => CXCursor_UnionDecl,
        "ClassDecl" => CXCursor_ClassDecl,
        "EnumDecl" => CXCursor_EnumDecl,
        "FieldDecl" => CXCursor_FieldDecl,
        "EnumConstantDecl" => CXCursor_EnumConstantDecl,
        "FunctionDecl" => CXCursor_FunctionDecl,
        "VarDecl" => CXCursor_VarDecl,
        "ParmDecl" => CXCursor_ParmDecl,
        "ObjCInterfaceDecl" => CXCursor_ObjCInterfaceDecl,
        "ObjCCategoryDecl" => CXCursor_ObjCCategoryDecl,
        "ObjCProtocolDecl" => CXCursor_ObjCProtocolDecl,
        "ObjCPropertyDecl" => CXCursor_ObjCPropertyDecl,
        "ObjCIvarDecl" => CXCursor_ObjCIvarDecl,
        "ObjCInstanceMethodDecl" => CXCursor_ObjCInstanceMethodDecl,
        "ObjCClassMethodDecl" => CXCursor_ObjCClassMethodDecl,
        "ObjCImplementationDecl" => CXCursor_ObjCImplementationDecl,
        "ObjCCategoryImplDecl" => CXCursor_ObjCCategoryImplDecl,
        "TypedefDecl" => CXCursor_TypedefDecl,
        "CXXMethod" => CXCursor_CXXMethod,
        "Namespace" => CXCursor_Namespace,
        "LinkageSpec" => CXCursor_LinkageSpec,
        "Constructor" => CXCursor_Constructor,
        "Destructor" => CXCursor_Destructor,
        "ConversionFunction" => CXCursor_ConversionFunction,
        "TemplateTypeParameter" => CXCursor_TemplateTypeParameter,
        "NonTypeTemplateParameter" => CXCursor_NonTypeTemplateParameter,
        "TemplateTemplateParameter" => CXCursor_TemplateTemplateParameter,
        "FunctionTemplate" => CXCursor_FunctionTemplate,
        "ClassTemplate" => CXCursor_ClassTemplate,
        "ClassTemplatePartialSpecialization" => CXCursor_ClassTemplatePartialSpecialization,
        "NamespaceAlias" => CXCursor_NamespaceAlias,
        "UsingDirective" => CXCursor_UsingDirective,
        "UsingDeclaration" => CXCursor_UsingDeclaration,
        "TypeAliasDecl" => CXCursor_TypeAliasDecl,
        "ObjCSynthesizeDecl" => CXCursor_ObjCSynthesizeDecl,
        "ObjCDynamicDecl" => CXCursor_ObjCDynamicDecl,
        "CXXAccessSpecifier" => CXCursor_CXXAccessSpecifier,
        "FirstDecl" => CXCursor_UnexposedDecl,
        "LastDecl" => CXCursor_CXXAccessSpecifier,
        "ObjCSuperClassRef" => CXCursor_ObjCSuperClassRef,
        "FirstRef" => CXCursor_ObjCSuperClassRef,
        "ObjCProtocolRef" => CXCursor_ObjCProtocolRef,
        "ObjCClassRef" => CXCursor_ObjCClassRef,
        "TypeRef" => CXCursor_TypeRef,
        "CXXBaseSpecifier" => CXCursor_CXXBaseSpecifier,
        "TemplateRef" => CXCursor_TemplateRef,
        "NamespaceRef" => CXCursor_NamespaceRef,
        "MemberRef" => CXCursor_MemberRef,
        "LabelRef" => CXCursor_LabelRef,
        "OverloadedDeclRef" => CXCursor_OverloadedDeclRef,
        "VariableRef" => CXCursor_VariableRef,
        "LastRef" => CXCursor_VariableRef,
        "InvalidFile" => CXCursor_InvalidFile,
        "FirstInvalid" => CXCursor_InvalidFile,
        "NoDeclFound" => CXCursor_NoDeclFound,
        "NotImplemented" => CXCursor_NotImplemented,
        "InvalidCode" => CXCursor_InvalidCode,
        "LastInvalid" => CXCursor_InvalidCode,
        "UnexposedExpr" => CXCursor_UnexposedExpr,
        "FirstExpr" => CXCursor_UnexposedExpr,
        "DeclRefExpr" => CXCursor_DeclRefExpr,
        "MemberRefExpr" => CXCursor_MemberRefExpr,
        "CallExpr" => CXCursor_CallExpr,
        "ObjCMessageExpr" => CXCursor_ObjCMessageExpr,
        "BlockExpr" => CXCursor_BlockExpr,
        "IntegerLiteral" => CXCursor_IntegerLiteral,
        "FloatingLiteral" => CXCursor_FloatingLiteral,
        "ImaginaryLiteral" => CXCursor_ImaginaryLiteral,
        "StringLiteral" => CXCursor_StringLiteral,
        "CharacterLiteral" => CXCursor_CharacterLiteral,
        "ParenExpr" => CXCursor_ParenExpr,
        "UnaryOperator" => CXCursor_UnaryOperator,
        "ArraySubscriptExpr" => CXCursor_ArraySubscriptExpr,
        "BinaryOperator" => CXCursor_BinaryOperator,
        "CompoundAssignOperator" => CXCursor_CompoundAssignOperator,
        "ConditionalOperator" => CXCursor_ConditionalOperator,
        "CStyleCastExpr" => CXCursor_CStyleCastExpr,
        "CompoundLiteralExpr" => CXCursor_CompoundLiteralExpr,
        "InitListExpr" => CXCursor_InitListExpr,
        "AddrLabelExpr" => CXCursor_AddrLabelExpr,
        "StmtExpr" => CXCursor_StmtExpr,
        "GenericSelectionExpr" => CXCursor_GenericSelectionExpr,
        "GNUNullExpr" => CXCursor_GNUNullExpr,
        "CXXStaticCastExpr" => CXCursor_CXXStaticCastExpr,
        "CXXDynamicCastExpr" => CXCursor_CXXDynamicCastExpr,
        "CXXReinterpretCastExpr" => CXCursor_CXXReinterpretCastExpr,
        "CXXConstCastExpr" => CXCursor_CXXConstCastExpr,
        "CXXFunctionalCastExpr" => CXCursor_CXXFunctionalCastExpr,
        "CXXTypeidExpr" => CXCursor_CXXTypeidExpr,
        "CXXBoolLiteralExpr" => CXCursor_CXXBoolLiteralExpr,
        "CXXNullPtrLiteralExpr" => CXCursor_CXXNullPtrLiteralExpr,
        "CXXThisExpr" => CXCursor_CXXThisExpr,
        "CXXThrowExpr" => CXCursor_CXXThrowExpr,
        "CXXNewExpr" => CXCursor_CXXNewExpr,
        "CXXDeleteExpr" => CXCursor_CXXDeleteExpr,
        "UnaryExpr" => CXCursor_UnaryExpr,
        "ObjCStringLiteral" => CXCursor_ObjCStringLiteral,
        "ObjCEncodeExpr" => CXCursor_ObjCEncodeExpr,
        "ObjCSelectorExpr" => CXCursor_ObjCSelectorExpr,
        "ObjCProtocolExpr" => CXCursor_ObjCProtocolExpr,
        "ObjCBridgedCastExpr" => CXCursor_ObjCBridgedCastExpr,
        "PackExpansionExpr" => CXCursor_PackExpansionExpr,
        "SizeOfPackExpr" => CXCursor_SizeOfPackExpr,
        "LambdaExpr" => CXCursor_LambdaExpr,
        "ObjCBoolLiteralExpr" => CXCursor_ObjCBoolLiteralExpr,
        "ObjCSelfExpr" => CXCursor_ObjCSelfExpr,
        "OMPArraySectionExpr" => CXCursor_OMPArraySectionExpr,
        "ObjCAvailabilityCheckExpr" => CXCursor_ObjCAvailabilityCheckExpr,
        "FixedPointLiteral" => CXCursor_FixedPointLiteral,
        "OMPArrayShapingExpr" => CXCursor_OMPArrayShapingExpr,
        "OMPIteratorExpr" => CXCursor_OMPIteratorExpr,
        "CXXAddrspaceCastExpr" => CXCursor_CXXAddrspaceCastExpr,
        "LastExpr" => CXCursor_CXXAddrspaceCastExpr,
        "UnexposedStmt" => CXCursor_UnexposedStmt,
        "FirstStmt" => CXCursor_UnexposedStmt,
        "LabelStmt" => CXCursor_LabelStmt,
        "CompoundStmt" => CXCursor_CompoundStmt,
        "CaseStmt" => CXCursor_CaseStmt,
        "DefaultStmt" => CXCursor_DefaultStmt,
        "IfStmt" => CXCursor_IfStmt,
        "SwitchStmt" => CXCursor_SwitchStmt,
        "WhileStmt" => CXCursor_WhileStmt,
        "DoStmt" => CXCursor_DoStmt,
        "ForStmt" => CXCursor_ForStmt,
        "GotoStmt" => CXCursor_GotoStmt,
        "IndirectGotoStmt" => CXCursor_IndirectGotoStmt,
        "ContinueStmt" => CXCursor_ContinueStmt,
        "BreakStmt" => CXCursor_BreakStmt,
        "ReturnStmt" => CXCursor_ReturnStmt,
        "GCCAsmStmt" => CXCursor_AsmStmt,
        "AsmStmt" => CXCursor_AsmStmt,
        "ObjCAtTryStmt" => CXCursor_ObjCAtTryStmt,
        "ObjCAtCatchStmt" => CXCursor_ObjCAtCatchStmt,
        "ObjCAtFinallyStmt" => CXCursor_ObjCAtFinallyStmt,
        "ObjCAtThrowStmt" => CXCursor_ObjCAtThrowStmt,
        "ObjCAtSynchronizedStmt" => CXCursor_ObjCAtSynchronizedStmt,
        "ObjCAutoreleasePoolStmt" => CXCursor_ObjCAutoreleasePoolStmt,
        "ObjCForCollectionStmt" => CXCursor_ObjCForCollectionStmt,
        "CXXCatchStmt" => CXCursor_CXXCatchStmt,
        "CXXTryStmt" => CXCursor_CXXTryStmt,
        "CXXForRangeStmt" => CXCursor_CXXForRangeStmt,
        "SEHTryStmt" => CXCursor_SEHTryStmt,
        "SEHExceptStmt" => CXCursor_SEHExceptStmt,
        "SEHFinallyStmt" => CXCursor_SEHFinallyStmt,
        "MSAsmStmt" => CXCursor_MSAsmStmt,
        "NullStmt" => CXCursor_NullStmt,
        "DeclStmt" => CXCursor_DeclStmt,
        "OMPParallelDirective" => CXCursor_OMPParallelDirective,
        "OMPSimdDirective" => CXCursor_OMPSimdDirective,
        "OMPForDirective" => CXCursor_OMPForDirective,
        "OMPSectionsDirective" => CXCursor_OMPSectionsDirective,
        "OMPSectionDirective" => CXCursor_OMPSectionDirective,
        "OMPSingleDirective" => CXCursor_OMPSingleDirective,
        "OMPParallelForDirective" => CXCursor_OMPParallelForDirective,
        "OMPParallelSectionsDirective" => CXCursor_OMPParallelSectionsDirective,
        "OMPTaskDirective" => CXCursor_OMPTaskDirective,
        "OMPMasterDirective" => CXCursor_OMPMasterDirective,
        "OMPCriticalDirective" => CXCursor_OMPCriticalDirective,
        "OMPTaskyieldDirective" => CXCursor_OMPTaskyieldDirective,
        "OMPBarrierDirective" => CXCursor_OMPBarrierDirective,
        "OMPTaskwaitDirective" => CXCursor_OMPTaskwaitDirective,
        "OMPFlushDirective" => CXCursor_OMPFlushDirective,
        "SEHLeaveStmt" => CXCursor_SEHLeaveStmt,
        "OMPOrderedDirective" => CXCursor_OMPOrderedDirective,
        "OMPAtomicDirective" => CXCursor_OMPAtomicDirective,
        "OMPForSimdDirective" => CXCursor_OMPForSimdDirective,
        "OMPParallelForSimdDirective" => CXCursor_OMPParallelForSimdDirective,
        "OMPTargetDirective" => CXCursor_OMPTargetDirective,
        "OMPTeamsDirective" => CXCursor_OMPTeamsDirective,
        "OMPTaskgroupDirective" => CXCursor_OMPTaskgroupDirective,
        "OMPCancellationPointDirective" => CXCursor_OMPCancellationPointDirective,
        "OMPCancelDirective" => CXCursor_OMPCancelDirective,
        "OMPTargetDataDirective" => CXCursor_OMPTargetDataDirective,
        "OMPTaskLoopDirective" => CXCursor_OMPTaskLoopDirective,
        "OMPTaskLoopSimdDirective" => CXCursor_OMPTaskLoopSimdDirective,
        "OMPDistributeDirective" => CXCursor_OMPDistributeDirective,
        "OMPTargetEnterDataDirective" => CXCursor_OMPTargetEnterDataDirective,
        "OMPTargetExitDataDirective" => CXCursor_OMPTargetExitDataDirective,
        "OMPTargetParallelDirective" => CXCursor_OMPTargetParallelDirective,
        "OMPTargetParallelForDirective" => CXCursor_OMPTargetParallelForDirective,
        "OMPTargetUpdateDirective" => CXCursor_OMPTargetUpdateDirective,
        "OMPDistributeParallelForDirective" => CXCursor_OMPDistributeParallelForDirective,
        "OMPDistributeParallelForSimdDirective" => CXCursor_OMPDistributeParallelForSimdDirective,
        "OMPDistributeSimdDirective" => CXCursor_OMPDistributeSimdDirective,
        "OMPTargetParallelForSimdDirective" => CXCursor_OMPTargetParallelForSimdDirective,
        "OMPTargetSimdDirective" => CXCursor_OMPTargetSimdDirective,
        "OMPTeamsDistributeDirective" => CXCursor_OMPTeamsDistributeDirective,
        "OMPTeamsDistributeSimdDirective" => CXCursor_OMPTeamsDistributeSimdDirective,
        "OMPTeamsDistributeParallelForSimdDirective" => CXCursor_OMPTeamsDistributeParallelForSimdDirective,
        "OMPTeamsDistributeParallelForDirective" => CXCursor_OMPTeamsDistributeParallelForDirective,
        "OMPTargetTeamsDirective" => CXCursor_OMPTargetTeamsDirective,
        "OMPTargetTeamsDistributeDirective" => CXCursor_OMPTargetTeamsDistributeDirective,
        "OMPTargetTeamsDistributeParallelForDirective" => CXCursor_OMPTargetTeamsDistributeParallelForDirective,
        "OMPTargetTeamsDistributeParallelForSimdDirective" => CXCursor_OMPTargetTeamsDistributeParallelForSimdDirective,
        "OMPTargetTeamsDistributeSimdDirective" => CXCursor_OMPTargetTeamsDistributeSimdDirective,
        "BuiltinBitCastExpr" => CXCursor_BuiltinBitCastExpr,
        "OMPMasterTaskLoopDirective" => CXCursor_OMPMasterTaskLoopDirective,
        "OMPParallelMasterTaskLoopDirective" => CXCursor_OMPParallelMasterTaskLoopDirective,
        "OMPMasterTaskLoopSimdDirective" => CXCursor_OMPMasterTaskLoopSimdDirective,
        "OMPParallelMasterTaskLoopSimdDirective" => CXCursor_OMPParallelMasterTaskLoopSimdDirective,
        "OMPParallelMasterDirective" => CXCursor_OMPParallelMasterDirective,
        "OMPDepobjDirective" => CXCursor_OMPDepobjDirective,
        "OMPScanDirective" => CXCursor_OMPScanDirective,
        "OMPTileDirective" => CXCursor_OMPTileDirective,
        "OMPCanonicalLoop" => CXCursor_OMPCanonicalLoop,
        "OMPInteropDirective" => CXCursor_OMPInteropDirective,
        "OMPDispatchDirective" => CXCursor_OMPDispatchDirective,
        "OMPMaskedDirective" => CXCursor_OMPMaskedDirective,
        "OMPUnrollDirective" => CXCursor_OMPUnrollDirective,
        "OMPMetaDirective" => CXCursor_OMPMetaDirective,
        "OMPGenericLoopDirective" => CXCursor_OMPGenericLoopDirective,
        // LastStmt moves with every OpenMP directive; use clang_isStatement.
        "TranslationUnit" => CXCursor_TranslationUnit,
        "UnexposedAttr" => CXCursor_UnexposedAttr,
        "FirstAttr" => CXCursor_UnexposedAttr,
        "IBActionAttr" => CXCursor_IBActionAttr,
        "IBOutletAttr" => CXCursor_IBOutletAttr,
        "IBOutletCollectionAttr" => CXCursor_IBOutletCollectionAttr,
        "CXXFinalAttr" => CXCursor_CXXFinalAttr,
        "CXXOverrideAttr" => CXCursor_CXXOverrideAttr,
        "AnnotateAttr" => CXCursor_AnnotateAttr,
        "AsmLabelAttr" => CXCursor_AsmLabelAttr,
        "PackedAttr" => CXCursor_PackedAttr,
        "PureAttr" => CXCursor_PureAttr,
        "ConstAttr" => CXCursor_ConstAttr,
        "NoDuplicateAttr" => CXCursor_NoDuplicateAttr,
        "CUDAConstantAttr" => CXCursor_CUDAConstantAttr,
        "CUDADeviceAttr" => CXCursor_CUDADeviceAttr,
        "CUDAGlobalAttr" => CXCursor_CUDAGlobalAttr,
        "CUDAHostAttr" => CXCursor_CUDAHostAttr,
        "CUDASharedAttr" => CXCursor_CUDASharedAttr,
        "VisibilityAttr" => CXCursor_VisibilityAttr,
        "DLLExport" => CXCursor_DLLExport,
        "DLLImport" => CXCursor_DLLImport,
        "NSReturnsRetained" => CXCursor_NSReturnsRetained,
        "NSReturnsNotRetained" => CXCursor_NSReturnsNotRetained,
        "NSReturnsAutoreleased" => CXCursor_NSReturnsAutoreleased,
        "NSConsumesSelf" => CXCursor_NSConsumesSelf,
        "NSConsumed" => CXCursor_NSConsumed,
        "ObjCException" => CXCursor_ObjCException,
        "ObjCNSObject" => CXCursor_ObjCNSObject,
        "ObjCIndependentClass" => CXCursor_ObjCIndependentClass,
        "ObjCPreciseLifetime" => CXCursor_ObjCPreciseLifetime,
        "ObjCReturnsInnerPointer" => CXCursor_ObjCReturnsInnerPointer,
        "ObjCRequiresSuper" => CXCursor_ObjCRequiresSuper,
        "ObjCRootClass" => CXCursor_ObjCRootClass,
        "ObjCSubclassingRestricted" => CXCursor_ObjCSubclassingRestricted,
        "ObjCExplicitProtocolImpl" => CXCursor_ObjCExplicitProtocolImpl,
        "ObjCDesignatedInitializer" => CXCursor_ObjCDesignatedInitializer,
        "ObjCRuntimeVisible" => CXCursor_ObjCRuntimeVisible,
        "ObjCBoxable" => CXCursor_ObjCBoxable,
        "FlagEnum" => CXCursor_FlagEnum,
        "ConvergentAttr" => CXCursor_ConvergentAttr,
        "WarnUnusedAttr" => CXCursor_WarnUnusedAttr,
        "WarnUnusedResultAttr" => CXCursor_WarnUnusedResultAttr,
        "AlignedAttr" => CXCursor_AlignedAttr,
        "LastAttr" => CXCursor_AlignedAttr,
        "PreprocessingDirective" => CXCursor_PreprocessingDirective,
        "MacroDefinition" => CXCursor_MacroDefinition,
        "MacroExpansion" => CXCursor_MacroExpansion,
        "MacroInstantiation" => CXCursor_MacroExpansion,
        "InclusionDirective" => CXCursor_InclusionDirective,
        "FirstPreprocessing" => CXCursor_PreprocessingDirective,
        "LastPreprocessing" => CXCursor_InclusionDirective,
        "ModuleImportDecl" => CXCursor_ModuleImportDecl,
        "TypeAliasTemplateDecl" => CXCursor_TypeAliasTemplateDecl,
        "StaticAssert" => CXCursor_StaticAssert,
        "FriendDecl" => CXCursor_FriendDecl,
        "FirstExtraDecl" => CXCursor_ModuleImportDecl,
        "LastExtraDecl" => CXCursor_FriendDecl,
        "OverloadCandidate" => CXCursor_OverloadCandidate,
    }
}

mirror_enum! {
    CX_LINKAGE_KIND = "CXLinkageKind" {
        "Invalid" => CXLinkage_Invalid,
        "NoLinkage" => CXLinkage_NoLinkage,
        "Internal" => CXLinkage_Internal,
        "UniqueExternal" => CXLinkage_UniqueExternal,
        "External" => CXLinkage_External,
    }
}

mirror_enum! {
    CX_VISIBILITY_KIND = "CXVisibilityKind" {
        "Invalid" => CXVisibility_Invalid,
        "Hidden" => CXVisibility_Hidden,
        "Protected" => CXVisibility_Protected,
        "Default" => CXVisibility_Default,
    }
}

mirror_enum! {
    CX_LANGUAGE_KIND = "CXLanguageKind" {
        "Invalid" => CXLanguage_Invalid,
        "C" => CXLanguage_C,
        "ObjC" => CXLanguage_ObjC,
        "CPlusPlus" => CXLanguage_CPlusPlus,
    }
}

mirror_enum! {
    CX_TLS_KIND = "CXTLSKind" {
        "None" => CXTLS_None,
        "Dynamic" => CXTLS_Dynamic,
        "Static" => CXTLS_Static,
    }
}

mirror_enum! {
    CX_TYPE_KIND = "CXTypeKind" {
        "Invalid" => CXType_Invalid,
        "Unexposed" => CXType_Unexposed,
        "Void" => CXType_Void,
        "Bool" => CXType_Bool,
        "Char_U" => CXType_Char_U,
        "UChar" => CXType_UChar,
        "Char16" => CXType_Char16,
        "Char32" => CXType_Char32,
        "UShort" => CXType_UShort,
        "UInt" => CXType_UInt,
        "ULong" => CXType_ULong,
        "ULongLong" => CXType_ULongLong,
        "UInt128" => CXType_UInt128,
        "Char_S" => CXType_Char_S,
        "SChar" => CXType_SChar,
        "WChar" => CXType_WChar,
        "Short" => CXType_Short,
        "Int" => CXType_Int,
        "Long" => CXType_Long,
        "LongLong" => CXType_LongLong,
        "Int128" => CXType_Int128,
        "Float" => CXType_Float,
        "Double" => CXType_Double,
        "LongDouble" => CXType_LongDouble,
        "NullPtr" => CXType_NullPtr,
        "Overload" => CXType_Overload,
        "Dependent" => CXType_Dependent,
        "ObjCId" => CXType_ObjCId,
        "ObjCClass" => CXType_ObjCClass,
        "ObjCSel" => CXType_ObjCSel,
        "Float128" => CXType_Float128,
        "Half" => CXType_Half,
        "Float16" => CXType_Float16,
        "ShortAccum" => CXType_ShortAccum,
        "Accum" => CXType_Accum,
        "LongAccum" => CXType_LongAccum,
        "UShortAccum" => CXType_UShortAccum,
        "UAccum" => CXType_UAccum,
        "ULongAccum" => CXType_ULongAccum,
        "BFloat16" => CXType_BFloat16,
        "Ibm128" => CXType_Ibm128,
        "FirstBuiltin" => CXType_Void,
        "LastBuiltin" => CXType_Ibm128,
        "Complex" => CXType_Complex,
        "Pointer" => CXType_Pointer,
        "BlockPointer" => CXType_BlockPointer,
        "LValueReference" => CXType_LValueReference,
        "RValueReference" => CXType_RValueReference,
        "Record" => CXType_Record,
        "Enum" => CXType_Enum,
        "Typedef" => CXType_Typedef,
        "ObjCInterface" => CXType_ObjCInterface,
        "ObjCObjectPointer" => CXType_ObjCObjectPointer,
        "FunctionNoProto" => CXType_FunctionNoProto,
        "FunctionProto" => CXType_FunctionProto,
        "ConstantArray" => CXType_ConstantArray,
        "Vector" => CXType_Vector,
        "IncompleteArray" => CXType_IncompleteArray,
        "VariableArray" => CXType_VariableArray,
        "DependentSizedArray" => CXType_DependentSizedArray,
        "MemberPointer" => CXType_MemberPointer,
        "Auto" => CXType_Auto,
        "Elaborated" => CXType_Elaborated,
        "Pipe" => CXType_Pipe,
        "OCLImage1dRO" => CXType_OCLImage1dRO,
        "OCLImage1dArrayRO" => CXType_OCLImage1dArrayRO,
        "OCLImage1dBufferRO" => CXType_OCLImage1dBufferRO,
        "OCLImage2dRO" => CXType_OCLImage2dRO,
        "OCLImage2dArrayRO" => CXType_OCLImage2dArrayRO,
        "OCLImage2dDepthRO" => CXType_OCLImage2dDepthRO,
        "OCLImage2dArrayDepthRO" => CXType_OCLImage2dArrayDepthRO,
        "OCLImage2dMSAARO" => CXType_OCLImage2dMSAARO,
        "OCLImage2dArrayMSAARO" => CXType_OCLImage2dArrayMSAARO,
        "OCLImage2dMSAADepthRO" => CXType_OCLImage2dMSAADepthRO,
        "OCLImage2dArrayMSAADepthRO" => CXType_OCLImage2dArrayMSAADepthRO,
        "OCLImage3dRO" => CXType_OCLImage3dRO,
        "OCLImage1dWO" => CXType_OCLImage1dWO,
        "OCLImage1dArrayWO" => CXType_OCLImage1dArrayWO,
        "OCLImage1dBufferWO" => CXType_OCLImage1dBufferWO,
        "OCLImage2dWO" => CXType_OCLImage2dWO,
        "OCLImage2dArrayWO" => CXType_OCLImage2dArrayWO,
        "OCLImage2dDepthWO" => CXType_OCLImage2dDepthWO,
        "OCLImage2dArrayDepthWO" => CXType_OCLImage2dArrayDepthWO,
        "OCLImage2dMSAAWO" => CXType_OCLImage2dMSAAWO,
        "OCLImage2dArrayMSAAWO" => CXType_OCLImage2dArrayMSAAWO,
        "OCLImage2dMSAADepthWO" => CXType_OCLImage2dMSAADepthWO,
        "OCLImage2dArrayMSAADepthWO" => CXType_OCLImage2dArrayMSAADepthWO,
        "OCLImage3dWO" => CXType_OCLImage3dWO,
        "OCLImage1dRW" => CXType_OCLImage1dRW,
        "OCLImage1dArrayRW" => CXType_OCLImage1dArrayRW,
        "OCLImage1dBufferRW" => CXType_OCLImage1dBufferRW,
        "OCLImage2dRW" => CXType_OCLImage2dRW,
        "OCLImage2dArrayRW" => CXType_OCLImage2dArrayRW,
        "OCLImage2dDepthRW" => CXType_OCLImage2dDepthRW,
        "OCLImage2dArrayDepthRW" => CXType_OCLImage2dArrayDepthRW,
        "OCLImage2dMSAARW" => CXType_OCLImage2dMSAARW,
        "OCLImage2dArrayMSAARW" => CXType_OCLImage2dArrayMSAARW,
        "OCLImage2dMSAADepthRW" => CXType_OCLImage2dMSAADepthRW,
        "OCLImage2dArrayMSAADepthRW" => CXType_OCLImage2dArrayMSAADepthRW,
        "OCLImage3dRW" => CXType_OCLImage3dRW,
        "OCLSampler" => CXType_OCLSampler,
        "OCLEvent" => CXType_OCLEvent,
        "OCLQueue" => CXType_OCLQueue,
        "OCLReserveID" => CXType_OCLReserveID,
        "ObjCObject" => CXType_ObjCObject,
        "ObjCTypeParam" => CXType_ObjCTypeParam,
        "Attributed" => CXType_Attributed,
        "OCLIntelSubgroupAVCMcePayload" => CXType_OCLIntelSubgroupAVCMcePayload,
        "OCLIntelSubgroupAVCImePayload" => CXType_OCLIntelSubgroupAVCImePayload,
        "OCLIntelSubgroupAVCRefPayload" => CXType_OCLIntelSubgroupAVCRefPayload,
        "OCLIntelSubgroupAVCSicPayload" => CXType_OCLIntelSubgroupAVCSicPayload,
        "OCLIntelSubgroupAVCMceResult" => CXType_OCLIntelSubgroupAVCMceResult,
        "OCLIntelSubgroupAVCImeResult" => CXType_OCLIntelSubgroupAVCImeResult,
        "OCLIntelSubgroupAVCRefResult" => CXType_OCLIntelSubgroupAVCRefResult,
        "OCLIntelSubgroupAVCSicResult" => CXType_OCLIntelSubgroupAVCSicResult,
        // Renamed upstream in LLVM 17; addressed by position.
        "OCLIntelSubgroupAVCImeResultSingleRefStreamout" => CXType_OCLIntelSubgroupAVCSicResult + 1,
        "OCLIntelSubgroupAVCImeResultDualRefStreamout" => CXType_OCLIntelSubgroupAVCSicResult + 2,
        "OCLIntelSubgroupAVCImeSingleRefStreamin" => CXType_OCLIntelSubgroupAVCSicResult + 3,
        "OCLIntelSubgroupAVCImeDualRefStreamin" => CXType_OCLIntelSubgroupAVCSicResult + 4,
        "ExtVector" => CXType_ExtVector,
        "Atomic" => CXType_Atomic,
    }
}

mirror_enum! {
    CX_CALLING_CONV = "CXCallingConv" {
        "Default" => CXCallingConv_Default,
        "C" => CXCallingConv_C,
        "X86StdCall" => CXCallingConv_X86StdCall,
        "X86FastCall" => CXCallingConv_X86FastCall,
        "X86ThisCall" => CXCallingConv_X86ThisCall,
        "X86Pascal" => CXCallingConv_X86Pascal,
        "AAPCS" => CXCallingConv_AAPCS,
        "AAPCS_VFP" => CXCallingConv_AAPCS_VFP,
        "X86RegCall" => CXCallingConv_X86RegCall,
        "IntelOclBicc" => CXCallingConv_IntelOclBicc,
        "X86_64Win64" => CXCallingConv_X86_64Win64,
        "Win64" => CXCallingConv_X86_64Win64,
        "X86_64SysV" => CXCallingConv_X86_64SysV,
        "X86VectorCall" => CXCallingConv_X86VectorCall,
        "Swift" => CXCallingConv_Swift,
        "PreserveMost" => CXCallingConv_PreserveMost,
        "PreserveAll" => CXCallingConv_PreserveAll,
        "AArch64VectorCall" => CXCallingConv_AArch64VectorCall,
        "SwiftAsync" => CXCallingConv_SwiftAsync,
        "Invalid" => CXCallingConv_Invalid,
        "Unexposed" => CXCallingConv_Unexposed,
    }
}

mirror_enum! {
    CX_TEMPLATE_ARGUMENT_KIND = "CXTemplateArgumentKind" {
        "Null" => CXTemplateArgumentKind_Null,
        "Type" => CXTemplateArgumentKind_Type,
        "Declaration" => CXTemplateArgumentKind_Declaration,
        "NullPtr" => CXTemplateArgumentKind_NullPtr,
        "Integral" => CXTemplateArgumentKind_Integral,
        "Template" => CXTemplateArgumentKind_Template,
        "TemplateExpansion" => CXTemplateArgumentKind_TemplateExpansion,
        "Expression" => CXTemplateArgumentKind_Expression,
        "Pack" => CXTemplateArgumentKind_Pack,
        "Invalid" => CXTemplateArgumentKind_Invalid,
    }
}

mirror_enum! {
    CX_TYPE_NULLABILITY_KIND = "CXTypeNullabilityKind" {
        "NonNull" => CXTypeNullability_NonNull,
        "Nullable" => CXTypeNullability_Nullable,
        "Unspecified" => CXTypeNullability_Unspecified,
        "Invalid" => CXTypeNullability_Invalid,
        "NullableResult" => CXTypeNullability_NullableResult,
    }
}

mirror_enum! {
    CX_TYPE_LAYOUT_ERROR = "CXTypeLayoutError" {
        "Invalid" => CXTypeLayoutError_Invalid,
        "Incomplete" => CXTypeLayoutError_Incomplete,
        "Dependent" => CXTypeLayoutError_Dependent,
        "NotConstantSize" => CXTypeLayoutError_NotConstantSize,
        "InvalidFieldName" => CXTypeLayoutError_InvalidFieldName,
        "Undeduced" => CXTypeLayoutError_Undeduced,
    }
}

mirror_enum! {
    CX_REF_QUALIFIER_KIND = "CXRefQualifierKind" {
        "None" => CXRefQualifier_None,
        "LValue" => CXRefQualifier_LValue,
        "RValue" => CXRefQualifier_RValue,
    }
}

mirror_enum! {
    CX_CXX_ACCESS_SPECIFIER = "CX_CXXAccessSpecifier" {
        "InvalidAccessSpecifier" => CX_CXXInvalidAccessSpecifier,
        "Public" => CX_CXXPublic,
        "Protected" => CX_CXXProtected,
        "Private" => CX_CXXPrivate,
    }
}

mirror_enum! {
    CX_STORAGE_CLASS = "CX_StorageClass" {
        "Invalid" => CX_SC_Invalid,
        "None" => CX_SC_None,
        "Extern" => CX_SC_Extern,
        "Static" => CX_SC_Static,
        "PrivateExtern" => CX_SC_PrivateExtern,
        "OpenCLWorkGroupLocal" => CX_SC_OpenCLWorkGroupLocal,
        "Auto" => CX_SC_Auto,
        "Register" => CX_SC_Register,
    }
}

mirror_enum! {
    /// Directive a `clang_visitChildren` visitor returns.
    CX_CHILD_VISIT_RESULT = "CXChildVisitResult" {
        "Break" => CXChildVisit_Break,
        "Continue" => CXChildVisit_Continue,
        "Recurse" => CXChildVisit_Recurse,
    }
}

mirror_enum! {
    CX_PRINTING_POLICY_PROPERTY = "CXPrintingPolicyProperty" {
        "Indentation" => CXPrintingPolicy_Indentation,
        "SuppressSpecifiers" => CXPrintingPolicy_SuppressSpecifiers,
        "SuppressTagKeyword" => CXPrintingPolicy_SuppressTagKeyword,
        "IncludeTagDefinition" => CXPrintingPolicy_IncludeTagDefinition,
        "SuppressScope" => CXPrintingPolicy_SuppressScope,
        "SuppressUnwrittenScope" => CXPrintingPolicy_SuppressUnwrittenScope,
        "SuppressInitializers" => CXPrintingPolicy_SuppressInitializers,
        "ConstantArraySizeAsWritten" => CXPrintingPolicy_ConstantArraySizeAsWritten,
        "AnonymousTagLocations" => CXPrintingPolicy_AnonymousTagLocations,
        "SuppressStrongLifetime" => CXPrintingPolicy_SuppressStrongLifetime,
        "SuppressLifetimeQualifiers" => CXPrintingPolicy_SuppressLifetimeQualifiers,
        "SuppressTemplateArgsInCXXConstructors" => CXPrintingPolicy_SuppressTemplateArgsInCXXConstructors,
        "Bool" => CXPrintingPolicy_Bool,
        "Restrict" => CXPrintingPolicy_Restrict,
        "Alignof" => CXPrintingPolicy_Alignof,
        "UnderscoreAlignof" => CXPrintingPolicy_UnderscoreAlignof,
        "UseVoidForZeroParams" => CXPrintingPolicy_UseVoidForZeroParams,
        "TerseOutput" => CXPrintingPolicy_TerseOutput,
        "PolishForDeclaration" => CXPrintingPolicy_PolishForDeclaration,
        "Half" => CXPrintingPolicy_Half,
        "MSWChar" => CXPrintingPolicy_MSWChar,
        "IncludeNewlines" => CXPrintingPolicy_IncludeNewlines,
        "MSVCFormatting" => CXPrintingPolicy_MSVCFormatting,
        "ConstantsAsWritten" => CXPrintingPolicy_ConstantsAsWritten,
        "SuppressImplicitBase" => CXPrintingPolicy_SuppressImplicitBase,
        "FullyQualifiedName" => CXPrintingPolicy_FullyQualifiedName,
        "LastProperty" => CXPrintingPolicy_FullyQualifiedName,
    }
}

mirror_enum! {
    CX_OBJC_PROPERTY_ATTR_KIND = "CXObjCPropertyAttrKind" {
        "noattr" => CXObjCPropertyAttr_noattr,
        "readonly" => CXObjCPropertyAttr_readonly,
        "getter" => CXObjCPropertyAttr_getter,
        "assign" => CXObjCPropertyAttr_assign,
        "readwrite" => CXObjCPropertyAttr_readwrite,
        "retain" => CXObjCPropertyAttr_retain,
        "copy" => CXObjCPropertyAttr_copy,
        "nonatomic" => CXObjCPropertyAttr_nonatomic,
        "setter" => CXObjCPropertyAttr_setter,
        "atomic" => CXObjCPropertyAttr_atomic,
        "weak" => CXObjCPropertyAttr_weak,
        "strong" => CXObjCPropertyAttr_strong,
        "unsafe_unretained" => CXObjCPropertyAttr_unsafe_unretained,
        "class" => CXObjCPropertyAttr_class,
    }
}

mirror_enum! {
    CX_OBJC_DECL_QUALIFIER_KIND = "CXObjCDeclQualifierKind" {
        "None" => CXObjCDeclQualifier_None,
        "In" => CXObjCDeclQualifier_In,
        "Inout" => CXObjCDeclQualifier_Inout,
        "Out" => CXObjCDeclQualifier_Out,
        "Bycopy" => CXObjCDeclQualifier_Bycopy,
        "Byref" => CXObjCDeclQualifier_Byref,
        "Oneway" => CXObjCDeclQualifier_Oneway,
    }
}

mirror_enum! {
    CX_NAME_REF_FLAGS = "CXNameRefFlags" {
        "WantQualifier" => CXNameRange_WantQualifier,
        "WantTemplateArgs" => CXNameRange_WantTemplateArgs,
        "WantSinglePiece" => CXNameRange_WantSinglePiece,
    }
}

mirror_enum! {
    CX_TOKEN_KIND = "CXTokenKind" {
        "Punctuation" => CXToken_Punctuation,
        "Keyword" => CXToken_Keyword,
        "Identifier" => CXToken_Identifier,
        "Literal" => CXToken_Literal,
        "Comment" => CXToken_Comment,
    }
}

mirror_enum! {
    CX_COMPLETION_CHUNK_KIND = "CXCompletionChunkKind" {
        "Optional" => CXCompletionChunk_Optional,
        "TypedText" => CXCompletionChunk_TypedText,
        "Text" => CXCompletionChunk_Text,
        "Placeholder" => CXCompletionChunk_Placeholder,
        "Informative" => CXCompletionChunk_Informative,
        "CurrentParameter" => CXCompletionChunk_CurrentParameter,
        "LeftParen" => CXCompletionChunk_LeftParen,
        "RightParen" => CXCompletionChunk_RightParen,
        "LeftBracket" => CXCompletionChunk_LeftBracket,
        "RightBracket" => CXCompletionChunk_RightBracket,
        "LeftBrace" => CXCompletionChunk_LeftBrace,
        "RightBrace" => CXCompletionChunk_RightBrace,
        "LeftAngle" => CXCompletionChunk_LeftAngle,
        "RightAngle" => CXCompletionChunk_RightAngle,
        "Comma" => CXCompletionChunk_Comma,
        "ResultType" => CXCompletionChunk_ResultType,
        "Colon" => CXCompletionChunk_Colon,
        "SemiColon" => CXCompletionChunk_SemiColon,
        "Equal" => CXCompletionChunk_Equal,
        "HorizontalSpace" => CXCompletionChunk_HorizontalSpace,
        "VerticalSpace" => CXCompletionChunk_VerticalSpace,
    }
}

mirror_enum! {
    /// Directive a field or inclusion visitor returns. Note Break is 0 here too.
    CX_VISITOR_RESULT = "CXVisitorResult" {
        "Break" => CXVisit_Break,
        "Continue" => CXVisit_Continue,
    }
}

mirror_enum! {
    CX_RESULT = "CXResult" {
        "Success" => CXResult_Success,
        "Invalid" => CXResult_Invalid,
        "VisitBreak" => CXResult_VisitBreak,
    }
}

mirror_enum! {
    CX_IDX_ENTITY_KIND = "CXIdxEntityKind" {
        "Unexposed" => CXIdxEntity_Unexposed,
        "Typedef" => CXIdxEntity_Typedef,
        "Function" => CXIdxEntity_Function,
        "Variable" => CXIdxEntity_Variable,
        "Field" => CXIdxEntity_Field,
        "EnumConstant" => CXIdxEntity_EnumConstant,
        "ObjCClass" => CXIdxEntity_ObjCClass,
        "ObjCProtocol" => CXIdxEntity_ObjCProtocol,
        "ObjCCategory" => CXIdxEntity_ObjCCategory,
        "ObjCInstanceMethod" => CXIdxEntity_ObjCInstanceMethod,
        "ObjCClassMethod" => CXIdxEntity_ObjCClassMethod,
        "ObjCProperty" => CXIdxEntity_ObjCProperty,
        "ObjCIvar" => CXIdxEntity_ObjCIvar,
        "Enum" => CXIdxEntity_Enum,
        "Struct" => CXIdxEntity_Struct,
        "Union" => CXIdxEntity_Union,
        "CXXClass" => CXIdxEntity_CXXClass,
        "CXXNamespace" => CXIdxEntity_CXXNamespace,
        "CXXNamespaceAlias" => CXIdxEntity_CXXNamespaceAlias,
        "CXXStaticVariable" => CXIdxEntity_CXXStaticVariable,
        "CXXStaticMethod" => CXIdxEntity_CXXStaticMethod,
        "CXXInstanceMethod" => CXIdxEntity_CXXInstanceMethod,
        "CXXConstructor" => CXIdxEntity_CXXConstructor,
        "CXXDestructor" => CXIdxEntity_CXXDestructor,
        "CXXConversionFunction" => CXIdxEntity_CXXConversionFunction,
        "CXXTypeAlias" => CXIdxEntity_CXXTypeAlias,
        "CXXInterface" => CXIdxEntity_CXXInterface,
    }
}

mirror_enum! {
    CX_IDX_ENTITY_LANGUAGE = "CXIdxEntityLanguage" {
        "None" => CXIdxEntityLang_None,
        "C" => CXIdxEntityLang_C,
        "ObjC" => CXIdxEntityLang_ObjC,
        "CXX" => CXIdxEntityLang_CXX,
        "Swift" => CXIdxEntityLang_Swift,
    }
}

mirror_enum! {
    CX_IDX_ENTITY_CXX_TEMPLATE_KIND = "CXIdxEntityCXXTemplateKind" {
        "NonTemplate" => CXIdxEntity_NonTemplate,
        "Template" => CXIdxEntity_Template,
        "TemplatePartialSpecialization" => CXIdxEntity_TemplatePartialSpecialization,
        "TemplateSpecialization" => CXIdxEntity_TemplateSpecialization,
    }
}

mirror_enum! {
    CX_IDX_ATTR_KIND = "CXIdxAttrKind" {
        "Unexposed" => CXIdxAttr_Unexposed,
        "IBAction" => CXIdxAttr_IBAction,
        "IBOutlet" => CXIdxAttr_IBOutlet,
        "IBOutletCollection" => CXIdxAttr_IBOutletCollection,
    }
}

mirror_enum! {
    CX_IDX_DECL_INFO_FLAGS = "CXIdxDeclInfoFlags" {
        "Skipped" => CXIdxDeclFlag_Skipped,
    }
}

mirror_enum! {
    CX_IDX_OBJC_CONTAINER_KIND = "CXIdxObjCContainerKind" {
        "ForwardRef" => CXIdxObjCContainer_ForwardRef,
        "Interface" => CXIdxObjCContainer_Interface,
        "Implementation" => CXIdxObjCContainer_Implementation,
    }
}

mirror_enum! {
    CX_IDX_ENTITY_REF_KIND = "CXIdxEntityRefKind" {
        "Direct" => CXIdxEntityRef_Direct,
        "Implicit" => CXIdxEntityRef_Implicit,
    }
}

mirror_enum! {
    CX_SYMBOL_ROLE = "CXSymbolRole" {
        "None" => CXSymbolRole_None,
        "Declaration" => CXSymbolRole_Declaration,
        "Definition" => CXSymbolRole_Definition,
        "Reference" => CXSymbolRole_Reference,
        "Read" => CXSymbolRole_Read,
        "Write" => CXSymbolRole_Write,
        "Call" => CXSymbolRole_Call,
        "Dynamic" => CXSymbolRole_Dynamic,
        "AddressOf" => CXSymbolRole_AddressOf,
        "Implicit" => CXSymbolRole_Implicit,
    }
}

mirror_enum! {
    /// Result of `clang_parseTranslationUnit2` and friends.
    CX_ERROR_CODE = "CXErrorCode" {
        "Success" => CXError_Success,
        "Failure" => CXError_Failure,
        "Crashed" => CXError_Crashed,
        "InvalidArguments" => CXError_InvalidArguments,
        "ASTReadError" => CXError_ASTReadError,
    }
}

mirror_enum! {
    CX_AVAILABILITY_KIND = "CXAvailabilityKind" {
        "Available" => CXAvailability_Available,
        "Deprecated" => CXAvailability_Deprecated,
        "NotAvailable" => CXAvailability_NotAvailable,
        "NotAccessible" => CXAvailability_NotAccessible,
    }
}

mirror_enum! {
    /// Bit flags for `clang_formatDiagnostic`.
    CX_DIAGNOSTIC_DISPLAY_OPTIONS = "CXDiagnosticDisplayOptions" {
        "DisplaySourceLocation" => CXDiagnostic_DisplaySourceLocation,
        "DisplayColumn" => CXDiagnostic_DisplayColumn,
        "DisplaySourceRanges" => CXDiagnostic_DisplaySourceRanges,
        "DisplayOption" => CXDiagnostic_DisplayOption,
        "DisplayCategoryId" => CXDiagnostic_DisplayCategoryId,
        "DisplayCategoryName" => CXDiagnostic_DisplayCategoryName,
    }
}

mirror_enum! {
    CX_EVAL_RESULT_KIND = "CXEvalResultKind" {
        "Int" => CXEval_Int,
        "Float" => CXEval_Float,
        "ObjCStrLiteral" => CXEval_ObjCStrLiteral,
        "StrLiteral" => CXEval_StrLiteral,
        "CFStr" => CXEval_CFStr,
        "Other" => CXEval_Other,
        "UnExposed" => CXEval_UnExposed,
    }
}

mirror_enum! {
    CX_CURSOR_EXCEPTION_SPECIFICATION_KIND = "CXCursor_ExceptionSpecificationKind" {
        "None" => CXCursor_ExceptionSpecificationKind_None,
        "DynamicNone" => CXCursor_ExceptionSpecificationKind_DynamicNone,
        "Dynamic" => CXCursor_ExceptionSpecificationKind_Dynamic,
        "MSAny" => CXCursor_ExceptionSpecificationKind_MSAny,
        "BasicNoexcept" => CXCursor_ExceptionSpecificationKind_BasicNoexcept,
        "ComputedNoexcept" => CXCursor_ExceptionSpecificationKind_ComputedNoexcept,
        "Unevaluated" => CXCursor_ExceptionSpecificationKind_Unevaluated,
        "Uninstantiated" => CXCursor_ExceptionSpecificationKind_Uninstantiated,
        "Unparsed" => CXCursor_ExceptionSpecificationKind_Unparsed,
        "NoThrow" => CXCursor_ExceptionSpecificationKind_NoThrow,
    }
}

pub const ENUMS: &[MirrorEnum] = &[
    CX_GLOBAL_OPT_FLAGS,
    CX_DIAGNOSTIC_SEVERITY,
    CX_LOAD_DIAG_ERROR,
    CX_TRANSLATION_UNIT_FLAGS,
    CX_SAVE_TRANSLATION_UNIT_FLAGS,
    CX_SAVE_ERROR,
    CX_REPARSE_FLAGS,
    CX_TU_RESOURCE_USAGE_KIND,
    CX_CURSOR_KIND,
    CX_LINKAGE_KIND,
    CX_VISIBILITY_KIND,
    CX_LANGUAGE_KIND,
    CX_TLS_KIND,
    CX_TYPE_KIND,
    CX_CALLING_CONV,
    CX_TEMPLATE_ARGUMENT_KIND,
    CX_TYPE_NULLABILITY_KIND,
    CX_TYPE_LAYOUT_ERROR,
    CX_REF_QUALIFIER_KIND,
    CX_CXX_ACCESS_SPECIFIER,
    CX_STORAGE_CLASS,
    CX_CHILD_VISIT_RESULT,
    CX_PRINTING_POLICY_PROPERTY,
    CX_OBJC_PROPERTY_ATTR_KIND,
    CX_OBJC_DECL_QUALIFIER_KIND,
    CX_NAME_REF_FLAGS,
    CX_TOKEN_KIND,
    CX_COMPLETION_CHUNK_KIND,
    CX_VISITOR_RESULT,
    CX_RESULT,
    CX_IDX_ENTITY_KIND,
    CX_IDX_ENTITY_LANGUAGE,
    CX_IDX_ENTITY_CXX_TEMPLATE_KIND,
    CX_IDX_ATTR_KIND,
    CX_IDX_DECL_INFO_FLAGS,
    CX_IDX_OBJC_CONTAINER_KIND,
    CX_IDX_ENTITY_REF_KIND,
    CX_SYMBOL_ROLE,
    CX_ERROR_CODE,
    CX_AVAILABILITY_KIND,
    CX_DIAGNOSTIC_DISPLAY_OPTIONS,
    CX_EVAL_RESULT_KIND,
    CX_CURSOR_EXCEPTION_SPECIFICATION_KIND,];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static MirrorEnum> =
        ENUMS.iter().map(|e| (e.name, e)).collect();
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOOKUP
// ═══════════════════════════════════════════════════════════════════════════════

pub fn find_enum(name: &str) -> Option<&'static MirrorEnum> {
    BY_NAME.get(name).copied()
}

pub fn value_of(enum_name: &str, member: &str) -> Option<i64> {
    find_enum(enum_name).and_then(|e| e.value_of(member))
}

pub fn name_of(enum_name: &str, value: i64) -> Option<&'static str> {
    find_enum(enum_name).and_then(|e| e.name_of(value))
}

/// `{ "CXCursorKind": { "UnexposedDecl": 1, ... }, ... }`
pub fn manifest() -> Value {
    let tables: Map<String, Value> = ENUMS
        .iter()
        .map(|e| (e.name.to_string(), e.to_json()))
        .collect();
    Value::Object(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    // Values fixed by the libclang C ABI.
    #[rstest]
    #[case("CXChildVisitResult", "Break", 0)]
    #[case("CXChildVisitResult", "Continue", 1)]
    #[case("CXChildVisitResult", "Recurse", 2)]
    #[case("CXVisitorResult", "Break", 0)]
    #[case("CXVisitorResult", "Continue", 1)]
    #[case("CXCursorKind", "StructDecl", 2)]
    #[case("CXCursorKind", "FunctionDecl", 8)]
    #[case("CXCursorKind", "VarDecl", 9)]
    #[case("CXCursorKind", "ParmDecl", 10)]
    #[case("CXCursorKind", "IntegerLiteral", 106)]
    #[case("CXCursorKind", "CompoundStmt", 202)]
    #[case("CXCursorKind", "ReturnStmt", 214)]
    #[case("CXCursorKind", "TranslationUnit", 350)]
    #[case("CXTypeKind", "Invalid", 0)]
    #[case("CXTypeKind", "Void", 2)]
    #[case("CXTypeKind", "Int", 17)]
    #[case("CXTypeKind", "Pointer", 101)]
    #[case("CXDiagnosticSeverity", "Warning", 2)]
    #[case("CXDiagnosticSeverity", "Error", 3)]
    #[case("CXTranslationUnit_Flags", "DetailedPreprocessingRecord", 0x01)]
    #[case("CXTranslationUnit_Flags", "SkipFunctionBodies", 0x40)]
    #[case("CXTranslationUnit_Flags", "KeepGoing", 0x200)]
    #[case("CXErrorCode", "Success", 0)]
    #[case("CXErrorCode", "ASTReadError", 4)]
    #[case("CXTokenKind", "Identifier", 2)]
    fn test_abi_values(#[case] enum_name: &str, #[case] member: &str, #[case] expected: i64) {
        assert_eq!(value_of(enum_name, member), Some(expected));
    }

    #[rstest]
    #[case("FirstDecl", "UnexposedDecl")]
    #[case("LastDecl", "CXXAccessSpecifier")]
    #[case("FirstRef", "ObjCSuperClassRef")]
    #[case("FirstInvalid", "InvalidFile")]
    #[case("FirstExpr", "UnexposedExpr")]
    #[case("FirstStmt", "UnexposedStmt")]
    #[case("FirstAttr", "UnexposedAttr")]
    #[case("FirstPreprocessing", "PreprocessingDirective")]
    #[case("FirstExtraDecl", "ModuleImportDecl")]
    #[case("AsmStmt", "GCCAsmStmt")]
    #[case("MacroInstantiation", "MacroExpansion")]
    fn test_cursor_aliases_share_values(#[case] alias: &str, #[case] primary: &str) {
        let kind = find_enum("CXCursorKind").unwrap();
        assert_eq!(kind.value_of(alias), kind.value_of(primary));
        assert_eq!(kind.name_of(kind.value_of(alias).unwrap()), Some(primary));
    }

    #[rstest]
    #[case("CXCursorKind", 40, "ObjCSuperClassRef")]
    #[case("CXCursorKind", 70, "InvalidFile")]
    #[case("CXCursorKind", 100, "UnexposedExpr")]
    #[case("CXCursorKind", 200, "UnexposedStmt")]
    #[case("CXCursorKind", 400, "UnexposedAttr")]
    #[case("CXCallingConv", 10, "X86_64Win64")]
    fn test_reverse_lookup_prefers_member_name(
        #[case] enum_name: &str,
        #[case] value: i64,
        #[case] expected: &str,
    ) {
        assert_eq!(name_of(enum_name, value), Some(expected));
    }

    #[test]
    fn test_range_markers_never_win_reverse_lookup() {
        let is_marker = |name: &str| {
            name.starts_with("First")
                || name.starts_with("Last")
                || name.starts_with("MEMORY_IN_BYTES_")
        };
        for e in ENUMS {
            for (name, value) in e.entries {
                let primary = e.name_of(*value).unwrap();
                assert!(
                    !is_marker(primary),
                    "{}.{} resolves back to marker {}",
                    e.name,
                    name,
                    primary
                );
            }
        }
    }

    #[test]
    fn test_enum_names_are_unique() {
        let mut seen = HashSet::new();
        for e in ENUMS {
            assert!(seen.insert(e.name), "duplicate enum {}", e.name);
            assert!(!e.entries.is_empty(), "{} has no members", e.name);
        }
    }

    #[test]
    fn test_member_names_are_unique_within_enum() {
        for e in ENUMS {
            let mut seen = HashSet::new();
            for (member, _) in e.entries {
                assert!(seen.insert(*member), "{}.{} listed twice", e.name, member);
            }
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert!(find_enum("CXNotAnEnum").is_none());
        assert_eq!(value_of("CXCursorKind", "NotAKind"), None);
        assert_eq!(name_of("CXChildVisitResult", 9), None);
    }

    #[test]
    fn test_manifest_shape() {
        let manifest = manifest();
        assert_eq!(manifest["CXCursorKind"]["VarDecl"], 9);
        assert_eq!(manifest["CXChildVisitResult"]["Recurse"], 2);
        assert_eq!(manifest.as_object().unwrap().len(), ENUMS.len());
    }

    #[test]
    fn test_stream_types_follow_sic_result() {
        let kind = find_enum("CXTypeKind").unwrap();
        let sic = kind.value_of("OCLIntelSubgroupAVCSicResult").unwrap();
        assert_eq!(
            kind.value_of("OCLIntelSubgroupAVCImeDualRefStreamin"),
            Some(sic + 4)
        );
    }
}
