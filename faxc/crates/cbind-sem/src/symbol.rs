//! Symbols: the things a scope's names resolve to.

use cbind_util::{define_idx, Identifier};

use crate::scope::ScopeId;
use crate::types::TypeId;

define_idx!(SymbolId);

/// What kind of thing a symbol names. Every variant but `TranslationUnit`
/// corresponds to one production the binder creates a symbol for (SPEC
/// §4.4); `TranslationUnit` exists so the root of a bind always has a
/// symbol of its own, giving every other symbol a non-optional
/// `containing_symbol` chain up to one root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    TranslationUnit,
    Struct {
        ty: TypeId,
        member_scope: ScopeId,
    },
    Union {
        ty: TypeId,
        member_scope: ScopeId,
    },
    Enum {
        ty: TypeId,
        member_scope: ScopeId,
    },
    /// `synonymized_type` starts as a `TypeData::Typedef` reference and is
    /// resolved in place via [`crate::model::SemanticModel::retype`] once
    /// the synonym's own declarator has finished binding.
    Typedef {
        identifier: Identifier,
        synonymized_type: TypeId,
    },
    Variable {
        identifier: Identifier,
        ty: TypeId,
    },
    Function {
        identifier: Identifier,
        ty: TypeId,
        /// The function's top-level block scope, once a definition (not
        /// just a declaration) has bound a body.
        body_scope: Option<ScopeId>,
    },
    /// `identifier` is [`Identifier::EMPTY`] for an unnamed parameter — a
    /// `Parameter` symbol is still allocated so the parameter list's arity
    /// and order survive in the scope (SPEC §4.6).
    Parameter {
        identifier: Identifier,
        ty: TypeId,
    },
    Field {
        identifier: Identifier,
        ty: TypeId,
        bit_width: Option<u64>,
    },
    /// An enumerator's type is always the enclosing enum's integer type.
    /// `value` is always `None` out of the binder — evaluating the
    /// constant expression on the syntax node is a later pass's job,
    /// out of scope here.
    Enumerator {
        identifier: Identifier,
        ty: TypeId,
        value: Option<i64>,
    },
}

impl SymbolKind {
    pub fn identifier(&self) -> Identifier {
        match self {
            SymbolKind::TranslationUnit => Identifier::EMPTY,
            SymbolKind::Struct { .. } | SymbolKind::Union { .. } | SymbolKind::Enum { .. } => Identifier::EMPTY,
            SymbolKind::Typedef { identifier, .. }
            | SymbolKind::Variable { identifier, .. }
            | SymbolKind::Function { identifier, .. }
            | SymbolKind::Parameter { identifier, .. }
            | SymbolKind::Field { identifier, .. }
            | SymbolKind::Enumerator { identifier, .. } => *identifier,
        }
    }

    pub fn ty(&self) -> Option<TypeId> {
        match self {
            SymbolKind::TranslationUnit => None,
            SymbolKind::Struct { ty, .. } | SymbolKind::Union { ty, .. } | SymbolKind::Enum { ty, .. } => Some(*ty),
            SymbolKind::Typedef { synonymized_type, .. } => Some(*synonymized_type),
            SymbolKind::Variable { ty, .. }
            | SymbolKind::Function { ty, .. }
            | SymbolKind::Parameter { ty, .. }
            | SymbolKind::Field { ty, .. }
            | SymbolKind::Enumerator { ty, .. } => Some(*ty),
        }
    }

    /// Overwrites this symbol's type slot in place, for every kind that has
    /// one. `None` for `TranslationUnit`, the one kind with nothing to
    /// retype — mirrors [`SymbolKind::ty`]'s own carve-out.
    pub(crate) fn set_ty(&mut self, new_type: TypeId) -> Option<()> {
        match self {
            SymbolKind::TranslationUnit => None,
            SymbolKind::Struct { ty, .. } | SymbolKind::Union { ty, .. } | SymbolKind::Enum { ty, .. } => {
                *ty = new_type;
                Some(())
            }
            SymbolKind::Typedef { synonymized_type, .. } => {
                *synonymized_type = new_type;
                Some(())
            }
            SymbolKind::Variable { ty, .. }
            | SymbolKind::Function { ty, .. }
            | SymbolKind::Parameter { ty, .. }
            | SymbolKind::Field { ty, .. }
            | SymbolKind::Enumerator { ty, .. } => {
                *ty = new_type;
                Some(())
            }
        }
    }
}

/// One symbol: its kind, where it's declared, and what contains it.
///
/// `containing_symbol` is `None` only for the single `TranslationUnit`
/// symbol at the root of a bind — every other symbol is contained by
/// something, even if only transitively by the translation unit itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub containing_symbol: Option<SymbolId>,
    pub enclosing_scope: ScopeId,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(containing_symbol: Option<SymbolId>, enclosing_scope: ScopeId, kind: SymbolKind) -> Self {
        Self {
            containing_symbol,
            enclosing_scope,
            kind,
        }
    }
}
