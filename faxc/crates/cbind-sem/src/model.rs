//! The bound result: every scope, symbol, and type produced by binding one
//! translation unit, plus the map from syntax node to the symbol it
//! introduced.

use cbind_syntax::NodeId;
use cbind_util::IndexVec;
use indexmap::IndexMap;
use thiserror::Error;

use crate::scope::{Scope, ScopeId, ScopeTree};
use crate::symbol::{Symbol, SymbolId};
use crate::types::{TypeData, TypeId};

/// A node the binder has already produced a symbol for is handed to
/// `keep_*` a second time — an internal invariant violation, not a
/// diagnosable C-program error (SPEC §7).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("node {0:?} is already bound to a symbol")]
    NodeAlreadyBound(NodeId),
}

/// A caller of [`SemanticModel`]'s query methods asked about a handle the
/// model doesn't recognize, or asked [`SemanticModel::retype`] to do
/// something it can't.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown symbol")]
    UnknownSymbol,
    #[error("unknown type")]
    UnknownType,
    #[error("symbol is not retypeable (not an unresolved typedef reference)")]
    NotRetypeable,
    #[error("symbol's typedef has already been resolved")]
    AlreadyResolved,
}

/// The output of binding: a translation unit's full scope tree, symbol
/// table, and type arena, plus the syntax-to-symbol mapping a later pass
/// would use to attach types back onto the tree it was built from.
pub struct SemanticModel {
    pub(crate) scopes: ScopeTree,
    pub(crate) symbols: IndexVec<SymbolId, Symbol>,
    pub(crate) types: IndexVec<TypeId, TypeData>,
    pub(crate) node_symbols: IndexMap<NodeId, SymbolId>,
}

impl SemanticModel {
    pub(crate) fn new() -> Self {
        Self {
            scopes: ScopeTree::new(),
            symbols: IndexVec::new(),
            types: IndexVec::new(),
            node_symbols: IndexMap::new(),
        }
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        Some(self.scopes.get(id))
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn ty(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id)
    }

    /// Every symbol declared directly in `scope`, in declaration order.
    pub fn declarations_in(&self, scope: ScopeId) -> impl Iterator<Item = &Symbol> {
        self.scopes.get(scope).declarations.iter().map(move |&id| &self.symbols[id])
    }

    /// The symbol a syntax node was bound to, if the binder created one for
    /// it.
    pub fn symbol_of(&self, node: NodeId) -> Option<&Symbol> {
        self.node_symbols.get(&node).map(|&id| &self.symbols[id])
    }

    /// Records that `node` was bound to `symbol`. Returns an error if
    /// `node` already has a recorded symbol — every syntax node is bound
    /// at most once.
    pub(crate) fn bind_node(&mut self, node: NodeId, symbol: SymbolId) -> Result<(), BindError> {
        if self.node_symbols.contains_key(&node) {
            return Err(BindError::NodeAlreadyBound(node));
        }
        self.node_symbols.insert(node, symbol);
        Ok(())
    }

    /// Replaces any typeable symbol's unresolved `TypeData::Typedef`
    /// reference with its resolved synonym — a `Variable`, `Parameter`,
    /// `Field`, or `Enumerator` typed through a typedef-name just as much
    /// as a `Typedef` symbol whose own synonym is itself another
    /// typedef-name (SPEC §4.7's "retypeable slot" is every kind
    /// [`SymbolKind::ty`] returns a type for, not `Typedef` alone).
    ///
    /// Only legal while the symbol's current type is an unresolved
    /// `TypeData::Typedef` reference — a symbol with no type slot at all
    /// (`TranslationUnit`), or one whose slot has already been resolved, is
    /// rejected rather than silently overwritten, since only one writer is
    /// ever meant to retype a given slot.
    pub fn retype(&mut self, symbol: SymbolId, new_type: TypeId) -> Result<(), ModelError> {
        let sym = self.symbols.get_mut(symbol).ok_or(ModelError::UnknownSymbol)?;
        let current_ty = sym.kind.ty().ok_or(ModelError::NotRetypeable)?;
        let current = self.types.get(current_ty).ok_or(ModelError::UnknownType)?;
        if !current.is_typedef() {
            return Err(ModelError::AlreadyResolved);
        }
        sym.kind.set_ty(new_type).ok_or(ModelError::NotRetypeable)?;
        Ok(())
    }
}
