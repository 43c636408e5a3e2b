//! The lexical scope tree: one [`Scope`] per file, block, function
//! prototype, and tag member list, each an insertion-ordered map from
//! identifier to symbol.

use cbind_util::{define_idx, Identifier, IndexVec};
use indexmap::IndexMap;

use crate::symbol::SymbolId;

define_idx!(ScopeId);

/// What a scope was opened for. Only `FunctionPrototype` and `TagMembers`
/// change how lookups and declarations behave relative to a plain `Block`:
/// a prototype scope's parameters are promoted into the function's body
/// scope (SPEC §4.6), and a tag's members are never visible by unqualified
/// lookup from outside the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    File,
    Block,
    FunctionPrototype,
    TagMembers,
}

/// One lexical scope. `symbols` maps an identifier to the symbol it names
/// *in this scope*; `declarations` records every symbol introduced here in
/// the order they were bound, independent of the name they're keyed under
/// — this is what lets [`crate::model::SemanticModel::declarations_in`]
/// report, e.g., both fields of an anonymous bit-field member list even
/// though neither has a name to key on.
#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    pub symbols: IndexMap<Identifier, SymbolId>,
    pub declarations: Vec<SymbolId>,
    pub children: Vec<ScopeId>,
}

impl Scope {
    fn new(kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Self {
            kind,
            parent,
            symbols: IndexMap::new(),
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// The arena of every scope opened while binding one translation unit.
#[derive(Debug, Default)]
pub struct ScopeTree {
    scopes: IndexVec<ScopeId, Scope>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self {
            scopes: IndexVec::new(),
        }
    }

    /// Opens a new scope nested under `parent` (or a root scope, if `parent`
    /// is `None`), returning its id.
    pub fn open(&mut self, kind: ScopeKind, parent: Option<ScopeId>) -> ScopeId {
        let id = self.scopes.push(Scope::new(kind, parent));
        if let Some(parent) = parent {
            self.scopes[parent].children.push(id);
        }
        id
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    pub fn get_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id]
    }

    /// Records `symbol` as declared in `scope` under `name`. If `name` is
    /// [`Identifier::EMPTY`] (an anonymous tag, an unnamed bit-field), the
    /// symbol is recorded in `declarations` only, never made lookup-able by
    /// name — re-declaring `Identifier::EMPTY` is always legal since there
    /// is nothing to conflict with.
    pub fn declare(&mut self, scope: ScopeId, name: Identifier, symbol: SymbolId) {
        let scope = &mut self.scopes[scope];
        scope.declarations.push(symbol);
        if name != Identifier::EMPTY {
            scope.symbols.insert(name, symbol);
        }
    }

    /// Looks up `name` starting at `scope` and walking outward through
    /// parents, per ordinary C lexical scoping.
    pub fn lookup(&self, scope: ScopeId, name: Identifier) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = &self.scopes[id];
            if let Some(&symbol) = s.symbols.get(&name) {
                return Some(symbol);
            }
            current = s.parent;
        }
        None
    }

    /// Looks up `name` in `scope` only, without walking to parents — used
    /// for member/enumerator name conflicts, which are scoped to a single
    /// tag's member list or enclosing scope, not the whole chain.
    pub fn lookup_local(&self, scope: ScopeId, name: Identifier) -> Option<SymbolId> {
        self.scopes[scope].symbols.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbind_util::{IdentifierPool, Idx};

    #[test]
    fn lookup_walks_outward_through_parents() {
        let mut pool = IdentifierPool::new();
        let mut tree = ScopeTree::new();
        let file = tree.open(ScopeKind::File, None);
        let block = tree.open(ScopeKind::Block, Some(file));

        let name = pool.intern("x");
        let sym = SymbolId::from_usize(0);
        tree.declare(file, name, sym);

        assert_eq!(tree.lookup(block, name), Some(sym));
        assert_eq!(tree.lookup_local(block, name), None);
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let mut pool = IdentifierPool::new();
        let mut tree = ScopeTree::new();
        let file = tree.open(ScopeKind::File, None);
        let block = tree.open(ScopeKind::Block, Some(file));

        let name = pool.intern("x");
        let outer = SymbolId::from_usize(0);
        let inner = SymbolId::from_usize(1);
        tree.declare(file, name, outer);
        tree.declare(block, name, inner);

        assert_eq!(tree.lookup(block, name), Some(inner));
        assert_eq!(tree.lookup(file, name), Some(outer));
    }

    #[test]
    fn anonymous_declarations_are_never_name_lookupable() {
        let mut tree = ScopeTree::new();
        let file = tree.open(ScopeKind::File, None);
        let a = SymbolId::from_usize(0);
        let b = SymbolId::from_usize(1);
        tree.declare(file, Identifier::EMPTY, a);
        tree.declare(file, Identifier::EMPTY, b);

        assert_eq!(tree.lookup(file, Identifier::EMPTY), None);
        assert_eq!(tree.get(file).declarations, vec![a, b]);
    }
}
