//! A C front-end binder: walks a syntax tree of declarations, specifiers,
//! and declarators, and produces a [`SemanticModel`] — the scopes, symbols,
//! and types that tree's translation unit introduces.
//!
//! This crate implements binding only. Name resolution (looking a use site
//! up through [`scope::ScopeTree`]), constant-expression evaluation, and
//! the `typedef`-vs-expression disambiguation a real parser needs are all
//! later phases or separate front-end concerns, not this crate's job — see
//! each module's own documentation for exactly where its boundary sits.
//!
//! The syntax taxonomy this binder walks lives in `cbind-syntax`; shared
//! infrastructure (identifier interning, diagnostics, typed arenas) lives in
//! `cbind-util`. Neither of those crates know this one exists.

mod binder;
mod model;
mod scope;
mod symbol;
mod types;

pub use binder::bind;
pub use model::{BindError, ModelError, SemanticModel};
pub use scope::{Scope, ScopeId, ScopeKind, ScopeTree};
pub use symbol::{Symbol, SymbolId, SymbolKind};
pub use types::{compose_basic, BasicKind, Qualifiers, TypeData, TypeId};
