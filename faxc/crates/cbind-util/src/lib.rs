//! Foundation types shared by the syntax and binding crates: identifier
//! interning, source spans, diagnostics, typed index vectors, and the crate's
//! own error types.
//!
//! None of this is specific to C or to binding — it is the ambient
//! infrastructure every later phase builds on, kept in its own crate so that
//! `cbind-syntax` and `cbind-sem` each depend on one small, stable layer
//! rather than on each other.
//!
//! # Typed indices
//!
//! Arena-style collections (scopes, symbols, types) are stored in
//! [`index_vec::IndexVec`], addressed by a newtype index rather than a raw
//! `usize`. [`define_idx!`] generates that newtype and its [`index_vec::Idx`]
//! impl in one line:
//!
//! ```
//! use cbind_util::{define_idx, index_vec::IndexVec};
//!
//! define_idx!(ScopeId);
//!
//! let mut scopes: IndexVec<ScopeId, &str> = IndexVec::new();
//! let id = scopes.push("file scope");
//! assert_eq!(scopes[id], "file scope");
//! ```
//!
//! Mixing up a `ScopeId` and a `SymbolId` is then a compile error instead of
//! a silent out-of-bounds read.

pub mod diagnostic;
pub mod error;
pub mod ident;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use ident::{Identifier, IdentifierPool};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, Span};
