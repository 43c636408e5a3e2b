//! A closed, owned taxonomy of C syntax nodes standing in for the upstream
//! lexer/parser's contract.
//!
//! Lexing, parsing, and typedef-vs-expression disambiguation are out of
//! scope for this workspace's binder (`cbind-sem`) — they are a separate
//! front-end phase this crate does not implement. But the binder is a tree
//! walker and needs something concrete to walk, so this crate models the
//! upstream contract as a small closed taxonomy covering exactly the
//! declaration, specifier, declarator, and statement forms the binder's
//! traversal rules are defined over, and nothing else. It is not a general
//! C grammar: there is no expression tree, no preprocessor, no literal
//! parsing beyond the handful of syntactic facts (a tag's name, an array's
//! constant extent, a declarator's shape) the binder needs to look at.
//!
//! Every node that can be bound to a symbol carries a [`NodeId`], minted by
//! a [`NodeIdGen`] while the tree is being assembled (by a real parser, or
//! by a test building a tree by hand). [`SyntaxTree`] owns the root,
//! the identifier pool, and the diagnostic sink, matching the external
//! interface the binder is specified against: `root()`, `find_identifier`,
//! `new_diagnostic`.

mod decl;
mod declarator;
mod specifier;
mod stmt;
mod token;
mod tree;

pub use decl::{DeclarationNode, ExternalDeclaration, FunctionDefinitionNode, InitDeclaratorNode, StorageClass};
pub use declarator::{ArrayExtent, DeclaratorNode, ParameterDeclarationNode};
pub use specifier::{
    DataTypeKeyword, EnumeratorNode, MemberDeclarationNode, MemberDeclaratorNode, QualifierKeyword,
    SpecifierNode, TagBody, TagKind, TagSpecifierNode,
};
pub use stmt::{CompoundStatementNode, Statement};
pub use token::SyntaxToken;
pub use tree::{NodeId, NodeIdGen, SyntaxTree, TranslationUnit};
