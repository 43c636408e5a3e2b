//! Statement forms, restricted to the two the binder actually opens scopes
//! or creates symbols for. Expression statements, control flow, and
//! everything else that only matters for use-site name resolution and
//! type-checking (both out of scope, SPEC §1) are collapsed into `Other` —
//! the binder walks into them only far enough to find nested declarations
//! and compound statements, never their expressions.
use crate::decl::DeclarationNode;
use crate::token::SyntaxToken;

/// A `{ ... }` block: its own `Block` scope, containing a sequence of
/// statements.
#[derive(Clone, Debug)]
pub struct CompoundStatementNode {
    pub token: SyntaxToken,
    pub statements: Vec<Statement>,
}

/// A statement inside a function body.
#[derive(Clone, Debug)]
pub enum Statement {
    Compound(CompoundStatementNode),
    Declaration(DeclarationNode),
    /// An expression statement, or a control-flow statement (`if`, `while`,
    /// `return`, ...) whose nested expressions and sub-statements the
    /// binder never inspects. A real parser's richer statement tree would
    /// carry an `if`'s branches as `Statement`s of their own the binder
    /// could walk for nested declarations, but that shape isn't needed
    /// here: this taxonomy only has to support the two productions the
    /// binder's own traversal rules are defined over (§4.1, §4.5), so a
    /// control-flow statement's subtree collapses to its token.
    Other(SyntaxToken),
}
