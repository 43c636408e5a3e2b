//! Top-level declaration forms: the things that can appear directly in a
//! translation unit or at the head of a block.

use crate::declarator::DeclaratorNode;
use crate::specifier::SpecifierNode;
use crate::stmt::CompoundStatementNode;
use crate::token::SyntaxToken;
use crate::tree::NodeId;

/// A declaration's storage class. Only `Typedef` changes the shape of the
/// symbol the binder creates (SPEC §4.4); the others are recorded for
/// completeness but otherwise don't affect binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageClass {
    Typedef,
    Extern,
    Static,
    Auto,
    Register,
}

/// Something that can appear at file scope: an ordinary declaration, or a
/// function definition.
#[derive(Clone, Debug)]
pub enum ExternalDeclaration {
    Declaration(DeclarationNode),
    FunctionDefinition(FunctionDefinitionNode),
}

/// A declaration: one specifier sequence shared by zero or more declarators.
///
/// `declarators` is empty for a bare specifier declaration (`int;`, or a
/// tag-only declaration that introduces a type but names no object, like
/// `struct S { int a; };`).
#[derive(Clone, Debug)]
pub struct DeclarationNode {
    pub token: SyntaxToken,
    pub storage_class: Option<StorageClass>,
    pub specifiers: Vec<SpecifierNode>,
    pub declarators: Vec<InitDeclaratorNode>,
}

/// One declarator in a declaration's (possibly multi-declarator) list.
///
/// Initializers are out of scope (SPEC §1 non-goals: the binder does not
/// evaluate initializers), so this node carries no initializer expression —
/// only the declarator shape the binder needs to construct a type from.
#[derive(Clone, Debug)]
pub struct InitDeclaratorNode {
    pub node_id: NodeId,
    pub declarator: DeclaratorNode,
}

/// A function definition: declaration specifiers, one declarator whose
/// outermost form is a function declarator, and a body.
#[derive(Clone, Debug)]
pub struct FunctionDefinitionNode {
    pub node_id: NodeId,
    pub token: SyntaxToken,
    pub storage_class: Option<StorageClass>,
    pub specifiers: Vec<SpecifierNode>,
    pub declarator: DeclaratorNode,
    pub body: CompoundStatementNode,
}
