//! Declarators: the identifier-bearing shape wrapped around a specifier
//! base (`*x`, `a[10]`, `f(int)`), and the parameter declarations a function
//! declarator carries.

use cbind_util::Identifier;

use crate::specifier::SpecifierNode;
use crate::token::SyntaxToken;
use crate::tree::NodeId;

/// A declarator's array extent, as written in the source. The binder does
/// not evaluate non-constant extent expressions; anything other than a
/// literal constant is recorded as `Unknown`, same as an incomplete
/// `T x[]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayExtent {
    Unknown,
    Fixed(u64),
}

/// A declarator, nested inside-out: `*a[10]` is
/// `Pointer { inner: Array { inner: Identifier(a), .. }, .. }` — reading the
/// declarator left to right from its outermost operator.
#[derive(Clone, Debug)]
pub enum DeclaratorNode {
    /// The name being declared. An abstract declarator (a parameter with no
    /// name, as in `int f(int, char *)`) has no `Identifier` node at all —
    /// see [`ParameterDeclarationNode::declarator`].
    Identifier(Identifier, SyntaxToken),
    /// `(D)` — grouping, changes how the rest of the declarator associates
    /// but contributes no type itself.
    Parenthesized(Box<DeclaratorNode>),
    /// `* qualifiers D`.
    Pointer {
        qualifiers: Vec<crate::specifier::QualifierKeyword>,
        token: SyntaxToken,
        inner: Box<DeclaratorNode>,
    },
    /// `D [extent]`.
    Array {
        inner: Box<DeclaratorNode>,
        extent: ArrayExtent,
        token: SyntaxToken,
    },
    /// `D (parameters)`.
    Function {
        inner: Box<DeclaratorNode>,
        parameters: Vec<ParameterDeclarationNode>,
        variadic: bool,
        token: SyntaxToken,
    },
}

impl DeclaratorNode {
    pub fn token(&self) -> &SyntaxToken {
        match self {
            DeclaratorNode::Identifier(_, t) => t,
            DeclaratorNode::Parenthesized(inner) => inner.token(),
            DeclaratorNode::Pointer { token, .. } => token,
            DeclaratorNode::Array { token, .. } => token,
            DeclaratorNode::Function { token, .. } => token,
        }
    }
}

/// One parameter in a function declarator's parameter list.
///
/// `declarator` is `None` for an unnamed parameter (`int f(int, char*)`);
/// the binder still allocates a `Parameter` symbol for it, with
/// [`Identifier::EMPTY`], so the parameter list's arity and order are
/// fully represented in the scope even when nothing is nameable.
///
/// `(void)` — the K&R spelling of "no parameters" — is modeled at this
/// layer as an empty `parameters` vector on the enclosing
/// [`DeclaratorNode::Function`], not as a single `void`-typed parameter
/// node; there is no `ParameterDeclarationNode` for it to construct.
#[derive(Clone, Debug)]
pub struct ParameterDeclarationNode {
    pub node_id: NodeId,
    pub token: SyntaxToken,
    pub specifiers: Vec<SpecifierNode>,
    pub declarator: Option<DeclaratorNode>,
}
