//! Declaration specifiers: the unordered keyword sequence that contributes
//! to a declaration's base type, and the `struct`/`union`/`enum` forms that
//! can appear among them.

use cbind_util::Identifier;

use crate::token::SyntaxToken;
use crate::tree::NodeId;

/// A basic-type keyword, before composition (`unsigned`, `long`, `int`, ...).
///
/// This is the syntactic vocabulary; the semantic composition table that
/// turns a sequence of these into one [`cbind_sem`]-side basic kind lives in
/// the binder, not here — this crate only records which keyword appeared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataTypeKeyword {
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Signed,
    Unsigned,
    Complex,
}

/// A type-qualifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QualifierKeyword {
    Const,
    Volatile,
    Restrict,
    Atomic,
}

/// `struct`, `union`, or `enum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Struct,
    Union,
    Enum,
}

/// One element of a declaration's specifier sequence, restricted to the
/// non-storage-class forms the binder's specifier phase (SPEC §4.2) walks
/// over. Storage class (`typedef`, `extern`, ...) is modeled as a separate
/// field on the owning declaration, not as a specifier variant, since it
/// never participates in type composition.
#[derive(Clone, Debug)]
pub enum SpecifierNode {
    DataType(DataTypeKeyword, SyntaxToken),
    Void(SyntaxToken),
    Qualifier(QualifierKeyword, SyntaxToken),
    Tag(TagSpecifierNode),
    TypedefName(Identifier, SyntaxToken),
}

impl SpecifierNode {
    pub fn is_qualifier(&self) -> bool {
        matches!(self, SpecifierNode::Qualifier(..))
    }

    pub fn token(&self) -> &SyntaxToken {
        match self {
            SpecifierNode::DataType(_, t) => t,
            SpecifierNode::Void(t) => t,
            SpecifierNode::Qualifier(_, t) => t,
            SpecifierNode::Tag(tag) => &tag.token,
            SpecifierNode::TypedefName(_, t) => t,
        }
    }
}

/// A `struct S { ... }`, `union U`, or `enum E { ... }` specifier, with or
/// without a member list.
#[derive(Clone, Debug)]
pub struct TagSpecifierNode {
    pub node_id: NodeId,
    pub kind: TagKind,
    /// [`Identifier::EMPTY`] for an anonymous tag.
    pub name: Identifier,
    pub token: SyntaxToken,
    pub body: Option<TagBody>,
}

/// The member list of a tag specifier that has a body.
#[derive(Clone, Debug)]
pub enum TagBody {
    Members(Vec<MemberDeclarationNode>),
    Enumerators(Vec<EnumeratorNode>),
}

/// One member declaration inside a `struct`/`union` body: a specifier
/// sequence shared by zero or more member declarators.
#[derive(Clone, Debug)]
pub struct MemberDeclarationNode {
    pub token: SyntaxToken,
    pub specifiers: Vec<SpecifierNode>,
    pub declarators: Vec<MemberDeclaratorNode>,
}

/// One declarator inside a member declaration. `declarator` is `None` for
/// an anonymous bit-field (`: 3;`); `bit_width` is `Some` only for bit-fields.
#[derive(Clone, Debug)]
pub struct MemberDeclaratorNode {
    pub node_id: NodeId,
    pub declarator: Option<crate::declarator::DeclaratorNode>,
    pub bit_width: Option<u64>,
}

/// One `enum` member. The binder does not evaluate `value`'s constant
/// expression (that's a later pass); this node exists so a future pass has
/// somewhere to read the raw constant from, but `cbind-sem` never looks at
/// it — enumerator symbols carry `value: None` out of the binder.
#[derive(Clone, Debug)]
pub struct EnumeratorNode {
    pub node_id: NodeId,
    pub name: Identifier,
    pub token: SyntaxToken,
    pub value: Option<i64>,
}
