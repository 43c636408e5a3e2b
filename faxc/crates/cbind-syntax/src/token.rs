//! Source tokens: the thing every syntax node can be diagnosed against.

use cbind_util::Span;

/// A single lexical token, reduced to what the binder needs from it: where
/// it came from. The binder never re-lexes or re-reads token text; a node's
/// semantically relevant text (an identifier, a tag name, a constant) is
/// already carried on the node as an [`cbind_util::Identifier`] or a typed
/// value, not re-derived from the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxToken {
    pub span: Span,
}

impl SyntaxToken {
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    /// A token with no real source location, for hand-built test trees that
    /// don't care about diagnostic spans.
    pub const DUMMY: SyntaxToken = SyntaxToken { span: Span::DUMMY };
}

impl Default for SyntaxToken {
    fn default() -> Self {
        Self::DUMMY
    }
}
