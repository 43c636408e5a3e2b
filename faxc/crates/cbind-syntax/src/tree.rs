//! The syntax tree root and its external interface.

use cbind_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
use cbind_util::{define_idx, Identifier, IdentifierPool, Span};

use crate::decl::ExternalDeclaration;
use crate::token::SyntaxToken;

define_idx!(NodeId);

/// Mints fresh, distinct [`NodeId`]s while a tree is being assembled.
///
/// A real parser would own one of these for the lifetime of a translation
/// unit; hand-built test trees construct one locally and thread it through
/// node constructors. Once the tree is handed to [`SyntaxTree::new`], every
/// node's id is fixed — there is no way to mint one afterward, since binding
/// never creates syntax nodes.
#[derive(Default)]
pub struct NodeIdGen(u32);

impl NodeIdGen {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn next(&mut self) -> NodeId {
        let id = NodeId(self.0);
        self.0 += 1;
        id
    }
}

/// The root of one translation unit's syntax tree.
#[derive(Clone, Debug)]
pub struct TranslationUnit {
    pub node_id: NodeId,
    pub external_declarations: Vec<ExternalDeclaration>,
}

impl TranslationUnit {
    pub fn new(node_id: NodeId, external_declarations: Vec<ExternalDeclaration>) -> Self {
        Self {
            node_id,
            external_declarations,
        }
    }
}

/// Owns a parsed translation unit, its identifier pool, and its diagnostic
/// sink — the three things the binder is specified to consume: `root()`,
/// `find_identifier`, `new_diagnostic`.
///
/// The identifier pool lives here rather than on the semantic model it
/// binds into, because identifiers (a declarator's name, a tag's name) are
/// already attached to syntax nodes before a `SemanticModel` exists; the
/// model the binder builds only ever reads the handles the tree already
/// handed out, it never mints its own.
pub struct SyntaxTree {
    root: TranslationUnit,
    identifiers: IdentifierPool,
    diagnostics: Handler,
}

impl SyntaxTree {
    pub fn new(root: TranslationUnit, identifiers: IdentifierPool) -> Self {
        Self {
            root,
            identifiers,
            diagnostics: Handler::new(),
        }
    }

    /// Builds a tree with a fresh, empty identifier pool — the common case
    /// for tests that intern everything through [`SyntaxTree::find_identifier`]
    /// while constructing the tree (via a separate, throwaway pool mirrored
    /// into this one is *not* how this works: callers should intern through
    /// the same [`IdentifierPool`] they pass to [`SyntaxTree::new`] while
    /// building node identifiers, then hand that pool here).
    pub fn root(&self) -> &TranslationUnit {
        &self.root
    }

    /// Interns `text`, returning a stable handle to it.
    pub fn find_identifier(&mut self, text: &str) -> Identifier {
        self.identifiers.intern(text)
    }

    /// Resolves an identifier back to its text (for diagnostic messages).
    pub fn resolve_identifier(&self, id: Identifier) -> &str {
        self.identifiers.resolve(id)
    }

    /// Appends a diagnostic to the sink.
    pub fn new_diagnostic(&self, code: DiagnosticCode, message: impl Into<String>, token: &SyntaxToken) {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(token.span)
            .emit(&self.diagnostics);
    }

    /// Appends a diagnostic at a raw span, for cases with no token handy.
    pub fn new_diagnostic_at(&self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(&self.diagnostics);
    }

    /// All diagnostics reported so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.diagnostics()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}
