//! Stable diagnostic identifiers.
//!
//! A [`DiagnosticCode`] pairs a stable ID string (the external contract —
//! tooling and tests may match against it byte-for-byte, so once assigned it
//! never changes) with a short human-readable tag and a [`Category`].
//!
//! Stable IDs follow the dotted/dashed scheme `"Binder-<class>[-<clause>][-<variant>]"`,
//! e.g. `"Binder-200-6.7.6.3-1-A"`. The numeric `<class>` groups diagnostics by
//! binder phase (`000` misc, `100` specifiers, `200` declarators, `300`
//! qualifiers); the clause reference and variant letter disambiguate within
//! it. This is not a sequential counter, so it cannot be represented as a
//! `{prefix, number}` pair without lossy re-encoding.
//!
//! # Examples
//!
//! ```
//! use cbind_util::diagnostic::codes::FUNCTION_RETURNING_FUNCTION;
//!
//! assert_eq!(FUNCTION_RETURNING_FUNCTION.stable_id(), "Binder-200-6.7.6.3-1-A");
//! ```

/// The diagnostic's subject area, used to route and filter diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Produced while binding declarations to types and symbols.
    Binding,
}

/// A unique, stable identifier for a diagnostic message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    stable_id: &'static str,
    short_tag: &'static str,
    category: Category,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    #[inline]
    pub const fn new(stable_id: &'static str, short_tag: &'static str, category: Category) -> Self {
        Self {
            stable_id,
            short_tag,
            category,
        }
    }

    /// The external, byte-for-byte stable identifier (e.g. `"Binder-000"`).
    #[inline]
    pub const fn stable_id(&self) -> &'static str {
        self.stable_id
    }

    /// A short bracketed tag summarizing the diagnostic (e.g. `"useless declaration"`).
    #[inline]
    pub const fn short_tag(&self) -> &'static str {
        self.short_tag
    }

    /// The diagnostic's category.
    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// A declaration that declares nothing: no declarator, no tag, no members.
    pub const USELESS_DECLARATION: Self =
        Self::new("Binder-000", "useless declaration", Category::Binding);

    /// No type specifier appears in a declaration; `int` is assumed.
    pub const TYPE_SPECIFIER_MISSING: Self = Self::new(
        "Binder-100-6.7.2-2-A",
        "type specifier missing",
        Category::Binding,
    );

    /// A specifier sequence names a type that cannot be resolved to any basic
    /// type, typedef, or tag type.
    pub const INVALID_TYPE: Self =
        Self::new("Binder-100-6.7.2-2-B", "invalid type", Category::Binding);

    /// Two or more incompatible basic-type specifiers appear in one sequence
    /// (e.g. `int double x;`).
    pub const TWO_OR_MORE_DATA_TYPES: Self = Self::new(
        "Binder-100-6.7.2-2-C",
        "two or more data types",
        Category::Binding,
    );

    /// A declarator names a function returning a function.
    pub const FUNCTION_RETURNING_FUNCTION: Self = Self::new(
        "Binder-200-6.7.6.3-1-A",
        "function returning function",
        Category::Binding,
    );

    /// A declarator names a function returning an array.
    pub const FUNCTION_RETURNING_ARRAY: Self = Self::new(
        "Binder-200-6.7.6.3-1-B",
        "function returning array",
        Category::Binding,
    );

    /// `restrict` qualifies something other than a pointer.
    pub const INVALID_USE_OF_RESTRICT: Self = Self::new(
        "Binder-300-6.7.3-2",
        "invalid use of restrict",
        Category::Binding,
    );

    /// A declarator names an array of function type.
    pub const ARRAY_OF_FUNCTION: Self = Self::new(
        "Binder-200-6.7.6.2-1-A",
        "array of function",
        Category::Binding,
    );
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.stable_id)
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stable_id)
    }
}

/// A declaration that declares nothing.
pub const USELESS_DECLARATION: DiagnosticCode = DiagnosticCode::USELESS_DECLARATION;
/// Missing type specifier, defaults to `int`.
pub const TYPE_SPECIFIER_MISSING: DiagnosticCode = DiagnosticCode::TYPE_SPECIFIER_MISSING;
/// Specifier sequence names no resolvable type.
pub const INVALID_TYPE: DiagnosticCode = DiagnosticCode::INVALID_TYPE;
/// Two or more incompatible basic-type specifiers.
pub const TWO_OR_MORE_DATA_TYPES: DiagnosticCode = DiagnosticCode::TWO_OR_MORE_DATA_TYPES;
/// Function returning a function.
pub const FUNCTION_RETURNING_FUNCTION: DiagnosticCode = DiagnosticCode::FUNCTION_RETURNING_FUNCTION;
/// Function returning an array.
pub const FUNCTION_RETURNING_ARRAY: DiagnosticCode = DiagnosticCode::FUNCTION_RETURNING_ARRAY;
/// `restrict` used on a non-pointer.
pub const INVALID_USE_OF_RESTRICT: DiagnosticCode = DiagnosticCode::INVALID_USE_OF_RESTRICT;
/// Array of function type.
pub const ARRAY_OF_FUNCTION: DiagnosticCode = DiagnosticCode::ARRAY_OF_FUNCTION;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_id_is_the_external_contract() {
        assert_eq!(
            FUNCTION_RETURNING_FUNCTION.stable_id(),
            "Binder-200-6.7.6.3-1-A"
        );
        assert_eq!(
            FUNCTION_RETURNING_ARRAY.stable_id(),
            "Binder-200-6.7.6.3-1-B"
        );
        assert_eq!(TYPE_SPECIFIER_MISSING.stable_id(), "Binder-100-6.7.2-2-A");
        assert_eq!(INVALID_TYPE.stable_id(), "Binder-100-6.7.2-2-B");
        assert_eq!(TWO_OR_MORE_DATA_TYPES.stable_id(), "Binder-100-6.7.2-2-C");
        assert_eq!(INVALID_USE_OF_RESTRICT.stable_id(), "Binder-300-6.7.3-2");
        assert_eq!(USELESS_DECLARATION.stable_id(), "Binder-000");
    }

    #[test]
    fn display_is_the_stable_id() {
        assert_eq!(format!("{}", USELESS_DECLARATION), "Binder-000");
    }

    #[test]
    fn debug_wraps_the_stable_id() {
        assert_eq!(
            format!("{:?}", USELESS_DECLARATION),
            "DiagnosticCode(Binder-000)"
        );
    }

    #[test]
    fn category_is_binding_for_every_binder_code() {
        for code in [
            USELESS_DECLARATION,
            TYPE_SPECIFIER_MISSING,
            INVALID_TYPE,
            TWO_OR_MORE_DATA_TYPES,
            FUNCTION_RETURNING_FUNCTION,
            FUNCTION_RETURNING_ARRAY,
            INVALID_USE_OF_RESTRICT,
            ARRAY_OF_FUNCTION,
        ] {
            assert_eq!(code.category(), Category::Binding);
        }
    }

    #[test]
    fn codes_with_the_same_stable_id_are_equal() {
        let a = DiagnosticCode::new("Binder-000", "useless declaration", Category::Binding);
        let b = DiagnosticCode::new("Binder-000", "useless declaration", Category::Binding);
        assert_eq!(a, b);
    }
}
