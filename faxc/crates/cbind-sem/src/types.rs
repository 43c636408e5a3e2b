//! The C type model: an arena of [`TypeData`] values addressed by [`TypeId`].
//!
//! Types are built bottom-up as the binder walks specifiers and
//! declarators. A `Qualified` that needs another qualifier merged in is a
//! new allocation, not a patch of an existing one — types in the arena are
//! never mutated after they're pushed, only [`crate::symbol::SymbolKind::Typedef`]
//! synonyms are ever retargeted, and that happens through
//! [`crate::model::SemanticModel::retype`], never by writing through a
//! `TypeId`.

use cbind_syntax::{ArrayExtent, DataTypeKeyword, QualifierKeyword, TagKind};
use cbind_util::{define_idx, Identifier};

define_idx!(TypeId);

/// A basic arithmetic type, after the specifier-composition table has
/// settled a sequence of keywords like `unsigned long int` onto one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Char,
    CharS,
    CharU,
    Short,
    ShortS,
    ShortU,
    Int,
    IntS,
    IntU,
    Long,
    LongS,
    LongU,
    LongLong,
    LongLongS,
    LongLongU,
    Float,
    Double,
    LongDouble,
    Bool,
    FloatComplex,
    DoubleComplex,
    LongDoubleComplex,
}

/// The four qualifiers a type can carry. A plain flag struct rather than a
/// bitflags newtype: there are exactly four of them, fixed by the
/// language, and `Qualifiers { const_: true, ..Qualifiers::NONE }` reads as
/// plainly as a bitflags macro would for a set this small.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Qualifiers {
    pub const_: bool,
    pub volatile: bool,
    pub restrict: bool,
    pub atomic: bool,
}

impl Qualifiers {
    pub const NONE: Qualifiers = Qualifiers {
        const_: false,
        volatile: false,
        restrict: false,
        atomic: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Qualifiers::NONE
    }

    /// Returns `self` with `qualifier` set, for building up a set fluently.
    pub fn with(mut self, qualifier: QualifierKeyword) -> Self {
        self.set(qualifier);
        self
    }

    pub fn set(&mut self, qualifier: QualifierKeyword) {
        match qualifier {
            QualifierKeyword::Const => self.const_ = true,
            QualifierKeyword::Volatile => self.volatile = true,
            QualifierKeyword::Restrict => self.restrict = true,
            QualifierKeyword::Atomic => self.atomic = true,
        }
    }
}

/// One type, as stored in a [`crate::model::SemanticModel`]'s type arena.
///
/// Reuses `cbind_syntax`'s `ArrayExtent` and `TagKind` directly rather than
/// redefining near-identical enums here: an array's extent and a tag's
/// struct/union/enum-ness are syntactic facts the binder only ever carries
/// through, never recomputes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeData {
    Basic(BasicKind),
    Void,
    Pointer {
        referenced: TypeId,
        from_array_decay: bool,
        from_function_decay: bool,
    },
    Array {
        element: TypeId,
        extent: ArrayExtent,
    },
    Function {
        result: TypeId,
        parameters: Vec<TypeId>,
        variadic: bool,
    },
    /// A tag type referenced *by name*, never inlined — this is what lets a
    /// `struct S` contain a `struct S *` member without an infinitely
    /// nested type: a tag's member layout lives on its `Symbol`, looked up
    /// by name whenever something needs it, not duplicated into every
    /// `TypeData::Tag` that names the tag.
    Tag {
        kind: TagKind,
        tag: Identifier,
    },
    /// An unresolved reference to a `typedef` name, resolved to its
    /// synonymized type only by a call to
    /// [`crate::model::SemanticModel::retype`].
    Typedef {
        name: Identifier,
    },
    Qualified {
        unqualified: TypeId,
        qualifiers: Qualifiers,
    },
}

impl TypeData {
    pub fn is_function(&self) -> bool {
        matches!(self, TypeData::Function { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeData::Array { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeData::Pointer { .. })
    }

    pub fn is_typedef(&self) -> bool {
        matches!(self, TypeData::Typedef { .. })
    }
}

/// Composes one incoming basic-type keyword onto the kind accumulated so
/// far in one specifier sequence. `current` is `None` before any data-type
/// keyword has been seen.
///
/// Returns `Err(())` for every combination not named below; an unnamed
/// combination is always a "two or more data types" diagnostic, never
/// silent acceptance. The caller leaves `current` unchanged on `Err`.
///
/// A specifier sequence is an unordered set of keywords, so the table is
/// written to compose the same way regardless of which keyword arrives
/// first — `unsigned long` and `long unsigned` both land on `LongU`.
pub fn compose_basic(current: Option<BasicKind>, keyword: DataTypeKeyword) -> Result<BasicKind, ()> {
    use BasicKind::*;
    use DataTypeKeyword as Kw;

    match (current, keyword) {
        (None, Kw::Char) => Ok(Char),
        (None, Kw::Short) => Ok(Short),
        (None, Kw::Int) => Ok(Int),
        (None, Kw::Long) => Ok(Long),
        (None, Kw::Float) => Ok(Float),
        (None, Kw::Double) => Ok(Double),
        (None, Kw::Bool) => Ok(Bool),
        (None, Kw::Signed) => Ok(IntS),
        (None, Kw::Unsigned) => Ok(IntU),
        (None, Kw::Complex) => Ok(DoubleComplex),

        (Some(Char), Kw::Signed) => Ok(CharS),
        (Some(Char), Kw::Unsigned) => Ok(CharU),

        (Some(Short), Kw::Int) => Ok(Short),
        (Some(Short), Kw::Signed) => Ok(ShortS),
        (Some(Short), Kw::Unsigned) => Ok(ShortU),
        (Some(ShortS), Kw::Int) => Ok(ShortS),
        (Some(ShortU), Kw::Int) => Ok(ShortU),

        (Some(Int), Kw::Short) => Ok(Short),
        (Some(Int), Kw::Long) => Ok(Long),
        (Some(Int), Kw::Signed) => Ok(IntS),
        (Some(Int), Kw::Unsigned) => Ok(IntU),
        (Some(IntS), Kw::Long) => Ok(LongS),
        (Some(IntS), Kw::Short) => Ok(ShortS),
        (Some(IntS), Kw::Int) => Ok(IntS),
        (Some(IntU), Kw::Long) => Ok(LongU),
        (Some(IntU), Kw::Short) => Ok(ShortU),
        (Some(IntU), Kw::Int) => Ok(IntU),

        (Some(IntS), Kw::Char) => Ok(CharS),
        (Some(IntU), Kw::Char) => Ok(CharU),

        (Some(Long), Kw::Int) => Ok(Long),
        (Some(Long), Kw::Long) => Ok(LongLong),
        (Some(Long), Kw::Double) => Ok(LongDouble),
        (Some(Long), Kw::Signed) => Ok(LongS),
        (Some(Long), Kw::Unsigned) => Ok(LongU),
        (Some(LongS), Kw::Int) => Ok(LongS),
        (Some(LongS), Kw::Long) => Ok(LongLongS),
        (Some(LongU), Kw::Int) => Ok(LongU),
        (Some(LongU), Kw::Long) => Ok(LongLongU),

        (Some(LongLong), Kw::Int) => Ok(LongLong),
        (Some(LongLong), Kw::Signed) => Ok(LongLongS),
        (Some(LongLong), Kw::Unsigned) => Ok(LongLongU),
        (Some(LongLongS), Kw::Int) => Ok(LongLongS),
        (Some(LongLongU), Kw::Int) => Ok(LongLongU),

        (Some(Float), Kw::Complex) => Ok(FloatComplex),
        (Some(Double), Kw::Long) => Ok(LongDouble),
        (Some(Double), Kw::Complex) => Ok(DoubleComplex),
        (Some(LongDouble), Kw::Complex) => Ok(LongDoubleComplex),

        _ => Err(()),
    }
}
