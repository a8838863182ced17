//! Kind classification for indexer UIDs.
//!
//! The indexer tags every record with a UID string such as
//! `source.lang.swift.decl.class`. This module maps those UIDs onto the
//! closed [`Kind`] enumeration the rest of the pipeline works with. The
//! mapping is total in a specific sense: a UID either resolves to a known
//! kind or to an explicit [`Resolved::Unknown`] carrying whether it lies in
//! the declaration namespace. Unknown declaration UIDs abort the build
//! (see [`BuildError::UnsupportedKind`](crate::BuildError::UnsupportedKind));
//! everything else unknown is skippable noise.

use serde::{Serialize, Serializer};

/// UID namespace shared by every Swift declaration kind.
const DECL_PREFIX: &str = "source.lang.swift.decl.";

/// UID of `// MARK:`-style comment records.
const MARK_UID: &str = "source.lang.swift.syntaxtype.comment.mark";

/// Semantic category of a documentation node.
///
/// Covers the declaration kinds the indexer emits plus two synthetic
/// variants: [`Mark`](Self::Mark) for section comments (never documented)
/// and [`Overview`](Self::Overview) for the container nodes introduced by
/// the grouping pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Class,
    Struct,
    Enum,
    EnumElement,
    Protocol,
    Extension,
    Initializer,
    Deinitializer,
    ClassMethod,
    InstanceMethod,
    StaticMethod,
    Function,
    Subscript,
    TypeAlias,
    ClassVariable,
    InstanceVariable,
    StaticVariable,
    GlobalVariable,
    LocalVariable,
    Parameter,
    /// `// MARK:` section comment.
    Mark,
    /// Synthetic container bucketing same-kind top-level declarations.
    Overview,
}

/// Result of classifying a raw kind UID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The UID maps to a known kind.
    Known(Kind),
    /// The UID is not in the table.
    Unknown {
        /// The UID as it appeared in the record.
        uid: String,
        /// True when the UID lies in the declaration namespace. An unknown
        /// declaration is a fatal classifier gap, not skippable noise.
        declaration: bool,
    },
}

impl Kind {
    /// Classify a raw kind UID.
    #[must_use]
    pub fn resolve(uid: &str) -> Resolved {
        let kind = match uid {
            "source.lang.swift.decl.class" => Self::Class,
            "source.lang.swift.decl.struct" => Self::Struct,
            "source.lang.swift.decl.enum" => Self::Enum,
            "source.lang.swift.decl.enumelement" => Self::EnumElement,
            "source.lang.swift.decl.protocol" => Self::Protocol,
            "source.lang.swift.decl.extension" => Self::Extension,
            "source.lang.swift.decl.function.constructor" => Self::Initializer,
            "source.lang.swift.decl.function.destructor" => Self::Deinitializer,
            "source.lang.swift.decl.function.method.class" => Self::ClassMethod,
            "source.lang.swift.decl.function.method.instance" => Self::InstanceMethod,
            "source.lang.swift.decl.function.method.static" => Self::StaticMethod,
            "source.lang.swift.decl.function.free" => Self::Function,
            "source.lang.swift.decl.function.subscript" => Self::Subscript,
            "source.lang.swift.decl.typealias" => Self::TypeAlias,
            "source.lang.swift.decl.var.class" => Self::ClassVariable,
            "source.lang.swift.decl.var.instance" => Self::InstanceVariable,
            "source.lang.swift.decl.var.static" => Self::StaticVariable,
            "source.lang.swift.decl.var.global" => Self::GlobalVariable,
            "source.lang.swift.decl.var.local" => Self::LocalVariable,
            "source.lang.swift.decl.var.parameter" => Self::Parameter,
            MARK_UID => Self::Mark,
            _ => {
                return Resolved::Unknown {
                    uid: uid.to_owned(),
                    declaration: uid.starts_with(DECL_PREFIX),
                };
            }
        };
        Resolved::Known(kind)
    }

    /// Whether nodes of this kind are documentable declarations.
    #[must_use]
    pub fn is_declaration(self) -> bool {
        !matches!(self, Self::Mark | Self::Overview)
    }

    /// Whether this kind is a `// MARK:` section comment.
    #[must_use]
    pub fn is_mark(self) -> bool {
        matches!(self, Self::Mark)
    }

    /// Human-readable singular label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Enum => "Enum",
            Self::EnumElement => "Enum Element",
            Self::Protocol => "Protocol",
            Self::Extension => "Extension",
            Self::Initializer => "Initializer",
            Self::Deinitializer => "Deinitializer",
            Self::ClassMethod => "Class Method",
            Self::InstanceMethod => "Instance Method",
            Self::StaticMethod => "Static Method",
            Self::Function => "Function",
            Self::Subscript => "Subscript",
            Self::TypeAlias => "Type Alias",
            Self::ClassVariable => "Class Variable",
            Self::InstanceVariable => "Instance Variable",
            Self::StaticVariable => "Static Variable",
            Self::GlobalVariable => "Global Variable",
            Self::LocalVariable => "Local Variable",
            Self::Parameter => "Parameter",
            Self::Mark => "Mark",
            Self::Overview => "Overview",
        }
    }

    /// Human-readable plural label, used to name overview pages.
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Struct => "Structs",
            Self::Enum => "Enums",
            Self::EnumElement => "Enum Elements",
            Self::Protocol => "Protocols",
            Self::Extension => "Extensions",
            Self::Initializer => "Initializers",
            Self::Deinitializer => "Deinitializers",
            Self::ClassMethod => "Class Methods",
            Self::InstanceMethod => "Instance Methods",
            Self::StaticMethod => "Static Methods",
            Self::Function => "Functions",
            Self::Subscript => "Subscripts",
            Self::TypeAlias => "Type Aliases",
            Self::ClassVariable => "Class Variables",
            Self::InstanceVariable => "Instance Variables",
            Self::StaticVariable => "Static Variables",
            Self::GlobalVariable => "Global Variables",
            Self::LocalVariable => "Local Variables",
            Self::Parameter => "Parameters",
            Self::Mark => "Marks",
            Self::Overview => "Overviews",
        }
    }

    /// All declaration kinds in grouping priority order.
    ///
    /// The grouping pass walks this list front to back, so containers come
    /// first, then callables, then variables.
    #[must_use]
    pub fn all_declarations() -> &'static [Kind] {
        const ALL: [Kind; 20] = [
            Kind::Class,
            Kind::Struct,
            Kind::Enum,
            Kind::EnumElement,
            Kind::Protocol,
            Kind::Extension,
            Kind::Initializer,
            Kind::Deinitializer,
            Kind::ClassMethod,
            Kind::InstanceMethod,
            Kind::StaticMethod,
            Kind::Function,
            Kind::Subscript,
            Kind::TypeAlias,
            Kind::ClassVariable,
            Kind::InstanceVariable,
            Kind::StaticVariable,
            Kind::GlobalVariable,
            Kind::LocalVariable,
            Kind::Parameter,
        ];
        &ALL
    }
}

impl Serialize for Kind {
    /// Serialized as the singular label, e.g. `"Class Method"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================
