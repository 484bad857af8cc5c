//! Model metadata traits for generated model files
//!
//! Generated models are unit structs carrying their table metadata as
//! associated consts, plus inherent methods returning [`Relation`] values for
//! each declared relationship and [`Condition`] values for query scopes.

/// A declared attribute coercion.
///
/// Casts are recorded as data so callers (serializers, form layers) can apply
/// them uniformly. `Enum` carries the generated enum type's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    Date,
    DateTime,
    /// Decimal with the given scale (digits after the point)
    Decimal(u32),
    Json,
    Bool,
    Enum(&'static str),
}

/// Trait implemented by every generated model.
pub trait Model {
    /// Table backing this model
    const TABLE: &'static str;

    /// Primary key column(s)
    const PRIMARY_KEY: &'static [&'static str];

    /// Mass-assignment allowlist, in column declaration order
    const FILLABLE: &'static [&'static str];

    /// Fields hidden from serialized output
    const HIDDEN: &'static [&'static str];

    /// Attribute casts, in column declaration order
    const CASTS: &'static [(&'static str, Cast)];
}

/// Marker for models whose table carries a `deleted_at` column.
pub trait SoftDeletes: Model {}

/// Marker for models that can receive notifications.
pub trait Notifiable: Model {}

/// Relationship kinds supported by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
    BelongsToMany,
    MorphTo,
}

/// A declarative relationship, as returned by generated accessor methods.
///
/// Nothing is resolved here; this is metadata a query layer consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub kind: RelationKind,
    /// Related model name; for `MorphTo` this is the morph name instead
    pub related: String,
    /// Explicit foreign key, when the default convention does not apply
    pub foreign_key: Option<String>,
    /// Equality filter scoping the relationship (column, value)
    pub filter: Option<(String, String)>,
    /// Pivot table, for `BelongsToMany`
    pub pivot: Option<String>,
}

impl Relation {
    fn new(kind: RelationKind, related: impl Into<String>) -> Self {
        Self {
            kind,
            related: related.into(),
            foreign_key: None,
            filter: None,
            pivot: None,
        }
    }

    pub fn belongs_to(related: impl Into<String>) -> Self {
        Self::new(RelationKind::BelongsTo, related)
    }

    pub fn has_many(related: impl Into<String>) -> Self {
        Self::new(RelationKind::HasMany, related)
    }

    pub fn has_one(related: impl Into<String>) -> Self {
        Self::new(RelationKind::HasOne, related)
    }

    pub fn belongs_to_many(related: impl Into<String>) -> Self {
        Self::new(RelationKind::BelongsToMany, related)
    }

    /// Polymorphic parent accessor; `name` is the morph name (e.g. "attachable").
    pub fn morph_to(name: impl Into<String>) -> Self {
        Self::new(RelationKind::MorphTo, name)
    }

    /// Override the conventional foreign key.
    pub fn foreign_key(mut self, key: impl Into<String>) -> Self {
        self.foreign_key = Some(key.into());
        self
    }

    /// Scope the relationship to rows where `column = value`.
    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some((column.into(), value.into()));
        self
    }

    /// Set the pivot table for a many-to-many relationship.
    pub fn pivot(mut self, table: impl Into<String>) -> Self {
        self.pivot = Some(table.into());
        self
    }
}

/// A named predicate, as returned by generated scope methods.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = value`
    Eq { column: String, value: String },
    /// `column IS NULL`
    IsNull { column: String },
}

impl Condition {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Condition::IsNull {
            column: column.into(),
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Condition::Eq { column, .. } | Condition::IsNull { column } => column,
        }
    }
}
