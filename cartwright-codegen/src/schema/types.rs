//! Column, index, relationship, and scope definitions
//!
//! These are the building blocks of [`super::TableDefinition`]. Everything is
//! `&'static str` because the registry is compiled-in configuration; the
//! builder methods exist so table declarations in `storefront.rs` read like
//! a schema file rather than struct literals.

/// Abstract column type token.
///
/// `Other` is the permissive passthrough: its token lands in the SQL output
/// uppercased and otherwise untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Id,
    String,
    Text,
    LongText,
    Integer,
    BigInt,
    TinyInt,
    SmallInt,
    Decimal,
    Boolean,
    DateTime,
    Timestamp,
    Date,
    Json,
    Enum,
    ForeignId,
    RememberToken,
    Other(&'static str),
}

/// Referential action for a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Cascade,
    SetNull,
    Restrict,
}

impl OnDelete {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
            OnDelete::Restrict => "RESTRICT",
        }
    }
}

/// One column within a table, in declaration order.
#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    /// Rendered verbatim after DEFAULT; string defaults carry their quotes
    pub default: Option<&'static str>,
    pub length: Option<u32>,
    /// (total digits, decimal places) for `Decimal`
    pub precision: Option<(u32, u32)>,
    /// Target table for `ForeignId`
    pub references: Option<&'static str>,
    pub on_delete: Option<OnDelete>,
    /// Literal value list for `Enum` columns
    pub values: Vec<&'static str>,
    /// Verbatim synthetic-data expression overriding the inferred strategy
    pub seed_with: Option<&'static str>,
}

impl ColumnDefinition {
    pub fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            unique: false,
            default: None,
            length: None,
            precision: None,
            references: None,
            on_delete: None,
            values: Vec::new(),
            seed_with: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, total: u32, scale: u32) -> Self {
        self.precision = Some((total, scale));
        self
    }

    pub fn references(mut self, table: &'static str, on_delete: OnDelete) -> Self {
        self.references = Some(table);
        self.on_delete = Some(on_delete);
        self
    }

    pub fn values(mut self, values: &[&'static str]) -> Self {
        self.values = values.to_vec();
        self
    }

    pub fn seed_with(mut self, expr: &'static str) -> Self {
        self.seed_with = Some(expr);
        self
    }

    /// Reserved timestamp names collapse into composite migration helpers
    /// and are excluded from fillable lists and seed rows.
    pub fn is_reserved_timestamp(&self) -> bool {
        matches!(self.name, "created_at" | "updated_at" | "deleted_at")
    }
}

/// Shorthand used throughout the registry declarations.
pub fn col(name: &'static str, ty: ColumnType) -> ColumnDefinition {
    ColumnDefinition::new(name, ty)
}

/// A secondary index over one or more columns.
#[derive(Debug, Clone)]
pub struct IndexDefinition {
    pub columns: Vec<&'static str>,
    pub unique: bool,
}

impl IndexDefinition {
    pub fn on(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec(),
            unique: false,
        }
    }

    pub fn unique(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec(),
            unique: true,
        }
    }

    /// Conventional index name: `idx_{table}_{col1}_{col2}`.
    pub fn name(&self, table: &str) -> String {
        format!("idx_{}_{}", table, self.columns.join("_"))
    }
}

/// Primary key mode. Composite keys suppress the implicit `id` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryKey {
    /// Implicit auto-increment `id`
    Auto,
    /// Explicit composite key, in declared column order
    Composite(Vec<&'static str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    BelongsTo,
    HasMany,
    HasOne,
    BelongsToMany,
    MorphTo,
}

/// A declared relationship, rendered as one accessor method on the model.
#[derive(Debug, Clone)]
pub struct RelationshipDefinition {
    /// Accessor method name, e.g. `wards`
    pub name: &'static str,
    pub kind: RelationshipKind,
    /// Related model name; the morph name for `MorphTo`
    pub target: &'static str,
    pub foreign_key: Option<&'static str>,
    /// Equality condition scoping the relation, as `column=value`
    pub condition: Option<&'static str>,
    /// Pivot table for `BelongsToMany`
    pub pivot: Option<&'static str>,
}

impl RelationshipDefinition {
    fn new(name: &'static str, kind: RelationshipKind, target: &'static str) -> Self {
        Self {
            name,
            kind,
            target,
            foreign_key: None,
            condition: None,
            pivot: None,
        }
    }

    pub fn belongs_to(name: &'static str, target: &'static str) -> Self {
        Self::new(name, RelationshipKind::BelongsTo, target)
    }

    pub fn has_many(name: &'static str, target: &'static str) -> Self {
        Self::new(name, RelationshipKind::HasMany, target)
    }

    pub fn has_one(name: &'static str, target: &'static str) -> Self {
        Self::new(name, RelationshipKind::HasOne, target)
    }

    pub fn belongs_to_many(name: &'static str, target: &'static str, pivot: &'static str) -> Self {
        let mut rel = Self::new(name, RelationshipKind::BelongsToMany, target);
        rel.pivot = Some(pivot);
        rel
    }

    pub fn morph_to(name: &'static str) -> Self {
        Self::new(name, RelationshipKind::MorphTo, name)
    }

    pub fn foreign_key(mut self, key: &'static str) -> Self {
        self.foreign_key = Some(key);
        self
    }

    pub fn condition(mut self, condition: &'static str) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Split a `column=value` condition on the first `=`.
    pub fn condition_parts(&self) -> Option<(&'static str, &'static str)> {
        self.condition.and_then(|c| c.split_once('='))
    }
}

/// Predicate form of a scope. Equality covers most scopes; `IsNull` exists
/// for columns like `read_at` where absence is the interesting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopePredicate {
    Eq(&'static str),
    IsNull,
}

/// A named predicate rendered as a scope constructor on the model.
#[derive(Debug, Clone)]
pub struct ScopeDefinition {
    pub name: &'static str,
    pub column: &'static str,
    pub predicate: ScopePredicate,
}

impl ScopeDefinition {
    pub fn eq(name: &'static str, column: &'static str, value: &'static str) -> Self {
        Self {
            name,
            column,
            predicate: ScopePredicate::Eq(value),
        }
    }

    pub fn is_null(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            predicate: ScopePredicate::IsNull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder_chain() {
        let c = col("price", ColumnType::Decimal).precision(12, 2).nullable();
        assert_eq!(c.name, "price");
        assert_eq!(c.precision, Some((12, 2)));
        assert!(c.nullable);
        assert!(!c.unique);
    }

    #[test]
    fn test_reserved_timestamp_names() {
        assert!(col("created_at", ColumnType::Timestamp).is_reserved_timestamp());
        assert!(col("deleted_at", ColumnType::Timestamp).is_reserved_timestamp());
        assert!(!col("posted_at", ColumnType::Timestamp).is_reserved_timestamp());
    }

    #[test]
    fn test_index_name_convention() {
        let idx = IndexDefinition::on(&["shop_id", "status"]);
        assert_eq!(idx.name("orders"), "idx_orders_shop_id_status");
    }

    #[test]
    fn test_condition_parts_splits_on_first_equals() {
        let rel = RelationshipDefinition::has_many("wards", "Division")
            .foreign_key("parent_id")
            .condition("division_type=ward");
        assert_eq!(rel.condition_parts(), Some(("division_type", "ward")));

        let odd = RelationshipDefinition::has_many("x", "Y").condition("a=b=c");
        assert_eq!(odd.condition_parts(), Some(("a", "b=c")));
    }

    #[test]
    fn test_scope_predicate_forms() {
        let active = ScopeDefinition::eq("active", "status", "active");
        assert_eq!(active.predicate, ScopePredicate::Eq("active"));

        let unread = ScopeDefinition::is_null("unread", "read_at");
        assert_eq!(unread.column, "read_at");
        assert_eq!(unread.predicate, ScopePredicate::IsNull);
    }
}
