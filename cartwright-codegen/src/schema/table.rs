//! Table definitions
//!
//! A [`TableDefinition`] carries everything every generator needs: columns
//! for migrations, fillable/hidden/relationships/scopes for models, and the
//! per-column seed hints for seeders. One structure, four consumers.

use super::types::{
    ColumnDefinition, ColumnType, IndexDefinition, PrimaryKey, RelationshipDefinition,
    ScopeDefinition,
};

#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: &'static str,
    pub comment: &'static str,
    pub columns: Vec<ColumnDefinition>,
    pub indexes: Vec<IndexDefinition>,
    pub primary_key: PrimaryKey,
    pub relationships: Vec<RelationshipDefinition>,
    pub scopes: Vec<ScopeDefinition>,
    /// Columns excluded from serialized model output
    pub hidden: Vec<&'static str>,
    /// Model receives the Notifiable marker
    pub notifiable: bool,
}

impl TableDefinition {
    pub fn new(name: &'static str, comment: &'static str) -> Self {
        Self {
            name,
            comment,
            columns: Vec::new(),
            indexes: Vec::new(),
            primary_key: PrimaryKey::Auto,
            relationships: Vec::new(),
            scopes: Vec::new(),
            hidden: Vec::new(),
            notifiable: false,
        }
    }

    pub fn columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = columns;
        self
    }

    pub fn index(mut self, index: IndexDefinition) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn composite_key(mut self, columns: &[&'static str]) -> Self {
        self.primary_key = PrimaryKey::Composite(columns.to_vec());
        self
    }

    pub fn relationship(mut self, rel: RelationshipDefinition) -> Self {
        self.relationships.push(rel);
        self
    }

    pub fn scope(mut self, scope: ScopeDefinition) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn hidden(mut self, columns: &[&'static str]) -> Self {
        self.hidden = columns.to_vec();
        self
    }

    pub fn notifiable(mut self) -> Self {
        self.notifiable = true;
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Both `created_at` and `updated_at` present: the migration emits the
    /// combined timestamps block instead of per-column statements.
    pub fn has_timestamps(&self) -> bool {
        self.column("created_at").is_some() && self.column("updated_at").is_some()
    }

    pub fn has_soft_deletes(&self) -> bool {
        self.column("deleted_at").is_some()
    }

    pub fn has_composite_key(&self) -> bool {
        matches!(self.primary_key, PrimaryKey::Composite(_))
    }

    /// Columns in the primary key, whichever mode is declared.
    pub fn primary_key_columns(&self) -> Vec<&'static str> {
        match &self.primary_key {
            PrimaryKey::Auto => vec!["id"],
            PrimaryKey::Composite(cols) => cols.clone(),
        }
    }

    /// Mass-assignment allowlist: every column except `id` and the reserved
    /// timestamps, in declaration order.
    pub fn fillable(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.ty != ColumnType::Id && !c.is_reserved_timestamp())
            .map(|c| c.name)
            .collect()
    }

    /// Columns a seeder supplies values for: fillable minus nothing further;
    /// identity and reserved timestamps are already excluded.
    pub fn seedable_columns(&self) -> Vec<&ColumnDefinition> {
        self.columns
            .iter()
            .filter(|c| c.ty != ColumnType::Id && !c.is_reserved_timestamp())
            .collect()
    }

    /// Tables this one references through `ForeignId` columns, self-references
    /// excluded (nullable parents make them satisfiable within one table).
    pub fn foreign_tables(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter_map(|c| c.references)
            .filter(|target| *target != self.name)
            .collect()
    }

    /// Derived pivot-ness: a composite key of exactly two `ForeignId`
    /// columns, with every remaining column a key member or a reserved
    /// timestamp. Not a hand-maintained list.
    pub fn is_pivot(&self) -> bool {
        let key = match &self.primary_key {
            PrimaryKey::Composite(cols) if cols.len() == 2 => cols,
            _ => return false,
        };
        let key_cols_are_fks = key.iter().all(|name| {
            self.column(name)
                .map(|c| c.ty == ColumnType::ForeignId)
                .unwrap_or(false)
        });
        let rest_is_noise = self
            .columns
            .iter()
            .all(|c| key.contains(&c.name) || c.is_reserved_timestamp());
        key_cols_are_fks && rest_is_noise
    }
}
