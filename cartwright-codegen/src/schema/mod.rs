//! The canonical schema registry
//!
//! One registry feeds all four generators. The migration writer reads
//! columns and indexes, the model writer reads fillable/casts/relationships/
//! scopes, the enum writer reads the enum bindings, and the seeder writer
//! reads seed hints and the foreign-key graph, all from the same
//! [`TableDefinition`]s, so there is no parallel description to drift.

pub mod enums;
pub mod graph;
pub mod storefront;
pub mod table;
pub mod types;

pub use enums::EnumDefinition;
pub use table::TableDefinition;
pub use types::{
    col, ColumnDefinition, ColumnType, IndexDefinition, OnDelete, PrimaryKey,
    RelationshipDefinition, RelationshipKind, ScopeDefinition, ScopePredicate,
};

use crate::error::GenError;
use once_cell::sync::Lazy;

pub struct SchemaRegistry {
    tables: Vec<TableDefinition>,
    enums: Vec<EnumDefinition>,
}

impl SchemaRegistry {
    /// Build a registry, validating every compiled-in invariant.
    ///
    /// # Panics
    ///
    /// Panics on a registry defect: duplicate table or enum names, enum
    /// columns without values, unresolvable foreign-key references,
    /// composite-key members that do not exist, enum bindings against
    /// unknown tables or columns, or partial label maps. The registry is
    /// configuration compiled into the binary, not user input, so a defect
    /// is a bug to fix at the source, not an error to recover from.
    pub fn new(tables: Vec<TableDefinition>, enums: Vec<EnumDefinition>) -> Self {
        let registry = Self { tables, enums };
        if let Err(defect) = registry.validate() {
            panic!("schema registry defect: {}", defect);
        }
        registry
    }

    fn validate(&self) -> Result<(), String> {
        for (i, table) in self.tables.iter().enumerate() {
            if self.tables[..i].iter().any(|t| t.name == table.name) {
                return Err(format!("table {} declared twice", table.name));
            }
            for column in &table.columns {
                if column.ty == ColumnType::Enum {
                    if column.values.is_empty() {
                        return Err(format!(
                            "{}.{} is an enum column with no values",
                            table.name, column.name
                        ));
                    }
                    for (j, value) in column.values.iter().enumerate() {
                        if column.values[..j].contains(value) {
                            return Err(format!(
                                "{}.{} repeats enum value '{}'",
                                table.name, column.name, value
                            ));
                        }
                    }
                }
                if let Some(target) = column.references {
                    if self.table(target).is_none() {
                        return Err(format!(
                            "{}.{} references unknown table {}",
                            table.name, column.name, target
                        ));
                    }
                }
            }
            if let PrimaryKey::Composite(key) = &table.primary_key {
                for name in key {
                    if table.column(name).is_none() {
                        return Err(format!(
                            "table {} composite key names missing column {}",
                            table.name, name
                        ));
                    }
                }
            }
        }
        for (i, def) in self.enums.iter().enumerate() {
            if self.enums[..i].iter().any(|e| e.enum_name == def.enum_name) {
                return Err(format!("enum {} declared twice", def.enum_name));
            }
            def.validate()?;
            let table = self
                .table(def.table)
                .ok_or_else(|| format!("enum {} binds unknown table {}", def.enum_name, def.table))?;
            if table.column(def.column).is_none() {
                return Err(format!(
                    "enum {} binds unknown column {}.{}",
                    def.enum_name, def.table, def.column
                ));
            }
        }
        Ok(())
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Enum definitions in declaration order.
    pub fn enums(&self) -> &[EnumDefinition] {
        &self.enums
    }

    pub fn enums_for_table(&self, table: &str) -> Vec<&EnumDefinition> {
        self.enums.iter().filter(|e| e.table == table).collect()
    }

    pub fn enum_for_column(&self, table: &str, column: &str) -> Option<&EnumDefinition> {
        self.enums
            .iter()
            .find(|e| e.table == table && e.column == column)
    }

    /// Derived pivot set, declaration order. See [`TableDefinition::is_pivot`].
    pub fn pivot_tables(&self) -> Vec<&'static str> {
        self.tables
            .iter()
            .filter(|t| t.is_pivot())
            .map(|t| t.name)
            .collect()
    }

    /// Seeding order: topological over the foreign-key graph, declaration
    /// order as tie-break.
    ///
    /// # Errors
    ///
    /// A cross-table cycle returns [`GenError::Cycle`].
    pub fn seeding_order(&self) -> Result<Vec<&'static str>, GenError> {
        let nodes: Vec<(&'static str, Vec<&'static str>)> = self
            .tables
            .iter()
            .map(|t| (t.name, t.foreign_tables()))
            .collect();
        graph::topological_order(&nodes)
    }
}

static STOREFRONT: Lazy<SchemaRegistry> = Lazy::new(storefront::storefront_registry);

/// The compiled-in storefront registry, built once per process.
pub fn registry() -> &'static SchemaRegistry {
    &STOREFRONT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_registry_validates() {
        let reg = registry();
        assert!(!reg.tables().is_empty());
        assert!(!reg.enums().is_empty());
    }

    #[test]
    fn test_lookup_miss_is_none() {
        assert!(registry().table("no_such_table").is_none());
    }

    #[test]
    fn test_orders_enum_bindings() {
        let reg = registry();
        let bound = reg.enums_for_table("orders");
        let names: Vec<&str> = bound.iter().map(|e| e.enum_name).collect();
        assert_eq!(names, vec!["OrderStatus", "PaymentStatus", "PaymentMethod"]);
        assert_eq!(
            reg.enum_for_column("orders", "status").unwrap().cases.len(),
            7
        );
    }

    #[test]
    fn test_pivot_set_is_derived() {
        assert_eq!(registry().pivot_tables(), vec!["wishlists"]);
    }

    #[test]
    fn test_seeding_order_respects_foreign_keys() {
        let order = registry().seeding_order().unwrap();
        let pos = |name: &str| order.iter().position(|t| *t == name).unwrap();
        assert!(pos("users") < pos("addresses"));
        assert!(pos("divisions") < pos("addresses"));
        assert!(pos("shops") < pos("products"));
        assert!(pos("products") < pos("product_variants"));
        assert!(pos("orders") < pos("order_items"));
        assert!(pos("users") < pos("wishlists"));
        assert!(pos("products") < pos("wishlists"));
        assert_eq!(order.len(), registry().tables().len());
    }

    #[test]
    #[should_panic(expected = "references unknown table")]
    fn test_unresolvable_foreign_key_panics() {
        let table = TableDefinition::new("orphans", "").columns(vec![
            col("id", ColumnType::Id),
            col("ghost_id", ColumnType::ForeignId).references("ghosts", OnDelete::Cascade),
        ]);
        SchemaRegistry::new(vec![table], Vec::new());
    }

    #[test]
    #[should_panic(expected = "no values")]
    fn test_valueless_enum_column_panics() {
        let table = TableDefinition::new("bad", "")
            .columns(vec![col("id", ColumnType::Id), col("status", ColumnType::Enum)]);
        SchemaRegistry::new(vec![table], Vec::new());
    }
}
