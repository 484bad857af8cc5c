//! Enum generation and model synchronization
//!
//! One file per declared enum, then a synchronization pass over the bound
//! models: each affected model is re-rendered from the canonical registry,
//! whose casts already include every enum binding, and written only when
//! the bytes differ. Running twice therefore leaves exactly one import and
//! one cast entry per bound column, with no textual patching involved.

use crate::error::GenError;
use crate::inflect;
use crate::schema::{EnumDefinition, SchemaRegistry};
use crate::writer::models::render_model;
use crate::writer::{GenSummary, Materializer};
use std::fmt::Write as _;
use std::path::Path;

pub fn generate(
    registry: &SchemaRegistry,
    enums_dir: &Path,
    models_dir: &Path,
    tables: &[String],
    force: bool,
) -> Result<GenSummary, GenError> {
    let selected: Vec<&EnumDefinition> = registry
        .enums()
        .iter()
        .filter(|def| tables.is_empty() || tables.iter().any(|t| t == def.table))
        .collect();
    for name in tables {
        if registry.table(name).is_none() {
            log::warn!("table '{}' is not in the schema registry, skipping", name);
        }
    }

    let mut materializer = Materializer::new(force);
    for def in &selected {
        let path = enums_dir.join(format!("{}.rs", inflect::snake(def.enum_name)));
        materializer.write_new(&path, &render_enum(def), false)?;
    }

    // Model synchronization, once per affected table in declaration order.
    let mut affected: Vec<&'static str> = Vec::new();
    for def in &selected {
        if !affected.contains(&def.table) {
            affected.push(def.table);
        }
    }
    for table_name in affected {
        let table = match registry.table(table_name) {
            Some(table) => table,
            None => continue,
        };
        let model_path = models_dir.join(format!("{}.rs", inflect::model_file(table_name)));
        if !model_path.exists() {
            log::warn!(
                "model file {} does not exist, skipping cast synchronization for '{}'",
                model_path.display(),
                table_name
            );
            continue;
        }
        materializer.write_if_changed(&model_path, &render_model(registry, table))?;
    }
    Ok(materializer.summary)
}

/// Render one enum file.
pub fn render_enum(def: &EnumDefinition) -> String {
    let name = def.enum_name;

    let mut out = String::new();
    out.push_str("//! Generated by cartwright-codegen - do not edit manually.\n//!\n");
    let _ = writeln!(out, "//! Values for `{}.{}`.\n", def.table, def.column);
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n");
    let _ = writeln!(out, "pub enum {} {{", name);
    for (ident, _) in &def.cases {
        let _ = writeln!(out, "    {},", ident);
    }
    out.push_str("}\n\n");

    let _ = writeln!(out, "impl {} {{", name);
    out.push_str("    /// Every underlying value, in declaration order.\n");
    let _ = writeln!(
        out,
        "    pub const VALUES: &'static [&'static str] = &[{}];\n",
        def.cases
            .iter()
            .map(|(_, value)| format!("\"{}\"", value))
            .collect::<Vec<_>>()
            .join(", ")
    );

    out.push_str("    pub fn value(&self) -> &'static str {\n        match self {\n");
    for (ident, value) in &def.cases {
        let _ = writeln!(out, "            {}::{} => \"{}\",", name, ident, value);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    pub fn from_value(value: &str) -> Option<Self> {\n        match value {\n");
    for (ident, value) in &def.cases {
        let _ = writeln!(out, "            \"{}\" => Some({}::{}),", value, name, ident);
    }
    out.push_str("            _ => None,\n        }\n    }\n");

    if def.has_labels() {
        out.push('\n');
        out.push_str("    pub fn label(&self) -> &'static str {\n        match self {\n");
        for (ident, _) in &def.cases {
            let label = def.label_for(ident).unwrap_or(ident);
            let _ = writeln!(out, "            {}::{} => \"{}\",", name, ident, label);
        }
        out.push_str("        }\n    }\n\n");

        out.push_str("    /// (value, label) pairs, in declaration order.\n");
        out.push_str("    pub fn options() -> Vec<(&'static str, &'static str)> {\n        vec![\n");
        for (ident, value) in &def.cases {
            let label = def.label_for(ident).unwrap_or(ident);
            let _ = writeln!(out, "            (\"{}\", \"{}\"),", value, label);
        }
        out.push_str("        ]\n    }\n");
    }
    out.push_str("}\n");
    out
}
