//! Enum definitions
//!
//! Each definition binds a (table, column) pair to a generated enum type.
//! Cases and labels are ordered pair lists, not maps: declaration order is
//! the generated order and the `options()` order.

#[derive(Debug, Clone)]
pub struct EnumDefinition {
    /// Generated type identifier, PascalCase, unique across the registry
    pub enum_name: &'static str,
    /// Table whose model receives the typed cast
    pub table: &'static str,
    /// Column the cast applies to
    pub column: &'static str,
    /// (case identifier, underlying string value), declaration order
    pub cases: Vec<(&'static str, &'static str)>,
    /// (case identifier, display label); empty, or total over `cases`
    pub labels: Vec<(&'static str, &'static str)>,
}

impl EnumDefinition {
    pub fn new(
        enum_name: &'static str,
        table: &'static str,
        column: &'static str,
        cases: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            enum_name,
            table,
            column,
            cases: cases.to_vec(),
            labels: Vec::new(),
        }
    }

    pub fn labels(mut self, labels: &[(&'static str, &'static str)]) -> Self {
        self.labels = labels.to_vec();
        self
    }

    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn label_for(&self, case: &str) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(ident, _)| *ident == case)
            .map(|(_, label)| *label)
    }

    /// Registry-construction validation. Partial label maps, duplicate
    /// identifiers, and duplicate values are configuration defects.
    pub fn validate(&self) -> Result<(), String> {
        if self.cases.is_empty() {
            return Err(format!("enum {} declares no cases", self.enum_name));
        }
        for (i, (ident, value)) in self.cases.iter().enumerate() {
            if self.cases[..i].iter().any(|(other, _)| other == ident) {
                return Err(format!("enum {} repeats case {}", self.enum_name, ident));
            }
            if self.cases[..i].iter().any(|(_, other)| other == value) {
                return Err(format!("enum {} repeats value '{}'", self.enum_name, value));
            }
        }
        if self.has_labels() {
            for (ident, _) in &self.cases {
                if self.label_for(ident).is_none() {
                    return Err(format!(
                        "enum {} labels are partial: case {} has no label",
                        self.enum_name, ident
                    ));
                }
            }
        }
        Ok(())
    }
}
