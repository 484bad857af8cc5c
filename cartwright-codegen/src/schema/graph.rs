//! Foreign-key dependency ordering
//!
//! Seeders must run parents before children or every child insert fails its
//! foreign-key check. The order is derived from the registry's `ForeignId`
//! columns with Kahn's algorithm; declaration order breaks ties so output is
//! deterministic. Self-references are excluded before the graph is built.
//! A genuine cross-table cycle is a configuration defect and aborts
//! generation.

use crate::error::GenError;
use std::collections::HashMap;

/// Topologically sort `tables` (name, dependencies) so that every table
/// appears after all tables it depends on.
///
/// Ties break toward declaration order. Dependencies on tables outside the
/// input set are ignored, matching per-table `--tables` filtering.
///
/// # Errors
///
/// Returns [`GenError::Cycle`] naming the tables left unsortable when the
/// graph has a cross-table cycle.
pub fn topological_order(
    tables: &[(&'static str, Vec<&'static str>)],
) -> Result<Vec<&'static str>, GenError> {
    let known: HashMap<&str, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (*name, i))
        .collect();

    let mut in_degree: Vec<usize> = tables
        .iter()
        .map(|(_, deps)| deps.iter().filter(|d| known.contains_key(**d)).count())
        .collect();

    // dependents[i] = indices of tables that depend on table i
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tables.len()];
    for (i, (_, deps)) in tables.iter().enumerate() {
        for dep in deps {
            if let Some(&j) = known.get(dep) {
                dependents[j].push(i);
            }
        }
    }

    let mut placed = vec![false; tables.len()];
    let mut order = Vec::with_capacity(tables.len());

    while order.len() < tables.len() {
        // Lowest declaration index among ready tables. The registry is small
        // enough that a scan per placement beats a priority queue.
        let next = match (0..tables.len()).find(|&i| !placed[i] && in_degree[i] == 0) {
            Some(i) => i,
            None => {
                let stuck: Vec<&str> = tables
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !placed[*i])
                    .map(|(_, (name, _))| *name)
                    .collect();
                return Err(GenError::Cycle(stuck.join(", ")));
            }
        };
        placed[next] = true;
        order.push(tables[next].0);
        for &dependent in &dependents[next] {
            in_degree[dependent] -= 1;
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_come_first() {
        let tables = vec![
            ("orders", vec!["users", "shops"]),
            ("users", vec![]),
            ("shops", vec!["users"]),
            ("order_items", vec!["orders"]),
        ];
        let order = topological_order(&tables).unwrap();
        let pos = |name: &str| order.iter().position(|t| *t == name).unwrap();
        assert!(pos("users") < pos("shops"));
        assert!(pos("shops") < pos("orders"));
        assert!(pos("orders") < pos("order_items"));
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let tables = vec![
            ("brands", vec![]),
            ("divisions", vec![]),
            ("users", vec![]),
        ];
        let order = topological_order(&tables).unwrap();
        assert_eq!(order, vec!["brands", "divisions", "users"]);
    }

    #[test]
    fn test_unknown_dependency_is_ignored() {
        // A --tables filter can leave a parent outside the set.
        let tables = vec![("addresses", vec!["users", "divisions"])];
        let order = topological_order(&tables).unwrap();
        assert_eq!(order, vec!["addresses"]);
    }

    #[test]
    fn test_cycle_is_fatal_and_names_members() {
        let tables = vec![
            ("users", vec![]),
            ("a", vec!["b"]),
            ("b", vec!["a"]),
        ];
        let err = topological_order(&tables).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("circular"));
        assert!(message.contains('a'));
        assert!(message.contains('b'));
        assert!(!message.contains("users"));
    }

    #[test]
    fn test_empty_input() {
        assert!(topological_order(&[]).unwrap().is_empty());
    }
}
