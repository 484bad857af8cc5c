//! Name inflection for generated artifacts
//!
//! Table names are snake_case plurals; model and enum type names are
//! singular PascalCase. `heck` handles the case conversion, the
//! singularizer here covers the suffix rules the schema actually uses.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// `order_items` → `OrderItems`
pub fn studly(name: &str) -> String {
    name.to_upper_camel_case()
}

/// `OrderStatus` → `order_status`
pub fn snake(name: &str) -> String {
    name.to_snake_case()
}

/// Singularize a snake_case table name: `categories` → `category`,
/// `addresses` → `address`, `order_items` → `order_item`.
pub fn singular(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Model type name for a table: `order_items` → `OrderItem`.
pub fn model_name(table: &str) -> String {
    studly(&singular(table))
}

/// Model file stem for a table: `order_items` → `order_item`.
pub fn model_file(table: &str) -> String {
    singular(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studly() {
        assert_eq!(studly("order_items"), "OrderItems");
        assert_eq!(studly("users"), "Users");
    }

    #[test]
    fn test_snake() {
        assert_eq!(snake("OrderStatus"), "order_status");
        assert_eq!(snake("PaymentMethod"), "payment_method");
    }

    #[test]
    fn test_singular_suffix_rules() {
        assert_eq!(singular("users"), "user");
        assert_eq!(singular("categories"), "category");
        assert_eq!(singular("addresses"), "address");
        assert_eq!(singular("product_variants"), "product_variant");
        assert_eq!(singular("vouchers"), "voucher");
        assert_eq!(singular("divisions"), "division");
        // Already singular, or not a handled plural: unchanged
        assert_eq!(singular("cart"), "cart");
    }

    #[test]
    fn test_model_name() {
        assert_eq!(model_name("users"), "User");
        assert_eq!(model_name("order_items"), "OrderItem");
        assert_eq!(model_name("categories"), "Category");
        assert_eq!(model_name("addresses"), "Address");
    }
}
