//! The storefront schema
//!
//! Hand-authored declaration of every table and enum in the platform:
//! catalog (shops, brands, categories, products), fulfillment (carts,
//! orders, vouchers), accounts (users, addresses, divisions), and feedback
//! (reviews, wishlists, notifications). Declaration order is generation
//! order, so reference data comes before the tables that point at it.

use super::enums::EnumDefinition;
use super::table::TableDefinition;
use super::types::{col, ColumnType::*, IndexDefinition, OnDelete, RelationshipDefinition as Rel,
    ScopeDefinition as Scope};
use super::SchemaRegistry;

pub fn storefront_registry() -> SchemaRegistry {
    SchemaRegistry::new(tables(), enum_definitions())
}

fn tables() -> Vec<TableDefinition> {
    vec![
        TableDefinition::new("users", "Customer and seller accounts")
            .columns(vec![
                col("id", Id),
                col("name", String),
                col("email", String).unique(),
                col("password", String)
                    .seed_with("\"$2y$10$seeded-password-hash\""),
                col("phone", String).length(20).nullable(),
                col("gender", Enum).values(&["male", "female", "other"]).nullable(),
                col("date_of_birth", Date).nullable(),
                col("avatar", String).nullable().seed_with("synth::optional(synth::url())"),
                col("remember_token", RememberToken).nullable(),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["email"]))
            .hidden(&["password", "remember_token"])
            .notifiable()
            .relationship(Rel::has_many("addresses", "Address"))
            .relationship(Rel::has_one("shop", "Shop"))
            .relationship(Rel::has_one("cart", "Cart"))
            .relationship(Rel::has_many("orders", "Order"))
            .relationship(Rel::has_many("reviews", "Review"))
            .relationship(Rel::belongs_to_many("wishlist", "Product", "wishlists")),
        TableDefinition::new("divisions", "Administrative divisions: provinces, districts, wards")
            .columns(vec![
                col("id", Id),
                col("name", String),
                col("code", String).length(20).unique().seed_with("synth::code(\"DIV\")"),
                col("division_type", Enum).values(&["province", "district", "ward"]),
                col("parent_id", ForeignId).nullable().references("divisions", OnDelete::SetNull),
            ])
            .index(IndexDefinition::on(&["parent_id"]))
            .index(IndexDefinition::on(&["division_type"]))
            .relationship(Rel::belongs_to("parent", "Division").foreign_key("parent_id"))
            .relationship(Rel::has_many("children", "Division").foreign_key("parent_id"))
            // Named child_wards so the wards() scope keeps the plain name.
            .relationship(
                Rel::has_many("child_wards", "Division")
                    .foreign_key("parent_id")
                    .condition("division_type=ward"),
            )
            .relationship(Rel::has_many("addresses", "Address"))
            .scope(Scope::eq("provinces", "division_type", "province"))
            .scope(Scope::eq("wards", "division_type", "ward")),
        TableDefinition::new("addresses", "Delivery addresses")
            .columns(vec![
                col("id", Id),
                col("user_id", ForeignId).references("users", OnDelete::Cascade),
                col("division_id", ForeignId).references("divisions", OnDelete::Restrict),
                col("recipient_name", String),
                col("phone", String).length(20),
                col("street_address", String),
                col("is_default", Boolean).default("false"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["user_id"]))
            .relationship(Rel::belongs_to("user", "User"))
            .relationship(Rel::belongs_to("division", "Division")),
        TableDefinition::new("shops", "Seller storefronts")
            .columns(vec![
                col("id", Id),
                col("user_id", ForeignId).unique().references("users", OnDelete::Cascade),
                col("name", String),
                col("slug", String).unique(),
                col("description", Text).nullable(),
                col("logo", String).nullable().seed_with("synth::optional(synth::url())"),
                col("status", Enum)
                    .values(&["pending", "active", "suspended", "closed"])
                    .default("'pending'"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
                col("deleted_at", Timestamp).nullable(),
            ])
            .index(IndexDefinition::on(&["status"]))
            .relationship(Rel::belongs_to("user", "User"))
            .relationship(Rel::has_many("products", "Product"))
            .relationship(Rel::has_many("orders", "Order"))
            .relationship(Rel::has_many("vouchers", "Voucher"))
            .scope(Scope::eq("active", "status", "active")),
        TableDefinition::new("brands", "Product brands")
            .columns(vec![
                col("id", Id),
                col("name", String),
                col("slug", String).unique(),
                col("logo", String).nullable().seed_with("synth::optional(synth::url())"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .relationship(Rel::has_many("products", "Product")),
        TableDefinition::new("categories", "Hierarchical product categories")
            .columns(vec![
                col("id", Id),
                col("name", String),
                col("slug", String).unique(),
                col("icon", String).nullable(),
                col("parent_id", ForeignId).nullable().references("categories", OnDelete::SetNull),
                col("is_active", Boolean).default("true"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["parent_id"]))
            .relationship(Rel::belongs_to("parent", "Category").foreign_key("parent_id"))
            .relationship(Rel::has_many("children", "Category").foreign_key("parent_id"))
            .relationship(Rel::has_many("products", "Product"))
            .scope(Scope::eq("active", "is_active", "true")),
        TableDefinition::new("products", "Catalog products")
            .columns(vec![
                col("id", Id),
                col("shop_id", ForeignId).references("shops", OnDelete::Cascade),
                col("brand_id", ForeignId).nullable().references("brands", OnDelete::SetNull),
                col("category_id", ForeignId).references("categories", OnDelete::Restrict),
                col("name", String),
                col("slug", String).unique(),
                col("description", LongText).nullable(),
                col("price", Decimal).precision(12, 2),
                col("compare_at_price", Decimal).precision(12, 2).nullable(),
                col("quantity", Integer).default("0"),
                col("status", Enum)
                    .values(&["draft", "active", "archived"])
                    .default("'draft'"),
                col("metadata", Json).nullable(),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
                col("deleted_at", Timestamp).nullable(),
            ])
            .index(IndexDefinition::on(&["shop_id"]))
            .index(IndexDefinition::on(&["category_id", "status"]))
            .relationship(Rel::belongs_to("shop", "Shop"))
            .relationship(Rel::belongs_to("brand", "Brand"))
            .relationship(Rel::belongs_to("category", "Category"))
            .relationship(Rel::has_many("images", "ProductImage"))
            .relationship(Rel::has_many("variants", "ProductVariant"))
            .relationship(Rel::has_many("reviews", "Review"))
            .relationship(Rel::belongs_to_many("wishers", "User", "wishlists"))
            .scope(Scope::eq("active", "status", "active")),
        TableDefinition::new("product_images", "Gallery images per product")
            .columns(vec![
                col("id", Id),
                col("product_id", ForeignId).references("products", OnDelete::Cascade),
                col("url", String),
                col("alt_text", String).nullable(),
                col("position", SmallInt).default("0"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["product_id"]))
            .relationship(Rel::belongs_to("product", "Product")),
        TableDefinition::new("product_variants", "Purchasable variants (size, color)")
            .columns(vec![
                col("id", Id),
                col("product_id", ForeignId).references("products", OnDelete::Cascade),
                col("sku", String).length(64).unique().seed_with("synth::code(\"SKU\")"),
                col("name", String),
                col("price", Decimal).precision(12, 2),
                col("quantity", Integer).default("0"),
                col("options", Json).nullable(),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["product_id"]))
            .relationship(Rel::belongs_to("product", "Product"))
            .relationship(Rel::has_many("cart_items", "CartItem"))
            .relationship(Rel::has_many("order_items", "OrderItem")),
        TableDefinition::new("carts", "One open cart per user")
            .columns(vec![
                col("id", Id),
                col("user_id", ForeignId).unique().references("users", OnDelete::Cascade),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .relationship(Rel::belongs_to("user", "User"))
            .relationship(Rel::has_many("items", "CartItem")),
        TableDefinition::new("cart_items", "Variant quantities in a cart")
            .columns(vec![
                col("id", Id),
                col("cart_id", ForeignId).references("carts", OnDelete::Cascade),
                col("product_variant_id", ForeignId).references("product_variants", OnDelete::Cascade),
                col("quantity", Integer).default("1"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::unique(&["cart_id", "product_variant_id"]))
            .relationship(Rel::belongs_to("cart", "Cart"))
            .relationship(Rel::belongs_to("variant", "ProductVariant").foreign_key("product_variant_id")),
        TableDefinition::new("orders", "Placed orders, one per shop checkout")
            .columns(vec![
                col("id", Id),
                col("user_id", ForeignId).references("users", OnDelete::Restrict),
                col("shop_id", ForeignId).references("shops", OnDelete::Restrict),
                col("address_id", ForeignId).references("addresses", OnDelete::Restrict),
                col("code", String).length(32).unique().seed_with("synth::code(\"ORD\")"),
                col("status", Enum).values(&[
                    "pending",
                    "confirmed",
                    "processing",
                    "shipping",
                    "delivered",
                    "completed",
                    "cancelled",
                ]).default("'pending'"),
                col("payment_status", Enum)
                    .values(&["pending", "paid", "failed", "refunded"])
                    .default("'pending'"),
                col("payment_method", Enum)
                    .values(&["cod", "bank_transfer", "credit_card", "wallet"]),
                col("subtotal", Decimal).precision(12, 2),
                col("shipping_fee", Decimal).precision(12, 2).default("0"),
                col("discount", Decimal).precision(12, 2).default("0"),
                col("total", Decimal).precision(12, 2),
                col("note", Text).nullable(),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
                col("deleted_at", Timestamp).nullable(),
            ])
            .index(IndexDefinition::on(&["user_id"]))
            .index(IndexDefinition::on(&["shop_id", "status"]))
            .relationship(Rel::belongs_to("user", "User"))
            .relationship(Rel::belongs_to("shop", "Shop"))
            .relationship(Rel::belongs_to("address", "Address"))
            .relationship(Rel::has_many("items", "OrderItem")),
        TableDefinition::new("order_items", "Line items frozen at checkout")
            .columns(vec![
                col("id", Id),
                col("order_id", ForeignId).references("orders", OnDelete::Cascade),
                col("product_variant_id", ForeignId).references("product_variants", OnDelete::Restrict),
                col("product_name", String),
                col("quantity", Integer).default("1"),
                col("unit_price", Decimal).precision(12, 2),
                col("line_total", Decimal).precision(12, 2),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["order_id"]))
            .relationship(Rel::belongs_to("order", "Order"))
            .relationship(Rel::belongs_to("variant", "ProductVariant").foreign_key("product_variant_id")),
        TableDefinition::new("vouchers", "Shop discount vouchers")
            .columns(vec![
                col("id", Id),
                col("shop_id", ForeignId).nullable().references("shops", OnDelete::Cascade),
                col("code", String).length(32).unique().seed_with("synth::code(\"VCH\")"),
                col("discount_type", Enum).values(&["percentage", "fixed"]),
                col("value", Decimal).precision(12, 2),
                col("min_order_total", Decimal).precision(12, 2).nullable(),
                col("usage_limit", Integer).nullable(),
                col("used_count", Integer).default("0"),
                col("starts_at", DateTime),
                col("expires_at", DateTime),
                col("is_active", Boolean).default("true"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["shop_id"]))
            .relationship(Rel::belongs_to("shop", "Shop"))
            .scope(Scope::eq("active", "is_active", "true")),
        TableDefinition::new("reviews", "Product reviews from buyers")
            .columns(vec![
                col("id", Id),
                col("user_id", ForeignId).references("users", OnDelete::Cascade),
                col("product_id", ForeignId).references("products", OnDelete::Cascade),
                col("rating", TinyInt).seed_with("synth::int_between(1, 5)"),
                col("comment", Text).nullable(),
                col("is_approved", Boolean).default("false"),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["product_id"]))
            .index(IndexDefinition::unique(&["user_id", "product_id"]))
            .relationship(Rel::belongs_to("user", "User"))
            .relationship(Rel::belongs_to("product", "Product"))
            .scope(Scope::eq("approved", "is_approved", "true")),
        TableDefinition::new("wishlists", "Saved products per user")
            .columns(vec![
                col("user_id", ForeignId).references("users", OnDelete::Cascade),
                col("product_id", ForeignId).references("products", OnDelete::Cascade),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .composite_key(&["user_id", "product_id"]),
        TableDefinition::new("notifications", "Polymorphic user notifications")
            .columns(vec![
                col("id", Id),
                col("notifiable_type", String),
                col("notifiable_id", BigInt),
                col("channel", String).length(32).default("'database'").seed_with("\"database\""),
                col("data", Json),
                col("read_at", Timestamp).nullable(),
                col("created_at", Timestamp),
                col("updated_at", Timestamp),
            ])
            .index(IndexDefinition::on(&["notifiable_type", "notifiable_id"]))
            .relationship(Rel::morph_to("notifiable"))
            .scope(Scope::is_null("unread", "read_at")),
    ]
}

fn enum_definitions() -> Vec<EnumDefinition> {
    vec![
        EnumDefinition::new(
            "Gender",
            "users",
            "gender",
            &[("Male", "male"), ("Female", "female"), ("Other", "other")],
        )
        .labels(&[("Male", "Male"), ("Female", "Female"), ("Other", "Other")]),
        EnumDefinition::new(
            "DivisionType",
            "divisions",
            "division_type",
            &[
                ("Province", "province"),
                ("District", "district"),
                ("Ward", "ward"),
            ],
        )
        .labels(&[
            ("Province", "Province"),
            ("District", "District"),
            ("Ward", "Ward"),
        ]),
        EnumDefinition::new(
            "ShopStatus",
            "shops",
            "status",
            &[
                ("Pending", "pending"),
                ("Active", "active"),
                ("Suspended", "suspended"),
                ("Closed", "closed"),
            ],
        )
        .labels(&[
            ("Pending", "Pending Approval"),
            ("Active", "Active"),
            ("Suspended", "Suspended"),
            ("Closed", "Closed"),
        ]),
        EnumDefinition::new(
            "ProductStatus",
            "products",
            "status",
            &[
                ("Draft", "draft"),
                ("Active", "active"),
                ("Archived", "archived"),
            ],
        )
        .labels(&[
            ("Draft", "Draft"),
            ("Active", "Active"),
            ("Archived", "Archived"),
        ]),
        EnumDefinition::new(
            "OrderStatus",
            "orders",
            "status",
            &[
                ("Pending", "pending"),
                ("Confirmed", "confirmed"),
                ("Processing", "processing"),
                ("Shipping", "shipping"),
                ("Delivered", "delivered"),
                ("Completed", "completed"),
                ("Cancelled", "cancelled"),
            ],
        )
        .labels(&[
            ("Pending", "Pending Confirmation"),
            ("Confirmed", "Confirmed"),
            ("Processing", "Processing"),
            ("Shipping", "Shipping"),
            ("Delivered", "Delivered"),
            ("Completed", "Completed"),
            ("Cancelled", "Cancelled"),
        ]),
        EnumDefinition::new(
            "PaymentStatus",
            "orders",
            "payment_status",
            &[
                ("Pending", "pending"),
                ("Paid", "paid"),
                ("Failed", "failed"),
                ("Refunded", "refunded"),
            ],
        )
        .labels(&[
            ("Pending", "Awaiting Payment"),
            ("Paid", "Paid"),
            ("Failed", "Payment Failed"),
            ("Refunded", "Refunded"),
        ]),
        EnumDefinition::new(
            "PaymentMethod",
            "orders",
            "payment_method",
            &[
                ("Cod", "cod"),
                ("BankTransfer", "bank_transfer"),
                ("CreditCard", "credit_card"),
                ("Wallet", "wallet"),
            ],
        )
        .labels(&[
            ("Cod", "Cash on Delivery"),
            ("BankTransfer", "Bank Transfer"),
            ("CreditCard", "Credit Card"),
            ("Wallet", "E-Wallet"),
        ]),
        EnumDefinition::new(
            "DiscountType",
            "vouchers",
            "discount_type",
            &[("Percentage", "percentage"), ("Fixed", "fixed")],
        )
        .labels(&[("Percentage", "Percentage Off"), ("Fixed", "Fixed Amount")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PrimaryKey;

    #[test]
    fn test_seventeen_tables_eight_enums() {
        assert_eq!(tables().len(), 17);
        assert_eq!(enum_definitions().len(), 8);
    }

    #[test]
    fn test_wishlists_is_composite_keyed() {
        let reg = storefront_registry();
        let wishlists = reg.table("wishlists").unwrap();
        assert_eq!(
            wishlists.primary_key,
            PrimaryKey::Composite(vec!["user_id", "product_id"])
        );
        assert!(wishlists.is_pivot());
    }

    #[test]
    fn test_users_hide_credentials() {
        let reg = storefront_registry();
        let users = reg.table("users").unwrap();
        assert_eq!(users.hidden, vec!["password", "remember_token"]);
        assert!(users.notifiable);
    }

    #[test]
    fn test_divisions_declare_ward_scope_and_relation() {
        let reg = storefront_registry();
        let divisions = reg.table("divisions").unwrap();
        let wards = divisions
            .relationships
            .iter()
            .find(|r| r.name == "child_wards")
            .unwrap();
        assert_eq!(wards.condition_parts(), Some(("division_type", "ward")));
        assert!(divisions.scopes.iter().any(|s| s.name == "provinces"));
    }
}
