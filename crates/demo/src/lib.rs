//! Demonstration routine exercising the user and product models.

pub mod config;

use std::io::Write;

use shopfront_core::Entity;
use shopfront_products::{Product, ProductCatalog};
use shopfront_users::{User, UserManager, UserRole};

pub use config::DemoConfig;

/// Build the sample users and products and write a human-readable report.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut users = UserManager::new();
    for user in [
        User::new("Admin User", "admin@example.com").with_role(UserRole::Admin),
        User::new("John Doe", "john@example.com").with_role(UserRole::Member),
        User::new("Guest User", "guest@example.com").with_role(UserRole::Guest),
    ] {
        users.add_user(user);
    }

    writeln!(out, "=== User Management Demo ===")?;
    write!(out, "{}", users.stats())?;

    writeln!(out)?;
    writeln!(out, "All users:")?;
    for user in users.get_all_users() {
        writeln!(out, "  {}", user.info())?;
        writeln!(out, "    Admin: {}", user.is_admin())?;
        writeln!(out, "    Age: {} days", user.age_days())?;
    }

    writeln!(out)?;
    writeln!(out, "=== Product Demo ===")?;
    let mut laptop = Product::new("Gaming Laptop", 1299.99, "Electronics");
    let book = Product::new("Python Programming", 39.99, "Books");

    writeln!(out, "Products:")?;
    for product in [&laptop, &book] {
        writeln!(out, "  {product}")?;
        writeln!(
            out,
            "    Is expensive: {}",
            product.is_expensive_above(config.expensive_threshold)
        )?;
    }

    laptop.apply_discount(config.discount_percent);
    writeln!(
        out,
        "  Laptop after {}% discount: {laptop}",
        config.discount_percent
    )?;

    let mut catalog = ProductCatalog::new();
    catalog.add_product(laptop);
    catalog.add_product(book);

    writeln!(out)?;
    writeln!(out, "Catalog:")?;
    write!(out, "{}", catalog.stats())?;

    writeln!(out)?;
    writeln!(out, "Demo completed!")?;

    tracing::info!(
        users = users.count_users(),
        products = catalog.count(),
        "demo finished"
    );
    Ok(())
}
