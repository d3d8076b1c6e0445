//! Black-box checks on the demo report.

use shopfront_demo::{DemoConfig, run};

fn render(config: &DemoConfig) -> String {
    let mut buf = Vec::new();
    run(config, &mut buf).expect("demo should not fail");
    String::from_utf8(buf).expect("demo output should be utf-8")
}

#[test]
fn reports_user_stats_in_role_order() {
    let output = render(&DemoConfig::default());
    assert!(output.starts_with(
        "=== User Management Demo ===\n\
         Total users: 3\n\
         Active users: 3\n\
         Admin users: 1\n\
         Member users: 1\n\
         Guest users: 1\n"
    ));
}

#[test]
fn lists_every_user_with_admin_flag_and_age() {
    let output = render(&DemoConfig::default());
    assert!(output.contains("  User: Admin User (admin@example.com) - admin\n    Admin: true\n    Age: 0 days\n"));
    assert!(output.contains("  User: John Doe (john@example.com) - member\n    Admin: false\n"));
    assert!(output.contains("  User: Guest User (guest@example.com) - guest\n    Admin: false\n"));
}

#[test]
fn default_config_discounts_laptop_by_ten_percent() {
    let output = render(&DemoConfig::default());
    assert!(output.contains("  Gaming Laptop - $1299.99\n    Is expensive: true\n"));
    assert!(output.contains("  Python Programming - $39.99\n    Is expensive: false\n"));
    assert!(output.contains("  Laptop after 10% discount: Gaming Laptop - $1169.99\n"));
    assert!(output.contains("Total products: 2\n"));
    assert!(output.ends_with("Demo completed!\n"));
}

#[test]
fn threshold_and_discount_come_from_config() {
    let config = DemoConfig {
        expensive_threshold: 10.0,
        discount_percent: 25.0,
    };
    let output = render(&config);
    assert!(output.contains("  Python Programming - $39.99\n    Is expensive: true\n"));
    assert!(output.contains("  Laptop after 25% discount: Gaming Laptop - $974.99\n"));
}
