use customer_core::Customer;

#[test]
fn customer_new_keeps_fields_verbatim() {
    let customer = Customer::new(1, "Test User", "not-an-email");

    assert_eq!(customer.customer_id, 1);
    assert_eq!(customer.name, "Test User");
    assert_eq!(customer.email, "not-an-email");
}

#[test]
fn customer_equality_covers_all_fields() {
    let base = Customer::new(1, "Alice", "alice@example.com");

    assert_eq!(base, Customer::new(1, "Alice", "alice@example.com"));
    assert_ne!(base, Customer::new(2, "Alice", "alice@example.com"));
    assert_ne!(base, Customer::new(1, "Alicia", "alice@example.com"));
    assert_ne!(base, Customer::new(1, "Alice", "alice@example.org"));
}

#[test]
fn customer_serialization_uses_expected_field_names() {
    let customer = Customer::new(42, "Dana", "dana@example.com");

    let json = serde_json::to_value(&customer).unwrap();
    assert_eq!(json["customer_id"], 42);
    assert_eq!(json["name"], "Dana");
    assert_eq!(json["email"], "dana@example.com");

    let decoded: Customer = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, customer);
}
