use cartcsv::{parse_cart, CartError, CartParser, ErrorType};
use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;
use tempfile::NamedTempFile;

#[test]
fn test_parse_cart_valid_csv() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"Product name,Price,Quantity
Mollis consequat,9.00,2
Tvoluptatem,10.32,1
Scelerisque lacinia,18.90,1
Consectetur adipiscing,28.72,10
Condimentum aliquet,13.90,1"#;

    fs::write(&temp_file, csv_content).unwrap();

    let cart = parse_cart(temp_file.path()).unwrap();

    assert_eq!(cart.items.len(), 5);
    assert_eq!(cart.total, Decimal::from_str("348.32").unwrap());

    let first = &cart.items[0];
    assert_eq!(first.name, "Mollis consequat");
    assert_eq!(first.price, Decimal::from_str("9.00").unwrap());
    assert_eq!(first.quantity, 2);

    let last = &cart.items[4];
    assert_eq!(last.name, "Condimentum aliquet");
    assert_eq!(last.quantity, 1);
}

#[test]
fn test_parse_cart_header_only() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "Product name,Price,Quantity\n").unwrap();

    let cart = parse_cart(temp_file.path()).unwrap();

    assert!(cart.items.is_empty());
    assert_eq!(cart.total, Decimal::ZERO);
}

#[test]
fn test_parse_cart_invalid_content() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"Product name,Price,Quantity
Mollis consequat,9.00
,10.32,1
Scelerisque lacinia,-18.90,1.5"#;

    fs::write(&temp_file, csv_content).unwrap();

    match parse_cart(temp_file.path()) {
        Err(CartError::Validation(errors)) => {
            assert_eq!(errors.len(), 4);
            assert_eq!(errors[0].kind, ErrorType::Row);
            assert_eq!(errors[0].row, 1);
            assert!(errors[1..].iter().all(|e| e.kind == ErrorType::Cell));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_parse_cart_missing_file() {
    let result = parse_cart("nonexistent_file.csv");
    assert!(matches!(result, Err(CartError::Io { .. })));
}

#[test]
fn test_validate_file_reports_without_failing() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "Product name,Cost,Quantity\nMollis consequat,9.00,2").unwrap();

    let errors = CartParser::new().validate_file(temp_file.path()).unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorType::Header);
    assert_eq!(errors[0].column, Some(1));
}

#[test]
fn test_parse_cart_large_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut csv_content = String::from("Product name,Price,Quantity\n");

    for i in 1..=100 {
        csv_content.push_str(&format!("Item {},{}.50,{}\n", i, i, i));
    }

    fs::write(&temp_file, csv_content).unwrap();

    let cart = parse_cart(temp_file.path()).unwrap();

    assert_eq!(cart.items.len(), 100);

    let item_50 = &cart.items[49];
    assert_eq!(item_50.name, "Item 50");
    assert_eq!(item_50.price, Decimal::from_str("50.50").unwrap());
    assert_eq!(item_50.quantity, 50);

    // sum of i * (i + 0.5) for i in 1..=100
    assert_eq!(cart.total, Decimal::from_str("340875").unwrap());
}
