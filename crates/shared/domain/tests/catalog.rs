use dmart_domain::catalog::{Category, Product, ProductImage};
use serde_json::json;

#[test]
fn category_id_accepts_string_or_number() {
    let from_number: Category =
        serde_json::from_value(json!({ "id": 5, "name": "Vegetables" })).unwrap();
    assert_eq!(from_number.id, "5");

    let from_string: Category =
        serde_json::from_value(json!({ "id": "5", "name": "Vegetables" })).unwrap();
    assert_eq!(from_string.id, "5");
}

#[test]
fn product_flattens_image_fields() {
    let product: Product = serde_json::from_value(json!({
        "id": 10,
        "name": "Red Rice",
        "categoryId": 5,
        "productImageUrl": "https://cdn.drukmart.bt/p/10.jpg"
    }))
    .unwrap();

    assert_eq!(product.category_id, "5");
    assert_eq!(product.image.product_image_url.as_deref(), Some("https://cdn.drukmart.bt/p/10.jpg"));
    assert!(product.image.product_image_base64.is_none());
}

#[test]
fn blank_image_record_detected() {
    let image = ProductImage::default();
    assert!(image.is_blank());

    let empty_strings: ProductImage = serde_json::from_value(json!({
        "productImageUrl": "",
        "image": ""
    }))
    .unwrap();
    assert!(empty_strings.is_blank());

    let with_legacy: ProductImage =
        serde_json::from_value(json!({ "image": "https://cdn.drukmart.bt/legacy.png" })).unwrap();
    assert!(!with_legacy.is_blank());
}
