use shoplist_core::{Item, ItemValidationError};
use uuid::Uuid;

#[test]
fn item_new_generates_distinct_ids() {
    let first = Item::new("Milk");
    let second = Item::new("Milk");

    assert!(!first.id().is_nil());
    assert_ne!(first.id(), second.id());
    assert_eq!(first.title(), "Milk");
}

#[test]
fn with_id_rejects_nil_id_and_empty_title() {
    assert_eq!(
        Item::with_id(Uuid::nil(), "Milk").unwrap_err(),
        ItemValidationError::NilId
    );
    assert_eq!(
        Item::with_id(Uuid::new_v4(), "").unwrap_err(),
        ItemValidationError::EmptyTitle
    );
}

#[test]
fn new_defers_validation_to_writers() {
    let item = Item::new("");
    assert_eq!(item.validate(), Err(ItemValidationError::EmptyTitle));
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = Item::with_id(id, "Oat milk").unwrap();

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Oat milk");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn to_row_keeps_id_and_title() {
    let item = Item::new("Bread");
    let row = item.to_row();
    assert_eq!(row.id, item.id());
    assert_eq!(row.title, "Bread");
}

#[test]
fn deserialization_rejects_invalid_items() {
    let empty_title = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "",
    });
    let err = serde_json::from_value::<Item>(empty_title).unwrap_err();
    assert!(err.to_string().contains("title must not be empty"));

    let nil_id = serde_json::json!({ "id": Uuid::nil(), "title": "Milk" });
    assert!(serde_json::from_value::<Item>(nil_id).is_err());
}
