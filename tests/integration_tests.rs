use formpath::{
    decode, decode_with_options, encode, encode_with_options, record, to_form, to_value, Blob,
    DateFormat, DecodeOptions, EmptyString, EncodeOptions, Error, FormData, RecordMap, Value,
};
use serde::Serialize;

#[derive(Serialize)]
struct Address {
    street: String,
    city: String,
}

#[derive(Serialize)]
struct Customer {
    name: String,
    email: Option<String>,
    address: Address,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Item {
    sku: String,
    quantity: u32,
}

#[derive(Serialize)]
struct Order {
    id: u32,
    customer: Customer,
    items: Vec<Item>,
}

fn sample_order() -> Order {
    Order {
        id: 12345,
        customer: Customer {
            name: "Alice".to_string(),
            email: None,
            address: Address {
                street: "1 Main St".to_string(),
                city: "Paris".to_string(),
            },
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Item {
                sku: "WIDGET-001".to_string(),
                quantity: 2,
            },
            Item {
                sku: "GADGET-002".to_string(),
                quantity: 1,
            },
        ],
    }
}

#[test]
fn test_struct_flattens_in_declaration_order() {
    let form = to_form(&sample_order()).unwrap();
    let keys: Vec<_> = form.keys().collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "customer[name]",
            "customer[address][street]",
            "customer[address][city]",
            "customer[tags][0]",
            "items[0][sku]",
            "items[0][quantity]",
            "items[1][sku]",
            "items[1][quantity]",
        ]
    );
    // email was None, so no entry at all
    assert!(!form.contains_key("customer[email]"));
}

#[test]
fn test_full_roundtrip_rebuilds_shape() {
    let form = to_form(&sample_order()).unwrap();
    let map = decode(&form).unwrap();

    let customer = map.get("customer").and_then(Value::as_object).unwrap();
    let address = customer.get("address").and_then(Value::as_object).unwrap();
    assert_eq!(address.get("city").and_then(Value::as_str), Some("Paris"));

    let items = map.get("items").and_then(Value::as_array).unwrap();
    assert_eq!(items.len(), 2);
    let second = items[1].as_object().unwrap();
    assert_eq!(second.get("sku").and_then(Value::as_str), Some("GADGET-002"));
    // leaves come back as strings, never numbers
    assert_eq!(second.get("quantity").and_then(Value::as_str), Some("1"));
}

#[test]
fn test_order_preservation() {
    let value = record!({
        "a": "1",
        "b": "2",
        "c": ["x", "y", "z"]
    });
    let form = encode(&value).unwrap();
    let keys: Vec<_> = form.keys().collect();
    assert_eq!(keys, vec!["a", "b", "c[0]", "c[1]", "c[2]"]);
}

#[test]
fn test_array_inference_from_distinct_indexes() {
    let mut form = FormData::new();
    form.append("items[1]", "second");
    form.append("items[0]", "first");
    form.append("items[2]", "third");

    let map = decode(&form).unwrap();
    let items = map.get("items").and_then(Value::as_array).unwrap();
    assert_eq!(
        items,
        &vec![
            Value::String("first".to_string()),
            Value::String("second".to_string()),
            Value::String("third".to_string()),
        ]
    );
}

#[test]
fn test_nested_object_inference() {
    let mut form = FormData::new();
    form.append("user[name]", "John");
    form.append("user[address][city]", "NY");

    let map = decode(&form).unwrap();
    let user = map.get("user").and_then(Value::as_object).unwrap();
    assert_eq!(user.get("name").and_then(Value::as_str), Some("John"));
    let address = user.get("address").and_then(Value::as_object).unwrap();
    assert_eq!(address.get("city").and_then(Value::as_str), Some("NY"));
}

#[test]
fn test_container_beats_scalar_both_orders() {
    let mut form = FormData::new();
    form.append("a", "1");
    form.append("a[b]", "2");
    let map = decode(&form).unwrap();
    let a = map.get("a").and_then(Value::as_object).unwrap();
    assert_eq!(a.get("b").and_then(Value::as_str), Some("2"));

    let mut form = FormData::new();
    form.append("a[b]", "2");
    form.append("a", "1");
    let map = decode(&form).unwrap();
    let a = map.get("a").and_then(Value::as_object).unwrap();
    assert_eq!(a.get("b").and_then(Value::as_str), Some("2"));
}

#[test]
fn test_empty_string_policies() {
    let mut form = FormData::new();
    form.append("empty", "");

    let map = decode(&form).unwrap();
    assert_eq!(map.get("empty"), Some(&Value::String(String::new())));

    let map = decode_with_options(
        &form,
        DecodeOptions::new().with_empty_string(EmptyString::SetNull),
    )
    .unwrap();
    assert_eq!(map.get("empty"), Some(&Value::Null));

    let map = decode_with_options(
        &form,
        DecodeOptions::new().with_empty_string(EmptyString::SetUndefined),
    )
    .unwrap();
    assert!(!map.contains_key("empty"));
}

#[test]
fn test_encode_validation() {
    for root in [Value::Null, Value::Array(vec![]), Value::from(42)] {
        assert!(matches!(encode(&root), Err(Error::InvalidInput(_))));
    }
}

#[test]
fn test_encode_validation_is_fail_fast() {
    // even a date, which is object-like in dynamic languages, is rejected
    let err = encode(&Value::Date(chrono::Utc::now())).unwrap_err();
    assert!(err.to_string().contains("date"));
}

#[test]
fn test_depth_limit_guard() {
    let mut value = Value::String("leaf".to_string());
    for _ in 0..100 {
        let mut map = RecordMap::new();
        map.insert("n".to_string(), value);
        value = Value::Object(map);
    }
    let err = encode_with_options(&value, EncodeOptions::new().with_max_depth(8)).unwrap_err();
    assert!(matches!(err, Error::DepthLimit(8)));

    // the default bound accommodates ordinary nesting
    let shallow = record!({ "a": { "b": { "c": "d" } } });
    assert!(encode(&shallow).is_ok());
}

#[test]
fn test_date_iso_default_and_timestamp() {
    use chrono::TimeZone;
    let dt = chrono::Utc
        .with_ymd_and_hms(2026, 8, 26, 10, 30, 0)
        .unwrap();
    let mut map = RecordMap::new();
    map.insert("at".to_string(), Value::Date(dt));
    let value = Value::Object(map);

    let form = encode(&value).unwrap();
    assert_eq!(
        form.get("at").and_then(|v| v.as_text()),
        Some("2026-08-26T10:30:00.000Z")
    );

    let form = encode_with_options(
        &value,
        EncodeOptions::new().with_date_format(DateFormat::Timestamp),
    )
    .unwrap();
    assert_eq!(
        form.get("at").and_then(|v| v.as_text()),
        Some(dt.timestamp_millis().to_string().as_str())
    );
}

#[test]
fn test_blob_roundtrip_keeps_allocation() {
    let blob = Blob::new(vec![0u8, 1, 2, 3], "image/png");
    let value = {
        let mut files = RecordMap::new();
        files.insert("avatar".to_string(), Value::Blob(blob.clone()));
        let mut root = RecordMap::new();
        root.insert("files".to_string(), Value::Object(files));
        Value::Object(root)
    };

    let form = encode(&value).unwrap();
    let entry = form.get("files[avatar]").and_then(|v| v.as_blob()).unwrap();
    assert_eq!(entry.data().as_ptr(), blob.data().as_ptr());

    let map = decode(&form).unwrap();
    let files = map.get("files").and_then(Value::as_object).unwrap();
    let decoded = files.get("avatar").and_then(Value::as_blob).unwrap();
    assert_eq!(decoded.data().as_ptr(), blob.data().as_ptr());
    assert_eq!(decoded.content_type(), "image/png");
}

#[test]
fn test_repeated_scalar_keys_last_write_wins() {
    let mut form = FormData::new();
    form.append("color", "red");
    form.append("color", "blue");
    let map = decode(&form).unwrap();
    assert_eq!(map.get("color").and_then(Value::as_str), Some("blue"));
}

#[test]
fn test_to_value_bridge() {
    let order = sample_order();
    let value = to_value(&order).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("id").and_then(Value::as_i64), Some(12345));
    // Option::None becomes an explicit null in the value model...
    let customer = obj.get("customer").and_then(Value::as_object).unwrap();
    assert_eq!(customer.get("email"), Some(&Value::Null));
    // ...which the flattener then omits
    let form = encode(&value).unwrap();
    assert!(!form.contains_key("customer[email]"));
}

#[test]
fn test_mixed_container_kinds_deep() {
    let mut form = FormData::new();
    form.append("a[0][b][1]", "v");
    let map = decode(&form).unwrap();

    let a = map.get("a").and_then(Value::as_array).unwrap();
    let b = a[0].as_object().unwrap().get("b").unwrap();
    let inner = b.as_array().unwrap();
    assert_eq!(inner[0], Value::Null);
    assert_eq!(inner[1], Value::String("v".to_string()));
}
