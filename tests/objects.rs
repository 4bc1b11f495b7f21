use rstest::rstest;
use serde_json::json;
use struct_json::{
    parse_object, to_json_value, Builder, Builders, ErrorKind, Scalar, Struct, Value,
};

#[rstest]
fn parses_and_renders_simple_object() {
    let object = parse_object("{\"a\":1}").unwrap();
    assert_eq!(object.to_string(), "{\"a\":1}");
}

#[rstest]
fn round_trips_every_value_kind() {
    let input = r#"{"name":"Ada","age":37,"score":9.5,"admin":false,"none":null,"tags":["a","b"],"inner":{"x":1}}"#;
    let object = parse_object(input).unwrap();

    assert_eq!(
        to_json_value(&object).unwrap(),
        json!({
            "name": "Ada",
            "age": 37,
            "score": 9.5,
            "admin": false,
            "none": null,
            "tags": ["a", "b"],
            "inner": {"x": 1}
        })
    );
    assert_eq!(parse_object(&object.to_string()).unwrap(), object);
}

#[rstest]
fn reserialization_is_stable() {
    let object = parse_object(r#"{"a":{"b":{"c":[1,2.0,"x"]}},"d":"e"}"#).unwrap();
    let first = object.to_string();
    let reparsed = parse_object(&first).unwrap();
    assert_eq!(reparsed, object);
    assert_eq!(
        to_json_value(&reparsed).unwrap(),
        to_json_value(&object).unwrap()
    );
}

#[rstest]
fn nested_object_is_reachable() {
    let object = parse_object(r#"{"a":{"b":1}}"#).unwrap();
    let inner = object.get("a").and_then(Value::as_object).unwrap();
    assert_eq!(inner.get("b").and_then(Value::as_i64), Some(1));
}

#[rstest]
fn doubles_render_with_a_fraction() {
    let object = parse_object(r#"{"d":2.0}"#).unwrap();
    assert_eq!(object.to_string(), r#"{"d":2.0}"#);

    let mut builder = Builder::new();
    builder.put("big", 1e21);
    assert_eq!(builder.to_string(), r#"{"big":1000000000000000000000.0}"#);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_text_leaves_instance_untouched(#[case] text: &str) {
    let mut builder = Builder::from_iter([("keep", 1)]);
    builder.parse(text).unwrap();
    assert_eq!(builder.get("keep").and_then(Value::as_i64), Some(1));
}

#[rstest]
fn failed_parse_leaves_instance_untouched() {
    let mut builder = Builder::from_iter([("keep", 1)]);
    let err = builder.parse(r#"{"a":1,"b":}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(builder.len(), 1);
    assert!(builder.contains_key("keep"));
}

#[rstest]
fn parse_keeps_unrelated_members() {
    let mut builder = Builder::from_iter([("old", 1), ("new", 0)]);
    builder.parse(r#"{"new":2}"#).unwrap();
    assert_eq!(builder.get("old").and_then(Value::as_i64), Some(1));
    assert_eq!(builder.get("new").and_then(Value::as_i64), Some(2));
}

#[rstest]
fn quoted_literal_parses_to_scalar_mode() {
    let builder: Builder = "\"hello {world}\"".parse().unwrap();
    assert!(builder.is_scalar());
    assert_eq!(builder.as_scalar(), Some(&Scalar::from("hello {world}")));
    assert_eq!(builder.to_string(), "\"hello {world}\"");
}

#[rstest]
fn map_mode_holds_arrays_of_objects() {
    let mut people = Builders::new();
    people.add(Builder::from_iter([("name", "Ada")]));
    people.add(Builder::from_iter([("name", "Linus")]));
    let mut builder = Builder::new();
    builder.put("people", people);

    let reparsed = parse_object(&builder.to_string()).unwrap();
    let people = reparsed.get("people").and_then(Value::as_array).unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[1].get("name").and_then(Value::as_str), Some("Linus"));
}

#[rstest]
#[case(r#"{"a":1"#)]
#[case(r#"{"a" 1}"#)]
#[case(r#"{"a":}"#)]
#[case(r#"{"a":"open}"#)]
#[case(r#"{"a":1} trailing"#)]
#[case("not an object")]
fn malformed_objects_are_rejected(#[case] input: &str) {
    let err = parse_object(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(err.location().is_some());
}
