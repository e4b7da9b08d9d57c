//! Tests for map fields (tag sets)

use std::collections::HashMap;

use medialive_model::model::{
    CreateTagsRequest, DescribeReservationResult, ListTagsForResourceResult,
};
use medialive_model::{ModelError, StructuralHash};

fn tags(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_duplicate_key_fails_and_keeps_first_value() {
    let mut result = DescribeReservationResult::new();
    result.add_tags_entry("env", "prod").unwrap();

    let err = result.add_tags_entry("env", "staging").unwrap_err();

    assert_eq!(
        err,
        ModelError::DuplicateKey {
            shape: "DescribeReservationResult",
            field: "Tags",
            key: "env".to_string(),
        }
    );
    assert_eq!(result.tags(), Some(&tags(&[("env", "prod")])));
}

#[test]
fn test_duplicate_key_error_message() {
    let mut request = CreateTagsRequest::new();
    request.add_tags_entry("owner", "media").unwrap();
    let err = request.add_tags_entry("owner", "ops").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Duplicated keys (owner) are provided for CreateTagsRequest.Tags"
    );
}

#[test]
fn test_add_entry_creates_map_lazily_and_chains() -> Result<(), ModelError> {
    let mut result = ListTagsForResourceResult::new();
    assert_eq!(result.tags(), None);

    result
        .add_tags_entry("env", "prod")?
        .add_tags_entry("team", "video")?;

    assert_eq!(result.tags(), Some(&tags(&[("env", "prod"), ("team", "video")])));
    Ok(())
}

#[test]
fn test_clear_entries_omits_field_from_debug_string() {
    let mut result = DescribeReservationResult::new().with_name("r1");
    result.add_tags_entry("env", "prod").unwrap();
    result.add_tags_entry("team", "video").unwrap();
    assert_eq!(result.to_string(), "{Name: r1,Tags: {env=prod, team=video}}");

    result.clear_tags_entries();

    assert_eq!(result.tags(), None);
    assert_eq!(result.to_string(), "{Name: r1}");
    assert_eq!(result, DescribeReservationResult::new().with_name("r1"));
}

#[test]
fn test_empty_map_is_present() {
    let request = CreateTagsRequest::new().with_tags(HashMap::new());

    assert_eq!(request.tags().map(HashMap::len), Some(0));
    assert_eq!(request.to_string(), "{Tags: {}}");
    assert_ne!(request, CreateTagsRequest::new());
}

#[test]
fn test_with_tags_replaces_whole_map() {
    let mut request = CreateTagsRequest::new().with_resource_arn("arn:aws:medialive:us-west-2:1:channel:1");
    request.add_tags_entry("old", "1").unwrap();
    request.set_tags(tags(&[("new", "2")]));

    assert_eq!(request.tags(), Some(&tags(&[("new", "2")])));
}

#[test]
fn test_map_equality_and_hash_ignore_insertion_order() {
    let mut a = CreateTagsRequest::new();
    a.add_tags_entry("env", "prod").unwrap();
    a.add_tags_entry("team", "video").unwrap();

    let mut b = CreateTagsRequest::new();
    b.add_tags_entry("team", "video").unwrap();
    b.add_tags_entry("env", "prod").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
    assert_eq!(a.to_string(), b.to_string());
}
