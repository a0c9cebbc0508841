//! # Path Grammar Tests
//!
//! Tests for path generation and decomposition.
//!
//! These tests verify:
//! - Generator output for every recognized path form
//! - Placeholder defaulting for omitted identifiers
//! - Context-mapper rewriting and the unmapped fallback form
//! - Decomposition records and shape precedence
//! - Generator/decomposer round-trips
//! - Format errors for non-canonical paths
//! - Serialization of decomposed records

use resource_paths::prelude::*;
use uuid::Uuid;

const TEST_UUID: &str = "C6B4E077-91F1-4BC3-A857-42EFC7B9D247";

#[test]
fn test_generate_global_list_path() {
    // Generators never consult the registry; unknown resources work too.
    assert_eq!(generate_global_list_path("persons"), "/persons/");
    assert_eq!(generate_global_list_path("foos"), "/foos/");
}

#[test]
fn test_generate_item_create_path() {
    assert_eq!(generate_item_create_path("persons"), "/persons/create/");
}

#[test]
fn test_generate_item_view_path() {
    assert_eq!(
        generate_item_view_path("persons", Some(TEST_UUID)),
        format!("/persons/{TEST_UUID}/")
    );
    assert_eq!(generate_item_view_path("persons", None), "/persons/:id/");
}

#[test]
fn test_generate_item_edit_path() {
    assert_eq!(
        generate_item_edit_path("persons", Some(TEST_UUID)),
        format!("/persons/{TEST_UUID}/edit/")
    );
    assert_eq!(
        generate_item_edit_path("persons", None),
        "/persons/:id/edit/"
    );
}

#[test]
fn test_empty_string_id_is_a_provided_value() {
    // Absence is modeled by `None` only; an empty string is emitted
    // verbatim rather than falling back to the placeholder.
    assert_eq!(generate_item_view_path("persons", Some("")), "/persons//");
}

#[test]
fn test_generate_context_list_path_without_mapper() {
    let registry = ResourceRegistry::new();

    // The unmapped fallback form has no trailing slash.
    assert_eq!(
        generate_context_list_path(&registry, "places", None, "persons"),
        "/places/:contextId/persons"
    );
    assert_eq!(
        generate_context_list_path(&registry, "places", Some(TEST_UUID), "persons"),
        format!("/places/{TEST_UUID}/persons")
    );
}

#[test]
fn test_generate_context_list_path_with_mapper() {
    let mut registry = ResourceRegistry::new();
    registry.add_context_mapper("persons", "places", |ctx_id| MappedContext {
        context: "locales".to_owned(),
        id: ctx_id.map(str::to_owned),
    });

    // Mapped paths use the remapped segments and carry a trailing slash.
    assert_eq!(
        generate_context_list_path(&registry, "places", Some(TEST_UUID), "persons"),
        format!("/locales/{TEST_UUID}/persons/")
    );
    // A mapper returning no id falls back to the placeholder.
    assert_eq!(
        generate_context_list_path(&registry, "places", None, "persons"),
        "/locales/:contextId/persons/"
    );
}

#[test]
fn test_extract_item_view_path() {
    let info = extract_path_info(&format!("/persons/{TEST_UUID}/")).expect("canonical path");
    assert_eq!(
        info,
        PathInfo {
            resource_name: "persons".to_owned(),
            pub_id: Some(TEST_UUID.to_owned()),
            is_uuid: true,
            ctx_resource_name: None,
            ctx_pub_id: None,
            is_item: true,
            is_list: false,
            action_mode: ActionMode::View,
        }
    );
}

#[test]
fn test_extract_non_uuid_item_id() {
    let info = extract_path_info("/persons/self/").expect("canonical path");
    assert_eq!(info.pub_id.as_deref(), Some("self"));
    assert!(!info.is_uuid);
    assert!(info.is_item);
}

#[test]
fn test_extract_does_not_care_about_unknown_resources() {
    // Decomposition checks form only; `foos` need not be registered.
    let info = extract_path_info(&format!("/foos/{TEST_UUID}/")).expect("canonical path");
    assert_eq!(info.resource_name, "foos");
    assert!(info.is_item);
}

#[test]
fn test_extract_global_list_path() {
    let info = extract_path_info("/persons/").expect("canonical path");
    assert_eq!(
        info,
        PathInfo {
            resource_name: "persons".to_owned(),
            pub_id: None,
            is_uuid: false,
            ctx_resource_name: None,
            ctx_pub_id: None,
            is_item: false,
            is_list: true,
            action_mode: ActionMode::View,
        }
    );
}

#[test]
fn test_extract_create_path() {
    let info = extract_path_info("/persons/create/").expect("canonical path");
    assert!(info.is_item);
    assert!(!info.is_list);
    assert_eq!(info.pub_id, None);
    assert_eq!(info.action_mode, ActionMode::Create);
}

#[test]
fn test_extract_edit_path() {
    let info = extract_path_info(&format!("/persons/{TEST_UUID}/edit/")).expect("canonical path");
    assert!(info.is_item);
    assert_eq!(info.pub_id.as_deref(), Some(TEST_UUID));
    assert_eq!(info.action_mode, ActionMode::Edit);
}

#[test]
fn test_extract_context_list_path() {
    let info =
        extract_path_info(&format!("/places/{TEST_UUID}/persons/")).expect("canonical path");
    assert_eq!(
        info,
        PathInfo {
            resource_name: "persons".to_owned(),
            pub_id: None,
            is_uuid: true,
            ctx_resource_name: Some("places".to_owned()),
            ctx_pub_id: Some(TEST_UUID.to_owned()),
            is_item: false,
            is_list: true,
            action_mode: ActionMode::View,
        }
    );
}

#[test]
fn test_query_suffix_is_discarded() {
    let with_query = extract_path_info("/persons/?sort=name").expect("canonical path");
    let without_query = extract_path_info("/persons/").expect("canonical path");
    assert_eq!(with_query, without_query);
}

#[test]
fn test_generated_paths_round_trip() {
    for _ in 0..8 {
        let id = Uuid::new_v4().to_string();

        let view = extract_path_info(&generate_item_view_path("persons", Some(&id)))
            .expect("generated view path decomposes");
        assert_eq!(view.resource_name, "persons");
        assert_eq!(view.pub_id.as_deref(), Some(id.as_str()));
        assert!(view.is_uuid, "v4 UUID '{id}' should match the UUID shape");
        assert!(view.is_item && !view.is_list);
        assert_eq!(view.action_mode, ActionMode::View);

        let edit = extract_path_info(&generate_item_edit_path("persons", Some(&id)))
            .expect("generated edit path decomposes");
        assert!(edit.is_item);
        assert_eq!(edit.action_mode, ActionMode::Edit);
    }
}

#[test]
fn test_create_and_list_paths_round_trip() {
    let create = extract_path_info(&generate_item_create_path("persons"))
        .expect("generated create path decomposes");
    assert!(create.is_item);
    assert_eq!(create.pub_id, None);
    assert_eq!(create.action_mode, ActionMode::Create);

    let list = extract_path_info(&generate_global_list_path("persons"))
        .expect("generated list path decomposes");
    assert!(list.is_list && !list.is_item);
    assert_eq!(list.action_mode, ActionMode::View);
}

#[test]
fn test_non_canonical_paths_fail_with_format_error() {
    let malformed = vec![
        "persons/",        // Missing leading slash
        "/persons",        // Missing trailing slash
        "persons",         // Missing both
        "",                // Empty
        "/",               // Zero segments
        "/a/b/c/d/",       // Four segments
        "/persons/1/edit", // Edit path without trailing slash
    ];

    for path in malformed {
        let result = extract_path_info(path);
        assert!(
            matches!(result, Err(PathError::Format { .. })),
            "path '{path}' should fail with a format error, got {result:?}"
        );
    }
}

#[test]
fn test_format_error_names_the_offending_path() {
    let err = extract_path_info("persons/").expect_err("missing leading slash");
    assert!(err.to_string().contains("persons/"));
}

#[test]
fn test_is_uuid_shape() {
    assert!(is_uuid(TEST_UUID));
    assert!(is_uuid(&TEST_UUID.to_lowercase()));
    assert!(!is_uuid("self"));
    assert!(!is_uuid("C6B4E077-91F1-4BC3-A857"));
    assert!(!is_uuid(&format!("{TEST_UUID}x")));
}

#[test]
fn test_action_mode_strings() {
    assert_eq!(ActionMode::View.as_str(), "view");
    assert_eq!(ActionMode::Create.as_str(), "create");
    assert_eq!(ActionMode::Edit.to_string(), "edit");
}

#[test]
fn test_path_info_serialization() {
    let info = extract_path_info(&format!("/persons/{TEST_UUID}/")).expect("canonical path");
    let value = serde_json::to_value(&info).expect("serializes");

    assert_eq!(
        value,
        serde_json::json!({
            "resource_name": "persons",
            "pub_id": TEST_UUID,
            "is_uuid": true,
            "is_item": true,
            "is_list": false,
            "action_mode": "view",
        })
    );
}
