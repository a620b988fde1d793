use folio_core::{
    CatalogError, ContentCatalog, DropReason, ItemValidationError, LoadPolicy, SelectionState,
};
use std::io::Write;

const VALID: &str = r#"{
  "locales": {
    "default": "en",
    "supported": [
      { "code": "en", "label": "English" },
      { "code": "ua", "label": "Українська" }
    ]
  },
  "categories": [
    { "id": "category_security", "skills": ["Security", "SSL/TLS"] }
  ],
  "items": [
    {
      "id": "nginx",
      "type": "project",
      "skills": ["SSL/TLS", "Nginx"],
      "links": { "source": "https://example.org/nginx" },
      "localized": {
        "en": { "title": "Nginx and SSL", "body": "Reverse proxy." },
        "ua": { "title": "Nginx та SSL", "body": "Зворотний проксі." }
      }
    },
    {
      "id": "devops-is-my-gym",
      "type": "post",
      "skills": ["DevOps"],
      "localized": {
        "en": {
          "title": "DevOps Is My Gym",
          "body": "Discipline.\n\nReps.",
          "date": "2025-05-22",
          "read_time": "4 min",
          "tags": ["DevOps"]
        }
      }
    }
  ],
  "resumes": [
    { "locale": "en", "path": "assets/cv-en.pdf" }
  ]
}"#;

fn with_items(items: &str) -> String {
    format!(
        r#"{{
  "locales": {{ "default": "en", "supported": [{{ "code": "en", "label": "English" }}] }},
  "items": [{items}]
}}"#
    )
}

const GOOD_ITEM: &str =
    r#"{ "id": "good", "type": "project", "localized": { "en": { "title": "Good", "body": "" } } }"#;

#[test]
fn valid_document_loads_strictly() {
    let load = ContentCatalog::from_json_str(VALID, LoadPolicy::Strict).unwrap();
    assert!(load.dropped.is_empty());

    let catalog = load.catalog;
    assert_eq!(catalog.default_locale(), "en");
    assert_eq!(catalog.items().len(), 2);
    assert_eq!(catalog.categories().len(), 1);
    assert_eq!(catalog.resumes().len(), 1);
    assert_eq!(
        catalog.item("nginx").unwrap().links.source.as_deref(),
        Some("https://example.org/nginx")
    );
}

#[test]
fn bundled_catalog_is_consistent() {
    let catalog = ContentCatalog::bundled(LoadPolicy::Strict).unwrap().catalog;
    assert_eq!(catalog.default_locale(), "en");
    assert!(catalog.locales().is_supported("ua"));
    assert!(catalog.items_of_kind(folio_core::ItemKind::Project).count() > 20);
    assert!(catalog.items_of_kind(folio_core::ItemKind::Post).count() > 0);
    assert!(catalog.category("category_security").is_some());
    assert!(!catalog.filter(&SelectionState::with_skill("terraform")).is_empty());
}

#[test]
fn missing_default_content_fails_strict_load() {
    let json = with_items(
        r#"{ "id": "ua-only", "type": "post", "localized": { "ua": { "title": "Лише", "body": "" } } }"#,
    );

    let err = ContentCatalog::from_json_str(&json, LoadPolicy::Strict).unwrap_err();
    match err {
        CatalogError::InvalidItem { id, source } => {
            assert_eq!(id, "ua-only");
            assert_eq!(
                source,
                ItemValidationError::MissingDefaultContent {
                    locale: "en".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_default_content_is_dropped_when_lenient() {
    let json = with_items(&format!(
        r#"{GOOD_ITEM}, {{ "id": "ua-only", "type": "post", "localized": {{ "ua": {{ "title": "Лише", "body": "" }} }} }}"#
    ));

    let load = ContentCatalog::from_json_str(&json, LoadPolicy::Lenient).unwrap();
    assert_eq!(load.catalog.items().len(), 1);
    assert_eq!(load.dropped.len(), 1);
    assert_eq!(load.dropped[0].id, "ua-only");
    assert!(matches!(
        load.dropped[0].reason,
        DropReason::Invalid(ItemValidationError::MissingDefaultContent { .. })
    ));
}

#[test]
fn duplicate_ids_keep_first_item() {
    let duplicate = r#"{ "id": "good", "type": "post", "localized": { "en": { "title": "Again", "body": "" } } }"#;
    let json = with_items(&format!("{GOOD_ITEM}, {duplicate}"));

    let strict = ContentCatalog::from_json_str(&json, LoadPolicy::Strict).unwrap_err();
    assert!(matches!(strict, CatalogError::DuplicateItemId(ref id) if id == "good"));

    let lenient = ContentCatalog::from_json_str(&json, LoadPolicy::Lenient).unwrap();
    assert_eq!(lenient.catalog.items().len(), 1);
    assert_eq!(lenient.catalog.item("good").unwrap().localized["en"].title, "Good");
    assert_eq!(lenient.dropped[0].reason, DropReason::DuplicateId);
}

#[test]
fn badly_named_item_is_dropped_when_lenient() {
    let json = with_items(&format!(
        r#"{{ "id": "Not A Slug", "type": "project", "localized": {{ "en": {{ "title": "x", "body": "" }} }} }}, {GOOD_ITEM}"#
    ));

    let load = ContentCatalog::from_json_str(&json, LoadPolicy::Lenient).unwrap();
    assert_eq!(load.catalog.items().len(), 1);
    assert_eq!(
        load.dropped[0].reason,
        DropReason::Invalid(ItemValidationError::InvalidId("Not A Slug".to_string()))
    );
}

#[test]
fn duplicate_skill_ignoring_case_is_an_item_defect() {
    let json = with_items(
        r#"{ "id": "dup", "type": "project", "skills": ["AWS", "aws"], "localized": { "en": { "title": "x", "body": "" } } }"#,
    );

    let err = ContentCatalog::from_json_str(&json, LoadPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidItem {
            source: ItemValidationError::DuplicateSkill(_),
            ..
        }
    ));
}

#[test]
fn unsupported_default_locale_always_fails() {
    let json = r#"{
      "locales": { "default": "fr", "supported": [{ "code": "en", "label": "English" }] },
      "items": []
    }"#;

    let err = ContentCatalog::from_json_str(json, LoadPolicy::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::Locales(_)));
}

#[test]
fn duplicate_category_always_fails() {
    let json = r#"{
      "locales": { "default": "en", "supported": [{ "code": "en", "label": "English" }] },
      "categories": [
        { "id": "category_security", "skills": ["Security"] },
        { "id": "category_security", "skills": ["SSL/TLS"] }
      ]
    }"#;

    let err = ContentCatalog::from_json_str(json, LoadPolicy::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCategory(_)));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = ContentCatalog::from_json_str("{ not json", LoadPolicy::Lenient).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID.as_bytes()).unwrap();

    let load = ContentCatalog::from_path(file.path(), LoadPolicy::Strict).unwrap();
    assert_eq!(load.catalog.items().len(), 2);
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = ContentCatalog::from_path(&path, LoadPolicy::Strict).unwrap_err();
    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn skills_are_distinct_ignoring_case() {
    let catalog = ContentCatalog::bundled(LoadPolicy::Strict).unwrap().catalog;
    let skills = catalog.skills();
    let mut lowered: Vec<String> = skills.iter().map(|skill| skill.to_lowercase()).collect();
    let total = lowered.len();
    lowered.dedup();
    assert_eq!(lowered.len(), total);
    assert_eq!(catalog.canonical_skill("TERRAFORM"), Some("Terraform"));
    assert_eq!(catalog.canonical_skill("   "), None);
}
