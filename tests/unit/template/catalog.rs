use super::*;

fn record(name: &str) -> TemplateRecord {
    TemplateRecord {
        name: name.to_string(),
        slug: name.to_lowercase(),
        base_file: format!("{name}.png"),
        mask_aspect_ratio: Some(0.5),
        screen_points: vec![[0.0, 0.0], [0.0, 10.0], [5.0, 10.0], [5.0, 0.0]],
        ..TemplateRecord::default()
    }
}

fn catalog() -> TemplateCatalog {
    TemplateCatalog::from_records(
        "templates",
        vec![record("Laptop"), record("Phone"), record("Tablet")],
    )
    .unwrap()
}

#[test]
fn select_by_index_is_one_based() {
    let c = catalog();
    assert_eq!(c.select("1").unwrap().name, "Laptop");
    assert_eq!(c.select("3").unwrap().name, "Tablet");
    assert!(c.select("0").is_none());
    assert!(c.select("4").is_none());
}

#[test]
fn select_by_name_ignores_case() {
    let c = catalog();
    assert_eq!(c.select("phone").unwrap().name, "Phone");
    assert_eq!(c.select(" TABLET ").unwrap().name, "Tablet");
    assert!(c.select("watch").is_none());
    assert!(c.select("").is_none());
}

#[test]
fn listing_is_numbered() {
    assert_eq!(catalog().listing(), " 1. Laptop\n 2. Phone\n 3. Tablet\n");
}

#[test]
fn invalid_record_fails_whole_catalog() {
    let mut bad = record("Broken");
    bad.mask_aspect_ratio = None;
    let err = TemplateCatalog::from_records("templates", vec![record("Ok"), bad]).unwrap_err();
    assert!(matches!(err, MockupError::InvalidTemplateAsset(_)));
}

#[test]
fn load_reports_missing_info_json() {
    let dir = PathBuf::from("target").join("unit_catalog_empty");
    std::fs::create_dir_all(&dir).unwrap();
    let _ = std::fs::remove_file(dir.join(CATALOG_FILE));
    let err = TemplateCatalog::load(&dir).unwrap_err();
    assert!(err.to_string().contains("info.json"));

    let err = TemplateCatalog::load("target/unit_catalog_absent_dir").unwrap_err();
    assert!(matches!(err, MockupError::InvalidTemplateAsset(_)));
}

#[test]
fn resolve_joins_template_dir() {
    let c = catalog();
    assert_eq!(c.resolve("Phone.png"), PathBuf::from("templates").join("Phone.png"));
    assert_eq!(c.dir(), Path::new("templates"));
    assert_eq!(c.templates().len(), 3);
}
