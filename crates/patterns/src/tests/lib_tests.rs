use super::*;

fn temp_catalog() -> (tempfile::TempDir, PatternCatalog) {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = PatternCatalog::new(dir.path().join("patterns"));
    (dir, catalog)
}

fn name(raw: &str) -> PatternName {
    PatternName::new(raw).expect("valid name")
}

#[test]
fn lists_empty_catalog_and_creates_root() {
    let (_dir, catalog) = temp_catalog();
    assert!(catalog.list_patterns().expect("list").is_empty());
    assert!(catalog.root().exists());
}

#[test]
fn lists_file_and_directory_layouts_sorted_by_name() {
    let (_dir, catalog) = temp_catalog();
    catalog.ensure_root().expect("root");
    std::fs::write(catalog.root().join("summarize.md"), "# summarize").expect("file pattern");
    let dir_pattern = catalog.root().join("analyze_claims");
    std::fs::create_dir_all(&dir_pattern).expect("dir");
    std::fs::write(dir_pattern.join("system.md"), "# analyze").expect("dir pattern");

    let specs = catalog.list_patterns().expect("list");
    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["analyze_claims", "summarize"]);
    assert_eq!(specs[0].content, "# analyze");
    assert_eq!(specs[1].content, "# summarize");
}

#[test]
fn skips_entries_that_are_not_patterns() {
    let (_dir, catalog) = temp_catalog();
    catalog.ensure_root().expect("root");
    std::fs::write(catalog.root().join("notes.txt"), "not a pattern").expect("txt");
    std::fs::write(catalog.root().join("bad name.md"), "invalid").expect("bad name");
    std::fs::create_dir_all(catalog.root().join("empty_dir")).expect("dir without system.md");

    assert!(catalog.list_patterns().expect("list").is_empty());
}

#[test]
fn loads_pattern_by_name_preferring_directory_layout() {
    let (_dir, catalog) = temp_catalog();
    catalog.ensure_root().expect("root");
    let dir_pattern = catalog.root().join("summarize");
    std::fs::create_dir_all(&dir_pattern).expect("dir");
    std::fs::write(dir_pattern.join("system.md"), "from dir").expect("dir pattern");
    std::fs::write(catalog.root().join("summarize.md"), "from file").expect("file pattern");

    let spec = catalog.load_pattern(&name("summarize")).expect("load");
    assert_eq!(spec.content, "from dir");
}

#[test]
fn load_of_unknown_pattern_reports_not_found() {
    let (_dir, catalog) = temp_catalog();
    let err = catalog
        .load_pattern(&name("missing"))
        .expect_err("must fail");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn refuses_paths_that_escape_the_catalog_root() {
    let (dir, catalog) = temp_catalog();
    // A sibling of the catalog root that itself looks like a pattern dir:
    // "<tmp>/system.md" is what "<root>/../system.md" resolves to.
    std::fs::write(dir.path().join("system.md"), "outside").expect("outside file");
    catalog.ensure_root().expect("root");

    let err = catalog.load_pattern(&name("..")).expect_err("must fail");
    assert!(err.to_string().contains("outside the catalog root"));
}
