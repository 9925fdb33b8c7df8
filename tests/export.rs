#![cfg(feature = "export")]

use std::fs;
use std::path::Path;

use portfolio::export::{copy_assets, export_site, render_body, render_document, FAVICON_HREF};

fn document() -> String {
    render_document("Ravi Verma").expect("document renders")
}

#[test]
fn document_wraps_closed_page() {
    let html = document();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Ravi Verma</title>"));
    assert!(html.contains(&render_body()));

    let body = render_body();
    assert!(body.contains("class=\"navbar\""));
    assert!(body.contains("class=\"hero-container\""));
    assert!(body.contains("<button class=\"more-menu-button\">"));
    assert!(!body.contains("dropdown-menu"));
}

#[test]
fn stylesheet_and_favicon_are_linked() {
    let html = document();

    assert!(html.contains("<style>"));
    assert!(html.contains(".dropdown-menu {"));
    assert!(html.contains(&format!("<link rel=\"icon\" href=\"{FAVICON_HREF}\">")));
}

#[test]
fn toggle_works_without_the_app_bundle() {
    let html = document();

    let template_start = html
        .find("<template id=\"dropdown-menu-template\"")
        .expect("dropdown template present");
    let template = &html[template_start..];
    let template = &template[..template.find("</template>").expect("template closed")];

    assert!(template.contains("data-open-glyph=\"×\""));
    assert!(template.contains("data-closed-glyph=\"•••\""));
    for href in ["#projects", "#blog", "#contact"] {
        assert!(template.contains(&format!("href=\"{href}\"")), "{href} missing");
    }

    assert!(html.contains("<script>"));
    assert!(html.contains("addEventListener(\"click\""));
    assert!(html.contains("menu-open"));
}

#[test]
fn title_is_escaped() {
    let html = render_document("Ravi <Verma> & co").expect("document renders");

    assert!(html.contains("<title>Ravi &lt;Verma&gt; &amp; co</title>"));
    assert!(!html.contains("<Verma>"));
}

#[test]
fn copies_nested_assets() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    fs::create_dir_all(src.path().join("styling")).unwrap();
    fs::write(src.path().join("profile.svg"), "<svg/>").unwrap();
    fs::write(src.path().join("styling/main.css"), "body {}").unwrap();

    let copied = copy_assets(src.path(), &dest.path().join("assets")).unwrap();

    assert_eq!(copied, 2);
    assert_eq!(fs::read_to_string(dest.path().join("assets/profile.svg")).unwrap(), "<svg/>");
    assert_eq!(
        fs::read_to_string(dest.path().join("assets/styling/main.css")).unwrap(),
        "body {}"
    );
}

#[test]
fn export_ships_page_and_assets() {
    let out = tempfile::tempdir().unwrap();
    let assets = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

    let report = export_site(&out.path().join("docs"), Path::new(assets), "Ravi Verma").unwrap();

    let index = fs::read_to_string(&report.index).unwrap();
    assert_eq!(index.len(), report.index_bytes);
    assert!(report.assets_copied >= 3);
    assert!(out.path().join("docs/assets/profile.svg").is_file());
    assert!(out.path().join("docs").join(FAVICON_HREF).is_file());
}

#[test]
fn missing_assets_dir_is_an_error() {
    let out = tempfile::tempdir().unwrap();

    let err = export_site(out.path(), &out.path().join("nope"), "Ravi Verma").unwrap_err();

    assert!(format!("{err:#}").contains("nope"));
}
