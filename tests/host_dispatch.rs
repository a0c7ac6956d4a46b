//! End-to-end host flow: config file on disk → catalog → dispatch.

use drichsearch::catalog;
use drichsearch::{dispatch, AppConfig, AppError, Dispatch};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

#[tokio::test]
async fn configured_default_engine_navigates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "default_engine = \"duckduckgo\"\n");

    let config = AppConfig::from_file(&path).expect("load");
    config.validate().expect("valid");
    let engines = config.engines().expect("catalog");
    let engine = catalog::find(&engines, &config.default_engine).expect("default engine");

    let outcome = dispatch("hello world", engine, &config.search)
        .await
        .expect("dispatch");
    assert_eq!(
        outcome,
        Dispatch::Navigate("https://duckduckgo.com/?q=hello%20world".into())
    );
}

#[tokio::test]
async fn json_catalog_with_custom_entry_renders_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="result"><a class="result__a" href="/l/?uddg=https%3A%2F%2Fcrates.io%2F">crates.io</a></div>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let engines_json = dir.path().join("search_engines.json");
    std::fs::write(
        &engines_json,
        r#"[{"name": "Google", "url": "https://www.google.com/search?q="},
            {"name": "Personnalisé", "url": "custom", "logo": "assets/search.svg"}]"#,
    )
    .expect("write catalog");

    let body = format!(
        "default_engine = \"Personnalisé\"\nengines_file = {:?}\n\n\
         [search.duckduckgo]\nendpoints = [\"{uri}/html/\"]\ntimeout_seconds = 5\n\n\
         [search.yahoo]\nendpoint = \"{uri}/search\"\ntimeout_seconds = 5\n",
        engines_json.to_string_lossy(),
        uri = server.uri(),
    );
    let config = AppConfig::from_file(&write_config(dir.path(), &body)).expect("load");
    config.validate().expect("valid");

    let engines = config.engines().expect("catalog");
    let engine = catalog::find(&engines, "personnalisé").expect("custom entry");
    assert!(engine.is_custom());

    let Dispatch::Document(html) = dispatch("crates", engine, &config.search)
        .await
        .expect("dispatch")
    else {
        panic!("custom entry should render a document");
    };
    assert!(html.contains(r#"<a href="https://crates.io/">crates.io</a>"#));
    assert!(html.contains(r#"<p class="snippet empty">No description</p>"#));
    assert_eq!(html.matches("No results found").count(), 1);
}

#[test]
fn unknown_engine_is_reported_by_lookup() {
    let config = AppConfig::default();
    let engines = config.engines().expect("catalog");
    assert!(catalog::find(&engines, "Altavista").is_none());

    let err = AppError::UnknownEngine("Altavista".into());
    assert_eq!(err.to_string(), "unknown search engine: Altavista");
}
