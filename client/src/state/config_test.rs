use super::*;
use cards::CardId;

#[test]
fn with_base_url_builds_route_urls() {
    let config = ClientConfig::with_base_url("http://qa.local:9000/");
    assert_eq!(config.url(&Endpoint::Start), "http://qa.local:9000/start");
    let id = CardId::new("OP02-013").expect("id");
    assert_eq!(config.url(&Endpoint::Next(id)), "http://qa.local:9000/next/OP02-013");
}

#[test]
fn preview_url_is_none_before_first_card() {
    let config = ClientConfig::with_base_url("http://localhost:8080");
    assert_eq!(config.preview_url(""), None);
}

#[test]
fn preview_url_joins_base_and_path() {
    let config = ClientConfig::with_base_url("http://localhost:8080/");
    assert_eq!(
        config.preview_url("/images/EB01-002").as_deref(),
        Some("http://localhost:8080/images/EB01-002")
    );
}

#[test]
fn default_config_has_a_base_url() {
    assert!(!ClientConfig::default().base_url.is_empty());
}
