use super::*;

#[test]
fn defaults_point_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.public_site_url, "https://coffercard.com");
}

#[test]
fn overrides_are_trimmed() {
    let config = ClientConfig::from_parts(Some(" https://api.example.com/api/ "), Some("https://play.example.com/"));
    assert_eq!(config.api_base_url, "https://api.example.com/api");
    assert_eq!(config.public_site_url, "https://play.example.com");
}

#[test]
fn blank_overrides_fall_back() {
    let config = ClientConfig::from_parts(Some("  "), None);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn campaign_link_uses_public_site() {
    let config = ClientConfig::from_parts(None, Some("https://play.example.com"));
    assert_eq!(config.campaign_link("spring24"), "https://play.example.com/campaign/spring24");
}

#[test]
fn load_uses_defaults_off_browser() {
    assert_eq!(ClientConfig::load(), ClientConfig::default());
}
