use dmart_domain::config::{ApiConfig, CatalogConfig, MailConfig, OtpConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4710);
    assert!(server.ssl.is_none());

    let mail = MailConfig::default();
    assert_eq!(mail.from, "no-reply@drukmart.bt");
    assert!(mail.subject_prefix.is_none());

    let otp = OtpConfig::default();
    assert_eq!(otp.ttl_seconds, 300);
    assert_eq!(otp.code_length, 4);

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.featured_limit, 6);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "mail": { "from": "market@drukmart.bt", "subject_prefix": "[DrukMart]" },
        "otp": { "ttl_seconds": 120, "code_length": 6, "store_capacity": 500 },
        "catalog": { "featured_limit": 4 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.mail.subject_prefix.as_deref(), Some("[DrukMart]"));
    assert_eq!(cfg.otp.ttl_seconds, 120);
    assert_eq!(cfg.catalog.featured_limit, 4);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 4710);
    assert_eq!(cfg.otp.ttl_seconds, 300);
}
