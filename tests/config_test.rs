use folio::core::ConfigProvider;
use folio::utils::validation::Validate;
use folio::{FolioConfig, SiteConfig};
use tempfile::TempDir;

#[test]
fn test_config_file_round_into_provider() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("folio.toml");
    std::fs::write(
        &path,
        r#"
[source]
endpoint = "https://api.example.com/portfolio"

[site]
title = "Jane Doe"
base_url = "/portfolio/"

[owner]
name = "Jane"

[links]
email = "jane@example.com"
github = "https://github.com/janedoe"
"#,
    )?;

    let site = SiteConfig::from_file(&path)?;
    let config = FolioConfig::new(site, "./dist");
    config.validate()?;

    assert_eq!(config.api_endpoint(), "https://api.example.com/portfolio");
    assert_eq!(config.site().site.resume_href(), "/portfolio/resume.pdf");
    assert_eq!(config.site().owner.name, "Jane");
    assert!(config.start_dark());
    Ok(())
}

#[test]
fn test_invalid_links_fail_validation() -> anyhow::Result<()> {
    let mut site = SiteConfig::from_toml_str("[links]\nemail = \"not-an-email\"")?;
    assert!(FolioConfig::new(site.clone(), "./dist").validate().is_err());

    site.links.email = "me@example.com".to_string();
    site.links.linkedin = "linkedin.com/in/me".to_string();
    assert!(FolioConfig::new(site, "./dist").validate().is_err());
    Ok(())
}

#[test]
fn test_empty_output_path_is_rejected() {
    let config = FolioConfig::new(SiteConfig::default(), "");
    assert!(config.validate().is_err());
}
