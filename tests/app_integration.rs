use std::fs;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_cms_mock_server(slug: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/companies/{slug}/component-data");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        std::fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_full_render_flow_with_cms_mock() {
    let mock_response = r#"{
        "analysts": [
            {"name": "Jane Doe", "firm": "Morgan & Co", "rating": "Buy"},
            {"name": "Ravi Patel", "firm": "Northbridge", "rating": "Hold"}
        ],
        "marketData": {"price": 42.5}
    }"#;
    let mock_server = test_utils::create_cms_mock_server("acme", mock_response).await;

    let config_file = test_utils::write_config(&format!(
        r##"
        sites:
          - company:
              name: "Acme Robotics"
              tickerSymbol: "ACME"
              foundedYear: 2022
            theme:
              colors:
                primary: "#101010"
        providers:
          cms:
            base_url: {}
            retry_delay_ms: 1
    "##,
        mock_server.uri()
    ));

    let result = irsite::run_command(
        irsite::AppCommand::Render,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Render command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_render_fails_when_cms_errors() {
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config_file = test_utils::write_config(&format!(
        r#"
        sites:
          - company:
              name: "Acme Robotics"
        providers:
          cms:
            base_url: {}
            retries: 1
            retry_delay_ms: 1
    "#,
        mock_server.uri()
    ));

    let result = irsite::run_command(
        irsite::AppCommand::Render,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    let err = result.expect_err("render should fail when the CMS is down");
    info!(error = %err, "Render failed as expected");
    assert!(err.to_string().contains("1 of 1 page(s) failed to render"));
}

#[test_log::test(tokio::test)]
async fn test_theme_and_css_commands_with_static_data() {
    let config_file = test_utils::write_config(
        r#"
        sites:
          - company:
              name: "Globex Cloud"
            data:
              analysts: []
    "#,
    );
    let config_path = config_file.path().to_str().unwrap();

    for command in [
        irsite::AppCommand::Theme,
        irsite::AppCommand::Css,
        irsite::AppCommand::Render,
    ] {
        let result = irsite::run_command(command, Some(config_path)).await;
        assert!(result.is_ok(), "Command failed with: {:?}", result.err());
    }
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_is_reported() {
    let config_file = test_utils::write_config("sites: not-a-list");
    let result = irsite::run_command(
        irsite::AppCommand::Theme,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file")
    );
}

#[test]
fn test_page_assembly_from_example_config() {
    use irsite::core::config::AppConfig;
    use irsite::core::{BaseData, assemble_page};

    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    irsite::cli::setup::setup_at_path(&config_path).unwrap();
    let config = AppConfig::load_from_path(&config_path).unwrap();
    assert!(fs::metadata(&config_path).unwrap().len() > 0);

    let site = &config.sites[0];
    let base = site.data.clone().unwrap_or_default();
    let page = assemble_page(&site.company, site.template.as_ref(), site.theme.as_ref(), &base);

    let years: Vec<i32> = page.content.milestones.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2021, 2022, 2023]);
    assert_eq!(page.content.analysts.len(), 1);
    assert_eq!(page.resolved_theme.text_color, "#F8FAFC");
    assert_eq!(page.resolved_theme.primary_font, "Inter");
    assert_eq!(page.resolved_theme.secondary_font, "Source Serif Pro");
    assert_eq!(page.header.ticker_badge.as_deref(), Some("ACME"));

    let fallback = &config.sites[1];
    let page = assemble_page(&fallback.company, None, None, &BaseData::default());
    assert_eq!(page.resolved_theme.primary_color, "#0F172A");
    assert!(page.content.analysts.is_empty());
}
