use nulltrace_site::catalog::design::{ButtonStyle, DesignCategory};
use nulltrace_site::{
    compose, Catalog, Catalogs, CompositionStrategy, DesignTemplate, FileSettingsStore,
    NotificationKind, NotificationLog, SettingsStore, Site, SiteBundle, SiteConfig, SiteError,
    StructureTemplatePanel, TemplatePanel, ThemeHandle,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(filename);
    path
}

fn gym_bundle() -> SiteBundle {
    SiteBundle::load(&fixture_path("gym-bundle.yaml")).unwrap()
}

#[tokio::test]
async fn test_render_fullscreen_bundle() {
    let site = Site::from_bundle(SiteConfig::default(), gym_bundle()).unwrap();
    let html = site.render_home().await.unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Iron Gym</title>"));
    assert!(html.contains("design-template-bold-energy"));
    assert!(html.contains("website-template-dynamic-interactive"));
    assert!(html.contains("<nav class=\"sidebar-nav\">"));
    assert!(html.contains("<main>"));
    assert!(html.contains("<section id=\"section-summer-promo\" class=\"fullscreen-section\">"));
    assert_eq!(html.matches("data-section-id=\"summer-promo\"").count(), 1);
    assert!(html.contains("data-icon=\"crown\""));
    assert!(!html.contains(">Admin</a>"));
}

#[tokio::test]
async fn test_every_strategy_keeps_block_presence() {
    let bundle = gym_bundle();
    let page = bundle.pages["home"].clone();
    let content = page.content.unwrap();
    let catalogs = Catalogs::builtin();

    for template in catalogs.structure.iter() {
        let composition = compose(&content, &page.sections, template);
        let outline = composition.outline();
        for block in [
            "hero",
            "intro",
            "services",
            "features",
            "stats",
            "gallery",
            "cta",
            "testimonials",
        ] {
            assert_eq!(
                outline.iter().filter(|entry| *entry == block).count(),
                1,
                "{} in {}",
                block,
                template.id
            );
        }
        let dynamic: Vec<&String> = outline
            .iter()
            .filter(|entry| entry.starts_with("dynamic:"))
            .collect();
        assert_eq!(dynamic, vec!["dynamic:summer-promo", "dynamic:schedule"]);
    }
}

#[tokio::test]
async fn test_standard_order_for_default_structure() {
    let mut bundle = gym_bundle();
    bundle.settings.as_mut().unwrap().website_template = Some("retired-layout".to_string());
    let site = Site::from_bundle(SiteConfig::default(), bundle.clone()).unwrap();
    let html = site.render_home().await.unwrap();
    assert!(html.contains("website-template-standard-business"));

    let page = &bundle.pages["home"];
    let composition = compose(
        page.content.as_ref().unwrap(),
        &page.sections,
        site.catalogs().structure.default_template(),
    );
    assert_eq!(composition.strategy, CompositionStrategy::Standard);

    let positions: Vec<usize> = [
        "class=\"hero-section",
        "data-block=\"intro\"",
        "data-block=\"services\"",
        "data-block=\"features\"",
        "data-block=\"stats\"",
        "data-section-id=\"summer-promo\"",
        "data-section-id=\"schedule\"",
        "data-block=\"testimonials\"",
        "data-block=\"gallery\"",
        "data-block=\"cta\"",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn test_missing_page_renders_empty_screen() {
    let config = SiteConfig {
        page_key: "pricing".to_string(),
        admin_path: "/dashboard".to_string(),
        ..Default::default()
    };
    let site = Site::from_bundle(config, gym_bundle()).unwrap();
    let html = site.render_home().await.unwrap();
    assert!(html.contains("No Content Available"));
    assert!(html.contains("href=\"/dashboard\""));
}

#[tokio::test]
async fn test_select_through_file_store_keeps_other_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings.yaml");
    fs::write(
        &settings_path,
        "siteName: Iron Gym\nwebsiteTemplate: standard-business\nphone: \"555-0100\"\n",
    )
    .unwrap();

    let store = Arc::new(FileSettingsStore::new(&settings_path));
    let log = NotificationLog::new();
    let theme = ThemeHandle::default();
    let panel: StructureTemplatePanel = TemplatePanel::new(
        Catalogs::builtin().structure,
        store.clone(),
        theme.clone(),
        Arc::new(log.clone()),
    );

    panel.mount().await;
    assert_eq!(theme.snapshot().structure_id.as_deref(), Some("standard-business"));

    panel.select("magazine-editorial").await.unwrap();
    assert_eq!(
        log.kinds(),
        vec![NotificationKind::Loading, NotificationKind::Success]
    );

    let stored = store.get_site_settings().await.unwrap().unwrap();
    assert_eq!(stored.website_template.as_deref(), Some("magazine-editorial"));
    assert_eq!(stored.site_name.as_deref(), Some("Iron Gym"));
    assert_eq!(stored.extra["phone"], "555-0100");

    let config = SiteConfig {
        settings_path: Some(settings_path),
        ..Default::default()
    };
    let html = Site::from_bundle(config, gym_bundle())
        .unwrap()
        .render_home()
        .await
        .unwrap();
    assert!(html.contains("<nav class=\"overlay-nav\">"));
    assert!(html.contains("header-overlay"));
}

#[test]
fn test_operator_design_catalog() {
    let catalog = Catalog::<DesignTemplate>::load(&fixture_path("design-catalog.yaml")).unwrap();
    assert_eq!(catalog.ids(), vec!["studio-dark", "paper-light"]);
    assert_eq!(catalog.default_template().category, DesignCategory::Bold);
    assert_eq!(
        catalog.default_template().components.buttons.style,
        ButtonStyle::Filled
    );
    let paper = catalog.lookup_by_id(Some("paper-light"));
    assert_eq!(paper.components.buttons.style, ButtonStyle::Ghost);
    assert_eq!(catalog.lookup_by_id(Some("unknown")).id, "studio-dark");
}

#[test]
fn test_config_points_at_operator_catalog() {
    let config = SiteConfig {
        design_catalog: Some(fixture_path("design-catalog.yaml")),
        ..Default::default()
    };
    let catalogs = Catalogs::from_config(&config).unwrap();
    assert_eq!(catalogs.design.default_template().id, "studio-dark");
    assert_eq!(catalogs.structure.len(), 5);
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let duplicate = Catalog::<DesignTemplate>::load(&fixture_path("duplicate-catalog.yaml"));
    assert!(matches!(
        duplicate,
        Err(SiteError::DuplicateTemplateId { ref id, .. }) if id == "twin"
    ));

    let empty = Catalog::<DesignTemplate>::load(&fixture_path("empty-catalog.yaml"));
    assert!(matches!(empty, Err(SiteError::EmptyCatalog { .. })));

    let missing = Catalog::<DesignTemplate>::load(&fixture_path("absent.yaml"));
    assert!(matches!(missing, Err(SiteError::Io(_))));
}
