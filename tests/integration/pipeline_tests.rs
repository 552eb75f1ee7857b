use crate::support::{
    create_test_config, detail_page, listing_page, mount_page, mount_status, output_dir,
};
use plan_scout::crawler::{Coordinator, HttpRenderer, PageRenderer};
use plan_scout::{PlanRecord, ScoutError};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

fn read_json(path: &str) -> Vec<PlanRecord> {
    let content = std::fs::read_to_string(path).expect("Failed to read JSON output");
    serde_json::from_str(&content).expect("Failed to parse JSON output")
}

#[tokio::test]
async fn test_full_scrape_writes_all_plans() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/broadband",
        listing_page(&["/broadband/fibre-100", "/broadband/fibre-300", "/broadband/adsl"]),
    )
    .await;
    mount_page(
        &server,
        "/broadband/fibre-100",
        detail_page(
            Some("Fibre 100"),
            Some("<ul><li>Unlimited data</li></ul>"),
            Some("$59.99/month"),
            Some("https://isp.example/fibre-100"),
        ),
    )
    .await;
    mount_page(
        &server,
        "/broadband/fibre-300",
        detail_page(
            Some("Fibre 300"),
            Some("Fast"),
            Some("$79.99/month"),
            Some("https://isp.example/fibre-300"),
        ),
    )
    .await;
    mount_page(
        &server,
        "/broadband/adsl",
        detail_page(Some("ADSL"), Some("Basic"), Some("$29.99/month"), None),
    )
    .await;

    let dir = output_dir();
    let config = create_test_config(&base_url, dir.path());
    let json_path = config.output.json_path.clone();

    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let stats = coordinator.run().await.expect("Scrape failed");

    assert_eq!(stats.links_found, 3);
    assert_eq!(stats.plans_scraped, 3);
    assert_eq!(stats.plans_failed(), 0);

    let records = read_json(&json_path);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Fibre 100", "Fibre 300", "ADSL"]);
    assert_eq!(records[0].description, "Unlimited data");
    assert_eq!(records[2].contact_info, "N/A");
}

#[tokio::test]
async fn test_link_discovery_prefixes_base_url() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/broadband",
        listing_page(&["/broadband/a", "/broadband/b", "/broadband/c", "/broadband/d"]),
    )
    .await;

    let dir = output_dir();
    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let links = coordinator.discover_plan_links().await.unwrap();

    // The header promo link and the container's /contact link are not plans
    assert_eq!(links.len(), 4);
    for link in &links {
        assert!(
            link.starts_with(&base_url),
            "{} is not prefixed with {}",
            link,
            base_url
        );
    }
    assert_eq!(links[0], format!("{}/broadband/a", base_url));
}

#[tokio::test]
async fn test_base_url_path_is_kept() {
    let server = MockServer::start().await;
    let base_url = format!("{}/nz", server.uri());

    mount_page(&server, "/nz/broadband", listing_page(&["/broadband/a"])).await;
    mount_page(
        &server,
        "/nz/broadband/a",
        detail_page(Some("Fibre NZ"), Some("d"), Some("p"), Some("https://isp.example/nz")),
    )
    .await;

    let dir = output_dir();
    let config = create_test_config(&base_url, dir.path());
    let json_path = config.output.json_path.clone();

    let coordinator = Coordinator::new(config).unwrap();
    assert_eq!(
        coordinator.listing_url().as_str(),
        format!("{}/broadband", base_url)
    );

    let links = coordinator.discover_plan_links().await.unwrap();
    assert_eq!(links, vec![format!("{}/broadband/a", base_url)]);

    let stats = coordinator.run().await.unwrap();
    assert_eq!(stats.plans_scraped, 1);
    assert_eq!(read_json(&json_path)[0].title, "Fibre NZ");
}

#[tokio::test]
async fn test_failed_detail_page_is_omitted() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/broadband",
        listing_page(&["/broadband/ok-1", "/broadband/broken", "/broadband/ok-2"]),
    )
    .await;
    mount_page(
        &server,
        "/broadband/ok-1",
        detail_page(Some("One"), Some("d"), Some("p"), Some("https://isp.example/1")),
    )
    .await;
    mount_status(&server, "/broadband/broken", 500).await;
    mount_page(
        &server,
        "/broadband/ok-2",
        detail_page(Some("Two"), Some("d"), Some("p"), Some("https://isp.example/2")),
    )
    .await;

    let dir = output_dir();
    let config = create_test_config(&base_url, dir.path());
    let json_path = config.output.json_path.clone();

    let stats = Coordinator::new(config).unwrap().run().await.unwrap();

    assert_eq!(stats.links_found, 3);
    assert_eq!(stats.plans_scraped, 2);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].0, format!("{}/broadband/broken", base_url));

    let records = read_json(&json_path);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.title != "N/A"));
}

#[tokio::test]
async fn test_missing_field_gets_placeholder() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/broadband", listing_page(&["/broadband/no-price"])).await;
    mount_page(
        &server,
        "/broadband/no-price",
        detail_page(
            Some("Fibre 50"),
            Some("Entry level"),
            None,
            Some("https://isp.example/50"),
        ),
    )
    .await;

    let dir = output_dir();
    let config = create_test_config(&base_url, dir.path());
    let json_path = config.output.json_path.clone();

    Coordinator::new(config).unwrap().run().await.unwrap();

    let records = read_json(&json_path);
    assert_eq!(
        records,
        vec![PlanRecord {
            title: "Fibre 50".to_string(),
            description: "Entry level".to_string(),
            price_details: "N/A".to_string(),
            contact_info: "https://isp.example/50".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_listing_failure_aborts_run() {
    let server = MockServer::start().await;
    mount_status(&server, "/broadband", 503).await;

    let dir = output_dir();
    let config = create_test_config(&server.uri(), dir.path());
    let csv_path = config.output.csv_path.clone();

    let result = Coordinator::new(config).unwrap().run().await;

    assert!(matches!(result, Err(ScoutError::ListingUnavailable { .. })));
    assert!(!std::path::Path::new(&csv_path).exists());
}

#[tokio::test]
async fn test_listing_without_plans_aborts_run() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/broadband",
        "<html><body><p>No plans today</p></body></html>".to_string(),
    )
    .await;

    let dir = output_dir();
    let result = Coordinator::new(create_test_config(&server.uri(), dir.path()))
        .unwrap()
        .run()
        .await;

    assert!(matches!(result, Err(ScoutError::NoPlanLinks { .. })));
}

#[tokio::test]
async fn test_http_renderer_settle_delay() {
    let server = MockServer::start().await;
    mount_page(&server, "/broadband", "<html></html>".to_string()).await;

    let renderer =
        HttpRenderer::with_user_agent("plan-scout-test/1.0", Duration::from_millis(100)).unwrap();
    let renderer: Arc<dyn PageRenderer> = Arc::new(renderer);

    let started = std::time::Instant::now();
    renderer
        .render(&format!("{}/broadband", server.uri()))
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(100));
}
