use crate::support::{detail_page, output_dir};
use plan_scout::config::{OutputConfig, SelectorConfig};
use plan_scout::crawler::{extract_plan_record, DetailSelectors};
use plan_scout::output::write_outputs;
use plan_scout::record::FIELD_NAMES;
use plan_scout::PlanRecord;
use std::path::Path;

fn sample_records() -> Vec<PlanRecord> {
    vec![
        PlanRecord {
            title: "Fibre 100".to_string(),
            description: "Unlimited data, no contract".to_string(),
            price_details: "$59.99/month".to_string(),
            contact_info: "https://isp.example/fibre-100".to_string(),
        },
        PlanRecord {
            title: "Fibre \"Max\"".to_string(),
            description: "Über-fast".to_string(),
            price_details: "€79/month".to_string(),
            contact_info: "N/A".to_string(),
        },
        PlanRecord::placeholder("N/A"),
    ]
}

fn output_config(dir: &Path) -> OutputConfig {
    OutputConfig {
        csv_path: dir.join("plans.csv").display().to_string(),
        json_path: dir.join("plans.json").display().to_string(),
        text_path: dir.join("plans.txt").display().to_string(),
    }
}

fn read_csv(path: &str) -> Vec<PlanRecord> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open CSV");
    let headers: Vec<String> = reader
        .headers()
        .expect("Missing CSV header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, FIELD_NAMES);

    reader
        .records()
        .map(|row| {
            let row = row.expect("Bad CSV row");
            PlanRecord {
                title: row[0].to_string(),
                description: row[1].to_string(),
                price_details: row[2].to_string(),
                contact_info: row[3].to_string(),
            }
        })
        .collect()
}

fn read_text(path: &str) -> Vec<PlanRecord> {
    let content = std::fs::read_to_string(path).expect("Failed to read text output");

    content
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(index, block)| {
            let mut lines = block.lines();
            assert_eq!(lines.next(), Some(format!("Plan {}:", index + 1).as_str()));

            let mut values = lines.map(|line| {
                let (label, value) = line.split_once(": ").expect("Malformed field line");
                (label.to_string(), value.to_string())
            });
            let mut next = |expected: &str| {
                let (label, value) = values.next().expect("Missing field line");
                assert_eq!(label, expected);
                value
            };

            PlanRecord {
                title: next("Title"),
                description: next("Description"),
                price_details: next("Price Details"),
                contact_info: next("Contact Info"),
            }
        })
        .collect()
}

#[test]
fn test_formats_agree_record_for_record() {
    let dir = output_dir();
    let config = output_config(dir.path());
    let records = sample_records();

    let written = write_outputs(&config, &records).unwrap();
    assert_eq!(written.len(), 3);

    let from_json: Vec<PlanRecord> =
        serde_json::from_str(&std::fs::read_to_string(&config.json_path).unwrap()).unwrap();
    let from_csv = read_csv(&config.csv_path);
    let from_text = read_text(&config.text_path);

    assert_eq!(from_json, records);
    assert_eq!(from_csv, records);
    assert_eq!(from_text, records);
}

#[test]
fn test_multi_line_markup_agrees_across_formats() {
    let selectors = DetailSelectors::from_config(&SelectorConfig::default()).unwrap();
    let html = detail_page(
        Some("\n  Fibre 100\n"),
        Some("<ul>\n  <li>Unlimited</li>\n  <li>No contract</li>\n</ul>"),
        Some("$59.99\n  /month"),
        Some("https://isp.example/fibre-100"),
    );
    let record = extract_plan_record(&html, &selectors).unwrap();
    assert_eq!(record.description, "Unlimited No contract");
    assert_eq!(record.price_details, "$59.99 /month");

    let dir = output_dir();
    let config = output_config(dir.path());
    let records = vec![record];

    write_outputs(&config, &records).unwrap();

    let from_json: Vec<PlanRecord> =
        serde_json::from_str(&std::fs::read_to_string(&config.json_path).unwrap()).unwrap();
    assert_eq!(from_json, records);
    assert_eq!(read_csv(&config.csv_path), records);
    assert_eq!(read_text(&config.text_path), records);
}

#[test]
fn test_rewriting_is_idempotent() {
    let dir = output_dir();
    let config = output_config(dir.path());
    let records = sample_records();

    write_outputs(&config, &records).unwrap();
    let csv_first = std::fs::read(&config.csv_path).unwrap();
    let json_first = std::fs::read(&config.json_path).unwrap();
    let text_first = std::fs::read(&config.text_path).unwrap();

    write_outputs(&config, &records).unwrap();

    assert_eq!(std::fs::read(&config.csv_path).unwrap(), csv_first);
    assert_eq!(std::fs::read(&config.json_path).unwrap(), json_first);
    assert_eq!(std::fs::read(&config.text_path).unwrap(), text_first);
}

#[test]
fn test_rewrite_replaces_previous_output() {
    let dir = output_dir();
    let config = output_config(dir.path());

    write_outputs(&config, &sample_records()).unwrap();
    write_outputs(&config, &sample_records()[..1]).unwrap();

    assert_eq!(read_csv(&config.csv_path).len(), 1);
    assert_eq!(read_text(&config.text_path).len(), 1);
}

#[test]
fn test_empty_result_set() {
    let dir = output_dir();
    let config = output_config(dir.path());

    write_outputs(&config, &[]).unwrap();

    assert!(read_csv(&config.csv_path).is_empty());
    assert_eq!(std::fs::read_to_string(&config.json_path).unwrap(), "[]");
    assert_eq!(std::fs::read_to_string(&config.text_path).unwrap(), "");
}
