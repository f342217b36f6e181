use std::path::Path;
use std::process::Output;

use hero_images::hero_image_specs;
use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_binary(server: &MockServer, output_dir: &Path, api_key: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hero-images"));
    command
        .env("OPENAI_BASE_URL", format!("{}/v1", server.uri()))
        .env("HERO_IMAGES_OUTPUT_DIR", output_dir)
        .env("HERO_IMAGES_PAUSE_MS", "0")
        .env("ANSI_OUTPUT", "false")
        .env_remove("HERO_IMAGES_SPECS");
    match api_key {
        Some(key) => command.env("OPENAI_API_KEY", key),
        None => command.env_remove("OPENAI_API_KEY"),
    };
    command.output().await.unwrap()
}

fn files_in(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn missing_api_key_exits_without_network_calls() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("public").join("assets");

    let output = run_binary(&server, &output_dir, None).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"), "{stderr}");
    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn third_failure_leaves_two_files_and_exits_one() {
    let server = MockServer::start().await;
    let specs = hero_image_specs();

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(json!({ "prompt": specs[2].prompt })))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "url": format!("{}/files/generated.png", server.uri()) }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/generated.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"image".to_vec()))
        .mount(&server)
        .await;

    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("public").join("assets");
    let output = run_binary(&server, &output_dir, Some("sk-test")).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"), "{stderr}");
    assert!(stderr.contains("not found"), "{stderr}");

    let mut expected = vec![specs[0].filename.clone(), specs[1].filename.clone()];
    expected.sort();
    assert_eq!(files_in(&output_dir), expected);
}

#[tokio::test]
async fn full_run_writes_every_image_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "url": format!("{}/files/generated.png", server.uri()) }]
        })))
        .expect(5)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/generated.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"image".to_vec()))
        .expect(5)
        .mount(&server)
        .await;

    let root = tempfile::tempdir().unwrap();
    let output_dir = root.path().join("public").join("assets");
    let output = run_binary(&server, &output_dir, Some("sk-test")).await;

    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let mut expected: Vec<String> = hero_image_specs()
        .into_iter()
        .map(|spec| spec.filename)
        .collect();
    expected.sort();
    assert_eq!(files_in(&output_dir), expected);
    for name in expected {
        assert_eq!(std::fs::read(output_dir.join(name)).unwrap(), b"image");
    }
}
