use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn get_camchat_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_camchat"))
}

/// Runs the binary from an empty directory so no local `.env` or config
/// file leaks into the test.
fn run_camchat_with_env(args: &[&str], env_vars: Vec<(&str, &str)>) -> Output {
    let sandbox = TempDir::new().expect("Failed to create sandbox dir");
    let mut cmd = Command::new(get_camchat_binary());
    cmd.args(args)
        .current_dir(sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path())
        .env("NO_COLOR", "1")
        .env_remove("CAMCHAT_API_URL")
        .env_remove("API_BASE_URL")
        .env_remove("RUST_LOG")
        .env_remove("CAMCHAT_LOG_LEVEL");
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute camchat command")
}

fn run_camchat(args: &[&str]) -> Output {
    run_camchat_with_env(args, Vec::new())
}

async fn run_camchat_async(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_camchat(&args)
    })
    .await
    .expect("camchat task panicked")
}

fn output_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_camchat(&["version"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version command should succeed");
        assert!(stdout.contains("camchat"), "output should contain 'camchat'");
        assert!(
            stdout.contains("0.1.0"),
            "output should contain version number"
        );
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_camchat(&["version", "--detailed"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version --detailed should succeed");
        assert!(stdout.contains("Version"));
        assert!(stdout.contains("Apache-2.0"));
        assert!(stdout.contains("RTSP camera streams"));
    }
}

mod help_command_tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let output = run_camchat(&["--help"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "--help should succeed");
        for command in ["ask", "health", "classify", "extract", "chat", "config"] {
            assert!(stdout.contains(command), "help should mention {command}");
        }
    }

    #[test]
    fn test_invalid_command() {
        let output = run_camchat(&["definitely-not-a-command"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_classify_requires_urls() {
        let output = run_camchat(&["classify"]);
        assert!(!output.status.success());
    }
}

mod media_command_tests {
    use super::*;

    #[test]
    fn test_classify_kinds() {
        let output = run_camchat(&[
            "classify",
            "RTSP://10.0.0.9/live",
            "https://cdn.example.com/clip.mp4",
            "https://example.com/report",
        ]);
        let stdout = output_to_string(&output);
        let lines: Vec<&str> = stdout.lines().collect();

        assert!(output.status.success());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("RTSP stream"));
        assert!(lines[1].contains("Video"));
        assert!(lines[2].contains("Link"));
    }

    #[test]
    fn test_extract_from_file_as_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("payload.json");
        std::fs::write(
            &file,
            json!({
                "url": "https://example.com/event/1",
                "camera": {"stream_url": "rtsp://10.0.0.2/main"},
                "videos": ["a.mp4"]
            })
            .to_string(),
        )
        .unwrap();

        let output = run_camchat(&["extract", file.to_str().unwrap(), "--format", "json"]);
        assert!(output.status.success(), "{}", stderr_to_string(&output));

        let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            items,
            json!([
                {"url": "https://example.com/event/1", "kind": "link"},
                {"url": "a.mp4", "kind": "video"},
                {"url": "rtsp://10.0.0.2/main", "kind": "rtsp_stream"}
            ])
        );
    }

    #[test]
    fn test_extract_without_media() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("payload.json");
        std::fs::write(&file, r#"{"temperature": 21}"#).unwrap();

        let output = run_camchat(&["extract", file.to_str().unwrap()]);
        assert!(output.status.success());
        assert!(output_to_string(&output).contains("No media URLs found"));
    }

    #[test]
    fn test_extract_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("payload.json");
        std::fs::write(&file, "not json").unwrap();

        let output = run_camchat(&["extract", file.to_str().unwrap()]);
        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("Error"));
    }
}

mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let output = run_camchat(&["config", "--format", "json"]);
        assert!(output.status.success(), "{}", stderr_to_string(&output));

        let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(config["api"]["base_url"], "http://localhost:8000");
        assert_eq!(config["tui"]["theme"], "Tokyo Night");
    }

    #[test]
    fn test_api_url_override_from_env() {
        let output = run_camchat_with_env(
            &["config", "--format", "json"],
            vec![("API_BASE_URL", "http://assistant.internal:9000")],
        );
        assert!(output.status.success());

        let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(config["api"]["base_url"], "http://assistant.internal:9000");
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let output = run_camchat(&["--api-url", "ftp://nope", "config"]);
        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("E2002"));
    }
}

mod network_command_tests {
    use super::*;

    #[test]
    fn test_health_unreachable_fails() {
        let url = unused_base_url();
        let output = run_camchat(&["--api-url", &url, "health"]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("not reachable"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_health_ok() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/docs"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let output = run_camchat_async(vec![
            "--api-url".to_string(),
            mock_server.uri(),
            "health".to_string(),
        ])
        .await;

        assert!(output.status.success(), "{}", stderr_to_string(&output));
        assert!(output_to_string(&output).contains("reachable"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ask_json_output() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "hi",
                "tool_data": {"urls": ["a.mp4", "b"]}
            })))
            .mount(&mock_server)
            .await;

        let output = run_camchat_async(vec![
            "--api-url".to_string(),
            mock_server.uri(),
            "ask".to_string(),
            "hello".to_string(),
            "--thread".to_string(),
            "thread-test".to_string(),
            "--format".to_string(),
            "json".to_string(),
        ])
        .await;

        assert!(output.status.success(), "{}", stderr_to_string(&output));
        let reply: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(reply["thread_id"], "thread-test");
        assert_eq!(reply["response"], "hi");
        assert_eq!(reply["media"][0]["kind"], "video");
        assert_eq!(reply["media"][1]["kind"], "link");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ask_detail_error_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/ask"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "bad thread"})))
            .mount(&mock_server)
            .await;

        let output = run_camchat_async(vec![
            "--api-url".to_string(),
            mock_server.uri(),
            "ask".to_string(),
            "hello".to_string(),
        ])
        .await;

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("bad thread"));
    }
}
