use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const GRAPH: &str = r#"{
    "nodes": [
        {"id": "c1", "type": "cluster", "x": 0, "y": 0, "z": 0, "risk_level": 0.9},
        {"id": "n1", "type": "entity", "x": 10, "y": 0, "z": 0, "risk_level": 0.5}
    ],
    "edges": [{"source_id": "c1", "target_id": "n1", "strength": 0.75}]
}"#;

fn starmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_starmap"))
}

fn write_graph(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, GRAPH).unwrap();
    path
}

#[test]
fn test_render_to_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path());
    let out = dir.path().join("model.json");

    let status = starmap()
        .args(["render", "--input"])
        .arg(&graph)
        .args(["--stars", "16", "--width", "1000", "--output"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(model["nodes"][1]["normalized_x"], 1000.0);
    assert_eq!(model["starfield"]["stars"].as_array().unwrap().len(), 16);
    assert_eq!(model["supernovas"].as_array().unwrap().len(), 1);
    assert_eq!(model["wormholes"][0]["flow"], 0.75);
}

#[test]
fn test_config_file_with_flag_override() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path());
    let config = dir.path().join("engine.json");
    fs::write(
        &config,
        r#"{"viewport": {"width": 400, "height": 300}, "star_count": 3}"#,
    )
    .unwrap();

    let output = starmap()
        .args(["render", "--input"])
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .args(["--height", "50"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(model["nodes"][1]["normalized_x"], 400.0);
    assert_eq!(model["starfield"]["stars"].as_array().unwrap().len(), 3);
}

#[test]
fn test_inspect_prints_summary() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = starmap()
        .args(["inspect", "--input"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("galaxies:   1"));
    assert!(stdout.contains("stars:      200"));
    assert!(stdout.contains("degraded:   none"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = starmap()
        .args(["inspect", "--input"])
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read graph"));
}
