use std::process::Command;

use tempfile::tempdir;

fn write_answers(dir: &std::path::Path, answers: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("answers.json");
    std::fs::write(&path, serde_json::to_string_pretty(answers).unwrap()).unwrap();
    path
}

fn quick_answers(value: i32) -> serde_json::Value {
    let ids = [3, 15, 24, 32, 22, 14, 9, 13];
    serde_json::Value::Object(
        ids.iter()
            .map(|id| (id.to_string(), serde_json::json!(value)))
            .collect(),
    )
}

#[test]
fn cli_score_json_smoke() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(dir.path(), &quick_answers(5));
    let out_path = dir.path().join("report.json");

    let status = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "quick", "--format", "json"])
        .arg("--answers")
        .arg(&answers_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(v.get("type").and_then(|t| t.as_str()).unwrap(), "INTP");
    assert_eq!(v.get("variant").and_then(|t| t.as_str()).unwrap(), "quick");
    assert_eq!(v.get("complete").and_then(|c| c.as_bool()), Some(true));
    assert_eq!(v.pointer("/scores/EI").and_then(|s| s.as_i64()), Some(10));
    assert_eq!(
        v.pointer("/dimensions/0/confidence")
            .and_then(|s| s.as_str())
            .unwrap(),
        "strong"
    );
    assert_eq!(v.get("clarity_index").and_then(|c| c.as_i64()), Some(100));
    assert!(v.get("answers_hash").and_then(|h| h.as_str()).unwrap().len() >= 16);
    assert!(v.get("answers").is_none());
}

#[test]
fn cli_score_markdown_to_stdout() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(dir.path(), &quick_answers(1));

    let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "quick", "--format", "md"])
        .arg("--answers")
        .arg(&answers_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Type Report: ESFJ"));
    assert!(stdout.contains("| EI | 2 | E |"));
}

#[test]
fn cli_score_is_deterministic() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(dir.path(), &serde_json::json!({"1": 4, "2": 2, "17": 5}));

    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
            .args(["score", "--include-answers"])
            .arg("--answers")
            .arg(&answers_path)
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    let a = run();
    let b = run();
    assert_eq!(a, b);

    let v: serde_json::Value = serde_json::from_slice(&a).unwrap();
    assert_eq!(v.get("complete").and_then(|c| c.as_bool()), Some(false));
    assert_eq!(v.pointer("/answers/17").and_then(|a| a.as_i64()), Some(5));
}

#[test]
fn cli_strict_rejects_out_of_range_answers() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(dir.path(), &serde_json::json!({"3": 7}));

    let lenient = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "quick"])
        .arg("--answers")
        .arg(&answers_path)
        .output()
        .unwrap();
    assert!(lenient.status.success());

    let strict = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "quick", "--strict"])
        .arg("--answers")
        .arg(&answers_path)
        .output()
        .unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("OutOfRange"));
}

#[test]
fn cli_score_with_custom_variant_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("variant.json");
    std::fs::write(
        &config_path,
        r#"{"name": "mini", "questions": {"EI": [1], "SN": [2], "TF": [3], "JP": [4]}}"#,
    )
    .unwrap();
    let answers_path = write_answers(dir.path(), &serde_json::json!({"1": 5, "2": 1, "3": 5, "4": 1}));

    let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .arg("score")
        .arg("--config")
        .arg(&config_path)
        .arg("--answers")
        .arg(&answers_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v.get("variant").and_then(|t| t.as_str()).unwrap(), "mini");
    assert_eq!(v.get("type").and_then(|t| t.as_str()).unwrap(), "ISTJ");
}

#[test]
fn cli_unknown_variant_fails() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(dir.path(), &quick_answers(3));

    let status = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "enormous"])
        .arg("--answers")
        .arg(&answers_path)
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_variants_lists_builtins() {
    let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .arg("variants")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("full\tk=8\ttotal=32\trange=8..=40\tthreshold=24"));
    assert!(lines.iter().any(|l| l.starts_with("quick\tk=2\ttotal=8\trange=2..=10")));
    assert!(lines.iter().any(|l| l.starts_with("feline\tk=4\ttotal=16")));
}

#[test]
fn cli_questions_emits_localized_json_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["questions", "--variant", "quick", "--locale", "ja"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].get("id").and_then(|id| id.as_u64()), Some(3));
    assert_eq!(rows[0].get("dimension").and_then(|d| d.as_str()), Some("EI"));
    for row in &rows {
        assert!(!row.get("left").and_then(|l| l.as_str()).unwrap().is_empty());
        assert!(!row.get("right").and_then(|r| r.as_str()).unwrap().is_empty());
    }
}

#[test]
fn cli_scores_extreme_answers_without_strict() {
    let dir = tempdir().unwrap();
    let answers_path = write_answers(
        dir.path(),
        &serde_json::json!({"3": i32::MAX, "15": i32::MAX, "24": i32::MIN, "32": 5}),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_oejts"))
        .args(["score", "--variant", "quick"])
        .arg("--answers")
        .arg(&answers_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        v.pointer("/scores/EI").and_then(|s| s.as_i64()),
        Some(2 * i64::from(i32::MAX))
    );
    assert_eq!(v.get("overall_consistent").and_then(|c| c.as_bool()), Some(false));
    let ei = v.pointer("/dimensions/0").unwrap();
    assert_eq!(
        ei["left_percent"].as_i64().unwrap() + ei["right_percent"].as_i64().unwrap(),
        100
    );
}
