use super::*;

fn outcome(name: &str, verdict: Verdict, skipped: bool) -> ToolOutcome {
    ToolOutcome {
        name: name.to_string(),
        verdict,
        skipped,
    }
}

fn targets() -> Targets {
    Targets {
        files: vec!["a.go".to_string(), "pkg/b.go".to_string()],
        dirs: vec![".".to_string(), "pkg".to_string()],
    }
}

#[test]
fn summary_counts_each_verdict() {
    let result = RunResult {
        outcomes: vec![
            outcome("gofmt", Verdict::Pass, false),
            outcome("golint", Verdict::Fail("line 3: unused var\n".to_string()), false),
            outcome("go vet", Verdict::ExecutionError("boom".to_string()), false),
            outcome("dep status", Verdict::Pass, true),
        ],
    };
    let json: serde_json::Value =
        serde_json::from_str(&format_json(&result, &targets()).unwrap()).unwrap();

    assert_eq!(json["summary"]["tools"], 4);
    assert_eq!(json["summary"]["passed"], 2);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["summary"]["skipped"], 1);
    assert_eq!(json["summary"]["exit_code"], 1);
}

#[test]
fn results_carry_status_and_report() {
    let result = RunResult {
        outcomes: vec![
            outcome("gofmt", Verdict::Pass, false),
            outcome("golint", Verdict::Fail("line 3: unused var".to_string()), false),
            outcome("dep status", Verdict::Pass, true),
        ],
    };
    let json: serde_json::Value =
        serde_json::from_str(&format_json(&result, &targets()).unwrap()).unwrap();
    let results = json["results"].as_array().unwrap();

    assert_eq!(results[0]["tool"], "gofmt");
    assert_eq!(results[0]["status"], "passed");
    assert!(results[0].get("report").is_none());
    assert_eq!(results[1]["status"], "failed");
    assert_eq!(results[1]["report"], "line 3: unused var");
    assert_eq!(results[2]["status"], "skipped");
}

#[test]
fn targets_are_listed() {
    let json: serde_json::Value =
        serde_json::from_str(&format_json(&RunResult::default(), &targets()).unwrap()).unwrap();
    assert_eq!(json["targets"]["dirs"], serde_json::json!([".", "pkg"]));
    assert_eq!(json["targets"]["files"][1], "pkg/b.go");
    assert_eq!(json["summary"]["exit_code"], 0);
}
