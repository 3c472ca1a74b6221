#![allow(dead_code)]
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

pub fn hurl_cmd(store: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hurl"));
    cmd.env_remove("WEBSITE")
        .env_remove("DEBUG")
        .env_remove("HURL_DB")
        .arg("--store")
        .arg(store);
    cmd
}

pub fn stdout_json(output: &Output) -> Result<Value, String> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).map_err(|e| {
        format!(
            "Failed to parse JSON output: {e}\nstdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map.iter().all(|(k, v)| {
            act_map
                .get(k)
                .is_some_and(|act_v| json_subset(v, act_v))
        }),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr.iter().zip(act_arr).all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(a))
        }
        _ => expected == actual,
    }
}

pub fn assert_subset(expected: &Value, actual: &Value) {
    assert!(
        json_subset(expected, actual),
        "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
        serde_json::to_string_pretty(expected).unwrap(),
        serde_json::to_string_pretty(actual).unwrap()
    );
}
