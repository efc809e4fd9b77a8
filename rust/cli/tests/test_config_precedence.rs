use cardsaga_cli::run_with_input;
use serial_test::serial;
use std::io::{Cursor, Write};

fn set(key: &str, value: &str) {
    // SAFETY: tests touching the environment are serialized.
    unsafe { std::env::set_var(key, value) };
}

fn clear() {
    for v in [
        "CARDSAGA_CONFIG",
        "CARDSAGA_SEED",
        "CARDSAGA_DEAL_ORDER",
        "CARDSAGA_ROUNDS",
    ] {
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::remove_var(v) };
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["cardsaga"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(argv, &mut out, &mut err, &mut Cursor::new(String::new()));
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn env_overrides_file() {
    clear();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1\nrounds = 2").unwrap();
    set("CARDSAGA_CONFIG", file.path().to_str().unwrap());
    set("CARDSAGA_SEED", "2");

    let (code, out, _) = run(&["cfg"]);
    clear();

    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"]["value"], 2);
    assert_eq!(v["seed"]["source"], "env");
    assert_eq!(v["rounds"]["value"], 2);
    assert_eq!(v["rounds"]["source"], "file");
}

#[test]
#[serial]
fn flags_override_env() {
    clear();
    set("CARDSAGA_SEED", "5");
    set("CARDSAGA_ROUNDS", "4");
    let (_, from_env, _) = run(&["poker", "--json"]);
    let (_, from_flags, _) = run(&["poker", "--json", "--seed", "6", "--rounds", "2"]);
    clear();

    assert_eq!(from_env.lines().count(), 4);
    assert!(from_env.contains("\"seed\":5"));
    assert_eq!(from_flags.lines().count(), 2);
    assert!(from_flags.contains("\"seed\":6"));
}

#[test]
#[serial]
fn configured_seed_reproduces_a_deal() {
    clear();
    set("CARDSAGA_SEED", "4242");
    let (_, configured, _) = run(&["deal"]);
    clear();
    let (_, flagged, _) = run(&["deal", "--seed", "4242"]);
    assert_eq!(configured, flagged);
}

#[test]
#[serial]
fn unreadable_config_file_fails() {
    clear();
    set("CARDSAGA_CONFIG", "/nonexistent/cardsaga.toml");
    let (code, out, err) = run(&["deal", "--seed", "1"]);
    clear();

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"));
}

#[test]
#[serial]
fn malformed_config_file_fails_cfg() {
    clear();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rounds = \"many\"").unwrap();
    set("CARDSAGA_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = run(&["cfg"]);
    clear();

    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}
