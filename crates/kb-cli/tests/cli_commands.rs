#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
//! End-to-end tests for the `kb` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kb() -> Command {
    let mut cmd = Command::cargo_bin("kb").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("KB_SEED").env_remove("KB_TABLES");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

/// Write a custom table file into a temp directory.
fn custom_tables() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.json"),
        r#"{ "tables": { "weather": ["Rain"], "Tavern Name": ["The Gilded Goose"] } }"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_silent_prints_value_in_range() {
    let out = stdout_of(kb().args(["roll", "3d6", "--seed", "7"]));
    let value: i64 = out.trim().parse().unwrap();
    assert!((3..=18).contains(&value));
}

#[test]
fn roll_verbose_shows_canonical_formula() {
    let out = stdout_of(kb().args(["roll", "d20+5", "--verbose", "--seed", "7"]));
    let (formula, value) = out.trim().split_once(':').unwrap();
    assert_eq!(formula, "1d20+5");
    let value: i64 = value.parse().unwrap();
    assert!((6..=25).contains(&value));
}

#[test]
fn roll_finds_formula_in_chat_text() {
    let out = stdout_of(kb().args(["roll", "roll 3d6+05 for damage", "-v", "--seed", "7"]));
    let (formula, value) = out.trim().split_once(':').unwrap();
    assert_eq!(formula, "3d6+5");
    let value: i64 = value.parse().unwrap();
    assert!((8..=23).contains(&value));
}

#[test]
fn roll_same_seed_same_result() {
    let first = stdout_of(kb().args(["roll", "4d10x2-3", "--seed", "99"]));
    let second = stdout_of(kb().args(["roll", "4d10x2-3", "--seed", "99"]));
    assert_eq!(first, second);
}

#[test]
fn roll_seed_from_env() {
    let first = stdout_of(kb().env("KB_SEED", "5").args(["roll", "10d100"]));
    let second = stdout_of(kb().args(["roll", "10d100", "--seed", "5"]));
    assert_eq!(first, second);
}

#[test]
fn roll_times_gives_one_line_each() {
    let out = stdout_of(kb().args(["roll", "2d6", "-n", "5", "--seed", "1"]));
    let values: Vec<i64> = out.lines().map(|l| l.trim().parse().unwrap()).collect();
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|v| (2..=12).contains(v)));
}

#[test]
fn roll_unparseable_prints_message() {
    kb().args(["roll", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry, couldn't parse your dice formula"));
}

#[test]
fn roll_json() {
    let out = stdout_of(kb().args(["roll", "2d6+1", "--json", "--seed", "3"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rolls = parsed.as_array().unwrap();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0]["formula"]["sides"], 6);
    let value = rolls[0]["value"].as_i64().unwrap();
    assert!((3..=13).contains(&value));
}

#[test]
fn roll_json_unparseable_fails() {
    kb().args(["roll", "xyz", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice formula"));
}

// ---------------------------------------------------------------------------
// dice, fudge, d66, d666
// ---------------------------------------------------------------------------

#[test]
fn dice_clamps_degenerate_input() {
    let out = stdout_of(kb().args(["dice", "0", "1", "--seed", "2"]));
    let value: u64 = out.trim().parse().unwrap();
    assert!((1..=2).contains(&value));
}

#[test]
fn fudge_in_range() {
    let out = stdout_of(kb().args(["fudge", "4", "--seed", "2"]));
    let value: i64 = out.trim().parse().unwrap();
    assert!((-4..=4).contains(&value));
}

#[test]
fn d66_digits() {
    let out = stdout_of(kb().args(["d66", "--seed", "4"]));
    let value: u32 = out.trim().parse().unwrap();
    assert!((1..=6).contains(&(value / 10)));
    assert!((1..=6).contains(&(value % 10)));
}

#[test]
fn d666_runs() {
    kb().args(["d666", "--seed", "4"]).assert().success();
}

// ---------------------------------------------------------------------------
// pool
// ---------------------------------------------------------------------------

#[test]
fn pool_lists_rolls_and_outcome() {
    kb().args(["pool", "6", "5", "5", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolls:"))
        .stdout(predicate::str::contains("Outcome:"));
}

#[test]
fn pool_json_keeps_every_die() {
    let out = stdout_of(kb().args(["pool", "6", "5", "5", "--json", "--seed", "11"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rolls = parsed["rolls"].as_array().unwrap();
    assert_eq!(rolls.len(), 5);
    assert!(
        rolls
            .iter()
            .all(|r| (1..=6).contains(&r.as_u64().unwrap()))
    );
}

// ---------------------------------------------------------------------------
// chance, flip
// ---------------------------------------------------------------------------

#[test]
fn chance_certain() {
    kb().args(["chance", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"));
}

#[test]
fn chance_impossible_permille() {
    kb().args(["chance", "0", "--scale", "permille"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 in 1000: no"));
}

#[test]
fn chance_bad_scale() {
    kb().args(["chance", "--scale", "dozen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scale"));
}

#[test]
fn flip_heads_or_tails() {
    kb().args(["flip"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^(heads|tails)\n$").unwrap());
}

// ---------------------------------------------------------------------------
// pick, tables
// ---------------------------------------------------------------------------

#[test]
fn pick_builtin_table() {
    let out = stdout_of(kb().args(["pick", "card", "-n", "3", "--seed", "8"]));
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn pick_unknown_table() {
    kb().args(["pick", "dragon-hoard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table"));
}

#[test]
fn pick_custom_table() {
    let dir = custom_tables();
    let path = dir.path().join("tables.json");
    kb().args(["pick", "tavern_name", "--tables"])
        .arg(&path)
        .assert()
        .success()
        .stdout("The Gilded Goose\n");
}

#[test]
fn pick_missing_table_file() {
    kb().args(["pick", "weather", "--tables", "/no/such/tables.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn tables_lists_builtins() {
    kb().args(["tables"])
        .assert()
        .success()
        .stdout(predicate::str::contains("female-name"))
        .stdout(predicate::str::contains("magic-eight-ball"));
}

#[test]
fn tables_lists_custom() {
    let dir = custom_tables();
    kb().arg("tables")
        .arg("--tables")
        .arg(dir.path().join("tables.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("weather"))
        .stdout(predicate::str::contains("custom"));
}
