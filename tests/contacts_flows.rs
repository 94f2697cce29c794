mod common;

use common::TestEnv;
use predicates::str::contains;
use serde_json::json;
use std::fs;

#[test]
fn add_search_update_delete_flow() {
    let env = TestEnv::new();

    let ann = env.add("Ann", "123");
    assert_eq!(ann["id"], 1);
    assert_eq!(ann["name"], "Ann");
    env.add("Bob", "555-0100");

    let hits = env.run_json(&["search", "an"]);
    assert_eq!(hits["ok"], true);
    let names: Vec<_> = hits["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Ann"]);
    assert_eq!(env.run_json(&["search", "xyz"])["data"], json!([]));
    assert_eq!(env.run_json(&["search", "0100"])["data"][0]["name"], "Bob");

    let updated = env.run_json(&["update", "1", "--email", " ann@example.com "]);
    assert_eq!(updated["data"]["phone"], "123");
    assert_eq!(updated["data"]["email"], "ann@example.com");

    let removed = env.run_json(&["delete", "1", "--yes"]);
    assert_eq!(removed["data"]["name"], "Ann");

    assert_eq!(
        env.file_json(),
        json!([{"name": "Bob", "phone": "555-0100", "email": "", "address": ""}])
    );
    // Ids are reassigned in file order on the next run.
    assert_eq!(env.run_json(&["list"])["data"][0]["id"], 1);
}

#[test]
fn text_list_shows_name_dash_phone_rows() {
    let env = TestEnv::new();
    env.add("Ann", "123");
    env.add("Bob", "456");
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("1\tAnn - 123\n2\tBob - 456\n");
}

#[test]
fn missing_required_field_is_rejected_without_touching_file() {
    let env = TestEnv::new();
    env.add("Ann", "123");
    let before = fs::read_to_string(&env.contacts).unwrap();

    env.cmd()
        .args(["add", "--name", "", "--phone", "123"])
        .assert()
        .failure()
        .stderr(contains("Name and Phone are required."));
    env.cmd()
        .args(["update", "1", "--phone", "   "])
        .assert()
        .failure()
        .stderr(contains("Name and Phone are required."));

    assert_eq!(fs::read_to_string(&env.contacts).unwrap(), before);
    assert_eq!(env.run_json(&["list"])["data"].as_array().unwrap().len(), 1);
}

#[test]
fn delete_asks_for_confirmation() {
    let env = TestEnv::new();
    env.add("Ann", "123");

    env.cmd()
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("delete cancelled"))
        .stderr(contains("Are you sure you want to delete this contact?"));
    assert_eq!(env.file_json().as_array().unwrap().len(), 1);

    env.cmd()
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted 1\tAnn - 123"));
    assert_eq!(env.file_json(), json!([]));
}

#[test]
fn unknown_id_is_an_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", "7"])
        .assert()
        .failure()
        .stderr(contains("contact not found: 7"));
    env.cmd()
        .args(["delete", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("contact not found: 7"));
}

#[test]
fn malformed_file_fails_fast_and_is_left_alone() {
    let env = TestEnv::new();
    fs::write(&env.contacts, "{ not json").unwrap();
    env.cmd()
        .args(["add", "--name", "Ann", "--phone", "1"])
        .assert()
        .failure()
        .stderr(contains("malformed contacts file"));
    assert_eq!(fs::read_to_string(&env.contacts).unwrap(), "{ not json");
}

#[test]
fn file_is_pretty_printed_with_four_space_indent() {
    let env = TestEnv::new();
    env.add("Ann", "123");
    let raw = fs::read_to_string(&env.contacts).unwrap();
    assert_eq!(
        raw,
        "[\n    {\n        \"name\": \"Ann\",\n        \"phone\": \"123\",\n        \"email\": \"\",\n        \"address\": \"\"\n    }\n]\n"
    );
}

#[test]
fn default_file_is_contacts_json_in_working_dir() {
    let env = TestEnv::new();
    env.bare_cmd()
        .args(["add", "--name", "Ann", "--phone", "123"])
        .assert()
        .success();
    assert!(env.work.join("contacts.json").exists());
}

#[test]
fn config_file_sets_contacts_path() {
    let env = TestEnv::new();
    let target = env.home.join("people.json");
    env.write_config(&format!(
        "contacts_file = {:?}\nlog_level = \"error\"\n",
        target.to_str().unwrap()
    ));
    env.bare_cmd()
        .args(["add", "--name", "Ann", "--phone", "123"])
        .assert()
        .success();
    assert!(target.exists());
    assert!(!env.work.join("contacts.json").exists());
}

#[test]
fn interactive_session_edits_through_selection() {
    let env = TestEnv::new();
    env.add("Ann", "123");
    env.add("Bob", "456");

    env.cmd()
        .arg("session")
        .write_stdin("filter bob\nselect 1\nedit\n\n\nbob@example.com\n\ndelete\nn\nquit\n")
        .assert()
        .success()
        .stdout(contains("*  1  Bob - 456"))
        .stdout(contains("updated"))
        .stdout(contains("cancelled"));

    let file = env.file_json();
    assert_eq!(file[1]["email"], "bob@example.com");
    assert_eq!(file.as_array().unwrap().len(), 2);
}
