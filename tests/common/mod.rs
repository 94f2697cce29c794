#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub contacts: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        let contacts = work.join("contacts.json");
        Self {
            _tmp: tmp,
            home,
            work,
            contacts,
        }
    }

    /// `rolodex` with an isolated HOME, run from the work dir, no `--file`.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rolodex");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--file").arg(&self.contacts);
        cmd
    }

    pub fn rps(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rps");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn add(&self, name: &str, phone: &str) -> Value {
        let v = self.run_json(&["add", "--name", name, "--phone", phone]);
        v["data"].clone()
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/rolodex");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }

    pub fn file_json(&self) -> Value {
        let raw = fs::read_to_string(&self.contacts).expect("read contacts file");
        serde_json::from_str(&raw).expect("contacts file is json")
    }
}
