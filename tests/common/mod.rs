#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REGISTRY_CSV: &str = "\
UNIT_CODE,UNIT_NAME,STATE,REGION
ZION,Zion National Park,UT,IM
ACAD,Acadia National Park,ME,NE
ARCH,Arches National Park,UT,IM
NPSA,National Park of American Samoa,AS,PW
KICA,Kings Canyon National Park,CA,PW
SEQU,Sequoia National Park,CA,PW
GLBA,Glacier Bay National Park,AK,AK
";

pub const COORDS_CSV: &str = "\
type,unit,code,latitude,longitude
National Park,Zion National Park,ZION,37.2982,-113.0263
National Park,Acadia National Park,ACAD,44.35,-68.21
National Park,Arches National Park,ARCH,38.68,-109.57
National Park,Sequoia National Park,SEKI,36.4864,-118.5658
National Park,Kings Canyon National Park,SEKI,36.8879,-118.5551
National Park,National Park of American Samoa,NPSA,-14.25,-170.68
National Monument,Muir Woods National Monument,MUWO,37.89,-122.57
National Monument,Glacier Bay Monument,GLBA,58.5,-137.0
";

/// Canonical ids of the fixture datasets, in name order.
pub const CANONICAL_IDS: [&str; 6] = ["ACAD", "ARCH", "GLBA", "KICA", "SEQU", "ZION"];

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
    pub store: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_datasets(REGISTRY_CSV, COORDS_CSV)
    }

    /// Datasets land at `data/*.csv` under the working directory, which is
    /// where the default configuration looks for them.
    pub fn with_datasets(registry: &str, coords: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        write_datasets(&root.join("data"), registry, coords);

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            store: root.join("store.json"),
            root,
            home,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("parktrack");
        cmd.current_dir(&self.root)
            .env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn stored_ids(&self) -> Vec<String> {
        let raw = fs::read_to_string(&self.store).expect("read store");
        serde_json::from_str(&raw).expect("store is a json array")
    }
}

pub fn write_datasets(dir: &Path, registry: &str, coords: &str) {
    fs::create_dir_all(dir).expect("create data dir");
    fs::write(dir.join("national_parks.csv"), registry).expect("write registry");
    fs::write(dir.join("park_coords.csv"), coords).expect("write coords");
}

pub fn ids(rows: &Value) -> Vec<String> {
    rows.as_array()
        .expect("rows array")
        .iter()
        .map(|r| r["id"].as_str().expect("row id").to_string())
        .collect()
}
