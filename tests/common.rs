#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtd() -> Command {
    cargo_bin_cmd!("rtimediff")
}

/// Create a unique, empty working directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimediff", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a config file whose exports land in `dir`; returns the config path
pub fn setup_test_config(dir: &PathBuf) -> String {
    let conf = dir.join("rtimediff.conf");
    let yaml = format!(
        "default_start: 06:15 AM\nreport_title: Time Difference Report\nexport_dir: {}\nfile_stem: time_difference_report\ndefault_format: pdf\nseparator_char: '-'\n",
        dir.to_string_lossy()
    );
    fs::write(&conf, yaml).expect("write test config");
    conf.to_string_lossy().to_string()
}

/// Temporary output file path inside `dir`, removed if already present
pub fn temp_out(dir: &PathBuf, name: &str, ext: &str) -> String {
    let p = dir.join(format!("{}.{}", name, ext));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}
