// End-to-end tests for `basinreport run` / `basinreport validate`,
// exercising the exit-code contract.

use std::fs;
use std::path::Path;
use std::process::Command;

fn basinreport() -> Command {
    Command::new(env!("CARGO_BIN_EXE_basinreport"))
}

fn write_extracts(input: &Path) {
    fs::create_dir_all(input).unwrap();
    fs::write(
        input.join("gravity_main.csv"),
        "DIAMETER,SUBBASINID,Shape_Length,LIFECYCLESTATUS,OWNEDBY\n\
         10,BR01,100,Active,1\n\
         15,BR01,40,Active,1\n",
    )
    .unwrap();
    fs::write(
        input.join("manhole.csv"),
        "SUBBASINID,LIFECYCLESTATUS,OWNEDBY\nCC03,Active,1\n",
    )
    .unwrap();
    fs::write(
        input.join("pressurized_main.csv"),
        "SUBBASINID,SHAPE_Length,LIFECYCLESTATUS,OWNEDBY\nSR11,250.5,Active,1\n",
    )
    .unwrap();
    fs::write(
        input.join("pump_station.csv"),
        "SUBBASINID,LIFECYCLESTATUS,OWNEDBY\nWC01,Active,1\n",
    )
    .unwrap();
}

#[test]
fn run_with_dir_flags_writes_all_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export");
    let output = dir.path().join("output");
    write_extracts(&input);

    let result = basinreport()
        .args(["run", "--input-dir"])
        .arg(&input)
        .arg("--output-dir")
        .arg(&output)
        .output()
        .expect("basinreport run");

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    for name in [
        "gravity_main.csv",
        "manhole.csv",
        "pressurized_main.csv",
        "pump_station.csv",
    ] {
        let report = fs::read_to_string(output.join(name)).unwrap();
        // Header + the full 72-entry catalog, every run
        assert_eq!(report.lines().count(), 73, "{name}");
    }

    // 15" row double-counts into small and large
    let gm = fs::read_to_string(output.join("gravity_main.csv")).unwrap();
    assert!(gm.contains("\"BR01\",\"140\",\"40\",\"\""), "{gm}");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("gravity_main: 2 row(s), 2 kept"), "{stderr}");
}

#[test]
fn run_warns_about_dropped_subbasins() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export");
    write_extracts(&input);
    fs::write(
        input.join("pump_station.csv"),
        "SUBBASINID,LIFECYCLESTATUS,OWNEDBY\nZZ99,Active,1\n",
    )
    .unwrap();

    let result = basinreport()
        .args(["run", "--input-dir"])
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("output"))
        .output()
        .expect("basinreport run");

    // Dropped ids are a diagnostic, not a failure
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("warning: pump_station: dropped 1 subbasin id(s) not in catalog: ZZ99"),
        "{stderr}"
    );
}

#[test]
fn broken_extract_exits_partial_but_writes_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export");
    let output = dir.path().join("output");
    write_extracts(&input);
    fs::write(input.join("manhole.csv"), "SUBBASINID,LIFECYCLESTATUS\nCC03,Active\n").unwrap();

    let result = basinreport()
        .args(["run", "--input-dir"])
        .arg(&input)
        .arg("--output-dir")
        .arg(&output)
        .output()
        .expect("basinreport run");

    assert_eq!(result.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("manhole: error"), "{stderr}");
    assert!(stderr.contains("missing column 'OWNEDBY'"), "{stderr}");

    assert!(!output.join("manhole.csv").exists());
    assert!(output.join("gravity_main.csv").exists());
}

#[test]
fn run_without_source_args_is_a_usage_error() {
    let result = basinreport().arg("run").output().expect("basinreport run");
    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("--input-dir"), "{stderr}");
}

#[test]
fn unreadable_config_is_a_runtime_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = basinreport()
        .arg("run")
        .arg(dir.path().join("missing.toml"))
        .output()
        .expect("basinreport run");
    assert_eq!(result.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("cannot read"), "{stderr}");
    assert!(stderr.contains("missing.toml"), "{stderr}");
}

#[test]
fn validate_accepts_good_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("report.toml");
    fs::write(&config, "input_dir = \"export\"\noutput_dir = \"output\"\n").unwrap();

    let result = basinreport()
        .arg("validate")
        .arg(&config)
        .output()
        .expect("basinreport validate");
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("valid:"), "{stderr}");
}

#[test]
fn validate_rejects_clobbering_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("report.toml");
    fs::write(&config, "input_dir = \"data\"\noutput_dir = \"data\"\n").unwrap();

    let result = basinreport()
        .arg("validate")
        .arg(&config)
        .output()
        .expect("basinreport validate");
    assert_eq!(result.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("must differ"), "{stderr}");
}
