//! End-to-end: write input files into a temp dir, run the binary, and
//! inspect the SVG it produces.

use std::fs;
use std::process::Command;

fn tracklane() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tracklane"));
    cmd.env_remove("TRACKLANE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_every_panel_kind() {
    let dir = tempfile::tempdir().unwrap();
    let gantt = dir.path().join("plan.json");
    let line = dir.path().join("prices.csv");
    let area = dir.path().join("mix.csv");
    let events = dir.path().join("milestones.csv");
    let out = dir.path().join("figure.svg");

    fs::write(
        &gantt,
        r#"{ "type": "gantt", "title": "Plan", "data": [
            { "label": "design", "start": 0, "end": 4 },
            { "label": "build", "start": 2, "end": 8, "extendTo": 9 },
            { "label": "review", "start": 8, "end": 10, "column": 0 }
        ] }"#,
    )
    .unwrap();
    fs::write(&line, "date,a,b\n0,1,10\n5,2,20\n10,3,15\n").unwrap();
    fs::write(&area, "0,1,1\n5,2,1\n10,1,3\n").unwrap();
    fs::write(&events, "1,kickoff\n9,launch & party\n").unwrap();

    let status = tracklane()
        .arg("-g")
        .arg(&gantt)
        .arg("-l")
        .arg(&line)
        .arg("-a")
        .arg(&area)
        .arg("-e")
        .arg(&events)
        .arg("-o")
        .arg(&out)
        .args(["--width", "640", "--height", "480"])
        .status()
        .unwrap();
    assert!(status.success());

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 640 480""#));
    for group in ["gantt", "line", "area", "events"] {
        assert!(svg.contains(&format!(r#"<g id="{group}">"#)), "missing {group}");
    }
    assert!(svg.contains(">Plan</text>"));
    assert!(svg.contains(">milestones</text>"));
    assert!(svg.contains("launch &amp; party"));
}

#[test]
fn config_file_and_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    let gantt = dir.path().join("g.csv");
    let config = dir.path().join("render.json");
    let out = dir.path().join("out.svg");
    fs::write(&gantt, "a,0,1\nb,0.5,2\n").unwrap();
    fs::write(&config, r#"{ "width": 300, "height": 200 }"#).unwrap();

    let status = tracklane()
        .arg("-g")
        .arg(&gantt)
        .arg("--config")
        .arg(&config)
        .args(["--height", "150", "--dark"])
        .arg("-o")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 300 150""#));
    assert!(svg.contains("#181818"));
}

#[test]
fn no_inputs_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = tracklane()
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one input file"), "stderr: {stderr}");
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn missing_field_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let gantt = dir.path().join("broken.json");
    fs::write(
        &gantt,
        r#"{ "type": "gantt", "data": [ { "label": "a", "start": 0 } ] }"#,
    )
    .unwrap();

    let output = tracklane()
        .arg("-g")
        .arg(&gantt)
        .arg("-o")
        .arg(dir.path().join("out.svg"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.json"), "stderr: {stderr}");
    assert!(stderr.contains("end"), "stderr: {stderr}");
}
