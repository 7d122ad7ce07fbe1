use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_aurora")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "aurora.exe"
            } else {
                "aurora"
            });
            p
        })
}

#[test]
fn cli_themes_prints_registry_json() {
    let out = std::process::Command::new(exe())
        .arg("themes")
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let themes = v["themes"].as_array().unwrap();
    assert_eq!(themes.len(), 7);
    assert!(themes.iter().any(|t| t["id"] == "neon_dark"
        && t["aliases"].as_array().unwrap().iter().any(|a| a == "normal")));
}

#[test]
fn cli_frame_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("frame.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let out = std::process::Command::new(exe())
        .args([
            "frame", "--width", "96", "--height", "64", "--theme", "warning", "--frames", "5",
            "--seed", "3", "--click", "40,30", "--dump-state", "--out",
        ])
        .arg(out_arg.as_str())
        .output()
        .unwrap();

    assert!(out.status.success());
    let img = image::open(&out_path).unwrap();
    assert_eq!((img.width(), img.height()), (96, 64));

    let state: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(state["current_theme"], "sunset");
    assert_eq!(state["shockwaves"].as_array().unwrap().len(), 1);
}

#[test]
fn cli_sequence_writes_every_kth_frame() {
    let dir = PathBuf::from("target").join("cli_smoke").join("sequence");
    let _ = std::fs::remove_dir_all(&dir);

    let dir_arg = dir.to_string_lossy().to_string();
    let status = std::process::Command::new(exe())
        .args([
            "sequence", "--width", "48", "--height", "32", "--frames", "6", "--every", "2",
            "--seed", "1", "--switch", "3:critical", "--out-dir",
        ])
        .arg(dir_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    for i in [0, 2, 4] {
        assert!(dir.join(format!("frame_{i:05}.png")).exists());
    }
    assert!(!dir.join("frame_00001.png").exists());
}

#[test]
fn cli_rejects_unknown_theme() {
    let status = std::process::Command::new(exe())
        .args(["frame", "--theme", "plaid", "--frames", "1", "--out"])
        .arg(PathBuf::from("target").join("cli_smoke").join("never.png"))
        .status()
        .unwrap();
    assert!(!status.success());
}
