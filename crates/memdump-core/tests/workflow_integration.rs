//! End-to-end workflow tests against stub external tools.
//!
//! The capture tool and compressor are tiny shell scripts speaking the real
//! tools' textual protocol, so the whole chain runs: SystemRunner spawns
//! them, the file-backed invocation log records them, and the workflow
//! relocates the finished archive.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use memdump_core::config::{MemdumpConfig, ToolsConfig};
use memdump_core::process::{ProcessArch, ProcessRef};
use memdump_core::workflow::{self, DumpRequest, DumpStage};

struct ToolFixture {
    _dir: tempfile::TempDir,
    destination: PathBuf,
    log_file: PathBuf,
    error_log_file: PathBuf,
    config: MemdumpConfig,
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Stub tool layout: both capture variants plus a compressor.
///
/// `capture_body` and `compress_body` are shell bodies; the capture tool is
/// invoked as `<tool> <pid> <output>`, the compressor as
/// `<tool> a -bd -mx5 -tzip <archive> <input>`.
fn fixture(capture_body: &str, compress_body: &str) -> ToolFixture {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("dest");
    fs::create_dir_all(&destination).unwrap();

    let tools_root = dir.path().join("dumptools");
    for arch in ["x86", "x64"] {
        fs::create_dir_all(tools_root.join(arch)).unwrap();
        write_script(
            &tools_root.join(arch).join("userdump.exe"),
            &format!("#!/bin/sh\n{}\n", capture_body),
        );
    }

    let compressor = dir.path().join("7za");
    write_script(&compressor, &format!("#!/bin/sh\n{}\n", compress_body));

    let log_file = dir.path().join("log.txt");
    let error_log_file = dir.path().join("error.txt");

    let tools: ToolsConfig = toml::from_str(&format!(
        "dump_tool_dir = \"{}\"\ncompressor = \"{}\"",
        tools_root.display(),
        compressor.display()
    ))
    .unwrap();

    let config: MemdumpConfig = toml::from_str(&format!(
        "[logging]\nlog_file = \"{}\"\nerror_log_file = \"{}\"\n",
        log_file.display(),
        error_log_file.display()
    ))
    .unwrap();
    let config = MemdumpConfig { tools, ..config };

    ToolFixture {
        _dir: dir,
        destination,
        log_file,
        error_log_file,
        config,
    }
}

fn target(name: &str) -> ProcessRef {
    ProcessRef {
        pid: 4321,
        name: name.to_string(),
        arch: ProcessArch::X64,
    }
}

#[test]
fn test_full_dump_deposits_named_archive() {
    let fx = fixture(
        r#"echo "dump-bytes" > "$2"
echo "The process was dumped successfully.""#,
        r#"cp "$6" "$5"
echo "Everything is Ok""#,
    );

    let process_name = format!("stubproc{}", std::process::id());
    let handle = workflow::start_dump(
        DumpRequest {
            process: target(&process_name),
            destination_dir: fx.destination.clone(),
        },
        &fx.config,
    );

    let stages: Vec<DumpStage> = handle.events().iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![
            DumpStage::Capturing,
            DumpStage::Compressing,
            DumpStage::Relocating,
            DumpStage::Done,
        ]
    );

    let success = handle.wait().expect("stubbed dump should succeed");

    // Exactly one archive, named {process}_{user}_{timestamp}.zip
    let entries: Vec<_> = fs::read_dir(&fx.destination)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries, vec![success.final_path.clone()]);

    let file_name = success.final_path.file_name().unwrap().to_string_lossy();
    assert!(file_name.starts_with(&format!("{}_", process_name)));
    assert!(file_name.ends_with(".zip"));
    // Timestamp tail: yyyy.MM.dd_HH.mm.ss
    let stem = file_name.trim_end_matches(".zip");
    let timestamp = stem.rsplit('_').take(2).collect::<Vec<_>>();
    assert_eq!(timestamp.len(), 2, "timestamp missing in '{}'", file_name);
    assert_eq!(timestamp[0].len(), "HH.mm.ss".len());
    assert_eq!(timestamp[1].len(), "yyyy.MM.dd".len());

    // No residual temp artifacts
    let base = stem.to_string();
    let temp = std::env::temp_dir();
    assert!(!temp.join(format!("{}.dmp", base)).exists());
    assert!(!temp.join(format!("{}.zip", base)).exists());

    // Both invocations were recorded in the log artifact
    let log = fs::read_to_string(&fx.log_file).unwrap();
    assert_eq!(log.matches("RunCommand:").count(), 2);
    assert!(log.contains("The process was dumped successfully."));
    assert!(log.contains("Everything is Ok"));
}

#[test]
fn test_capture_failure_is_terminal_and_leaves_no_temp_files() {
    let fx = fixture(
        // Tool runs but never emits the success phrase and writes nothing
        r#"echo "Error: access denied"
echo "detail on stderr" >&2"#,
        r#"cp "$6" "$5"
echo "Everything is Ok""#,
    );

    let process_name = format!("failproc{}", std::process::id());
    let handle = workflow::start_dump(
        DumpRequest {
            process: target(&process_name),
            destination_dir: fx.destination.clone(),
        },
        &fx.config,
    );

    let stages: Vec<DumpStage> = handle.events().iter().map(|e| e.stage).collect();
    assert_eq!(stages, vec![DumpStage::Capturing]);

    let result = handle.wait();
    assert!(result.is_err());

    // Nothing deposited
    assert_eq!(fs::read_dir(&fx.destination).unwrap().count(), 0);

    // Captured stderr landed in the error log artifact
    let errors = fs::read_to_string(&fx.error_log_file).unwrap();
    assert!(errors.contains("detail on stderr"));
}

#[test]
fn test_compressor_lying_about_success_is_terminal() {
    let fx = fixture(
        r#"echo "dump-bytes" > "$2"
echo "The process was dumped successfully.""#,
        // Claims success but produces no archive
        r#"echo "Everything is Ok""#,
    );

    let handle = workflow::start_dump(
        DumpRequest {
            process: target(&format!("liarproc{}", std::process::id())),
            destination_dir: fx.destination.clone(),
        },
        &fx.config,
    );

    let stages: Vec<DumpStage> = handle.events().iter().map(|e| e.stage).collect();
    assert_eq!(stages, vec![DumpStage::Capturing, DumpStage::Compressing]);

    let result = handle.wait();
    assert!(result.is_err());
    assert_eq!(fs::read_dir(&fx.destination).unwrap().count(), 0);
}
