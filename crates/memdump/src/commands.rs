use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{info, warn};

use memdump_core::config::MemdumpConfig;
use memdump_core::events;
use memdump_core::process::{ProcessInspector, SystemInspector};
use memdump_core::workflow::{self, DumpRequest};
use memdump_core::MemdumpError;

use crate::table::TableFormatter;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list(sub_matches),
        Some(("dump", sub_matches)) => handle_dump(sub_matches),
        Some(("config-show", _)) => handle_config_show(),
        _ => Err("Unknown command. Use --help to see available commands.".into()),
    }
}

fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let inspector = SystemInspector::new();
    let mut processes = inspector.list_session_processes().map_err(|e| {
        events::log_app_error(&e);
        e
    })?;

    processes.sort_by_key(|p| p.pid);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&processes)?);
        return Ok(());
    }

    if processes.is_empty() {
        println!("No processes visible in the current session.");
        return Ok(());
    }

    let formatter = TableFormatter::new(&processes);
    formatter.print_table(&processes);
    println!("{} processes", processes.len());

    Ok(())
}

fn handle_dump(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let pid = *matches
        .get_one::<u32>("pid")
        .ok_or("Missing required argument: pid")?;

    let config = MemdumpConfig::load_hierarchy()?;

    let inspector = SystemInspector::new();
    let process = inspector.resolve(pid).map_err(|e| {
        events::log_app_error(&e);
        e
    })?;

    events::log_dump_requested(pid, &process.name);

    let destination_dir = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output.directory());

    println!(
        "Dumping {} (pid {}, {})",
        process.name, process.pid, process.arch
    );

    let handle = workflow::start_dump(
        DumpRequest {
            process,
            destination_dir,
        },
        &config,
    );

    // The stream ends when the workflow reaches its terminal outcome
    for event in handle.events().iter() {
        println!("  {}", event.stage);
    }

    match handle.wait() {
        Ok(success) => {
            println!("Process dumped to {}", success.final_path.display());
            Ok(())
        }
        Err(e) => {
            warn!(
                event = "cli.dump_failed",
                pid = pid,
                code = e.error_code(),
                error = %e
            );
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}

fn handle_config_show() -> Result<(), Box<dyn std::error::Error>> {
    let config = MemdumpConfig::load_hierarchy()?;

    info!(event = "cli.config_show");
    print!("{}", toml::to_string_pretty(&config.resolved())?);

    Ok(())
}
