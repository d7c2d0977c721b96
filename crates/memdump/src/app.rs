use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("memdump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Capture, compress and archive memory snapshots of session processes")
        .long_about("memdump lists the processes visible in your login session, captures a memory snapshot of a selected process with an external dump tool, compresses the snapshot into a zip archive and deposits it under a timestamped name. The capture and compression tools are external executables resolved via the configuration hierarchy.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List processes in the current session")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("dump")
                .about("Dump a process's memory and deposit it as a zip archive")
                .arg(
                    Arg::new("pid")
                        .help("Process id to dump (see 'memdump list')")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(u32))
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Destination directory for the archive (overrides config)")
                )
        )
        .subcommand(
            Command::new("config-show")
                .about("Print the effective merged configuration")
        )
}
