use clap::Parser;
use provision_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error}");
            for failure in error.failures() {
                eprintln!("  - {failure}");
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Provision Processor - Storage Provisioning Report Converter");
    println!("===========================================================");
    println!();
    println!("Convert the fixed-format output of the storage-provisioning collection");
    println!("script into structured metric records for downstream analysis.");
    println!();
    println!("USAGE:");
    println!("    provision-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a captured report into metric records (main command)");
    println!("    inspect     Inspect a captured report without emitting records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a captured report to JSON on stdout:");
    println!("    provision-processor convert --input report.txt");
    println!();
    println!("    # Convert from stdin with a pinned reference instant:");
    println!("    provision-processor convert --reference-time 2023-10-23T15:30:00Z \\");
    println!("                                --pretty --output records.json < report.txt");
    println!();
    println!("    # Pre-flight check of collector output:");
    println!("    provision-processor inspect --input report.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    provision-processor <COMMAND> --help");
}
