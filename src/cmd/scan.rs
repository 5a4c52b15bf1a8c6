/*!
`scan.rs`

Implements the `scan` subcommand: an nmap ping scan over `hostname/range`.
The range defaults to 0 (single host). nmap must be on PATH; its absence
surfaces as the runner's own error text, reported best-effort.
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::log_debug;
use crate::proc::CommandSpec;

/// CLI arguments for `bro scan <hostname> [range]`
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Host or network to scan
    #[arg(value_name = "HOSTNAME")]
    pub hostname: String,

    /// CIDR prefix length appended as hostname/range
    #[arg(value_name = "RANGE", default_value_t = 0)]
    pub range: u8,
}

/// Build the nmap invocation: `nmap -n -sP <hostname>/<range>`.
fn scan_command(hostname: &str, range: u8) -> CommandSpec {
    CommandSpec::new(
        "nmap",
        vec![
            "-n".to_string(),
            "-sP".to_string(),
            format!("{hostname}/{range}"),
        ],
    )
}

/// Entry point for the scan subcommand.
pub fn execute_scan(args: ScanArgs) -> Result<()> {
    let spec = scan_command(&args.hostname, args.range);
    match spec.run() {
        Ok(status) => log_debug!("nmap exited with {status}"),
        Err(e) => {
            let style = StyleOptions::detect();
            println!("{}", color(Role::Error, e.to_string(), &style));
        }
    }
    Ok(())
}
