/*!
`servers.rs`

Implements the `servers` subcommand: dump the configured alias -> address
registry.

Behavior:
  - Human output: "Server List" box header plus a NAME/ADDRESS table with
    the address column right-aligned.
  - `--json`: `{"status":"ok","count":N,"servers":[{"name":..,"address":..}]}`
    (styling helpers bypassed).
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::format::{Role, StyleOptions, TableOpts, box_header, color, table};
use crate::config::Config;

/// CLI arguments for `bro servers`
#[derive(Args, Debug)]
pub struct ServersArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Entry point for the servers subcommand.
pub fn execute_servers(args: ServersArgs) -> Result<()> {
    let config = Config::load()?;
    print_servers(&config, args.json);
    Ok(())
}

fn print_servers(config: &Config, json: bool) {
    if json {
        let items: Vec<serde_json::Value> = config
            .servers
            .iter()
            .map(|(name, address)| {
                serde_json::json!({
                    "name": name,
                    "address": address,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "count": items.len(),
                "servers": items,
            })
        );
        return;
    }

    let style = StyleOptions::detect();
    println!(
        "{}",
        box_header(
            "Server List",
            Some(format!("{} configured", config.servers.len())),
            &style
        )
    );

    if config.servers.is_empty() {
        println!("{}", color(Role::Dim, "(none)", &style));
        return;
    }

    let rows: Vec<Vec<String>> = config
        .servers
        .iter()
        .map(|(name, address)| vec![name.clone(), address.clone()])
        .collect();
    println!(
        "{}",
        table(
            &["NAME", "ADDRESS"],
            &rows,
            TableOpts {
                right_align: vec![1],
            },
            &style
        )
    );
}
