//! `hello` - greeting plus a cosmetic progress bar. No exit-code contract
//! beyond 0 on success.

use anyhow::Result;
use std::time::Duration;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::utils::ProgressBar;

const TICKS: u64 = 50;
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn execute_hello() -> Result<()> {
    let style = StyleOptions::detect();
    println!(
        "{}",
        color(
            Role::Greeting,
            "Hello, Bro. Good to see you today. Need some help ? Just call help.",
            &style
        )
    );

    let mut bar = ProgressBar::new(TICKS);
    while !bar.is_done() {
        bar.inc();
        std::thread::sleep(TICK_INTERVAL);
    }
    Ok(())
}
