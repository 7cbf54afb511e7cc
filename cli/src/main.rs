mod commands;
mod terminal;

use std::io;

use anyhow::Context;
use bake_common::config::Config;
use commands::{CommandLine, bake};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let _commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    bake::bake(&mut out, &cfg).context("failed to write to standard output")
}
