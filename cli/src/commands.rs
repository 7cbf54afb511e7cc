pub mod bake;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bake")]
#[command(version, about = "Bakes grandma's apple pie.")]
pub struct CommandLine {
    /// Accepted and ignored; the bake takes no input.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
