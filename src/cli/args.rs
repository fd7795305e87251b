use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct ExplorerArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Draw the free-vibration response chart (PNG + legend sidecar).
    Render(ParameterFilePath),
    /// Write the response table as CSV, one column per damping ratio.
    Export(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,
    #[clap(long, short)]
    pub date_time_out: bool,
}
