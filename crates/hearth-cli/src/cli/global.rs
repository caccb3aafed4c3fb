use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags that command handlers read.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}
