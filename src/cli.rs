use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renamepipe")]
#[command(author, version, about, long_about = None)]
#[command(about = "Preview batch file renames through an ordered pipeline of operations")]
pub struct Args {
    /// Directory whose files are queued for renaming
    pub target_dir: PathBuf,

    /// Preset to apply: a JSON file, or a name looked up in the preset directory
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<PathBuf>,

    /// Append an operation, optionally with a JSON config patch (KIND or KIND=JSON)
    #[arg(short = 'o', long = "op", value_name = "KIND[=JSON]")]
    pub operations: Vec<String>,

    /// Print tab-separated rows instead of the formatted preview
    #[arg(short, long)]
    pub simple: bool,

    /// Exit with an error when any proposed name is invalid
    #[arg(long)]
    pub strict: bool,

    /// Also queue hidden files
    #[arg(long)]
    pub include_hidden: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
