use clap::Parser;

/// Loads Florida election results files and normalizes them into uniform result records.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The JSON configuration listing the jurisdictions and the files to load.
    /// See the manual of the fl_results crate for the format.
    #[clap(short, long, value_parser)]
    pub config: String,

    /// (directory, optional) Where the source files are. Defaults to the directory of the
    /// configuration file.
    #[clap(short, long, value_parser)]
    pub data_dir: Option<String>,

    /// (directory, 'stdout' or empty) If a directory, the results of each file are written
    /// there as <file stem>.json. Otherwise they are printed on the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (directory or empty) A directory of reference outputs. If provided, the results of
    /// each file must match <file stem>.json in this directory.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (generated file name or empty) Only load the file with this name.
    #[clap(long, value_parser)]
    pub only: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
