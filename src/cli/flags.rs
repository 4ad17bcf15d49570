use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "keygen",
    version,
    about = "Pseudorandom password generator. Run without arguments for the interactive mode."
)]
pub struct CliFlags {
    #[arg(
        short,
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Characters per key (required unless --saved provides one)"
    )]
    pub length: Option<i64>,

    #[arg(
        short = 'x',
        long,
        value_name = "CHARS",
        allow_hyphen_values = true,
        help = "Characters that must not appear in the key"
    )]
    pub exclude: Option<String>,

    #[arg(short, long, value_name = "N", help = "How many keys to generate [default: 1]")]
    pub number: Option<usize>,

    #[arg(long, help = "Leave digits out of the pools")]
    pub no_digits: bool,

    #[arg(long, help = "Leave letters out of the pools")]
    pub no_letters: bool,

    #[arg(long, help = "Leave punctuation out of the pools")]
    pub no_symbols: bool,

    #[arg(short = 'b', long = "board", help = "Copy to clipboard instead of printing")]
    pub clipboard: bool,

    #[arg(short, long, help = "Suppress everything except keys and errors")]
    pub quiet: bool,

    #[arg(short, long, help = "Use length, count and blacklist from the settings file")]
    pub saved: bool,

    #[arg(long, help = "Store this run's length, count and blacklist as saved settings")]
    pub save: bool,
}
