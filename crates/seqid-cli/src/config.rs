use anyhow::{Context, bail};
use clap::Parser;
use seqid::{Alphabet, DEFAULT_ALPHABET, DEFAULT_LENGTH, Start};

/// Runtime configuration for the `seqid` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is loaded first), falling back to the library defaults: five
/// symbols over `0-9A-Z`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "seqid",
    version,
    about = "Print every fixed-length identifier over an alphabet, in order"
)]
pub struct CliArgs {
    /// Identifier to resume after. It is not printed itself, and it takes
    /// precedence over `--length`.
    ///
    /// Environment variable: `SEQID_START`
    #[arg(long, env = "SEQID_START")]
    pub start: Option<String>,

    /// Length of the identifiers when no start is given. The sequence begins
    /// at the zero symbol repeated this many times.
    ///
    /// Environment variable: `SEQID_LENGTH`
    #[arg(short, long, env = "SEQID_LENGTH", default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Ordered, distinct symbols to spell identifiers with. The first symbol
    /// is zero, the last is the maximum digit.
    ///
    /// Environment variable: `SEQID_ALPHABET`
    #[arg(short, long, env = "SEQID_ALPHABET", default_value_t = String::from(DEFAULT_ALPHABET))]
    pub alphabet: String,

    /// Stop after this many identifiers. Omit to print the whole sequence.
    ///
    /// Environment variable: `SEQID_TAKE`
    #[arg(short, long, env = "SEQID_TAKE")]
    pub take: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start: Start,
    pub alphabet: Alphabet,
    pub take: Option<usize>,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let alphabet = Alphabet::new(&args.alphabet)
            .with_context(|| format!("invalid SEQID_ALPHABET {:?}", args.alphabet))?;

        if args.take == Some(0) {
            bail!("SEQID_TAKE must be greater than 0");
        }

        let start = match args.start {
            Some(id) => Start::After(id),
            None => Start::Length(args.length),
        };

        Ok(Self {
            start,
            alphabet,
            take: args.take,
        })
    }
}
