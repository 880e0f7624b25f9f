mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use seqid::IdSequence;
use std::io::{self, BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;

    let stdout = io::stdout().lock();
    let written = run(&config, BufWriter::new(stdout))?;
    tracing::debug!(written, "sequence written");
    Ok(())
}

/// Writes the configured sequence to `out`, one identifier per line, and
/// returns how many were written.
fn run(config: &Config, mut out: impl Write) -> anyhow::Result<u64> {
    let ids = IdSequence::new(config.start.clone(), config.alphabet.clone())?;
    log_startup_info(config, &ids);

    let limit = config.take.unwrap_or(usize::MAX);
    let mut written = 0_u64;
    for id in ids.take(limit) {
        match writeln!(out, "{id}") {
            Ok(()) => written += 1,
            // The reader went away, e.g. `seqid | head`.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(written),
            Err(e) => return Err(e.into()),
        }
    }

    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(written),
    }
}

fn log_startup_info(config: &Config, ids: &IdSequence) {
    tracing::info!("{}", startup_message(config, ids));
}

fn startup_message(config: &Config, ids: &IdSequence) -> String {
    match ids.remaining() {
        Some(remaining) => format!(
            "Printing {} of {} identifiers {} over {:?}",
            config.take.map_or(remaining, |n| remaining.min(n as u128)),
            remaining,
            config.start,
            config.alphabet.as_str(),
        ),
        None => format!(
            "Printing identifiers {} over {:?}",
            config.start,
            config.alphabet.as_str(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqid::{Alphabet, DEFAULT_ALPHABET, Error, Start};

    fn config(start: Start, alphabet: &str, take: Option<usize>) -> Config {
        Config {
            start,
            alphabet: Alphabet::new(alphabet).unwrap(),
            take,
        }
    }

    fn config_after(id: &str, take: Option<usize>) -> Config {
        config(Start::After(id.into()), DEFAULT_ALPHABET, take)
    }

    fn output(config: &Config) -> (u64, String) {
        let mut buf = Vec::new();
        let written = run(config, &mut buf).unwrap();
        (written, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn writes_whole_sequence() {
        let (written, out) = output(&config(Start::Length(2), "0S", None));
        assert_eq!(written, 4);
        assert_eq!(out, "00\n0S\nS0\nSS\n");
    }

    #[test]
    fn resumes_after_start() {
        let config = config(Start::After("YZZZ".into()), DEFAULT_ALPHABET, Some(2));
        let (written, out) = output(&config);
        assert_eq!(written, 2);
        assert_eq!(out, "Z000\nZ001\n");
    }

    #[test]
    fn take_larger_than_sequence_stops_at_end() {
        let config = config(Start::After("ZY".into()), DEFAULT_ALPHABET, Some(10));
        let (written, out) = output(&config);
        assert_eq!(written, 1);
        assert_eq!(out, "ZZ\n");
    }

    #[test]
    fn startup_message_describes_the_sequence() {
        let config = config(Start::Length(2), "0S", None);
        let ids = IdSequence::new(config.start.clone(), config.alphabet.clone()).unwrap();
        assert_eq!(
            startup_message(&config, &ids),
            r#"Printing 4 of 4 identifiers of length 2 over "0S""#
        );

        let config = config_after("ZX", Some(1));
        let ids = IdSequence::new(config.start.clone(), config.alphabet.clone()).unwrap();
        assert_eq!(
            startup_message(&config, &ids),
            r#"Printing 1 of 2 identifiers after "ZX" over "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ""#
        );
    }

    #[test]
    fn unknown_symbol_surfaces_as_error() {
        let config = config(Start::After("ASD".into()), "AsDFG1234", None);
        let err = run(&config, Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownSymbol { symbol: 'S', .. })
        ));
    }

    #[test]
    fn zero_length_surfaces_as_error() {
        let err = run(&config(Start::Length(0), "01", None), Vec::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::InvalidLength));
    }
}
