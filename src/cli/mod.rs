//! Command-line interface wiring for the `cardcheck` binary.
//!
//! The binary reads one candidate card number per line and prints one
//! analysis line per input line.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

pub mod common;
pub mod utils;

use common::OutputFormatArg;
use utils::{InputError, open_input};

/// Parsed CLI entrypoint for the `cardcheck` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cardcheck",
    version,
    about = "Identify credit card issuers and check card numbers with the Luhn algorithm"
)]
pub struct Cli {
    /// File with one card number per line (`-` for stdin). Nothing is done without it.
    pub file: Option<PathBuf>,

    /// Output format for each analysed line.
    #[arg(long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Exit with an error status when the file cannot be opened or read.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the CLI, writing results to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute the CLI against an arbitrary writer.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let Some(path) = cli.file.as_deref() else {
        debug!("no input file given; nothing to do");
        return Ok(());
    };

    let reader = match open_input(path) {
        Ok(reader) => reader,
        Err(err) => return report_failure(err, cli.strict, out),
    };

    let mut count = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                let err = InputError::Scan {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                };
                return report_failure(err, cli.strict, out);
            }
        };
        let result = cardcheck::inspect(&line);
        writeln!(out, "{}", cli.format.render(&result)?)?;
        count += 1;
    }
    info!("analysed {} lines from {}", count, path.display());
    Ok(())
}

fn report_failure<W: Write>(err: InputError, strict: bool, out: &mut W) -> Result<()> {
    if strict {
        return Err(err.into());
    }
    let message = err.user_message();
    warn!("{:#}", anyhow::Error::from(err));
    writeln!(out, "{}", message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "4111111111111111
4111111111111
4012888888881881
378282246310005
6011111111111117
5105105105105100
5105 1051 0510 5106
9111111111111111
";

    fn cli_for(file: Option<PathBuf>) -> Cli {
        Cli {
            file,
            format: OutputFormatArg::Text,
            strict: false,
        }
    }

    fn run_to_string(cli: &Cli) -> Result<String> {
        let mut out = Vec::new();
        run_with(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn sample_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn verify_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_arguments() {
        let cli = Cli::try_parse_from(["cardcheck", "cards.txt", "--format", "json", "--strict"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("cards.txt")));
        assert_eq!(cli.format, OutputFormatArg::Json);
        assert!(cli.strict);

        let cli = Cli::try_parse_from(["cardcheck"]).unwrap();
        assert_eq!(cli.file, None);
        assert_eq!(cli.format, OutputFormatArg::Text);
        assert!(!cli.strict);

        assert!(Cli::try_parse_from(["cardcheck", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn no_file_is_a_silent_no_op() {
        assert_eq!(run_to_string(&cli_for(None)).unwrap(), "");
    }

    #[test]
    fn prints_one_aligned_line_per_input_line() {
        let file = sample_file(SAMPLE.as_bytes());
        let output = run_to_string(&cli_for(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(
            output,
            "VISA: 4111111111111111       (valid)
VISA: 4111111111111          (invalid)
VISA: 4012888888881881       (valid)
AMEX: 378282246310005        (valid)
Discover: 6011111111111117   (valid)
MasterCard: 5105105105105100 (valid)
MasterCard: 5105105105105106 (invalid)
Unknown: 9111111111111111    (invalid)
"
        );
    }

    #[test]
    fn blank_lines_are_reported_too() {
        let file = sample_file(b"4111111111111111\n\n");
        let output = run_to_string(&cli_for(Some(file.path().to_path_buf()))).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format!("Unknown: {}(invalid)", " ".repeat(20)));
    }

    #[test]
    fn missing_file_prints_message_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(Some(dir.path().join("nope.txt")));
        assert_eq!(
            run_to_string(&cli).unwrap(),
            "No such file or directory, I'm afraid.\n"
        );
    }

    #[test]
    fn missing_file_fails_in_strict_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(Some(dir.path().join("nope.txt")));
        cli.strict = true;
        let err = run_to_string(&cli).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }

    #[test]
    fn scan_error_keeps_earlier_lines() {
        let file = sample_file(b"4111111111111111\n\xff\xfe\n378282246310005\n");
        let output = run_to_string(&cli_for(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(
            output,
            "VISA: 4111111111111111       (valid)\nError in scanning.\n"
        );
    }

    #[test]
    fn scan_error_fails_in_strict_mode() {
        let file = sample_file(b"\xff\n");
        let mut cli = cli_for(Some(file.path().to_path_buf()));
        cli.strict = true;
        let err = run_to_string(&cli).unwrap_err();
        assert!(err.to_string().starts_with("failed to read line 1"));
    }

    #[test]
    fn json_format_emits_one_object_per_line() {
        let file = sample_file(b"6011111111111117\nabc\n");
        let mut cli = cli_for(Some(file.path().to_path_buf()));
        cli.format = OutputFormatArg::Json;
        let output = run_to_string(&cli).unwrap();
        let values: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            values,
            vec![
                serde_json::json!({"card_type": "discover", "number": "6011111111111117", "validity": "valid"}),
                serde_json::json!({"card_type": "unknown", "number": "abc", "validity": "invalid"}),
            ]
        );
    }
}
