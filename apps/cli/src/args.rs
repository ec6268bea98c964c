//! # Argument Parsing
//!
//! Flag parsing over `std::env::args`. No interactive prompts: every input
//! arrives as a flag, and anything malformed earns the usage text and
//! exit code 1.

use thiserror::Error;
use tipsplit_core::{Granularity, RoundingMode, TipBasis};

/// Usage text printed on `--help` and on any flag error.
pub const USAGE: &str = "\
Usage: tipsplit --subtotal <amount> [options]

Options:
  --subtotal <amount>         Pre-tax subtotal (required), e.g. 113.22 or $1,234.56
  --tax <amount>              Tax amount (default: 0.00)
  --tip <percent>             Tip percentage 0-100 (default: 18)
  --tip-basis <pre|post>      Tip on pre-tax or post-tax amount (default: pre)
  --people <n>                Split equally across n people (default: 1)
  --weights <a,b,c>           Weighted split (overrides --people)
  --round <nearest|up|down>   Rounding mode for equal splits (default: nearest)
  --granularity <0.01|0.05|0.25>
                              Rounding step for equal splits (default: 0.01)
  --strict                    Strict money-string validation
  --output <text|json|csv>    Output format (default: text)
  --help                      Show this help
";

/// A flag-level error: unknown flag, missing value, malformed enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Output format for the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Raw command-line inputs. Money/percent/weight strings stay unparsed here;
/// the parse module turns them into exact values (it needs the strict flag,
/// and its errors map to exit code 2 rather than a usage error).
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub subtotal: String,
    pub tax: String,
    pub tip: String,
    pub tip_basis: TipBasis,
    pub people: Option<String>,
    pub weights: Option<String>,
    pub rounding_mode: RoundingMode,
    pub granularity: Granularity,
    pub strict: bool,
    pub output: OutputFormat,
    pub help: bool,
}

impl CliArgs {
    /// Parses the argument list (without the program name).
    pub fn parse<I>(args: I) -> Result<CliArgs, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs {
            subtotal: String::new(),
            tax: "0".to_string(),
            tip: "18".to_string(),
            tip_basis: TipBasis::default(),
            people: None,
            weights: None,
            rounding_mode: RoundingMode::default(),
            granularity: Granularity::default(),
            strict: false,
            output: OutputFormat::Text,
            help: false,
        };
        let mut saw_subtotal = false;

        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--subtotal" => {
                    parsed.subtotal = take_value(&flag, &mut args)?;
                    saw_subtotal = true;
                }
                "--tax" => parsed.tax = take_value(&flag, &mut args)?,
                "--tip" => parsed.tip = take_value(&flag, &mut args)?,
                "--tip-basis" => {
                    parsed.tip_basis = match take_value(&flag, &mut args)?.as_str() {
                        "pre" => TipBasis::PreTax,
                        "post" => TipBasis::PostTax,
                        other => {
                            return Err(UsageError(format!(
                                "--tip-basis must be 'pre' or 'post', got {other:?}"
                            )))
                        }
                    }
                }
                "--people" => parsed.people = Some(take_value(&flag, &mut args)?),
                "--weights" => parsed.weights = Some(take_value(&flag, &mut args)?),
                "--round" => {
                    parsed.rounding_mode = match take_value(&flag, &mut args)?.as_str() {
                        "nearest" => RoundingMode::Nearest,
                        "up" => RoundingMode::Up,
                        "down" => RoundingMode::Down,
                        other => {
                            return Err(UsageError(format!(
                                "--round must be one of nearest, up, down, got {other:?}"
                            )))
                        }
                    }
                }
                "--granularity" => {
                    parsed.granularity = match take_value(&flag, &mut args)?.as_str() {
                        "0.01" => Granularity::Cent,
                        "0.05" => Granularity::Nickel,
                        "0.25" => Granularity::Quarter,
                        other => {
                            return Err(UsageError(format!(
                                "--granularity must be one of 0.01, 0.05, 0.25, got {other:?}"
                            )))
                        }
                    }
                }
                "--strict" => parsed.strict = true,
                "--output" => {
                    parsed.output = match take_value(&flag, &mut args)?.as_str() {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        "csv" => OutputFormat::Csv,
                        other => {
                            return Err(UsageError(format!(
                                "--output must be one of text, json, csv, got {other:?}"
                            )))
                        }
                    }
                }
                "--help" | "-h" => parsed.help = true,
                other => return Err(UsageError(format!("unknown flag {other:?}"))),
            }
        }

        if parsed.help {
            return Ok(parsed);
        }
        if !saw_subtotal {
            return Err(UsageError("--subtotal is required".to_string()));
        }
        if parsed.people.is_some() && parsed.weights.is_some() {
            return Err(UsageError(
                "--people and --weights are mutually exclusive".to_string(),
            ));
        }

        Ok(parsed)
    }
}

fn take_value<I>(flag: &str, args: &mut I) -> Result<String, UsageError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| UsageError(format!("{flag} requires a value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, UsageError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--subtotal", "113.22"]).unwrap();
        assert_eq!(args.subtotal, "113.22");
        assert_eq!(args.tax, "0");
        assert_eq!(args.tip, "18");
        assert_eq!(args.tip_basis, TipBasis::PreTax);
        assert_eq!(args.rounding_mode, RoundingMode::Nearest);
        assert_eq!(args.granularity, Granularity::Cent);
        assert_eq!(args.output, OutputFormat::Text);
        assert!(!args.strict);
    }

    #[test]
    fn test_full_flag_set() {
        let args = parse(&[
            "--subtotal", "100", "--tax", "8.25", "--tip", "20", "--tip-basis", "post",
            "--people", "4", "--round", "up", "--granularity", "0.25", "--strict",
            "--output", "json",
        ])
        .unwrap();
        assert_eq!(args.tip_basis, TipBasis::PostTax);
        assert_eq!(args.people.as_deref(), Some("4"));
        assert_eq!(args.rounding_mode, RoundingMode::Up);
        assert_eq!(args.granularity, Granularity::Quarter);
        assert_eq!(args.output, OutputFormat::Json);
        assert!(args.strict);
    }

    #[test]
    fn test_usage_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--subtotal"]).is_err());
        assert!(parse(&["--subtotal", "10", "--bogus"]).is_err());
        assert!(parse(&["--subtotal", "10", "--round", "sideways"]).is_err());
        assert!(parse(&["--subtotal", "10", "--people", "2", "--weights", "2,1"]).is_err());
    }

    #[test]
    fn test_help_short_circuits_required_flags() {
        let args = parse(&["--help"]).unwrap();
        assert!(args.help);
    }
}
