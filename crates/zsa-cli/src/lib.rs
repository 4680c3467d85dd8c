//! Command-line front end for the evidence validation engine
//!
//! `validate` checks a claims file against an investigation file and exits
//! 0 when the run passes the trust gate, 1 when it does not. `patterns`
//! lists the active false-positive catalog. Usage, I/O and parse errors
//! exit 2.

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use zsa_evidence::{render_report, EngineConfig, EvidenceValidationEngine, InvestigationData};

/// Exit status of a completed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded; for `validate`, the run is trusted
    Trusted,
    /// The run failed the trust gate
    Untrusted,
}

impl Outcome {
    /// Process exit code
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Trusted => 0,
            Self::Untrusted => 1,
        }
    }
}

/// Exit code for usage, I/O and parse errors
pub const ERROR_EXIT_CODE: u8 = 2;

/// Build the command-line definition
#[must_use]
pub fn build_cli() -> Command {
    let config_arg = Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Engine configuration file (.toml, .yaml or .yml)");

    Command::new("zsa-evidence")
        .version(zsa_evidence::VERSION)
        .about("Cross-check analysis claims against investigation evidence")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .about("Validate claims and apply the trust gate")
                .arg(
                    Arg::new("claims")
                        .long("claims")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON array of claims, or an object with a `claims` array"),
                )
                .arg(
                    Arg::new("investigation")
                        .long("investigation")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Investigation data JSON"),
                )
                .arg(config_arg.clone())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the result as JSON"),
                )
                .arg(
                    Arg::new("min-confidence")
                        .long("min-confidence")
                        .value_parser(value_parser!(f64))
                        .help("Minimum run confidence to trust output"),
                )
                .arg(
                    Arg::new("max-false-positive-risk")
                        .long("max-false-positive-risk")
                        .value_parser(value_parser!(f64))
                        .help("Maximum tolerated fraction of failed checks"),
                ),
        )
        .subcommand(
            Command::new("patterns")
                .about("List the active false-positive catalog")
                .arg(config_arg),
        )
}

/// Run a parsed command, writing its output to `out`
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    match matches.subcommand() {
        Some(("validate", args)) => run_validate(args, out),
        Some(("patterns", args)) => run_patterns(args, out),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn run_validate(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let mut config = load_config(args.get_one::<PathBuf>("config"))?;
    if let Some(min) = args.get_one::<f64>("min-confidence") {
        config.trust.min_confidence = *min;
    }
    if let Some(max) = args.get_one::<f64>("max-false-positive-risk") {
        config.trust.max_false_positive_risk = *max;
    }
    let thresholds = config.trust;
    let engine = EvidenceValidationEngine::with_config(config)?;

    let claims_path = args
        .get_one::<PathBuf>("claims")
        .context("--claims is required")?;
    let investigation_path = args
        .get_one::<PathBuf>("investigation")
        .context("--investigation is required")?;

    let claims = load_claims(claims_path)?;
    let investigation = load_investigation(investigation_path)?;
    tracing::debug!(claims = claims.len(), "Inputs loaded");

    let result = engine.validate_technical_claims(&claims, &investigation);
    let decision = result.trust_decision(&thresholds);

    if args.get_flag("json") {
        let dict = engine.to_dict(&result)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&dict)?)?;
    } else {
        write!(out, "{}", render_report(&result))?;
        writeln!(out)?;
        if decision.trusted {
            writeln!(out, "Verdict: TRUSTED")?;
        } else {
            writeln!(out, "Verdict: UNTRUSTED")?;
            for reason in &decision.reasons {
                writeln!(out, "- {reason}")?;
            }
        }
    }

    if decision.trusted {
        Ok(Outcome::Trusted)
    } else {
        tracing::warn!(reasons = ?decision.reasons, "Validation run is not trusted");
        Ok(Outcome::Untrusted)
    }
}

fn run_patterns(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let config = load_config(args.get_one::<PathBuf>("config"))?;
    let engine = EvidenceValidationEngine::with_config(config)?;

    for (index, pattern) in engine.false_positive_patterns().iter().enumerate() {
        writeln!(out, "{index}\t{}\t{}", pattern.name, pattern.regex.as_str())?;
    }
    Ok(Outcome::Trusted)
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Read claims from a JSON array of strings or an object with a `claims` array
pub fn load_claims(path: &Path) -> Result<Vec<String>> {
    let value = read_json(path)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("claims") {
            Some(Value::Array(items)) => items,
            _ => bail!("{}: expected a `claims` array", path.display()),
        },
        _ => bail!("{}: expected a JSON array of claims", path.display()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(claim) => Ok(claim),
            other => bail!("{}: claim {i} is not a string: {other}", path.display()),
        })
        .collect()
}

/// Read investigation data; any JSON object is accepted
pub fn load_investigation(path: &Path) -> Result<InvestigationData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    InvestigationData::from_json_str(&content).with_context(|| path.display().to_string())
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn claims_accept_array_and_object_forms() {
        let array = json_file(r#"["a", "b"]"#);
        assert_eq!(load_claims(array.path()).unwrap(), vec!["a", "b"]);

        let object = json_file(r#"{"claims": ["c"], "source": "analysis"}"#);
        assert_eq!(load_claims(object.path()).unwrap(), vec!["c"]);
    }

    #[test]
    fn non_string_claim_is_rejected() {
        let file = json_file(r#"["a", 3]"#);
        let err = load_claims(file.path()).unwrap_err();
        assert!(err.to_string().contains("claim 1 is not a string"));
    }

    #[test]
    fn investigation_must_be_object() {
        let file = json_file("[]");
        assert!(load_investigation(file.path()).is_err());
    }

    #[test]
    fn missing_subcommand_is_usage_error() {
        assert!(build_cli().try_get_matches_from(["zsa-evidence"]).is_err());
    }

    #[test]
    fn patterns_lists_builtin_catalog() {
        let matches = build_cli()
            .try_get_matches_from(["zsa-evidence", "patterns"])
            .unwrap();
        let mut out = Vec::new();
        let outcome = run(&matches, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Trusted);
        assert_eq!(text.lines().count(), zsa_evidence::FALSE_POSITIVE_CATALOG.len());
        assert!(text.starts_with("0\tcypress_extension_confusion\t"));
    }

    #[test]
    fn threshold_overrides_are_validated() {
        let claims = json_file(r#"["The build timed out"]"#);
        let investigation = json_file("{}");
        let args: Vec<std::ffi::OsString> = vec![
            "zsa-evidence".into(),
            "validate".into(),
            "--claims".into(),
            claims.path().into(),
            "--investigation".into(),
            investigation.path().into(),
            "--min-confidence".into(),
            "1.5".into(),
        ];
        let matches = build_cli().try_get_matches_from(args).unwrap();
        let mut out = Vec::new();
        assert!(run(&matches, &mut out).is_err());
    }
}
