//! Command handlers
//!
//! Each handler takes parsed arguments, runs a [`TestSession`] and returns
//! the rendered report. Printing is left to the caller.

use crate::commands::{AnalyzeArgs, FillArgs, ValidateArgs, ValidateKind};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use formprobe::validators::{
    password_strength, validate_email, validate_phone, validate_url, PasswordStrength, Validation,
};
use formprobe::{
    detect_purpose, render_detection_report, render_summary, FieldDescriptor, FieldFixture,
    FillOutcome, ProbeConfig, ResultsSummary, TestSession,
};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Rendered command output and whether the command succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Report body
    pub body: String,
    /// False when the command should exit with failure
    pub passed: bool,
    /// Status lines shown on stderr next to the report
    pub warnings: Vec<String>,
}

impl Rendered {
    fn passed(body: String) -> Self {
        Self {
            body,
            passed: true,
            warnings: Vec::new(),
        }
    }

    fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warnings.extend(warning);
        self
    }
}

/// Summarize fields a run left behind; names are listed in verbose mode.
fn unresolved_warning(
    config: &CliConfig,
    what: &str,
    names: &[&str],
    total: usize,
) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    let mut line = format!("{} of {total} fields {what}", names.len());
    if config.verbosity.is_verbose() {
        line.push_str(&format!(": {}", names.join(", ")));
    }
    Some(line)
}

fn load_config(path: Option<&Path>) -> CliResult<ProbeConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading session config");
            ProbeConfig::from_path(path)
                .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
        }
        None => Ok(ProbeConfig::default()),
    }
}

fn load_fixture(path: &Path) -> CliResult<FieldFixture> {
    let fixture = FieldFixture::from_path(path)?;
    info!(
        form_id = %fixture.form_id,
        fields = fixture.fields.len(),
        "loaded fixture"
    );
    Ok(fixture)
}

/// Run the analyze command
pub fn analyze(config: &CliConfig, args: &AnalyzeArgs) -> CliResult<Rendered> {
    let mut probe_config = load_config(args.config.as_deref())?;
    if let Some(top) = args.top {
        probe_config = probe_config.with_top_fields(top);
    }
    let fixture = load_fixture(&args.fixture)?;

    let session = TestSession::new(probe_config);
    let report = session.detection_report(&fixture);
    let unknown: Vec<&str> = fixture
        .fields
        .iter()
        .filter(|field| !detect_purpose(field).is_known())
        .map(FieldDescriptor::display_name)
        .collect();

    let body = match config.output_format {
        OutputFormat::Text => render_detection_report(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    Ok(Rendered::passed(body).with_warning(unresolved_warning(
        config,
        "have no detected purpose",
        &unknown,
        report.total_fields,
    )))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FillReport<'a> {
    outcomes: &'a [FillOutcome],
    summary: &'a ResultsSummary,
}

/// Run the fill command
pub fn fill(config: &CliConfig, args: &FillArgs) -> CliResult<Rendered> {
    if args.runs == 0 {
        return Err(CliError::invalid_argument("--runs must be at least 1"));
    }
    let probe_config = load_config(args.config.as_deref())?;
    let fixture = load_fixture(&args.fixture)?;
    let form_id = args.form.as_deref().unwrap_or(&fixture.form_id);

    let mut session = TestSession::new(probe_config);
    session.visit_tab(form_id);

    let mut outcomes = Vec::with_capacity(args.runs as usize);
    for run in 1..=args.runs {
        let outcome = session.run_fill(form_id, &fixture)?;
        debug!(run, filled = outcome.filled, total = outcome.total, "fill run");
        outcomes.push(outcome);
    }
    let summary = session.summary();
    let unfilled: Vec<&str> = outcomes.last().map_or_else(Vec::new, |outcome| {
        fixture
            .fields
            .iter()
            .enumerate()
            .filter(|(index, _)| outcome.assignments.iter().all(|a| a.index != *index))
            .map(|(_, field)| field.display_name())
            .collect()
    });

    let body = match config.output_format {
        OutputFormat::Text => render_summary(&summary),
        OutputFormat::Json => serde_json::to_string_pretty(&FillReport {
            outcomes: &outcomes,
            summary: &summary,
        })?,
    };
    Ok(Rendered::passed(body).with_warning(unresolved_warning(
        config,
        "received no test value",
        &unfilled,
        fixture.fields.len(),
    )))
}

/// Run the validate command
#[must_use]
pub fn validate(args: &ValidateArgs) -> Rendered {
    let value = args.value.as_str();
    match args.kind {
        ValidateKind::Email => from_validation(&validate_email(value)),
        ValidateKind::Phone => from_validation(&validate_phone(value)),
        ValidateKind::Url => from_validation(&validate_url(value)),
        ValidateKind::Password => {
            let score = password_strength(value);
            let strength = PasswordStrength::from_score(score);
            Rendered {
                body: format!("{} ({score:.1}/100)", strength.message()),
                passed: strength != PasswordStrength::Weak,
                warnings: Vec::new(),
            }
        }
    }
}

fn from_validation(validation: &Validation) -> Rendered {
    Rendered {
        body: validation.message().unwrap_or("No value entered").to_string(),
        passed: validation.is_valid(),
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const SIGNUP: &str = r#"{
        "formId": "signup",
        "fields": [
            { "name": "email", "inputType": "email", "isVisible": true },
            { "name": "firstName", "isVisible": true },
            { "name": "favorite_color" }
        ]
    }"#;

    fn fixture_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn analyze_args(path: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            fixture: path,
            format: crate::commands::FormatArg::Text,
            top: None,
            config: None,
        }
    }

    fn fill_args(path: PathBuf, runs: u32) -> FillArgs {
        FillArgs {
            fixture: path,
            form: None,
            runs,
            format: crate::commands::FormatArg::Text,
            config: None,
        }
    }

    mod analyze_tests {
        use super::*;

        #[test]
        fn test_text_report() {
            let file = fixture_file(SIGNUP);
            let rendered = analyze(&CliConfig::new(), &analyze_args(file.path().into())).unwrap();
            assert!(rendered.passed);
            assert!(rendered.body.contains("Total fields analyzed: 3"));
            assert!(rendered.body.contains("Purpose detected: 2/3"));
        }

        #[test]
        fn test_json_report_honors_top() {
            let file = fixture_file(SIGNUP);
            let mut args = analyze_args(file.path().into());
            args.top = Some(1);
            let config = CliConfig::new().with_output_format(OutputFormat::Json);
            let rendered = analyze(&config, &args).unwrap();
            let json: serde_json::Value = serde_json::from_str(&rendered.body).unwrap();
            assert_eq!(json["totalFields"], 3);
            assert_eq!(json["topFields"].as_array().unwrap().len(), 1);
        }

        #[test]
        fn test_unknown_fields_warned() {
            let file = fixture_file(SIGNUP);
            let args = analyze_args(file.path().into());

            let rendered = analyze(&CliConfig::new(), &args).unwrap();
            assert_eq!(rendered.warnings, vec!["1 of 3 fields have no detected purpose"]);

            let verbose = CliConfig::new().with_verbosity(Verbosity::Verbose);
            let rendered = analyze(&verbose, &args).unwrap();
            assert_eq!(
                rendered.warnings,
                vec!["1 of 3 fields have no detected purpose: favorite_color"]
            );
        }

        #[test]
        fn test_missing_fixture_is_error() {
            let err = analyze(
                &CliConfig::new(),
                &analyze_args(PathBuf::from("/nonexistent/form.json")),
            )
            .unwrap_err();
            assert!(matches!(err, CliError::Probe(_)));
        }

        #[test]
        fn test_bad_config_is_config_error() {
            let file = fixture_file(SIGNUP);
            let config_file = fixture_file("not json");
            let mut args = analyze_args(file.path().into());
            args.config = Some(config_file.path().into());
            let err = analyze(&CliConfig::new(), &args).unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }
    }

    mod fill_tests {
        use super::*;

        #[test]
        fn test_fill_summary() {
            let file = fixture_file(SIGNUP);
            let rendered = fill(&CliConfig::new(), &fill_args(file.path().into(), 2)).unwrap();
            assert!(rendered.body.contains("Tabs visited: 1"));
            assert!(rendered.body.contains("Fields filled: 4"));
            assert!(rendered.body.contains("Fields tested: 6"));
            assert!(rendered.body.contains("signup: 2/3"));
        }

        #[test]
        fn test_form_override() {
            let file = fixture_file(SIGNUP);
            let mut args = fill_args(file.path().into(), 1);
            args.form = Some("checkout".to_string());
            let config = CliConfig::new().with_output_format(OutputFormat::Json);
            let rendered = fill(&config, &args).unwrap();
            let json: serde_json::Value = serde_json::from_str(&rendered.body).unwrap();
            assert_eq!(json["outcomes"][0]["formId"], "checkout");
            assert!(json["summary"]["latestPerForm"]["checkout"].is_object());
        }

        #[test]
        fn test_unfilled_fields_warned() {
            let file = fixture_file(SIGNUP);
            let verbose = CliConfig::new().with_verbosity(Verbosity::Debug);
            let rendered = fill(&verbose, &fill_args(file.path().into(), 1)).unwrap();
            assert_eq!(
                rendered.warnings,
                vec!["1 of 3 fields received no test value: favorite_color"]
            );
        }

        #[test]
        fn test_zero_runs_rejected() {
            let file = fixture_file(SIGNUP);
            let err = fill(&CliConfig::new(), &fill_args(file.path().into(), 0)).unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument { .. }));
        }
    }

    mod validate_tests {
        use super::*;

        fn args(kind: ValidateKind, value: &str) -> ValidateArgs {
            ValidateArgs {
                kind,
                value: value.to_string(),
            }
        }

        #[test]
        fn test_email() {
            assert!(validate(&args(ValidateKind::Email, "john@example.com")).passed);
            assert!(!validate(&args(ValidateKind::Email, "john@")).passed);
        }

        #[test]
        fn test_empty_value_fails() {
            let rendered = validate(&args(ValidateKind::Phone, "  "));
            assert!(!rendered.passed);
            assert_eq!(rendered.body, "No value entered");
        }

        #[test]
        fn test_password() {
            let weak = validate(&args(ValidateKind::Password, "abc"));
            assert!(!weak.passed);
            assert!(weak.body.starts_with("Weak password"));

            let strong = validate(&args(ValidateKind::Password, "Str0ng!Passw0rd"));
            assert!(strong.passed);
            assert!(strong.body.starts_with("Strong password"));
        }
    }
}
