use std::io::Cursor;
use std::path::PathBuf;

use infusion_roi_simulator::app::{run_with_io, AppError, RunOptions};
use infusion_roi_simulator::config::{self, AccessConfig, Config};
use infusion_roi_simulator::gate::{self, AccessGate, GateError, OpenGate, SharedSecretGate};
use infusion_roi_simulator::i18n::{keys, Translator};
use infusion_roi_simulator::report::OutputFormat;
use infusion_roi_simulator::{ui_cli, ScenarioInputs, UtilizationMode};

fn options(config: PathBuf) -> RunOptions {
    RunOptions {
        config,
        scenario: None,
        format: Some(OutputFormat::Json),
        lang: Some("en".into()),
        password: None,
        interactive: false,
        years: None,
        verbose: false,
    }
}

fn run_to_string(opts: &RunOptions, stdin: &str) -> Result<String, AppError> {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    run_with_io(opts, &mut input, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

fn write_secret_config(path: &std::path::Path, secret: &str) {
    let cfg = Config {
        access: AccessConfig {
            shared_secret: Some(secret.into()),
        },
        ..Config::default()
    };
    cfg.save(path).expect("save config");
}

#[test]
fn shared_secret_gate_requires_exact_match() {
    let gate = SharedSecretGate::new("CRMC2024");
    assert_eq!(gate.check(Some("CRMC2024")), Ok(()));
    assert_eq!(gate.check(Some("crmc2024")), Err(GateError::Denied));
    assert_eq!(gate.check(None), Err(GateError::MissingCredential));
    assert_eq!(OpenGate.check(None), Ok(()));
}

#[test]
fn blank_secret_builds_open_gate() {
    assert!(gate::from_secret(Some("   ")).check(None).is_ok());
    assert!(gate::from_secret(None).check(None).is_ok());
    assert!(gate::from_secret(Some("x")).check(None).is_err());
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg, Config::default());
    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn scenario_file_with_mode_table_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scenario.toml");
    std::fs::write(
        &path,
        r#"
num_chairs = 20
sqft_per_chair = 100
cost_per_sqft = 400
equipment_cost_per_chair = 20000
rn_annual_cost_per_fte = 90000
chairs_per_rn = 4
shifts_per_day = 2
visits_per_chair_per_day = 3
days_per_year = 260
supply_cost_per_visit = 500
reimbursement_per_visit = 1200
overhead_cost_annual = 300000
forecast_years = 1
discount_rate = 0

[utilization]
mode = "growth_only"
annual_growth_rate = 0.0
"#,
    )
    .expect("write scenario");
    let s = config::load_scenario(&path).expect("parse scenario");
    assert_eq!(
        s.utilization,
        UtilizationMode::GrowthOnly {
            annual_growth_rate: 0.0
        }
    );
    assert_eq!(s.forecast_years, 1);

    let mut opts = options(dir.path().join("config.toml"));
    opts.scenario = Some(path);
    let out = run_to_string(&opts, "").expect("run");
    let v: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(v["final_npv"].as_f64(), Some(8_520_000.0));
}

#[test]
fn partial_scenario_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scenario.toml");
    std::fs::write(&path, "num_chairs = 30\n").expect("write");
    let s = config::load_scenario(&path).expect("parse");
    assert_eq!(s.num_chairs, 30);
    assert_eq!(s.utilization, ScenarioInputs::default().utilization);
}

#[test]
fn wrong_password_is_denied_before_compute() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    write_secret_config(&path, "CRMC2024");
    let mut opts = options(path);
    opts.password = Some("guess".into());
    let err = run_to_string(&opts, "").unwrap_err();
    assert!(matches!(err, AppError::Gate(GateError::Denied)));
}

#[test]
fn missing_password_is_prompted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    write_secret_config(&path, "CRMC2024");
    let opts = options(path);
    let out = run_to_string(&opts, "CRMC2024\n").expect("run");
    let json_start = out.find('{').expect("json body");
    let v: serde_json::Value = serde_json::from_str(&out[json_start..]).expect("json");
    assert_eq!(v["yearly_rows"].as_array().map(Vec::len), Some(10));
}

#[test]
fn years_override_and_invalid_input_surface_as_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut opts = options(dir.path().join("config.toml"));
    opts.years = Some(0);
    let err = run_to_string(&opts, "").unwrap_err();
    assert!(matches!(err, AppError::Input(ref e) if e.field() == "forecast_years"));
}

#[test]
fn table_output_starts_with_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut opts = options(dir.path().join("config.toml"));
    opts.format = Some(OutputFormat::Table);
    opts.years = Some(3);
    let out = run_to_string(&opts, "").expect("run");
    assert!(out.starts_with("=== Infusion Chair ROI Simulator ==="));
    assert!(out.contains("3-Year NPV"));
}

#[test]
fn interactive_prompt_uses_defaults_on_blank_lines() {
    let tr = Translator::new("en");
    let defaults = ScenarioInputs::default();
    // chairs=25, mode=3 (fixed 70%), everything else blank
    let mut script = String::from("25\n\n\n\n3\n70\n\n");
    script.push_str(&"\n".repeat(10));
    let mut input = Cursor::new(script.into_bytes());
    let mut out = Vec::new();
    let s = ui_cli::prompt_scenario(&tr, &defaults, &mut input, &mut out).expect("prompt");
    assert_eq!(s.num_chairs, 25);
    assert_eq!(
        s.utilization,
        UtilizationMode::FixedWithGrowth {
            utilization_rate: 0.7,
            annual_growth_rate: 0.03,
        }
    );
    assert_eq!(s.discount_rate, defaults.discount_rate);
    assert_eq!(s.forecast_years, defaults.forecast_years);
}

#[test]
fn interactive_prompt_retries_bad_numbers() {
    let tr = Translator::new("en");
    let mut script = String::from("abc\n12\n");
    script.push_str(&"\n".repeat(20));
    let mut input = Cursor::new(script.into_bytes());
    let mut out = Vec::new();
    let s = ui_cli::prompt_scenario(&tr, &ScenarioInputs::default(), &mut input, &mut out)
        .expect("prompt");
    assert_eq!(s.num_chairs, 12);
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.contains(tr.t(keys::ERROR_INVALID_NUMBER)));
}

#[test]
fn translator_falls_back_and_reads_language_pack() {
    let en = Translator::new("en-US");
    assert_eq!(en.t(keys::COL_YEAR), "Year");
    let ko = Translator::new("ko-KR");
    assert_eq!(ko.t(keys::COL_YEAR), "연도");
    assert_eq!(en.t("no.such.key"), "no.such.key");

    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("en.toml"), "[column]\nyear = \"Yr\"\n").expect("write");
    let packed = Translator::new_with_pack("en-us", dir.path().to_str());
    assert_eq!(packed.t(keys::COL_YEAR), "Yr");
    assert_eq!(packed.t(keys::COL_VISITS), "Visits");
}
