use infusion_roi_simulator::i18n::Translator;
use infusion_roi_simulator::report::{self, format_thousands, OutputFormat};
use infusion_roi_simulator::{compute, ScenarioInputs};

#[test]
fn thousands_grouping_rounds_to_whole_units() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.4), "999");
    assert_eq!(format_thousands(1_000.0), "1,000");
    assert_eq!(format_thousands(8_520_000.0), "8,520,000");
    assert_eq!(format_thousands(-1_234_567.6), "-1,234,568");
    assert_eq!(format_thousands(-0.3), "0");
}

#[test]
fn table_lists_every_year_and_verdict() {
    let s = ScenarioInputs::default();
    let res = compute(&s).expect("valid");
    let tr = Translator::new("en");
    let text = report::render(OutputFormat::Table, &res, &s, &tr).expect("table");
    assert!(text.contains("Cum NPV ($)"));
    assert!(text.contains("50.0%"));
    assert!(text.contains("Total capital ($)"));
    assert!(text.contains("1,200,000"));
    let verdict = report::verdict(&res, &tr);
    assert!(verdict.starts_with("✅ Positive ROI. 10-Year NPV = $"), "{verdict}");
    assert!(text.contains(&verdict));
}

#[test]
fn negative_verdict_in_korean() {
    let mut s = ScenarioInputs::default();
    s.reimbursement_per_visit = 300.0;
    s.forecast_years = 5;
    let res = compute(&s).expect("valid");
    let tr = Translator::new("ko");
    let verdict = report::verdict(&res, &tr);
    assert!(verdict.contains("5년 동안 수익성이 없습니다"), "{verdict}");
    assert!(verdict.contains(&format!("${}", format_thousands(res.final_npv))));
    let text = report::render_table(&res, &s, &tr);
    assert!(text.contains("기간 내 미도달"));
}

#[test]
fn growth_only_table_shows_dash_for_utilization() {
    let mut s = ScenarioInputs::default();
    s.utilization = infusion_roi_simulator::UtilizationMode::GrowthOnly {
        annual_growth_rate: 0.02,
    };
    let res = compute(&s).expect("valid");
    let text = report::render_table(&res, &s, &Translator::new("en"));
    assert!(text.contains("growth_only"));
    assert!(!text.contains("Utilization cap visits"));
}

#[test]
fn csv_has_header_and_one_row_per_year() {
    let mut s = ScenarioInputs::default();
    s.forecast_years = 4;
    let res = compute(&s).expect("valid");
    let out = report::render_csv(&res).expect("csv");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("year,utilization,visits,revenue"));
    assert!(lines[1].starts_with("1,0.5,7800"));
}

#[test]
fn json_round_trips_key_fields() {
    let res = compute(&ScenarioInputs::default()).expect("valid");
    let out = report::render_json(&res).expect("json");
    let v: serde_json::Value = serde_json::from_str(&out).expect("parse");
    let npv = v["final_npv"].as_f64().expect("final_npv");
    assert!((npv - res.final_npv).abs() < 1e-6);
    assert_eq!(v["yearly_rows"].as_array().map(Vec::len), Some(10));
    assert_eq!(v["rn_fte_required"].as_u64(), Some(10));
    assert_eq!(v["is_profitable"].as_bool(), Some(true));
}
