//! 입력 검증 회귀 테스트.
use infusion_roi_simulator::scenario::validate;
use infusion_roi_simulator::{compute, InputError, ScenarioInputs, UtilizationMode};

fn rejected_field(s: &ScenarioInputs) -> &'static str {
    match compute(s) {
        Err(e) => e.field(),
        Ok(_) => panic!("scenario should have been rejected: {s:?}"),
    }
}

#[test]
fn default_scenario_is_valid() {
    assert!(validate(&ScenarioInputs::default()).is_ok());
}

#[test]
fn zero_chairs_rejected() {
    let mut s = ScenarioInputs::default();
    s.num_chairs = 0;
    assert_eq!(rejected_field(&s), "num_chairs");
}

#[test]
fn negative_money_rejected() {
    let mut s = ScenarioInputs::default();
    s.cost_per_sqft = -1.0;
    assert_eq!(rejected_field(&s), "cost_per_sqft");

    let mut s = ScenarioInputs::default();
    s.overhead_cost_annual = -300_000.0;
    assert_eq!(rejected_field(&s), "overhead_cost_annual");

    let mut s = ScenarioInputs::default();
    s.reimbursement_per_visit = -0.01;
    assert_eq!(rejected_field(&s), "reimbursement_per_visit");
}

#[test]
fn non_finite_values_rejected() {
    let mut s = ScenarioInputs::default();
    s.supply_cost_per_visit = f64::NAN;
    assert_eq!(rejected_field(&s), "supply_cost_per_visit");

    let mut s = ScenarioInputs::default();
    s.discount_rate = f64::INFINITY;
    assert_eq!(rejected_field(&s), "discount_rate");
}

#[test]
fn ramped_cap_below_initial_rejected() {
    let mut s = ScenarioInputs::default();
    s.utilization = UtilizationMode::Ramped {
        initial_utilization: 0.9,
        max_utilization: 0.8,
        annual_growth_rate: 0.03,
    };
    let err = compute(&s).unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidInput {
            field: "max_utilization",
            value: 0.8,
            reason: "initial_utilization 이상이어야 합니다",
        }
    );
}

#[test]
fn utilization_outside_unit_interval_rejected() {
    let mut s = ScenarioInputs::default();
    s.utilization = UtilizationMode::Ramped {
        initial_utilization: 0.5,
        max_utilization: 1.2,
        annual_growth_rate: 0.03,
    };
    assert_eq!(rejected_field(&s), "max_utilization");
}

#[test]
fn fixed_rate_must_be_positive() {
    let mut s = ScenarioInputs::default();
    s.utilization = UtilizationMode::FixedWithGrowth {
        utilization_rate: 0.0,
        annual_growth_rate: 0.03,
    };
    assert_eq!(rejected_field(&s), "utilization_rate");
}

#[test]
fn negative_growth_rejected_in_every_mode() {
    let modes = [
        UtilizationMode::Ramped {
            initial_utilization: 0.5,
            max_utilization: 0.85,
            annual_growth_rate: -0.01,
        },
        UtilizationMode::GrowthOnly {
            annual_growth_rate: -0.01,
        },
        UtilizationMode::FixedWithGrowth {
            utilization_rate: 0.7,
            annual_growth_rate: -0.01,
        },
    ];
    for mode in modes {
        let mut s = ScenarioInputs::default();
        s.utilization = mode;
        assert_eq!(rejected_field(&s), "annual_growth_rate", "{mode:?}");
    }
}

#[test]
fn chairs_per_rn_must_be_positive() {
    let mut s = ScenarioInputs::default();
    s.chairs_per_rn = 0.0;
    assert_eq!(rejected_field(&s), "chairs_per_rn");
}

#[test]
fn zero_forecast_years_rejected() {
    let mut s = ScenarioInputs::default();
    s.forecast_years = 0;
    assert_eq!(rejected_field(&s), "forecast_years");
}

#[test]
fn zero_rates_and_counts_are_allowed() {
    let mut s = ScenarioInputs::default();
    s.shifts_per_day = 0;
    s.days_per_year = 0;
    s.discount_rate = 0.0;
    s.sqft_per_chair = 0.0;
    let res = compute(&s).expect("zeros are valid");
    assert_eq!(res.rn_fte_required, 0);
    assert!(res.yearly_rows.iter().all(|r| r.visits == 0.0));
}

#[test]
fn error_message_names_field() {
    let mut s = ScenarioInputs::default();
    s.forecast_years = 0;
    let msg = compute(&s).unwrap_err().to_string();
    assert!(msg.contains("forecast_years"), "{msg}");
}

#[test]
fn fte_beyond_u32_rejected() {
    let mut s = ScenarioInputs::default();
    s.chairs_per_rn = 1e-9;
    assert_eq!(rejected_field(&s), "chairs_per_rn");
}

#[test]
fn forecast_horizon_has_upper_limit() {
    let mut s = ScenarioInputs::default();
    s.forecast_years = infusion_roi_simulator::scenario::MAX_FORECAST_YEARS;
    assert!(compute(&s).is_ok());
    s.forecast_years = 4_000_000_000;
    assert_eq!(rejected_field(&s), "forecast_years");
}
