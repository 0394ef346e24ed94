use thiserror::Error;

use super::{ScenarioInputs, UtilizationMode};
use crate::projection::staffing::required_fte;

/// 허용하는 최대 예측 기간 [년]
pub const MAX_FORECAST_YEARS: u32 = 1_000;

/// 입력 검증 실패. 계산 전에 반환되며 부분 결과는 만들지 않는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("입력 오류: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::InvalidInput { field, .. } => field,
        }
    }
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> InputError {
    InputError::InvalidInput {
        field,
        value,
        reason,
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "유한한 숫자여야 합니다"));
    }
    if value < 0.0 {
        return Err(invalid(field, value, "0 이상이어야 합니다"));
    }
    Ok(())
}

fn fraction(field: &'static str, value: f64) -> Result<(), InputError> {
    non_negative(field, value)?;
    if value > 1.0 {
        return Err(invalid(field, value, "0~1 범위여야 합니다"));
    }
    Ok(())
}

/// 시나리오 입력의 범위 조건을 필드 순서대로 검사하고 첫 위반을 반환한다.
pub fn validate(input: &ScenarioInputs) -> Result<(), InputError> {
    if input.num_chairs < 1 {
        return Err(invalid(
            "num_chairs",
            input.num_chairs as f64,
            "1 이상이어야 합니다",
        ));
    }
    non_negative("sqft_per_chair", input.sqft_per_chair)?;
    non_negative("cost_per_sqft", input.cost_per_sqft)?;
    non_negative("equipment_cost_per_chair", input.equipment_cost_per_chair)?;

    match input.utilization {
        UtilizationMode::Ramped {
            initial_utilization,
            max_utilization,
            annual_growth_rate,
        } => {
            fraction("initial_utilization", initial_utilization)?;
            fraction("max_utilization", max_utilization)?;
            if max_utilization < initial_utilization {
                return Err(invalid(
                    "max_utilization",
                    max_utilization,
                    "initial_utilization 이상이어야 합니다",
                ));
            }
            non_negative("annual_growth_rate", annual_growth_rate)?;
        }
        UtilizationMode::GrowthOnly { annual_growth_rate } => {
            non_negative("annual_growth_rate", annual_growth_rate)?;
        }
        UtilizationMode::FixedWithGrowth {
            utilization_rate,
            annual_growth_rate,
        } => {
            fraction("utilization_rate", utilization_rate)?;
            if utilization_rate <= 0.0 {
                return Err(invalid(
                    "utilization_rate",
                    utilization_rate,
                    "0보다 커야 합니다",
                ));
            }
            non_negative("annual_growth_rate", annual_growth_rate)?;
        }
    }

    non_negative("rn_annual_cost_per_fte", input.rn_annual_cost_per_fte)?;
    non_negative("chairs_per_rn", input.chairs_per_rn)?;
    if input.chairs_per_rn <= 0.0 {
        return Err(invalid(
            "chairs_per_rn",
            input.chairs_per_rn,
            "0보다 커야 합니다",
        ));
    }
    let fte = required_fte(input.num_chairs, input.chairs_per_rn, input.shifts_per_day);
    if fte > u32::MAX as f64 {
        return Err(invalid(
            "chairs_per_rn",
            input.chairs_per_rn,
            "필요 FTE가 너무 큽니다",
        ));
    }
    non_negative("visits_per_chair_per_day", input.visits_per_chair_per_day)?;
    non_negative("supply_cost_per_visit", input.supply_cost_per_visit)?;
    non_negative("reimbursement_per_visit", input.reimbursement_per_visit)?;
    non_negative("overhead_cost_annual", input.overhead_cost_annual)?;
    if let Some(hours) = input.operating_hours_per_day {
        non_negative("operating_hours_per_day", hours)?;
    }
    if input.forecast_years < 1 {
        return Err(invalid(
            "forecast_years",
            input.forecast_years as f64,
            "1 이상이어야 합니다",
        ));
    }
    if input.forecast_years > MAX_FORECAST_YEARS {
        return Err(invalid(
            "forecast_years",
            input.forecast_years as f64,
            "1000년 이하여야 합니다",
        ));
    }
    non_negative("discount_rate", input.discount_rate)?;
    Ok(())
}
