//! 투자 시나리오 입력값과 검증 로직을 모아둔다.

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{validate, InputError, MAX_FORECAST_YEARS};

/// 연도별 방문량 궤적을 만드는 방식. 방식마다 필요한 파라미터만 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UtilizationMode {
    /// 초기 가동률에서 매년 성장하되 최대 가동률에서 멈춘다.
    Ramped {
        /// 1년차 가동률(0~1)
        initial_utilization: f64,
        /// 가동률 상한(0~1)
        max_utilization: f64,
        /// 연간 성장률 (0.03 = 3%)
        annual_growth_rate: f64,
    },
    /// 100% 용량에서 시작해 상한 없이 복리 성장한다.
    GrowthOnly {
        /// 연간 성장률
        annual_growth_rate: f64,
    },
    /// 고정 가동률을 매년 적용하고 방문량은 복리 성장한다.
    FixedWithGrowth {
        /// 고정 가동률(0~1, 0 초과)
        utilization_rate: f64,
        /// 연간 성장률
        annual_growth_rate: f64,
    },
}

impl UtilizationMode {
    pub fn annual_growth_rate(&self) -> f64 {
        match *self {
            UtilizationMode::Ramped {
                annual_growth_rate, ..
            }
            | UtilizationMode::GrowthOnly { annual_growth_rate }
            | UtilizationMode::FixedWithGrowth {
                annual_growth_rate, ..
            } => annual_growth_rate,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UtilizationMode::Ramped { .. } => "ramped",
            UtilizationMode::GrowthOnly { .. } => "growth_only",
            UtilizationMode::FixedWithGrowth { .. } => "fixed_with_growth",
        }
    }
}

/// 주입실 증설 시나리오 입력. 한 번의 계산 동안 변하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// 체어 수
    pub num_chairs: u32,
    /// 체어당 면적 [sqft]
    pub sqft_per_chair: f64,
    /// 공사비 [$/sqft]
    pub cost_per_sqft: f64,
    /// 체어당 장비비 [$]
    pub equipment_cost_per_chair: f64,
    /// 방문량 궤적 방식
    pub utilization: UtilizationMode,
    /// RN 1 FTE 연간 인건비 [$]
    pub rn_annual_cost_per_fte: f64,
    /// RN 1명이 담당하는 체어 수
    pub chairs_per_rn: f64,
    /// 일일 교대 수
    pub shifts_per_day: u32,
    /// 체어당 일일 방문 수
    pub visits_per_chair_per_day: f64,
    /// 연간 운영일
    pub days_per_year: u32,
    /// 방문당 약제/소모품비 [$]
    pub supply_cost_per_visit: f64,
    /// 방문당 수가 [$]
    pub reimbursement_per_visit: f64,
    /// 연간 간접비/관리비 [$]
    pub overhead_cost_annual: f64,
    /// 일일 운영 시간. 참고용이며 계산에는 쓰지 않는다.
    pub operating_hours_per_day: Option<f64>,
    /// 예측 기간 [년]
    pub forecast_years: u32,
    /// 할인율 (0.03 = 3%)
    pub discount_rate: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            num_chairs: 20,
            sqft_per_chair: 100.0,
            cost_per_sqft: 400.0,
            equipment_cost_per_chair: 20_000.0,
            utilization: UtilizationMode::Ramped {
                initial_utilization: 0.5,
                max_utilization: 0.85,
                annual_growth_rate: 0.03,
            },
            rn_annual_cost_per_fte: 90_000.0,
            chairs_per_rn: 4.0,
            shifts_per_day: 2,
            visits_per_chair_per_day: 3.0,
            days_per_year: 260,
            supply_cost_per_visit: 500.0,
            reimbursement_per_visit: 1_200.0,
            overhead_cost_annual: 300_000.0,
            operating_hours_per_day: Some(10.0),
            forecast_years: 10,
            discount_rate: 0.03,
        }
    }
}

impl ScenarioInputs {
    /// 가동률 100% 기준 연간 최대 방문 수.
    pub fn full_capacity_visits(&self) -> f64 {
        self.num_chairs as f64 * self.visits_per_chair_per_day * self.days_per_year as f64
    }
}
