use serde::Serialize;

use super::capital::{compute_capital_cost, CapitalCostInput};
use super::cashflow::{compute_discounted_cashflow, DiscountedCashflowInput};
use super::staffing::{compute_staffing, StaffingInput};
use super::visits::{compute_visit_trajectory, VisitTrajectoryInput};
use crate::scenario::{self, InputError, ScenarioInputs};

/// 한 해의 예측 결과. `year`는 표시용 1부터 시작하는 연도다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRecord {
    pub year: u32,
    /// 가동률(0~1). 상한 없는 성장 방식에서는 None.
    pub utilization: Option<f64>,
    pub visits: f64,
    pub revenue: f64,
    pub supply_cost: f64,
    pub operating_cost: f64,
    pub net_income: f64,
    /// 할인 전 현금흐름 (1년차는 투자비 차감)
    pub cash: f64,
    pub discounted_cashflow: f64,
    pub cumulative_cashflow: f64,
    pub cumulative_npv: f64,
}

/// 방문량 차트의 기준선.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityReference {
    /// 가동률 100% 방문 수
    pub full_capacity_visits: f64,
    /// 최대 가동률 상한 방문 수 (Ramped 방식에서만 존재)
    pub capped_visits: Option<f64>,
}

/// 전체 예측 결과. 항상 모든 연도가 채워진 상태로만 만들어진다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub facility_sqft: f64,
    pub construction_cost: f64,
    pub equipment_cost: f64,
    pub capital_cost_total: f64,
    pub rn_fte_required: u32,
    pub rn_cost_total_annual: f64,
    pub capacity: CapacityReference,
    pub yearly_rows: Vec<YearRecord>,
    pub final_npv: f64,
    pub is_profitable: bool,
    /// 누적 NPV가 처음 양수가 되는 연도
    pub breakeven_year: Option<u32>,
    /// 할인하지 않은 누적 현금흐름이 처음 0 이상이 되는 연도
    pub payback_year: Option<u32>,
}

/// 유한한 입력이라도 값이 너무 크면 곱셈 중 Inf/NaN이 될 수 있다.
fn ensure_finite(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::InvalidInput {
            field,
            value,
            reason: "계산 결과가 표현 가능한 범위를 벗어났습니다",
        })
    }
}

/// 시나리오 입력으로 연도별 방문량, 손익, 할인현금흐름을 계산한다.
///
/// 입력이 범위를 벗어나면 계산하지 않고 [`InputError`]를 반환한다.
/// 같은 입력에 대해 항상 같은 결과를 돌려준다.
pub fn compute(input: &ScenarioInputs) -> Result<ProjectionResult, InputError> {
    scenario::validate(input)?;

    let capital = compute_capital_cost(CapitalCostInput {
        num_chairs: input.num_chairs,
        sqft_per_chair: input.sqft_per_chair,
        cost_per_sqft: input.cost_per_sqft,
        equipment_cost_per_chair: input.equipment_cost_per_chair,
    });

    let staffing = compute_staffing(StaffingInput {
        num_chairs: input.num_chairs,
        chairs_per_rn: input.chairs_per_rn,
        shifts_per_day: input.shifts_per_day,
        rn_annual_cost_per_fte: input.rn_annual_cost_per_fte,
    });

    let full_capacity_visits = input.full_capacity_visits();
    let trajectory = compute_visit_trajectory(VisitTrajectoryInput {
        full_capacity_visits,
        mode: input.utilization,
        years: input.forecast_years,
    });

    let revenue: Vec<f64> = trajectory
        .visits
        .iter()
        .map(|v| v * input.reimbursement_per_visit)
        .collect();
    let supply_cost: Vec<f64> = trajectory
        .visits
        .iter()
        .map(|v| v * input.supply_cost_per_visit)
        .collect();
    let operating_cost: Vec<f64> = supply_cost
        .iter()
        .map(|sc| staffing.rn_cost_total_annual + input.overhead_cost_annual + sc)
        .collect();
    let net_income: Vec<f64> = revenue
        .iter()
        .zip(&operating_cost)
        .map(|(rev, cost)| rev - cost)
        .collect();

    let dcf = compute_discounted_cashflow(DiscountedCashflowInput {
        net_income: net_income.clone(),
        capital_cost_total: capital.capital_cost_total,
        discount_rate: input.discount_rate,
    });

    let yearly_rows: Vec<YearRecord> = dcf
        .years
        .iter()
        .enumerate()
        .map(|(y, cf)| YearRecord {
            year: y as u32 + 1,
            utilization: trajectory.utilization[y],
            visits: trajectory.visits[y],
            revenue: revenue[y],
            supply_cost: supply_cost[y],
            operating_cost: operating_cost[y],
            net_income: net_income[y],
            cash: cf.cash,
            discounted_cashflow: cf.discounted,
            cumulative_cashflow: cf.cumulative_cashflow,
            cumulative_npv: cf.cumulative_npv,
        })
        .collect();

    ensure_finite("capital_cost_total", capital.capital_cost_total)?;
    ensure_finite("rn_cost_total_annual", staffing.rn_cost_total_annual)?;
    for row in &yearly_rows {
        ensure_finite("visits", row.visits)?;
        ensure_finite("revenue", row.revenue)?;
        ensure_finite("operating_cost", row.operating_cost)?;
        ensure_finite("net_income", row.net_income)?;
        ensure_finite("cumulative_cashflow", row.cumulative_cashflow)?;
        ensure_finite("cumulative_npv", row.cumulative_npv)?;
    }

    let breakeven_year = yearly_rows
        .iter()
        .find(|row| row.cumulative_npv > 0.0)
        .map(|row| row.year);
    let payback_year = yearly_rows
        .iter()
        .find(|row| row.cumulative_cashflow >= 0.0)
        .map(|row| row.year);

    Ok(ProjectionResult {
        facility_sqft: capital.facility_sqft,
        construction_cost: capital.construction_cost,
        equipment_cost: capital.equipment_cost,
        capital_cost_total: capital.capital_cost_total,
        rn_fte_required: staffing.rn_fte_required,
        rn_cost_total_annual: staffing.rn_cost_total_annual,
        capacity: CapacityReference {
            full_capacity_visits,
            capped_visits: trajectory.capped_visits,
        },
        yearly_rows,
        final_npv: dcf.npv,
        is_profitable: dcf.npv > 0.0,
        breakeven_year,
        payback_year,
    })
}
