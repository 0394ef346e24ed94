use crate::scenario::UtilizationMode;

/// 연도별 방문량 궤적 계산 입력.
#[derive(Debug, Clone)]
pub struct VisitTrajectoryInput {
    /// 가동률 100% 기준 연간 방문 수 (체어 × 일일 방문 × 운영일)
    pub full_capacity_visits: f64,
    /// 궤적 방식과 방식별 파라미터
    pub mode: UtilizationMode,
    /// 예측 기간 [년]
    pub years: u32,
}

/// 연도별 방문량 궤적. 두 벡터의 길이는 예측 기간과 같다.
#[derive(Debug, Clone)]
pub struct VisitTrajectory {
    /// 연도별 가동률. 상한 없는 성장 방식에서는 None.
    pub utilization: Vec<Option<f64>>,
    /// 연도별 방문 수
    pub visits: Vec<f64>,
    /// 가동률 상한선 방문 수 (Ramped 방식에서만 존재)
    pub capped_visits: Option<f64>,
}

/// 선택된 방식에 따라 0년차부터 순서대로 방문량을 계산한다.
pub fn compute_visit_trajectory(input: VisitTrajectoryInput) -> VisitTrajectory {
    let years = input.years as usize;
    let mut utilization = Vec::with_capacity(years);
    let mut visits = Vec::with_capacity(years);
    let mut capped_visits = None;

    match input.mode {
        UtilizationMode::Ramped {
            initial_utilization,
            max_utilization,
            annual_growth_rate,
        } => {
            capped_visits = Some(input.full_capacity_visits * max_utilization);
            for year in 0..years {
                let ramped = initial_utilization * (1.0 + annual_growth_rate).powf(year as f64);
                let u = ramped.min(max_utilization);
                utilization.push(Some(u));
                visits.push(input.full_capacity_visits * u);
            }
        }
        UtilizationMode::GrowthOnly { annual_growth_rate } => {
            let mut current = input.full_capacity_visits;
            for year in 0..years {
                if year > 0 {
                    current *= 1.0 + annual_growth_rate;
                }
                utilization.push(None);
                visits.push(current);
            }
        }
        UtilizationMode::FixedWithGrowth {
            utilization_rate,
            annual_growth_rate,
        } => {
            let mut current = input.full_capacity_visits * utilization_rate;
            for year in 0..years {
                if year > 0 {
                    // 가동률 적용 전 방문량으로 되돌린 뒤 성장시키고 다시 가동률을 곱한다.
                    let raw = current / utilization_rate * (1.0 + annual_growth_rate);
                    current = raw * utilization_rate;
                }
                utilization.push(Some(utilization_rate));
                visits.push(current);
            }
        }
    }

    VisitTrajectory {
        utilization,
        visits,
        capped_visits,
    }
}
