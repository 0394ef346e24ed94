/// RN 인력 산정 입력.
#[derive(Debug, Clone)]
pub struct StaffingInput {
    /// 체어 수
    pub num_chairs: u32,
    /// RN 1명이 담당하는 체어 수 (0 초과)
    pub chairs_per_rn: f64,
    /// 일일 교대 수
    pub shifts_per_day: u32,
    /// RN 1 FTE 연간 인건비 [$]
    pub rn_annual_cost_per_fte: f64,
}

/// RN 인력 산정 결과. 가동률과 무관하게 매년 동일하다.
#[derive(Debug, Clone)]
pub struct StaffingResult {
    /// 필요 FTE (올림)
    pub rn_fte_required: u32,
    /// 연간 RN 인건비 [$]
    pub rn_cost_total_annual: f64,
}

/// 필요 RN FTE와 연간 인건비를 계산한다. 소수 FTE는 채용할 수 없으므로 올림한다.
pub fn compute_staffing(input: StaffingInput) -> StaffingResult {
    let rn_fte_required = required_fte(input.num_chairs, input.chairs_per_rn, input.shifts_per_day) as u32;
    StaffingResult {
        rn_fte_required,
        rn_cost_total_annual: rn_fte_required as f64 * input.rn_annual_cost_per_fte,
    }
}

/// 올림 전 FTE를 올림한 값. 검증 단계에서 u32 범위를 넘는지 확인할 때도 쓴다.
pub fn required_fte(num_chairs: u32, chairs_per_rn: f64, shifts_per_day: u32) -> f64 {
    ((num_chairs as f64 / chairs_per_rn) * shifts_per_day as f64).ceil()
}
