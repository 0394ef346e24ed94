/// 초기 투자비(공사비 + 장비비) 계산 입력.
#[derive(Debug, Clone)]
pub struct CapitalCostInput {
    /// 체어 수
    pub num_chairs: u32,
    /// 체어당 면적 [sqft]
    pub sqft_per_chair: f64,
    /// 공사비 [$/sqft]
    pub cost_per_sqft: f64,
    /// 체어당 장비비 [$]
    pub equipment_cost_per_chair: f64,
}

/// 초기 투자비 결과.
#[derive(Debug, Clone)]
pub struct CapitalCostResult {
    /// 시설 면적 [sqft]
    pub facility_sqft: f64,
    /// 공사비 [$]
    pub construction_cost: f64,
    /// 장비비 [$]
    pub equipment_cost: f64,
    /// 총 투자비 [$]
    pub capital_cost_total: f64,
}

/// 체어 수 기준으로 공사비와 장비비를 합산한다. 투자비는 0년차에 한 번만 발생한다.
pub fn compute_capital_cost(input: CapitalCostInput) -> CapitalCostResult {
    let chairs = input.num_chairs as f64;
    let facility_sqft = chairs * input.sqft_per_chair;
    let construction_cost = facility_sqft * input.cost_per_sqft;
    let equipment_cost = chairs * input.equipment_cost_per_chair;
    CapitalCostResult {
        facility_sqft,
        construction_cost,
        equipment_cost,
        capital_cost_total: construction_cost + equipment_cost,
    }
}
