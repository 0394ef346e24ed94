/// 할인현금흐름(DCF) 계산 입력.
#[derive(Debug, Clone)]
pub struct DiscountedCashflowInput {
    /// 0년차부터의 연도별 순이익 [$]
    pub net_income: Vec<f64>,
    /// 0년차에 한 번 차감하는 초기 투자비 [$]
    pub capital_cost_total: f64,
    /// 할인율 -> 소수
    pub discount_rate: f64,
}

/// 한 해의 현금흐름 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashflowYear {
    /// 할인 전 현금흐름 (0년차는 투자비 차감)
    pub cash: f64,
    /// 할인된 현금흐름
    pub discounted: f64,
    /// 할인하지 않은 누적 현금흐름 (회수기간 참고용)
    pub cumulative_cashflow: f64,
    /// 누적 NPV
    pub cumulative_npv: f64,
}

/// DCF 결과.
#[derive(Debug, Clone)]
pub struct DiscountedCashflowResult {
    pub years: Vec<CashflowYear>,
    /// 마지막 해의 누적 NPV
    pub npv: f64,
}

/// 연도 순서대로 할인현금흐름을 누적한다.
///
/// 누적 NPV는 왼쪽부터 더하는 단순 누계로 계산한다. 합산 순서를 바꾸면
/// 부동소수점 결과가 달라질 수 있다.
pub fn compute_discounted_cashflow(input: DiscountedCashflowInput) -> DiscountedCashflowResult {
    let mut years = Vec::with_capacity(input.net_income.len());
    let mut npv = 0.0;
    let mut income_sum = 0.0;
    for (year, &net) in input.net_income.iter().enumerate() {
        let cash = if year > 0 {
            net
        } else {
            net - input.capital_cost_total
        };
        let df = (1.0 + input.discount_rate).powf(year as f64);
        let discounted = cash / df;
        npv += discounted;
        income_sum += net;
        years.push(CashflowYear {
            cash,
            discounted,
            cumulative_cashflow: income_sum - input.capital_cost_total,
            cumulative_npv: npv,
        });
    }
    DiscountedCashflowResult { years, npv }
}
