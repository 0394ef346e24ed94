use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";

    pub const GATE_PROMPT: &str = "gate.prompt";

    pub const REPORT_SUMMARY_HEADING: &str = "report.summary_heading";
    pub const REPORT_CAPITAL_HEADING: &str = "report.capital_heading";
    pub const REPORT_MODE: &str = "report.mode";
    pub const REPORT_FACILITY_SQFT: &str = "report.facility_sqft";
    pub const REPORT_CONSTRUCTION_COST: &str = "report.construction_cost";
    pub const REPORT_EQUIPMENT_COST: &str = "report.equipment_cost";
    pub const REPORT_CAPITAL_TOTAL: &str = "report.capital_total";
    pub const REPORT_RN_FTE: &str = "report.rn_fte";
    pub const REPORT_RN_COST: &str = "report.rn_cost";
    pub const REPORT_FULL_CAPACITY: &str = "report.full_capacity";
    pub const REPORT_CAPPED_CAPACITY: &str = "report.capped_capacity";
    pub const REPORT_BREAKEVEN_YEAR: &str = "report.breakeven_year";
    pub const REPORT_PAYBACK_YEAR: &str = "report.payback_year";
    pub const REPORT_NOT_REACHED: &str = "report.not_reached";
    pub const REPORT_VERDICT_POSITIVE: &str = "report.verdict_positive";
    pub const REPORT_VERDICT_NEGATIVE: &str = "report.verdict_negative";

    pub const COL_YEAR: &str = "column.year";
    pub const COL_UTILIZATION: &str = "column.utilization";
    pub const COL_VISITS: &str = "column.visits";
    pub const COL_REVENUE: &str = "column.revenue";
    pub const COL_OPERATING_COST: &str = "column.operating_cost";
    pub const COL_NET_INCOME: &str = "column.net_income";
    pub const COL_CUM_CASHFLOW: &str = "column.cumulative_cashflow";
    pub const COL_NPV: &str = "column.npv";
    pub const COL_CUM_NPV: &str = "column.cumulative_npv";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_KEEP_DEFAULT: &str = "input.keep_default";
    pub const INPUT_NUM_CHAIRS: &str = "input.num_chairs";
    pub const INPUT_SQFT_PER_CHAIR: &str = "input.sqft_per_chair";
    pub const INPUT_COST_PER_SQFT: &str = "input.cost_per_sqft";
    pub const INPUT_EQUIPMENT_COST: &str = "input.equipment_cost_per_chair";
    pub const INPUT_MODE: &str = "input.mode";
    pub const INPUT_INITIAL_UTILIZATION: &str = "input.initial_utilization";
    pub const INPUT_MAX_UTILIZATION: &str = "input.max_utilization";
    pub const INPUT_UTILIZATION_RATE: &str = "input.utilization_rate";
    pub const INPUT_GROWTH_RATE: &str = "input.annual_growth_rate";
    pub const INPUT_RN_COST: &str = "input.rn_annual_cost_per_fte";
    pub const INPUT_CHAIRS_PER_RN: &str = "input.chairs_per_rn";
    pub const INPUT_SHIFTS_PER_DAY: &str = "input.shifts_per_day";
    pub const INPUT_SUPPLY_COST: &str = "input.supply_cost_per_visit";
    pub const INPUT_OVERHEAD: &str = "input.overhead_cost_annual";
    pub const INPUT_REIMBURSEMENT: &str = "input.reimbursement_per_visit";
    pub const INPUT_VISITS_PER_CHAIR: &str = "input.visits_per_chair_per_day";
    pub const INPUT_DAYS_PER_YEAR: &str = "input.days_per_year";
    pub const INPUT_FORECAST_YEARS: &str = "input.forecast_years";
    pub const INPUT_DISCOUNT_RATE: &str = "input.discount_rate";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순이며 영어에 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).or_else(|| ko(key)).unwrap_or(key),
            Language::Ko => ko(key).unwrap_or(key),
        }
    }

    /// `{name}` 자리표시자를 치환한 번역을 돌려준다.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: `[report] verdict_positive = "..."` 처럼
/// 테이블 경로가 키가 되는 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "=== 주입 체어 ROI 시뮬레이터 ===",
        GATE_PROMPT => "계속하려면 비밀번호를 입력하세요: ",
        REPORT_SUMMARY_HEADING => "-- ROI 요약 --",
        REPORT_CAPITAL_HEADING => "-- 투자비 및 인력 --",
        REPORT_MODE => "방문량 방식",
        REPORT_FACILITY_SQFT => "시설 면적 [sqft]",
        REPORT_CONSTRUCTION_COST => "공사비 ($)",
        REPORT_EQUIPMENT_COST => "장비비 ($)",
        REPORT_CAPITAL_TOTAL => "총 투자비 ($)",
        REPORT_RN_FTE => "필요 RN FTE",
        REPORT_RN_COST => "연간 RN 인건비 ($)",
        REPORT_FULL_CAPACITY => "최대 용량 방문 수 (100%)",
        REPORT_CAPPED_CAPACITY => "가동률 상한 방문 수",
        REPORT_BREAKEVEN_YEAR => "손익분기 연도 (누적 NPV > 0)",
        REPORT_PAYBACK_YEAR => "회수 연도 (누적 현금흐름 ≥ 0)",
        REPORT_NOT_REACHED => "기간 내 미도달",
        REPORT_VERDICT_POSITIVE => "✅ 투자 수익 양호. {years}년 NPV = ${npv}",
        REPORT_VERDICT_NEGATIVE => "❌ {years}년 동안 수익성이 없습니다. NPV = ${npv}",
        COL_YEAR => "연도",
        COL_UTILIZATION => "가동률(%)",
        COL_VISITS => "방문 수",
        COL_REVENUE => "매출($)",
        COL_OPERATING_COST => "운영비($)",
        COL_NET_INCOME => "순이익($)",
        COL_CUM_CASHFLOW => "누적현금흐름($)",
        COL_NPV => "NPV($)",
        COL_CUM_NPV => "누적NPV($)",
        INPUT_HEADING => "-- 시나리오 입력 --",
        INPUT_KEEP_DEFAULT => "엔터를 누르면 [기본값]을 사용합니다.",
        INPUT_NUM_CHAIRS => "체어 수",
        INPUT_SQFT_PER_CHAIR => "체어당 면적 [sqft]",
        INPUT_COST_PER_SQFT => "공사비 [$/sqft]",
        INPUT_EQUIPMENT_COST => "체어당 장비비 [$]",
        INPUT_MODE => "방문량 방식 (1=가동률 램프, 2=성장만, 3=고정 가동률+성장)",
        INPUT_INITIAL_UTILIZATION => "초기 가동률 [%]",
        INPUT_MAX_UTILIZATION => "최대 가동률 [%]",
        INPUT_UTILIZATION_RATE => "고정 가동률 [%]",
        INPUT_GROWTH_RATE => "연간 방문 성장률 [%]",
        INPUT_RN_COST => "RN 1 FTE 연간 인건비 [$]",
        INPUT_CHAIRS_PER_RN => "RN당 체어 수",
        INPUT_SHIFTS_PER_DAY => "일일 교대 수",
        INPUT_SUPPLY_COST => "방문당 약제/소모품비 [$]",
        INPUT_OVERHEAD => "연간 간접비 [$]",
        INPUT_REIMBURSEMENT => "방문당 수가 [$]",
        INPUT_VISITS_PER_CHAIR => "체어당 일일 방문 수",
        INPUT_DAYS_PER_YEAR => "연간 운영일",
        INPUT_FORECAST_YEARS => "예측 기간 [년]",
        INPUT_DISCOUNT_RATE => "할인율 [%]",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "=== Infusion Chair ROI Simulator ===",
        GATE_PROMPT => "Enter password to continue: ",
        REPORT_SUMMARY_HEADING => "-- ROI Summary --",
        REPORT_CAPITAL_HEADING => "-- Capital & Staffing --",
        REPORT_MODE => "Visit model",
        REPORT_FACILITY_SQFT => "Facility area [sqft]",
        REPORT_CONSTRUCTION_COST => "Construction ($)",
        REPORT_EQUIPMENT_COST => "Equipment ($)",
        REPORT_CAPITAL_TOTAL => "Total capital ($)",
        REPORT_RN_FTE => "RN FTEs required",
        REPORT_RN_COST => "Annual RN cost ($)",
        REPORT_FULL_CAPACITY => "100% max capacity visits",
        REPORT_CAPPED_CAPACITY => "Utilization cap visits",
        REPORT_BREAKEVEN_YEAR => "Breakeven year (cum NPV > 0)",
        REPORT_PAYBACK_YEAR => "Payback year (cum cashflow ≥ 0)",
        REPORT_NOT_REACHED => "not reached",
        REPORT_VERDICT_POSITIVE => "✅ Positive ROI. {years}-Year NPV = ${npv}",
        REPORT_VERDICT_NEGATIVE => "❌ Project not profitable over {years} years. NPV = ${npv}",
        COL_YEAR => "Year",
        COL_UTILIZATION => "Utilization (%)",
        COL_VISITS => "Visits",
        COL_REVENUE => "Revenue ($)",
        COL_OPERATING_COST => "Op Costs ($)",
        COL_NET_INCOME => "Net Income ($)",
        COL_CUM_CASHFLOW => "Cum Cashflow ($)",
        COL_NPV => "NPV ($)",
        COL_CUM_NPV => "Cum NPV ($)",
        INPUT_HEADING => "-- Scenario Inputs --",
        INPUT_KEEP_DEFAULT => "Press Enter to keep the [default].",
        INPUT_NUM_CHAIRS => "Number of chairs",
        INPUT_SQFT_PER_CHAIR => "Square feet per chair",
        INPUT_COST_PER_SQFT => "Construction cost per sqft [$]",
        INPUT_EQUIPMENT_COST => "Equipment cost per chair [$]",
        INPUT_MODE => "Visit model (1=ramped utilization, 2=growth only, 3=fixed utilization + growth)",
        INPUT_INITIAL_UTILIZATION => "Initial chair utilization [%]",
        INPUT_MAX_UTILIZATION => "Max utilization cap [%]",
        INPUT_UTILIZATION_RATE => "Fixed utilization [%]",
        INPUT_GROWTH_RATE => "Annual visit growth [%]",
        INPUT_RN_COST => "RN annual cost per FTE [$]",
        INPUT_CHAIRS_PER_RN => "Chairs per RN",
        INPUT_SHIFTS_PER_DAY => "Shifts per day",
        INPUT_SUPPLY_COST => "Drug/supply cost per visit [$]",
        INPUT_OVERHEAD => "Annual overhead/admin cost [$]",
        INPUT_REIMBURSEMENT => "Reimbursement per visit [$]",
        INPUT_VISITS_PER_CHAIR => "Visits per chair per day",
        INPUT_DAYS_PER_YEAR => "Operational days per year",
        INPUT_FORECAST_YEARS => "Forecast period [years]",
        INPUT_DISCOUNT_RATE => "Discount rate [%]",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        _ => return None,
    };
    Some(s)
}
