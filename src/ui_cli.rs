use std::io::{self, BufRead, Write};

use crate::i18n::{keys, Translator};
use crate::scenario::{ScenarioInputs, UtilizationMode};

/// 대화형으로 시나리오 입력을 받는다. 빈 줄은 `defaults`의 값을 그대로 쓴다.
/// 비율 항목은 % 단위로 받아 소수로 저장한다.
pub fn prompt_scenario<R: BufRead, W: Write>(
    tr: &Translator,
    defaults: &ScenarioInputs,
    input: &mut R,
    out: &mut W,
) -> io::Result<ScenarioInputs> {
    writeln!(out, "\n{}", tr.t(keys::INPUT_HEADING))?;
    writeln!(out, "{}", tr.t(keys::INPUT_KEEP_DEFAULT))?;
    let mut p = Prompter { tr, input, out };
    let d = defaults;

    let num_chairs = p.read_u32(keys::INPUT_NUM_CHAIRS, d.num_chairs)?;
    let sqft_per_chair = p.read_f64(keys::INPUT_SQFT_PER_CHAIR, d.sqft_per_chair)?;
    let cost_per_sqft = p.read_f64(keys::INPUT_COST_PER_SQFT, d.cost_per_sqft)?;
    let equipment_cost_per_chair =
        p.read_f64(keys::INPUT_EQUIPMENT_COST, d.equipment_cost_per_chair)?;

    let default_growth = d.utilization.annual_growth_rate();
    let default_mode = match d.utilization {
        UtilizationMode::Ramped { .. } => 1,
        UtilizationMode::GrowthOnly { .. } => 2,
        UtilizationMode::FixedWithGrowth { .. } => 3,
    };
    let utilization = loop {
        match p.read_u32(keys::INPUT_MODE, default_mode)? {
            1 => {
                let (initial, max) = match d.utilization {
                    UtilizationMode::Ramped {
                        initial_utilization,
                        max_utilization,
                        ..
                    } => (initial_utilization, max_utilization),
                    _ => (0.5, 0.85),
                };
                break UtilizationMode::Ramped {
                    initial_utilization: p.read_percent(keys::INPUT_INITIAL_UTILIZATION, initial)?,
                    max_utilization: p.read_percent(keys::INPUT_MAX_UTILIZATION, max)?,
                    annual_growth_rate: p.read_percent(keys::INPUT_GROWTH_RATE, default_growth)?,
                };
            }
            2 => {
                break UtilizationMode::GrowthOnly {
                    annual_growth_rate: p.read_percent(keys::INPUT_GROWTH_RATE, default_growth)?,
                };
            }
            3 => {
                let rate = match d.utilization {
                    UtilizationMode::FixedWithGrowth {
                        utilization_rate, ..
                    } => utilization_rate,
                    _ => 0.75,
                };
                break UtilizationMode::FixedWithGrowth {
                    utilization_rate: p.read_percent(keys::INPUT_UTILIZATION_RATE, rate)?,
                    annual_growth_rate: p.read_percent(keys::INPUT_GROWTH_RATE, default_growth)?,
                };
            }
            _ => writeln!(p.out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    };

    let rn_annual_cost_per_fte = p.read_f64(keys::INPUT_RN_COST, d.rn_annual_cost_per_fte)?;
    let chairs_per_rn = p.read_f64(keys::INPUT_CHAIRS_PER_RN, d.chairs_per_rn)?;
    let shifts_per_day = p.read_u32(keys::INPUT_SHIFTS_PER_DAY, d.shifts_per_day)?;
    let supply_cost_per_visit = p.read_f64(keys::INPUT_SUPPLY_COST, d.supply_cost_per_visit)?;
    let overhead_cost_annual = p.read_f64(keys::INPUT_OVERHEAD, d.overhead_cost_annual)?;
    let reimbursement_per_visit =
        p.read_f64(keys::INPUT_REIMBURSEMENT, d.reimbursement_per_visit)?;
    let visits_per_chair_per_day =
        p.read_f64(keys::INPUT_VISITS_PER_CHAIR, d.visits_per_chair_per_day)?;
    let days_per_year = p.read_u32(keys::INPUT_DAYS_PER_YEAR, d.days_per_year)?;
    let forecast_years = p.read_u32(keys::INPUT_FORECAST_YEARS, d.forecast_years)?;
    let discount_rate = p.read_percent(keys::INPUT_DISCOUNT_RATE, d.discount_rate)?;

    Ok(ScenarioInputs {
        num_chairs,
        sqft_per_chair,
        cost_per_sqft,
        equipment_cost_per_chair,
        utilization,
        rn_annual_cost_per_fte,
        chairs_per_rn,
        shifts_per_day,
        visits_per_chair_per_day,
        days_per_year,
        supply_cost_per_visit,
        reimbursement_per_visit,
        overhead_cost_annual,
        operating_hours_per_day: d.operating_hours_per_day,
        forecast_years,
        discount_rate,
    })
}

/// 비밀번호 한 줄을 읽는다. 입력이 비어 있으면 None.
pub fn prompt_password<R: BufRead, W: Write>(
    tr: &Translator,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{}", tr.t(keys::GATE_PROMPT))?;
    out.flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    let line = buf.trim_end_matches(['\r', '\n']);
    Ok((!line.is_empty()).then(|| line.to_string()))
}

struct Prompter<'a, R, W> {
    tr: &'a Translator,
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "입력이 끝났습니다",
            ));
        }
        Ok(buf)
    }

    /// 빈 줄이면 None을 돌려준다.
    fn read_parsed<T: std::str::FromStr>(
        &mut self,
        key: &str,
        default_label: &str,
    ) -> io::Result<Option<T>> {
        let prompt = format!("{} [{default_label}]: ", self.tr.t(key));
        loop {
            let s = self.read_line(&prompt)?;
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            match s.parse::<T>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "{}", self.tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    fn read_f64(&mut self, key: &str, default: f64) -> io::Result<f64> {
        Ok(self.read_parsed::<f64>(key, &default.to_string())?.unwrap_or(default))
    }

    fn read_u32(&mut self, key: &str, default: u32) -> io::Result<u32> {
        Ok(self.read_parsed::<u32>(key, &default.to_string())?.unwrap_or(default))
    }

    fn read_percent(&mut self, key: &str, default_fraction: f64) -> io::Result<f64> {
        let label = format!("{:.1}", default_fraction * 100.0);
        Ok(self
            .read_parsed::<f64>(key, &label)?
            .map(|pct| pct / 100.0)
            .unwrap_or(default_fraction))
    }
}
