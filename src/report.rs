//! 예측 결과를 표/JSON/CSV 문자열로 변환한다.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{keys, Translator};
use crate::projection::ProjectionResult;
use crate::scenario::ScenarioInputs;

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// 결과 직렬화 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV 직렬화 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 변환 오류: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// 지정한 형식으로 결과를 렌더링한다.
pub fn render(
    format: OutputFormat,
    result: &ProjectionResult,
    input: &ScenarioInputs,
    tr: &Translator,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Table => Ok(render_table(result, input, tr)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(result),
    }
}

/// 전체 결과를 보기 좋은 JSON으로 직렬화한다.
pub fn render_json(result: &ProjectionResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// 연도별 행을 헤더 포함 CSV로 직렬화한다.
pub fn render_csv(result: &ProjectionResult) -> Result<String, ReportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in &result.yearly_rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// 연도별 표, 투자비 요약, 용량 기준선, 손익분기 및 판정을 담은 텍스트 리포트.
pub fn render_table(result: &ProjectionResult, input: &ScenarioInputs, tr: &Translator) -> String {
    let headers = [
        tr.t(keys::COL_YEAR),
        tr.t(keys::COL_UTILIZATION),
        tr.t(keys::COL_VISITS),
        tr.t(keys::COL_REVENUE),
        tr.t(keys::COL_OPERATING_COST),
        tr.t(keys::COL_NET_INCOME),
        tr.t(keys::COL_CUM_CASHFLOW),
        tr.t(keys::COL_NPV),
        tr.t(keys::COL_CUM_NPV),
    ];
    let rows: Vec<[String; 9]> = result
        .yearly_rows
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                r.utilization
                    .map(|u| format!("{:.1}%", u * 100.0))
                    .unwrap_or_else(|| "-".to_string()),
                format_thousands(r.visits),
                format_thousands(r.revenue),
                format_thousands(r.operating_cost),
                format_thousands(r.net_income),
                format_thousands(r.cumulative_cashflow),
                format_thousands(r.discounted_cashflow),
                format_thousands(r.cumulative_npv),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_SUMMARY_HEADING));
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }

    let not_reached = tr.t(keys::REPORT_NOT_REACHED);
    let year_or = |y: Option<u32>| y.map(|v| v.to_string()).unwrap_or_else(|| not_reached.to_string());

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_CAPITAL_HEADING));
    let mut summary = vec![
        (tr.t(keys::REPORT_MODE), input.utilization.name().to_string()),
        (tr.t(keys::REPORT_FACILITY_SQFT), format_thousands(result.facility_sqft)),
        (tr.t(keys::REPORT_CONSTRUCTION_COST), format_thousands(result.construction_cost)),
        (tr.t(keys::REPORT_EQUIPMENT_COST), format_thousands(result.equipment_cost)),
        (tr.t(keys::REPORT_CAPITAL_TOTAL), format_thousands(result.capital_cost_total)),
        (tr.t(keys::REPORT_RN_FTE), result.rn_fte_required.to_string()),
        (tr.t(keys::REPORT_RN_COST), format_thousands(result.rn_cost_total_annual)),
        (
            tr.t(keys::REPORT_FULL_CAPACITY),
            format_thousands(result.capacity.full_capacity_visits),
        ),
    ];
    if let Some(capped) = result.capacity.capped_visits {
        summary.push((tr.t(keys::REPORT_CAPPED_CAPACITY), format_thousands(capped)));
    }
    summary.push((tr.t(keys::REPORT_BREAKEVEN_YEAR), year_or(result.breakeven_year)));
    summary.push((tr.t(keys::REPORT_PAYBACK_YEAR), year_or(result.payback_year)));

    let label_width = summary.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    for (label, value) in &summary {
        let pad = label_width - label.chars().count();
        let _ = writeln!(out, "{label}{}  {value}", " ".repeat(pad));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", verdict(result, tr));
    out
}

/// 최종 NPV 부호에 따른 수익성 판정 문장.
pub fn verdict(result: &ProjectionResult, tr: &Translator) -> String {
    let key = if result.is_profitable {
        keys::REPORT_VERDICT_POSITIVE
    } else {
        keys::REPORT_VERDICT_NEGATIVE
    };
    let years = result.yearly_rows.len().to_string();
    let npv = format_thousands(result.final_npv);
    tr.tf(key, &[("years", &years), ("npv", &npv)])
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{cell}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  "));
}

/// 정수로 반올림한 뒤 세 자리마다 쉼표를 넣는다. (예: -1234567.6 -> "-1,234,568")
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
