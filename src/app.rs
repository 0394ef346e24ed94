use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::gate::{self, GateError};
use crate::i18n::{self, Translator};
use crate::projection;
use crate::report::{self, OutputFormat, ReportError};
use crate::scenario::InputError;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("접근 거부: {0}")]
    Gate(#[from] GateError),
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("리포트 오류: {0}")]
    Report(#[from] ReportError),
}

/// 명령행 옵션.
#[derive(Debug, Clone, Parser)]
#[command(name = "infusion_roi_simulator")]
#[command(about = "Infusion chair expansion ROI projection (visits, revenue, cost, NPV)")]
pub struct RunOptions {
    /// 애플리케이션 설정 파일
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// 단독 시나리오 TOML 파일 (없으면 설정 파일의 [scenario] 사용)
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// 출력 형식 (없으면 설정값)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L')]
    pub lang: Option<String>,

    /// 공유 비밀번호
    #[arg(long, env = "INFUSION_ROI_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// 시나리오 값을 대화형으로 입력
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// 예측 기간 덮어쓰기 [년]
    #[arg(long)]
    pub years: Option<u32>,

    /// 디버그 로그 출력
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// 설정 로드 → 접근 확인 → 시나리오 준비 → 예측 → 렌더링 순으로 실행한다.
pub fn run(opts: &RunOptions) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_with_io(opts, &mut input, &mut out)
}

/// 입출력 스트림을 주입받는 실행 경로. 프롬프트와 리포트 모두 `out`으로 쓴다.
pub fn run_with_io<R: BufRead, W: Write>(
    opts: &RunOptions,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let cfg = config::load_or_default(&opts.config)?;
    tracing::debug!(path = %opts.config.display(), "설정 로드 완료");

    let tr = translator_for(opts, &cfg);

    let access = gate::from_secret(cfg.access.shared_secret.as_deref());
    match access.check(opts.password.as_deref()) {
        Ok(()) => {}
        Err(GateError::MissingCredential) => {
            let entered = ui_cli::prompt_password(&tr, input, out)?;
            access.check(entered.as_deref())?;
        }
        Err(e) => {
            tracing::warn!("접근 확인 실패");
            return Err(e.into());
        }
    }

    let mut scenario = match &opts.scenario {
        Some(path) => {
            tracing::debug!(path = %path.display(), "시나리오 파일 로드");
            config::load_scenario(path)?
        }
        None => cfg.scenario.clone(),
    };
    if opts.interactive {
        scenario = ui_cli::prompt_scenario(&tr, &scenario, input, out)?;
    }
    if let Some(years) = opts.years {
        scenario.forecast_years = years;
    }

    let result = match projection::compute(&scenario) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(field = e.field(), "시나리오 입력 검증 실패");
            return Err(e.into());
        }
    };
    tracing::info!(
        mode = scenario.utilization.name(),
        years = scenario.forecast_years,
        final_npv = result.final_npv,
        breakeven_year = ?result.breakeven_year,
        "예측 완료"
    );

    let format = opts.format.unwrap_or(cfg.output_format);
    let rendered = report::render(format, &result, &scenario, &tr)?;
    if format == OutputFormat::Table {
        writeln!(out, "{}\n", tr.t(i18n::keys::APP_TITLE))?;
    }
    write!(out, "{rendered}")?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// CLI 플래그 > 설정 > 시스템 로케일 순으로 번역기를 고른다.
pub fn translator_for(opts: &RunOptions, cfg: &config::Config) -> Translator {
    let lang = i18n::resolve_language(opts.lang.as_deref(), Some(cfg.language.as_str()));
    Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref())
}
