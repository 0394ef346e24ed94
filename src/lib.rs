//! 주입 체어 증설 ROI 예측 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 엔진을 쓰게 한다.

pub mod app;
pub mod config;
pub mod gate;
pub mod i18n;
pub mod logger;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod ui_cli;

pub use projection::{compute, CapacityReference, ProjectionResult, YearRecord};
pub use scenario::{InputError, ScenarioInputs, UtilizationMode};
