//! 연도별 재무 예측 엔진. 단계별 계산 모듈과 이를 묶는 `compute`로 구성한다.

pub mod capital;
pub mod cashflow;
pub mod engine;
pub mod staffing;
pub mod visits;

pub use engine::*;
