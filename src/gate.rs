//! 계산 화면에 들어가기 전 접근을 확인하는 게이트.
//! 예측 엔진은 게이트를 알지 못하며 호출자가 먼저 통과시켜야 한다.

use thiserror::Error;

/// 접근 확인 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("비밀번호가 필요합니다")]
    MissingCredential,
    #[error("비밀번호가 일치하지 않습니다")]
    Denied,
}

/// 계산 전에 호출되는 접근 확인 경계.
pub trait AccessGate {
    fn check(&self, credential: Option<&str>) -> Result<(), GateError>;
}

/// 항상 통과하는 게이트. 공유 비밀번호가 설정되지 않았을 때 쓴다.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AccessGate for OpenGate {
    fn check(&self, _credential: Option<&str>) -> Result<(), GateError> {
        Ok(())
    }
}

/// 설정 파일의 공유 비밀번호와 정확히 일치할 때만 통과한다.
#[derive(Debug, Clone)]
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AccessGate for SharedSecretGate {
    fn check(&self, credential: Option<&str>) -> Result<(), GateError> {
        match credential {
            None => Err(GateError::MissingCredential),
            Some(c) if c == self.secret => Ok(()),
            Some(_) => Err(GateError::Denied),
        }
    }
}

/// 설정값에 맞는 게이트를 만든다. 빈 문자열은 비밀번호 없음으로 본다.
pub fn from_secret(secret: Option<&str>) -> Box<dyn AccessGate> {
    match secret.map(str::trim) {
        Some(s) if !s.is_empty() => Box::new(SharedSecretGate::new(s)),
        _ => Box::new(OpenGate),
    }
}
