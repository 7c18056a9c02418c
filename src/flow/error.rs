//! 유량 계산 오류.

use thiserror::Error;

use super::flow_state::FlowInput;

/// 유량 계산 결과 타입.
pub type FlowResult<T> = Result<T, FlowError>;

/// 한 번의 계산 호출 안에서 발생하는 오류를 분류한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// 가스 표에 없는 가스 이름
    #[error("unknown gas: {name}")]
    UnknownGas { name: String },

    /// 필요한 입력이 없거나 0 이하
    #[error("missing or non-positive input: {input}")]
    MissingInput { input: FlowInput },

    /// 다섯 가지 계산 대상 중 어느 것도 아님
    #[error("invalid calculation target: {name}")]
    InvalidTarget { name: String },

    /// 양의 해를 구할 수 없는 물리적 조건
    #[error("no physical solution: {what}")]
    DomainError { what: &'static str },
}
