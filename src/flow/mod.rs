//! 배관 가스 유동 계산 모듈 모음.

pub mod compressible;
pub mod error;
pub mod flow_solver;
pub mod flow_state;
pub mod mean_density;

pub use compressible::{FlowRateSolution, FlowRegime};
pub use error::{FlowError, FlowResult};
pub use flow_solver::*;
pub use flow_state::{CalculationTarget, FlowInput, FlowState, GasConditions, UserInputs};
