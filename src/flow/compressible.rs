//! 압축성 유동(초킹 판정) 모델. 유량 계산에만 쓰인다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{FlowError, FlowResult};
use super::flow_state::GasConditions;
use super::mean_density;

/// 비열비 (고정)
pub const GAMMA: f64 = 1.4;

/// 유량 계산에서 선택된 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    /// 임계 압력비 이하, 음속 제한
    Choked,
    /// 아음속, 평균 밀도 모델로 계산
    Subsonic,
}

impl FlowRegime {
    pub fn label(&self) -> &'static str {
        match self {
            FlowRegime::Choked => "choked",
            FlowRegime::Subsonic => "subsonic",
        }
    }
}

/// 유량 계산 결과 [m³/s] 와 사용된 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRateSolution {
    pub flow_m3_s: f64,
    pub regime: FlowRegime,
}

/// 임계 압력비 (2/(γ+1))^(γ/(γ-1)). γ=1.4 에서 약 0.528.
pub fn critical_pressure_ratio(gamma: f64) -> f64 {
    (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0))
}

/// 출구/입구 압력비가 임계값 이하이면 초킹으로 본다.
pub fn is_choked(inlet_pa: f64, outlet_pa: f64) -> bool {
    outlet_pa / inlet_pa <= critical_pressure_ratio(GAMMA)
}

/// 초킹 유량 [m³/s]
///
/// Q = A·sqrt(γ·P1·ρ1 / M)·(2/(γ+1))^((γ+1)/(2(γ-1)))
pub fn choked_flow_rate(inlet_pa: f64, diameter_m: f64, gas: &GasConditions) -> f64 {
    let area = PI * diameter_m.powi(2) / 4.0;
    let rho1 = gas.density(inlet_pa);
    let expansion = (2.0 / (GAMMA + 1.0)).powf((GAMMA + 1.0) / (2.0 * (GAMMA - 1.0)));
    area * (GAMMA * inlet_pa * rho1 / gas.molar_mass).sqrt() * expansion
}

/// 압력비에 따라 초킹식 또는 평균 밀도식으로 유량을 구한다.
pub fn flow_rate(
    inlet_pa: f64,
    outlet_pa: f64,
    length_m: f64,
    diameter_m: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<FlowRateSolution> {
    if inlet_pa <= 0.0 {
        return Err(FlowError::DomainError {
            what: "inlet pressure must be positive",
        });
    }
    let ratio = outlet_pa / inlet_pa;
    let critical = critical_pressure_ratio(GAMMA);
    debug!(ratio, critical, "compressible flow rate");
    if ratio <= critical {
        Ok(FlowRateSolution {
            flow_m3_s: choked_flow_rate(inlet_pa, diameter_m, gas),
            regime: FlowRegime::Choked,
        })
    } else {
        let flow_m3_s =
            mean_density::flow_rate(inlet_pa, outlet_pa, length_m, diameter_m, friction_factor, gas)?;
        Ok(FlowRateSolution {
            flow_m3_s,
            regime: FlowRegime::Subsonic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_ratio_for_diatomic_gas() {
        let r = critical_pressure_ratio(GAMMA);
        assert!((r - 0.528_281_8).abs() < 1e-6);
    }

    #[test]
    fn low_ratio_takes_choked_branch() {
        let gas = GasConditions::new(0.028, 303.15);
        let sol = flow_rate(2.5e6, 1.0e6, 50.0, 0.01, 0.02, &gas).unwrap();
        assert_eq!(sol.regime, FlowRegime::Choked);
        assert_eq!(sol.flow_m3_s, choked_flow_rate(2.5e6, 0.01, &gas));
    }

    #[test]
    fn high_ratio_falls_back_to_mean_density() {
        let gas = GasConditions::new(0.028, 303.15);
        let sol = flow_rate(2.5e6, 2.0e6, 50.0, 0.01, 0.02, &gas).unwrap();
        assert_eq!(sol.regime, FlowRegime::Subsonic);
        let expected = mean_density::flow_rate(2.5e6, 2.0e6, 50.0, 0.01, 0.02, &gas).unwrap();
        assert_eq!(sol.flow_m3_s, expected);
    }

    #[test]
    fn choked_flow_ignores_outlet_pressure() {
        let gas = GasConditions::new(0.040, 293.15);
        let a = flow_rate(5.0e6, 1.0e6, 10.0, 0.006, 0.02, &gas).unwrap();
        let b = flow_rate(5.0e6, 0.5e6, 10.0, 0.006, 0.02, &gas).unwrap();
        assert_eq!(a, b);
    }
}
