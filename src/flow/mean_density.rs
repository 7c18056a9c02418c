//! 평균 밀도 모델 (Darcy-Weisbach 기반).
//!
//! Q² = π²·ΔP·d⁵ / (8·f·L·ρ)
//!
//! 모든 값은 SI(Pa, m, m³/s). 직경/길이/유량은 양 끝 밀도의 산술 평균을,
//! 입구/출구 압력은 알고 있는 쪽 한 끝의 밀도를 사용한다.

use std::f64::consts::PI;

use tracing::debug;

use super::error::{FlowError, FlowResult};
use super::flow_state::GasConditions;

/// 양 끝 이상기체 밀도의 산술 평균 [kg/m³]
pub fn average_density(inlet_pa: f64, outlet_pa: f64, gas: &GasConditions) -> f64 {
    (gas.density(inlet_pa) + gas.density(outlet_pa)) / 2.0
}

fn pressure_drop(inlet_pa: f64, outlet_pa: f64) -> FlowResult<f64> {
    let delta_p = inlet_pa - outlet_pa;
    if delta_p > 0.0 {
        Ok(delta_p)
    } else {
        Err(FlowError::DomainError {
            what: "inlet pressure must exceed outlet pressure",
        })
    }
}

/// 필요한 내경 [m]
pub fn diameter(
    inlet_pa: f64,
    outlet_pa: f64,
    length_m: f64,
    flow_m3_s: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<f64> {
    let delta_p = pressure_drop(inlet_pa, outlet_pa)?;
    let rho_avg = average_density(inlet_pa, outlet_pa, gas);
    debug!(delta_p, rho_avg, "diameter (mean density)");
    let radicand =
        8.0 * friction_factor * length_m * rho_avg * flow_m3_s.powi(2) / (PI.powi(2) * delta_p);
    Ok(radicand.powf(1.0 / 5.0))
}

/// 통과 유량 [m³/s]
pub fn flow_rate(
    inlet_pa: f64,
    outlet_pa: f64,
    length_m: f64,
    diameter_m: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<f64> {
    let delta_p = pressure_drop(inlet_pa, outlet_pa)?;
    let rho_avg = average_density(inlet_pa, outlet_pa, gas);
    debug!(delta_p, rho_avg, "flow rate (mean density)");
    let q_squared =
        PI.powi(2) * delta_p * diameter_m.powi(5) / (8.0 * friction_factor * length_m * rho_avg);
    Ok(q_squared.sqrt())
}

/// 허용 배관 길이 [m]
pub fn length(
    inlet_pa: f64,
    outlet_pa: f64,
    diameter_m: f64,
    flow_m3_s: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<f64> {
    let delta_p = pressure_drop(inlet_pa, outlet_pa)?;
    let rho_avg = average_density(inlet_pa, outlet_pa, gas);
    debug!(delta_p, rho_avg, "length (mean density)");
    Ok(PI.powi(2) * delta_p * diameter_m.powi(5)
        / (8.0 * friction_factor * rho_avg * flow_m3_s.powi(2)))
}

/// 단일 끝 밀도 기준 마찰 압력강하 [Pa]
fn friction_drop(rho: f64, length_m: f64, diameter_m: f64, flow_m3_s: f64, f: f64) -> f64 {
    8.0 * f * length_m * rho * flow_m3_s.powi(2) / (PI.powi(2) * diameter_m.powi(5))
}

/// 필요한 입구 압력 [Pa]. 출구 밀도를 사용한다.
pub fn inlet_pressure(
    outlet_pa: f64,
    length_m: f64,
    diameter_m: f64,
    flow_m3_s: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<f64> {
    let rho_out = gas.density(outlet_pa);
    let drop = friction_drop(rho_out, length_m, diameter_m, flow_m3_s, friction_factor);
    debug!(rho_out, drop, "inlet pressure (outlet density)");
    Ok(outlet_pa + drop)
}

/// 예상 출구 압력 [Pa]. 입구 밀도를 사용한다.
pub fn outlet_pressure(
    inlet_pa: f64,
    length_m: f64,
    diameter_m: f64,
    flow_m3_s: f64,
    friction_factor: f64,
    gas: &GasConditions,
) -> FlowResult<f64> {
    let rho_in = gas.density(inlet_pa);
    let drop = friction_drop(rho_in, length_m, diameter_m, flow_m3_s, friction_factor);
    debug!(rho_in, drop, "outlet pressure (inlet density)");
    let outlet = inlet_pa - drop;
    if outlet > 0.0 {
        Ok(outlet)
    } else {
        Err(FlowError::DomainError {
            what: "pressure drop exceeds inlet pressure",
        })
    }
}
