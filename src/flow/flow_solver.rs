//! 계산 대상에 맞는 식을 골라 미지수를 구한다.
//!
//! 입력은 SI 단위 `FlowState`, 결과는 대상의 표시 단위
//! (직경 mm, 유량 LPM, 길이 m, 압력 bar)로 돌려준다.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::compressible::{self, FlowRegime};
use super::error::{FlowError, FlowResult};
use super::flow_state::{CalculationTarget, FlowInput, FlowState, GasConditions};
use super::mean_density;
use crate::gas::GasCatalog;
use crate::units::{
    convert_flow_rate, convert_length, convert_pressure, convert_temperature, FlowRateUnit,
    LengthUnit, PressureUnit, TemperatureUnit,
};

/// Darcy 마찰계수 기본값
pub const DEFAULT_FRICTION_FACTOR: f64 = 0.02;
/// 허용 최저 온도 [°C]
pub const MIN_TEMPERATURE_C: f64 = -50.0;

/// 유량 계산에 사용할 모델.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowRateModel {
    /// 임계 압력비 이하에서는 초킹식, 그 외에는 평균 밀도식
    #[default]
    Compressible,
    /// 항상 평균 밀도식
    MeanDensity,
}

/// 계산 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    pub friction_factor: f64,
    pub flow_rate_model: FlowRateModel,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            friction_factor: DEFAULT_FRICTION_FACTOR,
            flow_rate_model: FlowRateModel::default(),
        }
    }
}

/// 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub target: CalculationTarget,
    /// 대상의 표시 단위로 환산된 값
    pub value: f64,
    pub unit: &'static str,
    /// 유량 대상에서 압축성 모델을 쓴 경우의 유동 영역
    pub regime: Option<FlowRegime>,
    /// 유량 계산에 선택된 모델 (다른 대상에서는 옵션 값을 그대로 기록)
    pub model: FlowRateModel,
}

/// 기본 옵션(f = 0.02, 압축성 유량 모델)으로 미지수를 구한다.
pub fn solve(
    target: CalculationTarget,
    gas: &str,
    temperature_c: f64,
    known: &FlowState,
) -> FlowResult<f64> {
    solve_with(target, gas, temperature_c, known, &SolveOptions::default()).map(|s| s.value)
}

/// 문자열로 받은 계산 대상으로 `solve` 를 수행한다.
pub fn solve_str(
    target: &str,
    gas: &str,
    temperature_c: f64,
    known: &FlowState,
) -> FlowResult<f64> {
    let target = CalculationTarget::from_str(target)?;
    solve(target, gas, temperature_c, known)
}

/// 옵션을 지정해 미지수를 구하고 결과 정보를 함께 돌려준다.
pub fn solve_with(
    target: CalculationTarget,
    gas: &str,
    temperature_c: f64,
    known: &FlowState,
    options: &SolveOptions,
) -> FlowResult<Solution> {
    let molar_mass = GasCatalog::standard().lookup(gas)?;
    if !temperature_c.is_finite() || temperature_c < MIN_TEMPERATURE_C {
        warn!(temperature_c, "temperature rejected");
        return Err(FlowError::DomainError {
            what: "temperature must be at least -50 °C",
        });
    }
    let inputs = RequiredInputs::collect(target, known)?;
    let temperature_k =
        convert_temperature(temperature_c, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    let conditions = GasConditions::new(molar_mass, temperature_k);
    debug!(
        calc = %target,
        gas,
        temperature_k,
        specific_gas_constant = conditions.specific_gas_constant,
        "solving"
    );

    let f = options.friction_factor;
    let mut regime = None;
    let value = match target {
        CalculationTarget::Diameter => {
            let d = mean_density::diameter(
                inputs.inlet_pa,
                inputs.outlet_pa,
                inputs.length_m,
                inputs.flow_m3_s,
                f,
                &conditions,
            )?;
            convert_length(d, LengthUnit::Meter, LengthUnit::Millimeter)
        }
        CalculationTarget::FlowRate => {
            let q = match options.flow_rate_model {
                FlowRateModel::Compressible => {
                    let sol = compressible::flow_rate(
                        inputs.inlet_pa,
                        inputs.outlet_pa,
                        inputs.length_m,
                        inputs.diameter_m,
                        f,
                        &conditions,
                    )?;
                    regime = Some(sol.regime);
                    sol.flow_m3_s
                }
                FlowRateModel::MeanDensity => mean_density::flow_rate(
                    inputs.inlet_pa,
                    inputs.outlet_pa,
                    inputs.length_m,
                    inputs.diameter_m,
                    f,
                    &conditions,
                )?,
            };
            convert_flow_rate(
                q,
                FlowRateUnit::CubicMeterPerSecond,
                FlowRateUnit::LitersPerMinute,
            )
        }
        CalculationTarget::Length => mean_density::length(
            inputs.inlet_pa,
            inputs.outlet_pa,
            inputs.diameter_m,
            inputs.flow_m3_s,
            f,
            &conditions,
        )?,
        CalculationTarget::InletPressure => {
            let p = mean_density::inlet_pressure(
                inputs.outlet_pa,
                inputs.length_m,
                inputs.diameter_m,
                inputs.flow_m3_s,
                f,
                &conditions,
            )?;
            convert_pressure(p, PressureUnit::Pascal, PressureUnit::Bar)
        }
        CalculationTarget::OutletPressure => {
            let p = mean_density::outlet_pressure(
                inputs.inlet_pa,
                inputs.length_m,
                inputs.diameter_m,
                inputs.flow_m3_s,
                f,
                &conditions,
            )?;
            convert_pressure(p, PressureUnit::Pascal, PressureUnit::Bar)
        }
    };

    if !value.is_finite() || value <= 0.0 {
        warn!(calc = %target, value, "non-physical result");
        return Err(FlowError::DomainError {
            what: "result is not a finite positive value",
        });
    }
    debug!(calc = %target, value, "solved");
    Ok(Solution {
        target,
        value,
        unit: target.unit(),
        regime,
        model: options.flow_rate_model,
    })
}

/// 대상별 필수 입력. 미지수 자리는 0 으로 두고 사용하지 않는다.
#[derive(Debug, Default)]
struct RequiredInputs {
    inlet_pa: f64,
    outlet_pa: f64,
    length_m: f64,
    diameter_m: f64,
    flow_m3_s: f64,
}

impl RequiredInputs {
    /// 필수 입력표를 계산 시작 시점에 한 번에 검사한다.
    fn collect(target: CalculationTarget, known: &FlowState) -> FlowResult<Self> {
        let mut inputs = Self::default();
        for input in target.required_inputs() {
            let value = known.require(input).inspect_err(|_| {
                warn!(calc = %target, %input, "required input missing");
            })?;
            match input {
                FlowInput::InletPressure => inputs.inlet_pa = value,
                FlowInput::OutletPressure => inputs.outlet_pa = value,
                FlowInput::Length => inputs.length_m = value,
                FlowInput::Diameter => inputs.diameter_m = value,
                FlowInput::FlowRate => inputs.flow_m3_s = value,
            }
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state() -> FlowState {
        FlowState::new()
            .with_inlet_pressure_pa(2.5e6)
            .with_outlet_pressure_pa(1.0e6)
            .with_length_m(50.0)
            .with_diameter_m(0.01)
            .with_flow_rate_m3_s(16.0 / 60_000.0)
    }

    #[test]
    fn unknown_field_is_ignored_when_present() {
        let with_d = solve(CalculationTarget::Diameter, "N2", 30.0, &full_state()).unwrap();
        let mut without_d = full_state();
        without_d.diameter_m = None;
        let plain = solve(CalculationTarget::Diameter, "N2", 30.0, &without_d).unwrap();
        assert_eq!(with_d, plain);
    }

    #[test]
    fn cold_temperature_is_rejected() {
        let res = solve(CalculationTarget::Length, "N2", -60.0, &full_state());
        assert!(matches!(res, Err(FlowError::DomainError { .. })));
    }

    #[test]
    fn unknown_gas_checked_first() {
        let res = solve(CalculationTarget::Length, "Xenon", 30.0, &FlowState::new());
        assert_eq!(
            res,
            Err(FlowError::UnknownGas {
                name: "Xenon".into()
            })
        );
    }

    #[test]
    fn flow_rate_reports_regime() {
        let sol = solve_with(
            CalculationTarget::FlowRate,
            "N2",
            30.0,
            &full_state(),
            &SolveOptions::default(),
        )
        .unwrap();
        assert_eq!(sol.regime, Some(FlowRegime::Choked));
        assert_eq!(sol.unit, "LPM");

        let mean = solve_with(
            CalculationTarget::FlowRate,
            "N2",
            30.0,
            &full_state(),
            &SolveOptions {
                flow_rate_model: FlowRateModel::MeanDensity,
                ..SolveOptions::default()
            },
        )
        .unwrap();
        assert_eq!(mean.regime, None);
        assert_eq!(mean.model, FlowRateModel::MeanDensity);
        assert_eq!(sol.model, FlowRateModel::Compressible);
        assert_ne!(mean.value, sol.value);
    }
}
