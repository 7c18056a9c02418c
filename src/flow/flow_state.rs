//! 한 번의 계산에 쓰이는 입력 상태와 계산 대상 정의.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FlowError;
use crate::units::{
    convert_flow_rate, convert_length, convert_pressure, FlowRateUnit, LengthUnit, PressureUnit,
};

/// 계산기가 받는 다섯 가지 물리 입력.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowInput {
    InletPressure,
    OutletPressure,
    Length,
    Diameter,
    FlowRate,
}

impl fmt::Display for FlowInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowInput::InletPressure => "inlet pressure",
            FlowInput::OutletPressure => "outlet pressure",
            FlowInput::Length => "tube length",
            FlowInput::Diameter => "inner diameter",
            FlowInput::FlowRate => "flow rate",
        };
        f.write_str(s)
    }
}

/// 무엇을 구할지(미지수)를 선택한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationTarget {
    Diameter,
    FlowRate,
    Length,
    InletPressure,
    OutletPressure,
}

impl CalculationTarget {
    pub const ALL: [CalculationTarget; 5] = [
        CalculationTarget::Diameter,
        CalculationTarget::FlowRate,
        CalculationTarget::Length,
        CalculationTarget::InletPressure,
        CalculationTarget::OutletPressure,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CalculationTarget::Diameter => "diameter",
            CalculationTarget::FlowRate => "flow-rate",
            CalculationTarget::Length => "length",
            CalculationTarget::InletPressure => "inlet-pressure",
            CalculationTarget::OutletPressure => "outlet-pressure",
        }
    }

    /// 화면 표시용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            CalculationTarget::Diameter => "Tube Diameter",
            CalculationTarget::FlowRate => "Flow Rate",
            CalculationTarget::Length => "Tube Length",
            CalculationTarget::InletPressure => "Inlet Pressure",
            CalculationTarget::OutletPressure => "Outlet Pressure",
        }
    }

    /// 결과값의 단위 (mm, LPM, m, bar).
    pub fn unit(&self) -> &'static str {
        match self {
            CalculationTarget::Diameter => LengthUnit::Millimeter.symbol(),
            CalculationTarget::FlowRate => FlowRateUnit::LitersPerMinute.symbol(),
            CalculationTarget::Length => LengthUnit::Meter.symbol(),
            CalculationTarget::InletPressure | CalculationTarget::OutletPressure => {
                PressureUnit::Bar.symbol()
            }
        }
    }

    /// 이 대상에 해당하는 입력 필드(미지수).
    pub fn unknown(&self) -> FlowInput {
        match self {
            CalculationTarget::Diameter => FlowInput::Diameter,
            CalculationTarget::FlowRate => FlowInput::FlowRate,
            CalculationTarget::Length => FlowInput::Length,
            CalculationTarget::InletPressure => FlowInput::InletPressure,
            CalculationTarget::OutletPressure => FlowInput::OutletPressure,
        }
    }

    /// 대상별 필수 입력 (가스, 온도 제외).
    pub fn required_inputs(&self) -> [FlowInput; 4] {
        use FlowInput::*;
        match self {
            CalculationTarget::Diameter => [InletPressure, OutletPressure, Length, FlowRate],
            CalculationTarget::FlowRate => [InletPressure, OutletPressure, Length, Diameter],
            CalculationTarget::Length => [InletPressure, OutletPressure, Diameter, FlowRate],
            CalculationTarget::InletPressure => [OutletPressure, Length, Diameter, FlowRate],
            CalculationTarget::OutletPressure => [InletPressure, Length, Diameter, FlowRate],
        }
    }
}

impl fmt::Display for CalculationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculationTarget {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "diameter" | "tubediameter" | "d" => Ok(CalculationTarget::Diameter),
            "flowrate" | "flow" | "q" => Ok(CalculationTarget::FlowRate),
            "length" | "tubelength" | "l" => Ok(CalculationTarget::Length),
            "inletpressure" | "pin" => Ok(CalculationTarget::InletPressure),
            "outletpressure" | "pout" => Ok(CalculationTarget::OutletPressure),
            _ => Err(FlowError::InvalidTarget { name: s.to_string() }),
        }
    }
}

/// 사용자 단위(bar, m, mm, LPM)로 받은 입력값.
#[derive(Debug, Clone, Default)]
pub struct UserInputs {
    pub inlet_pressure_bar: Option<f64>,
    pub outlet_pressure_bar: Option<f64>,
    pub length_m: Option<f64>,
    pub diameter_mm: Option<f64>,
    pub flow_rate_lpm: Option<f64>,
}

/// SI 단위로 환산된 한 번의 계산 입력. 요청마다 새로 만들고 버린다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    /// 입구 압력 [Pa]
    pub inlet_pressure_pa: Option<f64>,
    /// 출구 압력 [Pa]
    pub outlet_pressure_pa: Option<f64>,
    /// 배관 길이 [m]
    pub length_m: Option<f64>,
    /// 내경 [m]
    pub diameter_m: Option<f64>,
    /// 체적 유량 [m³/s]
    pub flow_rate_m3_s: Option<f64>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경계 단위 변환(bar→Pa, mm→m, LPM→m³/s)을 적용한다.
    pub fn from_user_units(inputs: &UserInputs) -> Self {
        Self {
            inlet_pressure_pa: inputs
                .inlet_pressure_bar
                .map(|p| convert_pressure(p, PressureUnit::Bar, PressureUnit::Pascal)),
            outlet_pressure_pa: inputs
                .outlet_pressure_bar
                .map(|p| convert_pressure(p, PressureUnit::Bar, PressureUnit::Pascal)),
            length_m: inputs.length_m,
            diameter_m: inputs
                .diameter_mm
                .map(|d| convert_length(d, LengthUnit::Millimeter, LengthUnit::Meter)),
            flow_rate_m3_s: inputs
                .flow_rate_lpm
                .map(|q| {
                    convert_flow_rate(
                        q,
                        FlowRateUnit::LitersPerMinute,
                        FlowRateUnit::CubicMeterPerSecond,
                    )
                }),
        }
    }

    pub fn with_inlet_pressure_pa(mut self, value: f64) -> Self {
        self.inlet_pressure_pa = Some(value);
        self
    }

    pub fn with_outlet_pressure_pa(mut self, value: f64) -> Self {
        self.outlet_pressure_pa = Some(value);
        self
    }

    pub fn with_length_m(mut self, value: f64) -> Self {
        self.length_m = Some(value);
        self
    }

    pub fn with_diameter_m(mut self, value: f64) -> Self {
        self.diameter_m = Some(value);
        self
    }

    pub fn with_flow_rate_m3_s(mut self, value: f64) -> Self {
        self.flow_rate_m3_s = Some(value);
        self
    }

    pub fn get(&self, input: FlowInput) -> Option<f64> {
        match input {
            FlowInput::InletPressure => self.inlet_pressure_pa,
            FlowInput::OutletPressure => self.outlet_pressure_pa,
            FlowInput::Length => self.length_m,
            FlowInput::Diameter => self.diameter_m,
            FlowInput::FlowRate => self.flow_rate_m3_s,
        }
    }

    /// 필수 입력을 꺼낸다. 없거나, 유한한 양수가 아니면 `MissingInput`.
    pub fn require(&self, input: FlowInput) -> Result<f64, FlowError> {
        match self.get(input) {
            Some(v) if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err(FlowError::MissingInput { input }),
        }
    }
}

/// 보편 기체상수 [J/(mol·K)]
pub const R_UNIVERSAL: f64 = 8.314;

/// 가스와 온도로부터 유도되는 값. 모든 계산 분기에서 동일하게 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasConditions {
    /// 몰질량 [kg/mol]
    pub molar_mass: f64,
    /// 절대 온도 [K]
    pub temperature_k: f64,
    /// 비기체상수 Rs = R / M [J/(kg·K)]
    pub specific_gas_constant: f64,
}

impl GasConditions {
    pub fn new(molar_mass: f64, temperature_k: f64) -> Self {
        Self {
            molar_mass,
            temperature_k,
            specific_gas_constant: R_UNIVERSAL / molar_mass,
        }
    }

    /// 이상기체 밀도 ρ = P / (Rs·T) [kg/m³]
    pub fn density(&self, pressure_pa: f64) -> f64 {
        pressure_pa / (self.specific_gas_constant * self.temperature_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_inputs_never_contain_unknown() {
        for target in CalculationTarget::ALL {
            assert!(!target.required_inputs().contains(&target.unknown()));
        }
    }

    #[test]
    fn parses_labels_and_keys() {
        assert_eq!(
            "Tube Diameter".parse::<CalculationTarget>().unwrap(),
            CalculationTarget::Diameter
        );
        assert_eq!(
            "outlet-pressure".parse::<CalculationTarget>().unwrap(),
            CalculationTarget::OutletPressure
        );
        assert!(matches!(
            "Velocity".parse::<CalculationTarget>(),
            Err(FlowError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn require_rejects_non_positive_and_nan() {
        let state = FlowState::new()
            .with_length_m(0.0)
            .with_diameter_m(f64::NAN)
            .with_flow_rate_m3_s(1e-4);
        assert!(state.require(FlowInput::Length).is_err());
        assert!(state.require(FlowInput::Diameter).is_err());
        assert!(state.require(FlowInput::InletPressure).is_err());
        assert_eq!(state.require(FlowInput::FlowRate), Ok(1e-4));
    }

    #[test]
    fn nitrogen_specific_gas_constant() {
        let cond = GasConditions::new(0.028, 303.15);
        assert!((cond.specific_gas_constant - 296.928_571).abs() < 1e-5);
        let rho = cond.density(2_500_000.0);
        assert!((rho - 2_500_000.0 / (296.928_571_428_571_4 * 303.15)).abs() < 1e-9);
    }

    #[test]
    fn user_units_are_converted_to_si() {
        let state = FlowState::from_user_units(&UserInputs {
            inlet_pressure_bar: Some(25.0),
            outlet_pressure_bar: Some(10.0),
            length_m: Some(50.0),
            diameter_mm: Some(10.0),
            flow_rate_lpm: Some(16.0),
        });
        assert_eq!(state.inlet_pressure_pa, Some(2_500_000.0));
        assert_eq!(state.outlet_pressure_pa, Some(1_000_000.0));
        assert_eq!(state.length_m, Some(50.0));
        assert_eq!(state.diameter_m, Some(0.01));
        let q = state.flow_rate_m3_s.unwrap();
        assert!((q - 16.0 / 60_000.0).abs() < 1e-15);
    }
}
