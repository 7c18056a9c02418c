use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    /// 리터/분 (LPM)
    LitersPerMinute,
    CubicMeterPerSecond,
}

/// 1 m³/s = 60000 L/min
pub const LPM_PER_M3_S: f64 = 60_000.0;

/// 주어진 유량을 m³/s 로 변환한다.
pub fn to_cubic_meter_per_second(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::LitersPerMinute => value / LPM_PER_M3_S,
        FlowRateUnit::CubicMeterPerSecond => value,
    }
}

/// m³/s 값을 원하는 단위로 변환한다.
pub fn from_cubic_meter_per_second(value_m3_s: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::LitersPerMinute => value_m3_s * LPM_PER_M3_S,
        FlowRateUnit::CubicMeterPerSecond => value_m3_s,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    let m3_s = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(m3_s, to)
}

impl FlowRateUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowRateUnit::LitersPerMinute => "LPM",
            FlowRateUnit::CubicMeterPerSecond => "m3/s",
        }
    }
}
