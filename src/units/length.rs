use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다. 내경은 mm, 배관 길이는 m 로 입력받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
}

const MM_PER_M: f64 = 1000.0;

/// 주어진 길이를 미터로 변환한다.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / MM_PER_M,
    }
}

/// 미터 값을 원하는 단위로 변환한다.
pub fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * MM_PER_M,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
        }
    }
}
