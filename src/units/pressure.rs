use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 절대압 Pa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
}

pub const PA_PER_BAR: f64 = 100_000.0;

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Pascal => value,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Pascal => value_pa,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "Pa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_to_pascal() {
        assert_eq!(to_pascal(25.0, PressureUnit::Bar), 2_500_000.0);
        assert_eq!(from_pascal(1_000_000.0, PressureUnit::Bar), 10.0);
    }
}
