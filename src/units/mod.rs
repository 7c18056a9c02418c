//! 입력 경계에서 사용하는 고정 단위 변환 모음.
//! bar↔Pa, mm↔m, LPM↔m³/s, °C↔K 만 다룬다.

pub mod flow_rate;
pub mod length;
pub mod pressure;
pub mod temperature;

pub use flow_rate::{convert_flow_rate, FlowRateUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
