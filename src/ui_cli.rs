use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::app::AppError;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::flow::{CalculationTarget, FlowInput, FlowRateModel, Solution, UserInputs};
use crate::gas::GasCatalog;

/// 입력 폼 기본값 (bar, bar, m, mm, LPM)
const DEFAULT_INLET_BAR: f64 = 25.0;
const DEFAULT_OUTLET_BAR: f64 = 10.0;
const DEFAULT_LENGTH_M: f64 = 50.0;
const DEFAULT_DIAMETER_MM: f64 = 10.0;
const DEFAULT_FLOW_LPM: f64 = 16.0;

/// 명령행 인자. `--target` 이 없으면 대화형으로 입력받는다.
#[derive(Debug, Parser)]
#[command(name = "tube_calculator")]
#[command(about = "Tube Calculator - gas pipe sizing, flow and pressure drop", long_about = None)]
pub struct CliArgs {
    /// Gas type (e.g. N2, Ar, "Forming Gas1")
    #[arg(short, long)]
    pub gas: Option<String>,
    /// Operating temperature [°C]
    #[arg(short = 'T', long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,
    /// Quantity to calculate: diameter, flow-rate, length, inlet-pressure, outlet-pressure
    #[arg(short, long)]
    pub target: Option<String>,
    /// Inlet pressure [bar]
    #[arg(long)]
    pub inlet_pressure: Option<f64>,
    /// Outlet pressure [bar]
    #[arg(long)]
    pub outlet_pressure: Option<f64>,
    /// Tube length [m]
    #[arg(long)]
    pub length: Option<f64>,
    /// Tube inner diameter [mm]
    #[arg(long)]
    pub diameter: Option<f64>,
    /// Flow rate [LPM]
    #[arg(long)]
    pub flow_rate: Option<f64>,
    /// Flow rate model (overrides config)
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,
    /// Path to the config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
    /// List available gases and exit
    #[arg(long)]
    pub list_gases: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Compressible,
    MeanDensity,
}

impl From<ModelArg> for FlowRateModel {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Compressible => FlowRateModel::Compressible,
            ModelArg::MeanDensity => FlowRateModel::MeanDensity,
        }
    }
}

/// 한 번의 계산 요청 (사용자 단위).
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub gas: String,
    pub temperature_c: f64,
    pub target: CalculationTarget,
    pub inputs: UserInputs,
}

impl SolveRequest {
    /// 명령행 인자로부터 요청을 만든다. 미지수 자리의 값은 버린다.
    pub fn from_args(args: &CliArgs, target: &str, cfg: &Config) -> Result<Self, AppError> {
        let target = CalculationTarget::from_str(target)?;
        let inputs = UserInputs {
            inlet_pressure_bar: args.inlet_pressure,
            outlet_pressure_bar: args.outlet_pressure,
            length_m: args.length,
            diameter_mm: args.diameter,
            flow_rate_lpm: args.flow_rate,
        };
        Ok(Self {
            gas: args.gas.clone().unwrap_or_else(|| cfg.default_gas.clone()),
            temperature_c: args.temperature.unwrap_or(cfg.default_temperature_c),
            target,
            inputs: without_unknown(inputs, target),
        })
    }
}

fn without_unknown(mut inputs: UserInputs, target: CalculationTarget) -> UserInputs {
    match target.unknown() {
        FlowInput::InletPressure => inputs.inlet_pressure_bar = None,
        FlowInput::OutletPressure => inputs.outlet_pressure_bar = None,
        FlowInput::Length => inputs.length_m = None,
        FlowInput::Diameter => inputs.diameter_mm = None,
        FlowInput::FlowRate => inputs.flow_rate_lpm = None,
    }
    inputs
}

/// 대화형으로 요청을 입력받는다. 빈 입력은 기본값을 사용한다.
pub fn prompt_request<R: BufRead>(
    input: &mut R,
    cfg: &Config,
) -> Result<SolveRequest, AppError> {
    println!("\n=== Tube Calculator ===");
    let gas = prompt_gas(input, &cfg.default_gas)?;
    let target = prompt_target(input)?;
    let temperature_c = read_f64_or(input, "Temperature (°C)", cfg.default_temperature_c)?;

    let mut inputs = UserInputs::default();
    for field in target.required_inputs() {
        let (label, default) = match field {
            FlowInput::InletPressure => ("Inlet Pressure (bar)", DEFAULT_INLET_BAR),
            FlowInput::OutletPressure => ("Outlet Pressure (bar)", DEFAULT_OUTLET_BAR),
            FlowInput::Length => ("Tube Length (m)", DEFAULT_LENGTH_M),
            FlowInput::Diameter => ("Tube Inner Diameter (mm)", DEFAULT_DIAMETER_MM),
            FlowInput::FlowRate => ("Flow Rate (LPM)", DEFAULT_FLOW_LPM),
        };
        let value = Some(read_f64_or(input, label, default)?);
        match field {
            FlowInput::InletPressure => inputs.inlet_pressure_bar = value,
            FlowInput::OutletPressure => inputs.outlet_pressure_bar = value,
            FlowInput::Length => inputs.length_m = value,
            FlowInput::Diameter => inputs.diameter_mm = value,
            FlowInput::FlowRate => inputs.flow_rate_lpm = value,
        }
    }
    Ok(SolveRequest {
        gas,
        temperature_c,
        target,
        inputs,
    })
}

fn prompt_gas<R: BufRead>(input: &mut R, default_gas: &str) -> Result<String, AppError> {
    let names: Vec<&str> = GasCatalog::standard().names().collect();
    for (i, name) in names.iter().enumerate() {
        println!("{:>2}) {name}", i + 1);
    }
    loop {
        let sel = read_line(input, &format!("Select Gas Type [{default_gas}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default_gas.to_string());
        }
        if let Some(name) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| names.get(i))
        {
            return Ok(name.to_string());
        }
        if names.contains(&sel) {
            return Ok(sel.to_string());
        }
        println!("Unknown gas. Choose a number from the list.");
    }
}

fn prompt_target<R: BufRead>(input: &mut R) -> Result<CalculationTarget, AppError> {
    for (i, target) in CalculationTarget::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, target.label());
    }
    loop {
        let sel = read_line(input, "Select Calculation Type: ")?;
        let sel = sel.trim();
        let by_number = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| CalculationTarget::ALL.get(i).copied());
        if let Some(target) = by_number.or_else(|| CalculationTarget::from_str(sel).ok()) {
            return Ok(target);
        }
        println!("Invalid selection. Try again.");
    }
}

/// 계산 결과 보고서를 만든다.
pub fn render_report(request: &SolveRequest, solution: &Solution, decimals: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Calculation Type: {}\n", request.target.label()));
    out.push_str(&format!("- Gas Type: {}\n", request.gas));
    out.push_str(&format!("- Temperature: {} °C\n", request.temperature_c));
    let inputs = &request.inputs;
    let lines = [
        ("Flow Rate", inputs.flow_rate_lpm, "LPM"),
        ("Tube Diameter", inputs.diameter_mm, "mm"),
        ("Tube Length", inputs.length_m, "m"),
        ("Inlet Pressure", inputs.inlet_pressure_bar, "bar"),
        ("Outlet Pressure", inputs.outlet_pressure_bar, "bar"),
    ];
    for (label, value, unit) in lines {
        if let Some(v) = value {
            out.push_str(&format!("- {label}: {v} {unit}\n"));
        }
    }
    out.push_str("---\n");
    let qualifier = match solution.regime {
        Some(regime) => format!(" (compressible, {})", regime.label()),
        None => String::new(),
    };
    out.push_str(&format!(
        "Calculated {}{qualifier}: {:.*} {}\n",
        solution.target.label(),
        decimals,
        solution.value,
        solution.unit
    ));
    out
}

/// 가스 목록과 몰질량을 출력용 문자열로 만든다.
pub fn render_gas_list() -> String {
    GasCatalog::standard()
        .species()
        .iter()
        .map(|s| format!("{:<14} {:.5} kg/mol\n", s.name, s.molar_mass))
        .collect()
}

pub fn confirm<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool, AppError> {
    let ans = read_line(input, prompt)?;
    Ok(matches!(ans.trim(), "y" | "Y" | "yes"))
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) 빈 문자열 대신 오류를 돌려준다.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended",
        )));
    }
    Ok(buf)
}

fn read_f64_or<R: BufRead>(input: &mut R, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, &format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Enter a number."),
        }
    }
}
