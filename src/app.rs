use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::flow::{self, FlowError, FlowState, SolveOptions};
use crate::ui_cli::{self, CliArgs, SolveRequest};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Flow(#[from] FlowError),
}

/// 요청 하나를 계산하고 보고서를 돌려준다.
pub fn execute(
    request: &SolveRequest,
    cfg: &Config,
    options: &SolveOptions,
) -> Result<String, AppError> {
    let state = FlowState::from_user_units(&request.inputs);
    let solution = flow::solve_with(
        request.target,
        &request.gas,
        request.temperature_c,
        &state,
        options,
    )?;
    info!(
        calc = %request.target,
        value = solution.value,
        unit = solution.unit,
        "calculated"
    );
    Ok(ui_cli::render_report(request, &solution, cfg.decimals))
}

/// CLI 애플리케이션을 실행한다.
pub fn run(args: &CliArgs, cfg: &Config) -> Result<(), AppError> {
    if args.list_gases {
        print!("{}", ui_cli::render_gas_list());
        return Ok(());
    }
    let options = SolveOptions {
        flow_rate_model: args.model.map(Into::into).unwrap_or(cfg.flow_rate_model),
        ..SolveOptions::default()
    };

    if let Some(target) = args.target.as_deref() {
        let request = SolveRequest::from_args(args, target, cfg)?;
        print!("{}", execute(&request, cfg, &options)?);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    loop {
        let request = ui_cli::prompt_request(&mut input, cfg)?;
        match execute(&request, cfg, &options) {
            Ok(report) => print!("\n{report}"),
            // 대화형에서는 계산 오류를 보여주고 계속한다
            Err(AppError::Flow(err)) => println!("\nPlease check the inputs: {err}"),
            Err(err) => return Err(err),
        }
        if !ui_cli::confirm(&mut input, "\nCalculate again? (y/N): ")? {
            break;
        }
    }
    Ok(())
}
