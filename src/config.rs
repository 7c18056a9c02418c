use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::flow::FlowRateModel;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 입력이 없을 때 사용할 가스
    pub default_gas: String,
    /// 입력이 없을 때 사용할 온도 [°C]
    pub default_temperature_c: f64,
    /// 유량 계산 모델
    pub flow_rate_model: FlowRateModel,
    /// 결과 표시 소수 자리수
    pub decimals: usize,
    /// RUST_LOG 가 없을 때 쓰는 로그 레벨
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_gas: "N2".to_string(),
            default_temperature_c: 30.0,
            flow_rate_model: FlowRateModel::Compressible,
            decimals: 2,
            log_level: "warn".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
