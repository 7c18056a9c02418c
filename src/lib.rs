//! 가스 배관 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod config;
pub mod flow;
pub mod gas;
pub mod ui_cli;
pub mod units;
