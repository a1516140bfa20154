//! CLI 入口定义

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(version)]
#[command(about = "Lightweight task tracking with local persistence")]
pub struct Cli {}
