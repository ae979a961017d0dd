//! landing：根据 JSON/CSV 按钮列表生成静态落地页（index.html + index.css）

mod cli;
mod commands;
mod config;
mod grid;
mod markup;
mod record;
mod render;
mod templates;
mod utils;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    commands::run(cli)
}
