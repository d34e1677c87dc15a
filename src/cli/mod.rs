//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 从 CRYSTAL 输出文件生成新的 .d12 输入文件
//! - `inspect`:  解析输出文件并打印结构摘要
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, inspect

pub mod generate;
pub mod inspect;

use clap::{Parser, Subcommand};

/// Crysgen - CRYSTAL23 性质计算输入文件生成器
#[derive(Parser)]
#[command(name = "crysgen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Generate CRYSTAL23 property input decks from calculation output files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a follow-up .d12 input deck from a CRYSTAL output file
    Generate(generate::GenerateArgs),

    /// Parse a CRYSTAL output file and print a structure summary
    Inspect(inspect::InspectArgs),
}
