//! # Crysgen - CRYSTAL23 性质计算输入文件生成器
//!
//! 读取 CRYSTAL23 计算输出文件，提取最终结构信息，
//! 生成后续性质计算 (单点 / 光学极化率 / 几何优化) 的 .d12 输入文件。
//!
//! ## 子命令
//! - `generate` - 从输出文件生成新的 .d12 输入文件
//! - `inspect`  - 解析输出文件并打印结构摘要
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (输出文件解析器)
//!   │     ├── basis/     (基组表)
//!   │     ├── deck/      (.d12 渲染器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod basis;
mod cli;
mod commands;
mod deck;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
