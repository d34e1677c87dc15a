//! # inspect 子命令 CLI 定义
//!
//! 解析 CRYSTAL 输出文件并打印结构摘要。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CRYSTAL output file to read
    pub input: PathBuf,

    /// Also list unit-cell atoms outside the asymmetric unit
    #[arg(short, long, default_value_t = false)]
    pub all_atoms: bool,
}
