//! # generate 子命令 CLI 定义
//!
//! 从 CRYSTAL 输出文件生成后续性质计算的 .d12 输入文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use crate::models::CalcType;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 可生成的计算类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CalcTypeArg {
    /// Single point energy
    Sp,
    /// Linear optical susceptibility (CPKS)
    Chi1,
    /// Second-order optical susceptibility / SHG (CPKS THIRD)
    Chi2,
    /// Geometry optimization (OPTGEOM)
    Opt,
}

impl std::fmt::Display for CalcTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcTypeArg::Sp => write!(f, "sp"),
            CalcTypeArg::Chi1 => write!(f, "chi1"),
            CalcTypeArg::Chi2 => write!(f, "chi2"),
            CalcTypeArg::Opt => write!(f, "opt"),
        }
    }
}

impl From<CalcTypeArg> for CalcType {
    fn from(arg: CalcTypeArg) -> Self {
        match arg {
            CalcTypeArg::Sp => CalcType::SinglePoint,
            CalcTypeArg::Chi1 => CalcType::Chi1,
            CalcTypeArg::Chi2 => CalcType::Chi2,
            CalcTypeArg::Opt => CalcType::Optimization,
        }
    }
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CRYSTAL output file to read
    pub input: PathBuf,

    /// Type of follow-up calculation
    #[arg(short = 't', long, value_enum, default_value_t = CalcTypeArg::Sp)]
    pub calc_type: CalcTypeArg,

    /// Wavelength of the light source in nm (required for chi1/chi2)
    #[arg(short, long)]
    pub wavelength: Option<f64>,

    /// DFT exchange-correlation functional
    #[arg(short = 'x', long, default_value = "wB97X")]
    pub functional: String,

    /// Basis set (internal CRYSTAL keyword or bundled table name)
    #[arg(short, long, default_value = "6-31G*")]
    pub basis: String,

    /// SHRINK parameter for the sampling of the first Brillouin zone
    #[arg(short, long, default_value_t = 4)]
    pub shrink: u32,

    /// First three entries of the TOLINTEG parameter
    #[arg(long, num_args = 3, default_values_t = [7u32, 7, 7])]
    pub tolinteg1: Vec<u32>,

    /// Last two entries of the TOLINTEG parameter
    #[arg(long, num_args = 2, default_values_t = [18u32, 40])]
    pub tolinteg2: Vec<u32>,

    /// Output path for the generated deck (default: input stem + .d12)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Deck title (default: derived from input stem and calculation type)
    #[arg(long)]
    pub title: Option<String>,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
