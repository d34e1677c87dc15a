//! # generate 命令实现
//!
//! 完整流水线：读取输出文件 -> 解析结构 -> 解析基组 -> 渲染 .d12 -> 写盘。
//! 单线程一次性执行，失败立即返回，不做任何重试。
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/`, `basis/`, `deck/`, `models/`
//! - 使用 `utils/output.rs`

use crate::basis;
use crate::cli::generate::GenerateArgs;
use crate::deck;
use crate::error::{CrysgenError, Result};
use crate::models::{CalcRequest, CalcType};
use crate::parsers::crystal_out;
use crate::utils::output;

use std::fs;
use std::path::PathBuf;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    let calc_type: CalcType = args.calc_type.into();
    output::print_header(&format!("Generating {} input deck", args.calc_type));

    // 解析输出文件中的结构
    let structure = crystal_out::parse_crystal_output_file(&args.input)?;
    output::print_info(&format!(
        "Parsed {} (space group {}, {} atoms, {} in asymmetric unit)",
        structure.formula(),
        structure.space_group,
        structure.atoms.len(),
        structure.asymmetric_atoms().count()
    ));

    let request = build_request(&args, calc_type)?;
    request.validate()?;

    // 基组表只加载一次，以只读引用传给渲染器
    let resolved_basis = basis::resolve(&request.basis)?;

    let title = args.title.clone().unwrap_or_else(|| {
        format!(
            "{} - {}",
            args.input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("structure"),
            calc_type
        )
    });

    let content = deck::render_deck(&structure, &request, &resolved_basis, &title)?;

    let output_path = output_path(&args);
    if output_path.exists() && !args.overwrite {
        return Err(CrysgenError::InvalidParameter(format!(
            "Output file '{}' exists (use --overwrite to replace it)",
            output_path.display()
        )));
    }

    fs::write(&output_path, &content).map_err(|e| CrysgenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    output::print_done(&format!("Wrote input deck to '{}'", output_path.display()));
    Ok(())
}

/// 由 CLI 参数组装计算请求
fn build_request(args: &GenerateArgs, calc_type: CalcType) -> Result<CalcRequest> {
    let tolinteg1: [u32; 3] = args.tolinteg1.as_slice().try_into().map_err(|_| {
        CrysgenError::InvalidParameter("TOLINTEG1 requires exactly 3 integers".to_string())
    })?;
    let tolinteg2: [u32; 2] = args.tolinteg2.as_slice().try_into().map_err(|_| {
        CrysgenError::InvalidParameter("TOLINTEG2 requires exactly 2 integers".to_string())
    })?;

    Ok(CalcRequest {
        calc_type,
        wavelength: args.wavelength,
        functional: args.functional.clone(),
        basis: args.basis.clone(),
        shrink: args.shrink,
        tolinteg1,
        tolinteg2,
    })
}

/// 输出路径：显式指定，否则输入文件名 + .d12
fn output_path(args: &GenerateArgs) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => args.input.with_extension("d12"),
    }
}
