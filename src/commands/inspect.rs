//! # inspect 命令实现
//!
//! 解析 CRYSTAL 输出文件并以表格形式打印晶格参数与原子坐标，
//! 便于在生成输入文件前人工核对提取结果。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`, `tabled`

use crate::cli::inspect::InspectArgs;
use crate::error::Result;
use crate::parsers::crystal_out;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 原子坐标行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Z")]
    atomic_number: u8,
    #[tabled(rename = "x/a")]
    x: String,
    #[tabled(rename = "y/b")]
    y: String,
    #[tabled(rename = "z/c")]
    z: String,
    #[tabled(rename = "Asym")]
    asymmetric: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header(&format!("Inspecting '{}'", args.input.display()));

    let structure = crystal_out::parse_crystal_output_file(&args.input)?;

    let (a, b, c, alpha, beta, gamma) = structure.cell;
    output::print_info(&format!("Formula:      {}", structure.formula()));
    output::print_info(&format!("Space group:  {}", structure.space_group));
    output::print_info(&format!(
        "Cell:         a={:.5}  b={:.5}  c={:.5}  α={:.3}  β={:.3}  γ={:.3}",
        a, b, c, alpha, beta, gamma
    ));
    output::print_info(&format!(
        "Volume:       {:.4} Å³",
        structure.lattice.volume().abs()
    ));
    output::print_info(&format!(
        "Atoms:        {} in cell, {} in asymmetric unit",
        structure.atoms.len(),
        structure.asymmetric_atoms().count()
    ));

    let rows: Vec<AtomRow> = structure
        .atoms
        .iter()
        .filter(|atom| args.all_atoms || atom.asymmetric)
        .enumerate()
        .map(|(i, atom)| AtomRow {
            index: i + 1,
            element: atom.element.clone(),
            atomic_number: atom.atomic_number,
            x: format!("{:14.10}", atom.position[0]),
            y: format!("{:14.10}", atom.position[1]),
            z: format!("{:14.10}", atom.position[2]),
            asymmetric: if atom.asymmetric { "T" } else { "F" }.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));

    Ok(())
}
