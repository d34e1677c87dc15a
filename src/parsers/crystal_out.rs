//! # CRYSTAL 输出文件解析器
//!
//! 解析 CRYSTAL23 计算输出 (通常为 slurm-*.out)，提取最终晶格参数、
//! 晶胞坐标与空间群。几何优化输出中同一区块会出现多次，
//! 始终保留最后一次出现 (即优化后的几何)。
//!
//! ## 区块格式说明
//! ```text
//!  LATTICE PARAMETERS (ANGSTROMS AND DEGREES) - BOHR = 0.5291772083 ANGSTROM
//!  PRIMITIVE CELL ...
//!          A              B              C           ALPHA      BETA     GAMMA
//!       5.12731        5.12731        8.70046     90.00000  90.00000 120.00000
//!  *******************************************************************************
//!  ATOMS IN THE ASYMMETRIC UNIT    3 - ATOMS IN THE UNIT CELL:   12
//!      ATOM                 X/A                 Y/B                 Z/C
//!  *******************************************************************************
//!      1 T  14 SI    4.695687565012E-01 ...
//!      ...
//!  T = ATOM BELONGING TO THE ASYMMETRIC UNIT
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/`, `parsers/spacegroup.rs`

use crate::error::{CrysgenError, Result};
use crate::models::{elements, Atom, Structure};
use crate::parsers::spacegroup;
use regex::Regex;
use std::fs;
use std::path::Path;

const FORMAT: &str = "CRYSTAL output";

/// 解析 CRYSTAL 输出文件
pub fn parse_crystal_output_file(path: &Path) -> Result<Structure> {
    if !path.exists() {
        return Err(CrysgenError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| CrysgenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_crystal_output(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("structure"),
    )
}

/// 从字符串内容解析 CRYSTAL 输出
///
/// 纯函数：除输入文本外无其他副作用。
pub fn parse_crystal_output(content: &str, name: &str) -> Result<Structure> {
    let parse_err = |reason: String| CrysgenError::ParseError {
        format: FORMAT.to_string(),
        path: name.to_string(),
        reason,
    };

    // "ATOMS IN THE ASYMMETRIC UNIT    3 - ATOMS IN THE UNIT CELL:   12"
    let counts_re =
        Regex::new(r"ATOMS IN THE ASYMMETRIC UNIT\s+(\d+)\s*-\s*ATOMS IN THE UNIT CELL:\s+(\d+)")
            .unwrap();
    // "SPACE GROUP (CENTROSYMMETRIC) : P 63/M M C"
    let space_group_re = Regex::new(r"SPACE GROUP[^:]*:\s*(.+?)\s*$").unwrap();

    let mut cell: Option<(f64, f64, f64, f64, f64, f64)> = None;
    let mut atoms: Vec<Atom> = Vec::new();
    let mut counts: Option<(usize, usize)> = None;
    let mut space_group_symbol: Option<String> = None;

    let mut in_lattice = false;
    let mut in_coords = false;

    for line in content.lines() {
        if line.contains("LATTICE PARAMETERS") {
            in_lattice = true;
        } else if line.contains("**") {
            in_lattice = false;
        } else if in_lattice {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 6 {
                continue;
            }
            // 跳过表头行 (A B C ALPHA BETA GAMMA)
            if fields[0].parse::<f64>().is_err() {
                continue;
            }
            let mut values = [0.0f64; 6];
            for (v, field) in values.iter_mut().zip(&fields) {
                *v = field.parse().map_err(|_| {
                    parse_err(format!("Non-numeric lattice parameter: '{}'", field))
                })?;
            }
            cell = Some((
                values[0], values[1], values[2], values[3], values[4], values[5],
            ));
        }

        if let Some(caps) = counts_re.captures(line) {
            // 新的坐标区块开始，丢弃之前的原子 (保留最后一次出现)
            let n_asym: usize = caps[1].parse().unwrap_or(0);
            let n_cell: usize = caps[2].parse().unwrap_or(0);
            counts = Some((n_asym, n_cell));
            atoms.clear();
            in_coords = true;
            continue;
        }
        if line.contains("T = ATOM BELONGING TO THE ASYMMETRIC UNIT") {
            in_coords = false;
            continue;
        }
        if in_coords {
            if let Some(atom) = parse_atom_row(line, &parse_err)? {
                atoms.push(atom);
            }
        }

        if let Some(caps) = space_group_re.captures(line) {
            space_group_symbol = Some(caps[1].to_string());
        }
    }

    let cell = cell.ok_or_else(|| parse_err("No LATTICE PARAMETERS block found".to_string()))?;
    let (n_asym, n_cell) =
        counts.ok_or_else(|| parse_err("No atomic coordinate block found".to_string()))?;
    let symbol = space_group_symbol
        .ok_or_else(|| parse_err("No SPACE GROUP line found".to_string()))?;

    if atoms.len() != n_cell {
        return Err(parse_err(format!(
            "Coordinate block has {} atoms but geometry header declares {}",
            atoms.len(),
            n_cell
        )));
    }
    let found_asym = atoms.iter().filter(|a| a.asymmetric).count();
    if found_asym != n_asym {
        return Err(parse_err(format!(
            "Coordinate block marks {} asymmetric atoms but geometry header declares {}",
            found_asym, n_asym
        )));
    }

    let space_group = spacegroup::space_group_number(&symbol)?;

    Ok(Structure::new(name, cell, atoms, space_group))
}

/// 解析单行原子坐标记录
///
/// 格式: `index T|F z_number SYMBOL x/a y/b z/c` (7 列)。
/// 列数或首列不符的行视为表头/装饰行，返回 Ok(None) 跳过。
fn parse_atom_row(
    line: &str,
    parse_err: &impl Fn(String) -> CrysgenError,
) -> Result<Option<Atom>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 7 || fields[0].parse::<usize>().is_err() {
        return Ok(None);
    }

    let asymmetric = match fields[1] {
        "T" => true,
        "F" => false,
        _ => return Ok(None),
    };

    let z: u8 = fields[2]
        .parse()
        .map_err(|_| parse_err(format!("Invalid atomic number: '{}'", fields[2])))?;
    // CRYSTAL 对赝势基组会在序数上加 100，此处化归常规序数
    let z = if z > 100 { z - 100 } else { z };

    let symbol = elements::symbol(z).ok_or_else(|| CrysgenError::UnknownElement(z.to_string()))?;
    if !symbol.eq_ignore_ascii_case(fields[3]) {
        return Err(parse_err(format!(
            "Element symbol '{}' does not match atomic number {}",
            fields[3], z
        )));
    }

    let mut position = [0.0f64; 3];
    for (p, field) in position.iter_mut().zip(&fields[4..7]) {
        *p = field
            .parse()
            .map_err(|_| parse_err(format!("Non-numeric coordinate: '{}'", field)))?;
    }

    Ok(Some(Atom {
        element: symbol.to_string(),
        atomic_number: z,
        position,
        asymmetric,
    }))
}
