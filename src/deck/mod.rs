//! # .d12 输入文件渲染器
//!
//! 将解析出的结构与计算请求渲染为 CRYSTAL23 的分块输入文法。
//! 单次确定性渲染：相同输入永远产生字节相同的输出。
//!
//! ## 文件布局
//! ```text
//! <标题>
//! CRYSTAL
//! 0 0 0
//! <空间群编号>
//! <自由晶格参数>
//! <不对称单元原子数>
//! <Z  x/a  y/b  z/c> ...
//! [OPTGEOM / FULLOPTG / ENDOPT]
//! END
//! <基组区块>
//! DFT
//! <泛函>
//! END
//! SHRINK
//! <s> <s>
//! TOLINTEG
//! <t1a> <t1b> <t1c> <t2a> <t2b>
//! [CPKS / [THIRD] / DYNAMIC / <波长> / END]
//! END
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/`, `basis/`

use crate::basis::ResolvedBasis;
use crate::error::{CrysgenError, Result};
use crate::models::{CalcRequest, CalcType, Structure};

/// 渲染完整 .d12 输入文件
pub fn render_deck(
    structure: &Structure,
    request: &CalcRequest,
    basis: &ResolvedBasis,
    title: &str,
) -> Result<String> {
    request.validate()?;
    if let ResolvedBasis::Explicit(table) = basis {
        table.check_covers(structure)?;
    }
    if structure.asymmetric_atoms().count() == 0 {
        return Err(CrysgenError::InvalidParameter(
            "Structure has no asymmetric-unit atoms".to_string(),
        ));
    }

    let mut out = String::new();

    push_intro(&mut out, title);
    push_geometry(&mut out, structure, request.calc_type);
    push_basis(&mut out, structure, basis);
    push_dft_block(&mut out, request);
    push_type_info(&mut out, request);
    out.push_str("END\n");

    Ok(out)
}

/// 标题与几何区块头
fn push_intro(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str("CRYSTAL\n");
    // IFLAG IFHR IFSO: 标准空间群设置
    out.push_str("0 0 0\n");
}

/// 空间群、晶格与不对称单元坐标
fn push_geometry(out: &mut String, structure: &Structure, calc_type: CalcType) {
    out.push_str(&format!("{}\n", structure.space_group));

    let params: Vec<String> = free_lattice_parameters(structure.space_group, structure.cell)
        .iter()
        .map(|v| format!("{:.5}", v))
        .collect();
    out.push_str(&params.join(" "));
    out.push('\n');

    let asym: Vec<_> = structure.asymmetric_atoms().collect();
    out.push_str(&format!("{}\n", asym.len()));
    for atom in asym {
        out.push_str(&format!(
            "{} {:.12} {:.12} {:.12}\n",
            atom.atomic_number, atom.position[0], atom.position[1], atom.position[2]
        ));
    }

    if calc_type == CalcType::Optimization {
        out.push_str("OPTGEOM\nFULLOPTG\nENDOPT\n");
    }

    out.push_str("END\n");
}

/// 空间群编号决定晶系，晶系决定哪些晶格参数是自由的
///
/// | 编号    | 晶系   | 自由参数        |
/// |---------|--------|-----------------|
/// | 1-2     | 三斜   | a b c α β γ     |
/// | 3-15    | 单斜   | a b c β         |
/// | 16-74   | 正交   | a b c           |
/// | 75-142  | 四方   | a c             |
/// | 143-167 | 三方   | a c             |
/// | 168-194 | 六方   | a c             |
/// | 195-230 | 立方   | a               |
pub fn free_lattice_parameters(
    space_group: u16,
    cell: (f64, f64, f64, f64, f64, f64),
) -> Vec<f64> {
    let (a, b, c, alpha, beta, gamma) = cell;
    match space_group {
        1..=2 => vec![a, b, c, alpha, beta, gamma],
        3..=15 => vec![a, b, c, beta],
        16..=74 => vec![a, b, c],
        75..=194 => vec![a, c],
        _ => vec![a],
    }
}

/// 基组区块：内部关键字或显式基组表
fn push_basis(out: &mut String, structure: &Structure, basis: &ResolvedBasis) {
    match basis {
        ResolvedBasis::Internal(keyword) => {
            out.push_str("BASISSET\n");
            out.push_str(keyword);
            out.push('\n');
        }
        ResolvedBasis::Explicit(table) => {
            for (_, element) in structure.distinct_elements() {
                // check_covers 已验证存在
                if let Some(block) = table.block_for(&element) {
                    out.push_str(block);
                }
            }
            out.push_str("99 0\nENDBS\n");
        }
    }
}

/// DFT 泛函与数值参数区块
fn push_dft_block(out: &mut String, request: &CalcRequest) {
    out.push_str("DFT\n");
    out.push_str(request.canonical_functional());
    out.push_str("\nEND\n");

    out.push_str(&format!("SHRINK\n{} {}\n", request.shrink, request.shrink));

    let [t1a, t1b, t1c] = request.tolinteg1;
    let [t2a, t2b] = request.tolinteg2;
    out.push_str(&format!(
        "TOLINTEG\n{} {} {} {} {}\n",
        t1a, t1b, t1c, t2a, t2b
    ));
}

/// 计算类型专属区块 (CPKS)，单点与几何优化无额外区块
fn push_type_info(out: &mut String, request: &CalcRequest) {
    let wavelength = match request.calc_type {
        CalcType::Chi1 | CalcType::Chi2 => match request.wavelength {
            Some(w) => w,
            // validate() 已排除
            None => return,
        },
        _ => return,
    };

    out.push_str("CPKS\n");
    if request.calc_type == CalcType::Chi2 {
        out.push_str("THIRD\n");
    }
    out.push_str("DYNAMIC\n");
    out.push_str(&format_wavelength(wavelength));
    out.push_str("\nEND\n");
}

/// 波长写法：整数优先，否则保留小数
fn format_wavelength(w: f64) -> String {
    if w.fract() == 0.0 {
        format!("{:.0}", w)
    } else {
        format!("{}", w)
    }
}
