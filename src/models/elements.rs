//! # 元素符号与原子序数对照表
//!
//! CRYSTAL 坐标记录使用常规原子序数，输出文件使用元素符号，
//! 此处提供两者之间的静态映射 (H 到 Cm)。
//!
//! ## 依赖关系
//! - 被 `parsers/crystal_out.rs` 和 `deck/` 使用

/// 元素符号表，下标 = 原子序数 - 1
const SYMBOLS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", //
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", //
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", //
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", //
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", //
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", //
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", //
    "Pa", "U", "Np", "Pu", "Am", "Cm",
];

/// 由元素符号查原子序数 (不区分大小写)
pub fn atomic_number(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|i| (i + 1) as u8)
}

/// 由原子序数查元素符号
pub fn symbol(z: u8) -> Option<&'static str> {
    if z == 0 {
        return None;
    }
    SYMBOLS.get(z as usize - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_number_basic() {
        assert_eq!(atomic_number("H"), Some(1));
        assert_eq!(atomic_number("O"), Some(8));
        assert_eq!(atomic_number("Si"), Some(14));
        assert_eq!(atomic_number("U"), Some(92));
    }

    #[test]
    fn test_atomic_number_case_insensitive() {
        // CRYSTAL 输出中符号为全大写 (SI, CL)
        assert_eq!(atomic_number("SI"), Some(14));
        assert_eq!(atomic_number("cl"), Some(17));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number(""), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for z in 1..=96u8 {
            let sym = symbol(z).unwrap();
            assert_eq!(atomic_number(sym), Some(z));
        }
        assert_eq!(symbol(0), None);
        assert_eq!(symbol(120), None);
    }
}
