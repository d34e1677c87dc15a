//! # 基组表模块
//!
//! 解析内置基组数据表 (`data/basis/`，编译时 `include_str!` 打包)，
//! 并区分 CRYSTAL 内部关键字基组与显式基组表。表在每次运行中
//! 只加载一次，以只读引用传给生成器，不做全局状态。
//!
//! ## 限制
//! 整个结构共用一个基组，不支持逐原子指定。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 和 `deck/` 使用
//! - 使用 `models/elements.rs`

use crate::error::{CrysgenError, Result};
use crate::models::elements;
use crate::models::Structure;
use std::collections::BTreeMap;

/// CRYSTAL 的 BASISSET 关键字可直接引用的内部基组
const INTERNAL_BASIS_SETS: &[&str] = &[
    "STO-3G",
    "STO-6G",
    "POB-DZVP",
    "POB-DZVPP",
    "POB-TZVP",
    "POB-DZVP-REV2",
    "POB-TZVP-REV2",
];

/// 内置显式基组表: (规范名, 别名列表, 表内容)
const BUNDLED_TABLES: &[(&str, &[&str], &str)] = &[
    (
        "6-31G*",
        &["6-31Gd", "6-31G(d)"],
        include_str!("../../data/basis/6-31Gd.bs"),
    ),
    (
        "6-311G*",
        &["6-311Gd", "6-311G(d)"],
        include_str!("../../data/basis/6-311Gd.bs"),
    ),
];

/// 按名称解析得到的基组
#[derive(Debug, Clone)]
pub enum ResolvedBasis {
    /// CRYSTAL 内部关键字基组，写为 BASISSET 块
    Internal(String),
    /// 由内置表提供的显式基组
    Explicit(BasisSetTable),
}

/// 显式基组表：元素符号 -> 基组文本块 (只读)
#[derive(Debug, Clone)]
pub struct BasisSetTable {
    name: String,
    blocks: BTreeMap<String, String>,
}

impl BasisSetTable {
    /// 从内置表文本解析
    ///
    /// 文本按 `ELEMENT <symbol>` 分节，节内容原样保留；
    /// `#` 开头的行为注释。
    fn from_text(name: &str, text: &str) -> Result<Self> {
        fn flush(entry: Option<(String, Vec<&str>)>, blocks: &mut BTreeMap<String, String>) {
            if let Some((element, lines)) = entry {
                let mut block = lines.join("\n");
                block.push('\n');
                blocks.insert(element, block);
            }
        }

        let mut blocks: BTreeMap<String, String> = BTreeMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            if let Some(symbol) = trimmed.strip_prefix("ELEMENT ") {
                flush(current.take(), &mut blocks);
                let z = elements::atomic_number(symbol.trim())
                    .ok_or_else(|| CrysgenError::UnknownElement(symbol.trim().to_string()))?;
                // 统一用规范大小写的符号作键
                let canonical = elements::symbol(z).unwrap_or(symbol.trim());
                current = Some((canonical.to_string(), Vec::new()));
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }
            match current.as_mut() {
                Some((_, lines)) => lines.push(trimmed),
                None => {
                    return Err(CrysgenError::Other(format!(
                        "Malformed basis table '{}': data before first ELEMENT header",
                        name
                    )))
                }
            }
        }
        flush(current.take(), &mut blocks);

        Ok(BasisSetTable {
            name: name.to_string(),
            blocks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 某元素的基组文本块
    pub fn block_for(&self, element: &str) -> Option<&str> {
        self.blocks.get(element).map(|s| s.as_str())
    }

    /// 检查结构中每个元素都有对应条目，缺失则返回 ConfigError
    pub fn check_covers(&self, structure: &Structure) -> Result<()> {
        for (_, element) in structure.distinct_elements() {
            if !self.blocks.contains_key(&element) {
                return Err(CrysgenError::MissingBasisEntry {
                    basis: self.name.clone(),
                    element,
                });
            }
        }
        Ok(())
    }
}

/// 按名称解析基组 (不区分大小写，支持别名)
pub fn resolve(name: &str) -> Result<ResolvedBasis> {
    if let Some(keyword) = INTERNAL_BASIS_SETS
        .iter()
        .find(|k| k.eq_ignore_ascii_case(name))
    {
        return Ok(ResolvedBasis::Internal(keyword.to_string()));
    }

    for (canonical, aliases, text) in BUNDLED_TABLES {
        let matches = canonical.eq_ignore_ascii_case(name)
            || aliases.iter().any(|a| a.eq_ignore_ascii_case(name));
        if matches {
            return Ok(ResolvedBasis::Explicit(BasisSetTable::from_text(
                canonical, text,
            )?));
        }
    }

    Err(CrysgenError::UnknownBasisSet(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Atom;

    fn sio2() -> Structure {
        let atoms = vec![
            Atom::new("Si", 14, [0.47, 0.0, 0.333]).asymmetric(),
            Atom::new("O", 8, [0.41, 0.27, 0.214]).asymmetric(),
        ];
        Structure::new("quartz", (5.0, 5.0, 8.7, 90.0, 90.0, 120.0), atoms, 182)
    }

    #[test]
    fn test_resolve_internal_keyword() {
        match resolve("pob-dzvp-rev2").unwrap() {
            ResolvedBasis::Internal(kw) => assert_eq!(kw, "POB-DZVP-REV2"),
            _ => panic!("expected internal keyword"),
        }
    }

    #[test]
    fn test_resolve_bundled_by_alias() {
        match resolve("6-31Gd").unwrap() {
            ResolvedBasis::Explicit(table) => assert_eq!(table.name(), "6-31G*"),
            _ => panic!("expected bundled table"),
        }
    }

    #[test]
    fn test_unknown_basis_fails() {
        assert!(matches!(
            resolve("NOT-A-BASIS"),
            Err(CrysgenError::UnknownBasisSet(_))
        ));
    }

    #[test]
    fn test_bundled_table_blocks() {
        let table = match resolve("6-31G*").unwrap() {
            ResolvedBasis::Explicit(t) => t,
            _ => panic!(),
        };

        let si = table.block_for("Si").expect("Si entry");
        assert!(si.starts_with("14 5"));
        let h = table.block_for("H").expect("H entry");
        assert!(h.starts_with("1 2"));
        assert!(table.block_for("U").is_none());
    }

    #[test]
    fn test_check_covers() {
        let table = match resolve("6-31G*").unwrap() {
            ResolvedBasis::Explicit(t) => t,
            _ => panic!(),
        };
        assert!(table.check_covers(&sio2()).is_ok());

        // 6-311G* 表没有 Si 条目
        let small = match resolve("6-311G*").unwrap() {
            ResolvedBasis::Explicit(t) => t,
            _ => panic!(),
        };
        match small.check_covers(&sio2()) {
            Err(CrysgenError::MissingBasisEntry { basis, element }) => {
                assert_eq!(basis, "6-311G*");
                assert_eq!(element, "Si");
            }
            other => panic!("expected MissingBasisEntry, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_table_loads_once_per_name() {
        // 同名两次解析得到相同内容 (表为只读静态数据)
        let a = match resolve("6-31G*").unwrap() {
            ResolvedBasis::Explicit(t) => t,
            _ => panic!(),
        };
        let b = match resolve("6-31G(d)").unwrap() {
            ResolvedBasis::Explicit(t) => t,
            _ => panic!(),
        };
        assert_eq!(a.block_for("O"), b.block_for("O"));
    }
}
