//! # 晶体结构数据模型
//!
//! 定义从 CRYSTAL 输出文件提取的晶体结构表示。
//! 结构一旦解析完成即视为不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `deck/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha_rad = alpha.to_radians();
        let beta_rad = beta.to_radians();
        let gamma_rad = gamma.to_radians();

        // 计算晶格向量
        let cos_alpha = alpha_rad.cos();
        let cos_beta = beta_rad.cos();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();
        let c_vec = [c1, c2, c3];

        Lattice {
            matrix: [a_vec, b_vec, c_vec],
        }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = (a_vec[0].powi(2) + a_vec[1].powi(2) + a_vec[2].powi(2)).sqrt();
        let b = (b_vec[0].powi(2) + b_vec[1].powi(2) + b_vec[2].powi(2)).sqrt();
        let c = (c_vec[0].powi(2) + c_vec[1].powi(2) + c_vec[2].powi(2)).sqrt();

        let dot_bc: f64 = b_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ac: f64 = a_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ab: f64 = a_vec.iter().zip(b_vec.iter()).map(|(x, y)| x * y).sum();

        let alpha = (dot_bc / (b * c)).acos().to_degrees();
        let beta = (dot_ac / (a * c)).acos().to_degrees();
        let gamma = (dot_ab / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        // 行列式计算
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}

/// 原子信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 常规原子序数
    pub atomic_number: u8,

    /// 分数坐标 [x/a, y/b, z/c]
    pub position: [f64; 3],

    /// 是否属于不对称单元 (CRYSTAL 输出中标记为 T 的原子)
    pub asymmetric: bool,
}

impl Atom {
    pub fn new(element: impl Into<String>, atomic_number: u8, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            atomic_number,
            position,
            asymmetric: false,
        }
    }

    pub fn asymmetric(mut self) -> Self {
        self.asymmetric = true;
        self
    }
}

/// 从 CRYSTAL 输出提取的晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// 结构名称 (通常取自输出文件名)
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 输出文件中打印的晶胞参数 (a, b, c, alpha, beta, gamma)
    pub cell: (f64, f64, f64, f64, f64, f64),

    /// 晶胞内全部原子 (不对称单元原子带 asymmetric 标记)
    pub atoms: Vec<Atom>,

    /// 国际空间群编号 (1-230)
    pub space_group: u16,
}

impl Structure {
    pub fn new(
        name: impl Into<String>,
        cell: (f64, f64, f64, f64, f64, f64),
        atoms: Vec<Atom>,
        space_group: u16,
    ) -> Self {
        let (a, b, c, alpha, beta, gamma) = cell;
        Structure {
            name: name.into(),
            lattice: Lattice::from_parameters(a, b, c, alpha, beta, gamma),
            cell,
            atoms,
            space_group,
        }
    }

    /// 不对称单元原子
    pub fn asymmetric_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(|a| a.asymmetric)
    }

    /// 结构中出现的元素符号（按原子序数升序，去重）
    pub fn distinct_elements(&self) -> Vec<(u8, String)> {
        let mut seen: Vec<(u8, String)> = Vec::new();
        for atom in &self.atoms {
            if !seen.iter().any(|(z, _)| *z == atom.atomic_number) {
                seen.push((atom.atomic_number, atom.element.clone()));
            }
        }
        seen.sort_by_key(|(z, _)| *z);
        seen
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 5.0).abs() < 1e-6);
        assert!((b - 5.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let vol = lattice.volume().abs();

        // 5^3 = 125
        assert!((vol - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_hexagonal() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        let (a, b, c, _, _, gamma) = lattice.parameters();

        assert!((a - 3.0).abs() < 0.01);
        assert!((b - 3.0).abs() < 0.01);
        assert!((c - 5.0).abs() < 0.01);
        assert!((gamma - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_asymmetric_atoms() {
        let atoms = vec![
            Atom::new("O", 8, [0.0, 0.0, 0.25]).asymmetric(),
            Atom::new("O", 8, [0.5, 0.5, 0.75]),
            Atom::new("Si", 14, [0.33, 0.67, 0.0]).asymmetric(),
        ];
        let s = Structure::new("quartz", (5.0, 5.0, 8.7, 90.0, 90.0, 120.0), atoms, 182);

        assert_eq!(s.asymmetric_atoms().count(), 2);
        assert_eq!(s.atoms.len(), 3);
    }

    #[test]
    fn test_distinct_elements_sorted_by_z() {
        let atoms = vec![
            Atom::new("Si", 14, [0.0, 0.0, 0.0]),
            Atom::new("O", 8, [0.5, 0.5, 0.5]),
            Atom::new("Si", 14, [0.25, 0.25, 0.25]),
        ];
        let s = Structure::new("SiO2", (5.0, 5.0, 5.0, 90.0, 90.0, 90.0), atoms, 1);

        let elems = s.distinct_elements();
        assert_eq!(elems.len(), 2);
        assert_eq!(elems[0], (8, "O".to_string()));
        assert_eq!(elems[1], (14, "Si".to_string()));
    }

    #[test]
    fn test_structure_formula() {
        let atoms = vec![
            Atom::new("Si", 14, [0.0, 0.0, 0.0]),
            Atom::new("O", 8, [0.5, 0.0, 0.0]),
            Atom::new("O", 8, [0.0, 0.5, 0.0]),
        ];
        let s = Structure::new("SiO2", (5.0, 5.0, 5.0, 90.0, 90.0, 90.0), atoms, 1);

        let formula = s.formula();
        assert!(formula.contains("Si"));
        assert!(formula.contains("O2"));
    }
}
