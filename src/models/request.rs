//! # 性质计算请求数据模型
//!
//! 描述要生成的后续计算：类型、波长、泛函、基组与数值参数。
//!
//! ## 依赖关系
//! - 被 `cli/generate.rs`, `commands/generate.rs`, `deck/` 使用

use crate::error::{CrysgenError, Result};
use serde::{Deserialize, Serialize};

/// 支持的 DFT 交换相关泛函
pub const SUPPORTED_FUNCTIONALS: &[&str] = &[
    "LDA", "SVWN", "PBE", "PBESOL", "BLYP", "B3LYP", "PBE0", "HSE06", "M06", "wB97X", "SOGGA11X",
];

/// 性质计算类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcType {
    /// 单点能计算
    SinglePoint,
    /// 线性光学极化率 (CPKS DYNAMIC)
    Chi1,
    /// 二阶非线性光学极化率 / SHG (CPKS THIRD DYNAMIC)
    Chi2,
    /// 几何优化 (OPTGEOM FULLOPTG)
    Optimization,
}

impl CalcType {
    /// 是否需要入射光波长
    pub fn needs_wavelength(&self) -> bool {
        matches!(self, CalcType::Chi1 | CalcType::Chi2)
    }
}

impl std::fmt::Display for CalcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcType::SinglePoint => write!(f, "SP"),
            CalcType::Chi1 => write!(f, "CHI1"),
            CalcType::Chi2 => write!(f, "SHG"),
            CalcType::Optimization => write!(f, "OPT"),
        }
    }
}

/// 性质计算请求
///
/// 限制：整个结构共用一个基组，不支持逐原子指定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcRequest {
    /// 计算类型
    pub calc_type: CalcType,

    /// 入射光波长 (nm)，仅 Chi1/Chi2 需要
    pub wavelength: Option<f64>,

    /// DFT 交换相关泛函
    pub functional: String,

    /// 基组名称 (内置 CRYSTAL 关键字或内置表键名)
    pub basis: String,

    /// SHRINK 参数 (不可约布里渊区采样密度)，写入文件时为 "s s"
    pub shrink: u32,

    /// TOLINTEG 前三个积分截断容差
    pub tolinteg1: [u32; 3],

    /// TOLINTEG 后两个积分截断容差
    pub tolinteg2: [u32; 2],
}

impl CalcRequest {
    /// 校验请求参数，失败返回 ConfigError 类错误
    pub fn validate(&self) -> Result<()> {
        if self.calc_type.needs_wavelength() {
            match self.wavelength {
                None => {
                    return Err(CrysgenError::MissingWavelength {
                        calc_type: self.calc_type.to_string(),
                    })
                }
                Some(w) if w <= 0.0 || !w.is_finite() => {
                    return Err(CrysgenError::InvalidParameter(format!(
                        "Wavelength must be a positive number, got {}",
                        w
                    )))
                }
                Some(_) => {}
            }
        }

        if !SUPPORTED_FUNCTIONALS
            .iter()
            .any(|f| f.eq_ignore_ascii_case(&self.functional))
        {
            return Err(CrysgenError::UnknownFunctional {
                name: self.functional.clone(),
                supported: SUPPORTED_FUNCTIONALS.join(", "),
            });
        }

        if self.shrink == 0 {
            return Err(CrysgenError::InvalidParameter(
                "SHRINK must be a positive integer".to_string(),
            ));
        }

        if self.tolinteg1.iter().any(|&t| t == 0) || self.tolinteg2.iter().any(|&t| t == 0) {
            return Err(CrysgenError::InvalidParameter(
                "TOLINTEG entries must be positive integers".to_string(),
            ));
        }

        Ok(())
    }

    /// 泛函的规范大小写写法 (校验后调用)
    pub fn canonical_functional(&self) -> &str {
        SUPPORTED_FUNCTIONALS
            .iter()
            .find(|f| f.eq_ignore_ascii_case(&self.functional))
            .copied()
            .unwrap_or(self.functional.as_str())
    }
}

impl Default for CalcRequest {
    fn default() -> Self {
        CalcRequest {
            calc_type: CalcType::SinglePoint,
            wavelength: None,
            functional: "wB97X".to_string(),
            basis: "6-31G*".to_string(),
            shrink: 4,
            tolinteg1: [7, 7, 7],
            tolinteg2: [18, 40],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_valid() {
        assert!(CalcRequest::default().validate().is_ok());
    }

    #[test]
    fn test_chi2_requires_wavelength() {
        let req = CalcRequest {
            calc_type: CalcType::Chi2,
            ..Default::default()
        };
        assert!(matches!(
            req.validate(),
            Err(CrysgenError::MissingWavelength { .. })
        ));
    }

    #[test]
    fn test_chi1_requires_wavelength() {
        let req = CalcRequest {
            calc_type: CalcType::Chi1,
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_wavelength_rejected() {
        let req = CalcRequest {
            calc_type: CalcType::Chi2,
            wavelength: Some(-1907.0),
            ..Default::default()
        };
        assert!(matches!(
            req.validate(),
            Err(CrysgenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_shrink_rejected() {
        let req = CalcRequest {
            shrink: 0,
            ..Default::default()
        };
        assert!(matches!(
            req.validate(),
            Err(CrysgenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unknown_functional_rejected() {
        let req = CalcRequest {
            functional: "NOTAFUNCTIONAL".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            req.validate(),
            Err(CrysgenError::UnknownFunctional { .. })
        ));
    }

    #[test]
    fn test_functional_case_insensitive() {
        let req = CalcRequest {
            functional: "b3lyp".to_string(),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.canonical_functional(), "B3LYP");
    }

    #[test]
    fn test_zero_tolinteg_rejected() {
        let req = CalcRequest {
            tolinteg2: [0, 40],
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
