//! # 数据模型模块
//!
//! 定义晶体结构和性质计算请求的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `basis/`, `deck/` 和 `commands/` 使用
//! - 子模块: structure, request, elements

pub mod elements;
pub mod request;
pub mod structure;

pub use request::{CalcRequest, CalcType};
pub use structure::{Atom, Lattice, Structure};
