//! # 解析器模块
//!
//! 提供 CRYSTAL 输出文件解析器及空间群符号查找表。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: crystal_out, spacegroup

pub mod crystal_out;
pub mod spacegroup;
