//! # 空间群符号对照表
//!
//! CRYSTAL 输出文件打印 Hermann-Mauguin 空间群符号 (如 "P 63 M C")，
//! 而 .d12 几何输入需要国际编号 (1-230)。此处提供 230 个空间群
//! 短符号的静态查找表及符号归一化逻辑。
//!
//! ## 依赖关系
//! - 被 `parsers/crystal_out.rs` 使用

use crate::error::{CrysgenError, Result};

/// 230 个空间群：(国际编号, 短 Hermann-Mauguin 符号)
const SPACE_GROUPS: &[(u16, &str)] = &[
    (1, "P1"),
    (2, "P-1"),
    (3, "P2"),
    (4, "P21"),
    (5, "C2"),
    (6, "PM"),
    (7, "PC"),
    (8, "CM"),
    (9, "CC"),
    (10, "P2/M"),
    (11, "P21/M"),
    (12, "C2/M"),
    (13, "P2/C"),
    (14, "P21/C"),
    (15, "C2/C"),
    (16, "P222"),
    (17, "P2221"),
    (18, "P21212"),
    (19, "P212121"),
    (20, "C2221"),
    (21, "C222"),
    (22, "F222"),
    (23, "I222"),
    (24, "I212121"),
    (25, "PMM2"),
    (26, "PMC21"),
    (27, "PCC2"),
    (28, "PMA2"),
    (29, "PCA21"),
    (30, "PNC2"),
    (31, "PMN21"),
    (32, "PBA2"),
    (33, "PNA21"),
    (34, "PNN2"),
    (35, "CMM2"),
    (36, "CMC21"),
    (37, "CCC2"),
    (38, "AMM2"),
    (39, "ABM2"),
    (40, "AMA2"),
    (41, "ABA2"),
    (42, "FMM2"),
    (43, "FDD2"),
    (44, "IMM2"),
    (45, "IBA2"),
    (46, "IMA2"),
    (47, "PMMM"),
    (48, "PNNN"),
    (49, "PCCM"),
    (50, "PBAN"),
    (51, "PMMA"),
    (52, "PNNA"),
    (53, "PMNA"),
    (54, "PCCA"),
    (55, "PBAM"),
    (56, "PCCN"),
    (57, "PBCM"),
    (58, "PNNM"),
    (59, "PMMN"),
    (60, "PBCN"),
    (61, "PBCA"),
    (62, "PNMA"),
    (63, "CMCM"),
    (64, "CMCA"),
    (65, "CMMM"),
    (66, "CCCM"),
    (67, "CMMA"),
    (68, "CCCA"),
    (69, "FMMM"),
    (70, "FDDD"),
    (71, "IMMM"),
    (72, "IBAM"),
    (73, "IBCA"),
    (74, "IMMA"),
    (75, "P4"),
    (76, "P41"),
    (77, "P42"),
    (78, "P43"),
    (79, "I4"),
    (80, "I41"),
    (81, "P-4"),
    (82, "I-4"),
    (83, "P4/M"),
    (84, "P42/M"),
    (85, "P4/N"),
    (86, "P42/N"),
    (87, "I4/M"),
    (88, "I41/A"),
    (89, "P422"),
    (90, "P4212"),
    (91, "P4122"),
    (92, "P41212"),
    (93, "P4222"),
    (94, "P42212"),
    (95, "P4322"),
    (96, "P43212"),
    (97, "I422"),
    (98, "I4122"),
    (99, "P4MM"),
    (100, "P4BM"),
    (101, "P42CM"),
    (102, "P42NM"),
    (103, "P4CC"),
    (104, "P4NC"),
    (105, "P42MC"),
    (106, "P42BC"),
    (107, "I4MM"),
    (108, "I4CM"),
    (109, "I41MD"),
    (110, "I41CD"),
    (111, "P-42M"),
    (112, "P-42C"),
    (113, "P-421M"),
    (114, "P-421C"),
    (115, "P-4M2"),
    (116, "P-4C2"),
    (117, "P-4B2"),
    (118, "P-4N2"),
    (119, "I-4M2"),
    (120, "I-4C2"),
    (121, "I-42M"),
    (122, "I-42D"),
    (123, "P4/MMM"),
    (124, "P4/MCC"),
    (125, "P4/NBM"),
    (126, "P4/NNC"),
    (127, "P4/MBM"),
    (128, "P4/MNC"),
    (129, "P4/NMM"),
    (130, "P4/NCC"),
    (131, "P42/MMC"),
    (132, "P42/MCM"),
    (133, "P42/NBC"),
    (134, "P42/NNM"),
    (135, "P42/MBC"),
    (136, "P42/MNM"),
    (137, "P42/NMC"),
    (138, "P42/NCM"),
    (139, "I4/MMM"),
    (140, "I4/MCM"),
    (141, "I41/AMD"),
    (142, "I41/ACD"),
    (143, "P3"),
    (144, "P31"),
    (145, "P32"),
    (146, "R3"),
    (147, "P-3"),
    (148, "R-3"),
    (149, "P312"),
    (150, "P321"),
    (151, "P3112"),
    (152, "P3121"),
    (153, "P3212"),
    (154, "P3221"),
    (155, "R32"),
    (156, "P3M1"),
    (157, "P31M"),
    (158, "P3C1"),
    (159, "P31C"),
    (160, "R3M"),
    (161, "R3C"),
    (162, "P-31M"),
    (163, "P-31C"),
    (164, "P-3M1"),
    (165, "P-3C1"),
    (166, "R-3M"),
    (167, "R-3C"),
    (168, "P6"),
    (169, "P61"),
    (170, "P65"),
    (171, "P62"),
    (172, "P64"),
    (173, "P63"),
    (174, "P-6"),
    (175, "P6/M"),
    (176, "P63/M"),
    (177, "P622"),
    (178, "P6122"),
    (179, "P6522"),
    (180, "P6222"),
    (181, "P6422"),
    (182, "P6322"),
    (183, "P6MM"),
    (184, "P6CC"),
    (185, "P63CM"),
    (186, "P63MC"),
    (187, "P-6M2"),
    (188, "P-6C2"),
    (189, "P-62M"),
    (190, "P-62C"),
    (191, "P6/MMM"),
    (192, "P6/MCC"),
    (193, "P63/MCM"),
    (194, "P63/MMC"),
    (195, "P23"),
    (196, "F23"),
    (197, "I23"),
    (198, "P213"),
    (199, "I213"),
    (200, "PM-3"),
    (201, "PN-3"),
    (202, "FM-3"),
    (203, "FD-3"),
    (204, "IM-3"),
    (205, "PA-3"),
    (206, "IA-3"),
    (207, "P432"),
    (208, "P4232"),
    (209, "F432"),
    (210, "F4132"),
    (211, "I432"),
    (212, "P4332"),
    (213, "P4132"),
    (214, "I4132"),
    (215, "P-43M"),
    (216, "F-43M"),
    (217, "I-43M"),
    (218, "P-43N"),
    (219, "F-43C"),
    (220, "I-43D"),
    (221, "PM-3M"),
    (222, "PN-3N"),
    (223, "PM-3N"),
    (224, "PN-3M"),
    (225, "FM-3M"),
    (226, "FM-3C"),
    (227, "FD-3M"),
    (228, "FD-3C"),
    (229, "IM-3M"),
    (230, "IA-3D"),
];

/// 归一化空间群符号：去空白、统一大写
///
/// CRYSTAL 打印时在各位置之间插入空格，并可能使用单斜完整符号
/// (如 "P 1 21/C 1")，此处同时去掉冗余的 "1" 设置位。
fn normalize(symbol: &str) -> String {
    let tokens: Vec<&str> = symbol.split_whitespace().collect();

    // 完整单斜符号 "X 1 ... 1" -> 去掉首尾的 "1"
    let tokens = if tokens.len() >= 4
        && tokens[1] == "1"
        && tokens[tokens.len() - 1] == "1"
    {
        let mut t = vec![tokens[0]];
        t.extend(&tokens[2..tokens.len() - 1]);
        t
    } else {
        tokens
    };

    tokens.join("").to_ascii_uppercase()
}

/// 由 Hermann-Mauguin 符号查国际空间群编号
///
/// 先按精确归一化符号匹配；失败时再做忽略 "-" 的宽松匹配
/// (例如旧式写法 "FD3M" 对应 "FD-3M")，但要求唯一命中。
pub fn space_group_number(symbol: &str) -> Result<u16> {
    let query = normalize(symbol);
    if query.is_empty() {
        return Err(CrysgenError::UnknownSpaceGroup(symbol.to_string()));
    }

    if let Some(&(num, _)) = SPACE_GROUPS.iter().find(|(_, s)| *s == query) {
        return Ok(num);
    }

    let stripped = query.replace('-', "");
    let loose: Vec<u16> = SPACE_GROUPS
        .iter()
        .filter(|(_, s)| s.replace('-', "") == stripped)
        .map(|&(num, _)| num)
        .collect();

    match loose.as_slice() {
        [num] => Ok(*num),
        _ => Err(CrysgenError::UnknownSpaceGroup(symbol.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(SPACE_GROUPS.len(), 230);
        for (i, &(num, _)) in SPACE_GROUPS.iter().enumerate() {
            assert_eq!(num as usize, i + 1);
        }
    }

    #[test]
    fn test_spaced_crystal_symbols() {
        assert_eq!(space_group_number("P 63 M C").unwrap(), 186);
        assert_eq!(space_group_number("P 63 2 2").unwrap(), 182);
        assert_eq!(space_group_number("F D -3 M").unwrap(), 227);
        assert_eq!(space_group_number("P 21 21 21").unwrap(), 19);
    }

    #[test]
    fn test_monoclinic_full_symbol() {
        // CRYSTAL 的单斜完整符号带 "1" 设置位
        assert_eq!(space_group_number("P 1 C 1").unwrap(), 7);
        assert_eq!(space_group_number("P 1 21/C 1").unwrap(), 14);
    }

    #[test]
    fn test_loose_match_without_minus() {
        assert_eq!(space_group_number("FD3M").unwrap(), 227);
        // "P4" 必须精确命中 75 号而不是 81 号 P-4
        assert_eq!(space_group_number("P 4").unwrap(), 75);
    }

    #[test]
    fn test_unknown_symbol_fails() {
        assert!(space_group_number("Q 42").is_err());
        assert!(space_group_number("").is_err());
    }
}
