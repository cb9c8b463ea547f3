//! 指令模式条目
//!
//! 每条指令对应一条预编译好的 (mask, match_val) 整数对模式，
//! 启动即为常量，查表时不做任何文本解析。
//! 一处定义，两处使用：
//! - 解码：`(raw & mask) == match_val` 命中后调用 decode 函数
//! - 交叠检查：通过 mask/match 判断两条模式是否可能同时命中

use super::decoder::InstrDecoder;
use super::instr::{DecodedInstr, RvInstr};

/// 指令模式定义
#[derive(Clone)]
pub struct InstrDef {
    /// 指令名称（用于调试与交叠报告）
    pub name: &'static str,
    /// 匹配掩码：哪些位是固定位
    pub mask: u32,
    /// 匹配值：固定位应该是什么
    pub match_val: u32,
    /// 解码函数：从原始编码提取字段并构造 RvInstr
    pub decode: fn(u32) -> RvInstr,
}

impl InstrDef {
    /// 创建新的指令模式
    pub const fn new(
        name: &'static str,
        mask: u32,
        match_val: u32,
        decode: fn(u32) -> RvInstr,
    ) -> Self {
        Self {
            name,
            mask,
            match_val,
            decode,
        }
    }

    /// 检查指令字是否命中此模式
    #[inline]
    pub fn matches(&self, raw: u32) -> bool {
        (raw & self.mask) == self.match_val
    }

    /// 按此模式解码指令字
    #[inline]
    pub fn decode_instr(&self, raw: u32) -> DecodedInstr {
        DecodedInstr {
            raw,
            instr: (self.decode)(raw),
        }
    }

    /// 检查两条模式是否交叠
    ///
    /// 两条模式交叠当且仅当存在某个指令字同时命中两者
    pub fn conflicts_with(&self, other: &InstrDef) -> bool {
        let common_mask = self.mask & other.mask;
        (self.match_val & common_mask) == (other.match_val & common_mask)
    }
}

impl std::fmt::Debug for InstrDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrDef")
            .field("name", &self.name)
            .field("mask", &format_args!("0x{:08X}", self.mask))
            .field("match_val", &format_args!("0x{:08X}", self.match_val))
            .finish()
    }
}

// ========== 格式掩码常量 ==========

/// R-type 指令的 mask（固定位：opcode + funct3 + funct7）
///
/// RV32 的 SLLI/SRLI/SRAI 同样固定整个 funct7，因此共用此掩码
pub const R_TYPE_MASK: u32 = 0xFE00707F;

/// I-type 指令的 mask（固定位：opcode + funct3）
pub const I_TYPE_MASK: u32 = 0x707F;

/// S-type 指令的 mask（固定位：opcode + funct3）
pub const S_TYPE_MASK: u32 = 0x707F;

/// B-type 指令的 mask（固定位：opcode + funct3）
pub const B_TYPE_MASK: u32 = 0x707F;

/// U-type 指令的 mask（只固定 opcode）
pub const U_TYPE_MASK: u32 = 0x7F;

/// J-type 指令的 mask（只固定 opcode）
pub const J_TYPE_MASK: u32 = 0x7F;

/// 精确匹配整个指令字（用于 EBREAK）
pub const EXACT_MASK: u32 = 0xFFFFFFFF;

// ========== 辅助函数：构造 match 值 ==========

/// 构造带 funct7 + funct3 的 match 值
#[inline]
pub const fn r_match(funct7: u32, funct3: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (funct3 << 12) | opcode
}

/// 构造带 funct3 的 match 值
#[inline]
pub const fn i_match(funct3: u32, opcode: u32) -> u32 {
    (funct3 << 12) | opcode
}

// ========== 表驱动解码器 ==========

/// 表驱动解码器
///
/// 按声明顺序线性扫描模式表，第一条命中的模式生效，
/// 因此更具体的模式（固定位更多）必须排在更一般的模式之前
#[derive(Clone, Copy)]
pub struct TableDrivenDecoder {
    /// 解码器名称
    name: &'static str,
    /// 指令模式表
    instrs: &'static [InstrDef],
}

impl TableDrivenDecoder {
    /// 创建新的表驱动解码器
    pub const fn new(name: &'static str, instrs: &'static [InstrDef]) -> Self {
        Self { name, instrs }
    }

    /// 获取指令模式表
    pub fn instrs(&self) -> &'static [InstrDef] {
        self.instrs
    }
}

impl InstrDecoder for TableDrivenDecoder {
    fn name(&self) -> &str {
        self.name
    }

    fn decode(&self, raw: u32) -> Option<DecodedInstr> {
        for def in self.instrs {
            if def.matches(raw) {
                return Some(def.decode_instr(raw));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::rv32i::RV32I_INSTRS;
    use crate::isa::rv32m::RV32M_INSTRS;

    #[test]
    fn test_instr_def_matches() {
        let add_def = RV32I_INSTRS.iter().find(|d| d.name == "ADD").unwrap();

        // add x3, x1, x2: funct7=0, rs2=2, rs1=1, funct3=0, rd=3, op=0110011
        let add_raw = 0x002081B3;
        assert!(add_def.matches(add_raw));

        // sub x3, x1, x2: funct7=0100000
        let sub_raw = 0x402081B3;
        assert!(!add_def.matches(sub_raw));
    }

    #[test]
    fn test_instr_def_decode() {
        let addi_def = RV32I_INSTRS.iter().find(|d| d.name == "ADDI").unwrap();

        let raw = 0x02A00093; // addi x1, x0, 42
        let decoded = addi_def.decode_instr(raw);
        assert_eq!(
            decoded.instr,
            RvInstr::Addi {
                rd: 1,
                rs1: 0,
                imm: 42
            }
        );
    }

    #[test]
    fn test_no_conflict_within_rv32im() {
        // RV32I 与 RV32M 的任意两条模式都不应交叠
        for def1 in RV32I_INSTRS {
            for def2 in RV32M_INSTRS {
                assert!(
                    !def1.conflicts_with(def2),
                    "{} 与 {} 交叠",
                    def1.name,
                    def2.name
                );
            }
        }
    }

    #[test]
    fn test_conflict_detection() {
        // 两条固定位完全相同的模式必然交叠
        let def1 = InstrDef::new("TEST1", I_TYPE_MASK, 0x0033, |raw| RvInstr::Illegal { raw });
        let def2 = InstrDef::new("TEST2", I_TYPE_MASK, 0x0033, |raw| RvInstr::Illegal { raw });

        assert!(def1.conflicts_with(&def2));
    }

    #[test]
    fn test_rv32i_coverage() {
        assert_eq!(RV32I_INSTRS.len(), 38, "RV32I 模式表应覆盖 38 条指令");
    }

    #[test]
    fn test_rv32m_coverage() {
        assert_eq!(RV32M_INSTRS.len(), 8, "RV32M 应该有 8 条指令");
    }
}
