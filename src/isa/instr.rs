//! 指令的语义化表示
//!
//! 解码阶段一次性完成字段提取与符号扩展，每个枚举变体携带
//! 该指令所需的全部操作数；执行阶段只做语义动作，分支少、
//! 结构清晰，新增指令只需扩展枚举与模式表。

/// RV32IM 指令的语义化表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvInstr {
    // ========== R-type 算术/逻辑指令 ==========
    /// ADD: rd = rs1 + rs2
    Add { rd: u8, rs1: u8, rs2: u8 },
    /// SUB: rd = rs1 - rs2
    Sub { rd: u8, rs1: u8, rs2: u8 },
    /// AND: rd = rs1 & rs2
    And { rd: u8, rs1: u8, rs2: u8 },
    /// OR: rd = rs1 | rs2
    Or { rd: u8, rs1: u8, rs2: u8 },
    /// XOR: rd = rs1 ^ rs2
    Xor { rd: u8, rs1: u8, rs2: u8 },
    /// SLT: rd = (rs1 < rs2) ? 1 : 0 (有符号比较)
    Slt { rd: u8, rs1: u8, rs2: u8 },
    /// SLTU: rd = (rs1 < rs2) ? 1 : 0 (无符号比较)
    Sltu { rd: u8, rs1: u8, rs2: u8 },
    /// SLL: rd = rs1 << rs2[4:0]
    Sll { rd: u8, rs1: u8, rs2: u8 },
    /// SRL: rd = rs1 >> rs2[4:0] (逻辑右移)
    Srl { rd: u8, rs1: u8, rs2: u8 },
    /// SRA: rd = rs1 >> rs2[4:0] (算术右移)
    Sra { rd: u8, rs1: u8, rs2: u8 },

    // ========== I-type 立即数算术/逻辑指令 ==========
    /// ADDI: rd = rs1 + imm
    Addi { rd: u8, rs1: u8, imm: i32 },
    /// ANDI: rd = rs1 & imm
    Andi { rd: u8, rs1: u8, imm: i32 },
    /// ORI: rd = rs1 | imm
    Ori { rd: u8, rs1: u8, imm: i32 },
    /// XORI: rd = rs1 ^ imm
    Xori { rd: u8, rs1: u8, imm: i32 },
    /// SLTI: rd = (rs1 < imm) ? 1 : 0 (有符号比较)
    Slti { rd: u8, rs1: u8, imm: i32 },
    /// SLTIU: rd = (rs1 < imm) ? 1 : 0 (无符号比较，imm 先符号扩展)
    Sltiu { rd: u8, rs1: u8, imm: i32 },
    /// SLLI: rd = rs1 << shamt
    Slli { rd: u8, rs1: u8, shamt: u8 },
    /// SRLI: rd = rs1 >> shamt (逻辑右移)
    Srli { rd: u8, rs1: u8, shamt: u8 },
    /// SRAI: rd = rs1 >> shamt (算术右移)
    Srai { rd: u8, rs1: u8, shamt: u8 },

    // ========== Load 指令 ==========
    /// LB: rd = sign_extend(mem8[rs1 + offset])
    Lb { rd: u8, rs1: u8, offset: i32 },
    /// LH: rd = sign_extend(mem16[rs1 + offset])
    Lh { rd: u8, rs1: u8, offset: i32 },
    /// LW: rd = mem32[rs1 + offset]
    Lw { rd: u8, rs1: u8, offset: i32 },
    /// LBU: rd = zero_extend(mem8[rs1 + offset])
    Lbu { rd: u8, rs1: u8, offset: i32 },
    /// LHU: rd = zero_extend(mem16[rs1 + offset])
    Lhu { rd: u8, rs1: u8, offset: i32 },

    // ========== Store 指令 ==========
    /// SB: mem8[rs1 + offset] = rs2[7:0]
    Sb { rs1: u8, rs2: u8, offset: i32 },
    /// SH: mem16[rs1 + offset] = rs2[15:0]
    Sh { rs1: u8, rs2: u8, offset: i32 },
    /// SW: mem32[rs1 + offset] = rs2
    Sw { rs1: u8, rs2: u8, offset: i32 },

    // ========== U-type 指令 ==========
    /// LUI: rd = imm (imm 已左移 12 位)
    Lui { rd: u8, imm: i32 },
    /// AUIPC: rd = pc + imm
    Auipc { rd: u8, imm: i32 },

    // ========== 控制流指令 ==========
    /// JAL: rd = snpc; dnpc = pc + offset
    Jal { rd: u8, offset: i32 },
    /// JALR: rd = snpc; dnpc = (rs1 + offset) & !1
    Jalr { rd: u8, rs1: u8, offset: i32 },
    /// BEQ: if (rs1 == rs2) dnpc = (pc + offset) & !1
    Beq { rs1: u8, rs2: u8, offset: i32 },
    /// BNE: if (rs1 != rs2) dnpc = (pc + offset) & !1
    Bne { rs1: u8, rs2: u8, offset: i32 },
    /// BLT: if (rs1 < rs2) dnpc = (pc + offset) & !1 (有符号)
    Blt { rs1: u8, rs2: u8, offset: i32 },
    /// BGE: if (rs1 >= rs2) dnpc = (pc + offset) & !1 (有符号)
    Bge { rs1: u8, rs2: u8, offset: i32 },
    /// BLTU: if (rs1 < rs2) dnpc = (pc + offset) & !1 (无符号)
    Bltu { rs1: u8, rs2: u8, offset: i32 },
    /// BGEU: if (rs1 >= rs2) dnpc = (pc + offset) & !1 (无符号)
    Bgeu { rs1: u8, rs2: u8, offset: i32 },

    // ========== M 扩展（乘除法）==========
    /// MUL: rd = (rs1 * rs2)[31:0]
    Mul { rd: u8, rs1: u8, rs2: u8 },
    /// MULH: rd = (rs1 * rs2)[63:32] (signed * signed)
    Mulh { rd: u8, rs1: u8, rs2: u8 },
    /// MULHSU: rd = (rs1 * rs2)[63:32] (signed * unsigned)
    Mulhsu { rd: u8, rs1: u8, rs2: u8 },
    /// MULHU: rd = (rs1 * rs2)[63:32] (unsigned * unsigned)
    Mulhu { rd: u8, rs1: u8, rs2: u8 },
    /// DIV: rd = rs1 / rs2 (有符号，向零截断)
    Div { rd: u8, rs1: u8, rs2: u8 },
    /// DIVU: rd = rs1 / rs2 (无符号)
    Divu { rd: u8, rs1: u8, rs2: u8 },
    /// REM: rd = rs1 % rs2 (有符号)
    Rem { rd: u8, rs1: u8, rs2: u8 },
    /// REMU: rd = rs1 % rs2 (无符号)
    Remu { rd: u8, rs1: u8, rs2: u8 },

    // ========== 特殊 ==========
    /// EBREAK: 宿主陷入，携带当前 pc 与 a0 作为退出码上报给监控器
    Ebreak,
    /// 非法指令（仅被兜底模式命中）
    Illegal { raw: u32 },
}

/// 已解码的指令
///
/// 包含原始编码与解码后的语义信息
#[derive(Debug, Clone, Copy)]
pub struct DecodedInstr {
    /// 原始 32-bit 指令编码
    pub raw: u32,
    /// 解码后的语义表示
    pub instr: RvInstr,
}
