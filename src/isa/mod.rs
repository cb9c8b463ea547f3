//! RISC-V ISA 抽象与解码框架
//!
//! 本模块提供表驱动的指令解码系统：
//! - `RvInstr`: 指令的语义表示
//! - `InstrDef`: 预编译的 (mask, match) 指令模式，同时用于解码和交叠检查
//! - `InstrDecoder` / `DecoderRegistry`: 解码器 trait 与按优先级排列的注册表
//! - `fields`: 操作数与立即数提取

mod decoder;
mod fields;
mod instr;
mod instr_def;
mod rv32i;
mod rv32m;

pub use decoder::{DecoderRegistry, InstrDecoder};
pub use fields::*;
pub use instr::{DecodedInstr, RvInstr};
pub use instr_def::{InstrDef, TableDrivenDecoder};
pub use rv32i::{RV32I_DECODER, RV32I_INSTRS};
pub use rv32m::{RV32M_DECODER, RV32M_INSTRS};

/// 便捷函数：按默认 RV32IM 模式表解码单条指令
pub fn decode(raw: u32) -> DecodedInstr {
    RV32I_DECODER
        .decode(raw)
        .or_else(|| RV32M_DECODER.decode(raw))
        .unwrap_or(DecodedInstr {
            raw,
            instr: RvInstr::Illegal { raw },
        })
}
