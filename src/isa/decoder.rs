//! 解码器框架
//!
//! 多个指令集扩展各自提供一个解码器，注册表按注册顺序依次尝试，
//! 最后以全通配的兜底模式收尾，保证任何 32-bit 指令字都恰好
//! 得到一个解码结果。

use crate::isa::instr_def::InstrDef;
use crate::isa::{DecodedInstr, RvInstr};
use std::sync::Arc;

/// 指令解码器 trait
///
/// 实现此 trait 以接入自定义指令集扩展
pub trait InstrDecoder: Send + Sync {
    /// 解码器名称
    fn name(&self) -> &str;

    /// 尝试解码指令
    ///
    /// 返回 `Some(decoded)` 如果能解码，否则返回 `None`
    fn decode(&self, raw: u32) -> Option<DecodedInstr>;
}

/// 兜底模式：全通配，任何指令字都命中，产出非法指令标记。
/// 它始终排在所有已注册模式之后，使 `decode` 成为全函数。
static FALLBACK: InstrDef = InstrDef::new("INV", 0, 0, |raw| RvInstr::Illegal { raw });

/// 解码器注册表
///
/// 按注册顺序依次尝试各解码器，先注册者优先；
/// 全部未命中时落入兜底模式。
pub struct DecoderRegistry {
    /// 注册的解码器列表（按注册顺序）
    decoders: Vec<Arc<dyn InstrDecoder>>,
}

impl DecoderRegistry {
    /// 创建空的解码器注册表
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// 创建包含 RV32I + RV32M 解码器的注册表
    pub fn with_rv32im() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(super::rv32i::RV32I_DECODER));
        registry.register(Arc::new(super::rv32m::RV32M_DECODER));
        registry
    }

    /// 注册一个解码器
    ///
    /// 注册顺序即匹配优先级，交叠的编码由先注册者裁决
    pub fn register(&mut self, decoder: Arc<dyn InstrDecoder>) {
        self.decoders.push(decoder);
    }

    /// 解码指令
    ///
    /// 全函数：任何指令字都恰好得到一个解码结果
    pub fn decode(&self, raw: u32) -> DecodedInstr {
        for decoder in &self.decoders {
            if let Some(decoded) = decoder.decode(raw) {
                return decoded;
            }
        }

        FALLBACK.decode_instr(raw)
    }

    /// 获取已注册的解码器数量
    pub fn decoder_count(&self) -> usize {
        self.decoders.len()
    }

    /// 列出所有已注册的解码器名称
    pub fn decoder_names(&self) -> Vec<&str> {
        self.decoders.iter().map(|d| d.name()).collect()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_rv32im()
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("decoders", &self.decoder_names())
            .finish()
    }
}
