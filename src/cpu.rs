//! CPU 核心与单步执行引擎
//!
//! 本模块定义 RV32IM 解释器核心 `CpuCore`。每次 `step()` 完成
//! 一条指令的完整生命周期：
//!
//! 1. 取指：从 PC 处读取指令字，同时得到顺序下址 snpc = pc + 4
//! 2. 匹配：按模式表选出指令（兜底模式保证总有结果）
//! 3. 提取：模式自带的解码函数完成字段与立即数提取
//! 4. 执行：执行单元读写寄存器/内存，必要时改写动态下址 dnpc
//! 5. 提交：dnpc 写回 PC
//!
//! 步进结果以 `StepResult` 上报；宿主陷入与两类故障都是终态，
//! 之后的 `step()` 原样返回同一结果。核心不做任何本地恢复，
//! 消息格式化与退出码解释由外层监控器负责。

use std::sync::Arc;

use crate::isa::{DecoderRegistry, RvInstr};
use crate::memory::{MemError, Memory};
use tracing::{trace, warn};

mod exu;
pub mod regfile;

pub use regfile::{REG_A0, REG_NAMES, RegFile};

/// 单步执行结果
///
/// `Continue` 之外的变体都是终态，携带触发点的 PC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// 正常执行完一条指令，携带提交后的新 PC
    Continue(u32),
    /// 宿主陷入（ebreak）：成功的终止请求，code 取自 a0
    HostTrap { pc: u32, code: u32 },
    /// 指令字只命中兜底模式
    DecodeFault { pc: u32 },
    /// 内存协作方报告的访问故障（取指或数据访问）
    MemoryFault { pc: u32, addr: u32 },
}

impl StepResult {
    /// 是否可以继续步进
    pub fn is_continue(&self) -> bool {
        matches!(self, StepResult::Continue(_))
    }
}

/// 单步译码/执行上下文
///
/// 每次 `step()` 新建、提交后丢弃。snpc 在取指时确定，
/// dnpc 初始等于 snpc，只有控制流指令会改写它；
/// 提交阶段无条件把 dnpc 写回 PC。
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    /// 本步取到的指令字
    pub word: u32,
    /// 本条指令的 PC
    pub pc: u32,
    /// 顺序下址：pc + 4
    pub snpc: u32,
    /// 动态下址：实际提交为新 PC 的地址
    pub dnpc: u32,
}

/// RV32IM 解释器核心
///
/// 包含最小架构状态：
/// - 32 个 32-bit 通用寄存器 x0..x31（x0 恒为 0，写入在写路径丢弃）
/// - 32-bit 程序计数器
///
/// 设计约定：
/// - 严格顺序执行，一条指令执行完才开始下一条，步内不可被观察
/// - 核心状态不依赖全局变量，取消/限步等策略在步边界由外层实现
pub struct CpuCore {
    /// 整数寄存器文件
    regs: RegFile,
    /// 程序计数器
    pc: u32,
    /// 终态结果；一旦置位，后续 step() 原样返回
    stopped: Option<StepResult>,
    /// 指令解码器
    decoder: Arc<DecoderRegistry>,
}

impl CpuCore {
    /// 创建一个新的 CPU 核心，使用默认 RV32IM 解码器
    ///
    /// # 参数
    ///
    /// * `entry_pc` - 初始程序计数器值
    ///
    /// # 示例
    ///
    /// ```
    /// use stride_sim::cpu::CpuCore;
    ///
    /// let cpu = CpuCore::new(0x1000);
    /// assert_eq!(cpu.pc(), 0x1000);
    /// ```
    pub fn new(entry_pc: u32) -> Self {
        Self::with_decoder(entry_pc, Arc::new(DecoderRegistry::with_rv32im()))
    }

    /// 使用自定义解码器注册表创建 CPU 核心
    pub fn with_decoder(entry_pc: u32, decoder: Arc<DecoderRegistry>) -> Self {
        CpuCore {
            regs: RegFile::new(),
            pc: entry_pc,
            stopped: None,
            decoder,
        }
    }

    /// 获取当前程序计数器值
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// 设置程序计数器
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// 读取寄存器，x0 总是返回 0
    pub fn read_reg(&self, reg: u8) -> u32 {
        self.regs.read(reg)
    }

    /// 写入寄存器，对 x0 的写入被丢弃
    pub fn write_reg(&mut self, reg: u8, value: u32) {
        self.regs.write(reg, value)
    }

    /// 获取所有寄存器的快照
    pub fn regs(&self) -> &[u32; 32] {
        self.regs.snapshot()
    }

    /// 按 ABI 名称（"sp"、"a0"、"$0"）或 xN 形式查询寄存器值，
    /// 供外层监控器使用
    pub fn reg_by_name(&self, name: &str) -> Option<u32> {
        RegFile::index_by_name(name).map(|idx| self.read_reg(idx))
    }

    /// 终态原因；`None` 表示仍可继续步进
    pub fn stop_reason(&self) -> Option<StepResult> {
        self.stopped
    }

    /// 是否仍可继续步进
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    /// 由执行单元设置终态（宿主陷入）
    pub(crate) fn halt(&mut self, result: StepResult) {
        self.stopped = Some(result);
    }

    /// 执行单步指令
    ///
    /// # 参数
    ///
    /// * `mem` - 内存接口，取指与数据访问共用
    ///
    /// # 返回
    ///
    /// 本步的 `StepResult`；若核心已处于终态则原样返回该终态
    pub fn step(&mut self, mem: &mut dyn Memory) -> StepResult {
        if let Some(result) = self.stopped {
            return result;
        }

        let pc = self.pc;

        // 取指
        let word = match mem.load32(pc) {
            Ok(word) => word,
            Err(e) => {
                warn!("instruction fetch fault at pc=0x{:08x}: {}", pc, e);
                let result = StepResult::MemoryFault { pc, addr: e.addr() };
                self.stopped = Some(result);
                return result;
            }
        };

        let mut ctx = StepContext {
            word,
            pc,
            snpc: pc.wrapping_add(4),
            dnpc: pc.wrapping_add(4),
        };

        // 匹配 + 提取
        let decoded = self.decoder.decode(word);
        trace!("step: pc=0x{:08x} inst=0x{:08x}", pc, word);

        // 执行
        if let Err(e) = self.execute(mem, decoded.instr, &mut ctx) {
            warn!("memory fault at pc=0x{:08x}: {}", pc, e);
            let result = StepResult::MemoryFault { pc, addr: e.addr() };
            self.stopped = Some(result);
            return result;
        }

        if let Some(result) = self.stopped {
            return result;
        }

        // 提交 PC
        self.pc = ctx.dnpc;
        StepResult::Continue(self.pc)
    }

    /// 运行多条指令
    ///
    /// # 参数
    ///
    /// * `mem` - 内存接口
    /// * `max_instructions` - 最大执行指令数（限步策略在步边界生效）
    ///
    /// # 返回
    ///
    /// 实际执行的指令数与最后一次 `step()` 的结果
    pub fn run(&mut self, mem: &mut dyn Memory, max_instructions: u64) -> (u64, StepResult) {
        let mut executed = 0;
        let mut last = StepResult::Continue(self.pc);
        for _ in 0..max_instructions {
            last = self.step(mem);
            executed += 1;
            if !last.is_continue() {
                break;
            }
        }
        (executed, last)
    }

    /// 执行已解码的指令，委托到分 ISA 的执行单元
    fn execute(
        &mut self,
        mem: &mut dyn Memory,
        instr: RvInstr,
        ctx: &mut StepContext,
    ) -> Result<(), MemError> {
        if exu::rv32i::execute(self, mem, instr, ctx)? {
            return Ok(());
        }

        if exu::rv32m::execute(self, instr) {
            return Ok(());
        }

        // 只剩兜底项：未被任何执行单元认领的编码按非法指令处理
        if let RvInstr::Illegal { raw } = instr {
            warn!("invalid instruction 0x{:08x} at pc=0x{:08x}", raw, ctx.pc);
        }
        self.stopped = Some(StepResult::DecodeFault { pc: ctx.pc });
        Ok(())
    }

    /// 打印所有寄存器（供外层监控器调试使用）
    pub fn dump_regs(&self) {
        println!("pc : 0x{:08x}", self.pc);
        for (idx, name) in REG_NAMES.iter().enumerate() {
            println!("{:<3}: 0x{:08x}", name, self.regs.read(idx as u8));
        }
    }
}

impl Default for CpuCore {
    fn default() -> Self {
        Self::new(0)
    }
}
