//! stride_sim: RV32IM 单步指令解释器核心
//!
//! 本库实现了一个功能正确、结构清晰的 RV32IM 指令级解释器核心：
//! 每次 `step()` 严格按 取指 → 匹配 → 提取 → 执行 → 提交 PC 的顺序
//! 完成一条指令，并以 `StepResult` 向外层监控器报告继续执行、
//! 宿主陷入（ebreak）、非法指令或访存故障。
//!
//! 交互式调试器、断点管理、外设模拟与镜像加载均不属于本库，
//! 由外层监控器基于 `StepResult` 自行实现。
//!
//! # 模块结构
//!
//! - `isa`: 指令模式表与操作数提取
//! - `cpu`: CPU 核心、寄存器文件与执行单元
//! - `memory`: 内存访问接口与平坦内存实现

pub mod cpu;
pub mod isa;
pub mod memory;
