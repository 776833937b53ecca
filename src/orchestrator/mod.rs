//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 管理一次运行的完整生命周期：
//! - 解码题目源文档、读取答案源文本（唯一的异步边界，等待完成后才开始切分）
//! - 驱动同步的抽取流程（workflow::ExtractFlow）
//! - 序列化并一次性写出输出文档
//! - 输出统计信息
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次运行)
//!     ↓
//! infrastructure::decoder (源文档 → 文本)
//!     ↓
//! workflow::ExtractFlow (文本 → Vec<QuizItem>)
//!     ↓
//! services (能力层：normalize / segment / parse / extract / match)
//! ```
//!
//! ## 设计原则
//!
//! 1. **无部分输出**：流水线要么完整跑完写出一份文档，要么报错退出什么都不写
//! 2. **无重试**：输入是静态本地文件，结构性失败直接向上传播
//! 3. **资源隔离**：只有编排层接触文件系统路径

pub mod app;

pub use app::App;
