//! # Quiz Extract
//!
//! 一个把非结构化的题目源文档与答案源文本整理为规范化 questions.json 的离线流水线
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/decoder` - 源文档解码（PDF / 纯文本），只暴露"解码为文本"能力
//!
//! ### ② 业务能力层（Services）
//! - `services/normalizer` - 空白符 / 换行规范化
//! - `services/segmenter` - 题目源、答案源的分块切分（有序模式匹配器）
//! - `services/option_parser` - 选项标签解析与折行合并
//! - `services/answer_extractor` - 答案指示行定位、解析说明与候选字母收集
//! - `services/fuzzy_matcher` - 词元重叠度模糊匹配
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/extract_flow` - 定义"一次完整抽取"的流程：
//!   题目切分 → 选项解析 → 答案切分 → 对账合并
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用生命周期：解码 → 流水线 → 序列化写出 → 统计
//!
//! ## 设计原则
//!
//! 1. **启发式缺失不是错误**：选项解析失败、答案缺失、编号对不上，都只表现为
//!    可选字段缺省，条目照常输出
//! 2. **结构性失败立即终止**：源文档不可读 / 不可解码直接报错退出，不写任何输出
//! 3. **单次批处理**：每次运行从两份源文本完整重建输出，无增量状态

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Block, QuestionRecord, QuestionType, QuizItem, SolutionRecord};
pub use orchestrator::App;
pub use workflow::ExtractFlow;
