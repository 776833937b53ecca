//! 流水线中间记录
//!
//! 这些类型只在单次运行内部存在：切分器产出 `Block`，配对的抽取器立即消费，
//! 对账合并后全部丢弃，不做任何持久化。

/// 一段与某个编号关联的连续源文本行（字段抽取前的形态）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: u32,
    pub lines: Vec<String>,
}

/// 题目源抽取出的题目记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: u32,
    /// 规范化后的题干
    pub question: String,
    /// 字母顺序的选项文本；块内没有选项标签行时缺省
    pub options: Option<Vec<String>>,
    /// 题干中出现多选提示语时为 `Some(Multi)`，否则留给对账阶段推断
    pub qtype: Option<crate::models::QuestionType>,
}

/// 答案源抽取出的答案记录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionRecord {
    /// 自由文本答案
    pub answer: Option<String>,
    /// 自由文本解析说明
    pub notes: Option<String>,
    /// 候选字母集合（升序去重）。独立于 `answer` 收集，
    /// 作为下标映射的独立证据，两者不要求一致
    pub letters: Vec<char>,
}
