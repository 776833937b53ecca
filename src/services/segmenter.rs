//! 源文本分块切分 - 业务能力层
//!
//! 把原始多行文本切成以编号为键的 `Block` 序列。
//!
//! 题目源的块起始识别用一组**有序**的模式匹配器依次尝试，每个匹配器产出一个
//! 带标签的起始事件。两种模式对应实际观察到的两种源排版，不需要预先分类：
//! 1. 主题页眉式：主题标签后跟 `#` 前缀的编号（如 `Topic 1 Question #12`）
//! 2. 行首小整数加分隔符（如 `12] ...`、`12. ...`、`12) ...`）
//!
//! 答案源只有一种更严格的模式：行首 1-4 位正整数紧跟 `]`，同行可以带正文。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Block;
use crate::services::normalizer;
use crate::services::option_parser;

/// 主题页眉式题号，编号带 `#` 前缀
static TOPIC_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:topic\s*\d*\s*)?question\s*#\s*(\d{1,4})").unwrap());

/// 行首小整数加分隔符。分隔符后必须是空白或行尾，
/// 避免把 `10.0.0.0/16` 这类折行内容误判为块起始
static NUMBERED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})\s*[\]).](?:\s+(.*))?$").unwrap());

/// 答案源块起始：正整数紧跟 `]`
static SOLUTION_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})\](?:\s*(.*))?$").unwrap());

/// 带标签的块起始事件，由有序匹配器产出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockStart {
    /// 主题页眉式题号，页眉行本身不算正文
    TopicHeader { id: u32 },
    /// 行首编号加分隔符，分隔符后的剩余文本是第一行正文
    NumberedLine { id: u32, rest: Option<String> },
}

/// 依次尝试题目源的两个块起始匹配器，全不命中返回 `None`
fn match_question_start(line: &str) -> Option<BlockStart> {
    if let Some(caps) = TOPIC_HEADER_RE.captures(line) {
        if let Some(id) = parse_block_id(&caps[1]) {
            return Some(BlockStart::TopicHeader { id });
        }
    }
    if let Some(caps) = NUMBERED_LINE_RE.captures(line) {
        if let Some(id) = parse_block_id(&caps[1]) {
            let rest = caps.get(2).map(|m| m.as_str().to_string());
            return Some(BlockStart::NumberedLine { id, rest });
        }
    }
    None
}

/// 答案源的单一块起始匹配器
fn match_solution_start(line: &str) -> Option<BlockStart> {
    let caps = SOLUTION_LINE_RE.captures(line)?;
    let id = parse_block_id(&caps[1])?;
    let rest = caps.get(2).map(|m| m.as_str().to_string()).filter(|s| !s.is_empty());
    Some(BlockStart::NumberedLine { id, rest })
}

/// 编号必须是正整数，`0` 不算有效块起始
fn parse_block_id(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&id| id > 0)
}

/// 切分题目源文本为块序列，按编号升序返回（源内顺序不可信）
///
/// 第一个编号标记之前的正文静默丢弃，不产出无编号的残块。
pub fn segment_questions(text: &str) -> Vec<Block> {
    collect_blocks(text, match_question_start, true)
}

/// 切分答案源文本为块序列，保持源内顺序
///
/// 这里不做编号唯一性检查，编号冲突留给对账阶段构建查找表时处理。
pub fn segment_solutions(text: &str) -> Vec<Block> {
    collect_blocks(text, match_solution_start, false)
}

fn collect_blocks(
    text: &str,
    matcher: impl Fn(&str) -> Option<BlockStart>,
    sort_by_id: bool,
) -> Vec<Block> {
    let normalized = normalizer::normalize_block(text);
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;

    for line in normalized.lines() {
        // 空行直接丢弃
        if line.is_empty() {
            continue;
        }

        match matcher(line) {
            Some(BlockStart::TopicHeader { id }) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(Block { id, lines: Vec::new() });
            }
            Some(BlockStart::NumberedLine { id, rest }) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                let lines = rest.into_iter().collect();
                current = Some(Block { id, lines });
            }
            None => {
                // 尚未遇到任何编号标记时的正文属于孤儿前缀，静默丢弃
                if let Some(block) = &mut current {
                    block.lines.push(line.to_string());
                }
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    if sort_by_id {
        blocks.sort_by_key(|block| block.id);
    }
    blocks
}

/// 把块内的行按第一条选项标签行切成（题干行，选项行）两段
///
/// 块内没有选项标签行时整块都是题干，选项段为空。
pub fn split_header_options(lines: &[String]) -> (&[String], &[String]) {
    match lines.iter().position(|line| option_parser::is_option_line(line)) {
        Some(pos) => lines.split_at(pos),
        None => (lines, &[][..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_header_pattern() {
        assert_eq!(
            match_question_start("Topic 1 Question #12"),
            Some(BlockStart::TopicHeader { id: 12 })
        );
        assert_eq!(
            match_question_start("Question #5"),
            Some(BlockStart::TopicHeader { id: 5 })
        );
        assert_eq!(match_question_start("Which service is correct?"), None);
    }

    #[test]
    fn test_numbered_line_pattern() {
        assert_eq!(
            match_question_start("5] Which service provides object storage?"),
            Some(BlockStart::NumberedLine {
                id: 5,
                rest: Some("Which service provides object storage?".to_string())
            })
        );
        assert_eq!(
            match_question_start("12."),
            Some(BlockStart::NumberedLine { id: 12, rest: None })
        );
        // 折行中的 IP 段不是块起始
        assert_eq!(match_question_start("10.0.0.0/16"), None);
        // 编号必须是正整数
        assert_eq!(match_question_start("0] nothing"), None);
        // 超过 4 位的数字不算编号
        assert_eq!(match_question_start("20230101] text"), None);
    }

    #[test]
    fn test_solution_start_requires_immediate_bracket() {
        assert!(match_solution_start("5] ans- B").is_some());
        assert!(match_solution_start("5 ] ans- B").is_none());
        assert!(match_solution_start("5. ans- B").is_none());
    }

    #[test]
    fn test_segment_questions_sorts_and_drops_orphans() {
        let text = "前言部分应当被丢弃\n3] 第三题\nA. 甲\n\n1] 第一题\nA. 乙";
        let blocks = segment_questions(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, 1);
        assert_eq!(blocks[1].id, 3);
        assert_eq!(blocks[1].lines, vec!["第三题", "A. 甲"]);
    }

    #[test]
    fn test_segment_questions_dual_layouts_in_one_source() {
        let text = "Topic 1 Question #2\nStem two\n1] Stem one";
        let blocks = segment_questions(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, 1);
        assert_eq!(blocks[0].lines, vec!["Stem one"]);
        assert_eq!(blocks[1].id, 2);
        assert_eq!(blocks[1].lines, vec!["Stem two"]);
    }

    #[test]
    fn test_segment_solutions_keeps_source_order_and_duplicates() {
        let text = "2] second\n1] first\n2] second again";
        let blocks = segment_solutions(text);
        let ids: Vec<u32> = blocks.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }

    #[test]
    fn test_split_header_options() {
        let lines: Vec<String> = ["题干第一行", "题干第二行", "A. 选项甲", "B. 选项乙"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (header, options) = split_header_options(&lines);
        assert_eq!(header.len(), 2);
        assert_eq!(options.len(), 2);

        let no_options: Vec<String> = vec!["只有题干".to_string()];
        let (header, options) = split_header_options(&no_options);
        assert_eq!(header.len(), 1);
        assert!(options.is_empty());
    }
}
