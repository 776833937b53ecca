//! 选项解析 - 业务能力层
//!
//! 在一个题目块的选项段内隔离出按标签排列的选项文本。
//! 标签限定为单个字母 A-J（最多支持 10 个选项），折行的续行并入当前选项。
//! 选项行缺失或畸形不是错误，该条目的 `options` 缺省即可。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::QuestionType;
use crate::services::normalizer;

/// 选项标签：单个字母 A-J 后跟 `.` 或 `)` 加空白
static OPTION_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-J])[.)]\s+(\S.*)$").unwrap());

/// 题干中出现这些提示语时判定为多选题
const MULTI_CHOICE_PHRASES: [&str; 4] = [
    "choose two",
    "choose three",
    "choose all that apply",
    "select all that apply",
];

/// 判断一行是否是选项标签行
pub fn is_option_line(line: &str) -> bool {
    OPTION_LABEL_RE.is_match(line)
}

/// 取出选项标签行的（字母，正文）
pub fn capture_option_label(line: &str) -> Option<(char, &str)> {
    let caps = OPTION_LABEL_RE.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    Some((letter, caps.get(2).map_or("", |m| m.as_str())))
}

/// 解析选项段
///
/// 遍历行：标签行开启新的选项缓冲（剥掉标签前缀），非标签行作为折行续文
/// 并入当前缓冲；遇到下一个标签或输入结束时，缓冲规范化后按序落盘。
/// 一个选项都切不出来时返回 `None`。
pub fn parse_options(lines: &[String]) -> Option<Vec<String>> {
    let mut options: Vec<String> = Vec::new();
    let mut buffer: Option<String> = None;

    for line in lines {
        if let Some((_, text)) = capture_option_label(line) {
            if let Some(finished) = buffer.take() {
                options.push(normalizer::normalize_inline(&finished));
            }
            buffer = Some(text.to_string());
        } else if let Some(current) = &mut buffer {
            current.push(' ');
            current.push_str(line);
        }
    }

    if let Some(finished) = buffer.take() {
        options.push(normalizer::normalize_inline(&finished));
    }

    if options.is_empty() {
        None
    } else {
        Some(options)
    }
}

/// 扫描规范化后的题干，识别多选提示语
///
/// 命中返回 `Some(Multi)`；未命中返回 `None`，交给对账阶段按解出的
/// 正确选项数量推断（默认单选）。
pub fn detect_multi_choice(question: &str) -> Option<QuestionType> {
    let lowered = question.to_lowercase();
    if MULTI_CHOICE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        Some(QuestionType::Multi)
    } else {
        None
    }
}
