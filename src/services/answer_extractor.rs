//! 答案抽取 - 业务能力层
//!
//! 在一个答案块内定位答案指示行、解析说明（notes）与显式字母引用。
//!
//! 指示行解析按三级回退，先命中先用：
//! 1. 整行式指示（"ans" / "answer(s)" / "correct answer(s)" / "correct option(s)"
//!    后跟 `-` 或 `:`）
//! 2. 行内任意位置出现 "answer" 加分隔符，按第一个分隔符切开
//! 3. 兜底：第一非空行当答案，其余当说明——对部分完全无结构的答案条目的
//!    明确妥协
//!
//! 与指示行解析无关，另外独立收集候选字母：提到 correct / ans / answer 的行上
//! 孤立的单字母 A-J，加上说明里形如选项标签（"A. ..."）的行首字母。
//! 这组字母是后续下标映射的独立证据，不要求与自由文本答案一致。

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::models::SolutionRecord;
use crate::services::normalizer;
use crate::services::option_parser;

/// 第一级：整行式答案指示
static ANSWER_INDICATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:correct\s+answers?|correct\s+options?|answers?|ans)\s*[-:]\s*(.*)$")
        .unwrap()
});

/// 第二级：行内 "answer" 后第一个 `-` / `:` 分隔
static INLINE_ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*?\banswers?\b[^:-]*[-:]\s*(.*)$").unwrap());

/// 候选字母只从提到这些词的行上收集
static ANSWER_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:correct|answers?|ans)\b").unwrap());

/// 从答案块的行序列抽取答案、说明与候选字母
pub fn extract_answer(lines: &[String]) -> SolutionRecord {
    let (answer, notes) = resolve_answer_and_notes(lines);
    let letters = collect_letters(lines, notes.as_deref());
    SolutionRecord { answer, notes, letters }
}

/// 三级回退解析答案与说明
fn resolve_answer_and_notes(lines: &[String]) -> (Option<String>, Option<String>) {
    // 第一级：整行式指示行
    for (index, line) in lines.iter().enumerate() {
        if let Some(caps) = ANSWER_INDICATOR_RE.captures(line) {
            let answer = non_empty(normalizer::normalize_inline(&caps[1]));
            return (answer, join_notes(&lines[index + 1..]));
        }
    }

    // 第二级：行内分隔
    for (index, line) in lines.iter().enumerate() {
        if let Some(caps) = INLINE_ANSWER_RE.captures(line) {
            let answer = non_empty(normalizer::normalize_inline(&caps[1]));
            return (answer, join_notes(&lines[index + 1..]));
        }
    }

    // 第三级兜底：第一非空行当答案
    match lines.iter().position(|line| !line.trim().is_empty()) {
        Some(index) => {
            let answer = non_empty(normalizer::normalize_inline(&lines[index]));
            (answer, join_notes(&lines[index + 1..]))
        }
        None => (None, None),
    }
}

/// 收集候选字母集合（升序去重）
fn collect_letters(lines: &[String], notes: Option<&str>) -> Vec<char> {
    let mut letters: BTreeSet<char> = BTreeSet::new();

    for line in lines {
        if !ANSWER_MENTION_RE.is_match(line) {
            continue;
        }
        for token in line.split(|c: char| !c.is_ascii_alphanumeric()) {
            let mut chars = token.chars();
            if let (Some(letter), None) = (chars.next(), chars.next()) {
                if letter.is_ascii_uppercase() && ('A'..='J').contains(&letter) {
                    letters.insert(letter);
                }
            }
        }
    }

    // 说明里形如选项标签的行，行首字母也算候选
    if let Some(notes) = notes {
        for line in notes.lines() {
            if let Some((letter, _)) = option_parser::capture_option_label(line) {
                letters.insert(letter);
            }
        }
    }

    letters.into_iter().collect()
}

fn join_notes(lines: &[String]) -> Option<String> {
    non_empty(normalizer::normalize_block(&lines.join("\n")))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
