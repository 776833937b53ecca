//! 文本规范化 - 业务能力层
//!
//! 所有后续组件都建立在这里的两个纯函数之上。
//! 两个函数对任意字符串全定义，没有错误分支。

use once_cell::sync::Lazy;
use regex::Regex;

/// 行内水平空白：普通空格、制表符、不间断空格、全角空格
static INLINE_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\x{00A0}\x{3000}]+").unwrap());

/// 行内规范化：连续水平空白压缩为单个空格并去掉两端空白，不触碰换行符
pub fn normalize_inline(text: &str) -> String {
    INLINE_WS_RE.replace_all(text, " ").trim().to_string()
}

/// 块规范化：统一换行符为 `\n`，逐行压缩水平空白并去掉行两端空白，
/// 最后去掉整块首尾的空白行
pub fn normalize_block(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<String> = unified.lines().map(normalize_inline).collect();
    lines.join("\n").trim_matches('\n').to_string()
}
