//! 模糊匹配 - 业务能力层
//!
//! 自由文本答案与选项文本之间的词元重叠度匹配。
//!
//! 注意这是一个**非对称**的包含度量：衡量的是"选项的词汇有多大比例出现在
//! 答案里"，不是对称相似度。阈值 0.35 是在真实源文档上调出来的经验值，
//! 两者都要原样保持；换新的源文档后若出现过匹配 / 欠匹配，先看这里。

use std::collections::HashSet;

/// 匹配前的规范化：小写化，非字母数字一律变空格
fn normalize_for_match(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// 词元重叠度 = |答案词元 ∩ 选项词元| / |选项词元|
///
/// 选项词元集为空时直接得 0，避免除零。
pub fn overlap_score(answer: &str, option: &str) -> f64 {
    let answer_norm = normalize_for_match(answer);
    let option_norm = normalize_for_match(option);

    let answer_tokens: HashSet<&str> = answer_norm.split_whitespace().collect();
    let option_tokens: HashSet<&str> = option_norm.split_whitespace().collect();
    if option_tokens.is_empty() {
        return 0.0;
    }

    let hits = option_tokens
        .iter()
        .filter(|token| answer_tokens.contains(*token))
        .count();
    hits as f64 / option_tokens.len() as f64
}

/// 在选项列表中找重叠度最高的一项
///
/// 遍历时只有**严格更高**的分数才会替换当前最优，平分保留靠前的选项；
/// 最优分数达到阈值才接受，否则返回 `None`。
pub fn best_match(answer: &str, options: &[String], threshold: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, option) in options.iter().enumerate() {
        let score = overlap_score(answer, option);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.filter(|&(_, score)| score >= threshold).map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlap_is_asymmetric() {
        // 选项词汇完全被答案覆盖时得满分，反方向不成立
        assert!((overlap_score("Amazon S3 bucket", "S3 bucket") - 1.0).abs() < f64::EPSILON);
        assert!(overlap_score("S3", "Amazon S3 bucket storage") < 1.0);
    }

    #[test]
    fn test_empty_option_scores_zero() {
        assert_eq!(overlap_score("anything", ""), 0.0);
        assert_eq!(overlap_score("anything", "!!!"), 0.0);
    }

    #[test]
    fn test_best_match_picks_highest_overlap() {
        let opts = options(&["EBS volume", "S3 bucket", "EFS share"]);
        assert_eq!(best_match("Amazon S3 bucket", &opts, 0.35), Some(1));
    }

    #[test]
    fn test_best_match_below_threshold() {
        let opts = options(&["EBS volume", "S3 bucket"]);
        assert_eq!(best_match("completely unrelated words", &opts, 0.35), None);
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let opts = options(&["use s3", "use s3"]);
        assert_eq!(best_match("use s3", &opts, 0.35), Some(0));
    }

    #[test]
    fn test_best_match_empty_options() {
        assert_eq!(best_match("anything", &[], 0.35), None);
    }
}
