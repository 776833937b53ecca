//! 抽取流程 - 流程层
//!
//! 核心职责：定义"一次完整抽取"的流程
//!
//! 流程顺序：
//! 1. 题目源 → 切分 → 选项解析 → 题目记录列表
//! 2. 答案源 → 切分 → 答案抽取 → 按编号索引的答案记录表
//! 3. 按编号对账合并，产出按 `id` 升序的最终条目列表
//!
//! 对账时正确选项下标的解析顺序：
//! 1. 候选字母直接映射下标（越界的丢弃，去重升序）
//! 2. 自由文本答案对选项做词元重叠度模糊匹配（达到阈值才接受）
//! 3. 都不成立则 `correct` 缺省
//!
//! 找不到对应答案块的题目照常输出（answer / notes / correct 全缺省），
//! 流水线绝不因为补全失败而丢弃题目记录。

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{QuestionRecord, QuestionType, QuizItem, SolutionRecord};
use crate::services::{answer_extractor, fuzzy_matcher, normalizer, option_parser, segmenter};
use crate::utils::logging::truncate_text;

/// 抽取流程
///
/// - 编排完整的抽取流程，不持有任何 IO 资源
/// - 只依赖业务能力（services）
/// - 同步单遍处理，无运行间共享状态
pub struct ExtractFlow {
    fuzzy_threshold: f64,
    verbose_logging: bool,
}

impl ExtractFlow {
    /// 创建新的抽取流程
    pub fn new(config: &Config) -> Self {
        Self {
            fuzzy_threshold: config.fuzzy_match_threshold,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 执行完整抽取，返回按 `id` 升序的最终条目列表
    pub fn run(&self, question_text: &str, solution_text: &str) -> Vec<QuizItem> {
        let questions = self.collect_questions(question_text);
        info!("✓ 题目切分完成，共 {} 道题目", questions.len());

        let solutions = self.collect_solutions(solution_text);
        info!("✓ 答案索引完成，共 {} 条答案记录", solutions.len());

        self.reconcile(questions, solutions)
    }

    // ========== 题目侧 ==========

    fn collect_questions(&self, text: &str) -> Vec<QuestionRecord> {
        let blocks = segmenter::segment_questions(text);
        let mut records: Vec<QuestionRecord> = Vec::new();

        for block in blocks {
            let (header_lines, option_lines) = segmenter::split_header_options(&block.lines);
            let question = normalizer::normalize_inline(&header_lines.join(" "));
            if question.is_empty() {
                warn!("⚠️ 编号 {} 的块没有题干内容，丢弃", block.id);
                continue;
            }

            // 块已按编号升序排列，重复编号只保留先出现的块
            if records.last().map_or(false, |last: &QuestionRecord| last.id == block.id) {
                warn!("⚠️ 题目源中编号 {} 出现多次，保留先出现的块", block.id);
                continue;
            }

            let options = option_parser::parse_options(option_lines);
            let qtype = option_parser::detect_multi_choice(&question);

            if self.verbose_logging {
                info!(
                    "题目 {} | 选项 {} 个 | 题干: {}",
                    block.id,
                    options.as_ref().map_or(0, |o| o.len()),
                    truncate_text(&question, 60)
                );
            }

            records.push(QuestionRecord { id: block.id, question, options, qtype });
        }

        records
    }

    // ========== 答案侧 ==========

    fn collect_solutions(&self, text: &str) -> HashMap<u32, SolutionRecord> {
        let blocks = segmenter::segment_solutions(text);
        let mut map: HashMap<u32, SolutionRecord> = HashMap::new();

        for block in blocks {
            let record = answer_extractor::extract_answer(&block.lines);
            // 编号冲突按"后写覆盖"处理，但必须可见，不能静默
            if map.insert(block.id, record).is_some() {
                warn!("⚠️ 答案源中编号 {} 出现多次，保留后出现的条目", block.id);
            }
        }

        map
    }

    // ========== 对账合并 ==========

    fn reconcile(
        &self,
        questions: Vec<QuestionRecord>,
        mut solutions: HashMap<u32, SolutionRecord>,
    ) -> Vec<QuizItem> {
        let mut items: Vec<QuizItem> = Vec::new();

        for question in questions {
            let solution = solutions.remove(&question.id);
            if solution.is_none() {
                debug!("题目 {} 没有对应的答案块", question.id);
            }

            let correct = self.resolve_correct(&question, solution.as_ref());

            // 题目侧识别出的类型优先，否则按解出的正确选项数量推断
            let question_type = question.qtype.unwrap_or(match &correct {
                Some(indexes) if indexes.len() > 1 => QuestionType::Multi,
                _ => QuestionType::Single,
            });

            let mut answer = solution.as_ref().and_then(|s| s.answer.clone());
            let notes = solution.as_ref().and_then(|s| s.notes.clone());

            // 文字答案缺失或过短、而选项和下标都齐备时，合成可读答案，
            // 保证选项可解的条目都有一个非平凡的 answer 字段
            if answer.as_deref().map_or(true, |a| a.chars().count() < 2) {
                if let (Some(indexes), Some(options)) = (&correct, &question.options) {
                    answer = Some(synthesize_answer(indexes, options));
                }
            }

            if self.verbose_logging {
                info!(
                    "对账 {} | correct: {:?} | 类型: {:?}",
                    question.id, correct, question_type
                );
            }

            items.push(QuizItem {
                id: question.id,
                question: question.question,
                options: question.options,
                correct,
                answer,
                notes,
                question_type,
            });
        }

        // 输出契约：最终列表按编号升序
        items.sort_by_key(|item| item.id);
        items
    }

    /// 解析正确选项下标
    fn resolve_correct(
        &self,
        question: &QuestionRecord,
        solution: Option<&SolutionRecord>,
    ) -> Option<Vec<usize>> {
        let solution = solution?;
        let options = question.options.as_ref()?;

        // 第一级：候选字母直接映射（A→0 …），越界的丢弃
        if !solution.letters.is_empty() {
            let indexes: Vec<usize> = solution
                .letters
                .iter()
                .map(|&letter| (letter as u8 - b'A') as usize)
                .filter(|&index| index < options.len())
                .collect();
            if !indexes.is_empty() {
                // letters 本身已升序去重，过滤不破坏有序性
                return Some(indexes);
            }
        }

        // 第二级：自由文本答案的模糊匹配
        let answer = solution.answer.as_deref()?;
        fuzzy_matcher::best_match(answer, options, self.fuzzy_threshold).map(|index| vec![index])
    }
}

/// 把每个正确选项列成 `"<字母>. <选项文本>"`，按行拼接
fn synthesize_answer(indexes: &[usize], options: &[String]) -> String {
    indexes
        .iter()
        .map(|&index| format!("{}. {}", (b'A' + index as u8) as char, options[index]))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> ExtractFlow {
        ExtractFlow::new(&Config::default())
    }

    #[test]
    fn test_single_choice_letter_mapping_end_to_end() {
        let question_text = "5] Which service provides object storage?\nA. EBS\nB. S3\nC. EFS";
        let solution_text = "5] ans- B\nS3 is purpose-built object storage.";

        let items = flow().run(question_text, solution_text);
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.id, 5);
        assert_eq!(item.question, "Which service provides object storage?");
        assert_eq!(
            item.options.as_deref(),
            Some(&["EBS".to_string(), "S3".to_string(), "EFS".to_string()][..])
        );
        assert_eq!(item.correct.as_deref(), Some(&[1usize][..]));
        assert_eq!(item.question_type, QuestionType::Single);
        // 文字答案 "B" 过短，合成为可读形式
        assert_eq!(item.answer.as_deref(), Some("B. S3"));
        assert!(item.notes.as_deref().unwrap().contains("purpose-built object storage"));
    }

    #[test]
    fn test_question_without_solution_still_emitted() {
        let items = flow().run("7] Lonely question\nA. one\nB. two", "");
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, 7);
        assert!(item.answer.is_none());
        assert!(item.notes.is_none());
        assert!(item.correct.is_none());
        assert_eq!(item.question_type, QuestionType::Single);
    }

    #[test]
    fn test_choose_two_is_multi_without_solution() {
        let items = flow().run(
            "3] Which two options fit? (Choose two.)\nA. one\nB. two\nC. three",
            "",
        );
        assert_eq!(items[0].question_type, QuestionType::Multi);
        assert!(items[0].correct.is_none());
    }

    #[test]
    fn test_multi_letters_map_to_sorted_unique_indexes() {
        let items = flow().run(
            "1] Pick services. (Choose two.)\nA. one\nB. two\nC. three",
            "1] ans: C\nAlso A is correct.",
        );
        let item = &items[0];
        assert_eq!(item.correct.as_deref(), Some(&[0usize, 2][..]));
        assert_eq!(item.question_type, QuestionType::Multi);
        // 文字答案 "C" 过短，合成答案按字母顺序逐行列出
        assert_eq!(item.answer.as_deref(), Some("A. one\nC. three"));
    }

    #[test]
    fn test_out_of_range_letters_fall_back_to_fuzzy() {
        // 字母 F 越界被丢弃，回退到自由文本模糊匹配
        let items = flow().run(
            "2] Which storage? \nA. EBS volume\nB. S3 bucket",
            "2] answer: F\nUse the Amazon S3 bucket for this.",
        );
        // "F" 与选项词元无重叠，模糊匹配也不过阈值
        assert!(items[0].correct.is_none());
        assert_eq!(items[0].answer.as_deref(), Some("F"));
    }

    #[test]
    fn test_fuzzy_match_resolves_single_index() {
        let items = flow().run(
            "4] Where should the data go?\nA. EBS volume\nB. S3 bucket\nC. EFS share",
            "4] answer: the Amazon S3 bucket",
        );
        let item = &items[0];
        assert_eq!(item.correct.as_deref(), Some(&[1usize][..]));
        // 文字答案足够长，不触发合成
        assert_eq!(item.answer.as_deref(), Some("the Amazon S3 bucket"));
    }

    #[test]
    fn test_inferred_multi_from_resolved_correct() {
        // 题干没有多选提示语，但解出两个下标时推断为多选
        let items = flow().run(
            "6] Pick the right ones.\nA. one\nB. two\nC. three",
            "6] correct: A B",
        );
        assert_eq!(items[0].correct.as_deref(), Some(&[0usize, 1][..]));
        assert_eq!(items[0].question_type, QuestionType::Multi);
    }

    #[test]
    fn test_duplicate_solution_ids_last_write_wins() {
        let items = flow().run(
            "9] Which one?\nA. alpha\nB. beta",
            "9] ans: A\n9] ans: B",
        );
        assert_eq!(items[0].correct.as_deref(), Some(&[1usize][..]));
    }

    #[test]
    fn test_output_sorted_by_id() {
        let items = flow().run("12] twelve\n3] three\n7] seven", "");
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 7, 12]);
    }

    #[test]
    fn test_no_options_keeps_free_text_answer() {
        let items = flow().run(
            "8] Explain the shared responsibility model.",
            "8] answer: AWS secures the cloud, customers secure what is in the cloud.",
        );
        let item = &items[0];
        assert!(item.options.is_none());
        assert!(item.correct.is_none());
        assert!(item.answer.as_deref().unwrap().starts_with("AWS secures"));
    }
}
