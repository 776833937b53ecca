use serde::{Deserialize, Serialize};

/// 题目类型：单选或多选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multi,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Single
    }
}

/// 最终输出条目
///
/// 字段约定（查看器依赖的契约）：
/// - `options` 的下标顺序即字母顺序（0 = "A"）
/// - `correct` 中的下标引用同一顺序
/// - 输出数组按 `id` 升序排列，即默认展示顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    /// 正整数编号，输出集合内唯一
    pub id: u32,
    /// 规范化后的题干，非空
    pub question: String,
    /// 选项文本，字母顺序；解析不出时缺省
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// 正确选项下标集合，升序去重；无法判定时缺省
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<Vec<usize>>,
    /// 自由文本答案（无选项时的主要载体，有选项时作为文字兜底）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// 自由文本解析说明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_absent_fields() {
        let item = QuizItem {
            id: 7,
            question: "示例题干".to_string(),
            options: None,
            correct: None,
            answer: None,
            notes: None,
            question_type: QuestionType::Single,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""id":7"#));
        assert!(json.contains(r#""type":"single""#));
        assert!(!json.contains("options"));
        assert!(!json.contains("correct"));
        assert!(!json.contains("answer"));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_question_type_rename() {
        assert_eq!(serde_json::to_string(&QuestionType::Multi).unwrap(), r#""multi""#);
        assert_eq!(serde_json::to_string(&QuestionType::Single).unwrap(), r#""single""#);
    }
}
