/// 程序配置
///
/// 所有配置在启动时从环境变量一次性读入并显式注入，核心流水线不直接读环境。
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志（每道题的对账结果）
    pub verbose_logging: bool,
    /// 是否把解码后的题目源文本落盘，便于排查切分问题
    pub dump_decoded_text: bool,
    /// 解码文本的落盘路径
    pub dump_file: String,
    /// 模糊匹配的接受阈值（词元重叠度，经验值，勿随意调整）
    pub fuzzy_match_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            dump_decoded_text: false,
            dump_file: "decoded_questions.txt".to_string(),
            fuzzy_match_threshold: 0.35,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            dump_decoded_text: std::env::var("DUMP_DECODED_TEXT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dump_decoded_text),
            dump_file: std::env::var("DUMP_FILE").unwrap_or(default.dump_file),
            fuzzy_match_threshold: std::env::var("FUZZY_MATCH_THRESHOLD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fuzzy_match_threshold),
        }
    }
}
