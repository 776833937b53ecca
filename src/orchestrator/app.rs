//! 应用主结构 - 编排层
//!
//! 一次运行：解码两份源 → 抽取流程 → 序列化写出 → 统计

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::decoder;
use crate::models::QuizItem;
use crate::utils::logging;
use crate::workflow::ExtractFlow;

/// 应用主结构
pub struct App {
    config: Config,
    cli: Cli,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, cli: Cli) -> Result<Self> {
        logging::log_startup(
            &cli.questions.display().to_string(),
            &cli.solutions.display().to_string(),
            &cli.output.display().to_string(),
        );
        Ok(Self { config, cli })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 1. 解码题目源文档（等待完成后才进入切分）
        info!("📖 正在解码题目源...");
        let question_text = decoder::decode_source(&self.cli.questions)
            .await
            .with_context(|| format!("题目源解码失败: {}", self.cli.questions.display()))?;
        info!("✓ 题目源解码完成，共 {} 个字符", question_text.chars().count());

        self.dump_decoded_text(&question_text).await;

        // 2. 读取答案源文本
        let solution_text = tokio::fs::read_to_string(&self.cli.solutions)
            .await
            .with_context(|| format!("答案源读取失败: {}", self.cli.solutions.display()))?;
        info!("✓ 答案源读取完成，共 {} 个字符", solution_text.chars().count());

        // 3. 抽取流程（同步单遍）
        let flow = ExtractFlow::new(&self.config);
        let items = flow.run(&question_text, &solution_text);

        // 4. 序列化并一次性写出
        self.write_output(&items).await?;

        logging::print_final_stats(items.len(), &self.cli.output.display().to_string());
        Ok(())
    }

    /// 调试开关打开时把解码文本落盘，失败只告警不中断
    async fn dump_decoded_text(&self, text: &str) {
        if !self.config.dump_decoded_text {
            return;
        }
        match tokio::fs::write(&self.config.dump_file, text).await {
            Ok(_) => info!("🗂️ 解码文本已落盘: {}", self.config.dump_file),
            Err(e) => warn!("⚠️ 解码文本落盘失败 ({}): {}", self.config.dump_file, e),
        }
    }

    /// 输出文档：QuizItem 数组的 pretty JSON，末尾补一个换行
    async fn write_output(&self, items: &[QuizItem]) -> Result<()> {
        let json = serde_json::to_string_pretty(items).map_err(AppError::from)?;
        let path = self.cli.output.display().to_string();
        tokio::fs::write(&self.cli.output, format!("{}\n", json))
            .await
            .map_err(|e| AppError::output_write_failed(path, e))?;
        Ok(())
    }
}
