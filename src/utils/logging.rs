//! 日志工具模块
//!
//! 提供日志初始化和输出格式化的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖。
/// 重复调用不报错（测试里会多次初始化）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(questions: &str, solutions: &str, output: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库抽取流水线");
    info!("📖 题目源: {}", questions);
    info!("📖 答案源: {}", solutions);
    info!("📝 输出: {}", output);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(items_written: usize, output: &str) {
    info!("{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 写出条目: {}", items_written);
    info!("📝 输出文档: {}", output);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
