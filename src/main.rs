use anyhow::Result;
use clap::Parser;
use quiz_extract::cli::Cli;
use quiz_extract::config::Config;
use quiz_extract::orchestrator::App;
use quiz_extract::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 解析命令行参数（缺少必需参数时 clap 向 stderr 输出用法并以非零码退出）
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config, cli)?.run().await?;

    Ok(())
}
