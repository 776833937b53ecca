//! 命令行参数定义
//!
//! 三个路径参数全部必填：题目源、答案源、输出文件。
//! 任意一个缺失时由 clap 向标准错误输出用法说明并以非零码退出，流水线不会启动。

use clap::Parser;
use std::path::PathBuf;

/// 题库抽取流水线：从题目源文档与答案源文本生成规范化的 questions.json
#[derive(Debug, Clone, Parser)]
#[command(name = "quiz_extract", version)]
pub struct Cli {
    /// 题目源文档路径（.pdf 按 PDF 解码，其余按 UTF-8 纯文本读取）
    #[arg(short = 'q', long = "questions", value_name = "FILE")]
    pub questions: PathBuf,

    /// 答案源文本路径（`<编号>] <内容>` 分块格式）
    #[arg(short = 's', long = "solutions", value_name = "FILE")]
    pub solutions: PathBuf,

    /// 输出 JSON 文档路径
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,
}
