//! 源文档解码 - 基础设施层
//!
//! 只暴露"把源文档解码为纯文本"这一个能力。
//! `.pdf` 后缀走 lopdf 逐页抽取文本，其余后缀按 UTF-8 纯文本整体读入。
//! 解码输出的排版质量不做保证，由下游的切分启发式自行容错。
//!
//! 单页抽取失败只告警跳过；整个文档一个字都抽不出来才算解码失败。

use lopdf::Document;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// 把源文档解码为纯文本（整体读入，不做流式处理）
pub async fn decode_source(path: &Path) -> AppResult<String> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        decode_pdf(path)
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))
    }
}

/// 用 lopdf 逐页抽取 PDF 文本
fn decode_pdf(path: &Path) -> AppResult<String> {
    let document = Document::load(path)
        .map_err(|e| AppError::pdf_load_failed(path.display().to_string(), e))?;

    let pages = document.get_pages();
    info!("📄 PDF 共 {} 页", pages.len());

    let mut text = String::new();
    for (&page_number, _) in pages.iter() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                warn!("⚠️ 第 {} 页文本抽取失败，跳过: {}", page_number, e);
            }
        }
    }

    if text.trim().is_empty() {
        return Err(AppError::empty_document(path.display().to_string()));
    }
    Ok(text)
}
