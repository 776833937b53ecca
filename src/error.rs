use std::fmt;

/// 应用程序错误类型
///
/// 只覆盖结构性 / IO 失败。启发式缺失（切不出选项、答案对不上编号等）
/// 不属于错误，由可选字段缺省表达。
#[derive(Debug)]
pub enum AppError {
    /// 源文档解码错误
    Decode(DecodeError),
    /// 文件操作错误
    File(FileError),
    /// 输出写出错误
    Output(OutputError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Decode(e) => write!(f, "解码错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Output(e) => write!(f, "输出错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Decode(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Output(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 源文档解码错误
#[derive(Debug)]
pub enum DecodeError {
    /// PDF 加载失败
    PdfLoadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 解码结果为空（文档无法提取出任何文本）
    EmptyDocument {
        path: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::PdfLoadFailed { path, source } => {
                write!(f, "无法加载PDF文档 ({}): {}", path, source)
            }
            DecodeError::EmptyDocument { path } => {
                write!(f, "文档未能解码出任何文本: {}", path)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::PdfLoadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            DecodeError::EmptyDocument { .. } => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 输出写出错误
#[derive(Debug)]
pub enum OutputError {
    /// JSON 序列化失败
    SerializeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入输出文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::SerializeFailed { source } => {
                write!(f, "JSON序列化失败: {}", source)
            }
            OutputError::WriteFailed { path, source } => {
                write!(f, "写入输出文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::SerializeFailed { source } | OutputError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(OutputError::SerializeFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建PDF加载错误
    pub fn pdf_load_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Decode(DecodeError::PdfLoadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建空文档错误
    pub fn empty_document(path: impl Into<String>) -> Self {
        AppError::Decode(DecodeError::EmptyDocument { path: path.into() })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建输出写入错误
    pub fn output_write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Output(OutputError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
