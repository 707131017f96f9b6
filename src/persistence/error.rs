// ==========================================
// 仓库库存管理系统 - 持久化层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 文件缺失与其他 I/O 失败分开上报,
//       前者是可恢复条件,调用方以空集合继续
// ==========================================

use thiserror::Error;

/// 持久化层错误类型
#[derive(Error, Debug)]
pub enum PersistenceError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    // ===== 数据格式错误 =====
    #[error("数据格式错误: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result 类型别名
pub type PersistenceResult<T> = Result<T, PersistenceError>;
