// ==========================================
// 仓库库存管理系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 校验失败以 Result 返回,不使用 panic
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 唯一性约束错误 =====
    #[error("物品已存在: id={id}")]
    DuplicateItem { id: u32 },

    // ===== 查找错误 =====
    #[error("物品未找到: id={id}")]
    NotFound { id: u32 },

    // ===== 数据校验错误 =====
    #[error("数量非法: {quantity} (数量不能为负数)")]
    InvalidQuantity { quantity: i32 },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
