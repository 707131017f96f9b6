// ==========================================
// 仓库库存管理系统 - 核心库
// ==========================================
// 技术栈: Rust + serde/serde_json
// 系统定位: 可复用的库存核心 (仓储 + 持久化)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 键值存取
pub mod repository;

// 持久化层 - 序列化与文件存取
pub mod persistence;

// 配置层 - 存储位置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::ItemCategory;

// 领域实体
pub use domain::{ElectronicItem, GroceryItem, InventoryItem, InventoryRecord};

// 仓储
pub use repository::{InventoryRepository, RepositoryError, RepositoryResult};

// 持久化
pub use persistence::{InventoryLogger, PersistenceError, PersistenceResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓库库存管理系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
