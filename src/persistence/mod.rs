// ==========================================
// 仓库库存管理系统 - 持久化层
// ==========================================
// 职责: 实体序列的文本编码与文件存取
// 红线: 加载失败不得污染内存中的既有序列
// ==========================================

pub mod error;
pub mod inventory_log;
pub mod serializer;

// 重导出核心类型
pub use error::{PersistenceError, PersistenceResult};
pub use inventory_log::InventoryLogger;
