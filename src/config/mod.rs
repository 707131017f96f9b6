// ==========================================
// 仓库库存管理系统 - 存储配置
// ==========================================
// 职责: 解析数据文件位置
// 优先级: 环境变量 > 用户数据目录 > 工作目录回退
// ==========================================

use std::path::PathBuf;

/// 数据文件路径的环境变量覆盖项（便于调试/测试/CI）
pub const DATA_PATH_ENV: &str = "WAREHOUSE_INVENTORY_DATA_PATH";

// ==========================================
// StorageConfig - 存储配置
// ==========================================
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// 库存日志的数据文件路径
    pub data_file: PathBuf,
}

impl StorageConfig {
    /// 按默认优先级解析存储配置
    pub fn resolve() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }

    /// 使用显式指定的数据文件路径
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
        }
    }
}

/// 解析默认数据文件路径
///
/// # 解析顺序
/// 1. 环境变量 WAREHOUSE_INVENTORY_DATA_PATH（非空时直接采用）
/// 2. 用户数据目录下的应用子目录（开发构建使用独立目录,避免污染生产数据）
/// 3. 工作目录回退 ./inventory.json
pub fn default_data_file() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let mut dir = PathBuf::from(".");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            dir = data_dir.join("warehouse-inventory-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            dir = data_dir.join("warehouse-inventory");
        }

        // 确保目录存在
        std::fs::create_dir_all(&dir).ok();
    }

    dir.join("inventory.json")
}
