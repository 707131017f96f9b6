// ==========================================
// 仓库库存管理系统 - 领域类型定义
// ==========================================
// 红线: 类别集合封闭,新增类别必须走穷举 match
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 物品类别 (Item Category)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与数据文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Electronic, // 电子产品
    Grocery,    // 生鲜食品
    General,    // 通用物品
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::Electronic => write!(f, "ELECTRONIC"),
            ItemCategory::Grocery => write!(f, "GROCERY"),
            ItemCategory::General => write!(f, "GENERAL"),
        }
    }
}

impl ItemCategory {
    /// 从字符串解析类别
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ELECTRONIC" => ItemCategory::Electronic,
            "GROCERY" => ItemCategory::Grocery,
            _ => ItemCategory::General, // 默认值
        }
    }

    /// 控制台展示用的类别标签
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Electronic => "Electronic",
            ItemCategory::Grocery => "Grocery",
            ItemCategory::General => "General",
        }
    }
}
