// ==========================================
// 仓库库存管理系统 - 库存实体定义
// ==========================================
// 红线: 实体为不可变值,数量变更必须经由仓储操作
// 红线: id 由调用方分配,核心不生成、不去重
// ==========================================

use crate::domain::types::ItemCategory;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// InventoryItem - 实体能力契约
// ==========================================
// 仓储层的泛型约束: 暴露唯一整数主键与数量
// 数量替换通过 with_quantity 返回新值,不提供字段级可变性
pub trait InventoryItem: Clone {
    /// 唯一整数主键（仓储实例内唯一）
    fn id(&self) -> u32;

    /// 展示名称（非空）
    fn name(&self) -> &str;

    /// 当前数量（存量实体恒 >= 0）
    fn quantity(&self) -> i32;

    /// 物品类别
    fn category(&self) -> ItemCategory;

    /// 返回数量替换后的新实体,其余字段保持不变
    #[must_use]
    fn with_quantity(&self, quantity: i32) -> Self;
}

// ==========================================
// ElectronicItem - 电子产品
// ==========================================
// 类型专属字段: 品牌 + 保修月数,构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub brand: String,          // 品牌
    pub warranty_months: i32,   // 保修月数
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i32,
        brand: impl Into<String>,
        warranty_months: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl InventoryItem for ElectronicItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::Electronic
    }

    fn with_quantity(&self, quantity: i32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ID: {}, 名称: {}, 品牌: {}, 数量: {}, 保修: {} 个月",
            self.category().label(),
            self.id,
            self.name,
            self.brand,
            self.quantity,
            self.warranty_months
        )
    }
}

// ==========================================
// GroceryItem - 生鲜食品
// ==========================================
// 类型专属字段: 保质期(ISO 日期),构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate, // 保质期
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

impl InventoryItem for GroceryItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::Grocery
    }

    fn with_quantity(&self, quantity: i32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ID: {}, 名称: {}, 数量: {}, 保质期: {}",
            self.category().label(),
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

// ==========================================
// InventoryRecord - 库存流水记录
// ==========================================
// 用途: 库存日志(InventoryLogger)的标准记录类型
// 入库时间序列化为 RFC 3339,保证跨会话可解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub date_added: DateTime<Utc>, // 入库时间
}

impl InventoryRecord {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl InventoryItem for InventoryRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::General
    }

    fn with_quantity(&self, quantity: i32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ID: {}, 名称: {}, 数量: {}, 入库时间: {}",
            self.category().label(),
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d")
        )
    }
}
