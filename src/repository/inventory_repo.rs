// ==========================================
// 仓库库存管理系统 - 库存仓储
// ==========================================
// 职责: 单一实体类型的键值存取与数量变更
// 红线: 主键唯一性在任何操作后都必须成立,失败操作不留痕
// 红线: 数量变更必须经由 update_quantity,不提供旁路
// ==========================================

use crate::domain::item::InventoryItem;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// InventoryRepository - 库存仓储
// ==========================================
// 泛型约束: T 实现 InventoryItem 能力契约
pub struct InventoryRepository<T: InventoryItem> {
    items: HashMap<u32, T>,
}

impl<T: InventoryItem> InventoryRepository<T> {
    /// 创建空仓储
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 物品入库
    ///
    /// # 参数
    /// - `item`: 库存实体,id 由调用方分配
    ///
    /// # 返回
    /// - `Ok(())`: 入库成功
    /// - `Err(DuplicateItem)`: id 已存在,原实体保持不变
    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateItem { id });
        }

        self.items.insert(id, item);
        debug!(id, "物品已入库");
        Ok(())
    }

    /// 物品出库
    ///
    /// # 返回
    /// - `Ok(item)`: 被移除的实体,其余条目不受影响
    /// - `Err(NotFound)`: id 不存在
    pub fn remove(&mut self, id: u32) -> RepositoryResult<T> {
        let removed = self
            .items
            .remove(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        debug!(id, "物品已出库");
        Ok(removed)
    }

    /// 替换指定物品的数量,其余字段保持不变
    ///
    /// # 参数
    /// - `id`: 物品主键
    /// - `new_quantity`: 新数量,必须 >= 0
    ///
    /// # 返回
    /// - `Err(InvalidQuantity)`: 数量为负。数量契约无条件成立,
    ///   先于存在性校验
    /// - `Err(NotFound)`: id 不存在
    pub fn update_quantity(&mut self, id: u32, new_quantity: i32) -> RepositoryResult<()> {
        if new_quantity < 0 {
            return Err(RepositoryError::InvalidQuantity {
                quantity: new_quantity,
            });
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        *item = item.with_quantity(new_quantity);
        debug!(id, new_quantity, "物品数量已更新");
        Ok(())
    }

    // ==========================================
    // 查询操作
    // ==========================================

    /// 按主键查找
    ///
    /// 返回共享引用;调用方不得绕过仓储修改实体
    pub fn get_by_id(&self, id: u32) -> RepositoryResult<&T> {
        self.items.get(&id).ok_or(RepositoryError::NotFound { id })
    }

    /// 全量快照
    ///
    /// 返回克隆副本,顺序不保证;修改返回值不影响仓储
    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// 当前存量条目数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 仓储是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: InventoryItem> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}
