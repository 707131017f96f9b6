// ==========================================
// 仓库库存管理系统 - 库存日志
// ==========================================
// 职责: 有序记录缓冲 + 绑定文件的保存/加载
// 红线: 与键值仓储不共享存储,二者同步由调用方负责
// 红线: 加载成功才整体替换内存序列,失败不触碰
// ==========================================

use crate::domain::item::InventoryItem;
use crate::persistence::error::{PersistenceError, PersistenceResult};
use crate::persistence::serializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// ==========================================
// InventoryLogger - 库存日志
// ==========================================
// 生命周期: 每个会话从空序列开始,绑定唯一文件路径
pub struct InventoryLogger<T> {
    records: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: InventoryItem + Serialize + DeserializeOwned,
{
    /// 创建空日志并绑定数据文件路径
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// 追加一条记录到内存序列,保持插入顺序;不会失败
    pub fn add(&mut self, item: T) {
        self.records.push(item);
    }

    /// 内存序列的快照副本
    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// 当前记录条数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 日志是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 绑定的数据文件路径
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    // ==========================================
    // 文件存取
    // ==========================================

    /// 将当前内存序列整体写入绑定文件,覆盖旧内容
    ///
    /// # 返回
    /// - `Err(Io)`: 写入失败(权限、磁盘满等),只上报不重试;
    ///   内存序列不受失败影响
    pub fn save_to_file(&self) -> PersistenceResult<()> {
        let json = serializer::serialize_items(&self.records)?;
        fs::write(&self.file_path, json)?;

        info!(
            path = %self.file_path.display(),
            count = self.records.len(),
            "库存日志已保存"
        );
        Ok(())
    }

    /// 从绑定文件加载记录,成功后整体替换内存序列
    ///
    /// # 返回
    /// - `Ok(count)`: 加载成功,返回记录条数
    /// - `Err(FileNotFound)`: 文件不存在,可恢复条件,内存序列不变,
    ///   调用方以空集合继续
    /// - `Err(Format)`: 文件内容无法解析,内存序列保持加载前状态
    /// - `Err(Io)`: 读取失败(文件缺失之外的原因)
    pub fn load_from_file(&mut self) -> PersistenceResult<usize> {
        if !self.file_path.exists() {
            return Err(PersistenceError::FileNotFound(
                self.file_path.display().to_string(),
            ));
        }

        let text = fs::read_to_string(&self.file_path)?;
        let loaded: Vec<T> = serializer::deserialize_items(&text)?;

        let count = loaded.len();
        self.records = loaded;

        info!(
            path = %self.file_path.display(),
            count,
            "库存日志已加载"
        );
        Ok(count)
    }
}
