// ==========================================
// 仓库库存管理系统 - 实体序列化器
// ==========================================
// 格式: JSON 数组,带缩进,字段名稳定
// 往返律: deserialize(serialize(xs)) == xs,顺序保持
// ==========================================

use crate::persistence::error::PersistenceResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 将有序实体序列编码为带缩进的 JSON 文本
///
/// 每条记录携带实体的全部字段,输出顺序与输入一致
pub fn serialize_items<T: Serialize>(items: &[T]) -> PersistenceResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// 从 JSON 文本还原有序实体序列
///
/// # 返回
/// - `Err(Format)`: 文本不是目标实体类型的合法编码
///   (字段缺失、类型不符、内容截断)
pub fn deserialize_items<T: DeserializeOwned>(text: &str) -> PersistenceResult<Vec<T>> {
    Ok(serde_json::from_str(text)?)
}
