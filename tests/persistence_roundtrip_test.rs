// ==========================================
// 持久化层集成测试
// ==========================================
// 测试目标: 验证保存 → 新会话加载的完整往返,
//           以及缺失文件/坏数据/写失败的处理
// ==========================================


use std::fs;
use warehouse_inventory::logging;
use warehouse_inventory::{InventoryLogger, InventoryRecord, PersistenceError};

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_save_then_load_restores_exact_snapshot() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();

    // 会话 1: 种子 + 保存
    let mut logger = InventoryLogger::new(path.clone());
    for record in test_helpers::seed_records() {
        logger.add(record);
    }
    let saved_snapshot = logger.get_all();
    logger.save_to_file().unwrap();

    // 会话 2: 重新绑定同一文件并加载
    let mut next_session: InventoryLogger<InventoryRecord> = InventoryLogger::new(path);
    let count = next_session.load_from_file().unwrap();

    assert_eq!(count, 5);
    // 逐字段相等,顺序保持
    assert_eq!(next_session.get_all(), saved_snapshot);
}

#[test]
fn test_load_missing_file_is_recoverable() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();
    let mut logger: InventoryLogger<InventoryRecord> = InventoryLogger::new(path.clone());

    let result = logger.load_from_file();

    assert!(matches!(result, Err(PersistenceError::FileNotFound(_))));
    // 内存序列保持为空,调用方以空集合继续
    assert!(logger.is_empty());

    // 随后保存 → 加载恢复先前快照
    for record in test_helpers::seed_records() {
        logger.add(record);
    }
    let snapshot = logger.get_all();
    logger.save_to_file().unwrap();

    let mut reloaded: InventoryLogger<InventoryRecord> = InventoryLogger::new(path);
    reloaded.load_from_file().unwrap();
    assert_eq!(reloaded.get_all(), snapshot);
}

#[test]
fn test_load_replaces_not_merges() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();

    let mut writer = InventoryLogger::new(path.clone());
    writer.add(InventoryRecord::new(
        1,
        "Headset",
        10,
        test_helpers::fixed_date_added(),
    ));
    writer.save_to_file().unwrap();

    // 加载方此前已有本地记录,加载成功后被整体替换
    let mut reader = InventoryLogger::new(path);
    reader.add(InventoryRecord::new(
        99,
        "Local-only",
        1,
        test_helpers::fixed_date_added(),
    ));
    let count = reader.load_from_file().unwrap();

    assert_eq!(count, 1);
    let records = reader.get_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
}

#[test]
fn test_load_malformed_content_keeps_previous_records() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();
    fs::write(&path, "{ not a valid inventory file ]").unwrap();

    let mut logger = InventoryLogger::new(path);
    logger.add(InventoryRecord::new(
        7,
        "Scanner",
        4,
        test_helpers::fixed_date_added(),
    ));

    let result = logger.load_from_file();

    assert!(matches!(result, Err(PersistenceError::Format(_))));
    // 替换只在成功时发生,加载前的序列原样保留
    let records = logger.get_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 7);
}

#[test]
fn test_load_truncated_file_rejected() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();

    let mut writer = InventoryLogger::new(path.clone());
    for record in test_helpers::seed_records() {
        writer.add(record);
    }
    writer.save_to_file().unwrap();

    // 截断文件后半部分
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, &text[..text.len() / 2]).unwrap();

    let mut reader: InventoryLogger<InventoryRecord> = InventoryLogger::new(path);
    let result = reader.load_from_file();

    assert!(matches!(result, Err(PersistenceError::Format(_))));
    assert!(reader.is_empty());
}

#[test]
fn test_save_failure_keeps_memory_unchanged() {
    logging::init_test();

    let (dir, _path) = test_helpers::temp_data_file();
    // 目录不存在,写入必然失败
    let bad_path = dir.path().join("no-such-dir").join("inventory.json");

    let mut logger = InventoryLogger::new(bad_path);
    for record in test_helpers::seed_records() {
        logger.add(record);
    }

    let result = logger.save_to_file();

    assert!(matches!(result, Err(PersistenceError::Io(_))));
    // 失败的保存不改变内存序列
    assert_eq!(logger.len(), 5);
    assert_eq!(logger.get_all(), test_helpers::seed_records());
}

#[test]
fn test_saved_file_is_human_readable_utf8() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();

    let mut logger = InventoryLogger::new(path.clone());
    logger.add(InventoryRecord::new(
        1,
        "Headset",
        10,
        test_helpers::fixed_date_added(),
    ));
    logger.save_to_file().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"name\": \"Headset\""));
    assert!(text.contains("\"quantity\": 10"));
    // 时间字段为 RFC 3339 日历时间
    assert!(text.contains("2025-01-15T08:30:00Z"));
}

#[test]
fn test_overwrite_replaces_prior_file_content() {
    logging::init_test();

    let (_dir, path) = test_helpers::temp_data_file();

    let mut first = InventoryLogger::new(path.clone());
    for record in test_helpers::seed_records() {
        first.add(record);
    }
    first.save_to_file().unwrap();

    // 第二次保存更少的记录,旧内容被完整覆盖
    let mut second = InventoryLogger::new(path.clone());
    second.add(InventoryRecord::new(
        42,
        "Label Printer",
        2,
        test_helpers::fixed_date_added(),
    ));
    second.save_to_file().unwrap();

    let mut reader: InventoryLogger<InventoryRecord> = InventoryLogger::new(path);
    let count = reader.load_from_file().unwrap();

    assert_eq!(count, 1);
    assert_eq!(reader.get_all()[0].id, 42);
}
