// ==========================================
// 仓库库存管理系统 - 控制台入口
// ==========================================
// 系统定位: 库存核心演示 (种子数据 + 异常路径 + 持久化往返)
// 核心逻辑全部在库中,本入口只做编排与展示
// ==========================================

use chrono::{Duration, Utc};
use tracing::{error, info, warn};
use warehouse_inventory::config::StorageConfig;
use warehouse_inventory::{
    logging, ElectronicItem, GroceryItem, InventoryLogger, InventoryRecord, InventoryRepository,
    PersistenceError,
};

fn main() {
    // 初始化日志系统
    logging::init();

    info!("==================================================");
    info!("{}", warehouse_inventory::APP_NAME);
    info!("系统版本: {}", warehouse_inventory::VERSION);
    info!("==================================================");

    if let Err(e) = run() {
        error!("运行失败: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // ==========================================
    // 种子数据
    // ==========================================
    let today = Utc::now().date_naive();

    let mut electronics = InventoryRepository::new();
    electronics.add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
    electronics.add(ElectronicItem::new(2, "Smartphone", 20, "Samsung", 12))?;
    electronics.add(ElectronicItem::new(3, "TV", 5, "LG", 36))?;
    electronics.add(ElectronicItem::new(4, "Ipad", 13, "Apple", 36))?;

    let mut groceries = InventoryRepository::new();
    groceries.add(GroceryItem::new(101, "Milk", 50, today + Duration::days(7)))?;
    groceries.add(GroceryItem::new(102, "Bread", 30, today + Duration::days(3)))?;
    groceries.add(GroceryItem::new(103, "Eggs", 60, today + Duration::days(10)))?;

    info!("--- 生鲜库存 ---");
    for item in groceries.get_all() {
        info!("{}", item);
    }

    info!("--- 电子产品库存 ---");
    for item in electronics.get_all() {
        info!("{}", item);
    }

    // ==========================================
    // 异常路径演示
    // ==========================================
    info!("--- 异常路径演示 ---");

    if let Err(e) = electronics.add(ElectronicItem::new(1, "Duplicate Laptop", 5, "HP", 12)) {
        warn!("重复入库被拒绝: {}", e);
    }

    if let Err(e) = groceries.remove(999) {
        warn!("出库失败: {}", e);
    }

    if let Err(e) = groceries.update_quantity(101, -10) {
        warn!("数量更新被拒绝: {}", e);
    }

    // 正常补货: 101 号在途 +30
    let current = groceries.get_by_id(101)?.quantity;
    groceries.update_quantity(101, current + 30)?;
    info!("补货完成: {}", groceries.get_by_id(101)?);

    // ==========================================
    // 库存日志: 保存/加载往返
    // ==========================================
    let config = StorageConfig::resolve();
    info!("数据文件: {}", config.data_file.display());

    let mut logger = InventoryLogger::new(config.data_file.clone());
    logger.add(InventoryRecord::new(1, "Headset", 10, Utc::now()));
    logger.add(InventoryRecord::new(2, "Mouse", 50, Utc::now()));
    logger.add(InventoryRecord::new(3, "hpLaptop", 30, Utc::now()));
    logger.add(InventoryRecord::new(4, "Smartphone", 20, Utc::now()));
    logger.add(InventoryRecord::new(5, "Printer", 15, Utc::now()));

    logger.save_to_file()?;

    // 模拟新会话: 重新绑定同一文件并加载
    info!("--- 模拟新会话 ---");
    let mut next_session: InventoryLogger<InventoryRecord> =
        InventoryLogger::new(config.data_file.clone());

    match next_session.load_from_file() {
        Ok(count) => info!("历史库存记录已加载: {} 条", count),
        Err(PersistenceError::FileNotFound(path)) => {
            // 可恢复条件: 以空日志继续
            warn!("数据文件不存在,以空日志启动: {}", path);
        }
        Err(e) => return Err(e.into()),
    }

    info!("--- 库存流水 ---");
    for record in next_session.get_all() {
        info!("{}", record);
    }

    Ok(())
}
