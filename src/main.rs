// ==========================================
// 校园活动排程系统 - 命令行入口
// ==========================================
// 用途: 加载数据集目录, 执行分配, 报告运行结果
// 用法: campus-event-aps [数据集目录]  (缺省: data)
// ==========================================

use anyhow::Context;
use campus_event_aps::domain::item::items_assigned_to;
use campus_event_aps::engine::AllocationOrchestrator;
use campus_event_aps::importer::DatasetImporter;
use campus_event_aps::EngineConfig;
use std::path::Path;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    campus_event_aps::logging::init();

    info!("==================================================");
    info!("{} - 学生分配引擎", campus_event_aps::APP_NAME);
    info!("系统版本: {}", campus_event_aps::VERSION);
    info!("==================================================");

    // 数据集目录 (argv[1], 缺省 data)
    let dataset_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    info!("使用数据集: {}", dataset_dir);

    let mut dataset = DatasetImporter::new()
        .load(Path::new(&dataset_dir))
        .with_context(|| format!("数据集加载失败: {}", dataset_dir))?;

    // 执行分配
    let orchestrator = AllocationOrchestrator::new(EngineConfig::default());
    let started = std::time::Instant::now();
    let result = orchestrator.allocate(
        &mut dataset.items,
        &dataset.students,
        &dataset.project,
        &dataset.polls,
    );
    let elapsed = started.elapsed();

    // 运行报告
    info!(
        group_count = result.group_count,
        path_count = result.path_count,
        repair_attempts = result.repair_attempts,
        elapsed_ms = elapsed.as_millis() as u64,
        "分配完成"
    );

    for student_id in &result.unassigned_students {
        warn!(%student_id, "学生未分配到任何场次");
    }

    for item in &dataset.items {
        info!(
            item_id = %item.item_id,
            event_id = %item.event_id,
            assigned = item.student_ids.len(),
            capacity = item.capacity,
            "场次占用"
        );
    }

    // 抽样核对: 每个学生的场次数
    for student in &dataset.students {
        let assigned = items_assigned_to(&student.student_id, &dataset.items);
        if assigned.is_empty() {
            continue;
        }
        info!(
            student_id = %student.student_id,
            item_count = assigned.len(),
            "学生分配明细"
        );
    }

    if result.repair_budget_exhausted {
        error!("修复预算耗尽, 分配结果不可靠");
        std::process::exit(1);
    }

    Ok(())
}
