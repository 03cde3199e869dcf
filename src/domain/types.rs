// ==========================================
// 校园活动排程系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 标识类型别名
// ==========================================
// 外部数据的主键均为字符串 (导入层不做格式假设)

/// 活动场次ID
pub type ItemId = String;

/// 活动类别ID (同一类别可有多个平行场次)
pub type EventId = String;

/// 学生ID
pub type StudentId = String;

// ==========================================
// 分配运行状态 (Allocation Status)
// ==========================================
// 修复预算耗尽属于带内状态,不是错误: 运行仍然完整返回,
// 调用方必须检查状态后再信任分配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    Completed,             // 正常完成
    RepairBudgetExhausted, // 修复预算耗尽 (结果不可靠)
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStatus::Completed => write!(f, "COMPLETED"),
            AllocationStatus::RepairBudgetExhausted => write!(f, "REPAIR_BUDGET_EXHAUSTED"),
        }
    }
}
