// ==========================================
// 校园活动排程系统 - 活动场次领域模型
// ==========================================
// 用途: 导入层写入,引擎层读取并回填 student_ids
// ==========================================

use crate::domain::types::{EventId, ItemId, StudentId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Item - 活动场次
// ==========================================
// 一个场次是某个活动类别 (event_id) 的一次具体开设:
// 固定时间窗 + 席位容量。同一类别可有多个平行场次。
// 目标不变量: 引擎完成后 student_ids.len() <= capacity
// (修复期间允许瞬时超出)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    // ===== 主键 =====
    pub item_id: ItemId,            // 场次唯一标识

    // ===== 基础信息 =====
    pub title: String,              // 场次名称
    pub event_id: EventId,          // 所属活动类别

    // ===== 时间窗 =====
    pub start_time: NaiveDateTime,  // 开始时间
    pub end_time: NaiveDateTime,    // 结束时间

    // ===== 容量 =====
    pub capacity: u32,              // 席位容量

    // ===== 分配结果 (引擎回填) =====
    #[serde(default)]
    pub student_ids: Vec<StudentId>, // 已分配学生,落位顺序保留
}

impl Item {
    /// 判断两个场次的时间窗是否重叠
    pub fn overlaps(&self, other: &Item) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// 判断本场次结束后能否衔接另一场次
    pub fn precedes(&self, other: &Item) -> bool {
        self.end_time <= other.start_time
    }

    /// 已分配人数是否超出容量
    pub fn is_over_capacity(&self) -> bool {
        self.student_ids.len() as u32 > self.capacity
    }
}

// ==========================================
// 查询辅助函数
// ==========================================

/// 查找某学生被分配到的全部场次
///
/// # 参数
/// - `student_id`: 学生ID
/// - `items`: 场次集合
///
/// # 返回
/// 引用该学生的场次列表 (输入顺序)
pub fn items_assigned_to<'a>(student_id: &str, items: &'a [Item]) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.student_ids.iter().any(|id| id == student_id))
        .collect()
}
