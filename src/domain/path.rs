// ==========================================
// 校园活动排程系统 - 候选路径领域模型
// ==========================================
// 派生实体: 由路径枚举引擎构建,分配与修复阶段改写
// allocated, 落位阶段只读,运行结束即丢弃
// ==========================================

use crate::domain::types::ItemId;

// ==========================================
// CandidatePath - 候选路径
// ==========================================
// 一条路径是一组场次序列,恰好覆盖所属需求组的完整类别
// 需求 (全员必修 ∪ 组签名),每个类别一个场次。
#[derive(Debug, Clone)]
pub struct CandidatePath {
    pub group_id: u32,          // 所属需求组
    pub item_ids: Vec<ItemId>,  // 途径场次序列 (时间先后序)
    pub capacity_limit: u32,    // 容量上界 = 途径场次的最小容量
    pub allocated: i64,         // 已分配人数 (修复期间可为负,负值即异常信号)
}

impl CandidatePath {
    pub fn new(group_id: u32, item_ids: Vec<ItemId>, capacity_limit: u32) -> Self {
        Self {
            group_id,
            item_ids,
            capacity_limit,
            allocated: 0,
        }
    }

    /// 路径是否途经某场次
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }

    /// 剩余可分配额度
    pub fn remaining_capacity(&self) -> i64 {
        self.capacity_limit as i64 - self.allocated
    }
}
