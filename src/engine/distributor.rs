// ==========================================
// 校园活动排程系统 - 贪心分配引擎
// ==========================================
// 职责: 按优先级逐组把学生人数贪心分摊到该组的候选路径
// 输入: 需求组列表 + 运行上下文 (候选路径)
// 输出: 路径 allocated 更新; 超出容量的修复交给修复引擎
// ==========================================
// 优先级: 签名短的组先出队 —— 短签名组可选路径多、容易满足,
// 先处理可以把稀缺签名组的专属路径留到后面更受限的轮次
// ==========================================

use crate::domain::group::Group;
use crate::engine::context::RunContext;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

// ==========================================
// Distributor - 贪心分配引擎
// ==========================================
pub struct Distributor {
    // 无状态引擎,不需要注入依赖
}

impl Distributor {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 分摊各组学生到候选路径
    ///
    /// 出队顺序: (签名长度升序, 组ID升序) —— 固定且确定。
    /// 对出队的组按枚举顺序遍历其路径: 单条路径可分配量 =
    /// min(容量上界 − 已分配, 组内剩余人数); 双向扣减。
    /// 无满足路径的组保持全部剩余 (静默,由落位后置条件暴露)。
    ///
    /// # 参数
    /// - `groups`: 需求组列表
    /// - `ctx`: 运行上下文 (路径就地更新)
    pub fn distribute(&self, groups: &[Group], ctx: &mut RunContext) {
        // 优先队列: 签名短者先出
        let mut queue: BinaryHeap<Reverse<(usize, u32)>> = groups
            .iter()
            .map(|group| Reverse((group.signature.len(), group.group_id)))
            .collect();

        let member_count_by_id: HashMap<u32, i64> = groups
            .iter()
            .map(|group| (group.group_id, group.member_count() as i64))
            .collect();

        while let Some(Reverse((_, group_id))) = queue.pop() {
            let mut remaining = member_count_by_id
                .get(&group_id)
                .copied()
                .unwrap_or(0);
            let total = remaining;

            for path in ctx.paths.iter_mut() {
                if path.group_id == group_id && remaining > 0 {
                    let assignable = path.remaining_capacity().min(remaining);
                    remaining -= assignable;
                    path.allocated += assignable;
                }
            }

            debug!(
                group_id,
                members = total,
                unallocated = remaining,
                "需求组分摊完成"
            );
        }
    }
}

impl Default for Distributor {
    fn default() -> Self {
        Self::new()
    }
}
