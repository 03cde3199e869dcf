// ==========================================
// 校园活动排程系统 - 容量修复引擎
// ==========================================
// 职责: 校验各场次的聚合需求,把超额分配从冲突路径
// 转移到同组的替代路径
// 输入: 场次集合 + 运行上下文 (候选路径)
// 输出: 路径 allocated 更新; 尝试计数与预算耗尽标志
// ==========================================
// 红线: 修复失败不中断运行 —— 超出预算只置运行级标志,
// 调用方检查标志后自行决定是否信任结果
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::ItemId;
use crate::engine::context::RunContext;
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// CapacityRepairLoop - 容量修复引擎
// ==========================================
pub struct CapacityRepairLoop {
    max_attempts: u32, // 重分配尝试上限
}

impl CapacityRepairLoop {
    /// 构造函数
    ///
    /// # 参数
    /// - `max_attempts`: 重分配尝试上限 (超过即置预算耗尽标志)
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// 执行一轮完整校验 (违规时递归修复直至稳定或预算耗尽)
    pub fn enforce(&self, items: &[Item], ctx: &mut RunContext) {
        self.verify_all(items, ctx);
    }

    /// 需求记录: 场次ID → 途经该场次的全部路径 allocated 之和
    fn demand_record(ctx: &RunContext) -> HashMap<ItemId, i64> {
        let mut record: HashMap<ItemId, i64> = HashMap::new();
        for path in &ctx.paths {
            for item_id in &path.item_ids {
                *record.entry(item_id.clone()).or_insert(0) += path.allocated;
            }
        }
        record
    }

    /// 校验所有场次需求,逐个触发超额场次的重分配
    ///
    /// 注: 需求记录在本帧开头快照一次; 深层修复返回后,
    /// 本帧继续用快照扫描剩余场次 —— 由此触发的重分配会在
    /// 下一层校验中得到纠正,最终以预算上限兜底。
    fn verify_all(&self, items: &[Item], ctx: &mut RunContext) {
        let record = Self::demand_record(ctx);
        for item in items {
            let demand = record.get(&item.item_id).copied().unwrap_or(0);
            let capacity = item.capacity as i64;
            if demand > capacity {
                self.redistribute(&item.item_id, demand - capacity, items, ctx);
            }
        }
    }

    /// 把超额分配从冲突路径转移到同组替代路径
    ///
    /// 处理对象: 路径序中第一个拥有途经冲突场次路径的组。
    /// 组内冲突路径按 allocated 降序,首条被整额扣减 (不设下限,
    /// 负值记警告保留); 首条替代路径整额吸收,其余替代路径本轮
    /// 得零; 无替代路径时超额直接丢弃 (记警告)。
    /// 每次调用计一次尝试; 预算内继续全量校验,超出即置标志停止。
    fn redistribute(&self, failed_id: &str, mut excess: i64, items: &[Item], ctx: &mut RunContext) {
        for probe in 0..ctx.paths.len() {
            let group_id = ctx.paths[probe].group_id;

            let mut failed_paths: Vec<usize> = Vec::new();
            let mut alternative_paths: Vec<usize> = Vec::new();
            for (index, path) in ctx.paths.iter().enumerate() {
                if path.group_id != group_id {
                    continue;
                }
                if path.contains_item(failed_id) {
                    failed_paths.push(index);
                } else {
                    alternative_paths.push(index);
                }
            }

            if failed_paths.is_empty() || excess == 0 {
                continue;
            }

            // allocated 降序, 先削减装得最满的冲突路径
            failed_paths.sort_by(|&a, &b| ctx.paths[b].allocated.cmp(&ctx.paths[a].allocated));

            for &failed_index in &failed_paths {
                let reduced = ctx.paths[failed_index].allocated - excess;
                if reduced < 0 {
                    warn!(
                        group_id,
                        failed_item = failed_id,
                        allocated = ctx.paths[failed_index].allocated,
                        excess,
                        "冲突路径被过度扣减, 分配数转负"
                    );
                }
                ctx.paths[failed_index].allocated = reduced;

                let mut remaining_excess = excess;
                for &alternative_index in &alternative_paths {
                    ctx.paths[alternative_index].allocated += remaining_excess;
                    remaining_excess = 0;
                }
                if remaining_excess != 0 {
                    warn!(
                        group_id,
                        failed_item = failed_id,
                        dropped = remaining_excess,
                        "无替代路径可吸收, 超额被丢弃"
                    );
                }
                excess = remaining_excess;
            }
        }

        ctx.repair_attempts += 1;
        if ctx.repair_attempts > self.max_attempts {
            if !ctx.repair_budget_exhausted {
                warn!(
                    attempts = ctx.repair_attempts,
                    max_attempts = self.max_attempts,
                    "重分配尝试超出预算, 停止修复并标记运行失败"
                );
            }
            ctx.repair_budget_exhausted = true;
        } else {
            self.verify_all(items, ctx);
        }
    }
}
