// ==========================================
// 校园活动排程系统 - 路径枚举引擎
// ==========================================
// 职责: 对每个需求组,枚举衔接图上满足其完整类别需求的
// 全部路径 (每个类别恰好一个场次)
// 输入: 衔接图 + 场次集合 + 需求组 + 全员必修类别
// 输出: 候选路径写入运行上下文 (组序 × 入口序 × 边序)
// ==========================================
// 注: DFS 最坏情况随分支因子指数增长,调用方需保证
// 场次图规模可枚举
// ==========================================

use crate::domain::group::Group;
use crate::domain::item::Item;
use crate::domain::path::CandidatePath;
use crate::domain::types::EventId;
use crate::engine::context::RunContext;
use crate::graph::ItemGraph;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// PathEnumerator - 路径枚举引擎
// ==========================================
pub struct PathEnumerator {
    // 无状态引擎,不需要注入依赖
}

impl PathEnumerator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 为每个需求组枚举候选路径
    ///
    /// 组的完整需求集 = 全员必修 ∪ 组签名 (集合语义,重复合并)。
    /// 从每个入口节点起深度优先搜索; 节点类别不在剩余需求集中
    /// 即剪枝; 剩余集清空即记录一条路径 (容量上界 = 途径场次
    /// 最小容量),不再向更深处扩展。
    ///
    /// # 参数
    /// - `graph`: 场次衔接图
    /// - `items`: 场次集合 (与图同序)
    /// - `groups`: 需求组列表
    /// - `required_for_all`: 全员必修类别
    /// - `ctx`: 运行上下文 (路径写入处)
    pub fn enumerate(
        &self,
        graph: &ItemGraph,
        items: &[Item],
        groups: &[Group],
        required_for_all: &[EventId],
        ctx: &mut RunContext,
    ) {
        for group in groups {
            // 工作需求集: 共享一份,回溯时恢复
            let mut remaining: HashSet<&str> = required_for_all
                .iter()
                .map(String::as_str)
                .chain(group.signature.iter().map(String::as_str))
                .collect();

            let before = ctx.paths.len();
            let mut trail: Vec<usize> = Vec::new();
            for &entry in graph.entries() {
                self.dfs(graph, items, entry, &mut remaining, &mut trail, group, ctx);
            }

            debug!(
                group_id = group.group_id,
                required_count = remaining.len(),
                path_count = ctx.paths.len() - before,
                "候选路径枚举完成"
            );
        }
    }

    /// 深度优先搜索 (带显式回溯恢复)
    ///
    /// 契约: 返回时 `remaining` 与 `trail` 恢复到进入前的状态,
    /// 兄弟分支看到的需求集不受本分支影响。
    fn dfs<'a>(
        &self,
        graph: &ItemGraph,
        items: &'a [Item],
        node: usize,
        remaining: &mut HashSet<&'a str>,
        trail: &mut Vec<usize>,
        group: &Group,
        ctx: &mut RunContext,
    ) {
        let event_id = items[node].event_id.as_str();
        // 剪枝: 类别不在剩余需求集 (含同类别场次已满足的情形)
        if !remaining.remove(event_id) {
            return;
        }
        trail.push(node);

        if remaining.is_empty() {
            // 需求集清空: 记录路径,不再扩展
            let item_ids = trail.iter().map(|&idx| items[idx].item_id.clone()).collect();
            let capacity_limit = trail
                .iter()
                .map(|&idx| items[idx].capacity)
                .min()
                .unwrap_or(0);
            ctx.paths
                .push(CandidatePath::new(group.group_id, item_ids, capacity_limit));
        } else {
            for &next in graph.successors(node) {
                self.dfs(graph, items, next, remaining, trail, group, ctx);
            }
        }

        // 回溯恢复
        trail.pop();
        remaining.insert(event_id);
    }
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
