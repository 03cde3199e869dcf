// ==========================================
// 校园活动排程系统 - 场次衔接图
// ==========================================
// 职责: 由场次记录构建有向图,供路径枚举引擎遍历
// 边语义: a → b 当且仅当 a 结束不晚于 b 开始 (可衔接)
// ==========================================
// 注: 图按稳定的场次输入顺序建节点 (arena + 下标),
// 入口节点 (无入边) 在构建时一次性算出,不在运行中重算
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::ItemId;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// ItemGraph - 场次衔接图
// ==========================================
#[derive(Debug, Clone)]
pub struct ItemGraph {
    ids: Vec<ItemId>,               // 节点下标 → 场次ID (输入顺序)
    index_of: HashMap<ItemId, usize>, // 场次ID → 节点下标
    successors: Vec<Vec<usize>>,    // 出边邻接表
    entries: Vec<usize>,            // 入口节点 (无入边)
}

impl ItemGraph {
    /// 从场次记录构建衔接图
    ///
    /// # 参数
    /// - `items`: 场次集合 (节点顺序 = 输入顺序)
    ///
    /// # 返回
    /// 构建完成的图,入口节点已算好
    pub fn build(items: &[Item]) -> Self {
        let node_count = items.len();
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut indegree: Vec<usize> = vec![0; node_count];

        for from in 0..node_count {
            for to in 0..node_count {
                if from != to && items[from].precedes(&items[to]) {
                    successors[from].push(to);
                    indegree[to] += 1;
                }
            }
        }

        let entries: Vec<usize> = (0..node_count)
            .filter(|&node| indegree[node] == 0)
            .collect();

        let ids: Vec<ItemId> = items.iter().map(|item| item.item_id.clone()).collect();
        let index_of: HashMap<ItemId, usize> = ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), index))
            .collect();

        let edge_count: usize = successors.iter().map(Vec::len).sum();
        debug!(
            node_count,
            edge_count,
            entry_count = entries.len(),
            "场次衔接图构建完成"
        );

        Self {
            ids,
            index_of,
            successors,
            entries,
        }
    }

    /// 节点数
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// 入口节点列表 (无入边)
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// 某节点的后继节点
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    /// 节点下标对应的场次ID
    pub fn item_id(&self, node: usize) -> &str {
        &self.ids[node]
    }

    /// 场次ID对应的节点下标
    pub fn index_of(&self, item_id: &str) -> Option<usize> {
        self.index_of.get(item_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 4)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn item(item_id: &str, event_id: &str, start: u32, end: u32) -> Item {
        Item {
            item_id: item_id.to_string(),
            title: format!("场次 {}", item_id),
            event_id: event_id.to_string(),
            start_time: ts(start),
            end_time: ts(end),
            capacity: 10,
            student_ids: vec![],
        }
    }

    #[test]
    fn test_edges_follow_time_succession() {
        // I1(9-10) → I2(10-11) → I3(11-12), I1 → I3
        let items = vec![
            item("I1", "E1", 9, 10),
            item("I2", "E2", 10, 11),
            item("I3", "E3", 11, 12),
        ];
        let graph = ItemGraph::build(&items);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[2]);
        assert!(graph.successors(2).is_empty());
    }

    #[test]
    fn test_entries_have_no_incoming_edges() {
        // 两个平行的早场都是入口,晚场不是
        let items = vec![
            item("I1", "E1", 9, 10),
            item("I2", "E1", 9, 10),
            item("I3", "E2", 10, 11),
        ];
        let graph = ItemGraph::build(&items);

        assert_eq!(graph.entries(), &[0, 1]);
    }

    #[test]
    fn test_overlapping_items_not_linked() {
        let items = vec![item("I1", "E1", 9, 11), item("I2", "E2", 10, 12)];
        let graph = ItemGraph::build(&items);

        assert!(graph.successors(0).is_empty());
        assert!(graph.successors(1).is_empty());
        assert_eq!(graph.entries(), &[0, 1]);
    }

    #[test]
    fn test_index_lookup() {
        let items = vec![item("I1", "E1", 9, 10), item("I2", "E2", 10, 11)];
        let graph = ItemGraph::build(&items);

        assert_eq!(graph.index_of("I2"), Some(1));
        assert_eq!(graph.index_of("NOPE"), None);
        assert_eq!(graph.item_id(0), "I1");
    }
}
