// ==========================================
// 校园活动排程系统 - 落位引擎
// ==========================================
// 职责: 把路径分配数兑现成具体的学生-场次指派
// 输入: 候选路径 (只读) + 需求组 (队列被消耗) + 场次集合
// 输出: 场次 student_ids 回填
// ==========================================
// 红线: 学生ID从组流向场次仅发生在此处
// ==========================================

use crate::domain::group::Group;
use crate::domain::item::Item;
use crate::domain::path::CandidatePath;
use crate::domain::types::StudentId;
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// Materializer - 落位引擎
// ==========================================
pub struct Materializer {
    // 无状态引擎,不需要注入依赖
}

impl Materializer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 兑现路径分配
    ///
    /// 对每条 allocated > 0 的路径: 从所属组队列队首弹出
    /// 对应数量的学生ID,追加到路径途经的每个场次。
    /// 零分配路径为空操作; 队列提前耗尽记警告并止于实际弹出量。
    ///
    /// # 参数
    /// - `paths`: 候选路径 (枚举顺序)
    /// - `groups`: 需求组列表 (队列被消耗)
    /// - `items`: 场次集合 (student_ids 被回填)
    pub fn materialize(&self, paths: &[CandidatePath], groups: &mut [Group], items: &mut [Item]) {
        let index_of: HashMap<String, usize> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.item_id.clone(), index))
            .collect();

        for path in paths {
            if path.allocated <= 0 {
                continue;
            }

            let Some(group) = groups.iter_mut().find(|group| group.group_id == path.group_id)
            else {
                continue;
            };

            let mut assigned: Vec<StudentId> = Vec::with_capacity(path.allocated as usize);
            for _ in 0..path.allocated {
                match group.student_queue.pop_front() {
                    Some(student_id) => assigned.push(student_id),
                    None => {
                        warn!(
                            group_id = path.group_id,
                            allocated = path.allocated,
                            popped = assigned.len(),
                            "组队列提前耗尽, 路径分配数超过剩余成员数"
                        );
                        break;
                    }
                }
            }

            for item_id in &path.item_ids {
                if let Some(&index) = index_of.get(item_id) {
                    items[index].student_ids.extend(assigned.iter().cloned());
                }
            }
        }
    }
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}
