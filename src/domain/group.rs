// ==========================================
// 校园活动排程系统 - 需求组领域模型
// ==========================================
// 派生实体: 由分组引擎在每次运行中构建,不持久化
// ==========================================

use crate::domain::types::{EventId, StudentId};
use std::collections::VecDeque;

// ==========================================
// Group - 需求组
// ==========================================
// 同组学生拥有完全相同的需求签名 (额外活动类别列表,顺序敏感)。
// 成员队列只在落位阶段从队首弹出,其余阶段只读。
#[derive(Debug, Clone)]
pub struct Group {
    pub group_id: u32,                      // 组ID (按首次出现顺序, 从1起)
    pub signature: Vec<EventId>,            // 需求签名
    pub student_queue: VecDeque<StudentId>, // 成员队列 (落位时消耗)
}

impl Group {
    pub fn new(group_id: u32, signature: Vec<EventId>, first_member: StudentId) -> Self {
        let mut student_queue = VecDeque::new();
        student_queue.push_back(first_member);
        Self {
            group_id,
            signature,
            student_queue,
        }
    }

    /// 当前成员数
    pub fn member_count(&self) -> usize {
        self.student_queue.len()
    }
}
