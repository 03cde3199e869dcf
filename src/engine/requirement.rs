// ==========================================
// 校园活动排程系统 - 需求解析引擎
// ==========================================
// 职责: 从问卷选项推导每个学生的额外活动类别
// 输入: 学生ID + 问卷集合
// 输出: 额外类别列表 (顺序确定: 问卷序 → 选项序)
// ==========================================
// 注: 结果按学生ID记忆化; 解析器随运行创建,
// 缓存生命周期即运行生命周期
// ==========================================

use crate::domain::poll::PollQuestion;
use crate::domain::types::{EventId, StudentId};
use std::collections::HashMap;

// ==========================================
// RequirementResolver - 需求解析引擎
// ==========================================
pub struct RequirementResolver<'a> {
    polls: &'a [PollQuestion],
    cache: HashMap<StudentId, Vec<EventId>>,
}

impl<'a> RequirementResolver<'a> {
    /// 构造函数
    ///
    /// # 参数
    /// - `polls`: 本次运行使用的问卷集合
    pub fn new(polls: &'a [PollQuestion]) -> Self {
        Self {
            polls,
            cache: HashMap::new(),
        }
    }

    /// 解析某学生的额外活动类别
    ///
    /// 规则: 遍历所有问卷选项,凡 (a) 该学生选择了该项且
    /// (b) 该项授予了非空类别,即计入结果。顺序为问卷输入序、
    /// 选项输入序 — 该列表构成需求签名,参与组身份判定,
    /// 重复项保留。
    ///
    /// # 参数
    /// - `student_id`: 学生ID
    ///
    /// # 返回
    /// 额外类别列表 (可能为空)
    pub fn extra_event_ids(&mut self, student_id: &str) -> Vec<EventId> {
        if let Some(hit) = self.cache.get(student_id) {
            return hit.clone();
        }

        let mut extra = Vec::new();
        for poll in self.polls {
            for choice in &poll.choices {
                if let Some(event_id) = choice.granted_event_id() {
                    if choice.includes_student(student_id) {
                        extra.push(event_id.to_string());
                    }
                }
            }
        }

        self.cache.insert(student_id.to_string(), extra.clone());
        extra
    }

    /// 缓存条目数 (每学生恰好一条)
    pub fn cached_student_count(&self) -> usize {
        self.cache.len()
    }
}
