// ==========================================
// 校园活动排程系统 - 问卷领域模型
// ==========================================
// 用途: 问卷选项决定学生的额外活动类别 (需求签名来源)
// ==========================================

use crate::domain::types::{EventId, StudentId};
use serde::{Deserialize, Serialize};

// ==========================================
// PollQuestion - 问卷题目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollQuestion {
    pub poll_id: String,          // 问卷题目ID
    pub title: String,            // 题干
    pub choices: Vec<PollChoice>, // 选项列表 (顺序即解析顺序)
}

// ==========================================
// PollChoice - 问卷选项
// ==========================================
// event_id 为该选项授予的活动类别; 源数据用空字符串表示
// "不授予类别" (纯意向题), 缺省与空串同义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollChoice {
    pub choice_id: String,            // 选项ID
    pub title: String,                // 选项文本
    #[serde(default)]
    pub event_id: Option<EventId>,    // 授予的活动类别 (空值=不授予)
    #[serde(default)]
    pub student_ids: Vec<StudentId>,  // 选择了该项的学生
}

impl PollChoice {
    /// 该选项授予的活动类别 (空字符串视为未授予)
    pub fn granted_event_id(&self) -> Option<&str> {
        match self.event_id.as_deref() {
            None | Some("") => None,
            Some(event_id) => Some(event_id),
        }
    }

    /// 判断某学生是否选择了该选项
    pub fn includes_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|id| id == student_id)
    }
}
