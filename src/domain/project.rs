// ==========================================
// 校园活动排程系统 - 项目配置领域模型
// ==========================================

use crate::domain::types::EventId;
use serde::{Deserialize, Serialize};

// ==========================================
// ProjectConfig - 项目配置
// ==========================================
// required_for_all: 全员必须各参加一个场次的活动类别集合
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_id: String,             // 项目ID
    pub name: String,                   // 项目名称
    pub required_for_all: Vec<EventId>, // 全员必修活动类别
}

impl ProjectConfig {
    /// 全员必修活动类别列表
    pub fn required_event_ids(&self) -> &[EventId] {
        &self.required_for_all
    }
}
