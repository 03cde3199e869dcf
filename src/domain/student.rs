// ==========================================
// 校园活动排程系统 - 学生领域模型
// ==========================================

use crate::domain::types::StudentId;
use serde::{Deserialize, Serialize};

// ==========================================
// Student - 学生
// ==========================================
// 引擎只消费 student_id; name 仅用于导入层与运维输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId, // 学号
    #[serde(default)]
    pub name: Option<String>,  // 姓名 (可选)
}

impl Student {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            name: None,
        }
    }
}
