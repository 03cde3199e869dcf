// ==========================================
// 校园活动排程系统 - 需求分组引擎
// ==========================================
// 职责: 按需求签名把学生划入等价组
// 输入: 学生列表 (输入序) + 需求解析引擎
// 输出: 需求组列表 (首次出现序)
// ==========================================
// 复杂度: O(学生数 × 既有组数 × 签名长度), 组基数预期很小
// ==========================================

use crate::domain::group::Group;
use crate::domain::student::Student;
use crate::engine::requirement::RequirementResolver;
use tracing::debug;

// ==========================================
// GroupBuilder - 需求分组引擎
// ==========================================
pub struct GroupBuilder {
    // 无状态引擎,不需要注入依赖
}

impl GroupBuilder {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 划分需求组
    ///
    /// 逐个学生 (输入序) 解析签名: 签名与既有组列表相等则入组,
    /// 否则建新组并分配下一个顺序ID (从1起)。
    ///
    /// # 参数
    /// - `students`: 学生列表
    /// - `resolver`: 需求解析引擎 (缓存随之填充)
    ///
    /// # 返回
    /// 需求组列表,插入顺序保留
    pub fn build(&self, students: &[Student], resolver: &mut RequirementResolver) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();

        for student in students {
            let signature = resolver.extra_event_ids(&student.student_id);
            match groups.iter_mut().find(|group| group.signature == signature) {
                Some(group) => {
                    group.student_queue.push_back(student.student_id.clone());
                }
                None => {
                    let group_id = groups.len() as u32 + 1;
                    groups.push(Group::new(group_id, signature, student.student_id.clone()));
                }
            }
        }

        debug!(
            student_count = students.len(),
            group_count = groups.len(),
            "需求分组完成"
        );
        groups
    }
}

impl Default for GroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
