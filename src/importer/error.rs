// ==========================================
// 校园活动排程系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("数据集目录不存在: {0}")]
    DatasetDirNotFound(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败 ({file}): {message}")]
    FileReadError { file: String, message: String },

    // ===== 解析错误 =====
    #[error("JSON 解析失败 ({file}): {message}")]
    JsonParseError { file: String, message: String },

    #[error("CSV 解析失败 (行 {row}): {message}")]
    CsvParseError { row: usize, message: String },

    // ===== 数据质量错误 =====
    #[error("学生记录缺少学号 (行 {0})")]
    StudentIdMissing(usize),

    #[error("学号重复 (行 {row}): {student_id}")]
    DuplicateStudentId { row: usize, student_id: String },

    #[error("场次ID重复: {0}")]
    DuplicateItemId(String),

    #[error("场次时间窗非法 ({item_id}): 结束早于开始")]
    InvalidTimeWindow { item_id: String },
}
