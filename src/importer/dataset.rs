// ==========================================
// 校园活动排程系统 - 数据集导入器
// ==========================================
// 职责: 从数据集目录加载四类输入集合并做基础校验
// 布局: <dir>/items.json, <dir>/polls.json,
//       <dir>/project.json, <dir>/students.csv
// ==========================================

use crate::domain::item::Item;
use crate::domain::poll::PollQuestion;
use crate::domain::project::ProjectConfig;
use crate::domain::student::Student;
use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

// ==========================================
// Dataset - 已加载数据集
// ==========================================
#[derive(Debug, Clone)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub students: Vec<Student>,
    pub project: ProjectConfig,
    pub polls: Vec<PollQuestion>,
}

// ==========================================
// DatasetImporter - 数据集导入器
// ==========================================
pub struct DatasetImporter {
    // 无状态导入器
}

impl DatasetImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 加载数据集目录
    ///
    /// # 参数
    /// - `dir`: 数据集目录
    ///
    /// # 返回
    /// 已校验的数据集
    pub fn load(&self, dir: &Path) -> Result<Dataset, ImportError> {
        if !dir.is_dir() {
            return Err(ImportError::DatasetDirNotFound(dir.display().to_string()));
        }

        let items: Vec<Item> = self.load_json(&dir.join("items.json"))?;
        let polls: Vec<PollQuestion> = self.load_json(&dir.join("polls.json"))?;
        let project: ProjectConfig = self.load_json(&dir.join("project.json"))?;
        let students = self.load_students_csv(&dir.join("students.csv"))?;

        self.validate_items(&items)?;

        info!(
            item_count = items.len(),
            student_count = students.len(),
            poll_count = polls.len(),
            project_id = %project.project_id,
            "数据集加载完成"
        );

        Ok(Dataset {
            items,
            students,
            project,
            polls,
        })
    }

    /// 读取并反序列化单个 JSON 文件
    fn load_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T, ImportError> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| ImportError::FileReadError {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ImportError::JsonParseError {
            file: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 读取学生名册 CSV (表头: student_id,name)
    fn load_students_csv(&self, path: &Path) -> Result<Vec<Student>, ImportError> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = fs::File::open(path).map_err(|e| ImportError::FileReadError {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut students = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (index, record) in reader.records().enumerate() {
            // 行号从 2 起 (1 是表头)
            let row = index + 2;
            let record = record.map_err(|e| ImportError::CsvParseError {
                row,
                message: e.to_string(),
            })?;

            let student_id = record.get(0).unwrap_or("").to_string();
            if student_id.is_empty() {
                return Err(ImportError::StudentIdMissing(row));
            }
            if !seen.insert(student_id.clone()) {
                return Err(ImportError::DuplicateStudentId { row, student_id });
            }

            let name = record
                .get(1)
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string());
            students.push(Student { student_id, name });
        }

        Ok(students)
    }

    /// 场次基础校验: ID 唯一、时间窗有效
    fn validate_items(&self, items: &[Item]) -> Result<(), ImportError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in items {
            if !seen.insert(item.item_id.as_str()) {
                return Err(ImportError::DuplicateItemId(item.item_id.clone()));
            }
            if item.end_time < item.start_time {
                return Err(ImportError::InvalidTimeWindow {
                    item_id: item.item_id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for DatasetImporter {
    fn default() -> Self {
        Self::new()
    }
}
