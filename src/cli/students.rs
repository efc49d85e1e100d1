use clap::Subcommand;

use crate::cli::render;
use crate::errors::{Result, SchoolAdminError};
use crate::models::students::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::runtime::AppContext;
use crate::utils::validate;

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    /// 学生列表（本地过滤 + 分页）
    List {
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// 按班级过滤
        #[arg(long)]
        class_id: Option<i64>,
        /// 按姓名/年龄/学号/班级搜索
        #[arg(long)]
        search: Option<String>,
        /// 只看未入班学生
        #[arg(long)]
        unenrolled: bool,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        class_id: Option<i64>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<i64>,
    },
    Delete {
        id: i64,
    },
    /// 退班
    Unenroll {
        id: i64,
    },
    /// 学生视角：我所在的班级
    MyClasses,
}

// 列表页的本地过滤条件
#[derive(Debug, Default)]
pub struct StudentFilter {
    pub class_id: Option<i64>,
    pub search: Option<String>,
    pub unenrolled_only: bool,
}

/// 在缓存的全量集合上应用过滤
pub fn apply_filters(students: &[Student], filter: &StudentFilter) -> Vec<Student> {
    students
        .iter()
        .filter(|student| {
            if let Some(class_id) = filter.class_id {
                if student.class_id != Some(class_id) {
                    return false;
                }
            }
            if filter.unenrolled_only && student.class_id.is_some() {
                return false;
            }
            if let Some(search) = &filter.search {
                let needle = search.to_lowercase();
                let matches = student.name.to_lowercase().contains(&needle)
                    || student.age.to_string().contains(search)
                    || student.id.to_string().contains(search)
                    || student
                        .class
                        .as_ref()
                        .is_some_and(|c| c.name.to_lowercase().contains(&needle))
                    || student
                        .class
                        .as_ref()
                        .is_some_and(|c| c.section.to_lowercase().contains(&needle));
                if !matches {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// 过滤结果的本地分页，返回当前页与总页数
pub fn paginate(students: Vec<Student>, page: i64, page_size: i64) -> (Vec<Student>, i64) {
    let total_pages = (students.len() as i64 + page_size - 1) / page_size;
    let start = ((page - 1).max(0) * page_size) as usize;
    let page_items = students
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();
    (page_items, total_pages)
}

/// 退班并使两类集合缓存失效，下一次班级读取反映人数变化
pub async fn unenroll_student(context: &AppContext, id: i64) -> Result<Student> {
    let student = context.students.unenroll(id).await?;
    context.invalidate_collections().await;
    Ok(student)
}

pub async fn dispatch(context: &AppContext, command: StudentsCommand) -> Result<()> {
    match command {
        StudentsCommand::List {
            page,
            class_id,
            search,
            unenrolled,
        } => {
            let all = context.all_students().await?;
            let filter = StudentFilter {
                class_id,
                search,
                unenrolled_only: unenrolled,
            };
            let filtered = apply_filters(&all, &filter);
            let total = filtered.len();
            let (students, total_pages) = paginate(filtered, page, context.config.api.page_size);

            let rows: Vec<Vec<String>> = students
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.name.clone(),
                        s.age.to_string(),
                        render::dash(s.class.as_ref().map(|c| {
                            format!("{} - {}", c.name, c.section)
                        })),
                    ]
                })
                .collect();
            print!(
                "{}",
                render::render_table(&["ID", "Name", "Age", "Class"], &rows)
            );
            println!("Page {page} of {total_pages} ({total} students)");
        }
        StudentsCommand::Show { id } => {
            let student = context.students.get(id).await?;
            println!("#{} {} (age {})", student.id, student.name, student.age);
            match student.class_id {
                Some(class_id) => println!("Enrolled in class {class_id}"),
                None => println!("Not enrolled"),
            }
        }
        StudentsCommand::Create {
            name,
            age,
            class_id,
        } => {
            validate::validate_name(&name).map_err(SchoolAdminError::validation)?;
            validate::validate_student_age(age).map_err(SchoolAdminError::validation)?;

            let student = context
                .students
                .create(&CreateStudentRequest {
                    name,
                    age,
                    class_id,
                })
                .await?;
            context.invalidate_collections().await;
            println!("Created student #{} {}", student.id, student.name);
        }
        StudentsCommand::Update { id, name, age } => {
            if let Some(name) = &name {
                validate::validate_name(name).map_err(SchoolAdminError::validation)?;
            }
            if let Some(age) = age {
                validate::validate_student_age(age).map_err(SchoolAdminError::validation)?;
            }

            let student = context
                .students
                .update(
                    id,
                    &UpdateStudentRequest {
                        name,
                        age,
                        class_id: None,
                    },
                )
                .await?;
            context.invalidate_collections().await;
            println!("Updated student #{}", student.id);
        }
        StudentsCommand::Delete { id } => {
            context.students.delete(id).await?;
            context.invalidate_collections().await;
            println!("Deleted student #{id}");
        }
        StudentsCommand::Unenroll { id } => {
            let student = unenroll_student(context, id).await?;
            println!("Unenrolled student #{}", student.id);
        }
        StudentsCommand::MyClasses => {
            let classes = context.students.my_classes().await?;
            let rows: Vec<Vec<String>> = classes
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        format!("{} - {}", c.name, c.section),
                        render::dash(c.teacher.as_ref().map(|t| t.name.clone())),
                        c.student_count.to_string(),
                    ]
                })
                .collect();
            print!(
                "{}",
                render::render_table(&["ID", "Class", "Teacher", "Students"], &rows)
            );
        }
    }
    Ok(())
}
