//! 容量策略
//!
//! 客户端侧的纯函数预检，镜像（而非替代）服务端约束：
//! 最后一个名额被并发抢占时以服务端的拒绝为准。
//! 各页面统一从这里取结论，不再各自内联 "班级是否已满" 的判断。

use crate::models::classes::Class;
use crate::models::users::UserDetails;

/// 每个分班的学生上限
pub const MAX_STUDENTS_PER_SECTION: i64 = 5;

/// 每位教师可带的分班上限
pub const MAX_SECTIONS_PER_TEACHER: i64 = 5;

/// 班级是否还可接收学生
///
/// 列表接口可能不带 studentCount，缺失时按 0 处理。
pub fn can_enroll(class: &Class) -> bool {
    class.student_count.unwrap_or(0) < MAX_STUDENTS_PER_SECTION
}

/// 班级是否已满（can_enroll 的精确取反）
pub fn is_full(class: &Class) -> bool {
    !can_enroll(class)
}

/// 剩余名额，用于 "4 / 5" 形式的展示
pub fn remaining_seats(class: &Class) -> i64 {
    (MAX_STUDENTS_PER_SECTION - class.student_count.unwrap_or(0)).max(0)
}

/// 教师是否还可再带一个分班
pub fn can_assign_section(teacher: &UserDetails) -> bool {
    teacher.section_count.unwrap_or(0) < MAX_SECTIONS_PER_TEACHER
}

/// 班级是否已有任课教师（指派前的前置守卫）
pub fn has_teacher(class: &Class) -> bool {
    class.teacher.is_some() || class.teacher_id.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_count(student_count: Option<i64>) -> Class {
        Class {
            id: 1,
            name: "Math".to_string(),
            section: "10-A".to_string(),
            teacher_id: None,
            student_count,
            teacher: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn teacher_with_sections(section_count: Option<i64>) -> UserDetails {
        UserDetails {
            id: 1,
            name: "T".to_string(),
            email: "t@example.com".to_string(),
            role: "teacher".to_string(),
            created_at: chrono::Utc::now(),
            section_count,
        }
    }

    #[test]
    fn test_is_full_matches_threshold() {
        for count in 0..8 {
            let class = class_with_count(Some(count));
            assert_eq!(is_full(&class), count >= MAX_STUDENTS_PER_SECTION);
        }
    }

    #[test]
    fn test_can_enroll_is_exact_negation_of_is_full() {
        for count in [None, Some(0), Some(4), Some(5), Some(6)] {
            let class = class_with_count(count);
            assert_eq!(can_enroll(&class), !is_full(&class));
        }
    }

    #[test]
    fn test_missing_count_treated_as_empty() {
        let class = class_with_count(None);
        assert!(can_enroll(&class));
        assert_eq!(remaining_seats(&class), MAX_STUDENTS_PER_SECTION);
    }

    #[test]
    fn test_remaining_seats_never_negative() {
        assert_eq!(remaining_seats(&class_with_count(Some(7))), 0);
        assert_eq!(remaining_seats(&class_with_count(Some(4))), 1);
    }

    #[test]
    fn test_has_teacher_checks_both_fields() {
        let mut class = class_with_count(Some(0));
        assert!(!has_teacher(&class));
        class.teacher_id = Some(8);
        assert!(has_teacher(&class));
    }

    #[test]
    fn test_teacher_section_cap() {
        assert!(can_assign_section(&teacher_with_sections(None)));
        assert!(can_assign_section(&teacher_with_sections(Some(4))));
        assert!(!can_assign_section(&teacher_with_sections(Some(5))));
    }
}
