use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 学生年龄区间（与服务端一致）
pub const MIN_STUDENT_AGE: i64 = 5;
pub const MAX_STUDENT_AGE: i64 = 25;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 姓名非空且不超过 100 字符
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_student_age(age: i64) -> Result<(), &'static str> {
    // 年龄校验：5 <= x <= 25
    if !(MIN_STUDENT_AGE..=MAX_STUDENT_AGE).contains(&age) {
        return Err("Age must be between 5 and 25");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_section(section: &str) -> Result<(), &'static str> {
    if section.trim().is_empty() {
        return Err("Section is required");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds_inclusive() {
        assert!(validate_student_age(5).is_ok());
        assert!(validate_student_age(25).is_ok());
        assert!(validate_student_age(4).is_err());
        assert!(validate_student_age(26).is_err());
    }

    #[test]
    fn test_name_rejects_blank() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name("Alice").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_section_required() {
        assert!(validate_section("10-A").is_ok());
        assert!(validate_section("").is_err());
    }
}
