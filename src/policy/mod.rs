pub mod capacity;

pub use capacity::{
    MAX_SECTIONS_PER_TEACHER, MAX_STUDENTS_PER_SECTION, can_assign_section, can_enroll,
    has_teacher, is_full, remaining_seats,
};
