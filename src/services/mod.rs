pub mod admin;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod students;

pub use admin::AdminService;
pub use auth::{AuthService, AuthTimeouts};
pub use classes::ClassesService;
pub use dashboard::DashboardService;
pub use students::StudentsService;
