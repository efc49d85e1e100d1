pub mod responses;

pub use responses::{Activity, ActivityKind, DashboardData};
