use chrono::{Timelike, Utc};
use ride_admin_db::models::user::UserModel;
use uuid::Uuid;

pub fn create_test_user(role: Option<&str>, name: &str) -> UserModel {
    let mut user = UserModel::new(Uuid::new_v4(), role);
    user.name = Some(name.to_string());
    user.email = Some(format!("{}@example.com", name.to_lowercase()));
    user.phone = Some("+233200000000".to_string());
    // Whole seconds survive the TIMESTAMPTZ round trip
    user.created_at = Utc::now().with_nanosecond(0);
    user
}
