use serde::Serialize;

use crate::users::models::UserRecord;

/// Display-ready projection of one user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: u64,
    pub image: String,
    pub full_name: String,
    /// `gender/age`
    pub demography: String,
    pub designation: String,
    /// `city, state, country`
    pub location: String,
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            image: user.image.clone(),
            full_name: format!("{} {}", user.first_name, user.last_name),
            demography: format!("{}/{}", user.gender, user.age),
            designation: user.company.title.clone(),
            location: format!(
                "{}, {}, {}",
                user.address.city, user.address.state, user.address.country
            ),
        }
    }
}

pub fn render_rows(users: &[UserRecord]) -> Vec<UserRow> {
    users.iter().map(UserRow::from).collect()
}
