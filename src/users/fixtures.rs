//! Deterministic user records shared by unit and integration tests.

use crate::users::models::{Address, Company, UserPage, UserRecord};

const FIRST_NAMES: [&str; 25] = [
    "Emily", "Michael", "Sophia", "James", "Emma", "Olivia", "Alexander", "Ava", "Ethan",
    "Isabella", "Liam", "Mia", "Noah", "Charlotte", "William", "Amelia", "Benjamin", "Harper",
    "Lucas", "Evelyn", "Henry", "Abigail", "Daniel", "Ella", "Jackson",
];

const LAST_NAMES: [&str; 5] = ["Johnson", "Williams", "Brown", "Jones", "Garcia"];

pub fn user(id: u64, first_name: &str, gender: &str, age: u32, country: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        maiden_name: None,
        gender: gender.to_string(),
        age,
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "+1 555-0100".to_string(),
        image: format!("https://example.com/icon/{}.png", id),
        company: Company {
            title: "Engineer".to_string(),
            name: Some("Acme".to_string()),
            department: None,
        },
        address: Address {
            address: None,
            city: "Springfield".to_string(),
            state: "Ohio".to_string(),
            country: country.to_string(),
        },
    }
}

/// Twenty-five users: odd ids are male, even ids female, every third id
/// lives in Canada and the rest in the United States.
pub fn all_users() -> Vec<UserRecord> {
    (1..=25u64)
        .map(|id| {
            let idx = (id - 1) as usize;
            let gender = if id % 2 == 1 { "male" } else { "female" };
            let country = if id % 3 == 0 { "Canada" } else { "United States" };
            let age = 20 + ((id * 7) % 40) as u32;
            let mut record = user(id, FIRST_NAMES[idx], gender, age, country);
            record.last_name = LAST_NAMES[idx % LAST_NAMES.len()].to_string();
            record
        })
        .collect()
}

/// Slice the fixture the way the remote API would.
pub fn page_of(limit: u32, skip: u64) -> UserPage {
    let users = all_users();
    let total = users.len() as u64;
    let page = users
        .into_iter()
        .skip(skip as usize)
        .take(limit as usize)
        .collect();
    UserPage {
        users: page,
        total,
        skip,
        limit: u64::from(limit),
    }
}
