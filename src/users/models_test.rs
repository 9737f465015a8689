use crate::users::models::*;
use serde_json::json;

fn sample_user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "firstName": "Emily",
        "lastName": "Johnson",
        "maidenName": "Smith",
        "age": 28,
        "gender": "female",
        "email": "emily.johnson@x.dummyjson.com",
        "phone": "+81 965-431-3024",
        "username": "emilys",
        "birthDate": "1996-5-30",
        "image": "https://dummyjson.com/icon/emilys/128",
        "bloodGroup": "O-",
        "hair": { "color": "Brown", "type": "Curly" },
        "address": {
            "address": "626 Main Street",
            "city": "Phoenix",
            "state": "Mississippi",
            "stateCode": "MS",
            "postalCode": "29112",
            "coordinates": { "lat": -77.16213, "lng": -92.084824 },
            "country": "United States"
        },
        "company": {
            "department": "Engineering",
            "name": "Dooley, Kozey and Cronin",
            "title": "Sales Manager"
        },
        "role": "admin"
    })
}

#[test]
fn test_user_record_deserializes_camel_case_and_ignores_unknown_fields() {
    let user: UserRecord = serde_json::from_value(sample_user_json()).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "Emily");
    assert_eq!(user.last_name, "Johnson");
    assert_eq!(user.maiden_name.as_deref(), Some("Smith"));
    assert_eq!(user.gender, "female");
    assert_eq!(user.age, 28);
    assert_eq!(user.company.title, "Sales Manager");
    assert_eq!(user.company.department.as_deref(), Some("Engineering"));
    assert_eq!(user.address.city, "Phoenix");
    assert_eq!(user.address.state, "Mississippi");
    assert_eq!(user.address.country, "United States");
}

#[test]
fn test_user_record_tolerates_missing_optional_fields() {
    let user: UserRecord = serde_json::from_value(json!({
        "id": 7,
        "firstName": "Ava",
        "lastName": "Brown",
        "gender": "female",
        "age": 31
    }))
    .unwrap();

    assert_eq!(user.maiden_name, None);
    assert_eq!(user.image, "");
    assert_eq!(user.company, Company::default());
    assert_eq!(user.address, Address::default());
}

#[test]
fn test_user_record_requires_id() {
    let result: Result<UserRecord, _> = serde_json::from_value(json!({
        "firstName": "Ava",
        "lastName": "Brown",
        "gender": "female",
        "age": 31
    }));
    assert!(result.is_err());
}

#[test]
fn test_user_page_deserializes_list_response() {
    let page: UserPage = serde_json::from_value(json!({
        "users": [sample_user_json()],
        "total": 208,
        "skip": 0,
        "limit": 10
    }))
    .unwrap();

    assert_eq!(page.users.len(), 1);
    assert_eq!(page.total, 208);
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 10);
}

#[test]
fn test_user_page_skip_and_limit_default_to_zero() {
    let page: UserPage = serde_json::from_value(json!({ "users": [], "total": 0 })).unwrap();
    assert!(page.users.is_empty());
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 0);
}
