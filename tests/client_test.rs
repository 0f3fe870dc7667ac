use record_actor::mock::MockStore;
use record_actor::StoreError;
use roster::clients::{StudentClient, UserClient};
use roster::model::{Student, StudentCreate, StudentId, User, UserCreate, UserId, UserUpdate};
use roster::student_actor::StudentError;
use roster::user_actor::UserError;

fn user(id: u32, email: &str) -> User {
    User {
        id: UserId(id),
        name: format!("user{id}"),
        age: 30,
        gender: "f".into(),
        email: email.into(),
    }
}

fn create(email: &str) -> UserCreate {
    UserCreate {
        name: "New".into(),
        age: 20,
        gender: "m".into(),
        email: email.into(),
    }
}

#[tokio::test]
async fn test_add_user_checks_email_then_creates() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list().return_ok(vec![user(1, "a@x.com")]);
    mock.expect_create().return_ok(UserId(2));

    let client = UserClient::new(mock.client());
    assert_eq!(client.add_user(create("b@x.com")).await, Ok(UserId(2)));
    mock.verify();
}

#[tokio::test]
async fn test_add_user_with_taken_email_never_creates() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list().return_ok(vec![user(1, "a@x.com")]);

    let client = UserClient::new(mock.client());
    let result = client.add_user(create("a@x.com")).await;
    assert_eq!(result, Err(UserError::EmailTaken("a@x.com".into())));
    mock.verify();
}

#[tokio::test]
async fn test_update_user_reports_missing_before_conflict() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list().return_ok(vec![user(1, "a@x.com")]);

    let client = UserClient::new(mock.client());
    let update = UserUpdate {
        email: Some("a@x.com".into()),
        ..Default::default()
    };
    let result = client.update_user(UserId(5), update).await;
    assert_eq!(result, Err(UserError::NotFound(UserId(5))));
    mock.verify();
}

#[tokio::test]
async fn test_update_user_rejects_email_of_another_user() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list()
        .return_ok(vec![user(1, "a@x.com"), user(2, "b@x.com")]);

    let client = UserClient::new(mock.client());
    let update = UserUpdate {
        name: Some("Renamed".into()),
        email: Some("a@x.com".into()),
        ..Default::default()
    };
    let result = client.update_user(UserId(2), update).await;
    assert_eq!(result, Err(UserError::EmailTaken("a@x.com".into())));
    mock.verify();
}

#[tokio::test]
async fn test_update_user_applies_change() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list().return_ok(vec![user(1, "a@x.com")]);
    let updated = User {
        age: 41,
        ..user(1, "a@x.com")
    };
    mock.expect_update(UserId(1)).return_ok(updated.clone());

    let client = UserClient::new(mock.client());
    let update = UserUpdate {
        age: Some(41),
        ..Default::default()
    };
    assert_eq!(client.update_user(UserId(1), update).await, Ok(updated));
    mock.verify();
}

#[tokio::test]
async fn test_store_not_found_keeps_the_id() {
    let mut mock = MockStore::<User>::new();
    mock.expect_delete(UserId(4))
        .return_err(StoreError::NotFound("4".into()));

    let client = UserClient::new(mock.client());
    assert_eq!(
        client.delete_user(UserId(4)).await,
        Err(UserError::NotFound(UserId(4)))
    );
    mock.verify();
}

#[tokio::test]
async fn test_transport_failure_becomes_actor_communication() {
    let mut mock = MockStore::<User>::new();
    mock.expect_list().return_err(StoreError::Closed);

    let client = UserClient::new(mock.client());
    let result = client.add_user(create("a@x.com")).await;
    assert!(matches!(result, Err(UserError::ActorCommunication(_))));
    mock.verify();
}

#[tokio::test]
async fn test_create_student_returns_stored_record() {
    let mut mock = MockStore::<Student>::new();
    let stored = Student {
        id: StudentId(1),
        name: "Ana".into(),
        age: 12,
        grade: "7".into(),
    };
    mock.expect_create().return_ok(StudentId(1));
    mock.expect_get(StudentId(1)).return_ok(Some(stored.clone()));

    let client = StudentClient::new(mock.client());
    let params = StudentCreate {
        name: "Ana".into(),
        age: 12,
        grade: "7".into(),
    };
    assert_eq!(client.create_student(params).await, Ok(stored));
    mock.verify();
}

#[tokio::test]
async fn test_student_not_found_message() {
    assert_eq!(
        StudentError::NotFound(StudentId(9)).to_string(),
        "Student not found"
    );
}
