//! Tests for the credential service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};
use zeroize::Zeroizing;

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockUserRepository};
use crate::domain::{ContactNumber, EmailAddress, ErrorCode, RequiredText};

const STUB_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

type TestService = CredentialService<MockUserRepository, MockPasswordHasher>;

fn make_service(repo: MockUserRepository, hasher: MockPasswordHasher) -> TestService {
    CredentialService::new(Arc::new(repo), Arc::new(hasher))
}

#[fixture]
fn candidate() -> SignupCandidate {
    SignupCandidate {
        name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        password: Some(Zeroizing::new("secret1".into())),
        age: Some("36".into()),
        city: Some("London".into()),
        contact: Some("0123456789".into()),
    }
}

fn stored_user() -> User {
    User::new(UserDraft {
        id: UserId::random(),
        name: RequiredText::new("Ada Lovelace").expect("name"),
        email: EmailAddress::new("ada@example.com").expect("email"),
        password_hash: PasswordHash::new(STUB_HASH).expect("hash"),
        age: 36,
        city: RequiredText::new("London").expect("city"),
        contact: ContactNumber::new("0123456789").expect("contact"),
    })
}

fn credentials(password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts("ada@example.com", password).expect("credentials")
}

#[rstest]
#[tokio::test]
async fn register_stores_hash_not_plaintext(candidate: SignupCandidate) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .with(eq("secret1"))
        .times(1)
        .returning(|_| Ok(PasswordHash::new(STUB_HASH).expect("hash")));
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|user| {
            user.password_hash().as_str() == STUB_HASH
                && user.email().as_ref() == "ada@example.com"
                && user.age() == 36
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = make_service(repo, hasher);
    service.register(candidate).await.expect("signup succeeds");
}

#[rstest]
#[tokio::test]
async fn register_rejects_invalid_input_without_touching_ports(mut candidate: SignupCandidate) {
    candidate.contact = Some("12345".into());
    candidate.password = Some(Zeroizing::new("short".into()));
    let service = make_service(MockUserRepository::new(), MockPasswordHasher::new());

    let err = service
        .register(candidate)
        .await
        .expect_err("invalid signup must fail");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let fields = err
        .details()
        .and_then(|details| details.get("fieldErrors"))
        .and_then(|fields| fields.as_array())
        .expect("field errors present");
    assert_eq!(fields.len(), 2);
}

#[rstest]
#[tokio::test]
async fn register_maps_duplicate_email_to_conflict(candidate: SignupCandidate) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new(STUB_HASH).expect("hash")));
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|_| Err(UserPersistenceError::duplicate_email()));

    let err = make_service(repo, hasher)
        .register(candidate)
        .await
        .expect_err("duplicate must fail");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "email is already registered");
}

#[rstest]
#[tokio::test]
async fn register_surfaces_hashing_failures_as_internal(candidate: SignupCandidate) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(PasswordHashError::hashing("out of memory")));

    let err = make_service(MockUserRepository::new(), hasher)
        .register(candidate)
        .await
        .expect_err("hashing failure must fail");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn authenticate_returns_redacted_profile() {
    let user = stored_user();
    let expected = user.to_profile();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq("ada@example.com"))
        .return_once(move |_| Ok(Some(user)));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(true));

    let profile = make_service(repo, hasher)
        .authenticate(&credentials("secret1"))
        .await
        .expect("login succeeds");

    assert_eq!(profile, expected);
    let json = serde_json::to_value(&profile).expect("serialise");
    assert!(!json.to_string().contains(STUB_HASH));
}

#[tokio::test]
async fn unknown_email_and_wrong_password_fail_identically() {
    let mut unknown_repo = MockUserRepository::new();
    unknown_repo
        .expect_find_by_email()
        .return_once(|_| Ok(None));
    let unknown = make_service(unknown_repo, MockPasswordHasher::new())
        .authenticate(&credentials("secret1"))
        .await
        .expect_err("unknown email must fail");

    let user = stored_user();
    let mut known_repo = MockUserRepository::new();
    known_repo
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(user)));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(false));
    let wrong = make_service(known_repo, hasher)
        .authenticate(&credentials("wrong-password"))
        .await
        .expect_err("wrong password must fail");

    assert_eq!(unknown.code(), ErrorCode::Unauthorized);
    assert_eq!(unknown.code(), wrong.code());
    assert_eq!(unknown.message(), wrong.message());
    assert_eq!(unknown.message(), INVALID_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn authenticate_maps_connection_errors_to_service_unavailable() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .return_once(|_| Err(UserPersistenceError::connection("refused")));

    let err = make_service(repo, MockPasswordHasher::new())
        .authenticate(&credentials("secret1"))
        .await
        .expect_err("connection failure must fail");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn fetch_profile_returns_known_user() {
    let user = stored_user();
    let id = user.id().clone();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(id.clone()))
        .return_once(move |_| Ok(Some(user)));

    let profile = make_service(repo, MockPasswordHasher::new())
        .fetch_profile(&id)
        .await
        .expect("profile found");

    assert_eq!(profile.id, id.to_string());
}

#[tokio::test]
async fn fetch_profile_reports_unknown_user_as_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let err = make_service(repo, MockPasswordHasher::new())
        .fetch_profile(&UserId::random())
        .await
        .expect_err("missing user must fail");

    assert_eq!(err.code(), ErrorCode::NotFound);
}
