//! Login operation: validate input, look up the account, verify the
//! credential, and reduce the outcome to a result envelope.
//!
//! The operation classifies every failure it can — validation issues,
//! unknown or soft-deleted accounts, credential mismatches, collaborator
//! faults — before returning, so the pipeline's own fault handling stays a
//! last-resort net.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pipeline::{Envelope, LifecycleLog, OperationResult};

use super::credentials::{LoginCredentials, LoginValidationError};
use super::ports::{AccountRepository, PasswordHasher};

/// Logging context for operation-level diagnostics.
const LOGIN_CONTEXT: &str = "login";

/// Success message returned with a completed login.
pub const MSG_LOGIN_SUCCESS: &str = "Đăng nhập thành công";
/// Shared rejection message for unknown accounts, soft-deleted accounts,
/// and credential mismatches. One string for all three cases, so responses
/// cannot be used to probe which usernames exist.
pub const MSG_LOGIN_REJECTED: &str = "Sai tài khoản hoặc mật khẩu";
/// Fault message when a collaborator fails mid-login.
pub const MSG_LOGIN_FAULT: &str = "Có lỗi xảy ra trong quá trình đăng nhập";
/// Rejection message for a blank username.
pub const MSG_EMPTY_USERNAME: &str = "Tên người dùng không được để trống";
/// Rejection message for a blank password.
pub const MSG_EMPTY_PASSWORD: &str = "Mật khẩu không được để trống";

/// Raw login payload, decoded directly from the request body.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginInput {
    /// Submitted login name.
    #[schema(example = "admin")]
    pub username: String,
    /// Submitted plain-text password.
    #[schema(example = "password")]
    pub password: String,
}

/// Payload returned on a successful login.
///
/// Deliberately restricted to the username: the credential hash and the
/// remaining account columns never leave the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginOutput {
    /// Authenticated login name, post-trim.
    #[schema(example = "admin")]
    pub username: String,
}

/// Password-based login over the account repository and hashing ports.
pub struct LoginOperation {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    log: Arc<dyn LifecycleLog>,
}

impl LoginOperation {
    /// Wire the operation to its collaborators.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        log: Arc<dyn LifecycleLog>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            log,
        }
    }

    /// Run the login gates and return the outcome envelope.
    ///
    /// Gate order: structural validation, account lookup, soft-delete
    /// check, credential verification. Validation failures reject with the
    /// first failing field's message; every later rejection shares
    /// [`MSG_LOGIN_REJECTED`]. Collaborator errors are logged and reduced
    /// to a fault envelope here rather than escaping to the pipeline.
    pub async fn execute(&self, input: LoginInput) -> OperationResult<LoginOutput> {
        let credentials = match LoginCredentials::try_from_parts(&input.username, &input.password) {
            Ok(credentials) => credentials,
            Err(issue) => {
                self.log.error(LOGIN_CONTEXT, &issue.to_string());
                return Ok(Envelope::rejection(validation_message(issue)));
            }
        };

        let account = match self.accounts.find_by_username(credentials.username()).await {
            Ok(found) => found,
            Err(err) => {
                self.log.error(LOGIN_CONTEXT, &err.to_string());
                return Ok(Envelope::fault(MSG_LOGIN_FAULT));
            }
        };

        let Some(account) = account else {
            return Ok(Envelope::rejection(MSG_LOGIN_REJECTED));
        };
        if account.is_deleted() {
            return Ok(Envelope::rejection(MSG_LOGIN_REJECTED));
        }

        if !self
            .hasher
            .verify(credentials.password(), account.password_hash())
        {
            return Ok(Envelope::rejection(MSG_LOGIN_REJECTED));
        }

        Ok(Envelope::success(
            MSG_LOGIN_SUCCESS,
            LoginOutput {
                username: account.username().to_owned(),
            },
        ))
    }
}

const fn validation_message(issue: LoginValidationError) -> &'static str {
    match issue {
        LoginValidationError::EmptyUsername => MSG_EMPTY_USERNAME,
        LoginValidationError::EmptyPassword => MSG_EMPTY_PASSWORD,
    }
}

#[cfg(test)]
mod tests {
    //! Gate-by-gate coverage of the login state machine.
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::domain::Account;
    use crate::domain::ports::AccountPersistenceError;
    use crate::pipeline::EnvelopeStatus;
    use crate::pipeline::log::testing::RecordingLog;

    /// Repository holding at most one account, with optional forced failure.
    #[derive(Default)]
    struct StubRepository {
        account: Option<Account>,
        failure: Option<AccountPersistenceError>,
        lookups: AtomicUsize,
    }

    impl StubRepository {
        fn with_account(account: Account) -> Self {
            Self {
                account: Some(account),
                ..Self::default()
            }
        }

        fn failing(failure: AccountPersistenceError) -> Self {
            Self {
                failure: Some(failure),
                ..Self::default()
            }
        }

        fn lookup_count(&self) -> usize {
            self.lookups.load(Ordering::Relaxed)
        }
    }

    #[async_trait::async_trait]
    impl AccountRepository for StubRepository {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Account>, AccountPersistenceError> {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            if let Some(failure) = &self.failure {
                return Err(failure.clone());
            }
            Ok(self
                .account
                .as_ref()
                .filter(|account| account.username() == username)
                .cloned())
        }
    }

    /// Hasher whose "digest" is the password prefixed with a marker.
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash(&self, plain: &str) -> String {
            format!("plain:{plain}")
        }

        fn verify(&self, plain: &str, encoded: &str) -> bool {
            encoded == format!("plain:{plain}")
        }
    }

    fn operation(repository: Arc<StubRepository>) -> LoginOperation {
        LoginOperation::new(
            repository,
            Arc::new(StubHasher),
            Arc::new(RecordingLog::default()),
        )
    }

    fn input(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    fn stored_account(username: &str, password: &str) -> Account {
        Account::new(Uuid::new_v4(), username, StubHasher.hash(password))
    }

    #[tokio::test]
    async fn correct_credentials_succeed_with_username_only_payload() {
        let repository = Arc::new(StubRepository::with_account(stored_account("ada", "secret")));
        let envelope = operation(repository)
            .execute(input("ada", "secret"))
            .await
            .expect("operation classifies its own failures");

        assert_eq!(envelope.status(), EnvelopeStatus::Success);
        assert_eq!(envelope.message(), MSG_LOGIN_SUCCESS);
        assert_eq!(
            envelope.data(),
            Some(&LoginOutput {
                username: "ada".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_trimmed_before_the_gates() {
        let repository = Arc::new(StubRepository::with_account(stored_account("ada", "secret")));
        let envelope = operation(repository)
            .execute(input("  ada  ", "  secret  "))
            .await
            .expect("operation classifies its own failures");

        assert_eq!(envelope.status(), EnvelopeStatus::Success);
        assert_eq!(
            envelope.data(),
            Some(&LoginOutput {
                username: "ada".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn unknown_username_and_wrong_password_share_one_message() {
        let repository = Arc::new(StubRepository::with_account(stored_account("ada", "secret")));

        let unknown = operation(repository.clone())
            .execute(input("grace", "secret"))
            .await
            .expect("classified");
        let mismatch = operation(repository)
            .execute(input("ada", "wrong"))
            .await
            .expect("classified");

        assert_eq!(unknown.status(), EnvelopeStatus::Rejected);
        assert_eq!(mismatch.status(), EnvelopeStatus::Rejected);
        assert_eq!(unknown.message(), mismatch.message());
        assert_eq!(unknown.message(), MSG_LOGIN_REJECTED);
        assert_eq!(unknown.data(), None);
        assert_eq!(mismatch.data(), None);
    }

    #[tokio::test]
    async fn soft_deleted_account_rejects_even_with_correct_password() {
        let account = stored_account("ada", "secret").soft_deleted();
        let repository = Arc::new(StubRepository::with_account(account));

        let envelope = operation(repository)
            .execute(input("ada", "secret"))
            .await
            .expect("classified");

        assert_eq!(envelope.status(), EnvelopeStatus::Rejected);
        assert_eq!(envelope.message(), MSG_LOGIN_REJECTED);
        assert_eq!(envelope.data(), None);
    }

    #[rstest]
    #[case("", "secret", MSG_EMPTY_USERNAME)]
    #[case("   ", "secret", MSG_EMPTY_USERNAME)]
    #[case("ada", "", MSG_EMPTY_PASSWORD)]
    #[case("ada", "   ", MSG_EMPTY_PASSWORD)]
    #[tokio::test]
    async fn blank_fields_reject_before_any_lookup(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: &str,
    ) {
        let repository = Arc::new(StubRepository::default());
        let envelope = operation(repository.clone())
            .execute(input(username, password))
            .await
            .expect("classified");

        assert_eq!(envelope.status(), EnvelopeStatus::Rejected);
        assert_eq!(envelope.message(), expected);
        assert_eq!(envelope.data(), None);
        assert_eq!(repository.lookup_count(), 0, "validation gates the lookup");
    }

    #[rstest]
    #[case(AccountPersistenceError::connection("store unreachable"))]
    #[case(AccountPersistenceError::query("relation missing"))]
    #[tokio::test]
    async fn repository_errors_become_fault_envelopes(#[case] failure: AccountPersistenceError) {
        let repository = Arc::new(StubRepository::failing(failure));
        let envelope = operation(repository)
            .execute(input("ada", "secret"))
            .await
            .expect("fault is classified, not propagated");

        assert_eq!(envelope.status(), EnvelopeStatus::Faulted);
        assert_eq!(envelope.message(), MSG_LOGIN_FAULT);
        assert_eq!(envelope.data(), None);
    }

    #[tokio::test]
    async fn repeated_logins_yield_identical_envelopes() {
        let repository = Arc::new(StubRepository::with_account(stored_account("ada", "secret")));
        let operation = operation(repository);

        let first = operation
            .execute(input("ada", "secret"))
            .await
            .expect("classified");
        let second = operation
            .execute(input("ada", "secret"))
            .await
            .expect("classified");

        assert_eq!(first, second);
    }
}
