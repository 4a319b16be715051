use soroban_sdk::{contracterror, contracttype, log, Env, String};

/// Error categories for classifying rejected transitions
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Lifecycle errors: initialisation state
    Lifecycle = 1,
    /// Authorization errors: caller or target lacks a role
    Authorization = 2,
    /// Not found errors: record lookup failures
    NotFound = 3,
    /// Validation errors: empty or out-of-range input
    Validation = 4,
    /// State conflict errors: duplicate keys, settled items
    StateConflict = 5,
    /// Funds errors: payment or balance shortfalls
    Funds = 6,
}

/// Error severity levels indicating the impact of a rejection
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller supplied bad input
    Low = 1,
    /// Caller attempted something it is not allowed to do
    Medium = 2,
    /// Contract is not usable in its current state
    High = 3,
}

/// Error codes shared by every Care Ledger contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authorisation                  |
/// | 20 – 29 | Resource not found             |
/// | 30 – 39 | Validation / input             |
/// | 40 – 49 | State conflict                 |
/// | 50 – 59 | Funds                          |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum RegistryError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller does not hold the role the transition requires.
    Unauthorized = 10,

    /// The principal a transition targets does not hold the required role
    /// (e.g. assigning a provider that was never authorised).
    UnauthorizedTarget = 11,

    // ── Not-found (20–29) ────────────────────────────────────
    /// No record exists under the given primary or business key.
    RecordNotFound = 20,

    // ── Validation (30–39) ───────────────────────────────────
    /// A required string or payload was empty.
    EmptyField = 30,

    /// The root role cannot be granted; there is exactly one custodian.
    InvalidRole = 31,

    /// A billed amount must be strictly positive.
    InvalidAmount = 32,

    // ── State conflict (40–49) ───────────────────────────────
    /// A record already exists under this primary key.
    DuplicatePrimaryKey = 40,

    /// The business key is already bound to another record.
    DuplicateBusinessKey = 41,

    /// The item or bill has already been paid.
    AlreadyPaid = 42,

    /// The record exists but is no longer active.
    RecordInactive = 43,

    // ── Funds (50–59) ────────────────────────────────────────
    /// The attached amount is zero, negative, or below what is owed.
    InsufficientPayment = 50,

    /// The contract holds no escrowed balance.
    NothingToWithdraw = 51,
}

impl RegistryError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::NotInitialized | RegistryError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            RegistryError::Unauthorized | RegistryError::UnauthorizedTarget => {
                ErrorCategory::Authorization
            }
            RegistryError::RecordNotFound => ErrorCategory::NotFound,
            RegistryError::EmptyField | RegistryError::InvalidRole | RegistryError::InvalidAmount => {
                ErrorCategory::Validation
            }
            RegistryError::DuplicatePrimaryKey
            | RegistryError::DuplicateBusinessKey
            | RegistryError::AlreadyPaid
            | RegistryError::RecordInactive => ErrorCategory::StateConflict,
            RegistryError::InsufficientPayment | RegistryError::NothingToWithdraw => {
                ErrorCategory::Funds
            }
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::NotInitialized | RegistryError::AlreadyInitialized => {
                ErrorSeverity::High
            }
            RegistryError::Unauthorized
            | RegistryError::UnauthorizedTarget
            | RegistryError::InvalidRole => ErrorSeverity::Medium,
            _ => ErrorSeverity::Low,
        }
    }

    /// Rejections are final for the submission that produced them; a caller
    /// has to resubmit with corrected input.
    pub fn retryable(&self) -> bool {
        false
    }

    /// Returns the human-readable reason surfaced to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            RegistryError::NotInitialized => "Contract has not been initialized",
            RegistryError::AlreadyInitialized => "Contract is already initialized",
            RegistryError::Unauthorized => "Caller is not authorized for this operation",
            RegistryError::UnauthorizedTarget => "Target does not hold the required role",
            RegistryError::RecordNotFound => "Record not found",
            RegistryError::EmptyField => "Required field is empty",
            RegistryError::InvalidRole => "The custodian role cannot be granted",
            RegistryError::InvalidAmount => "Amount must be greater than zero",
            RegistryError::DuplicatePrimaryKey => "A record already exists for this key",
            RegistryError::DuplicateBusinessKey => "Identifier is already registered",
            RegistryError::AlreadyPaid => "Item has already been paid",
            RegistryError::RecordInactive => "Record is not active",
            RegistryError::InsufficientPayment => "Payment amount is insufficient",
            RegistryError::NothingToWithdraw => "No balance available to withdraw",
        }
    }
}

/// Logs a rejected transition and hands the error back for propagation.
///
/// The diagnostic line is only materialised when the contract is built with
/// debug assertions (the `release-with-logs` profile or tests).
pub fn reject(env: &Env, error: RegistryError, operation: &str) -> RegistryError {
    log!(
        env,
        "rejected",
        String::from_str(env, operation),
        error as u32,
        String::from_str(env, error.message())
    );
    error
}

#[cfg(test)]
mod tests {
    use super::{ErrorCategory, ErrorSeverity, RegistryError};

    #[test]
    fn discriminants_are_stable() {
        assert_eq!(RegistryError::NotInitialized as u32, 1);
        assert_eq!(RegistryError::AlreadyInitialized as u32, 2);
        assert_eq!(RegistryError::Unauthorized as u32, 10);
        assert_eq!(RegistryError::UnauthorizedTarget as u32, 11);
        assert_eq!(RegistryError::RecordNotFound as u32, 20);
        assert_eq!(RegistryError::EmptyField as u32, 30);
        assert_eq!(RegistryError::DuplicatePrimaryKey as u32, 40);
        assert_eq!(RegistryError::DuplicateBusinessKey as u32, 41);
        assert_eq!(RegistryError::AlreadyPaid as u32, 42);
        assert_eq!(RegistryError::InsufficientPayment as u32, 50);
    }

    #[test]
    fn categories_follow_code_ranges() {
        assert_eq!(
            RegistryError::DuplicateBusinessKey.category(),
            ErrorCategory::StateConflict
        );
        assert_eq!(
            RegistryError::UnauthorizedTarget.category(),
            ErrorCategory::Authorization
        );
        assert_eq!(RegistryError::EmptyField.category(), ErrorCategory::Validation);
        assert_eq!(
            RegistryError::InsufficientPayment.category(),
            ErrorCategory::Funds
        );
        assert_eq!(RegistryError::Unauthorized.severity(), ErrorSeverity::Medium);
        assert_eq!(RegistryError::EmptyField.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn no_rejection_is_retryable() {
        assert!(!RegistryError::InsufficientPayment.retryable());
        assert!(!RegistryError::DuplicatePrimaryKey.retryable());
        assert!(!RegistryError::NotInitialized.retryable());
    }

    #[test]
    fn every_error_has_a_reason() {
        for e in [
            RegistryError::EmptyField,
            RegistryError::DuplicatePrimaryKey,
            RegistryError::DuplicateBusinessKey,
            RegistryError::RecordNotFound,
            RegistryError::Unauthorized,
            RegistryError::UnauthorizedTarget,
            RegistryError::InsufficientPayment,
            RegistryError::AlreadyPaid,
        ] {
            assert!(!e.message().is_empty());
        }
    }
}
