#![no_std]

pub mod events;
pub mod patient;

use care_common::{audit, reject, roles, validation};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String};

pub use care_common::{RegistryError, Role};
pub use patient::{Patient, RegistrationReceipt};

#[contract]
pub struct PatientRegistryContract;

#[contractimpl]
impl PatientRegistryContract {
    /// Initialize the registry with its custodian.
    ///
    /// The custodian is the only principal that can authorize providers and
    /// assign them to patients. It cannot be transferred.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if roles::get_custodian(&env).is_some() {
            return Err(reject(&env, RegistryError::AlreadyInitialized, "initialize"));
        }
        admin.require_auth();

        roles::bootstrap_custodian(&env, &admin)?;
        care_common::ttl::extend_instance(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the custodian address
    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        roles::custodian(&env)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        roles::get_custodian(&env).is_some()
    }

    // ── Registration ────────────────────────────────────────────────────────

    /// Register the calling principal as a patient under `member_id`.
    ///
    /// Fails if either field is empty, if the principal already has a record,
    /// or if the member ID is bound to someone else. The record and the
    /// member ID reservation are written together or not at all.
    pub fn register_patient(
        env: Env,
        patient: Address,
        member_id: String,
        encrypted_data: Bytes,
    ) -> Result<RegistrationReceipt, RegistryError> {
        Self::require_initialized(&env, "register_patient")?;
        patient.require_auth();

        validation::require_non_empty(&env, &member_id, "register_patient")?;
        validation::require_payload(&env, &encrypted_data, "register_patient")?;

        if patient::has_patient(&env, &patient) {
            return Err(reject(
                &env,
                RegistryError::DuplicatePrimaryKey,
                "register_patient",
            ));
        }
        if patient::member_owner(&env, &member_id).is_some() {
            return Err(reject(
                &env,
                RegistryError::DuplicateBusinessKey,
                "register_patient",
            ));
        }

        let now = env.ledger().timestamp();
        let record = Patient {
            owner: patient.clone(),
            member_id: member_id.clone(),
            encrypted_data,
            registered_at: now,
            updated_at: now,
            active: true,
            provider: None,
        };

        patient::set_patient(&env, &record);
        patient::reserve_member_id(&env, &member_id, &patient);
        patient::increment_total(&env);

        events::publish_patient_registered(&env, patient.clone(), member_id.clone());

        Ok(RegistrationReceipt {
            patient,
            member_id,
            registered_at: now,
        })
    }

    /// Get a patient record by its owning principal
    pub fn get_patient(env: Env, patient: Address) -> Result<Patient, RegistryError> {
        patient::get_patient(&env, &patient)
            .ok_or_else(|| reject(&env, RegistryError::RecordNotFound, "get_patient"))
    }

    /// Get a patient record through the member ID index
    pub fn get_patient_by_member_id(env: Env, member_id: String) -> Result<Patient, RegistryError> {
        let owner = patient::member_owner(&env, &member_id).ok_or_else(|| {
            reject(&env, RegistryError::RecordNotFound, "get_patient_by_member_id")
        })?;
        patient::get_patient(&env, &owner).ok_or_else(|| {
            reject(&env, RegistryError::RecordNotFound, "get_patient_by_member_id")
        })
    }

    /// Principal bound to `member_id`, if any
    pub fn get_member_owner(env: Env, member_id: String) -> Option<Address> {
        patient::member_owner(&env, &member_id)
    }

    /// Whether `member_id` is already bound to a patient
    pub fn is_member_id_registered(env: Env, member_id: String) -> bool {
        patient::member_owner(&env, &member_id).is_some()
    }

    /// Replace the caller's own encrypted payload.
    ///
    /// Only the owning principal can update its record; member ID and
    /// registration time are left untouched.
    pub fn update_patient(
        env: Env,
        patient: Address,
        encrypted_data: Bytes,
    ) -> Result<(), RegistryError> {
        patient.require_auth();

        validation::require_payload(&env, &encrypted_data, "update_patient")?;
        let mut record = Self::load_active(&env, &patient, "update_patient")?;

        record.encrypted_data = encrypted_data;
        record.updated_at = env.ledger().timestamp();
        patient::set_patient(&env, &record);

        events::publish_patient_updated(&env, patient, record.member_id);

        Ok(())
    }

    /// Get the total number of registered patients
    pub fn get_total_patients(env: Env) -> u64 {
        patient::total(&env)
    }

    // ── Providers ───────────────────────────────────────────────────────────

    /// Grant the provider role to `provider`. Custodian only.
    ///
    /// Re-granting succeeds without emitting an event.
    pub fn authorize_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        if roles::grant_role(&env, &caller, &provider, Role::Provider, "authorize_provider")? {
            events::publish_provider_authorized(&env, provider, caller);
        }

        Ok(())
    }

    /// Whether `principal` holds the provider role
    pub fn is_provider(env: Env, principal: Address) -> bool {
        roles::has_role(&env, &principal, Role::Provider)
    }

    /// Point a patient's record at an authorized provider. Custodian only.
    ///
    /// May be called again to reassign; the target must hold the provider
    /// role at the time of each assignment.
    pub fn assign_provider(
        env: Env,
        caller: Address,
        patient: Address,
        provider: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Custodian, "assign_provider")?;

        let mut record = Self::load_active(&env, &patient, "assign_provider")?;
        roles::require_target_role(&env, &provider, Role::Provider, "assign_provider")?;

        record.provider = Some(provider.clone());
        patient::set_patient(&env, &record);

        events::publish_provider_assigned(&env, patient, record.member_id, provider);

        Ok(())
    }

    // ── Introspection ───────────────────────────────────────────────────────

    /// Number of audit events emitted by accepted transitions
    pub fn get_audit_seq(env: Env) -> u64 {
        audit::current_seq(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn require_initialized(env: &Env, operation: &str) -> Result<(), RegistryError> {
        if roles::get_custodian(env).is_none() {
            return Err(reject(env, RegistryError::NotInitialized, operation));
        }
        Ok(())
    }

    fn load_active(env: &Env, owner: &Address, operation: &str) -> Result<Patient, RegistryError> {
        let record = patient::get_patient(env, owner)
            .ok_or_else(|| reject(env, RegistryError::RecordNotFound, operation))?;
        if !record.active {
            return Err(reject(env, RegistryError::RecordInactive, operation));
        }
        Ok(record)
    }
}
