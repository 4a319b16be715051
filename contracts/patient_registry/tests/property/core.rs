//! Property-based tests for registration and the member ID index.
//!
//! Invariants tested:
//! - `is_member_id_registered` is false before and true after registration
//! - A principal can hold at most one record, whatever member ID it tries next
//! - A member ID maps to at most one principal; the first writer keeps it
//! - Empty member IDs and empty payloads never create a record

use patient_registry::{PatientRegistryContract, PatientRegistryContractClient, RegistryError};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, Env, String};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, PatientRegistryContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PatientRegistryContract, ());
    let client = PatientRegistryContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_member_id_registered_after_register(
        member in "[A-Z0-9]{1,16}",
        data in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let (env, client, _admin) = setup();
        let member_id = String::from_str(&env, &member);
        let patient = Address::generate(&env);

        prop_assert!(!client.is_member_id_registered(&member_id));
        client.register_patient(&patient, &member_id, &Bytes::from_slice(&env, &data));
        prop_assert!(client.is_member_id_registered(&member_id));

        let record = client.get_patient_by_member_id(&member_id);
        prop_assert_eq!(record.owner, patient);
        prop_assert_eq!(record.encrypted_data, Bytes::from_slice(&env, &data));
    }

    #[test]
    fn prop_second_registration_is_duplicate_primary_key(
        first in "[A-Z0-9]{1,16}",
        second in "[A-Z0-9]{1,16}",
    ) {
        let (env, client, _admin) = setup();
        let patient = Address::generate(&env);
        let data = Bytes::from_slice(&env, b"0xdata");

        client.register_patient(&patient, &String::from_str(&env, &first), &data);
        let result = client.try_register_patient(&patient, &String::from_str(&env, &second), &data);

        prop_assert_eq!(result, Err(Ok(RegistryError::DuplicatePrimaryKey)));
        prop_assert_eq!(client.get_total_patients(), 1);
    }

    #[test]
    fn prop_shared_member_id_is_duplicate_business_key(member in "[A-Z0-9]{1,16}") {
        let (env, client, _admin) = setup();
        let member_id = String::from_str(&env, &member);
        let data = Bytes::from_slice(&env, b"0xdata");
        let winner = Address::generate(&env);
        let loser = Address::generate(&env);

        client.register_patient(&winner, &member_id, &data);
        let result = client.try_register_patient(&loser, &member_id, &data);

        prop_assert_eq!(result, Err(Ok(RegistryError::DuplicateBusinessKey)));
        prop_assert_eq!(client.get_member_owner(&member_id), Some(winner));
        prop_assert!(client.try_get_patient(&loser).is_err());
    }

    #[test]
    fn prop_empty_fields_never_register(member in "[A-Z0-9]{0,16}", with_data in any::<bool>()) {
        prop_assume!(member.is_empty() || !with_data);
        let (env, client, _admin) = setup();
        let patient = Address::generate(&env);
        let data = if with_data {
            Bytes::from_slice(&env, b"0xdata")
        } else {
            Bytes::new(&env)
        };

        let result = client.try_register_patient(&patient, &String::from_str(&env, &member), &data);

        prop_assert_eq!(result, Err(Ok(RegistryError::EmptyField)));
        prop_assert_eq!(client.get_total_patients(), 0);
    }
}
