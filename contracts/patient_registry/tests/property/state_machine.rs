//! Model-based test: random operation sequences against a reference model.
//!
//! Every operation's outcome (success or the exact error) is predicted from a
//! plain in-memory model, and after the sequence the contract's counters and
//! records must agree with the model.

use patient_registry::{PatientRegistryContract, PatientRegistryContractClient, RegistryError};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, Env, String};
use std::collections::{BTreeMap, BTreeSet};

const PRINCIPALS: usize = 4;
const MEMBER_IDS: [&str; 3] = ["MEM1", "MEM2", "MEM3"];

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Register {
        #[proptest(strategy = "0..PRINCIPALS")]
        who: usize,
        #[proptest(strategy = "0..MEMBER_IDS.len()")]
        member: usize,
    },
    Update {
        #[proptest(strategy = "0..PRINCIPALS")]
        who: usize,
    },
    Authorize {
        #[proptest(strategy = "0..PRINCIPALS")]
        who: usize,
    },
    Assign {
        #[proptest(strategy = "0..PRINCIPALS")]
        patient: usize,
        #[proptest(strategy = "0..PRINCIPALS")]
        provider: usize,
    },
}

#[derive(Default)]
struct Model {
    patients: BTreeMap<usize, usize>,
    members: BTreeSet<usize>,
    providers: BTreeSet<usize>,
    assigned: BTreeMap<usize, usize>,
    accepted: u64,
}

proptest! {
    #[test]
    fn prop_operations_agree_with_model(ops in proptest::collection::vec(any::<Op>(), 1..24)) {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(PatientRegistryContract, ());
        let client = PatientRegistryContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin);

        let principals: std::vec::Vec<Address> =
            (0..PRINCIPALS).map(|_| Address::generate(&env)).collect();
        let data = Bytes::from_slice(&env, b"0xdata");
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Register { who, member } => {
                    let result = client.try_register_patient(
                        &principals[who],
                        &String::from_str(&env, MEMBER_IDS[member]),
                        &data,
                    );
                    if model.patients.contains_key(&who) {
                        prop_assert_eq!(result, Err(Ok(RegistryError::DuplicatePrimaryKey)));
                    } else if model.members.contains(&member) {
                        prop_assert_eq!(result, Err(Ok(RegistryError::DuplicateBusinessKey)));
                    } else {
                        prop_assert!(result.is_ok());
                        model.patients.insert(who, member);
                        model.members.insert(member);
                        model.accepted += 1;
                    }
                }
                Op::Update { who } => {
                    let result = client.try_update_patient(&principals[who], &data);
                    if model.patients.contains_key(&who) {
                        prop_assert!(result.is_ok());
                        model.accepted += 1;
                    } else {
                        prop_assert_eq!(result, Err(Ok(RegistryError::RecordNotFound)));
                    }
                }
                Op::Authorize { who } => {
                    client.authorize_provider(&admin, &principals[who]);
                    // A repeat grant succeeds but emits nothing.
                    if model.providers.insert(who) {
                        model.accepted += 1;
                    }
                }
                Op::Assign { patient, provider } => {
                    let result = client.try_assign_provider(
                        &admin,
                        &principals[patient],
                        &principals[provider],
                    );
                    if !model.patients.contains_key(&patient) {
                        prop_assert_eq!(result, Err(Ok(RegistryError::RecordNotFound)));
                    } else if !model.providers.contains(&provider) {
                        prop_assert_eq!(result, Err(Ok(RegistryError::UnauthorizedTarget)));
                    } else {
                        prop_assert!(result.is_ok());
                        model.assigned.insert(patient, provider);
                        model.accepted += 1;
                    }
                }
            }
        }

        prop_assert_eq!(client.get_total_patients(), model.patients.len() as u64);
        // One audit event for initialize plus one per accepted transition.
        prop_assert_eq!(client.get_audit_seq(), model.accepted + 1);

        for (who, member) in &model.patients {
            let record = client.get_patient(&principals[*who]);
            prop_assert_eq!(record.member_id, String::from_str(&env, MEMBER_IDS[*member]));
            let expected = model.assigned.get(who).map(|p| principals[*p].clone());
            prop_assert_eq!(record.provider, expected);
        }
    }
}
