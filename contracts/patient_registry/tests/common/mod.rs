#![allow(dead_code)]

use patient_registry::{PatientRegistryContract, PatientRegistryContractClient, RegistrationReceipt};
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env, String};

pub struct TestContext {
    pub env: Env,
    pub client: PatientRegistryContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the registry, and initializes the custodian.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PatientRegistryContract, ());
    let client = PatientRegistryContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

/// Registers a fresh principal under `member_id` and returns its address.
pub fn register_test_patient(ctx: &TestContext, member_id: &str) -> Address {
    let patient = Address::generate(&ctx.env);
    register_as(ctx, &patient, member_id, b"0xdata");
    patient
}

/// Registers `patient` under `member_id` with the given payload.
pub fn register_as(
    ctx: &TestContext,
    patient: &Address,
    member_id: &str,
    data: &[u8],
) -> RegistrationReceipt {
    ctx.client.register_patient(
        patient,
        &String::from_str(&ctx.env, member_id),
        &Bytes::from_slice(&ctx.env, data),
    )
}

/// Generates a principal and authorizes it as a provider.
pub fn create_test_provider(ctx: &TestContext) -> Address {
    let provider = Address::generate(&ctx.env);
    ctx.client.authorize_provider(&ctx.admin, &provider);
    provider
}
