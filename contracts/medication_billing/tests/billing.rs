#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]

use medication_billing::{BillStatus, MedicationBillingContract, MedicationBillingContractClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

#[test]
fn test_member_bill_lifecycle() {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(MedicationBillingContract, ());
    let client = MedicationBillingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let pharmacy = Address::generate(&env);
    let member = Address::generate(&env);
    client.initialize(&admin, &token);
    client.authorize_biller(&admin, &pharmacy);
    StellarAssetClient::new(&env, &token).mint(&member, &1_000);

    let member_id = String::from_str(&env, "MEM1");
    for (id, amount) in [("B1", 120i128), ("B2", 30), ("B3", 55)] {
        client.issue_bill(
            &pharmacy,
            &String::from_str(&env, id),
            &member_id,
            &String::from_str(&env, "metformin"),
            &amount,
        );
    }

    let bills = client.get_member_bills(&member_id);
    assert_eq!(bills.len(), 3);
    assert_eq!(bills.get(0).unwrap(), String::from_str(&env, "B1"));

    client.pay_bill(&member, &String::from_str(&env, "B1"), &120);
    client.pay_bill(&member, &String::from_str(&env, "B3"), &55);

    assert_eq!(
        client.get_bill(&String::from_str(&env, "B2")).status,
        BillStatus::Issued
    );

    let stats = client.get_billing_stats();
    assert_eq!(stats.issued, 3);
    assert_eq!(stats.paid, 2);
    assert_eq!(stats.amount_collected, 175);

    assert_eq!(client.withdraw(&admin), 175);
    assert_eq!(TokenClient::new(&env, &token).balance(&admin), 175);
    assert_eq!(TokenClient::new(&env, &token).balance(&member), 825);

    // init, biller grant, three bills, two payments, one withdraw
    assert_eq!(client.get_audit_seq(), 8);
}
