#![no_std]

pub mod bill;
pub mod events;

use care_common::{audit, escrow, reject, roles, ttl, validation};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use bill::{Bill, BillStatus, BillingConfig, BillingStats};
pub use care_common::{RegistryError, Role};

#[contract]
pub struct MedicationBillingContract;

#[contractimpl]
impl MedicationBillingContract {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), RegistryError> {
        if bill::has_config(&env) {
            return Err(reject(&env, RegistryError::AlreadyInitialized, "initialize"));
        }
        admin.require_auth();

        roles::bootstrap_custodian(&env, &admin)?;
        bill::set_config(
            &env,
            &BillingConfig {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        ttl::extend_instance(&env);

        events::publish_initialized(&env, admin, token);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<BillingConfig, RegistryError> {
        Self::load_config(&env)
    }

    /// Let `biller` issue bills. Custodian only.
    pub fn authorize_biller(env: Env, caller: Address, biller: Address) -> Result<(), RegistryError> {
        Self::load_config(&env)?;
        caller.require_auth();
        if roles::grant_role(&env, &caller, &biller, Role::Provider, "authorize_biller")? {
            events::publish_biller_authorized(&env, biller, caller);
        }

        Ok(())
    }

    pub fn is_biller(env: Env, principal: Address) -> bool {
        roles::has_role(&env, &principal, Role::Provider)
    }

    // ── Bills ───────────────────────────────────────────────────────────────

    /// Issue a bill for `medication` against `member_id`.
    ///
    /// The issuer must be the custodian or an authorized biller.
    pub fn issue_bill(
        env: Env,
        issuer: Address,
        bill_id: String,
        member_id: String,
        medication: String,
        amount: i128,
    ) -> Result<Bill, RegistryError> {
        Self::load_config(&env)?;
        issuer.require_auth();

        if !roles::has_role(&env, &issuer, Role::Custodian)
            && !roles::has_role(&env, &issuer, Role::Provider)
        {
            return Err(reject(&env, RegistryError::Unauthorized, "issue_bill"));
        }

        validation::require_non_empty(&env, &bill_id, "issue_bill")?;
        validation::require_non_empty(&env, &member_id, "issue_bill")?;
        validation::require_non_empty(&env, &medication, "issue_bill")?;
        if amount <= 0 {
            return Err(reject(&env, RegistryError::InvalidAmount, "issue_bill"));
        }
        if bill::has_bill(&env, &bill_id) {
            return Err(reject(&env, RegistryError::DuplicatePrimaryKey, "issue_bill"));
        }

        let record = Bill {
            bill_id: bill_id.clone(),
            member_id: member_id.clone(),
            medication,
            amount,
            issued_by: issuer.clone(),
            issued_at: env.ledger().timestamp(),
            status: BillStatus::Issued,
            paid_by: None,
            paid_at: 0,
        };

        bill::set_bill(&env, &record);
        bill::append_member_bill(&env, &member_id, &bill_id);
        bill::record_issued(&env);

        events::publish_bill_issued(&env, bill_id, member_id, amount, issuer);

        Ok(record)
    }

    /// Settle a bill. `amount` is what the payer offers; exactly the billed
    /// amount is transferred.
    pub fn pay_bill(
        env: Env,
        payer: Address,
        bill_id: String,
        amount: i128,
    ) -> Result<Bill, RegistryError> {
        let config = Self::load_config(&env)?;
        payer.require_auth();

        let mut record = bill::get_bill(&env, &bill_id)
            .ok_or_else(|| reject(&env, RegistryError::RecordNotFound, "pay_bill"))?;
        if record.status == BillStatus::Paid {
            return Err(reject(&env, RegistryError::AlreadyPaid, "pay_bill"));
        }
        if amount < record.amount {
            return Err(reject(&env, RegistryError::InsufficientPayment, "pay_bill"));
        }

        escrow::require_funds(&env, &config.token, &payer, record.amount, "pay_bill")?;
        escrow::collect(&env, &config.token, &payer, record.amount);

        record.status = BillStatus::Paid;
        record.paid_by = Some(payer.clone());
        record.paid_at = env.ledger().timestamp();
        bill::set_bill(&env, &record);
        bill::record_paid(&env, record.amount);

        events::publish_bill_paid(
            &env,
            bill_id,
            record.member_id.clone(),
            record.amount,
            payer,
        );

        Ok(record)
    }

    pub fn get_bill(env: Env, bill_id: String) -> Result<Bill, RegistryError> {
        bill::get_bill(&env, &bill_id)
            .ok_or_else(|| reject(&env, RegistryError::RecordNotFound, "get_bill"))
    }

    /// Bill IDs issued against `member_id`, oldest first
    pub fn get_member_bills(env: Env, member_id: String) -> Vec<String> {
        bill::member_bills(&env, &member_id)
    }

    pub fn get_billing_stats(env: Env) -> Result<BillingStats, RegistryError> {
        let config = Self::load_config(&env)?;
        Ok(BillingStats {
            issued: bill::issued_count(&env),
            paid: bill::paid_count(&env),
            amount_collected: bill::amount_collected(&env),
            balance: escrow::balance(&env, &config.token),
        })
    }

    // ── Funds ───────────────────────────────────────────────────────────────

    /// Move collected funds to the custodian. Custodian only.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, RegistryError> {
        let config = Self::load_config(&env)?;
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Custodian, "withdraw")?;

        let amount = escrow::release_all(&env, &config.token, &caller, "withdraw")?;
        events::publish_withdrawn(&env, caller, amount);

        Ok(amount)
    }

    pub fn get_audit_seq(env: Env) -> u64 {
        audit::current_seq(&env)
    }

    fn load_config(env: &Env) -> Result<BillingConfig, RegistryError> {
        bill::get_config(env).ok_or(RegistryError::NotInitialized)
    }
}
