#![no_std]

pub mod events;
pub mod payment;

use care_common::{audit, escrow, reject, roles, ttl, validation};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use care_common::{RegistryError, Role};
pub use payment::{Payment, PaymentConfig, PaymentStats};

#[contract]
pub struct PaymentRegistryContract;

#[contractimpl]
impl PaymentRegistryContract {
    /// Initialize the registry with its custodian and the token payments are
    /// made in.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), RegistryError> {
        if payment::has_config(&env) {
            return Err(reject(&env, RegistryError::AlreadyInitialized, "initialize"));
        }
        admin.require_auth();

        roles::bootstrap_custodian(&env, &admin)?;
        payment::set_config(
            &env,
            &PaymentConfig {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        ttl::extend_instance(&env);

        events::publish_initialized(&env, admin, token);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<PaymentConfig, RegistryError> {
        Self::load_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        payment::has_config(&env)
    }

    // ── Payments ────────────────────────────────────────────────────────────

    /// Pay `amount` for `item_id` and record it under `payment_id`.
    ///
    /// The amount is moved from `payer` into the contract's escrow. A payment
    /// ID can be used once, and an item can be paid once; both checks and all
    /// writes happen in the same invocation.
    pub fn process_payment(
        env: Env,
        payer: Address,
        payment_id: String,
        item_id: String,
        item_type: String,
        member_id: String,
        amount: i128,
    ) -> Result<Payment, RegistryError> {
        let config = Self::load_config(&env)?;
        payer.require_auth();

        validation::require_positive_payment(&env, amount, "process_payment")?;
        validation::require_non_empty(&env, &payment_id, "process_payment")?;
        validation::require_non_empty(&env, &item_id, "process_payment")?;

        if payment::has_payment(&env, &payment_id) {
            return Err(reject(
                &env,
                RegistryError::DuplicatePrimaryKey,
                "process_payment",
            ));
        }
        if payment::item_payment(&env, &item_id).is_some() {
            return Err(reject(&env, RegistryError::AlreadyPaid, "process_payment"));
        }

        escrow::require_funds(&env, &config.token, &payer, amount, "process_payment")?;
        escrow::collect(&env, &config.token, &payer, amount);

        let record = Payment {
            payment_id: payment_id.clone(),
            item_id: item_id.clone(),
            item_type,
            member_id: member_id.clone(),
            payer: payer.clone(),
            amount,
            paid_at: env.ledger().timestamp(),
            completed: true,
        };

        payment::set_payment(&env, &record);
        payment::mark_item_paid(&env, &item_id, &payment_id);
        payment::append_member_payment(&env, &member_id, &payment_id);
        payment::record_totals(&env, amount);

        events::publish_payment_processed(&env, payment_id, item_id, member_id, payer, amount);

        Ok(record)
    }

    pub fn get_payment(env: Env, payment_id: String) -> Result<Payment, RegistryError> {
        payment::get_payment(&env, &payment_id)
            .ok_or_else(|| reject(&env, RegistryError::RecordNotFound, "get_payment"))
    }

    /// Payment that settled `item_id`
    pub fn get_payment_for_item(env: Env, item_id: String) -> Result<Payment, RegistryError> {
        payment::item_payment(&env, &item_id)
            .and_then(|payment_id| payment::get_payment(&env, &payment_id))
            .ok_or_else(|| reject(&env, RegistryError::RecordNotFound, "get_payment_for_item"))
    }

    pub fn is_item_paid(env: Env, item_id: String) -> bool {
        payment::item_payment(&env, &item_id).is_some()
    }

    /// Payment IDs recorded for `member_id`, oldest first
    pub fn get_member_payments(env: Env, member_id: String) -> Vec<String> {
        payment::member_payments(&env, &member_id)
    }

    pub fn get_stats(env: Env) -> Result<PaymentStats, RegistryError> {
        let config = Self::load_config(&env)?;
        Ok(PaymentStats {
            count_processed: payment::count_processed(&env),
            amount_processed: payment::amount_processed(&env),
            balance: escrow::balance(&env, &config.token),
        })
    }

    // ── Funds ───────────────────────────────────────────────────────────────

    /// Move the whole escrowed balance to the custodian. Custodian only.
    ///
    /// Returns the amount withdrawn. Lifetime totals are left untouched.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, RegistryError> {
        let config = Self::load_config(&env)?;
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Custodian, "withdraw")?;

        let amount = escrow::release_all(&env, &config.token, &caller, "withdraw")?;

        events::publish_withdrawn(&env, caller, amount);

        Ok(amount)
    }

    // ── Introspection ───────────────────────────────────────────────────────

    pub fn get_audit_seq(env: Env) -> u64 {
        audit::current_seq(&env)
    }

    pub fn version() -> u32 {
        1
    }

    fn load_config(env: &Env) -> Result<PaymentConfig, RegistryError> {
        payment::get_config(env).ok_or(RegistryError::NotInitialized)
    }
}
