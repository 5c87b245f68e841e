//! # Exchange Flows
//!
//! Full trading choreography: seeding the engine, buying and selling at
//! configured prices, reserve deposits and treasury withdrawal, and the
//! direct distribution path for owner and bot.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use shared_types::U256;
    use tessera_exchange::ExchangeError;

    #[test]
    fn a_buy_is_one_logged_transfer_from_the_engine() {
        let d = Deployment::trading(1_000, 2, 5);
        let records_before = d.log.count();

        let units = d.engine.buy(&ALICE, U256::from(50)).unwrap();
        assert_eq!(units, U256::from(10));

        // The seeding mint plus this buy: each is exactly one record.
        assert_eq!(d.log.count(), records_before + 1);
        let record = d.log.get(records_before).unwrap();
        assert_eq!((record.from, record.to), (ENGINE_ACCOUNT, ALICE));
        assert_eq!(record.amount, U256::from(10));
        assert_eq!(d.engine.contract_balance(), U256::from(50));
    }

    #[test]
    fn a_full_buy_then_sell_round_trip_conserves_supply() {
        let d = Deployment::trading(1_000, 2, 5);
        let supply = d.ledger.total_supply();

        d.engine.buy(&ALICE, U256::from(100)).unwrap();
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(20));

        let owed = d.engine.sell(&ALICE, U256::from(20)).unwrap();
        assert_eq!(owed, U256::from(40));

        assert_eq!(d.ledger.balance_of(&ALICE), U256::zero());
        assert_eq!(d.ledger.balance_of(&ENGINE_ACCOUNT), U256::from(1_000));
        assert_eq!(d.ledger.total_supply(), supply);
        assert_eq!(d.engine.contract_balance(), U256::from(60));
    }

    #[test]
    fn unverified_purchasers_are_turned_away() {
        let d = Deployment::trading(1_000, 2, 5);
        assert_eq!(
            d.engine.buy(&CAROL, U256::from(50)),
            Err(ExchangeError::NotVerified)
        );
        assert_eq!(d.ledger.balance_of(&CAROL), U256::zero());
    }

    #[test]
    fn frozen_purchasers_are_turned_away_before_anything_else() {
        let d = Deployment::trading(1_000, 2, 5);
        d.access.freeze_account(&DEPLOYER, ALICE, true).unwrap();

        assert_eq!(
            d.engine.buy(&ALICE, U256::from(50)),
            Err(ExchangeError::FrozenAccount)
        );
        assert_eq!(
            d.engine.sell(&ALICE, U256::from(1)),
            Err(ExchangeError::FrozenAccount)
        );
    }

    #[test]
    fn a_buy_larger_than_the_inventory_fails_cleanly() {
        let d = Deployment::trading(10, 2, 5);

        let result = d.engine.buy(&ALICE, U256::from(100));
        assert!(matches!(
            result,
            Err(ExchangeError::Ledger(
                tessera_ledger::LedgerError::InsufficientBalance { .. }
            ))
        ));
        assert_eq!(d.engine.contract_balance(), U256::zero());
        assert_eq!(d.ledger.balance_of(&ALICE), U256::zero());
    }

    #[test]
    fn selling_more_than_owned_fails_cleanly() {
        let d = Deployment::trading(1_000, 2, 5);
        d.engine.receive(U256::from(10_000)).unwrap();
        d.engine.buy(&ALICE, U256::from(50)).unwrap();

        assert!(matches!(
            d.engine.sell(&ALICE, U256::from(11)),
            Err(ExchangeError::Ledger(
                tessera_ledger::LedgerError::InsufficientBalance { .. }
            ))
        ));
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(10));
    }

    #[test]
    fn the_reserve_funds_sells_and_drains_to_the_treasury() {
        let d = Deployment::trading(1_000, 2, 5);

        // Sells are refused until the reserve can cover the payout.
        d.engine.buy(&ALICE, U256::from(10)).unwrap();
        d.access
            .set_prices(&DEPLOYER, U256::from(50), U256::from(5))
            .unwrap();
        assert_eq!(
            d.engine.sell(&ALICE, U256::from(2)),
            Err(ExchangeError::InsufficientReserve)
        );

        // An anonymous deposit tops the reserve up.
        d.engine.receive(U256::from(90)).unwrap();
        assert_eq!(d.engine.sell(&ALICE, U256::from(2)), Ok(U256::from(100)));
        assert_eq!(d.engine.contract_balance(), U256::zero());

        // Withdrawal needs the wallet configured first.
        d.engine.receive(U256::from(30)).unwrap();
        assert_eq!(
            d.engine.withdraw(&DEPLOYER, U256::from(30)),
            Err(ExchangeError::WalletNotSet)
        );
        d.access.set_wallet(&DEPLOYER, TREASURY).unwrap();
        assert_eq!(
            d.engine.withdraw(&DEPLOYER, U256::from(30)),
            Ok(TREASURY)
        );
        assert_eq!(d.engine.contract_balance(), U256::zero());
    }

    #[test]
    fn external_settlement_bypasses_payment_but_not_roles() {
        let d = Deployment::trading(1_000, 2, 5);

        d.engine
            .settle_external_purchase(&DEPLOYER, CAROL, U256::from(5))
            .unwrap();
        d.engine
            .settle_external_purchase(&BOT, CAROL, U256::from(5))
            .unwrap();
        assert_eq!(d.ledger.balance_of(&CAROL), U256::from(10));
        assert_eq!(d.engine.contract_balance(), U256::zero());

        assert_eq!(
            d.engine.settle_external_purchase(&ALICE, CAROL, U256::from(5)),
            Err(ExchangeError::Unauthorized)
        );
    }

    #[test]
    fn a_zero_sell_price_disables_the_sell_direction() {
        let d = Deployment::trading(1_000, 0, 5);
        d.engine.receive(U256::from(1_000)).unwrap();
        d.engine.buy(&ALICE, U256::from(50)).unwrap();

        assert_eq!(
            d.engine.sell(&ALICE, U256::from(10)),
            Err(ExchangeError::BelowMinimum)
        );
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(10));
        assert_eq!(d.engine.contract_balance(), U256::from(1_050));
    }

    #[test]
    fn reprice_takes_effect_on_the_next_trade() {
        let d = Deployment::trading(1_000, 2, 5);

        assert_eq!(d.engine.buy(&ALICE, U256::from(50)), Ok(U256::from(10)));

        d.access
            .set_prices(&DEPLOYER, U256::from(2), U256::from(10))
            .unwrap();
        assert_eq!(d.engine.buy(&ALICE, U256::from(50)), Ok(U256::from(5)));
    }
}
