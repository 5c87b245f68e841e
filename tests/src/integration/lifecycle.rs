//! # Deployment Lifecycle Flows
//!
//! End-to-end flows over a wired deployment: the paused initial state,
//! supply seeding while paused, the unpause, everyday transfers and
//! allowance spends, and supply contraction. Each flow asserts the event
//! stream and the transaction log alongside the balances.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use shared_types::{Event, NULL_ACCOUNT, U256};
    use tessera_ledger::LedgerError;

    #[test]
    fn a_fresh_deployment_starts_paused_with_zero_supply() {
        let d = Deployment::new();

        assert!(d.access.is_paused());
        assert!(d.access.is_owner(&DEPLOYER));
        assert_eq!(d.ledger.total_supply(), U256::zero());
        assert_eq!(d.log.count(), 0);

        assert_eq!(
            d.ledger.transfer(&ALICE, BOB, U256::from(1)),
            Err(LedgerError::Paused)
        );
    }

    #[test]
    fn supply_is_seeded_while_paused_then_trading_opens() {
        let d = Deployment::new();

        // Minting ignores the pause: seeding happens before trading opens.
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(500)).unwrap();
        assert_eq!(d.ledger.total_supply(), U256::from(500));
        assert_eq!(d.log.count(), 1);

        d.access.unpause(&DEPLOYER).unwrap();
        d.ledger.transfer(&ALICE, BOB, U256::from(200)).unwrap();

        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(300));
        assert_eq!(d.ledger.balance_of(&BOB), U256::from(200));
        assert_eq!(d.log.count(), 2);
    }

    #[test]
    fn mint_emits_the_synthetic_transfer_before_the_mint_notice() {
        let d = Deployment::new();
        d.sink.clear();

        d.ledger.mint(&DEPLOYER, ALICE, U256::from(10)).unwrap();

        assert_eq!(
            d.sink.events(),
            vec![
                Event::Transfer {
                    from: NULL_ACCOUNT,
                    to: ALICE,
                    amount: U256::from(10),
                },
                Event::Mint {
                    to: ALICE,
                    amount: U256::from(10),
                },
            ]
        );
    }

    #[test]
    fn burn_emits_the_burn_notice_before_the_synthetic_transfer() {
        let d = Deployment::trading(0, 0, 0);
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();
        d.sink.clear();

        d.ledger.burn(&ALICE, U256::from(40)).unwrap();

        assert_eq!(
            d.sink.events(),
            vec![
                Event::Burn {
                    burner: ALICE,
                    amount: U256::from(40),
                },
                Event::Transfer {
                    from: ALICE,
                    to: NULL_ACCOUNT,
                    amount: U256::from(40),
                },
            ]
        );
        assert_eq!(d.ledger.total_supply(), U256::from(60));
    }

    #[test]
    fn burn_proceeds_while_paused() {
        let d = Deployment::new();
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();

        d.ledger.burn(&ALICE, U256::from(25)).unwrap();
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(75));
        assert_eq!(d.ledger.total_supply(), U256::from(75));
    }

    #[test]
    fn finishing_minting_is_permanent() {
        let d = Deployment::new();
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();

        d.access.finish_minting(&DEPLOYER).unwrap();

        assert_eq!(
            d.ledger.mint(&DEPLOYER, ALICE, U256::from(1)),
            Err(LedgerError::MintingFinished)
        );
        assert!(d.access.finish_minting(&DEPLOYER).is_err());
        assert_eq!(d.ledger.total_supply(), U256::from(100));
    }

    #[test]
    fn allowance_spend_cannot_exceed_the_approval() {
        let d = Deployment::trading(0, 0, 0);
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();

        d.ledger.approve(&ALICE, BOB, U256::from(50)).unwrap();

        // Over-spend fails and leaves everything untouched.
        assert_eq!(
            d.ledger.transfer_from(&BOB, ALICE, CAROL, U256::from(60)),
            Err(LedgerError::InsufficientAllowance {
                required: U256::from(60),
                available: U256::from(50),
            })
        );
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(100));
        assert_eq!(d.ledger.allowance(&ALICE, &BOB), U256::from(50));

        // Exact spend drains the allowance.
        d.ledger
            .transfer_from(&BOB, ALICE, CAROL, U256::from(50))
            .unwrap();
        assert_eq!(d.ledger.balance_of(&CAROL), U256::from(50));
        assert_eq!(d.ledger.allowance(&ALICE, &BOB), U256::zero());
    }

    #[test]
    fn approve_is_an_unconditional_overwrite() {
        let d = Deployment::trading(0, 0, 0);

        d.ledger.approve(&ALICE, BOB, U256::from(100)).unwrap();
        d.ledger.approve(&ALICE, BOB, U256::from(7)).unwrap();

        assert_eq!(d.ledger.allowance(&ALICE, &BOB), U256::from(7));
    }

    #[test]
    fn frozen_accounts_cannot_send_but_can_receive() {
        let d = Deployment::trading(0, 0, 0);
        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();
        d.ledger.mint(&DEPLOYER, BOB, U256::from(100)).unwrap();
        d.sink.clear();

        d.access.freeze_account(&DEPLOYER, ALICE, true).unwrap();
        assert_eq!(
            d.sink.last(),
            Some(Event::FrozenFunds {
                target: ALICE,
                frozen: true,
            })
        );

        assert_eq!(
            d.ledger.transfer(&ALICE, BOB, U256::from(10)),
            Err(LedgerError::FrozenAccount)
        );
        d.ledger.transfer(&BOB, ALICE, U256::from(10)).unwrap();
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(110));

        // Thawing restores the send path.
        d.access.freeze_account(&DEPLOYER, ALICE, false).unwrap();
        d.ledger.transfer(&ALICE, BOB, U256::from(10)).unwrap();
        assert_eq!(d.ledger.balance_of(&ALICE), U256::from(100));
    }

    #[test]
    fn the_log_mirrors_every_balance_movement_in_order() {
        let d = Deployment::trading(0, 0, 0);

        d.ledger.mint(&DEPLOYER, ALICE, U256::from(100)).unwrap();
        d.ledger.transfer(&ALICE, BOB, U256::from(30)).unwrap();
        d.ledger.burn(&BOB, U256::from(5)).unwrap();

        assert_eq!(d.log.count(), 3);
        assert_eq!(d.log.get(0).unwrap().from, NULL_ACCOUNT);
        let transfer = d.log.get(1).unwrap();
        assert_eq!((transfer.from, transfer.to), (ALICE, BOB));
        assert_eq!(d.log.get(2).unwrap().to, NULL_ACCOUNT);

        // Failed operations never reach the log.
        let _ = d.ledger.transfer(&ALICE, BOB, U256::from(10_000));
        assert_eq!(d.log.count(), 3);
    }
}
