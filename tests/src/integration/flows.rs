//! # Service Flows
//!
//! Accounts and calculations wired together the way the gateway wires them:
//! the calculation service checks reassignment targets through an
//! `OwnerDirectory` backed by the account service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cd_01_calculations::{
        CalculationApi, CalculationError, CalculationKind, CalculationPatch, CalculationService,
        CalculationValidator, InMemoryCalculationStore, NewCalculationRequest, ValidationError,
    };
    use cd_02_accounts::{AccountApi, AccountError, AccountService, InMemoryUserStore, Registration};
    use cd_03_api_gateway::adapters::AccountDirectory;
    use shared_types::{TokenSigner, UserId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Desk {
        accounts: Arc<AccountService>,
        calculations: CalculationService,
    }

    fn desk() -> Desk {
        let accounts = Arc::new(AccountService::new(
            Arc::new(InMemoryUserStore::new()),
            TokenSigner::new("flow-secret"),
        ));
        let calculations = CalculationService::new(
            Arc::new(InMemoryCalculationStore::new()),
            CalculationValidator::default(),
        )
        .with_owner_directory(Arc::new(AccountDirectory::new(accounts.clone())));
        Desk {
            accounts,
            calculations,
        }
    }

    async fn register(desk: &Desk, username: &str) -> UserId {
        desk.accounts
            .register(Registration {
                first_name: "Flow".into(),
                last_name: "Tester".into(),
                email: format!("{username}@example.com"),
                username: username.into(),
                password: "Password1".into(),
            })
            .await
            .unwrap()
            .id
    }

    fn request(kind: &str, operands: &[f64]) -> NewCalculationRequest {
        NewCalculationRequest {
            kind: kind.into(),
            operands: operands.to_vec(),
        }
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_token_identity_owns_created_records() {
        let desk = desk();
        register(&desk, "alice").await;

        let session = desk.accounts.login("alice", "Password1").await.unwrap();
        let caller = desk
            .accounts
            .authenticate(&session.access_token)
            .await
            .unwrap();

        let view = desk
            .calculations
            .create(caller.id, request("multiplication", &[2.0, 3.0, 4.0]))
            .await
            .unwrap();
        assert_eq!(view.owner, caller.id);
        assert_eq!(view.result, Ok(24.0));
    }

    #[tokio::test]
    async fn test_reassignment_to_registered_user() {
        let desk = desk();
        let alice = register(&desk, "alice").await;
        let bob = register(&desk, "bob").await;

        let view = desk
            .calculations
            .create(alice, request("subtraction", &[10.0, 4.0]))
            .await
            .unwrap();
        let moved = desk
            .calculations
            .update(
                alice,
                view.id,
                CalculationPatch {
                    owner: Some(bob),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.owner, bob);

        // Alice lost access, Bob gained it.
        assert_eq!(
            desk.calculations.get(alice, view.id).await,
            Err(CalculationError::NotFound(view.id))
        );
        assert_eq!(desk.calculations.get(bob, view.id).await.unwrap().result, Ok(6.0));
    }

    #[tokio::test]
    async fn test_reassignment_to_unknown_user_rejected() {
        let desk = desk();
        let alice = register(&desk, "alice").await;
        let view = desk
            .calculations
            .create(alice, request("addition", &[1.0, 1.0]))
            .await
            .unwrap();

        let ghost = UserId(alice.get() + 100);
        let err = desk
            .calculations
            .update(
                alice,
                view.id,
                CalculationPatch {
                    owner: Some(ghost),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CalculationError::Validation(ValidationError::UnknownOwner { owner: ghost })
        );
        assert_eq!(
            desk.calculations.get(alice, view.id).await.unwrap().owner,
            alice
        );
    }

    #[tokio::test]
    async fn test_kind_change_rechecks_stored_operands() {
        let desk = desk();
        let alice = register(&desk, "alice").await;
        let view = desk
            .calculations
            .create(alice, request("multiplication", &[5.0, 0.0, 2.0]))
            .await
            .unwrap();
        assert_eq!(view.result, Ok(0.0));

        for kind in ["division", "modulus"] {
            let err = desk
                .calculations
                .update(
                    alice,
                    view.id,
                    CalculationPatch {
                        kind: Some(kind.into()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(
                err,
                CalculationError::Validation(ValidationError::DivisionByZero { position: 1 }),
                "{kind}"
            );
        }
        assert_eq!(
            desk.calculations.get(alice, view.id).await.unwrap().kind,
            CalculationKind::Multiplication
        );
    }

    #[tokio::test]
    async fn test_tokens_do_not_cross_deployments() {
        let first = desk();
        let second = Arc::new(AccountService::new(
            Arc::new(InMemoryUserStore::new()),
            TokenSigner::new("another-secret"),
        ));
        register(&first, "alice").await;
        let session = first.accounts.login("alice", "Password1").await.unwrap();

        assert!(matches!(
            second.authenticate(&session.access_token).await,
            Err(AccountError::InvalidToken(_))
        ));
    }
}
