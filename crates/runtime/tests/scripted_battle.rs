//! End-to-end scripted battle through the service layer.

use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleOutcome, CharacterId, CharacterProfile, ErrorKind, RoundError, Side,
};
use battle_runtime::{BattleService, CharacterOracleImpl, InMemoryBattleRepo, RuntimeError};

fn ids(raw: &[u32]) -> Vec<CharacterId> {
    raw.iter().copied().map(CharacterId).collect()
}

fn service_with(oracle: CharacterOracleImpl) -> BattleService {
    BattleService::new(
        Arc::new(oracle),
        Arc::new(InMemoryBattleRepo::new()),
        BattleConfig::default(),
    )
}

fn default_service() -> BattleService {
    service_with(CharacterOracleImpl::default_catalog().expect("bundled catalog"))
}

/// Heroes at max power against fragile villains: every hero hit is a finishing blow.
fn lopsided_service() -> BattleService {
    let mut oracle = CharacterOracleImpl::new();
    for id in 1..=3 {
        let hero = CharacterProfile::new(CharacterId(id), "Hero", Side::Hero).with_power(100);
        oracle.add_profile(hero);
    }
    for id in 11..=13 {
        let mut villain = CharacterProfile::new(CharacterId(id), "Villain", Side::Villain);
        villain.shield_base = 0;
        villain.health_base = 10;
        oracle.add_profile(villain);
    }
    service_with(oracle)
}

#[test]
fn full_scripted_battle() {
    let service = lopsided_service();

    service
        .register_teams(ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .expect("teams register");
    let summary = service
        .register_order("arena-1", ids(&[2, 1, 3]), ids(&[13, 12, 11]))
        .expect("order registers");
    assert_eq!(summary.active, [Some(CharacterId(2)), Some(CharacterId(13))]);
    assert!(!summary.finished);

    // pending teams are consumed by the order
    let err = service.registered_teams().unwrap_err();
    assert!(matches!(err, RuntimeError::TeamsNotRegistered));

    for round in 1..=3 {
        let outcome = service
            .resolve_attack("arena-1", round, "basico", "critico")
            .expect("exchange resolves");
        assert!(outcome.round_complete);
    }

    let results = service.round_results("arena-1").expect("battle finished");
    assert_eq!(results.outcome, BattleOutcome::Victory(Side::Hero));
    assert_eq!(results.round_wins, [3, 0]);

    let log = service.battle_log("arena-1").unwrap();
    assert_eq!(log.len(), 3);
    assert!(log.iter().all(|entry| entry.side == Side::Hero));

    let summary = service.battle_summary("arena-1").unwrap();
    assert!(summary.finished);
    assert_eq!(summary.villains.iter().filter(|v| v.defeated).count(), 3);
}

#[test]
fn out_of_order_rounds_conflict_without_side_effects() {
    let service = default_service();
    service
        .register_teams(ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();
    service
        .register_order("arena-2", ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();

    for _ in 0..2 {
        let err = service
            .resolve_attack("arena-2", 2, "basico", "basico")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateConflict);
        assert!(matches!(
            err,
            RuntimeError::Round(RoundError::RoundOutOfSequence {
                requested: 2,
                expected: 1
            })
        ));
    }
    assert!(service.battle_log("arena-2").unwrap().is_empty());

    let outcome = service
        .resolve_attack("arena-2", 1, "YX", "b")
        .expect("round one accepts combos");
    assert_eq!(outcome.reports[0].damage, 44);
    assert_eq!(outcome.reports[1].damage, 22);
}

#[test]
fn done_round_is_rejected_every_time() {
    let service = lopsided_service();
    service
        .register_teams(ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();
    service
        .register_order("arena-3", ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();
    service
        .resolve_attack("arena-3", 1, "critico", "basico")
        .unwrap();
    let before = service.battle_summary("arena-3").unwrap();

    for _ in 0..3 {
        let err = service
            .resolve_attack("arena-3", 1, "critico", "critico")
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Round(RoundError::RoundAlreadyDone { round: 1 })
        ));
    }

    let after = service.battle_summary("arena-3").unwrap();
    assert_eq!(before.villains, after.villains);
    assert_eq!(before.heroes, after.heroes);
}

#[test]
fn invalid_requests_are_validation_errors() {
    let service = default_service();

    let err = service
        .register_teams(ids(&[1, 2, 2]), ids(&[11, 12, 13]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = service
        .register_teams(ids(&[1, 2, 11]), ids(&[12, 13, 14]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = service
        .register_teams(ids(&[1, 2, 99]), ids(&[11, 12, 13]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service
        .register_order("arena-4", ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::TeamsNotRegistered));

    service
        .register_teams(ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();
    let err = service
        .register_order("arena-4", ids(&[1, 2, 4]), ids(&[11, 12, 13]))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::OrderMismatch { side: Side::Hero }));

    service
        .register_order("arena-4", ids(&[1, 2, 3]), ids(&[11, 12, 13]))
        .unwrap();
    let err = service
        .resolve_attack("arena-4", 1, "patada", "basico")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = service
        .resolve_attack("arena-4", 1, "YXABYX", "basico")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = service
        .resolve_attack("missing", 1, "basico", "basico")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn battle_ids_are_unique_or_generated() {
    let service = default_service();
    service.register_teams(ids(&[1]), ids(&[11])).unwrap();
    service.register_order("dup", ids(&[1]), ids(&[11])).unwrap();

    service.register_teams(ids(&[1]), ids(&[11])).unwrap();
    let err = service
        .register_order("dup", ids(&[1]), ids(&[11]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StateConflict);

    let summary = service.register_order("", ids(&[1]), ids(&[11])).unwrap();
    assert!(summary.battle_id.as_str().starts_with("battle-"));
    assert_eq!(service.list_battles().unwrap().len(), 2);
}

#[test]
fn results_wait_for_the_end() {
    let service = default_service();
    service.register_teams(ids(&[4]), ids(&[14])).unwrap();
    service.register_order("early", ids(&[4]), ids(&[14])).unwrap();

    let err = service.round_results("early").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Round(RoundError::BattleNotFinished)
    ));
}

#[test]
fn attack_catalog_lists_tokens() {
    let catalog = default_service().attack_catalog();
    let tokens: Vec<&str> = catalog.iter().map(|e| e.token.as_str()).collect();
    assert_eq!(tokens, vec!["basico", "especial", "critico"]);
    assert_eq!(catalog[1].combination_lengths, (2, 3));
    assert_eq!(catalog[2].default_base_damage, 60);
}

#[test]
fn finished_battle_saves_progression() {
    let mut oracle = CharacterOracleImpl::new();
    oracle.add_profile(
        CharacterProfile::new(CharacterId(1), "Hero", Side::Hero).with_experience(95),
    );
    let mut villain = CharacterProfile::new(CharacterId(11), "Villain", Side::Villain);
    villain.shield_base = 0;
    villain.health_base = 10;
    oracle.add_profile(villain);
    let service = service_with(oracle);

    service.register_teams(ids(&[1]), ids(&[11])).unwrap();
    service.register_order("first", ids(&[1]), ids(&[11])).unwrap();
    assert_eq!(service.character(CharacterId(1)).unwrap().power, 1);

    let outcome = service
        .resolve_attack("first", 1, "basico", "basico")
        .unwrap();
    assert!(outcome.battle_finished);

    let hero = service.character(CharacterId(1)).unwrap();
    assert_eq!((hero.power, hero.experience), (2, 15));

    service.register_teams(ids(&[1]), ids(&[11])).unwrap();
    service.register_order("second", ids(&[1]), ids(&[11])).unwrap();
    let outcome = service
        .resolve_attack("second", 1, "basico", "basico")
        .unwrap();
    // 20 base at power 2
    assert_eq!(outcome.reports[0].damage, 24);
    assert_eq!(outcome.hero.experience, 35);
}
