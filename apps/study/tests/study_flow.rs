//! End-to-end flow over in-memory storage: load a dataset, master a set,
//! reload, and drill the mastered words.

use pretty_assertions::assert_eq;
use vocab_study::{
    shared, Command, Dataset, DispatchOutcome, MemoryStorage, NullSpeech, SharedStorage,
    StudyController,
};

fn dataset() -> Dataset {
    let content = r#"[
        {"word": "Abandon (v)", "cefr": "B2", "def": "to leave behind"},
        {"word": "Ability (n)", "cefr": "A2", "def": "skill or talent"},
        {"Word/Phrase": "Able (adj)", "CEFR": "A2", "Definition": "having what it takes"},
        {"word": "", "cefr": "A2"},
        {"word": "Abroad (adv)", "cefr": "A2", "def": "in a foreign country"}
    ]"#;
    Dataset::from_json(content).unwrap()
}

fn controller(storage: &SharedStorage) -> StudyController {
    StudyController::new(dataset(), storage.clone()).unwrap()
}

#[test]
fn mastery_survives_a_reload() {
    let storage = shared(MemoryStorage::new());

    {
        let mut ctl = controller(&storage);
        let mut speech = NullSpeech;
        // First level is A2 with ids 1, 2, 4 (record 3 was dropped).
        assert_eq!(ctl.active_level(), "A2");
        let ids: Vec<u32> = ctl.visible_entries().iter().map(|v| v.entry.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);

        ctl.dispatch(Command::ToggleEntry { id: 1 }, &mut speech).unwrap();
        ctl.dispatch(Command::ToggleEntry { id: 4 }, &mut speech).unwrap();
    }

    let ctl = controller(&storage);
    assert_eq!(ctl.mastered_count(), 2);
    let mastered: Vec<u32> = ctl
        .visible_entries()
        .iter()
        .filter(|v| v.mastered)
        .map(|v| v.entry.id)
        .collect();
    assert_eq!(mastered, vec![1, 4]);
}

#[test]
fn full_study_cycle() {
    let storage = shared(MemoryStorage::new());
    let mut ctl = controller(&storage);
    let mut speech = NullSpeech;

    // Nothing mastered yet: practice is refused, user-visibly.
    assert!(ctl.dispatch(Command::StartPractice, &mut speech).is_err());

    // Master the whole visible set, then drill it.
    ctl.dispatch(Command::ToggleAllInSet, &mut speech).unwrap();
    assert_eq!(ctl.chunk_summaries()[0].percent, 100);

    ctl.dispatch(Command::StartPractice, &mut speech).unwrap();
    let mut seen = vec![ctl.card_view().unwrap().word];
    loop {
        ctl.dispatch(Command::FlipCard, &mut speech).unwrap();
        assert!(ctl.card_view().unwrap().revealed);
        match ctl.dispatch(Command::NextCard, &mut speech).unwrap() {
            DispatchOutcome::Done => seen.push(ctl.card_view().unwrap().word),
            DispatchOutcome::SessionComplete => break,
        }
    }
    seen.sort();
    assert_eq!(seen, vec!["Ability", "Able", "Abroad"]);

    ctl.dispatch(Command::CloseSession, &mut speech).unwrap();
    assert!(!ctl.has_session());

    // Bulk toggle on a fully mastered set unmasters it.
    ctl.dispatch(Command::ToggleAllInSet, &mut speech).unwrap();
    assert_eq!(ctl.mastered_count(), 0);
}

#[test]
fn switching_levels_repartitions() {
    let storage = shared(MemoryStorage::new());
    let mut ctl = controller(&storage);
    let mut speech = NullSpeech;

    ctl.dispatch(
        Command::SetLevel {
            level: "B2".to_string(),
        },
        &mut speech,
    )
    .unwrap();
    let ids: Vec<u32> = ctl.visible_entries().iter().map(|v| v.entry.id).collect();
    assert_eq!(ids, vec![0]);
    assert_eq!(ctl.chunk_count(), 1);
}
