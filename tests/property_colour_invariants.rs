use proptest::prelude::*;

use colour_strain::constants::MONO_HISTORY_CAPACITY;
use colour_strain::difficulty::{ColourEvaluator, DifficultyEvent, HitType, ObjectKind};

fn object_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        6 => Just(ObjectKind::Hit),
        1 => Just(ObjectKind::DrumRoll),
        1 => Just(ObjectKind::DrumRollTick),
        1 => Just(ObjectKind::Swell),
        1 => Just(ObjectKind::SwellTick),
    ]
}

fn hit_type() -> impl Strategy<Value = Option<HitType>> {
    prop_oneof![
        4 => Just(Some(HitType::Centre)),
        4 => Just(Some(HitType::Rim)),
        1 => Just(None),
    ]
}

fn event() -> impl Strategy<Value = DifficultyEvent> {
    (object_kind(), object_kind(), hit_type(), 0.0_f64..1500.0)
        .prop_map(|(kind, last_kind, hit_type, delta)| {
            DifficultyEvent::new(kind, last_kind, hit_type, delta)
        })
}

proptest! {
    #[test]
    fn pt_state_and_output_stay_in_bounds(events in prop::collection::vec(event(), 0..300)) {
        let mut eval = ColourEvaluator::new();
        for e in &events {
            let strain = eval.evaluate(e);
            prop_assert!((0.0..=1.0).contains(&strain));
            prop_assert!(eval.history().len() <= MONO_HISTORY_CAPACITY);
            prop_assert!(eval.current_run_length() >= 1);
        }
    }

    #[test]
    fn pt_disqualified_events_score_zero_and_unset_previous(
        events in prop::collection::vec(event(), 0..100),
        probe in event(),
    ) {
        let mut eval = ColourEvaluator::new();
        eval.evaluate_all(&events);

        let disqualified = !(probe.kind.is_hit() && probe.last_kind.is_hit())
            || probe.delta_time >= 1000.0;
        prop_assume!(disqualified);

        let history = eval.history().clone();
        let run = eval.current_run_length();
        prop_assert_eq!(eval.evaluate(&probe), 0.0);
        prop_assert_eq!(eval.previous_hit_type(), None);
        prop_assert_eq!(eval.history(), &history);
        prop_assert_eq!(eval.current_run_length(), run);
    }

    #[test]
    fn pt_same_colour_only_grows_the_run(
        events in prop::collection::vec(event(), 0..100),
        colour in hit_type(),
        delta in 0.0_f64..999.0,
    ) {
        let mut eval = ColourEvaluator::new();
        eval.evaluate_all(&events);

        // keep the previous colour whenever the candidate would change it
        let colour = match (colour, eval.previous_hit_type()) {
            (Some(a), Some(b)) if a != b => Some(b),
            _ => colour,
        };
        let probe = DifficultyEvent::new(ObjectKind::Hit, ObjectKind::Hit, colour, delta);

        let history = eval.history().clone();
        let run = eval.current_run_length();
        prop_assert_eq!(eval.evaluate(&probe), 0.0);
        prop_assert_eq!(eval.history(), &history);
        prop_assert_eq!(eval.current_run_length(), run + 1);
        prop_assert_eq!(eval.previous_hit_type(), colour);
    }

    #[test]
    fn pt_colour_change_records_run_and_resets(
        events in prop::collection::vec(event(), 0..100),
        colour in prop_oneof![Just(HitType::Centre), Just(HitType::Rim)],
        delta in 0.0_f64..999.0,
    ) {
        let mut eval = ColourEvaluator::new();
        eval.evaluate_all(&events);
        eval.evaluate(&DifficultyEvent::hit(colour, delta));

        let next = Some(colour.opposite());

        let run = eval.current_run_length();
        let probe = DifficultyEvent::new(ObjectKind::Hit, ObjectKind::Hit, next, delta);
        eval.evaluate(&probe);

        prop_assert_eq!(eval.history().last(), Some(run));
        prop_assert_eq!(eval.current_run_length(), 1);
        prop_assert_eq!(eval.previous_hit_type(), next);
    }

    #[test]
    fn pt_replay_is_bit_identical(events in prop::collection::vec(event(), 0..300)) {
        let first: Vec<u64> = ColourEvaluator::new()
            .evaluate_all(&events)
            .into_iter()
            .map(f64::to_bits)
            .collect();
        let second: Vec<u64> = ColourEvaluator::new()
            .evaluate_all(&events)
            .into_iter()
            .map(f64::to_bits)
            .collect();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn early_colour_changes_never_score() {
    let mut eval = ColourEvaluator::new();
    let mut colour = HitType::Centre;
    let mut strains = Vec::new();
    for run in [3, 4] {
        for _ in 0..run {
            strains.push(eval.evaluate(&DifficultyEvent::hit(colour, 150.0)));
        }
        colour = colour.opposite();
    }
    // closes the second run
    strains.push(eval.evaluate(&DifficultyEvent::hit(colour, 150.0)));

    assert_eq!(eval.history().len(), 2);
    assert!(strains.iter().all(|s| *s == 0.0));
}
