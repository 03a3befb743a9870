//! Tests for clip module.

use super::compiler::{compile, Clip};
use super::event::SlotKind;
use super::params::ClipParams;
use crate::error::ClipError;
use crate::notes::NoteList;
use crate::types::time::{sum, ticks, ticks_ratio};
use crate::types::{ChordLookup, Pitch};
use pretty_assertions::assert_eq;

fn names(params: &ClipParams) -> Vec<Vec<String>> {
    compile(params).unwrap().iter().map(|e| e.names()).collect()
}

#[test]
fn test_nested_durations() {
    let events = compile(&ClipParams::new("c4", "x[x[xx]x]x")).unwrap();
    let durations: Vec<_> = events.iter().map(|e| e.duration).collect();
    assert_eq!(
        durations,
        vec![
            ticks(128),
            ticks_ratio(128, 3),
            ticks_ratio(64, 3),
            ticks_ratio(64, 3),
            ticks_ratio(128, 3),
            ticks(128),
        ]
    );
    assert_eq!(sum(durations), Some(ticks(384)));
}

/// `depth` levels of `[xx...]`, each with three children
fn nested_triplets(depth: usize) -> String {
    let mut pattern = "x".to_string();
    for _ in 0..depth {
        pattern = format!("[xx{}]", pattern);
    }
    pattern
}

#[test]
fn test_deep_nesting_stays_exact() {
    let clip = Clip::compile(&ClipParams::new("c4", nested_triplets(30))).unwrap();
    assert_eq!(clip.events().len(), 61);
    assert_eq!(clip.total_duration(), ticks(128));
    let last = clip.events().last().unwrap().duration;
    assert_eq!(last, ticks_ratio(128, 3i64.pow(30)));
    assert!(clip.events().iter().all(|e| e.duration > ticks(0)));
}

#[test]
fn test_too_deep_nesting_is_an_error() {
    let err = compile(&ClipParams::new("c4", nested_triplets(40))).unwrap_err();
    match err {
        ClipError::PatternSyntax { message, .. } => assert!(message.contains("nests too deeply")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_timeline_starts() {
    let clip = Clip::compile(&ClipParams::new("c4", "x[x-x]_")).unwrap();
    let starts: Vec<_> = clip.timeline().map(|(start, _)| start).collect();
    assert_eq!(
        starts,
        vec![ticks(0), ticks(128), ticks_ratio(512, 3), ticks_ratio(640, 3), ticks(256)]
    );
}

#[test]
fn test_triplets_conserve_duration() {
    // 128 / 3 / 3 is not a whole tick; the pieces still add up exactly
    let params = ClipParams::new("c4", "[[xxx][x-x][_xx]]").with_subdiv("16n");
    let clip = Clip::compile(&params).unwrap();
    assert_eq!(clip.total_duration(), ticks(32));
    assert!(clip.events().iter().all(|e| e.duration == ticks_ratio(32, 9)));
}

#[test]
fn test_total_is_slots_times_subdivision() {
    for (pattern, subdiv) in [("x", "1n"), ("x-[xx]_", "8n"), ("[x[x[x[xx]]]]x", "16n")] {
        let clip = Clip::compile(&ClipParams::new("c4", pattern).with_subdiv(subdiv)).unwrap();
        assert_eq!(
            clip.total_duration(),
            clip.subdivision().ticks() * clip.slots() as i64,
            "pattern {}",
            pattern
        );
    }
}

#[test]
fn test_rests_do_not_consume_notes() {
    let params = ClipParams::new("c4 d4 e4", "x-x_[-x]x");
    assert_eq!(
        names(&params),
        vec![
            vec!["C4"],
            vec![],
            vec!["D4"],
            vec![],
            vec![],
            vec!["E4"],
            vec!["C4"],
        ]
    );
}

#[test]
fn test_cursor_wraps() {
    let params = ClipParams::new("c4 d4", "xxxxx");
    let got: Vec<String> = names(&params).into_iter().flatten().collect();
    assert_eq!(got, vec!["C4", "D4", "C4", "D4", "C4"]);
}

#[test]
fn test_rest_kinds_preserved() {
    let events = compile(&ClipParams::new("c4", "x-_")).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.slot).collect();
    assert_eq!(kinds, vec![SlotKind::Note, SlotKind::Rest, SlotKind::Sustain]);
    assert!(events[1].is_rest());
    assert!(events[2].is_rest());
}

#[test]
fn test_chord_names_in_note_list() {
    let params = ClipParams::new("CM am-3", "xx");
    assert_eq!(
        names(&params),
        vec![vec!["C4", "E4", "G4"], vec!["A3", "C4", "E4"]]
    );
}

#[test]
fn test_deterministic() {
    let params = ClipParams::new("c4 CM e4", "x[x-[xx]]_x").with_subdiv("8n");
    assert_eq!(compile(&params).unwrap(), compile(&params).unwrap());
}

#[test]
fn test_default_velocity_passthrough() {
    let events = compile(&ClipParams::new("c4", "x-x").with_velocity(90)).unwrap();
    assert!(events.iter().all(|e| e.velocity == 90));
}

#[test]
fn test_accent_map_sets_note_velocities_only() {
    let params = ClipParams::new("c4 e4", "x-xxx").with_accent("x-", 120, 50);
    let events = compile(&params).unwrap();
    let velocities: Vec<u8> = events.iter().map(|e| e.velocity).collect();
    assert_eq!(velocities, vec![120, 127, 50, 120, 50]);

    // Same pitches and durations as without accents
    let plain = compile(&ClipParams::new("c4 e4", "x-xxx")).unwrap();
    for (a, b) in events.iter().zip(plain.iter()) {
        assert_eq!(a.pitches, b.pitches);
        assert_eq!(a.duration, b.duration);
    }
}

#[test]
fn test_unknown_subdivision_compiles_as_quarter() {
    let events = compile(&ClipParams::new("c4", "x").with_subdiv("3n")).unwrap();
    assert_eq!(events[0].duration, ticks(128));
}

#[test]
fn test_note_errors_come_before_pattern_errors() {
    let err = compile(&ClipParams::new("c4 zz", "x?")).unwrap_err();
    assert!(matches!(err, ClipError::InvalidNote { .. }));
}

#[test]
fn test_pattern_syntax_error() {
    let err = compile(&ClipParams::new("c4", "x.x")).unwrap_err();
    assert!(matches!(err, ClipError::PatternSyntax { position: Some(1), .. }));
    let err = compile(&ClipParams::new("c4", "x[x")).unwrap_err();
    assert!(matches!(err, ClipError::PatternSyntax { .. }));
}

#[test]
fn test_configuration_errors() {
    let err = compile(&ClipParams::new("", "x")).unwrap_err();
    assert!(matches!(err, ClipError::Configuration(_)));
    let err = compile(&ClipParams::new("c4", "x").with_accent("xo", 127, 70)).unwrap_err();
    assert!(matches!(err, ClipError::Configuration(_)));
}

struct PowerChords;

impl ChordLookup for PowerChords {
    fn lookup(&self, name: &str) -> Option<Vec<Pitch>> {
        let root = name.strip_suffix("pow")?;
        let root: Pitch = format!("{}3", root).parse().ok()?;
        Some(vec![root, root.transpose(7, false).ok()?])
    }
}

#[test]
fn test_custom_chord_dictionary() {
    let params = ClipParams::new("Epow c4", "xx");
    let clip = Clip::compile_with(&params, &PowerChords).unwrap();
    let got: Vec<_> = clip.events().iter().map(|e| e.names()).collect();
    assert_eq!(got, vec![vec!["E3", "B3"], vec!["C4"]]);

    // The built-in dictionary does not know "Epow"
    assert!(compile(&params).is_err());
}

#[test]
fn test_structured_notes() {
    let params = ClipParams::default()
        .with_notes(NoteList::Items(vec![
            "d4".into(),
            vec!["d4", "f#4", "a4"].into(),
        ]))
        .with_pattern("x[xx]");
    assert_eq!(
        names(&params),
        vec![vec!["D4"], vec!["D4", "F#4", "A4"], vec!["D4"]]
    );
}

#[test]
fn test_clip_summary() {
    let clip = Clip::compile(&ClipParams::new("c4", "x-[x_]")).unwrap();
    assert_eq!(clip.slots(), 3);
    assert_eq!(clip.on_count(), 2);
    assert_eq!(clip.events().len(), 4);
    assert_eq!(clip.total_duration(), ticks(384));
}

#[cfg(feature = "serde")]
#[test]
fn test_params_from_json() {
    let params = ClipParams::from_json(
        r#"{"notes": ["c4", ["c4", "e4", "g4"]], "pattern": "xx", "subdiv": "8n", "accentLow": 40}"#,
    )
    .unwrap();
    assert_eq!(params.accent_lo, 40);
    assert_eq!(
        names(&params),
        vec![vec!["C4"], vec!["C4", "E4", "G4"]]
    );

    let err = ClipParams::from_json(r#"{"pattern": 5}"#).unwrap_err();
    assert!(matches!(err, ClipError::Configuration(_)));
}

#[test]
fn test_shared_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClipParams>();
    assert_send_sync::<Clip>();
    assert_send_sync::<crate::types::StandardChords>();
    assert_send_sync::<ClipError>();
}
