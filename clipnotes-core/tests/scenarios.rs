use clipnotes_core::types::time::{sum, ticks};
use clipnotes_core::{compile, expand, ClipError, ClipParams, NoteItem, NoteList, PatternNode};
use pretty_assertions::assert_eq;

/// (pitch names or None for a rest, duration in whole ticks, velocity)
fn summarize(params: &ClipParams) -> Vec<(Option<Vec<String>>, i64, u8)> {
    compile(params)
        .unwrap()
        .into_iter()
        .map(|e| {
            assert!(e.duration.is_integer(), "expected whole-tick durations");
            (e.pitches.map(|p| p.names()), e.duration.to_integer(), e.velocity)
        })
        .collect()
}

fn some(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|s| s.to_string()).collect())
}

#[test]
fn single_note() {
    assert_eq!(
        summarize(&ClipParams::new("c4", "x")),
        vec![(some(&["C4"]), 128, 127)]
    );
}

#[test]
fn two_notes() {
    assert_eq!(
        summarize(&ClipParams::new("c4 e4", "xx")),
        vec![(some(&["C4"]), 128, 127), (some(&["E4"]), 128, 127)]
    );
}

#[test]
fn bracket_halves_the_slot() {
    assert_eq!(
        summarize(&ClipParams::new("c4 e4 g4", "x[xx]")),
        vec![
            (some(&["C4"]), 128, 127),
            (some(&["E4"]), 64, 127),
            (some(&["G4"]), 64, 127),
        ]
    );
}

#[test]
fn rest_keeps_cursor() {
    assert_eq!(
        summarize(&ClipParams::new("c4 e4", "x-x")),
        vec![
            (some(&["C4"]), 128, 127),
            (None, 128, 127),
            (some(&["E4"]), 128, 127),
        ]
    );
}

#[test]
fn single_note_wraps() {
    assert_eq!(
        summarize(&ClipParams::new("c4", "xxx")),
        vec![(some(&["C4"]), 128, 127); 3]
    );
}

#[test]
fn explicit_chord_array() {
    let notes = NoteList::Items(vec![
        NoteItem::Token("c4".to_string()),
        NoteItem::Pitches(vec!["c4".to_string(), "e4".to_string(), "g4".to_string()]),
    ]);
    assert_eq!(
        summarize(&ClipParams::new(notes, "xx")),
        vec![(some(&["C4"]), 128, 127), (some(&["C4", "E4", "G4"]), 128, 127)]
    );
}

fn walk_cursor(node: &PatternNode, n: usize, step: &mut usize, expected: &mut Vec<Option<usize>>) {
    match node {
        PatternNode::Note => {
            expected.push(Some(*step));
            *step = (*step + 1) % n;
        }
        PatternNode::Rest | PatternNode::Sustain => expected.push(None),
        PatternNode::Group(children) => {
            for child in children {
                walk_cursor(child, n, step, expected);
            }
        }
    }
}

#[test]
fn cursor_cycles_regardless_of_rests() {
    let notes = ["c4", "d4", "e4", "f4", "g4"];
    let patterns = ["x-x-x", "[x_][-x]x[[xx]-]", "xxxxxxxxxxx", "-_-x", "[x[x[x[x[x-]]]]]_x"];

    for n in 1..=notes.len() {
        let note_list = notes[..n].join(" ");
        for pattern in patterns {
            let root = expand(pattern).unwrap();
            let mut step = 0;
            let mut expected = Vec::new();
            walk_cursor(&root, n, &mut step, &mut expected);

            let events = compile(&ClipParams::new(note_list.as_str(), pattern)).unwrap();
            let got: Vec<Option<String>> = events
                .iter()
                .map(|e| e.pitches.as_ref().map(|p| p.to_string()))
                .collect();
            let want: Vec<Option<String>> = expected
                .iter()
                .map(|idx| idx.map(|i| notes[i].to_uppercase()))
                .collect();
            assert_eq!(got, want, "pattern {} with {} notes", pattern, n);
        }
    }
}

#[test]
fn duration_is_conserved_per_slot() {
    for subdiv in ["1n", "2n", "4n", "8n", "16n"] {
        for pattern in ["x", "[xxx]", "[x[x[xx]]]", "[[xxx][xx][x_-x-]]", "[-_]"] {
            let params = ClipParams::new("c4", pattern).with_subdiv(subdiv);
            let events = compile(&params).unwrap();
            let expected = params.subdivision().ticks();
            assert_eq!(
                sum(events.iter().map(|e| e.duration)),
                Some(expected),
                "{} at {}",
                pattern,
                subdiv
            );
        }
    }
    assert_eq!(ClipParams::default().subdivision().ticks(), ticks(128));
}

#[test]
fn pitch_spelling_wins_over_chord_name() {
    // C6 is both "C in octave 6" and "C sixth chord"
    assert_eq!(
        summarize(&ClipParams::new("C6 c7", "xx")),
        vec![(some(&["C6"]), 128, 127), (some(&["C7"]), 128, 127)]
    );
}

#[test]
fn syntax_errors_produce_no_events() {
    for pattern in ["x x", "xo", "x[x", "x]", "[]", "", "X"] {
        let result = compile(&ClipParams::new("c4", pattern));
        assert!(
            matches!(result, Err(ClipError::PatternSyntax { .. })),
            "pattern {:?} gave {:?}",
            pattern,
            result
        );
    }
}

#[test]
fn invalid_notes_rejected() {
    for notes in ["c4 q", "H4", "c#", "CM7x"] {
        let result = compile(&ClipParams::new(notes, "x"));
        assert!(
            matches!(result, Err(ClipError::InvalidNote { .. })),
            "notes {:?} gave {:?}",
            notes,
            result
        );
    }
}
