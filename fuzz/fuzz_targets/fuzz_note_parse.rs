#![no_main]

use libfuzzer_sys::fuzz_target;
use medley_theory::{parse_pitch, Note};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(pitch) = parse_pitch(text) {
        assert!(pitch.tone.pitch_class() < 12);
    }

    // Any accepted note must print notation that parses back to the same pitch.
    if let Ok(note) = text.parse::<Note>() {
        let again: Note = note
            .notation()
            .parse()
            .expect("notation of a parsed note must parse");
        assert_eq!(again.midi_number(), note.midi_number());
    }
});
