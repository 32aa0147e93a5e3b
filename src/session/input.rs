use crate::session::state::SessionState;

/// Outcome of one committed word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitEvent {
    pub target: String,
    pub typed: String,
    pub correct: bool,
    /// Characters credited toward accuracy for this word.
    pub credited_chars: u32,
}

/// Input commits a word when it ends in exactly one space.
pub fn is_commit(raw: &str) -> bool {
    raw.ends_with(' ') && !raw.ends_with("  ")
}

/// Count of indices where both words have the same character. No
/// alignment: "cot" vs "cat" is 2, "at" vs "cat" is 0.
pub fn positional_matches(typed: &str, target: &str) -> u32 {
    typed
        .chars()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count() as u32
}

/// Apply the full text of the input control to the session. Returns the
/// commit when the text finalized the current word.
pub fn process_input(state: &mut SessionState, raw: &str) -> Option<CommitEvent> {
    state.typed_buffer = raw.to_string();

    if !is_commit(raw) {
        return None;
    }

    // Stall on an exhausted queue; the engine's policy keeps this unreachable.
    let target = state.current_word()?.to_string();
    let typed = raw.trim().to_string();
    let target_len = target.chars().count() as u32;

    state.total_characters += target_len;

    let correct = typed == target;
    let credited_chars = if correct {
        state.correct_word_count += 1;
        state.score += state.tier.points();
        target_len
    } else {
        state.incorrect_word_count += 1;
        positional_matches(&typed, &target)
    };
    state.correct_characters += credited_chars;

    state.cursor += 1;
    state.typed_buffer.clear();

    Some(CommitEvent {
        target,
        typed,
        correct,
        credited_chars,
    })
}
