use rift_battle::battle::Battle;

/// Collects the messages of new log entries in the battle.
pub fn log_messages(battle: &mut Battle) -> Vec<String> {
    battle
        .new_log_entries()
        .map(|entry| entry.message.clone())
        .collect()
}

/// Asserts that new log entries in the battle are equal to the given entries.
///
/// Entries are compared by their string form, which leaves out timestamps.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle
        .new_log_entries()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>();
    let want = want.iter().map(|entry| entry.to_string()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
