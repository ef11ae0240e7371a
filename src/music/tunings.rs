/*
Open-String Tunings
===================

Stringed instruments are tuned by naming the pitch of each open string, from
the lowest (thickest) string to the highest.

  Standard guitar   E A D G B E   six strings, the two E's two octaves apart
  Standard bass     E A D G       four strings, an octave below the guitar's
                                  lowest four

Only the note names matter here; octave numbers are left out, in the same
way a player would say "tune to E A D G B E".
*/

/// Six-string standard tuning, low to high.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Four-string bass tuning, low to high.
pub const BASS_TUNING: [&str; 4] = ["E", "A", "D", "G"];

/// Space-separated form used in tuning messages.
pub fn spoken(tuning: &[&str]) -> String {
    tuning.join(" ")
}
