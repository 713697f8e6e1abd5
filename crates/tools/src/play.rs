//! Interactive challenge loop

use aerogame_game::prelude::*;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Totals for one play-through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub rounds: u32,
    pub solved: u32,
    pub attempts: u32,
}

fn start_round<S, R, W>(
    session: &mut Session<S, R>,
    audio_path: &Path,
    out: &mut W,
    stats: &mut PlayStats,
) -> Result<()>
where
    S: WordSource,
    R: Rng,
    W: Write,
{
    let challenge = session.new_challenge()?;
    std::fs::write(audio_path, challenge.audio.as_bytes())
        .with_context(|| format!("Failed to write challenge audio: {:?}", audio_path))?;

    stats.rounds += 1;
    writeln!(
        out,
        "Challenge {}: {:.1}s of Morse written to {}",
        challenge.id,
        challenge.audio.duration_seconds(),
        audio_path.display()
    )?;
    writeln!(out, "Type your answer, :next for a new word, :quit to stop.")?;
    Ok(())
}

/// Run the guessing game, reading answers line by line from `input`.
///
/// Ends on `:quit` or end of input. A correct answer starts a new round.
pub fn run_play<S, R, I, W>(
    session: &mut Session<S, R>,
    audio_path: &Path,
    input: I,
    mut out: W,
) -> Result<PlayStats>
where
    S: WordSource,
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut stats = PlayStats::default();
    start_round(session, audio_path, &mut out, &mut stats)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" => break,
            ":next" => {
                if let Some(challenge) = session.current() {
                    writeln!(out, "The word was {}.", challenge.word)?;
                }
                start_round(session, audio_path, &mut out, &mut stats)?;
            }
            "" => continue,
            answer => {
                stats.attempts += 1;
                match session.submit(answer)? {
                    Verdict::Correct { reward_code } => {
                        stats.solved += 1;
                        match reward_code {
                            Some(code) => writeln!(out, "Correct! Reward code: {}", code)?,
                            None => writeln!(out, "Correct!")?,
                        }
                        start_round(session, audio_path, &mut out, &mut stats)?;
                    }
                    Verdict::Incorrect => writeln!(out, "Wrong, try again.")?,
                }
            }
        }
    }

    info!(
        "Played {} round(s), solved {}, {} answer(s)",
        stats.rounds, stats.solved, stats.attempts
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerogame_codecs::{encode, TimingConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn config() -> TimingConfig {
        TimingConfig {
            sample_rate: 8000,
            ..TimingConfig::default()
        }
    }

    fn session(reward: Option<&str>) -> Session<StaticWords> {
        let session = Session::with_rng(
            StaticWords::new(["sky"]),
            config(),
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        match reward {
            Some(code) => session.with_reward_code(code),
            None => session,
        }
    }

    #[test]
    fn test_full_game() {
        let dir = tempfile::tempdir().unwrap();
        let audio_path = dir.path().join("challenge.wav");
        let mut session = session(Some("1234"));
        let mut out = Vec::new();

        let input = Cursor::new("moon\n\n  Sky \n:next\n:quit\nSKY\n");
        let stats = run_play(&mut session, &audio_path, input, &mut out).unwrap();

        assert_eq!(
            stats,
            PlayStats {
                rounds: 3,
                solved: 1,
                attempts: 2,
            }
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Wrong, try again."));
        assert!(text.contains("Correct! Reward code: 1234"));
        assert!(text.contains("The word was SKY."));

        let written = std::fs::read(&audio_path).unwrap();
        assert_eq!(written, encode("SKY", &config()).unwrap().into_bytes());
    }

    #[test]
    fn test_end_of_input_stops() {
        let dir = tempfile::tempdir().unwrap();
        let audio_path = dir.path().join("c.wav");
        let mut session = session(None);
        let mut out = Vec::new();

        let stats = run_play(&mut session, &audio_path, Cursor::new("sky\n"), &mut out).unwrap();

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.rounds, 2);
        assert!(String::from_utf8(out).unwrap().contains("Correct!\n"));
    }

    #[test]
    fn test_empty_word_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::with_rng(
            StaticWords::new(Vec::<String>::new()),
            config(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();

        let result = run_play(
            &mut session,
            &dir.path().join("c.wav"),
            Cursor::new(""),
            Vec::<u8>::new(),
        );
        assert!(result.is_err());
    }
}
