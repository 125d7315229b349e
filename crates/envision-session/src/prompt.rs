//! Prompt construction and generation budgets

use crate::types::ValidSession;

/// System role instruction for every generation
pub const SYSTEM_PROMPT: &str =
    "You are an expert sports psychology coach specializing in visualization and meditation techniques for athletes.";

/// Ceiling kept safely below the synthesis API's 4096-character limit
const MAX_SCRIPT_CHARS: u32 = 3800;

/// Narration pace estimate: ~150 words/min at ~4 chars/word
const CHARS_PER_MINUTE: u32 = 600;

/// Rough token-to-character ratio used for the completion budget
const CHARS_PER_TOKEN: u32 = 4;

/// Character budget for a script of the given duration
pub fn target_chars(duration_minutes: u32) -> u32 {
    MAX_SCRIPT_CHARS.min(duration_minutes.saturating_mul(CHARS_PER_MINUTE))
}

/// Token budget derived from the character budget, capped by configuration
pub fn max_tokens(target_chars: u32, cap: u32) -> u32 {
    cap.min(target_chars / CHARS_PER_TOKEN)
}

/// Build the user prompt embedding the athlete's inputs
pub fn build_prompt(session: &ValidSession, target_chars: u32) -> String {
    let duration = session.duration_minutes;
    let tone = session.voice_style.tone();

    format!(
        "Create a {duration}-minute sports visualization meditation script for {sport}. \n\
         \n\
         Session Type: {session_type}\n\
         Scenario: {scenario}\n\
         Voice Style: {tone}\n\
         \n\
         The script should:\n\
         - Be approximately {duration} minutes when read at a natural pace\n\
         - Be NO MORE than {target_chars} characters in length (this is a hard limit)\n\
         - Use proven sports psychology visualization techniques\n\
         - Guide the athlete through a detailed, immersive visualization\n\
         - Include breathing exercises and mental preparation\n\
         - Be written in second person (\"you\", \"your\")\n\
         - Have natural pauses and transitions\n\
         - Be suitable for audio narration\n\
         \n\
         IMPORTANT: Keep the script concise and under {target_chars} characters. \
         Write only the script text, no titles or metadata. Start directly with the meditation content.",
        sport = session.sport,
        session_type = session.session_type.wire_name(),
        scenario = session.scenario,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SessionType, VoiceStyle};

    fn session(duration_minutes: u32) -> ValidSession {
        ValidSession {
            sport: "boxing".to_owned(),
            session_type: SessionType::PreGame,
            scenario: "title fight in a sold-out arena".to_owned(),
            voice_style: VoiceStyle::Motivational,
            duration_minutes,
        }
    }

    #[test]
    fn short_sessions_scale_with_duration() {
        assert_eq!(target_chars(2), 1200);
        assert_eq!(target_chars(3), 1800);
        assert_eq!(target_chars(4), 2400);
        assert_eq!(target_chars(5), 3000);
    }

    #[test]
    fn long_sessions_hit_the_ceiling() {
        assert_eq!(target_chars(7), 3800);
        assert_eq!(target_chars(u32::MAX), 3800);
    }

    #[test]
    fn token_budget_is_a_quarter_of_the_character_budget() {
        assert_eq!(max_tokens(1200, 2000), 300);
        assert_eq!(max_tokens(3800, 2000), 950);
    }

    #[test]
    fn token_budget_respects_the_configured_cap() {
        assert_eq!(max_tokens(3800, 100), 100);
    }

    #[test]
    fn prompt_embeds_inputs_and_budget() {
        let prompt = build_prompt(&session(3), target_chars(3));

        assert!(prompt.starts_with("Create a 3-minute sports visualization meditation script for boxing."));
        assert!(prompt.contains("Session Type: pre-game"));
        assert!(prompt.contains("Scenario: title fight in a sold-out arena"));
        assert!(prompt.contains("Voice Style: energetic, inspiring, and motivating"));
        assert!(prompt.contains("NO MORE than 1800 characters"));
        assert!(prompt.contains("IMPORTANT: Keep the script concise and under 1800 characters."));
        assert!(prompt.contains("second person"));
    }

    #[test]
    fn prompt_uses_the_fallback_tone_for_unknown_styles() {
        let mut session = session(3);
        session.voice_style = VoiceStyle::Unknown;

        let prompt = build_prompt(&session, target_chars(3));
        assert!(prompt.contains("Voice Style: calm and soothing"));
    }
}
