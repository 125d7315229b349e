use serde::{Deserialize, Serialize};

/// Kind of visualization session being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    PreGame,
    Recovery,
    Skill,
    Confidence,
    Focus,
}

impl SessionType {
    /// Wire name, as it appears in requests and prompts
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::PreGame => "pre-game",
            Self::Recovery => "recovery",
            Self::Skill => "skill",
            Self::Confidence => "confidence",
            Self::Focus => "focus",
        }
    }

    /// Label used in generated titles
    pub const fn title_label(self) -> &'static str {
        match self {
            Self::PreGame => "Pre-Game",
            Self::Recovery => "Recovery",
            Self::Skill => "Skill",
            Self::Confidence => "Confidence",
            Self::Focus => "Focus",
        }
    }
}

/// Narration style requested by the client
///
/// Unknown values fall back to a default voice instead of failing the
/// request, so older clients keep working when styles change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStyle {
    Calm,
    Motivational,
    Focused,
    Gentle,
    #[default]
    #[serde(other)]
    Unknown,
}

impl VoiceStyle {
    /// Voice identifier sent to the synthesizer
    pub const fn voice(self) -> &'static str {
        match self {
            Self::Calm | Self::Unknown => "nova",
            Self::Motivational => "echo",
            Self::Focused => "onyx",
            Self::Gentle => "shimmer",
        }
    }

    /// Tone phrase embedded in the generation prompt
    ///
    /// The fallback phrase is deliberately not the same as the `calm`
    /// phrase; clients relying on either wording keep what they had.
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Calm => "calm, soothing, and peaceful",
            Self::Motivational => "energetic, inspiring, and motivating",
            Self::Focused => "clear, direct, and focused",
            Self::Gentle => "gentle, nurturing, and supportive",
            Self::Unknown => "calm and soothing",
        }
    }
}

/// Inbound payload for the session endpoint
///
/// Required fields arrive as empty defaults rather than rejections so the
/// validation step can answer with the fixed missing-fields message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    /// Sport the athlete competes in
    #[serde(default)]
    pub sport: String,
    /// Kind of session to generate
    #[serde(default)]
    pub session_type: Option<SessionType>,
    /// Free-text scenario to visualize
    #[serde(default)]
    pub scenario: String,
    /// Narration style
    #[serde(default)]
    pub voice_style: VoiceStyle,
    /// Requested length in minutes; zero counts as absent
    #[serde(default)]
    pub duration: Option<u32>,
}

/// A session request that passed validation
#[derive(Debug, Clone)]
pub struct ValidSession {
    pub sport: String,
    pub session_type: SessionType,
    pub scenario: String,
    pub voice_style: VoiceStyle,
    pub duration_minutes: u32,
}

impl SessionRequest {
    /// Check the required fields, filling the duration default
    ///
    /// A missing or zero duration takes the default.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingFields` when sport, session type, or
    /// scenario is absent or blank.
    pub fn validate(self, default_duration: u32) -> Result<ValidSession, crate::error::SessionError> {
        let Some(session_type) = self.session_type else {
            return Err(crate::error::SessionError::MissingFields);
        };

        if self.sport.trim().is_empty() || self.scenario.trim().is_empty() {
            return Err(crate::error::SessionError::MissingFields);
        }

        Ok(ValidSession {
            sport: self.sport,
            session_type,
            scenario: self.scenario,
            voice_style: self.voice_style,
            duration_minutes: self.duration.filter(|&d| d > 0).unwrap_or(default_duration),
        })
    }
}

/// Successful session payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Display title derived from session type and sport
    pub title: String,
    /// Formatted as `"<n> min"`
    pub duration: String,
    /// Public URL of the stored narration
    pub audio_url: String,
    /// Full generated script, before any synthesis truncation
    pub script: String,
}

/// Sample endpoint payload
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SampleResponse {
    /// Sample was already on disk
    Existing {
        exists: bool,
        url: String,
    },
    /// Sample was generated by this call
    Created {
        success: bool,
        url: String,
        message: String,
    },
}

impl SampleResponse {
    /// Payload for an already-seeded sample
    pub fn existing(url: String) -> Self {
        Self::Existing { exists: true, url }
    }

    /// Payload for a freshly generated sample
    pub fn created(url: String) -> Self {
        Self::Created {
            success: true,
            url,
            message: crate::sample::SAMPLE_CREATED_MESSAGE.to_owned(),
        }
    }
}

/// Title shown to the athlete
pub fn session_title(session_type: SessionType, sport: &str) -> String {
    format!(
        "{} Visualization for {}",
        session_type.title_label(),
        capitalize_first(sport)
    )
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
