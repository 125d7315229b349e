//! Fixed boxing demonstration sample
//!
//! The sample skips script generation entirely: the narration text is
//! baked in, only synthesis and persistence run, and only once.

/// File name the sample is stored under; exempt from retention sweeps
pub const SAMPLE_FILENAME: &str = "boxing-sample.mp3";

/// Voice used for the sample narration
pub const SAMPLE_VOICE: &str = "echo";

/// Message returned when the sample is first created
pub const SAMPLE_CREATED_MESSAGE: &str = "Boxing sample audio generated successfully";

/// Narration text for the boxing sample
pub const SAMPLE_SCRIPT: &str =
    "Find a comfortable position and close your eyes. Take a deep breath in, and slowly exhale. \n\n\
     You're standing in the ring, feeling the canvas beneath your feet. The crowd's energy surrounds you, \
     but you're focused, calm, and ready. \n\n\
     Take another breath. Feel your body strong, your muscles loose, your mind clear. You've trained for \
     this moment. You know every move, every combination. \n\n\
     Breathe in confidence. Breathe out doubt. You are a champion. You are ready to perform at your \
     absolute best. \n\n\
     When you open your eyes, carry this confidence with you.";
