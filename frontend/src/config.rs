use log::{warn, Level};
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const EMBEDDED_CARD: &str = include_str!("../card.json");

/// Everything the card says and where its assets live.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub subject: String,
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub closing: String,
    pub signature: String,
    pub affirmative_label: String,
    pub negative_label: String,
    pub negative_message: String,
    pub modal_label: String,
    pub modal_heading: String,
    pub modal_body: String,
    pub dismiss_label: String,
    pub camera_pending_message: String,
    pub camera_denied_message: String,
    pub audio_src: String,
    pub image_src: String,
    pub image_alt: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "Bow er Kache Maf Cao".to_string(),
            subject: "Subject: Bow er Kache Maf Cao ar Abedon Potro!".to_string(),
            salutation: "Dear Bow Jaan,".to_string(),
            paragraphs: vec![
                "Bow Jaan, ami apnar ek matro jamai botka ekta jamai, apnar ai jamai er dara bhul hoiya gese apnar ai jamai ta onk bhul koira felay kalker jonno. Amare ekto maf kore apnar ai jamai take apnar kase rekhe den, please.".to_string(),
                "Apner jamai er akul ebedon ai je apni please apnar jamai ek maf kore ekto ador kore sundor kore kohta bolar onorud roilo.".to_string(),
            ],
            closing: "Apner Prio:".to_string(),
            signature: "Botka Jamai".to_string(),
            affirmative_label: "Yes".to_string(),
            negative_label: "No".to_string(),
            negative_message: "Amare Plese maf koira deo na".to_string(),
            modal_label: "Forgiveness Modal".to_string(),
            modal_heading: "Thank you for forgiving me...".to_string(),
            modal_body: "I’m beyond grateful to have you in my life. I love you more than words can express.".to_string(),
            dismiss_label: "I Love You".to_string(),
            camera_pending_message: "Waiting for the camera...".to_string(),
            camera_denied_message: "I couldn't see your smile, but I know it's there.".to_string(),
            audio_src: "/your-music-file.mp3".to_string(),
            image_src: "/image.jpg".to_string(),
            image_alt: "Sorry".to_string(),
        }
    }
}

impl CardConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Card text baked into the binary at build time.
pub fn load() -> CardConfig {
    match CardConfig::parse(EMBEDDED_CARD) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid card.json, using built-in text: {}", e);
            CardConfig::default()
        }
    }
}
