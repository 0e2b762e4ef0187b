use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Service {
    #[serde(rename = "Full-Stack Development")]
    #[strum(serialize = "Full-Stack Development")]
    FullStackDevelopment,
    #[serde(rename = "Web Application")]
    #[strum(serialize = "Web Application")]
    WebApplication,
    #[serde(rename = "Social Media Management")]
    #[strum(serialize = "Social Media Management")]
    SocialMediaManagement,
    #[serde(rename = "UI/UX Design")]
    #[strum(serialize = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Cloud & DevOps")]
    #[strum(serialize = "Cloud & DevOps")]
    CloudDevOps,
    #[serde(rename = "Digital Strategy")]
    #[strum(serialize = "Digital Strategy")]
    DigitalStrategy,
    Other,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Budget {
    #[serde(rename = "< ₹50K")]
    #[strum(serialize = "< ₹50K")]
    UnderFiftyThousand,
    #[serde(rename = "₹50K – ₹2L")]
    #[strum(serialize = "₹50K – ₹2L")]
    UpToTwoLakh,
    #[serde(rename = "₹2L – ₹10L")]
    #[strum(serialize = "₹2L – ₹10L")]
    UpToTenLakh,
    #[serde(rename = "₹10L+")]
    #[strum(serialize = "₹10L+")]
    AboveTenLakh,
    #[serde(rename = "Let's discuss")]
    #[strum(serialize = "Let's discuss")]
    LetsDiscuss,
}

/// Form fields, in the order they are rendered and reported.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Budget,
    Message,
}

impl Field {
    /// Fields the relay refuses to send without.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}
