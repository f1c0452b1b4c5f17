use serde::{Deserialize, Serialize};

/// Overview sidebar content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overview {
    pub identity: Identity,
    pub tools: Tools,
    pub contact: Vec<ContactLink>,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tools {
    pub main: Vec<String>,
    pub secret_weapons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interaction {
    pub preferred_contact: Option<String>,
    pub response_time: Option<String>,
    pub collaboration_status: Option<String>,
}
