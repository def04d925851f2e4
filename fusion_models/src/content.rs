use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::macros::{id, nutype_string};

id!(RoleId);
id!(ServiceId);
id!(TeamMemberId);

nutype_string!(RoleTitle(validate(not_empty, len_char_max = 100),));
nutype_string!(ServiceName(validate(not_empty, len_char_max = 100),));
nutype_string!(ServiceDescription(validate(not_empty, len_char_max = 200),));
nutype_string!(TeamMemberName(validate(not_empty, len_char_max = 100),));
nutype_string!(TeamMemberBio(validate(not_empty, len_char_max = 200),));
nutype_string!(SocialLink(validate(not_empty, len_char_max = 100),));

impl Default for SocialLink {
    fn default() -> Self {
        // "#" is the neutral placeholder link used by the site's markup
        Self::try_new("#").unwrap()
    }
}

/// A job role held by team members (e.g. "Designer").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub title: RoleTitle,
    pub active: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// A service offered by the company, displayed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: ServiceName,
    pub description: ServiceDescription,
    pub icon: ServiceIcon,
    pub active: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// The closed set of icon classes a service can be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceIcon {
    #[serde(rename = "lni-cog")]
    Cog,
    #[serde(rename = "lni-stats-up")]
    StatsUp,
    #[serde(rename = "lni-users")]
    Users,
    #[serde(rename = "lni-layers")]
    Layers,
    #[serde(rename = "lni-mobile")]
    Mobile,
    #[serde(rename = "lni-rocket")]
    Rocket,
}

impl ServiceIcon {
    pub const ALL: [Self; 6] = [
        Self::Cog,
        Self::StatsUp,
        Self::Users,
        Self::Layers,
        Self::Mobile,
        Self::Rocket,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cog => "lni-cog",
            Self::StatsUp => "lni-stats-up",
            Self::Users => "lni-users",
            Self::Layers => "lni-layers",
            Self::Mobile => "lni-mobile",
            Self::Rocket => "lni-rocket",
        }
    }
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid service icon {0:?}")]
pub struct ServiceIconFromStrError(pub String);

impl FromStr for ServiceIcon {
    type Err = ServiceIconFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| ServiceIconFromStrError(s.into()))
    }
}

/// A person on the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: TeamMemberName,
    pub role_id: RoleId,
    pub bio: TeamMemberBio,
    pub image_url: Option<Url>,
    pub facebook: SocialLink,
    pub twitter: SocialLink,
    pub instagram: SocialLink,
    pub active: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// A team member joined with the title of their role, as rendered on the
/// landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberProfile {
    #[serde(flatten)]
    pub member: TeamMember,
    pub role_title: RoleTitle,
}
