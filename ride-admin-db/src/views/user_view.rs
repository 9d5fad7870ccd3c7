use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::user::UserModel;

/// Role selector of the user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFilter {
    /// Every consumer role plus users with no role
    Rider,
    /// Exact role match
    Role(String),
}

impl RoleFilter {
    pub fn matches(&self, user: &UserModel) -> bool {
        match self {
            RoleFilter::Rider => user.is_rider(),
            RoleFilter::Role(role) => user.role() == Some(role.as_str()),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "rider" => RoleFilter::Rider,
            other => RoleFilter::Role(other.to_string()),
        })
    }
}

/// Case-insensitive substring over id, email, name and display name
pub fn user_matches_search(user: &UserModel, term: &str) -> bool {
    let needle = term.to_lowercase();
    user.id.to_string().contains(&needle)
        || [
            user.email.as_deref(),
            user.name.as_deref(),
            user.display_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Users matching the search term (blank matches all) and the role filter
pub fn filter_users<'a>(
    users: &'a [UserModel],
    search: Option<&str>,
    role: Option<&RoleFilter>,
) -> Vec<&'a UserModel> {
    let search = search.filter(|term| !term.trim().is_empty());
    users
        .iter()
        .filter(|user| search.map_or(true, |term| user_matches_search(user, term)))
        .filter(|user| role.map_or(true, |role| role.matches(user)))
        .collect()
}
