//! Session identity types.

use serde::{Deserialize, Serialize};

use super::lifecycle::Actor;

/// Side of the marketplace an identity acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Service provider.
    Craftsman,
    /// Requesting customer.
    Customer,
}

impl Role {
    /// Lowercase wire value, matching the role field on messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Craftsman => "craftsman",
            Self::Customer => "customer",
        }
    }
}

/// Contact details attached to a session identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactProfile {
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
}

/// Partial update to a contact profile. `None` fields are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactProfilePatch {
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New postal address.
    pub address: Option<String>,
}

/// The signed-in user, as persisted between launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Session id. Demo accounts keep their fixed ids; ad-hoc customers
    /// get a generated one.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Side of the marketplace.
    pub role: Role,
    /// Linked craftsman record id, for craftsman identities.
    #[serde(default)]
    pub craftsman_id: Option<String>,
    /// Saved contact details, prefilled into the booking form.
    #[serde(default)]
    pub profile: ContactProfile,
}

impl Identity {
    /// The actor this identity performs lifecycle transitions as. A
    /// craftsman acts under their craftsman record id so ownership checks
    /// line up with the `craftsman_id` on jobs; everyone else acts under
    /// the session id.
    #[must_use]
    pub fn actor(&self) -> Actor {
        let id = match (&self.role, &self.craftsman_id) {
            (Role::Craftsman, Some(craftsman_id)) => craftsman_id.clone(),
            _ => self.id.clone(),
        };
        Actor {
            id,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn craftsman_acts_under_their_record_id() {
        let identity = Identity {
            id: "demo_craftsman_taro".to_owned(),
            name: "職人太郎".to_owned(),
            role: Role::Craftsman,
            craftsman_id: Some("1".to_owned()),
            profile: ContactProfile::default(),
        };
        let actor = identity.actor();
        assert_eq!(actor.id, "1");
        assert_eq!(actor.role, Role::Craftsman);
    }

    #[test]
    fn customer_acts_under_their_session_id() {
        let identity = Identity {
            id: "user_a1b2".to_owned(),
            name: "Tester".to_owned(),
            role: Role::Customer,
            craftsman_id: None,
            profile: ContactProfile::default(),
        };
        assert_eq!(identity.actor().id, "user_a1b2");
    }

    #[test]
    fn identity_round_trips_through_json() {
        let identity = Identity {
            id: "demo_customer_taro".to_owned(),
            name: "依頼者太郎".to_owned(),
            role: Role::Customer,
            craftsman_id: None,
            profile: ContactProfile {
                phone: "090-1234-5678".to_owned(),
                email: "taro@example.com".to_owned(),
                address: "東京都渋谷区".to_owned(),
            },
        };
        let encoded = serde_json::to_string(&identity).expect("identity encodes");
        let decoded: Identity = serde_json::from_str(&encoded).expect("identity decodes");
        assert_eq!(decoded, identity);
    }
}
