use serde::{Deserialize, Serialize};

/// Non-repeating contact and summary fields. Empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub portfolio: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileKey {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Country,
    Linkedin,
    Github,
    Website,
    Portfolio,
    Summary,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 14] = [
        ProfileKey::FirstName,
        ProfileKey::LastName,
        ProfileKey::Email,
        ProfileKey::Phone,
        ProfileKey::Address,
        ProfileKey::City,
        ProfileKey::State,
        ProfileKey::Zip,
        ProfileKey::Country,
        ProfileKey::Linkedin,
        ProfileKey::Github,
        ProfileKey::Website,
        ProfileKey::Portfolio,
        ProfileKey::Summary,
    ];

    /// Wire name, as written in export files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::FirstName => "firstName",
            ProfileKey::LastName => "lastName",
            ProfileKey::Email => "email",
            ProfileKey::Phone => "phone",
            ProfileKey::Address => "address",
            ProfileKey::City => "city",
            ProfileKey::State => "state",
            ProfileKey::Zip => "zip",
            ProfileKey::Country => "country",
            ProfileKey::Linkedin => "linkedin",
            ProfileKey::Github => "github",
            ProfileKey::Website => "website",
            ProfileKey::Portfolio => "portfolio",
            ProfileKey::Summary => "summary",
        }
    }
}

impl Profile {
    pub fn get(&self, key: ProfileKey) -> &str {
        match key {
            ProfileKey::FirstName => &self.first_name,
            ProfileKey::LastName => &self.last_name,
            ProfileKey::Email => &self.email,
            ProfileKey::Phone => &self.phone,
            ProfileKey::Address => &self.address,
            ProfileKey::City => &self.city,
            ProfileKey::State => &self.state,
            ProfileKey::Zip => &self.zip,
            ProfileKey::Country => &self.country,
            ProfileKey::Linkedin => &self.linkedin,
            ProfileKey::Github => &self.github,
            ProfileKey::Website => &self.website,
            ProfileKey::Portfolio => &self.portfolio,
            ProfileKey::Summary => &self.summary,
        }
    }

    fn slot(&mut self, key: ProfileKey) -> &mut String {
        match key {
            ProfileKey::FirstName => &mut self.first_name,
            ProfileKey::LastName => &mut self.last_name,
            ProfileKey::Email => &mut self.email,
            ProfileKey::Phone => &mut self.phone,
            ProfileKey::Address => &mut self.address,
            ProfileKey::City => &mut self.city,
            ProfileKey::State => &mut self.state,
            ProfileKey::Zip => &mut self.zip,
            ProfileKey::Country => &mut self.country,
            ProfileKey::Linkedin => &mut self.linkedin,
            ProfileKey::Github => &mut self.github,
            ProfileKey::Website => &mut self.website,
            ProfileKey::Portfolio => &mut self.portfolio,
            ProfileKey::Summary => &mut self.summary,
        }
    }

    pub fn set(&mut self, key: ProfileKey, value: String) {
        *self.slot(key) = value;
    }

    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }
}
