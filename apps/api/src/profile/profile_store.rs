use crate::models::profile::{Profile, ProfileKey};

/// Holder for the singleton [`Profile`]. Values are stored as given.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn get(&self) -> &Profile {
        &self.profile
    }

    pub fn set_field(&mut self, key: ProfileKey, value: impl Into<String>) {
        self.profile.set(key, value.into());
    }

    pub fn replace(&mut self, profile: Profile) {
        self.profile = profile;
    }
}
