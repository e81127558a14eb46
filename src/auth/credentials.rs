use std::env;

use crate::error::Error;

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Resolves credentials from profile-namespaced environment variables:
/// profile `awsip` and key `api_token` read `AWSIP_API_TOKEN`.
pub struct EnvCredentials {
    profile: String,
}

impl EnvCredentials {
    pub fn new(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.profile, key)
            .to_uppercase()
            .replace('-', "_")
    }
}

impl CredentialManager for EnvCredentials {
    fn get(&self, key: &str) -> Result<String, Error> {
        let name = self.var_name(key);
        env::var(&name).map_err(|_| Error::Credential(format!("{name} is not set")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_var_name_namespacing() {
        let creds = EnvCredentials::new("awsip");
        assert_eq!(creds.var_name("api_token"), "AWSIP_API_TOKEN");

        let creds = EnvCredentials::new("my-profile");
        assert_eq!(creds.var_name("api_token"), "MY_PROFILE_API_TOKEN");
    }

    #[test]
    fn test_get_missing_variable() {
        let creds = EnvCredentials::new("dns_reconcile_test_unset");
        let err = creds.get("api_token").unwrap_err();
        assert_matches!(err, Error::Credential(_));
    }
}
