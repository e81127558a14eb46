use std::env;

use crate::core::record::RecordType;
use crate::error::Error;

#[derive(Clone)]
pub struct Config {
    pub zone_id: String,
    pub record_name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub oracle_url: String,
    pub api_url: String,
    pub credential_profile: String,
    pub verify_identity: bool,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Config {
            zone_id: require("ZONE_ID")?,
            record_name: require("RECORD_NAME")?,
            record_type: env::var("RECORD_TYPE")
                .unwrap_or_else(|_| "A".to_string())
                .parse()?,
            ttl: env::var("TTL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            oracle_url: env::var("ORACLE_URL")
                .unwrap_or_else(|_| "https://api.ipify.org".to_string()),
            api_url: env::var("RECORD_API_URL")
                .unwrap_or_else(|_| "https://route53.amazonaws.com/2013-04-01".to_string()),
            credential_profile: env::var("CREDENTIAL_PROFILE")
                .unwrap_or_else(|_| "awsip".to_string()),
            verify_identity: env::var("VERIFY_RECORD_IDENTITY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "dns-reconcile.log".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::Config(format!("{name} is not set")))
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                zone_id: String::from("Z123EXAMPLE"),
                record_name: String::from("crib.example.com"),
                record_type: RecordType::A,
                ttl: 300,
                oracle_url: String::from("https://api.ipify.org"),
                api_url: String::from("https://route53.amazonaws.com/2013-04-01"),
                credential_profile: String::from("awsip"),
                verify_identity: false,
                log_file: String::from("dns-reconcile.log"),
            }
        }
    }
}
