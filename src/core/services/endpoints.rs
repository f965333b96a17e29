use urlencoding::encode;

use crate::config::BoardConfig;
use crate::core::models::Participation;

// `t` defeats intermediate caches on top of the no-store request flag
pub fn activities_url(config: &BoardConfig, stamp_millis: i64) -> String {
    config.url(&format!("/activities?t={}", stamp_millis))
}

pub fn signup_url(config: &BoardConfig, participation: &Participation) -> String {
    config.url(&format!(
        "/activities/{}/signup?email={}",
        encode(&participation.activity),
        encode(&participation.email)
    ))
}

pub fn participants_url(config: &BoardConfig, participation: &Participation) -> String {
    config.url(&format!(
        "/activities/{}/participants?email={}",
        encode(&participation.activity),
        encode(&participation.email)
    ))
}
