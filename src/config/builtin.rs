//! Compiled-in metadata literal, used when no `metadata.toml` is found.

pub const TITLE: &str = "Jin's Notes";
pub const URL: &str = "https://notes.linjin.me";
pub const LANGUAGE: &str = "en";
pub const DESCRIPTION: &str = "I'm Jin. I build at the gap between how systems should work and how people actually adopt them - where desirable, feasible, and viable converge into sticky innovation that delivers useful outcomes.";

pub const AUTHOR_NAME: &str = "Jin";
pub const AUTHOR_EMAIL: &str = "hey@linjin.me";
pub const AUTHOR_URL: &str = "https://linjin.me/";
