// Adapters layer: HTTP clients for the job boards.

pub mod headhunter;
pub mod superjob;

use crate::utils::error::Result;
use reqwest::Client;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

pub use headhunter::{HeadHunter, HeadHunterSettings};
pub use superjob::{SuperJob, SuperJobSettings};
