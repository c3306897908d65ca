pub mod config_cmds;
pub mod delete;
pub mod history;
pub mod pages;
pub mod predict;

use crate::api::ApiClient;
use crate::config::{self, ApiConfig};
use crate::exceptions::DrynessError;

pub(crate) fn connect(api_url: Option<&str>) -> Result<(ApiConfig, ApiClient), DrynessError> {
    let config = config::resolve(api_url)?;
    let client = ApiClient::new(&config.api_url);
    Ok((config, client))
}
