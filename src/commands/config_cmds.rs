use crate::config;
use crate::exceptions::DrynessError;

pub fn show(api_url: Option<String>) -> Result<(), DrynessError> {
    println!("Config file: {}", config::get_config_file().display());

    match config::resolve(api_url.as_deref()) {
        Ok(cfg) => {
            println!("API URL: {} (from {})", cfg.api_url, cfg.source);
            println!("Image base URL: {}", cfg.asset_base_url());
        }
        Err(DrynessError::Configuration(msg)) => println!("API URL: unavailable ({})", msg),
        Err(e) => return Err(e),
    }

    Ok(())
}

pub fn set_url(url: String) -> Result<(), DrynessError> {
    let stored = config::set_api_url(&url)?;
    println!("Saved API URL: {}", stored);
    Ok(())
}

pub fn unset_url() -> Result<(), DrynessError> {
    let previous = config::stored_api_url();
    if config::unset_api_url()? {
        println!(
            "Removed stored API URL: {}",
            previous.unwrap_or_default()
        );
    } else {
        println!("No API URL was stored.");
    }
    Ok(())
}
