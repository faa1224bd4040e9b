use libpagepatch::config::ApiConfig;
use libpagepatch::error::PagePatchError;

/// Saved config, with the api host replaced when one was passed on the command line
pub fn api_config(api_host: Option<&String>) -> Result<ApiConfig, PagePatchError> {
    let mut config = ApiConfig::get()?;
    if let Some(host) = api_host {
        config.api_host = host.trim_end_matches('/').to_string();
    }
    log::debug!("using api host {}", config.api_host);
    Ok(config)
}

/// The message shown for a failed lookup, empty collections read differently from transport errors
pub fn lookup_error_message(what: &str, target: &str, err: &PagePatchError) -> String {
    if err.is_empty_collection() {
        format!("No {what} found for {target}")
    } else {
        format!("Could not look up {what} for {target}: {err}")
    }
}
