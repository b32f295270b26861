use ledger_import::error::{ImportError, Result};
use ledger_import::formats::get_by_key;
use ledger_import::settings::{load_settings, save_settings, settings_path};

pub fn run(format: Option<&str>, currency: Option<&str>) -> Result<()> {
    let mut settings = load_settings();

    if format.is_none() && currency.is_none() {
        println!("Settings ({})", settings_path().display());
        println!("  format:   {}", settings.default_format.as_deref().unwrap_or("(none)"));
        println!("  currency: {}", settings.default_currency);
        return Ok(());
    }

    if let Some(key) = format {
        let format = get_by_key(key).ok_or_else(|| ImportError::UnknownFormat(key.to_string()))?;
        settings.default_format = Some(format.key().to_string());
    }
    if let Some(currency) = currency {
        settings.default_currency = currency.trim().to_uppercase();
    }
    save_settings(&settings)?;
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}
