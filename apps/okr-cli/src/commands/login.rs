// login.rs — Authenticate against the service.

use anyhow::{bail, Result};

use okr_client::{ApiClient, ApiConfig};

pub async fn execute(config: &ApiConfig, email: &str, password: &str) -> Result<()> {
    let client = ApiClient::new(config.clone())?;
    match client.login(email, password).await {
        Ok(Some(user)) if !user.name.is_empty() => {
            println!("Logged in as {} <{}>", user.name, user.email);
            Ok(())
        }
        Ok(_) => {
            println!("Logged in as {email}");
            Ok(())
        }
        Err(error) => {
            eprintln!("{error}");
            bail!("login failed");
        }
    }
}
