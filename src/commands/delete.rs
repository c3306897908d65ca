use crate::console::confirm;
use crate::exceptions::DrynessError;

pub async fn run(id: i64, yes: bool, api_url: Option<String>) -> Result<(), DrynessError> {
    let (_, client) = super::connect(api_url.as_deref())?;

    if !yes && !confirm("Are you sure you want to delete this history record?")? {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete(id).await?;
    tracing::info!("Deleted history record {}", id);
    println!("Deleted history record {}.", id);
    Ok(())
}
