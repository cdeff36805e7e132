use elevenlabs_kit::{get_client, list_models};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads ELEVENLABS_API_KEY from the environment or a local .env file
    println!("Initializing ElevenLabs client...");
    let client = get_client(None)?;

    println!("Requesting model list...");
    match list_models(Some(&client)).await {
        Ok(models) => {
            println!("Available models:");
            for model in models {
                println!("- {} ({})", model.display_id(), model.name.as_deref().unwrap_or_default());
            }
        }
        Err(e) => {
            println!("Error listing models: {}", e);
            println!("Note: This is expected if ELEVENLABS_API_KEY is missing or invalid.");
        }
    }

    Ok(())
}
