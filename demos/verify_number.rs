use std::io;
use std::time::Duration;

use zensend::{ApiKey, CreateMsisdnVerification, Msisdn, ZenSendClient, ZenSendError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("ZENSEND_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_NUMBER environment variable is required",
        )
    })?;

    let client = ZenSendClient::new(ApiKey::new(api_key)?);
    let request = CreateMsisdnVerification::new(Msisdn::new(number));
    let session = client.create_msisdn_verification(request).await?.session;
    println!("session: {}", session.as_str());

    // The status call fails until the recipient has completed verification.
    for _ in 0..30 {
        match client.msisdn_verification_status(&session).await {
            Ok(status) => {
                println!("verified: {}", status.msisdn);
                return Ok(());
            }
            Err(ZenSendError::Service(err)) => println!("not verified yet ({err})"),
            Err(err) => return Err(err.into()),
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
    }

    println!("gave up waiting for verification");
    Ok(())
}
