use std::io;

use zensend::{ApiKey, MessageBody, Msisdn, Originator, SendOptions, SendSms, ZenSendClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("ZENSEND_API_KEY")?;
    let numbers = required_env("ZENSEND_NUMBERS")?;
    let originator = std::env::var("ZENSEND_ORIGINATOR").unwrap_or_else(|_| "ZenSend".to_owned());
    let message = std::env::var("ZENSEND_MESSAGE")
        .unwrap_or_else(|_| "Hello from the zensend example.".to_owned());

    let client = ZenSendClient::new(ApiKey::new(api_key)?);
    let numbers = numbers
        .split_whitespace()
        .map(Msisdn::new)
        .collect::<Vec<_>>();
    let request = SendSms::new(
        MessageBody::new(message),
        Originator::new(originator),
        numbers,
        SendOptions::default(),
    )?;

    let result = client.send_sms(request).await?;
    println!(
        "txguid: {}, numbers: {}, parts: {}, cost: {}p, balance: {}p",
        result.tx_guid,
        result.numbers,
        result.sms_parts,
        result.cost_in_pence,
        result.new_balance_in_pence
    );

    Ok(())
}
