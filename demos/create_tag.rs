//! Create a ship tag in the FedEx sandbox.
//!
//! This example authenticates with client credentials, prints the prepared
//! request body, submits it, and writes the first label to disk.
//!
//! Run with:
//! FEDEX_CLIENT_ID=... FEDEX_CLIENT_SECRET=... FEDEX_ACCOUNT=... cargo run --example create_tag

use chrono::{Days, Utc};
use fedex_rest::prelude::*;

#[tokio::main]
async fn main() -> fedex_rest::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let account = std::env::var("FEDEX_ACCOUNT")
        .expect("FEDEX_ACCOUNT environment variable required");

    println!("Connecting to FedEx sandbox...");
    let client = FedexClient::from_env(ClientConfig::default())?;

    let ship_date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .expect("date in range");

    let request = CreateTagRequest::new()
        .account_number(account)
        .service_type(ServiceType::FedexGround)
        .packaging_type(PackagingType::YourPackaging)
        .pickup_type(PickupType::DropoffAtFedexLocation)
        .ship_datestamp(ship_date)
        .shipping_charges_payment(PaymentType::Sender)
        .shipper(
            Person::new("SHIPPER NAME")
                .phone_number("1234567890")
                .with_address(
                    Address::new()
                        .city("Collierville")
                        .street_lines(["SHIPPER STREET LINE 1"])
                        .state_or_province("TN")
                        .country_code("US")
                        .postal_code("38017"),
                ),
        )
        .recipients([Person::new("RECIPIENT NAME")
            .phone_number("1234567890")
            .with_address(
                Address::new()
                    .city("Irving")
                    .street_lines(["RECIPIENT STREET LINE 1"])
                    .state_or_province("TX")
                    .country_code("US")
                    .postal_code("75063"),
            )])?
        .line_items([Item::new("lorem Ipsum").with_weight(Weight::pounds(1))])?;

    let preview = request.clone().access_token("preview").prepare()?;
    println!("Request body:\n{}", serde_json::to_string_pretty(&preview.json)?);

    let response = client.ship().create_tag(request).await?;
    println!("Transaction: {}", response.transaction_id);
    for tracking in response.tracking_numbers() {
        println!("  tracking number {}", tracking);
    }

    let documents = response
        .output
        .transaction_shipments
        .iter()
        .flat_map(|s| &s.piece_responses)
        .flat_map(|p| &p.package_documents);

    for document in documents {
        if document.encoded_label.is_some() {
            let bytes = document.decode_label()?;
            let extension = document.doc_type.as_deref().unwrap_or("pdf").to_lowercase();
            let file_name = format!("label.{}", extension);
            std::fs::write(&file_name, bytes).expect("write label");
            println!("Label written to {}", file_name);
            break;
        }
        if let Some(url) = &document.url {
            println!("Label available at {}", url);
            break;
        }
    }

    println!("\nDone!");
    Ok(())
}
