use azure_subnet_provision::azure::ArmNetworkClient;
use azure_subnet_provision::create_subnet;
use log4rs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <resource-group> <subnet-name> <vnet-name> [address-prefix]",
            args[0]
        );
        std::process::exit(2);
    }

    let subscription_id =
        std::env::var("AZURE_SUBSCRIPTION_ID").expect("AZURE_SUBSCRIPTION_ID not set");
    let client = ArmNetworkClient::new(subscription_id);

    let record = create_subnet(
        &client,
        &args[1],
        &args[2],
        &args[3],
        args.get(4).map(|s| s.as_str()),
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
