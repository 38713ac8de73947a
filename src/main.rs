pub mod brewing;
pub mod coffee_machine;
pub mod coffee_shop;
pub mod constants;
pub mod demo;
pub mod errors;
pub mod order;
pub mod recipe;
pub mod statistics;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("Error initializing the logger");

    if let Err(error) = demo::run().await {
        error!("[DEMO] Demo failed: {}", error);
    }
}
