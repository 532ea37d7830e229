#[tokio::main]
async fn main() {
    if let Err(err) = affinity_api::run().await {
        tracing::error!(error = %err, "affinity-api failed");
        std::process::exit(1);
    }
}
