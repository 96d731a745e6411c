#[tokio::main]
async fn main() -> eyre::Result<()> {
    users_server::run().await
}
