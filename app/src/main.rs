#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lector_lib::run().await
}
