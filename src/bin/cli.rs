use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    roster::cli::run().await
}
