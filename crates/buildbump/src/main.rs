#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    buildbump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
}
