pub fn run() -> anyhow::Result<()> {
    println!("wingit {}", env!("CARGO_PKG_VERSION"));
    println!("Target-species recommendations from eBird history, served over MCP");
    Ok(())
}
