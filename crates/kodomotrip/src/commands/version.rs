fn version_line() -> String {
    format!("kodomotrip {}", env!("CARGO_PKG_VERSION"))
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", version_line());
    println!("Family outing spots, events and the home-screen install prompt");
    Ok(())
}
