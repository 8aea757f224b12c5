#[tokio::main]
async fn main() {
    if let Err(e) = studio_medico::run().await {
        eprintln!("studio-medico: {e}");
        std::process::exit(1);
    }
}
