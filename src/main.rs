#[tokio::main]
async fn main() {
    fieldops_backend::run().await;
}
