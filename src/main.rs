#[tokio::main]
async fn main() {
    coffee::start_server().await;
}
