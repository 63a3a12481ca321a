use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let request = grpc_go_plugin::read_request(std::io::stdin().lock())?;
    let response = grpc_go_plugin::run(&request);
    grpc_go_plugin::write_response(std::io::stdout().lock(), &response)?;
    Ok(())
}
