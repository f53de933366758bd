use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = nest_sdm::cli::AuthorizeCli::parse();
    let exit_code = nest_sdm::run_authorizer(cli).await;
    std::process::exit(exit_code);
}
