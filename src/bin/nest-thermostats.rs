use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = nest_sdm::cli::ReportCli::parse();
    let exit_code = nest_sdm::run_reporter(cli).await;
    std::process::exit(exit_code);
}
