use birthday_greetings::utils::{logger, validation::Validate};
use birthday_greetings::{
    get_app_service, send_greetings, CliConfig, ConfigProvider, GreeterError, TomlConfig,
};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting birthday-greetings");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), GreeterError> {
    cli.validate()?;

    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            greet(&file_config, cli)
        }
        None => greet(cli, cli),
    }
}

fn greet<C: ConfigProvider>(config: &C, cli: &CliConfig) -> Result<(), GreeterError> {
    let services = get_app_service(config.smtp_host(), config.smtp_port());
    let program = send_greetings(services).with_row_policy(config.row_policy());

    program.run(config.input_path(), cli.today())?;

    tracing::info!("Birthday greetings sent");
    Ok(())
}
