use {
    anyhow::Context as _,
    dotenv::dotenv,
    registration_conformance::{
        log::Logger,
        run,
        scenarios::{self, Context},
        Configuration,
    },
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let config = Configuration::new().context("Failed to load config!")?;
    let mut logger = Logger::init(&config.log_level)?;

    // Optional positional arguments narrow the run to the named scenarios.
    let names: Vec<String> = std::env::args().skip(1).collect();
    let selected = if names.is_empty() {
        scenarios::all()
    } else {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let selected = scenarios::named(&names);
        anyhow::ensure!(!selected.is_empty(), "No scenario matches {:?}", names);
        selected
    };

    let parallel = config.parallel;
    let ctx = Context::new(config)?;
    let summary = run(&ctx, selected, parallel).await;

    for line in summary.to_json_lines()? {
        println!("{line}");
    }
    logger.stop();

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
