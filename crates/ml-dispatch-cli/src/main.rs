use anyhow::Result;
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ML_DISPATCH_LOG", "error,ml_dispatch=info"))
        .init();

    let matches = ml_dispatch_cli::build_cli().get_matches();
    let output = ml_dispatch_cli::render(&matches)?;
    println!("{}", output);
    Ok(())
}
