use msgenc::args::{app, Input};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let m = app().get_matches();
    let input = Input::from_matches(&m)?;
    debug!("Encoding {:?}", input);

    println!("{}", input.encode_hex()?);
    Ok(())
}
