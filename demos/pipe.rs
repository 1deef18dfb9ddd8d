use std::{
    error::Error,
    io,
};

use streamio::{
    Closer,
    StdIo,
};

fn main() -> Result<(), Box<dyn Error>> {
    let fmt_subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(fmt_subscriber)?;

    let mut stdin = StdIo::new(io::stdin().lock());
    let mut stdout = StdIo::new(io::stdout().lock());

    let copied = streamio::copy(&mut stdout, &mut stdin)?;
    stdout.close()?;

    eprintln!("Copied {copied} bytes");

    Ok(())
}
