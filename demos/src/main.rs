use std::io::{self, Write};

mod facade_demo;
mod strategy_demo;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    if let Err(err) = run(&mut stdout).await {
        // a closed downstream pipe is not a failure
        let broken_pipe = err
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe);
        if !broken_pipe {
            return Err(err);
        }
    }
    Ok(())
}

async fn run(out: &mut impl Write) -> anyhow::Result<()> {
    strategy_demo::run(out).await?;
    facade_demo::run(out).await?;
    Ok(())
}
