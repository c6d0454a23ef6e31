use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = flatcopy::cli::parse();
    app::run(args)
}
