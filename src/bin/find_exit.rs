use anyhow::{Context, Result};
use clap::Parser;
use labyrinth::{CLIArgs, Position};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut map = labyrinth::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read map from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = Position::new(args.start_row, args.start_col);
    map.tile(&start)
        .with_context(|| format!("Start position{} is outside of the map.", start))?;
    print!("{}", map);

    if map.path_exists(&start) {
        println!("An exit is reachable from{}.", start);
    } else {
        println!("No exit is reachable from{}.", start);
    }

    Ok(())
}
