use geo_map_shapes::{process, Format};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "wkt2shapes")]
/// Reads one WKT geometry per line and writes renderable map shapes
struct Opt {
    /// Output format: `jsonl` or `geojson`
    #[structopt(short, long, default_value = "jsonl")]
    format: Format,

    /// Input file, defaults to stdin
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match opt.input {
        Some(path) => {
            let file = File::open(path)?;
            process(BufReader::new(file), &mut writer, opt.format)?;
        }
        None => {
            let stdin = io::stdin();
            process(stdin.lock(), &mut writer, opt.format)?;
        }
    }
    Ok(())
}
