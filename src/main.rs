use lottodb::Archive;
use std::env;
use std::path::Path;
use std::process;

/// Earliest year present in the textual archive.
const FIRST_YEAR: u16 = 1871;
/// Latest year present in the textual archive.
const LAST_YEAR: u16 = 2020;

fn print_usage(prog: &str) {
    eprintln!("Usage: {} <start_year> <end_year> <output.db>", prog);
    eprintln!(
        "  start_year, end_year   years to import, {}-{}",
        FIRST_YEAR, LAST_YEAR
    );
    eprintln!("  output.db              destination database, must not already exist");
    eprintln!();
    eprintln!("Reads <year>.txt files from the current directory, packs every");
    eprintln!("draw into an 8-byte record and verifies the written database.");
}

fn parse_year_arg(arg: &str) -> Option<u16> {
    match arg.parse::<u16>() {
        Ok(year) if (FIRST_YEAR..=LAST_YEAR).contains(&year) => Some(year),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let start_year = match parse_year_arg(&args[1]) {
        Some(year) => year,
        None => {
            eprintln!(
                "ERROR: start year must be in {}-{}, got {:?}",
                FIRST_YEAR, LAST_YEAR, args[1]
            );
            print_usage(&args[0]);
            process::exit(1);
        }
    };
    let end_year = match parse_year_arg(&args[2]) {
        Some(year) => year,
        None => {
            eprintln!(
                "ERROR: end year must be in {}-{}, got {:?}",
                FIRST_YEAR, LAST_YEAR, args[2]
            );
            print_usage(&args[0]);
            process::exit(1);
        }
    };
    if end_year < start_year {
        eprintln!(
            "ERROR: end year {} precedes start year {}",
            end_year, start_year
        );
        process::exit(1);
    }

    let output = Path::new(&args[3]);
    if output.exists() {
        eprintln!(
            "ERROR: output file {} already exists, refusing to overwrite",
            output.display()
        );
        process::exit(1);
    }

    let dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("ERROR: cannot resolve working directory: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Importing years {}-{} from {} into {}",
        start_year,
        end_year,
        dir.display(),
        output.display()
    );

    let archive = match Archive::import(&dir, start_year, end_year) {
        Ok(archive) => archive,
        Err(e) => {
            eprintln!("ERROR: import failed: {}", e);
            process::exit(1);
        }
    };
    println!("Imported {} draws.", archive.draws().len());

    if let Err(e) = archive.save(output) {
        eprintln!("ERROR: save failed: {}", e);
        process::exit(1);
    }
    println!("Saved {} bytes.", archive.draws().len() * 8);

    if let Err(e) = archive.verify(output) {
        eprintln!("ERROR: verification failed: {}", e);
        process::exit(1);
    }
    println!("Verification OK.");
}
