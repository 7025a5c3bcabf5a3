//! One-shot conversion utility
//!
//! Usage: quick_convert <category> <value> <source_unit> <destination_unit>

use unitconv::models::Category;
use unitconv::tools::convert;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() != 4 {
        eprintln!("Usage: quick_convert <category> <value> <source_unit> <destination_unit>");
        eprintln!("Categories: length, weight, temperature");
        eprintln!("Example: quick_convert length 100 Centimeter Inch");
        std::process::exit(2);
    }

    let category = match Category::from_str(&args[0]) {
        Some(category) => category,
        None => {
            eprintln!("Unknown category: {}", args[0]);
            eprintln!("Categories: length, weight, temperature");
            std::process::exit(2);
        }
    };

    match convert::convert_value(category, &args[1], &args[2], &args[3]) {
        Ok(response) => println!("{}", response.display),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
