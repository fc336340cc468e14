//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_COLLECTION_PATH;

/// Browse a saved HTTP request collection and execute requests from the terminal
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the collection file
    #[arg(short, long, default_value = DEFAULT_COLLECTION_PATH)]
    pub collection: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collection_path() {
        let args = Args::parse_from(["courier"]);
        assert_eq!(args.collection, PathBuf::from("collection.json"));
    }

    #[test]
    fn test_collection_flag() {
        let args = Args::parse_from(["courier", "--collection", "apis/demo.json"]);
        assert_eq!(args.collection, PathBuf::from("apis/demo.json"));

        let args = Args::parse_from(["courier", "-c", "other.json"]);
        assert_eq!(args.collection, PathBuf::from("other.json"));
    }
}
