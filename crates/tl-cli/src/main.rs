//! threadline - reply thread toolkit CLI
//!
//! Browse, search and vote on the reply threads of a social feed, and try
//! out the post composer, against JSON fixtures.
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the replies of post 1
//! threadline thread show replies.json --post 1
//!
//! # Search them
//! threadline thread search replies.json --post 1 python
//!
//! # Press upvote twice, then downvote
//! threadline vote replies.json --post 1 --reply 1a up up down
//! ```

mod commands;
mod render;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
