use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the search API.
    Serve {
        /// Address to bind (overrides config)
        #[clap(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[clap(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
    },
    /// Rank posts from a JSON file against a prompt
    Search {
        /// Free-text query
        prompt: String,

        /// Path to a JSON array of posts
        #[clap(short = 'f', long)]
        posts: PathBuf,

        /// Print every post with its score instead of the filtered results
        #[clap(short, long, default_value = "false")]
        scores: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let args = Args::try_parse_from(["post-search", "serve", "--host", "127.0.0.1", "-p", "9000"])
            .unwrap();

        match args.command {
            Command::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_serve_rejects_port_zero() {
        assert!(Args::try_parse_from(["post-search", "serve", "--port", "0"]).is_err());
        assert!(Args::try_parse_from(["post-search", "serve", "-p", "1"]).is_ok());
    }

    #[test]
    fn test_parse_search() {
        let args = Args::try_parse_from([
            "post-search",
            "search",
            "morning yoga",
            "--posts",
            "posts.json",
            "--scores",
        ])
        .unwrap();

        match args.command {
            Command::Search {
                prompt,
                posts,
                scores,
            } => {
                assert_eq!(prompt, "morning yoga");
                assert_eq!(posts, PathBuf::from("posts.json"));
                assert!(scores);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_posts_file() {
        assert!(Args::try_parse_from(["post-search", "search", "yoga"]).is_err());
    }
}
